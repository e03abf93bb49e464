//! Migrator registering entity-specific migrations in dependency order.
//! Seed data and indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_company;
mod m20240101_000002_create_computer;
mod m20240101_000003_create_person;
mod m20240101_000004_seed_company;
mod m20240101_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_company::Migration),
            Box::new(m20240101_000002_create_computer::Migration),
            Box::new(m20240101_000003_create_person::Migration),
            Box::new(m20240101_000004_seed_company::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000005_add_indexes::Migration),
        ]
    }
}
