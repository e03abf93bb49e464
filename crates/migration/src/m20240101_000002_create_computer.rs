//! Create `computer` table with an optional FK to `company`.
//!
//! Deleting a company that still owns computers is rejected.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Computer::Table)
                    .if_not_exists()
                    .col(big_integer(Computer::Id).primary_key().auto_increment())
                    .col(string_len(Computer::Name, 255).not_null())
                    .col(ColumnDef::new(Computer::Introduced).date().null())
                    .col(ColumnDef::new(Computer::Discontinued).date().null())
                    .col(ColumnDef::new(Computer::CompanyId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_computer_company")
                            .from(Computer::Table, Computer::CompanyId)
                            .to(Company::Table, Company::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Computer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Computer { Table, Id, Name, Introduced, Discontinued, CompanyId }

#[derive(DeriveIden)]
enum Company { Table, Id }
