//! Create `person` table.
//!
//! Column names follow the legacy person schema (`person_id`, `reg_date`, ...).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(big_integer(Person::PersonId).primary_key().auto_increment())
                    .col(string_len(Person::PersonName, 255).not_null())
                    .col(ColumnDef::new(Person::PersonNick).string_len(255).null())
                    .col(boolean(Person::CompleteFlag).not_null().default(false))
                    .col(date(Person::RegDate).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Person::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Person { Table, PersonId, PersonName, PersonNick, CompleteFlag, RegDate }
