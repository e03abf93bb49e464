use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Computer: listing sorts by name by default
        manager
            .create_index(
                Index::create()
                    .name("idx_computer_name")
                    .table(Computer::Table)
                    .col(Computer::Name)
                    .to_owned(),
            )
            .await?;

        // Computer: FK lookups from company
        manager
            .create_index(
                Index::create()
                    .name("idx_computer_company")
                    .table(Computer::Table)
                    .col(Computer::CompanyId)
                    .to_owned(),
            )
            .await?;

        // Company: options list is ordered by name
        manager
            .create_index(
                Index::create()
                    .name("idx_company_name")
                    .table(Company::Table)
                    .col(Company::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_computer_name").table(Computer::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_computer_company").table(Computer::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_company_name").table(Company::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Computer { Table, Name, CompanyId }

#[derive(DeriveIden)]
enum Company { Table, Name }
