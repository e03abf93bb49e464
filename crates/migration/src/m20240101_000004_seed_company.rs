//! Seed the `company` table so the computer form has options on a fresh database.
use sea_orm_migration::prelude::*;

const COMPANIES: &[&str] = &[
    "Apple Inc.",
    "Thinking Machines",
    "RCA",
    "Netronics",
    "Tandy Corporation",
    "Commodore International",
    "MOS Technology",
    "Micro Instrumentation and Telemetry Systems",
    "IMS Associates, Inc.",
    "Digital Equipment Corporation",
    "Lincoln Laboratory",
    "Moore School of Electrical Engineering",
    "IBM",
    "Amiga Corporation",
    "Canon",
    "Nokia",
    "Sony",
    "OQO",
    "NeXT",
    "Atari",
    "Acorn computer",
    "Timex Sinclair",
    "Nintendo",
    "Sinclair Research Ltd",
    "Xerox",
    "Hewlett-Packard",
    "Zemmix",
    "ACVS",
    "Sanyo",
    "Cray",
    "Evans & Sutherland",
    "E.S.R. Inc.",
    "OMRON",
    "BBN Technologies",
    "Lenovo Group",
    "ASUS",
    "Amstrad",
    "Sun Microsystems",
    "Texas Instruments",
    "HTC Corporation",
    "Research In Motion",
    "Samsung Electronics",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(Company::Table).columns([Company::Name]);
        for name in COMPANIES {
            insert.values_panic([(*name).into()]);
        }
        manager.exec_stmt(insert.to_owned()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Company::Table)
            .and_where(Expr::col(Company::Name).is_in(COMPANIES.iter().copied()))
            .to_owned();
        manager.exec_stmt(delete).await
    }
}

#[derive(DeriveIden)]
enum Company { Table, Name }
