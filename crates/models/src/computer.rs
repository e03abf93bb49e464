use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{company, errors};

pub const NAME_MAX_LEN: usize = 255;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "computer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub introduced: Option<Date>,
    pub discontinued: Option<Date>,
    pub company_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Company }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Company => Entity::belongs_to(company::Entity)
                .from(Column::CompanyId)
                .to(company::Column::Id)
                .into(),
        }
    }
}

impl Related<company::Entity> for Entity {
    fn to() -> RelationDef { Relation::Company.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("name must be at most {NAME_MAX_LEN} characters")));
    }
    Ok(())
}

/// Values a computer row is written from.
///
/// Built with `ComputerDraft::new(name)` and the chained setters; the
/// service layer decides whether it becomes an insert or a full overwrite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComputerDraft {
    pub name: String,
    pub introduced: Option<Date>,
    pub discontinued: Option<Date>,
    pub company_id: Option<i64>,
}

impl ComputerDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), introduced: None, discontinued: None, company_id: None }
    }

    pub fn introduced(self, introduced: Option<Date>) -> Self {
        Self { introduced, ..self }
    }

    pub fn discontinued(self, discontinued: Option<Date>) -> Self {
        Self { discontinued, ..self }
    }

    pub fn company(self, company_id: Option<i64>) -> Self {
        Self { company_id, ..self }
    }

    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate_name(&self.name)
    }

    /// Active model carrying every field. `id = None` leaves the key to the database.
    pub fn into_active_model(self, id: Option<i64>) -> ActiveModel {
        ActiveModel {
            id: id.map(Set).unwrap_or(NotSet),
            name: Set(self.name.trim().to_string()),
            introduced: Set(self.introduced),
            discontinued: Set(self.discontinued),
            company_id: Set(self.company_id),
        }
    }
}

impl From<&Model> for ComputerDraft {
    fn from(m: &Model) -> Self {
        ComputerDraft::new(m.name.clone())
            .introduced(m.introduced)
            .discontinued(m.discontinued)
            .company(m.company_id)
    }
}
