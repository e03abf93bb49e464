use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "person")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "person_id")]
    pub id: i64,
    #[sea_orm(column_name = "person_name")]
    pub name: String,
    #[sea_orm(column_name = "person_nick")]
    pub nick: Option<String>,
    #[sea_orm(column_name = "complete_flag")]
    pub done: bool,
    #[sea_orm(column_name = "reg_date")]
    pub due_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonDraft {
    pub name: String,
    pub nick: Option<String>,
    pub done: bool,
    pub due_date: Option<Date>,
}

impl PersonDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), nick: None, done: false, due_date: None }
    }

    pub fn nick(self, nick: Option<String>) -> Self {
        Self { nick, ..self }
    }

    pub fn done(self, done: bool) -> Self {
        Self { done, ..self }
    }

    pub fn due_date(self, due_date: Option<Date>) -> Self {
        Self { due_date, ..self }
    }

    pub fn validate(&self) -> Result<(), errors::ModelError> {
        if self.name.trim().is_empty() {
            return Err(errors::ModelError::Validation("name required".into()));
        }
        Ok(())
    }

    /// A missing due date falls back to `today`.
    pub fn into_active_model(self, today: Date) -> ActiveModel {
        let nick = self.nick.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());
        ActiveModel {
            id: NotSet,
            name: Set(self.name.trim().to_string()),
            nick: Set(nick),
            done: Set(self.done),
            due_date: Set(self.due_date.unwrap_or(today)),
        }
    }
}
