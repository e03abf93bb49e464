//! Form binding: raw urlencoded fields in, drafts or per-field errors out.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use models::{computer::{self, ComputerDraft}, person::PersonDraft};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const COMPUTER_DATE_FORMAT: &str = "%Y-%m-%d";
pub const PERSON_DATE_FORMAT: &str = "%Y/%m/%d";

pub const COMPANY_FIELD: &str = "company.id";

const REQUIRED: &str = "This field is required";
const INVALID_DATE: &str = "Invalid date value";
const INVALID_VALUE: &str = "Invalid value";

/// Messages per field name, as shown next to the form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(field, message);
        errors
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

/// Computer form as submitted. An `id` field in the body is ignored.
#[derive(Clone, Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ComputerForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub introduced: String,
    #[serde(default)]
    pub discontinued: String,
    #[serde(default, rename = "company.id")]
    pub company_id: String,
}

impl ComputerForm {
    /// Pre-fill from a stored row (edit form).
    pub fn fill(m: &computer::Model) -> Self {
        Self {
            name: m.name.clone(),
            introduced: format_date(m.introduced, COMPUTER_DATE_FORMAT),
            discontinued: format_date(m.discontinued, COMPUTER_DATE_FORMAT),
            company_id: m.company_id.map(|id| id.to_string()).unwrap_or_default(),
        }
    }

    pub fn bind(&self) -> Result<ComputerDraft, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", REQUIRED);
        } else if name.chars().count() > computer::NAME_MAX_LEN {
            errors.add("name", format!("Maximum length is {}", computer::NAME_MAX_LEN));
        }
        let introduced = parse_date(&mut errors, "introduced", &self.introduced, COMPUTER_DATE_FORMAT);
        let discontinued = parse_date(&mut errors, "discontinued", &self.discontinued, COMPUTER_DATE_FORMAT);
        let company_id = match self.company_id.trim() {
            "" => None,
            raw => match raw.parse::<i64>() {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.add(COMPANY_FIELD, INVALID_VALUE);
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ComputerDraft::new(name)
            .introduced(introduced)
            .discontinued(discontinued)
            .company(company_id))
    }
}

/// Person form as submitted; `done` is an HTML checkbox.
#[derive(Clone, Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct PersonForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nick: String,
    #[serde(default)]
    pub done: Option<String>,
    /// yyyy/MM/dd; blank means today
    #[serde(default, rename = "dueDate")]
    pub due_date: String,
}

impl PersonForm {
    pub fn bind(&self) -> Result<PersonDraft, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", REQUIRED);
        }
        let due_date = parse_date(&mut errors, "dueDate", &self.due_date, PERSON_DATE_FORMAT);
        let nick = Some(self.nick.trim().to_string()).filter(|n| !n.is_empty());

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(PersonDraft::new(name)
            .nick(nick)
            .done(checkbox(self.done.as_deref()))
            .due_date(due_date))
    }
}

fn checkbox(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some("true" | "on" | "1" | "yes"))
}

/// Blank input is `None`; anything else must parse with `fmt`.
fn parse_date(errors: &mut FieldErrors, field: &str, raw: &str, fmt: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, fmt) {
        Ok(d) => Some(d),
        Err(_) => {
            errors.add(field, INVALID_DATE);
            None
        }
    }
}

fn format_date(d: Option<NaiveDate>, fmt: &str) -> String {
    d.map(|d| d.format(fmt).to_string()).unwrap_or_default()
}
