//! View documents returned by the handlers: everything a page template needs.

use models::person;
use serde::Serialize;
use service::{
    company_service::CompanyOption,
    computer_service::ComputerWithCompany,
    pagination::{Page, SortColumn, SortOrder},
};

use crate::forms::{ComputerForm, FieldErrors, PersonForm};

#[derive(Debug, Serialize)]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub has_prev: bool,
    pub has_next: bool,
    pub display: String,
}

impl<T> From<Page<T>> for PageView<T> {
    fn from(p: Page<T>) -> Self {
        let (has_prev, has_next, display) = (p.has_prev(), p.has_next(), p.display_x_to_y_of_z());
        Self { items: p.items, total: p.total, page: p.page, page_size: p.page_size, has_prev, has_next, display }
    }
}

#[derive(Debug, Serialize)]
pub struct ComputerListView {
    #[serde(flatten)]
    pub page: PageView<ComputerWithCompany>,
    pub sort_by: SortColumn,
    pub order: SortOrder,
    pub filter: String,
    pub flash: Option<String>,
}

/// Create form (`id = None`) or edit form of computer `id`.
#[derive(Debug, Serialize)]
pub struct ComputerFormView {
    pub id: Option<i64>,
    pub form: ComputerForm,
    pub errors: FieldErrors,
    pub companies: Vec<CompanyOption>,
}

#[derive(Debug, Serialize)]
pub struct PersonListView {
    pub persons: Vec<person::Model>,
    pub flash: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PersonFormView {
    pub form: PersonForm,
    pub errors: FieldErrors,
}
