//! Pagination utilities for service layer
//!
//! `PageRequest` carries the listing inputs (page, size, sort, filter) and
//! normalizes them; `Page` carries one page of rows plus the helpers the
//! listing view needs.

use std::{fmt, str::FromStr};

use sea_orm::Order;
use serde::Serialize;

use crate::errors::ServiceError;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Columns the listing may be ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum SortColumn {
    #[default]
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "introduced")]
    Introduced,
    #[serde(rename = "discontinued")]
    Discontinued,
    #[serde(rename = "company.name")]
    CompanyName,
}

impl SortColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Name => "name",
            SortColumn::Introduced => "introduced",
            SortColumn::Discontinued => "discontinued",
            SortColumn::CompanyName => "company.name",
        }
    }
}

impl FromStr for SortColumn {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortColumn::Name),
            "introduced" => Ok(SortColumn::Introduced),
            "discontinued" => Ok(SortColumn::Discontinued),
            "company.name" | "company" => Ok(SortColumn::CompanyName),
            other => Err(ServiceError::Validation(format!("unsupported sort column: {other}"))),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(ServiceError::Validation(format!("unsupported sort order: {other}"))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl From<SortOrder> for Order {
    fn from(o: SortOrder) -> Self {
        match o {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

/// Listing parameters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page index; anything below 1 is treated as 1
    pub page: i64,
    /// rows per page
    pub page_size: u64,
    pub sort: SortColumn,
    pub order: SortOrder,
    /// case-insensitive substring matched against the name
    pub filter: String,
}

impl PageRequest {
    pub fn new(page: i64, page_size: u64) -> Self {
        Self { page, page_size, ..Default::default() }
    }

    pub fn sorted_by(self, sort: SortColumn, order: SortOrder) -> Self {
        Self { sort, order, ..self }
    }

    pub fn filtered(self, filter: impl Into<String>) -> Self {
        Self { filter: filter.into(), ..self }
    }

    /// Clamp to sane values; returns `(page, page_size, offset)`.
    ///
    /// The page is capped so the offset still fits the database's signed
    /// 64-bit OFFSET; pages past the data are simply empty.
    pub fn normalize(&self) -> (u64, u64, u64) {
        let page_size = self.page_size.clamp(1, MAX_PAGE_SIZE);
        let last_addressable = i64::MAX as u64 / page_size;
        let page = (self.page.max(1) as u64).min(last_addressable);
        (page, page_size, (page - 1) * page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort: SortColumn::default(),
            order: SortOrder::default(),
            filter: String::new(),
        }
    }
}

/// One page of rows together with the total row count under the same filter.
#[derive(Clone, Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
}

impl<T> Page<T> {
    pub fn has_prev(&self) -> bool { self.page > 1 }

    pub fn has_next(&self) -> bool { self.page.saturating_mul(self.page_size) < self.total }

    /// e.g. `"11 to 20 of 574"`
    pub fn display_x_to_y_of_z(&self) -> String {
        let start = self.page.saturating_sub(1).saturating_mul(self.page_size).saturating_add(1);
        let end = start.saturating_add(self.page_size.min(self.items.len() as u64)).saturating_sub(1);
        format!("{} to {} of {}", start, end, self.total)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
        }
    }
}
