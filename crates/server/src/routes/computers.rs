use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Deserializer};
use service::{
    company_service, computer_service,
    errors::ServiceError,
    pagination::{PageRequest, SortColumn, SortOrder},
};
use tracing::{info, warn};

use crate::{
    errors::JsonApiError,
    flash,
    forms::{ComputerForm, FieldErrors, COMPANY_FIELD},
    state::AppState,
    tx,
    views::{ComputerFormView, ComputerListView},
};

pub const LISTING: &str = "/computers";

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page; blank or below 1 shows the first page
    #[serde(default, deserialize_with = "blank_as_none")]
    pub page: Option<i64>,
    /// name | introduced | discontinued | company.name
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    /// asc | desc
    #[serde(default = "default_order")]
    pub order: String,
    /// case-insensitive substring of the name
    #[serde(default)]
    pub filter: String,
}

fn default_sort_by() -> String { SortColumn::default().as_str().to_string() }
fn default_order() -> String { SortOrder::default().as_str().to_string() }

// `?page=` arrives as an empty string from the pager links.
fn blank_as_none<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    match Option::<String>::deserialize(d)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[utoipa::path(
    get, path = "/computers", tag = "computers",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of computers"),
        (status = 400, description = "Malformed page, unsupported sort column or order")
    )
)]
pub async fn list(
    State(state): State<AppState>,
    jar: CookieJar,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<(CookieJar, Json<ComputerListView>), JsonApiError> {
    let Query(q) = query?;
    let sort: SortColumn = q.sort_by.parse()?;
    let order: SortOrder = q.order.parse()?;
    let req = PageRequest::new(q.page.unwrap_or(1), state.page_size)
        .sorted_by(sort, order)
        .filtered(q.filter.clone());

    let page = tx::read_only(&state.db, move |txn| Box::pin(async move {
        computer_service::page(txn, &req).await
    }))
    .await?;
    info!(event = "computer_list", page = page.page, total = page.total, filter = %q.filter, "listed computers");

    let (jar, flash) = flash::take(jar);
    let view = ComputerListView { page: page.into(), sort_by: sort, order, filter: q.filter, flash };
    Ok((jar, Json(view)))
}

#[utoipa::path(
    get, path = "/computers/new", tag = "computers",
    responses((status = 200, description = "Blank create form"))
)]
pub async fn new_form(State(state): State<AppState>) -> Result<Json<ComputerFormView>, JsonApiError> {
    let companies = tx::read_only(&state.db, |txn| Box::pin(async move {
        company_service::options(txn).await
    }))
    .await?;
    Ok(Json(ComputerFormView { id: None, form: ComputerForm::default(), errors: FieldErrors::default(), companies }))
}

#[utoipa::path(
    post, path = "/computers", tag = "computers",
    request_body(content = crate::forms::ComputerForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created; redirects to the listing"),
        (status = 400, description = "Form re-rendered with field errors")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<ComputerForm>,
) -> Result<Response, JsonApiError> {
    let draft = match form.bind() {
        Ok(draft) => draft,
        Err(errors) => return rerender(&state, None, form, errors).await,
    };

    let saved = tx::read_write(&state.db, move |txn| Box::pin(async move {
        computer_service::save(txn, draft).await
    }))
    .await;
    match saved {
        Ok(c) => {
            info!(event = "computer_created", id = c.id, name = %c.name, "computer created");
            let jar = flash::success(jar, format!("Computer {} has been created", c.name));
            Ok((jar, Redirect::to(LISTING)).into_response())
        }
        Err(ServiceError::UnknownCompany(company_id)) => {
            warn!(event = "computer_create_rejected", company_id, "unknown company");
            rerender(&state, None, form, unknown_company()).await
        }
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    get, path = "/computers/{id}", tag = "computers",
    params(("id" = i64, Path, description = "Computer id")),
    responses(
        (status = 200, description = "Edit form pre-filled"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn edit(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<ComputerFormView>, JsonApiError> {
    let (computer, companies) = tx::read_only(&state.db, move |txn| Box::pin(async move {
        let computer = computer_service::find_by_id(txn, id).await?;
        let companies = company_service::options(txn).await?;
        Ok::<_, ServiceError>((computer, companies))
    }))
    .await?;
    Ok(Json(ComputerFormView {
        id: Some(id),
        form: ComputerForm::fill(&computer),
        errors: FieldErrors::default(),
        companies,
    }))
}

#[utoipa::path(
    post, path = "/computers/{id}", tag = "computers",
    params(("id" = i64, Path, description = "Computer id; always wins over an id in the body")),
    request_body(content = crate::forms::ComputerForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Updated; redirects to the listing"),
        (status = 400, description = "Form re-rendered with field errors"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
    Form(form): Form<ComputerForm>,
) -> Result<Response, JsonApiError> {
    let draft = match form.bind() {
        Ok(draft) => draft,
        Err(errors) => return rerender(&state, Some(id), form, errors).await,
    };

    let updated = tx::read_write(&state.db, move |txn| Box::pin(async move {
        computer_service::update(txn, id, draft).await
    }))
    .await;
    match updated {
        Ok(c) => {
            info!(event = "computer_updated", id = c.id, name = %c.name, "computer updated");
            let jar = flash::success(jar, format!("Computer {} has been updated", c.name));
            Ok((jar, Redirect::to(LISTING)).into_response())
        }
        Err(ServiceError::UnknownCompany(company_id)) => {
            warn!(event = "computer_update_rejected", id, company_id, "unknown company");
            rerender(&state, Some(id), form, unknown_company()).await
        }
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    post, path = "/computers/{id}/delete", tag = "computers",
    params(("id" = i64, Path, description = "Computer id")),
    responses(
        (status = 303, description = "Deleted; redirects to the listing"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<i64>,
) -> Result<(CookieJar, Redirect), JsonApiError> {
    let removed = tx::read_write(&state.db, move |txn| Box::pin(async move {
        computer_service::delete(txn, id).await
    }))
    .await?;
    info!(event = "computer_deleted", id, name = %removed.name, "computer deleted");
    let jar = flash::success(jar, "Computer has been deleted");
    Ok((jar, Redirect::to(LISTING)))
}

fn unknown_company() -> FieldErrors {
    FieldErrors::single(COMPANY_FIELD, "Unknown company")
}

/// 400 with the submitted values, the errors, and fresh company options.
async fn rerender(
    state: &AppState,
    id: Option<i64>,
    form: ComputerForm,
    errors: FieldErrors,
) -> Result<Response, JsonApiError> {
    let companies = tx::read_only(&state.db, |txn| Box::pin(async move {
        company_service::options(txn).await
    }))
    .await?;
    let view = ComputerFormView { id, form, errors, companies };
    Ok((StatusCode::BAD_REQUEST, Json(view)).into_response())
}
