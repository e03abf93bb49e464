use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use axum_extra::extract::cookie::CookieJar;
use service::person_service;
use tracing::{debug, info};

use crate::{
    errors::JsonApiError,
    flash,
    forms::{FieldErrors, PersonForm},
    state::AppState,
    tx,
    views::{PersonFormView, PersonListView},
};

pub const LISTING: &str = "/persons";

#[utoipa::path(
    get, path = "/persons", tag = "persons",
    responses((status = 200, description = "All persons in insertion order"))
)]
pub async fn list(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<PersonListView>), JsonApiError> {
    let persons = tx::read_only(&state.db, |txn| Box::pin(async move {
        person_service::list(txn).await
    }))
    .await?;
    let (jar, flash) = flash::take(jar);
    Ok((jar, Json(PersonListView { persons, flash })))
}

#[utoipa::path(
    get, path = "/persons/new", tag = "persons",
    responses((status = 200, description = "Blank person form"))
)]
pub async fn new_form() -> Json<PersonFormView> {
    Json(PersonFormView { form: PersonForm::default(), errors: FieldErrors::default() })
}

#[utoipa::path(
    post, path = "/persons", tag = "persons",
    request_body(content = crate::forms::PersonForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created; redirects to the person list"),
        (status = 400, description = "Form re-rendered with field errors")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<PersonForm>,
) -> Result<Response, JsonApiError> {
    let draft = match form.bind() {
        Ok(draft) => draft,
        Err(errors) => {
            return Ok((StatusCode::BAD_REQUEST, Json(PersonFormView { form, errors })).into_response());
        }
    };
    debug!(?draft, "binding person form");

    let p = tx::read_write(&state.db, move |txn| Box::pin(async move {
        person_service::create(txn, draft).await
    }))
    .await?;
    info!(event = "person_created", id = p.id, name = %p.name, "person created");
    let jar = flash::success(jar, format!("Person {} has been created", p.name));
    Ok((jar, Redirect::to(LISTING)).into_response())
}
