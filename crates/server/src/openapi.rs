use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::computers::list,
        crate::routes::computers::new_form,
        crate::routes::computers::create,
        crate::routes::computers::edit,
        crate::routes::computers::update,
        crate::routes::computers::delete,
        crate::routes::persons::list,
        crate::routes::persons::new_form,
        crate::routes::persons::create,
    ),
    components(schemas(HealthResponse, crate::forms::ComputerForm, crate::forms::PersonForm)),
    tags(
        (name = "health"),
        (name = "computers", description = "Paginated computer catalogue and its forms"),
        (name = "persons", description = "Person list and create form")
    )
)]
pub struct ApiDoc;
