//! OpenAPI description of the customer API, served at `/openapi.json`.

use crate::model::Customer;
use crate::response::CreatedBody;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::customer::read,
        crate::handlers::customer::create,
        crate::handlers::customer::update,
        crate::handlers::customer::delete,
    ),
    components(schemas(Customer, CreatedBody)),
    tags((name = "customers", description = "Customer records"))
)]
pub struct ApiDoc;
