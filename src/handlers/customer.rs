//! Customer handlers: translate requests into service calls. Status mapping for
//! failures lives in `AppError`'s `IntoResponse`.

use crate::error::AppError;
use crate::model::Customer;
use crate::response::{created, CreatedBody};
use crate::routes::CUSTOMERS_BASE_PATH;
use crate::service::ID_IN_CREATE_REQUEST;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

/// Every payload problem (syntax, content type, wrong field types) is a 400.
fn body_to_map(payload: Result<Json<Value>, JsonRejection>) -> Result<Map<String, Value>, AppError> {
    let Json(value) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::Validation("body must be a JSON object".into())),
    }
}

fn customer_from_map(body: Map<String, Value>) -> Result<Customer, AppError> {
    serde_json::from_value(Value::Object(body))
        .map_err(|e| AppError::Validation(format!("invalid customer: {}", e)))
}

#[utoipa::path(
    get,
    path = "/customers/v1/{id}",
    tag = "customers",
    params(("id" = String, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 404, description = "No customer with this id")
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, AppError> {
    let customer = state.customers.get(&id).await?;
    Ok(Json(customer))
}

#[utoipa::path(
    post,
    path = "/customers/v1",
    tag = "customers",
    request_body = Customer,
    responses(
        (status = 201, description = "Customer created; Location points at it", body = CreatedBody),
        (status = 400, description = "Payload carried an id or was not a valid customer")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let mut body = body_to_map(payload)?;
    // any id, whatever its JSON type, is refused; null and "" count as absent
    match body.remove("id") {
        None | Some(Value::Null) => {}
        Some(Value::String(s)) if s.is_empty() => {}
        Some(_) => return Err(AppError::Validation(ID_IN_CREATE_REQUEST.into())),
    }
    let saved = state.customers.add(customer_from_map(body)?).await?;
    let id = saved
        .id
        .ok_or_else(|| AppError::Internal("stored customer has no id".into()))?;
    Ok(created(CUSTOMERS_BASE_PATH, id))
}

/// The path id wins over any id in the body.
#[utoipa::path(
    put,
    path = "/customers/v1/{id}",
    tag = "customers",
    request_body = Customer,
    params(("id" = String, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer replaced", body = Customer),
        (status = 400, description = "Payload was not a valid customer"),
        (status = 404, description = "No customer with this id")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Customer>, AppError> {
    let mut body = body_to_map(payload)?;
    body.remove("id");
    let stored = state.customers.update(customer_from_map(body)?.with_id(id)).await?;
    Ok(Json(stored))
}

#[utoipa::path(
    delete,
    path = "/customers/v1/{id}",
    tag = "customers",
    params(("id" = String, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer deleted"),
        (status = 404, description = "No customer with this id")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.customers.delete(&id).await?;
    Ok(StatusCode::OK)
}
