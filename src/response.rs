//! Response helpers: created-with-location and the error envelope.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Body of a successful create: the generated id.
#[derive(Serialize, ToSchema)]
pub struct CreatedBody {
    pub id: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// 201 Created with `Location: {collection}/{id}` and `{"id": ...}` as body.
pub fn created(collection: &str, id: String) -> Response {
    let location = format!("{}/{}", collection.trim_end_matches('/'), id);
    let mut resp = (StatusCode::CREATED, Json(CreatedBody { id })).into_response();
    match HeaderValue::from_str(&location) {
        Ok(v) => {
            resp.headers_mut().insert(header::LOCATION, v);
        }
        Err(_) => tracing::warn!(%location, "location is not a valid header value, omitting"),
    }
    resp
}

pub fn error_body(code: &str, message: String) -> ErrorBody {
    ErrorBody {
        error: ErrorDetail {
            code: code.to_string(),
            message,
        },
    }
}
