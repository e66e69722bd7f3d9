//! Request extractors that reject through `AppError`.
//!
//! axum's own `Json` and `Path` extractors answer bad input with plain-text bodies and,
//! for mistyped JSON fields, a 422. These wrappers route every rejection through
//! `AppError::BadRequest` so clients always get a 400 with an `{"error": ...}` body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// JSON request body.
///
/// Rejects a missing or wrong content type, malformed JSON and mistyped fields.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Typed path parameters. Rejects segments that do not parse into `T`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);
