//! Request extractors whose rejections use the `AppError` JSON envelope.

use axum::extract::FromRequest;

use crate::errors::AppError;

/// `axum::Json` with rejections turned into `AppError`, so malformed bodies
/// get the same `{"error": {code, message}}` shape as every other failure.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
