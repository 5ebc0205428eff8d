//! Request extractors whose rejections render as [`AppError`] JSON.
//!
//! Axum's stock `Path`, `Query` and `Json` reject with plain-text bodies.
//! These wrappers keep the `{ "error": ..., "code": ... }` shape for
//! malformed input and short-circuit before any storage call.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `Path` extractor with JSON rejections (400).
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);

/// `Query` extractor with JSON rejections (400).
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);

/// `Json` body extractor with JSON rejections (400).
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
