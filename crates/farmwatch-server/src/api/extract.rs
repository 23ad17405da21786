//! Request extractors
//!
//! Thin wrappers over axum's `Json`, `Path` and `Query` whose rejections are
//! reported as [`AppError::Validation`], so every undecodable request gets a
//! 422 with the usual error body.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query},
    Json,
};

use crate::error::AppError;

#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
