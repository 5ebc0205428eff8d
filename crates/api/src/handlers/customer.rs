//! Handlers for the customer resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ledgerline_core::types::DbId;
use ledgerline_db::models::customer::{CreateCustomer, Customer, CustomerEcho, UpdateCustomer};
use ledgerline_db::repositories::CustomerRepo;

use crate::error::AppResult;
use crate::extract::{JsonBody, PathParam};
use crate::state::AppState;

/// GET /v1/customers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = CustomerRepo::list(&state.pool).await?;
    Ok(Json(customers))
}

/// POST /v1/customer/create
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateCustomer>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let customer = CustomerRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /v1/customer/get/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Customer>> {
    let customer = CustomerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| state.not_found("Customer", id))?;
    Ok(Json(customer))
}

/// PUT /v1/customer/update/{id}
///
/// Responds with the submitted values; the row is not read back.
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<UpdateCustomer>,
) -> AppResult<Json<CustomerEcho>> {
    let matched = CustomerRepo::update(&state.pool, id, &input).await?;
    if !matched && state.config.strict_not_found {
        return Err(state.not_found("Customer", id));
    }
    Ok(Json(input.echo(id)))
}

/// DELETE /v1/customer/delete/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Customer>> {
    let customer = CustomerRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| state.not_found("Customer", id))?;
    Ok(Json(customer))
}
