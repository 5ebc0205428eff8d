//! Handlers for transactions and the joined transaction views.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ledgerline_core::types::DbId;
use ledgerline_db::models::transaction::{
    CreateTransaction, Transaction, TransactionEcho, UpdateTransaction,
};
use ledgerline_db::models::transaction_view::TransactionView;
use ledgerline_db::repositories::{TransactionRepo, TransactionViewRepo};

use crate::error::AppResult;
use crate::extract::{JsonBody, PathParam, QueryParams};
use crate::query::TransactionFilterParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /v1/transactions
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Transaction>>> {
    let transactions = TransactionRepo::list(&state.pool).await?;
    Ok(Json(transactions))
}

/// POST /v1/transaction/create
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateTransaction>,
) -> AppResult<(StatusCode, Json<Transaction>)> {
    let transaction = TransactionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// GET /v1/transaction/get/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Transaction>> {
    let transaction = TransactionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| state.not_found("Transaction", id))?;
    Ok(Json(transaction))
}

/// PUT /v1/transaction/update/{id}
///
/// Writes `qty` and `amount`, then echoes the request body keyed by `id`.
/// The customer and item ids in the body are neither stored nor checked.
pub async fn update(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
    JsonBody(input): JsonBody<UpdateTransaction>,
) -> AppResult<Json<TransactionEcho>> {
    let matched = TransactionRepo::update(&state.pool, id, &input).await?;
    if !matched && state.config.strict_not_found {
        return Err(state.not_found("Transaction", id));
    }
    Ok(Json(input.echo(id)))
}

/// DELETE /v1/transaction/delete/{id}
///
/// Soft delete. Succeeds for ids that do not exist.
pub async fn delete(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<MessageResponse>> {
    TransactionRepo::soft_delete(&state.pool, id).await?;
    Ok(Json(MessageResponse {
        message: "Transaction deleted successfully",
    }))
}

/// GET /v1/transaction/details
pub async fn details(State(state): State<AppState>) -> AppResult<Json<Vec<TransactionView>>> {
    let rows = TransactionViewRepo::list_details(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /v1/transaction/filter?id=&customer_name=&item_name=
pub async fn filter(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<TransactionFilterParams>,
) -> AppResult<Json<Vec<TransactionView>>> {
    let filter = params.into_filter()?;
    let rows = TransactionViewRepo::filter(&state.pool, &filter).await?;
    Ok(Json(rows))
}
