//! Route definitions for the customer resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::customer;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customers", get(customer::list))
        .route("/customer/create", post(customer::create))
        .route("/customer/update/{id}", put(customer::update))
        .route("/customer/delete/{id}", delete(customer::delete))
        .route("/customer/get/{id}", get(customer::get_by_id))
}
