//! Route definitions for the item resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::item;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", get(item::list))
        .route("/item/create", post(item::create))
        .route("/item/update/{id}", put(item::update))
        .route("/item/delete/{id}", delete(item::delete))
        .route("/item/get/{id}", get(item::get_by_id))
}
