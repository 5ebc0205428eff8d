pub mod customer;
pub mod health;
pub mod item;
pub mod transaction;

use axum::Router;

use crate::state::AppState;

/// Build the `/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /customers                          list active customers
/// /customer/create                    create (POST)
/// /customer/update/{id}               update (PUT)
/// /customer/delete/{id}               soft delete (DELETE)
/// /customer/get/{id}                  get
///
/// /items                              list active items
/// /item/create                        create (POST)
/// /item/update/{id}                   update (PUT)
/// /item/delete/{id}                   soft delete (DELETE)
/// /item/get/{id}                      get
///
/// /transactions                       list all transactions
/// /transaction/create                 create (POST)
/// /transaction/update/{id}            update (PUT)
/// /transaction/delete/{id}            soft delete (DELETE)
/// /transaction/get/{id}               get
/// /transaction/details                joined view
/// /transaction/filter                 joined view, filtered by query string
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(customer::router())
        .merge(item::router())
        .merge(transaction::router())
}
