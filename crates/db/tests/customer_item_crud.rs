//! Integration tests for the customer and item stores.
//!
//! Exercises the repository layer against a real database:
//! - Create returns a fresh id and the input fields
//! - Update echo agrees with a subsequent read
//! - Listing hides soft-deleted rows while direct lookup still finds them
//! - Deleting a missing id reports nothing deleted

use std::collections::HashSet;

use ledgerline_db::models::customer::{CreateCustomer, UpdateCustomer};
use ledgerline_db::models::item::{CreateItem, UpdateItem};
use ledgerline_db::repositories::{CustomerRepo, ItemRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_customer(name: &str, balance: f64) -> CreateCustomer {
    CreateCustomer {
        customer_name: name.to_string(),
        balance,
    }
}

fn new_item(name: &str, cost: f64, price: f64, sort: i32) -> CreateItem {
    CreateItem {
        item_name: name.to_string(),
        cost,
        price,
        sort,
    }
}

// ---------------------------------------------------------------------------
// Customer
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_customer_assigns_unused_ids(pool: PgPool) {
    let mut seen = HashSet::new();
    for (name, balance) in [("Alice", 100.0), ("Bob", 0.0), ("Carol", -12.5)] {
        let customer = CustomerRepo::create(&pool, &new_customer(name, balance))
            .await
            .unwrap();
        assert_eq!(customer.customer_name, name);
        assert_eq!(customer.balance, balance);
        assert!(customer.deleted_at.is_none());
        assert!(seen.insert(customer.id), "id {} reused", customer.id);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_customer_echo_matches_get(pool: PgPool) {
    let customer = CustomerRepo::create(&pool, &new_customer("Alice", 100.0))
        .await
        .unwrap();

    let input = UpdateCustomer {
        customer_name: "Alice B.".to_string(),
        balance: 250.75,
    };
    let matched = CustomerRepo::update(&pool, customer.id, &input).await.unwrap();
    assert!(matched);

    let echo = input.echo(customer.id);
    let stored = CustomerRepo::find_by_id(&pool, customer.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.id, echo.id);
    assert_eq!(stored.customer_name, echo.customer_name);
    assert_eq!(stored.balance, echo.balance);
    assert_eq!(stored.created_at, customer.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_customer_matches_nothing(pool: PgPool) {
    let input = UpdateCustomer {
        customer_name: "Ghost".to_string(),
        balance: 1.0,
    };
    let matched = CustomerRepo::update(&pool, 999_999, &input).await.unwrap();
    assert!(!matched);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleted_customer_hidden_from_list_but_resolvable(pool: PgPool) {
    let keep = CustomerRepo::create(&pool, &new_customer("Keep", 1.0))
        .await
        .unwrap();
    let gone = CustomerRepo::create(&pool, &new_customer("Gone", 2.0))
        .await
        .unwrap();

    let deleted = CustomerRepo::delete(&pool, gone.id).await.unwrap().unwrap();
    assert_eq!(deleted.id, gone.id);
    assert_eq!(deleted.customer_name, "Gone");
    assert!(deleted.deleted_at.is_some());

    let listed = CustomerRepo::list(&pool).await.unwrap();
    assert!(listed.iter().all(|c| c.deleted_at.is_none()));
    let ids: Vec<_> = listed.iter().map(|c| c.id).collect();
    assert!(ids.contains(&keep.id));
    assert!(!ids.contains(&gone.id));

    let still_there = CustomerRepo::find_by_id(&pool, gone.id).await.unwrap();
    assert!(still_there.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_customer_returns_none(pool: PgPool) {
    let result = CustomerRepo::delete(&pool, 999_999).await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_customer_twice_second_is_none(pool: PgPool) {
    let customer = CustomerRepo::create(&pool, &new_customer("Twice", 5.0))
        .await
        .unwrap();
    assert!(CustomerRepo::delete(&pool, customer.id).await.unwrap().is_some());
    assert!(CustomerRepo::delete(&pool, customer.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_customer_returns_none(pool: PgPool) {
    let result = CustomerRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Item
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_item_returns_creation_timestamp_only(pool: PgPool) {
    let item = ItemRepo::create(&pool, &new_item("Pen", 1.0, 2.0, 1))
        .await
        .unwrap();
    assert_eq!(item.item_name, "Pen");
    assert_eq!(item.cost, 1.0);
    assert_eq!(item.price, 2.0);
    assert_eq!(item.sort, 1);
    assert!(item.updated_at.is_none());

    let fetched = ItemRepo::find_by_id(&pool, item.id).await.unwrap().unwrap();
    assert_eq!(fetched.created_at, item.created_at);
    assert!(fetched.updated_at.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_items_includes_update_timestamp(pool: PgPool) {
    ItemRepo::create(&pool, &new_item("Pen", 1.0, 2.0, 1))
        .await
        .unwrap();
    let items = ItemRepo::list(&pool).await.unwrap();
    assert_eq!(items.len(), 1);
    assert!(items[0].updated_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_item_echo_matches_get(pool: PgPool) {
    let item = ItemRepo::create(&pool, &new_item("Pen", 1.0, 2.0, 1))
        .await
        .unwrap();

    let input = UpdateItem {
        item_name: "Fountain Pen".to_string(),
        cost: 4.0,
        price: 9.5,
        sort: 3,
    };
    assert!(ItemRepo::update(&pool, item.id, &input).await.unwrap());

    let echo = input.echo(item.id);
    let stored = ItemRepo::find_by_id(&pool, item.id).await.unwrap().unwrap();
    assert_eq!(stored.item_name, echo.item_name);
    assert_eq!(stored.cost, echo.cost);
    assert_eq!(stored.price, echo.price);
    assert_eq!(stored.sort, echo.sort);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleted_item_hidden_from_list_but_resolvable(pool: PgPool) {
    let pen = ItemRepo::create(&pool, &new_item("Pen", 1.0, 2.0, 1))
        .await
        .unwrap();
    let ink = ItemRepo::create(&pool, &new_item("Ink", 0.5, 1.5, 2))
        .await
        .unwrap();

    let deleted = ItemRepo::delete(&pool, ink.id).await.unwrap().unwrap();
    assert_eq!(deleted.item_name, "Ink");
    assert_eq!(deleted.created_at, ink.created_at);

    let ids: Vec<_> = ItemRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(ids, vec![pen.id]);

    assert!(ItemRepo::find_by_id(&pool, ink.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_item_returns_none(pool: PgPool) {
    assert!(ItemRepo::delete(&pool, 999_999).await.unwrap().is_none());
}
