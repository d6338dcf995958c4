//! Order lifecycle tests against an in-memory database
//!
//! Covers the full create → status change → delete flow plus the listing
//! behaviors: pagination math, case-insensitive search, status filter,
//! uncapped export, and the partial-update total semantics.

use chrono::{NaiveDate, TimeZone, Utc};
use egas_server::db::DbService;
use egas_server::db::models::{CylinderSnapshot, Order, OrderCreate, OrderStatus};
use egas_server::db::repository::{OrderRepository, RepoError};
use egas_server::orders::{OrderListQuery, Pagination, generate_order_id};

fn cylinder(price: f64) -> CylinderSnapshot {
    CylinderSnapshot {
        id: 1,
        name: "Domestic 12.5kg".to_string(),
        weight: "12.5kg".to_string(),
        price,
        image: "/img/cyl-12.png".to_string(),
    }
}

fn order_input(customer: &str, email: &str, quantity: u32, price: f64) -> OrderCreate {
    OrderCreate {
        customer_name: Some(customer.to_string()),
        email: Some(email.to_string()),
        phone: Some("0771234567".to_string()),
        address: Some("12 Lake Rd".to_string()),
        city: Some("Colombo".to_string()),
        postal_code: Some("00300".to_string()),
        delivery_date: Some(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()),
        special_instructions: None,
        quantity: Some(quantity),
        cylinder: Some(cylinder(price)),
        user_id: None,
    }
}

async fn repo() -> OrderRepository {
    let db = DbService::memory().await.expect("in-memory db");
    OrderRepository::new(db.db)
}

async fn insert(repo: &OrderRepository, customer: &str, email: &str) -> Order {
    let order = order_input(customer, email, 2, 1482.0)
        .into_order(generate_order_id(), Utc::now())
        .unwrap();
    repo.create(order).await.unwrap()
}

#[tokio::test]
async fn create_status_change_delete_flow() {
    let repo = repo().await;

    let created = insert(&repo, "John Doe", "john@example.com").await;
    assert_eq!(created.total_amount, 2964.0);
    assert_eq!(created.status, OrderStatus::Confirmed);
    let id = created.id.as_ref().unwrap().to_string();

    let shipped = repo.update_status(&id, OrderStatus::Shipped).await.unwrap();
    assert_eq!(shipped.status, OrderStatus::Shipped);

    let fetched = repo.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(fetched.status, OrderStatus::Shipped);

    assert!(repo.delete(&id).await.unwrap());
    assert!(repo.find_by_id(&id).await.unwrap().is_none());
    assert!(matches!(
        repo.delete(&id).await,
        Err(RepoError::NotFound(_))
    ));
}

#[tokio::test]
async fn second_page_of_fifteen_returns_the_trailing_five() {
    let repo = repo().await;
    for i in 0..15 {
        insert(&repo, &format!("Customer {i}"), &format!("c{i}@example.com")).await;
    }

    let query = OrderListQuery {
        page: 2,
        limit: 10,
        ..Default::default()
    };
    let (orders, total) = repo.list(&query, None).await.unwrap();
    assert_eq!(orders.len(), 5);
    assert_eq!(total, 15);

    let pagination = Pagination::compute(query.page, query.limit, orders.len(), total);
    assert_eq!(pagination.current_page, 2);
    assert_eq!(pagination.total_pages, 2);
    assert!(!pagination.has_next);
    assert!(pagination.has_prev);
}

#[tokio::test]
async fn search_matches_case_insensitively() {
    let repo = repo().await;
    insert(&repo, "John Doe", "john@example.com").await;
    insert(&repo, "Jane Perera", "jane@example.com").await;

    let query = OrderListQuery {
        search: "JOHN".to_string(),
        ..Default::default()
    };
    let (orders, total) = repo.list(&query, None).await.unwrap();
    assert_eq!(total, 1);
    assert_eq!(orders[0].customer_name, "John Doe");

    // matches the generated reference too
    let by_ref = OrderListQuery {
        search: orders[0].order_id.to_lowercase(),
        ..Default::default()
    };
    let (_, total) = repo.list(&by_ref, None).await.unwrap();
    assert_eq!(total, 1);
}

#[tokio::test]
async fn status_filter_narrows_the_listing() {
    let repo = repo().await;
    let a = insert(&repo, "A", "a@example.com").await;
    insert(&repo, "B", "b@example.com").await;

    let id = a.id.as_ref().unwrap().to_string();
    repo.update_status(&id, OrderStatus::Delivered)
        .await
        .unwrap();

    let query = OrderListQuery::default();
    let (orders, total) = repo
        .list(&query, Some(OrderStatus::Delivered))
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(orders[0].status, OrderStatus::Delivered);
}

#[tokio::test]
async fn partial_update_leaves_the_total_stale() {
    let repo = repo().await;
    let created = insert(&repo, "John Doe", "john@example.com").await;
    let id = created.id.as_ref().unwrap().to_string();

    // quantity alone: stored total untouched
    let patch = serde_json::from_value(serde_json::json!({ "quantity": 3 })).unwrap();
    let updated = repo.update(&id, patch).await.unwrap();
    assert_eq!(updated.quantity, 3);
    assert_eq!(updated.total_amount, 2964.0);

    // quantity plus cylinder: total recomputed
    let patch = serde_json::from_value(serde_json::json!({
        "quantity": 3,
        "cylinder": {
            "id": 1,
            "name": "Domestic 12.5kg",
            "weight": "12.5kg",
            "price": 1482.0,
            "image": "/img/cyl-12.png"
        }
    }))
    .unwrap();
    let updated = repo.update(&id, patch).await.unwrap();
    assert_eq!(updated.total_amount, 4446.0);
}

#[tokio::test]
async fn caller_supplied_total_is_ignored() {
    let repo = repo().await;
    let created = insert(&repo, "John Doe", "john@example.com").await;
    let id = created.id.as_ref().unwrap().to_string();

    let patch =
        serde_json::from_value(serde_json::json!({ "totalAmount": 1.0, "city": "Galle" }))
            .unwrap();
    let updated = repo.update(&id, patch).await.unwrap();
    assert_eq!(updated.city, "Galle");
    assert_eq!(updated.total_amount, 2964.0);
}

#[tokio::test]
async fn lookup_by_generated_reference() {
    let repo = repo().await;
    let created = insert(&repo, "John Doe", "john@example.com").await;

    let found = repo
        .find_by_order_id(&created.order_id)
        .await
        .unwrap()
        .expect("order by reference");
    assert_eq!(found.id, created.id);

    assert!(repo.find_by_order_id("EG0000000000").await.unwrap().is_none());
}

#[tokio::test]
async fn stats_group_counts_and_revenue_by_status() {
    let repo = repo().await;
    insert(&repo, "A", "a@example.com").await;
    insert(&repo, "B", "b@example.com").await;
    let c = insert(&repo, "C", "c@example.com").await;
    repo.update_status(
        &c.id.as_ref().unwrap().to_string(),
        OrderStatus::Delivered,
    )
    .await
    .unwrap();

    let stats = repo.stats().await.unwrap();
    assert_eq!(stats.total_orders, 3);
    assert_eq!(stats.total_revenue, 3.0 * 2964.0);

    let confirmed = stats
        .by_status
        .iter()
        .find(|b| b.status == OrderStatus::Confirmed)
        .unwrap();
    assert_eq!(confirmed.count, 2);
    assert_eq!(confirmed.total_amount, 2.0 * 2964.0);
}

#[tokio::test]
async fn export_ignores_the_page_cap() {
    let repo = repo().await;
    for i in 0..15 {
        insert(&repo, &format!("Customer {i}"), &format!("c{i}@example.com")).await;
    }

    let orders = repo
        .export(&OrderListQuery::default(), None)
        .await
        .unwrap();
    assert_eq!(orders.len(), 15);

    let csv = egas_server::orders::orders_to_csv(&orders);
    assert_eq!(csv.trim_end().lines().count(), 16);
}

#[tokio::test]
async fn export_date_range_bounds_are_inclusive() {
    let repo = repo().await;
    for (i, day) in [10u32, 15, 20].into_iter().enumerate() {
        let order = order_input(&format!("Customer {i}"), &format!("c{i}@example.com"), 1, 1482.0)
            .into_order(
                generate_order_id(),
                Utc.with_ymd_and_hms(2025, 2, day, 9, 30, 0).unwrap(),
            )
            .unwrap();
        repo.create(order).await.unwrap();
    }

    let query = OrderListQuery {
        start_date: NaiveDate::from_ymd_opt(2025, 2, 15),
        end_date: NaiveDate::from_ymd_opt(2025, 2, 20),
        ..Default::default()
    };
    let orders = repo.export(&query, None).await.unwrap();
    assert_eq!(orders.len(), 2);
    assert!(orders.iter().all(|o| o.email != "c0@example.com"));

    // a lone bound does not narrow anything
    let query = OrderListQuery {
        start_date: NaiveDate::from_ymd_opt(2025, 2, 15),
        ..Default::default()
    };
    assert_eq!(repo.export(&query, None).await.unwrap().len(), 3);
}

#[tokio::test]
async fn orders_for_one_user_newest_first() {
    let repo = repo().await;

    for i in 0..3 {
        let mut input = order_input(&format!("Alice {i}"), "alice@example.com", 1, 1482.0);
        input.user_id = Some("user:alice".parse().unwrap());
        let order = input.into_order(generate_order_id(), Utc::now()).unwrap();
        repo.create(order).await.unwrap();
    }
    insert(&repo, "Bob", "bob@example.com").await;

    let (orders, total) = repo.find_by_user("alice", 1, 10).await.unwrap();
    assert_eq!(total, 3);
    assert!(orders.iter().all(|o| o.email == "alice@example.com"));
}
