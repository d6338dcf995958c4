//! CRUD repository tests against an in-memory database
//!
//! Uniqueness rules, password hashing, weak task references, and the audit
//! trail.

use chrono::{NaiveDate, Utc};
use egas_server::db::DbService;
use egas_server::db::models::{
    AuditAction, AuditActorType, AuditRecord, DriverCreate, EmployeeCreate, InventoryItemCreate,
    TaskCreate, UserCreate,
};
use egas_server::db::repository::{
    AuditRepository, DriverRepository, EmployeeRepository, InventoryRepository, RepoError,
    TaskRepository, UserRepository,
};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

async fn db() -> Surreal<Db> {
    DbService::memory().await.expect("in-memory db").db
}

fn user_input(email: &str) -> UserCreate {
    UserCreate {
        username: Some("john".to_string()),
        email: Some(email.to_string()),
        phonenumber: Some("0771234567".to_string()),
        address: Some("12 Lake Rd".to_string()),
        password: Some("hunter2!".to_string()),
        avatar: None,
    }
}

fn employee_input(emp_id: &str, email: &str, nic: &str) -> EmployeeCreate {
    EmployeeCreate {
        emp_id: Some(emp_id.to_string()),
        name: Some("Jane Perera".to_string()),
        contact_no: Some("0719876543".to_string()),
        dob: Some(NaiveDate::from_ymd_opt(1990, 5, 14).unwrap()),
        address: Some("45 Hill St".to_string()),
        email: Some(email.to_string()),
        nic: Some(nic.to_string()),
        emp_role: Some("Manager".to_string()),
        marital_status: Some("Single".to_string()),
        gender: Some("Female".to_string()),
    }
}

fn driver_input(nic: &str) -> DriverCreate {
    DriverCreate {
        name: Some("Sunil".to_string()),
        nic: Some(nic.to_string()),
        contact_no: Some("0765554443".to_string()),
        email: None,
        vehicle_no: Some("WP-1234".to_string()),
        license_no: Some("B123456".to_string()),
    }
}

#[tokio::test]
async fn user_email_must_be_unique() {
    let repo = UserRepository::new(db().await);

    let created = repo.create(user_input("john@example.com").into_user().unwrap())
        .await
        .unwrap();
    // stored as a hash, never echoed back in cleartext
    assert!(created.password.starts_with("$argon2"));

    let err = repo
        .create(user_input("john@example.com").into_user().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));
}

#[tokio::test]
async fn user_update_rehashes_password_and_keeps_email_rule() {
    let repo = UserRepository::new(db().await);
    let a = repo
        .create(user_input("a@example.com").into_user().unwrap())
        .await
        .unwrap();
    repo.create(user_input("b@example.com").into_user().unwrap())
        .await
        .unwrap();

    let id = a.id.as_ref().unwrap().to_string();

    // changing to an email another account holds is rejected
    let patch = serde_json::from_value(serde_json::json!({ "email": "b@example.com" })).unwrap();
    assert!(matches!(
        repo.update(&id, patch).await,
        Err(RepoError::Duplicate(_))
    ));

    // keeping your own email is not a conflict
    let patch = serde_json::from_value(serde_json::json!({ "email": "a@example.com" })).unwrap();
    assert!(repo.update(&id, patch).await.is_ok());

    let patch =
        serde_json::from_value(serde_json::json!({ "password": "new-password" })).unwrap();
    let updated = repo.update(&id, patch).await.unwrap();
    assert!(updated.password.starts_with("$argon2"));
    assert_ne!(updated.password, a.password);
}

#[tokio::test]
async fn user_summaries_resolve_known_ids_only() {
    let repo = UserRepository::new(db().await);
    let a = repo
        .create(user_input("a@example.com").into_user().unwrap())
        .await
        .unwrap();
    repo.create(user_input("b@example.com").into_user().unwrap())
        .await
        .unwrap();

    let known = a.id.clone().unwrap();
    let dangling: surrealdb::RecordId = "user:ghost".parse().unwrap();
    let summaries = repo
        .find_summaries(vec![known.clone(), dangling])
        .await
        .unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].id, known);
    assert_eq!(summaries[0].username, "john");
    assert_eq!(summaries[0].email, "a@example.com");

    assert!(repo.find_summaries(Vec::new()).await.unwrap().is_empty());
}

#[tokio::test]
async fn employee_identity_fields_are_unique() {
    let repo = EmployeeRepository::new(db().await);
    repo.create(
        employee_input("EMP001", "jane@example.com", "905141234V")
            .into_employee()
            .unwrap(),
    )
    .await
    .unwrap();

    for dup in [
        employee_input("EMP001", "other@example.com", "111111111V"),
        employee_input("EMP002", "jane@example.com", "222222222V"),
        employee_input("EMP003", "third@example.com", "905141234V"),
    ] {
        let err = repo
            .create(dup.into_employee().unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }
}

#[tokio::test]
async fn employee_signin_lookup_accepts_emp_id_or_email() {
    let repo = EmployeeRepository::new(db().await);
    repo.create(
        employee_input("EMP001", "jane@example.com", "905141234V")
            .into_employee()
            .unwrap(),
    )
    .await
    .unwrap();

    let by_emp_id = repo.find_by_username("EMP001").await.unwrap().unwrap();
    assert_eq!(by_emp_id.nic, "905141234V");

    let by_email = repo
        .find_by_username("jane@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.emp_id, "EMP001");

    assert!(repo.find_by_username("EMP999").await.unwrap().is_none());
}

#[tokio::test]
async fn driver_nic_must_be_unique() {
    let repo = DriverRepository::new(db().await);
    repo.create(driver_input("851234567V").into_driver().unwrap())
        .await
        .unwrap();

    let err = repo
        .create(driver_input("851234567V").into_driver().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));
}

#[tokio::test]
async fn inventory_rejects_negative_numbers() {
    let repo = InventoryRepository::new(db().await);

    let bad = InventoryItemCreate {
        name: Some("Domestic 12.5kg".to_string()),
        weight: Some("12.5kg".to_string()),
        price: Some(-1.0),
        stock: None,
        image: None,
        description: None,
    };
    assert!(bad.into_item().is_err());

    let item = InventoryItemCreate {
        name: Some("Domestic 12.5kg".to_string()),
        weight: Some("12.5kg".to_string()),
        price: Some(1482.0),
        stock: Some(10),
        image: None,
        description: None,
    };
    let created = repo.create(item.into_item().unwrap()).await.unwrap();
    let id = created.id.as_ref().unwrap().to_string();

    let patch = serde_json::from_value(serde_json::json!({ "stock": -5 })).unwrap();
    assert!(matches!(
        repo.update(&id, patch).await,
        Err(RepoError::Validation(_))
    ));
}

#[tokio::test]
async fn task_defaults_and_weak_references() {
    let repo = TaskRepository::new(db().await);

    let task = TaskCreate {
        title: Some("Deliver to Colombo 03".to_string()),
        description: None,
        // driver record does not exist; the reference is kept anyway
        driver_id: Some("driver:ghost".parse().unwrap()),
        order_id: Some("EG1234567890".to_string()),
        delivery_date: Some(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()),
        status: None,
    };
    let created = repo.create(task.into_task().unwrap()).await.unwrap();
    assert_eq!(created.status, "Pending");
    assert!(created.driver_id.is_some());

    let missing = TaskCreate {
        title: None,
        description: None,
        driver_id: None,
        order_id: None,
        delivery_date: None,
        status: None,
    };
    assert!(missing.into_task().is_err());
}

#[tokio::test]
async fn audit_trail_is_appended_and_queryable() {
    let database = db().await;
    let repo = AuditRepository::new(database);

    repo.record(AuditRecord {
        id: None,
        order_id: "EG1234567890".to_string(),
        action: AuditAction::Create,
        user_type: AuditActorType::User,
        changes: None,
        previous_data: None,
        new_data: Some(serde_json::json!({ "quantity": 2 })),
        timestamp: Utc::now(),
    })
    .await;
    repo.record(AuditRecord {
        id: None,
        order_id: "EG1234567890".to_string(),
        action: AuditAction::StatusChange,
        user_type: AuditActorType::Admin,
        changes: Some(serde_json::json!({ "from": "Confirmed", "to": "Shipped" })),
        previous_data: None,
        new_data: None,
        timestamp: Utc::now(),
    })
    .await;

    let trail = repo.find_by_order("EG1234567890").await.unwrap();
    assert_eq!(trail.len(), 2);
    assert!(trail.iter().any(|r| r.action == AuditAction::Create));
    assert!(
        trail
            .iter()
            .any(|r| r.action == AuditAction::StatusChange)
    );

    assert!(repo.find_by_order("EG0000000000").await.unwrap().is_empty());
}
