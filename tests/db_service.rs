//! On-disk database smoke test

use egas_server::db::DbService;
use egas_server::db::models::UserCreate;
use egas_server::db::repository::UserRepository;

#[tokio::test]
async fn opens_and_persists_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("egas.db");

    let service = DbService::new(&path.to_string_lossy()).await.unwrap();
    let repo = UserRepository::new(service.db.clone());

    let user = UserCreate {
        username: Some("john".to_string()),
        email: Some("john@example.com".to_string()),
        phonenumber: None,
        address: None,
        password: Some("hunter2!".to_string()),
        avatar: None,
    }
    .into_user()
    .unwrap();
    repo.create(user).await.unwrap();

    let found = repo.find_by_email("john@example.com").await.unwrap();
    assert!(found.is_some());
    assert!(path.exists());
}
