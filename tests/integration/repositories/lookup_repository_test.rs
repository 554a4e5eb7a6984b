// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::setup_db;
use puzzle_shelf::domain::models::identity::UserIdentity;
use puzzle_shelf::domain::repositories::holder_repository::HolderRepository;
use puzzle_shelf::domain::repositories::maker_repository::MakerRepository;
use puzzle_shelf::infrastructure::repositories::holder_repo_impl::HolderRepositoryImpl;
use puzzle_shelf::infrastructure::repositories::maker_repo_impl::MakerRepositoryImpl;

/// 查找或创建制造商是幂等的
#[tokio::test]
async fn test_get_or_create_maker_is_idempotent() {
    let repo = MakerRepositoryImpl::new(setup_db().await);

    let first = repo.get_or_create("Jan van Haasteren").await.unwrap();
    let second = repo.get_or_create("Jan van Haasteren").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.country, None);
    assert_eq!(repo.list().await.unwrap().len(), 1);
    assert_eq!(
        repo.find_by_name("Jan van Haasteren").await.unwrap(),
        Some(first.clone())
    );
    assert_eq!(repo.find_by_id(first.id).await.unwrap(), Some(first));
}

/// 制造商名称按精确匹配，大小写不同视为不同制造商
#[tokio::test]
async fn test_maker_lookup_is_exact() {
    let repo = MakerRepositoryImpl::new(setup_db().await);

    repo.get_or_create("Jan van Haasteren").await.unwrap();
    repo.get_or_create("jan van haasteren").await.unwrap();

    assert_eq!(repo.list().await.unwrap().len(), 2);
    assert!(repo.find_by_name("Ravensburger").await.unwrap().is_none());
}

/// 查找或创建借阅人是幂等的，已有借阅人不会被身份信息覆盖
#[tokio::test]
async fn test_get_or_create_holder_is_idempotent() {
    let repo = HolderRepositoryImpl::new(setup_db().await);
    let identity = UserIdentity::new("user-123")
        .with_user_name("testuser")
        .with_email("testuser@example.com");

    let first = repo.get_or_create(&identity).await.unwrap();
    let renamed = identity.clone().with_user_name("renamed");
    let second = repo.get_or_create(&renamed).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(second.name, "testuser");
    assert_eq!(second.contact.as_deref(), Some("testuser@example.com"));
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_holder_name_falls_back_to_email_then_id() {
    let repo = HolderRepositoryImpl::new(setup_db().await);

    let by_email = repo
        .get_or_create(&UserIdentity::new("user-1").with_email("one@example.com"))
        .await
        .unwrap();
    let by_id = repo.get_or_create(&UserIdentity::new("user-2")).await.unwrap();

    assert_eq!(by_email.name, "one@example.com");
    assert_eq!(by_id.name, "user-2");
    assert_eq!(by_id.contact, None);
    assert_eq!(
        repo.find_by_user_id("user-2").await.unwrap().map(|h| h.id),
        Some(by_id.id)
    );
    assert!(repo.find_by_user_id("user-3").await.unwrap().is_none());
}
