// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::setup_db;
use chrono::Utc;
use puzzle_shelf::domain::models::identity::UserIdentity;
use puzzle_shelf::domain::models::puzzle::NewPuzzle;
use puzzle_shelf::domain::repositories::checkout_repository::CheckoutRepository;
use puzzle_shelf::domain::repositories::puzzle_repository::PuzzleRepository;
use puzzle_shelf::infrastructure::repositories::checkout_repo_impl::CheckoutRepositoryImpl;
use puzzle_shelf::infrastructure::database::entities::{puzzle, puzzle_holder, puzzle_maker};
use puzzle_shelf::infrastructure::repositories::puzzle_repo_impl::PuzzleRepositoryImpl;
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};

fn new_puzzle(name: &str, url: &str) -> NewPuzzle {
    NewPuzzle {
        name: name.to_string(),
        description: format!("Jan van Haasteren – {} – 1000 stukjes puzzel", name),
        piece_count: 1000,
        difficulty_rating: None,
        product_url: url.to_string(),
        image_url: String::new(),
        article_number: 1110100325,
        year: 2024,
        artist: "Rob Derks".to_string(),
    }
}

#[tokio::test]
async fn test_create_with_checkout_and_lookups() {
    let db = setup_db().await;
    let repo = PuzzleRepositoryImpl::new(db.clone());
    let url = "https://janvanhaasteren.nl/puzzel/de-verbouwing/";

    assert!(!repo.exists_by_product_url(url).await.unwrap());

    let imported = repo
        .create_with_checkout(
            &new_puzzle("De verbouwing", url),
            "Jan van Haasteren",
            &UserIdentity::new("user-1"),
            Utc::now(),
        )
        .await
        .unwrap();

    assert!(repo.exists_by_product_url(url).await.unwrap());
    assert_eq!(
        repo.find_by_product_url(url).await.unwrap(),
        Some(imported.puzzle.clone())
    );
    assert_eq!(
        repo.find_by_id(imported.puzzle.id).await.unwrap(),
        Some(imported.puzzle.clone())
    );
    assert_eq!(imported.puzzle.article_number, 1110100325);
    assert!(repo.find_by_id(imported.puzzle.id + 100).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_is_ordered_by_name() {
    let repo = PuzzleRepositoryImpl::new(setup_db().await);
    let identity = UserIdentity::new("user-1");

    for (name, url) in [
        ("Robin Hood Festival", "https://example.com/r"),
        ("De verbouwing", "https://example.com/v"),
        ("Het Ruimtestation", "https://example.com/h"),
    ] {
        repo.create_with_checkout(&new_puzzle(name, url), "Jan van Haasteren", &identity, Utc::now())
            .await
            .unwrap();
    }

    let names: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(
        names,
        vec!["De verbouwing", "Het Ruimtestation", "Robin Hood Festival"]
    );
}

/// 删除拼图时级联删除其借阅记录
#[tokio::test]
async fn test_delete_cascades_to_checkouts() {
    let db = setup_db().await;
    let repo = PuzzleRepositoryImpl::new(db.clone());
    let checkouts = CheckoutRepositoryImpl::new(db.clone());

    let imported = repo
        .create_with_checkout(
            &new_puzzle("Robin Hood Festival", "https://example.com/r"),
            "Jan van Haasteren",
            &UserIdentity::new("user-1"),
            Utc::now(),
        )
        .await
        .unwrap();
    assert_eq!(
        checkouts.find_by_puzzle(imported.puzzle.id).await.unwrap().len(),
        1
    );

    assert!(repo.delete(imported.puzzle.id).await.unwrap());
    assert!(!repo.delete(imported.puzzle.id).await.unwrap());

    assert!(repo.find_by_id(imported.puzzle.id).await.unwrap().is_none());
    assert!(checkouts
        .find_by_id(imported.checkout.id)
        .await
        .unwrap()
        .is_none());
    assert!(checkouts
        .find_open_by_holder(imported.holder.id)
        .await
        .unwrap()
        .is_empty());
}

/// 借阅记录写入失败时，制造商、借阅人与拼图一并回滚
#[tokio::test]
async fn test_failed_checkout_insert_rolls_back_import() {
    let db = setup_db().await;
    let repo = PuzzleRepositoryImpl::new(db.clone());

    db.execute_unprepared("DROP TABLE puzzle_checkouts")
        .await
        .unwrap();

    let result = repo
        .create_with_checkout(
            &new_puzzle("Robin Hood Festival", "https://example.com/r"),
            "Jan van Haasteren",
            &UserIdentity::new("user-1"),
            Utc::now(),
        )
        .await;

    assert!(result.is_err());
    assert_eq!(puzzle::Entity::find().count(db.as_ref()).await.unwrap(), 0);
    assert_eq!(
        puzzle_maker::Entity::find().count(db.as_ref()).await.unwrap(),
        0
    );
    assert_eq!(
        puzzle_holder::Entity::find().count(db.as_ref()).await.unwrap(),
        0
    );
    assert!(!repo
        .exists_by_product_url("https://example.com/r")
        .await
        .unwrap());
}
