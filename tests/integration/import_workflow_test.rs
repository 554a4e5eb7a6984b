// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_shelf, scraped, StubScraper};
use puzzle_shelf::domain::models::identity::UserIdentity;
use puzzle_shelf::domain::services::import_service::ImportError;
use puzzle_shelf::infrastructure::database::entities::{
    puzzle, puzzle_checkout, puzzle_holder, puzzle_maker,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

const ROBIN_HOOD: &str = "https://janvanhaasteren.nl/puzzel/robin-hood-festival/";
const RUIMTESTATION: &str = "https://janvanhaasteren.nl/puzzel/het-ruimtestation/";

async fn row_counts(db: &DatabaseConnection) -> (u64, u64, u64, u64) {
    (
        puzzle::Entity::find().count(db).await.unwrap(),
        puzzle_maker::Entity::find().count(db).await.unwrap(),
        puzzle_holder::Entity::find().count(db).await.unwrap(),
        puzzle_checkout::Entity::find().count(db).await.unwrap(),
    )
}

fn alice() -> UserIdentity {
    UserIdentity::new("user-alice")
        .with_user_name("alice")
        .with_email("alice@example.com")
}

/// 首次导入创建拼图、制造商、借阅人与借阅记录各一条
#[tokio::test]
async fn test_import_creates_all_records() {
    let shelf = create_test_shelf(
        StubScraper::default().with_page(scraped("Robin Hood Festival", ROBIN_HOOD)),
    )
    .await;

    let imported = shelf
        .import_service
        .import_puzzle_by_url(ROBIN_HOOD, &alice())
        .await
        .unwrap();

    assert_eq!(imported.puzzle.name, "Robin Hood Festival");
    assert_eq!(imported.puzzle.product_url, ROBIN_HOOD);
    assert_eq!(imported.puzzle.maker_id, imported.maker.id);
    assert_eq!(imported.puzzle.difficulty_rating, None);
    assert_eq!(imported.maker.name, "Jan van Haasteren");
    assert_eq!(imported.holder.user_id, "user-alice");
    assert_eq!(imported.holder.name, "alice");
    assert_eq!(imported.holder.contact.as_deref(), Some("alice@example.com"));
    assert_eq!(imported.checkout.puzzle_id, imported.puzzle.id);
    assert_eq!(imported.checkout.holder_id, imported.holder.id);
    assert!(imported.checkout.returned_at.is_none());

    assert_eq!(row_counts(shelf.db.as_ref()).await, (1, 1, 1, 1));
}

/// 第二次导入复用已有的制造商和借阅人
#[tokio::test]
async fn test_second_import_reuses_maker_and_holder() {
    let shelf = create_test_shelf(
        StubScraper::default()
            .with_page(scraped("Robin Hood Festival", ROBIN_HOOD))
            .with_page(scraped("Het Ruimtestation", RUIMTESTATION)),
    )
    .await;

    let first = shelf
        .import_service
        .import_puzzle_by_url(ROBIN_HOOD, &alice())
        .await
        .unwrap();
    let second = shelf
        .import_service
        .import_puzzle_by_url(RUIMTESTATION, &alice())
        .await
        .unwrap();

    assert_eq!(first.maker.id, second.maker.id);
    assert_eq!(first.holder.id, second.holder.id);
    assert_ne!(first.puzzle.id, second.puzzle.id);
    assert_eq!(row_counts(shelf.db.as_ref()).await, (2, 1, 1, 2));
}

/// 重复导入返回 AlreadyExists 且不写入任何数据
#[tokio::test]
async fn test_duplicate_import_is_rejected_without_writes() {
    let shelf = create_test_shelf(
        StubScraper::default().with_page(scraped("Robin Hood Festival", ROBIN_HOOD)),
    )
    .await;

    shelf
        .import_service
        .import_puzzle_by_url(ROBIN_HOOD, &alice())
        .await
        .unwrap();

    let bob = UserIdentity::new("user-bob").with_email("bob@example.com");
    let result = shelf
        .import_service
        .import_puzzle_by_url(ROBIN_HOOD, &bob)
        .await;

    match result {
        Err(ImportError::AlreadyExists(url)) => assert_eq!(url, ROBIN_HOOD),
        other => panic!("expected AlreadyExists, got {:?}", other),
    }
    // no holder is created for bob
    assert_eq!(row_counts(shelf.db.as_ref()).await, (1, 1, 1, 1));
}

/// 页面不存在时返回 NotFound
#[tokio::test]
async fn test_missing_page_is_not_found() {
    let shelf = create_test_shelf(StubScraper::default()).await;

    let result = shelf
        .import_service
        .import_puzzle_by_url("https://janvanhaasteren.nl/puzzel/bestaat-niet/", &alice())
        .await;

    assert!(matches!(result, Err(ImportError::NotFound(_))));
    assert_eq!(row_counts(shelf.db.as_ref()).await, (0, 0, 0, 0));
}

/// 不同用户导入时各自拥有独立的借阅人
#[tokio::test]
async fn test_distinct_principals_get_distinct_holders() {
    let shelf = create_test_shelf(
        StubScraper::default()
            .with_page(scraped("Robin Hood Festival", ROBIN_HOOD))
            .with_page(scraped("Het Ruimtestation", RUIMTESTATION)),
    )
    .await;

    // Same display name, different principals
    let first = shelf
        .import_service
        .import_puzzle_by_url(ROBIN_HOOD, &UserIdentity::new("user-1").with_user_name("jan"))
        .await
        .unwrap();
    let second = shelf
        .import_service
        .import_puzzle_by_url(
            RUIMTESTATION,
            &UserIdentity::new("user-2").with_user_name("jan"),
        )
        .await
        .unwrap();

    assert_ne!(first.holder.id, second.holder.id);
    assert_eq!(shelf.holder_repo.list().await.unwrap().len(), 2);
}

/// 未知年份写入 0
#[tokio::test]
async fn test_unknown_year_is_stored_as_zero() {
    let mut page = scraped("Robin Hood Festival", ROBIN_HOOD);
    page.year = None;
    page.degraded_fields = vec!["year".to_string()];
    let shelf = create_test_shelf(StubScraper::default().with_page(page)).await;

    let imported = shelf
        .import_service
        .import_puzzle_by_url(ROBIN_HOOD, &alice())
        .await
        .unwrap();

    let stored = shelf
        .puzzle_repo
        .find_by_id(imported.puzzle.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.year, 0);
}

#[tokio::test]
async fn test_search_delegates_to_scraper() {
    let shelf = create_test_shelf(
        StubScraper::default()
            .with_page(scraped("Robin Hood Festival", ROBIN_HOOD))
            .with_page(scraped("Het Ruimtestation", RUIMTESTATION)),
    )
    .await;

    let results = shelf.import_service.search_puzzles("robin").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].product_url, ROBIN_HOOD);
}
