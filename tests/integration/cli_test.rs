// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{scraped, setup_db, StubScraper};
use puzzle_shelf::domain::models::identity::UserIdentity;
use puzzle_shelf::presentation::cli::{CliContext, Commands};
use std::sync::Arc;

const ROBIN_HOOD: &str = "https://janvanhaasteren.nl/puzzel/robin-hood-festival/";

async fn context() -> CliContext {
    let scraper = StubScraper::default().with_page(scraped("Robin Hood Festival", ROBIN_HOOD));
    CliContext::new(setup_db().await, Arc::new(scraper))
}

fn identity() -> Option<UserIdentity> {
    Some(UserIdentity::new("user-1").with_user_name("jan"))
}

#[tokio::test]
async fn test_import_show_and_delete() {
    let ctx = context().await;

    let imported = ctx
        .execute(
            Commands::Import {
                url: ROBIN_HOOD.to_string(),
            },
            identity(),
        )
        .await
        .unwrap();
    let puzzle_id = imported["puzzle"]["id"].as_i64().unwrap() as i32;
    assert_eq!(imported["maker"]["name"], "Jan van Haasteren");
    assert_eq!(imported["holder"]["name"], "jan");

    let shown = ctx
        .execute(Commands::Show { id: puzzle_id }, None)
        .await
        .unwrap();
    assert_eq!(shown["puzzle"]["name"], "Robin Hood Festival");
    assert_eq!(shown["checkouts"].as_array().unwrap().len(), 1);

    let makers = ctx.execute(Commands::Makers, None).await.unwrap();
    assert_eq!(makers.as_array().unwrap().len(), 1);

    let deleted = ctx
        .execute(Commands::Delete { id: puzzle_id }, None)
        .await
        .unwrap();
    assert_eq!(deleted["deleted"], true);

    let puzzles = ctx.execute(Commands::Puzzles, None).await.unwrap();
    assert!(puzzles.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_commands_needing_identity_fail_without_one() {
    let ctx = context().await;

    let result = ctx
        .execute(
            Commands::Import {
                url: ROBIN_HOOD.to_string(),
            },
            None,
        )
        .await;
    assert!(result.is_err());

    let result = ctx.execute(Commands::Checkouts { puzzle: None }, None).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_duplicate_import_surfaces_error() {
    let ctx = context().await;
    let import = || Commands::Import {
        url: ROBIN_HOOD.to_string(),
    };

    ctx.execute(import(), identity()).await.unwrap();
    let err = ctx.execute(import(), identity()).await.unwrap_err();

    assert!(err.to_string().contains("already exists"));
}

#[tokio::test]
async fn test_return_through_cli() {
    let ctx = context().await;

    let imported = ctx
        .execute(
            Commands::Import {
                url: ROBIN_HOOD.to_string(),
            },
            identity(),
        )
        .await
        .unwrap();
    let checkout_id = imported["checkout"]["id"].as_i64().unwrap() as i32;

    let open = ctx
        .execute(Commands::Checkouts { puzzle: None }, identity())
        .await
        .unwrap();
    assert_eq!(open.as_array().unwrap().len(), 1);

    let returned = ctx
        .execute(
            Commands::Return {
                checkout_id,
                hours: Some(12.5),
                rating: Some(3.0),
            },
            None,
        )
        .await
        .unwrap();
    assert_eq!(returned["time_to_complete"], 12.5);
    assert!(!returned["returned_at"].is_null());

    let open = ctx
        .execute(Commands::Checkouts { puzzle: None }, identity())
        .await
        .unwrap();
    assert!(open.as_array().unwrap().is_empty());
}
