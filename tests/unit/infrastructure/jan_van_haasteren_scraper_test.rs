// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use puzzle_shelf::config::settings::ScraperSettings;
use puzzle_shelf::domain::scraping::scraper::{PuzzleScraper, ScraperError};
use puzzle_shelf::infrastructure::scrapers::jan_van_haasteren::JanVanHaasterenScraper;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ROBIN_HOOD_HTML: &str = include_str!("../../fixtures/robin_hood_festival.html");
const LISTING_HTML: &str = include_str!("../../fixtures/puzzle_listing.html");
const PRODUCT_PATH: &str = "/puzzel/jan-van-haasteren-robin-hood-festival-1500-stukjes-puzzel/";

fn scraper_for(server: &MockServer) -> JanVanHaasterenScraper {
    let settings = ScraperSettings {
        base_url: format!("{}/", server.uri()),
        listing_path: "puzzels/".to_string(),
        user_agent: "puzzle-shelf-test".to_string(),
        timeout_secs: 5,
    };
    JanVanHaasterenScraper::new(&settings).unwrap()
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/html; charset=UTF-8")
}

#[tokio::test]
async fn test_get_puzzle_by_url_parses_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PRODUCT_PATH))
        .and(header("user-agent", "puzzle-shelf-test"))
        .respond_with(html(ROBIN_HOOD_HTML))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}{}", server.uri(), PRODUCT_PATH);
    let puzzle = scraper_for(&server)
        .get_puzzle_by_url(&url)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(puzzle.title, "Robin Hood Festival");
    assert_eq!(puzzle.piece_count, 1500);
    assert_eq!(puzzle.article_number, 1110100317);
    assert_eq!(puzzle.year, Some(2024));
    assert_eq!(puzzle.artist, "Rob Derks");
    assert_eq!(puzzle.product_url, url);
}

#[tokio::test]
async fn test_get_puzzle_by_url_missing_page_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/puzzel/bestaat-niet/", server.uri());
    let result = scraper_for(&server).get_puzzle_by_url(&url).await.unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_get_puzzle_by_url_rejects_invalid_url() {
    let server = MockServer::start().await;

    let result = scraper_for(&server).get_puzzle_by_url("not a url").await;

    assert!(matches!(result, Err(ScraperError::InvalidUrl(_))));
}

#[tokio::test]
async fn test_search_puzzles_reads_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/puzzels/"))
        .respond_with(html(LISTING_HTML))
        .mount(&server)
        .await;

    let results = scraper_for(&server).search_puzzles("stukjes").await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(
        results[0].product_url,
        format!("{}{}", server.uri(), PRODUCT_PATH)
    );
    assert_eq!(results[1].title, "Het Ruimtestation 1000 stukjes");
}

#[tokio::test]
async fn test_search_puzzles_non_success_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/puzzels/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = scraper_for(&server).search_puzzles("robin").await;

    assert!(matches!(result, Err(ScraperError::Status(503))));
}
