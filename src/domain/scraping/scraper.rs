// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scraped_puzzle::ScrapedPuzzle;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

#[async_trait]
pub trait PuzzleScraper: Send + Sync {
    /// Fetch and parse a single product page.
    ///
    /// Returns `Ok(None)` when the page answers with a non-success status.
    async fn get_puzzle_by_url(&self, url: &str) -> Result<Option<ScrapedPuzzle>, ScraperError>;

    /// Fetch the catalogue listing and keep entries whose title contains `term`
    async fn search_puzzles(&self, term: &str) -> Result<Vec<ScrapedPuzzle>, ScraperError>;

    /// Get the name of the scraper
    fn name(&self) -> &'static str;
}
