// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::ScraperSettings;
use crate::domain::models::scraped_puzzle::ScrapedPuzzle;
use crate::domain::scraping::scraper::{PuzzleScraper, ScraperError};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1.product_title.entry-title").unwrap());
static META_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("div.product_meta").unwrap());
static META_ROW_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("div").unwrap());
static GALLERY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.woocommerce-product-gallery__image").unwrap());
static LISTING_ITEM_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.puzzle-item").unwrap());
static LISTING_TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h2").unwrap());
static LISTING_LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());
static LISTING_IMAGE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("img[src]").unwrap());
static PIECES_IN_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+)\s*stukjes").unwrap());

/// 标题分段分隔符（两侧带空格的 en dash）
const TITLE_SEPARATOR: &str = " – ";
const UNKNOWN: &str = "Unknown";
const UNKNOWN_PUZZLE: &str = "Unknown Puzzle";

/// Jan van Haasteren 官网抓取器
///
/// 页面结构基于 WooCommerce 商品页。站点改版时字段会回退为默认值，
/// 回退的字段记录在 `ScrapedPuzzle::degraded_fields` 并输出警告日志。
pub struct JanVanHaasterenScraper {
    client: reqwest::Client,
    listing_url: Url,
}

impl JanVanHaasterenScraper {
    /// 根据配置创建抓取器
    pub fn new(settings: &ScraperSettings) -> Result<Self, ScraperError> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        let base_url = Url::parse(&settings.base_url)
            .map_err(|e| ScraperError::InvalidUrl(format!("{}: {}", settings.base_url, e)))?;
        let listing_url = base_url
            .join(&settings.listing_path)
            .map_err(|e| ScraperError::InvalidUrl(format!("{}: {}", settings.listing_path, e)))?;

        Ok(Self::with_client(client, listing_url))
    }

    pub fn with_client(client: reqwest::Client, listing_url: Url) -> Self {
        Self {
            client,
            listing_url,
        }
    }

    /// 解析单个商品页面（用于单元测试）
    pub fn parse_puzzle_page(html_content: &str, product_url: &str) -> ScrapedPuzzle {
        let document = Html::parse_document(html_content);
        let mut degraded = Vec::new();

        let full_title = document
            .select(&TITLE_SELECTOR)
            .next()
            .map(|e| element_text(&e))
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| {
                degraded.push("full_title");
                UNKNOWN_PUZZLE.to_string()
            });

        // "Jan van Haasteren – Robin Hood Festival – 1500 stukjes puzzel"
        let segments: Vec<&str> = full_title.split(TITLE_SEPARATOR).collect();
        let title = segments
            .get(1)
            .map(|s| s.trim().to_string())
            .unwrap_or_else(|| full_title.clone());
        let title_piece_count = segments
            .get(2)
            .and_then(|s| s.split_whitespace().next())
            .and_then(|token| token.parse::<i32>().ok())
            .unwrap_or(0);

        let meta = document.select(&META_SELECTOR).next();
        let artist = meta
            .and_then(|m| meta_value(&m, "Tekenaar"))
            .unwrap_or_else(|| {
                degraded.push("artist");
                UNKNOWN.to_string()
            });

        let year = meta
            .and_then(|m| meta_value(&m, "Jaar"))
            .and_then(|v| v.parse::<i32>().ok());
        if year.is_none() {
            degraded.push("year");
        }

        let piece_count = meta
            .and_then(|m| meta_value(&m, "Stukjes"))
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or(title_piece_count);
        if piece_count == 0 {
            degraded.push("piece_count");
        }

        let article_number = meta
            .and_then(|m| meta_value(&m, "Artikelnr."))
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or_else(|| {
                degraded.push("article_number");
                0
            });

        let image_url = document
            .select(&GALLERY_SELECTOR)
            .next()
            .and_then(|e| e.value().attr("data-thumb"))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                degraded.push("image_url");
                String::new()
            });

        ScrapedPuzzle {
            title,
            full_title,
            piece_count,
            article_number,
            artist,
            year,
            image_url,
            product_url: product_url.to_string(),
            maker: ScrapedPuzzle::JAN_VAN_HAASTEREN.to_string(),
            degraded_fields: degraded.into_iter().map(String::from).collect(),
        }
    }

    /// 解析商品列表页并按标题过滤（用于单元测试）
    ///
    /// 标题包含搜索词（忽略大小写）或搜索词为空时保留该条目
    pub fn parse_listing(&self, html_content: &str, term: &str) -> Vec<ScrapedPuzzle> {
        let document = Html::parse_document(html_content);
        let needle = term.to_lowercase();
        let mut results = Vec::new();

        for item in document.select(&LISTING_ITEM_SELECTOR) {
            let title = item
                .select(&LISTING_TITLE_SELECTOR)
                .next()
                .map(|e| element_text(&e))
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| UNKNOWN.to_string());

            if !needle.is_empty() && !title.to_lowercase().contains(&needle) {
                continue;
            }

            let product_url = item
                .select(&LISTING_LINK_SELECTOR)
                .next()
                .and_then(|a| a.value().attr("href"))
                .and_then(|href| self.listing_url.join(href).ok())
                .map(String::from)
                .unwrap_or_default();

            let image_url = item
                .select(&LISTING_IMAGE_SELECTOR)
                .next()
                .and_then(|img| img.value().attr("src"))
                .and_then(|src| self.listing_url.join(src).ok())
                .map(String::from)
                .unwrap_or_default();

            let piece_count = PIECES_IN_TITLE
                .captures(&title)
                .and_then(|c| c.get(1))
                .and_then(|m| m.as_str().parse::<i32>().ok())
                .unwrap_or(0);

            let mut degraded = vec!["article_number", "artist", "year"];
            if product_url.is_empty() {
                degraded.push("product_url");
            }
            if image_url.is_empty() {
                degraded.push("image_url");
            }
            if piece_count == 0 {
                degraded.push("piece_count");
            }

            results.push(ScrapedPuzzle {
                full_title: title.clone(),
                title,
                piece_count,
                article_number: 0,
                artist: UNKNOWN.to_string(),
                year: None,
                image_url,
                product_url,
                maker: ScrapedPuzzle::JAN_VAN_HAASTEREN.to_string(),
                degraded_fields: degraded.into_iter().map(String::from).collect(),
            });
        }

        results
    }
}

/// 元素文本，去除首尾空白
fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// 在商品元数据块中按标签查找取值
///
/// 行结构为 `<div><span>Label</span><span class="content">Value</span></div>`
fn meta_value(meta: &ElementRef<'_>, label: &str) -> Option<String> {
    meta.select(&META_ROW_SELECTOR).find_map(|row| {
        let spans: Vec<ElementRef<'_>> = row
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|e| e.value().name() == "span")
            .collect();

        let has_label = spans
            .iter()
            .any(|s| !is_content_span(s) && element_text(s).contains(label));
        if !has_label {
            return None;
        }

        spans.iter().find(|s| is_content_span(s)).map(element_text)
    })
}

fn is_content_span(span: &ElementRef<'_>) -> bool {
    span.value().classes().any(|c| c == "content")
}

#[async_trait]
impl PuzzleScraper for JanVanHaasterenScraper {
    async fn get_puzzle_by_url(&self, url: &str) -> Result<Option<ScrapedPuzzle>, ScraperError> {
        let parsed =
            Url::parse(url).map_err(|e| ScraperError::InvalidUrl(format!("{}: {}", url, e)))?;

        let response = self.client.get(parsed).send().await?;
        if !response.status().is_success() {
            debug!("{} answered with status {}", url, response.status());
            return Ok(None);
        }

        let html_content = response.text().await?;
        let puzzle = Self::parse_puzzle_page(&html_content, url);

        if puzzle.is_degraded() {
            warn!(
                "Fields defaulted while parsing {}: {}",
                url,
                puzzle.degraded_fields.join(", ")
            );
        }

        Ok(Some(puzzle))
    }

    async fn search_puzzles(&self, term: &str) -> Result<Vec<ScrapedPuzzle>, ScraperError> {
        let response = self.client.get(self.listing_url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(ScraperError::Status(response.status().as_u16()));
        }

        let html_content = response.text().await?;
        let results = self.parse_listing(&html_content, term);
        debug!(
            "Listing {} matched {} puzzles for '{}'",
            self.listing_url,
            results.len(),
            term
        );

        Ok(results)
    }

    fn name(&self) -> &'static str {
        "jan_van_haasteren"
    }
}

#[cfg(test)]
#[path = "jan_van_haasteren_test.rs"]
mod tests;
