// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::identity::UserIdentity;
use crate::domain::models::import::ImportedPuzzle;
use crate::domain::models::puzzle::NewPuzzle;
use crate::domain::models::scraped_puzzle::ScrapedPuzzle;
use crate::domain::repositories::puzzle_repository::{PuzzleRepository, RepositoryError};
use crate::domain::scraping::scraper::{PuzzleScraper, ScraperError};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// 导入错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    /// 页面不存在或返回非成功状态
    #[error("Puzzle not found at {0}")]
    NotFound(String),
    /// 商品URL已经导入过
    #[error("Puzzle already exists in the database: {0}")]
    AlreadyExists(String),
    #[error("Scraper error: {0}")]
    Scraper(#[from] ScraperError),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// 拼图导入服务
///
/// 串联抓取、去重、映射与持久化：
/// 1. 抓取商品页面，未找到时终止
/// 2. 按商品URL去重，已存在时返回 `AlreadyExists`
/// 3. 将抓取结果映射为待写入的拼图
/// 4. 在同一事务内查找或创建制造商与借阅人，写入拼图和借阅记录
///
/// 并发导入同一URL或同一身份时，"先查后写"之间没有加锁，
/// 可能产生重复的制造商或借阅人。
pub struct PuzzleImportService {
    scraper: Arc<dyn PuzzleScraper>,
    puzzle_repo: Arc<dyn PuzzleRepository>,
}

impl PuzzleImportService {
    pub fn new(scraper: Arc<dyn PuzzleScraper>, puzzle_repo: Arc<dyn PuzzleRepository>) -> Self {
        Self {
            scraper,
            puzzle_repo,
        }
    }

    /// 在商品目录中搜索拼图
    pub async fn search_puzzles(&self, term: &str) -> Result<Vec<ScrapedPuzzle>, ImportError> {
        let results = self.scraper.search_puzzles(term).await?;
        debug!(
            "Scraper {} returned {} results for '{}'",
            self.scraper.name(),
            results.len(),
            term
        );
        Ok(results)
    }

    /// 按商品URL导入拼图，并为调用方创建一条借阅记录
    ///
    /// # 参数
    ///
    /// * `url` - 商品页面URL
    /// * `identity` - 调用方身份
    ///
    /// # 返回值
    ///
    /// * `Ok(ImportedPuzzle)` - 新写入的拼图、制造商、借阅人与借阅记录
    /// * `Err(ImportError)` - 未找到、重复导入或底层错误
    pub async fn import_puzzle_by_url(
        &self,
        url: &str,
        identity: &UserIdentity,
    ) -> Result<ImportedPuzzle, ImportError> {
        let scraped = self
            .scraper
            .get_puzzle_by_url(url)
            .await?
            .ok_or_else(|| ImportError::NotFound(url.to_string()))?;

        if scraped.is_degraded() {
            debug!(
                "Importing {} with defaulted fields: {}",
                url,
                scraped.degraded_fields.join(", ")
            );
        }

        if self
            .puzzle_repo
            .exists_by_product_url(&scraped.product_url)
            .await?
        {
            info!("Skipping import, {} is already in the collection", scraped.product_url);
            return Err(ImportError::AlreadyExists(scraped.product_url));
        }

        let new_puzzle = NewPuzzle::from(&scraped);
        let imported = self
            .puzzle_repo
            .create_with_checkout(&new_puzzle, &scraped.maker, identity, Utc::now())
            .await?;

        info!(
            puzzle_id = imported.puzzle.id,
            holder_id = imported.holder.id,
            "Imported '{}' from {}",
            imported.puzzle.name,
            imported.puzzle.product_url
        );

        Ok(imported)
    }
}

#[cfg(test)]
#[path = "import_service_test.rs"]
mod tests;
