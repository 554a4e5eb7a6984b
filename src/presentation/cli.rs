// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::IdentitySettings;
use crate::domain::models::checkout::ReturnDetails;
use crate::domain::models::identity::UserIdentity;
use crate::domain::repositories::checkout_repository::CheckoutRepository;
use crate::domain::repositories::holder_repository::HolderRepository;
use crate::domain::repositories::maker_repository::MakerRepository;
use crate::domain::repositories::puzzle_repository::PuzzleRepository;
use crate::domain::scraping::scraper::PuzzleScraper;
use crate::domain::services::checkout_service::CheckoutService;
use crate::domain::services::import_service::PuzzleImportService;
use crate::infrastructure::repositories::checkout_repo_impl::CheckoutRepositoryImpl;
use crate::infrastructure::repositories::holder_repo_impl::HolderRepositoryImpl;
use crate::infrastructure::repositories::maker_repo_impl::MakerRepositoryImpl;
use crate::infrastructure::repositories::puzzle_repo_impl::PuzzleRepositoryImpl;
use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::sync::Arc;

/// 拼图收藏管理命令行
#[derive(Parser, Debug)]
#[command(name = "puzzle-shelf", author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub identity: IdentityArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// 调用方身份参数，未指定时使用配置中的默认身份
#[derive(Args, Debug, Default)]
pub struct IdentityArgs {
    /// Stable id of the calling user
    #[arg(long, global = true, env = "PUZZLE_SHELF_USER_ID")]
    pub user_id: Option<String>,

    /// Display name used when a new holder is created
    #[arg(long, global = true, env = "PUZZLE_SHELF_USER_NAME")]
    pub user_name: Option<String>,

    /// Email stored as the holder's contact
    #[arg(long, global = true, env = "PUZZLE_SHELF_EMAIL")]
    pub email: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import a puzzle by its product page URL and check it out to the caller
    Import {
        /// Product page URL on janvanhaasteren.nl
        url: String,
    },
    /// Search the vendor catalogue by title
    Search {
        /// Case-insensitive title fragment, empty lists everything
        #[arg(default_value = "")]
        term: String,
    },
    /// List puzzles in the collection
    Puzzles,
    /// Show one puzzle with its checkout history
    Show { id: i32 },
    /// Delete a puzzle together with its checkouts
    Delete { id: i32 },
    /// Check out a puzzle that is already in the collection
    Checkout { puzzle_id: i32 },
    /// Mark a checkout as returned
    Return {
        checkout_id: i32,
        /// Hours spent on the puzzle, derived from the checkout time when omitted
        #[arg(long)]
        hours: Option<f64>,
        /// Personal difficulty rating
        #[arg(long)]
        rating: Option<f64>,
    },
    /// List open checkouts of the caller, or the history of one puzzle
    Checkouts {
        #[arg(long)]
        puzzle: Option<i32>,
    },
    /// List puzzle makers
    Makers,
    /// List puzzle holders
    Holders,
}

impl IdentityArgs {
    /// 合并命令行参数与配置中的默认身份
    ///
    /// 两者都没有用户ID时返回 `None`
    pub fn resolve(&self, defaults: &IdentitySettings) -> Option<UserIdentity> {
        let id = self.user_id.clone().or_else(|| defaults.user_id.clone())?;
        Some(UserIdentity {
            id,
            user_name: self
                .user_name
                .clone()
                .or_else(|| defaults.user_name.clone()),
            email: self.email.clone().or_else(|| defaults.email.clone()),
        })
    }
}

/// 命令执行所需的服务与仓库
pub struct CliContext {
    pub import_service: PuzzleImportService,
    pub checkout_service: CheckoutService,
    pub puzzle_repo: Arc<dyn PuzzleRepository>,
    pub maker_repo: Arc<dyn MakerRepository>,
    pub holder_repo: Arc<dyn HolderRepository>,
}

impl CliContext {
    /// 基于数据库连接与抓取器组装全部依赖
    pub fn new(db: Arc<DatabaseConnection>, scraper: Arc<dyn PuzzleScraper>) -> Self {
        let puzzle_repo: Arc<dyn PuzzleRepository> =
            Arc::new(PuzzleRepositoryImpl::new(db.clone()));
        let maker_repo: Arc<dyn MakerRepository> = Arc::new(MakerRepositoryImpl::new(db.clone()));
        let holder_repo: Arc<dyn HolderRepository> =
            Arc::new(HolderRepositoryImpl::new(db.clone()));
        let checkout_repo: Arc<dyn CheckoutRepository> =
            Arc::new(CheckoutRepositoryImpl::new(db));

        Self {
            import_service: PuzzleImportService::new(scraper, puzzle_repo.clone()),
            checkout_service: CheckoutService::new(
                puzzle_repo.clone(),
                holder_repo.clone(),
                checkout_repo,
            ),
            puzzle_repo,
            maker_repo,
            holder_repo,
        }
    }

    /// 执行命令并返回 JSON 结果
    pub async fn execute(&self, command: Commands, identity: Option<UserIdentity>) -> Result<Value> {
        let require_identity = || {
            identity.clone().ok_or_else(|| {
                anyhow!("No identity given, pass --user-id or set PUZZLE_SHELF__IDENTITY__USER_ID")
            })
        };

        let output = match command {
            Commands::Import { url } => {
                let imported = self
                    .import_service
                    .import_puzzle_by_url(&url, &require_identity()?)
                    .await?;
                serde_json::to_value(imported)?
            }
            Commands::Search { term } => {
                serde_json::to_value(self.import_service.search_puzzles(&term).await?)?
            }
            Commands::Puzzles => serde_json::to_value(self.puzzle_repo.list().await?)?,
            Commands::Show { id } => {
                let puzzle = self
                    .puzzle_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| anyhow!("Puzzle {} not found", id))?;
                let checkouts = self.checkout_service.history(id).await?;
                json!({ "puzzle": puzzle, "checkouts": checkouts })
            }
            Commands::Delete { id } => {
                let deleted = self.puzzle_repo.delete(id).await?;
                json!({ "id": id, "deleted": deleted })
            }
            Commands::Checkout { puzzle_id } => {
                let checkout = self
                    .checkout_service
                    .checkout_puzzle(puzzle_id, &require_identity()?)
                    .await?;
                serde_json::to_value(checkout)?
            }
            Commands::Return {
                checkout_id,
                hours,
                rating,
            } => {
                let details = ReturnDetails {
                    returned_at: None,
                    time_to_complete: hours,
                    user_difficulty_rating: rating,
                };
                serde_json::to_value(
                    self.checkout_service
                        .return_puzzle(checkout_id, details)
                        .await?,
                )?
            }
            Commands::Checkouts { puzzle } => {
                let checkouts = match puzzle {
                    Some(puzzle_id) => self.checkout_service.history(puzzle_id).await?,
                    None => {
                        self.checkout_service
                            .open_checkouts_for(&require_identity()?)
                            .await?
                    }
                };
                serde_json::to_value(checkouts)?
            }
            Commands::Makers => serde_json::to_value(self.maker_repo.list().await?)?,
            Commands::Holders => serde_json::to_value(self.holder_repo.list().await?)?,
        };

        Ok(output)
    }
}
