// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::checkout::{NewCheckout, PuzzleCheckout, ReturnDetails};
use crate::domain::models::identity::UserIdentity;
use crate::domain::repositories::checkout_repository::CheckoutRepository;
use crate::domain::repositories::holder_repository::HolderRepository;
use crate::domain::repositories::puzzle_repository::{PuzzleRepository, RepositoryError};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// 借阅错误类型
#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Checkout {0} not found")]
    NotFound(i32),
    #[error("Puzzle {0} not found")]
    PuzzleNotFound(i32),
    #[error("Checkout {0} has already been returned")]
    AlreadyReturned(i32),
    #[error("Puzzle {0} is still checked out")]
    AlreadyCheckedOut(i32),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// 借阅服务
///
/// 处理借出、归还与借阅历史查询
pub struct CheckoutService {
    puzzle_repo: Arc<dyn PuzzleRepository>,
    holder_repo: Arc<dyn HolderRepository>,
    checkout_repo: Arc<dyn CheckoutRepository>,
}

impl CheckoutService {
    pub fn new(
        puzzle_repo: Arc<dyn PuzzleRepository>,
        holder_repo: Arc<dyn HolderRepository>,
        checkout_repo: Arc<dyn CheckoutRepository>,
    ) -> Self {
        Self {
            puzzle_repo,
            holder_repo,
            checkout_repo,
        }
    }

    /// 将已有拼图借给调用方
    ///
    /// 拼图存在未归还的借阅记录时拒绝借出
    pub async fn checkout_puzzle(
        &self,
        puzzle_id: i32,
        identity: &UserIdentity,
    ) -> Result<PuzzleCheckout, CheckoutError> {
        if self.puzzle_repo.find_by_id(puzzle_id).await?.is_none() {
            return Err(CheckoutError::PuzzleNotFound(puzzle_id));
        }

        if self
            .checkout_repo
            .find_open_by_puzzle(puzzle_id)
            .await?
            .is_some()
        {
            return Err(CheckoutError::AlreadyCheckedOut(puzzle_id));
        }

        let holder = self.holder_repo.get_or_create(identity).await?;
        let checkout = self
            .checkout_repo
            .create(&NewCheckout {
                puzzle_id,
                holder_id: holder.id,
                checked_out_at: Utc::now(),
            })
            .await?;

        info!(
            checkout_id = checkout.id,
            "Puzzle {} checked out by {}", puzzle_id, holder.name
        );
        Ok(checkout)
    }

    /// 归还拼图
    ///
    /// 未提供完成耗时时，按借出到归还之间的小时数推算
    pub async fn return_puzzle(
        &self,
        checkout_id: i32,
        details: ReturnDetails,
    ) -> Result<PuzzleCheckout, CheckoutError> {
        let mut checkout = self
            .checkout_repo
            .find_by_id(checkout_id)
            .await?
            .ok_or(CheckoutError::NotFound(checkout_id))?;

        if !checkout.is_open() {
            return Err(CheckoutError::AlreadyReturned(checkout_id));
        }

        let returned_at = details.returned_at.unwrap_or_else(Utc::now);
        checkout.time_to_complete = details
            .time_to_complete
            .or_else(|| Some(checkout.hours_until(returned_at)));
        checkout.returned_at = Some(returned_at);
        if details.user_difficulty_rating.is_some() {
            checkout.user_difficulty_rating = details.user_difficulty_rating;
        }

        let updated = self.checkout_repo.update(&checkout).await?;
        info!(checkout_id, "Puzzle {} returned", updated.puzzle_id);
        Ok(updated)
    }

    /// 某盒拼图的借阅历史，最新的在前
    pub async fn history(&self, puzzle_id: i32) -> Result<Vec<PuzzleCheckout>, CheckoutError> {
        Ok(self.checkout_repo.find_by_puzzle(puzzle_id).await?)
    }

    /// 调用方当前未归还的借阅记录
    ///
    /// 身份尚未绑定借阅人时返回空列表
    pub async fn open_checkouts_for(
        &self,
        identity: &UserIdentity,
    ) -> Result<Vec<PuzzleCheckout>, CheckoutError> {
        match self.holder_repo.find_by_user_id(&identity.id).await? {
            Some(holder) => Ok(self.checkout_repo.find_open_by_holder(holder.id).await?),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
#[path = "checkout_service_test.rs"]
mod tests;
