// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::puzzle_repository::RepositoryError;
use crate::domain::models::checkout::{NewCheckout, PuzzleCheckout};
use async_trait::async_trait;

/// 借阅记录仓库特质
#[async_trait]
pub trait CheckoutRepository: Send + Sync {
    /// 创建借阅记录
    async fn create(&self, checkout: &NewCheckout) -> Result<PuzzleCheckout, RepositoryError>;
    /// 根据ID查找借阅记录
    async fn find_by_id(&self, id: i32) -> Result<Option<PuzzleCheckout>, RepositoryError>;
    /// 某盒拼图的全部借阅记录，最新的在前
    async fn find_by_puzzle(&self, puzzle_id: i32) -> Result<Vec<PuzzleCheckout>, RepositoryError>;
    /// 某盒拼图当前未归还的借阅记录
    async fn find_open_by_puzzle(
        &self,
        puzzle_id: i32,
    ) -> Result<Option<PuzzleCheckout>, RepositoryError>;
    /// 某位借阅人当前未归还的借阅记录
    async fn find_open_by_holder(
        &self,
        holder_id: i32,
    ) -> Result<Vec<PuzzleCheckout>, RepositoryError>;
    /// 更新归还时间、完成耗时与难度评分
    async fn update(&self, checkout: &PuzzleCheckout) -> Result<PuzzleCheckout, RepositoryError>;
}
