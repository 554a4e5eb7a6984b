// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::identity::UserIdentity;
use crate::domain::models::import::ImportedPuzzle;
use crate::domain::models::puzzle::{NewPuzzle, Puzzle};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}

/// 拼图仓库特质
///
/// 定义拼图数据访问接口。导入写入（制造商、借阅人、拼图、借阅记录）
/// 通过 `create_with_checkout` 在同一个事务内完成。
#[async_trait]
pub trait PuzzleRepository: Send + Sync {
    /// 在一个事务内写入导入结果
    ///
    /// # 参数
    ///
    /// * `puzzle` - 映射后的拼图数据
    /// * `maker_name` - 制造商名称，按名称精确匹配查找或创建
    /// * `identity` - 调用方身份，按用户ID精确匹配查找或创建借阅人
    /// * `checked_out_at` - 借阅记录的借出时间
    ///
    /// # 返回值
    ///
    /// * `Ok(ImportedPuzzle)` - 写入后的全部记录（包含生成的ID）
    /// * `Err(RepositoryError)` - 任一步失败时整个事务回滚
    async fn create_with_checkout(
        &self,
        puzzle: &NewPuzzle,
        maker_name: &str,
        identity: &UserIdentity,
        checked_out_at: DateTime<Utc>,
    ) -> Result<ImportedPuzzle, RepositoryError>;

    /// 根据ID查找拼图
    async fn find_by_id(&self, id: i32) -> Result<Option<Puzzle>, RepositoryError>;

    /// 根据商品URL查找拼图
    async fn find_by_product_url(&self, url: &str) -> Result<Option<Puzzle>, RepositoryError>;

    /// 检查商品URL是否已导入
    async fn exists_by_product_url(&self, url: &str) -> Result<bool, RepositoryError>;

    /// 按名称排序列出全部拼图
    async fn list(&self) -> Result<Vec<Puzzle>, RepositoryError>;

    /// 删除拼图，其借阅记录随之级联删除
    ///
    /// # 返回值
    ///
    /// * `Ok(true)` - 已删除
    /// * `Ok(false)` - 拼图不存在
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;
}
