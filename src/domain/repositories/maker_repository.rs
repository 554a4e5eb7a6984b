// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::puzzle_repository::RepositoryError;
use crate::domain::models::maker::PuzzleMaker;
use async_trait::async_trait;

/// 制造商仓库特质
#[async_trait]
pub trait MakerRepository: Send + Sync {
    /// 根据ID查找制造商
    async fn find_by_id(&self, id: i32) -> Result<Option<PuzzleMaker>, RepositoryError>;
    /// 按名称精确匹配查找制造商
    async fn find_by_name(&self, name: &str) -> Result<Option<PuzzleMaker>, RepositoryError>;
    /// 查找或创建制造商，重复调用返回同一条记录
    async fn get_or_create(&self, name: &str) -> Result<PuzzleMaker, RepositoryError>;
    /// 列出全部制造商
    async fn list(&self) -> Result<Vec<PuzzleMaker>, RepositoryError>;
}
