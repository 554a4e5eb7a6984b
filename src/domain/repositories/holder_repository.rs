// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::puzzle_repository::RepositoryError;
use crate::domain::models::holder::PuzzleHolder;
use crate::domain::models::identity::UserIdentity;
use async_trait::async_trait;

/// 借阅人仓库特质
///
/// 借阅人与外部身份一一对应，不同身份永远不会共用同一条记录。
#[async_trait]
pub trait HolderRepository: Send + Sync {
    /// 按外部用户ID查找借阅人
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<PuzzleHolder>, RepositoryError>;
    /// 查找或创建与身份绑定的借阅人
    async fn get_or_create(&self, identity: &UserIdentity) -> Result<PuzzleHolder, RepositoryError>;
    /// 列出全部借阅人
    async fn list(&self) -> Result<Vec<PuzzleHolder>, RepositoryError>;
}
