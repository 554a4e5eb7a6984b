// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::holder::PuzzleHolder;
use crate::domain::models::identity::UserIdentity;
use crate::domain::repositories::holder_repository::HolderRepository;
use crate::domain::repositories::puzzle_repository::RepositoryError;
use crate::infrastructure::database::entities::puzzle_holder as holder_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use tracing::debug;

/// 借阅人仓库实现
pub struct HolderRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl HolderRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<holder_entity::Model> for PuzzleHolder {
    fn from(m: holder_entity::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            contact: m.contact,
            user_id: m.user_id,
        }
    }
}

/// 按外部用户ID查找或创建借阅人
///
/// 新建时名称取用户名，其次邮箱；邮箱同时作为联系方式。
pub(crate) async fn get_or_create_holder<C: ConnectionTrait>(
    conn: &C,
    identity: &UserIdentity,
) -> Result<holder_entity::Model, DbErr> {
    let existing = holder_entity::Entity::find()
        .filter(holder_entity::Column::UserId.eq(identity.id.as_str()))
        .order_by_asc(holder_entity::Column::Id)
        .one(conn)
        .await?;

    if let Some(holder) = existing {
        debug!("Reusing holder {} for user {}", holder.id, identity.id);
        return Ok(holder);
    }

    let model = holder_entity::ActiveModel {
        name: Set(identity.display_name().to_string()),
        contact: Set(identity.email.clone()),
        user_id: Set(identity.id.clone()),
        ..Default::default()
    };
    let created = model.insert(conn).await?;
    debug!("Created holder {} for user {}", created.id, identity.id);
    Ok(created)
}

#[async_trait]
impl HolderRepository for HolderRepositoryImpl {
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<PuzzleHolder>, RepositoryError> {
        let model = holder_entity::Entity::find()
            .filter(holder_entity::Column::UserId.eq(user_id))
            .order_by_asc(holder_entity::Column::Id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn get_or_create(&self, identity: &UserIdentity) -> Result<PuzzleHolder, RepositoryError> {
        Ok(get_or_create_holder(self.db.as_ref(), identity).await?.into())
    }

    async fn list(&self) -> Result<Vec<PuzzleHolder>, RepositoryError> {
        let models = holder_entity::Entity::find()
            .order_by_asc(holder_entity::Column::Name)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
