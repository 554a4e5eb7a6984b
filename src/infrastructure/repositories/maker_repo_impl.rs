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

use crate::domain::models::maker::PuzzleMaker;
use crate::domain::repositories::maker_repository::MakerRepository;
use crate::domain::repositories::puzzle_repository::RepositoryError;
use crate::infrastructure::database::entities::puzzle_maker as maker_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use tracing::debug;

/// 制造商仓库实现
pub struct MakerRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl MakerRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<maker_entity::Model> for PuzzleMaker {
    fn from(m: maker_entity::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            country: m.country,
        }
    }
}

/// 按名称查找或创建制造商
///
/// 可在普通连接或事务中调用。名称重复时取最早创建的一条。
pub(crate) async fn get_or_create_maker<C: ConnectionTrait>(
    conn: &C,
    name: &str,
) -> Result<maker_entity::Model, DbErr> {
    let existing = maker_entity::Entity::find()
        .filter(maker_entity::Column::Name.eq(name))
        .order_by_asc(maker_entity::Column::Id)
        .one(conn)
        .await?;

    if let Some(maker) = existing {
        debug!("Reusing maker {} ({})", maker.name, maker.id);
        return Ok(maker);
    }

    let model = maker_entity::ActiveModel {
        name: Set(name.to_string()),
        country: Set(None),
        ..Default::default()
    };
    let created = model.insert(conn).await?;
    debug!("Created maker {} ({})", created.name, created.id);
    Ok(created)
}

#[async_trait]
impl MakerRepository for MakerRepositoryImpl {
    async fn find_by_id(&self, id: i32) -> Result<Option<PuzzleMaker>, RepositoryError> {
        let model = maker_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<PuzzleMaker>, RepositoryError> {
        let model = maker_entity::Entity::find()
            .filter(maker_entity::Column::Name.eq(name))
            .order_by_asc(maker_entity::Column::Id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn get_or_create(&self, name: &str) -> Result<PuzzleMaker, RepositoryError> {
        Ok(get_or_create_maker(self.db.as_ref(), name).await?.into())
    }

    async fn list(&self) -> Result<Vec<PuzzleMaker>, RepositoryError> {
        let models = maker_entity::Entity::find()
            .order_by_asc(maker_entity::Column::Name)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
