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

use super::checkout_repo_impl::insert_checkout;
use super::holder_repo_impl::get_or_create_holder;
use super::maker_repo_impl::get_or_create_maker;
use crate::domain::models::checkout::NewCheckout;
use crate::domain::models::identity::UserIdentity;
use crate::domain::models::import::ImportedPuzzle;
use crate::domain::models::puzzle::{NewPuzzle, Puzzle};
use crate::domain::repositories::puzzle_repository::{PuzzleRepository, RepositoryError};
use crate::infrastructure::database::entities::puzzle as puzzle_entity;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::*;
use std::sync::Arc;
use tracing::debug;

/// 拼图仓库实现
pub struct PuzzleRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl PuzzleRepositoryImpl {
    /// 创建新的拼图仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<puzzle_entity::Model> for Puzzle {
    fn from(m: puzzle_entity::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            piece_count: m.piece_count,
            difficulty_rating: m.difficulty_rating,
            maker_id: m.maker_id,
            product_url: m.product_url,
            image_url: m.image_url,
            article_number: m.article_number,
            year: m.year,
            artist: m.artist,
        }
    }
}

#[async_trait]
impl PuzzleRepository for PuzzleRepositoryImpl {
    async fn create_with_checkout(
        &self,
        puzzle: &NewPuzzle,
        maker_name: &str,
        identity: &UserIdentity,
        checked_out_at: DateTime<Utc>,
    ) -> Result<ImportedPuzzle, RepositoryError> {
        let txn = self.db.begin().await?;

        // Each insert returns its generated id before the next row references it
        let maker = get_or_create_maker(&txn, maker_name).await?;
        let holder = get_or_create_holder(&txn, identity).await?;

        let puzzle_model = puzzle_entity::ActiveModel {
            name: Set(puzzle.name.clone()),
            description: Set(puzzle.description.clone()),
            piece_count: Set(puzzle.piece_count),
            difficulty_rating: Set(puzzle.difficulty_rating),
            maker_id: Set(maker.id),
            product_url: Set(puzzle.product_url.clone()),
            image_url: Set(puzzle.image_url.clone()),
            article_number: Set(puzzle.article_number),
            year: Set(puzzle.year),
            artist: Set(puzzle.artist.clone()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let checkout = insert_checkout(
            &txn,
            &NewCheckout {
                puzzle_id: puzzle_model.id,
                holder_id: holder.id,
                checked_out_at,
            },
        )
        .await?;

        txn.commit().await?;
        debug!(
            "Stored puzzle {} with checkout {}",
            puzzle_model.id, checkout.id
        );

        Ok(ImportedPuzzle {
            puzzle: puzzle_model.into(),
            maker: maker.into(),
            holder: holder.into(),
            checkout: checkout.into(),
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Puzzle>, RepositoryError> {
        let model = puzzle_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_product_url(&self, url: &str) -> Result<Option<Puzzle>, RepositoryError> {
        let model = puzzle_entity::Entity::find()
            .filter(puzzle_entity::Column::ProductUrl.eq(url))
            .order_by_asc(puzzle_entity::Column::Id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn exists_by_product_url(&self, url: &str) -> Result<bool, RepositoryError> {
        let count = puzzle_entity::Entity::find()
            .filter(puzzle_entity::Column::ProductUrl.eq(url))
            .count(self.db.as_ref())
            .await?;
        Ok(count > 0)
    }

    async fn list(&self) -> Result<Vec<Puzzle>, RepositoryError> {
        let models = puzzle_entity::Entity::find()
            .order_by_asc(puzzle_entity::Column::Name)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        let result = puzzle_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        Ok(result.rows_affected > 0)
    }
}
