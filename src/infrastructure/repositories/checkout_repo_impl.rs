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

use crate::domain::models::checkout::{NewCheckout, PuzzleCheckout};
use crate::domain::repositories::checkout_repository::CheckoutRepository;
use crate::domain::repositories::puzzle_repository::RepositoryError;
use crate::infrastructure::database::entities::puzzle_checkout as checkout_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 借阅记录仓库实现
pub struct CheckoutRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl CheckoutRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<checkout_entity::Model> for PuzzleCheckout {
    fn from(m: checkout_entity::Model) -> Self {
        Self {
            id: m.id,
            puzzle_id: m.puzzle_id,
            holder_id: m.holder_id,
            checked_out_at: m.checked_out_at.into(),
            returned_at: m.returned_at.map(Into::into),
            time_to_complete: m.time_to_complete,
            user_difficulty_rating: m.user_difficulty_rating,
        }
    }
}

/// 写入一条未归还的借阅记录
pub(crate) async fn insert_checkout<C: ConnectionTrait>(
    conn: &C,
    checkout: &NewCheckout,
) -> Result<checkout_entity::Model, DbErr> {
    let model = checkout_entity::ActiveModel {
        puzzle_id: Set(checkout.puzzle_id),
        holder_id: Set(checkout.holder_id),
        checked_out_at: Set(checkout.checked_out_at.into()),
        returned_at: Set(None),
        time_to_complete: Set(None),
        user_difficulty_rating: Set(None),
        ..Default::default()
    };
    model.insert(conn).await
}

#[async_trait]
impl CheckoutRepository for CheckoutRepositoryImpl {
    async fn create(&self, checkout: &NewCheckout) -> Result<PuzzleCheckout, RepositoryError> {
        Ok(insert_checkout(self.db.as_ref(), checkout).await?.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<PuzzleCheckout>, RepositoryError> {
        let model = checkout_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_by_puzzle(&self, puzzle_id: i32) -> Result<Vec<PuzzleCheckout>, RepositoryError> {
        let models = checkout_entity::Entity::find()
            .filter(checkout_entity::Column::PuzzleId.eq(puzzle_id))
            .order_by_desc(checkout_entity::Column::CheckedOutAt)
            .order_by_desc(checkout_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_open_by_puzzle(
        &self,
        puzzle_id: i32,
    ) -> Result<Option<PuzzleCheckout>, RepositoryError> {
        let model = checkout_entity::Entity::find()
            .filter(checkout_entity::Column::PuzzleId.eq(puzzle_id))
            .filter(checkout_entity::Column::ReturnedAt.is_null())
            .order_by_desc(checkout_entity::Column::Id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn find_open_by_holder(
        &self,
        holder_id: i32,
    ) -> Result<Vec<PuzzleCheckout>, RepositoryError> {
        let models = checkout_entity::Entity::find()
            .filter(checkout_entity::Column::HolderId.eq(holder_id))
            .filter(checkout_entity::Column::ReturnedAt.is_null())
            .order_by_desc(checkout_entity::Column::CheckedOutAt)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, checkout: &PuzzleCheckout) -> Result<PuzzleCheckout, RepositoryError> {
        let mut model: checkout_entity::ActiveModel = checkout_entity::Entity::find_by_id(checkout.id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?
            .into();

        model.returned_at = Set(checkout.returned_at.map(Into::into));
        model.time_to_complete = Set(checkout.time_to_complete);
        model.user_difficulty_rating = Set(checkout.user_difficulty_rating);

        Ok(model.update(self.db.as_ref()).await?.into())
    }
}
