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

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "puzzle_checkouts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub puzzle_id: i32,
    pub holder_id: i32,
    pub checked_out_at: ChronoDateTimeWithTimeZone,
    pub returned_at: Option<ChronoDateTimeWithTimeZone>,
    pub time_to_complete: Option<f64>,
    pub user_difficulty_rating: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::puzzle::Entity",
        from = "Column::PuzzleId",
        to = "super::puzzle::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Puzzle,
    #[sea_orm(
        belongs_to = "super::puzzle_holder::Entity",
        from = "Column::HolderId",
        to = "super::puzzle_holder::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    PuzzleHolder,
}

impl Related<super::puzzle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Puzzle.def()
    }
}

impl Related<super::puzzle_holder::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PuzzleHolder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
