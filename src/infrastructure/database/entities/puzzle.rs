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
#[sea_orm(table_name = "puzzles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub piece_count: i32,
    pub difficulty_rating: Option<f64>,
    pub maker_id: i32,
    pub product_url: String,
    pub image_url: String,
    pub article_number: i64,
    pub year: i32,
    pub artist: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::puzzle_maker::Entity",
        from = "Column::MakerId",
        to = "super::puzzle_maker::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    PuzzleMaker,
    #[sea_orm(has_many = "super::puzzle_checkout::Entity")]
    PuzzleCheckouts,
}

impl Related<super::puzzle_maker::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PuzzleMaker.def()
    }
}

impl Related<super::puzzle_checkout::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PuzzleCheckouts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
