// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    /// 创建拼图收藏相关的全部数据表
    ///
    /// 外键以内联方式声明，SQLite 不支持对已有表追加外键约束
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 1. puzzle_makers
        manager
            .create_table(
                Table::create()
                    .table(PuzzleMakers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PuzzleMakers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PuzzleMakers::Name).string().not_null())
                    .col(ColumnDef::new(PuzzleMakers::Country).string())
                    .to_owned(),
            )
            .await?;

        // 2. puzzle_holders
        manager
            .create_table(
                Table::create()
                    .table(PuzzleHolders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PuzzleHolders::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PuzzleHolders::Name).string().not_null())
                    .col(ColumnDef::new(PuzzleHolders::Contact).string())
                    .col(ColumnDef::new(PuzzleHolders::UserId).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 3. puzzles
        manager
            .create_table(
                Table::create()
                    .table(Puzzles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Puzzles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Puzzles::Name).string().not_null())
                    .col(ColumnDef::new(Puzzles::Description).text().not_null())
                    .col(ColumnDef::new(Puzzles::PieceCount).integer().not_null().default(0))
                    .col(ColumnDef::new(Puzzles::DifficultyRating).double())
                    .col(ColumnDef::new(Puzzles::MakerId).integer().not_null())
                    .col(ColumnDef::new(Puzzles::ProductUrl).string().not_null())
                    .col(ColumnDef::new(Puzzles::ImageUrl).string().not_null())
                    .col(
                        ColumnDef::new(Puzzles::ArticleNumber)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Puzzles::Year).integer().not_null().default(0))
                    .col(ColumnDef::new(Puzzles::Artist).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_puzzles_maker")
                            .from(Puzzles::Table, Puzzles::MakerId)
                            .to(PuzzleMakers::Table, PuzzleMakers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 4. puzzle_checkouts
        manager
            .create_table(
                Table::create()
                    .table(PuzzleCheckouts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PuzzleCheckouts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PuzzleCheckouts::PuzzleId).integer().not_null())
                    .col(ColumnDef::new(PuzzleCheckouts::HolderId).integer().not_null())
                    .col(
                        ColumnDef::new(PuzzleCheckouts::CheckedOutAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PuzzleCheckouts::ReturnedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(PuzzleCheckouts::TimeToComplete).double())
                    .col(ColumnDef::new(PuzzleCheckouts::UserDifficultyRating).double())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_checkouts_puzzle")
                            .from(PuzzleCheckouts::Table, PuzzleCheckouts::PuzzleId)
                            .to(Puzzles::Table, Puzzles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_checkouts_holder")
                            .from(PuzzleCheckouts::Table, PuzzleCheckouts::HolderId)
                            .to(PuzzleHolders::Table, PuzzleHolders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup indexes only; uniqueness stays an application-level check
        manager
            .create_index(
                Index::create()
                    .name("idx_puzzles_product_url")
                    .table(Puzzles::Table)
                    .col(Puzzles::ProductUrl)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_puzzles_maker_id")
                    .table(Puzzles::Table)
                    .col(Puzzles::MakerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_puzzle_holders_user_id")
                    .table(PuzzleHolders::Table)
                    .col(PuzzleHolders::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_puzzle_checkouts_puzzle_id")
                    .table(PuzzleCheckouts::Table)
                    .col(PuzzleCheckouts::PuzzleId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_puzzle_checkouts_holder_id")
                    .table(PuzzleCheckouts::Table)
                    .col(PuzzleCheckouts::HolderId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PuzzleCheckouts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Puzzles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PuzzleHolders::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PuzzleMakers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PuzzleMakers {
    Table,
    Id,
    Name,
    Country,
}

#[derive(DeriveIden)]
enum PuzzleHolders {
    Table,
    Id,
    Name,
    Contact,
    UserId,
}

#[derive(DeriveIden)]
enum Puzzles {
    Table,
    Id,
    Name,
    Description,
    PieceCount,
    DifficultyRating,
    MakerId,
    ProductUrl,
    ImageUrl,
    ArticleNumber,
    Year,
    Artist,
}

#[derive(DeriveIden)]
enum PuzzleCheckouts {
    Table,
    Id,
    PuzzleId,
    HolderId,
    CheckedOutAt,
    ReturnedAt,
    TimeToComplete,
    UserDifficultyRating,
}
