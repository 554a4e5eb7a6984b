// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::scraped_puzzle::ScrapedPuzzle;
use serde::{Deserialize, Serialize};

/// 拼图实体
///
/// 收藏中的一盒拼图。`product_url` 在应用层被视为唯一键，
/// 数据库中没有对应的唯一约束。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    /// 主键
    pub id: i32,
    /// 拼图名称（标题中间段）
    pub name: String,
    /// 完整标题
    pub description: String,
    /// 拼图块数
    pub piece_count: i32,
    /// 整体难度评分（例如 1-5）
    pub difficulty_rating: Option<f64>,
    /// 所属制造商ID
    pub maker_id: i32,
    /// 商品页面URL
    pub product_url: String,
    /// 商品图片URL
    pub image_url: String,
    /// 商品货号
    pub article_number: i64,
    /// 发行年份，未知时为 0
    pub year: i32,
    /// 插画师
    pub artist: String,
}

/// 待持久化的拼图
///
/// 由抓取结果映射而来，ID 与制造商外键由导入服务在写入时填充。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPuzzle {
    pub name: String,
    pub description: String,
    pub piece_count: i32,
    pub difficulty_rating: Option<f64>,
    pub product_url: String,
    pub image_url: String,
    pub article_number: i64,
    pub year: i32,
    pub artist: String,
}

impl NewPuzzle {
    /// 绑定制造商ID与数据库生成的主键，得到完整的拼图实体
    pub fn into_puzzle(self, id: i32, maker_id: i32) -> Puzzle {
        Puzzle {
            id,
            name: self.name,
            description: self.description,
            piece_count: self.piece_count,
            difficulty_rating: self.difficulty_rating,
            maker_id,
            product_url: self.product_url,
            image_url: self.image_url,
            article_number: self.article_number,
            year: self.year,
            artist: self.artist,
        }
    }
}

/// 抓取结果到拼图的字段映射
///
/// 难度评分在导入时不设置；年份缺失时记为 0。
impl From<&ScrapedPuzzle> for NewPuzzle {
    fn from(scraped: &ScrapedPuzzle) -> Self {
        Self {
            name: scraped.title.clone(),
            description: scraped.full_title.clone(),
            piece_count: scraped.piece_count,
            difficulty_rating: None,
            product_url: scraped.product_url.clone(),
            image_url: scraped.image_url.clone(),
            article_number: scraped.article_number,
            year: scraped.year.unwrap_or(0),
            artist: scraped.artist.clone(),
        }
    }
}
