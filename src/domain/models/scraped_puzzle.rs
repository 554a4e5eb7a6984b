// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 从商品页面抓取到的拼图信息
///
/// 字段缺失时回退为默认值而不是报错，回退过的字段名记录在
/// `degraded_fields` 中，便于调用方判断数据质量。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapedPuzzle {
    /// 标题中间段，例如 "Robin Hood Festival"
    pub title: String,
    /// 页面上的完整标题
    pub full_title: String,
    pub piece_count: i32,
    pub article_number: i64,
    pub artist: String,
    pub year: Option<i32>,
    pub image_url: String,
    pub product_url: String,
    /// 制造商名称，目前固定为单一品牌
    pub maker: String,
    /// 解析时回退为默认值的字段
    #[serde(default)]
    pub degraded_fields: Vec<String>,
}

impl ScrapedPuzzle {
    pub const JAN_VAN_HAASTEREN: &'static str = "Jan van Haasteren";

    /// 是否有字段回退为默认值
    pub fn is_degraded(&self) -> bool {
        !self.degraded_fields.is_empty()
    }
}
