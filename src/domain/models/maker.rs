// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 拼图制造商（品牌）
///
/// 名称按约定唯一，数据库不做约束。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleMaker {
    pub id: i32,
    pub name: String,
    /// 所在国家（可选）
    pub country: Option<String>,
}
