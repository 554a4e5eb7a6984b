// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 拼图借阅人
///
/// 家庭成员或朋友，通过 `user_id` 与外部身份一一对应。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleHolder {
    pub id: i32,
    /// 显示名称
    pub name: String,
    /// 联系方式（邮箱或电话）
    pub contact: Option<String>,
    /// 外部身份标识
    pub user_id: String,
}
