// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 借阅记录
///
/// 记录某位借阅人借出某盒拼图的时间区间，以及归还时填写的完成耗时
/// 和主观难度。只会随拼图或借阅人被级联删除。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleCheckout {
    pub id: i32,
    pub puzzle_id: i32,
    pub holder_id: i32,
    /// 借出时间
    pub checked_out_at: DateTime<Utc>,
    /// 归还时间，未归还时为空
    pub returned_at: Option<DateTime<Utc>>,
    /// 完成耗时（小时）
    pub time_to_complete: Option<f64>,
    /// 借阅人给出的难度评分
    pub user_difficulty_rating: Option<f64>,
}

impl PuzzleCheckout {
    pub fn is_open(&self) -> bool {
        self.returned_at.is_none()
    }

    /// 借出到指定时间之间经过的小时数
    pub fn hours_until(&self, until: DateTime<Utc>) -> f64 {
        let seconds = (until - self.checked_out_at).num_seconds().max(0);
        seconds as f64 / 3600.0
    }
}

/// 新建借阅记录
#[derive(Debug, Clone, PartialEq)]
pub struct NewCheckout {
    pub puzzle_id: i32,
    pub holder_id: i32,
    pub checked_out_at: DateTime<Utc>,
}

/// 归还信息
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReturnDetails {
    /// 归还时间，为空时使用当前时间
    pub returned_at: Option<DateTime<Utc>>,
    /// 完成耗时（小时），为空时按借出与归还时间推算
    pub time_to_complete: Option<f64>,
    pub user_difficulty_rating: Option<f64>,
}
