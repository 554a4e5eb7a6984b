// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 抓取领域模块
///
/// 定义拼图商品页面抓取器的能力接口
pub mod scraper;
