// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：拼图、制造商、借阅人与借阅记录
/// - 仓库接口（repositories）：数据持久化抽象接口
/// - 抓取接口（scraping）：商品页面抓取器的能力接口
/// - 服务（services）：导入与借阅流程
pub mod models;
pub mod repositories;
pub mod scraping;
pub mod services;
