// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 导入服务（import_service）：按商品URL抓取并导入拼图
/// - 借阅服务（checkout_service）：借出、归还与借阅历史
pub mod checkout_service;
pub mod import_service;
