// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 拼图（puzzle）：收藏中的一盒拼图及其待写入形式
/// - 制造商（maker）：生产拼图的品牌
/// - 借阅人（holder）：与外部身份绑定的家庭成员或朋友
/// - 借阅记录（checkout）：借出与归还的时间区间
/// - 抓取结果（scraped_puzzle）：从商品页面解析出的原始数据
pub mod checkout;
pub mod holder;
pub mod identity;
pub mod import;
pub mod maker;
pub mod puzzle;
pub mod scraped_puzzle;
