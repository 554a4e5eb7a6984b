// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 拼图仓库（puzzle_repository）：拼图的查询、删除与导入事务
/// - 制造商仓库（maker_repository）：制造商的查找或创建
/// - 借阅人仓库（holder_repository）：与外部身份绑定的借阅人
/// - 借阅记录仓库（checkout_repository）：借出与归还
pub mod checkout_repository;
pub mod holder_repository;
pub mod maker_repository;
pub mod puzzle_repository;
