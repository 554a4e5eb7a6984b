// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{checkout::PuzzleCheckout, holder::PuzzleHolder, maker::PuzzleMaker, puzzle::Puzzle};
use serde::{Deserialize, Serialize};

/// 一次导入写入的全部记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedPuzzle {
    pub puzzle: Puzzle,
    pub maker: PuzzleMaker,
    pub holder: PuzzleHolder,
    pub checkout: PuzzleCheckout,
}
