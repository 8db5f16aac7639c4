// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

pub mod config;
pub mod draw;
pub mod errors;
pub mod features;
pub mod runner;
pub mod seq;

use crate::errors::MotifMarkError;

pub fn run() -> Result<(), MotifMarkError> {
    runner::run()
}
