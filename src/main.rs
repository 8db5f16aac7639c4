// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use motif_mark::errors::MotifMarkError;

fn main() -> Result<(), MotifMarkError> {
    motif_mark::run()
}
