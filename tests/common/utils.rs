// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fs,
    path::{Path, PathBuf},
};

#[allow(dead_code)]
pub fn data(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("writing test input");
    path
}

#[allow(dead_code)]
pub fn rgba_at(png: &Path, x: u32, y: u32) -> [u8; 4] {
    let img = image::open(png).expect("decoding PNG").to_rgba8();
    img.get_pixel(x, y).0
}
