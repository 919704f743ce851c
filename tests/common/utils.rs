// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::path::PathBuf;

use snp_template::seq::{file::MarkerFile, marker_list};

#[allow(dead_code)]
pub const MARKERS: &str = "tests/data/markers.csv";

#[allow(dead_code)]
pub fn read_markers(path: &str) -> MarkerFile {
    marker_list::read_marker_list_file(path).expect("read")
}

// A path in the temp dir that is unique to this process and test.
#[allow(dead_code)]
pub fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("snptemplate-{}-{}", std::process::id(), name));
    path
}

/// Substitutes `code` for the marker at `bracket` by hand.
#[allow(dead_code)]
pub fn splice(raw: &str, bracket: usize, code: char) -> String {
    let mut out = String::from(&raw[..bracket]);
    out.push(code);
    out.push_str(&raw[bracket + 5..]);
    out
}
