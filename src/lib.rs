// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

pub mod config;
pub mod errors;
pub mod report;
mod runner;
pub mod seq;

use crate::errors::SnpError;

pub use crate::seq::iupac::ambiguity_code;
pub use crate::seq::marker::{rewrite, Marker, Rewrite, RewriteOutcome};
pub use crate::seq::record::{SequenceRecord, SnpRecord};

pub fn run() -> Result<(), SnpError> {
    runner::run()
}
