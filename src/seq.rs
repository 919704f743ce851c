// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

pub mod file;
pub mod iupac;
pub mod marker;
pub mod marker_list;
pub mod record;
