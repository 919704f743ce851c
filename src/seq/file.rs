// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use crate::seq::record::SequenceRecord;

// For our purposes, a marker list file is just a Vec of sequence records.
//

pub type MarkerFile = Vec<SequenceRecord>;
