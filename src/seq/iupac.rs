// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use crate::errors::SnpError;

// Two-base IUPAC codes, bases in alphabetical order.
const PAIR_CODES: [(char, char, char); 6] = [
    ('A', 'G', 'R'),
    ('C', 'T', 'Y'),
    ('C', 'G', 'S'),
    ('A', 'T', 'W'),
    ('G', 'T', 'K'),
    ('A', 'C', 'M'),
];

/// True for the bases allowed inside a `[X/Y]` marker. Case-sensitive.
pub fn is_marker_base(c: char) -> bool {
    matches!(c, 'A' | 'C' | 'G' | 'T')
}

/// Returns the IUPAC ambiguity letter for an unordered pair of bases, eg `A`+`C` -> `M`. A base
/// paired with itself is its own code.
pub fn ambiguity_code(base1: char, base2: char) -> Result<char, SnpError> {
    if !is_marker_base(base1) || !is_marker_base(base2) {
        return Err(SnpError::UnknownBasePair(base1, base2));
    }
    if base1 == base2 {
        return Ok(base1);
    }
    let (lo, hi) = if base1 < base2 {
        (base1, base2)
    } else {
        (base2, base1)
    };
    PAIR_CODES
        .iter()
        .find(|(b1, b2, _)| *b1 == lo && *b2 == hi)
        .map(|(_, _, code)| *code)
        .ok_or(SnpError::UnknownBasePair(base1, base2))
}

/// The two bases behind a two-base ambiguity letter.
pub fn bases_for_code(code: char) -> Option<(char, char)> {
    PAIR_CODES
        .iter()
        .find(|(_, _, c)| *c == code)
        .map(|(b1, b2, _)| (*b1, *b2))
}
