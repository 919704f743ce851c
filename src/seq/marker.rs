// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

// Rewriting of probe sequences that carry inline SNP markers, eg
//
//   CCCCTA[T/C]ATGCAGG -> CCCCTAYATGCAGG
//
// Each marker is replaced by the IUPAC code of its two alleles; everything between markers is
// copied through verbatim.

use log::{debug, trace};
use serde::Serialize;

use crate::errors::SnpError;
use crate::seq::iupac::{ambiguity_code, is_marker_base};

// '[', base, '/', base, ']'
const MARKER_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Marker {
    /// 0-based offset of the marker's '[' in the raw sequence.
    pub position: usize,
    pub original: char,
    pub variant: char,
    /// Ambiguity letter substituted for the marker.
    pub code: char,
}

impl Marker {
    pub fn one_based_position(&self) -> usize {
        self.position + 1
    }
}

/// How far the scan got.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RewriteOutcome {
    Complete,
    /// Stopped at a '[' that does not open a well-formed marker; `offset` is its index in the raw
    /// sequence. Nothing from there on made it into the template.
    Truncated { offset: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    template: String,
    markers: Vec<Marker>,
    outcome: RewriteOutcome,
}

impl Rewrite {
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn into_template(self) -> String {
        self.template
    }

    /// Markers in the order they occur in the sequence.
    pub fn markers(&self) -> std::slice::Iter<'_, Marker> {
        self.markers.iter()
    }

    pub fn last_marker(&self) -> Option<&Marker> {
        self.markers.last()
    }

    pub fn outcome(&self) -> RewriteOutcome {
        self.outcome
    }

    pub fn is_complete(&self) -> bool {
        self.outcome == RewriteOutcome::Complete
    }

    pub(crate) fn into_parts(self) -> (String, Vec<Marker>, RewriteOutcome) {
        (self.template, self.markers, self.outcome)
    }
}

// Matches '[', base, '/', base, ']' at the start of `window`. Returns the two bases.
fn match_marker(window: &[u8]) -> Option<(char, char)> {
    match window {
        [b'[', b1, b'/', b2, b']', ..] => {
            let (b1, b2) = (*b1 as char, *b2 as char);
            if is_marker_base(b1) && is_marker_base(b2) {
                Some((b1, b2))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Replaces every `[X/Y]` marker in `raw` by its ambiguity code.
///
/// The scan goes left to right and stops at the first '[' that is not followed by a well-formed
/// marker; the literal run before that bracket is kept and the outcome is
/// [`RewriteOutcome::Truncated`]. An unknown base pair is an error.
pub fn rewrite(raw: &str) -> Result<Rewrite, SnpError> {
    let bytes = raw.as_bytes();
    let mut template = String::with_capacity(raw.len());
    let mut markers: Vec<Marker> = Vec::new();
    let mut pos = 0;

    let outcome = loop {
        let Some(bracket) = raw[pos..].find('[').map(|i| pos + i) else {
            trace!("no more markers after {}", pos);
            template.push_str(&raw[pos..]);
            break RewriteOutcome::Complete;
        };
        trace!("pos {}, next '[' at {}", pos, bracket);

        // Marker bytes are all ASCII, so on a match bracket + MARKER_LEN is a char boundary.
        let Some((original, variant)) = match_marker(&bytes[bracket..]) else {
            debug!("malformed marker at offset {}", bracket);
            template.push_str(&raw[pos..bracket]);
            break RewriteOutcome::Truncated { offset: bracket };
        };

        let code = ambiguity_code(original, variant)?;
        debug!(
            "marker {}/{} at {} -> {}",
            original, variant, bracket, code
        );
        template.push_str(&raw[pos..bracket]);
        template.push(code);
        markers.push(Marker {
            position: bracket,
            original,
            variant,
            code,
        });
        pos = bracket + MARKER_LEN;
    };

    Ok(Rewrite {
        template,
        markers,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_empty() {
        let rw = rewrite("").unwrap();
        assert_eq!("", rw.template());
        assert_eq!(None, rw.last_marker());
        assert!(rw.is_complete());
    }

    #[test]
    fn test_rewrite_no_markers() {
        let rw = rewrite("NOBRACKETS").unwrap();
        assert_eq!("NOBRACKETS", rw.template());
        assert_eq!(None, rw.last_marker());
        assert_eq!(RewriteOutcome::Complete, rw.outcome());
    }

    #[test]
    fn test_rewrite_single_marker() {
        let raw = "CGAAGCGATCCTACTACATTGCGTTCCTTTCCCACTCCCAGGTCCCCCTA[T/C]ATGCAGGATCTTGATTAGTCGTGTGAACAACTGAAATTTGAGCGCCACAA";
        let rw = rewrite(raw).unwrap();
        assert_eq!(
            "CGAAGCGATCCTACTACATTGCGTTCCTTTCCCACTCCCAGGTCCCCCTAYATGCAGGATCTTGATTAGTCGTGTGAACAACTGAAATTTGAGCGCCACAA",
            rw.template()
        );
        let marker = rw.last_marker().unwrap();
        assert_eq!(50, marker.position);
        assert_eq!(raw.find('['), Some(marker.position));
        assert_eq!(51, marker.one_based_position());
        assert_eq!('T', marker.original);
        assert_eq!('C', marker.variant);
        assert_eq!('Y', marker.code);
    }

    #[test]
    fn test_rewrite_two_markers_keeps_last() {
        let rw = rewrite("AA[A/G]TT[C/T]GG").unwrap();
        assert_eq!("AARTTYGG", rw.template());
        assert_eq!(2, rw.markers().count());
        let last = rw.last_marker().unwrap();
        // Position in the raw sequence, not in the template.
        assert_eq!(9, last.position);
        assert_eq!('C', last.original);
        assert_eq!('T', last.variant);
    }

    #[test]
    fn test_rewrite_markers_in_order() {
        let rw = rewrite("[A/C][G/T]x[A/T]").unwrap();
        assert_eq!("MKxW", rw.template());
        let positions: Vec<usize> = rw.markers().map(|m| m.position).collect();
        assert_eq!(vec![0, 5, 11], positions);
        // Iterating again gives the same sequence.
        assert_eq!(3, rw.markers().count());
    }

    #[test]
    fn test_rewrite_adjacent_to_ends() {
        let rw = rewrite("[G/A]").unwrap();
        assert_eq!("R", rw.template());
        assert_eq!(0, rw.last_marker().unwrap().position);
    }

    #[test]
    fn test_rewrite_unclosed_marker() {
        let rw = rewrite("AC[X/Y").unwrap();
        assert_eq!("AC", rw.template());
        assert_eq!(RewriteOutcome::Truncated { offset: 2 }, rw.outcome());
        assert!(!rw.is_complete());
        assert_eq!(None, rw.last_marker());
    }

    #[test]
    fn test_rewrite_truncated_after_good_marker() {
        let rw = rewrite("AA[A/G]TT[N/T]GG[C/T]").unwrap();
        assert_eq!("AARTT", rw.template());
        assert_eq!(RewriteOutcome::Truncated { offset: 9 }, rw.outcome());
        // The marker after the malformed one is never reached.
        assert_eq!(1, rw.markers().count());
        assert_eq!(2, rw.last_marker().unwrap().position);
    }

    #[test]
    fn test_rewrite_is_case_sensitive() {
        let rw = rewrite("AA[a/g]TT").unwrap();
        assert_eq!("AA", rw.template());
        assert_eq!(RewriteOutcome::Truncated { offset: 2 }, rw.outcome());
    }

    #[test]
    fn test_rewrite_multibyte_after_bracket() {
        let rw = rewrite("AC[é/T]").unwrap();
        assert_eq!("AC", rw.template());
        assert!(!rw.is_complete());
    }

    #[test]
    fn test_rewrite_length() {
        let raw = "GATTACA[A/C]GATTACA[G/T]GATTACA";
        let rw = rewrite(raw).unwrap();
        assert_eq!(raw.len() - 4 * rw.markers().count(), rw.template().len());
    }

    #[test]
    fn test_rewrite_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Rewrite>();
        assert_send_sync::<Marker>();
    }

    #[test]
    fn test_rewrite_idempotent() {
        let first = rewrite("AA[A/G]TT[C/T]GG").unwrap();
        let second = rewrite(first.template()).unwrap();
        assert_eq!(first.template(), second.template());
        assert_eq!(None, second.last_marker());
        assert!(second.is_complete());
    }
}
