// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

// Records for SNP markers given as a probe sequence with inline [X/Y] markers, one per line of a
// marker list:
//
//   BS00068396_51,2AS,CGAAGCG...CCCCTA[T/C]ATGCAGG...
//
// The chromosome field is optional.

use std::collections::HashMap;
use std::str::FromStr;

use log::warn;
use serde::Serialize;

use crate::errors::SnpError;
use crate::seq::marker::{rewrite, Marker, RewriteOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exon {
    pub chromosome: String,
    pub start: usize,
    pub end: usize,
}

pub type ExonList = HashMap<String, Vec<Exon>>;

/// Identity of a SNP marker. When built from a sequence, the position and bases are those of the
/// last marker in it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SnpRecord {
    pub gene: String,
    pub chromosome: Option<String>,
    pub position: Option<usize>,
    pub original_base: Option<char>,
    pub variant_base: Option<char>,
    pub exon_list: ExonList,
}

#[derive(Debug, Clone)]
pub struct SequenceRecord {
    snp: SnpRecord,
    raw_sequence: String,
    template_sequence: String,
    markers: Vec<Marker>,
    outcome: RewriteOutcome,
}

impl SequenceRecord {
    pub fn new(
        gene: impl Into<String>,
        chromosome: Option<String>,
        raw_sequence: impl Into<String>,
    ) -> Result<Self, SnpError> {
        let raw_sequence = raw_sequence.into();
        let mut snp = SnpRecord {
            gene: gene.into(),
            chromosome,
            ..Default::default()
        };
        let (template_sequence, markers, outcome) = rewrite(&raw_sequence)?.into_parts();

        // Every marker overwrites the previous one, so only the last survives.
        for marker in &markers {
            snp.position = Some(marker.position);
            snp.original_base = Some(marker.original);
            snp.variant_base = Some(marker.variant);
        }
        if let RewriteOutcome::Truncated { offset } = outcome {
            warn!(
                "{}: malformed marker at offset {}, sequence not fully rewritten",
                snp.gene, offset
            );
        }

        Ok(SequenceRecord {
            snp,
            raw_sequence,
            template_sequence,
            markers,
            outcome,
        })
    }

    /// Parses `gene,chromosome,sequence` or `gene,sequence`.
    pub fn parse(line: &str) -> Result<Self, SnpError> {
        let line = line.trim_end_matches(&['\n', '\r'][..]);
        let mut fields: Vec<&str> = line.split(',').collect();
        // Trailing empty fields don't count: "gene,chr,seq," has three fields.
        while fields.len() > 1 && fields.last() == Some(&"") {
            fields.pop();
        }
        match fields.as_slice() {
            [gene, chromosome, sequence] => SequenceRecord::new(
                *gene,
                Some(chromosome.trim().to_string()),
                *sequence,
            ),
            [gene, sequence] => SequenceRecord::new(*gene, None, *sequence),
            _ => Err(SnpError::FieldCount {
                found: fields.len(),
                line: line.to_string(),
            }),
        }
    }

    pub fn snp(&self) -> &SnpRecord {
        &self.snp
    }

    pub fn gene(&self) -> &str {
        &self.snp.gene
    }

    pub fn chromosome(&self) -> Option<&str> {
        self.snp.chromosome.as_deref()
    }

    pub fn position(&self) -> Option<usize> {
        self.snp.position
    }

    pub fn original_base(&self) -> Option<char> {
        self.snp.original_base
    }

    pub fn variant_base(&self) -> Option<char> {
        self.snp.variant_base
    }

    pub fn exon_list(&self) -> &ExonList {
        &self.snp.exon_list
    }

    pub fn raw_sequence(&self) -> &str {
        &self.raw_sequence
    }

    pub fn template_sequence(&self) -> &str {
        &self.template_sequence
    }

    pub fn markers(&self) -> std::slice::Iter<'_, Marker> {
        self.markers.iter()
    }

    pub fn outcome(&self) -> RewriteOutcome {
        self.outcome
    }

    pub fn is_complete(&self) -> bool {
        self.outcome == RewriteOutcome::Complete
    }

    /// The record as a line of a marker list file (no line terminator). Fails if a field holds
    /// a ',' or a line break, since the line could not be read back.
    pub fn to_marker_list_line(&self) -> Result<String, SnpError> {
        let fields: Vec<&str> = std::iter::once(self.gene())
            .chain(self.chromosome())
            .chain(std::iter::once(self.raw_sequence()))
            .collect();
        if let Some(bad) = fields.iter().find(|f| f.contains(&[',', '\n', '\r'][..])) {
            return Err(SnpError::Format(format!(
                "{}: field {:?} can't be written to a marker list",
                self.gene(),
                bad
            )));
        }
        Ok(fields.join(","))
    }
}

impl FromStr for SequenceRecord {
    type Err = SnpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SequenceRecord::parse(s)
    }
}
