// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Peter Carlton

use std::{fmt, io::Write};

use clap::ValueEnum;
use itertools::Itertools;
use serde::Serialize;

use crate::errors::SnpError;
use crate::seq::marker::{Marker, RewriteOutcome};
use crate::seq::record::SequenceRecord;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[clap(name = "csv")]
    #[clap(alias = "c")]
    Csv,
    #[clap(name = "json")]
    #[clap(alias = "j")]
    Json,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "csv" | "c" => Some(OutputFormat::Csv),
            "json" | "j" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Serialize)]
pub struct RecordReport<'a> {
    pub gene: &'a str,
    pub chromosome: Option<&'a str>,
    pub position: Option<usize>,
    pub original_base: Option<char>,
    pub variant_base: Option<char>,
    pub template_sequence: &'a str,
    #[serde(flatten)]
    pub outcome: RewriteOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markers: Option<Vec<Marker>>,
}

impl<'a> RecordReport<'a> {
    pub fn new(record: &'a SequenceRecord, all_markers: bool) -> Self {
        RecordReport {
            gene: record.gene(),
            chromosome: record.chromosome(),
            position: record.position(),
            original_base: record.original_base(),
            variant_base: record.variant_base(),
            template_sequence: record.template_sequence(),
            outcome: record.outcome(),
            markers: all_markers.then(|| record.markers().copied().collect()),
        }
    }

    fn status(&self) -> String {
        match self.outcome {
            RewriteOutcome::Complete => String::from("complete"),
            RewriteOutcome::Truncated { offset } => format!("truncated@{}", offset),
        }
    }

    /// Fields of one CSV row. Markers are `position:original/variant`, separated by ';'.
    pub fn csv_fields(&self) -> Vec<String> {
        fn opt<T: ToString>(v: Option<T>) -> String {
            v.map(|v| v.to_string()).unwrap_or_default()
        }
        let mut fields = vec![
            self.gene.to_string(),
            opt(self.chromosome),
            opt(self.position),
            opt(self.original_base),
            opt(self.variant_base),
            self.template_sequence.to_string(),
            self.status(),
        ];
        if let Some(markers) = &self.markers {
            fields.push(
                markers
                    .iter()
                    .map(|m| format!("{}:{}/{}", m.position, m.original, m.variant))
                    .join(";"),
            );
        }
        fields
    }
}

pub fn csv_header(all_markers: bool) -> Vec<&'static str> {
    let mut header = vec![
        "gene",
        "chromosome",
        "position",
        "original",
        "variant",
        "template",
        "status",
    ];
    if all_markers {
        header.push("markers");
    }
    header
}

pub fn write_report<W: Write>(
    writer: &mut W,
    records: &[SequenceRecord],
    format: OutputFormat,
    all_markers: bool,
) -> Result<(), SnpError> {
    let reports: Vec<RecordReport> = records
        .iter()
        .map(|rec| RecordReport::new(rec, all_markers))
        .collect();
    match format {
        OutputFormat::Csv => {
            let mut csv_writer = csv::WriterBuilder::new().from_writer(&mut *writer);
            csv_writer.write_record(csv_header(all_markers))?;
            for report in &reports {
                csv_writer.write_record(report.csv_fields())?;
            }
            csv_writer.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, &reports)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
