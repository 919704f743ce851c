// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::errors::SnpError;
use crate::seq::file::MarkerFile;
use crate::seq::record::SequenceRecord;

/// Reads marker list lines (`gene,[chromosome,]sequence`) from any reader. Blank lines are
/// skipped; errors carry the 1-based line number.
pub fn parse_marker_list<R: BufRead>(reader: R) -> Result<MarkerFile, SnpError> {
    let mut result: MarkerFile = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let l = line?;
        if l.trim().is_empty() {
            continue;
        }
        let record = SequenceRecord::parse(&l).map_err(|e| SnpError::Line {
            line: idx + 1,
            source: Box::new(e),
        })?;
        result.push(record);
    }
    debug!("read {} marker records", result.len());

    Ok(result)
}

pub fn read_marker_list_file<P: AsRef<Path>>(path: P) -> Result<MarkerFile, SnpError> {
    let file = File::open(path)?;
    parse_marker_list(BufReader::new(file))
}

pub fn write_marker_list<W: Write>(writer: &mut W, records: &[SequenceRecord]) -> Result<(), SnpError> {
    for record in records {
        writeln!(writer, "{}", record.to_marker_list_line()?)?;
    }
    Ok(())
}

pub fn write_marker_list_file<P: AsRef<Path>>(
    path: P,
    records: &[SequenceRecord],
) -> Result<(), SnpError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_marker_list(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}
