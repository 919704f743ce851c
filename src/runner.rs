// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier
// Modifications (c) 2026 Peter Carlton

use std::{
    fs::File,
    io::{stdout, BufWriter, Write},
    path::PathBuf,
};

use clap::{ArgAction, Parser};
use log::{info, warn, LevelFilter};

use crate::config::{find_config, SnpTemplateConfig};
use crate::errors::SnpError;
use crate::report::{write_report, OutputFormat};
use crate::seq::file::MarkerFile;
use crate::seq::marker::RewriteOutcome;
use crate::seq::marker_list::read_marker_list_file;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Marker list file (gene,[chromosome,]sequence per line)
    marker_fname: String,

    /// Output format
    #[arg(short, long = "format",
        help = "Output format [csv|json] (or just c|j); default: csv",
        hide_possible_values = true,
    )]
    format: Option<OutputFormat>,

    /// List every marker of each sequence, not only the last one
    #[arg(short, long = "all-markers")]
    all_markers: bool,

    /// Fail on the first sequence with a malformed marker
    #[arg(short, long)]
    strict: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// More log output (-v: info, -vv: debug, -vvv: trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

// Effective settings: CLI flags win over the config file.
#[derive(Debug, PartialEq)]
struct Settings {
    log_level: LevelFilter,
    format: OutputFormat,
    strict: bool,
    all_markers: bool,
}

impl Settings {
    fn resolve(cli: &Cli, config: &SnpTemplateConfig) -> Self {
        let log_level = match cli.verbose {
            0 => config.log_level.unwrap_or(LevelFilter::Warn),
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        Settings {
            log_level,
            format: cli.format.or(config.format).unwrap_or(OutputFormat::Csv),
            strict: cli.strict || config.strict.unwrap_or(false),
            all_markers: cli.all_markers || config.all_markers.unwrap_or(false),
        }
    }
}

fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn check_strict(records: &MarkerFile) -> Result<(), SnpError> {
    for record in records {
        if let RewriteOutcome::Truncated { offset } = record.outcome() {
            return Err(SnpError::Truncated {
                gene: record.gene().to_string(),
                offset,
            });
        }
    }
    Ok(())
}

pub fn run() -> Result<(), SnpError> {
    let cli = Cli::parse();

    let mut config_err: Option<String> = None;
    let mut config = SnpTemplateConfig::default();
    if let Some(path) = find_config() {
        match SnpTemplateConfig::from_file(&path) {
            Ok(cfg) => config = cfg,
            Err(e) => {
                config_err = Some(format!("Error reading {}: {}", path.display(), e));
            }
        }
    }
    let settings = Settings::resolve(&cli, &config);

    init_logging(settings.log_level);
    info!("Starting log");
    if let Some(msg) = config_err.take() {
        warn!("{}", msg);
    }

    let records = read_marker_list_file(&cli.marker_fname)?;
    let truncated = records.iter().filter(|rec| !rec.is_complete()).count();
    info!(
        "{}: {} records, {} truncated",
        cli.marker_fname,
        records.len(),
        truncated
    );
    if settings.strict {
        check_strict(&records)?;
    }

    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(stdout().lock())),
    };
    write_report(&mut writer, &records, settings.format, settings.all_markers)?;
    writer.flush()?;

    Ok(())
}
