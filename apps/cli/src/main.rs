// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! OBJ-Lite CLI - parse Wavefront OBJ files and print JSON reports.
//!
//! ```text
//! obj-lite <file.obj>...
//! ```
//!
//! Every file is parsed in parallel; one JSON document per file is written
//! to stdout in argument order. Logs go to stderr (`RUST_LOG`, default
//! `info`). The exit status is non-zero if any file fails.
//!
//! # Environment
//!
//! - `OBJ_LITE_WORKERS` - worker threads (default: CPU count)
//! - `OBJ_LITE_STRICT_FACES` - reject faces with more than four references
//! - `OBJ_LITE_KEEP_EMPTY` - keep objects without geometry
//! - `OBJ_LITE_PRETTY` - pretty-print JSON (default: true)
//! - `OBJ_LITE_FULL` - print the whole document instead of a summary

use std::io::Write;

use anyhow::{bail, Context};
use obj_lite_geometry::ObjParser;

mod config;
mod error;
mod services;
mod types;

use config::Config;
use error::FileError;
use types::FileReport;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        bail!("usage: obj-lite <file.obj>...");
    }

    let config = Config::from_env();

    tracing::info!(
        files = paths.len(),
        worker_threads = config.worker_threads,
        strict_faces = config.strict_faces,
        keep_empty = config.keep_empty,
        full = config.full,
        "Starting OBJ-Lite"
    );

    // Initialize rayon thread pool
    rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_threads)
        .build_global()
        .context("Failed to initialize rayon thread pool")?;

    let parser = ObjParser::with_options(config.parse_options());
    let results = services::processor::process_files(&paths, &parser, config.full);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut failed = 0;

    for result in results {
        match result.and_then(|report| render(&report, config.pretty)) {
            Ok(json) => writeln!(out, "{json}").context("Failed to write report")?,
            Err(err) => {
                tracing::error!(error = %err, "File failed");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} files failed", paths.len());
    }

    Ok(())
}

fn render(report: &FileReport, pretty: bool) -> Result<String, FileError> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}
