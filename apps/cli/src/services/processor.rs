// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! OBJ file processing.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use obj_lite_core::LineScanner;
use obj_lite_geometry::ObjParser;
use rayon::prelude::*;

use crate::error::FileError;
use crate::types::{FileDocument, FileReport, FileSummary};

/// Read and parse one file.
pub fn process_file(path: &Path, parser: &ObjParser, full: bool) -> Result<FileReport, FileError> {
    let path_str = path.display().to_string();

    let content = std::fs::read_to_string(path).map_err(|source| FileError::Read {
        path: path_str.clone(),
        source,
    })?;

    tracing::info!(path = %path_str, content_size = content.len(), "Parsing OBJ file");

    process_content(path_str, &content, parser, full)
}

/// Parse already loaded content.
pub fn process_content(
    path: String,
    content: &str,
    parser: &ObjParser,
    full: bool,
) -> Result<FileReport, FileError> {
    let start = Instant::now();
    let document = parser.parse(content).map_err(|source| FileError::Parse {
        path: path.clone(),
        source,
    })?;
    let parse_time = start.elapsed();

    tracing::info!(
        path = %path,
        objects = document.objects.len(),
        vertices = document.vertex_count(),
        parse_time_ms = parse_time.as_millis(),
        "Parse complete"
    );

    if full {
        return Ok(FileReport::Full(FileDocument { path, document }));
    }

    let directive_counts: BTreeMap<String, usize> =
        LineScanner::new(content).count_by_keyword().into_iter().collect();

    Ok(FileReport::Summary(FileSummary::new(
        path,
        &document,
        directive_counts,
        content.len(),
        parse_time.as_millis() as u64,
    )))
}

/// Process every file on the current rayon pool; results keep input order.
pub fn process_files(
    paths: &[String],
    parser: &ObjParser,
    full: bool,
) -> Vec<Result<FileReport, FileError>> {
    paths
        .par_iter()
        .map(|path| process_file(Path::new(path), parser, full))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use obj_lite_geometry::ParseOptions;

    const QUAD: &str = "# quad\nv 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\nvp 1\n";

    #[test]
    fn test_summary_counts_directives() {
        let report = process_content("quad.obj".into(), QUAD, &ObjParser::new(), false).unwrap();
        let FileReport::Summary(summary) = report else {
            panic!("expected a summary");
        };

        assert_eq!(summary.directive_counts.get("v"), Some(&4));
        assert_eq!(summary.directive_counts.get("f"), Some(&1));
        assert_eq!(summary.directive_counts.get("vp"), Some(&1));
        assert!(!summary.directive_counts.contains_key("#"));
        assert_eq!(summary.stats.total_triangles, 2);
        assert_eq!(summary.stats.content_size, QUAD.len());
    }

    #[test]
    fn test_full_report() {
        let report = process_content("quad.obj".into(), QUAD, &ObjParser::new(), true).unwrap();
        let FileReport::Full(full) = report else {
            panic!("expected a full document");
        };
        assert_eq!(full.document.vertex_count(), 6);
    }

    #[test]
    fn test_parse_error_names_file() {
        let parser = ObjParser::with_options(ParseOptions::default());
        let err = process_content("bad.obj".into(), "f 1 2 3\n", &parser, false).unwrap_err();

        assert!(matches!(err, FileError::Parse { .. }));
        assert!(err.to_string().starts_with("Failed to parse bad.obj: line 1:"));
    }

    #[test]
    fn test_files_keep_order() {
        let dir = std::env::temp_dir().join(format!("obj-lite-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let tri = dir.join("tri.obj");
        std::fs::write(&tri, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
        let missing = dir.join("missing.obj");

        let paths = vec![
            tri.display().to_string(),
            missing.display().to_string(),
        ];
        let results = process_files(&paths, &ObjParser::new(), false);

        assert!(matches!(results[0], Ok(FileReport::Summary(_))));
        assert!(matches!(results[1], Err(FileError::Read { .. })));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
