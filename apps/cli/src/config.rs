// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI configuration loaded from environment variables.

use obj_lite_geometry::ParseOptions;

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of worker threads for parallel file parsing.
    pub worker_threads: usize,
    /// Reject faces with more than four references.
    pub strict_faces: bool,
    /// Keep objects that never received geometry.
    pub keep_empty: bool,
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Print the whole parsed document instead of a summary.
    pub full: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            worker_threads: std::env::var("OBJ_LITE_WORKERS")
                .unwrap_or_else(|_| num_cpus::get().to_string())
                .parse()
                .unwrap_or_else(|_| num_cpus::get()),
            strict_faces: flag("OBJ_LITE_STRICT_FACES", false),
            keep_empty: flag("OBJ_LITE_KEEP_EMPTY", false),
            pretty: flag("OBJ_LITE_PRETTY", true),
            full: flag("OBJ_LITE_FULL", false),
        }
    }

    /// Loader options derived from this configuration.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            strict_face_arity: self.strict_faces,
            keep_empty_objects: self.keep_empty,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Boolean variable: `1`/`true`/`yes`/`on` or `0`/`false`/`no`/`off`
fn flag(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|value| parse_flag(&value))
        .unwrap_or(default)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_parse_options() {
        let config = Config {
            worker_threads: 1,
            strict_faces: true,
            keep_empty: false,
            pretty: false,
            full: false,
        };
        let options = config.parse_options();
        assert!(options.strict_face_arity);
        assert!(!options.keep_empty_objects);
    }
}
