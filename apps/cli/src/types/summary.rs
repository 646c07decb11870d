// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Summary types for parsed OBJ files.

use std::collections::BTreeMap;

use obj_lite_geometry::{MaterialGroup, ObjDocument, ObjObject, PrimitiveType};
use serde::{Deserialize, Serialize};

/// One report per input file.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum FileReport {
    Summary(FileSummary),
    Full(FileDocument),
}

/// Complete parsed document of a file.
#[derive(Debug, Clone, Serialize)]
pub struct FileDocument {
    pub path: String,
    pub document: ObjDocument,
}

/// Condensed view of a parsed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSummary {
    /// Input path as given on the command line.
    pub path: String,
    /// Objects in declaration order.
    pub objects: Vec<ObjectSummary>,
    /// Referenced material libraries (never loaded).
    pub material_libraries: Vec<String>,
    /// Non-comment lines per leading keyword.
    pub directive_counts: BTreeMap<String, usize>,
    /// Processing statistics.
    pub stats: ProcessingStats,
}

/// Condensed view of one object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectSummary {
    pub name: String,
    pub primitive: PrimitiveType,
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub bounds: Bounds,
    pub has_uvs: bool,
    pub has_colors: bool,
    pub smooth: bool,
    /// Material/group labels with their vertex ranges.
    pub groups: Vec<MaterialGroup>,
}

/// Axis-aligned bounds of an object's positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

/// Processing statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingStats {
    pub total_objects: usize,
    pub total_vertices: usize,
    pub total_triangles: usize,
    /// Size of the input in bytes.
    pub content_size: usize,
    /// Time spent parsing (ms).
    pub parse_time_ms: u64,
}

impl From<&ObjObject> for ObjectSummary {
    fn from(object: &ObjObject) -> Self {
        let geometry = &object.geometry;
        let (min, max) = geometry.bounds();

        Self {
            name: object.name.clone(),
            primitive: geometry.primitive,
            vertex_count: geometry.vertex_count(),
            triangle_count: geometry.triangle_count(),
            bounds: Bounds {
                min: [min.x, min.y, min.z],
                max: [max.x, max.y, max.z],
            },
            has_uvs: geometry.has_uv_indices,
            has_colors: geometry.has_colors(),
            smooth: object.smooth,
            groups: object.material_groups.clone(),
        }
    }
}

impl FileSummary {
    /// Summarize a parsed document.
    pub fn new(
        path: impl Into<String>,
        document: &ObjDocument,
        directive_counts: BTreeMap<String, usize>,
        content_size: usize,
        parse_time_ms: u64,
    ) -> Self {
        let objects: Vec<ObjectSummary> = document.objects.iter().map(ObjectSummary::from).collect();

        let stats = ProcessingStats {
            total_objects: objects.len(),
            total_vertices: objects.iter().map(|o| o.vertex_count).sum(),
            total_triangles: objects.iter().map(|o| o.triangle_count).sum(),
            content_size,
            parse_time_ms,
        };

        Self {
            path: path.into(),
            objects,
            material_libraries: document.material_libraries.clone(),
            directive_counts,
            stats,
        }
    }
}
