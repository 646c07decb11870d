// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Objects and material groups under construction

use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::mesh::Geometry;

/// How an object came to exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration {
    /// Default object opened before any `o` line; the next `o` renames it
    Implicit,
    /// Created or renamed by an `o` line
    Explicit,
}

/// Material or group label of an object
///
/// Labels never partition the geometry buffers. The vertex range records
/// which vertices were written while the group was active.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaterialGroup {
    pub name: String,
    /// Smoothing state of the object when the group was opened
    pub smooth: bool,
    /// First vertex written under this group
    pub start: usize,
    /// One past the last vertex; `None` while the group is open
    pub end: Option<usize>,
}

impl MaterialGroup {
    pub fn new(name: impl Into<String>, smooth: bool, start: usize) -> Self {
        Self {
            name: name.into(),
            smooth,
            start,
            end: None,
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Vertices written under this group (empty while open)
    #[inline]
    pub fn vertex_range(&self) -> Range<usize> {
        self.start..self.end.unwrap_or(self.start)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_range().len()
    }
}

/// One named mesh in progress
#[derive(Debug, Clone)]
pub struct ParseObject {
    pub name: String,
    pub declaration: Declaration,
    /// Current smoothing state, toggled by `s`
    pub smooth: bool,
    pub geometry: Geometry,
    pub material_groups: Vec<MaterialGroup>,
}

impl ParseObject {
    /// The unnamed default object a parse starts with
    pub fn implicit() -> Self {
        Self::with_declaration(String::new(), Declaration::Implicit)
    }

    /// An object opened by `o name`
    pub fn explicit(name: impl Into<String>) -> Self {
        Self::with_declaration(name.into(), Declaration::Explicit)
    }

    fn with_declaration(name: String, declaration: Declaration) -> Self {
        Self {
            name,
            declaration,
            smooth: true,
            geometry: Geometry::new(),
            material_groups: Vec::new(),
        }
    }

    #[inline]
    pub fn is_implicit(&self) -> bool {
        self.declaration == Declaration::Implicit
    }

    /// Give the implicit object its declared name
    pub fn declare(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.declaration = Declaration::Explicit;
    }

    /// Open a group starting at the current vertex, snapshotting `smooth`
    pub fn start_group(&mut self, name: impl Into<String>) {
        let start = self.geometry.vertex_count();
        self.material_groups
            .push(MaterialGroup::new(name, self.smooth, start));
    }

    /// Open an unnamed group if none exists yet, before geometry is written
    pub fn ensure_group(&mut self) {
        if self.material_groups.is_empty() {
            self.start_group(String::new());
        }
    }

    /// Close the most recent group at the current vertex count
    pub fn flush(&mut self) {
        let end = self.geometry.vertex_count();
        if let Some(group) = self.material_groups.last_mut() {
            if group.is_open() {
                group.end = Some(end);
            }
        }
    }

    /// Close every open group: at the next group's start, or at the end of
    /// the geometry for the last one
    pub fn close_groups(&mut self) {
        let total = self.geometry.vertex_count();
        let starts: Vec<usize> = self
            .material_groups
            .iter()
            .skip(1)
            .map(|group| group.start)
            .chain(std::iter::once(total))
            .collect();

        for (group, next_start) in self.material_groups.iter_mut().zip(starts) {
            if group.is_open() {
                group.end = Some(next_start);
            }
        }
    }

    pub fn material_names(&self) -> impl Iterator<Item = &str> {
        self.material_groups.iter().map(|group| group.name.as_str())
    }
}
