// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vertex pool: raw declared data in file order

use std::fmt;

/// Kind of per-vertex record held by the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Position,
    Normal,
    Color,
    Uv,
}

impl Component {
    /// Scalars per record
    #[inline]
    pub const fn stride(self) -> usize {
        match self {
            Component::Uv => 2,
            Component::Position | Component::Normal | Component::Color => 3,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Position => "Position",
            Component::Normal => "Normal",
            Component::Color => "Color",
            Component::Uv => "Texture coordinate",
        };
        f.write_str(name)
    }
}

/// Append-only flat buffers of everything declared so far
///
/// Offsets into these buffers are component offsets (record index × stride).
#[derive(Debug, Clone, Default)]
pub struct VertexPool {
    /// `v` data (x, y, z)
    pub positions: Vec<f32>,
    /// `vn` data (nx, ny, nz)
    pub normals: Vec<f32>,
    /// Per-position colors (r, g, b); never filled by the base grammar
    pub colors: Vec<f32>,
    /// `vt` data (u, v)
    pub uvs: Vec<f32>,
}

impl VertexPool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push_position(&mut self, position: [f32; 3]) {
        self.positions.extend_from_slice(&position);
    }

    #[inline]
    pub fn push_normal(&mut self, normal: [f32; 3]) {
        self.normals.extend_from_slice(&normal);
    }

    #[inline]
    pub fn push_color(&mut self, color: [f32; 3]) {
        self.colors.extend_from_slice(&color);
    }

    #[inline]
    pub fn push_uv(&mut self, uv: [f32; 2]) {
        self.uvs.extend_from_slice(&uv);
    }

    /// Flat buffer for a component
    #[inline]
    pub fn buffer(&self, component: Component) -> &[f32] {
        match component {
            Component::Position => &self.positions,
            Component::Normal => &self.normals,
            Component::Color => &self.colors,
            Component::Uv => &self.uvs,
        }
    }

    /// Number of whole records declared for a component
    #[inline]
    pub fn record_count(&self, component: Component) -> usize {
        self.buffer(component).len() / component.stride()
    }

    /// Record at a component offset, if it is fully inside the buffer
    #[inline]
    pub fn record(&self, component: Component, offset: usize) -> Option<&[f32]> {
        self.buffer(component).get(offset..offset + component.stride())
    }
}
