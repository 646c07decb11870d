// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry data structures

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How consecutive vertices of a [`Geometry`] are meant to be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PrimitiveType {
    /// Every 3 vertices form a triangle
    #[default]
    Triangles,
    /// Every vertex is a point
    Points,
    /// Consecutive vertices form line segments
    Lines,
}

/// Non-indexed vertex buffers of one object
///
/// Values are resolved copies of pool data, not offsets into the pool.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Geometry {
    /// Vertex positions (x, y, z)
    pub positions: Vec<f32>,
    /// Vertex normals (nx, ny, nz)
    pub normals: Vec<f32>,
    /// Vertex colors (r, g, b); may cover only some vertices
    pub colors: Vec<f32>,
    /// Texture coordinates (u, v)
    pub uvs: Vec<f32>,
    /// Set once any face supplied texture coordinate indices
    pub has_uv_indices: bool,
    pub primitive: PrimitiveType,
}

impl Geometry {
    /// Create new empty geometry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a position (x, y, z)
    #[inline]
    pub fn add_position(&mut self, position: &[f32]) {
        self.positions.extend_from_slice(position);
    }

    /// Append a normal (nx, ny, nz)
    #[inline]
    pub fn add_normal(&mut self, normal: Vector3<f32>) {
        self.normals.push(normal.x);
        self.normals.push(normal.y);
        self.normals.push(normal.z);
    }

    /// Get vertex count
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get triangle count (zero for point and line geometry)
    #[inline]
    pub fn triangle_count(&self) -> usize {
        match self.primitive {
            PrimitiveType::Triangles => self.vertex_count() / 3,
            PrimitiveType::Points | PrimitiveType::Lines => 0,
        }
    }

    /// Check if geometry is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn has_colors(&self) -> bool {
        !self.colors.is_empty()
    }

    /// Calculate bounds (min, max) - optimized with chunk iteration
    #[inline]
    pub fn bounds(&self) -> (Point3<f32>, Point3<f32>) {
        if self.is_empty() {
            return (Point3::origin(), Point3::origin());
        }

        let mut min = Point3::new(f32::MAX, f32::MAX, f32::MAX);
        let mut max = Point3::new(f32::MIN, f32::MIN, f32::MIN);

        self.positions.chunks_exact(3).for_each(|chunk| {
            let (x, y, z) = (chunk[0], chunk[1], chunk[2]);
            min.x = min.x.min(x);
            min.y = min.y.min(y);
            min.z = min.z.min(z);
            max.x = max.x.max(x);
            max.y = max.y.max(y);
            max.z = max.z.max(z);
        });

        (min, max)
    }
}
