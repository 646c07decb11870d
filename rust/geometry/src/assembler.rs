// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Face assembly
//!
//! Resolves face references against the [`VertexPool`] and appends copies of
//! the referenced data to an object's [`Geometry`]. Every index of a face is
//! resolved before any of its data is written, so a failing face leaves the
//! buffers untouched.

use nalgebra::Vector3;
use obj_lite_core::FaceVertexRef;

use crate::error::Result;
use crate::index::resolve_index;
use crate::mesh::{Geometry, PrimitiveType};
use crate::pool::{Component, VertexPool};
use crate::triangulation::fan_triangles;

/// Flat fallback normal of triangle (a, b, c)
///
/// `normalize((c - b) × (a - b))`; a degenerate triangle yields the zero
/// vector.
#[inline]
pub fn face_normal(a: &[f32], b: &[f32], c: &[f32]) -> Vector3<f32> {
    let a = Vector3::from_column_slice(a);
    let b = Vector3::from_column_slice(b);
    let c = Vector3::from_column_slice(c);

    let cb = c - b;
    let ab = a - b;

    cb.cross(&ab)
        .try_normalize(0.0)
        .unwrap_or_else(Vector3::zeros)
}

/// Writes faces into one object's geometry
pub struct FaceAssembler<'a> {
    pool: &'a VertexPool,
    geometry: &'a mut Geometry,
}

impl<'a> FaceAssembler<'a> {
    pub fn new(pool: &'a VertexPool, geometry: &'a mut Geometry) -> Self {
        Self { pool, geometry }
    }

    /// Add a triangle or quad; quads become (v0, v1, v2) and (v0, v2, v3)
    pub fn add_face(&mut self, vertices: &[FaceVertexRef<'_>]) -> Result<()> {
        let triangles = fan_triangles(vertices.len())?;
        for vertex in vertices {
            self.check_vertex(vertex)?;
        }

        for [a, b, c] in triangles {
            self.add_triangle([&vertices[a], &vertices[b], &vertices[c]])?;
        }
        Ok(())
    }

    /// Add one triangle
    ///
    /// Positions are always copied; colors where the pool has them; uvs and
    /// normals when the references carry them. Without normals a flat face
    /// normal is written for all three vertices.
    pub fn add_triangle(&mut self, refs: [&FaceVertexRef<'_>; 3]) -> Result<()> {
        let pool = self.pool;

        let positions = self.resolve_three(refs.map(|r| r.position), Component::Position)?;
        let uvs = self.resolve_optional(refs.map(|r| r.uv), Component::Uv)?;
        let normals = self.resolve_optional(refs.map(|r| r.normal), Component::Normal)?;

        for offset in positions {
            self.copy_record(Component::Position, offset);
        }

        for offset in positions {
            if let Some(color) = pool.record(Component::Color, offset) {
                self.geometry.colors.extend_from_slice(color);
            }
        }

        if let Some(uvs) = uvs {
            for offset in uvs {
                self.copy_record(Component::Uv, offset);
            }
            self.geometry.has_uv_indices = true;
        }

        match normals {
            Some(normals) => {
                for offset in normals {
                    self.copy_record(Component::Normal, offset);
                }
            }
            None => {
                let [a, b, c] = positions.map(|offset| &pool.positions[offset..offset + 3]);
                let normal = face_normal(a, b, c);
                for _ in 0..3 {
                    self.geometry.add_normal(normal);
                }
            }
        }

        Ok(())
    }

    /// Append referenced positions as point primitives
    pub fn add_point_geometry(&mut self, indices: &[&str]) -> Result<()> {
        let offsets = self.resolve_each(indices, Component::Position)?;

        self.geometry.primitive = PrimitiveType::Points;
        for offset in offsets {
            self.copy_record(Component::Position, offset);
            if let Some(color) = self.pool.record(Component::Color, offset) {
                self.geometry.colors.extend_from_slice(color);
            }
        }

        Ok(())
    }

    /// Append referenced positions (and optional uvs) as line primitives
    pub fn add_line_geometry(&mut self, indices: &[&str], uv_indices: &[&str]) -> Result<()> {
        let offsets = self.resolve_each(indices, Component::Position)?;
        let uv_offsets = self.resolve_each(uv_indices, Component::Uv)?;

        self.geometry.primitive = PrimitiveType::Lines;
        for offset in offsets {
            self.copy_record(Component::Position, offset);
        }
        for offset in uv_offsets {
            self.copy_record(Component::Uv, offset);
        }

        Ok(())
    }

    /// Resolve every index of one reference without writing anything
    fn check_vertex(&self, vertex: &FaceVertexRef<'_>) -> Result<()> {
        let tokens = [
            (Some(vertex.position), Component::Position),
            (vertex.uv, Component::Uv),
            (vertex.normal, Component::Normal),
        ];
        for (token, component) in tokens {
            if let Some(token) = token {
                resolve_index(token, self.pool.buffer(component).len(), component)?;
            }
        }
        Ok(())
    }

    fn resolve_three(&self, tokens: [&str; 3], component: Component) -> Result<[usize; 3]> {
        let len = self.pool.buffer(component).len();
        Ok([
            resolve_index(tokens[0], len, component)?,
            resolve_index(tokens[1], len, component)?,
            resolve_index(tokens[2], len, component)?,
        ])
    }

    /// Resolve three tokens, or none if any reference lacks the component
    fn resolve_optional(
        &self,
        tokens: [Option<&str>; 3],
        component: Component,
    ) -> Result<Option<[usize; 3]>> {
        match tokens {
            [Some(a), Some(b), Some(c)] => self.resolve_three([a, b, c], component).map(Some),
            _ => Ok(None),
        }
    }

    fn resolve_each(&self, tokens: &[&str], component: Component) -> Result<Vec<usize>> {
        let len = self.pool.buffer(component).len();
        tokens
            .iter()
            .map(|token| resolve_index(token, len, component))
            .collect()
    }

    /// Copy one already-resolved record into the geometry
    #[inline]
    fn copy_record(&mut self, component: Component, offset: usize) {
        let pool = self.pool;
        let record = &pool.buffer(component)[offset..offset + component.stride()];
        let target = match component {
            Component::Position => &mut self.geometry.positions,
            Component::Normal => &mut self.geometry.normals,
            Component::Color => &mut self.geometry.colors,
            Component::Uv => &mut self.geometry.uvs,
        };
        target.extend_from_slice(record);
    }
}
