// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parse state
//!
//! Holds the vertex pool, the current object and every object closed so far.
//! Directives are applied one at a time; [`ParseState::finish`] closes the
//! pending group state and yields the document.

use std::mem;

use obj_lite_core::{parse_pair, parse_triple, Directive, FaceVertexRef};

use crate::assembler::FaceAssembler;
use crate::document::{ObjDocument, ObjObject};
use crate::error::Result;
use crate::object::ParseObject;
use crate::pool::VertexPool;

/// Mutable context of one parse
#[derive(Debug, Clone)]
pub struct ParseState {
    pool: VertexPool,
    object: ParseObject,
    objects: Vec<ParseObject>,
    material_libraries: Vec<String>,
}

impl Default for ParseState {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseState {
    /// Fresh state with one implicit, unnamed object
    pub fn new() -> Self {
        Self {
            pool: VertexPool::new(),
            object: ParseObject::implicit(),
            objects: Vec::new(),
            material_libraries: Vec::new(),
        }
    }

    pub fn pool(&self) -> &VertexPool {
        &self.pool
    }

    /// Mutable pool access, e.g. to seed per-position colors
    pub fn pool_mut(&mut self) -> &mut VertexPool {
        &mut self.pool
    }

    pub fn current_object(&self) -> &ParseObject {
        &self.object
    }

    /// Apply one classified line
    pub fn apply(&mut self, directive: Directive<'_>) -> Result<()> {
        match directive {
            Directive::Comment | Directive::Unrecognized(_) => {}
            Directive::Vertex(tokens) => self.pool.push_position(parse_triple(&tokens)?),
            Directive::Normal(tokens) => self.pool.push_normal(parse_triple(&tokens)?),
            Directive::TexCoord(tokens) => self.pool.push_uv(parse_pair(&tokens)?),
            Directive::Face(face) => self.add_face(&face.vertices)?,
            Directive::Object(name) => self.start_object(name),
            Directive::Group(name) => self.start_group(name),
            Directive::UseMaterial(name) => self.use_material(name),
            Directive::MaterialLibrary(name) => self.add_material_library(name),
            Directive::Smoothing(value) => self.set_smoothing(value),
        }
        Ok(())
    }

    /// `o name`: rename the implicit object, or close the current one and
    /// open a new one
    pub fn start_object(&mut self, name: &str) {
        if self.object.is_implicit() {
            self.object.declare(name);
            return;
        }

        self.object.flush();
        let previous = mem::replace(&mut self.object, ParseObject::explicit(name));
        self.objects.push(previous);
    }

    /// `g name`
    pub fn start_group(&mut self, name: &str) {
        self.object.start_group(name);
    }

    /// `usemtl name`
    pub fn use_material(&mut self, name: &str) {
        self.object.flush();
        self.object.start_group(name);
    }

    /// `s value`; only `off` and `0` disable smoothing
    pub fn set_smoothing(&mut self, value: &str) {
        self.object.smooth = !matches!(value, "off" | "0");
    }

    /// `mtllib name`
    pub fn add_material_library(&mut self, name: &str) {
        self.material_libraries.push(name.to_string());
    }

    /// Triangle or quad into the current object
    pub fn add_face(&mut self, vertices: &[FaceVertexRef<'_>]) -> Result<()> {
        self.object.ensure_group();
        FaceAssembler::new(&self.pool, &mut self.object.geometry).add_face(vertices)
    }

    /// Point primitives into the current object
    pub fn add_point_geometry(&mut self, indices: &[&str]) -> Result<()> {
        self.object.ensure_group();
        FaceAssembler::new(&self.pool, &mut self.object.geometry).add_point_geometry(indices)
    }

    /// Line primitives into the current object
    pub fn add_line_geometry(&mut self, indices: &[&str], uv_indices: &[&str]) -> Result<()> {
        self.object.ensure_group();
        FaceAssembler::new(&self.pool, &mut self.object.geometry)
            .add_line_geometry(indices, uv_indices)
    }

    /// Close pending groups and emit every object that has geometry
    pub fn finish(self) -> ObjDocument {
        self.finish_with(false)
    }

    /// Like [`finish`](Self::finish), optionally keeping objects without
    /// vertices
    pub fn finish_with(mut self, keep_empty: bool) -> ObjDocument {
        self.object.flush();
        self.objects.push(self.object);

        let objects = self
            .objects
            .into_iter()
            .filter(|object| keep_empty || !object.geometry.is_empty())
            .map(|mut object| {
                object.close_groups();
                ObjObject::from(object)
            })
            .collect();

        ObjDocument {
            objects,
            material_libraries: self.material_libraries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use obj_lite_core::classify;

    fn apply_all(state: &mut ParseState, lines: &[&str]) {
        for line in lines {
            state.apply(classify(line)).unwrap();
        }
    }

    #[test]
    fn test_initial_state() {
        let state = ParseState::new();
        assert!(state.current_object().is_implicit());
        assert!(state.current_object().smooth);
        assert_eq!(state.pool().record_count(crate::pool::Component::Position), 0);
    }

    #[test]
    fn test_pool_directives() {
        let mut state = ParseState::new();
        apply_all(&mut state, &["v 1 2 3", "vn 0 0 1", "vt 0.5 0.25"]);

        assert_eq!(state.pool().positions, vec![1.0, 2.0, 3.0]);
        assert_eq!(state.pool().normals, vec![0.0, 0.0, 1.0]);
        assert_eq!(state.pool().uvs, vec![0.5, 0.25]);
    }

    #[test]
    fn test_malformed_vertex_is_fatal() {
        let mut state = ParseState::new();
        assert!(state.apply(classify("v 1 2 1e")).is_err());
    }

    #[test]
    fn test_failed_quad_leaves_object_empty() {
        let mut state = ParseState::new();
        apply_all(&mut state, &["v 0 0 0", "v 1 0 0", "v 1 1 0"]);

        assert!(state.apply(classify("f 1 2 3 9")).is_err());
        assert!(state.current_object().geometry.is_empty());
    }

    #[test]
    fn test_object_renames_implicit() {
        let mut state = ParseState::new();
        apply_all(&mut state, &["v 0 0 0", "v 1 0 0", "v 0 1 0", "f 1 2 3", "o Cube"]);

        let document = state.finish();
        assert_eq!(document.objects.len(), 1);
        assert_eq!(document.objects[0].name, "Cube");
        assert_eq!(document.objects[0].vertex_count(), 3);
    }

    #[test]
    fn test_second_object_flushes_first() {
        let mut state = ParseState::new();
        apply_all(
            &mut state,
            &["v 0 0 0", "v 1 0 0", "v 0 1 0", "o A", "f 1 2 3", "o B", "f 1 2 3"],
        );

        let document = state.finish();
        let names: Vec<_> = document.objects.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(document.objects[0].material_groups[0].vertex_range(), 0..3);
    }

    #[test]
    fn test_group_does_not_flush() {
        let mut state = ParseState::new();
        apply_all(&mut state, &["v 0 0 0", "v 1 0 0", "v 0 1 0", "o A", "g one", "f 1 2 3", "g two"]);

        let groups = &state.current_object().material_groups;
        assert_eq!(groups.len(), 2);
        assert!(groups[0].is_open());
    }

    #[test]
    fn test_smoothing_values() {
        let mut state = ParseState::new();
        for (value, expected) in [("off", false), ("1", true), ("0", false), ("", true), ("on", true)] {
            state.set_smoothing(value);
            assert_eq!(state.current_object().smooth, expected, "s {value:?}");
        }
    }

    #[test]
    fn test_face_opens_default_group() {
        let mut state = ParseState::new();
        apply_all(&mut state, &["v 0 0 0", "v 1 0 0", "v 0 1 0", "s off", "f 1 2 3"]);

        let groups = &state.current_object().material_groups;
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "");
        assert!(!groups[0].smooth);
    }

    #[test]
    fn test_material_libraries_in_order() {
        let mut state = ParseState::new();
        apply_all(&mut state, &["mtllib a.mtl", "mtllib b.mtl"]);
        assert_eq!(state.finish().material_libraries, vec!["a.mtl", "b.mtl"]);
    }

    #[test]
    fn test_keep_empty_objects() {
        let mut state = ParseState::new();
        apply_all(&mut state, &["o A", "o B"]);
        let document = state.clone().finish();
        assert!(document.is_empty());

        let document = state.finish_with(true);
        let names: Vec<_> = document.objects.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_line_geometry_through_state() {
        let mut state = ParseState::new();
        apply_all(&mut state, &["v 0 0 0", "v 1 0 0"]);
        state.add_line_geometry(&["1", "2"], &[]).unwrap();

        let document = state.finish();
        assert_eq!(
            document.objects[0].geometry.primitive,
            crate::mesh::PrimitiveType::Lines
        );
        assert_eq!(document.objects[0].vertex_count(), 2);
    }
}
