// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parse results

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::mesh::Geometry;
use crate::object::{MaterialGroup, ParseObject};

/// A finished object
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjObject {
    /// Empty for the implicit default object
    pub name: String,
    /// Smoothing state when the object was finalized
    pub smooth: bool,
    pub geometry: Geometry,
    pub material_groups: Vec<MaterialGroup>,
}

impl ObjObject {
    pub fn material_names(&self) -> impl Iterator<Item = &str> {
        self.material_groups.iter().map(|group| group.name.as_str())
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.geometry.vertex_count()
    }
}

impl From<ParseObject> for ObjObject {
    fn from(object: ParseObject) -> Self {
        Self {
            name: object.name,
            smooth: object.smooth,
            geometry: object.geometry,
            material_groups: object.material_groups,
        }
    }
}

/// Everything extracted from one OBJ text, objects in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjDocument {
    pub objects: Vec<ObjObject>,
    /// `mtllib` references in file order; never loaded
    pub material_libraries: Vec<String>,
}

impl ObjDocument {
    /// First object with the given name
    pub fn object(&self, name: &str) -> Option<&ObjObject> {
        self.objects.iter().find(|object| object.name == name)
    }

    /// Total vertices across all objects
    pub fn vertex_count(&self) -> usize {
        self.objects.iter().map(ObjObject::vertex_count).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
