// src/math/types/centroid_buffer.rs
use bevy::math::Vec3;
use serde::Serialize;

/// Ein Schwerpunkt pro Dreieck, indexgleich zur Dreiecksliste des Meshes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentroidBuffer {
    centroids: Vec<Vec3>,
}

impl CentroidBuffer {
    pub(crate) fn new(centroids: Vec<Vec3>) -> Self {
        Self { centroids }
    }

    pub fn len(&self) -> usize {
        self.centroids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centroids.is_empty()
    }

    /// Schwerpunkt des Dreiecks mit Index `triangle_index`.
    pub fn get(&self, triangle_index: usize) -> Option<Vec3> {
        self.centroids.get(triangle_index).copied()
    }

    pub fn as_slice(&self) -> &[Vec3] {
        &self.centroids
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec3> + '_ {
        self.centroids.iter()
    }

    pub fn into_inner(self) -> Vec<Vec3> {
        self.centroids
    }
}
