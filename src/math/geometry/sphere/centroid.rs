// src/math/geometry/sphere/centroid.rs
use super::config::GeodesicConfig;
use crate::math::types::{CentroidBuffer, Mesh, Triangle};
use bevy::math::Vec3;
use rayon::prelude::*;

/// Berechnet die Schwerpunkte aller Dreiecke eines fertigen Meshes.
///
/// Zustandslos: jedes Ergebnis hängt nur von seinem eigenen Dreieck ab, die Aufteilung
/// auf Threads ändert nichts am Ergebnis.
#[derive(Debug, Clone, Copy)]
pub struct CentroidComputer {
    parallel_threshold: usize,
}

impl CentroidComputer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ab wie vielen Dreiecken parallel gerechnet wird; 0 heißt immer parallel.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn compute(&self, mesh: &Mesh) -> CentroidBuffer {
        let vertices = mesh.vertices();
        let triangles = mesh.triangles();
        let centroid = |triangle: &Triangle| triangle_centroid(vertices, triangle);

        let centroids = if triangles.len() >= self.parallel_threshold {
            triangles.par_iter().map(centroid).collect()
        } else {
            triangles.iter().map(centroid).collect()
        };
        CentroidBuffer::new(centroids)
    }
}

impl Default for CentroidComputer {
    fn default() -> Self {
        Self {
            parallel_threshold: GeodesicConfig::default().parallel_threshold,
        }
    }
}

/// Schwerpunkte aller Dreiecke, indexgleich zu `mesh.triangles()`.
pub fn centroids(mesh: &Mesh) -> CentroidBuffer {
    CentroidComputer::default().compute(mesh)
}

fn triangle_centroid(vertices: &[Vec3], triangle: &Triangle) -> Vec3 {
    (vertices[triangle.a as usize] + vertices[triangle.b as usize] + vertices[triangle.c as usize])
        / 3.0
}
