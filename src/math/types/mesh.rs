// src/math/types/mesh.rs
use super::Triangle;
use crate::math::geometry::sphere::config::MAX_RECURSION_LEVEL;
use bevy::math::Vec3;
use serde::Serialize;

/// Fertiges, unveränderliches Kugel-Mesh.
///
/// Entsteht ausschließlich durch den Ikosaeder-Seeder oder die Unterteilung;
/// alle Vertices liegen im Abstand `radius` vom Ursprung.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    triangles: Vec<Triangle>,
    radius: f32,
    subdivision_level: u32,
}

impl Mesh {
    pub(crate) fn from_parts(
        vertices: Vec<Vec3>,
        triangles: Vec<Triangle>,
        radius: f32,
        subdivision_level: u32,
    ) -> Self {
        Self {
            vertices,
            triangles,
            radius,
            subdivision_level,
        }
    }

    /// Anzahl der Dreiecke nach `level` Unterteilungen: 20 · 4^level.
    /// `None` oberhalb von [`MAX_RECURSION_LEVEL`].
    pub const fn expected_triangle_count(level: u32) -> Option<u64> {
        if level > MAX_RECURSION_LEVEL {
            return None;
        }
        Some(20u64 << (2 * level))
    }

    /// Anzahl der Vertices nach `level` Unterteilungen: 10 · 4^level + 2.
    /// `None` oberhalb von [`MAX_RECURSION_LEVEL`].
    pub const fn expected_vertex_count(level: u32) -> Option<u64> {
        if level > MAX_RECURSION_LEVEL {
            return None;
        }
        Some((10u64 << (2 * level)) + 2)
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Wie oft das Basis-Ikosaeder bereits unterteilt wurde.
    pub fn subdivision_level(&self) -> u32 {
        self.subdivision_level
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Kantenanzahl eines geschlossenen Dreiecksnetzes (jede Kante gehört zu zwei Dreiecken).
    pub fn edge_count(&self) -> usize {
        self.triangles.len() * 3 / 2
    }

    /// Flacher Indexpuffer in Wicklungsreihenfolge, drei Einträge pro Dreieck.
    pub fn flat_indices(&self) -> Vec<u32> {
        self.triangles.iter().flat_map(|t| t.indices()).collect()
    }

    /// Vertex-Positionen als Arrays, wie sie Render-Backends typischerweise erwarten.
    pub fn positions(&self) -> Vec<[f32; 3]> {
        self.vertices.iter().map(|v| v.to_array()).collect()
    }

    pub fn into_parts(self) -> (Vec<Vec3>, Vec<Triangle>) {
        (self.vertices, self.triangles)
    }
}
