// src/math/geometry/sphere/validation.rs
use super::edge_key::EdgeKey;
use crate::math::{
    error::{MathError, MathResult},
    types::Mesh,
    utils::constants::RADIUS_TOLERANCE,
};
use std::collections::{HashMap, HashSet};

/// Topologische Kennzahlen eines Dreiecksnetzes.
#[derive(Debug, Clone, PartialEq)]
pub struct TopologyReport {
    pub vertex_count: usize,
    pub triangle_count: usize,
    /// Anzahl verschiedener ungeordneter Kanten
    pub edge_count: usize,
    /// Kanten mit nur einem angrenzenden Dreieck
    pub boundary_edges: usize,
    /// Kanten mit mehr als zwei angrenzenden Dreiecken
    pub non_manifold_edges: usize,
    pub degenerate_triangles: usize,
    /// Vertices, deren Position bereits von einem anderen Vertex belegt ist
    pub duplicate_vertices: usize,
    /// Größte Abweichung |‖v‖ − r| über alle Vertices
    pub max_radial_deviation: f32,
    /// V − E + F, für eine geschlossene Kugel 2
    pub euler_characteristic: i64,
}

impl TopologyReport {
    pub fn is_closed(&self) -> bool {
        self.boundary_edges == 0 && self.non_manifold_edges == 0
    }

    /// Geschlossen und ohne doppelte Vertices an gemeinsamen Kanten.
    pub fn is_watertight(&self) -> bool {
        self.is_closed() && self.duplicate_vertices == 0
    }
}

pub struct MeshValidator;

impl MeshValidator {
    pub fn report(mesh: &Mesh) -> TopologyReport {
        let vertices = mesh.vertices();
        let triangles = mesh.triangles();

        let mut incidence: HashMap<EdgeKey, usize> = HashMap::with_capacity(mesh.edge_count());
        let mut degenerate_triangles = 0;
        for triangle in triangles {
            let out_of_range = triangle
                .indices()
                .iter()
                .any(|&i| i as usize >= vertices.len());
            if triangle.is_degenerate() || out_of_range {
                degenerate_triangles += 1;
            }
            for (start, end) in triangle.edges() {
                *incidence.entry(EdgeKey::new(start, end)).or_default() += 1;
            }
        }

        let boundary_edges = incidence.values().filter(|&&n| n == 1).count();
        let non_manifold_edges = incidence.values().filter(|&&n| n > 2).count();

        let mut seen = HashSet::with_capacity(vertices.len());
        let duplicate_vertices = vertices
            .iter()
            .filter(|v| !seen.insert(v.to_array().map(f32::to_bits)))
            .count();

        let radius = mesh.radius();
        let max_radial_deviation = vertices
            .iter()
            .map(|v| (v.length() - radius).abs())
            .fold(0.0_f32, f32::max);

        let euler_characteristic =
            vertices.len() as i64 - incidence.len() as i64 + triangles.len() as i64;

        TopologyReport {
            vertex_count: vertices.len(),
            triangle_count: triangles.len(),
            edge_count: incidence.len(),
            boundary_edges,
            non_manifold_edges,
            degenerate_triangles,
            duplicate_vertices,
            max_radial_deviation,
            euler_characteristic,
        }
    }

    /// Wie [`MeshValidator::report`], schlägt aber fehl, wenn das Mesh keine
    /// geschlossene, wasserdichte Kugel ist. Da Meshes nur vom Seeder oder der
    /// Unterteilung stammen, ist jeder Fehlschlag eine verletzte Invariante.
    pub fn check(mesh: &Mesh) -> MathResult<TopologyReport> {
        let report = Self::report(mesh);

        if !report.is_watertight() {
            return Err(MathError::TopologyViolation {
                message: format!(
                    "Mesh is not watertight: {} boundary edges, {} non-manifold edges, {} duplicate vertices",
                    report.boundary_edges, report.non_manifold_edges, report.duplicate_vertices
                ),
            });
        }
        if report.degenerate_triangles > 0 {
            return Err(MathError::TopologyViolation {
                message: format!("Mesh has {} degenerate triangles", report.degenerate_triangles),
            });
        }
        if report.euler_characteristic != 2 {
            return Err(MathError::TopologyViolation {
                message: format!(
                    "Euler characteristic is {}, expected 2",
                    report.euler_characteristic
                ),
            });
        }
        if report.max_radial_deviation > RADIUS_TOLERANCE * mesh.radius() {
            return Err(MathError::TopologyViolation {
                message: format!(
                    "Vertex deviates {} from radius {}",
                    report.max_radial_deviation,
                    mesh.radius()
                ),
            });
        }

        Ok(report)
    }
}
