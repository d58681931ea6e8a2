// src/math/geometry/sphere/subdivision.rs
use super::{
    config::{
        GeodesicConfig, HIGH_RECURSION_WARNING_LEVEL, MAX_RECURSION_LEVEL,
        validate_recursion_level,
    },
    edge_key::EdgeKey,
};
use crate::math::{
    error::{MathError, MathResult},
    types::{Mesh, Triangle},
    utils::sphere::spherical_midpoint,
};
use bevy::log::{debug, warn};
use bevy::math::Vec3;
use rayon::prelude::*;
use std::collections::HashMap;

/// Eine Kante, so wie sie beim ersten Auftreten (in Wicklungsrichtung) gefunden wurde.
#[derive(Debug, Clone, Copy)]
struct UniqueEdge {
    key: EdgeKey,
    start: u32,
    end: u32,
}

impl UniqueEdge {
    fn connects(&self, start: u32, end: u32) -> bool {
        (self.start == start && self.end == end) || (self.start == end && self.end == start)
    }
}

/// Kante → Index des Mittelpunkt-Vertex. Gilt nur für genau eine Iteration,
/// danach verschieben sich die Indizes.
#[derive(Debug)]
struct MidpointCache {
    midpoints: HashMap<EdgeKey, u32>,
}

impl MidpointCache {
    fn build(edges: &[UniqueEdge], first_index: u32) -> Self {
        let midpoints = edges
            .iter()
            .zip(first_index..)
            .map(|(edge, index)| (edge.key, index))
            .collect();
        Self { midpoints }
    }

    fn lookup(&self, start: u32, end: u32) -> MathResult<u32> {
        self.midpoints
            .get(&EdgeKey::new(start, end))
            .copied()
            .ok_or(MathError::MissingMidpoint { start, end })
    }
}

/// Verfeinert ein Kugel-Mesh Iteration für Iteration.
///
/// Jede Iteration läuft in drei strikt getrennten Phasen:
/// 1. Kanten sammeln (jede ungeordnete Kante genau einmal, in Reihenfolge des ersten Auftretens)
/// 2. Mittelpunkte berechnen und auf die Kugel projizieren (parallel, ohne geteilten Zustand)
/// 3. Jedes Dreieck durch vier Kinddreiecke gleicher Wicklung ersetzen
///
/// Vertex- und Dreieckslisten gehören bis zur Übergabe via [`SubdivisionEngine::finish`]
/// allein dieser Instanz.
#[derive(Debug)]
pub struct SubdivisionEngine {
    vertices: Vec<Vec3>,
    triangles: Vec<Triangle>,
    radius: f32,
    level: u32,
    parallel_threshold: usize,
}

impl SubdivisionEngine {
    pub fn new(mesh: Mesh) -> Self {
        let radius = mesh.radius();
        let level = mesh.subdivision_level();
        let (vertices, triangles) = mesh.into_parts();
        Self {
            vertices,
            triangles,
            radius,
            level,
            parallel_threshold: GeodesicConfig::default().parallel_threshold,
        }
    }

    /// Ab wie vielen Kanten Phase 2 parallel rechnet; 0 heißt immer parallel.
    /// Das Ergebnis ist unabhängig davon identisch.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Führt `iterations` Verfeinerungen aus und gibt das fertige Mesh zurück.
    pub fn run(mut self, iterations: u32) -> MathResult<Mesh> {
        validate_recursion_level(iterations)?;
        let target_level = self.level + iterations;
        if target_level > MAX_RECURSION_LEVEL {
            return Err(MathError::invalid(format!(
                "Subdividing level {} mesh {} more times exceeds the maximum level {}",
                self.level, iterations, MAX_RECURSION_LEVEL
            )));
        }
        if iterations > 0 && target_level > HIGH_RECURSION_WARNING_LEVEL {
            warn!(
                "Subdivision level {} requested: expecting {:?} triangles",
                target_level,
                Mesh::expected_triangle_count(target_level)
            );
        }

        for _ in 0..iterations {
            self.refine()?;
        }
        Ok(self.finish())
    }

    /// Eine einzelne Verfeinerung. Schlägt sie fehl, bleibt der bisherige Zustand unverändert.
    pub fn refine(&mut self) -> MathResult<()> {
        if self.level >= MAX_RECURSION_LEVEL {
            return Err(MathError::invalid(format!(
                "Mesh is already at the maximum level {MAX_RECURSION_LEVEL}"
            )));
        }

        let edges = discover_edges(&self.triangles)?;

        let total = self.vertices.len() + edges.len();
        if u32::try_from(total).is_err() {
            return Err(MathError::IndexOverflow { count: total });
        }
        // Passt, da `total` bereits geprüft ist
        let first_index = self.vertices.len() as u32;

        let midpoints = self.materialize_midpoints(&edges);
        let cache = MidpointCache::build(&edges, first_index);
        let children = regenerate_triangles(&self.triangles, &cache)?;

        self.vertices.extend(midpoints);
        self.triangles = children;
        self.level += 1;

        debug!(
            "Iteration {}: {} unique edges, {} vertices, {} triangles",
            self.level,
            edges.len(),
            self.vertices.len(),
            self.triangles.len()
        );
        Ok(())
    }

    pub fn finish(self) -> Mesh {
        Mesh::from_parts(self.vertices, self.triangles, self.radius, self.level)
    }

    /// Phase 2: ein Mittelpunkt pro Kante, in Kantenreihenfolge.
    fn materialize_midpoints(&self, edges: &[UniqueEdge]) -> Vec<Vec3> {
        let vertices = &self.vertices;
        let radius = self.radius;
        let midpoint = |edge: &UniqueEdge| {
            spherical_midpoint(
                vertices[edge.start as usize],
                vertices[edge.end as usize],
                radius,
            )
        };

        if edges.len() >= self.parallel_threshold {
            // `collect` auf einem indizierten Iterator behält die Reihenfolge bei
            edges.par_iter().map(midpoint).collect()
        } else {
            edges.iter().map(midpoint).collect()
        }
    }
}

/// Unterteilt `mesh` `iterations`-mal. Bei 0 Iterationen kommt das Mesh unverändert zurück.
pub fn subdivide(mesh: Mesh, iterations: u32) -> MathResult<Mesh> {
    SubdivisionEngine::new(mesh).run(iterations)
}

/// Phase 1: alle Kanten genau einmal, in der Reihenfolge ihres ersten Auftretens.
fn discover_edges(triangles: &[Triangle]) -> MathResult<Vec<UniqueEdge>> {
    let expected = triangles.len() * 3 / 2;
    let mut slots: HashMap<EdgeKey, usize> = HashMap::with_capacity(expected);
    let mut edges: Vec<UniqueEdge> = Vec::with_capacity(expected);

    for triangle in triangles {
        for (start, end) in triangle.edges() {
            let key = EdgeKey::new(start, end);
            if let Some(&slot) = slots.get(&key) {
                let existing = edges[slot];
                if !existing.connects(start, end) {
                    return Err(MathError::EdgeKeyCollision {
                        key: key.raw(),
                        existing: (existing.start, existing.end),
                        incoming: (start, end),
                    });
                }
            } else {
                slots.insert(key, edges.len());
                edges.push(UniqueEdge { key, start, end });
            }
        }
    }

    Ok(edges)
}

/// Phase 3: vier Kinder pro Dreieck, Wicklung und Elternreihenfolge bleiben erhalten.
fn regenerate_triangles(
    triangles: &[Triangle],
    cache: &MidpointCache,
) -> MathResult<Vec<Triangle>> {
    let mut children = Vec::with_capacity(triangles.len() * 4);

    for &Triangle { a, b, c } in triangles {
        let ab = cache.lookup(a, b)?;
        let bc = cache.lookup(b, c)?;
        let ca = cache.lookup(c, a)?;

        children.extend([
            Triangle::new(a, ab, ca),
            Triangle::new(ab, b, bc),
            Triangle::new(ca, bc, c),
            Triangle::new(ab, bc, ca),
        ]);
    }

    Ok(children)
}
