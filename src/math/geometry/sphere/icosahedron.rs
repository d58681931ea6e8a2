// src/math/geometry/sphere/icosahedron.rs
use super::config::validate_radius;
use crate::math::{
    error::MathResult,
    types::{Mesh, Triangle},
    utils::{constants::GOLDEN_RATIO, sphere::project_to_sphere},
};
use bevy::math::Vec3;

const PHI: f32 = GOLDEN_RATIO;

/// Die 12 Ecken als Permutationen von (0, ±1, ±φ), noch nicht normalisiert.
const BASE_VERTICES: [[f32; 3]; 12] = [
    [-1.0, PHI, 0.0],
    [1.0, PHI, 0.0],
    [-1.0, -PHI, 0.0],
    [1.0, -PHI, 0.0],
    [0.0, -1.0, PHI],
    [0.0, 1.0, PHI],
    [0.0, -1.0, -PHI],
    [0.0, 1.0, -PHI],
    [PHI, 0.0, -1.0],
    [PHI, 0.0, 1.0],
    [-PHI, 0.0, -1.0],
    [-PHI, 0.0, 1.0],
];

/// Die 20 Flächen, alle gegen den Uhrzeigersinn von außen gesehen.
const BASE_TRIANGLES: [[u32; 3]; 20] = [
    // 5 Flächen um Punkt 0
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    // 5 angrenzende Flächen
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    // 5 Flächen um Punkt 3
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    // 5 angrenzende Flächen
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Erzeugt das regelmäßige Ikosaeder mit Umkugelradius `radius` (Unterteilungsstufe 0).
pub fn seed(radius: f32) -> MathResult<Mesh> {
    validate_radius(radius)?;

    let vertices = BASE_VERTICES
        .iter()
        .map(|&p| project_to_sphere(Vec3::from_array(p), radius))
        .collect();
    let triangles = BASE_TRIANGLES.iter().map(|&t| Triangle::from(t)).collect();

    Ok(Mesh::from_parts(vertices, triangles, radius, 0))
}
