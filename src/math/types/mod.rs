// src/math/types/mod.rs
pub mod centroid_buffer;
pub mod mesh;
pub mod triangle;

pub use centroid_buffer::*;
pub use mesh::*;
pub use triangle::*;

// Re-export häufig verwendete externe Typen
pub use bevy::math::Vec3;
