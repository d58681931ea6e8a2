// src/math/geometry/sphere/mod.rs

// Deklaration der Untermodule für die geodätische Kugel
pub mod centroid;
pub mod config;
pub mod edge_key;
pub mod generator;
pub mod icosahedron;
pub mod subdivision;
pub mod validation;

// Re-Exporte für den einfachen Zugriff auf die wichtigsten Kugel-Elemente
pub use self::centroid::{CentroidComputer, centroids};
pub use self::config::{GeodesicConfig, HIGH_RECURSION_WARNING_LEVEL, MAX_RECURSION_LEVEL};
pub use self::edge_key::EdgeKey;
pub use self::generator::{GeodesicGenerator, GeodesicSphere, generate};
pub use self::icosahedron::seed;
pub use self::subdivision::{SubdivisionEngine, subdivide};
pub use self::validation::{MeshValidator, TopologyReport};
