// src/math/geometry/mod.rs

// Deklaration der Haupt-Geometriemodule
pub mod sphere;

// Sphere-Exporte
pub use self::sphere::{
    CentroidComputer, EdgeKey, GeodesicConfig, GeodesicGenerator, GeodesicSphere,
    MeshValidator, SubdivisionEngine, TopologyReport,
};
