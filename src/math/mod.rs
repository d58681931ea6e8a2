pub mod error;
pub mod geometry;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{ErrorKind, MathError, MathResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{ErrorKind, MathError, MathResult},
        geometry::sphere::{
            centroid::*, config::GeodesicConfig, edge_key::EdgeKey, generator::*,
            icosahedron::seed, subdivision::*, validation::*,
        },
        types::*,
    };
}
