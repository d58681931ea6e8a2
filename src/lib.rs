// ./src/lib.rs

// Geodätische Kugeln: Ikosaeder-Unterteilung plus parallele Schwerpunktberechnung.
pub mod math;

pub use math::geometry::sphere::generator::generate;
pub use math::{MathError, MathResult};
