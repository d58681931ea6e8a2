// src/math/geometry/sphere/generator.rs
use super::{
    centroid::CentroidComputer,
    config::GeodesicConfig,
    icosahedron::seed,
    subdivision::SubdivisionEngine,
};
use crate::math::{
    error::MathResult,
    types::{CentroidBuffer, Mesh},
};
use bevy::log::info;
use std::sync::OnceLock;

/// Erzeugt eine geodätische Kugel mit `radius` und `depth` Unterteilungen.
///
/// Reine Funktion: gleiche Eingaben liefern bitgleiche Puffer. Ungültige Eingaben werden
/// abgelehnt, bevor irgendetwas erzeugt wird.
pub fn generate(radius: f32, depth: u32) -> MathResult<Mesh> {
    GeodesicGenerator::new(
        GeodesicConfig::new()
            .with_radius(radius)
            .with_recursion_level(depth),
    )
    .generate()
    .map(GeodesicSphere::into_mesh)
}

/// Fertige Kugel mit bei Bedarf berechneten Dreiecksschwerpunkten.
#[derive(Debug, Clone)]
pub struct GeodesicSphere {
    mesh: Mesh,
    computer: CentroidComputer,
    centroids: OnceLock<CentroidBuffer>,
}

impl GeodesicSphere {
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Schwerpunkte, beim ersten Aufruf berechnet.
    pub fn centroids(&self) -> &CentroidBuffer {
        self.centroids
            .get_or_init(|| self.computer.compute(&self.mesh))
    }

    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }
}

#[derive(Debug, Clone)]
pub struct GeodesicGenerator {
    config: GeodesicConfig,
}

impl GeodesicGenerator {
    pub fn new(config: GeodesicConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeodesicConfig {
        &self.config
    }

    pub fn generate(&self) -> MathResult<GeodesicSphere> {
        self.config.validate()?;
        let GeodesicConfig {
            radius,
            recursion_level,
            parallel_threshold,
        } = self.config;

        let mesh = SubdivisionEngine::new(seed(radius)?)
            .with_parallel_threshold(parallel_threshold)
            .run(recursion_level)?;

        info!(
            "Geodesic sphere generated: radius {}, level {}, {} vertices, {} triangles",
            radius,
            recursion_level,
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        Ok(GeodesicSphere {
            mesh,
            computer: CentroidComputer::new().with_parallel_threshold(parallel_threshold),
            centroids: OnceLock::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::error::ErrorKind;
    use approx::assert_abs_diff_eq;
    use bevy::math::Vec3;

    #[test]
    fn test_generate_level_zero() {
        let mesh = generate(1.0, 0).unwrap();
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.triangle_count(), 20);

        let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
        let expected = Vec3::new(-1.0, phi, 0.0).normalize();
        assert_abs_diff_eq!(mesh.vertices()[0].distance(expected), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_generate_radius_two() {
        let mesh = generate(2.0, 1).unwrap();
        assert_eq!(mesh.vertex_count(), 42);
        assert_eq!(mesh.triangle_count(), 80);
        for v in mesh.vertices() {
            assert_abs_diff_eq!(v.length(), 2.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_generate_rejects_invalid_input() {
        for (radius, depth) in [(0.0, 2), (-1.0, 2), (1.0, 13), (f32::NAN, 0)] {
            let err = generate(radius, depth).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InputValidation);
        }
    }

    #[test]
    fn test_generator_with_centroids() {
        let generator = GeodesicGenerator::new(
            GeodesicConfig::new()
                .with_radius(5.0)
                .with_recursion_level(3)
                .with_parallel_threshold(16),
        );
        let sphere = generator.generate().unwrap();
        let centroids = sphere.centroids();
        assert_eq!(centroids.len(), sphere.mesh().triangle_count());
        // Zweiter Aufruf liefert denselben Puffer
        assert!(std::ptr::eq(centroids, sphere.centroids()));
        assert_eq!(sphere.into_mesh(), generate(5.0, 3).unwrap());
    }

    #[test]
    fn test_no_state_between_calls() {
        let first = generate(1.0, 2).unwrap();
        let _other = generate(3.0, 4).unwrap();
        assert_eq!(generate(1.0, 2).unwrap(), first);
    }
}
