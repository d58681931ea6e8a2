// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    /// Toleranz für den Abstand eines Vertex zur Kugeloberfläche (relativ zum Radius).
    pub const RADIUS_TOLERANCE: f32 = 1e-5;
    pub const GOLDEN_RATIO: f32 = 1.618_034;
}

/// Hilfsfunktionen für Punkte auf der Kugel
pub mod sphere {
    use bevy::math::Vec3;

    /// Normalisiert `point` auf Einheitslänge und skaliert auf `radius`.
    /// Der Nullvektor bleibt der Nullvektor.
    pub fn project_to_sphere(point: Vec3, radius: f32) -> Vec3 {
        point.normalize_or_zero() * radius
    }

    /// Mittelpunkt der Strecke `a`–`b`, auf die Kugeloberfläche gehoben.
    pub fn spherical_midpoint(a: Vec3, b: Vec3, radius: f32) -> Vec3 {
        project_to_sphere(a.lerp(b, 0.5), radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use bevy::math::Vec3;

    #[test]
    fn test_golden_ratio_constant() {
        assert_abs_diff_eq!(
            constants::GOLDEN_RATIO,
            (1.0 + 5.0_f32.sqrt()) / 2.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_spherical_midpoint_on_sphere() {
        let radius = 3.0;
        let a = Vec3::X * radius;
        let b = Vec3::Y * radius;
        let m = sphere::spherical_midpoint(a, b, radius);
        assert_abs_diff_eq!(m.length(), radius, epsilon = 1e-5);
        assert_abs_diff_eq!(m.x, m.y, epsilon = 1e-6);
        assert_abs_diff_eq!(m.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_project_zero_vector() {
        assert_eq!(sphere::project_to_sphere(Vec3::ZERO, 2.0), Vec3::ZERO);
    }
}
