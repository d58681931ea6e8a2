// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Midpoint lookup failed for edge ({start}, {end})")]
    MissingMidpoint { start: u32, end: u32 },

    #[error("Edge key collision for key {key:#018x}: {existing:?} vs {incoming:?}")]
    EdgeKeyCollision {
        key: u64,
        existing: (u32, u32),
        incoming: (u32, u32),
    },

    #[error("Vertex count {count} exceeds the u32 index range")]
    IndexOverflow { count: usize },

    #[error("Topology violation: {message}")]
    TopologyViolation { message: String },
}

/// Grobe Einordnung eines Fehlers: falsche Eingabe oder Defekt im Algorithmus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Ungültige Parameter, abgelehnt bevor irgendetwas erzeugt wurde.
    InputValidation,
    /// Verletzte interne Invariante; der laufende Generierungsvorgang wird abgebrochen.
    InternalInvariant,
}

impl MathError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MathError::InvalidConfiguration { .. } => ErrorKind::InputValidation,
            MathError::MissingMidpoint { .. }
            | MathError::EdgeKeyCollision { .. }
            | MathError::IndexOverflow { .. }
            | MathError::TopologyViolation { .. } => ErrorKind::InternalInvariant,
        }
    }

    pub fn is_input_error(&self) -> bool {
        self.kind() == ErrorKind::InputValidation
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        MathError::InvalidConfiguration {
            message: message.into(),
        }
    }
}

pub type MathResult<T> = Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            MathError::invalid("radius").kind(),
            ErrorKind::InputValidation
        );
        assert_eq!(
            MathError::MissingMidpoint { start: 1, end: 2 }.kind(),
            ErrorKind::InternalInvariant
        );
        assert_eq!(
            MathError::IndexOverflow { count: usize::MAX }.kind(),
            ErrorKind::InternalInvariant
        );
        assert_eq!(
            MathError::TopologyViolation {
                message: "open".to_string()
            }
            .kind(),
            ErrorKind::InternalInvariant
        );
        assert!(!MathError::EdgeKeyCollision {
            key: 0,
            existing: (0, 1),
            incoming: (2, 3),
        }
        .is_input_error());
    }

    #[test]
    fn test_error_messages() {
        let err = MathError::MissingMidpoint { start: 4, end: 9 };
        assert_eq!(err.to_string(), "Midpoint lookup failed for edge (4, 9)");

        let err = MathError::invalid("Radius must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: Radius must be positive"
        );
    }
}
