use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StrutError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Duplicate vertex: vertices {first} and {second} are almost equal")]
    DuplicateVertex { first: usize, second: usize },

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("Parameter out of range: u = {0} must be between 0.0 and 1.0")]
    ParameterRange(f64),

    #[error("Unknown curve type: {0}")]
    UnknownCurveType(String),

    #[error("Degenerate vector: cannot normalize a zero-length vector")]
    DegenerateVector,

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Unsupported encoding: no encoder registered for {0}")]
    UnsupportedEncoding(String),

    #[error("Duplicate registration: {0}")]
    DuplicateRegistration(String),

    #[error("Registry already initialized: codecs must be installed before first use")]
    RegistryInitialized,
}

pub type Result<T> = std::result::Result<T, StrutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = StrutError::DuplicateVertex { first: 0, second: 2 };
        assert_eq!(
            err.to_string(),
            "Duplicate vertex: vertices 0 and 2 are almost equal"
        );
        assert_eq!(
            StrutError::ParameterRange(1.5).to_string(),
            "Parameter out of range: u = 1.5 must be between 0.0 and 1.0"
        );
    }
}
