use thiserror::Error;

/// Errors that can occur while computing positions, charts and aspects
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AstroError {
    #[error("Coefficient data unavailable for {body} ({axis}): {message}")]
    DataUnavailable {
        body: String,
        axis: String,
        message: String,
    },
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
    #[error("Ephemeris backend '{backend}' failed for {body}: {message}")]
    Backend {
        backend: String,
        body: String,
        message: String,
    },
}

impl AstroError {
    pub(crate) fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// True for failures a caller can work around by switching to whole-sign houses.
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateGeometry { .. })
    }
}
