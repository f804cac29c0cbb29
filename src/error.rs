/// Convenience result type used across the engine.
pub type StackResult<T> = Result<T, StackError>;

/// Top-level error taxonomy for the engine's public boundary.
///
/// Per-tick faults (detached panels, degenerate trigger windows) are
/// absorbed internally and never surface here; errors exist only at
/// construction and reconfiguration time.
#[derive(thiserror::Error, Debug)]
pub enum StackError {
    /// Invalid configuration or panel registration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from the host or dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StackError {
    /// Build a [`StackError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_prefixed() {
        let err = StackError::validation("base_scale must be finite");
        assert_eq!(
            err.to_string(),
            "validation error: base_scale must be finite"
        );
    }

    #[test]
    fn anyhow_errors_pass_through() {
        let err: StackError = anyhow::anyhow!("host gave up").into();
        assert_eq!(err.to_string(), "host gave up");
    }
}
