use thiserror::Error;

pub type SimResult<T> = Result<T, SimError>;

// ---------------------------------------------------------------------------
// Simulation error taxonomy
// ---------------------------------------------------------------------------

/// Errors surfaced by the simulation harness.
///
/// All variants are fatal to the run: `simulate` aborts on the first error
/// and returns no partial history.
#[derive(Debug, Error)]
pub enum SimError {
    /// A base strategy method was called without a concrete override.
    /// Signals a wiring mistake, not a numerical problem.
    #[error("unimplemented capability: {0}")]
    UnimplementedCapability(&'static str),

    /// Rejected simulator configuration (never silently clamped).
    #[error("invalid configuration: {what} = {value}")]
    InvalidConfiguration { what: &'static str, value: f64 },

    /// A concrete strategy failed, e.g. numerical divergence or an
    /// invalid input state. Propagated unchanged, never retried.
    #[error("{strategy} strategy failed: {reason}")]
    StrategyFailure {
        strategy: &'static str,
        reason: String,
    },
}

impl SimError {
    /// Shorthand for strategy implementations reporting a failure.
    pub fn strategy(strategy: &'static str, reason: impl Into<String>) -> Self {
        Self::StrategyFailure {
            strategy,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_part() {
        let err = SimError::UnimplementedCapability("Dynamics::step");
        assert_eq!(err.to_string(), "unimplemented capability: Dynamics::step");

        let err = SimError::strategy("dynamics", "state norm diverged");
        assert_eq!(err.to_string(), "dynamics strategy failed: state norm diverged");

        let err = SimError::InvalidConfiguration { what: "dt", value: -0.01 };
        assert!(err.to_string().contains("dt"), "should mention the bad field");
    }
}
