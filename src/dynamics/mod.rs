pub mod state;

pub use state::{RotorCommand, StateVector, VehicleState};

use crate::error::SimError;

/// Trait for vehicle dynamics strategies.
///
/// A dynamics strategy owns the live vehicle state: `reset` installs a new
/// one and `step` advances it by one interval, returning the fresh value.
/// Implement this to plug equations of motion and an integrator into the
/// simulation loop.
pub trait Dynamics {
    /// Replace the internally held state. Called once per run, before the
    /// first `step`.
    fn reset(&mut self, initial: VehicleState);

    /// Set the integration step [s]. The simulator propagates its own `dt`
    /// here at construction so the two never disagree.
    fn set_step_size(&mut self, dt: f64);

    /// Advance the held state by one step under `command`, held constant
    /// across the interval starting at `t`. Returns the new state and keeps
    /// it as the current one.
    fn step(&mut self, t: f64, command: &RotorCommand) -> Result<VehicleState, SimError> {
        let _ = (t, command);
        Err(SimError::UnimplementedCapability("Dynamics::step"))
    }

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BareDynamics;

    impl Dynamics for BareDynamics {
        fn reset(&mut self, _initial: VehicleState) {}

        fn set_step_size(&mut self, _dt: f64) {}
    }

    #[test]
    fn step_without_override_reports_unimplemented() {
        let mut dynamics = BareDynamics;
        let err = dynamics
            .step(0.0, &RotorCommand::zero())
            .expect_err("base step must not succeed");
        assert!(
            matches!(err, SimError::UnimplementedCapability("Dynamics::step")),
            "got {err:?}"
        );
        assert_eq!(dynamics.name(), "unnamed");
    }
}
