use crate::dynamics::{RotorCommand, VehicleState};
use crate::error::SimError;
use crate::trajectory::TrajectoryReference;

/// Trait for feedback controllers.
///
/// Implement this to create custom controllers that can be plugged into
/// the simulation loop. From the engine's point of view each call is a
/// pure function of `(t, reference, state)`; any internal memory (integral
/// error terms, filters) is the strategy's private business.
pub trait Controller {
    /// Compute a rotor command from the current time, the reference point
    /// for this tick, and the most recent vehicle state.
    fn step(
        &mut self,
        t: f64,
        reference: &TrajectoryReference,
        state: &VehicleState,
    ) -> Result<RotorCommand, SimError> {
        let _ = (t, reference, state);
        Err(SimError::UnimplementedCapability("Controller::step"))
    }

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}
