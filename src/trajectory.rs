use nalgebra::Vector3;

use crate::error::SimError;

// ---------------------------------------------------------------------------
// Trajectory reference point
// ---------------------------------------------------------------------------

/// A point on the desired path, produced fresh for each query time.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryReference {
    pub t: f64,                   // s, equals the query time
    pub position: Vector3<f64>,   // m, desired position at t
    pub velocity: Vector3<f64>,   // m/s, desired velocity at t
    pub yaw: f64,                 // rad
    pub yaw_rate: f64,            // rad/s
}

impl TrajectoryReference {
    /// Reference at `position` with zero velocity and level heading, for
    /// trajectories that do not specify attitude.
    pub fn new(t: f64, position: Vector3<f64>) -> Self {
        Self {
            t,
            position,
            velocity: Vector3::zeros(),
            yaw: 0.0,
            yaw_rate: 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Trajectory strategy
// ---------------------------------------------------------------------------

/// Trait for reference trajectory generators.
///
/// `eval` is a pure function of time: it must accept arbitrary nonnegative
/// `t` values, repeated or out of order, and carry no state between calls.
/// The simulation loop happens to query with monotonically increasing `t`,
/// but implementations must not rely on that.
pub trait Trajectory {
    /// Evaluate the trajectory at time `t`. The returned reference's `t`
    /// field equals the query time.
    fn eval(&self, t: f64) -> Result<TrajectoryReference, SimError> {
        let _ = t;
        Err(SimError::UnimplementedCapability("Trajectory::eval"))
    }

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BareTrajectory;

    impl Trajectory for BareTrajectory {}

    #[test]
    fn eval_without_override_reports_unimplemented() {
        let err = BareTrajectory
            .eval(1.5)
            .expect_err("base eval must not succeed");
        assert!(
            matches!(err, SimError::UnimplementedCapability("Trajectory::eval")),
            "got {err:?}"
        );
    }

    #[test]
    fn reference_defaults_to_rest_at_position() {
        let r = TrajectoryReference::new(2.0, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(r.t, 2.0);
        assert_eq!(r.velocity, Vector3::zeros());
        assert_eq!(r.yaw, 0.0);
        assert_eq!(r.yaw_rate, 0.0);
    }
}
