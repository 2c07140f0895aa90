use nalgebra::{Quaternion, SVector, UnitQuaternion, Vector3, Vector4};

// ---------------------------------------------------------------------------
// Vehicle state: position, velocity, attitude, angular rate
// ---------------------------------------------------------------------------

/// Instantaneous physical state of the vehicle.
/// Frame: world-fixed for position/velocity, body frame for angular rates.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleState {
    pub position: Vector3<f64>,             // m, world frame
    pub orientation: UnitQuaternion<f64>,   // body→world rotation
    pub velocity: Vector3<f64>,             // m/s, world frame
    pub angular_velocity: Vector3<f64>,     // rad/s, body frame (r, p, q)
}

impl VehicleState {
    /// State at a given position, at rest and level.
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Flatten into the 13-element integration vector.
    ///
    /// Layout: `[position(3), velocity(3), quaternion(w, x, y, z),
    /// angular_velocity(3)]`. Inverse of [`VehicleState::from_vector`].
    pub fn to_vector(&self) -> StateVector {
        let q = self.orientation.quaternion();
        StateVector::from([
            self.position.x,
            self.position.y,
            self.position.z,
            self.velocity.x,
            self.velocity.y,
            self.velocity.z,
            q.w,
            q.i,
            q.j,
            q.k,
            self.angular_velocity.x,
            self.angular_velocity.y,
            self.angular_velocity.z,
        ])
    }

    /// Rebuild a state from the 13-element integration vector.
    ///
    /// The quaternion block is renormalized, so a vector that has drifted
    /// off unit norm over a few integration steps still decodes to a valid
    /// rotation.
    pub fn from_vector(v: &StateVector) -> Self {
        let q = Quaternion::new(v[6], v[7], v[8], v[9]);
        Self {
            position: Vector3::new(v[0], v[1], v[2]),
            orientation: UnitQuaternion::new_normalize(q),
            velocity: Vector3::new(v[3], v[4], v[5]),
            angular_velocity: Vector3::new(v[10], v[11], v[12]),
        }
    }
}

impl Default for VehicleState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            orientation: UnitQuaternion::identity(),
            velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

/// Flat numeric encoding of a [`VehicleState`], for dynamics strategies
/// that integrate in vector form.
pub type StateVector = SVector<f64, 13>;

// ---------------------------------------------------------------------------
// Rotor command
// ---------------------------------------------------------------------------

/// Four rotor angular rates [rad/s], all nonnegative.
/// Order: front-left, front-right, back-left, back-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotorCommand {
    pub rotor_rates: Vector4<f64>,
}

impl RotorCommand {
    pub fn new(rotor_rates: Vector4<f64>) -> Self {
        Self { rotor_rates }
    }

    /// All four rotors at the same rate.
    pub fn uniform(rate: f64) -> Self {
        Self {
            rotor_rates: Vector4::repeat(rate),
        }
    }

    /// All rotors stopped.
    pub fn zero() -> Self {
        Self {
            rotor_rates: Vector4::zeros(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spinning_state() -> VehicleState {
        VehicleState {
            position: Vector3::new(1.0, -2.0, 3.5),
            orientation: UnitQuaternion::from_euler_angles(0.1, -0.2, 0.7),
            velocity: Vector3::new(0.5, 0.0, -1.2),
            angular_velocity: Vector3::new(0.01, -0.4, 2.0),
        }
    }

    #[test]
    fn default_is_at_rest_and_level() {
        let s = VehicleState::default();
        assert_eq!(s.position, Vector3::zeros());
        assert_eq!(s.orientation, UnitQuaternion::identity());
        assert_eq!(s.velocity, Vector3::zeros());
        assert_eq!(s.angular_velocity, Vector3::zeros());
    }

    #[test]
    fn vector_roundtrip_reproduces_state() {
        let s = spinning_state();
        let decoded = VehicleState::from_vector(&s.to_vector());

        assert_relative_eq!(decoded.position, s.position, epsilon = 1e-9);
        assert_relative_eq!(decoded.velocity, s.velocity, epsilon = 1e-9);
        assert_relative_eq!(
            decoded.angular_velocity,
            s.angular_velocity,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            decoded.orientation.quaternion().coords,
            s.orientation.quaternion().coords,
            epsilon = 1e-9
        );
    }

    #[test]
    fn vector_layout_is_pos_vel_quat_omega() {
        let s = spinning_state();
        let v = s.to_vector();
        assert_eq!(v[0], s.position.x);
        assert_eq!(v[3], s.velocity.x);
        assert_eq!(v[6], s.orientation.quaternion().w);
        assert_eq!(v[10], s.angular_velocity.x);
    }

    #[test]
    fn decode_renormalizes_drifted_quaternion() {
        let mut v = spinning_state().to_vector();
        // Scale the quaternion block the way integrator drift would
        for i in 6..10 {
            v[i] *= 1.05;
        }
        let decoded = VehicleState::from_vector(&v);
        let norm = decoded.orientation.quaternion().norm();
        assert!(
            (norm - 1.0).abs() < 1e-12,
            "Decoded quaternion norm should be 1, got {}",
            norm
        );
    }

    #[test]
    fn uniform_command_sets_all_rotors() {
        let cmd = RotorCommand::uniform(500.0);
        assert_eq!(cmd.rotor_rates, Vector4::repeat(500.0));
        assert_eq!(RotorCommand::zero().rotor_rates, Vector4::zeros());
    }
}
