pub mod control;
pub mod dynamics;
pub mod error;
pub mod sim;
pub mod trajectory;

pub use control::Controller;
pub use dynamics::{Dynamics, RotorCommand, StateVector, VehicleState};
pub use error::{SimError, SimResult};
pub use sim::{SimConfig, SimulationRecord, Simulator};
pub use trajectory::{Trajectory, TrajectoryReference};
