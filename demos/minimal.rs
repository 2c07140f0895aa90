use nalgebra::Vector3;

use quad_sim::{
    Controller, Dynamics, RotorCommand, SimConfig, SimError, Simulator, Trajectory,
    TrajectoryReference, VehicleState,
};

/// Spoofed dynamics that ignores commands and hovers at a fixed position.
struct SpoofedDynamics {
    position: Vector3<f64>,
}

impl Dynamics for SpoofedDynamics {
    fn reset(&mut self, _initial: VehicleState) {}

    fn set_step_size(&mut self, _dt: f64) {}

    fn step(&mut self, _t: f64, _command: &RotorCommand) -> Result<VehicleState, SimError> {
        Ok(VehicleState::at_position(self.position))
    }

    fn name(&self) -> &str {
        "Spoofed"
    }
}

/// Controller that keeps every rotor off.
struct UselessController;

impl Controller for UselessController {
    fn step(
        &mut self,
        _t: f64,
        _reference: &TrajectoryReference,
        _state: &VehicleState,
    ) -> Result<RotorCommand, SimError> {
        Ok(RotorCommand::zero())
    }

    fn name(&self) -> &str {
        "Useless"
    }
}

/// Trajectory that parks the reference at the origin forever.
struct OriginTrajectory;

impl Trajectory for OriginTrajectory {
    fn eval(&self, t: f64) -> Result<TrajectoryReference, SimError> {
        Ok(TrajectoryReference::new(t, Vector3::zeros()))
    }
}

fn main() -> Result<(), SimError> {
    // Hover one meter above the ground
    let dynamics = SpoofedDynamics {
        position: Vector3::new(0.0, 0.0, 1.0),
    };

    let mut sim = Simulator::new(
        SimConfig { dt: 0.01, t_total: 5.0 },
        Box::new(dynamics),
        Box::new(UselessController),
        Box::new(OriginTrajectory),
        None,
    )?;

    println!("Simulating with spoofed dynamics...");
    let records = sim.simulate()?;

    let last = records.last().expect("at least one tick");
    println!("Ticks: {}", records.len());
    println!("Final time: {:.2} s", last.t);
    println!(
        "Final position: ({:.2}, {:.2}, {:.2}) m",
        last.state.position.x, last.state.position.y, last.state.position.z
    );
    println!(
        "Final reference: ({:.2}, {:.2}, {:.2}) m",
        last.reference.position.x, last.reference.position.y, last.reference.position.z
    );

    Ok(())
}
