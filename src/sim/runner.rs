use crate::control::Controller;
use crate::dynamics::{Dynamics, RotorCommand, VehicleState};
use crate::error::{SimError, SimResult};
use crate::trajectory::{Trajectory, TrajectoryReference};

// ---------------------------------------------------------------------------
// Simulation configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub dt: f64,       // simulation step time, s
    pub t_total: f64,  // simulation duration, s
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,     // 100 Hz
            t_total: 5.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Per-tick record
// ---------------------------------------------------------------------------

/// One tick's observation: the state produced by the dynamics step, the
/// command that drove it, and the reference it was steering toward.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRecord {
    pub t: f64,
    pub state: VehicleState,
    pub command: RotorCommand,
    pub reference: TrajectoryReference,
}

// ---------------------------------------------------------------------------
// Fixed-step simulation loop
// ---------------------------------------------------------------------------

/// Composes a dynamics, controller, and trajectory strategy into a
/// fixed-step loop producing the simulated time history.
///
/// Each tick samples the trajectory and state at the start of the interval,
/// computes a command from them, and holds that command constant while the
/// dynamics integrate across the interval (zero-order hold). The per-tick
/// order is fixed: reference, then control, then dynamics.
pub struct Simulator {
    config: SimConfig,
    dynamics: Box<dyn Dynamics>,
    controller: Box<dyn Controller>,
    trajectory: Box<dyn Trajectory>,
    initial_state: VehicleState,
}

impl std::fmt::Debug for Simulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulator")
            .field("config", &self.config)
            .field("initial_state", &self.initial_state)
            .finish_non_exhaustive()
    }
}

impl Simulator {
    /// Wire up a simulator from a config and the three strategies.
    ///
    /// Propagates `dt` into the dynamics strategy. When `initial_state` is
    /// `None`, the start of the trajectory is adopted instead: position and
    /// velocity from `trajectory.eval(0)`, level attitude, zero body rates.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `dt` or `t_total` is not strictly
    /// positive; any error from `trajectory.eval(0)` when deriving the
    /// initial state.
    pub fn new(
        config: SimConfig,
        mut dynamics: Box<dyn Dynamics>,
        controller: Box<dyn Controller>,
        trajectory: Box<dyn Trajectory>,
        initial_state: Option<VehicleState>,
    ) -> SimResult<Self> {
        if !(config.dt > 0.0) {
            return Err(SimError::InvalidConfiguration {
                what: "dt",
                value: config.dt,
            });
        }
        if !(config.t_total > 0.0) {
            return Err(SimError::InvalidConfiguration {
                what: "t_total",
                value: config.t_total,
            });
        }

        dynamics.set_step_size(config.dt);

        let initial_state = match initial_state {
            Some(state) => state,
            None => {
                let start = trajectory.eval(0.0)?;
                VehicleState {
                    position: start.position,
                    velocity: start.velocity,
                    ..VehicleState::default()
                }
            }
        };

        Ok(Self {
            config,
            dynamics,
            controller,
            trajectory,
            initial_state,
        })
    }

    /// The state the dynamics will be reset with at the start of each run.
    pub fn initial_state(&self) -> &VehicleState {
        &self.initial_state
    }

    /// Run one full simulation and return the tick-by-tick history.
    ///
    /// The same instance can be run again: every call resets the dynamics
    /// with the stored initial state and recomputes the history from t = 0.
    ///
    /// # Errors
    ///
    /// The first strategy error aborts the run; no partial history is
    /// returned.
    pub fn simulate(&mut self) -> SimResult<Vec<SimulationRecord>> {
        self.dynamics.reset(self.initial_state.clone());

        let capacity = (self.config.t_total / self.config.dt) as usize + 1;
        let mut output = Vec::with_capacity(capacity.min(1_000_000));

        let mut state = self.initial_state.clone();
        let mut t = 0.0;
        while t < self.config.t_total {
            let reference = self.trajectory.eval(t)?;
            let command = self.controller.step(t, &reference, &state)?;
            state = self.dynamics.step(t, &command)?;

            output.push(SimulationRecord {
                t,
                state: state.clone(),
                command,
                reference,
            });

            t += self.config.dt;
        }

        Ok(output)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
