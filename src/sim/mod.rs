pub mod runner;

pub use runner::{SimConfig, SimulationRecord, Simulator};
