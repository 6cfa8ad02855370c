//! Simulation engine.
//!
//! A single wolf chases a herd of randomly wandering sheep on an unbounded
//! plane, one round at a time.

pub mod sheep;
pub mod wolf;
pub mod simulation;

pub use sheep::Sheep;
pub use wolf::{Hunt, Wolf};
pub use simulation::{RoundReport, Simulation, SimulationResult, SimulationState};
