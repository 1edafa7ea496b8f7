//! Domain services

pub mod session_gate;

pub use session_gate::{GateOutcome, GateRequest, SessionGate};
