//! # Gate Core
//! 
//! Domain types, the session store port, and the session gate service.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain types
pub use domain::*;
pub use error::DomainError;
pub use services::{GateOutcome, GateRequest, SessionGate};
