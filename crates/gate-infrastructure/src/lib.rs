//! # Gate Infrastructure
//! 
//! Session store implementations (adapters).

pub mod session;

pub use session::MemorySessionStore;
