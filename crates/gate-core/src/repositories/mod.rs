//! Repository traits (ports)

pub mod session_store;

pub use session_store::SessionStore;
#[cfg(test)]
pub use session_store::MockSessionStore;
