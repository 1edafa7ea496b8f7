//! # Gate API
//! 
//! HTTP handlers, session cookie handling, page rendering and routing.

pub mod handlers;
pub mod error;
pub mod render;
pub mod response;
pub mod router;
pub mod session_cookie;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
