//! # Gate Core - Domain Module
//! 
//! Session state, credentials and the artifact record.

pub mod session;
pub mod credentials;
pub mod artifact;

pub use session::{Session, SessionId, SessionStatus};
pub use credentials::{Credentials, LoginSubmission};
pub use artifact::{ArtifactRecord, Evaluation, MetadataRow};
