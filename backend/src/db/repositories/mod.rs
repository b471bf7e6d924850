//! Record store implementations.
//!
//! - `local`: in-memory store for development, tests and seeded sessions
pub mod local;

pub use local::LocalRepository;
