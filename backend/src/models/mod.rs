pub mod cleaner;
pub mod client;
pub mod job;
pub mod macros;
pub mod notification;
pub mod seed;

pub use cleaner::*;
pub use client::*;
pub use job::*;
pub use notification::*;
pub use seed::*;
