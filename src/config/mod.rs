//! Router configuration structs.
//!
//! Each struct validates its invariants at construction (`new` calls
//! `validate`) and exposes const accessors. Runtime changes go through the
//! router's admin setters, which re-validate.

mod buffer;
mod oracle;
mod router;

pub use buffer::BufferConfig;
pub use oracle::{OracleConfig, DEFAULT_PERIOD, MAX_PERIOD};
pub use router::RouterConfig;
