//! Builder-style entry points for the file-level operations.
//!
//! Both builders are prepared empty, filled with `with_*`/`use_*` calls
//! and run via `execute()`, which validates the required fields first.

pub mod embed;
pub mod extract;
