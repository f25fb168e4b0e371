//! Items used by `#[derive(Property)]` and `submit_driver!` expansions.
//!
//! Not public API.

pub use alloc;

#[cfg(feature = "auto_register")]
pub use inventory;
