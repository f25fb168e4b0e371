//! Drivers: pluggable read strategies for foreign value kinds.
//!
//! Before the built-in object and map handling, every read step asks the
//! configured [`DriverRegistry`] for the first driver (in registration
//! order) that [satisfies](Driver::satisfies) the current value. That
//! driver alone performs the step.
//!
//! Drivers only take part in reads. Writes never consult them.
//!
//! ## auto_register
//!
//! With the `auto_register` feature, drivers declared through
//! `submit_driver!` are collected at link time by
//! the [`inventory`] crate, see [`DriverRegistry::auto_register`].
//!
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod driver;
mod registry;

#[cfg(feature = "auto_register")]
mod auto_register;

#[cfg(feature = "std")]
mod registry_arc;

// -----------------------------------------------------------------------------
// Exports

pub use driver::{Driver, FnDriver};
pub use registry::DriverRegistry;

#[cfg(feature = "auto_register")]
pub use auto_register::AutoDriver;

#[cfg(feature = "std")]
pub use registry_arc::DriverRegistryArc;
