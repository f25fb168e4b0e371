#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod casing;
pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use casing::{camelize, lower_camelize};
