//! Transformer pipelines applied to read results.
//!
//! A read path may name transformers inline (`a.b|first|upper`) and the
//! caller may pass more. Inline names run first, then the caller's, each
//! one feeding the next.

// -----------------------------------------------------------------------------
// Modules

mod list;
mod registry;

// -----------------------------------------------------------------------------
// Exports

pub use list::TransformerList;
pub use registry::{Transformer, TransformerRegistry};

use alloc::string::String;

use thiserror::Error;

use crate::{BoxError, Value};

/// Applies named transformers to a value.
///
/// The accessor only knows transformer names; an implementation decides
/// what they mean. [`TransformerRegistry`] is the stock one.
pub trait TransformerPipeline: Send + Sync {
    /// Runs `names` in order over `value`.
    ///
    /// # Errors
    ///
    /// [`TransformError::Unknown`] for a name the pipeline does not know,
    /// [`TransformError::Failed`] when a transformer rejects its input.
    fn apply(&self, value: Value, names: &[&str]) -> Result<Value, TransformError>;
}

/// An error raised while applying transformers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransformError {
    #[error("Unknown transformer '{0}'")]
    Unknown(String),

    #[error("Transformer '{name}' failed: {error}")]
    Failed {
        name: String,
        #[source]
        error: BoxError,
    },
}
