//! Error taxonomy for a render.
//!
//! Every variant is fatal: the driver performs no retries and the output
//! stream is put into a terminal error state. Bytes flushed before the
//! failure are not retracted.

use thiserror::Error;

use crate::context::ContextId;

/// Errors that abort a render.
#[derive(Debug, Error)]
pub enum RenderError {
	/// A coroutine requested a context token with no registry entry.
	#[error("context {context:?} not provided")]
	MissingContext {
		/// The token that had no provider.
		context: ContextId,
	},

	/// A tag callable did not produce a render coroutine.
	#[error("components must be coroutine factories")]
	InvalidComponent,

	/// A component or provider failed while rendering.
	#[error(transparent)]
	Component(#[from] anyhow::Error),
}

/// Result alias used throughout the engine.
pub type RenderResult<T> = Result<T, RenderError>;
