//! Core types for the Weft rendering engine.
//!
//! A Weft document is produced by a tree of coroutines. Each coroutine
//! ([`Task`]) suspends to emit an output effect (markup, text, or a style
//! fragment), to request an externally supplied value (a [`Context`] token),
//! or to splice a nested coroutine into the output. The driver in
//! `weft-render` owns the coroutines as explicit stack frames, so nesting
//! depth never grows the native call stack.
//!
//! Native async generators are not yet stable, so tasks are built on the
//! `genawaiter` crate: an async body receives a [`Scope`] handle and yields
//! [`Step`]s through it while staying free to await ordinary futures
//! between steps.

mod context;
mod effect;
mod error;
mod style;
mod task;
mod value;

pub use context::{Context, ContextId};
pub use effect::{CHILDREN_ATTR, Effect, Step};
pub use error::{RenderError, RenderResult};
pub use style::Style;
pub use task::{IntoTask, Scope, Task, TaskFuture, TaskState};
pub use value::Value;
