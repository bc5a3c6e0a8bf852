//! # Weft
//!
//! Streaming server-side HTML rendering with coroutine components.
//!
//! Weft turns a tree of declarative components into a byte stream of
//! HTML, incrementally, without buffering the whole document. Components
//! are coroutines: they can suspend mid-render to request externally
//! supplied data (a [`Context`] token resolved by the route's registry,
//! possibly asynchronously) or to emit markup and style fragments. The
//! driver walks the coroutine tree over an explicit frame stack, so
//! nesting depth never grows the native call stack, and deduplicates
//! style fragments by identity at their first encounter.
//!
//! ## Example
//!
//! ```
//! use weft::tags::{div, p};
//! use weft::{Context, Route, from_context};
//!
//! # tokio_test::block_on(async {
//! let greeting = Context::<String>::new();
//! let page = div().child(from_context(greeting, |value| {
//! 	p().child(value.as_str()).into()
//! }));
//!
//! let html = Route::new(page)
//! 	.provide(&greeting, "hello".to_string())
//! 	.render_to_string()
//! 	.await
//! 	.unwrap();
//! assert_eq!(html, "<div><p>hello</p></div>");
//! # });
//! ```
//!
//! Interpolated text is serialized verbatim: the engine trusts its
//! inputs and applies no HTML escaping.

pub use weft_core::{
	CHILDREN_ATTR, Context, ContextId, Effect, IntoTask, RenderError, RenderResult, Scope, Step,
	Style, Task, TaskState, Value,
};
pub use weft_html::{
	ComponentFn, ComponentNode, Element, Node, Props, ScopeExt, component_fn, from_context, tags,
};
pub use weft_render::{ContextRegistry, Provider, ProviderFactory, RenderStream, Route};
