//! Declarative template trees for the Weft rendering engine.
//!
//! Templates are built with the [`Element`] and [`ComponentNode`] builders
//! (or the bare tag functions in [`tags`]) into a [`Node`] tree. Nothing
//! renders at construction time: lowering a tree to a coroutine happens
//! when it is driven, and component references expand lazily at that
//! point, which is also where a non-conformant component fails the render.
//!
//! ```
//! use weft_html::tags::{div, p};
//!
//! let tree = div()
//! 	.attr("class", "greeting")
//! 	.child(p().child("Hello"));
//! # let _ = tree;
//! ```

mod component;
mod element;
mod node;
pub mod tags;

pub use component::{ComponentFn, ComponentNode, Props, component_fn, from_context};
pub use element::Element;
pub use node::{Node, TaskFactory};

use weft_core::{IntoTask, Scope};

/// Template conveniences on [`Scope`].
pub trait ScopeExt {
	/// Splices a template tree into the output at this point.
	fn render(&self, node: Node) -> impl Future<Output = ()> + Send;
}

impl ScopeExt for Scope {
	async fn render(&self, node: Node) {
		self.delegate(node.into_task()).await;
	}
}
