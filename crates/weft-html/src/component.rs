//! Component references and the component calling convention.

use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use weft_core::{Context, IntoTask, RenderError, RenderResult, Scope, Task, Value};

use crate::node::Node;

/// The single input record a component callable receives: its attributes
/// plus its children under the reserved `children` key.
pub struct Props {
	/// Attributes written on the component reference, in insertion order.
	pub attrs: Vec<(String, String)>,
	/// The reference's child list. Never serialized as an attribute.
	pub children: Vec<Node>,
}

impl Props {
	/// Looks up an attribute by key.
	pub fn attr(&self, key: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(name, _)| name == key)
			.map(|(_, value)| value.as_str())
	}

	/// Consumes the child list, leaving the props reusable for attribute
	/// lookups.
	pub fn take_children(&mut self) -> Vec<Node> {
		std::mem::take(&mut self.children)
	}
}

/// A type-erased component callable.
///
/// The call must produce a [`Task`] behind the `Any`; anything else fails
/// the render with [`RenderError::InvalidComponent`] when the reference
/// is expanded, which happens lazily while driving, not at template
/// construction.
pub type ComponentFn = Arc<dyn Fn(Props) -> Box<dyn Any + Send> + Send + Sync>;

/// A component reference in a template tree.
///
/// Built like an [`Element`](crate::Element), but the tag is a callable:
/// expansion passes attributes and children to it as one [`Props`] record
/// and splices the resulting coroutine's effects in place. Component
/// references emit no markers of their own.
pub struct ComponentNode {
	func: ComponentFn,
	attrs: Vec<(String, String)>,
	children: Vec<Node>,
}

impl ComponentNode {
	/// Starts a reference to the given callable.
	pub fn new(func: ComponentFn) -> Self {
		Self {
			func,
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Appends an attribute, passed through to the component's props.
	pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.push((key.into(), value.into()));
		self
	}

	/// Appends one child.
	pub fn child(mut self, child: impl Into<Node>) -> Self {
		self.children.push(child.into());
		self
	}

	/// Appends every child from an iterator.
	pub fn children<I>(mut self, children: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Node>,
	{
		self.children.extend(children.into_iter().map(Into::into));
		self
	}

	/// Calls the component with its props and checks the calling
	/// convention.
	pub(crate) fn expand(self) -> RenderResult<Task> {
		let raw = self.func.as_ref()(Props {
			attrs: self.attrs,
			children: self.children,
		});
		match raw.downcast::<Task>() {
			Ok(task) => Ok(*task),
			Err(_) => Err(RenderError::InvalidComponent),
		}
	}
}

/// Wraps a typed async component body into a [`ComponentFn`].
///
/// ```
/// use weft_core::Value;
/// use weft_html::{ScopeExt, component_fn, tags::p};
///
/// let greeting = component_fn(|props, scope| async move {
/// 	let name = props.attr("name").unwrap_or("stranger").to_string();
/// 	scope.render(p().child(name).into()).await;
/// 	Ok(Value::unit())
/// });
/// # let _ = greeting;
/// ```
pub fn component_fn<F, Fut>(body: F) -> ComponentFn
where
	F: Fn(Props, Scope) -> Fut + Send + Sync + 'static,
	Fut: Future<Output = RenderResult<Value>> + Send + 'static,
{
	let body = Arc::new(body);
	Arc::new(move |props| {
		let body = Arc::clone(&body);
		Box::new(Task::new(move |scope| (*body)(props, scope)))
	})
}

/// Renders a node computed from a context value; the declarative form of
/// the fetch-then-render component.
pub fn from_context<T, F>(context: Context<T>, render: F) -> Node
where
	T: Send + Sync + 'static,
	F: FnOnce(Arc<T>) -> Node + Send + 'static,
{
	Node::dynamic(move || {
		Task::new(move |scope| async move {
			let value = scope.resolve(&context).await?;
			let node = render(value);
			scope.delegate(node.into_task()).await;
			Ok(Value::unit())
		})
	})
}
