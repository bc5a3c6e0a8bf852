//! The template tree and its lowering to a coroutine.

use std::borrow::Cow;
use std::fmt;

use weft_core::{Effect, IntoTask, RenderResult, Scope, Style, Task, Value};

use crate::component::ComponentNode;
use crate::element::Element;

/// Deferred constructor for a child that is itself a coroutine-producing
/// value.
pub type TaskFactory = Box<dyn FnOnce() -> Task + Send>;

/// A declarative template tree.
///
/// Most variants are produced through `Into<Node>` conversions: strings
/// and numbers become text, vectors become fragments, `Option::None`
/// renders nothing.
pub enum Node {
	/// A literal tag with attributes and children.
	Element(Element),
	/// A text chunk. Empty text produces no effect.
	Text(String),
	/// A list of children, flattened into the surrounding sequence.
	Fragment(Vec<Node>),
	/// A style fragment placed declaratively in the tree.
	Style(Style),
	/// A component reference, expanded lazily while driving.
	Component(ComponentNode),
	/// A coroutine-producing child, delegated via forwarding.
	Dynamic(TaskFactory),
}

impl Node {
	/// An empty fragment; renders nothing.
	pub fn empty() -> Self {
		Node::Fragment(Vec::new())
	}

	/// Wraps a deferred coroutine as a tree child.
	pub fn dynamic(factory: impl FnOnce() -> Task + Send + 'static) -> Self {
		Node::Dynamic(Box::new(factory))
	}
}

impl fmt::Debug for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Node::Element(element) => f.debug_tuple("Element").field(&element.name()).finish(),
			Node::Text(text) => f.debug_tuple("Text").field(text).finish(),
			Node::Fragment(children) => f.debug_tuple("Fragment").field(&children.len()).finish(),
			Node::Style(style) => f.debug_tuple("Style").field(&style.id()).finish(),
			Node::Component(_) => f.write_str("Component(..)"),
			Node::Dynamic(_) => f.write_str("Dynamic(..)"),
		}
	}
}

impl From<Element> for Node {
	fn from(element: Element) -> Self {
		Node::Element(element)
	}
}

impl From<ComponentNode> for Node {
	fn from(component: ComponentNode) -> Self {
		Node::Component(component)
	}
}

impl From<Style> for Node {
	fn from(style: Style) -> Self {
		Node::Style(style)
	}
}

impl From<&Style> for Node {
	fn from(style: &Style) -> Self {
		Node::Style(style.clone())
	}
}

impl From<String> for Node {
	fn from(text: String) -> Self {
		Node::Text(text)
	}
}

impl From<&str> for Node {
	fn from(text: &str) -> Self {
		Node::Text(text.to_string())
	}
}

impl<T: Into<Node>> From<Vec<T>> for Node {
	fn from(children: Vec<T>) -> Self {
		Node::Fragment(children.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Node>> From<Option<T>> for Node {
	fn from(child: Option<T>) -> Self {
		match child {
			Some(child) => child.into(),
			None => Node::empty(),
		}
	}
}

macro_rules! text_node_from {
	($($kind:ty)*) => {$(
		impl From<$kind> for Node {
			fn from(value: $kind) -> Self {
				Node::Text(value.to_string())
			}
		}
	)*};
}

text_node_from! { i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64 }

/// One unit of work for the iterative tree walk.
enum WalkItem {
	Open(Node),
	Close(Cow<'static, str>),
}

/// Lowers a tree to its effect sequence against the given scope.
///
/// The walk keeps its own explicit stack; component and dynamic children
/// are delegated through the driver, so template depth never grows the
/// native call stack.
async fn walk(scope: Scope, root: Node) -> RenderResult<Value> {
	let mut stack = vec![WalkItem::Open(root)];
	while let Some(item) = stack.pop() {
		match item {
			WalkItem::Close(name) => scope.effect(Effect::CloseTag { name }).await,
			WalkItem::Open(node) => match node {
				Node::Text(text) => scope.text(text).await,
				Node::Style(style) => scope.effect(Effect::Style(style)).await,
				Node::Fragment(children) => {
					stack.extend(children.into_iter().rev().map(WalkItem::Open));
				}
				Node::Element(element) => {
					let (name, attrs, children) = element.into_parts();
					scope
						.effect(Effect::OpenTag {
							name: name.clone(),
							attrs,
						})
						.await;
					stack.push(WalkItem::Close(name));
					stack.extend(children.into_iter().rev().map(WalkItem::Open));
				}
				Node::Component(component) => {
					let task = component.expand()?;
					scope.delegate(task).await;
				}
				Node::Dynamic(factory) => {
					scope.delegate(factory()).await;
				}
			},
		}
	}
	Ok(Value::unit())
}

impl IntoTask for Node {
	fn into_task(self) -> Task {
		Task::new(move |scope| walk(scope, self))
	}
}

impl IntoTask for Element {
	fn into_task(self) -> Task {
		Node::Element(self).into_task()
	}
}

impl IntoTask for ComponentNode {
	fn into_task(self) -> Task {
		Node::Component(self).into_task()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tags::div;

	#[test]
	fn conversions_cover_text_like_children() {
		assert!(matches!(Node::from("text"), Node::Text(_)));
		assert!(matches!(Node::from(7u32), Node::Text(ref t) if t == "7"));
		assert!(matches!(Node::from(-3i64), Node::Text(ref t) if t == "-3"));
	}

	#[test]
	fn option_none_renders_nothing() {
		let node = Node::from(None::<&str>);
		assert!(matches!(node, Node::Fragment(ref children) if children.is_empty()));
	}

	#[test]
	fn vectors_become_fragments() {
		let node = Node::from(vec!["a", "b"]);
		assert!(matches!(node, Node::Fragment(ref children) if children.len() == 2));
	}

	#[test]
	fn elements_nest() {
		let tree = div().child(div().child("inner"));
		let Node::Element(outer) = Node::from(tree) else {
			panic!("expected element");
		};
		assert_eq!(outer.name(), "div");
	}
}
