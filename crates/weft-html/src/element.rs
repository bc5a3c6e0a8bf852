//! Builder for literal tags.

use std::borrow::Cow;

use crate::node::Node;

/// A literal tag: name, attributes in insertion order, children.
///
/// ```
/// use weft_html::Element;
///
/// let link = Element::new("a")
/// 	.attr("href", "/about")
/// 	.child("About");
/// # let _ = link;
/// ```
#[derive(Debug)]
pub struct Element {
	name: Cow<'static, str>,
	attrs: Vec<(String, String)>,
	children: Vec<Node>,
}

impl Element {
	/// Starts a tag with the given name.
	pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
		Self {
			name: name.into(),
			attrs: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Appends an attribute. Attributes serialize in insertion order.
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

	/// The tag name.
	pub fn name(&self) -> &str {
		&self.name
	}

	pub(crate) fn into_parts(self) -> (Cow<'static, str>, Vec<(String, String)>, Vec<Node>) {
		(self.name, self.attrs, self.children)
	}
}
