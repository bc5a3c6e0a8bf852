//! The effect model: what a driven coroutine can produce.

use std::borrow::Cow;
use std::fmt;

use crate::context::ContextId;
use crate::style::Style;
use crate::task::Task;

/// Reserved attribute key carrying a component's child list.
///
/// Never serialized as a markup attribute.
pub const CHILDREN_ATTR: &str = "children";

/// An output effect: one unit of document content.
///
/// Node markers exist only for literal tags. Component expansion inlines
/// the component's own effects and emits no marker of its own.
#[derive(Debug, Clone)]
pub enum Effect {
	/// A style fragment, serialized once per identity at its first
	/// encounter in document order.
	Style(Style),
	/// Open boundary of a literal tag, with attributes in insertion
	/// order.
	OpenTag {
		name: Cow<'static, str>,
		attrs: Vec<(String, String)>,
	},
	/// Close boundary of a literal tag.
	CloseTag { name: Cow<'static, str> },
	/// A chunk of literal text, serialized verbatim.
	Text(String),
}

/// One suspension of a coroutine, as observed by the driver.
pub enum Step {
	/// Serialize an output effect; the coroutine resumes with nothing.
	Effect(Effect),
	/// Request the value registered for a context token; the coroutine
	/// resumes with that value.
	Context(ContextId),
	/// Splice a nested coroutine in at this point; the coroutine resumes
	/// with the nested coroutine's return value.
	Delegate(Task),
}

impl fmt::Debug for Step {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Step::Effect(effect) => f.debug_tuple("Effect").field(effect).finish(),
			Step::Context(id) => f.debug_tuple("Context").field(id).finish(),
			Step::Delegate(_) => f.write_str("Delegate(..)"),
		}
	}
}
