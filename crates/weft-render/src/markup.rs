//! Wire-format serialization of effects.
//!
//! Raw HTML: attributes in insertion order, the reserved `children` key
//! skipped, text verbatim. Interpolated values are trusted; no escaping
//! is applied.

use std::fmt::Write;

use weft_core::{CHILDREN_ATTR, Effect};

/// Appends one effect's wire form.
pub(crate) fn write_effect(effect: &Effect, out: &mut String) {
	match effect {
		Effect::Style(style) => {
			out.push_str("<style>");
			out.push_str(style.content());
			out.push_str("</style>");
		}
		Effect::OpenTag { name, attrs } => {
			out.push('<');
			out.push_str(name);
			for (key, value) in attrs {
				if key == CHILDREN_ATTR {
					continue;
				}
				let _ = write!(out, " {key}=\"{value}\"");
			}
			out.push('>');
		}
		Effect::CloseTag { name } => {
			let _ = write!(out, "</{name}>");
		}
		Effect::Text(text) => out.push_str(text),
	}
}
