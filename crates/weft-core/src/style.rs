//! Style fragments, deduplicated by identity.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_STYLE_ID: AtomicU64 = AtomicU64::new(1);

/// An immutable fragment of literal CSS.
///
/// Distinctness is by identity, not content: two fragments built from
/// equal text at different call sites both render, while every clone of
/// one fragment shares its identity and renders once per document.
/// Fragments are created at template-authoring time and are read-only
/// during rendering.
///
/// ```
/// use weft_core::Style;
///
/// let card = Style::new(".card { padding: 12px; }");
/// let again = card.clone();
/// assert_eq!(card.id(), again.id());
/// assert_ne!(card.id(), Style::new(".card { padding: 12px; }").id());
/// ```
#[derive(Clone)]
pub struct Style {
	id: u64,
	content: Arc<str>,
}

impl Style {
	/// Creates a fragment with a fresh identity.
	pub fn new(content: impl Into<Arc<str>>) -> Self {
		Self {
			id: NEXT_STYLE_ID.fetch_add(1, Ordering::Relaxed),
			content: content.into(),
		}
	}

	/// The dedup key for this fragment.
	pub fn id(&self) -> u64 {
		self.id
	}

	/// The literal CSS text.
	pub fn content(&self) -> &str {
		&self.content
	}
}

impl fmt::Debug for Style {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Style").field("id", &self.id).finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn equal_text_distinct_identity() {
		let a = Style::new("body { margin: 0; }");
		let b = Style::new("body { margin: 0; }");
		assert_ne!(a.id(), b.id());
		assert_eq!(a.content(), b.content());
	}

	#[test]
	fn clones_share_identity() {
		let a = Style::new(".x { color: red; }");
		let b = a.clone();
		assert_eq!(a.id(), b.id());
	}
}
