//! Context tokens: opaque handles for values supplied at render time.

use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a context token.
///
/// Tokens compare by identity, not by the type they carry: two tokens for
/// the same value type are unrelated registry keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(u64);

/// An opaque token representing a typed dependency a component needs but
/// does not know how to produce.
///
/// Every call to [`Context::new`] mints a distinct token; a registry entry
/// matches only the token it was registered under. Tokens are `Copy` and
/// are typically held in statics for the lifetime of the application.
///
/// ```
/// use weft_core::Context;
///
/// let a = Context::<String>::new();
/// let b = Context::<String>::new();
/// assert_ne!(a.id(), b.id());
/// ```
pub struct Context<T> {
	id: ContextId,
	_value: PhantomData<fn() -> T>,
}

impl<T> Context<T> {
	/// Mints a fresh token.
	pub fn new() -> Self {
		Self {
			id: ContextId(NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed)),
			_value: PhantomData,
		}
	}

	/// The token's identity, used as the registry key.
	pub fn id(&self) -> ContextId {
		self.id
	}
}

impl<T> Default for Context<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Clone for Context<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for Context<T> {}

impl<T> fmt::Debug for Context<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Context").field(&self.id).finish()
	}
}
