//! The context registry: token-to-provider mapping for one render.

use std::collections::HashMap;

use weft_core::{ContextId, Task, Value};

/// Factory for provider coroutines, invoked once per request site.
pub type ProviderFactory = Box<dyn Fn() -> Task + Send + Sync>;

/// The registered source of a context token's value.
pub enum Provider {
	/// A plain value; requesters resume with a shared clone immediately.
	Value(Value),
	/// A coroutine factory. Each request site gets a fresh coroutine,
	/// driven to completion before the requester resumes; resolutions
	/// are never memoized across sites.
	Factory(ProviderFactory),
}

/// Maps context tokens to providers.
///
/// Built before rendering starts, immutable afterwards, owned by exactly
/// one driver. Registries are never shared across renders.
#[derive(Default)]
pub struct ContextRegistry {
	providers: HashMap<ContextId, Provider>,
}

impl ContextRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a provider, replacing any previous entry for the token.
	pub fn insert(&mut self, context: ContextId, provider: Provider) {
		self.providers.insert(context, provider);
	}

	/// Whether the token has an entry.
	pub fn contains(&self, context: &ContextId) -> bool {
		self.providers.contains_key(context)
	}

	pub(crate) fn get(&self, context: &ContextId) -> Option<&Provider> {
		self.providers.get(context)
	}
}
