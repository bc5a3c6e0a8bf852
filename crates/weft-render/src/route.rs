//! Routes: a root coroutine plus the registry that serves it.

use std::future::Future;
use std::sync::Arc;

use anyhow::anyhow;
use tokio::sync::mpsc;
use tracing::debug;
use weft_core::{Context, IntoTask, RenderError, RenderResult, Scope, Task, Value};

use crate::driver::{DriveEnd, Driver};
use crate::registry::{ContextRegistry, Provider, ProviderFactory};
use crate::stream::RenderStream;

/// Output channel capacity; the bound is what propagates consumer
/// backpressure into the drive loop.
const CHANNEL_CAPACITY: usize = 16;

/// One renderable document: a root coroutine and the context registry
/// that serves its requests.
///
/// Configure providers with the builder calls, then consume exactly once
/// with [`Route::render_to_stream`] (or the buffered
/// [`Route::render_to_string`]). A route is never shared across renders.
///
/// ```
/// use weft_core::Context;
/// use weft_html::{from_context, tags::p};
/// use weft_render::Route;
///
/// # tokio_test::block_on(async {
/// let greeting = Context::<String>::new();
/// let page = from_context(greeting, |value| p().child(value.as_str()).into());
///
/// let html = Route::new(page)
/// 	.provide(&greeting, "hello".to_string())
/// 	.render_to_string()
/// 	.await
/// 	.unwrap();
/// assert_eq!(html, "<p>hello</p>");
/// # });
/// ```
pub struct Route {
	root: Task,
	registry: ContextRegistry,
}

impl Route {
	/// Creates a route from any coroutine source: a [`Task`], a template
	/// tree, or an element builder.
	pub fn new(root: impl IntoTask) -> Self {
		Self {
			root: root.into_task(),
			registry: ContextRegistry::new(),
		}
	}

	/// Registers a plain value for a context token. Every request site
	/// resumes with a shared clone of it.
	pub fn provide<T>(mut self, context: &Context<T>, value: T) -> Self
	where
		T: Send + Sync + 'static,
	{
		self.registry.insert(context.id(), Provider::Value(Value::of(value)));
		self
	}

	/// Registers a coroutine provider, invoked once per request site.
	///
	/// The body may emit effects, request further contexts, and await
	/// asynchronous work before returning its value. The requesting frame
	/// stays suspended until the provider completes.
	///
	/// Providers may request other tokens to any depth, but the registry
	/// is expected to be acyclic: no cycle detection is performed, and a
	/// provider that (directly or transitively) requests its own token
	/// grows the frame stack without bound.
	pub fn provide_with<T, F, Fut>(mut self, context: &Context<T>, provider: F) -> Self
	where
		T: Send + Sync + 'static,
		F: Fn(Scope) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = RenderResult<T>> + Send + 'static,
	{
		let provider = Arc::new(provider);
		let factory: ProviderFactory = Box::new(move || {
			let provider = Arc::clone(&provider);
			Task::new(move |scope| async move { (*provider)(scope).await.map(Value::of) })
		});
		self.registry.insert(context.id(), Provider::Factory(factory));
		self
	}

	/// Renders to a backpressure-aware byte stream.
	///
	/// The drive loop runs as its own tokio task. The stream closes
	/// normally on completion; any failure arrives as one terminal error
	/// after whatever bytes were already flushed.
	pub fn render_to_stream(self) -> RenderStream {
		let (sender, receiver) = mpsc::channel(CHANNEL_CAPACITY);
		let driver = Driver::new(self.root, self.registry, sender.clone());
		tokio::spawn(async move {
			match driver.run().await {
				Ok(DriveEnd::Complete) => {}
				Ok(DriveEnd::Disconnected) => debug!("consumer dropped the stream"),
				Err(error) => {
					debug!(%error, "render failed");
					let _ = sender.send(Err(error)).await;
				}
			}
		});
		RenderStream::new(receiver)
	}

	/// Buffers the whole document; the convenience entry point for tests
	/// and non-streaming callers.
	pub async fn render_to_string(self) -> RenderResult<String> {
		use futures::StreamExt;

		let mut stream = self.render_to_stream();
		let mut buf = Vec::new();
		while let Some(chunk) = stream.next().await {
			buf.extend_from_slice(&chunk?);
		}
		String::from_utf8(buf).map_err(|error| RenderError::Component(anyhow!(error)))
	}
}
