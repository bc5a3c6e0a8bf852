//! Context resolution: providers, nesting, and the error paths.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use futures::StreamExt;
use rstest::*;
use weft_core::{Context, RenderError, Value};
use weft_html::tags::{div, p};
use weft_html::{ComponentNode, Node, ScopeExt, component_fn, from_context};
use weft_render::Route;

/// A component that resolves one string context and renders it in a
/// paragraph.
fn paragraph_consumer(context: Context<String>) -> ComponentNode {
	ComponentNode::new(component_fn(move |_props, scope| async move {
		let value = scope.resolve(&context).await?;
		scope.render(p().child(value.as_str()).into()).await;
		Ok(Value::unit())
	}))
}

#[rstest]
#[tokio::test]
async fn provides_and_consumes_a_value() {
	let context = Context::<String>::new();
	let tree = div().child(paragraph_consumer(context));

	let html = Route::new(tree)
		.provide(&context, "ctx-value".to_string())
		.render_to_string()
		.await
		.unwrap();
	assert_eq!(html, "<div><p>ctx-value</p></div>");
}

#[rstest]
#[tokio::test]
async fn from_context_renders_declaratively() {
	let context = Context::<String>::new();
	let tree = from_context(context, |value| p().child(value.as_str()).into());

	let html = Route::new(tree)
		.provide(&context, "simple-value".to_string())
		.render_to_string()
		.await
		.unwrap();
	assert_eq!(html, "<p>simple-value</p>");
}

/// A provider coroutine may itself request further contexts; the chain
/// resolves innermost-first before the original requester resumes.
#[rstest]
#[tokio::test]
async fn provider_coroutines_chain() {
	let outer = Context::<String>::new();
	let nested = Context::<String>::new();

	let html = Route::new(paragraph_consumer(outer))
		.provide_with(&outer, move |scope| async move {
			let suffix = scope.resolve(&nested).await?;
			Ok(format!("sync-value-{suffix}"))
		})
		.provide(&nested, "nested".to_string())
		.render_to_string()
		.await
		.unwrap();
	assert_eq!(html, "<p>sync-value-nested</p>");
}

/// Same chain, but the provider awaits asynchronous work between steps.
#[rstest]
#[tokio::test]
async fn async_providers_chain() {
	let outer = Context::<String>::new();
	let nested = Context::<String>::new();

	let html = Route::new(paragraph_consumer(outer))
		.provide_with(&outer, move |scope| async move {
			tokio::time::sleep(Duration::from_millis(1)).await;
			let suffix = scope.resolve(&nested).await?;
			Ok(format!("async-value-{suffix}"))
		})
		.provide(&nested, "nested".to_string())
		.render_to_string()
		.await
		.unwrap();
	assert_eq!(html, "<p>async-value-nested</p>");
}

/// Effects emitted by a provider land at the request point, before the
/// requester's own continuation.
#[rstest]
#[tokio::test]
async fn provider_effects_interleave_at_request_point() {
	let context = Context::<String>::new();

	let html = Route::new(div().child(from_context(context, |value| {
		Node::from(value.as_str())
	})))
	.provide_with(&context, |scope| async move {
		scope.text("[provider]").await;
		Ok("value".to_string())
	})
	.render_to_string()
	.await
	.unwrap();
	assert_eq!(html, "<div>[provider]value</div>");
}

/// Each request site triggers an independent resolution; factories are
/// not memoized across sites.
#[rstest]
#[tokio::test]
async fn factories_run_once_per_request_site() {
	let context = Context::<usize>::new();
	let calls = Arc::new(AtomicUsize::new(0));

	let consumer = ComponentNode::new(component_fn(move |_props, scope| async move {
		let first = scope.resolve(&context).await?;
		let second = scope.resolve(&context).await?;
		scope.text(format!("{first}-{second}")).await;
		Ok(Value::unit())
	}));

	let provider_calls = Arc::clone(&calls);
	let html = Route::new(consumer)
		.provide_with(&context, move |_scope| {
			let calls = Arc::clone(&provider_calls);
			async move { Ok(calls.fetch_add(1, Ordering::SeqCst) + 1) }
		})
		.render_to_string()
		.await
		.unwrap();

	assert_eq!(html, "1-2");
	assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[rstest]
#[tokio::test]
async fn missing_context_fails_the_render() {
	let context = Context::<String>::new();
	let result = Route::new(paragraph_consumer(context))
		.render_to_string()
		.await;
	assert!(matches!(result, Err(RenderError::MissingContext { .. })));
}

/// Bytes produced before the failing request are flushed; nothing
/// follows the terminal error.
#[rstest]
#[tokio::test]
async fn missing_context_keeps_flushed_prefix() {
	let context = Context::<String>::new();
	let tree = div().child("before").child(paragraph_consumer(context));

	let mut stream = Route::new(tree).render_to_stream();
	let mut flushed = String::new();
	let mut error = None;
	while let Some(chunk) = stream.next().await {
		match chunk {
			Ok(bytes) => flushed.push_str(std::str::from_utf8(&bytes).unwrap()),
			Err(e) => {
				error = Some(e);
				break;
			}
		}
	}

	assert_eq!(flushed, "<div>before");
	assert!(matches!(error, Some(RenderError::MissingContext { .. })));
	assert!(stream.next().await.is_none());
}

#[rstest]
#[tokio::test]
async fn non_coroutine_components_fail_the_render() {
	let bad: weft_html::ComponentFn = Arc::new(|_props| Box::new(42u32));
	let tree = div().child("A").child(ComponentNode::new(bad));

	let mut stream = Route::new(tree).render_to_stream();
	let mut flushed = String::new();
	let mut error = None;
	while let Some(chunk) = stream.next().await {
		match chunk {
			Ok(bytes) => flushed.push_str(std::str::from_utf8(&bytes).unwrap()),
			Err(e) => {
				error = Some(e);
				break;
			}
		}
	}

	assert_eq!(flushed, "<div>A");
	assert!(matches!(error, Some(RenderError::InvalidComponent)));
	assert!(stream.next().await.is_none());
}

#[rstest]
#[tokio::test]
async fn provider_failures_propagate() {
	let context = Context::<String>::new();
	let result = Route::new(paragraph_consumer(context))
		.provide_with(&context, |_scope| async move {
			Err(RenderError::Component(anyhow::anyhow!("backend down")))
		})
		.render_to_string()
		.await;
	assert!(matches!(result, Err(RenderError::Component(_))));
}
