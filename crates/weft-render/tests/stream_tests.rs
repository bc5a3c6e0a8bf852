//! Behavior of the byte stream itself: chunking, backpressure, teardown.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use futures::StreamExt;
use rstest::*;
use weft_core::Value;
use weft_html::tags::div;
use weft_html::{ComponentNode, component_fn};
use weft_render::Route;

#[rstest]
#[tokio::test]
async fn each_effect_is_one_chunk() {
	let mut stream = Route::new(div().child("Hi")).render_to_stream();
	let mut chunks = Vec::new();
	while let Some(chunk) = stream.next().await {
		chunks.push(String::from_utf8(chunk.unwrap().to_vec()).unwrap());
	}
	assert_eq!(chunks, vec!["<div>", "Hi", "</div>"]);
}

#[rstest]
#[tokio::test]
async fn output_is_utf8() {
	let html = Route::new(div().child("héllo — ☃"))
		.render_to_string()
		.await
		.unwrap();
	assert_eq!(html, "<div>héllo — ☃</div>");
}

/// Dropping the stream stops the driver: once the channel is gone, the
/// producing component stops making progress instead of running to the
/// end of its loop.
#[rstest]
#[tokio::test]
async fn dropping_the_stream_stops_production() {
	let produced = Arc::new(AtomicUsize::new(0));

	let counter = Arc::clone(&produced);
	let firehose = component_fn(move |_props, scope| {
		let produced = Arc::clone(&counter);
		async move {
			for i in 0..1000 {
				produced.store(i + 1, Ordering::SeqCst);
				scope.text(format!("chunk-{i}")).await;
			}
			Ok(Value::unit())
		}
	});

	let mut stream = Route::new(ComponentNode::new(firehose)).render_to_stream();
	let first = stream.next().await.unwrap().unwrap();
	assert_eq!(&first[..], b"chunk-0");
	drop(stream);

	// Give the driver time to observe the closed channel. It can be at
	// most one channel capacity ahead of what was consumed.
	tokio::time::sleep(Duration::from_millis(50)).await;
	assert!(produced.load(Ordering::SeqCst) < 100);
}
