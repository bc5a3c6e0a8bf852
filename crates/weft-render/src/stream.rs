//! The rendered byte stream handed to consumers.

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures::Stream;
use tokio::sync::mpsc;

use weft_core::RenderError;

/// Backpressure-aware stream of rendered UTF-8 chunks.
///
/// Each serialized effect arrives as one chunk. The stream ends after the
/// final chunk on success, or after a single terminal [`RenderError`] on
/// failure; chunks flushed before a failure are not retracted. Dropping
/// the stream stops the driver at its next emission.
pub struct RenderStream {
	receiver: mpsc::Receiver<Result<Bytes, RenderError>>,
}

impl RenderStream {
	pub(crate) fn new(receiver: mpsc::Receiver<Result<Bytes, RenderError>>) -> Self {
		Self { receiver }
	}
}

impl Stream for RenderStream {
	type Item = Result<Bytes, RenderError>;

	fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
		self.receiver.poll_recv(cx)
	}
}
