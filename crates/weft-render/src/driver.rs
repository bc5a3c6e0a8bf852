//! The trampoline: drives the coroutine stack to completion.

use std::collections::HashSet;

use bytes::Bytes;
use tokio::sync::mpsc;
use tracing::{debug, trace};
use weft_core::{Effect, RenderError, RenderResult, Step, Task, TaskState};

use crate::markup::write_effect;
use crate::registry::{ContextRegistry, Provider};

pub(crate) type ByteSender = mpsc::Sender<Result<Bytes, RenderError>>;

/// Why the drive loop stopped without an error.
pub(crate) enum DriveEnd {
	/// The root coroutine completed and every byte was delivered.
	Complete,
	/// The consumer dropped the stream; production stopped early.
	Disconnected,
}

/// One render's driver state: the frame stack, the registry serving its
/// context requests, the style dedup set, and the output channel.
pub(crate) struct Driver {
	registry: ContextRegistry,
	stack: Vec<Task>,
	emitted_styles: HashSet<u64>,
	output: ByteSender,
}

impl Driver {
	pub(crate) fn new(root: Task, registry: ContextRegistry, output: ByteSender) -> Self {
		Self {
			registry,
			stack: vec![root],
			emitted_styles: HashSet::new(),
			output,
		}
	}

	/// Runs the trampoline until the stack empties or the render fails.
	///
	/// Exactly one frame makes progress at a time; a frame that awaits
	/// asynchronous work suspends the whole loop, keeping effects in
	/// depth-first, left-to-right production order.
	pub(crate) async fn run(mut self) -> RenderResult<DriveEnd> {
		debug!("render started");
		loop {
			let state = match self.stack.last_mut() {
				None => break,
				Some(top) => top.step().await?,
			};
			match state {
				TaskState::Complete(value) => {
					self.stack.pop();
					trace!(depth = self.stack.len(), "frame complete");
					if let Some(parent) = self.stack.last_mut() {
						parent.accept(value);
					} else if let Some(text) = value.as_text() {
						// A text-like root return becomes a final text effect.
						if !text.is_empty() {
							let chunk = Bytes::copy_from_slice(text.as_bytes());
							if !self.emit(chunk).await {
								return Ok(DriveEnd::Disconnected);
							}
						}
					}
				}
				TaskState::Yielded(Step::Effect(effect)) => {
					if let Some(chunk) = self.serialize(&effect) {
						if !self.emit(chunk).await {
							return Ok(DriveEnd::Disconnected);
						}
					}
				}
				TaskState::Yielded(Step::Context(context)) => {
					match self.registry.get(&context) {
						None => return Err(RenderError::MissingContext { context }),
						Some(Provider::Value(value)) => {
							let value = value.clone();
							if let Some(top) = self.stack.last_mut() {
								top.accept(value);
							}
						}
						Some(Provider::Factory(factory)) => {
							let provider = factory();
							trace!(?context, depth = self.stack.len(), "provider frame pushed");
							self.stack.push(provider);
						}
					}
				}
				TaskState::Yielded(Step::Delegate(task)) => {
					trace!(depth = self.stack.len(), "delegate frame pushed");
					self.stack.push(task);
				}
			}
		}
		debug!("render complete");
		Ok(DriveEnd::Complete)
	}

	/// Serializes one effect, applying identity-based style dedup.
	fn serialize(&mut self, effect: &Effect) -> Option<Bytes> {
		if let Effect::Style(style) = effect {
			if !self.emitted_styles.insert(style.id()) {
				trace!(style = style.id(), "style already emitted");
				return None;
			}
		}
		let mut out = String::new();
		write_effect(effect, &mut out);
		if out.is_empty() {
			None
		} else {
			Some(Bytes::from(out))
		}
	}

	/// Sends one chunk; `false` means the consumer is gone.
	async fn emit(&mut self, chunk: Bytes) -> bool {
		self.output.send(Ok(chunk)).await.is_ok()
	}
}
