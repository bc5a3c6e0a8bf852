//! Coroutine tasks and the scope handle their bodies run against.
//!
//! Rust's native async generators are not yet stable, so tasks use the
//! `genawaiter` crate: the body is an ordinary async closure that yields
//! [`Step`]s through its [`Scope`] and may await any other future between
//! steps. The driver resumes a task one step at a time and, when the step
//! was a request, places the response in the task's resume slot before the
//! next resumption.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use anyhow::anyhow;
use genawaiter::GeneratorState;
use genawaiter::sync::{Co, Gen};
use parking_lot::Mutex;

use crate::context::Context;
use crate::effect::{Effect, Step};
use crate::error::{RenderError, RenderResult};
use crate::style::Style;
use crate::value::Value;

/// Boxed future backing every task body.
pub type TaskFuture = Pin<Box<dyn Future<Output = RenderResult<Value>> + Send>>;

type TaskGen = Gen<Step, (), TaskFuture>;

/// Slot the driver fills before resuming a suspended task.
#[derive(Clone, Default)]
struct ResumeSlot(Arc<Mutex<Option<Value>>>);

impl ResumeSlot {
	fn put(&self, value: Value) {
		*self.0.lock() = Some(value);
	}

	fn take(&self) -> Option<Value> {
		self.0.lock().take()
	}
}

/// An active component, provider, or template coroutine.
///
/// A task is one frame on the driver's explicit stack: resuming it yields
/// [`Step`]s until it completes with a [`Value`]. Delegation to nested
/// coroutines goes through the driver as new frames, so nesting depth
/// never grows the native call stack.
pub struct Task {
	generator: TaskGen,
	slot: ResumeSlot,
}

/// What a single resumption produced.
pub enum TaskState {
	/// The task suspended on a step.
	Yielded(Step),
	/// The task completed with its return value.
	Complete(Value),
}

impl Task {
	/// Builds a task from an async body.
	///
	/// The body runs lazily: nothing executes until the task is driven.
	///
	/// ```
	/// use weft_core::{Effect, Task, Value};
	///
	/// let task = Task::new(|scope| async move {
	/// 	scope.effect(Effect::Text("hi".into())).await;
	/// 	Ok(Value::unit())
	/// });
	/// # let _ = task;
	/// ```
	pub fn new<F, Fut>(body: F) -> Self
	where
		F: FnOnce(Scope) -> Fut,
		Fut: Future<Output = RenderResult<Value>> + Send + 'static,
	{
		let slot = ResumeSlot::default();
		let body_slot = slot.clone();
		let generator = Gen::new(move |co| {
			Box::pin(body(Scope { co, slot: body_slot })) as TaskFuture
		});
		Self { generator, slot }
	}

	/// Advances the task by one step, awaiting if the step itself awaits.
	pub async fn step(&mut self) -> RenderResult<TaskState> {
		match self.generator.async_resume().await {
			GeneratorState::Yielded(step) => Ok(TaskState::Yielded(step)),
			GeneratorState::Complete(outcome) => outcome.map(TaskState::Complete),
		}
	}

	/// Supplies the value the next [`Task::step`] call resumes with.
	pub fn accept(&mut self, value: Value) {
		self.slot.put(value);
	}
}

/// Handle a task body uses to emit effects and to suspend on requests.
pub struct Scope {
	co: Co<Step>,
	slot: ResumeSlot,
}

impl Scope {
	/// Emits an output effect.
	pub async fn effect(&self, effect: Effect) {
		self.co.yield_(Step::Effect(effect)).await;
	}

	/// Emits a chunk of literal text. Empty chunks produce no effect.
	pub async fn text(&self, text: impl Into<String>) {
		let text = text.into();
		if !text.is_empty() {
			self.effect(Effect::Text(text)).await;
		}
	}

	/// Emits a style fragment.
	pub async fn style(&self, style: &Style) {
		self.effect(Effect::Style(style.clone())).await;
	}

	/// Suspends on a context token and resumes with the registered value.
	///
	/// Fails the render if the token has no registry entry; the failure
	/// surfaces at the driver and this call never returns in that case.
	pub async fn resolve<T: Send + Sync + 'static>(
		&self,
		context: &Context<T>,
	) -> RenderResult<Arc<T>> {
		self.co.yield_(Step::Context(context.id())).await;
		let value = self.slot.take().unwrap_or_else(Value::unit);
		value
			.downcast::<T>()
			.ok_or_else(|| RenderError::Component(anyhow!("context value had unexpected type")))
	}

	/// Splices a nested task in at this point, resuming with its return
	/// value once its whole effect sequence has been processed.
	pub async fn delegate(&self, task: Task) -> Value {
		self.co.yield_(Step::Delegate(task)).await;
		self.slot.take().unwrap_or_else(Value::unit)
	}
}

/// Conversion into a drivable task.
///
/// Route roots and delegation targets accept anything implementing this;
/// `weft-html` implements it for its template trees.
pub trait IntoTask {
	fn into_task(self) -> Task;
}

impl IntoTask for Task {
	fn into_task(self) -> Task {
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn steps_then_completes() {
		let mut task = Task::new(|scope| async move {
			scope.text("one").await;
			scope.text("").await;
			scope.text("two").await;
			Ok(Value::unit())
		});

		match task.step().await.unwrap() {
			TaskState::Yielded(Step::Effect(Effect::Text(text))) => assert_eq!(text, "one"),
			_ => panic!("expected first text step"),
		}
		// The empty chunk is dropped, so "two" is next.
		match task.step().await.unwrap() {
			TaskState::Yielded(Step::Effect(Effect::Text(text))) => assert_eq!(text, "two"),
			_ => panic!("expected second text step"),
		}
		match task.step().await.unwrap() {
			TaskState::Complete(value) => assert!(value.is_unit()),
			_ => panic!("expected completion"),
		}
	}

	#[tokio::test]
	async fn resumes_with_accepted_value() {
		let context = Context::<u32>::new();
		let mut task = Task::new(move |scope| async move {
			let value = scope.resolve(&context).await?;
			Ok(Value::of(*value + 1))
		});

		match task.step().await.unwrap() {
			TaskState::Yielded(Step::Context(id)) => assert_eq!(id, context.id()),
			_ => panic!("expected context request"),
		}
		task.accept(Value::of(41u32));
		match task.step().await.unwrap() {
			TaskState::Complete(value) => {
				assert_eq!(*value.downcast::<u32>().unwrap(), 42);
			}
			_ => panic!("expected completion"),
		}
	}

	#[tokio::test]
	async fn resolve_rejects_mismatched_value() {
		let context = Context::<u32>::new();
		let mut task = Task::new(move |scope| async move {
			let value = scope.resolve(&context).await?;
			Ok(Value::of(*value))
		});

		assert!(matches!(
			task.step().await.unwrap(),
			TaskState::Yielded(Step::Context(_))
		));
		task.accept(Value::of("not a number".to_string()));
		assert!(matches!(
			task.step().await,
			Err(RenderError::Component(_))
		));
	}

	#[tokio::test]
	async fn body_may_await_between_steps() {
		let mut task = Task::new(|scope| async move {
			tokio::task::yield_now().await;
			scope.text("after").await;
			Ok(Value::unit())
		});

		match task.step().await.unwrap() {
			TaskState::Yielded(Step::Effect(Effect::Text(text))) => assert_eq!(text, "after"),
			_ => panic!("expected text step"),
		}
	}

	#[tokio::test]
	async fn body_errors_surface_on_step() {
		let mut task: Task = Task::new(|_scope| async move {
			Err(RenderError::Component(anyhow!("boom")))
		});

		assert!(task.step().await.is_err());
	}
}
