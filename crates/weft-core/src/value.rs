//! Dynamically typed payloads passed between the driver and coroutines.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// The value a coroutine is resumed with, or completes with.
///
/// Context resolutions, delegation return values, and coroutine outcomes
/// all travel through this one shape. Cloning is cheap (shared payload).
#[derive(Clone)]
pub struct Value(Option<Arc<dyn Any + Send + Sync>>);

impl Value {
	/// The "no value" marker; what effect-only coroutines complete with.
	pub fn unit() -> Self {
		Self(None)
	}

	/// Wraps an owned value.
	pub fn of<T: Send + Sync + 'static>(value: T) -> Self {
		Self(Some(Arc::new(value)))
	}

	/// Wraps an already shared value without another allocation.
	pub fn from_shared(shared: Arc<dyn Any + Send + Sync>) -> Self {
		Self(Some(shared))
	}

	/// Whether this is the "no value" marker.
	pub fn is_unit(&self) -> bool {
		self.0.is_none()
	}

	/// Recovers the typed payload, sharing ownership.
	pub fn downcast<T: Send + Sync + 'static>(self) -> Option<Arc<T>> {
		self.0.and_then(|any| any.downcast::<T>().ok())
	}

	/// The payload as text, if it holds one of the text-like types.
	///
	/// A text-like value returned by the root coroutine becomes a final
	/// text effect.
	pub fn as_text(&self) -> Option<&str> {
		let any = self.0.as_deref()?;
		if let Some(text) = any.downcast_ref::<String>() {
			return Some(text);
		}
		if let Some(text) = any.downcast_ref::<&'static str>() {
			return Some(text);
		}
		None
	}
}

impl fmt::Debug for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.0 {
			None => f.write_str("Value(unit)"),
			Some(_) => f.write_str("Value(..)"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn downcast_recovers_payload() {
		let value = Value::of(41u32);
		assert_eq!(*value.downcast::<u32>().unwrap(), 41);
	}

	#[test]
	fn downcast_rejects_other_types() {
		let value = Value::of("text".to_string());
		assert!(value.downcast::<u32>().is_none());
	}

	#[test]
	fn unit_has_no_text() {
		assert!(Value::unit().is_unit());
		assert!(Value::unit().as_text().is_none());
	}

	#[test]
	fn strings_are_text_like() {
		assert_eq!(Value::of("owned".to_string()).as_text(), Some("owned"));
		assert_eq!(Value::of("static").as_text(), Some("static"));
		assert!(Value::of(7u8).as_text().is_none());
	}
}
