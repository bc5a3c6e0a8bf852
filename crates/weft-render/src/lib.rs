//! The Weft stream driver.
//!
//! [`Route`] pairs a root coroutine with a context registry and drives it
//! to completion over an explicit frame stack, serializing effects to a
//! backpressure-aware byte stream in exactly the order they are produced.
//! Context requests suspend the requesting frame until the registered
//! provider (a plain value or a coroutine of its own) yields the value;
//! style fragments are deduplicated by identity at their first encounter.
//!
//! ```
//! use weft_html::tags::div;
//! use weft_render::Route;
//!
//! # tokio_test::block_on(async {
//! let html = Route::new(div().child("Hello"))
//! 	.render_to_string()
//! 	.await
//! 	.unwrap();
//! assert_eq!(html, "<div>Hello</div>");
//! # });
//! ```

mod driver;
mod markup;
mod registry;
mod route;
mod stream;

pub use registry::{ContextRegistry, Provider, ProviderFactory};
pub use route::Route;
pub use stream::RenderStream;
