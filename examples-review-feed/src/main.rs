//! HTTP server streaming Weft-rendered pages.
//!
//! Routes:
//! - `GET /`: the recent review feed
//! - `GET /release/{mbid}`: one release with its reviews

mod app;
mod shared;

use std::convert::Infallible;
use std::net::SocketAddr;

use bytes::Bytes;
use futures::StreamExt;
use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Full, StreamBody};
use hyper::body::Frame;
use hyper::header::{CONTENT_TYPE, HeaderValue};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use weft::{RenderStream, Route};

use crate::app::{home_page, release_page};
use crate::shared::contexts::{FEED, RELEASE, REPOSITORY, REVIEWS, feed_handler, reviews_handler};
use crate::shared::repository::ReviewRepository;

type BoxError = Box<dyn std::error::Error + Send + Sync>;
type Body = BoxBody<Bytes, BoxError>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.init();

	let port = std::env::var("PORT")
		.ok()
		.and_then(|port| port.parse().ok())
		.unwrap_or(8000u16);
	let addr = SocketAddr::from(([127, 0, 0, 1], port));

	let repository = ReviewRepository::with_sample_data();

	let listener = TcpListener::bind(addr).await?;
	info!(%addr, "review feed listening");

	loop {
		let (stream, remote) = listener.accept().await?;
		let io = TokioIo::new(stream);
		let repository = repository.clone();

		tokio::spawn(async move {
			let service = service_fn(move |request| {
				let repository = repository.clone();
				async move { handle(request, repository).await }
			});
			if let Err(error) = http1::Builder::new().serve_connection(io, service).await {
				warn!(%error, %remote, "connection error");
			}
		});
	}
}

async fn handle(
	request: Request<hyper::body::Incoming>,
	repository: ReviewRepository,
) -> Result<Response<Body>, Infallible> {
	let response = match route(&request, repository) {
		Some(stream) => page_response(stream),
		None => not_found(),
	};
	Ok(response)
}

/// Dispatches a request to its page route, if any.
fn route(request: &Request<hyper::body::Incoming>, repository: ReviewRepository) -> Option<RenderStream> {
	if request.method() != Method::GET {
		return None;
	}
	let path = request.uri().path();

	if path == "/" {
		let stream = Route::new(home_page())
			.provide(&REPOSITORY, repository)
			.provide_with(&FEED, feed_handler)
			.render_to_stream();
		return Some(stream);
	}

	if let Some(mbid) = path.strip_prefix("/release/") {
		let mbid = mbid.to_string();
		let stream = Route::new(release_page())
			.provide(&REPOSITORY, repository)
			.provide_with(&RELEASE, move |scope| {
				let mbid = mbid.clone();
				async move {
					let repository = scope.resolve(&REPOSITORY).await?;
					let release = repository.release(&mbid).await?;
					Ok(release)
				}
			})
			.provide_with(&REVIEWS, reviews_handler)
			.render_to_stream();
		return Some(stream);
	}

	None
}

/// Wraps a render stream as a chunked HTML response. A render failure
/// mid-stream surfaces as a body error after whatever bytes were already
/// flushed; hyper then terminates the connection.
fn page_response(stream: RenderStream) -> Response<Body> {
	let frames = stream.map(|chunk| {
		chunk
			.map(Frame::data)
			.map_err(|error| Box::new(error) as BoxError)
	});
	let mut response = Response::new(BodyExt::boxed(StreamBody::new(frames)));
	response.headers_mut().insert(
		CONTENT_TYPE,
		HeaderValue::from_static("text/html; charset=utf-8"),
	);
	response
}

fn not_found() -> Response<Body> {
	let body = Full::new(Bytes::from_static(b"Not Found"))
		.map_err(|never| match never {})
		.boxed();
	let mut response = Response::new(body);
	*response.status_mut() = StatusCode::NOT_FOUND;
	response
}
