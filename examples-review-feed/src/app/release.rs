//! The release detail page.

use weft::tags::{div, h1, h3, img, main, ol, p, section};
use weft::{Node, from_context};

use super::review_item::review_item;
use super::shell::page_shell;
use crate::shared::contexts::{RELEASE, REVIEWS};
use crate::shared::styles::{RELEASE_CSS, RESET_CSS, THEME_CSS};
use crate::shared::types::{Release, ReleaseKind, Review};

pub fn release_page() -> Node {
	page_shell(
		"Release",
		from_context(*RELEASE, |release| release_section(&release)),
	)
}

fn release_section(release: &Release) -> Node {
	let artwork = release.artwork_url.as_ref().map(|url| {
		img()
			.attr("src", url.as_str())
			.attr("alt", release.title.as_str())
			.attr("width", "96")
			.attr("height", "96")
	});

	Node::from(vec![
		Node::from(&*RESET_CSS),
		Node::from(&*THEME_CSS),
		Node::from(&*RELEASE_CSS),
		main()
			.child(
				weft::tags::header()
					.attr("class", "ReleaseHeader")
					.child(artwork)
					.child(
						div().child(h1().child(release.title.as_str())).child(
							p().attr("class", "ReleaseMeta").child(format!(
								"{} · {}",
								release.artist_names(),
								kind_label(release.kind)
							)),
						),
					),
			)
			.child(
				section()
					.child(h3().child("Reviews"))
					.child(from_context(*REVIEWS, |reviews| reviews_list(&reviews))),
			)
			.into(),
	])
}

fn reviews_list(reviews: &[Review]) -> Node {
	if reviews.is_empty() {
		return p().child("No reviews yet.").into();
	}
	ol().attr("class", "ReleaseReviews")
		.children(reviews.iter().map(|review| review_item(review, false)))
		.into()
}

fn kind_label(kind: ReleaseKind) -> &'static str {
	match kind {
		ReleaseKind::Single => "Single",
		ReleaseKind::Album => "Album",
		ReleaseKind::Ep => "EP",
		ReleaseKind::Broadcast => "Broadcast",
		ReleaseKind::Other => "Release",
	}
}

#[cfg(test)]
mod tests {
	use rstest::*;
	use weft::{RenderError, Route};

	use super::*;
	use crate::shared::contexts::{REPOSITORY, reviews_handler};
	use crate::shared::repository::ReviewRepository;

	fn release_route(repository: ReviewRepository, mbid: &str) -> Route {
		let mbid = mbid.to_string();
		Route::new(release_page())
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
	}

	#[rstest]
	#[tokio::test]
	async fn renders_release_with_reviews() {
		let repository = ReviewRepository::with_sample_data();
		let feed = repository.recent_reviews(1).await.unwrap();
		let mbid = feed.reviews[0].release.mbid.clone();

		let html = release_route(repository, &mbid)
			.render_to_string()
			.await
			.unwrap();

		assert!(html.contains("Harvest of Static"));
		assert!(html.contains("Reviews"));
		assert!(html.contains("class=\"ReviewItem\""));
	}

	#[rstest]
	#[tokio::test]
	async fn unknown_release_fails_the_render() {
		let repository = ReviewRepository::with_sample_data();
		let result = release_route(repository, "does-not-exist")
			.render_to_string()
			.await;
		assert!(matches!(result, Err(RenderError::Component(_))));
	}
}
