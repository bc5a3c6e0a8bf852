//! One review entry, shared by the feed and the release page.

use chrono::Utc;
use weft::Node;
use weft::tags::{a, blockquote, div, h4, img, li, p, span};

use crate::shared::date::format_relative_time;
use crate::shared::styles::REVIEW_ITEM_CSS;
use crate::shared::types::{Release, Review};

/// Renders one review as a list item. The release link is optional so
/// the release page can show its reviews without linking to itself.
pub fn review_item(review: &Review, link_release: bool) -> Node {
	let favicon = format!(
		"https://www.google.com/s2/favicons?domain={}&sz=32",
		review.publication.url
	);

	let details = div()
		.child(
			div()
				.attr("class", "ReviewItemHeading")
				.child(h4().child(review.publication.name.as_str()))
				.child(
					span()
						.attr("class", "ReviewItemMeta")
						.child(format_relative_time(review.published_at, Utc::now())),
				),
		)
		.child(review.snippet.as_ref().map(|snippet| {
			blockquote()
				.attr("class", "ReviewItemSnippet")
				.child(snippet.as_str())
		}))
		.child(if link_release {
			release_link(&review.release)
		} else {
			Node::empty()
		});

	Node::from(vec![
		Node::from(&*REVIEW_ITEM_CSS),
		li().attr("class", "ReviewItem")
			.child(
				img()
					.attr("class", "ReviewItemIcon")
					.attr("height", "32")
					.attr("width", "32")
					.attr("src", favicon)
					.attr("alt", review.publication.name.as_str()),
			)
			.child(details)
			.into(),
	])
}

fn release_link(release: &Release) -> Node {
	a().attr("href", format!("/release/{}", release.mbid))
		.attr("class", "ReviewItemRelease")
		.child(
			div()
				.child(h4().child(release.title.as_str()))
				.child(p().child(release.artist_names())),
		)
		.child(release.artwork_url.as_ref().map(|url| {
			img()
				.attr("class", "ReviewItemArtwork")
				.attr("src", url.as_str())
				.attr("loading", "lazy")
				.attr("alt", release.title.as_str())
				.attr("width", "50")
				.attr("height", "50")
		}))
		.into()
}
