//! The home page: the recent review feed.

use weft::tags::{main, ol};
use weft::{Node, from_context};

use super::review_item::review_item;
use super::shell::page_shell;
use crate::shared::contexts::FEED;
use crate::shared::styles::{FEED_CSS, RESET_CSS, THEME_CSS};
use crate::shared::types::Feed;

pub fn home_page() -> Node {
	page_shell(
		"Music Review Feed",
		from_context(*FEED, |feed| feed_section(&feed)),
	)
}

fn feed_section(feed: &Feed) -> Node {
	Node::from(vec![
		Node::from(&*RESET_CSS),
		Node::from(&*THEME_CSS),
		Node::from(&*FEED_CSS),
		main()
			.attr("class", "FeedContainer")
			.child(
				ol().attr("class", "Feed")
					.children(feed.reviews.iter().map(|review| review_item(review, true))),
			)
			.into(),
	])
}
