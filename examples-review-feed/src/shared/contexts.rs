//! Context tokens shared between pages and providers.

use once_cell::sync::Lazy;
use weft::{Context, RenderResult, Scope};

use super::repository::ReviewRepository;
use super::types::{Feed, Release, Review};

/// The backing store, provided as a plain value per request.
pub static REPOSITORY: Lazy<Context<ReviewRepository>> = Lazy::new(Context::new);

/// The home page's review feed.
pub static FEED: Lazy<Context<Feed>> = Lazy::new(Context::new);

/// The release a detail page is about.
pub static RELEASE: Lazy<Context<Release>> = Lazy::new(Context::new);

/// Reviews of the current release, derived from [`RELEASE`].
pub static REVIEWS: Lazy<Context<Vec<Review>>> = Lazy::new(Context::new);

/// Provider for [`FEED`]: loads the recent feed from the repository.
pub async fn feed_handler(scope: Scope) -> RenderResult<Feed> {
	let repository = scope.resolve(&REPOSITORY).await?;
	let feed = repository.recent_reviews(50).await?;
	Ok(feed)
}

/// Provider for [`REVIEWS`]: resolves the page's release, then loads its
/// reviews.
pub async fn reviews_handler(scope: Scope) -> RenderResult<Vec<Review>> {
	let release = scope.resolve(&RELEASE).await?;
	let repository = scope.resolve(&REPOSITORY).await?;
	let reviews = repository.reviews_for_release(&release.mbid).await?;
	Ok(reviews)
}
