//! In-process review store.
//!
//! Stands in for the review database so the demo runs self-contained;
//! the lookups stay async the way a real backend's would.

use std::sync::Arc;

use anyhow::bail;
use chrono::{Duration, Utc};

use super::types::{Artist, Feed, Publication, Release, ReleaseKind, Review};

#[derive(Clone)]
pub struct ReviewRepository {
	reviews: Arc<Vec<Review>>,
}

impl ReviewRepository {
	/// A repository seeded with a small set of releases and reviews.
	pub fn with_sample_data() -> Self {
		let now = Utc::now();

		let harvest = Release {
			mbid: "2f0d7e29-1752-41d5-9bfb-7e5a6bba86e5".to_string(),
			title: "Harvest of Static".to_string(),
			kind: ReleaseKind::Album,
			artwork_url: Some("https://images.example.com/harvest-of-static.jpg".to_string()),
			artists: vec![Artist {
				mbid: "9b5ba0d0-2c1e-4a21-8e4c-2e1a5c80a1f2".to_string(),
				name: "Glass Meridian".to_string(),
			}],
		};

		let lowlight = Release {
			mbid: "c83f4a02-6be4-4ce0-8f0a-96b1dd4277c1".to_string(),
			title: "Lowlight".to_string(),
			kind: ReleaseKind::Ep,
			artwork_url: None,
			artists: vec![
				Artist {
					mbid: "4de2a8a1-75e3-4b37-b2f6-7a88f0e0d9ab".to_string(),
					name: "Mara Voss".to_string(),
				},
				Artist {
					mbid: "71c5b9ad-0f11-4f0b-b3fd-66e9e3b1d6c4".to_string(),
					name: "The Quiet Division".to_string(),
				},
			],
		};

		let chorus = Publication {
			name: "Chorus Weekly".to_string(),
			url: "https://chorusweekly.example.com".to_string(),
			feed_url: "https://chorusweekly.example.com/feed.xml".to_string(),
		};

		let needle = Publication {
			name: "Needle Drop Review".to_string(),
			url: "https://needledrop.example.com".to_string(),
			feed_url: "https://needledrop.example.com/rss".to_string(),
		};

		let reviews = vec![
			Review {
				url: "https://chorusweekly.example.com/reviews/harvest-of-static".to_string(),
				publication: chorus.clone(),
				release: harvest.clone(),
				snippet: Some(
					"A dense, patient record that rewards the third listen more than the first."
						.to_string(),
				),
				published_at: now - Duration::hours(6),
			},
			Review {
				url: "https://needledrop.example.com/2024/harvest-of-static".to_string(),
				publication: needle.clone(),
				release: harvest,
				snippet: None,
				published_at: now - Duration::days(1),
			},
			Review {
				url: "https://chorusweekly.example.com/reviews/lowlight".to_string(),
				publication: chorus,
				release: lowlight,
				snippet: Some("Two voices circling the same ember.".to_string()),
				published_at: now - Duration::days(3),
			},
		];

		Self {
			reviews: Arc::new(reviews),
		}
	}

	/// The most recent reviews, newest first.
	pub async fn recent_reviews(&self, limit: usize) -> anyhow::Result<Feed> {
		let mut reviews: Vec<Review> = self.reviews.as_ref().clone();
		reviews.sort_by(|a, b| b.published_at.cmp(&a.published_at));
		reviews.truncate(limit);
		Ok(Feed { reviews })
	}

	/// Looks up one release by its MusicBrainz id.
	pub async fn release(&self, mbid: &str) -> anyhow::Result<Release> {
		for review in self.reviews.iter() {
			if review.release.mbid == mbid {
				return Ok(review.release.clone());
			}
		}
		bail!("release {mbid} not found");
	}

	/// Every review written about one release, newest first.
	pub async fn reviews_for_release(&self, mbid: &str) -> anyhow::Result<Vec<Review>> {
		let mut reviews: Vec<Review> = self
			.reviews
			.iter()
			.filter(|review| review.release.mbid == mbid)
			.cloned()
			.collect();
		reviews.sort_by(|a, b| b.published_at.cmp(&a.published_at));
		Ok(reviews)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn recent_reviews_are_newest_first() {
		let repository = ReviewRepository::with_sample_data();
		let feed = repository.recent_reviews(50).await.unwrap();
		assert!(feed.reviews.len() >= 2);
		for pair in feed.reviews.windows(2) {
			assert!(pair[0].published_at >= pair[1].published_at);
		}
	}

	#[tokio::test]
	async fn unknown_release_is_an_error() {
		let repository = ReviewRepository::with_sample_data();
		assert!(repository.release("missing").await.is_err());
	}

	#[tokio::test]
	async fn release_reviews_match_the_release() {
		let repository = ReviewRepository::with_sample_data();
		let feed = repository.recent_reviews(1).await.unwrap();
		let mbid = feed.reviews[0].release.mbid.clone();

		let reviews = repository.reviews_for_release(&mbid).await.unwrap();
		assert!(!reviews.is_empty());
		assert!(reviews.iter().all(|review| review.release.mbid == mbid));
	}
}
