//! Domain types for the review feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
	pub mbid: String,
	pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseKind {
	Single,
	Album,
	Ep,
	Broadcast,
	Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
	pub mbid: String,
	pub title: String,
	pub kind: ReleaseKind,
	pub artwork_url: Option<String>,
	pub artists: Vec<Artist>,
}

impl Release {
	/// Artist credit line, e.g. `"Artist A, Artist B"`.
	pub fn artist_names(&self) -> String {
		self.artists
			.iter()
			.map(|artist| artist.name.as_str())
			.collect::<Vec<_>>()
			.join(", ")
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
	pub name: String,
	pub url: String,
	pub feed_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
	pub url: String,
	pub publication: Publication,
	pub release: Release,
	pub snippet: Option<String>,
	pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feed {
	pub reviews: Vec<Review>,
}
