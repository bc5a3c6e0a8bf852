//! Relative timestamp formatting for review metadata.

use chrono::{DateTime, Utc};

/// Renders `published_at` relative to `now`, e.g. `"3 days ago"`.
pub fn format_relative_time(published_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
	let elapsed = now.signed_duration_since(published_at);

	let minutes = elapsed.num_minutes();
	if minutes < 1 {
		return "just now".to_string();
	}
	if minutes < 60 {
		return plural(minutes, "minute");
	}

	let hours = elapsed.num_hours();
	if hours < 24 {
		return plural(hours, "hour");
	}

	let days = elapsed.num_days();
	if days < 7 {
		return plural(days, "day");
	}

	plural(days / 7, "week")
}

fn plural(count: i64, unit: &str) -> String {
	if count == 1 {
		format!("1 {unit} ago")
	} else {
		format!("{count} {unit}s ago")
	}
}
