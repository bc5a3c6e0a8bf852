//! Shared style fragments.
//!
//! Fragments are created once and held in statics so every page that
//! yields them shares one identity and the driver emits each at most
//! once per document.

use once_cell::sync::Lazy;
use weft::Style;

pub static RESET_CSS: Lazy<Style> = Lazy::new(|| {
	Style::new(
		r#"
  *,
  *::before,
  *::after {
    box-sizing: border-box;
  }

  *:not(dialog) {
    margin: 0;
    padding: 0;
  }

  body {
    line-height: 1.5;
    -webkit-font-smoothing: antialiased;
  }

  img,
  picture,
  video,
  canvas,
  svg {
    display: block;
    max-width: 100%;
  }

  p,
  h1,
  h2,
  h3,
  h4 {
    overflow-wrap: break-word;
  }
"#,
	)
});

pub static THEME_CSS: Lazy<Style> = Lazy::new(|| {
	Style::new(
		r#"
  body {
    font-family:
      ui-sans-serif, system-ui, sans-serif, "Apple Color Emoji",
      "Segoe UI Emoji", "Segoe UI Symbol", "Noto Color Emoji";
    background-color: #f2f4e6;
    color: rgba(0, 0, 0, 0.8);
    --highlight: #7d9004;
  }
"#,
	)
});

pub static FEED_CSS: Lazy<Style> = Lazy::new(|| {
	Style::new(
		r#"
  .FeedContainer {
    width: 100%;
    max-width: max-content;
    margin: 0;
    border-right: 1px solid rgba(0, 0, 0, 0.1);
  }

  .Feed {
    list-style: none;
  }
"#,
	)
});

pub static REVIEW_ITEM_CSS: Lazy<Style> = Lazy::new(|| {
	Style::new(
		r#"
  .ReviewItem {
    display: flex;
    gap: 12px;
    padding: 16px;
  }

  .ReviewItem:not(:last-child) {
    border-bottom: 1px solid rgba(0, 0, 0, 0.1);
  }

  .ReviewItemIcon {
    border-radius: 4px;
  }

  .ReviewItemHeading {
    display: flex;
    align-items: baseline;
    gap: 8px;
    margin-bottom: 4px;
  }

  .ReviewItemMeta {
    color: rgba(0, 0, 0, 0.5);
  }

  .ReviewItemSnippet {
    max-width: 50ch;
    margin: 0 0 12px 0;
  }

  .ReviewItemRelease {
    display: flex;
    justify-content: space-between;
    margin-top: 12px;
    padding: 12px;
    background: rgba(0, 0, 0, 0.03);
    border-radius: 12px;
    text-decoration: none;
    color: inherit;
  }

  .ReviewItemArtwork {
    border-radius: 8px;
  }
"#,
	)
});

pub static RELEASE_CSS: Lazy<Style> = Lazy::new(|| {
	Style::new(
		r#"
  .ReleaseHeader {
    display: flex;
    gap: 16px;
    padding: 24px 16px;
    align-items: center;
  }

  .ReleaseHeader h1 {
    margin-bottom: 4px;
  }

  .ReleaseMeta {
    color: rgba(0, 0, 0, 0.5);
  }

  .ReleaseReviews {
    list-style: none;
  }
"#,
	)
});
