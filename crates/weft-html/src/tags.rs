//! Bare builder functions for common tags.

use crate::element::Element;

macro_rules! tag_fns {
	($($name:ident)*) => {$(
		#[doc = concat!("`<", stringify!($name), ">` element builder.")]
		pub fn $name() -> Element {
			Element::new(stringify!($name))
		}
	)*};
}

tag_fns! {
	html head body title meta link script
	main header footer nav section article aside
	div span p a img ol ul li
	h1 h2 h3 h4 h5 h6 blockquote time
}
