//! Document shell shared by every page.

use weft::tags::{body, head, html, meta, title};
use weft::{ComponentNode, Node, ScopeExt, Value, component_fn};

/// Wraps page content in the full HTML document: `<html>`, `<head>` with
/// charset/viewport/title, and `<body>`.
pub fn page_shell(title_text: impl Into<String>, content: impl Into<Node>) -> Node {
	let shell = component_fn(|mut props, scope| {
		let title_text = props.attr("title").unwrap_or("Review Feed").to_string();
		let children = props.take_children();
		async move {
			let document = html()
				.attr("lang", "en-US")
				.child(
					head()
						.child(meta().attr("charset", "utf-8"))
						.child(
							meta()
								.attr("name", "viewport")
								.attr("content", "width=device-width"),
						)
						.child(title().child(title_text)),
				)
				.child(body().children(children));
			scope.render(document.into()).await;
			Ok(Value::unit())
		}
	});

	ComponentNode::new(shell)
		.attr("title", title_text)
		.child(content)
		.into()
}
