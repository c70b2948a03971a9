//! Small conditional and mapping helpers.

use crate::{group, Attribute, Node};

/// `attribute` if `condition` holds, otherwise an attribute that does nothing.
#[must_use]
pub fn if_attribute(condition: bool, attribute: Attribute) -> Attribute {
	if condition {
		attribute
	} else {
		Attribute::none()
	}
}

/// `node` if `condition` holds, otherwise an empty group.
#[must_use]
pub fn if_node(condition: bool, node: Node) -> Node {
	if condition {
		node
	} else {
		group(None)
	}
}

/// Creates one node per item, grouped without a wrapping tag.
///
/// ```
/// use markup_dom::{render_to_string, tags::p, text, util::map};
///
/// let list = map(["first", "second"], |item| p([]).map(|p| p.with([text(item)])))?;
/// assert_eq!(render_to_string(&list)?, "<p>first</p><p>second</p>");
/// # Ok::<(), markup_dom::Error>(())
/// ```
///
/// # Errors
///
/// Stops at and returns the first error from `create`.
pub fn map<T, E>(items: impl IntoIterator<Item = T>, create: impl FnMut(T) -> Result<Node, E>) -> Result<Node, E> {
	Ok(group(items.into_iter().map(create).collect::<Result<Vec<_>, _>>()?))
}
