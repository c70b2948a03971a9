use crate::{escape_html, Attribute, Attributes, Delayed, DuplicateAttributeError};
use std::borrow::Cow;
use tracing::trace;

/// A markup tree, or part of one.
///
/// Children are owned, so each node appears at most once in any tree.
#[derive(Debug)]
pub enum Node {
	/// Literal text, written out verbatim. See [`text`] for the escaping constructor.
	Text(Cow<'static, str>),
	/// An element without content, like `<br/>`.
	Void(Box<VoidElement>),
	/// An element with (possibly empty) content.
	Element(Box<Element>),
	/// Any number of nodes without a wrapping tag.
	Multi(Vec<Node>),
	/// Constructed anew each time it's rendered.
	Delayed(Delayed),
}

/// An element that can't contain other nodes. Rendered self-closing.
#[derive(Debug)]
pub struct VoidElement {
	name: Cow<'static, str>,
	attributes: Attributes,
}

impl VoidElement {
	/// Builds a void element from a tag name and its attributes, which are applied in order.
	///
	/// # Errors
	///
	/// Iff two single-value `attributes` conflict.
	pub fn build(name: impl Into<Cow<'static, str>>, attributes: impl IntoIterator<Item = Attribute>) -> Result<Node, DuplicateAttributeError> {
		let name = name.into();
		debug_assert!(!name.is_empty(), "Empty tag name");
		let attributes = Attributes::from_iter_checked(attributes)?;
		trace!(tag = %name, "Built void element.");
		Ok(Node::Void(Box::new(Self { name, attributes })))
	}

	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	#[must_use]
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}
}

/// An element with content.
#[derive(Debug)]
pub struct Element {
	name: Cow<'static, str>,
	attributes: Attributes,
	content: Vec<Node>,
}

impl Element {
	/// First step of building an element: applies `attributes` in order and returns a factory that takes the content.
	///
	/// ```
	/// use markup_dom::{render_to_string, text, Attribute, Element};
	///
	/// let link = Element::build("a", [Attribute::single("href", "/")])?.with([text("Home")]);
	/// assert_eq!(render_to_string(&link)?, r#"<a href="/">Home</a>"#);
	/// # Ok::<(), markup_dom::Error>(())
	/// ```
	///
	/// # Errors
	///
	/// Iff two single-value `attributes` conflict.
	pub fn build(name: impl Into<Cow<'static, str>>, attributes: impl IntoIterator<Item = Attribute>) -> Result<ElementFactory, DuplicateAttributeError> {
		let name = name.into();
		debug_assert!(!name.is_empty(), "Empty tag name");
		Ok(ElementFactory {
			name,
			attributes: Attributes::from_iter_checked(attributes)?,
		})
	}

	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	#[must_use]
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	#[must_use]
	pub fn content(&self) -> &[Node] {
		&self.content
	}
}

/// An [`Element`] that's still missing its content.
#[derive(Debug)]
#[must_use = "An `ElementFactory` does nothing until it's given its content."]
pub struct ElementFactory {
	name: Cow<'static, str>,
	attributes: Attributes,
}

impl ElementFactory {
	pub fn with(self, content: impl IntoIterator<Item = Node>) -> Node {
		let Self { name, attributes } = self;
		let content: Vec<_> = content.into_iter().collect();
		trace!(tag = %name, children = content.len(), "Built element.");
		Node::Element(Box::new(Element { name, attributes, content }))
	}

	/// Same as `.with([])`.
	pub fn empty(self) -> Node {
		self.with(None)
	}
}

/// Wraps `nodes` without adding any markup of its own.
#[must_use]
pub fn group(nodes: impl IntoIterator<Item = Node>) -> Node {
	Node::Multi(nodes.into_iter().collect())
}

/// Text that's written out as-is. The caller is responsible for escaping it.
#[must_use]
pub fn raw(text: impl Into<Cow<'static, str>>) -> Node {
	Node::Text(text.into())
}

/// HTML-escaped text.
///
/// ```
/// use markup_dom::{render_to_string, text};
///
/// assert_eq!(render_to_string(&text("some <content>"))?, "some &lt;content&gt;");
/// # Ok::<(), markup_dom::Error>(())
/// ```
#[must_use]
pub fn text(text: &str) -> Node {
	Node::Text(Cow::Owned(escape_html(text).into_owned()))
}

impl From<Delayed> for Node {
	fn from(delayed: Delayed) -> Self {
		Node::Delayed(delayed)
	}
}

impl From<Vec<Node>> for Node {
	fn from(nodes: Vec<Node>) -> Self {
		Node::Multi(nodes)
	}
}
