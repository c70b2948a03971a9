use crate::{AttributeSet, Attributes, Delayed, Element, Error, Node, VoidElement};
use std::io::Write;
use tracing::{level_filters::STATIC_MAX_LEVEL, trace, trace_span, warn, Level};

/// Serialization into markup.
pub trait Render {
	/// Writes `self` into `sink`, depth-first.
	///
	/// # Errors
	///
	/// Aborts on the first error. Anything written before then stays in `sink`.
	fn render<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), Error>;
}

impl Render for Node {
	fn render<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), Error> {
		match self {
			Node::Text(text) => {
				if cfg!(feature = "dangerous-logging") {
					trace!(text = %text, "Rendering text.");
				}
				sink.write_all(text.as_bytes())?;
			}
			Node::Void(element) => element.render(sink)?,
			Node::Element(element) => element.render(sink)?,
			Node::Multi(nodes) => {
				for node in nodes {
					node.render(sink)?;
				}
			}
			Node::Delayed(delayed) => delayed.render(sink)?,
		}
		Ok(())
	}
}

impl Render for VoidElement {
	fn render<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), Error> {
		let span = trace_span!("Rendering void element", tag = self.name());
		let _enter = span.enter();

		write!(sink, "<{}", self.name())?;
		self.attributes().render(sink)?;
		sink.write_all(b"/>")?;
		Ok(())
	}
}

impl Render for Element {
	fn render<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), Error> {
		let span = trace_span!("Rendering element", tag = self.name(), "content.len()" = self.content().len());
		let _enter = span.enter();

		write!(sink, "<{}", self.name())?;
		self.attributes().render(sink)?;
		sink.write_all(b">")?;
		for node in self.content() {
			node.render(sink)?;
		}
		write!(sink, "</{}>", self.name())?;
		Ok(())
	}
}

impl Render for Delayed {
	fn render<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), Error> {
		let span = trace_span!("Rendering delayed node");
		let _enter = span.enter();
		self.create()?.render(sink)
	}
}

/// Renders the attribute part of an opening tag, including the leading space if there are any.
///
/// Delayed attributes are applied to a copy first. Tokens are sorted by their full text,
/// so the output doesn't depend on application order.
impl Render for Attributes {
	fn render<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), Error> {
		let tokens = self.materialize()?.tokens();
		if tokens.is_empty() {
			return Ok(());
		}

		if STATIC_MAX_LEVEL >= Level::WARN && tokens.windows(2).any(|pair| pair[0] == pair[1]) {
			warn!("Repeated attribute flag on one element: {:?}", tokens.windows(2).find(|pair| pair[0] == pair[1]).map(|pair| &pair[0]));
		}

		write!(sink, " {}", tokens.join(" "))?;
		Ok(())
	}
}

impl AttributeSet {
	/// `key="value"` pairs and bare flags, sorted together.
	///
	/// Values are not escaped.
	#[must_use]
	pub fn tokens(&self) -> Vec<String> {
		let mut tokens: Vec<String> = self
			.values()
			.map(|(key, value)| format!(r#"{}="{}""#, key, value))
			.chain(self.flags().iter().map(|flag| flag.to_string()))
			.collect();
		tokens.sort_unstable();
		tokens
	}
}

/// Renders `node` into `sink`.
///
/// # Errors
///
/// See [`Render::render`].
pub fn render<W: Write + ?Sized>(node: &impl Render, sink: &mut W) -> Result<(), Error> {
	node.render(sink)
}

/// Renders `node` into a new [`String`].
///
/// # Errors
///
/// Iff a delayed part of `node` fails.
pub fn render_to_string(node: &impl Render) -> Result<String, Error> {
	let mut buffer = Vec::new();
	node.render(&mut buffer)?;
	Ok(String::from_utf8(buffer)?)
}
