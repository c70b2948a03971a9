//! Build HTML-like markup trees through plain function calls, then render them into any [`std::io::Write`].
//!
//! Construction happens in one pass and is checked as it goes: Applying two different values for
//! the same single-value attribute to one element returns a [`DuplicateAttributeError`] immediately.
//!
//! Rendering is deterministic. Attribute tokens are sorted, so the order in which attributes were
//! applied doesn't matter. [`delayed`] nodes and [`delayed_attribute`]s are evaluated anew on each
//! render, which lets one tree reflect state that changes between renders.
//!
//! ```
//! use markup_dom::{attrs::{class, id}, render_to_string, tags::{br, div, p}, text};
//!
//! let document = div([id("main"), class(["a"]), class(["b", "c"])])?.with([
//! 	p([])?.with([text("1 < 2")]),
//! 	br([])?,
//! ]);
//!
//! assert_eq!(
//! 	render_to_string(&document)?,
//! 	r#"<div class="a b c" id="main"><p>1 &lt; 2</p><br/></div>"#,
//! );
//! # Ok::<(), markup_dom::Error>(())
//! ```
//!
//! # Features
//!
//! - `chrono`: [`attrs::AttributeValue`] for `chrono::DateTime` and `attrs::date_time`.
//! - `dangerous-logging`: Log attribute values and text content, which may contain personal data.

#![doc(html_root_url = "https://docs.rs/markup-dom/0.0.1")]
#![warn(clippy::pedantic)]

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

mod attribute;
pub mod attrs;
mod delayed;
mod error;
mod escape;
mod node;
mod render;
pub mod tags;
pub mod util;

pub use attribute::{Attribute, AttributeSet, Attributes};
pub use delayed::{delayed, delayed_attribute, delayed_with, Delayed};
pub use error::{DuplicateAttributeError, Error};
pub use escape::escape_html;
pub use node::{group, raw, text, Element, ElementFactory, Node, VoidElement};
pub use render::{render, render_to_string, Render};
