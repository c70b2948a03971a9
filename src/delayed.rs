//! Nodes and attributes that are evaluated at render time instead of during construction.
//!
//! Neither caches anything: Rendering the same tree twice evaluates the stored closures twice,
//! so output can reflect state that changed in between.

use crate::{Attribute, DuplicateAttributeError, Node};
use core::fmt::{self, Debug, Formatter};

/// A node that's created by a closure on each render.
pub struct Delayed(Box<dyn Fn() -> Result<Node, DuplicateAttributeError>>);

impl Delayed {
	pub fn new(creator: impl 'static + Fn() -> Result<Node, DuplicateAttributeError>) -> Self {
		Self(Box::new(creator))
	}

	/// Runs the creator once.
	///
	/// # Errors
	///
	/// Iff the creator fails to build its node.
	pub fn create(&self) -> Result<Node, DuplicateAttributeError> {
		(self.0)()
	}
}

impl Debug for Delayed {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Delayed").field(&"..").finish()
	}
}

/// A node that's built by `creator` whenever it's rendered.
///
/// ```
/// use markup_dom::{delayed, render_to_string, tags::{div, p}, attrs::class};
/// use std::{cell::RefCell, rc::Rc};
///
/// let current = Rc::new(RefCell::new("testA".to_string()));
/// let document = div([])?.with([delayed({
/// 	let current = Rc::clone(&current);
/// 	move || Ok(p([class([current.borrow().as_str()])])?.empty())
/// })]);
///
/// assert_eq!(render_to_string(&document)?, r#"<div><p class="testA"></p></div>"#);
/// *current.borrow_mut() = "testB".to_string();
/// assert_eq!(render_to_string(&document)?, r#"<div><p class="testB"></p></div>"#);
/// # Ok::<(), markup_dom::Error>(())
/// ```
pub fn delayed(creator: impl 'static + Fn() -> Result<Node, DuplicateAttributeError>) -> Node {
	Node::Delayed(Delayed::new(creator))
}

/// Defers `attribute` so that it's applied during each render of the element it's given to.
///
/// The element's fixed attributes aren't modified by this. `attribute` itself must not be delayed again.
#[must_use]
pub fn delayed_attribute(attribute: Attribute) -> Attribute {
	Attribute::Delayed(Box::new(attribute))
}

/// Shorthand for `delayed_attribute(Attribute::computed(compute))`.
#[must_use]
pub fn delayed_with(compute: impl 'static + Fn() -> Attribute) -> Attribute {
	delayed_attribute(Attribute::computed(compute))
}
