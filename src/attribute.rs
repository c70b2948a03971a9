//! The attribute protocol and the per-element attribute accumulator.

use crate::{DuplicateAttributeError, Error};
use core::fmt::{self, Debug, Formatter};
use hashbrown::{hash_map::Entry, HashMap};
use std::borrow::Cow;
use tracing::{debug, trace};

/// Something that modifies an element's attributes when applied to it.
///
/// Attributes are applied in order while the element is constructed,
/// except for [`Attribute::Delayed`] ones, which are queued and applied anew on every render.
pub enum Attribute {
	/// Sets `key` to `value`. Conflicts with a different value already present for `key`.
	Single { key: Cow<'static, str>, value: String },
	/// Appends `values` to `key`, space-separated. Never conflicts.
	Multi { key: Cow<'static, str>, values: Vec<String> },
	/// A bare attribute without value, like `disabled`.
	Flag(Cow<'static, str>),
	/// Queued on construction, applied during each render.
	Delayed(Box<Attribute>),
	/// Evaluated whenever it's applied. Mostly useful inside [`Attribute::Delayed`].
	Computed(Box<dyn Fn() -> Attribute>),
	/// Applies each contained attribute in order. An empty batch does nothing.
	Batch(Vec<Attribute>),
}

impl Attribute {
	#[must_use]
	pub fn single(key: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
		Self::Single {
			key: key.into(),
			value: value.into(),
		}
	}

	#[must_use]
	pub fn multi<V: Into<String>>(key: impl Into<Cow<'static, str>>, values: impl IntoIterator<Item = V>) -> Self {
		Self::Multi {
			key: key.into(),
			values: values.into_iter().map(Into::into).collect(),
		}
	}

	#[must_use]
	pub fn flag(key: impl Into<Cow<'static, str>>) -> Self {
		Self::Flag(key.into())
	}

	#[must_use]
	pub fn computed(compute: impl 'static + Fn() -> Attribute) -> Self {
		Self::Computed(Box::new(compute))
	}

	#[must_use]
	pub fn batch(attributes: impl IntoIterator<Item = Attribute>) -> Self {
		Self::Batch(attributes.into_iter().collect())
	}

	/// The no-op attribute.
	#[must_use]
	pub fn none() -> Self {
		Self::Batch(Vec::new())
	}

	/// The key this attribute writes, if that's known without evaluating anything.
	#[must_use]
	pub fn key(&self) -> Option<&str> {
		match self {
			Attribute::Single { key, .. } | Attribute::Multi { key, .. } | Attribute::Flag(key) => Some(&**key),
			Attribute::Delayed(inner) => inner.key(),
			Attribute::Computed(_) | Attribute::Batch(_) => None,
		}
	}

	/// Applies this attribute during construction.
	///
	/// # Errors
	///
	/// Iff a [`Attribute::Single`] conflicts with a different value already present.
	pub fn apply(self, attributes: &mut Attributes) -> Result<(), DuplicateAttributeError> {
		match self {
			Attribute::Single { key, value } => attributes.fixed.insert_single(key, value),
			Attribute::Multi { key, values } => {
				attributes.fixed.extend_multi(key, values.iter().map(String::as_str));
				Ok(())
			}
			Attribute::Flag(key) => {
				attributes.fixed.flags.push(key);
				Ok(())
			}
			Attribute::Delayed(inner) => {
				attributes.delayed.push(*inner);
				Ok(())
			}
			Attribute::Computed(compute) => compute().apply(attributes),
			Attribute::Batch(batch) => batch.into_iter().try_for_each(|attribute| attribute.apply(attributes)),
		}
	}

	/// Applies this attribute at render time, onto an overlay of an element's fixed attributes.
	///
	/// There is no delayed queue at this point, so another [`Attribute::Delayed`] is an error.
	pub(crate) fn replay(&self, overlay: &mut AttributeSet) -> Result<(), Error> {
		match self {
			Attribute::Single { key, value } => overlay.insert_single(key.clone(), value.clone())?,
			Attribute::Multi { key, values } => overlay.extend_multi(key.clone(), values.iter().map(String::as_str)),
			Attribute::Flag(key) => overlay.flags.push(key.clone()),
			Attribute::Delayed(inner) => {
				return Err(Error::NestedDelayedAttribute {
					key: inner.key().map(ToOwned::to_owned),
				})
			}
			Attribute::Computed(compute) => compute().replay(overlay)?,
			Attribute::Batch(batch) => {
				for attribute in batch {
					attribute.replay(overlay)?;
				}
			}
		}
		Ok(())
	}
}

impl Debug for Attribute {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Self::Single { key, value } => f.debug_struct("Single").field("key", key).field("value", value).finish(),
			Self::Multi { key, values } => f.debug_struct("Multi").field("key", key).field("values", values).finish(),
			Self::Flag(key) => f.debug_tuple("Flag").field(key).finish(),
			Self::Delayed(inner) => f.debug_tuple("Delayed").field(inner).finish(),
			Self::Computed(_) => f.debug_tuple("Computed").field(&"..").finish(),
			Self::Batch(batch) => f.debug_tuple("Batch").field(batch).finish(),
		}
	}
}

/// Key-value attributes and flags of one element.
///
/// Keys are unique, flags are not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
	values: HashMap<Cow<'static, str>, String>,
	flags: Vec<Cow<'static, str>>,
}

impl AttributeSet {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&str> {
		self.values.get(key).map(String::as_str)
	}

	pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
		self.values.iter().map(|(key, value)| (&**key, value.as_str()))
	}

	#[must_use]
	pub fn flags(&self) -> &[Cow<'static, str>] {
		&self.flags
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.values.is_empty() && self.flags.is_empty()
	}

	fn insert_single(&mut self, key: Cow<'static, str>, value: String) -> Result<(), DuplicateAttributeError> {
		match self.values.entry(key) {
			Entry::Occupied(occupied) if occupied.get() == &value => Ok(()),
			Entry::Occupied(occupied) => {
				if cfg!(feature = "dangerous-logging") {
					debug!(key = %occupied.key(), existing = %occupied.get(), new = %value, "Conflicting attribute value.");
				} else {
					debug!(key = %occupied.key(), "Conflicting attribute value.");
				}
				Err(DuplicateAttributeError {
					key: occupied.key().to_string(),
					existing: occupied.get().clone(),
					new: value,
				})
			}
			Entry::Vacant(vacant) => {
				vacant.insert(value);
				Ok(())
			}
		}
	}

	fn extend_multi<'a>(&mut self, key: Cow<'static, str>, values: impl Iterator<Item = &'a str>) {
		match self.values.entry(key) {
			Entry::Occupied(occupied) => {
				let existing = occupied.into_mut();
				for value in values {
					existing.push(' ');
					existing.push_str(value);
				}
			}
			Entry::Vacant(vacant) => {
				vacant.insert(values.collect::<Vec<_>>().join(" "));
			}
		}
	}
}

/// The attribute accumulator of one element: fixed state plus queued delayed attributes.
#[derive(Debug, Default)]
pub struct Attributes {
	fixed: AttributeSet,
	delayed: Vec<Attribute>,
}

impl Attributes {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Applies `attributes` in order to a fresh accumulator.
	///
	/// # Errors
	///
	/// Iff any two single-value attributes conflict.
	pub fn from_iter_checked(attributes: impl IntoIterator<Item = Attribute>) -> Result<Self, DuplicateAttributeError> {
		let mut this = Self::new();
		for attribute in attributes {
			this.apply(attribute)?;
		}
		trace!(values = this.fixed.values.len(), flags = this.fixed.flags.len(), delayed = this.delayed.len(), "Accumulated attributes.");
		Ok(this)
	}

	/// # Errors
	///
	/// Iff `attribute` conflicts with a different value already present.
	pub fn apply(&mut self, attribute: Attribute) -> Result<(), DuplicateAttributeError> {
		attribute.apply(self)
	}

	/// Attributes applied during construction.
	#[must_use]
	pub fn fixed(&self) -> &AttributeSet {
		&self.fixed
	}

	#[must_use]
	pub fn delayed(&self) -> &[Attribute] {
		&self.delayed
	}

	/// The attribute set as it should be rendered right now,
	/// i.e. the fixed attributes with all delayed ones applied on top.
	///
	/// Borrows the fixed set unless there's anything delayed to apply.
	///
	/// # Errors
	///
	/// Iff a delayed attribute conflicts with the fixed state or tries to defer further.
	pub fn materialize(&self) -> Result<Cow<'_, AttributeSet>, Error> {
		if self.delayed.is_empty() {
			return Ok(Cow::Borrowed(&self.fixed));
		}

		trace!(count = self.delayed.len(), "Applying delayed attributes.");
		let mut overlay = self.fixed.clone();
		for attribute in &self.delayed {
			attribute.replay(&mut overlay)?;
		}
		Ok(Cow::Owned(overlay))
	}
}
