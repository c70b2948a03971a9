use std::{io, string::FromUtf8Error};
use thiserror::Error;

/// A single-value attribute was applied twice to the same element with different values.
///
/// Returned synchronously by whichever constructor applied the conflicting [`Attribute`](`crate::Attribute`).
/// Re-applying the *same* value is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("attribute {key:?} already exists with value {existing:?}, refusing to overwrite it with {new:?}")]
pub struct DuplicateAttributeError {
	pub key: String,
	pub existing: String,
	pub new: String,
}

/// Everything that can go wrong while rendering.
#[derive(Debug, Error)]
pub enum Error {
	/// The sink rejected a write. Anything written before that remains in the sink.
	#[error("failed to write rendered markup")]
	Io(#[from] io::Error),

	/// A conflict that only surfaced at render time, while replaying delayed attributes
	/// or while a delayed element constructed its node.
	#[error(transparent)]
	DuplicateAttribute(#[from] DuplicateAttributeError),

	/// A delayed attribute tried to defer (again) while delayed attributes were being applied.
	///
	/// Delayed attributes are replayed without access to the delayed queue,
	/// so this would otherwise drop the attribute silently.
	#[error("delayed attribute {key:?} can't be deferred again while delayed attributes are being applied")]
	NestedDelayedAttribute { key: Option<String> },

	#[error("rendered markup is not valid UTF-8")]
	Utf8(#[from] FromUtf8Error),
}
