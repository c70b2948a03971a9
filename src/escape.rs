use std::borrow::Cow;

/// Replaces the characters that are significant in HTML text and attribute values with character references.
///
/// `&`, `<`, `>`, `"` and `'` become `&amp;`, `&lt;`, `&gt;`, `&#34;` and `&#39;` respectively.
/// Borrows `text` if there is nothing to replace.
#[must_use]
pub fn escape_html(text: &str) -> Cow<'_, str> {
	let first = match text.find(|c| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
		Some(first) => first,
		None => return Cow::Borrowed(text),
	};

	let mut escaped = String::with_capacity(text.len() + 8);
	escaped.push_str(&text[..first]);
	for c in text[first..].chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&#34;"),
			'\'' => escaped.push_str("&#39;"),
			c => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}
