//! One constructor per HTML5 tag.
//!
//! Tags that can have content return an [`ElementFactory`] that still needs its content,
//! void tags return a finished [`Node`].
//!
//! None of these check whether the given attributes make sense for the tag.

use crate::{raw, Attribute, DuplicateAttributeError, Element, ElementFactory, Node, VoidElement};

macro_rules! elements {
	($($(#[$attribute:meta])* $name:ident => $tag:literal),*$(,)?) => {$(
		$(#[$attribute])*
		///
		/// # Errors
		///
		/// Iff two single-value `attributes` conflict.
		pub fn $name(attributes: impl IntoIterator<Item = Attribute>) -> Result<ElementFactory, DuplicateAttributeError> {
			Element::build($tag, attributes)
		}
	)*};
}

macro_rules! void_elements {
	($($(#[$attribute:meta])* $name:ident => $tag:literal),*$(,)?) => {$(
		$(#[$attribute])*
		///
		/// # Errors
		///
		/// Iff two single-value `attributes` conflict.
		pub fn $name(attributes: impl IntoIterator<Item = Attribute>) -> Result<Node, DuplicateAttributeError> {
			VoidElement::build($tag, attributes)
		}
	)*};
}

/// The HTML5 document type declaration, `<!DOCTYPE html>`.
#[must_use]
pub fn doctype() -> Node {
	raw("<!DOCTYPE html>")
}

elements! {
	/// A hyperlink.
	a => "a",
	/// An abbreviation or acronym.
	abbr => "abbr",
	/// Contact information for the author or owner of a document or article.
	address => "address",
	/// Independent, self-contained content.
	article => "article",
	/// Content aside from the content it's placed in.
	aside => "aside",
	/// Embedded sound content.
	audio => "audio",
	/// Bold text without extra importance.
	b => "b",
	/// Isolates text that might be formatted in a different direction.
	bdi => "bdi",
	/// Overrides the current text direction.
	bdo => "bdo",
	/// A section quoted from another source.
	blockquote => "blockquote",
	/// The document's body.
	body => "body",
	/// A clickable button.
	button => "button",
	/// A drawing surface for scripts.
	canvas => "canvas",
	/// A table caption.
	caption => "caption",
	/// The title of a creative work.
	cite => "cite",
	/// A piece of computer code.
	code => "code",
	/// Properties of a group of table columns.
	colgroup => "colgroup",
	/// Links content with a machine-readable translation.
	data => "data",
	/// Pre-defined options for an `input`.
	datalist => "datalist",
	/// A description or value in a description list.
	dd => "dd",
	/// Text that has been deleted from a document.
	del => "del",
	/// Additional details the user can view or hide.
	details => "details",
	/// The defining instance of a term.
	dfn => "dfn",
	/// A dialog box or window.
	dialog => "dialog",
	/// A generic section.
	div => "div",
	/// A description list.
	dl => "dl",
	/// A term or name in a description list.
	dt => "dt",
	/// Emphasized text.
	em => "em",
	/// Groups related elements in a form.
	fieldset => "fieldset",
	/// A caption for a `figure`.
	figcaption => "figcaption",
	/// Self-contained content like illustrations or diagrams.
	figure => "figure",
	/// A footer for a document or section.
	footer => "footer",
	/// A form for user input.
	form => "form",
	h1 => "h1",
	h2 => "h2",
	h3 => "h3",
	h4 => "h4",
	h5 => "h5",
	h6 => "h6",
	/// Metadata about the document.
	head => "head",
	/// Introductory content.
	header => "header",
	/// The root of an HTML document.
	html => "html",
	/// Text in an alternate voice or mood.
	i => "i",
	/// A nested browsing context.
	iframe => "iframe",
	/// Text that has been inserted into a document.
	ins => "ins",
	/// Keyboard input.
	kbd => "kbd",
	/// A label for a form control.
	label => "label",
	/// A caption for a `fieldset`.
	legend => "legend",
	/// A list item.
	li => "li",
	/// The main content of the document.
	main => "main",
	/// A client-side image map.
	map => "map",
	/// Marked or highlighted text.
	mark => "mark",
	/// A scalar measurement within a known range.
	meter => "meter",
	/// Navigation links.
	nav => "nav",
	/// Alternate content for users without scripts.
	noscript => "noscript",
	/// An embedded object.
	object => "object",
	/// An ordered list.
	ol => "ol",
	/// A group of related options in a `select`.
	optgroup => "optgroup",
	/// An option in a `select`, `optgroup` or `datalist`.
	option => "option",
	/// The result of a calculation.
	output => "output",
	/// A paragraph.
	p => "p",
	/// A container for multiple image sources.
	picture => "picture",
	/// Preformatted text.
	pre => "pre",
	/// The progress of a task.
	progress => "progress",
	/// A short quotation.
	q => "q",
	/// Fallback parentheses for ruby annotations.
	rp => "rp",
	/// A ruby annotation's explanation or pronunciation.
	rt => "rt",
	/// A ruby annotation.
	ruby => "ruby",
	/// Text that is no longer correct.
	s => "s",
	/// Sample output from a computer program.
	samp => "samp",
	/// A client-side script.
	script => "script",
	/// A section of a document.
	section => "section",
	/// A drop-down list.
	select => "select",
	/// Smaller text.
	small => "small",
	/// A generic inline container.
	span => "span",
	/// Important text.
	strong => "strong",
	/// Style information for the document.
	style => "style",
	/// Subscript text.
	sub => "sub",
	/// A visible heading for a `details` element.
	summary => "summary",
	/// Superscript text.
	sup => "sup",
	/// An SVG graphics container.
	svg => "svg",
	/// A table.
	table => "table",
	/// Groups the body content of a table.
	tbody => "tbody",
	/// A table data cell.
	td => "td",
	/// Content that's hidden when the page loads.
	template => "template",
	/// A multi-line text input control.
	textarea => "textarea",
	/// Groups the footer content of a table.
	tfoot => "tfoot",
	/// A table header cell.
	th => "th",
	/// Groups the header content of a table.
	thead => "thead",
	/// A specific time or date.
	time => "time",
	/// The document's title.
	title => "title",
	/// A table row.
	tr => "tr",
	/// Unarticulated, stylistically different text.
	u => "u",
	/// An unordered list.
	ul => "ul",
	/// A variable.
	var => "var",
	/// Embedded video content.
	video => "video",
}

void_elements! {
	/// An area inside an image map.
	area => "area",
	/// The base URL and/or target for all relative URLs in the document.
	base => "base",
	/// A line break.
	br => "br",
	/// Column properties within a `colgroup`.
	col => "col",
	/// A container for an external application.
	embed => "embed",
	/// A thematic break.
	hr => "hr",
	/// An image.
	img => "img",
	/// An input control.
	input => "input",
	/// A link to an external resource.
	link => "link",
	/// Metadata that can't be represented by other elements.
	meta => "meta",
	/// A parameter for an `object`.
	param => "param",
	/// A media resource for `video`, `audio` or `picture`.
	source => "source",
	/// A text track for media elements.
	track => "track",
	/// A possible line-break opportunity.
	wbr => "wbr",
}
