//! One constructor per common HTML5 attribute, plus the global event handler attributes.
//!
//! Multi-value attributes like [`class`] accumulate across calls on the same element,
//! single-value ones conflict if they're set to different values.

use crate::Attribute;

/// Formatting of typed attribute values.
///
/// Integers are written as-is, floats with six fractional digits (`1.500000`).
/// With the `chrono` feature, timestamps are written as `YYYY-MM-DDTHH:MM:SS±HH`.
pub trait AttributeValue {
	fn to_attribute_value(&self) -> String;
}

macro_rules! display_values {
	($($type:ty),*$(,)?) => {$(
		impl AttributeValue for $type {
			fn to_attribute_value(&self) -> String {
				self.to_string()
			}
		}
	)*};
}
display_values!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, str, String);

impl AttributeValue for f32 {
	fn to_attribute_value(&self) -> String {
		format!("{:.6}", self)
	}
}

impl AttributeValue for f64 {
	fn to_attribute_value(&self) -> String {
		format!("{:.6}", self)
	}
}

impl<T: AttributeValue + ?Sized> AttributeValue for &T {
	fn to_attribute_value(&self) -> String {
		(**self).to_attribute_value()
	}
}

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> AttributeValue for chrono::DateTime<Tz>
where
	Tz::Offset: core::fmt::Display,
{
	fn to_attribute_value(&self) -> String {
		self.format("%Y-%m-%dT%H:%M:%S%:::z").to_string()
	}
}

macro_rules! single {
	($($(#[$attribute:meta])* $name:ident => $key:literal),*$(,)?) => {$(
		$(#[$attribute])*
		#[must_use]
		pub fn $name(value: impl Into<String>) -> $crate::Attribute {
			$crate::Attribute::single($key, value)
		}
	)*};
}

macro_rules! typed {
	($($(#[$attribute:meta])* $name:ident => $key:literal),*$(,)?) => {$(
		$(#[$attribute])*
		#[must_use]
		pub fn $name(value: impl $crate::attrs::AttributeValue) -> $crate::Attribute {
			$crate::Attribute::single($key, $crate::attrs::AttributeValue::to_attribute_value(&value))
		}
	)*};
}

macro_rules! multi {
	($($(#[$attribute:meta])* $name:ident => $key:literal),*$(,)?) => {$(
		$(#[$attribute])*
		#[must_use]
		pub fn $name<V: Into<String>>(values: impl IntoIterator<Item = V>) -> $crate::Attribute {
			$crate::Attribute::multi($key, values)
		}
	)*};
}

macro_rules! flags {
	($($(#[$attribute:meta])* $name:ident => $key:literal),*$(,)?) => {$(
		$(#[$attribute])*
		#[must_use]
		pub fn $name() -> $crate::Attribute {
			$crate::Attribute::flag($key)
		}
	)*};
}

macro_rules! booleans {
	($($(#[$attribute:meta])* $name:ident => $key:literal: $on:literal / $off:literal),*$(,)?) => {$(
		$(#[$attribute])*
		#[must_use]
		pub fn $name(value: bool) -> $crate::Attribute {
			$crate::Attribute::single($key, if value { $on } else { $off })
		}
	)*};
}

single! {
	/// An abbreviated version of a header cell's content.
	abbr => "abbr",
	/// A keyboard shortcut to activate or focus the element.
	access_key => "accesskey",
	/// Where to send a form's data.
	action => "action",
	/// A feature policy for an `iframe`.
	allow => "allow",
	/// Alternate text.
	alt => "alt",
	/// The document's character encoding.
	charset => "charset",
	/// A URL explaining a quote, deletion or insertion.
	cite => "cite",
	/// The value associated with `http-equiv` or `name` on a `meta` element.
	content => "content",
	/// The coordinates of an `area`.
	coords => "coords",
	/// How cross-origin requests are made.
	cross_origin => "crossorigin",
	/// The URL of an `object`'s resource.
	data => "data",
	/// The text direction.
	dir => "dir",
	/// Submits the text direction of an input.
	dir_name => "dirname",
	/// How form data is encoded.
	enc_type => "enctype",
	/// The `form` an input belongs to.
	form => "form",
	form_action => "formaction",
	form_enc_type => "formenctype",
	form_method => "formmethod",
	form_target => "formtarget",
	/// The URL of a linked resource.
	href => "href",
	/// The language of a linked resource.
	href_lang => "hreflang",
	/// An HTTP header for a `meta` element's `content`.
	http_equiv => "http-equiv",
	/// A unique id.
	id => "id",
	/// A hash to verify a fetched resource with.
	integrity => "integrity",
	/// The kind of a text `track`.
	kind => "kind",
	/// A title for a `track` or `option`.
	label => "label",
	/// The content's language.
	lang => "lang",
	/// The `datalist` for an input.
	list => "list",
	/// Lazy or eager loading of an image.
	loading => "loading",
	/// A URL to a detailed description of an image.
	long_desc => "longdesc",
	/// The media or device a resource is optimized for.
	media => "media",
	/// The HTTP method used to send form data.
	method => "method",
	name => "name",
	/// A regular expression an input value is checked against.
	pattern => "pattern",
	/// A short hint describing the expected value of an input.
	placeholder => "placeholder",
	/// An image shown while a video downloads.
	poster => "poster",
	/// How media should be loaded when the page loads.
	preload => "preload",
	/// Which referrer information to send.
	referrer_policy => "referrerpolicy",
	/// The relationship to a linked resource.
	rel => "rel",
	/// Whether a header cell applies to a column, row or group.
	scope => "scope",
	/// The shape of an `area`.
	shape => "shape",
	/// Image sizes for different page layouts.
	sizes => "sizes",
	/// The URL of a media resource.
	src => "src",
	/// Inline HTML content for an `iframe`. Use [`render_to_string`](`crate::render_to_string`) to produce it from nodes.
	src_doc => "srcdoc",
	/// The language of a text `track`.
	src_lang => "srclang",
	/// Image sources for different situations.
	src_set => "srcset",
	/// Inline CSS.
	style => "style",
	/// Where to open a linked document or form response.
	target => "target",
	/// Extra information, usually shown as a tooltip.
	title => "title",
	/// The type of an element or linked resource.
	r#type => "type",
	/// Links an image to an image map.
	use_map => "usemap",
	/// How `textarea` content is wrapped when submitted.
	wrap => "wrap",
	/// The XML namespace.
	xmlns => "xmlns",
}

typed! {
	/// The visible width of a `textarea`, in characters.
	cols => "cols",
	/// How many columns a cell spans.
	col_span => "colspan",
	/// The height in pixels.
	height => "height",
	/// The lower bound of a `meter`'s high range.
	high => "high",
	/// The upper bound of a `meter`'s low range.
	low => "low",
	/// A maximum value, which may be a number, string or (with `chrono`) a timestamp.
	max => "max",
	max_length => "maxlength",
	/// A minimum value, which may be a number, string or (with `chrono`) a timestamp.
	min => "min",
	min_length => "minlength",
	/// The optimal value of a `meter`.
	optimum => "optimum",
	/// How many rows a cell spans.
	row_span => "rowspan",
	/// The visible height of a `textarea`, in lines.
	rows => "rows",
	/// The width of an input in characters, or the number of visible `select` options.
	size => "size",
	/// How many columns a `col` or `colgroup` spans.
	span => "span",
	/// The start value of an ordered list.
	start => "start",
	/// The legal number intervals of an input.
	step => "step",
	/// The tab order.
	tab_index => "tabindex",
	value => "value",
	/// The width in pixels.
	width => "width",
}

multi! {
	/// Accepted file types for a file input.
	accept => "accept",
	/// Character encodings for form submission.
	accept_charset => "accept-charset",
	/// Class names. Accumulates across calls on the same element.
	class => "class",
	/// The ids of the elements a `label` or `output` is for.
	r#for => "for",
	/// The header cells a data cell is related to.
	headers => "headers",
	/// URLs to notify when a link is followed.
	ping => "ping",
}

flags! {
	/// Execute a script as soon as it's available.
	r#async => "async",
	autofocus => "autofocus",
	autoplay => "autoplay",
	checked => "checked",
	controls => "controls",
	/// Execute a script after the page has finished parsing.
	defer => "defer",
	/// Enables a `track` by default.
	default => "default",
	disabled => "disabled",
	form_no_validate => "formnovalidate",
	hidden => "hidden",
	/// Marks an image as a server-side image map.
	is_map => "ismap",
	/// Restart media when it's finished.
	r#loop => "loop",
	multiple => "multiple",
	muted => "muted",
	no_validate => "novalidate",
	/// Show the content of a `details` or `dialog` element.
	open => "open",
	read_only => "readonly",
	required => "required",
	/// Count an ordered list down.
	reversed => "reversed",
	selected => "selected",
}

booleans! {
	/// `autocomplete="on"` or `"off"`.
	autocomplete => "autocomplete": "on" / "off",
	content_editable => "contenteditable": "true" / "false",
	draggable => "draggable": "true" / "false",
	no_module => "nomodule": "true" / "false",
	spellcheck => "spellcheck": "true" / "false",
	/// `translate="yes"` or `"no"`.
	translate => "translate": "yes" / "no",
	type_must_match => "typemustmatch": "true" / "false",
}

/// A custom `data-*` attribute.
#[must_use]
pub fn data_(key: &str, value: impl Into<String>) -> Attribute {
	Attribute::single(format!("data-{}", key), value)
}

/// When text was deleted or changed, or the time a `time` element represents.
#[cfg(feature = "chrono")]
#[must_use]
pub fn date_time<Tz: chrono::TimeZone>(date_time: &chrono::DateTime<Tz>) -> Attribute
where
	Tz::Offset: core::fmt::Display,
{
	Attribute::single("datetime", date_time.to_attribute_value())
}

/// Download the link target instead of navigating to it, optionally under a given file name.
#[must_use]
pub fn download(file_name: Option<&str>) -> Attribute {
	match file_name {
		None => Attribute::flag("download"),
		Some(file_name) => Attribute::single("download", file_name),
	}
}

/// Restrictions for an `iframe`'s content. Without restrictions, this is the bare `sandbox` flag, which applies all of them.
#[must_use]
pub fn sandbox<V: Into<String>>(restrictions: impl IntoIterator<Item = V>) -> Attribute {
	let restrictions: Vec<String> = restrictions.into_iter().map(Into::into).collect();
	if restrictions.is_empty() {
		Attribute::flag("sandbox")
	} else {
		Attribute::Multi {
			key: "sandbox".into(),
			values: restrictions,
		}
	}
}

/// Global event handler attributes, each taking a script.
pub mod events {
	single! {
		on_after_print => "onafterprint",
		on_before_print => "onbeforeprint",
		on_before_unload => "onbeforeunload",
		on_error => "onerror",
		on_hash_change => "onhashchange",
		on_load => "onload",
		on_message => "onmessage",
		on_offline => "onoffline",
		on_online => "ononline",
		on_page_hide => "onpagehide",
		on_page_show => "onpageshow",
		on_pop_state => "onpopstate",
		on_resize => "onresize",
		on_storage => "onstorage",
		on_unload => "onunload",
		on_blur => "onblur",
		on_change => "onchange",
		on_context_menu => "oncontextmenu",
		on_focus => "onfocus",
		on_input => "oninput",
		on_invalid => "oninvalid",
		on_reset => "onreset",
		on_search => "onsearch",
		on_select => "onselect",
		on_submit => "onsubmit",
		on_key_down => "onkeydown",
		on_key_press => "onkeypress",
		on_key_up => "onkeyup",
		on_click => "onclick",
		on_dbl_click => "ondblclick",
		on_mouse_down => "onmousedown",
		on_mouse_move => "onmousemove",
		on_mouse_out => "onmouseout",
		on_mouse_over => "onmouseover",
		on_mouse_up => "onmouseup",
		on_wheel => "onwheel",
		on_drag => "ondrag",
		on_drag_end => "ondragend",
		on_drag_enter => "ondragenter",
		on_drag_leave => "ondragleave",
		on_drag_over => "ondragover",
		on_drag_start => "ondragstart",
		on_drop => "ondrop",
		on_scroll => "onscroll",
		on_copy => "oncopy",
		on_cut => "oncut",
		on_paste => "onpaste",
		on_abort => "onabort",
		on_can_play => "oncanplay",
		on_can_play_through => "oncanplaythrough",
		on_cue_change => "oncuechange",
		on_duration_change => "ondurationchange",
		on_emptied => "onemptied",
		on_ended => "onended",
		on_loaded_data => "onloadeddata",
		on_loaded_metadata => "onloadedmetadata",
		on_load_start => "onloadstart",
		on_pause => "onpause",
		on_play => "onplay",
		on_playing => "onplaying",
		on_progress => "onprogress",
		on_rate_change => "onratechange",
		on_seeked => "onseeked",
		on_seeking => "onseeking",
		on_stalled => "onstalled",
		on_suspend => "onsuspend",
		on_time_update => "ontimeupdate",
		on_volume_change => "onvolumechange",
		on_waiting => "onwaiting",
		on_toggle => "ontoggle",
	}
}
