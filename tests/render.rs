use markup_dom::{
	attrs::{class, disabled, hidden, href, id},
	group, raw, render, render_to_string, tags, text, Attribute, Element, Error, VoidElement,
};
use rstest::rstest;
use std::io::{self, Write};

mod logging_;

#[rstest]
#[case("div")]
#[case("p")]
#[case("custom-element")]
fn empty_element(#[case] tag: &'static str) {
	logging_::init();
	let node = Element::build(tag, []).unwrap().empty();
	assert_eq!(render_to_string(&node).unwrap(), format!("<{0}></{0}>", tag));
}

#[rstest]
#[case("br")]
#[case("img")]
#[case("custom-void")]
fn empty_void_element(#[case] tag: &'static str) {
	logging_::init();
	let node = VoidElement::build(tag, []).unwrap();
	assert_eq!(render_to_string(&node).unwrap(), format!("<{}/>", tag));
}

#[test]
fn empty_group() {
	logging_::init();
	assert_eq!(render_to_string(&group(None)).unwrap(), "");
}

#[test]
fn group_concatenates() {
	logging_::init();
	let node = group([
		tags::p([]).unwrap().with([text("one")]),
		tags::p([]).unwrap().with([text("two")]),
	]);
	assert_eq!(render_to_string(&node).unwrap(), "<p>one</p><p>two</p>");
}

#[test]
fn nested_groups_flatten() {
	logging_::init();
	let node = tags::div([])
		.unwrap()
		.with([group([group(None), text("a")]), group([text("b"), group([text("c")])])]);
	assert_eq!(render_to_string(&node).unwrap(), "<div>abc</div>");
}

#[test]
fn escaped_text() {
	logging_::init();
	assert_eq!(render_to_string(&text("some <content>")).unwrap(), "some &lt;content&gt;");
}

#[test]
fn raw_text_is_verbatim() {
	logging_::init();
	assert_eq!(render_to_string(&raw("<b>&nbsp;</b>")).unwrap(), "<b>&nbsp;</b>");
}

#[test]
fn attributes_are_sorted() {
	logging_::init();
	let node = tags::a([id("link"), href("/"), class(["x"])]).unwrap().empty();
	assert_eq!(render_to_string(&node).unwrap(), r#"<a class="x" href="/" id="link"></a>"#);
}

#[test]
fn flags_sort_with_values() {
	logging_::init();
	let node = tags::input([id("field"), hidden(), disabled(), Attribute::single("accept", "*")]).unwrap();
	assert_eq!(render_to_string(&node).unwrap(), r#"<input accept="*" disabled hidden id="field"/>"#);
}

#[test]
fn repeated_flags_are_kept() {
	logging_::init();
	let node = tags::button([disabled(), disabled()]).unwrap().empty();
	assert_eq!(render_to_string(&node).unwrap(), "<button disabled disabled></button>");
}

#[test]
fn attribute_values_are_not_escaped() {
	logging_::init();
	let node = tags::span([Attribute::single("title", r#"say "hi""#)]).unwrap().empty();
	assert_eq!(render_to_string(&node).unwrap(), r#"<span title="say "hi""></span>"#);
}

#[test]
fn repeated_renders_are_identical() {
	logging_::init();
	let node = tags::ul([class(["list"])]).unwrap().with([
		tags::li([id("a")]).unwrap().with([text("A")]),
		tags::li([id("b")]).unwrap().with([text("B")]),
	]);
	let first = render_to_string(&node).unwrap();
	let second = render_to_string(&node).unwrap();
	assert_eq!(first, second);
	assert_eq!(first, r#"<ul class="list"><li id="a">A</li><li id="b">B</li></ul>"#);
}

#[test]
fn renders_into_sink() {
	logging_::init();
	let node = tags::p([]).unwrap().with([text("sink")]);
	let mut sink = Vec::new();
	render(&node, &mut sink).unwrap();
	assert_eq!(sink, b"<p>sink</p>");
}

struct FailAfter {
	remaining: usize,
	written: Vec<u8>,
}

impl Write for FailAfter {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		if self.remaining == 0 {
			return Err(io::Error::new(io::ErrorKind::Other, "sink full"));
		}
		let n = buf.len().min(self.remaining);
		self.written.extend_from_slice(&buf[..n]);
		self.remaining -= n;
		Ok(n)
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

#[test]
fn sink_failure_aborts() {
	logging_::init();
	let node = tags::div([]).unwrap().with([tags::p([]).unwrap().empty()]);
	let mut sink = FailAfter {
		remaining: 5,
		written: Vec::new(),
	};

	let error = render(&node, &mut sink).unwrap_err();
	assert!(matches!(error, Error::Io(_)), "{:?}", error);
	assert_eq!(sink.written, b"<div>");
}
