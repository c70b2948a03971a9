use markup_dom::{
	attrs::{class, id, title},
	delayed, delayed_attribute, delayed_with, render_to_string, tags, text, Attribute, Error, Node,
};
use std::{
	cell::{Cell, RefCell},
	rc::Rc,
};

mod logging_;

#[test]
fn delayed_element_reevaluates() {
	logging_::init();
	let test_class = Rc::new(RefCell::new("testA".to_string()));
	let document = tags::div([]).unwrap().with([delayed({
		let test_class = Rc::clone(&test_class);
		move || Ok(tags::p([class([test_class.borrow().clone()])])?.empty())
	})]);

	assert_eq!(render_to_string(&document).unwrap(), r#"<div><p class="testA"></p></div>"#);
	*test_class.borrow_mut() = "testB".to_string();
	assert_eq!(render_to_string(&document).unwrap(), r#"<div><p class="testB"></p></div>"#);
}

#[test]
fn delayed_element_runs_once_per_render() {
	logging_::init();
	let calls = Rc::new(Cell::new(0));
	let document = delayed({
		let calls = Rc::clone(&calls);
		move || {
			calls.set(calls.get() + 1);
			Ok(text(&calls.get().to_string()))
		}
	});
	assert_eq!(calls.get(), 0);

	assert_eq!(render_to_string(&document).unwrap(), "1");
	assert_eq!(render_to_string(&document).unwrap(), "2");
	assert_eq!(calls.get(), 2);
}

#[test]
fn delayed_element_conflict_surfaces_at_render() {
	logging_::init();
	let document = delayed(|| Ok(tags::p([id("a"), id("b")])?.empty()));
	match render_to_string(&document) {
		Err(Error::DuplicateAttribute(error)) => assert_eq!(error.key, "id"),
		other => panic!("unexpected result: {:?}", other),
	}
}

#[test]
fn delayed_attribute_reevaluates() {
	logging_::init();
	let test_class = Rc::new(RefCell::new("testA".to_string()));
	let document = tags::div([delayed_with({
		let test_class = Rc::clone(&test_class);
		move || class([test_class.borrow().clone()])
	})])
	.unwrap()
	.empty();

	assert_eq!(render_to_string(&document).unwrap(), r#"<div class="testA"></div>"#);
	*test_class.borrow_mut() = "testB".to_string();
	assert_eq!(render_to_string(&document).unwrap(), r#"<div class="testB"></div>"#);
}

#[test]
fn delayed_attribute_leaves_fixed_state_alone() {
	logging_::init();
	let document = tags::div([class(["fixed"]), delayed_attribute(class(["delayed"]))]).unwrap().empty();

	let element = match &document {
		Node::Element(element) => element,
		other => panic!("expected an element, got {:?}", other),
	};
	assert_eq!(element.attributes().fixed().get("class"), Some("fixed"));
	assert_eq!(element.attributes().delayed().len(), 1);

	for _ in 0..3 {
		assert_eq!(render_to_string(&document).unwrap(), r#"<div class="fixed delayed"></div>"#);
	}
	assert_eq!(element.attributes().fixed().get("class"), Some("fixed"));
}

#[test]
fn delayed_attribute_can_add_flags() {
	logging_::init();
	let hidden = Rc::new(Cell::new(false));
	let document = tags::section([delayed_with({
		let hidden = Rc::clone(&hidden);
		move || if hidden.get() { Attribute::flag("hidden") } else { Attribute::none() }
	})])
	.unwrap()
	.empty();

	assert_eq!(render_to_string(&document).unwrap(), "<section></section>");
	hidden.set(true);
	assert_eq!(render_to_string(&document).unwrap(), "<section hidden></section>");
}

#[test]
fn delayed_attribute_conflicting_with_fixed_state() {
	logging_::init();
	let document = tags::div([title("fixed"), delayed_attribute(title("other"))]).unwrap().empty();
	match render_to_string(&document) {
		Err(Error::DuplicateAttribute(error)) => {
			assert_eq!(error.existing, "fixed");
			assert_eq!(error.new, "other");
		}
		other => panic!("unexpected result: {:?}", other),
	}
}

#[test]
fn nested_deferral_fails_loudly() {
	logging_::init();
	let document = tags::div([delayed_attribute(delayed_attribute(id("nested")))]).unwrap().empty();
	match render_to_string(&document) {
		Err(Error::NestedDelayedAttribute { key }) => assert_eq!(key.as_deref(), Some("id")),
		other => panic!("unexpected result: {:?}", other),
	}
}

#[test]
fn nested_deferral_through_computed() {
	logging_::init();
	let document = tags::div([delayed_with(|| delayed_attribute(Attribute::flag("late")))]).unwrap().empty();
	assert!(matches!(render_to_string(&document), Err(Error::NestedDelayedAttribute { .. })));
}
