use markup_dom::{render_to_string, Attribute, Element, VoidElement};
use proptest::{collection::btree_map, collection::vec, prelude::*};

mod logging_;

const TAG: &str = "[a-z][a-z0-9]{0,8}";
const KEY: &str = "[a-z][a-z-]{0,8}";
const VALUE: &str = "[a-zA-Z0-9 ./-]{0,12}";

proptest! {
	#[test]
	fn empty_elements(tag in TAG) {
		logging_::init();
		let element = Element::build(tag.clone(), []).unwrap().empty();
		prop_assert_eq!(render_to_string(&element).unwrap(), format!("<{0}></{0}>", tag));

		let void = VoidElement::build(tag.clone(), []).unwrap();
		prop_assert_eq!(render_to_string(&void).unwrap(), format!("<{}/>", tag));
	}

	#[test]
	fn single_value_is_idempotent(key in KEY, value in VALUE, repetitions in 1_usize..5) {
		let repeated = Element::build("p", (0..repetitions).map(|_| Attribute::single(key.clone(), value.clone()))).unwrap().empty();
		let once = Element::build("p", [Attribute::single(key.clone(), value.clone())]).unwrap().empty();
		prop_assert_eq!(render_to_string(&repeated).unwrap(), render_to_string(&once).unwrap());
	}

	#[test]
	fn single_value_conflicts(key in KEY, first in VALUE, second in VALUE) {
		prop_assume!(first != second);
		let error = Element::build("p", [Attribute::single(key.clone(), first.clone()), Attribute::single(key.clone(), second.clone())]).unwrap_err();
		prop_assert_eq!(error.key, key);
		prop_assert_eq!(error.existing, first);
		prop_assert_eq!(error.new, second);
	}

	#[test]
	fn multi_value_joins_in_call_order(calls in vec(vec("[a-z]{1,6}", 0..4), 1..5)) {
		let element = Element::build("p", calls.iter().map(|values| Attribute::multi("class", values.clone()))).unwrap().empty();

		let mut expected = calls[0].join(" ");
		for values in &calls[1..] {
			for value in values {
				expected.push(' ');
				expected.push_str(value);
			}
		}
		prop_assert_eq!(render_to_string(&element).unwrap(), format!(r#"<p class="{}"></p>"#, expected));
	}

	#[test]
	fn attribute_order_does_not_matter(attributes in btree_map(KEY, VALUE, 0..8), flags in vec(KEY, 0..4)) {
		let build = |reverse: bool| {
			let mut list: Vec<Attribute> = attributes
				.iter()
				.map(|(key, value)| Attribute::single(key.clone(), value.clone()))
				.chain(flags.iter().map(|flag| Attribute::flag(flag.clone())))
				.collect();
			if reverse {
				list.reverse();
			}
			render_to_string(&Element::build("div", list).unwrap().empty()).unwrap()
		};

		let forward = build(false);
		prop_assert_eq!(&forward, &build(true));

		let mut tokens: Vec<String> = attributes
			.iter()
			.map(|(key, value)| format!(r#"{}="{}""#, key, value))
			.chain(flags.iter().cloned())
			.collect();
		tokens.sort();
		let expected = if tokens.is_empty() {
			"<div></div>".to_string()
		} else {
			format!("<div {}></div>", tokens.join(" "))
		};
		prop_assert_eq!(forward, expected);
	}
}
