//! Binding property tests
//!
//! Property-based checks of determinism, unbind/bind agreement and error
//! accumulation.

use bindery_forms::{
	BeanMapping, FieldBinder, FieldPath, FormData, StructBinder, accessor, checked, fields::Number,
	list, not_empty_text, number, optional, text,
};
use proptest::prelude::*;

#[derive(Debug, Clone, Default, PartialEq)]
struct Row {
	label: String,
	count: Option<i64>,
	flagged: bool,
	notes: Vec<String>,
}

fn row_mapping() -> BeanMapping<Row> {
	BeanMapping::new(Row::default)
		.map_to(accessor!(Row, label), not_empty_text())
		.map_to(accessor!(Row, count), optional(Number::<i64>::new()))
		.map_to(accessor!(Row, flagged), checked())
		.to_list(accessor!(Row, notes), text())
}

fn arb_row() -> impl Strategy<Value = Row> {
	(
		"[a-zA-Z][a-zA-Z0-9 ]{0,15}[a-zA-Z0-9]",
		proptest::option::of(any::<i64>()),
		any::<bool>(),
		prop::collection::vec("[a-z0-9 ]{0,12}", 0..6),
	)
		.prop_map(|(label, count, flagged, notes)| Row {
			label,
			count,
			flagged,
			notes,
		})
}

fn arb_form_data() -> impl Strategy<Value = FormData> {
	prop::collection::hash_map(
		prop_oneof![
			Just("label".to_string()),
			Just("count".to_string()),
			Just("flagged".to_string()),
			"notes\\[[0-9]{1,2}\\]",
			"[a-z.\\[\\]0-9]{0,10}",
		],
		proptest::option::of("[ -~]{0,12}"),
		0..12,
	)
}

// ============================================================================
// Property-Based Tests: bind/unbind agreement
// ============================================================================

proptest! {
	/// Unbinding a value and binding the result yields the same value
	#[test]
	fn prop_unbind_then_bind_is_identity(row in arb_row()) {
		let mapping = row_mapping();

		let data = mapping.unbind(&row);
		let rebound = mapping.bind(&data, &FieldPath::root());

		prop_assert_eq!(rebound, Ok(row));
	}

	/// Binding the same data twice gives identical results, errors included
	#[test]
	fn prop_bind_is_deterministic(data in arb_form_data()) {
		let mapping = row_mapping();

		let first = mapping.bind(&data, &FieldPath::root());
		let second = mapping.bind(&data, &FieldPath::root());

		prop_assert_eq!(first, second);
	}

	/// Every reported error points at a field of the mapping
	#[test]
	fn prop_errors_stay_inside_the_mapping(data in arb_form_data()) {
		if let Err(errors) = row_mapping().bind(&data, &FieldPath::root()) {
			for error in &errors {
				let path = error.path().to_string();
				prop_assert!(
					path == "label" || path == "count",
					"unexpected error path {}",
					path
				);
			}
		}
	}

	/// Integers survive a text round trip at any magnitude
	#[test]
	fn prop_number_round_trip(n in any::<i32>()) {
		let binder = number();

		let raw = binder.unbind(&n);

		prop_assert_eq!(binder.bind(raw.as_deref(), &FieldPath::root()), Ok(n));
	}

	/// List elements come back ordered by index, whatever the key order
	#[test]
	fn prop_list_orders_by_index(
		indices in prop::collection::btree_set(0usize..500, 0..20)
	) {
		let data: FormData = indices
			.iter()
			.rev()
			.map(|i| (format!("items[{}]", i), Some(i.to_string())))
			.collect();

		let bound = list(number())
			.bind(&data, &FieldPath::root().child("items"))
			.unwrap();

		let expected: Vec<i32> = indices.iter().map(|i| *i as i32).collect();
		prop_assert_eq!(bound, expected);
	}
}
