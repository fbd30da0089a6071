use std::sync::{Arc, Mutex};

use proptest::prelude::*;
use serde_json::{Value, json};
use validatable::{CompositionRoot, FnValidator, ValidationCapability, Validator};

struct PropInput;

fn capability() -> ValidationCapability {
    CompositionRoot::new().compose::<PropInput>()
}

fn fixed(name: String, verdict: bool) -> Arc<dyn Validator> {
    let message = format!("{name} failed");
    Arc::new(FnValidator::new(name, message, move |_: &Value| verdict))
}

/// Arbitrary value over the full dispatch domain: scalars, sequences,
/// mappings, nested a few levels deep.
fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..4).prop_map(|entries| {
                Value::Object(entries.into_iter().collect())
            }),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // Empty declaration: every value is vacuously valid.
    #[test]
    fn empty_declaration_accepts_everything(value in arb_value()) {
        let cap = capability();
        let mut state = cap.validatable();
        prop_assert!(state.validate(&value));
        prop_assert!(!state.invalid());
        prop_assert!(state.validation_states().is_none());
    }

    // The verdict is the conjunction of the per-validator verdicts, with one
    // state per declared validator, in declaration order.
    #[test]
    fn verdict_is_conjunction_of_parts(verdicts in prop::collection::vec(any::<bool>(), 1..8)) {
        let cap = capability();
        let names: Vec<String> = (0..verdicts.len()).map(|i| format!("v{i}")).collect();
        for (name, verdict) in names.iter().zip(&verdicts) {
            cap.register(fixed(name.clone(), *verdict));
        }

        let mut state = cap.validatable();
        state.set_validator(&names.join(" "));

        let expected = verdicts.iter().all(|v| *v);
        prop_assert_eq!(state.validate(&json!("probe")), expected);
        prop_assert_eq!(state.invalid(), !expected);

        let states = state.validation_states().expect("states after validate");
        prop_assert_eq!(states.len(), verdicts.len());
        for (i, entry) in states.iter().enumerate() {
            prop_assert_eq!(entry.validator.as_str(), names[i].as_str());
            prop_assert_eq!(entry.valid, verdicts[i]);
        }
    }

    // Unknown names interleaved anywhere in the declaration change nothing.
    #[test]
    fn unknown_names_are_transparent(
        verdicts in prop::collection::vec(any::<bool>(), 1..5),
        unknown_at in prop::collection::vec(any::<bool>(), 1..5),
    ) {
        let cap = capability();
        let names: Vec<String> = (0..verdicts.len()).map(|i| format!("v{i}")).collect();
        for (name, verdict) in names.iter().zip(&verdicts) {
            cap.register(fixed(name.clone(), *verdict));
        }

        // Interleave unregistered names between the registered ones.
        let mut declaration = Vec::new();
        for (i, name) in names.iter().enumerate() {
            if unknown_at.get(i).copied().unwrap_or(false) {
                declaration.push(format!("unknown-{i}"));
            }
            declaration.push(name.clone());
        }

        let mut noisy = cap.validatable();
        noisy.set_validator(&declaration.join(" "));
        let mut plain = cap.validatable();
        plain.set_validator(&names.join(" "));

        let value = json!("probe");
        prop_assert_eq!(noisy.validate(&value), plain.validate(&value));
        prop_assert_eq!(noisy.validation_states(), plain.validation_states());
    }

    // The core hands each validator the value untouched, whatever its shape.
    #[test]
    fn value_reaches_validators_unchanged(value in arb_value()) {
        let seen: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
        let witness = Arc::clone(&seen);

        let cap = capability();
        cap.register(Arc::new(FnValidator::new(
            "witness",
            "never fails",
            move |v: &Value| {
                *witness.lock().unwrap() = Some(v.clone());
                true
            },
        )));

        let mut state = cap.validatable();
        state.set_validator("witness");
        prop_assert!(state.validate(&value));
        let guard = seen.lock().unwrap();
        prop_assert_eq!(guard.as_ref(), Some(&value));
    }
}
