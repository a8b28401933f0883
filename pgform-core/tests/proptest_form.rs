use pgform_core::{FormFields, NewEntry, ValidationError, REQUIRED_FIELDS};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

// Strategy to generate arbitrary JSON scalar values
fn arb_json_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!(null)),
        any::<bool>().prop_map(|b| json!(b)),
        any::<i64>().prop_map(|n| json!(n)),
        ".*".prop_map(|s| json!(s)),
    ]
}

proptest! {
    /// Property: dropping any required key always fails validation
    #[test]
    fn prop_missing_required_key_rejected(
        name in ".*",
        email in ".*",
        message in ".*",
        drop in 0usize..3,
    ) {
        let mut body = Map::new();
        body.insert("name".into(), json!(name));
        body.insert("email".into(), json!(email));
        body.insert("message".into(), json!(message));
        body.remove(REQUIRED_FIELDS[drop]);

        let fields = FormFields::from_json_value(Value::Object(body));
        let err = fields.into_entry().unwrap_err();

        prop_assert_eq!(err, ValidationError::Missing { field: REQUIRED_FIELDS[drop] });
    }

    /// Property: string values survive normalization unchanged
    #[test]
    fn prop_string_values_are_verbatim(name in ".*", email in ".*", message in ".*") {
        let fields = FormFields::from_json_value(json!({
            "name": name.clone(),
            "email": email.clone(),
            "message": message.clone(),
        }));

        prop_assert_eq!(fields.into_entry().unwrap(), NewEntry::new(name, email, message));
    }

    /// Property: presence alone is enough, whatever the value type
    #[test]
    fn prop_any_value_type_accepted(
        name in arb_json_scalar(),
        email in arb_json_scalar(),
        message in arb_json_scalar(),
    ) {
        let fields = FormFields::from_json_value(json!({
            "name": name,
            "email": email,
            "message": message,
        }));

        prop_assert!(fields.into_entry().is_ok());
    }

    /// Property: arbitrary bytes never panic the JSON normalizer
    #[test]
    fn prop_json_slice_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = FormFields::from_json_slice(&bytes);
    }
}
