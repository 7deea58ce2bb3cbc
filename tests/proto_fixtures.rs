#![expect(
    clippy::unwrap_used,
    clippy::panic,
    reason = "test code uses unwrap/panic for concise assertions"
)]

use vtgate_proto::{
    BindValue, BindVariable, Error, RpcCode, RpcError, TypedValue, build_bind_variable, check_error,
};

#[derive(serde::Deserialize)]
struct BindCase {
    name: String,
    value: serde_json::Value,
    expect: Vec<ExpectedValue>,
    #[serde(default)]
    tuple: bool,
}

#[derive(serde::Deserialize)]
struct ExpectedValue {
    #[serde(rename = "type")]
    field_type: String,
    payload: String,
}

#[derive(serde::Deserialize)]
struct ErrorCase {
    name: String,
    code: RpcCode,
    message: String,
    category: String,
    errno: i32,
    sqlstate: String,
}

fn load_fixture<T: serde::de::DeserializeOwned>(filename: &str) -> Vec<T> {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = format!("{manifest_dir}/tests/fixtures/{filename}");
    let data =
        std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"));
    serde_json::from_str(&data).unwrap_or_else(|e| panic!("failed to parse {path}: {e}"))
}

fn assert_typed_value(case_name: &str, actual: &TypedValue, expected: &ExpectedValue) {
    assert_eq!(
        actual.field_type.as_ref(),
        expected.field_type,
        "wrong type tag for {case_name}"
    );
    assert_eq!(
        actual.value,
        expected.payload.as_bytes(),
        "wrong payload for {case_name}"
    );
}

fn category_label(err: &Error) -> &'static str {
    match err {
        Error::UnsupportedValueKind { .. } => "unsupported_value_kind",
        Error::EmptyListBindVariable => "empty_list_bind_variable",
        Error::SyntaxOrArgument(_) => "syntax_or_argument",
        Error::Timeout(_) => "timeout",
        Error::IntegrityConstraintViolation(_) => "integrity_constraint_violation",
        Error::Transient(_) => "transient",
        Error::Authorization(_) => "authorization",
        Error::Recoverable(_) => "recoverable",
        Error::NonTransient(_) => "non_transient",
    }
}

#[test]
fn bind_values_from_fixture_encode_to_expected_pairs() {
    for case in load_fixture::<BindCase>("bind_values.json") {
        let bind_value = BindValue::from_json(&case.value)
            .unwrap_or_else(|e| panic!("from_json failed for {}: {e}", case.name));
        let bind_variable = build_bind_variable(&bind_value)
            .unwrap_or_else(|e| panic!("encoding failed for {}: {e}", case.name));

        match bind_variable {
            BindVariable::Single(tv) => {
                assert!(!case.tuple, "{} expected a tuple", case.name);
                assert_eq!(case.expect.len(), 1, "{} fixture shape", case.name);
                assert_typed_value(&case.name, &tv, &case.expect[0]);
            }
            BindVariable::Tuple(values) => {
                assert!(case.tuple, "{} expected a single value", case.name);
                assert_eq!(
                    values.len(),
                    case.expect.len(),
                    "wrong tuple arity for {}",
                    case.name
                );
                for (actual, expected) in values.iter().zip(&case.expect) {
                    assert_typed_value(&case.name, actual, expected);
                }
            }
        }
    }
}

#[test]
fn rpc_errors_from_fixture_classify_to_expected_categories() {
    for case in load_fixture::<ErrorCase>("rpc_errors.json") {
        let rpc_error = RpcError::new(case.code, case.message.clone());
        let err = check_error(Some(&rpc_error)).unwrap_err();

        assert_eq!(
            category_label(&err),
            case.category,
            "wrong category for {}",
            case.name
        );

        let diagnostics = err
            .diagnostics()
            .unwrap_or_else(|| panic!("{} should carry diagnostics", case.name));
        assert_eq!(diagnostics.errno, case.errno, "wrong errno for {}", case.name);
        assert_eq!(
            diagnostics.sql_state, case.sqlstate,
            "wrong sqlstate for {}",
            case.name
        );
        assert_eq!(diagnostics.message, case.message);
    }
}
