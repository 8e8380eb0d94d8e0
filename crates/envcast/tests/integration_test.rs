//! Integration tests for the public loading pipeline.
//!
//! These tests exercise the crate the way a host application would at
//! startup: declare a flat schema, load it, and read typed values from the
//! exported map.

use std::collections::HashMap;

use envcast::{Declaration, EnvLoader, EnvType, LoadError, Value, normalize_key};
use serial_test::serial;

fn startup_schema() -> Vec<Declaration> {
    vec![
        Declaration::new("app name", EnvType::String).with_default("envcast-demo"),
        Declaration::new("HTTP/PORT", EnvType::Number).with_default(8080),
        Declaration::new("DEBUG", EnvType::Boolean).with_default(false),
        Declaration::new("DB-LIMITS", EnvType::Object),
        Declaration::new("ALLOWED_HOSTS", EnvType::Array).required().with_default(Value::Array(vec![
            serde_json::json!("localhost"),
        ])),
    ]
}

#[test]
fn schema_loads_from_an_injected_environment() {
    let mut vars = HashMap::new();
    vars.insert("HTTP/PORT".to_string(), "9000".to_string());
    vars.insert("DEBUG".to_string(), "true".to_string());
    vars.insert("DB-LIMITS".to_string(), r#"{"pool": 10}"#.to_string());

    let loader = EnvLoader::from_map_with_declarations(vars, &startup_schema()).unwrap();
    let envs = loader.export();

    // Every declared name appears under its normalized key.
    for decl in startup_schema() {
        assert!(envs.contains_key(&normalize_key(&decl.name)), "{}", decl.name);
    }

    assert_eq!(envs["APP_NAME"].as_str(), Some("envcast-demo"));
    assert_eq!(envs["HTTP_PORT"].as_f64(), Some(9000.0));
    assert_eq!(envs["DEBUG"].as_bool(), Some(true));
    assert_eq!(
        envs["DB_LIMITS"].as_object().unwrap().get("pool"),
        Some(&serde_json::json!(10))
    );
    assert_eq!(
        envs["ALLOWED_HOSTS"].as_array().unwrap(),
        &[serde_json::json!("localhost")]
    );
}

#[test]
fn schema_declared_in_json_loads_end_to_end() {
    let decls: Vec<Declaration> = serde_json::from_str(
        r#"[
            {"name": "SERVICE_URL", "type": "string", "required": true},
            {"name": "WORKERS", "type": "number", "default": 4},
            {"name": "FEATURES", "type": "array", "default": []}
        ]"#,
    )
    .unwrap();

    let mut vars = HashMap::new();
    vars.insert("SERVICE_URL".to_string(), "https://localhost:8089".to_string());
    vars.insert("WORKERS".to_string(), "oops".to_string());

    let loader = EnvLoader::from_map_with_declarations(vars, &decls).unwrap();
    assert_eq!(
        loader.get("SERVICE_URL").and_then(Value::as_str),
        Some("https://localhost:8089")
    );
    // Uncoercible value falls back to the declared default.
    assert_eq!(loader.get("WORKERS").and_then(Value::as_f64), Some(4.0));
    // An empty-array default is still a default; nothing in the environment
    // overrides it.
    assert_eq!(
        loader.get("FEATURES"),
        Some(&Value::Array(vec![]))
    );
}

#[test]
fn missing_required_variable_aborts_the_batch() {
    let err = EnvLoader::from_map_with_declarations(
        HashMap::new(),
        &[
            Declaration::new("OPTIONAL", EnvType::String),
            Declaration::new("SERVICE_URL", EnvType::String).required(),
        ],
    )
    .unwrap_err();

    assert_eq!(err, LoadError::MissingRequired("SERVICE_URL".to_string()));
    assert_eq!(
        err.to_string(),
        "Missing required environment variable: SERVICE_URL"
    );
}

#[test]
#[serial]
fn schema_loads_from_the_process_environment() {
    temp_env::with_vars(
        [
            ("_ENVCAST_IT_URL", Some("https://localhost:8089")),
            ("_ENVCAST_IT_VERBOSE", Some("false")),
        ],
        || {
            let loader = EnvLoader::with_declarations(&[
                Declaration::new("_ENVCAST_IT_URL", EnvType::String).required(),
                Declaration::new("_ENVCAST_IT_VERBOSE", EnvType::Boolean),
            ])
            .unwrap();

            assert_eq!(
                loader.get("_ENVCAST_IT_URL").and_then(Value::as_str),
                Some("https://localhost:8089")
            );
            assert_eq!(
                loader.get("_ENVCAST_IT_VERBOSE").and_then(Value::as_bool),
                Some(false)
            );
        },
    );
}
