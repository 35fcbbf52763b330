use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.poem_endpoint, DEFAULT_POEM_API_URL);
    assert_eq!(cfg.emailjs.endpoint, DEFAULT_EMAILJS_API_URL);
    assert_eq!(cfg.form_mode, FormMode::SignIn);
    assert_eq!(cfg.log_level, log::Level::Info);
    assert!(!cfg.firebase.is_configured());
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = AppConfig::from_lookup(lookup(&[
        ("POEM_API_URL", "https://poems.test/random"),
        ("RESPONSE_FORM_MODE", "manual-email"),
        ("EMAILJS_SERVICE_ID", "service_1"),
        ("EMAILJS_TEMPLATE_ID", "template_1"),
        ("EMAILJS_PUBLIC_KEY", " pk_1 "),
        ("FIREBASE_API_KEY", "fb-key"),
        ("FIREBASE_AUTH_DOMAIN", "demo.firebaseapp.com"),
        ("LOG_LEVEL", "debug"),
    ]))
    .unwrap();

    assert_eq!(cfg.poem_endpoint, "https://poems.test/random");
    assert_eq!(cfg.form_mode, FormMode::ManualEmail);
    assert_eq!(cfg.emailjs.service_id, "service_1");
    assert_eq!(cfg.emailjs.template_id, "template_1");
    assert_eq!(cfg.emailjs.public_key, "pk_1");
    assert!(cfg.firebase.is_configured());
    assert_eq!(cfg.firebase.auth_domain, "demo.firebaseapp.com");
    assert_eq!(cfg.log_level, log::Level::Debug);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = AppConfig::from_lookup(lookup(&[("POEM_API_URL", "   "), ("RESPONSE_FORM_MODE", "")])).unwrap();
    assert_eq!(cfg.poem_endpoint, DEFAULT_POEM_API_URL);
    assert_eq!(cfg.form_mode, FormMode::SignIn);
}

#[test]
fn unknown_form_mode_errors() {
    let err = AppConfig::from_lookup(lookup(&[("RESPONSE_FORM_MODE", "both")])).unwrap_err();
    assert!(err.to_string().contains("unknown RESPONSE_FORM_MODE"));
}

#[test]
fn unknown_log_level_errors() {
    let err = AppConfig::from_lookup(lookup(&[("LOG_LEVEL", "loud")])).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownLogLevel(v) if v == "loud"));
}

#[test]
fn firebase_options_serialize_camel_case() {
    let cfg = FirebaseConfig {
        api_key: "k".into(),
        auth_domain: "d".into(),
        project_id: "p".into(),
        app_id: "a".into(),
    };
    let json = serde_json::to_value(&cfg).unwrap();
    assert_eq!(json["apiKey"], "k");
    assert_eq!(json["authDomain"], "d");
    assert_eq!(json["projectId"], "p");
    assert_eq!(json["appId"], "a");
}
