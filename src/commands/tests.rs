use super::*;
use factbook_core::FactError;

fn ctx(store: &FactStore) -> CommandContext<'_> {
    CommandContext {
        store,
        default_language: "EN",
    }
}

#[test]
fn test_fact_by_index() {
    let store = FactStore::builtin();
    let out = fact(&ctx(&store), None, Some(0)).unwrap();
    assert!(out.starts_with("The field of AI is considered to have its origin in 1950"));
}

#[test]
fn test_fact_random_is_member() {
    let store = FactStore::builtin();
    let out = fact(&ctx(&store), Some("en-US"), None).unwrap();
    assert!(store.collection("EN").unwrap().iter().any(|f| f == out));
}

#[test]
fn test_fact_errors_surface() {
    let store = FactStore::builtin();
    let err = fact(&ctx(&store), None, Some(-1)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<FactError>(),
        Some(FactError::OutOfRange { .. })
    ));

    let err = fact(&ctx(&store), Some("ZZ"), Some(0)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<FactError>(),
        Some(FactError::UnknownLanguage(_))
    ));
    assert_eq!(err.to_string(), "unknown language: ZZ");
}

#[test]
fn test_count() {
    let store = FactStore::builtin();
    assert_eq!(count(&ctx(&store), None).unwrap(), "12");
    assert!(count(&ctx(&store), Some("ZZ")).is_err());
}

#[test]
fn test_default_language_is_used() {
    let store = FactStore::builtin();
    let c = CommandContext {
        store: &store,
        default_language: "ZZ",
    };
    assert!(count(&c, None).is_err());
    assert_eq!(count(&c, Some("EN")).unwrap(), "12");
}

#[test]
fn test_list_plain() {
    let store = FactStore::builtin();
    let out = list(&ctx(&store), None, false).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 12);
    assert!(lines[0].starts_with("  0. The field of AI"));
    assert!(lines[11].starts_with(" 11. In 1997, Deep Blue"));
}

#[test]
fn test_list_json() {
    let store = FactStore::builtin();
    let out = list(&ctx(&store), None, true).unwrap();
    let parsed: Vec<String> = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed.len(), 12);
    assert_eq!(parsed[0], store.fact("EN", 0).unwrap());
}

#[test]
fn test_languages() {
    let store = FactStore::builtin();
    assert_eq!(languages(&ctx(&store)), "EN: 12 facts");
}

#[test]
fn test_languages_lists_every_collection() {
    let cfg = factbook_core::config::parse("[facts]\nDE = [\"Im Jahr 1956 A.\", \"1997 B.\"]").unwrap();
    let store = FactStore::from_config(&cfg).unwrap();
    assert_eq!(languages(&ctx(&store)), "DE: 2 facts\nEN: 12 facts");
}
