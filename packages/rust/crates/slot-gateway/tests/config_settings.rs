#![allow(missing_docs)]

use std::path::PathBuf;

use slot_gateway::{build_registry, load_slot_settings_from_paths};
use slot_prizes::default_prizes;
use tempfile::TempDir;

fn write_file(path: PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    std::fs::write(path, content).expect("write yaml");
}

fn paths(tmp: &TempDir) -> (PathBuf, PathBuf) {
    (
        tmp.path().join("packages/conf/slot.yaml"),
        tmp.path().join(".config/slot-gateway/slot.yaml"),
    )
}

#[test]
fn missing_files_fall_back_to_defaults() {
    let tmp = TempDir::new().expect("tempdir");
    let (system, user) = paths(&tmp);

    let settings = load_slot_settings_from_paths(&system, &user);

    assert!(settings.gateway.bind.is_none());
    assert!(settings.draw.seed.is_none());
    assert!(settings.prizes.is_none());
    assert_eq!(settings.initial_prizes().expect("defaults"), default_prizes());
}

#[test]
fn merge_user_overrides_system() {
    let tmp = TempDir::new().expect("tempdir");
    let (system, user) = paths(&tmp);

    write_file(
        system.clone(),
        r#"
gateway:
  bind: "0.0.0.0:9000"
draw:
  seed: 7
prizes:
  - { id: 1, name: "System", emoji: "💰", probability: 1, color: "gold" }
"#,
    );
    write_file(
        user.clone(),
        r#"
gateway:
  bind: "127.0.0.1:9100"
prizes:
  - { id: 10, name: "User A", emoji: "🎁", probability: 2.5, color: "red" }
  - { id: 11, name: "User B", emoji: "🎯", probability: 0, color: "gray" }
"#,
    );

    let settings = load_slot_settings_from_paths(&system, &user);

    assert_eq!(settings.gateway.bind.as_deref(), Some("127.0.0.1:9100"));
    assert_eq!(settings.draw.seed, Some(7));
    let prizes = settings.initial_prizes().expect("configured prizes");
    assert_eq!(prizes.len(), 2);
    assert_eq!(prizes[0].id, 10);
    assert_eq!(prizes[1].symbol, "🎯");
}

#[test]
fn unparsable_file_is_ignored() {
    let tmp = TempDir::new().expect("tempdir");
    let (system, user) = paths(&tmp);
    write_file(
        system.clone(),
        "gateway:\n  bind: \"0.0.0.0:9000\"\n",
    );
    write_file(user.clone(), "gateway: [this is: not valid");

    let settings = load_slot_settings_from_paths(&system, &user);

    assert_eq!(settings.gateway.bind.as_deref(), Some("0.0.0.0:9000"));
}

#[test]
fn invalid_configured_prizes_fail_registry_build() {
    let tmp = TempDir::new().expect("tempdir");
    let (system, user) = paths(&tmp);
    write_file(
        system.clone(),
        r#"
prizes:
  - { id: 1, name: "A", emoji: "💰", probability: 1, color: "gold" }
  - { id: 1, name: "B", emoji: "🎁", probability: 1, color: "red" }
"#,
    );

    let settings = load_slot_settings_from_paths(&system, &user);

    assert!(build_registry(&settings).is_err());
}

#[test]
fn mistyped_configured_prize_fails_registry_build_instead_of_file() {
    let tmp = TempDir::new().expect("tempdir");
    let (system, user) = paths(&tmp);
    write_file(
        user.clone(),
        r#"
gateway:
  bind: "127.0.0.1:9200"
prizes:
  - { id: 1, name: "A", emoji: "💰", probability: "x", color: "gold" }
"#,
    );

    let settings = load_slot_settings_from_paths(&system, &user);

    assert_eq!(settings.gateway.bind.as_deref(), Some("127.0.0.1:9200"));
    let err = settings.initial_prizes().unwrap_err();
    assert_eq!(err.kind(), "malformed_payload");
    assert!(err.to_string().contains("probability"));
    let build = build_registry(&settings).unwrap_err();
    assert!(format!("{build:#}").contains("configured prize list is invalid"));
}

#[test]
fn configured_prizes_with_overflowing_total_fail_registry_build() {
    let tmp = TempDir::new().expect("tempdir");
    let (system, user) = paths(&tmp);
    write_file(
        system.clone(),
        r#"
prizes:
  - { id: 1, name: "A", emoji: "💰", probability: 1.0e308, color: "gold" }
  - { id: 2, name: "B", emoji: "🎁", probability: 1.0e308, color: "red" }
"#,
    );

    let settings = load_slot_settings_from_paths(&system, &user);

    assert!(build_registry(&settings).is_err());
}

#[test]
fn registry_builds_from_configured_prizes() {
    let tmp = TempDir::new().expect("tempdir");
    let (system, user) = paths(&tmp);
    write_file(
        user.clone(),
        r#"
prizes:
  - { id: 3, name: "Only", emoji: "⭐", probability: 4, color: "blue" }
"#,
    );

    let settings = load_slot_settings_from_paths(&system, &user);
    let registry = build_registry(&settings).expect("registry");

    assert_eq!(registry.snapshot().len(), 1);
    assert_eq!(registry.snapshot()[0].id, 3);
}
