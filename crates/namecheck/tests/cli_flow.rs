//! End-to-end flows: generate, then verify against the stored target.

use namecheck::commands::{exit_code, generate, show, verify};
use namecheck::generator::{NameGenerator, PoolGenerator};
use namecheck::store::{FileStore, MemoryStore, TargetStore};
use namecheck_core::{Verifier, VerifyError};
use std::cell::Cell;

/// Counts calls so tests can prove verification never generates.
#[derive(Default)]
struct CountingGenerator {
    calls: Cell<usize>,
}

impl NameGenerator for CountingGenerator {
    fn generate(&self, _prompt: &str) -> String {
        self.calls.set(self.calls.get() + 1);
        "Sarah Al Masri".to_string()
    }
}

#[test]
fn test_generate_then_verify_in_memory() {
    let generator = CountingGenerator::default();
    let mut store = MemoryStore::new();
    let verifier = Verifier::default();

    let name = generate::generate_target(&generator, &mut store, "any prompt").unwrap();
    assert_eq!(name, "Sarah Al Masri");

    let report = verify::against_latest(&store, &verifier, "Al Masri Sarah").unwrap();
    assert!(report.matched);

    let report = verify::against_latest(&store, &verifier, "Tlyer Bilha").unwrap();
    assert!(!report.matched);

    assert_eq!(generator.calls.get(), 1);
}

#[test]
fn test_verify_without_target_never_generates() {
    let generator = CountingGenerator::default();
    let store = MemoryStore::new();

    let err = verify::against_latest(&store, &Verifier::default(), "Sarah").unwrap_err();
    assert_eq!(err.downcast_ref::<VerifyError>(), Some(&VerifyError::NoTargetName));
    assert_eq!(exit_code(&err), 3);
    assert_eq!(generator.calls.get(), 0);
    assert_eq!(store.latest_target_name().unwrap(), None);
}

#[test]
fn test_verification_leaves_store_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latest_target.json");
    let mut store = FileStore::new(&path);
    store.set_latest_target_name("Omar ibn Al Khattab", None).unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    let report =
        verify::against_latest(&store, &Verifier::default(), "Omar Ibn Alkhattab").unwrap();
    assert!(report.matched);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_target_persists_across_store_handles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state").join("latest_target.json");

    let name = {
        let mut store = FileStore::new(&path);
        generate::generate_target(&PoolGenerator, &mut store, "a name for a test").unwrap()
    };

    // A fresh handle stands in for a later CLI invocation.
    let store = FileStore::new(&path);
    assert_eq!(show::latest_target(&store).unwrap(), name);
    let report = verify::against_latest(&store, &Verifier::default(), &name).unwrap();
    assert!(report.matched);
    assert_eq!(report.confidence, 1.0);
}

#[test]
fn test_empty_candidate_reports_invalid_input() {
    let store = MemoryStore::with_name("Sarah Al Masri");
    let err = verify::against_latest(&store, &Verifier::default(), " \t ").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<VerifyError>(),
        Some(VerifyError::InvalidInput { .. })
    ));
    assert_eq!(exit_code(&err), 2);
}

#[test]
fn test_corrupt_store_is_a_generic_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latest_target.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = verify::against_latest(&FileStore::new(&path), &Verifier::default(), "Sarah")
        .unwrap_err();
    assert_eq!(exit_code(&err), 1);
}
