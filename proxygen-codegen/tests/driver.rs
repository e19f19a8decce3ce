//! Driver and backend integration: dedup, batch error isolation, and
//! filesystem round-trips.

use proxygen_codegen::{is_candidate, EmissionDriver, FsBackend, MemoryBackend};
use proxygen_model::{
    ClassDecl, ClassKind, FunctionDecl, PropertyDecl, TypeRef, PROXY_GEN_ANNOTATION,
};

fn repo(package: &str) -> ClassDecl {
    ClassDecl::new("Repo", package, ClassKind::Interface)
        .annotation(PROXY_GEN_ANNOTATION)
        .property(PropertyDecl::new("flag", TypeRef::boolean()).mutable())
        .function(FunctionDecl::new("fetch").returns(TypeRef::string().nullable()))
        .source_file("src/Repo.kt")
}

#[test]
fn duplicate_names_generate_once_first_registration_wins() {
    let mut driver = EmissionDriver::new();
    assert!(driver.register(repo("com.first")));
    assert!(!driver.register(repo("com.second")));

    let mut backend = MemoryBackend::new();
    let report = driver.flush(&mut backend).unwrap();

    assert_eq!(report.generated, vec!["RepoProxy"]);
    assert_eq!(backend.sources().len(), 1);
    assert_eq!(backend.sources()[0].package, "com.first");
}

#[test]
fn bad_candidate_is_reported_and_rest_of_batch_generates() {
    let mut driver = EmissionDriver::new();
    driver.register(ClassDecl::new("Color", "com.example", ClassKind::EnumClass));
    driver.register(repo("com.example"));
    driver.register(
        ClassDecl::new("Session", "com.example", ClassKind::Interface)
            .function(FunctionDecl::new("refresh")),
    );

    let mut backend = MemoryBackend::new();
    let report = driver.flush(&mut backend).unwrap();

    assert!(report.has_errors());
    assert_eq!(report.generated, vec!["RepoProxy", "SessionProxy"]);
    let errors: Vec<_> = report
        .diagnostics
        .iter()
        .filter(|d| d.severity.is_error())
        .collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("interfaces and open or abstract classes"));
}

#[test]
fn repeated_passes_rederive_from_scratch() {
    // Incremental hosts hand the same file graph in again; the driver's
    // worklist is batch-scoped, so the second pass regenerates wholesale.
    let mut driver = EmissionDriver::new();
    let mut backend = MemoryBackend::new();

    driver.register(repo("com.example"));
    driver.flush(&mut backend).unwrap();
    assert!(driver.is_empty());

    driver.register(repo("com.example"));
    let report = driver.flush(&mut backend).unwrap();
    assert_eq!(report.generated, vec!["RepoProxy"]);

    assert_eq!(backend.sources().len(), 2);
    assert_eq!(backend.sources()[0].content, backend.sources()[1].content);
}

#[test]
fn fs_backend_lays_out_packages_and_names_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut driver = EmissionDriver::new();
    driver.register(repo("com.example.repo"));

    let mut backend = FsBackend::new(dir.path());
    let report = driver.flush(&mut backend).unwrap();
    assert!(!report.has_errors());

    let path = dir.path().join("com/example/repo/RepoProxy.kt");
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("package com.example.repo\n"));
    assert!(content.contains("class RepoProxy("));
}

#[test]
fn only_marked_declarations_are_candidates() {
    assert!(is_candidate(&repo("com.example")));
    assert!(!is_candidate(&ClassDecl::new(
        "Plain",
        "com.example",
        ClassKind::Interface
    )));
}

#[test]
fn generated_output_is_tied_to_the_source_file() {
    let mut driver = EmissionDriver::new();
    driver.register(repo("com.example"));

    let mut backend = MemoryBackend::new();
    driver.flush(&mut backend).unwrap();

    let deps = &backend.sources()[0].dependencies;
    assert!(deps.aggregating);
    assert_eq!(deps.sources, vec![std::path::PathBuf::from("src/Repo.kt")]);
}
