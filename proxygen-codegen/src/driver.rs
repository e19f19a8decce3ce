//! Emission driver.
//!
//! Owns the batch-scoped worklist of candidates, deduplicates them by
//! simple name, and runs the classify → describe → synthesize → render
//! chain for each on [`EmissionDriver::flush`]. Per-candidate failures
//! become diagnostics; the batch always runs to completion.

use indexmap::IndexMap;
use proxygen_model::{ClassDecl, TypeRef, PROXY_GEN_ANNOTATION};

use crate::backend::{Dependencies, GeneratedSource, SourceBackend};
use crate::classify::{classify, Classified};
use crate::descriptor::{describe_function, describe_property, MemberDescriptor};
use crate::diagnostic::Diagnostic;
use crate::error::Error;
use crate::naming;
use crate::render::KotlinRenderer;
use crate::spec::{FileSpec, Supertype, TypeSpec};
use crate::synth::{build_constructor, build_function_override, build_property_override};

/// One candidate's generation output: the rendered source plus any
/// non-fatal warnings collected along the way.
#[derive(Debug, Clone)]
pub struct Generated {
    /// The rendered proxy source.
    pub source: GeneratedSource,
    /// Warnings (e.g. skipped members with unresolvable names).
    pub warnings: Vec<Diagnostic>,
}

/// Outcome of one [`EmissionDriver::flush`] pass.
#[derive(Debug, Clone, Default)]
pub struct FlushReport {
    /// Generated type names, in emission order.
    pub generated: Vec<String>,
    /// Diagnostics collected across the batch.
    pub diagnostics: Vec<Diagnostic>,
}

impl FlushReport {
    /// Whether any candidate was dropped with an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

/// Whether a declaration opts into proxy generation via the marker
/// annotation. Discovery itself is the host's job; this is the check it
/// applies while visiting declarations.
pub fn is_candidate(decl: &ClassDecl) -> bool {
    decl.is_annotated(PROXY_GEN_ANNOTATION)
}

/// Generate the proxy source for a single candidate.
///
/// Pure with respect to the declaration: the same input yields the same
/// output on every pass. Used by [`EmissionDriver::flush`] and usable
/// directly for previews.
///
/// # Errors
///
/// Returns [`Error::UnsupportedShape`] when the candidate cannot be
/// proxied at all, and [`Error::UnnamedConstructorParam`] when a class
/// candidate has a base constructor parameter that cannot be forwarded.
/// Either way no partial output is produced.
pub fn generate(decl: &ClassDecl) -> Result<Generated, Error> {
    let classified = classify(decl)?;
    let mut warnings = Vec::new();

    let mut properties = Vec::new();
    for property in classified.properties.iter().copied() {
        match describe_property(property) {
            Some(descriptor) => properties.push(descriptor),
            None => skip_member(decl, &property.name, property.is_private(), &mut warnings),
        }
    }
    let mut functions = Vec::new();
    for function in classified.functions.iter().copied() {
        match describe_function(function) {
            Some(descriptor) => functions.push(descriptor),
            None => skip_member(decl, &function.name, function.is_private(), &mut warnings),
        }
    }

    let type_spec = build_type_spec(decl, &classified, &properties, &functions);
    let file = FileSpec::new(decl.package.clone(), type_spec);
    let content = KotlinRenderer::new().render_file(&file);

    Ok(Generated {
        source: GeneratedSource {
            package: file.package,
            file_name: file.file_name,
            content,
            dependencies: Dependencies::aggregating(
                decl.source_file.iter().cloned().collect(),
            ),
        },
        warnings,
    })
}

/// Record a warning for a member skipped because its name could not be
/// resolved. Private members are skipped silently - they are never part of
/// the generated surface.
fn skip_member(decl: &ClassDecl, name: &str, is_private: bool, warnings: &mut Vec<Diagnostic>) {
    if !is_private && name.is_empty() {
        warnings.push(Diagnostic::member_skipped(&decl.name));
    }
}

fn build_type_spec(
    decl: &ClassDecl,
    classified: &Classified<'_>,
    properties: &[MemberDescriptor],
    functions: &[MemberDescriptor],
) -> TypeSpec {
    let original = TypeRef::named(decl.name.clone());
    let supertype = if classified.shape.is_class() {
        Supertype::Extends {
            ty: original,
            super_args: classified
                .base_ctor_params
                .iter()
                .filter_map(|p| p.name.clone())
                .collect(),
        }
    } else {
        Supertype::Implements(original)
    };

    let synthesized = build_constructor(classified.base_ctor_params, properties, functions);

    let mut spec = TypeSpec::new(naming::proxy_name(&decl.name), supertype)
        .constructor(synthesized.ctor)
        .properties(synthesized.backing_properties)
        .properties(properties.iter().map(build_property_override));
    for descriptor in functions {
        spec = spec.function(build_function_override(descriptor));
    }
    spec
}

/// Orchestrates a batch of candidates and hands the results to a backend.
///
/// The worklist is owned by the driver instance and scoped to one
/// processing pass: [`EmissionDriver::flush`] drains it, so a host that is
/// invoked repeatedly re-registers and re-derives everything from scratch
/// each pass.
#[derive(Debug, Default)]
pub struct EmissionDriver {
    worklist: IndexMap<String, ClassDecl>,
}

impl EmissionDriver {
    /// Create a driver with an empty worklist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a candidate. Idempotent per simple name: the first
    /// registration wins and later ones are no-ops. Returns whether the
    /// candidate was newly added.
    pub fn register(&mut self, decl: ClassDecl) -> bool {
        if self.worklist.contains_key(&decl.name) {
            return false;
        }
        self.worklist.insert(decl.name.clone(), decl);
        true
    }

    /// Number of distinct candidates currently registered.
    pub fn len(&self) -> usize {
        self.worklist.len()
    }

    /// Whether no candidates are registered.
    pub fn is_empty(&self) -> bool {
        self.worklist.is_empty()
    }

    /// Process the full worklist once, in registration order, writing one
    /// generated type per surviving candidate to the backend.
    ///
    /// Classifier errors abort only their candidate and are reported as
    /// error diagnostics on the returned report. The worklist is drained:
    /// a subsequent flush processes only newly registered candidates.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend fails to persist a source;
    /// that failure fails the whole pass.
    pub fn flush(&mut self, backend: &mut dyn SourceBackend) -> eyre::Result<FlushReport> {
        let mut report = FlushReport::default();

        for (_, decl) in self.worklist.drain(..) {
            match generate(&decl) {
                Ok(generated) => {
                    report.diagnostics.extend(generated.warnings);
                    report
                        .generated
                        .push(generated.source.file_name.trim_end_matches(".kt").to_string());
                    backend.write(generated.source)?;
                }
                Err(err) => {
                    report
                        .diagnostics
                        .push(Diagnostic::candidate_dropped(decl.name.clone(), err.to_string()));
                }
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use proxygen_model::{ClassKind, FunctionDecl, PropertyDecl};

    use crate::backend::MemoryBackend;

    use super::*;

    fn repo() -> ClassDecl {
        ClassDecl::new("Repo", "com.example", ClassKind::Interface)
            .annotation(PROXY_GEN_ANNOTATION)
            .property(PropertyDecl::new("flag", TypeRef::boolean()).mutable())
            .function(FunctionDecl::new("fetch").returns(TypeRef::string().nullable()))
            .source_file("src/Repo.kt")
    }

    #[test]
    fn test_is_candidate() {
        assert!(is_candidate(&repo()));
        let unmarked = ClassDecl::new("Plain", "com.example", ClassKind::Interface);
        assert!(!is_candidate(&unmarked));
    }

    #[test]
    fn test_register_dedup_first_wins() {
        let mut driver = EmissionDriver::new();
        assert!(driver.register(repo()));
        let impostor = ClassDecl::new("Repo", "com.other", ClassKind::Class);
        assert!(!driver.register(impostor));
        assert_eq!(driver.len(), 1);

        let mut backend = MemoryBackend::new();
        let report = driver.flush(&mut backend).unwrap();
        assert_eq!(report.generated, vec!["RepoProxy"]);
        // First registration's package, not the impostor's.
        assert_eq!(backend.sources()[0].package, "com.example");
    }

    #[test]
    fn test_flush_drains_worklist() {
        let mut driver = EmissionDriver::new();
        driver.register(repo());
        let mut backend = MemoryBackend::new();
        driver.flush(&mut backend).unwrap();
        assert!(driver.is_empty());

        let report = driver.flush(&mut backend).unwrap();
        assert!(report.generated.is_empty());
        assert_eq!(backend.sources().len(), 1);
    }

    #[test]
    fn test_unsupported_candidate_does_not_block_batch() {
        let mut driver = EmissionDriver::new();
        driver.register(ClassDecl::new("Color", "com.example", ClassKind::EnumClass));
        driver.register(repo());

        let mut backend = MemoryBackend::new();
        let report = driver.flush(&mut backend).unwrap();

        assert!(report.has_errors());
        assert_eq!(report.generated, vec!["RepoProxy"]);
        assert_eq!(backend.sources().len(), 1);
        let error = report.diagnostics.iter().find(|d| d.severity.is_error()).unwrap();
        assert_eq!(error.location, "Color");
    }

    #[test]
    fn test_unnamed_ctor_param_candidate_yields_no_output() {
        let mut driver = EmissionDriver::new();
        driver.register(
            ClassDecl::new("Base", "com.example", ClassKind::Class)
                .modifier(proxygen_model::Modifier::Abstract)
                .ctor_param(proxygen_model::ParamDecl::unnamed(TypeRef::string())),
        );

        let mut backend = MemoryBackend::new();
        let report = driver.flush(&mut backend).unwrap();

        assert!(report.has_errors());
        assert!(report.generated.is_empty());
        assert!(backend.sources().is_empty());
        assert_eq!(report.diagnostics[0].location, "Base");
    }

    #[test]
    fn test_unresolved_member_name_warns() {
        let decl = ClassDecl::new("Repo", "com.example", ClassKind::Interface)
            .function(FunctionDecl::new(""))
            .function(FunctionDecl::new("fetch").returns(TypeRef::string()));
        let generated = generate(&decl).unwrap();
        assert_eq!(generated.warnings.len(), 1);
        assert!(generated.source.content.contains("fun fetch()"));
    }

    #[test]
    fn test_private_member_skipped_silently() {
        let decl = ClassDecl::new("Repo", "com.example", ClassKind::Interface).function(
            FunctionDecl::new("onLoginCompleted")
                .modifier(proxygen_model::Modifier::Private)
                .with_body(),
        );
        let generated = generate(&decl).unwrap();
        assert!(generated.warnings.is_empty());
        assert!(!generated.source.content.contains("onLoginCompleted"));
    }

    #[test]
    fn test_dependencies_tie_output_to_source_file() {
        let generated = generate(&repo()).unwrap();
        assert!(generated.source.dependencies.aggregating);
        assert_eq!(
            generated.source.dependencies.sources,
            vec![std::path::PathBuf::from("src/Repo.kt")]
        );
    }
}
