//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Resolve repository identity (explicit URL or `origin` remote)
//! 2. Build the render parameter set
//! 3. Locate template tiers for the classification
//! 4. Discover templates per tier (concurrent fan-out, joined before composition)
//! 5. Compose the destination → winning-entry mapping
//! 6. Render each winner into the working directory
//!
//! No step runs out of order and no step retries. A failure at any step
//! aborts the whole run; files already written by earlier render calls are
//! not rolled back; re-running against the working directory is cheap and
//! the tool does not own the directory it writes into.

use std::path::{Path, PathBuf};
use std::thread;

use tracing::{debug, info, instrument};

use crate::application::ports::{Filesystem, RemoteConfig, TierScanner};
use crate::application::services::{FileRenderer, TierLocator};
use crate::domain::{
    CompositionResult, ProjectClass, RenderParameters, RepositoryIdentity, TemplateEntry,
    TemplateTier,
};
use crate::error::{OssifyError, OssifyResult};

/// Everything one scaffold run needs as input.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    /// The working directory, assumed to be a local clone of the target
    /// repository. Rendered files land here.
    pub workdir: PathBuf,
    /// Chosen classification (from the questionnaire or a flag).
    pub class: ProjectClass,
    /// Root directory holding one subdirectory per tier.
    pub template_root: PathBuf,
    /// Explicit repository URL; when set, local remote lookup is skipped
    /// entirely.
    pub explicit_url: Option<String>,
    /// Calendar year for the render parameters.
    pub year: i32,
}

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub identity: RepositoryIdentity,
    /// Destination files written, sorted by path.
    pub written: Vec<PathBuf>,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    remote: Box<dyn RemoteConfig>,
    scanner: Box<dyn TierScanner>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        remote: Box<dyn RemoteConfig>,
        scanner: Box<dyn TierScanner>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            remote,
            scanner,
            filesystem,
        }
    }

    /// Run the full pipeline and write files.
    #[instrument(
        skip_all,
        fields(
            class = %request.class,
            workdir = %request.workdir.display(),
        )
    )]
    pub fn scaffold(&self, request: &ScaffoldRequest) -> OssifyResult<ScaffoldReport> {
        // 1. Identity
        let identity =
            self.resolve_identity(request.explicit_url.as_deref(), &request.workdir)?;
        info!(identity = %identity, "repository identity resolved");

        // 2. Parameters: built once, shared by every render call.
        let params = RenderParameters::new(&identity, request.year);

        // 3–5. Tiers, discovery, composition
        let composition = self.plan(request.class, &request.template_root)?;
        info!(files = composition.len(), "composition complete");

        // 6. Render
        let renderer = FileRenderer::new(self.filesystem.as_ref());
        let mut written = Vec::with_capacity(composition.len());
        for (_, entry) in composition.iter() {
            written.push(renderer.render(&request.workdir, entry, &params)?);
        }

        info!(files = written.len(), "scaffold completed");
        Ok(ScaffoldReport { identity, written })
    }

    /// Resolve the repository identity.
    ///
    /// An explicit URL wins outright: local configuration is never
    /// consulted and there is no fallback value. Otherwise the `origin`
    /// remote must yield a parseable URL or the run fails.
    pub fn resolve_identity(
        &self,
        explicit_url: Option<&str>,
        workdir: &Path,
    ) -> OssifyResult<RepositoryIdentity> {
        let url = match explicit_url {
            Some(url) => url.to_owned(),
            None => self.remote.origin_url(workdir)?,
        };
        Ok(RepositoryIdentity::parse(&url)?)
    }

    /// Locate tiers, discover their templates, and compose, without
    /// rendering anything. Also the backing for the `plan` preview command.
    #[instrument(skip_all, fields(class = %class))]
    pub fn plan(
        &self,
        class: ProjectClass,
        template_root: &Path,
    ) -> OssifyResult<CompositionResult> {
        let tiers = TierLocator::new(template_root, self.filesystem.as_ref()).locate(class);
        debug!(tiers = tiers.len(), "tiers located");

        let discovered = self.discover_all(&tiers)?;
        Ok(CompositionResult::compose(discovered))
    }

    /// Scan every tier, concurrently, and join the results in tier order.
    ///
    /// Scans are independent and read-only, so they fan out on scoped
    /// threads; the ordering guarantee that matters is re-established at
    /// the join: results come back indexed by tier rank, which is what
    /// composition folds over.
    fn discover_all(&self, tiers: &[TemplateTier]) -> OssifyResult<Vec<Vec<TemplateEntry>>> {
        thread::scope(|scope| {
            let handles: Vec<_> = tiers
                .iter()
                .map(|tier| scope.spawn(move || self.scanner.scan(tier)))
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle.join().unwrap_or_else(|_| {
                        Err(OssifyError::Internal {
                            message: "tier scan thread panicked".into(),
                        })
                    })
                })
                .collect()
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use std::collections::HashMap;
    use std::sync::{Arc, RwLock};

    // ── fakes ─────────────────────────────────────────────────────────────

    struct FixedRemote(Option<String>);

    impl RemoteConfig for FixedRemote {
        fn origin_url(&self, workdir: &Path) -> OssifyResult<String> {
            self.0.clone().ok_or_else(|| {
                ApplicationError::IdentityResolution {
                    workdir: workdir.to_path_buf(),
                    reason: "no origin remote configured".into(),
                }
                .into()
            })
        }
    }

    /// Remote that panics when consulted; proves explicit URLs short-circuit.
    struct UnreachableRemote;

    impl RemoteConfig for UnreachableRemote {
        fn origin_url(&self, _: &Path) -> OssifyResult<String> {
            panic!("explicit URL must never consult the remote");
        }
    }

    /// Scanner serving canned entries per tier name.
    struct CannedScanner(HashMap<String, Vec<(&'static str, &'static str)>>);

    impl CannedScanner {
        fn new(tiers: &[(&str, &[(&'static str, &'static str)])]) -> Self {
            Self(
                tiers
                    .iter()
                    .map(|(name, files)| (name.to_string(), files.to_vec()))
                    .collect(),
            )
        }
    }

    impl TierScanner for CannedScanner {
        fn scan(&self, tier: &TemplateTier) -> OssifyResult<Vec<TemplateEntry>> {
            let files = self.0.get(tier.name()).cloned().unwrap_or_default();
            Ok(files
                .into_iter()
                .map(|(marked, _)| {
                    TemplateEntry::from_tier_relative(
                        tier.path().join(marked),
                        Path::new(marked),
                    )
                    .expect("canned entries carry the marker")
                })
                .collect())
        }
    }

    /// In-memory filesystem: directories that exist + file contents.
    /// Cloneable (shared inner state) so tests can inspect writes after
    /// handing a copy to the service.
    #[derive(Default, Clone)]
    struct FakeFs {
        inner: Arc<FakeFsInner>,
    }

    #[derive(Default)]
    struct FakeFsInner {
        dirs: Vec<PathBuf>,
        files: RwLock<HashMap<PathBuf, String>>,
    }

    impl FakeFs {
        fn new(dirs: &[&str], files: &[(&str, &str)]) -> Self {
            Self {
                inner: Arc::new(FakeFsInner {
                    dirs: dirs.iter().map(PathBuf::from).collect(),
                    files: RwLock::new(
                        files
                            .iter()
                            .map(|(p, c)| (PathBuf::from(p), c.to_string()))
                            .collect(),
                    ),
                }),
            }
        }

        fn read(&self, path: &str) -> Option<String> {
            self.inner.files.read().unwrap().get(Path::new(path)).cloned()
        }

        fn file_count(&self, under: &str) -> usize {
            self.inner
                .files
                .read()
                .unwrap()
                .keys()
                .filter(|p| p.starts_with(under))
                .count()
        }
    }

    impl Filesystem for FakeFs {
        fn read_to_string(&self, path: &Path) -> OssifyResult<String> {
            self.inner.files.read().unwrap().get(path).cloned().ok_or_else(|| {
                ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "no such file".into(),
                }
                .into()
            })
        }
        fn write_file(&self, path: &Path, content: &str) -> OssifyResult<()> {
            self.inner
                .files
                .write()
                .unwrap()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }
        fn create_dir_all(&self, _: &Path) -> OssifyResult<()> {
            Ok(())
        }
        fn exists(&self, path: &Path) -> bool {
            self.inner.dirs.iter().any(|d| d == path)
                || self.inner.files.read().unwrap().contains_key(path)
        }
    }

    fn request() -> ScaffoldRequest {
        ScaffoldRequest {
            workdir: "/work".into(),
            class: ProjectClass::Library,
            template_root: "/templates".into(),
            explicit_url: Some("git@github.com:acme/Widget.git".into()),
            year: 2026,
        }
    }

    // ── scenarios ─────────────────────────────────────────────────────────

    #[test]
    fn end_to_end_composes_and_renders_with_override() {
        // common{README, LICENSE} + library{README, composer.json}
        // → README from library, LICENSE from common, composer.json from library.
        let scanner = CannedScanner::new(&[
            ("common", &[("_README.md", ""), ("_LICENSE", "")]),
            ("library", &[("_README.md", ""), ("_composer.json", "")]),
        ]);
        let fs = FakeFs::new(
            &["/templates/common", "/templates/library"],
            &[
                ("/templates/common/_README.md", "common readme {{PROJECT}}"),
                ("/templates/common/_LICENSE", "© {{YEAR}} {{ORGANIZATION}}"),
                ("/templates/library/_README.md", "library readme {{PROJECT}}"),
                ("/templates/library/_composer.json", "\"name\": \"{{PACKAGE_NAME}}\""),
            ],
        );
        let service = ScaffoldService::new(
            Box::new(UnreachableRemote),
            Box::new(scanner),
            Box::new(fs.clone()),
        );

        let report = service.scaffold(&request()).unwrap();

        assert_eq!(report.identity.to_string(), "acme/Widget");
        assert_eq!(
            report.written,
            vec![
                PathBuf::from("/work/LICENSE"),
                PathBuf::from("/work/README.md"),
                PathBuf::from("/work/composer.json"),
            ]
        );

        assert_eq!(fs.read("/work/README.md").unwrap(), "library readme Widget");
        assert_eq!(fs.read("/work/LICENSE").unwrap(), "© 2026 acme");
        assert_eq!(fs.read("/work/composer.json").unwrap(), "\"name\": \"acme/widget\"");
    }

    #[test]
    fn explicit_url_never_consults_remote() {
        let service = ScaffoldService::new(
            Box::new(UnreachableRemote),
            Box::new(CannedScanner::new(&[])),
            Box::new(FakeFs::default()),
        );

        let identity = service
            .resolve_identity(Some("https://github.com/org/Proj"), Path::new("/work"))
            .unwrap();
        assert_eq!(identity.organization(), "org");
        assert_eq!(identity.project(), "Proj");
    }

    #[test]
    fn detection_failure_aborts_before_any_write() {
        let fs = FakeFs::new(
            &["/templates/common"],
            &[("/templates/common/_LICENSE", "© {{YEAR}}")],
        );
        let service = ScaffoldService::new(
            Box::new(FixedRemote(None)),
            Box::new(CannedScanner::new(&[("common", &[("_LICENSE", "")])])),
            Box::new(fs.clone()),
        );

        let mut req = request();
        req.explicit_url = None;
        let err = service.scaffold(&req).unwrap_err();

        assert!(matches!(
            err,
            OssifyError::Application(ApplicationError::IdentityResolution { .. })
        ));
        assert_eq!(fs.file_count("/work"), 0);
    }

    #[test]
    fn detected_url_flows_into_identity() {
        let service = ScaffoldService::new(
            Box::new(FixedRemote(Some("git@github.com:detected/repo.git".into()))),
            Box::new(CannedScanner::new(&[])),
            Box::new(FakeFs::default()),
        );

        let identity = service.resolve_identity(None, Path::new("/work")).unwrap();
        assert_eq!(identity.to_string(), "detected/repo");
    }

    #[test]
    fn missing_classification_tier_plans_common_only() {
        let scanner = CannedScanner::new(&[("common", &[("_LICENSE", "")])]);
        // Only common exists on disk.
        let fs = FakeFs::new(&["/templates/common"], &[]);
        let service =
            ScaffoldService::new(Box::new(UnreachableRemote), Box::new(scanner), Box::new(fs));

        let plan = service
            .plan(ProjectClass::Library, Path::new("/templates"))
            .unwrap();

        assert_eq!(plan.len(), 1);
        assert!(plan.get(Path::new("LICENSE")).is_some());
    }

    #[test]
    fn tier_scan_failure_aborts_the_run() {
        struct FailingScanner;
        impl TierScanner for FailingScanner {
            fn scan(&self, tier: &TemplateTier) -> OssifyResult<Vec<TemplateEntry>> {
                Err(ApplicationError::TierRead {
                    path: tier.path().to_path_buf(),
                    reason: "permission denied".into(),
                }
                .into())
            }
        }

        let fs = FakeFs::new(&["/templates/common"], &[]);
        let service = ScaffoldService::new(
            Box::new(UnreachableRemote),
            Box::new(FailingScanner),
            Box::new(fs),
        );

        let err = service.scaffold(&request()).unwrap_err();
        assert!(matches!(
            err,
            OssifyError::Application(ApplicationError::TierRead { .. })
        ));
    }
}
