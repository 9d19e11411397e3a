//! Project tree builder.
//!
//! Maps a resolved configuration to the full set of [`GeneratedFile`]s for
//! one of the three structure variants. The three branches are mutually
//! exclusive and dispatched exhaustively on [`Structure`]; file emission
//! order is the fixed traversal order of each branch, which the archive
//! writer preserves so identical inputs produce byte-identical archives.

pub mod context;
pub mod enterprise;
pub mod packaging;
pub mod simple;
pub mod structured;

use crate::config::{ProjectConfig, Structure};
use crate::core::{FastgenError, GeneratedFile};
use crate::resolver::{self, ResolvedDependencySet};

/// Build the complete file set for a configuration.
///
/// The effective selection is derived fresh here (manual picks plus any
/// structure-locked ids) and drives the conditional files; the resolved
/// dependency set drives manifest content.
pub fn build(
    config: &ProjectConfig,
    deps: &ResolvedDependencySet,
) -> Result<Vec<GeneratedFile>, FastgenError> {
    let selection = resolver::derive_effective_selection(config.structure, &config.dependencies)?;

    let files = match config.structure {
        Structure::Simple => simple::build(config, deps, &selection)?,
        Structure::Structured => structured::build(config, deps, &selection)?,
        Structure::Enterprise => enterprise::build(config, deps)?,
    };

    tracing::debug!(
        structure = %config.structure,
        files = files.len(),
        "built project tree"
    );

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Database, Packaging, ProjectConfig, PythonVersion};
    use crate::resolver;

    fn build_for(config: &ProjectConfig) -> Vec<GeneratedFile> {
        let deps = resolver::resolve(config).unwrap();
        build(config, &deps).unwrap()
    }

    const ALL_PACKAGING: [Packaging; 4] =
        [Packaging::Uv, Packaging::Poetry, Packaging::Pip, Packaging::Pipenv];
    const ALL_STRUCTURES: [Structure; 3] =
        [Structure::Simple, Structure::Structured, Structure::Enterprise];
    const ALL_DATABASES: [Database; 5] = [
        Database::None,
        Database::Postgres,
        Database::Mysql,
        Database::Mongodb,
        Database::Sqlite,
    ];

    #[test]
    fn test_no_duplicate_paths_across_all_combinations() {
        for structure in ALL_STRUCTURES {
            for packaging in ALL_PACKAGING {
                for database in ALL_DATABASES {
                    let config = ProjectConfig {
                        project_name: "combo".to_string(),
                        structure,
                        packaging,
                        database,
                        dependencies: vec![
                            "python_multipart".to_string(),
                            "passlib".to_string(),
                            "pytest".to_string(),
                        ],
                        ..ProjectConfig::default()
                    };
                    let files = build_for(&config);
                    let mut seen = std::collections::HashSet::new();
                    for file in &files {
                        assert!(
                            seen.insert(file.relative_path.clone()),
                            "duplicate path {} for {structure}/{packaging}/{database}",
                            file.relative_path
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let config = ProjectConfig {
            project_name: "determinism".to_string(),
            structure: Structure::Structured,
            packaging: Packaging::Poetry,
            database: Database::Postgres,
            dependencies: vec!["python_jose".to_string(), "redis".to_string()],
            ..ProjectConfig::default()
        };
        assert_eq!(build_for(&config), build_for(&config));
    }

    #[test]
    fn test_exactly_one_manifest_per_run() {
        for packaging in ALL_PACKAGING {
            let config = ProjectConfig {
                structure: Structure::Simple,
                packaging,
                ..ProjectConfig::default()
            };
            let files = build_for(&config);
            let manifests = files
                .iter()
                .filter(|f| {
                    matches!(
                        f.relative_path.as_str(),
                        "pyproject.toml" | "requirements.txt" | "Pipfile"
                    )
                })
                .count();
            assert_eq!(manifests, 1, "expected one manifest for {packaging}");
        }
    }

    // End-to-end example from the original tool: a minimal simple/pip
    // project is exactly five flat files with the two base packages.
    #[test]
    fn test_minimal_simple_project() {
        let config = ProjectConfig {
            project_name: "demo".to_string(),
            description: "A demo".to_string(),
            package_name: "app".to_string(),
            python_version: PythonVersion::Py312,
            structure: Structure::Simple,
            packaging: Packaging::Pip,
            database: Database::None,
            dependencies: vec![],
        };
        let files = build_for(&config);
        assert_eq!(files.len(), 5);
        let paths: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
        for expected in ["main.py", "requirements.txt", ".env", "README.md", ".gitignore"] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
        let manifest = files.iter().find(|f| f.relative_path == "requirements.txt").unwrap();
        assert_eq!(manifest.content.lines().collect::<Vec<_>>(), vec!["fastapi", "uvicorn[standard]"]);
    }

    // Companion end-to-end example: enterprise/uv forces Postgres, resolves
    // base + enterprise + driver with no duplicates, and emits the
    // uv-specific Dockerfile.
    #[test]
    fn test_enterprise_uv_project() {
        let config = ProjectConfig {
            project_name: "demo2".to_string(),
            structure: Structure::Enterprise,
            packaging: Packaging::Uv,
            database: Database::None,
            dependencies: vec![],
            ..ProjectConfig::default()
        };

        assert_eq!(config.effective_database(), Database::Postgres);

        let deps = resolver::resolve(&config).unwrap();
        assert_eq!(deps.len(), 12);
        let mut seen = std::collections::HashSet::new();
        for specifier in &deps {
            assert!(seen.insert(specifier.clone()));
        }

        let files = build_for(&config);
        let paths: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
        for expected in ["app/core/config.py", "app/models/user.py", "alembic.ini", "Dockerfile"] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
        let dockerfile = files.iter().find(|f| f.relative_path == "Dockerfile").unwrap();
        assert!(dockerfile.content.contains("uv sync"));
        assert!(!dockerfile.content.contains("poetry"));
        assert!(!dockerfile.content.contains("pipenv"));
        assert!(!dockerfile.content.contains("pip install"));
    }
}
