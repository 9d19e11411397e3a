//! Packaging manifest selection.
//!
//! Exactly one manifest file is emitted per run, keyed by the packaging
//! manager. Dev-only additions (test tooling when `pytest` is not a manual
//! pick, plus formatter and linter) are decided here at render time and
//! never touch the production dependency list.

use tera::Context;

use crate::config::{Packaging, ProjectConfig};
use crate::core::{FastgenError, GeneratedFile};
use crate::resolver::ResolvedDependencySet;
use crate::templating;

use super::context::base_context;

/// Build the manifest file for the configured packaging manager.
pub fn manifest_file(
    config: &ProjectConfig,
    deps: &ResolvedDependencySet,
) -> Result<GeneratedFile, FastgenError> {
    let template_id = match config.packaging {
        Packaging::Uv => "common/packaging/uv",
        Packaging::Poetry => "common/packaging/poetry",
        Packaging::Pip => "common/packaging/requirements",
        Packaging::Pipenv => "common/packaging/pipfile",
    };

    let content = templating::render(template_id, &manifest_context(config, deps))?;
    Ok(GeneratedFile::new(config.packaging.manifest_filename(), content))
}

fn manifest_context(config: &ProjectConfig, deps: &ResolvedDependencySet) -> Context {
    let mut ctx = base_context(config);
    ctx.insert("dependencies", deps.specifiers());
    // Skip the dev test-tooling lines when the user already picked pytest.
    ctx.insert("dev_testing", &!config.dependencies.iter().any(|id| id == "pytest"));
    // uv build-target stanza names the package directory; the flat simple
    // layout has none (empty string renders as falsy).
    ctx.insert("package_dir", config.structure.package_dir().unwrap_or(""));
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Database, Packaging, ProjectConfig, PythonVersion, Structure};
    use crate::resolver;

    fn config_for(packaging: Packaging, structure: Structure) -> ProjectConfig {
        ProjectConfig {
            project_name: "demo".to_string(),
            packaging,
            structure,
            python_version: PythonVersion::Py311,
            database: Database::None,
            ..ProjectConfig::default()
        }
    }

    fn manifest(config: &ProjectConfig) -> GeneratedFile {
        let deps = resolver::resolve(config).unwrap();
        manifest_file(config, &deps).unwrap()
    }

    #[test]
    fn test_pip_manifest_is_bare_specifier_list() {
        let file = manifest(&config_for(Packaging::Pip, Structure::Simple));
        assert_eq!(file.relative_path, "requirements.txt");
        let lines: Vec<&str> = file.content.lines().collect();
        assert_eq!(lines, vec!["fastapi", "uvicorn[standard]"]);
    }

    #[test]
    fn test_poetry_manifest_shape() {
        let file = manifest(&config_for(Packaging::Poetry, Structure::Simple));
        assert_eq!(file.relative_path, "pyproject.toml");
        assert!(file.content.contains("[tool.poetry]"));
        assert!(file.content.contains("python = \"^3.11\""));
        assert!(file.content.contains("fastapi = \"*\""));
        assert!(file.content.contains("uvicorn[standard] = \"*\""));
        assert!(file.content.contains("[tool.poetry.group.dev.dependencies]"));
        assert!(file.content.contains("pytest = \"*\""));
        assert!(file.content.contains("ruff = \"*\""));
    }

    #[test]
    fn test_pipenv_manifest_shape() {
        let file = manifest(&config_for(Packaging::Pipenv, Structure::Simple));
        assert_eq!(file.relative_path, "Pipfile");
        assert!(file.content.contains("[[source]]"));
        assert!(file.content.contains("[packages]"));
        assert!(file.content.contains("[dev-packages]"));
        assert!(file.content.contains("python_version = \"3.11\""));
    }

    #[test]
    fn test_uv_manifest_shape() {
        let file = manifest(&config_for(Packaging::Uv, Structure::Simple));
        assert_eq!(file.relative_path, "pyproject.toml");
        assert!(file.content.contains("requires-python = \">=3.11\""));
        assert!(file.content.contains("    \"fastapi\","));
        assert!(file.content.contains("[tool.uv]"));
        assert!(file.content.contains("[build-system]"));
    }

    #[test]
    fn test_uv_build_target_only_for_package_layouts() {
        let simple = manifest(&config_for(Packaging::Uv, Structure::Simple));
        assert!(!simple.content.contains("[tool.hatch.build.targets.wheel]"));

        let structured = manifest(&config_for(Packaging::Uv, Structure::Structured));
        assert!(structured.content.contains("[tool.hatch.build.targets.wheel]"));
        assert!(structured.content.contains("packages = [\"src\"]"));

        let enterprise = manifest(&config_for(Packaging::Uv, Structure::Enterprise));
        assert!(enterprise.content.contains("packages = [\"app\"]"));
    }

    #[test]
    fn test_user_selected_pytest_skips_dev_testing_lines() {
        let mut config = config_for(Packaging::Poetry, Structure::Simple);
        config.dependencies = vec!["pytest".to_string()];
        let file = manifest(&config);
        // pytest appears once, in the production list, not in the dev group
        assert_eq!(file.content.matches("pytest = \"*\"").count(), 1);
        assert!(!file.content.contains("pytest-asyncio = \"*\""));
        assert!(file.content.contains("black = \"*\""));
    }

    #[test]
    fn test_dev_additions_do_not_leak_into_production_list() {
        let config = config_for(Packaging::Pip, Structure::Simple);
        let deps = resolver::resolve(&config).unwrap();
        manifest_file(&config, &deps).unwrap();
        assert!(!deps.contains("black"));
        assert!(!deps.contains("ruff"));
    }
}
