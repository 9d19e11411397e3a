//! Simple (flat) layout builder.
//!
//! One packaging manifest, an entry point with CORS wiring when the
//! multipart id is selected, an environment file, a readme, and a
//! gitignore. No subdirectories.

use crate::config::ProjectConfig;
use crate::constants::CORS_TRIGGER_ID;
use crate::core::{FastgenError, GeneratedFile};
use crate::resolver::{EffectiveSelection, ResolvedDependencySet};
use crate::templating::{self, Context};

use super::context::{base_context, uvicorn_command};
use super::packaging;

pub fn build(
    config: &ProjectConfig,
    deps: &ResolvedDependencySet,
    selection: &EffectiveSelection,
) -> Result<Vec<GeneratedFile>, FastgenError> {
    let mut files = Vec::new();

    files.push(packaging::manifest_file(config, deps)?);

    let mut main_ctx = base_context(config);
    main_ctx.insert("has_cors", &selection.contains(CORS_TRIGGER_ID));
    files.push(GeneratedFile::new("main.py", templating::render("simple/main_py", &main_ctx)?));

    files.push(GeneratedFile::new(".env", templating::render("simple/env", &base_context(config))?));

    let mut readme_ctx = base_context(config);
    readme_ctx.insert("install_cmd", config.packaging.install_command());
    readme_ctx.insert("run_cmd", &uvicorn_command(config, "main:app"));
    files.push(GeneratedFile::new("README.md", templating::render("simple/readme", &readme_ctx)?));

    files.push(GeneratedFile::new(".gitignore", templating::render("common/gitignore", &Context::new())?));

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Database, Packaging, ProjectConfig, Structure};
    use crate::resolver;

    fn build_for(config: &ProjectConfig) -> Vec<GeneratedFile> {
        let deps = resolver::resolve(config).unwrap();
        let selection =
            resolver::derive_effective_selection(config.structure, &config.dependencies).unwrap();
        build(config, &deps, &selection).unwrap()
    }

    fn demo_config() -> ProjectConfig {
        ProjectConfig {
            project_name: "demo".to_string(),
            structure: Structure::Simple,
            packaging: Packaging::Pip,
            database: Database::None,
            ..ProjectConfig::default()
        }
    }

    #[test]
    fn test_exactly_five_files() {
        let files = build_for(&demo_config());
        let paths: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(paths, vec!["requirements.txt", "main.py", ".env", "README.md", ".gitignore"]);
    }

    #[test]
    fn test_requirements_contains_only_base_specifiers() {
        let files = build_for(&demo_config());
        let manifest = files.iter().find(|f| f.relative_path == "requirements.txt").unwrap();
        let lines: Vec<&str> = manifest.content.lines().collect();
        assert_eq!(lines, vec!["fastapi", "uvicorn[standard]"]);
    }

    #[test]
    fn test_cors_wiring_iff_multipart_selected() {
        let without = build_for(&demo_config());
        let main_py = without.iter().find(|f| f.relative_path == "main.py").unwrap();
        assert!(!main_py.content.contains("CORSMiddleware"));

        let mut config = demo_config();
        config.dependencies = vec!["python_multipart".to_string()];
        let with = build_for(&config);
        let main_py = with.iter().find(|f| f.relative_path == "main.py").unwrap();
        assert!(main_py.content.contains("from fastapi.middleware.cors import CORSMiddleware"));
        assert!(main_py.content.contains("app.add_middleware("));
    }

    #[test]
    fn test_readme_commands_track_packaging() {
        let mut config = demo_config();
        config.packaging = Packaging::Uv;
        let files = build_for(&config);
        let readme = files.iter().find(|f| f.relative_path == "README.md").unwrap();
        assert!(readme.content.contains("uv sync"));
        assert!(readme.content.contains("uv run uvicorn main:app --reload"));
    }

    #[test]
    fn test_main_py_carries_project_identity() {
        let files = build_for(&demo_config());
        let main_py = files.iter().find(|f| f.relative_path == "main.py").unwrap();
        assert!(main_py.content.contains("title=\"demo\""));
        assert!(main_py.content.contains("Welcome to demo"));
    }
}
