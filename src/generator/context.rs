//! Template context construction.
//!
//! All branching decisions are made here, in typed Rust, before rendering
//! starts: templates receive precomputed booleans and command strings and
//! are limited to substitution and simple conditionals.

use tera::Context;

use crate::config::ProjectConfig;

/// Context shared by every template: project identity plus the enum labels.
pub fn base_context(config: &ProjectConfig) -> Context {
    let mut ctx = Context::new();
    ctx.insert("project_name", &config.project_name);
    ctx.insert("description", &config.description);
    ctx.insert("package_name", &config.package_name);
    ctx.insert("python_version", config.python_version.as_str());
    ctx.insert("packaging", config.packaging.label());
    ctx.insert("database", config.effective_database().label());
    ctx
}

/// `uvicorn` invocation for the given app target (e.g. `main:app`),
/// prefixed with the packaging manager's runner.
pub fn uvicorn_command(config: &ProjectConfig, target: &str) -> String {
    format!("{}uvicorn {target} --reload", config.packaging.run_prefix())
}

/// `python -m` invocation prefixed with the packaging manager's runner.
pub fn run_module_command(config: &ProjectConfig, module: &str) -> String {
    format!("{}python -m {module}", config.packaging.run_prefix())
}

/// `alembic` invocation prefixed with the packaging manager's runner.
pub fn alembic_command(config: &ProjectConfig, args: &str) -> String {
    format!("{}alembic {args}", config.packaging.run_prefix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Packaging, ProjectConfig};

    #[test]
    fn test_commands_carry_run_prefix() {
        let config = ProjectConfig {
            packaging: Packaging::Poetry,
            ..ProjectConfig::default()
        };
        assert_eq!(uvicorn_command(&config, "main:app"), "poetry run uvicorn main:app --reload");
        assert_eq!(run_module_command(&config, "src.main"), "poetry run python -m src.main");
        assert_eq!(alembic_command(&config, "upgrade head"), "poetry run alembic upgrade head");
    }

    #[test]
    fn test_pip_has_no_prefix() {
        let config = ProjectConfig {
            packaging: Packaging::Pip,
            ..ProjectConfig::default()
        };
        assert_eq!(uvicorn_command(&config, "main:app"), "uvicorn main:app --reload");
    }

    #[test]
    fn test_base_context_uses_effective_database() {
        use crate::config::{Database, Structure};
        let config = ProjectConfig {
            structure: Structure::Enterprise,
            database: Database::None,
            ..ProjectConfig::default()
        };
        let ctx = base_context(&config);
        assert_eq!(ctx.get("database").unwrap().as_str(), Some("postgres"));
    }
}
