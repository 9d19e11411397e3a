//! Template engine for generated project files.
//!
//! Tera-based rendering over a fixed registry of templates embedded at
//! compile time with `include_str!`. The engine is compiled once per process
//! and memoized (`OnceLock`); rendering is pure - the same template id and
//! context always produce the same output - and an unregistered template id
//! fails loudly with a distinct error.
//!
//! Decisions live in Rust, not in templates: the tree builder precomputes
//! booleans (`has_cors`, `has_auth`, `has_database`) and command strings and
//! passes them in the context, keeping templates to plain substitution and
//! simple conditionals.
//!
//! # Custom Filters
//!
//! - `snake_case`: replace hyphens with underscores. Total - non-string
//!   input renders as the empty string rather than failing.

pub mod filters;

use std::sync::OnceLock;

use tera::Tera;

use crate::core::FastgenError;

pub use tera::Context;

/// All registered templates: `(template id, source)`.
///
/// Ids mirror the generated tree: `common/` for structure-independent files,
/// one group per structure variant.
const TEMPLATES: &[(&str, &str)] = &[
    ("common/gitignore", include_str!("../../templates/common/gitignore.tera")),
    ("common/packaging/requirements", include_str!("../../templates/common/packaging/requirements.tera")),
    ("common/packaging/poetry", include_str!("../../templates/common/packaging/poetry.tera")),
    ("common/packaging/uv", include_str!("../../templates/common/packaging/uv.tera")),
    ("common/packaging/pipfile", include_str!("../../templates/common/packaging/pipfile.tera")),
    ("simple/main_py", include_str!("../../templates/simple/main_py.tera")),
    ("simple/env", include_str!("../../templates/simple/env.tera")),
    ("simple/readme", include_str!("../../templates/simple/readme.tera")),
    ("structured/main_py", include_str!("../../templates/structured/main_py.tera")),
    ("structured/config_py", include_str!("../../templates/structured/config_py.tera")),
    ("structured/health_router", include_str!("../../templates/structured/health_router.tera")),
    ("structured/auth_router", include_str!("../../templates/structured/auth_router.tera")),
    ("structured/env", include_str!("../../templates/structured/env.tera")),
    ("structured/readme", include_str!("../../templates/structured/readme.tera")),
    ("enterprise/main_py", include_str!("../../templates/enterprise/main_py.tera")),
    ("enterprise/core_config", include_str!("../../templates/enterprise/core_config.tera")),
    ("enterprise/core_database", include_str!("../../templates/enterprise/core_database.tera")),
    ("enterprise/core_security", include_str!("../../templates/enterprise/core_security.tera")),
    ("enterprise/api_deps", include_str!("../../templates/enterprise/api_deps.tera")),
    ("enterprise/api_router", include_str!("../../templates/enterprise/api_router.tera")),
    ("enterprise/users_endpoint", include_str!("../../templates/enterprise/users_endpoint.tera")),
    ("enterprise/crud_init", include_str!("../../templates/enterprise/crud_init.tera")),
    ("enterprise/crud_base", include_str!("../../templates/enterprise/crud_base.tera")),
    ("enterprise/crud_user", include_str!("../../templates/enterprise/crud_user.tera")),
    ("enterprise/models_init", include_str!("../../templates/enterprise/models_init.tera")),
    ("enterprise/model_user", include_str!("../../templates/enterprise/model_user.tera")),
    ("enterprise/schemas_init", include_str!("../../templates/enterprise/schemas_init.tera")),
    ("enterprise/schema_user", include_str!("../../templates/enterprise/schema_user.tera")),
    ("enterprise/alembic_env", include_str!("../../templates/enterprise/alembic_env.tera")),
    ("enterprise/alembic_ini", include_str!("../../templates/enterprise/alembic_ini.tera")),
    ("enterprise/dockerfile_uv", include_str!("../../templates/enterprise/dockerfile_uv.tera")),
    ("enterprise/dockerfile_poetry", include_str!("../../templates/enterprise/dockerfile_poetry.tera")),
    ("enterprise/dockerfile_pipenv", include_str!("../../templates/enterprise/dockerfile_pipenv.tera")),
    ("enterprise/dockerfile_pip", include_str!("../../templates/enterprise/dockerfile_pip.tera")),
    ("enterprise/docker_compose", include_str!("../../templates/enterprise/docker_compose.tera")),
    ("enterprise/pytest_ini", include_str!("../../templates/enterprise/pytest_ini.tera")),
    ("enterprise/env", include_str!("../../templates/enterprise/env.tera")),
    ("enterprise/env_example", include_str!("../../templates/enterprise/env_example.tera")),
    ("enterprise/gitignore_extra", include_str!("../../templates/enterprise/gitignore_extra.tera")),
    ("enterprise/readme", include_str!("../../templates/enterprise/readme.tera")),
    ("enterprise/test_users", include_str!("../../templates/enterprise/test_users.tera")),
];

/// Compiled engine, built on first use and shared for the process lifetime.
static ENGINE: OnceLock<Tera> = OnceLock::new();

/// Build or fetch the compiled engine.
///
/// Template sources are compile-time constants, so a compilation failure is
/// a packaging defect; it is still surfaced as an error rather than a panic.
fn engine() -> Result<&'static Tera, FastgenError> {
    if let Some(tera) = ENGINE.get() {
        return Ok(tera);
    }

    let mut tera = Tera::default();
    // Generated files are Python/TOML/Docker text, never HTML.
    tera.autoescape_on(vec![]);
    tera.register_filter("snake_case", filters::snake_case);
    tera.add_raw_templates(TEMPLATES.to_vec()).map_err(|e| {
        FastgenError::TemplateRender {
            template_id: "<registry>".to_string(),
            source: e,
        }
    })?;

    // A racing thread may have initialized first; either value is identical.
    Ok(ENGINE.get_or_init(|| tera))
}

/// Whether a template id is registered.
#[must_use]
pub fn is_registered(template_id: &str) -> bool {
    TEMPLATES.iter().any(|(id, _)| *id == template_id)
}

/// Render a registered template with the given context.
///
/// # Errors
///
/// [`FastgenError::TemplateNotFound`] for an unregistered id;
/// [`FastgenError::TemplateRender`] if the engine fails on a registered one.
pub fn render(template_id: &str, context: &Context) -> Result<String, FastgenError> {
    if !is_registered(template_id) {
        return Err(FastgenError::TemplateNotFound {
            template_id: template_id.to_string(),
        });
    }

    engine()?.render(template_id, context).map_err(|e| {
        FastgenError::TemplateRender {
            template_id: template_id.to_string(),
            source: e,
        }
    })
}
