//! Enterprise layout builder.
//!
//! Fixed, non-conditional deep tree modeled on the benavlabs
//! FastAPI-boilerplate: an `app` package with core/api/crud/models/schemas
//! subpackages, an alembic migration scaffold with an empty versions
//! directory, and a seeded test. Branching inside this layout is confined
//! to the packaging manifest and the Dockerfile variant; the database is
//! always Postgres here.

use crate::config::{Packaging, ProjectConfig};
use crate::core::{FastgenError, GeneratedFile};
use crate::resolver::ResolvedDependencySet;
use crate::templating::{self, Context};

use super::context::{alembic_command, base_context, uvicorn_command};
use super::packaging;

pub fn build(
    config: &ProjectConfig,
    deps: &ResolvedDependencySet,
) -> Result<Vec<GeneratedFile>, FastgenError> {
    let mut files = Vec::new();

    files.push(packaging::manifest_file(config, deps)?);

    files.push(GeneratedFile::new("app/__init__.py", ""));
    files.push(GeneratedFile::new(
        "app/main.py",
        templating::render("enterprise/main_py", &Context::new())?,
    ));

    files.push(GeneratedFile::new("app/core/__init__.py", ""));
    files.push(GeneratedFile::new(
        "app/core/config.py",
        templating::render("enterprise/core_config", &base_context(config))?,
    ));
    files.push(GeneratedFile::new(
        "app/core/database.py",
        templating::render("enterprise/core_database", &Context::new())?,
    ));
    files.push(GeneratedFile::new(
        "app/core/security.py",
        templating::render("enterprise/core_security", &Context::new())?,
    ));

    files.push(GeneratedFile::new("app/api/__init__.py", ""));
    files.push(GeneratedFile::new(
        "app/api/deps.py",
        templating::render("enterprise/api_deps", &Context::new())?,
    ));
    files.push(GeneratedFile::new(
        "app/api/main.py",
        templating::render("enterprise/api_router", &Context::new())?,
    ));
    files.push(GeneratedFile::new("app/api/v1/__init__.py", ""));
    files.push(GeneratedFile::new("app/api/v1/endpoints/__init__.py", ""));
    files.push(GeneratedFile::new(
        "app/api/v1/endpoints/users.py",
        templating::render("enterprise/users_endpoint", &Context::new())?,
    ));

    files.push(GeneratedFile::new(
        "app/crud/__init__.py",
        templating::render("enterprise/crud_init", &Context::new())?,
    ));
    files.push(GeneratedFile::new(
        "app/crud/base.py",
        templating::render("enterprise/crud_base", &Context::new())?,
    ));
    files.push(GeneratedFile::new(
        "app/crud/crud_user.py",
        templating::render("enterprise/crud_user", &Context::new())?,
    ));

    files.push(GeneratedFile::new(
        "app/models/__init__.py",
        templating::render("enterprise/models_init", &Context::new())?,
    ));
    files.push(GeneratedFile::new(
        "app/models/user.py",
        templating::render("enterprise/model_user", &Context::new())?,
    ));

    files.push(GeneratedFile::new(
        "app/schemas/__init__.py",
        templating::render("enterprise/schemas_init", &Context::new())?,
    ));
    files.push(GeneratedFile::new(
        "app/schemas/user.py",
        templating::render("enterprise/schema_user", &Context::new())?,
    ));

    files.push(GeneratedFile::new(
        "alembic/env.py",
        templating::render("enterprise/alembic_env", &Context::new())?,
    ));
    files.push(GeneratedFile::new("alembic/versions/.gitkeep", ""));

    files.push(GeneratedFile::new("tests/__init__.py", ""));
    files.push(GeneratedFile::new(
        "tests/test_users.py",
        templating::render("enterprise/test_users", &Context::new())?,
    ));

    files.push(GeneratedFile::new(
        "alembic.ini",
        templating::render("enterprise/alembic_ini", &Context::new())?,
    ));
    files.push(GeneratedFile::new(
        "Dockerfile",
        templating::render(dockerfile_template(config.packaging), &Context::new())?,
    ));
    files.push(GeneratedFile::new(
        "docker-compose.yml",
        templating::render("enterprise/docker_compose", &Context::new())?,
    ));
    files.push(GeneratedFile::new(
        "pytest.ini",
        templating::render("enterprise/pytest_ini", &Context::new())?,
    ));

    files.push(GeneratedFile::new(
        ".env",
        templating::render("enterprise/env", &base_context(config))?,
    ));
    files.push(GeneratedFile::new(
        ".env.example",
        templating::render("enterprise/env_example", &base_context(config))?,
    ));

    let mut readme_ctx = base_context(config);
    readme_ctx.insert("packaging_file", config.packaging.manifest_filename());
    readme_ctx.insert("install_cmd", config.packaging.install_command());
    readme_ctx.insert("migrate_cmd", &alembic_command(config, "upgrade head"));
    readme_ctx.insert(
        "revision_cmd",
        &alembic_command(config, "revision --autogenerate -m \"Description\""),
    );
    readme_ctx.insert("uvicorn_cmd", &uvicorn_command(config, "app.main:app"));
    files.push(GeneratedFile::new(
        "README.md",
        templating::render("enterprise/readme", &readme_ctx)?,
    ));

    let gitignore = format!(
        "{}{}",
        templating::render("common/gitignore", &Context::new())?,
        templating::render("enterprise/gitignore_extra", &Context::new())?,
    );
    files.push(GeneratedFile::new(".gitignore", gitignore));

    Ok(files)
}

/// Dockerfile text variant for the packaging manager; four mutually
/// exclusive templates, each naming that manager's manifest/lock inputs and
/// install command.
const fn dockerfile_template(packaging: Packaging) -> &'static str {
    match packaging {
        Packaging::Uv => "enterprise/dockerfile_uv",
        Packaging::Poetry => "enterprise/dockerfile_poetry",
        Packaging::Pipenv => "enterprise/dockerfile_pipenv",
        Packaging::Pip => "enterprise/dockerfile_pip",
    }
}
