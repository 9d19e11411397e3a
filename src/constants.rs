//! Global constants used throughout the fastgen codebase.
//!
//! Package specifiers and default values that are shared across the
//! resolver, tree builder, and CLI. Defining them centrally keeps the
//! dependency lists discoverable and the defaults in one place.

/// Base specifiers present in every generated project, in emission order.
///
/// The web framework and the ASGI server (with its standard extras) anchor
/// every manifest regardless of structure, packaging, or database choice.
pub const BASE_DEPENDENCIES: [&str; 2] = ["fastapi", "uvicorn[standard]"];

/// Environment-file loader added by the structured layout.
pub const DOTENV_SPECIFIER: &str = "python-dotenv";

/// Specifiers mandated by the enterprise layout, in emission order.
///
/// ORM with async extra, migration tool, settings management, JWT auth,
/// password hashing, multipart parsing, email validation, async Postgres
/// driver, structured logging. The resolver appends any of these not already
/// present; the selection layer locks the matching catalog ids.
pub const ENTERPRISE_SPECIFIERS: [&str; 9] = [
    "sqlalchemy[asyncio]",
    "alembic",
    "pydantic-settings",
    "python-jose[cryptography]",
    "passlib[bcrypt]",
    "python-multipart",
    "email-validator",
    "asyncpg",
    "structlog",
];

/// Catalog ids locked (forced-selected and non-removable) by the enterprise
/// layout. Parallel to [`ENTERPRISE_SPECIFIERS`].
pub const ENTERPRISE_IDS: [&str; 9] = [
    "sqlalchemy",
    "alembic",
    "pydantic_settings",
    "python_jose",
    "passlib",
    "python_multipart",
    "email_validator",
    "asyncpg",
    "structlog",
];

/// Catalog ids that cause the structured layout to emit an authentication
/// router: JWT libraries and the password-hashing library.
pub const AUTH_TRIGGER_IDS: [&str; 3] = ["python_jose", "pyjwt", "passlib"];

/// Catalog id whose presence wires CORS middleware into the simple layout's
/// entry point.
pub const CORS_TRIGGER_ID: &str = "python_multipart";

/// Default project name used by `fastgen init` and flag defaults.
pub const DEFAULT_PROJECT_NAME: &str = "my-fastapi-project";

/// Default project description.
pub const DEFAULT_DESCRIPTION: &str = "A FastAPI application";

/// Default package name, used only in command-preview text.
pub const DEFAULT_PACKAGE_NAME: &str = "app";

/// File name written by `fastgen init` and read by `--config`.
pub const CONFIG_FILE_NAME: &str = "fastgen.toml";
