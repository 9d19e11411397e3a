//! The curated dependency catalog.
//!
//! Static, process-wide, read-only reference data: every package a user can
//! pick, with its stable id, display name, the exact specifier written into
//! manifest files, and its category. Catalog order is significant - the
//! resolver emits user picks in catalog-definition order so manifests are
//! reproducible regardless of selection order.

use clap::ValueEnum;
use serde::Serialize;
use strsim::levenshtein;

use crate::core::FastgenError;

/// Category a catalog entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Database,
    Auth,
    Api,
    Testing,
    Monitoring,
    Async,
    Config,
    Templates,
    Validation,
    Utils,
}

impl Category {
    /// Lowercase label used in table output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Auth => "auth",
            Self::Api => "api",
            Self::Testing => "testing",
            Self::Monitoring => "monitoring",
            Self::Async => "async",
            Self::Config => "config",
            Self::Templates => "templates",
            Self::Validation => "validation",
            Self::Utils => "utils",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry in the dependency catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Unique, stable identifier (snake_case).
    pub id: &'static str,
    /// Human-readable name for CLI listings.
    pub display_name: &'static str,
    /// Exact string written into manifest files (may carry extras syntax,
    /// e.g. `passlib[bcrypt]`).
    pub specifier: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Category for filtering.
    pub category: Category,
}

/// The full curated catalog, in definition order.
pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry { id: "sqlalchemy", display_name: "SQLAlchemy", specifier: "sqlalchemy", description: "SQL toolkit and ORM", category: Category::Database },
    CatalogEntry { id: "alembic", display_name: "Alembic", specifier: "alembic", description: "Database migration tool", category: Category::Database },
    CatalogEntry { id: "tortoise_orm", display_name: "Tortoise ORM", specifier: "tortoise-orm", description: "Async ORM inspired by Django", category: Category::Database },
    CatalogEntry { id: "sqlmodel", display_name: "SQLModel", specifier: "sqlmodel", description: "SQL databases with Python types", category: Category::Database },
    CatalogEntry { id: "databases", display_name: "Databases", specifier: "databases", description: "Async database support", category: Category::Database },
    CatalogEntry { id: "motor", display_name: "Motor", specifier: "motor", description: "Async MongoDB driver", category: Category::Database },
    CatalogEntry { id: "redis", display_name: "Redis", specifier: "redis", description: "Redis client for caching", category: Category::Database },
    CatalogEntry { id: "pymongo", display_name: "PyMongo", specifier: "pymongo", description: "MongoDB driver", category: Category::Database },
    CatalogEntry { id: "psycopg2_binary", display_name: "Psycopg2", specifier: "psycopg2-binary", description: "PostgreSQL adapter", category: Category::Database },
    CatalogEntry { id: "asyncpg", display_name: "AsyncPG", specifier: "asyncpg", description: "Fast PostgreSQL driver", category: Category::Database },
    CatalogEntry { id: "aiomysql", display_name: "AioMySQL", specifier: "aiomysql", description: "Async MySQL driver", category: Category::Database },
    CatalogEntry { id: "python_jose", display_name: "JWT Auth", specifier: "python-jose[cryptography]", description: "JSON Web Token authentication", category: Category::Auth },
    CatalogEntry { id: "passlib", display_name: "Passlib", specifier: "passlib[bcrypt]", description: "Secure password hashing", category: Category::Auth },
    CatalogEntry { id: "authlib", display_name: "Authlib", specifier: "authlib", description: "OAuth and OpenID Connect", category: Category::Auth },
    CatalogEntry { id: "pyjwt", display_name: "PyJWT", specifier: "pyjwt", description: "JWT implementation", category: Category::Auth },
    CatalogEntry { id: "python_multipart", display_name: "Multipart", specifier: "python-multipart", description: "Form data parsing", category: Category::Auth },
    CatalogEntry { id: "httpx", display_name: "HTTPX", specifier: "httpx", description: "Async HTTP client", category: Category::Api },
    CatalogEntry { id: "requests", display_name: "Requests", specifier: "requests", description: "HTTP library", category: Category::Api },
    CatalogEntry { id: "aiohttp", display_name: "Aiohttp", specifier: "aiohttp", description: "Async HTTP client/server", category: Category::Api },
    CatalogEntry { id: "websockets", display_name: "WebSockets", specifier: "websockets", description: "WebSocket support", category: Category::Api },
    CatalogEntry { id: "graphene", display_name: "Graphene", specifier: "graphene", description: "GraphQL framework", category: Category::Api },
    CatalogEntry { id: "strawberry_graphql", display_name: "Strawberry", specifier: "strawberry-graphql", description: "Type-safe GraphQL", category: Category::Api },
    CatalogEntry { id: "email_validator", display_name: "Email Validator", specifier: "email-validator", description: "Email validation", category: Category::Api },
    CatalogEntry { id: "python_slugify", display_name: "Slugify", specifier: "python-slugify", description: "Slug generation", category: Category::Api },
    CatalogEntry { id: "pytest", display_name: "Pytest", specifier: "pytest", description: "Testing framework", category: Category::Testing },
    CatalogEntry { id: "pytest_asyncio", display_name: "Pytest Asyncio", specifier: "pytest-asyncio", description: "Async testing support", category: Category::Testing },
    CatalogEntry { id: "pytest_cov", display_name: "Pytest Coverage", specifier: "pytest-cov", description: "Code coverage plugin", category: Category::Testing },
    CatalogEntry { id: "faker", display_name: "Faker", specifier: "faker", description: "Test data generation", category: Category::Testing },
    CatalogEntry { id: "factory_boy", display_name: "Factory Boy", specifier: "factory-boy", description: "Test fixtures", category: Category::Testing },
    CatalogEntry { id: "hypothesis", display_name: "Hypothesis", specifier: "hypothesis", description: "Property-based testing", category: Category::Testing },
    CatalogEntry { id: "prometheus_client", display_name: "Prometheus", specifier: "prometheus-client", description: "Metrics and monitoring", category: Category::Monitoring },
    CatalogEntry { id: "sentry_sdk", display_name: "Sentry", specifier: "sentry-sdk", description: "Error tracking", category: Category::Monitoring },
    CatalogEntry { id: "structlog", display_name: "Structlog", specifier: "structlog", description: "Structured logging", category: Category::Monitoring },
    CatalogEntry { id: "loguru", display_name: "Loguru", specifier: "loguru", description: "Easy logging", category: Category::Monitoring },
    CatalogEntry { id: "opentelemetry_api", display_name: "OpenTelemetry", specifier: "opentelemetry-api", description: "Observability framework", category: Category::Monitoring },
    CatalogEntry { id: "celery", display_name: "Celery", specifier: "celery", description: "Distributed task queue", category: Category::Async },
    CatalogEntry { id: "arq", display_name: "ARQ", specifier: "arq", description: "Fast async job queues", category: Category::Async },
    CatalogEntry { id: "dramatiq", display_name: "Dramatiq", specifier: "dramatiq", description: "Task processing", category: Category::Async },
    CatalogEntry { id: "rq", display_name: "RQ", specifier: "rq", description: "Simple job queues", category: Category::Async },
    CatalogEntry { id: "pydantic_settings", display_name: "Pydantic Settings", specifier: "pydantic-settings", description: "Settings management", category: Category::Config },
    CatalogEntry { id: "python_decouple", display_name: "Python Decouple", specifier: "python-decouple", description: "Settings from env", category: Category::Config },
    CatalogEntry { id: "dynaconf", display_name: "Dynaconf", specifier: "dynaconf", description: "Dynamic configuration", category: Category::Config },
    CatalogEntry { id: "jinja2", display_name: "Jinja2", specifier: "jinja2", description: "Templating engine", category: Category::Templates },
    CatalogEntry { id: "aiofiles", display_name: "Aiofiles", specifier: "aiofiles", description: "Async file operations", category: Category::Templates },
    CatalogEntry { id: "pillow", display_name: "Pillow", specifier: "pillow", description: "Image processing", category: Category::Templates },
    CatalogEntry { id: "marshmallow", display_name: "Marshmallow", specifier: "marshmallow", description: "Object serialization", category: Category::Validation },
    CatalogEntry { id: "arrow", display_name: "Arrow", specifier: "arrow", description: "Better dates and times", category: Category::Utils },
    CatalogEntry { id: "python_dateutil", display_name: "Dateutil", specifier: "python-dateutil", description: "Date/time utilities", category: Category::Utils },
    CatalogEntry { id: "click", display_name: "Click", specifier: "click", description: "CLI creation", category: Category::Utils },
    CatalogEntry { id: "typer", display_name: "Typer", specifier: "typer", description: "Modern CLI framework", category: Category::Utils },
    CatalogEntry { id: "rich", display_name: "Rich", specifier: "rich", description: "Rich text and formatting", category: Category::Utils },
];

/// Maximum edit distance for "did you mean" suggestions.
const SUGGESTION_MAX_DISTANCE: usize = 3;

/// Find a catalog entry by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.id == id)
}

/// Look up a catalog entry by id, producing a suggestion-carrying error for
/// unknown ids.
pub fn lookup(id: &str) -> Result<&'static CatalogEntry, FastgenError> {
    find(id).ok_or_else(|| FastgenError::UnknownDependency {
        id: id.to_string(),
        suggestion: suggest(id),
    })
}

/// Closest catalog id to `id` within the suggestion threshold.
#[must_use]
pub fn suggest(id: &str) -> Option<String> {
    CATALOG
        .iter()
        .map(|entry| (levenshtein(id, entry.id), entry.id))
        .filter(|(distance, _)| *distance <= SUGGESTION_MAX_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, id)| id.to_string())
}

/// All entries in a category, in catalog order.
pub fn entries_in_category(category: Category) -> impl Iterator<Item = &'static CatalogEntry> {
    CATALOG.iter().filter(move |entry| entry.category == category)
}
