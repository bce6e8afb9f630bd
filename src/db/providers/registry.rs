use std::sync::Arc;

use anyhow::{Result, bail};
use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::config::DatabaseConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbProviderId {
    Postgres,
    Sqlite,
}

impl DbProviderId {
    pub fn as_str(self) -> &'static str {
        match self {
            DbProviderId::Postgres => "postgres",
            DbProviderId::Sqlite => "sqlite",
        }
    }
}

/// A database backend the service can run against.
#[async_trait]
pub trait DbProvider: Send + Sync {
    fn id(&self) -> DbProviderId;
    fn supports_url(&self, url: &str) -> bool;
    async fn connect(&self, cfg: &DatabaseConfig) -> Result<DatabaseConnection>;
    async fn post_connect(&self, _db: &DatabaseConnection, _cfg: &DatabaseConfig) -> Result<()> {
        Ok(())
    }
}

/// Registered providers, matched against a URL in registration order.
#[derive(Default)]
pub struct DbProviders {
    providers: Vec<Arc<dyn DbProvider>>,
}

impl DbProviders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider(mut self, provider: Arc<dyn DbProvider>) -> Result<Self> {
        self.add(provider)?;
        Ok(self)
    }

    pub fn add(&mut self, provider: Arc<dyn DbProvider>) -> Result<()> {
        let id = provider.id();
        if self.providers.iter().any(|existing| existing.id() == id) {
            bail!("database provider already registered: {}", id.as_str());
        }
        self.providers.push(provider);
        Ok(())
    }

    pub fn provider_for_url(&self, url: &str) -> Result<Arc<dyn DbProvider>> {
        self.providers
            .iter()
            .find(|provider| provider.supports_url(url))
            .cloned()
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "unsupported database url '{}'; expected scheme postgres://, postgresql://, or sqlite:",
                    redact_url(url)
                )
            })
    }
}

fn redact_url(url: &str) -> String {
    let trimmed = url.trim();
    match trimmed.split_once("://").or_else(|| trimmed.split_once(':')) {
        Some((scheme, _)) => format!("{scheme}:<redacted>"),
        None => "<invalid-url>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{DbProviderId, DbProviders, redact_url};
    use crate::db::providers::default_registry;

    #[test]
    fn default_registry_resolves_both_backends() {
        let providers = default_registry().expect("default providers should register");

        let sqlite = providers
            .provider_for_url("sqlite::memory:")
            .expect("sqlite provider should resolve");
        let postgres = providers
            .provider_for_url("postgresql://localhost/projects")
            .expect("postgres provider should resolve");

        assert_eq!(sqlite.id(), DbProviderId::Sqlite);
        assert_eq!(postgres.id(), DbProviderId::Postgres);
    }

    #[test]
    fn rejects_duplicate_provider_registration() {
        let mut providers = default_registry().expect("default providers should register");
        let sqlite = providers
            .provider_for_url("sqlite://projects.db")
            .expect("sqlite provider should resolve");

        let err = providers
            .add(Arc::clone(&sqlite))
            .expect_err("duplicate provider registration should fail");
        assert!(err.to_string().contains("already registered: sqlite"));
    }

    #[test]
    fn unsupported_scheme_error_hides_credentials() {
        let err = match DbProviders::new().provider_for_url("mysql://root:hunter2@db/projects") {
            Ok(_) => panic!("unsupported url should fail"),
            Err(err) => err,
        };

        let message = err.to_string();
        assert!(message.contains("unsupported database url 'mysql:<redacted>'"));
        assert!(!message.contains("hunter2"));
    }

    #[test]
    fn redacts_urls_without_authority() {
        assert_eq!(redact_url("sqlite:projects.db"), "sqlite:<redacted>");
        assert_eq!(redact_url("projects.db"), "<invalid-url>");
    }
}
