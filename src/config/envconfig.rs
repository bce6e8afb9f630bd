use ::config as config_rs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Settings read from `APP_*` variables, sections split by `__`
/// (`APP_DATABASE__URL` -> `database.url`).
pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "APP";
    const SEPARATOR: &'static str = "__";

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Loads `.env` from the working directory, then the process environment.
    fn from_env() -> Result<Self> {
        dotenv_outcome(dotenvy::dotenv().map(|_| ()))?;
        Self::from_environment(Self::environment())
    }

    fn environment() -> config_rs::Environment {
        config_rs::Environment::with_prefix(Self::PREFIX)
            .prefix_separator("_")
            .separator(Self::SEPARATOR)
            .try_parsing(true)
    }

    fn from_environment(source: config_rs::Environment) -> Result<Self> {
        let cfg = config_rs::Config::builder()
            .add_source(source)
            .build()
            .context("failed to read environment variables for config")?
            .try_deserialize::<Self>()
            .context("failed to deserialize environment into config")?;

        cfg.validate()?;
        Ok(cfg)
    }
}

// No `.env` is the normal production case; a file that exists must parse.
fn dotenv_outcome(result: std::result::Result<(), dotenvy::Error>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(err) if err.not_found() => {
            tracing::debug!("no .env file in working directory");
            Ok(())
        }
        Err(err) => Err(err).context("failed to load .env"),
    }
}
