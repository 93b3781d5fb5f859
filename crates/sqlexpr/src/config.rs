//! Dialect configuration.
//!
//! A [`DialectConfig`] selects a dialect and its server-side quoting switches.
//! It can be built in code or loaded from TOML:
//!
//! ```toml
//! dialect = "mysql"
//! no_backslash_escapes = true
//! ```

use crate::dialect::{MySqlDialect, PostgresDialect, SqlDialect, SqliteDialect};
use crate::error::{ExprError, ExprResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// Supported database dialects.
///
/// Deserializes through [`FromStr`], so config files accept the same
/// case-insensitive names and aliases as `str::parse`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum DialectKind {
    #[default]
    Postgres,
    Mysql,
    Sqlite,
}

impl DialectKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DialectKind::Postgres => "postgres",
            DialectKind::Mysql => "mysql",
            DialectKind::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialectKind {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DialectKind::Postgres),
            "mysql" | "mariadb" => Ok(DialectKind::Mysql),
            "sqlite" => Ok(DialectKind::Sqlite),
            other => Err(ExprError::config(format!("unknown dialect '{other}'"))),
        }
    }
}

impl TryFrom<String> for DialectKind {
    type Error = ExprError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Dialect selection and quoting switches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DialectConfig {
    /// Which dialect to build.
    #[serde(default)]
    pub dialect: DialectKind,
    /// MySQL only: server runs with `NO_BACKSLASH_ESCAPES`.
    #[serde(default)]
    pub no_backslash_escapes: bool,
    /// PostgreSQL only: value of `standard_conforming_strings`.
    #[serde(default = "default_true")]
    pub standard_conforming_strings: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self::new(DialectKind::default())
    }
}

impl DialectConfig {
    /// Create a configuration for `dialect` with server defaults.
    pub fn new(dialect: DialectKind) -> Self {
        Self {
            dialect,
            no_backslash_escapes: false,
            standard_conforming_strings: true,
        }
    }

    /// Set MySQL `NO_BACKSLASH_ESCAPES` mode.
    pub fn no_backslash_escapes(mut self, enabled: bool) -> Self {
        self.no_backslash_escapes = enabled;
        self
    }

    /// Set PostgreSQL `standard_conforming_strings`.
    pub fn standard_conforming_strings(mut self, enabled: bool) -> Self {
        self.standard_conforming_strings = enabled;
        self
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(raw: &str) -> ExprResult<Self> {
        let config: DialectConfig = toml::from_str(raw)
            .map_err(|e| ExprError::config(format!("failed to parse dialect config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> ExprResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ExprError::config(format!("failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&raw)
    }

    /// Serialize the configuration as TOML.
    pub fn to_toml_string(&self) -> ExprResult<String> {
        toml::to_string(self)
            .map_err(|e| ExprError::config(format!("failed to serialize dialect config: {e}")))
    }

    /// Reject switches that do not apply to the selected dialect.
    pub fn validate(&self) -> ExprResult<()> {
        if self.no_backslash_escapes && self.dialect != DialectKind::Mysql {
            return Err(ExprError::config(format!(
                "no_backslash_escapes only applies to mysql, not {}",
                self.dialect
            )));
        }
        if !self.standard_conforming_strings && self.dialect != DialectKind::Postgres {
            return Err(ExprError::config(format!(
                "standard_conforming_strings only applies to postgres, not {}",
                self.dialect
            )));
        }
        Ok(())
    }

    /// Build the configured dialect.
    pub fn build(&self) -> ExprResult<Arc<dyn SqlDialect>> {
        self.validate()?;
        let dialect: Arc<dyn SqlDialect> = match self.dialect {
            DialectKind::Postgres => Arc::new(
                PostgresDialect::new().standard_conforming_strings(self.standard_conforming_strings),
            ),
            DialectKind::Mysql => {
                Arc::new(MySqlDialect::new().no_backslash_escapes(self.no_backslash_escapes))
            }
            DialectKind::Sqlite => Arc::new(SqliteDialect),
        };
        Ok(dialect)
    }
}
