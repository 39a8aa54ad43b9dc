//! Configuration
//!
//! Settings come from three layers, later ones winning:
//!
//!     1. `defaults/actor.default.toml`, compiled into the crate.
//!     2. TOML files added with [ConfigLoader::with_file] or [ConfigLoader::with_optional_file].
//!     3. `ACTOR_*` environment variables, sections separated by a double underscore:
//!        `ACTOR_WRITER__INDENT_WIDTH=2`.
//!
//! Single keys can be forced on top of everything with [ConfigLoader::set]. The merged result
//! is deserialized into [ActorConfig] and checked before it is handed out.

use crate::actor::formats::WriterOptions;
use crate::actor::parsing::ParserOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, Map, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULTS: &str = include_str!("../../defaults/actor.default.toml");

const ENV_PREFIX: &str = "ACTOR";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActorConfig {
    pub parser: ParserConfig,
    pub writer: WriterConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParserConfig {
    pub max_depth: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WriterConfig {
    pub indent_width: usize,
    pub always_emit_goal_list: bool,
    /// Written as `# ` lines above the actor; unset by default
    #[serde(default)]
    pub header_comment: Option<String>,
}

impl ActorConfig {
    /// The built-in defaults alone.
    pub fn defaults() -> Result<Self, ConfigError> {
        ConfigLoader::new().load()
    }

    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            max_depth: self.parser.max_depth,
        }
    }

    pub fn writer_options(&self) -> WriterOptions {
        WriterOptions {
            indent_width: self.writer.indent_width,
            always_emit_goal_list: self.writer.always_emit_goal_list,
            header_comment: self.writer.header_comment.clone(),
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.parser.max_depth == 0 {
            return Err(ConfigError::Message(
                "parser.max_depth must be at least 1".to_string(),
            ));
        }
        // Zero would write every line flush left and lose the nesting.
        if self.writer.indent_width == 0 {
            return Err(ConfigError::Message(
                "writer.indent_width must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone)]
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULTS, FileFormat::Toml)),
        }
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path.as_ref(), true)
    }

    /// Layer a TOML file, skipped when it does not exist.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path.as_ref(), false)
    }

    /// Layer the process environment.
    pub fn with_env(mut self) -> Self {
        self.builder = self.builder.add_source(environment());
        self
    }

    /// Layer the given variables as if they were the environment.
    pub fn with_env_vars(mut self, vars: Map<String, String>) -> Self {
        self.builder = self.builder.add_source(environment().source(Some(vars)));
        self
    }

    pub fn set<V>(mut self, key: &str, value: V) -> Result<Self, ConfigError>
    where
        V: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn load(self) -> Result<ActorConfig, ConfigError> {
        let config: ActorConfig = self.builder.build()?.try_deserialize()?;
        let config = config.validate()?;
        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    fn layer_file(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
