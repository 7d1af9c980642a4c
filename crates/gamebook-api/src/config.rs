//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use gamebook_render::PlainTextTemplate;

use crate::error::AppError;
use crate::handler::{HandlerOption, with_key_deriver, with_template};
use crate::keys::PathKey;

/// Which built-in template renders chapters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TemplateChoice {
    /// Styled HTML page.
    #[default]
    Html,
    /// Plain text.
    Plain,
}

impl TemplateChoice {
    fn parse(value: &str) -> Result<Self, AppError> {
        match value.to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "plain" | "text" => Ok(Self::Plain),
            other => Err(AppError::Config(format!(
                "STORY_TEMPLATE must be `html` or `plain`, got `{other}`"
            ))),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Story file, JSON or YAML (`STORY_FILE`).
    pub story_file: PathBuf,
    /// Bind host (`HOST`).
    pub host: String,
    /// Bind port (`PORT`).
    pub port: u16,
    /// Chapter served for `/` instead of `intro` (`START_CHAPTER`).
    pub start_chapter: Option<String>,
    /// Built-in template to render with (`STORY_TEMPLATE`).
    pub template: TemplateChoice,
}

impl AppConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value
    /// of a variable if it is set.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let story_file = lookup("STORY_FILE").map_or_else(|| PathBuf::from("story.json"), PathBuf::from);
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => 3000,
        };
        let start_chapter = lookup("START_CHAPTER").filter(|key| !key.is_empty());
        let template = match lookup("STORY_TEMPLATE") {
            Some(value) => TemplateChoice::parse(&value)?,
            None => TemplateChoice::default(),
        };

        Ok(Self {
            story_file,
            host,
            port,
            start_chapter,
            template,
        })
    }

    /// Address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }

    /// Handler overrides implied by this configuration.
    #[must_use]
    pub fn handler_options(&self) -> Vec<HandlerOption> {
        let mut options = Vec::new();
        if self.template == TemplateChoice::Plain {
            options.push(with_template(PlainTextTemplate));
        }
        if let Some(start_chapter) = &self.start_chapter {
            options.push(with_key_deriver(PathKey::with_root_key(start_chapter)));
        }
        options
    }
}
