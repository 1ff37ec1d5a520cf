/*!
 * Logging context injected into the translation core.
 *
 * The core never installs or configures a logger. Callers build a
 * `LogContext` (a `log` target plus an optional scope such as the letter
 * being translated) and hand it to the orchestrator; every record the core
 * emits goes through it. Where the records end up is decided by whatever
 * `log` backend the host application installed.
 */

use log::Level;
use std::fmt::Display;

/// Target used when the caller does not pick one
pub const DEFAULT_TARGET: &str = "epistula";

/// Explicit logging context for one orchestrator or translator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogContext {
    target: String,
    scope: Option<String>,
}

impl Default for LogContext {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET)
    }
}

impl LogContext {
    /// Create a context logging under `target`.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            scope: None,
        }
    }

    /// A copy of this context whose records are prefixed with `[scope]`.
    pub fn scoped(&self, scope: impl Into<String>) -> Self {
        Self {
            target: self.target.clone(),
            scope: Some(scope.into()),
        }
    }

    /// A copy of this context under `<target>::<child>`.
    pub fn child(&self, child: &str) -> Self {
        Self {
            target: format!("{}::{}", self.target, child),
            scope: self.scope.clone(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// The message as it will be written, scope prefix included.
    pub fn decorate(&self, message: impl Display) -> String {
        match &self.scope {
            Some(scope) => format!("[{}] {}", scope, message),
            None => message.to_string(),
        }
    }

    pub fn log(&self, level: Level, message: impl Display) {
        if log::log_enabled!(target: self.target.as_str(), level) {
            log::log!(target: self.target.as_str(), level, "{}", self.decorate(message));
        }
    }

    pub fn error(&self, message: impl Display) {
        self.log(Level::Error, message);
    }

    pub fn info(&self, message: impl Display) {
        self.log(Level::Info, message);
    }

    pub fn debug(&self, message: impl Display) {
        self.log(Level::Debug, message);
    }
}
