use crate::infrastructure::{CliError, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
///
/// Logs always go to stderr so command output on stdout stays machine-readable.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub default_level: tracing::Level,
    pub json_format: bool,
    pub show_spans: bool,
    pub show_targets: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: tracing::Level::INFO,
            json_format: false,
            show_spans: false,
            show_targets: true,
        }
    }
}

impl LogConfig {
    /// Development configuration (verbose, human-readable)
    pub fn dev() -> Self {
        Self {
            default_level: tracing::Level::DEBUG,
            show_spans: true,
            ..Default::default()
        }
    }

    /// Warnings only
    pub fn quiet() -> Self {
        Self {
            default_level: tracing::Level::WARN,
            show_targets: false,
            ..Default::default()
        }
    }

    /// Pick a configuration from the number of `-v` flags
    pub fn from_verbosity(verbose: u8) -> Self {
        match verbose {
            0 => Self::quiet(),
            1 => Self::default(),
            _ => Self::dev(),
        }
    }

    pub fn with_json(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Filter used when `RUST_LOG` is not set
    pub fn default_directives(&self) -> String {
        let level = self.default_level.to_string().to_lowercase();
        format!("registry_console_cli={level},registry_console_core={level}")
    }

    pub fn init(self) -> Result<()> {
        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(self.default_directives())
                .map_err(|e| CliError::Logging(e.to_string()))?,
        };

        let span_events = if self.show_spans {
            fmt::format::FmtSpan::CLOSE
        } else {
            fmt::format::FmtSpan::NONE
        };

        if self.json_format {
            let fmt_layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_span_events(span_events);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| CliError::Logging(e.to_string()))
        } else {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(self.show_targets)
                .with_span_events(span_events);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| CliError::Logging(e.to_string()))
        }
    }
}
