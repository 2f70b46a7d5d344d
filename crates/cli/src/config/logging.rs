//! Logging Config

use clap::Args;

/// HTTP client crates held at `warn` unless `--log-http` is set.
const HTTP_CLIENT_TARGETS: [&str; 3] = ["hyper", "hyper_util", "reqwest"];

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, global = true, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Log the booking API's HTTP traffic at the main log level instead of `warn`
    #[arg(long, global = true, env = "LOG_HTTP")]
    pub log_http: bool,
}

impl LoggingConfig {
    /// `EnvFilter` directives for the configured level.
    pub(crate) fn filter_directives(&self) -> String {
        if self.log_http {
            return self.log_level.clone();
        }

        HTTP_CLIENT_TARGETS
            .iter()
            .fold(self.log_level.clone(), |directives, target| {
                format!("{directives},{target}=warn")
            })
    }
}
