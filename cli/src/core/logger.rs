use std::sync::OnceLock;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

static LOGGER: OnceLock<Logger> = OnceLock::new();

const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;
const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
const COLOR_LOG_OUTPUT_ENV: &str = "COLOR_LOG_OUTPUT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    level: LevelFilter,
    color: bool,
}

impl Logger {
    /// Installs the stderr subscriber. Only the first call has any effect.
    pub fn init(debug: bool) {
        LOGGER.get_or_init(|| {
            let level_var = std::env::var(LOG_LEVEL_ENV).ok();
            let color_var = std::env::var(COLOR_LOG_OUTPUT_ENV).ok();
            let (logger, unknown_level) =
                Self::from_settings(debug, level_var.as_deref(), color_var.as_deref());
            logger.install();
            if let Some(value) = unknown_level {
                tracing::warn!(value = %value, "unexpected LOG_LEVEL, using default");
            }
            tracing::debug!(
                log_level = %logger.level,
                color_log_output = logger.color,
                "Configured logging"
            );
            logger
        });
    }

    fn from_settings(
        debug: bool,
        level_var: Option<&str>,
        color_var: Option<&str>,
    ) -> (Self, Option<String>) {
        let (mut level, unknown_level) = match level_var.map(str::trim) {
            None | Some("") => (DEFAULT_LEVEL, None),
            Some(value) => match parse_level(value) {
                Some(level) => (level, None),
                None => (DEFAULT_LEVEL, Some(value.to_string())),
            },
        };
        if debug && level < LevelFilter::DEBUG {
            level = LevelFilter::DEBUG;
        }
        let color = !color_var
            .map(|v| v.trim().eq_ignore_ascii_case("false"))
            .unwrap_or(false);
        (Self { level, color }, unknown_level)
    }

    fn install(&self) {
        let filter = EnvFilter::new(self.level.to_string());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(self.color)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.to_uppercase().as_str() {
        "TRACE" => Some(LevelFilter::TRACE),
        "DEBUG" => Some(LevelFilter::DEBUG),
        "INFO" => Some(LevelFilter::INFO),
        "WARN" => Some(LevelFilter::WARN),
        "ERROR" | "FATAL" => Some(LevelFilter::ERROR),
        "OFF" => Some(LevelFilter::OFF),
        _ => None,
    }
}
