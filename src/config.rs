//! Configuration and CLI argument handling

use clap::Parser;

/// Default endpoint answering with the current UTC time as JSON
pub const DEFAULT_TIME_API: &str = "https://worldtimeapi.org/api/timezone/Etc/UTC";

/// Field of the time API response holding the current instant
pub const DEFAULT_TIME_FIELD: &str = "utc_datetime";

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "final-countdown")]
#[command(about = "Count down to a target timestamp, corrected against a remote clock")]
#[command(version)]
pub struct Config {
    /// Target time in ISO-8601 format, e.g. 2013-11-29T05:00:00-05:00
    #[arg(short, long)]
    pub end_time: Option<String>,

    /// Message shown in front of the running counter
    #[arg(long)]
    pub intro_message: Option<String>,

    /// Message shown instead of the counter once it completes
    #[arg(long)]
    pub complete_message: Option<String>,

    /// Label following the days value
    #[arg(long)]
    pub days_label: Option<String>,

    /// Label following the hours value
    #[arg(long)]
    pub hours_label: Option<String>,

    /// Label following the minutes value
    #[arg(long)]
    pub minutes_label: Option<String>,

    /// Label following the seconds value
    #[arg(long)]
    pub seconds_label: Option<String>,

    /// URL returning the current UTC time as JSON
    #[arg(long, default_value = DEFAULT_TIME_API)]
    pub time_api: String,

    /// JSON field of the time API response holding the date-time string
    #[arg(long, default_value = DEFAULT_TIME_FIELD)]
    pub time_field: String,

    /// Serve the countdown status over HTTP on this port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host address to bind the status server to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the status server address, if one was requested
    pub fn address(&self) -> Option<String> {
        self.port.map(|port| format!("{}:{}", self.host, port))
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Build the countdown options from the parsed arguments
    pub fn countdown_config(&self) -> CountdownConfig {
        let mut config = CountdownConfig::new(self.end_time.clone())
            .with_time_api(self.time_api.clone(), self.time_field.clone());

        if let Some(message) = &self.intro_message {
            config = config.with_intro_message(message.clone());
        }
        if let Some(message) = &self.complete_message {
            config = config.with_complete_message(message.clone());
        }

        config.with_labels(
            self.days_label.clone(),
            self.hours_label.clone(),
            self.minutes_label.clone(),
            self.seconds_label.clone(),
        )
    }
}

/// Unit labels placed after each rendered value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub days: String,
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
}

impl Labels {
    /// Caller supplied labels override the defaults one by one
    pub fn custom(
        days: Option<String>,
        hours: Option<String>,
        minutes: Option<String>,
        seconds: Option<String>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            days: days.map(pad_label).unwrap_or(defaults.days),
            hours: hours.map(pad_label).unwrap_or(defaults.hours),
            minutes: minutes.map(pad_label).unwrap_or(defaults.minutes),
            seconds: seconds.map(pad_label).unwrap_or(defaults.seconds),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            days: ":".to_string(),
            hours: ":".to_string(),
            minutes: ":".to_string(),
            seconds: String::new(),
        }
    }
}

/// Surround a non-empty custom label with single spaces
fn pad_label(label: String) -> String {
    if label.is_empty() {
        label
    } else {
        format!(" {} ", label)
    }
}

/// Immutable countdown options
///
/// Built once before the engine starts and never changed afterwards.
#[derive(Debug, Clone)]
pub struct CountdownConfig {
    /// ISO-8601 target; absence is reported when the engine is constructed
    pub target_time: Option<String>,
    pub time_api: String,
    pub time_field: String,
    pub intro_message: String,
    pub complete_message: String,
    pub labels: Labels,
}

impl CountdownConfig {
    /// Create options with every optional field at its default
    pub fn new(target_time: Option<String>) -> Self {
        Self {
            target_time,
            time_api: DEFAULT_TIME_API.to_string(),
            time_field: DEFAULT_TIME_FIELD.to_string(),
            intro_message: String::new(),
            complete_message: String::new(),
            labels: Labels::default(),
        }
    }

    pub fn with_time_api(mut self, endpoint: String, field: String) -> Self {
        self.time_api = endpoint;
        self.time_field = field;
        self
    }

    pub fn with_intro_message(mut self, message: String) -> Self {
        self.intro_message = message;
        self
    }

    pub fn with_complete_message(mut self, message: String) -> Self {
        self.complete_message = message;
        self
    }

    /// Apply custom labels, padding each supplied one exactly once
    pub fn with_labels(
        mut self,
        days: Option<String>,
        hours: Option<String>,
        minutes: Option<String>,
        seconds: Option<String>,
    ) -> Self {
        self.labels = Labels::custom(days, hours, minutes, seconds);
        self
    }

    /// Intro message, if one was configured
    pub fn intro(&self) -> Option<&str> {
        Some(self.intro_message.as_str()).filter(|m| !m.is_empty())
    }

    /// Complete message, if one was configured
    pub fn completion(&self) -> Option<&str> {
        Some(self.complete_message.as_str()).filter(|m| !m.is_empty())
    }
}
