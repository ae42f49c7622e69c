use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};

use derive_more::Display;
use strum::EnumString;

/// Severity, ordered from noisiest to most severe. Parses case-insensitively
/// (`"warn"`, `"WARN"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum LogLevel {
    #[display(fmt = "TRACE")]
    Trace,
    #[display(fmt = "DEBUG")]
    Debug,
    #[display(fmt = " INFO")]
    Info,
    #[display(fmt = " WARN")]
    Warn,
    #[display(fmt = "ERROR")]
    Error,
}

/// Layer that emitted a log line, e.g. `APP:Poller` or `INF:HTTP`
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LogComponent {
    #[display(fmt = "DOM:{}", _0)]
    Domain(&'static str),
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Milliseconds from the installed [`Clock`]
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
    /// Trailing context such as the request url
    pub metadata: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: impl Into<String>) -> Self {
        Self { timestamp: clock().now_ms(), level, component, message: message.into(), metadata: None }
    }

    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }
}

pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
    fn format(&self, timestamp: u64) -> String;
}

/// Sink for log entries. Only `log` is required.
pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);

    /// Checked by the `log_*!` macros before formatting.
    fn enabled(&self, _level: LogLevel) -> bool {
        true
    }

    fn emit(&self, level: LogLevel, component: LogComponent, message: &str) {
        if self.enabled(level) {
            self.log(LogEntry::new(level, component, message));
        }
    }

    fn trace(&self, component: LogComponent, message: &str) {
        self.emit(LogLevel::Trace, component, message);
    }

    fn debug(&self, component: LogComponent, message: &str) {
        self.emit(LogLevel::Debug, component, message);
    }

    fn info(&self, component: LogComponent, message: &str) {
        self.emit(LogLevel::Info, component, message);
    }

    fn warn(&self, component: LogComponent, message: &str) {
        self.emit(LogLevel::Warn, component, message);
    }

    fn error(&self, component: LogComponent, message: &str) {
        self.emit(LogLevel::Error, component, message);
    }

    fn log_with_metadata(&self, level: LogLevel, component: LogComponent, message: &str, metadata: &str) {
        if self.enabled(level) {
            self.log(LogEntry::new(level, component, message).with_metadata(metadata));
        }
    }
}

static LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();
static CLOCK: OnceLock<Box<dyn Clock>> = OnceLock::new();

/// First install wins; the logger lives for the rest of the page.
pub fn install_logger(logger: Box<dyn Logger>) {
    let _ = LOGGER.set(logger);
}

pub fn install_clock(clock: Box<dyn Clock>) {
    let _ = CLOCK.set(clock);
}

/// Installed logger, or a silent one before startup (and in native tests).
pub fn get_logger() -> &'static dyn Logger {
    LOGGER.get().map_or(&Silent as &dyn Logger, |logger| logger.as_ref())
}

pub fn clock() -> &'static dyn Clock {
    CLOCK.get().map_or(&SequenceClock as &dyn Clock, |clock| clock.as_ref())
}

struct Silent;

impl Logger for Silent {
    fn log(&self, _entry: LogEntry) {}

    fn enabled(&self, _level: LogLevel) -> bool {
        false
    }
}

// Ordering only; used until the browser clock is installed.
struct SequenceClock;

impl Clock for SequenceClock {
    fn now_ms(&self) -> u64 {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        NEXT.fetch_add(1, Ordering::Relaxed)
    }

    fn format(&self, timestamp: u64) -> String {
        format!("#{:06}", timestamp)
    }
}

/// Formats and logs at `level` when the installed logger accepts it.
#[macro_export]
macro_rules! log_at {
    ($level:expr, $component:expr, $($arg:tt)*) => {{
        let logger = $crate::domain::logging::get_logger();
        if logger.enabled($level) {
            logger.emit($level, $component, &format!($($arg)*));
        }
    }};
}

// trace/debug/info compile out of release builds.
#[macro_export]
macro_rules! log_trace {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::log_at!($crate::domain::logging::LogLevel::Trace, $component, $($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::log_at!($crate::domain::logging::LogLevel::Debug, $component, $($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::log_at!($crate::domain::logging::LogLevel::Info, $component, $($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::domain::logging::LogLevel::Warn, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::domain::logging::LogLevel::Error, $component, $($arg)*)
    };
}
