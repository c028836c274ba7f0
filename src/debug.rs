//! Debug logging for confbox.
//!
//! Everything logged through the `log` facade lands in a debug log file in
//! the temp directory (`confbox_debug.log`), keeping stdout and stderr free
//! for command output.
//!
//! Verbosity is controlled by the `DEBUG_LEVEL` environment variable:
//! - 0 or unset: no debugging
//! - 1: errors only
//! - 2: info level (sessions loaded, saved, deleted)
//! - 3: debug level (dispatched events, rejected input)
//! - 4: trace level
//!
//! A `--log-level` flag on the command line overrides `DEBUG_LEVEL`. When
//! `RUST_LOG` is set, every line is mirrored to stderr as well.

use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Debug level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl DebugLevel {
    fn from_env() -> Self {
        match std::env::var("DEBUG_LEVEL") {
            Ok(val) => Self::from_number(val.trim().parse::<u8>().unwrap_or(0)),
            Err(_) => DebugLevel::Off,
        }
    }

    fn from_number(n: u8) -> Self {
        match n {
            1 => DebugLevel::Error,
            2 => DebugLevel::Info,
            3 => DebugLevel::Debug,
            4 => DebugLevel::Trace,
            _ => DebugLevel::Off,
        }
    }

    /// Debug level a `log` record is filed under. Warnings count as errors.
    fn of_record(level: log::Level) -> Self {
        match level {
            log::Level::Error | log::Level::Warn => DebugLevel::Error,
            log::Level::Info => DebugLevel::Info,
            log::Level::Debug => DebugLevel::Debug,
            log::Level::Trace => DebugLevel::Trace,
        }
    }

    fn from_filter(filter: log::LevelFilter) -> Self {
        match filter {
            log::LevelFilter::Off => DebugLevel::Off,
            log::LevelFilter::Error | log::LevelFilter::Warn => DebugLevel::Error,
            log::LevelFilter::Info => DebugLevel::Info,
            log::LevelFilter::Debug => DebugLevel::Debug,
            log::LevelFilter::Trace => DebugLevel::Trace,
        }
    }

    fn to_filter(self) -> log::LevelFilter {
        match self {
            DebugLevel::Off => log::LevelFilter::Off,
            DebugLevel::Error => log::LevelFilter::Warn,
            DebugLevel::Info => log::LevelFilter::Info,
            DebugLevel::Debug => log::LevelFilter::Debug,
            DebugLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Path of the debug log file.
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("confbox_debug.log")
}

/// Global debug logger
struct DebugLogger {
    level: DebugLevel,
    file: Option<std::fs::File>,
    mirror_stderr: bool,
}

impl DebugLogger {
    fn new(level: DebugLevel) -> Self {
        let mirror_stderr = std::env::var_os("RUST_LOG").is_some();
        let file = if level != DebugLevel::Off {
            // Log file trouble must never get in the way of the command.
            OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(log_path())
                .ok()
        } else {
            None
        };

        let mut logger = DebugLogger {
            level,
            file,
            mirror_stderr,
        };
        if logger.file.is_some() {
            logger.write_raw(&format!(
                "\n{}\nconfbox debug session started at {} (level={:?})\n{}\n",
                "=".repeat(80),
                get_timestamp(),
                level,
                "=".repeat(80)
            ));
        }
        logger
    }

    fn write_raw(&mut self, msg: &str) {
        if let Some(ref mut file) = self.file {
            let _ = file.write_all(msg.as_bytes());
            let _ = file.flush();
        }
    }

    fn log(&mut self, level: log::Level, target: &str, msg: &str) {
        if DebugLevel::of_record(level) > self.level {
            return;
        }
        let line = format!("[{}] [{:<5}] [{}] {}\n", get_timestamp(), level, target, msg);
        self.write_raw(&line);
        if self.mirror_stderr {
            eprint!("{line}");
        }
    }
}

static LOGGER: OnceLock<Mutex<DebugLogger>> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Routes `log` records into the debug logger.
struct LogBridge;

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Some(logger) = LOGGER.get() {
            logger
                .lock()
                .log(record.level(), record.target(), &record.args().to_string());
        }
    }

    fn flush(&self) {
        if let Some(logger) = LOGGER.get() {
            let mut logger = logger.lock();
            if let Some(ref mut file) = logger.file {
                let _ = file.flush();
            }
        }
    }
}

static BRIDGE: LogBridge = LogBridge;

/// Level named by `RUST_LOG`, if it is a plain level name such as `debug`.
fn rust_log_filter() -> Option<log::LevelFilter> {
    std::env::var("RUST_LOG").ok()?.trim().parse().ok()
}

/// Install the `log` bridge. `override_level` (from `--log-level`) takes
/// precedence, then `DEBUG_LEVEL`, then `RUST_LOG`. Only the first call
/// has any effect.
pub fn init_log_bridge(override_level: Option<log::LevelFilter>) {
    let override_level = override_level.or_else(|| match DebugLevel::from_env() {
        DebugLevel::Off => rust_log_filter(),
        _ => None,
    });
    let level = match override_level {
        Some(filter) => DebugLevel::from_filter(filter),
        None => DebugLevel::from_env(),
    };
    if LOGGER.set(Mutex::new(DebugLogger::new(level))).is_err() {
        return;
    }
    if log::set_logger(&BRIDGE).is_ok() {
        log::set_max_level(override_level.unwrap_or_else(|| level.to_filter()));
    }
}
