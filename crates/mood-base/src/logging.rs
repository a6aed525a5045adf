use log::{LevelFilter, Log, Metadata, Record};
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Logger printing one line per record to stdout.
pub struct StdoutLogger;

/// Logger appending to `<dir>/YYYY-MM-DD.log`, switching files when the UTC date changes.
pub struct FileLogger {
    state: Mutex<FileLoggerState>,
}

struct FileLoggerState {
    dir: PathBuf,
    date: String,
    file: File,
}

fn open_day_file(dir: &Path, date: &str) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(format!("{}.log", date)))
}

/// Render a record as `<timestamp> [<level>] [thread:<id>] <file>:<line> - <message>`.
pub fn format_record(record: &Record) -> String {
    format!(
        "{} [{}] [thread:{:?}] {}:{} - {}",
        format_timestamp(),
        record.level(),
        std::thread::current().id(),
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
        record.args(),
    )
}

impl FileLogger {
    /// Create the directory if needed and open today's log file.
    pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        let date = format_today();
        let file = open_day_file(&dir, &date)?;
        Ok(Self {
            state: Mutex::new(FileLoggerState { dir, date, file }),
        })
    }

    fn roll_if_needed(state: &mut FileLoggerState) {
        let today = format_today();
        if today == state.date {
            return;
        }
        match open_day_file(&state.dir, &today) {
            Ok(file) => {
                state.file = file;
                state.date = today;
            }
            // keep writing to the previous file
            Err(e) => eprintln!("cannot open log file for {}: {}", today, e),
        }
    }
}

impl Log for StdoutLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        println!("{}", format_record(record));
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

impl Log for FileLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        Self::roll_if_needed(&mut state);
        let line = format_record(record);
        if let Err(e) = writeln!(state.file, "{}", line) {
            eprintln!("cannot write log file: {}", e);
            eprintln!("{}", line);
        }
    }

    fn flush(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.file.flush().ok();
    }
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS`.
pub fn format_timestamp() -> String {
    let secs = unix_seconds();
    let tod = secs % 86400;
    format!(
        "{}T{:02}:{:02}:{:02}",
        Date::from_epoch_days(secs / 86400),
        tod / 3600,
        (tod % 3600) / 60,
        tod % 60
    )
}

/// Current UTC date as `YYYY-MM-DD`, which is also the log file stem.
pub fn format_today() -> String {
    Date::from_epoch_days(unix_seconds() / 86400).to_string()
}

const DAYS_PER_400_YEARS: u64 = 146_097;
const MONTH_DAYS: [u64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

fn is_leap(year: u64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Date {
    year: u64,
    month: u8,
    day: u8,
}

impl Date {
    /// Gregorian date `days` after 1970-01-01.
    fn from_epoch_days(days: u64) -> Self {
        // the calendar repeats every 400 years
        let mut year = 1970 + days / DAYS_PER_400_YEARS * 400;
        let mut left = days % DAYS_PER_400_YEARS;
        loop {
            let len = if is_leap(year) { 366 } else { 365 };
            if left < len {
                break;
            }
            left -= len;
            year += 1;
        }
        let mut month = 0;
        loop {
            let len = MONTH_DAYS[month] + u64::from(month == 1 && is_leap(year));
            if left < len {
                break;
            }
            left -= len;
            month += 1;
        }
        Self {
            year,
            month: month as u8 + 1,
            day: left as u8 + 1,
        }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Name of the variable overriding the build-dependent default level.
pub const LEVEL_VAR: &str = "MOODCAM_LOG_LEVEL";

/// `off`, `error`, `warn`, `info`, `debug` or `trace`, case-insensitive.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

fn build_level() -> LevelFilter {
    if let Some(level) = std::env::var(LEVEL_VAR).ok().as_deref().and_then(parse_level) {
        return level;
    }
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install [`StdoutLogger`] as the global logger.
///
/// The maximum level is Debug in debug builds and Info in release builds.
/// Setting `MOODCAM_LOG_LEVEL` to a level name overrides both; an
/// unrecognized value is ignored.
///
/// Only the first logger installed in a process takes effect. Later calls,
/// to this or to [`init_file_logger`], are silently ignored, so tests can
/// call it freely.
///
/// ```no_run
/// mood_base::init_stdout_logger();
/// log::info!("camera opened");
/// ```
pub fn init_stdout_logger() {
    static LOGGER: StdoutLogger = StdoutLogger;
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(build_level());
    }
}

/// Install a [`FileLogger`] writing into `dir` as the global logger.
///
/// Records go to `dir/YYYY-MM-DD.log` for the current UTC date, and the
/// logger moves to a new file on the first record after midnight. The level
/// policy is the same as [`init_stdout_logger`], as is the rule that only
/// the first installed logger wins.
///
/// # Errors
///
/// Fails if `dir` cannot be created or today's file cannot be opened for
/// appending. Nothing is installed in that case, so the caller can fall back
/// to [`init_stdout_logger`].
pub fn init_file_logger(dir: impl Into<PathBuf>) -> std::io::Result<()> {
    let logger = FileLogger::new(dir)?;
    // set_logger needs a 'static reference
    if log::set_logger(Box::leak(Box::new(logger))).is_ok() {
        log::set_max_level(build_level());
    }
    Ok(())
}

/// Log at Error level, then exit the process with status 1.
///
/// Stdout is flushed first so the message is not lost when stdout is a pipe.
/// A [`FileLogger`] writes each record straight to its file. The macro
/// never returns, so it can end any match arm.
///
/// ```no_run
/// # let opened: Result<(), String> = Err("no device".into());
/// if let Err(e) = opened {
///     mood_base::log_fatal!("camera unavailable: {}", e);
/// }
/// ```
#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {{
        $crate::log::error!($($arg)*);
        {
            use std::io::Write;
            let _ = std::io::stdout().flush();
        }
        std::process::exit(1);
    }};
}
