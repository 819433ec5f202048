//! Route `log` records through the tag parser.
//!
//! Installing a [`TagLogger`] makes every record emitted through the
//! standard [`log`] macros pass through [`inktag`] before it reaches the
//! terminal, so log messages can carry tag markup:
//!
//! ```no_run
//! inktag_log::apply_tags_to_console().unwrap();
//! log::info!("deployed <green>successfully</green>");
//! ```
//!
//! The level prefix itself is written in markup, so errors arrive bold red
//! without any call-site effort.

use std::fmt;
use std::io::{self, Write};

use inktag::TagParser;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// A logger backend that parses tag markup in every record before writing
/// it to stderr.
pub struct TagLogger {
    parser: TagParser,
    max_level: LevelFilter,
}

impl TagLogger {
    /// Create a logger reporting up to [`LevelFilter::Debug`].
    pub fn new() -> Self {
        Self {
            parser: TagParser::new(),
            max_level: LevelFilter::Debug,
        }
    }

    /// Cap the level this logger reports.
    pub fn with_max_level(mut self, level: LevelFilter) -> Self {
        self.max_level = level;
        self
    }

    /// Emit markup untouched instead of parsing it.
    pub fn without_parsing(mut self) -> Self {
        self.parser.stop();
        self
    }

    /// Install this logger process-wide.
    ///
    /// Fails if another logger is already installed.
    pub fn install(self) -> Result<(), SetLoggerError> {
        let max_level = self.max_level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl Default for TagLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for TagLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format_line(record.level(), record.args());
            let mut err = io::stderr().lock();
            let _ = writeln!(err, "{}", self.parser.parse(&line));
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

/// Install a [`TagLogger`] so standard logging output gets tag markup
/// applied automatically.
pub fn apply_tags_to_console() -> Result<(), SetLoggerError> {
    TagLogger::new().install()
}

/// Render one record as a markup line, tags still unresolved.
fn format_line(level: Level, args: &fmt::Arguments<'_>) -> String {
    let prefix = match level {
        Level::Error => "<bold red>error</>",
        Level::Warn => "<yellow>warn</>",
        Level::Info => "<green>info</>",
        Level::Debug => "<dim>debug</>",
        Level::Trace => "<gray>trace</>",
    };
    format!("{prefix} {args}")
}
