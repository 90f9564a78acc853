//! Logging init: file under XDG state dir, or graceful fallback to stderr.

use anyhow::Result;
use std::fs;
use std::io;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,strutil=debug,strutil_core=debug";

/// Log sink: the log file, or stderr when its handle cannot be cloned.
enum LogSink {
    File(fs::File),
    Stderr,
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct LogFile(fs::File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogSink::File)
            .unwrap_or(LogSink::Stderr)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Send `tracing` output to `strutil.log` in the XDG state directory.
///
/// Errors if the state directory or log file cannot be opened, or if a
/// global subscriber is already installed.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("strutil")?;
    let log_file_path = xdg_dirs.place_state_file("strutil.log")?;

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    let writer = BoxMakeWriter::new(LogFile(file));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("set tracing subscriber: {}", e))?;

    tracing::info!("strutil logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Send `tracing` output to stderr. The binary uses this when [`init_logging`] errors.
pub fn init_logging_stderr() {
    // A subscriber may already be set; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_writer_appends_to_file() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let make = LogFile(f.reopen().unwrap());
        let mut w = make.make_writer();
        w.write_all(b"line\n").unwrap();
        w.flush().unwrap();
        assert_eq!(fs::read_to_string(f.path()).unwrap(), "line\n");
    }
}
