use log::*;
use microlog_appender_common::formatter::{Formatter, SimpleFormatter};
use microlog_appender_common::{Appender, AppenderError};
use microlog_common_api::LogEvent;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// The canonical identifier of the [`FileAppender`].
pub const FILE_APPENDER_ID: &str = "microlog_appender_file::FileAppender";

/// The file written by a [`FileAppender`] created without an explicit path.
pub const DEFAULT_FILE_NAME: &str = "microlog.txt";

/// An Appender that appends records to a file.
/// The file is created on the first record, so building the Appender never touches the filesystem.
pub struct FileAppender {
    path: PathBuf,
    formatter: Box<dyn Formatter>,
    writer: Mutex<Option<BufWriter<File>>>,
}

impl FileAppender {
    pub fn new() -> FileAppender {
        FileAppender::with_path(DEFAULT_FILE_NAME)
    }

    pub fn with_path<P: Into<PathBuf>>(path: P) -> FileAppender {
        FileAppender {
            path: path.into(),
            formatter: Box::new(SimpleFormatter::new()),
            writer: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<BufWriter<File>, AppenderError> {
        debug!("FileAppender - opening file [{}]", self.path.display());
        let file = OpenOptions::new().create(true).append(true).open(&self.path).map_err(|err| {
            AppenderError::AppenderWriteError {
                message: format!("Cannot open file [{}]: {}", self.path.display(), err),
            }
        })?;
        Ok(BufWriter::new(file))
    }
}

impl Default for FileAppender {
    fn default() -> Self {
        FileAppender::new()
    }
}

impl Appender for FileAppender {
    fn name(&self) -> &str {
        FILE_APPENDER_ID
    }

    fn append(&self, event: &LogEvent) -> Result<(), AppenderError> {
        let line = self.formatter.format(event);
        let mut guard = self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if guard.is_none() {
            *guard = Some(self.open()?);
        }
        if let Some(writer) = guard.as_mut() {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), AppenderError> {
        let mut guard = self.writer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(writer) = guard.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        if let Err(err) = Appender::flush(&*self) {
            warn!("FileAppender - cannot flush file [{}]: {:?}", self.path.display(), err);
        }
    }
}
