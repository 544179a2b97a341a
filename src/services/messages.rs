use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::{fs::OpenOptions, io::AsyncWriteExt, sync::Mutex};

/// Width of the dashed line closing each record
pub const SEPARATOR_WIDTH: usize = 40;

/// A contact form submission
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactMessage {
    /// Renders the submission as one log record, separator line included
    pub fn to_record(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nMessage: {}\n{}\n",
            self.name,
            self.email,
            self.message,
            "-".repeat(SEPARATOR_WIDTH)
        )
    }
}

/// Append-only destination for contact submissions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Appends one record. Callers treat failures as best-effort.
    async fn append(&self, message: &ContactMessage) -> std::io::Result<()>;
}

/// Message sink backed by a plain text file
///
/// Appends are serialized so concurrent submissions never interleave.
pub struct FileMessageSink {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileMessageSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl MessageSink for FileMessageSink {
    async fn append(&self, message: &ContactMessage) -> std::io::Result<()> {
        let record = message.to_record();

        let _guard = self.lock.lock().await;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(record.as_bytes()).await?;
        file.flush().await
    }
}
