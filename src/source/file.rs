use crate::model::SourceError;
use crate::source::traits::{ReportSink, TicketSource};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::info;

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl TicketSource for FileSource {
    async fn fetch(&self) -> Result<String, SourceError> {
        let path_str = self.path.display().to_string();
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => {
                info!("Read {} bytes from {}", content.len(), path_str);
                Ok(content)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(SourceError::NotFound(path_str)),
            Err(source) => Err(SourceError::Io { path: path_str, source }),
        }
    }
}

pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl ReportSink for FileSink {
    /// Replaces the file content with `report` verbatim.
    async fn write(&self, report: &str) -> Result<(), SourceError> {
        tokio::fs::write(&self.path, report)
            .await
            .map_err(|source| SourceError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        info!("Report written to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("flight-analyzer-{}-{}", std::process::id(), name))
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let source = FileSource::new(temp_path("absent.json"));
        match source.fetch().await {
            Err(SourceError::NotFound(path)) => assert!(path.ends_with("absent.json")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn reads_existing_file() {
        let path = temp_path("tickets.json");
        tokio::fs::write(&path, "{\"tickets\": []}").await.unwrap();

        let content = FileSource::new(&path).fetch().await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();
        assert_eq!(content, "{\"tickets\": []}");
    }

    #[tokio::test]
    async fn sink_output_is_read_back_verbatim() {
        let path = temp_path("roundtrip.txt");
        let report = "Минимальное время полета:\nSU: 9 часов 0 минут\n";

        FileSink::new(&path).write(report).await.unwrap();
        let content = FileSource::new(&path).fetch().await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(content, report);
    }

    #[tokio::test]
    async fn sink_overwrites_previous_report() {
        let path = temp_path("overwrite.txt");
        let sink = FileSink::new(&path);
        sink.write("first, longer report").await.unwrap();
        sink.write("second").await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();
        assert_eq!(content, "second");
    }
}
