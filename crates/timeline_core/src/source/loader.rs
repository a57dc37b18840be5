//! Data sources and payload loading.

use crate::model::payload::TimelinePayload;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Status reported by sources that have no transport-level status code.
pub const STATUS_OK: u16 = 200;

/// Raw response returned by a data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceResponse {
    pub status: u16,
    pub body: String,
}

impl SourceResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: STATUS_OK,
            body: body.into(),
        }
    }

    /// `2xx` statuses are successful.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level failure: the source produced no response at all.
#[derive(Debug)]
pub enum SourceError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Unavailable(String),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Unavailable(message) => write!(f, "source unavailable: {message}"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Unavailable(_) => None,
        }
    }
}

/// Payload loading error.
#[derive(Debug)]
pub enum LoadError {
    Source(SourceError),
    /// The source answered with a non-success status.
    Status(u16),
    Parse(serde_json::Error),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source(err) => write!(f, "{err}"),
            Self::Status(status) => write!(f, "Request failed with status {status}"),
            Self::Parse(err) => write!(f, "invalid timeline payload: {err}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Source(err) => Some(err),
            Self::Status(_) => None,
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<SourceError> for LoadError {
    fn from(value: SourceError) -> Self {
        Self::Source(value)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Anything that can produce the raw timeline payload.
pub trait DataSource {
    /// Short human-readable origin, used in logs.
    fn describe(&self) -> String;
    fn fetch(&self) -> Result<SourceResponse, SourceError>;
}

/// Reads the payload from a local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<SourceResponse, SourceError> {
        std::fs::read_to_string(&self.path)
            .map(SourceResponse::ok)
            .map_err(|source| SourceError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

/// Serves a fixed in-memory response.
///
/// Used for embedded payloads and for exercising failure paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSource {
    response: Result<SourceResponse, String>,
}

impl StaticSource {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            response: Ok(SourceResponse {
                status,
                body: body.into(),
            }),
        }
    }

    pub fn json(body: impl Into<String>) -> Self {
        Self::new(STATUS_OK, body)
    }

    /// A source that fails before producing any response.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
        }
    }
}

impl DataSource for StaticSource {
    fn describe(&self) -> String {
        "static".to_string()
    }

    fn fetch(&self) -> Result<SourceResponse, SourceError> {
        self.response
            .clone()
            .map_err(SourceError::Unavailable)
    }
}

/// Fetches and parses the timeline payload.
///
/// # Errors
/// - `LoadError::Source` when the source produced no response.
/// - `LoadError::Status` for any non-`2xx` status.
/// - `LoadError::Parse` when the body is not a valid payload.
pub fn load_payload(source: &dyn DataSource) -> Result<TimelinePayload, LoadError> {
    let origin = source.describe();
    let response = source.fetch()?;
    if !response.is_success() {
        warn!(
            "event=payload_load module=source status=error origin={} http_status={}",
            origin, response.status
        );
        return Err(LoadError::Status(response.status));
    }

    let payload = TimelinePayload::from_json_str(&response.body)?;
    info!(
        "event=payload_load module=source status=ok origin={} categories={} eras={} events={}",
        origin,
        payload.categories.len(),
        payload.timeline_data.len(),
        payload.event_count()
    );
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::{load_payload, LoadError, SourceResponse, StaticSource};

    #[test]
    fn success_range_is_2xx() {
        assert!(SourceResponse::ok("").is_success());
        assert!(!SourceResponse {
            status: 304,
            body: String::new()
        }
        .is_success());
    }

    #[test]
    fn non_success_status_is_rejected_even_with_body() {
        let source = StaticSource::new(500, r#"{"categories":{}}"#);
        let err = load_payload(&source).expect_err("500 must fail");
        assert!(matches!(err, LoadError::Status(500)));
        assert_eq!(err.to_string(), "Request failed with status 500");
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = load_payload(&StaticSource::json("not json")).expect_err("garbage must fail");
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn unavailable_source_is_a_source_error() {
        let err = load_payload(&StaticSource::unavailable("offline"))
            .expect_err("unavailable must fail");
        assert!(matches!(err, LoadError::Source(_)));
        assert!(err.to_string().contains("offline"));
    }

    #[test]
    fn numeric_title_does_not_fail_the_load() {
        let source = StaticSource::json(
            r#"{"categories":{"a":{"label":"A","color":"red"}},"timelineData":[{"era":"Qing","events":[{"category":"a","year":"1911","title":1911,"desc":null}]}]}"#,
        );
        let payload = load_payload(&source).expect("loose fields must still load");
        assert_eq!(payload.timeline_data[0].events[0].title, "1911");
    }
}
