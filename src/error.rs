//! Error enum
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Http(reqwest::Error),
    /// Non-success HTTP status.
    Status {
        url: String,
        code: u16,
    },
    Url(url::ParseError),
    Html(String),
    Serde(serde_json::Error),
    CorruptPdf {
        path: PathBuf,
        reason: String,
    },
    /// Missing or unreadable cleaning resource file.
    Resource {
        path: PathBuf,
        source: std::io::Error,
    },
    Custom(String),
}

impl Error {
    /// Errors that abort a single listing attempt but leave the crawl going:
    /// transport failures, bad statuses and unusable listing pages.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Status { .. } | Error::Url(_) | Error::Html(_)
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Http(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::Url(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn recoverable_kinds() {
        let status = Error::Status {
            url: "https://export.arxiv.org/list/cs.AI/1601".to_string(),
            code: 503,
        };
        assert!(status.is_recoverable());
        assert!(Error::Html("no body".to_string()).is_recoverable());

        let io = Error::from(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        assert!(!io.is_recoverable());
        assert!(!Error::Custom("oops".to_string()).is_recoverable());
    }
}
