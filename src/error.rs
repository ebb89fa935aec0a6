//! Error enum
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Warc(warc::Error),
    Csv(csv::Error),
    Url(url::ParseError),
    Reqwest(reqwest::Error),
    Glob(glob::GlobError),
    GlobPattern(glob::PatternError),
    FastText(String),
    Custom(String),

    /// The segment stream could not be decompressed or framed into records.
    /// Fatal for the segment only.
    CorruptArchive { segment: String, reason: String },

    /// A shard could not be flushed to disk. The rows that were being flushed are kept.
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap any displayable failure into a [Error::CorruptArchive] for `segment`.
    pub fn corrupt(segment: &str, reason: impl std::fmt::Display) -> Self {
        Error::CorruptArchive {
            segment: segment.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Warc(e) => write!(f, "warc error: {e}"),
            Error::Csv(e) => write!(f, "csv error: {e}"),
            Error::Url(e) => write!(f, "url error: {e}"),
            Error::Reqwest(e) => write!(f, "http error: {e}"),
            Error::Glob(e) => write!(f, "glob error: {e}"),
            Error::GlobPattern(e) => write!(f, "glob pattern error: {e}"),
            Error::FastText(e) => write!(f, "fasttext error: {e}"),
            Error::Custom(e) => write!(f, "{e}"),
            Error::CorruptArchive { segment, reason } => {
                write!(f, "corrupt archive {segment}: {reason}")
            }
            Error::WriteFailure { path, source } => {
                write!(f, "could not write shard {path:?}: {source}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<warc::Error> for Error {
    fn from(e: warc::Error) -> Error {
        Error::Warc(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::Url(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Reqwest(e)
    }
}

impl From<glob::GlobError> for Error {
    fn from(e: glob::GlobError) -> Error {
        Error::Glob(e)
    }
}

impl From<glob::PatternError> for Error {
    fn from(e: glob::PatternError) -> Error {
        Error::GlobPattern(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
