use twilight_http::{error::ErrorType, response::DeserializeBodyError};
use twilight_model::util::datetime::TimestampParseError;

/// Coarse classification of a failed platform request.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureKind {
    Forbidden,
    NotFound,
    Other,
}

impl FailureKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            403 => Self::Forbidden,
            404 => Self::NotFound,
            _ => Self::Other,
        }
    }
}

/// A platform call that did not succeed, split by what the caller should do about it.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("missing access: {0}")]
    Forbidden(#[source] twilight_http::Error),
    #[error("unknown resource: {0}")]
    NotFound(#[source] twilight_http::Error),
    #[error("{0}")]
    Request(#[source] twilight_http::Error),
    #[error("unreadable response body: {0}")]
    Body(#[from] DeserializeBodyError),
    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] TimestampParseError),
}

impl PlatformError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Forbidden(_) => FailureKind::Forbidden,
            Self::NotFound(_) => FailureKind::NotFound,
            _ => FailureKind::Other,
        }
    }
}

impl From<twilight_http::Error> for PlatformError {
    fn from(source: twilight_http::Error) -> Self {
        let kind = match source.kind() {
            ErrorType::Response { status, .. } => FailureKind::from_status(status.get()),
            _ => FailureKind::Other,
        };

        match kind {
            FailureKind::Forbidden => Self::Forbidden(source),
            FailureKind::NotFound => Self::NotFound(source),
            FailureKind::Other => Self::Request(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_kinds() {
        assert_eq!(FailureKind::from_status(403), FailureKind::Forbidden);
        assert_eq!(FailureKind::from_status(404), FailureKind::NotFound);
        assert_eq!(FailureKind::from_status(400), FailureKind::Other);
        assert_eq!(FailureKind::from_status(500), FailureKind::Other);
    }
}
