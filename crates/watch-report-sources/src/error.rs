use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single call against Jellyfin, Radarr or Sonarr.
///
/// Callers decide whether a failure aborts the run or degrades to empty data;
/// clients never swallow errors into empty results themselves.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{service}: request failed: {source}")]
    Http {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service}: {status} from {url}: {body}")]
    Status {
        service: &'static str,
        status: StatusCode,
        url: String,
        body: String,
    },

    #[error("{service}: unexpected response: {message}")]
    Decode {
        service: &'static str,
        message: String,
    },

    #[error("{0}: not authenticated")]
    NotAuthenticated(&'static str),

    #[error("{service}: invalid client configuration: {message}")]
    Config {
        service: &'static str,
        message: String,
    },
}

impl SourceError {
    pub fn service(&self) -> &'static str {
        match self {
            SourceError::Http { service, .. }
            | SourceError::Status { service, .. }
            | SourceError::Decode { service, .. }
            | SourceError::Config { service, .. } => service,
            SourceError::NotAuthenticated(service) => service,
        }
    }

    /// 401/403 from the server, i.e. bad credentials or API key
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            SourceError::Status { status, .. }
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
        ) || matches!(self, SourceError::NotAuthenticated(_))
    }
}
