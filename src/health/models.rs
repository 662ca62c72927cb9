use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Connection,
    Authentication,
    Query,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::Connection => "connection",
            FailureKind::Authentication => "authentication",
            FailureKind::Query => "query",
        };

        f.write_str(name)
    }
}

/// A failed probe. The kind is for diagnostics only, callers always see the
/// same response regardless of it.
#[derive(Debug, thiserror::Error)]
#[error("{kind} failure: {source}")]
pub struct ProbeError {
    kind: FailureKind,
    #[source]
    source: sqlx::Error,
}

impl ProbeError {
    pub fn kind(&self) -> FailureKind {
        self.kind
    }
}

impl From<sqlx::Error> for ProbeError {
    fn from(source: sqlx::Error) -> Self {
        let kind = match &source {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Configuration(_) => FailureKind::Connection,
            // SQLSTATE class 28: invalid authorization specification
            sqlx::Error::Database(db_err)
                if db_err.code().is_some_and(|code| code.starts_with("28")) =>
            {
                FailureKind::Authentication
            }
            _ => FailureKind::Query,
        };

        Self { kind, source }
    }
}
