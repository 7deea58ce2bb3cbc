/// Diagnostic fields extracted from a server error message.
///
/// `errno` and `sql_state` come from the `(errno N)` / `(sqlstate XXXXX)`
/// tags embedded in the message; `message` is the original text, tags
/// included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerDiagnostics {
    pub errno: i32,
    pub sql_state: String,
    pub message: String,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The caller supplied a value whose runtime kind has no encoding
    /// rule. Always a caller bug, never retried.
    #[error("unsupported bind value kind: {kind}")]
    UnsupportedValueKind { kind: String },

    /// An empty list is not representable as a list bind variable and
    /// is rejected before any RPC is attempted.
    #[error("cannot pass empty list as list bind variable")]
    EmptyListBindVariable,

    #[error("syntax or argument error: {}", .0.message)]
    SyntaxOrArgument(ServerDiagnostics),

    #[error("deadline exceeded: {}", .0.message)]
    Timeout(ServerDiagnostics),

    #[error("integrity constraint violation: {}", .0.message)]
    IntegrityConstraintViolation(ServerDiagnostics),

    /// Safe to retry as-is.
    #[error("transient error: {}", .0.message)]
    Transient(ServerDiagnostics),

    #[error("authorization error: {}", .0.message)]
    Authorization(ServerDiagnostics),

    /// Retryable after backoff.
    #[error("recoverable error: {}", .0.message)]
    Recoverable(ServerDiagnostics),

    /// Fallback for status codes with no dedicated category. Retry
    /// safety is unknown, so treated as non-retryable.
    #[error("unclassified rpc error: {}", .0.message)]
    NonTransient(ServerDiagnostics),
}

impl Error {
    /// Server diagnostics, when this error was classified from an RPC
    /// error. `None` for the encoding-side variants.
    pub fn diagnostics(&self) -> Option<&ServerDiagnostics> {
        match self {
            Self::UnsupportedValueKind { .. } | Self::EmptyListBindVariable => None,
            Self::SyntaxOrArgument(d)
            | Self::Timeout(d)
            | Self::IntegrityConstraintViolation(d)
            | Self::Transient(d)
            | Self::Authorization(d)
            | Self::Recoverable(d)
            | Self::NonTransient(d) => Some(d),
        }
    }

    /// Whether caller retry logic may attempt the operation again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transient(_) | Self::Recoverable(_))
    }
}
