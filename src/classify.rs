use crate::error::{Error, ServerDiagnostics};
use crate::types::{RpcCode, RpcError};

const ERRNO_TAG: &str = "(errno ";
const SQLSTATE_TAG: &str = "(sqlstate ";

/// Extracts the MySQL errno from a server error message, if any.
///
/// Returns `1` when there is no message at all, a reserved sentinel
/// distinct from `0`, which means "message present but no errno tag".
/// Callers depend on telling the two apart; do not unify them.
pub fn extract_errno(message: Option<&str>) -> i32 {
    let Some(message) = message else {
        return 1;
    };
    let Some(tag_pos) = message.find(ERRNO_TAG) else {
        return 0;
    };
    let start = tag_pos + ERRNO_TAG.len();
    let Some(len) = message[start..].find(')') else {
        return 0;
    };
    message[start..start + len].parse().unwrap_or(0)
}

/// Extracts the SQLSTATE from a server error message, if any.
///
/// Returns the empty string when the message is absent, carries no
/// `(sqlstate ...)` tag, or the tag is unterminated.
pub fn extract_sqlstate(message: Option<&str>) -> String {
    let Some(message) = message else {
        return String::new();
    };
    let Some(tag_pos) = message.find(SQLSTATE_TAG) else {
        return String::new();
    };
    let start = tag_pos + SQLSTATE_TAG.len();
    let Some(len) = message[start..].find(')') else {
        return String::new();
    };
    message[start..start + len].to_string()
}

/// Maps an error returned by VTGate onto the client error taxonomy.
///
/// Returns `Ok(())` when there is no error or its code is `OK`;
/// otherwise the category-specific [`Error`] variant, carrying the
/// errno and SQLSTATE extracted from the message. Codes outside the
/// mapped set fall through to [`Error::NonTransient`] so future
/// protocol codes degrade instead of crashing.
pub fn check_error(error: Option<&RpcError>) -> Result<(), Error> {
    let Some(error) = error else {
        return Ok(());
    };
    if error.code == RpcCode::Ok {
        return Ok(());
    }

    let diagnostics = ServerDiagnostics {
        errno: extract_errno(Some(&error.message)),
        sql_state: extract_sqlstate(Some(&error.message)),
        message: error.message.clone(),
    };

    Err(match error.code {
        RpcCode::InvalidArgument => Error::SyntaxOrArgument(diagnostics),
        RpcCode::DeadlineExceeded => Error::Timeout(diagnostics),
        RpcCode::AlreadyExists => Error::IntegrityConstraintViolation(diagnostics),
        RpcCode::Unavailable => Error::Transient(diagnostics),
        RpcCode::Unauthenticated => Error::Authorization(diagnostics),
        RpcCode::Aborted => Error::Recoverable(diagnostics),
        code => {
            tracing::debug!(code = %code, "rpc error code has no dedicated category");
            Error::NonTransient(diagnostics)
        }
    })
}
