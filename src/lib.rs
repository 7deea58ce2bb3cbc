#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod bind;
pub mod classify;
pub mod error;
pub mod types;

pub use bind::{BindValue, MAX_DECIMAL_SCALE, Scalar, bind_query, build_bind_variable, encode_scalar};
pub use classify::{check_error, extract_errno, extract_sqlstate};
pub use error::{Error, ServerDiagnostics};
pub use types::{BindVariable, BoundQuery, FieldType, RpcCode, RpcError, TypedValue};
