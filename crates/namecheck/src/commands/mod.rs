//! Command implementations.

pub mod generate;
pub mod show;
pub mod verify;

use namecheck_core::VerifyError;

/// Process exit status for a failed command.
///
/// The two user-input errors keep distinct codes so scripts can tell
/// "generate first" apart from "bad candidate".
pub fn exit_code(error: &anyhow::Error) -> u8 {
    match error.downcast_ref::<VerifyError>() {
        Some(VerifyError::InvalidInput { .. } | VerifyError::TooManyTokens { .. }) => 2,
        Some(VerifyError::NoTargetName) => 3,
        None => 1,
    }
}

/// Stable machine-readable code for a failed command.
pub fn error_code(error: &anyhow::Error) -> &'static str {
    match error.downcast_ref::<VerifyError>() {
        Some(VerifyError::InvalidInput { .. }) => "invalid_input",
        Some(VerifyError::TooManyTokens { .. }) => "too_many_tokens",
        Some(VerifyError::NoTargetName) => "no_target_name",
        None => "error",
    }
}

/// Recovery hint for user-input errors.
pub fn hint(error: &anyhow::Error) -> Option<&'static str> {
    error.downcast_ref::<VerifyError>().map(VerifyError::user_hint)
}
