use error_stack::ResultExt;
use kernel::KernelError;

pub mod database;
pub(crate) mod error;

/// Reads `key` from the process environment, falling back to `.env`.
pub(crate) fn env(key: &str) -> error_stack::Result<String, KernelError> {
    dotenvy::var(key)
        .change_context(KernelError::Internal)
        .attach_printable_lazy(|| format!("environment variable {key} is not usable"))
}
