use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

fn ensure_non_negative(name: &str, value: i32) -> error_stack::Result<(), KernelError> {
    if value < 0 {
        return Err(Report::new(KernelError::Validation)
            .attach_printable(format!("{name} must not be negative, got {value}")));
    }
    Ok(())
}

/// Page size of a catalog listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct SelectLimit(i32);

impl SelectLimit {
    pub const DEFAULT: i32 = 30;

    pub fn new(value: impl Into<i32>) -> Self {
        Self(value.into())
    }

    pub fn ensure_non_negative(&self) -> error_stack::Result<(), KernelError> {
        ensure_non_negative("limit", self.0)
    }
}

impl Default for SelectLimit {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Number of rows skipped before a catalog page starts.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize,
)]
pub struct SelectOffset(i32);

impl SelectOffset {
    pub fn new(value: impl Into<i32>) -> Self {
        Self(value.into())
    }

    pub fn ensure_non_negative(&self) -> error_stack::Result<(), KernelError> {
        ensure_non_negative("offset", self.0)
    }
}
