use error_stack::Report;
use serde::Serialize;
use vodca::{AsRefln, Fromln};

use crate::KernelError;

/// Number of copies of one book in the cart. Never below one.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Fromln, AsRefln)]
pub struct CartItemQuantity(i32);

impl CartItemQuantity {
    pub fn new(quantity: impl Into<i32>) -> error_stack::Result<Self, KernelError> {
        let quantity = quantity.into();
        if quantity < 1 {
            return Err(Report::new(KernelError::Validation)
                .attach_printable(format!("quantity must be at least 1, got {quantity}")));
        }
        Ok(Self(quantity))
    }

    /// `None` when the quantity would reach zero.
    pub fn decrement(self) -> Option<Self> {
        match self.0 {
            1 => None,
            quantity => Some(Self(quantity - 1)),
        }
    }
}

impl Default for CartItemQuantity {
    fn default() -> Self {
        Self(1)
    }
}
