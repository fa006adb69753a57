use serde::Serialize;
use vodca::{AsRefln, Fromln};

/// Unit price of a single copy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Fromln, AsRefln)]
pub struct CartItemPrice(f64);

impl CartItemPrice {
    pub fn new(price: impl Into<f64>) -> Self {
        Self(price.into())
    }
}
