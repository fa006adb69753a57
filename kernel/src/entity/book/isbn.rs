use std::ops::RangeInclusive;

use serde::Serialize;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Fromln, AsRefln)]
pub struct Isbn13(i64);

impl Isbn13 {
    /// Every thirteen digit number, leading digit non-zero.
    pub const RANGE: RangeInclusive<i64> = 1_000_000_000_000..=9_999_999_999_999;

    pub fn new(isbn: impl Into<i64>) -> Self {
        Self(isbn.into())
    }

    pub fn is_thirteen_digits(&self) -> bool {
        Self::RANGE.contains(&self.0)
    }
}

#[cfg(test)]
mod test {
    use super::Isbn13;

    #[test]
    fn digit_count() {
        assert!(Isbn13::new(9780441172719_i64).is_thirteen_digits());
        assert!(!Isbn13::new(441172719_i64).is_thirteen_digits());
        assert!(!Isbn13::new(97804411727190_i64).is_thirteen_digits());
        assert!(!Isbn13::new(-9780441172719_i64).is_thirteen_digits());
    }
}
