mod cart;

pub use self::cart::*;
