mod json_or_default;

pub use json_or_default::*;
