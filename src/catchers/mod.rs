mod bad_request;
mod internal_error;
mod not_found;
mod payload_too_large;
mod unprocessable_entity;

pub use bad_request::*;
pub use internal_error::*;
pub use not_found::*;
pub use payload_too_large::*;
pub use unprocessable_entity::*;
