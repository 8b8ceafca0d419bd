mod email_message;
mod email_request;
mod send_result;
mod sender_identity;

pub use email_message::*;
pub use email_request::*;
pub use send_result::*;
pub use sender_identity::*;
