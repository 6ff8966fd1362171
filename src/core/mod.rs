pub mod record;
pub mod user;
pub mod message;
pub mod error;

pub use record::{Id, Record};
pub use user::User;
pub use message::Message;
pub use error::CoreError;
