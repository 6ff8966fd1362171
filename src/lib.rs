pub mod core;
pub mod backend;
pub mod server;

pub use crate::core::{Message, Record, User};
pub use crate::core::{message, record, user};
pub use crate::backend::{CollectionStore, JsonStore};
