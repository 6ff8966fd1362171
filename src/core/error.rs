use thiserror::Error;

/// Failures of the resource operations themselves, independent of storage.
/// The display text is the message returned to clients.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Occurs when no user carries the requested id.
    #[error("Usuario no encontrado")]
    UserNotFound,
    /// Occurs when no message carries the requested id.
    #[error("Mensaje no encontrado")]
    MessageNotFound,
    /// Occurs when a message is created for a user
    /// that is not present in the user collection.
    #[error("Usuario no válido")]
    InvalidUser
}
