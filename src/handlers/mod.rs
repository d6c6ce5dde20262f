// Handlers module

pub mod create_message;
pub mod delete_message;
pub mod error;
pub mod get_message;
pub mod list_messages;
pub mod reply;

pub use create_message::create_message_handler;
pub use delete_message::delete_message_handler;
pub use error::ApiError;
pub use get_message::get_message_handler;
pub use list_messages::list_messages_handler;

/// Largest request body accepted by the create endpoint (1 MiB)
pub const MAX_BODY_BYTES: usize = 1024 * 1024;
