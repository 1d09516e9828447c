pub mod config;
pub mod error;
pub mod fields;
pub mod message;
pub mod webhook;

pub use config::Args;
pub use error::NotifyError;
pub use fields::{FieldMap, build_field_map};
pub use message::compose_message;
pub use webhook::{Payload, send_notification};
