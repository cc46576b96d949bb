//! Output envelope types.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// One length-bounded unit of output. `part` is 1-based and contiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePart {
    pub part: usize,
    pub content: String,
}

/// The full result of one conversion call.
///
/// `message_id` correlates the parts of a single conversion; it is random,
/// carries no meaning, and is only practically unique within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message_id: String,
    pub total_parts: usize,
    pub parts: Vec<MessagePart>,
}

/// Generate a fresh hex-encoded 8-byte message identifier.
pub(crate) fn generate_message_id() -> String {
    let mut bytes = [0u8; 8];
    rand::thread_rng().fill_bytes(&mut bytes);
    let mut id = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(id, "{byte:02x}");
    }
    id
}
