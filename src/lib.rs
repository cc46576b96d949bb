//! Markdown to Telegram MarkdownV2 conversion.
//!
//! The pipeline tokenizes input into semantic blocks (text, code, tables,
//! headings, lists, quotes), renders each block under a configurable
//! escaping policy, and splits long documents into message-sized parts
//! without breaking code fences, tables, or inline formatting pairs.
//!
//! ```rust
//! use mdtelegram::{Config, convert};
//!
//! let response = convert("# Hello\n\n**world**", &Config::new()).unwrap();
//! assert_eq!(response.total_parts, 1);
//! assert_eq!(response.parts[0].content, "*Hello*\n\n*world*");
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod escape;
pub mod inline;
pub mod patterns;
pub mod render;
pub mod response;
pub mod split;
pub mod table;
pub mod tokenize;

pub use config::{Config, SafetyLevel, TELEGRAM_MAX_LENGTH};
pub use convert::{convert, convert_text};
pub use error::{ConvertError, Result};
pub use render::render_block;
pub use response::{MessagePart, MessageResponse};
pub use split::break_long_text;
pub use table::render_table;
pub use tokenize::{Block, BlockKind, tokenize};
