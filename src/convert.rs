//! Conversion orchestrator.
//!
//! Splits the input into length-bounded parts, tokenizes and renders each
//! part on a bounded worker pool, and reassembles the results in their
//! original order. Rendering tasks run under a fault boundary: a panic in
//! one worker surfaces as a single error and no partial results are
//! returned.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use rayon::prelude::*;
use tracing::debug;

use crate::{
    config::Config,
    error::{ConvertError, Result},
    render::render_block,
    response::{MessagePart, MessageResponse, generate_message_id},
    split::break_long_text,
    tokenize::tokenize,
};

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "rendering worker panicked".to_string()
    }
}

/// Tokenize one part and render its blocks, in parallel, preserving block
/// order in the joined output.
fn render_part(content: &str, config: &Config) -> Result<String> {
    let blocks = tokenize(content.trim());
    if config.enable_debug_logs {
        debug!(blocks = blocks.len(), "tokenized part");
    }

    let mut rendered: Vec<String> = Vec::with_capacity(blocks.len());
    for tasks in blocks.chunks(config.worker_queue_size.max(1)) {
        let batch: Result<Vec<String>> = tasks
            .par_iter()
            .map(|block| {
                catch_unwind(AssertUnwindSafe(|| render_block(block, config)))
                    .map_err(|panic| ConvertError::processing(panic_message(panic.as_ref())))
            })
            .collect();
        rendered.extend(batch?);
    }

    Ok(rendered.join("\n\n").trim().to_string())
}

/// Convert Markdown input into the structured response envelope.
///
/// # Errors
/// Returns [`ConvertError::InvalidInput`] for empty input and
/// [`ConvertError::ProcessingFailed`] if the worker pool cannot be built
/// or a rendering task faults.
pub fn convert(input: &str, config: &Config) -> Result<MessageResponse> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ConvertError::InvalidInput);
    }

    if config.enable_debug_logs {
        debug!(
            safety = ?config.safety_level,
            max_length = config.max_message_length,
            workers = config.effective_workers(),
            "starting conversion"
        );
    }

    let raw_parts = break_long_text(input, config.max_message_length);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.effective_workers())
        .build()
        .map_err(|err| ConvertError::ProcessingFailed {
            message: "failed to build worker pool".to_string(),
            source: Some(Box::new(err)),
        })?;

    let mut contents: Vec<String> = Vec::with_capacity(raw_parts.len());
    for chunk in raw_parts.chunks(config.max_concurrent_parts.max(1)) {
        let batch: Result<Vec<String>> = pool.install(|| {
            chunk
                .par_iter()
                .map(|part| render_part(part, config))
                .collect()
        });
        contents.extend(batch?);
    }

    let parts: Vec<MessagePart> = contents
        .into_iter()
        .enumerate()
        .map(|(i, content)| MessagePart {
            part: i + 1,
            content,
        })
        .collect();

    if config.enable_debug_logs {
        debug!(total_parts = parts.len(), "conversion finished");
    }

    Ok(MessageResponse {
        message_id: generate_message_id(),
        total_parts: parts.len(),
        parts,
    })
}

/// Convert and flatten the parts into one string joined by blank lines.
///
/// # Errors
/// Propagates the same errors as [`convert`].
pub fn convert_text(input: &str, config: &Config) -> Result<String> {
    let response = convert(input, config)?;
    let contents: Vec<&str> = response
        .parts
        .iter()
        .map(|part| part.content.as_str())
        .collect();
    Ok(contents.join("\n\n"))
}
