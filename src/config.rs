//! Conversion configuration.
//!
//! A [`Config`] is a plain value constructed once per conversion call and
//! threaded through explicitly; there is no process-wide mutable state.

/// Escaping aggressiveness applied by the block renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SafetyLevel {
    /// Translate inline formatting only; escape nothing.
    None,
    /// Translate formatting and escape reserved characters outside of
    /// formatting spans and code.
    #[default]
    Basic,
    /// Escape every reserved character, disabling all formatting.
    Strict,
}

/// Maximum characters Telegram accepts in a single message.
pub const TELEGRAM_MAX_LENGTH: usize = 4096;

/// Options controlling escaping, table layout, message length and
/// concurrency. Construct with [`Config::new`] and the `with_*` setters.
#[derive(Debug, Clone)]
pub struct Config {
    pub safety_level: SafetyLevel,
    pub align_table_columns: bool,
    pub ignore_table_separator: bool,
    pub max_message_length: usize,
    pub enable_debug_logs: bool,
    /// Rendering worker threads; `0` means the number of available CPUs.
    pub num_workers: usize,
    /// Upper bound on in-flight rendering tasks per part.
    pub worker_queue_size: usize,
    /// Upper bound on parts processed concurrently.
    pub max_concurrent_parts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            safety_level: SafetyLevel::Basic,
            align_table_columns: true,
            ignore_table_separator: false,
            max_message_length: TELEGRAM_MAX_LENGTH,
            enable_debug_logs: false,
            num_workers: 0,
            worker_queue_size: 32,
            max_concurrent_parts: 8,
        }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_safety_level(mut self, level: SafetyLevel) -> Self {
        self.safety_level = level;
        self
    }

    #[must_use]
    pub fn with_table_alignment(mut self, align: bool) -> Self {
        self.align_table_columns = align;
        self
    }

    #[must_use]
    pub fn with_ignore_table_separator(mut self, ignore: bool) -> Self {
        self.ignore_table_separator = ignore;
        self
    }

    #[must_use]
    pub fn with_max_message_length(mut self, length: usize) -> Self {
        if length > 0 {
            self.max_message_length = length;
        }
        self
    }

    #[must_use]
    pub fn with_debug_logs(mut self, enable: bool) -> Self {
        self.enable_debug_logs = enable;
        self
    }

    #[must_use]
    pub fn with_num_workers(mut self, workers: usize) -> Self {
        self.num_workers = workers;
        self
    }

    #[must_use]
    pub fn with_worker_queue_size(mut self, size: usize) -> Self {
        if size > 0 {
            self.worker_queue_size = size;
        }
        self
    }

    #[must_use]
    pub fn with_max_concurrent_parts(mut self, parts: usize) -> Self {
        if parts > 0 {
            self.max_concurrent_parts = parts;
        }
        self
    }

    /// Worker count with the CPU-count default applied.
    #[must_use]
    pub(crate) fn effective_workers(&self) -> usize {
        if self.num_workers == 0 {
            std::thread::available_parallelism().map_or(4, usize::from)
        } else {
            self.num_workers
        }
    }
}
