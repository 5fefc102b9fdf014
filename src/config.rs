/// Expression nesting allowed by [`ParserConfig::default`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings for a single parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Name shown when rendering diagnostics.
    pub source_name: String,
    /// Maximum expression nesting depth. `None` leaves recursion uncapped,
    /// bounded only by the stack of the calling thread.
    pub max_depth: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            source_name: String::from("shell"),
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source_name(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = source_name.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn without_max_depth(mut self) -> Self {
        self.max_depth = None;
        self
    }
}
