//! Parsing options and configuration.

/// Options for turning raw text into classified lines.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Normalize each line to Unicode NFC before stripping (off by default:
    /// NFC rewrites CJK compatibility ideographs)
    pub normalize_unicode: bool,

    /// Yield blank lines instead of dropping them
    pub keep_blank_lines: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable strict mode (reject blank content).
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Enable or disable Unicode normalization.
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Keep blank lines in the output (for inspection).
    pub fn with_blank_lines(mut self, keep: bool) -> Self {
        self.keep_blank_lines = keep;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Lenient,
            normalize_unicode: false,
            keep_blank_lines: false,
        }
    }
}

/// How blank input is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Blank content is an error
    Strict,
    /// Blank content produces an empty document
    #[default]
    Lenient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options_builder() {
        let options = ParseOptions::new()
            .strict()
            .with_normalization(true)
            .with_blank_lines(true);

        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert!(options.normalize_unicode);
        assert!(options.keep_blank_lines);
    }

    #[test]
    fn test_default_options() {
        let options = ParseOptions::default();
        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert!(!options.normalize_unicode);
        assert!(!options.keep_blank_lines);
    }
}
