use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Layout knobs for the pretty printer.
///
/// Deserializes from camelCase JSON. Keys that are absent keep their default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FormatOptions {
    /// Spaces per indent level.
    pub indent_size: usize,
    /// Soft limit used by the line-break estimates.
    pub max_line_length: usize,
    #[serde(alias = "spaceAroundOps")]
    pub space_around_operators: bool,
    pub break_long_expressions: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent_size: 2,
            max_line_length: 40,
            space_around_operators: true,
            break_long_expressions: true,
        }
    }
}

impl FormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent_size(mut self, value: usize) -> Self {
        self.indent_size = value;
        self
    }

    pub fn with_max_line_length(mut self, value: usize) -> Self {
        self.max_line_length = value;
        self
    }

    pub fn with_space_around_operators(mut self, value: bool) -> Self {
        self.space_around_operators = value;
        self
    }

    pub fn with_break_long_expressions(mut self, value: bool) -> Self {
        self.break_long_expressions = value;
        self
    }

    /// Parses options from a JSON object such as
    /// `{"indentSize": 4, "maxLineLength": 80}`.
    pub fn from_json(text: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(text)?;
        options.check()?;
        Ok(options)
    }

    fn check(&self) -> Result<()> {
        if self.max_line_length == 0 {
            return Err(Error::InvalidOptions(
                "maxLineLength must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
