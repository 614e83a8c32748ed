/// Output buffer that tracks the current column and indent depth.
///
/// Columns count bytes. A newline resets the column and immediately writes
/// the indentation of the current depth.
pub(super) struct Writer {
    out: String,
    column: usize,
    depth: usize,
    indent_size: usize,
}

impl Writer {
    pub(super) fn new(indent_size: usize) -> Self {
        Self {
            out: String::new(),
            column: 0,
            depth: 0,
            indent_size,
        }
    }

    pub(super) fn column(&self) -> usize {
        self.column
    }

    pub(super) fn write(&mut self, text: &str) {
        self.out.push_str(text);
        self.column += text.len();
    }

    pub(super) fn newline(&mut self) {
        self.out.push('\n');
        self.column = 0;
        let pad = " ".repeat(self.depth * self.indent_size);
        self.write(&pad);
    }

    pub(super) fn indent(&mut self) {
        self.depth += 1;
    }

    pub(super) fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub(super) fn finish(self) -> String {
        self.out
    }
}
