//! Code builder utility for generating properly indented code.

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use proxygen_codegen::render::CodeBuilder;
///
/// let code = CodeBuilder::kotlin()
///     .line("fun main() {")
///     .indent()
///     .line("println(\"Hello, world!\")")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "fun main() {\n    println(\"Hello, world!\")\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: &'static str,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with 4-space indentation (Kotlin default).
    pub fn kotlin() -> Self {
        Self {
            indent_level: 0,
            indent: "    ",
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use proxygen_codegen::render::CodeBuilder;
    ///
    /// let code = CodeBuilder::kotlin()
    ///     .block("override fun logout() {", "}", |b| {
    ///         b.line("logoutDelegate?.invoke() ?: super.logout()")
    ///     })
    ///     .build();
    /// ```
    pub fn block<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::kotlin()
    }
}
