/// A line transformation scoped to the parsing of one nested container.
///
/// Contexts are pushed before a container's body is parsed recursively and
/// popped when that parse returns. They never modify the underlying lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// Strip `indent` leading columns from every line of a list item.
    ///
    /// The marker line itself is stripped unconditionally (`ignore_prefix`);
    /// any later non-blank line must start with `indent` columns of
    /// whitespace, otherwise the item is over.
    ListItem { indent: usize, ignore_prefix: bool },
    /// Require and strip a `>` prefix (and one following space).
    BlockQuote,
}

impl Context {
    /// Context for a list item whose content starts at column `indent`.
    pub fn list_item(indent: usize) -> Self {
        Context::ListItem {
            indent,
            ignore_prefix: true,
        }
    }

    /// Context for the body of a block quote.
    pub fn block_quote() -> Self {
        Context::BlockQuote
    }
}

/// A sequential, read-only view over the lines of a document.
///
/// Every line handed out by [`LineCursor::current`] has been passed through the
/// active [`Context`] stack, outermost first. When a context rejects the line
/// under the cursor, the cursor reports end of input to whoever is parsing at
/// that nesting level.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    contexts: Vec<Context>,
}

impl<'a> LineCursor<'a> {
    /// Creates a cursor over the lines of `source` (line terminators removed).
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines().collect(),
            pos: 0,
            contexts: Vec::new(),
        }
    }

    /// Returns the current line as seen through the active contexts, or `None`
    /// at end of input or when a context is exhausted.
    pub fn current(&self) -> Option<&'a str> {
        self.peek(0)
    }

    /// Looks `ahead` lines past the current one without advancing.
    ///
    /// Lines other than the current one never get the marker-line exemption of
    /// a freshly pushed list item context.
    pub fn peek(&self, ahead: usize) -> Option<&'a str> {
        let line = self.lines.get(self.pos + ahead)?;
        self.match_context(line, ahead == 0)
    }

    /// Returns true when no line is available at this nesting level.
    pub fn is_end(&self) -> bool {
        self.current().is_none()
    }

    /// Moves to the next raw line.
    pub fn advance(&mut self) {
        for context in &mut self.contexts {
            if let Context::ListItem { ignore_prefix, .. } = context {
                *ignore_prefix = false;
            }
        }
        if self.pos < self.lines.len() {
            self.pos += 1;
        }
    }

    /// Index of the current raw line.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of raw lines in the document.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the document has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn push_context(&mut self, context: Context) {
        self.contexts.push(context);
    }

    pub fn pop_context(&mut self) -> Option<Context> {
        self.contexts.pop()
    }

    /// Runs `f` with `context` pushed, popping it again on return.
    ///
    /// The context stack is restored to its depth before the call even if `f`
    /// left extra contexts behind.
    pub fn with_context<T>(&mut self, context: Context, f: impl FnOnce(&mut Self) -> T) -> T {
        let depth = self.contexts.len();
        self.push_context(context);
        let result = f(self);
        self.contexts.truncate(depth);
        result
    }

    fn match_context(&self, line: &'a str, at_current: bool) -> Option<&'a str> {
        let bytes = line.as_bytes();
        let mut offset = 0usize;

        for context in &self.contexts {
            match *context {
                Context::ListItem {
                    indent,
                    ignore_prefix,
                } => {
                    if line.get(offset..).is_some_and(|rest| rest.trim().is_empty()) {
                        continue;
                    }
                    if offset + indent > line.len() {
                        return None;
                    }
                    if !(ignore_prefix && at_current) {
                        let prefix = line.get(offset..offset + indent)?;
                        if !prefix.trim().is_empty() {
                            return None;
                        }
                    }
                    offset += indent;
                }
                Context::BlockQuote => {
                    while bytes.get(offset) == Some(&b' ') {
                        offset += 1;
                    }
                    if bytes.get(offset) != Some(&b'>') {
                        return None;
                    }
                    offset += 1;
                    if bytes.get(offset) == Some(&b' ') {
                        offset += 1;
                    }
                }
            }
        }

        line.get(offset..)
    }
}
