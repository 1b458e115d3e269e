//! Forward-only reader over the argument tokens.

/// Single-pass cursor over a borrowed token slice.
///
/// The cursor never rewinds and never mutates the underlying tokens.
#[derive(Debug)]
pub struct ArgCursor<'a, S> {
    tokens: &'a [S],
    position: usize,
}

impl<'a, S: AsRef<str>> ArgCursor<'a, S> {
    /// Creates a cursor positioned before the first token.
    #[must_use]
    pub const fn new(tokens: &'a [S]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Returns true if at least one token remains.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.position < self.tokens.len()
    }

    /// Takes the next token, or `None` once the cursor is exhausted.
    pub fn next_token(&mut self) -> Option<&'a str> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token.as_ref())
    }
}
