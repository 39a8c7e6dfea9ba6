/// A cursor for byte-by-byte inline parsing with position tracking.
///
/// Positions are byte offsets into `s`. Callers only slice at positions of
/// ASCII delimiters or at the ends of the input, which are always char
/// boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances until `b` is the next byte or the input is exhausted.
    ///
    /// Returns true if `b` was found.
    pub fn bump_until(&mut self, b: u8) -> bool {
        while !self.eof() {
            if self.peek() == Some(b) {
                return true;
            }
            self.bump();
        }
        false
    }

    /// Returns the text between two byte positions.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}
