/// A byte cursor over inline text.
///
/// All delimiters the inline parser looks for are ASCII, so every position
/// the cursor stops at after matching one is a char boundary.
#[derive(Clone)]
pub struct Cursor<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Advances past the current char (not just one byte).
    pub fn bump_char(&mut self) {
        if let Some(c) = self.s[self.i..].chars().next() {
            self.i += c.len_utf8();
        }
    }

    /// Consumes `byte` if it is next.
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.i += 1;
            true
        } else {
            false
        }
    }

    /// Consumes everything up to (not including) the next `byte` on this line.
    ///
    /// Returns the consumed text, or `None` without moving if `byte` does not
    /// occur before the next newline.
    pub fn take_until(&mut self, byte: u8) -> Option<&'a str> {
        let rest = &self.s.as_bytes()[self.i..];
        let end = rest.iter().position(|&b| b == byte || b == b'\n')?;
        if rest[end] != byte {
            return None;
        }
        let taken = &self.s[self.i..self.i + end];
        self.i += end;
        Some(taken)
    }

    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}
