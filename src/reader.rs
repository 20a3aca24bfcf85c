/// Line and column of a byte in the input, both one-based.
pub(crate) struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub(crate) fn from_index(mut i: usize, data: &[u8]) -> Self {
        // i must not exceed the length of data
        i = i.min(data.len());
        let mut position = Position { line: 1, column: 1 };
        for ch in &data[..i] {
            match *ch {
                b'\n' => {
                    position.line += 1;
                    position.column = 1;
                }
                _ => {
                    position.column += 1;
                }
            }
        }
        position
    }
}

/// Cursor over validated JSON text.
///
/// The input is kept as `str` so that slices cut at ASCII delimiters can be borrowed as `str`
/// without re-validating them.
pub(crate) struct Read<'a> {
    input: &'a str,
    index: usize,
}

impl<'a> Read<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, index: 0 }
    }

    #[inline(always)]
    pub fn as_u8_slice(&self) -> &'a [u8] {
        self.input.as_bytes()
    }

    #[inline(always)]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline(always)]
    pub fn remain(&self) -> usize {
        self.input.len() - self.index
    }

    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.as_u8_slice().get(self.index).copied()
    }

    #[inline(always)]
    pub fn next(&mut self) -> Option<u8> {
        self.peek().map(|ch| {
            self.index += 1;
            ch
        })
    }

    #[inline(always)]
    pub fn eat(&mut self, n: usize) {
        self.index = (self.index + n).min(self.input.len());
    }

    /// Consumes the next `n` bytes, or returns `None` and consumes nothing when fewer remain.
    #[inline(always)]
    pub fn next_n(&mut self, n: usize) -> Option<&'a [u8]> {
        if self.remain() < n {
            return None;
        }
        let ret = &self.as_u8_slice()[self.index..self.index + n];
        self.index += n;
        Some(ret)
    }

    /// Borrows `input[start..end]`.
    ///
    /// Both bounds must sit on character boundaries, which holds whenever they were found next to
    /// an ASCII byte. Returns `None` otherwise.
    #[inline(always)]
    pub fn slice_str(&self, start: usize, end: usize) -> Option<&'a str> {
        self.input.get(start..end)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_read() {
        let mut read = Read::new("[1, \"é\"]");
        assert_eq!(read.remain(), 9);
        assert_eq!(read.next(), Some(b'['));
        assert_eq!(read.peek(), Some(b'1'));
        read.eat(3);
        assert_eq!(read.next_n(1), Some(&b"\""[..]));
        assert_eq!(read.slice_str(5, 7), Some("é"));
        assert_eq!(read.slice_str(5, 6), None);
        assert_eq!(read.next_n(10), None);
        assert_eq!(read.index(), 5);
        read.eat(100);
        assert_eq!(read.remain(), 0);
        assert_eq!(read.next(), None);
    }

    #[test]
    fn test_position() {
        let data = b"{\n\"a\":\n  1x}";
        let pos = Position::from_index(0, data);
        assert_eq!((pos.line, pos.column), (1, 1));
        let pos = Position::from_index(10, data);
        assert_eq!((pos.line, pos.column), (3, 4));
        let pos = Position::from_index(100, data);
        assert_eq!((pos.line, pos.column), (3, 6));
    }
}
