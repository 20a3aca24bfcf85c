use std::io::{self, Write};

/// Maps the byte after a backslash to the byte it stands for; zero marks an invalid escape.
/// `\u` is handled separately and is not in the table.
pub(crate) const ESCAPED_TAB: [u8; 256] = {
    let mut tab = [0u8; 256];
    tab[b'"' as usize] = b'"';
    tab[b'\\' as usize] = b'\\';
    tab[b'/' as usize] = b'/';
    tab[b'b' as usize] = b'\x08';
    tab[b'f' as usize] = b'\x0c';
    tab[b'n' as usize] = b'\n';
    tab[b'r' as usize] = b'\r';
    tab[b't' as usize] = b'\t';
    tab
};

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// For every byte that must be escaped inside a JSON string: the length of its escape sequence
/// and the sequence itself. Bytes with length zero are copied through.
pub(crate) const QUOTE_TAB: [(u8, [u8; 6]); 256] = {
    let mut tab = [(0u8, [0u8; 6]); 256];
    let mut ch = 0;
    while ch < 0x20 {
        tab[ch] = (
            6,
            [b'\\', b'u', b'0', b'0', HEX_UPPER[ch >> 4], HEX_UPPER[ch & 0xf]],
        );
        ch += 1;
    }
    tab[b'\x08' as usize] = (2, *b"\\b\0\0\0\0");
    tab[b'\x0c' as usize] = (2, *b"\\f\0\0\0\0");
    tab[b'\n' as usize] = (2, *b"\\n\0\0\0\0");
    tab[b'\r' as usize] = (2, *b"\\r\0\0\0\0");
    tab[b'\t' as usize] = (2, *b"\\t\0\0\0\0");
    tab[b'"' as usize] = (2, *b"\\\"\0\0\0\0");
    tab[b'\\' as usize] = (2, *b"\\\\\0\0\0\0");
    tab
};

#[inline(always)]
pub(crate) fn need_escape(ch: u8) -> bool {
    QUOTE_TAB[ch as usize].0 != 0
}

/// Writes the escaped body of `value`, without the surrounding quotes.
///
/// Runs of bytes that need no escaping, including all multi-byte UTF-8 sequences, are written in
/// one call.
pub fn format_string<W>(value: &str, writer: &mut W) -> io::Result<()>
where
    W: ?Sized + Write,
{
    let bytes = value.as_bytes();
    let mut start = 0;
    for (i, &ch) in bytes.iter().enumerate() {
        if !need_escape(ch) {
            continue;
        }
        if start < i {
            writer.write_all(&bytes[start..i])?;
        }
        let (cnt, seq) = &QUOTE_TAB[ch as usize];
        writer.write_all(&seq[..*cnt as usize])?;
        start = i + 1;
    }
    if start < bytes.len() {
        writer.write_all(&bytes[start..])?;
    }
    Ok(())
}
