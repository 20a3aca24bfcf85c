/// Decodes exactly four hex digits (either case) into a UTF-16 code unit.
#[inline]
pub(crate) fn hex_to_u32(hex: &[u8]) -> Option<u32> {
    if hex.len() != 4 {
        return None;
    }
    hex.iter().try_fold(0u32, |acc, &ch| {
        let digit = (ch as char).to_digit(16)?;
        Some((acc << 4) | digit)
    })
}

#[inline(always)]
pub(crate) fn is_high_surrogate(code: u32) -> bool {
    (0xD800..0xDC00).contains(&code)
}

#[inline(always)]
pub(crate) fn is_low_surrogate(code: u32) -> bool {
    (0xDC00..0xE000).contains(&code)
}

/// Combines a high and a low surrogate into the code point they encode.
#[inline(always)]
pub(crate) fn combine_surrogates(high: u32, low: u32) -> u32 {
    (((high - 0xD800) << 10) | (low - 0xDC00)) + 0x10000
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_hex_to_u32() {
        assert_eq!(hex_to_u32(b"0041"), Some(0x41));
        assert_eq!(hex_to_u32(b"d83D"), Some(0xD83D));
        assert_eq!(hex_to_u32(b"FFFF"), Some(0xFFFF));
        assert_eq!(hex_to_u32(b"00G0"), None);
        assert_eq!(hex_to_u32(b"+123"), None);
        assert_eq!(hex_to_u32(b"123"), None);
    }

    #[test]
    fn test_surrogates() {
        assert!(is_high_surrogate(0xD83D));
        assert!(!is_high_surrogate(0xDE00));
        assert!(is_low_surrogate(0xDE00));
        assert_eq!(combine_surrogates(0xD83D, 0xDE00), 0x1F600);
        assert_eq!(combine_surrogates(0xDBFF, 0xDFFF), 0x10FFFF);
    }
}
