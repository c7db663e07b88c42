//! Byte constants used by the scanner.
//!
//! Every delimiter the scanner looks for is ASCII, so it works on bytes and
//! only ever splits the text at ASCII positions.

pub const LINE_FEED: u8 = b'\n';
pub const CARRIAGE_RETURN: u8 = b'\r';
pub const SLASH: u8 = b'/';
pub const ASTERISK: u8 = b'*';
pub const BACKSLASH: u8 = b'\\';
pub const EQUALS: u8 = b'=';
pub const OPEN_PAREN: u8 = b'(';
pub const SINGLE_QUOTE: u8 = b'\'';
pub const DOUBLE_QUOTE: u8 = b'"';
pub const BACKTICK: u8 = b'`';

/// Check if a byte opens a quoted literal.
#[inline]
pub fn is_quote(ch: u8) -> bool {
    matches!(ch, SINGLE_QUOTE | DOUBLE_QUOTE | BACKTICK)
}

/// Check if a byte ends a line comment.
#[inline]
pub fn is_line_break(ch: u8) -> bool {
    ch == LINE_FEED || ch == CARRIAGE_RETURN
}

/// Check if a byte is ASCII whitespace, line breaks included.
#[inline]
pub fn is_white_space(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Check if a byte is a regex literal flag.
#[inline]
pub fn is_regex_flag(ch: u8) -> bool {
    matches!(ch, b'g' | b'i' | b'm' | b's' | b'u' | b'y')
}
