//! String literals understood by the remote interpreter.
//!
//! Everything sent to the device travels as source code, so arbitrary text has
//! to be embedded as a quoted literal. Listings come back as the `repr` of a
//! list of strings and are decoded here as well.

pub use crate::error::Error;

/// Escapes `text` so it can be placed between single quotes in remote code.
///
/// Backslash, quotes and the common whitespace controls get their short
/// escapes, any other ASCII control character becomes `\xNN`. Non-ASCII text
/// is passed through untouched.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }

    out
}

/// Wraps `text` into a single-quoted literal.
pub fn quote(text: &str) -> String {
    format!("'{}'", escape(text))
}

/// Decodes the textual form of a list of strings, e.g. `['boot.py', 'lib']`.
pub fn parse_str_list(src: &str) -> Result<Vec<String>, Error> {
    let mut cursor = Cursor::new(src);
    let mut items = Vec::new();

    cursor.skip_whitespace();
    cursor.expect('[')?;

    loop {
        cursor.skip_whitespace();
        match cursor.peek() {
            Some(']') => {
                let _ = cursor.bump();
                break;
            }
            Some(_) => {
                items.push(cursor.string()?);
                cursor.skip_whitespace();
                match cursor.bump() {
                    Some(',') => continue,
                    Some(']') => break,
                    Some(c) => return Err(Error::UnexpectedChar(c, cursor.pos - c.len_utf8())),
                    None => return Err(Error::UnexpectedEof),
                }
            }
            None => return Err(Error::UnexpectedEof),
        }
    }

    cursor.skip_whitespace();
    if cursor.pos < src.len() {
        return Err(Error::TrailingData(cursor.pos));
    }

    Ok(items)
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            self.pos += c.len_utf8();
        }
    }

    fn expect(&mut self, want: char) -> Result<(), Error> {
        match self.bump() {
            Some(c) if c == want => Ok(()),
            Some(c) => Err(Error::UnexpectedChar(c, self.pos - c.len_utf8())),
            None => Err(Error::UnexpectedEof),
        }
    }

    fn string(&mut self) -> Result<String, Error> {
        let start = self.pos;
        let quote = match self.bump() {
            Some(c @ ('\'' | '"')) => c,
            Some(c) => return Err(Error::UnexpectedChar(c, start)),
            None => return Err(Error::UnexpectedEof),
        };

        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(Error::UnexpectedEof),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => out.push(self.escape()?),
                Some(c @ ('\n' | '\r')) => {
                    return Err(Error::UnexpectedChar(c, self.pos - 1));
                }
                Some(c) => out.push(c),
            }
        }
    }

    fn escape(&mut self) -> Result<char, Error> {
        let start = self.pos - 1;
        let c = match self.bump().ok_or(Error::UnexpectedEof)? {
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            '0' => '\0',
            'a' => '\x07',
            'b' => '\x08',
            'f' => '\x0c',
            'v' => '\x0b',
            c @ ('\\' | '\'' | '"') => c,
            'x' => self.hex(2, start)?,
            'u' => self.hex(4, start)?,
            'U' => self.hex(8, start)?,
            _ => return Err(Error::BadEscape(start)),
        };

        Ok(c)
    }

    fn hex(&mut self, digits: usize, start: usize) -> Result<char, Error> {
        let mut value = 0u32;
        for _ in 0..digits {
            let digit = self
                .bump()
                .ok_or(Error::UnexpectedEof)?
                .to_digit(16)
                .ok_or(Error::BadEscape(start))?;
            value = value * 16 + digit;
        }

        char::from_u32(value).ok_or(Error::BadEscape(start))
    }
}
