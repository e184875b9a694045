use super::Scanner;
use crate::ScanError;

/// Bytes that end a run of literal string content.
#[inline]
fn is_special(b: u8) -> bool {
    b == b'"' || b == b'\\' || b < 0x20
}

impl Scanner<'_> {
    /// `" ( unescaped | escape )* "`
    ///
    /// Returns the cursor just past the closing quote.
    ///
    /// # Errors
    ///
    /// Fails when the string is unterminated, contains a raw byte below 0x20,
    /// or contains a malformed escape.
    pub fn string(&self, pos: usize) -> Result<usize, ScanError> {
        if self.byte(pos)? != b'"' {
            return Err(ScanError::InvalidValue);
        }
        let mut pos = pos + 1;

        loop {
            // Skip a run of literal content in one step.
            let rest = self.input.get(pos..).unwrap_or_default();
            pos += rest.iter().position(|&b| is_special(b)).unwrap_or(rest.len());

            match self.byte(pos)? {
                b'"' => return Ok(pos + 1),
                b'\\' => pos = self.escape(pos + 1)?,
                _ => return Err(ScanError::ControlCharacterInString),
            }
        }
    }

    /// The byte(s) after a backslash. Validates shape only: `\u` needs four
    /// hex digits but is not decoded.
    fn escape(&self, pos: usize) -> Result<usize, ScanError> {
        match self.byte(pos)? {
            b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => Ok(pos + 1),
            b'u' => {
                let rest = self.input.get(pos + 1..).unwrap_or_default();
                let hex = &rest[..rest.len().min(4)];
                if !hex.iter().all(u8::is_ascii_hexdigit) {
                    return Err(ScanError::InvalidUnicodeEscape);
                }
                if hex.len() < 4 {
                    return Err(ScanError::UnexpectedEndOfInput);
                }
                Ok(pos + 5)
            }
            _ => Err(ScanError::InvalidEscape),
        }
    }
}
