//! Character classes as lookup tables built at compile time.

/// A set of ASCII characters.
pub(crate) struct CharClass {
    table: [bool; 128],
    chars: &'static str,
}

impl CharClass {
    const fn new(chars: &'static str) -> Self {
        let bytes = chars.as_bytes();
        let mut table = [false; 128];

        let mut i = 0;
        while i < bytes.len() {
            assert!(bytes[i].is_ascii());
            table[bytes[i] as usize] = true;
            i += 1;
        }

        Self { table, chars }
    }

    pub(crate) fn contains(&self, c: char) -> bool {
        (c as u32) < 128 && self.table[c as usize]
    }

    /// The members in the order they were declared.
    pub(crate) fn chars(&self) -> &'static str {
        self.chars
    }
}

pub(crate) static WHITESPACE: CharClass = CharClass::new(" \t\x0B\r\n");
pub(crate) static OPERATOR: CharClass = CharClass::new(r"~!@#$%^&*:<>.?/\|=+-");
pub(crate) static IDENT_START: CharClass =
    CharClass::new("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz_");
pub(crate) static IDENT: CharClass =
    CharClass::new("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz_0123456789");

pub(crate) static BINARY: CharClass = CharClass::new("01");
pub(crate) static OCTAL: CharClass = CharClass::new("01234567");
pub(crate) static DECIMAL: CharClass = CharClass::new("0123456789");
pub(crate) static HEXADECIMAL: CharClass = CharClass::new("0123456789abcdef");
