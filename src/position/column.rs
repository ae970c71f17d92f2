//! Board columns (files) `a` through `h`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::A,
        Column::B,
        Column::C,
        Column::D,
        Column::E,
        Column::F,
        Column::G,
        Column::H,
    ];

    /// Zero-based file index, `a == 0`.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn from_index(index: u8) -> Option<Column> {
        Column::ALL.get(index as usize).copied()
    }

    pub fn from_char(c: char) -> Option<Column> {
        match c.to_ascii_lowercase() {
            'a'..='h' => Column::from_index(c.to_ascii_lowercase() as u8 - b'a'),
            _ => None,
        }
    }

    #[inline]
    pub fn to_char(self) -> char {
        char::from(b'a' + self.index())
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
