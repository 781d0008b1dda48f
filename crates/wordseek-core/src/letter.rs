//! Uppercase Latin letter representation.

use std::fmt::{self, Display};

/// An uppercase Latin letter in the range `A`..=`Z`.
///
/// Grid cells and words are stored as letters, so every value of this type is
/// guaranteed to be one of the 26 letters of the basic Latin alphabet.
/// Lowercase input is folded to uppercase on construction.
///
/// # Examples
///
/// ```
/// use wordseek_core::Letter;
///
/// let letter = Letter::from_char('q').unwrap();
/// assert_eq!(letter.as_char(), 'Q');
/// assert_eq!(letter.index(), 16);
///
/// assert_eq!(Letter::from_char('é'), None);
/// assert_eq!(Letter::ALL.len(), 26);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Number of letters in the alphabet.
    pub const COUNT: usize = 26;

    /// The letter `A`.
    pub const A: Self = Self(b'A');

    /// The letter `Z`.
    pub const Z: Self = Self(b'Z');

    /// Array containing all letters from `A` to `Z` in alphabetical order.
    pub const ALL: [Self; Self::COUNT] = {
        let mut all = [Self::A; Self::COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < Self::COUNT {
            all[i] = Self(b'A' + i as u8);
            i += 1;
        }
        all
    };

    /// Creates a letter from an ASCII byte, folding lowercase to uppercase.
    ///
    /// Returns `None` for bytes that are not ASCII letters.
    #[must_use]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        if byte.is_ascii_alphabetic() {
            Some(Self(byte.to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Creates a letter from a character, folding lowercase to uppercase.
    ///
    /// Returns `None` for anything outside the basic Latin alphabet.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        u8::try_from(ch).ok().and_then(Self::from_ascii)
    }

    /// Returns the letter at `index` in alphabetical order (`0` is `A`).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 26 or greater.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    /// Returns the zero-based alphabetical index of this letter.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    /// Returns the letter as an uppercase ASCII byte.
    #[must_use]
    pub const fn as_ascii(self) -> u8 {
        self.0
    }

    /// Returns the letter as an uppercase character.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_char(), f)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}

impl TryFrom<char> for Letter {
    type Error = char;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::from_char(ch).ok_or(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(Letter::ALL[0], Letter::A);
        assert_eq!(Letter::ALL[25], Letter::Z);
        for (i, letter) in Letter::ALL.into_iter().enumerate() {
            assert_eq!(letter.index(), i);
            assert_eq!(Letter::from_index(i), letter);
        }

        assert_eq!(format!("{}", Letter::A), "A");
        let ch: char = Letter::Z.into();
        assert_eq!(ch, 'Z');
    }

    #[test]
    fn test_from_char_folds_case() {
        assert_eq!(Letter::from_char('a'), Some(Letter::A));
        assert_eq!(Letter::from_char('Z'), Some(Letter::Z));
        assert_eq!(Letter::from_ascii(b'm').map(Letter::as_char), Some('M'));
    }

    #[test]
    fn test_from_char_rejects_non_letters() {
        for ch in ['0', ' ', '|', '-', 'ß', 'é', 'Ж'] {
            assert_eq!(Letter::from_char(ch), None, "{ch:?} should be rejected");
        }
        assert_eq!(Letter::try_from('7'), Err('7'));
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_from_index_out_of_range_panics() {
        let _ = Letter::from_index(26);
    }
}
