use derive_more::{Display, Error};
use std::convert::TryFrom;
use std::{ops::Sub, str::FromStr};

/// A column on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum File {
    #[display(fmt = "a")]
    A,
    #[display(fmt = "b")]
    B,
    #[display(fmt = "c")]
    C,
    #[display(fmt = "d")]
    D,
    #[display(fmt = "e")]
    E,
    #[display(fmt = "f")]
    F,
    #[display(fmt = "g")]
    G,
    #[display(fmt = "h")]
    H,
}

impl File {
    const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Constructs [`File`] from index.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range (0..=7).
    pub fn from_index(i: u8) -> Self {
        Self::ALL[i as usize]
    }

    /// This file's index in the range (0..=7).
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Returns an iterator over [`File`]s ordered by [index][`File::index`].
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        Self::ALL.into_iter()
    }
}

impl Sub for File {
    type Output = i8;

    fn sub(self, rhs: Self) -> Self::Output {
        self.index() as i8 - rhs.index() as i8
    }
}

/// The reason why converting [`File`] from index failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected integer in the range `(0..=7)`")]
pub struct FileOutOfRange;

impl TryFrom<u8> for File {
    type Error = FileOutOfRange;

    fn try_from(i: u8) -> Result<Self, Self::Error> {
        Self::ALL.get(i as usize).copied().ok_or(FileOutOfRange)
    }
}

/// The reason why parsing [`File`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse file, expected letter in the range `('a'..='h')`")]
pub struct ParseFileError;

impl TryFrom<char> for File {
    type Error = ParseFileError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'a'..='h' => Ok(Self::from_index(c as u8 - b'a')),
            _ => Err(ParseFileError),
        }
    }
}

impl From<File> for char {
    fn from(f: File) -> char {
        char::from(b'a' + f.index())
    }
}

impl FromStr for File {
    type Err = ParseFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.try_into(),
            _ => Err(ParseFileError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;
    use test_strategy::proptest;

    #[test]
    fn file_guarantees_zero_value_optimization() {
        assert_eq!(size_of::<Option<File>>(), size_of::<File>());
    }

    #[test]
    fn iter_returns_iterator_over_files_in_order() {
        assert_eq!(
            File::iter().collect::<Vec<_>>(),
            (0..=7).map(File::from_index).collect::<Vec<_>>()
        );
    }

    #[test]
    fn iter_returns_iterator_of_exact_size() {
        assert_eq!(File::iter().len(), 8);
    }

    #[proptest]
    fn parsing_printed_file_is_an_identity(f: File) {
        assert_eq!(f.to_string().parse(), Ok(f));
    }

    #[proptest]
    fn parsing_file_fails_for_upper_case_letter(#[strategy("[A-Z]")] s: String) {
        assert_eq!(s.parse::<File>(), Err(ParseFileError));
    }

    #[proptest]
    fn parsing_file_fails_if_length_not_one(#[filter(#s.chars().count() != 1)] s: String) {
        assert_eq!(s.parse::<File>(), Err(ParseFileError));
    }

    #[proptest]
    fn file_can_be_converted_to_char(f: File) {
        assert_eq!(File::try_from(char::from(f)), Ok(f));
    }

    #[proptest]
    fn converting_file_from_letter_out_of_range_fails(
        #[filter(!('a'..='h').contains(&#c))] c: char,
    ) {
        assert_eq!(File::try_from(c), Err(ParseFileError));
    }

    #[proptest]
    fn file_has_an_index(f: File) {
        assert_eq!(File::try_from(f.index()), Ok(f));
    }

    #[proptest]
    fn subtracting_files_gives_distance(a: File, b: File) {
        assert_eq!(a - b, a.index() as i8 - b.index() as i8);
    }

    #[proptest]
    #[should_panic]
    fn from_index_panics_if_index_out_of_range(#[strategy(8u8..)] i: u8) {
        File::from_index(i);
    }

    #[proptest]
    fn converting_file_from_index_out_of_range_fails(#[strategy(8u8..)] i: u8) {
        assert_eq!(File::try_from(i), Err(FileOutOfRange));
    }

    #[proptest]
    fn file_is_ordered_by_index(a: File, b: File) {
        assert_eq!(a < b, a.index() < b.index());
    }
}
