use std::fmt;

/// A Sudoku digit (1-9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// Digit 1.
    D1 = 1,
    /// Digit 2.
    D2 = 2,
    /// Digit 3.
    D3 = 3,
    /// Digit 4.
    D4 = 4,
    /// Digit 5.
    D5 = 5,
    /// Digit 6.
    D6 = 6,
    /// Digit 7.
    D7 = 7,
    /// Digit 8.
    D8 = 8,
    /// Digit 9.
    D9 = 9,
}

impl Digit {
    /// Array containing all digits in ascending order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from its numeric value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use gradoku_core::Digit;
    ///
    /// assert_eq!(Digit::from_value(4), Digit::D4);
    /// ```
    #[must_use]
    pub const fn from_value(value: u8) -> Self {
        match value {
            1 => Self::D1,
            2 => Self::D2,
            3 => Self::D3,
            4 => Self::D4,
            5 => Self::D5,
            6 => Self::D6,
            7 => Self::D7,
            8 => Self::D8,
            9 => Self::D9,
            _ => panic!("digit value out of range"),
        }
    }

    /// Creates a digit from a zero-based index (0-8).
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < 9);
        #[expect(clippy::cast_possible_truncation)]
        let value = index as u8 + 1;
        Self::from_value(value)
    }

    /// Returns the digit denoted by a decimal ASCII character, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use gradoku_core::Digit;
    ///
    /// assert_eq!(Digit::from_ascii('7'), Some(Digit::D7));
    /// assert_eq!(Digit::from_ascii('0'), None);
    /// ```
    #[must_use]
    pub const fn from_ascii(c: char) -> Option<Self> {
        match c {
            '1' => Some(Self::D1),
            '2' => Some(Self::D2),
            '3' => Some(Self::D3),
            '4' => Some(Self::D4),
            '5' => Some(Self::D5),
            '6' => Some(Self::D6),
            '7' => Some(Self::D7),
            '8' => Some(Self::D8),
            '9' => Some(Self::D9),
            _ => None,
        }
    }

    /// Returns the numeric value of the digit (1-9).
    #[must_use]
    #[inline]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the zero-based index of the digit (0-8).
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize - 1
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.value()
    }
}
