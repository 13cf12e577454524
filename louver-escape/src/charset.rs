#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// ASCII character set.
    #[default]
    Ascii,
    /// DEC special graphics (line drawing) character set.
    DecSpecial,
    /// United Kingdom national character set.
    UnitedKingdom,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CharsetIndex {
    /// Designate G0 character set.
    #[default]
    G0,
    /// Designate G1 character set.
    G1,
}

impl Charset {
    /// Map a character through the charset. ASCII is the common case and
    /// for that we want to do as little as possible.
    #[inline]
    pub fn map(self, c: char) -> char {
        match self {
            Self::Ascii => c,
            Self::UnitedKingdom => match c {
                '#' => '£',
                _ => c,
            },
            Self::DecSpecial => match c {
                '_' => ' ',
                '`' => '◆',
                'a' => '▒',
                'b' => '\u{2409}', // Symbol for horizontal tabulation
                'c' => '\u{240c}', // Symbol for form feed
                'd' => '\u{240d}', // Symbol for carriage return
                'e' => '\u{240a}', // Symbol for line feed
                'f' => '°',
                'g' => '±',
                'h' => '\u{2424}', // Symbol for newline
                'i' => '\u{240b}', // Symbol for vertical tabulation
                'j' => '┘',
                'k' => '┐',
                'l' => '┌',
                'm' => '└',
                'n' => '┼',
                'o' => '⎺',
                'p' => '⎻',
                'q' => '─',
                'r' => '⎼',
                's' => '⎽',
                't' => '├',
                'u' => '┤',
                'v' => '┴',
                'w' => '┬',
                'x' => '│',
                'y' => '≤',
                'z' => '≥',
                '{' => 'π',
                '|' => '≠',
                '}' => '£',
                '~' => '·',
                _ => c,
            },
        }
    }
}
