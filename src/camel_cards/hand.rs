use std::fmt;
use std::str::FromStr;

use super::Symbol;
use crate::helpers::parse;

pub const HAND_SIZE: usize = 5;

/// Five symbols in the order they were dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Symbol; HAND_SIZE]);

/// Why a string is not a [`Hand`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidHandError {
    #[error("expected 5 symbols, found {0}")]
    WrongLength(usize),

    #[error("unrecognized symbol {0:?}")]
    UnknownSymbol(char),
}

/// A hand and what was bid on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub hand: Hand,
    pub bid: u32,
}

/// Why a line of input is not an [`Entry`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseEntryError {
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("line {line}: {source}")]
    Hand {
        line: usize,
        source: InvalidHandError,
    },

    #[error("line {line}: bid must be positive")]
    ZeroBid { line: usize },
}

impl Hand {
    pub fn new(symbols: [Symbol; HAND_SIZE]) -> Self {
        Self(symbols)
    }

    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.0.iter().copied()
    }
}

impl FromStr for Hand {
    type Err = InvalidHandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != HAND_SIZE {
            return Err(InvalidHandError::WrongLength(count));
        }

        let mut symbols = [Symbol::Two; HAND_SIZE];
        for (slot, ch) in symbols.iter_mut().zip(s.chars()) {
            *slot = Symbol::try_from(ch)?;
        }
        Ok(Self(symbols))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl Entry {
    pub fn new(hand: Hand, bid: u32) -> Self {
        Self { hand, bid }
    }

    /// Parses one line of input, numbering it `line` in any error.
    pub fn parse_line(s: &str, line: usize) -> Result<Self, ParseEntryError> {
        let (hand, bid) = parse::from_str(s, Self::parser()).map_err(|err| {
            ParseEntryError::Syntax {
                line,
                message: parse::render_error(err, s),
            }
        })?;
        let hand = hand
            .parse()
            .map_err(|source| ParseEntryError::Hand { line, source })?;
        if bid == 0 {
            return Err(ParseEntryError::ZeroBid { line });
        }
        Ok(Self { hand, bid })
    }
}

impl FromStr for Entry {
    type Err = ParseEntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_line(s, 1)
    }
}

/// Parses every non-blank line of `input` as an [`Entry`].
pub fn parse_entries(input: &str) -> Result<Vec<Entry>, ParseEntryError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| Entry::parse_line(line, index + 1))
        .collect()
}

mod parsing {
    use super::*;

    use combine as c;

    use c::parser::char::space;
    use c::{ParseError, Parser, Stream};

    impl Entry {
        /// "32T3K 765", trailing whitespace allowed
        ///
        /// The hand comes back as raw text so that symbol errors can be
        /// reported as an [`InvalidHandError`] rather than a grammar error.
        pub(super) fn parser<Input>() -> impl Parser<Input, Output = (String, u32)>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            let hand = c::many1::<String, _, _>(c::satisfy(|ch: char| !ch.is_whitespace()));
            let separator = c::skip_many1(space());
            let bid = parse::decimal_integer::<_, u32>();
            let trailing = c::skip_many(space());

            (hand, separator, bid, trailing).map(|(hand, _, bid, _)| (hand, bid))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    #[test]
    fn parse_hand() {
        use Symbol::*;
        assert_eq!(hand("32T3K"), Hand::new([Three, Two, Ten, Three, King]));
        assert_eq!(hand("32T3K").to_string(), "32T3K");
    }

    #[test]
    fn hand_wrong_length() {
        assert_eq!("".parse::<Hand>(), Err(InvalidHandError::WrongLength(0)));
        assert_eq!("2345".parse::<Hand>(), Err(InvalidHandError::WrongLength(4)));
        assert_eq!(
            "234567".parse::<Hand>(),
            Err(InvalidHandError::WrongLength(6))
        );
    }

    #[test]
    fn hand_unknown_symbol() {
        assert_eq!(
            "23X45".parse::<Hand>(),
            Err(InvalidHandError::UnknownSymbol('X'))
        );
        assert_eq!(
            "kk677".parse::<Hand>(),
            Err(InvalidHandError::UnknownSymbol('k'))
        );
    }

    #[test]
    fn parse_entry() {
        assert_eq!(
            "T55J5 684".parse::<Entry>(),
            Ok(Entry::new(hand("T55J5"), 684))
        );
        assert_eq!(
            "T55J5 \t 684".parse::<Entry>(),
            Ok(Entry::new(hand("T55J5"), 684))
        );
    }

    #[test]
    fn entry_errors() {
        assert!(matches!(
            "T55J5".parse::<Entry>(),
            Err(ParseEntryError::Syntax { line: 1, .. })
        ));
        assert!(matches!(
            "T55J5 12x".parse::<Entry>(),
            Err(ParseEntryError::Syntax { line: 1, .. })
        ));
        assert_eq!(
            "T55J 684".parse::<Entry>(),
            Err(ParseEntryError::Hand {
                line: 1,
                source: InvalidHandError::WrongLength(4)
            })
        );
    }

    #[test]
    fn entry_trailing_whitespace() {
        assert_eq!(
            parse_entries("32T3K 765 \nKK677 28\t\n"),
            Ok(vec![
                Entry::new(hand("32T3K"), 765),
                Entry::new(hand("KK677"), 28),
            ])
        );
    }

    #[test]
    fn entry_bid_range() {
        assert_eq!(
            "AAAAA 4294967295".parse::<Entry>(),
            Ok(Entry::new(hand("AAAAA"), u32::MAX))
        );
        assert!(matches!(
            "AAAAA 18446744073709551615".parse::<Entry>(),
            Err(ParseEntryError::Syntax { line: 1, .. })
        ));
        assert_eq!(
            parse_entries("23456 1\n32T3K 0\n"),
            Err(ParseEntryError::ZeroBid { line: 2 })
        );
    }

    #[test]
    fn parse_entries_skips_blank_lines() {
        let input = "32T3K 765\n\nKK677 28\n";
        assert_eq!(
            parse_entries(input),
            Ok(vec![
                Entry::new(hand("32T3K"), 765),
                Entry::new(hand("KK677"), 28),
            ])
        );
        assert_eq!(parse_entries(""), Ok(vec![]));
    }

    #[test]
    fn parse_entries_reports_line_number() {
        let input = "32T3K 765\nKK677 28\nKK6Z7 1\n";
        assert_eq!(
            parse_entries(input),
            Err(ParseEntryError::Hand {
                line: 3,
                source: InvalidHandError::UnknownSymbol('Z')
            })
        );
    }
}
