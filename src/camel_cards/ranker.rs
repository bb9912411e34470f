use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use smallvec::SmallVec;

use super::{Entry, Hand, Symbol, HAND_SIZE};

/// Which rules a [`HandRanker`] plays by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// `J` is an ordinary Jack, ranked between `T` and `Q`.
    Standard,
    /// `J` is a Joker: weakest symbol in tie-breaks, but stands in for the
    /// most common other symbol when classifying.
    Joker,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode {0:?}, expected \"standard\" or \"joker\"")]
pub struct ParseModeError(String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Self::Standard),
            "joker" => Ok(Self::Joker),
            _ => Err(ParseModeError(s.to_owned())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Joker => write!(f, "joker"),
        }
    }
}

/// The kind of hand, from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfKind = 3,
    FullHouse = 4,
    FourOfKind = 5,
    FiveOfKind = 6,
}

impl HandCategory {
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Maps symbol counts, sorted largest first, to a category.
    ///
    /// Panics if the counts don't describe a five-symbol hand.
    fn from_sorted_counts(counts: &[usize]) -> Self {
        match counts {
            [5] => Self::FiveOfKind,
            [4, 1] => Self::FourOfKind,
            [3, 2] => Self::FullHouse,
            [3, 1, 1] => Self::ThreeOfKind,
            [2, 2, 1] => Self::TwoPair,
            [2, 1, 1, 1] => Self::OnePair,
            [1, 1, 1, 1, 1] => Self::HighCard,
            _ => unreachable!("symbol counts {counts:?} don't form a hand"),
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HighCard => "High card",
            Self::OnePair => "One pair",
            Self::TwoPair => "Two pair",
            Self::ThreeOfKind => "Three of a kind",
            Self::FullHouse => "Full house",
            Self::FourOfKind => "Four of a kind",
            Self::FiveOfKind => "Five of a kind",
        };
        f.pad(name)
    }
}

/// An [`Entry`] together with where it placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEntry<'a> {
    /// 1-based; the weakest hand has rank 1.
    pub rank: u64,
    pub entry: &'a Entry,
    pub category: HandCategory,
}

impl RankedEntry<'_> {
    /// `rank * bid`; a `u32` bid times any realistic rank fits in a `u64`.
    pub fn winnings(&self) -> u64 {
        self.rank * u64::from(self.entry.bid)
    }
}

/// Classifies, orders and scores hands under one [`Mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandRanker {
    mode: Mode,
    /// Tie-break strength of each symbol, indexed by [`Symbol::index`].
    strengths: [u8; Symbol::COUNT],
    wildcard: Option<Symbol>,
}

impl HandRanker {
    pub fn new(mode: Mode) -> Self {
        // Face values: 2..=9, then T=10, J=11, Q=12, K=13, A=14.
        let mut strengths = [0; Symbol::COUNT];
        for (strength, symbol) in (2..).zip(Symbol::ALL) {
            strengths[symbol.index()] = strength;
        }

        let wildcard = match mode {
            Mode::Standard => None,
            Mode::Joker => {
                strengths[Symbol::Jack.index()] = 1;
                Some(Symbol::Jack)
            }
        };

        Self {
            mode,
            strengths,
            wildcard,
        }
    }

    pub fn standard() -> Self {
        Self::new(Mode::Standard)
    }

    pub fn joker() -> Self {
        Self::new(Mode::Joker)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn strength(&self, symbol: Symbol) -> u8 {
        self.strengths[symbol.index()]
    }

    pub fn classify(&self, hand: &Hand) -> HandCategory {
        let wildcards = hand
            .symbols()
            .filter(|&symbol| Some(symbol) == self.wildcard)
            .count();

        let mut counts: SmallVec<[usize; HAND_SIZE]> = hand
            .symbols()
            .filter(|&symbol| Some(symbol) != self.wildcard)
            .counts()
            .into_values()
            .sorted_by(|a, b| b.cmp(a))
            .collect();

        // Wildcards always do best joining the biggest group.
        match counts.first_mut() {
            Some(largest) => *largest += wildcards,
            None => counts.push(wildcards),
        }

        HandCategory::from_sorted_counts(&counts)
    }

    /// Total order over hands: category first, then symbol strength position
    /// by position from the left.
    pub fn compare(&self, left: &Hand, right: &Hand) -> Ordering {
        self.classify(left)
            .cmp(&self.classify(right))
            .then_with(|| self.tie_break(left, right))
    }

    fn tie_break(&self, left: &Hand, right: &Hand) -> Ordering {
        if left == right {
            return Ordering::Equal;
        }

        left.symbols()
            .zip(right.symbols())
            .map(|(l, r)| self.strength(l).cmp(&self.strength(r)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| {
                unreachable!("distinct hands {left} and {right} tied on every position")
            })
    }

    /// Orders `entries` from weakest to strongest. Entries with identical
    /// hands keep their relative input order.
    pub fn rank<'a>(&self, entries: &'a [Entry]) -> Vec<RankedEntry<'a>> {
        let mut sorted: Vec<&Entry> = entries.iter().collect();
        sorted.sort_by(|a, b| self.compare(&a.hand, &b.hand));

        (1..)
            .zip(sorted)
            .map(|(rank, entry)| {
                let ranked = RankedEntry {
                    rank,
                    entry,
                    category: self.classify(&entry.hand),
                };
                debugln!(
                    "{} #{rank}: {} ({}) bid {} wins {}",
                    self.mode,
                    entry.hand,
                    ranked.category,
                    entry.bid,
                    ranked.winnings()
                );
                ranked
            })
            .collect()
    }

    pub fn total_winnings(&self, entries: &[Entry]) -> u64 {
        self.rank(entries).iter().map(RankedEntry::winnings).sum()
    }
}
