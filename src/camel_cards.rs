//! Camel Cards: poker-like hands of five symbols, ranked against each other
//! and paid out by bid.
//!
//! A [`HandRanker`] is built for one [`Mode`] and does all of the
//! classification, ordering and scoring. Input lines (`"32T3K 765"`) are parsed
//! into [`Entry`]s with [`parse_entries`].

mod hand;
mod ranker;
mod report;
mod symbol;

pub use hand::{parse_entries, Entry, Hand, InvalidHandError, ParseEntryError, HAND_SIZE};
pub use ranker::{HandCategory, HandRanker, Mode, ParseModeError, RankedEntry};
pub use report::ranking_table;
pub use symbol::Symbol;
