use prettytable::{format, row, Table};

use super::{Entry, HandRanker};

/// The full ranking of `entries`, one row per entry, weakest first.
pub fn ranking_table(ranker: &HandRanker, entries: &[Entry]) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row!["Rank", "Hand", "Category", "Bid", "Winnings"]);

    for ranked in ranker.rank(entries) {
        table.add_row(row![
            r->ranked.rank,
            ranked.entry.hand,
            ranked.category,
            r->ranked.entry.bid,
            r->ranked.winnings(),
        ]);
    }

    table
}
