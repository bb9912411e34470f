#![doc = include_str!("../puzzles/07.md")]

use std::error::Error;

use aoc2023::camel_cards::{parse_entries, ranking_table, HandRanker, Mode, ParseEntryError};
use aoc2023::config::{Config, HELP};
use aoc2023::{debugln, solve};

fn total_winnings(input: &str, mode: Mode) -> Result<u64, ParseEntryError> {
    let entries = parse_entries(input)?;
    debugln!("Parsed {} entries", entries.len());
    Ok(HandRanker::new(mode).total_winnings(&entries))
}

pub fn part_one(input: &str) -> Result<u64, ParseEntryError> {
    total_winnings(input, Mode::Standard)
}

pub fn part_two(input: &str) -> Result<u64, ParseEntryError> {
    total_winnings(input, Mode::Joker)
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let input = match &config.input {
        Some(path) => aoc2023::read_file_at(path)?,
        None => aoc2023::read_file("inputs", 7)?,
    };

    for mode in config.modes() {
        match mode {
            Mode::Standard => solve!(1, part_one, &input),
            Mode::Joker => solve!(2, part_two, &input),
        }

        if config.table {
            let entries = parse_entries(&input)?;
            println!("{}", ranking_table(&HandRanker::new(mode), &entries));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = aoc2023::read_file("examples", 7).unwrap();
        assert_eq!(part_one(&input), Ok(6440));
    }

    #[test]
    fn test_part_two() {
        let input = aoc2023::read_file("examples", 7).unwrap();
        assert_eq!(part_two(&input), Ok(5905));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(part_one(""), Ok(0));
        assert_eq!(part_two("\n"), Ok(0));
    }

    #[test]
    fn test_bad_input() {
        assert!(matches!(
            part_one("32T3K 765\n32T3K\n"),
            Err(ParseEntryError::Syntax { line: 2, .. })
        ));
    }
}
