/*
 * Shared code for the daily solutions. Each day lives in `src/bin/`, reads its
 * input with [`read_file`] and prints its answers with [`solve!`].
 */

use std::path::Path;
use std::{env, fs, io};

pub const ANSI_ITALIC: &str = "\x1b[3m";
pub const ANSI_BOLD: &str = "\x1b[1m";
pub const ANSI_RESET: &str = "\x1b[0m";

/// Like `println!`, but only prints in builds with debug assertions enabled.
#[macro_export]
macro_rules! debugln {
    ($($tt:tt)*) => {
        if cfg!(debug_assertions) {
            println!($($tt)*);
        }
    };
}

/// Runs `$solver` on `$input` and prints its answer (or error) along with
/// how long it took.
#[macro_export]
macro_rules! solve {
    ($part:expr, $solver:expr, $input:expr) => {{
        use std::fmt::Display;
        use std::time::Instant;
        use $crate::{ANSI_BOLD, ANSI_ITALIC, ANSI_RESET};

        fn print_result<T: Display, E: Display>(
            func: impl FnOnce(&str) -> Result<T, E>,
            input: &str,
        ) {
            let timer = Instant::now();
            let result = func(input);
            let elapsed = timer.elapsed();
            match result {
                Ok(result) => {
                    println!("{result} {ANSI_ITALIC}(elapsed: {elapsed:.2?}){ANSI_RESET}");
                }
                Err(err) => println!("failed: {err}"),
            }
        }

        println!("🎄 {}Part {}{} 🎄", ANSI_BOLD, $part, ANSI_RESET);
        print_result($solver, $input);
    }};
}

pub mod camel_cards;
pub mod config;
pub mod helpers;

/// Reads `src/{folder}/{day:02}.txt`, relative to the working directory.
pub fn read_file(folder: &str, day: u8) -> io::Result<String> {
    let cwd = env::current_dir()?;
    let filepath = cwd.join("src").join(folder).join(format!("{day:02}.txt"));
    read_file_at(filepath)
}

pub fn read_file_at(path: impl AsRef<Path>) -> io::Result<String> {
    fs::read_to_string(path)
}
