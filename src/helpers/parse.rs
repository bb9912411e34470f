use std::fmt;
use std::str::FromStr;

use combine::parser::char::digit;
use combine::parser::combinator::from_str as parse_str;
use combine::{easy, many1, EasyParser, ParseError, Parser, Stream};

pub type EzParseError<'a> = easy::ParseError<&'a str>;
pub type Result<'a, T> = std::result::Result<T, EzParseError<'a>>;

/// Runs `parser` over the whole of `s`, failing if any input is left over.
pub fn from_str<'a, P>(s: &'a str, parser: P) -> Result<'a, P::Output>
where
    P: Parser<easy::Stream<&'a str>>,
{
    (parser, combine::eof())
        .map(|(output, _)| output)
        .easy_parse(s)
        .map(|(output, rest)| {
            debug_assert_eq!(rest, "");
            output
        })
}

/// Renders a parse error with its position given as a byte offset into `s`.
pub fn render_error(err: EzParseError<'_>, s: &str) -> String {
    err.map_position(|p| p.translate_position(s)).to_string()
}

/// One or more decimal digits, converted with `T`'s [`FromStr`].
pub fn decimal_integer<Input, T>() -> impl Parser<Input, Output = T>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    T: FromStr,
    T::Err: fmt::Display,
{
    parse_str(many1::<String, _, _>(digit()))
}
