/*
 * Use this file if you want to extract helpers from your solutions.
 * Example import from this file: `use aoc2023::helpers::parse;`.
 */

pub mod parse;
