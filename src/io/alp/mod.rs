//! # Importing algebraic linear program files
//!
//! Reading of `.alp` files, which describe a linear program the way it is written down by hand:
//!
//! ```text
//! # Comments start with a hash sign.
//! maximize 4 x + 7 y
//! subject to
//!     x + y <= 10
//!     -5 <= x - y <= 5
//! bounds
//!     x >= 0
//!     0 <= 2 y <= 9
//! end
//! ```
//!
//! The objective line is required and comes first, the other sections are optional. Each line of
//! the constraint and bound sections holds exactly one comparison. The objective may be continued
//! on the lines following it.
//!
//! Section keywords are not case sensitive and can't be used as the first word of a comparison.
//! Numbers are written as decimals, without exponent.
use std::ops::Neg;

use num_traits::One;
use tracing::debug;

use crate::data::surface::{Comparison, Problem, Sense};
use crate::io::alp::parse::{parse_comparison, parse_expression};
use crate::io::alp::token::{BOUNDS, COMMENT_INDICATOR, CONSTRAINTS, END, OBJECTIVE, Token, tokenize};
use crate::io::error::{FileLocation, Parse as ParseError, ParseResult};
use crate::io::number::Parse;

mod parse;
pub mod token;

/// Sections of an algebraic linear program file, in the order in which they should appear.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
enum Section {
    Objective,
    Constraints,
    Bounds,
    End,
}

/// Parse a linear program in its algebraic form.
///
/// # Arguments
///
/// * `program`: The entire file contents.
///
/// # Return value
///
/// The problem in its surface form, as written. Nothing is checked beyond the syntax, so an
/// operator that is not allowed in a linear program is still read.
///
/// # Errors
///
/// When the file is not syntactically correct. The error contains the line at which it was found.
pub fn parse<F: Parse + One + Neg<Output = F>>(program: &str) -> ParseResult<Problem<F>> {
    let mut section = None;
    let mut objective: Option<(Sense, FileLocation, Vec<Token>)> = None;
    let mut constraints = Vec::new();
    let mut bounds = Vec::new();

    for file_location in into_lines(program) {
        let (_, line) = file_location;
        let (header, content) = split_header(line);

        if let Some((next, sense)) = header {
            if section.is_some_and(|current| next <= current) {
                return Err(ParseError::with_file_location(
                    format!("Section {:?} is not expected here", next),
                    file_location,
                ));
            }
            section = Some(next);
            if let Some(sense) = sense {
                objective = Some((sense, file_location, Vec::new()));
            }
        }

        let tokens = tokenize(content)
            .map_err(|error| error.at(file_location))?;
        if tokens.is_empty() {
            continue;
        }

        match (section, &mut objective) {
            (Some(Section::Objective), Some((_, _, objective_tokens))) => objective_tokens.extend(tokens),
            (Some(Section::Constraints), _) => constraints.push(
                read_comparison(&tokens, file_location, "constraint")?
            ),
            (Some(Section::Bounds), _) => bounds.push(
                read_comparison(&tokens, file_location, "bound")?
            ),
            (Some(Section::End), _) => return Err(ParseError::with_file_location(
                "Content found after the end of the program",
                file_location,
            )),
            (None, _) | (Some(Section::Objective), None) => return Err(ParseError::with_file_location(
                "Expected the program to start with \"minimize\" or \"maximize\"",
                file_location,
            )),
        }
    }

    let Some((sense, location, tokens)) = objective else {
        return Err(ParseError::new("No objective found, expected \"minimize\" or \"maximize\""));
    };
    let objective = parse_expression(&tokens)
        .map_err(|error| error.wrap("Could not read the objective").at(location))?;

    debug!(
        component = "io",
        operation = "parse",
        status = "ok",
        sense = sense.as_str(),
        nr_constraints = constraints.len(),
        nr_bounds = bounds.len(),
        "Parsed algebraic linear program"
    );

    Ok(Problem::new(sense, objective, constraints, bounds))
}

/// Split a linear program into numbered lines, without comments.
///
/// # Arguments
///
/// * `text`: The program string.
///
/// # Return value
///
/// An iterator over numbered lines that are not empty after removing the comment.
fn into_lines(text: &str) -> impl Iterator<Item = FileLocation<'_>> {
    text.lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line)) // Count from 1
        .map(|(number, line)| match line.find(COMMENT_INDICATOR) {
            Some(index) => (number, &line[..index]),
            None => (number, line),
        })
        .filter(|(_, line)| !line.trim().is_empty())
}

/// Recognize a section keyword at the start of a line.
///
/// # Return value
///
/// The section that starts and, if it is the objective, the direction. Also the remainder of the
/// line, which is all of it if there is no keyword.
fn split_header(line: &str) -> (Option<(Section, Option<Sense>)>, &str) {
    let (first, rest) = split_word(line);
    let keyword = first.trim_end_matches(':').to_lowercase();

    if let Some((_, sense)) = OBJECTIVE.iter().find(|(word, _)| *word == keyword) {
        return (Some((Section::Objective, Some(*sense))), strip_colon(rest));
    }
    if BOUNDS.contains(&keyword.as_str()) {
        return (Some((Section::Bounds, None)), strip_colon(rest));
    }
    if keyword == END {
        return (Some((Section::End, None)), rest);
    }
    for words in CONSTRAINTS {
        if let Some(rest) = strip_words(line, words) {
            return (Some((Section::Constraints, None)), strip_colon(rest));
        }
    }

    (None, line)
}

fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(index) => (&text[..index], &text[index..]),
        None => (text, ""),
    }
}

fn strip_words<'a>(line: &'a str, words: &[&str]) -> Option<&'a str> {
    let mut rest = line;
    for (index, expected) in words.iter().enumerate() {
        let (word, after) = split_word(rest);
        let word = if index == words.len() - 1 { word.trim_end_matches(':') } else { word };
        if !word.eq_ignore_ascii_case(expected) {
            return None;
        }
        rest = after;
    }

    Some(rest)
}

fn strip_colon(text: &str) -> &str {
    let text = text.trim_start();
    text.strip_prefix(':').unwrap_or(text)
}

fn read_comparison<F: Parse + One + Neg<Output = F>>(
    tokens: &[Token],
    file_location: FileLocation,
    kind: &str,
) -> ParseResult<Comparison<F>> {
    parse_comparison(tokens)
        .map_err(|error| error.wrap(format!("Could not read {}", kind)).at(file_location))
}
