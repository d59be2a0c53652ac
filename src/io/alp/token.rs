//! # Tokens used in algebraic linear program files
use crate::data::surface::{Comparator, Sense};
use crate::io::error::{Parse as ParseError, ParseResult};

/// Indicates the start of a comment, which lasts until the end of the line.
pub const COMMENT_INDICATOR: char = '#';

/// Keywords that start the objective section, followed by the objective on the same line.
pub const OBJECTIVE: [(&str, Sense); 6] = [
    ("minimize", Sense::Minimize),
    ("minimise", Sense::Minimize),
    ("min", Sense::Minimize),
    ("maximize", Sense::Maximize),
    ("maximise", Sense::Maximize),
    ("max", Sense::Maximize),
];

/// Keywords that start the constraint section.
///
/// The two word variants are matched word by word, so any amount of white space may separate them.
pub const CONSTRAINTS: [&[&str]; 4] = [&["subject", "to"], &["such", "that"], &["st"], &["s.t."]];

/// Keyword that starts the bound section.
pub const BOUNDS: [&str; 2] = ["bounds", "bound"];

/// Optional keyword that marks the end of the program.
pub const END: &str = "end";

/// Spellings of the operators, longest first so that `<=` is not read as `<` followed by `=`.
pub const COMPARATORS: [(&str, Comparator); 10] = [
    ("<=", Comparator::LessEqual),
    ("=<", Comparator::LessEqual),
    (">=", Comparator::GreaterEqual),
    ("=>", Comparator::GreaterEqual),
    ("==", Comparator::Equal),
    ("!=", Comparator::NotEqual),
    ("<>", Comparator::NotEqual),
    ("=", Comparator::Equal),
    ("<", Comparator::Less),
    (">", Comparator::Greater),
];

/// Smallest meaningful piece of an expression or comparison.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Token<'a> {
    /// Unsigned decimal number, such as `4` or `0.25`.
    Number(&'a str),
    /// Variable name.
    Identifier(&'a str),
    #[allow(missing_docs)]
    Plus,
    #[allow(missing_docs)]
    Minus,
    /// Optional `*` between a coefficient and its variable.
    Times,
    #[allow(missing_docs)]
    Comparator(Comparator),
}

/// Split the content of a line into tokens.
///
/// # Arguments
///
/// * `text`: Part of a line, without comment.
///
/// # Errors
///
/// If a character is found that can't start any token.
pub fn tokenize(text: &str) -> ParseResult<Vec<Token<'_>>> {
    let mut tokens = Vec::new();

    let mut rest = text.trim_start();
    while let Some(first) = rest.chars().next() {
        let (token, length) = if first.is_ascii_digit() || first == '.' {
            let length = rest.find(|c: char| !(c.is_ascii_digit() || c == '.')).unwrap_or(rest.len());
            (Token::Number(&rest[..length]), length)
        } else if is_identifier_start(first) {
            let length = rest.find(|c: char| !is_identifier_continuation(c)).unwrap_or(rest.len());
            (Token::Identifier(&rest[..length]), length)
        } else if first == '+' {
            (Token::Plus, 1)
        } else if first == '-' {
            (Token::Minus, 1)
        } else if first == '*' {
            (Token::Times, 1)
        } else if let Some((spelling, comparator)) = COMPARATORS.iter()
            .find(|(spelling, _)| rest.starts_with(spelling)) {
            (Token::Comparator(*comparator), spelling.len())
        } else {
            return Err(ParseError::new(format!("Unexpected character '{}' in \"{}\"", first, text)));
        };

        tokens.push(token);
        rest = rest[length..].trim_start();
    }

    Ok(tokens)
}

fn is_identifier_start(character: char) -> bool {
    character.is_alphabetic() || character == '_'
}

fn is_identifier_continuation(character: char) -> bool {
    character.is_alphanumeric() || matches!(character, '_' | '[' | ']' | '\'')
}
