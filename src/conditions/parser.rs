use super::types::Condition;
use crate::error::{Result, SearchError};
use crate::search::types::BiasRating;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}-[0-9]{1,2}-[0-9]{4}$").unwrap());

/// Splits a query into residual free text and its parsed conditions.
///
/// The first backtick-delimited span is parsed and removed from the query;
/// the surrounding text is concatenated without further trimming. No span
/// (including a lone, unterminated backtick) passes the query through
/// unchanged with an empty condition list. A present-but-malformed span is
/// rejected as a whole.
pub fn extract_conditions(query: &str) -> Result<(String, Vec<Condition>)> {
    let Some(start) = query.find('`') else {
        return Ok((query.to_string(), Vec::new()));
    };
    let Some(offset) = query[start + 1..].find('`') else {
        return Ok((query.to_string(), Vec::new()));
    };
    let end = start + 1 + offset;

    let conditions = parse_block(&query[start + 1..end])?;
    let residual = format!("{}{}", &query[..start], &query[end + 1..]);
    Ok((residual, conditions))
}

/// Parses the contents of a filter block into an ordered condition list.
pub fn parse_block(block: &str) -> Result<Vec<Condition>> {
    let tokens = lex(block)?;
    let mut cursor = 0usize;
    let mut conditions = Vec::new();
    while cursor < tokens.len() {
        conditions.push(parse_condition(&tokens, &mut cursor)?);
    }
    if conditions.is_empty() {
        return Err(SearchError::Parse("empty filter block".to_string()));
    }
    Ok(conditions)
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Word(String),
    Quoted(String),
}

fn lex(block: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = block.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        if c == '"' {
            let mut name = String::new();
            loop {
                match chars.next() {
                    Some('"') => break,
                    Some(ch) => name.push(ch),
                    None => {
                        return Err(SearchError::Parse(
                            "unterminated quoted string".to_string(),
                        ));
                    }
                }
            }
            tokens.push(Token::Quoted(name));
        } else {
            let mut word = String::from(c);
            while let Some(&next) = chars.peek() {
                if next.is_whitespace() || next == '"' {
                    break;
                }
                word.push(next);
                chars.next();
            }
            tokens.push(Token::Word(word));
        }
    }

    Ok(tokens)
}

fn parse_condition(tokens: &[Token], cursor: &mut usize) -> Result<Condition> {
    match next_word(tokens, cursor)? {
        "WRITTEN" => match next_word(tokens, cursor)? {
            "BY" => {
                let mut authors = vec![next_quoted(tokens, cursor)?];
                while matches!(tokens.get(*cursor), Some(Token::Word(w)) if w == "AND") {
                    *cursor += 1;
                    authors.push(next_quoted(tokens, cursor)?);
                }
                Ok(Condition::WrittenBy(authors))
            }
            "BEFORE" => {
                let date = parse_date(next_word(tokens, cursor)?)?;
                Ok(Condition::WrittenBefore(date))
            }
            "AFTER" => {
                let date = parse_date(next_word(tokens, cursor)?)?;
                Ok(Condition::WrittenAfter(date))
            }
            other => Err(SearchError::Parse(format!(
                "expected BY, BEFORE or AFTER after WRITTEN, found '{}'",
                other
            ))),
        },
        "PUBLISHED" => {
            expect_word(tokens, cursor, "BY")?;
            Ok(Condition::PublishedBy(next_quoted(tokens, cursor)?))
        }
        "HAVING" => {
            expect_word(tokens, cursor, "BIAS")?;
            Ok(Condition::HavingBias(parse_bias(tokens, cursor)?))
        }
        other => Err(SearchError::Parse(format!(
            "unrecognized condition keyword '{}'",
            other
        ))),
    }
}

fn parse_bias(tokens: &[Token], cursor: &mut usize) -> Result<BiasRating> {
    match next_word(tokens, cursor)? {
        "LEFT" => Ok(BiasRating::Left),
        "CENTER" => Ok(BiasRating::Center),
        "RIGHT" => Ok(BiasRating::Right),
        "MIXED" => Ok(BiasRating::Mixed),
        "LEAN" => match next_word(tokens, cursor)? {
            "LEFT" => Ok(BiasRating::LeanLeft),
            "RIGHT" => Ok(BiasRating::LeanRight),
            other => Err(SearchError::Parse(format!(
                "unrecognized bias rating 'LEAN {}'",
                other
            ))),
        },
        other => Err(SearchError::Parse(format!(
            "unrecognized bias rating '{}'",
            other
        ))),
    }
}

/// Validates the MM-DD-YYYY shape first, then the calendar value, so a
/// plausible-looking date with an impossible month or day is still rejected.
fn parse_date(text: &str) -> Result<NaiveDate> {
    if !DATE_SHAPE.is_match(text) {
        return Err(SearchError::Parse(format!(
            "expected MM-DD-YYYY date, found '{}'",
            text
        )));
    }
    NaiveDate::parse_from_str(text, "%m-%d-%Y")
        .map_err(|_| SearchError::Parse(format!("invalid calendar date '{}'", text)))
}

fn next_token<'a>(tokens: &'a [Token], cursor: &mut usize) -> Result<&'a Token> {
    let token = tokens
        .get(*cursor)
        .ok_or_else(|| SearchError::Parse("unexpected end of filter block".to_string()))?;
    *cursor += 1;
    Ok(token)
}

fn next_word<'a>(tokens: &'a [Token], cursor: &mut usize) -> Result<&'a str> {
    match next_token(tokens, cursor)? {
        Token::Word(word) => Ok(word),
        Token::Quoted(name) => Err(SearchError::Parse(format!(
            "unexpected quoted string \"{}\"",
            name
        ))),
    }
}

fn next_quoted(tokens: &[Token], cursor: &mut usize) -> Result<String> {
    match next_token(tokens, cursor)? {
        Token::Quoted(name) => Ok(name.clone()),
        Token::Word(word) => Err(SearchError::Parse(format!(
            "expected quoted string, found '{}'",
            word
        ))),
    }
}

fn expect_word(tokens: &[Token], cursor: &mut usize, expected: &str) -> Result<()> {
    let word = next_word(tokens, cursor)?;
    if word == expected {
        Ok(())
    } else {
        Err(SearchError::Parse(format!(
            "expected '{}', found '{}'",
            expected, word
        )))
    }
}
