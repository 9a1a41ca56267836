//! Global reference extraction.
//!
//! A formal definition refers to other constituents of the schema by alias.
//! These helpers recover those references without a full parse.

use schemata_foundation::Alias;

use crate::lexer::Lexer;
use crate::token::TokenKind;

/// Returns the distinct global aliases referenced by `text`, in order of
/// first occurrence.
#[must_use]
pub fn extract_globals(text: &str) -> Vec<Alias> {
    let mut result: Vec<Alias> = Vec::new();
    let mut lexer = Lexer::new(text);
    loop {
        let token = lexer.next_token();
        match token.kind {
            TokenKind::Eof => break,
            TokenKind::Global(name) => {
                if !result.iter().any(|a| a.as_str() == name) {
                    result.push(Alias::new_unchecked(name));
                }
            }
            _ => {}
        }
    }
    result
}

/// Returns the globals that occur only inside the bracketed argument list
/// of an applied global, such as `X1` in `F1[X1]`, in order of first
/// occurrence.
#[must_use]
pub fn extract_bound_arguments(text: &str) -> Vec<Alias> {
    let mut bound: Vec<String> = Vec::new();
    let mut free: Vec<String> = Vec::new();
    let mut frames: Vec<bool> = Vec::new();
    let mut previous_global = false;
    for token in Lexer::tokenize_all(text) {
        if token.is_open_delimiter() {
            frames.push(token.kind == TokenKind::LBracket && previous_global);
        } else if token.is_close_delimiter() {
            frames.pop();
        }
        previous_global = false;
        if let TokenKind::Global(name) = token.kind {
            let target = if frames.contains(&true) { &mut bound } else { &mut free };
            if !target.contains(&name) {
                target.push(name);
            }
            previous_global = true;
        }
    }
    bound
        .into_iter()
        .filter(|name| !free.contains(name))
        .map(Alias::new_unchecked)
        .collect()
}

/// Returns true if `text` contains a template radical: the letter `R`
/// immediately followed by one or more digits.
#[must_use]
pub fn is_template_expression(text: &str) -> bool {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == 'R' && chars.peek().is_some_and(char::is_ascii_digit) {
            return true;
        }
    }
    false
}
