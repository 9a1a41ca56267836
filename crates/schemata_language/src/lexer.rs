//! Lexer for the formal definition language.
//!
//! The lexer converts formal definition text into a stream of tokens.

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for formal definitions.
///
/// The lexer iterates through source text and produces tokens.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current character index in source.
    char_index: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            char_index: 0,
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let start_char = self.char_index;

        let Some(c) = self.peek_char() else {
            return Token::new(TokenKind::Eof, Span::new(start, start, start_char));
        };

        let kind = match c {
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            ',' => self.single(TokenKind::Comma),
            ';' => self.single(TokenKind::Semicolon),
            '|' => self.single(TokenKind::Bar),
            ':' => self.scan_colon(),
            '∅' => self.single(TokenKind::EmptySet),
            'ℬ' => self.single(TokenKind::Boolean),
            '∀' | '∃' => self.single(TokenKind::Quantifier(c)),
            '¬' | '&' | '∨' | '⇒' | '⇔' => self.single(TokenKind::Logical(c)),
            '∈' | '∉' | '⊆' | '⊂' | '⊄' | '=' | '≠' | '<' | '>' | '≤' | '≥' => {
                self.single(TokenKind::Relation(c))
            }
            '∪' | '∩' | '\\' | '∆' | '×' => self.single(TokenKind::SetOperator(c)),
            '+' | '-' | '*' => self.single(TokenKind::Arithmetic(c)),
            c if c.is_ascii_digit() => self.scan_integer(),
            c if c.is_ascii_uppercase() => self.scan_uppercase(),
            c if is_local_start(c) => self.scan_lowercase(),
            c => {
                self.advance();
                TokenKind::Error(format!("unexpected character: {c}"))
            }
        };

        Token::new(kind, Span::new(start, self.position, start_char))
    }

    /// Tokenizes all source and returns a vector of tokens ending with `Eof`.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Peeks at the character `n` positions ahead.
    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            self.char_index += 1;
        }
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn scan_digits(&mut self) -> &'src str {
        let start = self.position;
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        let source = self.source;
        &source[start..self.position]
    }

    /// Scans `:`, `:=` or `:∈`.
    fn scan_colon(&mut self) -> TokenKind {
        self.advance();
        match self.peek_char() {
            Some('=') => self.single(TokenKind::Assign),
            Some('∈') => self.single(TokenKind::Iterate),
            _ => TokenKind::Colon,
        }
    }

    fn scan_integer(&mut self) -> TokenKind {
        let digits = self.scan_digits();
        match digits.parse::<u64>() {
            Ok(n) => TokenKind::Integer(n),
            Err(e) => TokenKind::Error(format!("invalid integer: {e}")),
        }
    }

    /// Scans identifiers starting with an uppercase letter.
    ///
    /// Only digits are consumed after the prefix letter, so adjacent
    /// references such as `X1X2` split into two globals.
    fn scan_uppercase(&mut self) -> TokenKind {
        let Some(prefix) = self.peek_char() else {
            return TokenKind::Eof;
        };
        let next = self.peek_char_n(1);

        match (prefix, next) {
            ('D', Some('{')) => {
                self.advance();
                return self.single(TokenKind::Declarative);
            }
            ('I', Some('{')) => {
                self.advance();
                return self.single(TokenKind::Imperative);
            }
            ('R', Some('{')) => {
                self.advance();
                return self.single(TokenKind::Recursive);
            }
            ('P', Some('r')) | ('F', Some('i')) => {
                if self.peek_char_n(2).is_some_and(|c| c.is_ascii_digit()) {
                    return self.scan_indexed_function();
                }
            }
            _ => {}
        }

        self.advance();
        if !next.is_some_and(|c| c.is_ascii_digit()) {
            return if prefix == 'Z' {
                TokenKind::Integers
            } else {
                TokenKind::Error(format!("unexpected identifier: {prefix}"))
            };
        }

        let digits = self.scan_digits();
        let text = format!("{prefix}{digits}");
        if prefix == 'R' {
            TokenKind::Radical(text)
        } else if schemata_foundation::CstType::from_prefix(prefix).is_some() {
            TokenKind::Global(text)
        } else {
            TokenKind::Error(format!("unknown reference prefix: {text}"))
        }
    }

    /// Scans `Pr1`, `pr1,2`, `Fi1` style functions with index lists.
    fn scan_indexed_function(&mut self) -> TokenKind {
        let start = self.position;
        self.advance();
        self.advance();
        self.scan_digits();
        while self.peek_char() == Some(',') && self.peek_char_n(1).is_some_and(|c| c.is_ascii_digit())
        {
            self.advance();
            self.scan_digits();
        }
        TokenKind::Function(self.source[start..self.position].to_string())
    }

    /// Scans locals and lowercase built-in functions.
    fn scan_lowercase(&mut self) -> TokenKind {
        if self.rest.starts_with("pr") && self.peek_char_n(2).is_some_and(|c| c.is_ascii_digit()) {
            return self.scan_indexed_function();
        }

        let start = self.position;
        while self.peek_char().is_some_and(is_local_char) {
            self.advance();
        }
        let name = &self.source[start..self.position];
        match name {
            "card" | "bool" | "debool" | "red" => TokenKind::Function(name.to_string()),
            _ => TokenKind::Local(name.to_string()),
        }
    }
}

/// Returns true if `c` can start a local variable.
fn is_local_start(c: char) -> bool {
    c.is_ascii_lowercase() || is_greek_lowercase(c) || c == '_'
}

/// Returns true if `c` can appear in a local variable (not at start).
fn is_local_char(c: char) -> bool {
    is_local_start(c) || c.is_ascii_digit() || c == '\''
}

fn is_greek_lowercase(c: char) -> bool {
    ('α'..='ω').contains(&c)
}
