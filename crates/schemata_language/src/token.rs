//! Token types for the formal definition language.
//!
//! Tokens are the output of the lexer and the input to reference extraction,
//! template helpers and the default analyzer.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }

    /// Returns true if this token is an opening delimiter.
    #[must_use]
    pub const fn is_open_delimiter(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::LParen
                | TokenKind::LBracket
                | TokenKind::LBrace
                | TokenKind::Declarative
                | TokenKind::Imperative
                | TokenKind::Recursive
        )
    }

    /// Returns true if this token is a closing delimiter.
    #[must_use]
    pub const fn is_close_delimiter(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace
        )
    }
}

/// Token types for the formal definition language.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Delimiters
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,

    // Punctuation
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `|`
    Bar,
    /// `:`
    Colon,
    /// `:=` assignment inside imperative blocks
    Assign,
    /// `:∈` iteration inside imperative blocks
    Iterate,

    // Identifiers
    /// Global reference to a constituent, like `X1` or `D12`
    Global(String),
    /// Template radical, like `R1`
    Radical(String),
    /// Local variable, like `α` or `ξ1`
    Local(String),
    /// Built-in function, like `card`, `Pr1` or `Fi1,2`
    Function(String),
    /// Integer literal
    Integer(u64),
    /// `∅`
    EmptySet,
    /// `Z`
    Integers,

    // Compound forms
    /// `D{` declarative set builder
    Declarative,
    /// `I{` imperative block
    Imperative,
    /// `R{` recursive definition
    Recursive,

    // Operators
    /// `∀` or `∃`
    Quantifier(char),
    /// `¬`, `&`, `∨`, `⇒` or `⇔`
    Logical(char),
    /// `∈`, `∉`, `⊆`, `⊂`, `⊄`, `=`, `≠`, `<`, `>`, `≤` or `≥`
    Relation(char),
    /// `∪`, `∩`, `\`, `∆` or `×`
    SetOperator(char),
    /// `ℬ` powerset
    Boolean,
    /// `+`, `-` or `*`
    Arithmetic(char),

    // Meta
    /// End of input
    Eof,
    /// Lexer error
    Error(String),
}

impl TokenKind {
    /// Returns true for tokens that make an expression a combinator expression
    /// rather than a bare reference.
    #[must_use]
    pub const fn is_complex(&self) -> bool {
        matches!(
            self,
            Self::Quantifier(_)
                | Self::Boolean
                | Self::SetOperator('×')
                | Self::Semicolon
                | Self::Bar
                | Self::Colon
                | Self::Assign
                | Self::Iterate
        )
    }

    /// Returns true for operators whose result is a logical value.
    #[must_use]
    pub const fn is_logical_operator(&self) -> bool {
        matches!(
            self,
            Self::Quantifier(_) | Self::Logical(_) | Self::Relation(_)
        )
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Comma => "','",
            Self::Semicolon => "';'",
            Self::Bar => "'|'",
            Self::Colon => "':'",
            Self::Assign => "':='",
            Self::Iterate => "':∈'",
            Self::Global(_) => "global",
            Self::Radical(_) => "radical",
            Self::Local(_) => "local",
            Self::Function(_) => "function",
            Self::Integer(_) => "integer",
            Self::EmptySet => "empty set",
            Self::Integers => "integers",
            Self::Declarative => "declarative",
            Self::Imperative => "imperative",
            Self::Recursive => "recursive",
            Self::Quantifier(_) => "quantifier",
            Self::Logical(_) => "logical operator",
            Self::Relation(_) => "relation",
            Self::SetOperator(_) => "set operator",
            Self::Boolean => "boolean",
            Self::Arithmetic(_) => "arithmetic operator",
            Self::Eof => "end of input",
            Self::Error(_) => "error",
        }
    }
}
