//! Expression analysis.
//!
//! The loader consumes expression analysis through the [`ExpressionAnalyzer`]
//! trait. [`SyntaxAnalyzer`] is the bundled implementation: it checks lexical
//! validity, bracket balance and the logical/set-valued shape of a
//! definition. It does not infer typifications.

use schemata_foundation::{CstType, ValueClass};

use crate::lexer::Lexer;
use crate::template::{parse_arguments, split_template_definition};
use crate::token::{Token, TokenKind};

/// What kind of expression a constituent type expects.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExpectedType {
    /// No expectation (nominal constituents).
    Any,
    /// A base or constant set; an empty definition is valid.
    Basic,
    /// A set-valued (typified) expression.
    Typified,
    /// A logical statement.
    Logical,
}

impl ExpectedType {
    /// Returns the expectation for a constituent type.
    #[must_use]
    pub const fn for_cst_type(cst_type: CstType) -> Self {
        match cst_type {
            CstType::Nominal => Self::Any,
            CstType::Base | CstType::Constant => Self::Basic,
            CstType::Structured | CstType::Term | CstType::Function => Self::Typified,
            CstType::Predicate | CstType::Axiom | CstType::Theorem => Self::Logical,
        }
    }
}

/// Options passed to [`ExpressionAnalyzer::check_full`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CheckOptions {
    /// Expected kind of expression.
    pub expected: ExpectedType,
    /// Whether the expression defines a structure domain.
    pub is_domain: bool,
}

impl CheckOptions {
    /// Returns the options used to verify a constituent of the given type.
    #[must_use]
    pub const fn for_cst_type(cst_type: CstType) -> Self {
        Self {
            expected: ExpectedType::for_cst_type(cst_type),
            is_domain: matches!(cst_type, CstType::Structured),
        }
    }
}

/// A parameter reported by the analyzer for parametrized expressions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArgumentInfo {
    /// Local name of the parameter.
    pub alias: String,
    /// Typification of the parameter.
    pub typification: String,
}

/// A diagnostic produced while analyzing an expression.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisError {
    /// Character index of the offending token.
    pub position: usize,
    /// Description of the problem.
    pub message: String,
}

/// Result of analyzing one formal definition.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalysisResult {
    /// Whether the expression passed analysis.
    pub success: bool,
    /// Value class of the expression; `None` when it cannot be computed.
    pub value_class: Option<ValueClass>,
    /// Rendered typification.
    pub typification: String,
    /// Parameters of a parametrized expression.
    pub args: Vec<ArgumentInfo>,
    /// Diagnostics, empty on success.
    pub errors: Vec<AnalysisError>,
}

impl AnalysisResult {
    /// Creates a successful result with the given value class.
    #[must_use]
    pub fn success(value_class: Option<ValueClass>, typification: impl Into<String>) -> Self {
        Self {
            success: true,
            value_class,
            typification: typification.into(),
            args: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Creates a failed result with one diagnostic.
    #[must_use]
    pub fn failure(position: usize, message: impl Into<String>) -> Self {
        Self {
            success: false,
            value_class: None,
            typification: String::new(),
            args: Vec::new(),
            errors: vec![AnalysisError {
                position,
                message: message.into(),
            }],
        }
    }

    /// Attaches parameter information.
    #[must_use]
    pub fn with_args(mut self, args: Vec<ArgumentInfo>) -> Self {
        self.args = args;
        self
    }
}

/// Type-checks formal definitions.
///
/// Implementations must be pure: the same text and options always produce
/// the same result, and failures are reported in the result, never raised.
pub trait ExpressionAnalyzer {
    /// Analyzes `text` against the given options.
    fn check_full(&self, text: &str, options: &CheckOptions) -> AnalysisResult;
}

impl<A: ExpressionAnalyzer + ?Sized> ExpressionAnalyzer for &A {
    fn check_full(&self, text: &str, options: &CheckOptions) -> AnalysisResult {
        (**self).check_full(text, options)
    }
}

/// Typification reported for logical expressions.
pub const LOGIC_TYPIFICATION: &str = "LOGIC";

/// Syntax-level analyzer.
///
/// Rejects lexical errors, unbalanced delimiters and expressions whose
/// top-level shape contradicts the expected kind. Successful set-valued
/// expressions are reported as [`ValueClass::Value`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SyntaxAnalyzer;

impl SyntaxAnalyzer {
    /// Creates a new analyzer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ExpressionAnalyzer for SyntaxAnalyzer {
    fn check_full(&self, text: &str, options: &CheckOptions) -> AnalysisResult {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return match options.expected {
                ExpectedType::Any | ExpectedType::Basic => {
                    AnalysisResult::success(Some(ValueClass::Value), "")
                }
                _ => AnalysisResult::failure(0, "empty expression"),
            };
        }

        let tokens = Lexer::tokenize_all(trimmed);
        if let Some(error) = check_tokens(&tokens) {
            return error;
        }

        // Parametrized definitions are judged by their body.
        let (body, args) = if trimmed.starts_with('[') {
            let parts = split_template_definition(trimmed);
            if parts.body.is_empty() {
                return AnalysisResult::failure(0, "missing expression after declaration");
            }
            let args = parse_arguments(&parts.head)
                .into_iter()
                .map(|arg| ArgumentInfo {
                    alias: arg.alias,
                    typification: arg.typification,
                })
                .collect();
            (Lexer::tokenize_all(&parts.body), args)
        } else {
            (tokens, Vec::new())
        };

        let logical = is_logical_shape(&body);
        match (options.expected, logical) {
            (ExpectedType::Logical, false) => {
                AnalysisResult::failure(0, "expected a logical expression")
            }
            (ExpectedType::Typified | ExpectedType::Basic, true) => {
                AnalysisResult::failure(0, "expected a set-valued expression")
            }
            (_, true) => AnalysisResult::success(Some(ValueClass::Value), LOGIC_TYPIFICATION)
                .with_args(args),
            (_, false) => AnalysisResult::success(Some(ValueClass::Value), "").with_args(args),
        }
    }
}

/// Reports the first lexical error or delimiter mismatch.
fn check_tokens(tokens: &[Token]) -> Option<AnalysisResult> {
    let mut stack: Vec<&Token> = Vec::new();
    for token in tokens {
        if let TokenKind::Error(message) = &token.kind {
            return Some(AnalysisResult::failure(token.span.position, message.clone()));
        }
        if token.is_open_delimiter() {
            stack.push(token);
        } else if token.is_close_delimiter() {
            let Some(open) = stack.pop() else {
                return Some(AnalysisResult::failure(
                    token.span.position,
                    format!("unmatched {}", token.kind.name()),
                ));
            };
            if !delimiters_match(&open.kind, &token.kind) {
                return Some(AnalysisResult::failure(
                    token.span.position,
                    format!("mismatched {}", token.kind.name()),
                ));
            }
        }
    }
    stack.pop().map(|open| {
        AnalysisResult::failure(
            open.span.position,
            format!("unclosed {}", open.kind.name()),
        )
    })
}

fn delimiters_match(open: &TokenKind, close: &TokenKind) -> bool {
    matches!(
        (open, close),
        (TokenKind::LParen, TokenKind::RParen)
            | (TokenKind::LBracket, TokenKind::RBracket)
            | (
                TokenKind::LBrace
                    | TokenKind::Declarative
                    | TokenKind::Imperative
                    | TokenKind::Recursive,
                TokenKind::RBrace
            )
    )
}

/// Returns true if the expression's top level is a logical statement: a
/// logical operator or an applied predicate outside any brackets.
fn is_logical_shape(tokens: &[Token]) -> bool {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate() {
        if token.is_open_delimiter() {
            depth += 1;
        } else if token.is_close_delimiter() {
            depth = depth.saturating_sub(1);
        } else if depth == 0 && token.kind.is_logical_operator() {
            return true;
        } else if depth == 0 && is_predicate_application(token, tokens.get(i + 1)) {
            return true;
        }
    }
    false
}

fn is_predicate_application(token: &Token, next: Option<&Token>) -> bool {
    matches!(&token.kind, TokenKind::Global(name) if name.starts_with('P'))
        && next.is_some_and(|next| next.kind == TokenKind::LBracket)
}
