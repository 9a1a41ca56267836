//! Lexer, reference extraction, template helpers, and expression analysis
//! for the Schemata formal language.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of formal definitions
//! - [`extract_globals`] - Global reference extraction
//! - [`split_template_definition`], [`is_simple_expression`] - Template helpers
//! - [`ExpressionAnalyzer`] - The analysis seam, with [`SyntaxAnalyzer`] as default

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod analyzer;
pub mod globals;
pub mod lexer;
pub mod span;
pub mod template;
pub mod token;

pub use analyzer::{
    AnalysisError, AnalysisResult, ArgumentInfo, CheckOptions, ExpectedType, ExpressionAnalyzer,
    SyntaxAnalyzer,
};
pub use globals::{extract_bound_arguments, extract_globals, is_template_expression};
pub use lexer::Lexer;
pub use span::Span;
pub use template::{
    ArgumentValue, TemplateParts, generate_alias, infer_templated_type, is_simple_expression,
    parse_arguments, split_template_definition, substitute_template_args,
};
pub use token::{Token, TokenKind};
