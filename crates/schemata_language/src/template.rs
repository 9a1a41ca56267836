//! Template helpers.
//!
//! Functions and predicates are written as a bracketed parameter
//! declaration followed by a body: `[α∈ℬ(X1), β∈X1] α∪{β}`. These helpers
//! split such definitions, classify expressions as simple references or
//! combinator expressions, and instantiate templates with bound arguments.

use schemata_foundation::{Alias, CstType};

use crate::lexer::Lexer;
use crate::token::TokenKind;

/// Declaration head and body of a parametrized definition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateParts {
    /// Parameter declarations, without the enclosing brackets.
    pub head: String,
    /// Expression following the declaration.
    pub body: String,
}

/// Splits a function-style definition into its declaration head and body.
///
/// The head is the content of the first bracket pair, matched with nesting.
/// Both parts are empty when the text has no complete bracketed head.
#[must_use]
pub fn split_template_definition(text: &str) -> TemplateParts {
    let Some(open) = text.find('[') else {
        return TemplateParts::default();
    };
    let mut depth = 0usize;
    for (offset, c) in text[open + 1..].char_indices() {
        match c {
            '[' => depth += 1,
            ']' if depth > 0 => depth -= 1,
            ']' => {
                let close = open + 1 + offset;
                return TemplateParts {
                    head: text[open + 1..close].trim().to_string(),
                    body: text[close + 1..].trim().to_string(),
                };
            }
            _ => {}
        }
    }
    TemplateParts::default()
}

/// Returns true if `text` is a simple expression: a reference or a
/// template application rather than a combinator expression.
///
/// Quantifiers, powersets, Cartesian products and the punctuation of
/// set-builders and imperative blocks all make an expression complex.
#[must_use]
pub fn is_simple_expression(text: &str) -> bool {
    let mut lexer = Lexer::new(text);
    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::Eof {
            return true;
        }
        if token.kind.is_complex() {
            return false;
        }
    }
}

/// A template parameter together with its optional bound value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArgumentValue {
    /// Name of the local parameter, e.g. `α`.
    pub alias: String,
    /// Declared typification of the parameter.
    pub typification: String,
    /// Expression bound to the parameter, if any.
    pub value: Option<String>,
}

impl ArgumentValue {
    /// Creates an unbound argument.
    #[must_use]
    pub fn unbound(alias: impl Into<String>, typification: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            typification: typification.into(),
            value: None,
        }
    }

    /// Binds a value to this argument.
    #[must_use]
    pub fn bind(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Returns true if a non-empty value is bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.value.as_deref().is_some_and(|v| !v.trim().is_empty())
    }
}

/// Infers the type of a constituent produced by instantiating a template.
///
/// A template with unbound arguments keeps its own type. Binding every
/// argument of a predicate yields an axiom; of anything else, a term.
#[must_use]
pub fn infer_templated_type(template_type: CstType, args: &[ArgumentValue]) -> CstType {
    if args.is_empty() || args.iter().any(|arg| !arg.is_bound()) {
        template_type
    } else if template_type == CstType::Predicate {
        CstType::Axiom
    } else {
        CstType::Term
    }
}

/// Substitutes bound argument values into a template definition.
///
/// Bound parameters are removed from the declaration head; unbound ones
/// stay declared. Returns the text unchanged when nothing is bound.
#[must_use]
pub fn substitute_template_args(expression: &str, args: &[ArgumentValue]) -> String {
    let bound: Vec<(&str, &str)> = args
        .iter()
        .filter(|arg| arg.is_bound())
        .filter_map(|arg| arg.value.as_deref().map(|v| (arg.alias.as_str(), v.trim())))
        .collect();
    if bound.is_empty() {
        return expression.to_string();
    }
    let lookup = |name: &str| bound.iter().find(|(alias, _)| *alias == name).map(|(_, v)| *v);

    let parts = split_template_definition(expression);
    let body = replace_locals(&parts.body, &lookup);
    let head = split_top_level(&parts.head)
        .into_iter()
        .filter(|declaration| match declared_local(declaration) {
            Some(local) => lookup(local.as_str()).is_none(),
            None => true,
        })
        .collect::<Vec<_>>()
        .join(", ");

    if head.is_empty() {
        body
    } else {
        format!("[{head}] {body}")
    }
}

/// Generates the next free alias for `cst_type`.
///
/// The index is one past the largest index already used by that type.
/// Aliases listed in `taken` are skipped as well. Once the largest index is
/// `u32::MAX`, the lowest unused index is taken instead.
#[must_use]
pub fn generate_alias<'a>(
    cst_type: CstType,
    existing: impl IntoIterator<Item = &'a Alias>,
    taken: &[Alias],
) -> Alias {
    let used: Vec<u32> = existing
        .into_iter()
        .filter(|alias| alias.cst_type() == Some(cst_type))
        .filter_map(Alias::index)
        .collect();
    let next = used.iter().max().map_or(Some(1), |max| max.checked_add(1));
    let free = |index: u32| {
        let alias = Alias::from_parts(cst_type, index);
        (!used.contains(&index) && !taken.contains(&alias)).then_some(alias)
    };
    next.into_iter()
        .flat_map(|start| start..=u32::MAX)
        .chain(1..=u32::MAX)
        .find_map(free)
        .unwrap_or_else(|| Alias::from_parts(cst_type, u32::MAX))
}

fn replace_locals<'v>(text: &str, lookup: &impl Fn(&str) -> Option<&'v str>) -> String {
    let mut result = String::with_capacity(text.len());
    let mut copied = 0;
    for token in Lexer::tokenize_all(text) {
        if let TokenKind::Local(name) = &token.kind {
            if let Some(value) = lookup(name) {
                result.push_str(&text[copied..token.span.start]);
                result.push_str(value);
                copied = token.span.end;
            }
        }
    }
    result.push_str(&text[copied..]);
    result
}

/// Splits a declaration list on commas that are not nested in brackets.
fn split_top_level(text: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();
    for c in text.chars() {
        match c {
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                let part = current.trim();
                if !part.is_empty() {
                    parts.push(part.to_string());
                }
                current.clear();
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    let part = current.trim();
    if !part.is_empty() {
        parts.push(part.to_string());
    }
    parts
}

/// Returns the local declared by a parameter declaration like `α∈ℬ(X1)`.
fn declared_local(declaration: &str) -> Option<String> {
    match Lexer::new(declaration).next_token().kind {
        TokenKind::Local(name) => Some(name),
        _ => None,
    }
}

/// Parses a declaration head into `(local, typification)` pairs.
#[must_use]
pub fn parse_arguments(head: &str) -> Vec<ArgumentValue> {
    split_top_level(head)
        .into_iter()
        .filter_map(|declaration| {
            let local = declared_local(&declaration)?;
            let typification = declaration
                .split_once('∈')
                .map(|(_, rest)| rest.trim().to_string())
                .unwrap_or_default();
            Some(ArgumentValue::unbound(local, typification))
        })
        .collect()
}
