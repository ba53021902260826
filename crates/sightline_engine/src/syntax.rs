//! The boundary with the pattern parser.
//!
//! The parser matches statement text against an expression's registered
//! patterns and hands back which pattern matched and what it bound to each
//! `%placeholder%`. Slots the author left out are `None`.

use sightline_foundation::{EntityKind, Value};

use crate::source::SourceExpr;

/// What the parser bound to one placeholder.
#[derive(Debug)]
pub enum Slot {
    /// A constant, such as an `%entitydata%` literal.
    Literal(Value),
    /// A sub-expression producing entities.
    Source(Box<dyn SourceExpr>),
}

/// A successful pattern match.
#[derive(Debug)]
pub struct ParseResult {
    /// Index into the expression's pattern list.
    pub matched_pattern: usize,
    /// Bound placeholders, in pattern order.
    pub slots: [Option<Slot>; 2],
}

impl ParseResult {
    /// Creates a parse result.
    #[must_use]
    pub fn new(matched_pattern: usize, slots: [Option<Slot>; 2]) -> Self {
        Self {
            matched_pattern,
            slots,
        }
    }

    /// Takes the slot at `index`, leaving `None` behind.
    pub fn take(&mut self, index: usize) -> Option<Slot> {
        self.slots.get_mut(index).and_then(Option::take)
    }
}

/// How an expression is registered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExpressionType {
    /// A property of another expression (`the target of ...`).
    Property,
}

/// Registration record: documentation plus the syntax the parser matches.
#[derive(Clone, Copy, Debug)]
pub struct ExpressionInfo {
    /// Display name.
    pub name: &'static str,
    /// Long description for generated docs.
    pub description: &'static str,
    /// Example script lines.
    pub examples: &'static [&'static str],
    /// Registration type.
    pub expression_type: ExpressionType,
    /// Unnarrowed return kind.
    pub return_kind: EntityKind,
    /// Accepted patterns; the index of the match is reported in
    /// [`ParseResult::matched_pattern`].
    pub patterns: &'static [&'static str],
}
