//! Property-based tests for the scanner and the expression grammar.
//!
//! Fixed examples cover the documented cases; these check that the
//! invariants hold for arbitrary input, including characters the
//! language has no use for.

use pocl_parser::ast::Node;
use pocl_parser::{parse_program, tokenize, TokenKind};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn whitespace() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n')], 0..64)
        .prop_map(|chars| chars.into_iter().collect())
}

fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{0,8}".prop_filter("keywords are not identifiers", |s| {
        !pocl_parser::token::is_keyword(s)
    })
}

fn operand() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{1,6}", identifier()]
}

// ============================================================================
// Scanner
// ============================================================================

proptest! {
    #[test]
    fn whitespace_yields_nothing(src in whitespace()) {
        prop_assert!(tokenize(&src).is_empty());
        prop_assert!(parse_program(&src).unwrap().statements.is_empty());
    }

    #[test]
    fn scanning_is_deterministic(src in any::<String>()) {
        prop_assert_eq!(tokenize(&src), tokenize(&src));
    }

    #[test]
    fn lexemes_match_source_slices(src in any::<String>()) {
        let mut last_end = 0;
        for tok in tokenize(&src) {
            prop_assert!(tok.start() >= last_end);
            prop_assert_eq!(&src[tok.start()..tok.position], tok.lexeme.as_str());
            last_end = tok.position;
        }
    }

    #[test]
    fn identifiers_are_never_split(name in identifier()) {
        let tokens = tokenize(&name);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
        prop_assert_eq!(&tokens[0].lexeme, &name);
        prop_assert_eq!(tokens[0].position, name.len());
    }

    #[test]
    fn digit_runs_are_one_literal(digits in "[0-9]{1,30}", pad in whitespace()) {
        let src = format!("{pad}{digits}{pad}");
        let tokens = tokenize(&src);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Literal);
        prop_assert_eq!(tokens[0].position, pad.len() + digits.len());
    }
}

// ============================================================================
// Expressions
// ============================================================================

proptest! {
    #[test]
    fn same_tier_chains_fold_left(
        first in operand(),
        rest in proptest::collection::vec((prop_oneof![Just("+"), Just("-")], operand()), 1..8),
    ) {
        let mut src = format!("x = {first}");
        for (op, rhs) in &rest {
            src.push_str(&format!(" {op} {rhs}"));
        }
        let prog = parse_program(&src).unwrap();
        let Some(Node::Assignment { value, .. }) = prog.statements.first() else {
            panic!("expected assignment for {src:?}");
        };

        // Walk down the left spine: each level must hold the last operator.
        let mut node = value.as_ref();
        for (op, _) in rest.iter().rev() {
            match node {
                Node::BinaryOp { left, operator, .. } => {
                    prop_assert_eq!(operator.as_str(), *op);
                    node = left.as_ref();
                }
                other => panic!("expected BinaryOp, got {other:?}"),
            }
        }
        let is_leaf = matches!(node, Node::Number { .. } | Node::Identifier(_));
        prop_assert!(is_leaf);
    }
}
