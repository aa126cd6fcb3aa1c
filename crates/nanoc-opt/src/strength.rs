//! Strength reduction.
//!
//! Ground: `optimizer_strength_reduction` in
//! `original_source/src/optimizer.c`. `x * k` becomes `x << log2(k)`
//! whenever the right operand is a constant positive power of two;
//! `k == 0` is left alone (constant folding already turns `x * 0`
//! into `0` once `x` is also constant, and `0 * x` for non-constant
//! `x` isn't a power-of-two match in the first place since the
//! original only ever inspects the right operand).

use nanoc_par::{BinOp, Node};

pub fn reduce(node: Node, changed: &mut bool) -> Node {
    let node = rewrite_if_applicable(node, changed);
    match node {
        Node::Program { statements, span } => Node::Program {
            statements: statements.into_iter().map(|s| reduce(s, changed)).collect(),
            span,
        },
        Node::Block { statements, span } => Node::Block {
            statements: statements.into_iter().map(|s| reduce(s, changed)).collect(),
            span,
        },
        Node::If {
            condition,
            then_branch,
            else_branch,
            span,
        } => Node::If {
            condition: Box::new(reduce(*condition, changed)),
            then_branch: Box::new(reduce(*then_branch, changed)),
            else_branch: else_branch.map(|b| Box::new(reduce(*b, changed))),
            span,
        },
        Node::While {
            condition,
            body,
            span,
        } => Node::While {
            condition: Box::new(reduce(*condition, changed)),
            body: Box::new(reduce(*body, changed)),
            span,
        },
        Node::Assignment { name, value, span } => Node::Assignment {
            name,
            value: Box::new(reduce(*value, changed)),
            span,
        },
        Node::BinaryOp {
            op,
            left,
            right,
            span,
        } => Node::binary_op(op, reduce(*left, changed), reduce(*right, changed), span),
        leaf @ (Node::Identifier { .. } | Node::Integer { .. } | Node::Error { .. }) => leaf,
    }
}

/// Rewrites a top-level `*` node in place, before recursing into its
/// children, matching the original's pre-order check.
fn rewrite_if_applicable(node: Node, changed: &mut bool) -> Node {
    if let Node::BinaryOp {
        op: BinOp::Mul,
        left,
        right,
        span,
    } = &node
    {
        if let Node::Integer { value, .. } = **right {
            if let Some(shift) = power_of_two_shift(value) {
                *changed = true;
                return Node::binary_op(
                    BinOp::Shl,
                    (**left).clone(),
                    Node::integer(shift, span),
                    span,
                );
            }
        }
    }
    node
}

/// Returns `log2(value)` if `value` is a strictly positive power of
/// two, matching the original's `(value & (value - 1)) == 0` check
/// (which would also accept `0`, but the caller only reaches here
/// after confirming the operand is a constant integer, and `0` is
/// excluded explicitly since `0 & -1 == 0` would otherwise misfire).
fn power_of_two_shift(value: i64) -> Option<i64> {
    if value > 0 && (value & (value - 1)) == 0 {
        Some(value.trailing_zeros() as i64)
    } else {
        None
    }
}
