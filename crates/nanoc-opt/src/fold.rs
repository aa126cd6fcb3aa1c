//! Constant folding.
//!
//! Ground: `optimizer_constant_folding` / `optimizer_evaluate_constant_expression`
//! in `original_source/src/optimizer.c`. A `BinaryOp` whose operands
//! have both already folded down to `Integer` literals is replaced by
//! the single literal it evaluates to. Arithmetic uses wrapping
//! 64-bit ops, matching the original's plain `int` overflow (undefined
//! in C, but the observable machine behavior on the two's-complement
//! targets the original actually runs on is wraparound — Rust makes
//! that explicit with `wrapping_*`). Division and remainder by zero
//! fold to `0` rather than erroring: a quirk of the original worth
//! preserving since programs may rely on the observable behavior.

use nanoc_par::{BinOp, Node};

/// Folds `node` bottom-up, reporting via `changed` whether any
/// rewrite happened.
pub fn fold(node: Node, changed: &mut bool) -> Node {
    match node {
        Node::Program { statements, span } => Node::Program {
            statements: statements.into_iter().map(|s| fold(s, changed)).collect(),
            span,
        },
        Node::Block { statements, span } => Node::Block {
            statements: statements.into_iter().map(|s| fold(s, changed)).collect(),
            span,
        },
        Node::If {
            condition,
            then_branch,
            else_branch,
            span,
        } => Node::If {
            condition: Box::new(fold(*condition, changed)),
            then_branch: Box::new(fold(*then_branch, changed)),
            else_branch: else_branch.map(|b| Box::new(fold(*b, changed))),
            span,
        },
        Node::While {
            condition,
            body,
            span,
        } => Node::While {
            condition: Box::new(fold(*condition, changed)),
            body: Box::new(fold(*body, changed)),
            span,
        },
        Node::Assignment { name, value, span } => Node::Assignment {
            name,
            value: Box::new(fold(*value, changed)),
            span,
        },
        Node::BinaryOp {
            op,
            left,
            right,
            span,
        } => {
            let left = fold(*left, changed);
            let right = fold(*right, changed);
            if let (Node::Integer { value: l, .. }, Node::Integer { value: r, .. }) = (&left, &right) {
                *changed = true;
                Node::Integer {
                    value: evaluate(op, *l, *r),
                    span,
                }
            } else {
                Node::binary_op(op, left, right, span)
            }
        }
        leaf @ (Node::Identifier { .. } | Node::Integer { .. } | Node::Error { .. }) => leaf,
    }
}

fn evaluate(op: BinOp, left: i64, right: i64) -> i64 {
    match op {
        BinOp::Add => left.wrapping_add(right),
        BinOp::Sub => left.wrapping_sub(right),
        BinOp::Mul => left.wrapping_mul(right),
        BinOp::Div => {
            if right == 0 {
                0
            } else {
                left.wrapping_div(right)
            }
        }
        BinOp::Shl => left.wrapping_shl(right as u32),
        BinOp::Lt => (left < right) as i64,
        BinOp::Gt => (left > right) as i64,
        BinOp::Eq => (left == right) as i64,
        BinOp::Ne => (left != right) as i64,
    }
}
