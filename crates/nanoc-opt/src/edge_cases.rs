//! Property: once the optimizer reaches a fixed point, running it
//! again changes nothing — `optimize` is idempotent on its own output.

use crate::{optimize, OptimizerOptions};
use nanoc_par::{BinOp, Node};
use nanoc_util::Span;
use proptest::prelude::*;

fn arb_expr() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        (-100i64..100).prop_map(|v| Node::integer(v, Span::DUMMY)),
        "[a-z]".prop_map(|n| Node::identifier(n, Span::DUMMY)),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        (inner.clone(), inner, 0..9u8).prop_map(|(l, r, tag)| {
            let op = match tag {
                0 => BinOp::Add,
                1 => BinOp::Sub,
                2 => BinOp::Mul,
                3 => BinOp::Div,
                4 => BinOp::Shl,
                5 => BinOp::Lt,
                6 => BinOp::Gt,
                7 => BinOp::Eq,
                _ => BinOp::Ne,
            };
            Node::binary_op(op, l, r, Span::DUMMY)
        })
    })
}

proptest! {
    #[test]
    fn optimizing_twice_is_the_same_as_optimizing_once(expr in arb_expr()) {
        let span = Span::DUMMY;
        let program = Node::program(vec![Node::assignment("x", expr, span)], span);
        let once = optimize(program, OptimizerOptions::default());
        let twice = optimize(once.clone(), OptimizerOptions::default());
        prop_assert_eq!(format!("{:?}", once), format!("{:?}", twice));
    }
}
