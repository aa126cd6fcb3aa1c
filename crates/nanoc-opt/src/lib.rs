//! Optimization passes over the parsed AST: constant folding,
//! dead-code elimination, and strength reduction, run to a fixed
//! point.
//!
//! Ground: `optimizer_optimize` in `original_source/src/optimizer.c`,
//! which loops `do { ...three passes... } while (changes_made)`. The
//! C original's `optimizer_find_used_variables`/`used_variables_destroy`
//! pair is not ported: nothing in the pipeline ever consumes its
//! output there either, and porting unused machinery would just be
//! inventing API surface no caller needs.

mod dce;
#[cfg(test)]
mod edge_cases;
mod fold;
mod strength;

use nanoc_par::Node;

/// Safety valve against a pathological pass interaction that never
/// settles; the three passes here are confluent in practice, but a
/// defensive cap keeps the driver from looping forever if that
/// invariant is ever broken by a future change.
const MAX_ITERATIONS: u32 = 32;

/// Which passes to run. All three are on by default, matching
/// `optimizer_create`'s initial `OptimizerOptions`.
#[derive(Debug, Clone, Copy)]
pub struct OptimizerOptions {
    pub constant_folding: bool,
    pub dead_code_elimination: bool,
    pub strength_reduction: bool,
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        Self {
            constant_folding: true,
            dead_code_elimination: true,
            strength_reduction: true,
        }
    }
}

/// Runs the enabled passes over `ast` in constant-folding,
/// dead-code-elimination, strength-reduction order, repeating the
/// whole cycle until one makes it through with no change.
pub fn optimize(mut ast: Node, options: OptimizerOptions) -> Node {
    for iteration in 0..MAX_ITERATIONS {
        let mut changed = false;

        if options.constant_folding {
            ast = fold::fold(ast, &mut changed);
        }

        if options.dead_code_elimination {
            // The root (`Program`) is a `Block`-shaped node and is
            // never itself eliminated; `eliminate` only returns `None`
            // for a child being dropped from its parent's statement
            // list, so this is infallible at the root.
            ast = dce::eliminate(ast, &mut changed)
                .expect("optimizer never eliminates the program root");
        }

        if options.strength_reduction {
            ast = strength::reduce(ast, &mut changed);
        }

        if !changed {
            return ast;
        }

        if iteration + 1 == MAX_ITERATIONS {
            log::warn!(
                "optimizer did not reach a fixed point after {MAX_ITERATIONS} iterations; \
                 returning the last result anyway"
            );
        }
    }
    ast
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanoc_par::BinOp;
    use nanoc_util::Span;

    fn int(value: i64) -> Node {
        Node::integer(value, Span::DUMMY)
    }

    #[test]
    fn folding_and_strength_reduction_compose_across_iterations() {
        let span = Span::DUMMY;
        // x = (2 + 2) * 4;  ->  constant-fold the sum, then the
        // resulting `4 * 4` is itself folded to `16` before strength
        // reduction ever sees a multiply by a non-constant operand.
        let ast = Node::program(
            vec![Node::assignment(
                "x",
                Node::binary_op(
                    BinOp::Mul,
                    Node::binary_op(BinOp::Add, int(2), int(2), span),
                    int(4),
                    span,
                ),
                span,
            )],
            span,
        );
        let result = optimize(ast, OptimizerOptions::default());
        match result {
            Node::Program { statements, .. } => match &statements[0] {
                Node::Assignment { value, .. } => {
                    assert!(matches!(**value, Node::Integer { value: 16, .. }));
                }
                other => panic!("expected Assignment, got {other:?}"),
            },
            other => panic!("expected Program, got {other:?}"),
        }
    }

    #[test]
    fn dead_if_branch_is_removed_end_to_end() {
        let span = Span::DUMMY;
        let ast = Node::program(
            vec![Node::if_stmt(
                int(0),
                Node::block(vec![Node::assignment("x", int(1), span)], span),
                Some(Node::block(vec![Node::assignment("x", int(2), span)], span)),
                span,
            )],
            span,
        );
        let result = optimize(ast, OptimizerOptions::default());
        match result {
            Node::Program { statements, .. } => {
                assert_eq!(statements.len(), 1);
                assert!(matches!(statements[0], Node::Block { .. }));
            }
            other => panic!("expected Program, got {other:?}"),
        }
    }

    #[test]
    fn disabling_a_pass_leaves_its_pattern_untouched() {
        let span = Span::DUMMY;
        let ast = Node::program(
            vec![Node::assignment(
                "x",
                Node::binary_op(BinOp::Mul, Node::identifier("y", span), int(8), span),
                span,
            )],
            span,
        );
        let options = OptimizerOptions {
            strength_reduction: false,
            ..OptimizerOptions::default()
        };
        let result = optimize(ast, options);
        match result {
            Node::Program { statements, .. } => match &statements[0] {
                Node::Assignment { value, .. } => {
                    assert!(matches!(**value, Node::BinaryOp { op: BinOp::Mul, .. }));
                }
                other => panic!("expected Assignment, got {other:?}"),
            },
            other => panic!("expected Program, got {other:?}"),
        }
    }
}
