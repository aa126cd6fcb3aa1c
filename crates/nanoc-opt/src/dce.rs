//! Dead-code elimination.
//!
//! Ground: `optimizer_dead_code_elimination` in
//! `original_source/src/optimizer.c`. An `if`/`while` whose condition
//! has already folded to a constant is replaced by whichever branch
//! is reachable (or removed entirely, for a `while (0) { ... }`), and
//! a statement that eliminates to nothing is dropped from its
//! enclosing `Block`/`Program` rather than left as a hole.

use nanoc_par::Node;

/// Eliminates dead code under `node`, returning `None` if `node`
/// itself should be dropped from its parent.
pub fn eliminate(node: Node, changed: &mut bool) -> Option<Node> {
    match node {
        Node::Program { statements, span } => {
            let statements = compact(statements, changed);
            Some(Node::Program { statements, span })
        }
        Node::Block { statements, span } => {
            let statements = compact(statements, changed);
            Some(Node::Block { statements, span })
        }
        Node::If {
            condition,
            then_branch,
            else_branch,
            span,
        } => {
            if let Node::Integer { value, .. } = *condition {
                *changed = true;
                return if value != 0 {
                    eliminate(*then_branch, changed)
                } else {
                    else_branch.and_then(|b| eliminate(*b, changed))
                };
            }
            let condition = Box::new(eliminate(*condition, changed)?);
            let then_branch = Box::new(eliminate(*then_branch, changed)?);
            let else_branch = match else_branch {
                Some(b) => eliminate(*b, changed).map(Box::new),
                None => None,
            };
            Some(Node::If {
                condition,
                then_branch,
                else_branch,
                span,
            })
        }
        Node::While {
            condition,
            body,
            span,
        } => {
            if let Node::Integer { value, .. } = *condition {
                if value == 0 {
                    *changed = true;
                    return None;
                }
            }
            let condition = Box::new(eliminate(*condition, changed)?);
            let body = Box::new(eliminate(*body, changed)?);
            Some(Node::While {
                condition,
                body,
                span,
            })
        }
        Node::Assignment { name, value, span } => {
            let value = Box::new(eliminate(*value, changed)?);
            Some(Node::Assignment { name, value, span })
        }
        Node::BinaryOp {
            op,
            left,
            right,
            span,
        } => {
            let left = Box::new(eliminate(*left, changed)?);
            let right = Box::new(eliminate(*right, changed)?);
            Some(Node::BinaryOp {
                op,
                left,
                right,
                span,
            })
        }
        leaf @ (Node::Identifier { .. } | Node::Integer { .. } | Node::Error { .. }) => Some(leaf),
    }
}

fn compact(statements: Vec<Node>, changed: &mut bool) -> Vec<Node> {
    let original_len = statements.len();
    let kept: Vec<Node> = statements
        .into_iter()
        .filter_map(|stmt| eliminate(stmt, changed))
        .collect();
    if kept.len() != original_len {
        *changed = true;
    }
    kept
}
