//! Variable substitution over expression trees.

use crate::error::EvalError;
use crate::syntax::ast::Expr;
use log::warn;
use std::collections::VecDeque;

/// Substitute `replacement` for every occurrence of `target` in the given
/// expression, producing a new tree.
///
/// Substituting into a call of `target` requires the replacement to be a
/// definition; the call's arguments are then queued behind the ones the
/// definition already carries, which is what composes curried
/// applications.
///
/// Substitution does not descend into the body of a definition that
/// rebinds `target`. The shadowed body keeps its occurrences and only the
/// pending arguments are rewritten; a warning is logged since this skip
/// changes which occurrences get replaced.
pub fn substitute(expr: Expr, target: &str, replacement: &Expr) -> Result<Expr, EvalError> {
    match expr {
        Expr::Variable(name) => Ok(if name == target {
            replacement.clone()
        } else {
            Expr::Variable(name)
        }),

        Expr::Call { name, args } => {
            let args = substitute_args(args, target, replacement)?;

            if name != target {
                return Ok(Expr::Call { name, args });
            }

            match replacement {
                Expr::Definition {
                    name,
                    body,
                    args: pending,
                } => {
                    let mut combined = pending.clone();
                    combined.extend(args);

                    Ok(Expr::Definition {
                        name: name.clone(),
                        body: body.clone(),
                        args: combined,
                    })
                }
                _ => Err(EvalError::NotAFunction { name }),
            }
        }

        Expr::Definition { name, body, args } => {
            if name == target {
                warn!("naming conflict: '{}' is rebound, leaving its body alone", name);

                let args = substitute_args(args, target, replacement)?;

                return Ok(Expr::Definition { name, body, args });
            }

            Ok(Expr::Definition {
                name,
                body: Box::new(substitute(*body, target, replacement)?),
                args: substitute_args(args, target, replacement)?,
            })
        }
    }
}

fn substitute_args(
    args: VecDeque<Expr>,
    target: &str,
    replacement: &Expr,
) -> Result<VecDeque<Expr>, EvalError> {
    args.into_iter()
        .map(|arg| substitute(arg, target, replacement))
        .collect()
}
