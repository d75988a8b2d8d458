//! This module contains the core logic of the interpreter.
//!
//! Reduction is normal order: the outermost definition always consumes the
//! front of its argument queue first, and the substituted body decides
//! what happens next. There is no memoization and no cycle detection; a
//! program without a normal form reduces forever unless a step limit is
//! configured.

use crate::error::EvalError;
use crate::subst::substitute;
use crate::syntax::ast::Expr;
use log::{debug, trace};

/// Reduce an expression to a normal form.
///
/// A normal form is a bare variable or a definition with nothing left to
/// apply. Divergent programs never return; use [`reduce_with_limit`] to
/// bound the number of steps instead.
pub fn reduce(expr: Expr) -> Result<Expr, EvalError> {
    reduce_with_limit(expr, None)
}

/// Reduce an expression to a normal form, failing with
/// [`EvalError::LimitExceeded`] once `limit` substitution steps have been
/// taken. A limit of `None` never gives up.
pub fn reduce_with_limit(expr: Expr, limit: Option<u64>) -> Result<Expr, EvalError> {
    let mut current = expr;
    let mut steps = 0u64;

    // One substitution per iteration. Reduction depth is bounded by the
    // program's behavior rather than its size, so this must stay a loop
    // instead of recursing.
    loop {
        trace!("step {}: {}", steps, current);

        current = match current {
            // A bare variable is a normal form.
            expr @ Expr::Variable(_) => return Ok(expr),

            // A call surviving to the top level means its name was never
            // bound.
            Expr::Call { name, .. } => return Err(EvalError::UnresolvedCall { name }),

            Expr::Definition {
                name,
                body,
                mut args,
            } => {
                let arg = match args.pop_front() {
                    Some(arg) => arg,
                    None => {
                        // Nothing left to apply: the definition is stuck
                        // and becomes the final value.
                        debug!("function '{}' not called", name);
                        return Ok(Expr::Definition { name, body, args });
                    }
                };

                if let Some(limit) = limit {
                    if steps >= limit {
                        return Err(EvalError::LimitExceeded { steps });
                    }
                }
                steps += 1;

                match substitute(*body, &name, &arg)? {
                    // The body collapsed to an atom. Any arguments still
                    // queued are discarded with it.
                    expr @ Expr::Variable(_) => return Ok(expr),

                    // Possibly resolvable now that an enclosing binding
                    // has been applied; let the next iteration decide.
                    expr @ Expr::Call { .. } => expr,

                    Expr::Definition {
                        name,
                        body,
                        args: mut inner,
                    } => {
                        // Leftover outer arguments are carried forward to
                        // whatever the substitution produced.
                        inner.extend(args);

                        Expr::Definition {
                            name,
                            body,
                            args: inner,
                        }
                    }
                }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_are_already_normal() {
        assert_eq!(reduce(Expr::variable("a")).unwrap(), Expr::variable("a"));
    }

    #[test]
    fn unapplied_definitions_are_stuck() {
        let id = Expr::definition("a", Expr::variable("a"), []);

        assert_eq!(reduce(id.clone()).unwrap(), id);
    }

    #[test]
    fn identity_applies_its_argument() {
        // f(f.y).x(x)
        let expr = Expr::definition(
            "f",
            Expr::call("f", [Expr::variable("y")]),
            [Expr::definition("x", Expr::variable("x"), [])],
        );

        assert_eq!(reduce(expr).unwrap(), Expr::variable("y"));
    }

    #[test]
    fn leftover_arguments_carry_to_the_substituted_definition() {
        // a(b(a.b)).(c(d(d)).5).3
        let expr = Expr::definition(
            "a",
            Expr::definition("b", Expr::call("a", [Expr::variable("b")]), []),
            [
                Expr::definition(
                    "c",
                    Expr::definition("d", Expr::variable("d"), []),
                    [Expr::variable("5")],
                ),
                Expr::variable("3"),
            ],
        );

        assert_eq!(reduce(expr).unwrap(), Expr::variable("3"));
    }

    #[test]
    fn variable_results_discard_queued_arguments() {
        // id(x).x.y
        let expr = Expr::definition(
            "id",
            Expr::variable("x"),
            [Expr::variable("x"), Expr::variable("y")],
        );

        assert_eq!(reduce(expr).unwrap(), Expr::variable("x"));
    }

    #[test]
    fn unresolved_calls_fail_with_the_name() {
        let expr = Expr::call("undefined_name", []);

        assert_eq!(
            reduce(expr).unwrap_err(),
            EvalError::UnresolvedCall {
                name: String::from("undefined_name"),
            },
        );
    }

    #[test]
    fn limit_stops_divergent_programs() {
        // f(f.f).x(x.x) applies self-application to itself forever.
        let expr = Expr::definition(
            "f",
            Expr::call("f", [Expr::variable("f")]),
            [Expr::definition(
                "x",
                Expr::call("x", [Expr::variable("x")]),
                [],
            )],
        );

        assert_eq!(
            reduce_with_limit(expr, Some(100)).unwrap_err(),
            EvalError::LimitExceeded { steps: 100 },
        );
    }

    #[test]
    fn limit_does_not_trip_on_normal_forms() {
        let id = Expr::definition("a", Expr::variable("a"), []);

        assert_eq!(reduce_with_limit(id.clone(), Some(0)).unwrap(), id);
        assert_eq!(
            reduce_with_limit(Expr::variable("v"), Some(0)).unwrap(),
            Expr::variable("v"),
        );
    }
}
