//! The language parser.
//!
//! This is a handwritten, recursive descent parser. This is done both for
//! speed and simplicity, since the language syntax is relatively simple
//! anyway.
//!
//! The grammar has only three delimiters, `.`, `(` and `)`, and is
//! whitespace insensitive; every other character run is an identifier.
//! Which form a stretch of text takes is decided by whichever delimiter
//! appears earliest: a text without parentheses is a variable or a flat
//! call, a leading parenthesis is a transparent group, and otherwise the
//! relative order of the first `.` and the first `(` picks between a call
//! and a definition.

use crate::ast::Expr;
use crate::desugar;
use crate::error::ParseError;
use crate::source::SourceFile;
use std::collections::VecDeque;

/// Parse a source file into an expression tree.
pub fn parse(file: impl Into<SourceFile>) -> Result<Expr, ParseError> {
    let file = file.into();
    let expanded = desugar::expand(file.source())?;
    let stripped: String = expanded.chars().filter(|c| !c.is_whitespace()).collect();

    parse_expr(&stripped, 0)
}

/// Parse one complete expression. `offset` is the absolute position of
/// `text` in the stripped program, carried along for error reporting.
fn parse_expr(text: &str, offset: usize) -> Result<Expr, ParseError> {
    if text.is_empty() {
        return Err(ParseError::new("empty expression", offset));
    }

    let paren = text.find('(');
    let dot = text.find('.');

    match (paren, dot) {
        (None, None) => Ok(Expr::Variable(identifier(text, offset)?)),

        (None, Some(dot)) => parse_call(text, dot, offset),

        // A parenthesized group: transparent except for any argument list
        // attached after the closing parenthesis.
        (Some(0), _) => {
            let end = find_block_end(text, offset)?;
            let inner = parse_expr(&text[1..end], offset + 1)?;

            attach_args(inner, &text[end + 1..], offset + end + 1)
        }

        (Some(paren), Some(dot)) if dot < paren => parse_call(text, dot, offset),

        (Some(paren), _) => {
            let name = identifier(&text[..paren], offset)?;
            let end = find_block_end(text, offset)?;
            let body = parse_expr(&text[paren + 1..end], offset + paren + 1)?;
            let definition = Expr::Definition {
                name,
                body: Box::new(body),
                args: VecDeque::new(),
            };

            attach_args(definition, &text[end + 1..], offset + end + 1)
        }
    }
}

/// Parse a call: a name followed by a `.`-led argument list. The position
/// of the first `.` has already been found by the caller.
fn parse_call(text: &str, dot: usize, offset: usize) -> Result<Expr, ParseError> {
    Ok(Expr::Call {
        name: identifier(&text[..dot], offset)?,
        args: parse_args(&text[dot..], offset + dot)?,
    })
}

/// Parse a `.`-led argument list until the text runs out.
///
/// Each argument is either a parenthesized run, delimited by matching the
/// next opening parenthesis, or a flat token ending at the next `.` or at
/// the end of the text. A trailing `.` with nothing after it contributes
/// no argument.
fn parse_args(text: &str, offset: usize) -> Result<VecDeque<Expr>, ParseError> {
    let mut args = VecDeque::new();
    let mut index = 0;

    while index < text.len() {
        let rest = &text[index + 1..];

        if rest.is_empty() {
            break;
        }

        let len = match (rest.find('('), rest.find('.')) {
            (Some(paren), dot) if dot.map_or(true, |dot| paren < dot) => {
                find_block_end(rest, offset + index + 1)? + 1
            }
            (_, Some(dot)) => dot,
            (_, None) => rest.len(),
        };

        args.push_back(parse_expr(&rest[..len], offset + index + 1)?);
        index += 1 + len;

        if index < text.len() && !text[index..].starts_with('.') {
            return Err(ParseError::new(
                "expected '.' between arguments",
                offset + index,
            ));
        }
    }

    Ok(args)
}

/// Attach a trailing argument list to an already parsed expression. Either
/// nothing follows the expression, or a `.`-led argument list does.
fn attach_args(expr: Expr, rest: &str, offset: usize) -> Result<Expr, ParseError> {
    if rest.is_empty() {
        return Ok(expr);
    }

    if !rest.starts_with('.') {
        return Err(ParseError::new("expected '.' after ')'", offset));
    }

    let trailing = parse_args(rest, offset)?;

    Ok(match expr {
        Expr::Variable(name) => Expr::Call {
            name,
            args: trailing,
        },
        Expr::Call { name, mut args } => {
            args.extend(trailing);
            Expr::Call { name, args }
        }
        Expr::Definition {
            name,
            body,
            mut args,
        } => {
            args.extend(trailing);
            Expr::Definition { name, body, args }
        }
    })
}

/// Find the index of the closing parenthesis matching the first opening
/// parenthesis in the text, by depth counting.
fn find_block_end(text: &str, offset: usize) -> Result<usize, ParseError> {
    let mut depth = 0usize;

    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return Err(ParseError::new("unbalanced parenthesis", offset + i));
                }

                depth -= 1;

                if depth == 0 {
                    return Ok(i);
                }
            }
            _ => {}
        }
    }

    Err(ParseError::new("unbalanced parenthesis", offset))
}

/// Validate an identifier: a non-empty run of non-delimiter characters.
fn identifier(text: &str, offset: usize) -> Result<String, ParseError> {
    if text.is_empty() {
        return Err(ParseError::new("missing name", offset));
    }

    // `.` and `(` cannot occur here given how callers carve up the text,
    // but a stray `)` can.
    if let Some(i) = text.find(|c| matches!(c, '.' | '(' | ')')) {
        return Err(ParseError::new(
            format!("unexpected '{}' in name", &text[i..i + 1]),
            offset + i,
        ));
    }

    Ok(text.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_end_skips_nested_pairs() {
        assert_eq!(find_block_end("a(b(c))", 0).unwrap(), 6);
        assert_eq!(find_block_end("(a).(b)", 0).unwrap(), 2);
    }

    #[test]
    fn block_end_requires_balance() {
        assert!(find_block_end("a(b", 0).is_err());
        assert_eq!(find_block_end("a)b(c)", 7).unwrap_err().offset, 8);
    }

    #[test]
    fn identifiers_reject_delimiters() {
        assert_eq!(identifier("hi", 0).unwrap(), "hi");
        assert!(identifier("", 0).is_err());
        assert!(identifier("a)b", 0).is_err());
    }

    #[test]
    fn argument_runs_are_carved_by_earliest_delimiter() {
        let args = parse_args(".d(e(e)).5", 0).unwrap();

        assert_eq!(args.len(), 2);
        assert_eq!(
            args[0],
            Expr::definition("d", Expr::definition("e", Expr::variable("e"), []), []),
        );
        assert_eq!(args[1], Expr::variable("5"));
    }

    #[test]
    fn trailing_separator_adds_no_argument() {
        let args = parse_args(".x.", 0).unwrap();

        assert_eq!(args, [Expr::variable("x")]);
    }

    #[test]
    fn junk_between_arguments_is_rejected() {
        assert!(parse_args(".a(b)c", 0).is_err());
    }
}
