//! Expansion of `let` bindings into ordinary applications.
//!
//! A program may begin with any number of `let NAME VALUE;` bindings. Each
//! one is sugar for wrapping the rest of the program in a definition of
//! NAME that is immediately applied to VALUE, so
//!
//! ```text
//! let f a(a.5);
//! f.b
//! ```
//!
//! expands to `f(f.b).a(a.5)`.

use crate::error::ParseError;

/// Expand every leading `let` binding in the given program text.
///
/// The expansion is purely textual. The result may still contain whatever
/// whitespace the trailing program had; the parser strips whitespace
/// separately.
pub fn expand(text: &str) -> Result<String, ParseError> {
    let mut bindings = Vec::new();
    let mut index = 0;

    loop {
        let rest = &text[index..];
        let trimmed = rest.trim_start();

        if !is_binding_start(trimmed) {
            break;
        }

        let start = index + (rest.len() - trimmed.len());
        let end = match rest.find(';') {
            Some(i) => index + i,
            None => return Err(ParseError::new("missing ';' after let binding", start)),
        };

        let mut words = text[start + 3..end].split_whitespace();
        let name = match words.next() {
            Some(word) => word,
            None => return Err(ParseError::new("let binding is missing a name", start)),
        };
        let value: String = words.collect();

        if value.is_empty() {
            return Err(ParseError::new("let binding is missing a value", start));
        }

        bindings.push((name, value));
        index = end + 1;
    }

    // Innermost binding first, so earlier names are visible to later ones.
    let mut program = text[index..].to_string();
    for (name, value) in bindings.into_iter().rev() {
        program = format!("{}({}).{}", name, program, value);
    }

    Ok(program)
}

/// A binding starts with the word `let` followed by whitespace. Anything
/// else, including identifiers that merely begin with `let`, is program
/// text.
fn is_binding_start(text: &str) -> bool {
    text.strip_prefix("let")
        .map_or(false, |rest| rest.starts_with(char::is_whitespace))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(text: &str) -> String {
        text.chars().filter(|c| !c.is_whitespace()).collect()
    }

    #[test]
    fn no_bindings() {
        let text = "a(a.5).a(a)";

        assert_eq!(expand(text).unwrap(), text);
    }

    #[test]
    fn single_binding() {
        let text = "let f a(a.5);
        f.a(a)";

        assert_eq!(strip(&expand(text).unwrap()), "f(f.a(a)).a(a.5)");
    }

    #[test]
    fn double_binding() {
        let text = "
        let f a(a.5);
        let g a(a.3);
        f.g";

        assert_eq!(strip(&expand(text).unwrap()), "f(g(f.g).a(a.3)).a(a.5)");
    }

    #[test]
    fn value_whitespace_is_collapsed() {
        let text = "let f a (a . 5);f";

        assert_eq!(strip(&expand(text).unwrap()), "f(f).a(a.5)");
    }

    #[test]
    fn let_prefixed_identifier_is_not_a_binding() {
        let text = "letter(letter)";

        assert_eq!(expand(text).unwrap(), text);
    }

    #[test]
    fn missing_semicolon() {
        let error = expand("let f a(a)").unwrap_err();

        assert!(error.message.contains("';'"));
    }

    #[test]
    fn missing_name() {
        let error = expand("let ;f").unwrap_err();

        assert!(error.message.contains("name"));
    }

    #[test]
    fn missing_value() {
        let error = expand("let f ;f").unwrap_err();

        assert!(error.message.contains("value"));
    }
}
