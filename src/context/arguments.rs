//! Argument passthrough for emitted constructor calls

use crate::descriptor::naming::to_snake_case;
use std::borrow::Cow;

/// How a dependency token appears in generated code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument<'a> {
    /// Passed through as a literal expression
    Literal(Cow<'a, str>),
    /// Passed as the result of another accessor on the same context
    Reference(&'a str),
}

impl<'a> Argument<'a> {
    pub fn classify(token: &'a str) -> Self {
        if is_numeric_literal(token) {
            Argument::Literal(Cow::Borrowed(token))
        } else if let Some(literal) = string_literal(token) {
            Argument::Literal(literal)
        } else {
            Argument::Reference(token)
        }
    }

    /// Rust expression for this argument inside a `Context` method
    pub fn to_expression(&self) -> String {
        match self {
            Argument::Literal(literal) => literal.to_string(),
            Argument::Reference(name) => format!("self.{}()", to_snake_case(name)),
        }
    }
}

/// `42`, `-7`, `3.5`, `1_000`, `1e-3`, `0xff`, `0o17`, `0b1010`
pub fn is_numeric_literal(token: &str) -> bool {
    let unsigned = token.strip_prefix('-').unwrap_or(token);
    if !unsigned.starts_with(|c: char| c.is_ascii_digit()) {
        return false;
    }

    let radix = [("0x", 16), ("0o", 8), ("0b", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| unsigned.strip_prefix(prefix).map(|digits| (digits, radix)));
    if let Some((digits, radix)) = radix {
        let digits = digits.replace('_', "");
        return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    }

    unsigned.replace('_', "").parse::<f64>().is_ok()
}

/// A quoted string token as a Rust string literal. Double-quoted tokens are
/// kept verbatim; single-quoted ones are re-quoted.
fn string_literal(token: &str) -> Option<Cow<'_, str>> {
    if token.len() < 2 {
        return None;
    }

    if token.starts_with('"') && token.ends_with('"') {
        return Some(Cow::Borrowed(token));
    }

    let inner = token.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut out = String::with_capacity(inner.len() + 2);
    out.push('"');
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('\'') => out.push('\''),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push_str("\\\\"),
            },
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out.push('"');
    Some(Cow::Owned(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_literals() {
        for token in ["42", "-7", "3.5", "1_000", "1e-3", "0xff", "0o17", "0b1010", "0"] {
            assert!(is_numeric_literal(token), "{token} should be numeric");
        }
        for token in ["inf", "NaN", "-", "0x", "0xzz", "Logger", "1abc", "", "infinity"] {
            assert!(!is_numeric_literal(token), "{token} should not be numeric");
        }
    }

    #[test]
    fn test_numbers_pass_through() {
        assert_eq!(Argument::classify("42").to_expression(), "42");
        assert_eq!(Argument::classify("-1.5").to_expression(), "-1.5");
    }

    #[test]
    fn test_double_quoted_string_is_verbatim() {
        let arg = Argument::classify("\"text\"");
        assert_eq!(arg, Argument::Literal(Cow::Borrowed("\"text\"")));
        assert_eq!(arg.to_expression(), "\"text\"");
    }

    #[test]
    fn test_single_quoted_string_is_requoted() {
        assert_eq!(Argument::classify("'ns'").to_expression(), "\"ns\"");
        assert_eq!(
            Argument::classify(r#"'say "hi"'"#).to_expression(),
            r#""say \"hi\"""#
        );
        assert_eq!(Argument::classify(r"'it\'s'").to_expression(), "\"it's\"");
    }

    #[test]
    fn test_names_become_accessor_calls() {
        assert_eq!(
            Argument::classify("YourFunkyDependency1"),
            Argument::Reference("YourFunkyDependency1")
        );
        assert_eq!(
            Argument::classify("YourFunkyDependency1").to_expression(),
            "self.your_funky_dependency1()"
        );
        assert_eq!(
            Argument::classify("scalarService").to_expression(),
            "self.scalar_service()"
        );
    }

    #[test]
    fn test_lone_quote_is_not_a_string() {
        assert_eq!(Argument::classify("'"), Argument::Reference("'"));
    }
}
