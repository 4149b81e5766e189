//! Definition expressions - parse strings like "[MILLI]*M" or "N*M(-2)"
//!
//! Grammar:
//! - Factors are joined by `*`: "KG*M*S(-2)"
//! - Exponents follow a factor in parentheses: "M(3)", "S(-1)"
//! - Bracketed factors name constants: "[KILO]*PA", "[MILLI]M"
//!   (the `*` may be omitted next to a bracketed factor)
//! - Names may carry a schema qualifier: "u:IN(3)"
//! - "1" is the dimensionless expression

use std::fmt;
use thiserror::Error;

/// Error produced while parsing a definition expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty definition")]
    Empty,

    #[error("unexpected '{found}' at position {position}")]
    Unexpected { found: char, position: usize },

    #[error("unexpected end of definition")]
    UnexpectedEnd,

    #[error("invalid exponent '{0}'")]
    InvalidExponent(String),
}

/// One factor of a definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factor {
    /// Schema name or alias written before ':'
    pub qualifier: Option<String>,
    pub name: String,
    pub exponent: i32,
    /// Written in brackets, so it must resolve to a constant
    pub constant: bool,
}

/// A parsed definition: the product of its factors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression {
    pub factors: Vec<Factor>,
}

impl Expression {
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        Parser::new(s).expression()
    }

    /// True for "1"
    pub fn is_dimensionless(&self) -> bool {
        self.factors.is_empty()
    }

    /// True when the expression is exactly `name` (a root definition)
    pub fn is_self_reference(&self, name: &str) -> bool {
        match self.factors.as_slice() {
            [f] => !f.constant && f.exponent == 1 && f.name == name,
            _ => false,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.factors.is_empty() {
            return write!(f, "1");
        }
        let parts: Vec<String> = self.factors.iter().map(|factor| factor.to_string()).collect();
        write!(f, "{}", parts.join("*"))
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match &self.qualifier {
            Some(q) => format!("{}:{}", q, self.name),
            None => self.name.clone(),
        };
        if self.constant {
            write!(f, "[{}]", name)?;
        } else {
            write!(f, "{}", name)?;
        }
        if self.exponent != 1 {
            write!(f, "({})", self.exponent)?;
        }
        Ok(())
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn new(s: &str) -> Self {
        Parser { chars: s.chars().collect(), pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn unexpected(&self) -> ParseError {
        match self.peek() {
            Some(found) => ParseError::Unexpected { found, position: self.pos },
            None => ParseError::UnexpectedEnd,
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        self.skip_ws();
        if self.peek() == Some(expected) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn expression(&mut self) -> Result<Expression, ParseError> {
        self.skip_ws();
        if self.peek().is_none() {
            return Err(ParseError::Empty);
        }

        let mut factors = Vec::new();
        loop {
            let factor = self.term()?;
            let after_constant = factor.as_ref().is_some_and(|f| f.constant);
            factors.extend(factor);

            self.skip_ws();
            match self.peek() {
                None => break,
                Some('*') => {
                    self.pos += 1;
                }
                Some('[') => {}
                Some(c) if after_constant && is_name_char(c) => {}
                Some(_) => return Err(self.unexpected()),
            }
        }

        Ok(Expression { factors })
    }

    /// A single factor; `None` for the literal "1"
    fn term(&mut self) -> Result<Option<Factor>, ParseError> {
        self.skip_ws();
        match self.peek() {
            Some('[') => {
                self.pos += 1;
                let (qualifier, name) = self.name()?;
                self.expect(']')?;
                let exponent = self.exponent()?;
                Ok(Some(Factor { qualifier, name, exponent, constant: true }))
            }
            Some(c) if is_name_char(c) => {
                let (qualifier, name) = self.name()?;
                if qualifier.is_none() && name == "1" {
                    return Ok(None);
                }
                let exponent = self.exponent()?;
                Ok(Some(Factor { qualifier, name, exponent, constant: false }))
            }
            _ => Err(self.unexpected()),
        }
    }

    fn identifier(&mut self) -> Result<String, ParseError> {
        self.skip_ws();
        let start = self.pos;
        while matches!(self.peek(), Some(c) if is_name_char(c)) {
            self.pos += 1;
        }
        if self.pos == start {
            return Err(self.unexpected());
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }

    fn name(&mut self) -> Result<(Option<String>, String), ParseError> {
        let first = self.identifier()?;
        if self.peek() == Some(':') {
            self.pos += 1;
            let name = self.identifier()?;
            Ok((Some(first), name))
        } else {
            Ok((None, first))
        }
    }

    fn exponent(&mut self) -> Result<i32, ParseError> {
        if self.peek() != Some('(') {
            return Ok(1);
        }
        self.pos += 1;
        let start = self.pos;
        loop {
            match self.bump() {
                Some(')') => break,
                Some(_) => {}
                None => return Err(ParseError::UnexpectedEnd),
            }
        }
        let text: String = self.chars[start..self.pos - 1].iter().collect();
        let text = text.trim();
        match text.parse::<i32>() {
            Ok(0) | Err(_) => Err(ParseError::InvalidExponent(text.to_string())),
            Ok(exp) => Ok(exp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factor(name: &str, exponent: i32, constant: bool) -> Factor {
        Factor { qualifier: None, name: name.to_string(), exponent, constant }
    }

    #[test]
    fn test_single_name() {
        let expr = Expression::parse("M").unwrap();
        assert_eq!(expr.factors, vec![factor("M", 1, false)]);
        assert!(expr.is_self_reference("M"));
        assert!(!expr.is_self_reference("MM"));
    }

    #[test]
    fn test_product_with_exponents() {
        let expr = Expression::parse("KG*M*S(-2)").unwrap();
        assert_eq!(expr.factors, vec![
            factor("KG", 1, false),
            factor("M", 1, false),
            factor("S", -2, false),
        ]);
    }

    #[test]
    fn test_constants() {
        let expr = Expression::parse("[MILLI]*M").unwrap();
        assert_eq!(expr.factors, vec![factor("MILLI", 1, true), factor("M", 1, false)]);

        // '*' may be left out after a constant
        let expr = Expression::parse("[MILLI]M").unwrap();
        assert_eq!(expr.factors, vec![factor("MILLI", 1, true), factor("M", 1, false)]);

        let expr = Expression::parse("LBM[STD_G]").unwrap();
        assert_eq!(expr.factors, vec![factor("LBM", 1, false), factor("STD_G", 1, true)]);
    }

    #[test]
    fn test_qualified_names() {
        let expr = Expression::parse("u:IN(3)").unwrap();
        assert_eq!(expr.factors[0].qualifier.as_deref(), Some("u"));
        assert_eq!(expr.factors[0].name, "IN");
        assert_eq!(expr.factors[0].exponent, 3);
        assert_eq!(expr.to_string(), "u:IN(3)");
    }

    #[test]
    fn test_dimensionless() {
        let expr = Expression::parse("1").unwrap();
        assert!(expr.is_dimensionless());
        assert_eq!(expr.to_string(), "1");
    }

    #[test]
    fn test_whitespace() {
        let expr = Expression::parse(" N * M( -2 ) ").unwrap();
        assert_eq!(expr.factors, vec![factor("N", 1, false), factor("M", -2, false)]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(Expression::parse(""), Err(ParseError::Empty));
        assert_eq!(Expression::parse("  "), Err(ParseError::Empty));
        assert_eq!(Expression::parse("M*"), Err(ParseError::UnexpectedEnd));
        assert_eq!(Expression::parse("M(x)"), Err(ParseError::InvalidExponent("x".into())));
        assert_eq!(Expression::parse("M(0)"), Err(ParseError::InvalidExponent("0".into())));
        assert_eq!(Expression::parse("M(2"), Err(ParseError::UnexpectedEnd));
        assert!(matches!(Expression::parse("M/S"), Err(ParseError::Unexpected { found: '/', .. })));
        assert!(matches!(Expression::parse("M S"), Err(ParseError::Unexpected { found: 'S', .. })));
        assert!(matches!(Expression::parse("[MILLI*M"), Err(ParseError::Unexpected { found: '*', .. })));
    }

    #[test]
    fn test_display_roundtrip() {
        for src in ["[KILO]*PA", "N*M(-2)", "LBF*IN(-2)", "M*M(-1)"] {
            assert_eq!(Expression::parse(src).unwrap().to_string(), src);
        }
    }
}
