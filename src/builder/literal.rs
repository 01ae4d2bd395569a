use std::str::FromStr;

use crate::{
    misc::log::targets::{self},
    structures::literal::Literal,
    types::err::{self},
};

/// Characters which negate the literal they prefix.
const NEGATION: [char; 4] = ['~', '¬', '!', '-'];

fn is_predicate_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

impl FromStr for Literal {
    type Err = err::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();

        let (polarity, rest) = match text.chars().next() {
            None => return Err(err::ParseError::Empty),
            Some(c) if NEGATION.contains(&c) => (false, text[c.len_utf8()..].trim_start()),
            Some(_) => (true, text),
        };

        if rest.is_empty() {
            return Err(err::ParseError::Negation);
        }

        let (predicate, terms) = match rest.find('(') {
            None => {
                if rest.contains(')') {
                    return Err(err::ParseError::UnbalancedTerms);
                }
                (rest, Vec::default())
            }

            Some(open) => {
                let close = match rest.rfind(')') {
                    Some(close) if close > open => close,
                    _ => return Err(err::ParseError::UnbalancedTerms),
                };

                let inner = &rest[open + 1..close];
                if inner.contains(['(', ')']) || !rest[close + 1..].trim().is_empty() {
                    return Err(err::ParseError::UnbalancedTerms);
                }

                let mut terms = Vec::default();
                if !inner.trim().is_empty() {
                    for term in inner.split(',').map(str::trim) {
                        if term.is_empty() {
                            return Err(err::ParseError::Term(rest.to_string()));
                        }
                        terms.push(term.to_string());
                    }
                }

                (rest[..open].trim_end(), terms)
            }
        };

        if predicate.is_empty() || !predicate.chars().all(is_predicate_char) {
            return Err(err::ParseError::Predicate(predicate.to_string()));
        }

        let literal = match polarity {
            true => Literal::positive(predicate, terms),
            false => Literal::negative(predicate, terms),
        };
        log::trace!(target: targets::PARSE, "Read {literal} from '{s}'");
        Ok(literal)
    }
}

/// Reads a comma separated list of literals.
///
/// Blank text is read as an empty list.
pub fn parse_literals(text: &str) -> Result<Vec<Literal>, err::ParseError> {
    let mut literals = Vec::default();

    if text.trim().is_empty() {
        return Ok(literals);
    }

    let mut depth: usize = 0;
    let mut from = 0;

    for (index, c) in text.char_indices() {
        match c {
            '(' => depth += 1,

            ')' => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return Err(err::ParseError::UnbalancedTerms),
            },

            ',' if depth == 0 => {
                literals.push(text[from..index].parse()?);
                from = index + 1;
            }

            _ => {}
        }
    }

    if depth != 0 {
        return Err(err::ParseError::UnbalancedTerms);
    }
    literals.push(text[from..].parse()?);

    Ok(literals)
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn atoms_and_terms() {
        let literal: Literal = " On( B ,Table ) ".parse().unwrap();
        assert_eq!(literal.predicate(), "On");
        assert_eq!(literal.atom().terms(), &["B".to_string(), "Table".to_string()]);
        assert!(literal.polarity());

        let nullary: Literal = "HandEmpty".parse().unwrap();
        assert!(nullary.atom().terms().is_empty());
        assert_eq!(nullary, "HandEmpty()".parse().unwrap());
    }

    #[test]
    fn negations() {
        for text in ["~At(A)", "¬At(A)", "!At(A)", "-At(A)", "~ At(A)"] {
            let literal: Literal = text.parse().unwrap();
            assert!(!literal.polarity(), "{text}");
            assert_eq!(literal.to_string(), "~At(A)");
        }
    }

    #[test]
    fn display_round_trip() {
        let literal: Literal = "~On(B, Table)".parse().unwrap();
        assert_eq!(literal, literal.to_string().parse().unwrap());
    }

    #[test]
    fn errors() {
        assert_eq!("".parse::<Literal>(), Err(err::ParseError::Empty));
        assert_eq!("~".parse::<Literal>(), Err(err::ParseError::Negation));
        assert_eq!("At(A".parse::<Literal>(), Err(err::ParseError::UnbalancedTerms));
        assert_eq!("At)A(".parse::<Literal>(), Err(err::ParseError::UnbalancedTerms));
        assert_eq!("At(A) x".parse::<Literal>(), Err(err::ParseError::UnbalancedTerms));
        assert_eq!(
            "At(A,,B)".parse::<Literal>(),
            Err(err::ParseError::Term("At(A,,B)".to_string()))
        );
        assert_eq!(
            "(A)".parse::<Literal>(),
            Err(err::ParseError::Predicate(String::new()))
        );
        assert_eq!(
            "Is at(A)".parse::<Literal>(),
            Err(err::ParseError::Predicate("Is at".to_string()))
        );
    }

    #[test]
    fn lists() {
        let literals = parse_literals("At(A, B), ~Clear(C),Empty").unwrap();
        assert_eq!(literals.len(), 3);
        assert_eq!(literals[0].atom().terms().len(), 2);
        assert!(!literals[1].polarity());

        assert_eq!(parse_literals("At(A),"), Err(err::ParseError::Empty));
        assert_eq!(parse_literals("At(A)), B"), Err(err::ParseError::UnbalancedTerms));
        assert_eq!(parse_literals("At((A), B"), Err(err::ParseError::UnbalancedTerms));
    }
}
