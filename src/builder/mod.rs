/*!
Tools for reading literals from text.

# Syntax

A literal is an optional negation character (one of `~`, `¬`, `!`, or `-`) followed by a predicate, and optionally a parenthesised, comma separated, list of terms.
Whitespace around each part is ignored.

- `At(A)`
- `~ On(B, Table)`
- `HandEmpty`

A list of literals is a comma separated sequence of literals, e.g. `At(A), ~On(B, Table)`.
Commas within the terms of a literal do not separate literals.

# Examples

```rust
# use graphplan::builder::parse_literals;
# use graphplan::structures::literal::Literal;
let literals = parse_literals("At(A), ~On(B, Table), HandEmpty").unwrap();
assert_eq!(literals.len(), 3);
assert_eq!(literals[1], Literal::negative("On", vec!["B".to_string(), "Table".to_string()]));

assert!(parse_literals("   ").is_ok_and(|literals| literals.is_empty()));
assert!(parse_literals("At(A").is_err());
```
*/

mod literal;
pub use literal::parse_literals;
