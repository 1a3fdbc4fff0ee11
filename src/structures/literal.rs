/*!
Literals, as signed integers.

The magnitude of a literal is a (1-based) variable and the sign of the literal is the polarity of the variable.

```rust
# use cnf_features::structures::literal::{IntLiteral, Literal, TERMINATOR};
let literal: Literal = -7;

assert_eq!(literal.variable(), 7);
assert!(!literal.polarity());
assert_eq!(literal.negate(), 7);
assert!(TERMINATOR.is_terminator());
```

The value 0 is reserved to terminate a clause, and never denotes a literal.
*/

/// A variable, aka. an 'atom'.
pub type Variable = u32;

/// A literal, as a signed integer.
pub type Literal = i32;

/// The value used to terminate a clause.
pub const TERMINATOR: Literal = 0;

/// The largest variable which may be represented by a [Literal].
pub const VARIABLE_MAX: Variable = i32::MAX.unsigned_abs();

/// Methods for interpreting an integer as a literal.
pub trait IntLiteral {
    /// The variable of the literal.
    fn variable(&self) -> Variable;

    /// The polarity of the literal, true for positive literals.
    fn polarity(&self) -> bool;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// Whether the literal is the clause terminator.
    fn is_terminator(&self) -> bool;
}

impl IntLiteral for Literal {
    fn variable(&self) -> Variable {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        *self > 0
    }

    fn negate(&self) -> Self {
        -*self
    }

    fn is_terminator(&self) -> bool {
        *self == TERMINATOR
    }
}
