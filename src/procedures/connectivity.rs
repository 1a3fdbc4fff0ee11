/*!
Counts of connected components of literals.

A node is kept for each literal on a declared variable, with the positive literal of variable *v* at node *2v - 1* and the negative literal at node *2v - 2*.

- Literal components: within each clause every literal is joined with the first literal of the clause.
- Variable components: in addition, for every declared variable the positive literal is joined with the negative literal.

As variable components only join further classes, there are never more variable components than literal components.

```rust
# use cnf_features::structures::formula::Formula;
let formula: Formula = "p cnf 3 2\n1 2 0\n-3 0\n".parse().unwrap();
let features = formula.connectivity_features().unwrap();

// {1, 2}, {-1}, {-2}, {-3}, {3}
assert_eq!(features.connected_literal_components_count, 5);
// {1, -1, 2, -2}, {3, -3}
assert_eq!(features.connected_variable_components_count, 2);
```
*/

use crate::{
    generic::union_find::{Node, UnionFind},
    misc::log::targets::{self},
    reports::features::ConnectivityFeatures,
    structures::{
        formula::Formula,
        literal::{IntLiteral, Literal},
    },
    types::err::ErrorKind,
};

/// The node of `literal`.
fn literal_node(literal: Literal) -> Node {
    let variable = literal.variable() as Node;
    match literal.polarity() {
        true => 2 * variable - 1,
        false => 2 * variable - 2,
    }
}

impl Formula {
    /// Counts of literal and variable components of the formula.
    pub fn connectivity_features(&self) -> Result<ConnectivityFeatures, ErrorKind> {
        self.check_declared()?;

        let variables = self.declared_variables() as usize;
        let mut classes = UnionFind::new(2 * variables);

        for clause in self.clauses() {
            if let Some((first, rest)) = clause.split_first() {
                let first = literal_node(*first);
                for literal in rest {
                    classes.union(literal_node(*literal), first)?;
                }
            }
        }

        let literal_components = classes.component_count()?;
        log::trace!(target: targets::CONNECTIVITY, "{literal_components} literal components over {} nodes", classes.size());

        for variable in 1..=variables {
            classes.union(2 * variable - 1, 2 * variable - 2)?;
        }

        let variable_components = classes.component_count()?;
        log::trace!(target: targets::CONNECTIVITY, "{variable_components} variable components");

        Ok(ConnectivityFeatures {
            connected_literal_components_count: literal_components as u32,
            connected_variable_components_count: variable_components as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes() {
        assert_eq!(literal_node(1), 1);
        assert_eq!(literal_node(-1), 0);
        assert_eq!(literal_node(4), 7);
        assert_eq!(literal_node(-4), 6);
    }

    #[test]
    fn undeclared_variable() {
        let formula: Formula = "p cnf 2 1\n1 3 0\n".parse().unwrap();
        assert!(matches!(
            formula.connectivity_features(),
            Err(ErrorKind::Evaluation(_))
        ));
    }
}
