//! Selector value object - which controllers a run should touch

use std::fmt;

use crate::domain::entities::Inventory;

/// Selector argument that picks every inventory entry
pub const ALL_TOKEN: &str = "all";

/// Prefix turning a bare suffix (`6`) into a controller name (`ROC6`)
pub const NAME_PREFIX: &str = "ROC";

/// Set of controller names chosen on the command line.
///
/// Keeps first-seen order for display; membership is what drives the deploy.
/// Names are not checked against the inventory, unknown ones simply never match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectorSet {
    names: Vec<String>,
}

impl SelectorSet {
    /// Resolve a raw selector argument.
    ///
    /// `all` selects every inventory name in inventory order. Anything else is
    /// trimmed as a whole, split on `,`, and each piece is prefixed with `ROC`.
    /// Pieces are not trimmed individually.
    pub fn resolve(arg: &str, inventory: &Inventory) -> Self {
        if arg == ALL_TOKEN {
            return Self::from_names(inventory.names());
        }

        Self::from_names(
            arg.trim()
                .split(',')
                .map(|suffix| format!("{NAME_PREFIX}{suffix}")),
        )
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for name in names {
            let name = name.into();
            if !set.names.contains(&name) {
                set.names.push(name);
            }
        }
        set
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names that match no inventory entry
    pub fn unmatched<'a>(&'a self, inventory: &Inventory) -> Vec<&'a str> {
        self.names
            .iter()
            .filter(|n| !inventory.contains(n))
            .map(String::as_str)
            .collect()
    }
}

impl fmt::Display for SelectorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.names.join(", "))
    }
}
