//! Ordered member tables
//!
//! Members are stored in definition order (a `Vec` of entries) with a
//! name-to-slot index for lookup. Redefining an existing name replaces the
//! member in its original slot, so enumeration order is stable across
//! overwrites.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::member::Member;

/// Insertion-ordered table mapping member names to descriptors
pub struct MemberTable<R> {
    /// Entries in definition order
    entries: Vec<(String, Member<R>)>,
    /// Member name to slot mapping
    index: FxHashMap<String, usize>,
}

impl<R> MemberTable<R> {
    /// Create a new empty table
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Define a member, overwriting any existing member of the same name.
    ///
    /// A new name is appended; an existing name keeps its original slot.
    pub fn define(&mut self, name: impl Into<String>, member: Member<R>) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&slot) => self.entries[slot].1 = member,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, member));
            }
        }
    }

    /// Get a member by name
    pub fn get(&self, name: &str) -> Option<&Member<R>> {
        self.index.get(name).map(|&slot| &self.entries[slot].1)
    }

    /// Get a mutable member by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Member<R>> {
        let slot = *self.index.get(name)?;
        Some(&mut self.entries[slot].1)
    }

    /// Check if a member exists
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterate over member names in definition order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate over `(name, member)` pairs in definition order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Member<R>)> {
        self.entries
            .iter()
            .map(|(name, member)| (name.as_str(), member))
    }

    /// Get number of members
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<R> Default for MemberTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impls: `derive` would demand `R: Clone` / `R: Debug`.
impl<R> Clone for MemberTable<R> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            index: self.index.clone(),
        }
    }
}

impl<R> fmt::Debug for MemberTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_define_and_get() {
        let mut table: MemberTable<()> = MemberTable::new();
        table.define("x", Member::data(1));

        assert!(table.contains("x"));
        assert!(!table.contains("y"));
        assert_eq!(table.len(), 1);
        assert!(table.get("x").unwrap().is_data());
        assert!(table.get("y").is_none());
    }

    #[test]
    fn test_enumeration_order_is_definition_order() {
        let mut table: MemberTable<()> = MemberTable::new();
        table.define("run", Member::method(|_, _| Value::null()));
        table.define("walk", Member::method(|_, _| Value::null()));
        table.define("stop", Member::method(|_, _| Value::null()));

        let names: Vec<&str> = table.names().collect();
        assert_eq!(names, vec!["run", "walk", "stop"]);
    }

    #[test]
    fn test_overwrite_keeps_slot() {
        let mut table: MemberTable<()> = MemberTable::new();
        table.define("a", Member::data(1));
        table.define("b", Member::data(2));
        table.define("a", Member::data(3));

        let names: Vec<&str> = table.names().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(table.len(), 2);

        match table.get("a").unwrap() {
            Member::Data(v) => assert_eq!(*v, Value::int(3)),
            other => panic!("expected data member, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_table() {
        let table: MemberTable<()> = MemberTable::default();
        assert!(table.is_empty());
        assert_eq!(table.names().count(), 0);
    }
}
