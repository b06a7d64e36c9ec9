//! Ignore-list grammar and reserved member names
//!
//! An ignore entry is either a plain member name, which applies to the
//! instance-template copy phase, or a name carrying the `static::` prefix,
//! which applies to the static copy phase (prefix stripped before
//! comparison). Each phase silently ignores the other phase's entries.

/// Prefix routing an ignore entry to the static copy phase
pub const STATIC_IGNORE_PREFIX: &str = "static::";

/// Static member names that are never copied onto a destination
pub const RESERVED_STATIC_NAMES: &[&str] = &["length", "prototype", "name"];

/// Instance-template member names that are never copied onto a destination
pub const RESERVED_TEMPLATE_NAMES: &[&str] = &["constructor"];

/// A parsed ignore list, partitioned by copy phase
#[derive(Debug, Clone, Default)]
pub struct IgnoreList {
    statics: Vec<String>,
    template: Vec<String>,
}

impl IgnoreList {
    /// Parse raw entries into per-phase name sets
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> Self {
        let mut list = IgnoreList::default();
        for entry in entries {
            let entry = entry.as_ref();
            match entry.strip_prefix(STATIC_IGNORE_PREFIX) {
                Some(name) => list.statics.push(name.to_string()),
                None => list.template.push(entry.to_string()),
            }
        }
        list
    }

    /// Check if the static copy phase skips this member name
    pub fn skips_static(&self, name: &str) -> bool {
        self.statics.iter().any(|entry| entry == name)
    }

    /// Check if the template copy phase skips this member name
    pub fn skips_template(&self, name: &str) -> bool {
        self.template.iter().any(|entry| entry == name)
    }

    /// Check if the list has no entries for either phase
    pub fn is_empty(&self) -> bool {
        self.statics.is_empty() && self.template.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partitions_by_prefix() {
        let list = IgnoreList::parse(&["username", "static::run", "walk"]);

        assert!(list.skips_template("username"));
        assert!(list.skips_template("walk"));
        assert!(!list.skips_template("run"));

        assert!(list.skips_static("run"));
        assert!(!list.skips_static("username"));
    }

    #[test]
    fn test_prefix_is_stripped_before_comparison() {
        let list = IgnoreList::parse(&["static::username"]);
        assert!(list.skips_static("username"));
        assert!(!list.skips_static("static::username"));
    }

    #[test]
    fn test_plain_entry_never_affects_static_phase() {
        let list = IgnoreList::parse(&["username"]);
        assert!(!list.skips_static("username"));
        assert!(list.skips_template("username"));
    }

    #[test]
    fn test_empty_list() {
        let list = IgnoreList::parse::<&str>(&[]);
        assert!(list.is_empty());
        assert!(!list.skips_static("anything"));
        assert!(!list.skips_template("anything"));
    }
}
