//! Custom-property table and `:root` CSS emission.

use std::fmt::Write as _;

use crate::breakpoint::BreakpointMap;

/// Maps synthesized custom-property ids to their per-breakpoint values,
/// in registration order.
#[derive(Debug, Clone, Default)]
pub struct PropertyTable {
    entries: Vec<(String, BreakpointMap<String>)>,
}

impl PropertyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an id. Ids are never reused, so this always appends.
    pub fn insert(&mut self, id: String, values: BreakpointMap<String>) {
        self.entries.push((id, values));
    }

    /// Get the values registered for an id.
    pub fn get(&self, id: &str) -> Option<&BreakpointMap<String>> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, values)| values)
    }

    /// Number of registered ids.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no ids are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate over entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BreakpointMap<String>)> {
        self.entries.iter().map(|(id, values)| (id.as_str(), values))
    }

    /// Generate the CSS text for the whole table.
    ///
    /// Each id contributes `id: value;` for `base` and
    /// `@media (min-width: <px>px) { id: value; }` for every other breakpoint,
    /// in ascending threshold order. Everything is wrapped once in
    /// `:root { ... }`.
    pub fn to_css(&self) -> String {
        let mut declarations = String::new();
        for (id, values) in self.iter() {
            for (breakpoint, value) in values.iter() {
                // Writing into a String cannot fail.
                let _ = if breakpoint.is_base() {
                    write!(declarations, "{id}: {value};")
                } else {
                    write!(
                        declarations,
                        "@media (min-width: {}px) {{ {id}: {value}; }}",
                        breakpoint.min_width()
                    )
                };
            }
        }
        format!(":root {{ {declarations} }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::Breakpoint;

    #[test]
    fn scalar_declarations() {
        let mut table = PropertyTable::new();
        table.insert("--x-0".into(), BreakpointMap::new().base("red"));
        table.insert("--x-1".into(), BreakpointMap::new().base("16px"));

        assert_eq!(table.to_css(), ":root { --x-0: red;--x-1: 16px; }");
    }

    #[test]
    fn media_declarations_sorted_by_threshold() {
        let mut values = BreakpointMap::new();
        values.insert(Breakpoint::Lg, "20px".to_string());
        values.insert(Breakpoint::Base, "16px".to_string());

        let mut table = PropertyTable::new();
        table.insert("--x-0".into(), values);

        assert_eq!(
            table.to_css(),
            ":root { --x-0: 16px;@media (min-width: 1024px) { --x-0: 20px; } }"
        );
    }

    #[test]
    fn declarations_interleave_per_id() {
        let mut table = PropertyTable::new();
        table.insert(
            "--css-in-js-utils-0".into(),
            BreakpointMap::<String>::new().base("red").md("blue"),
        );
        table.insert(
            "--css-in-js-utils-1".into(),
            BreakpointMap::<String>::new().base("16px").lg("20px"),
        );

        assert_eq!(
            table.to_css(),
            ":root { --css-in-js-utils-0: red;@media (min-width: 768px) { --css-in-js-utils-0: blue; }\
             --css-in-js-utils-1: 16px;@media (min-width: 1024px) { --css-in-js-utils-1: 20px; } }"
        );
    }

    #[test]
    fn empty_table() {
        assert_eq!(PropertyTable::new().to_css(), ":root {  }");
    }
}
