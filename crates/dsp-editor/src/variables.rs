//! Scratch variables shown under the toolbar (e.g. `left`, `right`, `target`).
//!
//! Purely a labelled notepad: values are free text and nothing reads them.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub id: u32,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default)]
pub struct Variables {
    entries: Vec<Variable>,
    next_id: u32,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable with initial value `"0"`. Blank names are refused.
    pub fn add(&mut self, name: &str) -> Option<u32> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Variable {
            id,
            name: name.to_string(),
            value: "0".to_string(),
        });
        Some(id)
    }

    pub fn set_value(&mut self, id: u32, value: &str) -> bool {
        match self.entries.iter_mut().find(|v| v.id == id) {
            Some(var) => {
                var.value = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.entries.len();
        self.entries.retain(|v| v.id != id);
        self.entries.len() != before
    }

    pub fn get(&self, id: u32) -> Option<&Variable> {
        self.entries.iter().find(|v| v.id == id)
    }

    pub fn entries(&self) -> &[Variable] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_trims_and_rejects_blank() {
        let mut vars = Variables::new();
        assert_eq!(vars.add("   "), None);

        let id = vars.add(" left ").unwrap();
        let var = vars.get(id).unwrap();
        assert_eq!(var.name, "left");
        assert_eq!(var.value, "0");
    }

    #[test]
    fn set_and_remove_ignore_stale_ids() {
        let mut vars = Variables::new();
        let a = vars.add("a").unwrap();
        let b = vars.add("b").unwrap();
        assert_ne!(a, b);

        assert!(vars.set_value(b, "42"));
        assert!(vars.remove(a));
        assert!(!vars.remove(a));
        assert!(!vars.set_value(a, "1"));
        assert_eq!(vars.entries().len(), 1);
        assert_eq!(vars.entries()[0].value, "42");
    }
}
