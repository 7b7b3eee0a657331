use anyhow::{Result, bail};
use serde_json::{Map, Value};

use crate::core::KeyTable;

/// What a merge changed in one locale document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Sections that did not exist and were created empty.
    pub created_sections: Vec<String>,
    /// Keys that were added, in dotted form (`navbar.cabs`).
    pub added_keys: Vec<String>,
}

impl MergeStats {
    pub fn is_unchanged(&self) -> bool {
        self.created_sections.is_empty() && self.added_keys.is_empty()
    }
}

/// Merge `table` into a locale document.
///
/// Missing sections are appended as empty objects, missing keys are appended
/// with their default value. A key that already exists keeps its value,
/// whatever its type. A section that exists but is not an object is an error;
/// the document may be partially merged when that happens.
pub fn merge_keys(root: &mut Map<String, Value>, table: &KeyTable) -> Result<MergeStats> {
    let mut stats = MergeStats::default();

    for section in table.sections() {
        if !root.contains_key(&section.name) {
            stats.created_sections.push(section.name.clone());
        }
        let target = root
            .entry(section.name.clone())
            .or_insert_with(|| Value::Object(Map::new()));

        let entries = match target {
            Value::Object(entries) => entries,
            other => bail!(
                "Section \"{}\" must be an object, found {}",
                section.name,
                type_name(other)
            ),
        };

        for (key, value) in &section.keys {
            if !entries.contains_key(key) {
                entries.insert(key.clone(), Value::String(value.clone()));
                stats.added_keys.push(format!("{}.{}", section.name, key));
            }
        }
    }

    Ok(stats)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
