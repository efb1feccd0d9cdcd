/// Toolkit-free description of an action's settings rows.
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConfigSchema {
    pub rows: Vec<ConfigRow>,
}

impl ConfigSchema {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, key: &str) -> Option<&ConfigRow> {
        self.rows.iter().find(|r| r.key() == key)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ConfigRow {
    Switch {
        key: String,
        title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        tooltip: Option<String>,
        default: bool,
    },
    Entry {
        key: String,
        title: String,
        default: String,
    },
    Combo {
        key: String,
        title: String,
        items: Vec<ComboItem>,
        default: String,
    },
}

impl ConfigRow {
    /// Settings dictionary key this row edits.
    pub fn key(&self) -> &str {
        match self {
            ConfigRow::Switch { key, .. }
            | ConfigRow::Entry { key, .. }
            | ConfigRow::Combo { key, .. } => key,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComboItem {
    pub key: String,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_tagged_rows() {
        let schema = ConfigSchema {
            rows: vec![ConfigRow::Switch {
                key: "show-seconds".into(),
                title: "Show seconds".into(),
                tooltip: None,
                default: false,
            }],
        };
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["rows"][0]["kind"], "switch");
        assert_eq!(json["rows"][0]["key"], "show-seconds");
        assert!(json["rows"][0].get("tooltip").is_none());
        assert!(schema.row("show-seconds").is_some());
    }
}
