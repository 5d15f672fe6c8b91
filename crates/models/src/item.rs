//! The stored resource record.

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::id::{ItemId, Keyed};

/// A persisted item. `id` is `None` until the storage layer assigns a key at
/// insert time and stable afterwards; equality is field-wise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Item {
    /// Check the payload before it reaches the service layer.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.name.trim().is_empty() {
            return Err(ModelError::Validation("name must not be empty".into()));
        }
        Ok(())
    }
}

impl Keyed for Item {
    fn id(&self) -> Option<ItemId> {
        self.id
    }

    fn with_id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Item {
        Item {
            id: None,
            name: "widget".into(),
            description: Some("a widget".into()),
            tags: vec!["hardware".into()],
        }
    }

    #[test]
    fn validate_rejects_blank_name() {
        let mut item = sample();
        item.name = "   ".into();
        let err = item.validate().unwrap_err();
        assert_eq!(err, ModelError::Validation("name must not be empty".into()));
    }

    #[test]
    fn with_id_assigns_key_and_keeps_fields() {
        let id = ItemId::new();
        let item = sample().with_id(id);
        assert_eq!(item.id, Some(id));
        assert_eq!(item.name, "widget");
    }

    #[test]
    fn json_without_id_deserializes_to_none() -> Result<(), anyhow::Error> {
        let item: Item = serde_json::from_str(r#"{"name":"widget"}"#)?;
        assert_eq!(item.id, None);
        assert!(item.tags.is_empty());
        Ok(())
    }
}
