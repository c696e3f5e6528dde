use crate::errors::{ActionError, ActionResult};
use schema::ItemDefinition;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The player's bag, keyed by item id (e.g. `"potion"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    items: BTreeMap<String, ItemDefinition>,
}

impl Inventory {
    pub fn new(items: BTreeMap<String, ItemDefinition>) -> Self {
        Self { items }
    }

    /// Look up an item that can be used right now.
    pub fn available(&self, item_id: &str) -> ActionResult<&ItemDefinition> {
        match self.items.get(item_id) {
            Some(item) if item.in_stock() => Ok(item),
            _ => Err(ActionError::UnknownItem(item_id.to_string())),
        }
    }

    /// Take one of the item out of the bag. The count never goes below zero;
    /// an empty slot fails instead.
    pub fn consume(&mut self, item_id: &str) -> ActionResult<ItemDefinition> {
        match self.items.get_mut(item_id) {
            Some(item) if item.in_stock() => {
                item.remaining_count -= 1;
                Ok(item.clone())
            }
            _ => Err(ActionError::UnknownItem(item_id.to_string())),
        }
    }

    pub fn get(&self, item_id: &str) -> Option<&ItemDefinition> {
        self.items.get(item_id)
    }

    pub fn remaining(&self, item_id: &str) -> u32 {
        self.items
            .get(item_id)
            .map(|item| item.remaining_count)
            .unwrap_or(0)
    }

    /// Items with stock left, in id order.
    pub fn usable_items(&self) -> impl Iterator<Item = (&str, &ItemDefinition)> {
        self.items
            .iter()
            .filter(|(_, item)| item.in_stock())
            .map(|(id, item)| (id.as_str(), item))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ItemDefinition)> {
        self.items.iter().map(|(id, item)| (id.as_str(), item))
    }
}
