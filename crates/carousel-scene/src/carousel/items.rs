//! The fixed, ordered list of media items a carousel cycles through.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use carousel_config::ItemConfig;

use crate::error::{CarouselError, Result};

/// Minimum number of items: one per visible slot.
pub const MIN_ITEMS: usize = 3;

/// One media card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable, unique key; also the element key (`card{id}`).
    pub id: u32,
    /// URI of the video or image asset.
    pub media: String,
}

impl Item {
    pub fn new(id: u32, media: impl Into<String>) -> Self {
        Self {
            id,
            media: media.into(),
        }
    }

    /// Label painted on the card.
    pub fn label(&self) -> String {
        (u64::from(self.id) + 1).to_string()
    }
}

impl From<&ItemConfig> for Item {
    fn from(config: &ItemConfig) -> Self {
        Self::new(config.id, config.media.clone())
    }
}

/// Immutable, cheaply clonable item list with at least three unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemList(Arc<[Item]>);

impl ItemList {
    pub fn new(items: Vec<Item>) -> Result<Self> {
        if items.len() < MIN_ITEMS {
            return Err(CarouselError::TooFewItems { count: items.len() });
        }
        let mut seen = HashSet::with_capacity(items.len());
        if let Some(dup) = items.iter().find(|item| !seen.insert(item.id)) {
            return Err(CarouselError::DuplicateId { id: dup.id });
        }
        Ok(Self(items.into()))
    }

    pub fn from_config(items: &[ItemConfig]) -> Result<Self> {
        Self::new(items.iter().map(Item::from).collect())
    }

    /// `count` items with ids `0..count` and synthetic media URIs.
    pub fn numbered(count: usize) -> Result<Self> {
        Self::new(
            (0..count as u32)
                .map(|id| Item::new(id, format!("media/{id}.webm")))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: construction rejects short lists.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Item at `index`, wrapping modulo the list length.
    pub fn get(&self, index: usize) -> &Item {
        &self.0[index % self.0.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.0.iter()
    }

    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.0.iter().position(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_lists() {
        assert_eq!(
            ItemList::numbered(2),
            Err(CarouselError::TooFewItems { count: 2 })
        );
        assert_eq!(
            ItemList::new(Vec::new()),
            Err(CarouselError::TooFewItems { count: 0 })
        );
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let items = vec![Item::new(0, "a"), Item::new(1, "b"), Item::new(0, "c")];
        assert_eq!(ItemList::new(items), Err(CarouselError::DuplicateId { id: 0 }));
    }

    #[test]
    fn test_get_wraps() {
        let items = ItemList::numbered(3).unwrap();
        assert_eq!(items.get(0).id, 0);
        assert_eq!(items.get(4).id, 1);
        assert_eq!(items.position_of(2), Some(2));
        assert_eq!(items.position_of(9), None);
    }

    #[test]
    fn test_label_is_one_based() {
        assert_eq!(Item::new(0, "a").label(), "1");
        assert_eq!(Item::new(41, "a").label(), "42");
        assert_eq!(Item::new(u32::MAX, "a").label(), "4294967296");
    }

    #[test]
    fn test_from_config() {
        let config = carousel_config::CarouselConfig::default();
        let items = ItemList::from_config(&config.items).unwrap();
        assert_eq!(items.len(), 3);
        assert!(items.get(2).media.contains("howToPlayAdduction"));
    }
}
