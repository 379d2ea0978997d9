//! Stable element identities shared by hit regions, listeners and animations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a rendered element (the carousel container or one card).
///
/// Cards are addressed as `card{id}` so that slot animations, hover
/// listeners and hit regions for the same item always agree on the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(String);

impl ElementId {
    /// The carousel container element.
    pub fn container() -> Self {
        Self("carousel".to_string())
    }

    /// The element hosting the card for item `id`.
    pub fn card(id: u32) -> Self {
        Self(format!("card{id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_ids_follow_item_ids() {
        assert_eq!(ElementId::card(0).as_str(), "card0");
        assert_eq!(ElementId::card(12).to_string(), "card12");
        assert_ne!(ElementId::card(1), ElementId::container());
    }
}
