//! Game catalog operations.

use std::sync::Arc;

use crate::infrastructure::catalog::game_stem;
use crate::infrastructure::ports::GameCatalogPort;

pub struct Games {
    catalog: Arc<dyn GameCatalogPort>,
}

impl Games {
    pub fn new(catalog: Arc<dyn GameCatalogPort>) -> Self {
        Self { catalog }
    }

    /// Game ids (story file stems) in catalog order.
    pub fn titles(&self) -> Vec<String> {
        self.catalog
            .games()
            .iter()
            .map(|game| game_stem(game).to_string())
            .collect()
    }

    pub fn is_known(&self, text: &str) -> bool {
        self.titles().iter().any(|title| title == text)
    }

    /// The first game in catalog order whose story file contains `query`.
    ///
    /// Short queries can land on a longer title that happens to contain them
    /// ("zork" picks zork1); callers pass exact titles where they can.
    pub fn find(&self, query: &str) -> Option<String> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        self.catalog
            .games()
            .iter()
            .find(|game| game.contains(query))
            .map(|game| game_stem(game).to_string())
    }
}
