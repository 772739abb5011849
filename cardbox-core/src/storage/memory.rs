use crate::errors::StorageError;
use crate::models::Card;
use async_trait::async_trait;
use parking_lot::RwLock;

/// In-memory storage, used by tests and anywhere persistence is not
/// wanted.
#[derive(Default)]
pub struct MemoryStore {
    cards: RwLock<Vec<Card>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: RwLock::new(cards),
        }
    }
}

#[async_trait]
impl crate::storage::CardStorage for MemoryStore {
    async fn load_cards(&self) -> Result<Vec<Card>, StorageError> {
        Ok(self.cards.read().clone())
    }

    async fn save_cards(&self, cards: &[Card]) -> Result<(), StorageError> {
        *self.cards.write() = cards.to_vec();
        Ok(())
    }
}
