use crate::errors::StorageError;
use crate::models::Card;
use async_trait::async_trait;

pub mod memory;

/// Persistence collaborator. The core hands fully validated cards across
/// this boundary and never touches the storage format itself.
#[async_trait]
pub trait CardStorage: Send + Sync {
    async fn load_cards(&self) -> Result<Vec<Card>, StorageError>;
    async fn save_cards(&self, cards: &[Card]) -> Result<(), StorageError>;
}
