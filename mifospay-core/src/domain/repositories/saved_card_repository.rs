//! Saved card repository

use crate::domain::entities::{CardPayload, SavedCard};
use crate::shared::data_state::DataStateStream;
use crate::shared::types::{CardId, ClientId, ConfirmationToken, WalletResult};
use async_trait::async_trait;

#[async_trait]
pub trait SavedCardRepository: Send + Sync {
    /// Cards of a client. Emits `Loading` first.
    fn get_saved_cards(&self, client_id: ClientId) -> DataStateStream<Vec<SavedCard>>;

    async fn get_saved_card(&self, client_id: ClientId, card_id: CardId) -> WalletResult<SavedCard>;

    async fn add_saved_card(
        &self,
        client_id: ClientId,
        card: &CardPayload,
    ) -> WalletResult<ConfirmationToken>;

    async fn update_card(
        &self,
        client_id: ClientId,
        card_id: CardId,
        card: &CardPayload,
    ) -> WalletResult<ConfirmationToken>;

    async fn delete_card(
        &self,
        client_id: ClientId,
        card_id: CardId,
    ) -> WalletResult<ConfirmationToken>;
}
