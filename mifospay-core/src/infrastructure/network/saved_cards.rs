use super::ApiClient;
use crate::domain::entities::{CardPayload, SavedCard};
use crate::domain::repositories::SavedCardRepository;
use crate::shared::data_state::DataStateStream;
use crate::shared::types::{CardId, ClientId, ConfirmationToken, WalletResult};
use async_trait::async_trait;
use reqwest::Method;

fn cards_path(client_id: ClientId) -> String {
    format!("clients/{}/savedcards", client_id)
}

fn card_path(client_id: ClientId, card_id: CardId) -> String {
    format!("clients/{}/savedcards/{}", client_id, card_id)
}

#[async_trait]
impl SavedCardRepository for ApiClient {
    fn get_saved_cards(&self, client_id: ClientId) -> DataStateStream<Vec<SavedCard>> {
        let api = self.clone();
        self.observe(move || {
            let api = api.clone();
            async move { api.get::<Vec<SavedCard>>(&cards_path(client_id), &[]).await }
        })
    }

    async fn get_saved_card(
        &self,
        client_id: ClientId,
        card_id: CardId,
    ) -> WalletResult<SavedCard> {
        self.get(&card_path(client_id, card_id), &[]).await
    }

    async fn add_saved_card(
        &self,
        client_id: ClientId,
        card: &CardPayload,
    ) -> WalletResult<ConfirmationToken> {
        card.validate()?;
        self.command(Method::POST, &cards_path(client_id), &[], Some(card)).await
    }

    async fn update_card(
        &self,
        client_id: ClientId,
        card_id: CardId,
        card: &CardPayload,
    ) -> WalletResult<ConfirmationToken> {
        card.validate()?;
        self.command(Method::PUT, &card_path(client_id, card_id), &[], Some(card)).await
    }

    async fn delete_card(
        &self,
        client_id: ClientId,
        card_id: CardId,
    ) -> WalletResult<ConfirmationToken> {
        self.command::<()>(Method::DELETE, &card_path(client_id, card_id), &[], None).await
    }
}
