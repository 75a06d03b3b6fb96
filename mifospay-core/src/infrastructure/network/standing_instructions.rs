use super::ApiClient;
use crate::domain::entities::{SITemplate, StandingInstruction, StandingInstructionPayload};
use crate::domain::repositories::StandingInstructionRepository;
use crate::shared::data_state::DataStateStream;
use crate::shared::types::{
    AccountType, ClientId, ConfirmationToken, InstructionId, OfficeId, Page, WalletResult,
};
use crate::shared::utils::require_id;
use async_trait::async_trait;
use reqwest::Method;

const INSTRUCTIONS_PATH: &str = "standinginstructions";

fn instruction_path(instruction_id: InstructionId) -> String {
    format!("{}/{}", INSTRUCTIONS_PATH, instruction_id)
}

#[async_trait]
impl StandingInstructionRepository for ApiClient {
    async fn get_standing_instruction_template(
        &self,
        from_office_id: OfficeId,
        from_client_id: ClientId,
        from_account_type: AccountType,
    ) -> WalletResult<SITemplate> {
        self.get(
            "standinginstructions/template",
            &[
                ("fromOfficeId", from_office_id.to_string()),
                ("fromClientId", from_client_id.to_string()),
                ("fromAccountType", from_account_type.to_string()),
            ],
        )
        .await
    }

    fn get_all_standing_instructions(
        &self,
        client_id: ClientId,
    ) -> DataStateStream<Vec<StandingInstruction>> {
        let api = self.clone();
        self.observe(move || {
            let api = api.clone();
            async move {
                let query = [("clientId", client_id.to_string())];
                api.get::<Page<StandingInstruction>>(INSTRUCTIONS_PATH, &query)
                    .await
                    .map(|page| page.page_items)
            }
        })
    }

    async fn get_standing_instruction(
        &self,
        instruction_id: InstructionId,
    ) -> WalletResult<StandingInstruction> {
        self.get(&instruction_path(instruction_id), &[]).await
    }

    async fn create_standing_instruction(
        &self,
        payload: &StandingInstructionPayload,
    ) -> WalletResult<ConfirmationToken> {
        payload.validate()?;
        self.command(Method::POST, INSTRUCTIONS_PATH, &[], Some(payload)).await
    }

    async fn update_standing_instruction(
        &self,
        instruction_id: InstructionId,
        payload: &StandingInstructionPayload,
    ) -> WalletResult<ConfirmationToken> {
        require_id("Instruction id", instruction_id)?;
        payload.validate()?;
        self.command(
            Method::PUT,
            &instruction_path(instruction_id),
            &[("command", "update".to_string())],
            Some(payload),
        )
        .await
    }

    async fn delete_standing_instruction(
        &self,
        instruction_id: InstructionId,
    ) -> WalletResult<ConfirmationToken> {
        require_id("Instruction id", instruction_id)?;
        self.command(
            Method::PUT,
            &instruction_path(instruction_id),
            &[("command", "delete".to_string())],
            Some(&serde_json::json!({})),
        )
        .await
    }
}
