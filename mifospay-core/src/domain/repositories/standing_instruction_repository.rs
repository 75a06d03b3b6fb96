//! Standing instruction repository
//!
//! Lifecycle: fetch the template, create an instruction from its options,
//! then update or delete it by id.

use crate::domain::entities::{SITemplate, StandingInstruction, StandingInstructionPayload};
use crate::shared::data_state::DataStateStream;
use crate::shared::types::{
    AccountType, ClientId, ConfirmationToken, InstructionId, OfficeId, WalletResult,
};
use async_trait::async_trait;

#[async_trait]
pub trait StandingInstructionRepository: Send + Sync {
    async fn get_standing_instruction_template(
        &self,
        from_office_id: OfficeId,
        from_client_id: ClientId,
        from_account_type: AccountType,
    ) -> WalletResult<SITemplate>;

    /// Instructions of a client. Emits `Loading` first.
    fn get_all_standing_instructions(
        &self,
        client_id: ClientId,
    ) -> DataStateStream<Vec<StandingInstruction>>;

    async fn get_standing_instruction(
        &self,
        instruction_id: InstructionId,
    ) -> WalletResult<StandingInstruction>;

    async fn create_standing_instruction(
        &self,
        payload: &StandingInstructionPayload,
    ) -> WalletResult<ConfirmationToken>;

    /// Create after checking `payload` against a fetched template. Nothing is
    /// sent when the template does not offer one of the payload's choices.
    async fn create_standing_instruction_from_template(
        &self,
        template: &SITemplate,
        payload: &StandingInstructionPayload,
    ) -> WalletResult<ConfirmationToken> {
        template.check(payload)?;
        self.create_standing_instruction(payload).await
    }

    async fn update_standing_instruction(
        &self,
        instruction_id: InstructionId,
        payload: &StandingInstructionPayload,
    ) -> WalletResult<ConfirmationToken>;

    async fn delete_standing_instruction(
        &self,
        instruction_id: InstructionId,
    ) -> WalletResult<ConfirmationToken>;
}
