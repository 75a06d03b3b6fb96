//! Account repository
//!
//! Reads are safe to repeat. `make_transfer` is a single attempt; the
//! caller owns de-duplication (date and description of the payload).

use crate::domain::entities::{Account, AccountTransferPayload, Transaction, TransferDetail};
use crate::shared::data_state::DataStateStream;
use crate::shared::types::{
    AccountId, ClientId, ConfirmationToken, TransactionId, TransferId, WalletResult,
};
use async_trait::async_trait;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Savings accounts of a client. Emits `Loading` first, then a terminal
    /// state per refresh.
    fn get_accounts(&self, client_id: ClientId) -> DataStateStream<Vec<Account>>;

    async fn get_account(&self, account_id: AccountId) -> WalletResult<Account>;

    /// Transaction history of a savings account, newest first
    async fn get_account_transactions(
        &self,
        account_id: AccountId,
    ) -> WalletResult<Vec<Transaction>>;

    async fn get_transaction(
        &self,
        account_id: AccountId,
        transaction_id: TransactionId,
    ) -> WalletResult<Transaction>;

    /// Submit a transfer and return its confirmation token
    async fn make_transfer(
        &self,
        payload: &AccountTransferPayload,
    ) -> WalletResult<ConfirmationToken>;

    async fn get_account_transfer(&self, transfer_id: TransferId) -> WalletResult<TransferDetail>;
}
