use super::ApiClient;
use crate::domain::entities::{Account, AccountTransferPayload, Transaction, TransferDetail};
use crate::domain::repositories::{AccountRepository, ClientRepository};
use crate::shared::data_state::DataStateStream;
use crate::shared::types::{
    AccountId, ClientId, ConfirmationToken, TransactionId, TransferId, WalletResult,
};
use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;

/// `savingsaccounts/{id}?associations=transactions` keeps only what we read
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AccountWithTransactions {
    transactions: Vec<Transaction>,
}

#[async_trait]
impl AccountRepository for ApiClient {
    fn get_accounts(&self, client_id: ClientId) -> DataStateStream<Vec<Account>> {
        let api = self.clone();
        self.observe(move || {
            let api = api.clone();
            async move {
                api.get_client_accounts(client_id)
                    .await
                    .map(|accounts| accounts.savings_accounts)
            }
        })
    }

    async fn get_account(&self, account_id: AccountId) -> WalletResult<Account> {
        self.get(&format!("savingsaccounts/{}", account_id), &[]).await
    }

    async fn get_account_transactions(
        &self,
        account_id: AccountId,
    ) -> WalletResult<Vec<Transaction>> {
        let account: AccountWithTransactions = self
            .get(
                &format!("savingsaccounts/{}", account_id),
                &[("associations", "transactions".to_string())],
            )
            .await?;

        let mut transactions = account.transactions;
        transactions.sort_by(|a, b| (b.date(), b.id).cmp(&(a.date(), a.id)));
        Ok(transactions)
    }

    async fn get_transaction(
        &self,
        account_id: AccountId,
        transaction_id: TransactionId,
    ) -> WalletResult<Transaction> {
        self.get(
            &format!("savingsaccounts/{}/transactions/{}", account_id, transaction_id),
            &[],
        )
        .await
    }

    async fn make_transfer(
        &self,
        payload: &AccountTransferPayload,
    ) -> WalletResult<ConfirmationToken> {
        payload.validate()?;
        log::info!(
            "Transfer of {} from account {} to account {}",
            payload.transfer_amount,
            payload.from_account_id,
            payload.to_account_id
        );
        self.command(Method::POST, "accounttransfers", &[], Some(payload)).await
    }

    async fn get_account_transfer(&self, transfer_id: TransferId) -> WalletResult<TransferDetail> {
        self.get(&format!("accounttransfers/{}", transfer_id), &[]).await
    }
}
