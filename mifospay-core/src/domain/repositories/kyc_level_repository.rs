//! KYC level repository
//!
//! There is no upsert: the caller must know whether a record exists and
//! call `add` or `update` accordingly.

use crate::domain::entities::KYCLevel1Details;
use crate::shared::types::{ClientId, ConfirmationToken, WalletResult};
use async_trait::async_trait;

#[async_trait]
pub trait KycLevelRepository: Send + Sync {
    /// `None` when the client has no level-one record yet
    async fn fetch_kyc_level1_details(
        &self,
        client_id: ClientId,
    ) -> WalletResult<Option<KYCLevel1Details>>;

    async fn add_kyc_level1_details(
        &self,
        client_id: ClientId,
        details: &KYCLevel1Details,
    ) -> WalletResult<ConfirmationToken>;

    async fn update_kyc_level1_details(
        &self,
        client_id: ClientId,
        details: &KYCLevel1Details,
    ) -> WalletResult<ConfirmationToken>;
}
