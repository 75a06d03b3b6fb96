//! Client entities

use crate::domain::entities::account::Account;
use crate::shared::types::{ClientId, EnumOption, OfficeId};
use serde::{Deserialize, Serialize};

/// Backend-side customer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    #[serde(default)]
    pub account_no: String,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub status: Option<EnumOption>,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub firstname: Option<String>,
    #[serde(default)]
    pub lastname: Option<String>,
    #[serde(default)]
    pub mobile_no: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub office_id: OfficeId,
    #[serde(default)]
    pub office_name: String,
}

/// Cached client details kept in the session store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub id: ClientId,
    pub account_no: String,
    pub name: String,
    pub mobile_no: Option<String>,
    pub email_address: Option<String>,
    pub office_id: OfficeId,
    pub office_name: String,
    pub external_id: Option<String>,
    pub active: bool,
}

impl From<Client> for ClientInfo {
    fn from(client: Client) -> Self {
        let name = if client.display_name.is_empty() {
            [client.firstname.as_deref(), client.lastname.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            client.display_name
        };
        Self {
            id: client.id,
            account_no: client.account_no,
            name,
            mobile_no: client.mobile_no,
            email_address: client.email_address,
            office_id: client.office_id,
            office_name: client.office_name,
            external_id: client.external_id,
            active: client.active,
        }
    }
}

/// Accounts owned by a client. The wallet only deals in savings accounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientAccounts {
    #[serde(default)]
    pub savings_accounts: Vec<Account>,
}

impl ClientAccounts {
    pub fn active(&self) -> impl Iterator<Item = &Account> {
        self.savings_accounts.iter().filter(|account| account.is_active())
    }
}
