use serde::{Deserialize, Serialize};

/// Search hit for a client, group, center or account, with its parent linkage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccountResult {
    pub entity_id: i64,
    #[serde(default)]
    pub entity_account_no: String,
    #[serde(default)]
    pub entity_external_id: Option<String>,
    #[serde(default)]
    pub entity_name: String,
    #[serde(default)]
    pub entity_type: String,
    #[serde(default)]
    pub parent_id: i64,
    #[serde(default)]
    pub parent_name: String,
    #[serde(default)]
    pub parent_type: String,
    #[serde(default)]
    pub sub_entity_type: String,
}

impl AccountResult {
    pub fn is_savings(&self) -> bool {
        self.entity_type.eq_ignore_ascii_case("SAVING")
            || self.entity_type.eq_ignore_ascii_case("SAVINGS")
    }
}
