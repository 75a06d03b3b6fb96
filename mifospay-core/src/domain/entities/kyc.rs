use crate::shared::types::WalletResult;
use crate::shared::utils::{parse_backend_date, require_non_empty};
use serde::{Deserialize, Serialize};

/// Level-one KYC record, one per client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct KYCLevel1Details {
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
    pub mobile_no: String,
    /// Date of birth in the backend date format
    pub dob: String,
    #[serde(default)]
    pub address_line1: String,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub current_level: String,
}

impl KYCLevel1Details {
    pub fn validate(&self) -> WalletResult<()> {
        require_non_empty("First name", &self.first_name)?;
        require_non_empty("Last name", &self.last_name)?;
        require_non_empty("Mobile number", &self.mobile_no)?;
        require_non_empty("Date of birth", &self.dob)?;
        parse_backend_date(&self.dob)?;
        require_non_empty("Address", &self.address_line1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> KYCLevel1Details {
        KYCLevel1Details {
            first_name: "Ada".to_string(),
            middle_name: None,
            last_name: "Lovelace".to_string(),
            mobile_no: "5551234".to_string(),
            dob: "10 December 1815".to_string(),
            address_line1: "12 St James's Square".to_string(),
            address_line2: None,
            current_level: "1".to_string(),
        }
    }

    #[test]
    fn test_validate() {
        assert!(details().validate().is_ok());

        let missing_mobile = KYCLevel1Details { mobile_no: String::new(), ..details() };
        assert!(missing_mobile.validate().is_err());

        let iso_dob = KYCLevel1Details { dob: "1815-12-10".to_string(), ..details() };
        assert!(iso_dob.validate().is_err());
    }

    #[test]
    fn test_datatable_row_shape() {
        let json = serde_json::to_value(details()).expect("serializable");
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["addressLine1"], "12 St James's Square");
        assert!(json["middleName"].is_null());
    }
}
