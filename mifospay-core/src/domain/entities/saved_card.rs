//! Saved payment cards
//!
//! Card numbers and CVVs never appear in `Debug` output.

use crate::shared::error::WalletError;
use crate::shared::types::{CardId, ClientId, WalletResult};
use crate::shared::utils::{mask, require_non_empty};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SavedCard {
    pub id: CardId,
    #[serde(default)]
    pub client_id: ClientId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub cvv: String,
    /// `MM/YY`
    #[serde(default)]
    pub expiry_date: String,
}

impl SavedCard {
    pub fn holder_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    pub fn masked_number(&self) -> String {
        mask(&self.card_number)
    }
}

impl fmt::Debug for SavedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SavedCard")
            .field("id", &self.id)
            .field("client_id", &self.client_id)
            .field("holder", &self.holder_name())
            .field("card_number", &self.masked_number())
            .field("expiry_date", &self.expiry_date)
            .finish()
    }
}

/// Request body for card create and update
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CardPayload {
    pub first_name: String,
    pub last_name: String,
    pub card_number: String,
    pub cvv: String,
    pub expiry_date: String,
}

impl CardPayload {
    pub fn validate(&self) -> WalletResult<()> {
        require_non_empty("First name", &self.first_name)?;
        require_non_empty("Last name", &self.last_name)?;
        validate_card_number(&self.card_number)?;
        if !(3..=4).contains(&self.cvv.len()) || !self.cvv.chars().all(|c| c.is_ascii_digit()) {
            return Err(WalletError::validation("CVV must be 3 or 4 digits"));
        }
        validate_expiry(&self.expiry_date)
    }
}

impl fmt::Debug for CardPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardPayload")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("card_number", &mask(&self.card_number))
            .field("expiry_date", &self.expiry_date)
            .finish()
    }
}

/// 12 to 19 digits passing the Luhn check
pub fn validate_card_number(number: &str) -> WalletResult<()> {
    let digits: Vec<u32> = number
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| WalletError::validation("Card number must contain only digits"))?;

    if !(12..=19).contains(&digits.len()) {
        return Err(WalletError::validation("Card number must be 12 to 19 digits"));
    }

    let checksum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();

    if checksum % 10 != 0 {
        return Err(WalletError::validation("Card number failed checksum"));
    }
    Ok(())
}

/// `MM/YY` with a month between 01 and 12
pub fn validate_expiry(expiry: &str) -> WalletResult<()> {
    let invalid = || WalletError::validation("Expiry date must be MM/YY");
    let (month, year) = expiry.split_once('/').ok_or_else(invalid)?;
    if month.len() != 2 || year.len() != 2 {
        return Err(invalid());
    }
    let month: u32 = month.parse().map_err(|_| invalid())?;
    year.parse::<u32>().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> CardPayload {
        CardPayload {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            card_number: "4111 1111 1111 1111".to_string(),
            cvv: "123".to_string(),
            expiry_date: "09/29".to_string(),
        }
    }

    #[test]
    fn test_card_payload_validation() {
        assert!(payload().validate().is_ok());
        let bad_checksum = CardPayload {
            card_number: "4111111111111112".to_string(),
            ..payload()
        };
        assert!(bad_checksum.validate().is_err());
        assert!(CardPayload { cvv: "12".to_string(), ..payload() }.validate().is_err());
        assert!(CardPayload { expiry_date: "13/29".to_string(), ..payload() }.validate().is_err());
        assert!(CardPayload { expiry_date: "0929".to_string(), ..payload() }.validate().is_err());
    }

    #[test]
    fn test_debug_masks_card() {
        let card = SavedCard {
            id: 5,
            client_id: 42,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            card_number: "4111111111111111".to_string(),
            cvv: "123".to_string(),
            expiry_date: "09/29".to_string(),
        };
        let debug = format!("{:?}", card);

        assert!(debug.contains("************1111"));
        assert!(!debug.contains("4111111111111111"));
        assert!(!debug.contains("123\""));
        assert!(!format!("{:?}", payload()).contains("4111 1111"));
    }
}
