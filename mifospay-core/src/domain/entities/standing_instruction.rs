//! Standing instructions
//!
//! A standing instruction is a recurring transfer rule between two
//! accounts. The template lists the choices the backend accepts; a
//! payload is checked against it before creation.

use crate::domain::entities::account::{AccountRef, ClientRef, OfficeRef};
use crate::shared::constants::{DEFAULT_DATE_FORMAT, DEFAULT_LOCALE, MONTH_DAY_FORMAT};
use crate::shared::error::WalletError;
use crate::shared::types::{
    AccountId, AccountType, Amount, ClientId, EnumOption, InstructionId, OfficeId, WalletResult,
};
use crate::shared::utils::{
    date_from_parts, format_backend_date, format_month_day, require_id, require_non_empty,
    validate_amount,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StandingInstruction {
    pub id: InstructionId,
    #[serde(default)]
    pub account_detail_id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub from_office: Option<OfficeRef>,
    #[serde(default)]
    pub from_client: Option<ClientRef>,
    #[serde(default)]
    pub from_account_type: Option<EnumOption>,
    #[serde(default)]
    pub from_account: Option<AccountRef>,
    #[serde(default)]
    pub to_office: Option<OfficeRef>,
    #[serde(default)]
    pub to_client: Option<ClientRef>,
    #[serde(default)]
    pub to_account_type: Option<EnumOption>,
    #[serde(default)]
    pub to_account: Option<AccountRef>,
    #[serde(default)]
    pub transfer_type: Option<EnumOption>,
    #[serde(default)]
    pub priority: Option<EnumOption>,
    #[serde(default)]
    pub instruction_type: Option<EnumOption>,
    #[serde(default)]
    pub status: Option<EnumOption>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub valid_from: Vec<i32>,
    #[serde(default)]
    pub valid_till: Vec<i32>,
    #[serde(default)]
    pub recurrence_type: Option<EnumOption>,
    #[serde(default)]
    pub recurrence_frequency: Option<EnumOption>,
    #[serde(default)]
    pub recurrence_interval: Option<i32>,
    #[serde(default)]
    pub recurrence_on_month_day: Vec<i32>,
}

impl StandingInstruction {
    pub fn valid_from(&self) -> Option<NaiveDate> {
        date_from_parts(&self.valid_from)
    }

    pub fn valid_till(&self) -> Option<NaiveDate> {
        date_from_parts(&self.valid_till)
    }

    pub fn is_active(&self) -> bool {
        self.status.as_ref().map(|s| s.value.eq_ignore_ascii_case("active")).unwrap_or(false)
    }
}

/// Request body for create and update
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StandingInstructionPayload {
    pub from_office_id: OfficeId,
    pub from_client_id: ClientId,
    pub from_account_type: AccountType,
    pub name: String,
    pub transfer_type: i64,
    pub priority: i64,
    pub status: i64,
    pub from_account_id: AccountId,
    pub to_office_id: OfficeId,
    pub to_client_id: ClientId,
    pub to_account_type: AccountType,
    pub to_account_id: AccountId,
    pub instruction_type: i64,
    pub amount: Amount,
    pub valid_from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_till: Option<String>,
    pub recurrence_type: i64,
    pub recurrence_frequency: i64,
    pub recurrence_interval: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_on_month_day: Option<String>,
    pub month_day_format: String,
    pub locale: String,
    pub date_format: String,
}

impl StandingInstructionPayload {
    /// Payload with the backend formatting fields filled in
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        from: (OfficeId, ClientId, AccountType, AccountId),
        to: (OfficeId, ClientId, AccountType, AccountId),
        amount: &str,
        valid_from: impl Into<String>,
        recurrence_frequency: i64,
        recurrence_interval: i32,
        codes: InstructionCodes,
    ) -> WalletResult<Self> {
        let payload = Self {
            from_office_id: from.0,
            from_client_id: from.1,
            from_account_type: from.2,
            name: name.into(),
            transfer_type: codes.transfer_type,
            priority: codes.priority,
            status: codes.status,
            from_account_id: from.3,
            to_office_id: to.0,
            to_client_id: to.1,
            to_account_type: to.2,
            to_account_id: to.3,
            instruction_type: codes.instruction_type,
            amount: validate_amount(amount)?,
            valid_from: valid_from.into(),
            valid_till: None,
            recurrence_type: codes.recurrence_type,
            recurrence_frequency,
            recurrence_interval,
            recurrence_on_month_day: None,
            month_day_format: MONTH_DAY_FORMAT.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        };
        payload.validate()?;
        Ok(payload)
    }

    pub fn with_valid_till(mut self, date: NaiveDate) -> Self {
        self.valid_till = Some(format_backend_date(date));
        self
    }

    /// Day of the year the instruction runs on, for yearly recurrence
    pub fn with_month_day(mut self, date: NaiveDate) -> Self {
        self.recurrence_on_month_day = Some(format_month_day(date));
        self
    }

    pub fn validate(&self) -> WalletResult<()> {
        require_non_empty("Instruction name", &self.name)?;
        require_id("Source account id", self.from_account_id)?;
        require_id("Destination account id", self.to_account_id)?;
        require_id("Source client id", self.from_client_id)?;
        require_id("Destination client id", self.to_client_id)?;
        if self.from_account_type == self.to_account_type
            && self.from_account_id == self.to_account_id
        {
            return Err(WalletError::validation("Source and destination accounts must differ"));
        }
        validate_amount(&self.amount)?;
        require_non_empty("Valid from date", &self.valid_from)?;
        if self.recurrence_interval <= 0 {
            return Err(WalletError::validation("Recurrence interval must be positive"));
        }
        Ok(())
    }
}

/// Option codes chosen from the template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionCodes {
    pub transfer_type: i64,
    pub priority: i64,
    pub status: i64,
    pub instruction_type: i64,
    pub recurrence_type: i64,
}

impl Default for InstructionCodes {
    // Fineract codes: account transfer, medium priority, active, fixed amount, periodic
    fn default() -> Self {
        Self {
            transfer_type: 1,
            priority: 2,
            status: 1,
            instruction_type: 1,
            recurrence_type: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccountOption {
    pub id: AccountId,
    #[serde(default)]
    pub account_no: String,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub client_id: Option<ClientId>,
}

/// Valid choices for a new standing instruction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SITemplate {
    pub from_office: Option<OfficeRef>,
    pub from_client: Option<ClientRef>,
    pub from_account_type: Option<EnumOption>,
    pub from_office_options: Vec<OfficeRef>,
    pub from_client_options: Vec<ClientRef>,
    pub from_account_type_options: Vec<EnumOption>,
    pub from_account_options: Vec<AccountOption>,
    pub to_office_options: Vec<OfficeRef>,
    pub to_account_type_options: Vec<EnumOption>,
    pub transfer_type_options: Vec<EnumOption>,
    pub status_options: Vec<EnumOption>,
    pub instruction_type_options: Vec<EnumOption>,
    pub priority_options: Vec<EnumOption>,
    pub recurrence_type_options: Vec<EnumOption>,
    pub recurrence_frequency_options: Vec<EnumOption>,
}

impl SITemplate {
    /// Check every option-coded field of `payload` against this template.
    /// Empty option lists are treated as unconstrained.
    pub fn check(&self, payload: &StandingInstructionPayload) -> WalletResult<()> {
        fn allowed(field: &str, options: &[EnumOption], id: i64) -> WalletResult<()> {
            if options.is_empty() || options.iter().any(|o| o.id == id) {
                Ok(())
            } else {
                Err(WalletError::validation(format!(
                    "{} {} is not offered by the template",
                    field, id
                )))
            }
        }

        allowed("Transfer type", &self.transfer_type_options, payload.transfer_type)?;
        allowed("Status", &self.status_options, payload.status)?;
        allowed("Instruction type", &self.instruction_type_options, payload.instruction_type)?;
        allowed("Priority", &self.priority_options, payload.priority)?;
        allowed("Recurrence type", &self.recurrence_type_options, payload.recurrence_type)?;
        allowed(
            "Recurrence frequency",
            &self.recurrence_frequency_options,
            payload.recurrence_frequency,
        )?;
        allowed(
            "Source account type",
            &self.from_account_type_options,
            i64::from(payload.from_account_type),
        )?;

        if !self.from_account_options.is_empty()
            && !self.from_account_options.iter().any(|a| a.id == payload.from_account_id)
        {
            return Err(WalletError::validation(format!(
                "Source account {} is not offered by the template",
                payload.from_account_id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::ACCOUNT_TYPE_SAVINGS;

    fn payload() -> StandingInstructionPayload {
        StandingInstructionPayload::new(
            "Monthly rent",
            (1, 42, ACCOUNT_TYPE_SAVINGS, 100),
            (1, 43, ACCOUNT_TYPE_SAVINGS, 200),
            "500",
            "01 January 2025",
            2,
            1,
            InstructionCodes::default(),
        )
        .expect("valid payload")
    }

    fn option(id: i64) -> EnumOption {
        EnumOption { id, code: String::new(), value: String::new() }
    }

    #[test]
    fn test_payload_serialization_skips_empty_optionals() {
        let json = serde_json::to_value(payload()).expect("serializable");
        assert_eq!(json["fromAccountId"], 100);
        assert_eq!(json["monthDayFormat"], "dd MMMM");
        assert!(json.get("validTill").is_none());
        assert!(json.get("recurrenceOnMonthDay").is_none());
    }

    #[test]
    fn test_optional_dates() {
        let payload = payload()
            .with_valid_till(NaiveDate::from_ymd_opt(2025, 12, 31).expect("valid date"))
            .with_month_day(NaiveDate::from_ymd_opt(2025, 3, 5).expect("valid date"));
        let json = serde_json::to_value(payload).expect("serializable");

        assert_eq!(json["validTill"], "31 December 2025");
        assert_eq!(json["recurrenceOnMonthDay"], "05 March");
    }

    #[test]
    fn test_payload_validation() {
        let mut same_account = payload();
        same_account.to_account_id = same_account.from_account_id;
        assert!(same_account.validate().is_err());

        let mut no_interval = payload();
        no_interval.recurrence_interval = 0;
        assert!(no_interval.validate().is_err());
    }

    #[test]
    fn test_template_check() {
        let template = SITemplate {
            transfer_type_options: vec![option(1), option(2)],
            recurrence_frequency_options: vec![option(0), option(1), option(2)],
            from_account_options: vec![AccountOption { id: 100, ..AccountOption::default() }],
            ..SITemplate::default()
        };
        assert!(template.check(&payload()).is_ok());

        let mut unknown_account = payload();
        unknown_account.from_account_id = 999;
        assert!(template.check(&unknown_account).is_err());

        let mut unknown_frequency = payload();
        unknown_frequency.recurrence_frequency = 7;
        assert!(template.check(&unknown_frequency).is_err());
    }

    #[test]
    fn test_template_from_backend_json() {
        let json = r#"{
            "fromOfficeOptions": [{"id": 1, "name": "Head Office"}],
            "fromAccountTypeOptions": [{"id": 2, "code": "accountType.savings", "value": "Savings Account"}],
            "recurrenceFrequencyOptions": [{"id": 2, "code": "frequencyperiodFrequencyType.months", "value": "Months"}]
        }"#;
        let template: SITemplate = serde_json::from_str(json).expect("Failed to parse template");
        assert_eq!(template.from_office_options[0].name, "Head Office");
        assert!(template.status_options.is_empty());
    }

    #[test]
    fn test_instruction_dates() {
        let json = r#"{"id": 3, "name": "Rent", "status": {"id": 1, "value": "Active"}, "validFrom": [2025, 1, 1], "amount": 500}"#;
        let instruction: StandingInstruction =
            serde_json::from_str(json).expect("Failed to parse instruction");
        assert!(instruction.is_active());
        assert_eq!(instruction.valid_from(), NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(instruction.valid_till(), None);
    }
}
