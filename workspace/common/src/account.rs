use serde::{Deserialize, Serialize};

/// Account classification used by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    Bank,
    Cash,
    CreditCard,
}

impl AccountKind {
    pub const ALL: [AccountKind; 3] =
        [AccountKind::Bank, AccountKind::Cash, AccountKind::CreditCard];

    /// Wire value, also used as the `<option>` value in the form.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Bank => "bank",
            AccountKind::Cash => "cash",
            AccountKind::CreditCard => "credit_card",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Bank => "Bank",
            AccountKind::Cash => "Cash",
            AccountKind::CreditCard => "Credit Card",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "bank" => Some(AccountKind::Bank),
            "cash" => Some(AccountKind::Cash),
            "credit_card" => Some(AccountKind::CreditCard),
            _ => None,
        }
    }
}

/// Account response model (identity assigned by the backend).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AccountKind,
    pub number: String,
    pub zone: String,
}

/// Request body for creating or updating an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveAccountRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AccountKind,
    pub number: String,
    pub zone: String,
}

/// Form state for the account modal. All-empty by default; the kind
/// stays unset until the user picks one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccountDraft {
    pub name: String,
    pub kind: Option<AccountKind>,
    pub number: String,
    pub zone: String,
}

impl AccountDraft {
    pub fn from_record(account: &Account) -> Self {
        Self {
            name: account.name.clone(),
            kind: Some(account.kind),
            number: account.number.clone(),
            zone: account.zone.clone(),
        }
    }

    /// Builds the request payload; `None` until a kind has been selected.
    pub fn to_request(&self) -> Option<SaveAccountRequest> {
        Some(SaveAccountRequest {
            name: self.name.clone(),
            kind: self.kind?,
            number: self.number.clone(),
            zone: self.zone.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_kind_uses_backend_wire_values() {
        let account: Account = serde_json::from_str(
            r#"{"id": "3", "name": "Petty Cash", "type": "cash", "number": "0001", "zone": ""}"#,
        )
        .unwrap();
        assert_eq!(account.kind, AccountKind::Cash);

        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["type"], "cash");
        assert_eq!(
            serde_json::to_value(AccountKind::CreditCard).unwrap(),
            "credit_card"
        );
    }

    #[test]
    fn test_default_draft_is_all_empty() {
        let draft = AccountDraft::default();
        assert!(draft.name.is_empty());
        assert!(draft.kind.is_none());
        assert!(draft.number.is_empty());
        assert!(draft.zone.is_empty());
    }

    #[test]
    fn test_draft_without_kind_produces_no_request() {
        let mut draft = AccountDraft {
            name: "Petty Cash".into(),
            number: "0001".into(),
            ..Default::default()
        };
        assert!(draft.to_request().is_none());

        draft.kind = Some(AccountKind::Cash);
        let request = draft.to_request().unwrap();
        assert_eq!(request.name, "Petty Cash");
        assert_eq!(request.kind, AccountKind::Cash);
        assert_eq!(request.zone, "");
    }

    #[test]
    fn test_draft_seeded_from_record() {
        let account = Account {
            id: "7".into(),
            name: "Main".into(),
            kind: AccountKind::Bank,
            number: "123".into(),
            zone: "EU".into(),
        };
        let draft = AccountDraft::from_record(&account);
        assert_eq!(draft.kind, Some(AccountKind::Bank));
        assert_eq!(draft.number, "123");
    }
}
