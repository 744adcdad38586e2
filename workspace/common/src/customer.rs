use serde::{Deserialize, Serialize};

/// Customer response model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub mobile: String,
    pub address: String,
    #[serde(default)]
    pub credit_cards: Vec<String>,
    #[serde(default)]
    pub bank_accounts: Vec<String>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Request body for creating or updating a customer. The list fields
/// are sent as-is; the backend accepts duplicate and empty entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub mobile: String,
    pub address: String,
    pub credit_cards: Vec<String>,
    pub bank_accounts: Vec<String>,
}

/// Form state for the customer modal. The card and bank-account lists
/// always hold at least one slot so the form has an editable row, and
/// entries are addressed by index for in-place edits.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerDraft {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub mobile: String,
    pub address: String,
    pub credit_cards: Vec<String>,
    pub bank_accounts: Vec<String>,
}

impl Default for CustomerDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            company: String::new(),
            mobile: String::new(),
            address: String::new(),
            credit_cards: vec![String::new()],
            bank_accounts: vec![String::new()],
        }
    }
}

impl CustomerDraft {
    pub fn from_record(customer: &Customer) -> Self {
        Self {
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            company: customer.company.clone(),
            mobile: customer.mobile.clone(),
            address: customer.address.clone(),
            credit_cards: seed_slots(&customer.credit_cards),
            bank_accounts: seed_slots(&customer.bank_accounts),
        }
    }

    pub fn add_credit_card(&mut self) {
        self.credit_cards.push(String::new());
    }

    pub fn add_bank_account(&mut self) {
        self.bank_accounts.push(String::new());
    }

    pub fn set_credit_card(&mut self, index: usize, value: String) {
        if let Some(slot) = self.credit_cards.get_mut(index) {
            *slot = value;
        }
    }

    pub fn set_bank_account(&mut self, index: usize, value: String) {
        if let Some(slot) = self.bank_accounts.get_mut(index) {
            *slot = value;
        }
    }

    pub fn to_request(&self) -> SaveCustomerRequest {
        SaveCustomerRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            company: self.company.clone(),
            mobile: self.mobile.clone(),
            address: self.address.clone(),
            credit_cards: self.credit_cards.clone(),
            bank_accounts: self.bank_accounts.clone(),
        }
    }
}

fn seed_slots(values: &[String]) -> Vec<String> {
    if values.is_empty() {
        vec![String::new()]
    } else {
        values.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_customer() -> Customer {
        Customer {
            id: "2".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            company: "Analytical".into(),
            mobile: "555-0100".into(),
            address: "1 Engine Way".into(),
            credit_cards: vec![],
            bank_accounts: vec!["CZ65".into(), "CZ99".into()],
        }
    }

    #[test]
    fn test_default_draft_has_one_empty_slot_per_list() {
        let draft = CustomerDraft::default();
        assert_eq!(draft.credit_cards, vec![String::new()]);
        assert_eq!(draft.bank_accounts, vec![String::new()]);
    }

    #[test]
    fn test_draft_from_record_seeds_empty_lists() {
        let draft = CustomerDraft::from_record(&sample_customer());
        // Empty source list still yields an editable slot.
        assert_eq!(draft.credit_cards, vec![String::new()]);
        // Non-empty lists keep their entries and order.
        assert_eq!(draft.bank_accounts, vec!["CZ65".to_string(), "CZ99".to_string()]);
    }

    #[test]
    fn test_in_place_edits_are_index_addressed() {
        let mut draft = CustomerDraft::from_record(&sample_customer());
        draft.set_bank_account(1, "DE10".into());
        assert_eq!(draft.bank_accounts, vec!["CZ65".to_string(), "DE10".to_string()]);

        // Out-of-range edits are ignored rather than panicking.
        draft.set_credit_card(5, "4111".into());
        assert_eq!(draft.credit_cards, vec![String::new()]);
    }

    #[test]
    fn test_added_slots_preserve_insertion_order() {
        let mut draft = CustomerDraft::default();
        draft.set_credit_card(0, "4111".into());
        draft.add_credit_card();
        draft.set_credit_card(1, "5500".into());
        assert_eq!(draft.credit_cards, vec!["4111".to_string(), "5500".to_string()]);
    }

    #[test]
    fn test_request_carries_lists_verbatim() {
        let mut draft = CustomerDraft::default();
        draft.add_bank_account();
        let request = draft.to_request();
        // Duplicate empty entries are allowed and sent as-is.
        assert_eq!(request.bank_accounts, vec![String::new(), String::new()]);
    }

    #[test]
    fn test_customer_list_fields_default_when_missing() {
        let customer: Customer = serde_json::from_str(
            r#"{"id": "9", "first_name": "B", "last_name": "C",
                "company": "", "mobile": "", "address": ""}"#,
        )
        .unwrap();
        assert!(customer.credit_cards.is_empty());
        assert!(customer.bank_accounts.is_empty());
        assert_eq!(customer.full_name(), "B C");
    }
}
