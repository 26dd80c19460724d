use serde::{Deserialize, Serialize};

pub type AddressId = i64;

/// A saved postal address belonging to the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Create payload for `/api/v1/addresses/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
    pub is_default: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_default_is_optional_in_payload() {
        let address: Address = serde_json::from_str(
            r#"{"id":3,"street":"1 Main St","city":"Springfield","state":"IL","country":"US","zip_code":"62701"}"#,
        )
        .unwrap();
        assert!(!address.is_default);
        assert_eq!(address.zip_code, "62701");
    }
}
