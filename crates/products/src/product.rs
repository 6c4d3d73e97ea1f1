use serde::{Deserialize, Serialize};

/// Catalog record returned by seller-scoped queries.
///
/// Serialized field names (`ID`, `SellerID`, `Description`, `Price`) are part
/// of the wire contract and must not change. `id` is opaque and not
/// guaranteed unique within a dataset; `seller_id` is the partition key and
/// is matched exactly (case-sensitive, no normalization).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "SellerID")]
    pub seller_id: String,
    #[serde(rename = "Description")]
    pub description: String,
    /// Non-negative by convention, not enforced.
    #[serde(rename = "Price")]
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Product {
        Product {
            id: "mock".to_string(),
            seller_id: "FEX112AC".to_string(),
            description: "generic product".to_string(),
            price: 123.55,
        }
    }

    #[test]
    fn serializes_with_exact_contract_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "ID": "mock",
                "SellerID": "FEX112AC",
                "Description": "generic product",
                "Price": 123.55,
            })
        );
    }

    #[test]
    fn serializes_no_extra_fields() {
        let value = serde_json::to_value(sample()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
    }

    #[test]
    fn price_is_a_plain_json_number() {
        let body = serde_json::to_string(&sample()).unwrap();
        assert!(body.contains("\"Price\":123.55"));
    }

    #[test]
    fn deserializes_from_contract_field_names() {
        let product: Product = serde_json::from_value(json!({
            "ID": "mock",
            "SellerID": "FEX112AC",
            "Description": "generic product",
            "Price": 123.55,
        }))
        .unwrap();
        assert_eq!(product, sample());
    }
}
