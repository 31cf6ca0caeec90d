//! NGO record

use serde::{Deserialize, Serialize};

use super::Record;

/// An organization that receives donations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ngo {
    pub name: String,
    pub contact: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_area: Option<String>,
    /// People served per day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

impl Record for Ngo {
    const COLLECTION: &'static str = "ngo";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_payload() {
        let ngo: Ngo = serde_json::from_value(json!({
            "name": "Food For All",
            "contact": "hello@ffa.org",
            "location": "Lagos",
            "focus_area": "children",
            "capacity": 250
        }))
        .unwrap();
        assert_eq!(ngo.capacity, Some(250));
        assert_eq!(ngo.focus_area.as_deref(), Some("children"));
    }

    #[test]
    fn rejects_missing_location() {
        let result =
            serde_json::from_value::<Ngo>(json!({"name": "Food For All", "contact": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_wrong_type() {
        let result = serde_json::from_value::<Ngo>(
            json!({"name": "Food For All", "contact": "x", "location": "Lagos", "capacity": "lots"}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn collection_name() {
        assert_eq!(Ngo::COLLECTION, "ngo");
    }
}
