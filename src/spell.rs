use serde::{Deserialize, Serialize};

/// A spell record as delivered by the host data layer.
///
/// The host resolves any localized or legacy field naming before records
/// reach this crate; every field here is single-valued and final.
/// `required_song` is the digit string of row ids the spell's song uses
/// (order irrelevant, repeats legal); `cast_order` is the 1-indexed column
/// sequence, order significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellRecord {
    pub id: String,
    pub name: String,
    pub required_song: String,
    pub cast_order: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_host_wire_shape() {
        let record: SpellRecord = serde_json::from_str(
            r#"{
                "id": "spell-001",
                "name": "ムテキパル",
                "requiredSong": "247",
                "castOrder": "74272",
                "category": "攻撃",
                "tags": ["人気"]
            }"#,
        )
        .unwrap();

        assert_eq!(record.id, "spell-001");
        assert_eq!(record.name, "ムテキパル");
        assert_eq!(record.required_song, "247");
        assert_eq!(record.cast_order, "74272");
        assert_eq!(record.description, None);
        assert_eq!(record.tags, ["人気"]);
    }
}
