use serde::{Deserialize, Deserializer};

/// One bookable date/hour/court combination reported by the search service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySlot {
    pub recinto_name: String,
    #[serde(deserialize_with = "text_or_number")]
    pub recinto_code: String,
    pub date: String,
    pub day_of_week: String,
    #[serde(deserialize_with = "text_or_number")]
    pub hour: String,
    #[serde(default)]
    pub canchas: Vec<String>,
    pub booking_url: String,
}

// the service is loose about codes and hours
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(number) => number.to_string(),
    })
}
