use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use crate::domain::entities::destinations::Destination;
use crate::validation::{Draft, Rule, Schema};

/// 여행지 초안
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDraft {
    pub name: String,
    pub description: String,
    pub state: String,
    pub city: String,
    pub cost: f64,
    pub max_guests: i64,
    pub available: bool,
}

impl DestinationDraft {
    /// 요청 본문의 값으로 항상 덮어쓰는 필드
    pub const FIELDS: &'static [&'static str] = &["name", "state", "city", "cost", "maxGuests"];

    /// 새 여행지 초안의 초기값
    ///
    /// `description`과 `available`은 요청에 올바른 타입의 값이 있을 때만 덮어씁니다.
    pub fn defaults() -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("description".to_string(), json!(Destination::DEFAULT_DESCRIPTION));
        fields.insert("available".to_string(), json!(true));
        fields
    }
}

impl Draft for DestinationDraft {
    const SCHEMA: Schema = &[
        ("name", &[Rule::IsString]),
        ("description", &[Rule::IsString]),
        ("state", &[Rule::NotEmpty, Rule::IsString]),
        ("city", &[Rule::NotEmpty, Rule::IsString]),
        ("cost", &[Rule::NotEmpty, Rule::IsNumber]),
        ("maxGuests", &[Rule::NotEmpty, Rule::IsInt]),
        ("available", &[Rule::IsBoolean]),
    ];
}

impl From<&Destination> for DestinationDraft {
    fn from(destination: &Destination) -> Self {
        Self {
            name: destination.name.clone(),
            description: destination.description.clone(),
            state: destination.state.clone(),
            city: destination.city.clone(),
            cost: destination.cost,
            max_guests: destination.max_guests,
            available: destination.available,
        }
    }
}
