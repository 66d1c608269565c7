use super::lenient;
use super::stats::BuildingStats;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The building occupancy document as exported upstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildingRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::object")]
    pub data: Option<BuildingData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildingData {
    #[serde(rename = "building_total_area", default, deserialize_with = "lenient::number")]
    pub total_area: f64,
    #[serde(rename = "building_occupied_area", default, deserialize_with = "lenient::number")]
    pub occupied_area: f64,
    #[serde(rename = "building_remaining_area", default, deserialize_with = "lenient::number")]
    pub remaining_area: f64,
    #[serde(rename = "building_occupied_percentage", default, deserialize_with = "lenient::number")]
    pub occupied_pct: f64,
    #[serde(
        rename = "building_remaining_percentage",
        default,
        deserialize_with = "lenient::number"
    )]
    pub remaining_pct: f64,
    #[serde(rename = "floors_data", default, deserialize_with = "lenient::list")]
    pub floors: Vec<FloorRecord>,
}

impl BuildingData {
    #[must_use]
    pub fn stats(&self) -> BuildingStats {
        BuildingStats {
            total_area: self.total_area,
            occupied_area: self.occupied_area,
            remaining_area: self.remaining_area,
            occupied_pct: self.occupied_pct,
            remaining_pct: self.remaining_pct,
        }
    }

    #[must_use]
    pub fn floor(&self, name: &str) -> Option<&FloorRecord> {
        self.floors.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloorRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_area: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub occupied_area: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub remaining_area: f64,
    #[serde(rename = "occupied_percentage", default, deserialize_with = "lenient::number")]
    pub occupied_pct: f64,
    #[serde(rename = "remaining_percentage", default, deserialize_with = "lenient::number")]
    pub remaining_pct: f64,
    #[serde(default)]
    pub remark: Remark,
    #[serde(default, deserialize_with = "lenient::list")]
    pub companies: Vec<CompanyRecord>,
}

impl FloorRecord {
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.remark == Remark::Blocked
    }

    #[must_use]
    pub fn stats(&self) -> BuildingStats {
        BuildingStats {
            total_area: self.total_area,
            occupied_area: self.occupied_area,
            remaining_area: self.remaining_area,
            occupied_pct: self.occupied_pct,
            remaining_pct: self.remaining_pct,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "occupied_percentage", default, deserialize_with = "lenient::number")]
    pub occupied_pct: f64,
    #[serde(default, deserialize_with = "lenient::optional_area")]
    pub occupied_area: Option<f64>,
}

/// Reservation status of a floor. Only the exact remark `"blocked"` reserves it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Remark {
    #[default]
    Normal,
    Blocked,
}

impl<'de> Deserialize<'de> for Remark {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Value>::deserialize(deserializer)? {
            Some(Value::String(s)) if s == "blocked" => Self::Blocked,
            _ => Self::Normal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_full_record() {
        let record: BuildingRecord = serde_json::from_str(
            r#"{
                "status": "success",
                "data": {
                    "building_total_area": 1000,
                    "building_occupied_area": 600,
                    "building_remaining_area": 400,
                    "building_occupied_percentage": 60,
                    "building_remaining_percentage": 40,
                    "floors_data": [{
                        "name": "G",
                        "total_area": 500,
                        "occupied_area": 300,
                        "remaining_area": 200,
                        "occupied_percentage": 60,
                        "remaining_percentage": 40,
                        "remark": "normal",
                        "companies": [{"name": "Acme", "occupied_percentage": 40, "occupied_area": 200}]
                    }]
                }
            }"#,
        )
        .expect("record decodes");

        let data = record.data.expect("data present");
        assert_eq!(data.stats().occupied_area, 600.0);
        let floor = data.floor("G").expect("floor G");
        assert!(!floor.is_blocked());
        assert_eq!(
            floor.companies,
            vec![CompanyRecord {
                name: "Acme".to_string(),
                occupied_pct: 40.0,
                occupied_area: Some(200.0),
            }]
        );
    }

    #[test]
    fn remark_is_blocked_only_for_exact_string() {
        let decode = |json: &str| -> Remark {
            let floor: FloorRecord = serde_json::from_str(json).expect("floor decodes");
            floor.remark
        };
        assert_eq!(decode(r#"{"remark": "blocked"}"#), Remark::Blocked);
        assert_eq!(decode(r#"{"remark": "Blocked"}"#), Remark::Normal);
        assert_eq!(decode(r#"{"remark": null}"#), Remark::Normal);
        assert_eq!(decode(r#"{"remark": 1}"#), Remark::Normal);
        assert_eq!(decode("{}"), Remark::Normal);
    }

    #[test]
    fn failed_record_may_carry_non_object_payload() {
        let record: BuildingRecord =
            serde_json::from_str(r#"{"status": "error", "data": "upstream timeout"}"#)
                .expect("record decodes");
        assert_eq!(record.status, "error");
        assert!(record.data.is_none());
    }

    #[test]
    fn floor_without_companies_has_empty_list() {
        let floor: FloorRecord =
            serde_json::from_str(r#"{"name": "3", "companies": null}"#).expect("floor decodes");
        assert!(floor.companies.is_empty());
        assert_eq!(floor.stats(), BuildingStats::default());
    }
}
