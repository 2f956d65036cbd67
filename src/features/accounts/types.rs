use serde::{Deserialize, Serialize};

/// Account profile as returned by `GET /accounts/{id}`. Rating aggregates and
/// verification status are optional on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub id: Option<i64>,
    pub email: String,
    pub fname: String,
    pub lname: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, alias = "ratingAvg")]
    pub rating_avg: Option<f64>,
    #[serde(default, alias = "ratingCount")]
    pub rating_count: Option<u32>,
}

impl Account {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.fname.trim(), self.lname.trim())
            .trim()
            .to_string()
    }

    /// Initials for the avatar badge, e.g. `AL` for Ada Lovelace.
    pub fn initials(&self) -> String {
        [&self.fname, &self.lname]
            .iter()
            .filter_map(|name| name.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}
