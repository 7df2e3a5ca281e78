use crate::domain::model::location::District;
use serde::{Deserialize, Serialize};

/// The division currently being worked on, kept across runs.
/// `Default` is the zero value: numbers 0, strings empty, lists empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DivisionState {
    pub division_id: i64,
    pub division_name: String,
    pub office_name: String,
    pub office_address: String,
    pub sds_name: String,
    pub ito_name: String,
    pub ito_email: String,
    pub number_of_schools: i64,
    pub districts: Vec<District>,
}
