use crate::domain::resource::{Envelope, Resource};
use serde::{Deserialize, Serialize};

/// Schools Division Office.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Division {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division_id: Option<i64>,
    pub division_name: String,
    pub office_name: String,
    pub office_address: String,
    pub sds_name: String,
    pub ito_name: String,
    pub ito_email: String,
}

impl Resource for Division {
    type Id = i64;
    const NAME: &'static str = "division";
    const ENVELOPE: Envelope = Envelope::Bare;

    fn id(&self) -> Option<i64> {
        self.division_id
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DivisionRef {
    pub division_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct District {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_id: Option<i64>,
    pub district_name: String,
    pub division: DivisionRef,
}

impl Resource for District {
    type Id = i64;
    const NAME: &'static str = "district";
    const PARENT: Option<&'static str> = Some("division");
    const ENVELOPE: Envelope = Envelope::Bare;

    fn id(&self) -> Option<i64> {
        self.district_id
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DistrictRef {
    pub district_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Municipality {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipality_id: Option<i64>,
    pub municipality_name: String,
    pub division: DivisionRef,
}

impl Resource for Municipality {
    type Id = i64;
    const NAME: &'static str = "municipality";
    const PARENT: Option<&'static str> = Some("division");
    const ENVELOPE: Envelope = Envelope::Bare;

    fn id(&self) -> Option<i64> {
        self.municipality_id
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MunicipalityRef {
    pub municipality_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipality_name: Option<String>,
}
