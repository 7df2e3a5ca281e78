use crate::domain::model::location::{DistrictRef, DivisionRef, MunicipalityRef};
use crate::domain::resource::{Envelope, Resource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct School {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_record_id: Option<i64>,
    /// DepEd school ID (not the record id).
    pub school_id: String,
    pub school_name: String,
    pub address: String,
    pub classification: String,
    pub division: DivisionRef,
    pub district: DistrictRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipality: Option<MunicipalityRef>,
}

impl Resource for School {
    type Id = i64;
    const NAME: &'static str = "school";
    const PARENT: Option<&'static str> = Some("division");

    fn id(&self) -> Option<i64> {
        self.school_record_id
    }
}

/// ICT coordinator assigned to a school.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Coordinator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinator_id: Option<i64>,
    pub school_record_id: i64,
    pub coordinator_name: String,
    pub designation: String,
    pub email: String,
    pub mobile_number: String,
    pub remarks: String,
}

impl Resource for Coordinator {
    type Id = i64;
    const NAME: &'static str = "coordinator";
    const PARENT: Option<&'static str> = Some("school");

    fn id(&self) -> Option<i64> {
        self.coordinator_id
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchoolContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<i64>,
    pub school_record_id: i64,
    pub principal_name: String,
    pub landline: String,
    pub mobile_number: String,
    pub email: String,
}

impl Resource for SchoolContact {
    type Id = i64;
    const NAME: &'static str = "schoolContact";
    const PARENT: Option<&'static str> = Some("school");
    const ENVELOPE: Envelope = Envelope::Bare;

    fn id(&self) -> Option<i64> {
        self.contact_id
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchoolEnergy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_id: Option<i64>,
    pub school_record_id: i64,
    pub energized: bool,
    pub grid_supply: String,
    pub remarks: String,
}

impl Resource for SchoolEnergy {
    type Id = i64;
    const NAME: &'static str = "schoolEnergy";
    const PARENT: Option<&'static str> = Some("school");
    const ENVELOPE: Envelope = Envelope::Bare;

    fn id(&self) -> Option<i64> {
        self.energy_id
    }
}

/// National Telecommunications Commission connectivity record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchoolNtc {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ntc_id: Option<i64>,
    pub school_record_id: i64,
    pub internet_available: bool,
    pub connection_type: String,
    pub remarks: String,
}

impl Resource for SchoolNtc {
    type Id = i64;
    const NAME: &'static str = "schoolNtc";
    const PARENT: Option<&'static str> = Some("school");
    const ENVELOPE: Envelope = Envelope::Bare;

    fn id(&self) -> Option<i64> {
        self.ntc_id
    }
}

/// Internet service provider serving a school.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Provider {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<i64>,
    pub ntc_id: i64,
    pub provider_name: String,
    pub speed: String,
    pub unit: String,
}

impl Resource for Provider {
    type Id = i64;
    const NAME: &'static str = "provider";
    const PARENT: Option<&'static str> = Some("schoolNtc");
    const ENVELOPE: Envelope = Envelope::Bare;

    fn id(&self) -> Option<i64> {
        self.provider_id
    }
}
