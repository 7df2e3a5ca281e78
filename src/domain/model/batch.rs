use crate::domain::resource::{parse_pair, Resource, ResourceId};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// 一批採購的電腦化設備
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Batch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<i64>,
    pub batch_name: String,
    pub budget_year: String,
    pub delivery_year: String,
    pub price: String,
    pub supplier: String,
    pub number_of_package: String,
    pub remarks: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub configurations: Vec<Configuration>,
}

impl Resource for Batch {
    type Id = i64;
    const NAME: &'static str = "batch";

    fn id(&self) -> Option<i64> {
        self.batch_id
    }
}

/// `configurationId` + `batchId`; rendered as `{configurationId}/batch/{batchId}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationKey {
    pub configuration_id: i64,
    pub batch_id: i64,
}

impl ResourceId for ConfigurationKey {
    fn to_path(&self) -> String {
        format!("{}/batch/{}", self.configuration_id, self.batch_id)
    }

    fn parse_key(raw: &str) -> Result<Self> {
        let (configuration_id, batch_id) = parse_pair(raw)?;
        Ok(Self {
            configuration_id,
            batch_id,
        })
    }
}

/// One line item of a batch (e.g. 1 laptop, 1 projector).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Configuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_id: Option<i64>,
    pub item: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub quantity: i64,
}

impl Resource for Configuration {
    type Id = ConfigurationKey;
    const NAME: &'static str = "configuration";
    const PARENT: Option<&'static str> = Some("batch");

    fn id(&self) -> Option<ConfigurationKey> {
        Some(ConfigurationKey {
            configuration_id: self.configuration_id?,
            batch_id: self.batch_id?,
        })
    }
}

/// A school's allocation within a batch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchoolBatchList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_batch_id: Option<i64>,
    pub school_record_id: i64,
    pub batch_id: i64,
    pub delivery_date: String,
    pub number_of_package: i64,
    pub status: String,
    pub key_stage: String,
    pub remarks: String,
}

impl Resource for SchoolBatchList {
    type Id = i64;
    const NAME: &'static str = "schoolBatchList";
    const PARENT: Option<&'static str> = Some("batch");

    fn id(&self) -> Option<i64> {
        self.school_batch_id
    }
}

/// `packageId` + `schoolBatchId`; rendered as `{packageId}/schoolBatch/{schoolBatchId}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageKey {
    pub package_id: i64,
    pub school_batch_id: i64,
}

impl ResourceId for PackageKey {
    fn to_path(&self) -> String {
        format!("{}/schoolBatch/{}", self.package_id, self.school_batch_id)
    }

    fn parse_key(raw: &str) -> Result<Self> {
        let (package_id, school_batch_id) = parse_pair(raw)?;
        Ok(Self {
            package_id,
            school_batch_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigurationRef {
    pub configuration_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchoolBatchRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_batch_id: Option<i64>,
}

/// A physical unit delivered to a school.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Package {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<i64>,
    pub configuration: ConfigurationRef,
    pub school_batch_list: SchoolBatchRef,
    pub serial_number: String,
    pub status: String,
    pub accountable_person: String,
    pub remarks: String,
}

impl Resource for Package {
    type Id = PackageKey;
    const NAME: &'static str = "package";
    const PARENT: Option<&'static str> = Some("schoolBatchList");

    fn id(&self) -> Option<PackageKey> {
        Some(PackageKey {
            package_id: self.package_id?,
            school_batch_id: self.school_batch_list.school_batch_id?,
        })
    }
}
