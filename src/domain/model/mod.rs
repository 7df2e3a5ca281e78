pub mod batch;
pub mod location;
pub mod school;
pub mod state;
pub mod user;

pub use batch::{
    Batch, Configuration, ConfigurationKey, ConfigurationRef, Package, PackageKey, SchoolBatchList,
    SchoolBatchRef,
};
pub use location::{District, DistrictRef, Division, DivisionRef, Municipality, MunicipalityRef};
pub use school::{Coordinator, Provider, School, SchoolContact, SchoolEnergy, SchoolNtc};
pub use state::DivisionState;
pub use user::{PasswordReset, User, UserProfileUpdate};

/// URL names of every resource, in the order the admin pages list them.
pub const RESOURCE_NAMES: &[&str] = &[
    "batch",
    "configuration",
    "coordinator",
    "district",
    "division",
    "municipality",
    "package",
    "school",
    "schoolBatchList",
    "schoolContact",
    "schoolEnergy",
    "schoolNtc",
    "provider",
    "user",
];
