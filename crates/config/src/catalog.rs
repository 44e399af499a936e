//! Catalogue of every recognised environment variable and its policy.
//!
//! The order matches resolution order in `ConfigLoader::build`, so the first
//! required variable listed here that is missing is the one reported.

use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

use crate::constants::*;
use crate::loader::parse::bool_to_literal;

/// Target type of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VarKind {
    String,
    /// A string that is never printed or logged.
    Secret,
    Bool,
    Path,
}

/// How a variable behaves when unset or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "policy", content = "value", rename_all = "snake_case")]
pub enum Requirement {
    /// Must be set and non-empty.
    Required,
    /// Must be considered, but may be unset or empty.
    AllowEmpty,
    /// Falls back to a literal.
    Default(&'static str),
    /// Falls back to the resolved value of another variable.
    DefaultsTo(&'static str),
}

/// A recognised environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarSpec {
    pub name: &'static str,
    pub kind: VarKind,
    pub requirement: Requirement,
}

impl VarSpec {
    /// The policy as it may be shown to an operator.
    ///
    /// Literal defaults of secret variables are masked with `REDACTED`.
    pub fn display_requirement(&self) -> Requirement {
        match (self.kind, self.requirement) {
            (VarKind::Secret, Requirement::Default(_)) => Requirement::Default(REDACTED),
            (_, requirement) => requirement,
        }
    }
}

/// Serializes the displayable policy, never a secret default.
impl Serialize for VarSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("VarSpec", 3)?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("requirement", &self.display_requirement())?;
        state.end()
    }
}

const fn var(name: &'static str, kind: VarKind, requirement: Requirement) -> VarSpec {
    VarSpec {
        name,
        kind,
        requirement,
    }
}

/// All variables, in resolution order.
pub const VARIABLES: &[VarSpec] = &[
    var(STATSNZ_API_KEY, VarKind::Secret, Requirement::Required),
    var(LINZ_API_KEY, VarKind::Secret, Requirement::Required),
    var(MFE_API_KEY, VarKind::Secret, Requirement::Required),
    var(NIWA_API_KEY, VarKind::Secret, Requirement::Required),
    var(
        DEBUG_TRACEBACK,
        VarKind::Bool,
        Requirement::Default(bool_to_literal(DEFAULT_DEBUG_TRACEBACK)),
    ),
    var(
        TEST_DATABASE_INTEGRATION,
        VarKind::Bool,
        Requirement::Default(bool_to_literal(DEFAULT_TEST_DATABASE_INTEGRATION)),
    ),
    var(DATA_DIR, VarKind::Path, Requirement::Required),
    var(DATA_DIR_MODEL_OUTPUT, VarKind::Path, Requirement::Required),
    var(DATA_DIR_GEOSERVER, VarKind::Path, Requirement::Required),
    var(FLOOD_MODEL_DIR, VarKind::Path, Requirement::Required),
    var(
        POSTGRES_HOST,
        VarKind::String,
        Requirement::Default(DEFAULT_POSTGRES_HOST),
    ),
    var(
        POSTGRES_PORT,
        VarKind::String,
        Requirement::Default(DEFAULT_POSTGRES_PORT),
    ),
    var(
        POSTGRES_DB,
        VarKind::String,
        Requirement::Default(DEFAULT_POSTGRES_DB),
    ),
    var(
        POSTGRES_USER,
        VarKind::String,
        Requirement::Default(DEFAULT_POSTGRES_USER),
    ),
    var(POSTGRES_PASSWORD, VarKind::Secret, Requirement::Required),
    var(
        MESSAGE_BROKER_HOST,
        VarKind::String,
        Requirement::Default(DEFAULT_MESSAGE_BROKER_HOST),
    ),
    var(
        GEOSERVER_HOST,
        VarKind::String,
        Requirement::Default(DEFAULT_GEOSERVER_HOST),
    ),
    var(
        GEOSERVER_PORT,
        VarKind::String,
        Requirement::Default(DEFAULT_GEOSERVER_PORT),
    ),
    var(
        GEOSERVER_INTERNAL_HOST,
        VarKind::String,
        Requirement::DefaultsTo(GEOSERVER_HOST),
    ),
    var(
        GEOSERVER_INTERNAL_PORT,
        VarKind::String,
        Requirement::DefaultsTo(GEOSERVER_PORT),
    ),
    var(
        GEOSERVER_ADMIN_NAME,
        VarKind::String,
        Requirement::Default(DEFAULT_GEOSERVER_ADMIN_NAME),
    ),
    var(
        GEOSERVER_ADMIN_PASSWORD,
        VarKind::Secret,
        Requirement::Default(DEFAULT_GEOSERVER_ADMIN_PASSWORD),
    ),
    var(LIDAR_DIR, VarKind::Path, Requirement::Required),
    var(DEM_DIR, VarKind::Path, Requirement::Required),
    var(LAND_FILE, VarKind::Path, Requirement::AllowEmpty),
    var(INSTRUCTIONS_FILE, VarKind::Path, Requirement::Required),
];

/// Variables that must be set for resolution to succeed.
pub fn required() -> impl Iterator<Item = &'static VarSpec> {
    VARIABLES
        .iter()
        .filter(|spec| spec.requirement == Requirement::Required)
}
