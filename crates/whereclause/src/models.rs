//! Record types exposed to filters.
//!
//! These mirror the two resources of the jogging tracker: users and their
//! jogging sessions. Each type declares a static [`FieldTable`] and implements
//! [`Record`] so filter text can be compiled against it.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::filter::{EnumType, FieldDef, FieldTable, FieldType, Predicate};
use crate::record::{Record, Value};

/// Role variants in declaration order, which is also their filter ordering.
pub static ROLE_TYPE: EnumType = EnumType::new("role", &["USER", "MANAGER", "ADMIN"]);

static USER_FIELDS: [FieldDef; 4] = [
    FieldDef::new("id", FieldType::Integer),
    FieldDef::new("version", FieldType::Integer),
    FieldDef::new("name", FieldType::Text),
    FieldDef::new("role", FieldType::Enum(&ROLE_TYPE)),
];

/// Filterable fields of [`User`].
pub static USER_TABLE: FieldTable = FieldTable::new("user", &USER_FIELDS);

static JOGGING_FIELDS: [FieldDef; 9] = [
    FieldDef::new("id", FieldType::Integer),
    FieldDef::new("version", FieldType::Integer),
    FieldDef::new("user", FieldType::Reference),
    FieldDef::new("date", FieldType::Date),
    FieldDef::new("distance", FieldType::Integer),
    FieldDef::new("time", FieldType::Time),
    FieldDef::new("location", FieldType::Text),
    FieldDef::new("averageTemperature", FieldType::Text),
    FieldDef::new("weatherCondition", FieldType::Text),
];

/// Filterable fields of [`Jogging`].
pub static JOGGING_TABLE: FieldTable = FieldTable::new("jogging", &JOGGING_FIELDS);

/// Access level of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Regular user managing their own joggings.
    User,
    /// Manages users.
    Manager,
    /// Full access.
    Admin,
}

impl Role {
    /// Returns the variant name as written in filters.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Manager => "MANAGER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: i64,

    /// Optimistic locking version.
    #[serde(default)]
    pub version: i64,

    /// Unique login name.
    pub name: String,

    /// Access level.
    pub role: Role,
}

impl Record for User {
    fn field_table() -> &'static FieldTable {
        &USER_TABLE
    }

    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(Value::Integer(self.id)),
            "version" => Some(Value::Integer(self.version)),
            "name" => Some(Value::Text(self.name.clone())),
            "role" => ROLE_TYPE.variant(self.role.as_str()).map(Value::Enum),
            _ => None,
        }
    }
}

/// A single jogging session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jogging {
    /// Unique identifier.
    pub id: i64,

    /// Optimistic locking version.
    #[serde(default)]
    pub version: i64,

    /// Name of the owning user.
    pub user: String,

    /// Day of the session.
    pub date: NaiveDate,

    /// Distance in meters.
    pub distance: i64,

    /// Duration of the session.
    pub time: NaiveTime,

    /// Where the session took place.
    pub location: String,

    /// Average temperature reported by the weather provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_temperature: Option<String>,

    /// Weather condition reported by the weather provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_condition: Option<String>,
}

impl Jogging {
    /// Builds the constraint that scopes a query to one user's joggings.
    ///
    /// The `user` field is not filterable from text, so ownership is applied
    /// as an extra predicate instead.
    pub fn owned_by(user: impl Into<String>) -> Predicate {
        Predicate::equal("user", Value::Text(user.into()))
    }
}

impl Record for Jogging {
    fn field_table() -> &'static FieldTable {
        &JOGGING_TABLE
    }

    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(Value::Integer(self.id)),
            "version" => Some(Value::Integer(self.version)),
            "user" => Some(Value::Text(self.user.clone())),
            "date" => Some(Value::Date(self.date)),
            "distance" => Some(Value::Integer(self.distance)),
            "time" => Some(Value::Time(self.time)),
            "location" => Some(Value::Text(self.location.clone())),
            "averageTemperature" => Some(Value::from(self.average_temperature.clone())),
            "weatherCondition" => Some(Value::from(self.weather_condition.clone())),
            _ => None,
        }
    }
}
