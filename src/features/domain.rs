//! Records owned by the school server and shared by several resources.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgressState {
    NotStarted,
    InProgress,
    Passed,
}

/// Full roster entry of a student.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub id: i64,
    pub user_id: i64,
    pub external_code: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub member_type_id: i64,
    pub signup_date: Option<NaiveDate>,
    pub is_active: bool,
    #[serde(with = "crate::features::local_datetime")]
    pub created_at: NaiveDateTime,
    #[serde(default, with = "crate::features::local_datetime::option")]
    pub updated_at: Option<NaiveDateTime>,
}

/// Rank in the curriculum.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub id: i64,
    pub code: String,
    pub display_name: String,
    pub order_seq: i32,
    pub description: Option<String>,
    #[serde(with = "crate::features::local_datetime")]
    pub created_at: NaiveDateTime,
    #[serde(with = "crate::features::local_datetime")]
    pub updated_at: NaiveDateTime,
}

/// Technique a level requires.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub move_category_id: i64,
    #[serde(with = "crate::features::local_datetime")]
    pub created_at: NaiveDateTime,
    #[serde(with = "crate::features::local_datetime")]
    pub updated_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: i64,
    pub class_date: NaiveDate,
    pub notes: Option<String>,
    #[serde(with = "crate::features::local_datetime")]
    pub created_at: NaiveDateTime,
}
