use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::features::domain::{Attendance, StudentProfile};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceWithStudents {
    pub attendance: Attendance,
    pub students: Vec<StudentProfile>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttendanceRequest {
    pub class_date: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddStudentsRequest {
    pub student_ids: Vec<i64>,
}

/// Scheduled class as offered on the attendance screen.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceClass {
    pub id: String,
    pub name: String,
    pub time: String,
    pub date: String,
    pub attendance_count: i32,
    pub max_capacity: i32,
    #[serde(default)]
    pub is_current_time: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub class_id: String,
    pub student_ids: Vec<String>,
    pub date: String,
    pub created_at: String,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordAttendanceRequest {
    pub class_id: String,
    pub student_ids: Vec<String>,
    pub date: String,
}
