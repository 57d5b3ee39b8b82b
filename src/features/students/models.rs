use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::features::domain::{Level, Move, ProgressState};

/// Roster row as listed by the students screen.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub rank_badge: String,
    pub rank_color: String,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StudentWithLevelResponse {
    pub student: StudentDetails,
    pub current_level: LevelDetails,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetails {
    pub id: i64,
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LevelDetails {
    pub code: String,
    pub display_name: String,
}

/// Active student flattened with its current level.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentWithLevel {
    pub id: i64,
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub is_active: bool,
    pub current_level: String,
    pub code: String,
}

impl From<StudentWithLevelResponse> for StudentWithLevel {
    fn from(item: StudentWithLevelResponse) -> Self {
        Self {
            id: item.student.id,
            user_id: item.student.user_id,
            full_name: format!("{} {}", item.student.first_name, item.student.last_name),
            first_name: item.student.first_name,
            last_name: item.student.last_name,
            is_active: item.student.is_active,
            current_level: item.current_level.display_name,
            code: item.current_level.code,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StudentProgressByLevel {
    pub level: Level,
    pub requirements: Vec<RequirementProgress>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RequirementProgress {
    pub id: i64,
    pub sort_order: i32,
    pub r#move: Move,
    pub is_required: bool,
    pub level_specific_notes: Option<String>,
    pub progress: ProgressStatus,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStatus {
    pub id: Option<i64>,
    pub status: ProgressState,
    #[serde(default, with = "crate::features::local_datetime::option")]
    pub completed_at: Option<NaiveDateTime>,
    pub instructor: Option<InstructorInfo>,
    pub attempts: i32,
    pub notes: Option<String>,
    #[serde(default, with = "crate::features::local_datetime::option")]
    pub last_updated: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct InstructorInfo {
    pub id: i64,
    pub name: String,
}

/// Progress of one student through the requirements of their level.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentProgressDetail {
    pub student_id: i64,
    pub student_name: String,
    pub level_name: String,
    pub requirements: Vec<RequirementItem>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RequirementItem {
    pub level_requirement_id: i64,
    pub move_id: i64,
    pub move_name: String,
    pub progress_id: Option<i64>,
    pub status: ProgressState,
    pub notes: Option<String>,
}

impl StudentProgressDetail {
    pub fn new(student_id: i64, student_name: String, progress: StudentProgressByLevel) -> Self {
        let requirements = progress
            .requirements
            .into_iter()
            .map(|req| RequirementItem {
                level_requirement_id: req.id,
                move_id: req.r#move.id,
                move_name: req.r#move.name,
                progress_id: req.progress.id,
                status: req.progress.status,
                notes: req.progress.notes,
            })
            .collect();

        Self {
            student_id,
            student_name,
            level_name: progress.level.display_name,
            requirements,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudentProgress {
    pub id: i64,
    pub student_id: i64,
    pub level_requirement_id: i64,
    #[serde(default, with = "crate::features::local_datetime::option")]
    pub completed_at: Option<NaiveDateTime>,
    pub instructor_id: Option<i64>,
    pub attempts: i32,
    pub notes: Option<String>,
    #[serde(with = "crate::features::local_datetime")]
    pub created_at: NaiveDateTime,
    #[serde(with = "crate::features::local_datetime")]
    pub updated_at: NaiveDateTime,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentProgressRequest {
    pub student_id: i64,
    pub level_requirement_id: i64,
    pub status: ProgressState,
    pub instructor_id: Option<i64>,
    pub attempts: i32,
    pub notes: Option<String>,
}

impl CreateStudentProgressRequest {
    pub fn new(student_id: i64, level_requirement_id: i64, status: ProgressState) -> Self {
        Self {
            student_id,
            level_requirement_id,
            status,
            instructor_id: None,
            attempts: 0,
            notes: None,
        }
    }
}

/// Partial update; absent fields are left untouched by the server.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentProgressRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProgressState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempts: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
