use chrono::NaiveDate;
use log::debug;

use crate::{
    core::common::{
        transport::{execute, fetch, ApiError},
        HttpClientFactory, Outcome,
    },
    features::domain::Attendance,
};

pub mod models;


use models::{
    AddStudentsRequest, AttendanceClass, AttendanceRecord, AttendanceWithStudents,
    CreateAttendanceRequest, RecordAttendanceRequest,
};

#[derive(Clone)]
pub struct AttendanceApi {
    factory: HttpClientFactory,
}

impl AttendanceApi {
    pub fn new(factory: HttpClientFactory) -> Self {
        Self { factory }
    }

    pub async fn get_attendances_by_date_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<Attendance>, ApiError> {
        debug!("fetching attendances from {start_date} to {end_date}");

        let request = self.factory.get("attendance/date-range").await.query(&[
            ("startDate", start_date.to_string()),
            ("endDate", end_date.to_string()),
        ]);

        fetch(request).await
    }

    pub async fn get_attendance_with_students(
        &self,
        attendance_id: i64,
    ) -> Result<AttendanceWithStudents, ApiError> {
        debug!("fetching attendance {attendance_id} with students");

        let path = format!("attendance/{attendance_id}/with-students");
        fetch(self.factory.get(&path).await).await
    }

    pub async fn create_attendance(
        &self,
        request: &CreateAttendanceRequest,
    ) -> Result<Attendance, ApiError> {
        debug!("creating attendance for {}", request.class_date);

        fetch(self.factory.post("attendance").await.json(request)).await
    }

    pub async fn add_students_to_attendance(
        &self,
        attendance_id: i64,
        request: &AddStudentsRequest,
    ) -> Result<(), ApiError> {
        debug!(
            "adding {} students to attendance {attendance_id}",
            request.student_ids.len()
        );

        let path = format!("attendance/{attendance_id}/students/bulk");
        execute(self.factory.post(&path).await.json(request)).await
    }

    pub async fn list_classes(&self, date: NaiveDate) -> Result<Vec<AttendanceClass>, ApiError> {
        debug!("fetching classes of {date}");

        let request = self
            .factory
            .get("attendance/classes")
            .await
            .query(&[("date", date.to_string())]);

        fetch(request).await
    }

    pub async fn record_attendance(
        &self,
        request: &RecordAttendanceRequest,
    ) -> Result<AttendanceRecord, ApiError> {
        debug!("recording attendance of class {}", request.class_id);

        fetch(self.factory.post("attendance/records").await.json(request)).await
    }
}

#[derive(Clone)]
pub struct AttendanceRepository {
    api: AttendanceApi,
}

impl AttendanceRepository {
    pub fn new(api: AttendanceApi) -> Self {
        Self { api }
    }

    pub async fn get_attendances_by_date_range(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Outcome<Vec<Attendance>> {
        self.api
            .get_attendances_by_date_range(start_date, end_date)
            .await
            .into()
    }

    pub async fn get_attendance_with_students(
        &self,
        attendance_id: i64,
    ) -> Outcome<AttendanceWithStudents> {
        self.api.get_attendance_with_students(attendance_id).await.into()
    }

    pub async fn create_attendance(
        &self,
        class_date: NaiveDate,
        notes: Option<String>,
    ) -> Outcome<Attendance> {
        let request = CreateAttendanceRequest { class_date, notes };
        self.api.create_attendance(&request).await.into()
    }

    pub async fn add_students_to_attendance(
        &self,
        attendance_id: i64,
        student_ids: Vec<i64>,
    ) -> Outcome<()> {
        let request = AddStudentsRequest { student_ids };
        self.api
            .add_students_to_attendance(attendance_id, &request)
            .await
            .into()
    }

    pub async fn list_classes(&self, date: NaiveDate) -> Outcome<Vec<AttendanceClass>> {
        self.api.list_classes(date).await.into()
    }

    pub async fn record_attendance(
        &self,
        class_id: String,
        student_ids: Vec<String>,
        date: String,
    ) -> Outcome<AttendanceRecord> {
        let request = RecordAttendanceRequest {
            class_id,
            student_ids,
            date,
        };
        self.api.record_attendance(&request).await.into()
    }
}
