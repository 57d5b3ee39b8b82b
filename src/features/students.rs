use log::debug;

use crate::core::common::{
    transport::{execute, fetch, ApiError},
    HttpClientFactory, Outcome,
};

pub mod models;

#[cfg(test)]
mod unittests;

use models::{
    CreateStudentProgressRequest, Student, StudentProgress, StudentProgressByLevel,
    StudentProgressDetail, StudentWithLevel, StudentWithLevelResponse,
    UpdateStudentProgressRequest,
};

#[derive(Clone)]
pub struct StudentsApi {
    factory: HttpClientFactory,
}

impl StudentsApi {
    pub fn new(factory: HttpClientFactory) -> Self {
        Self { factory }
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        debug!("fetching students");

        fetch(self.factory.get("students").await).await
    }

    pub async fn get_active_students(&self) -> Result<Vec<StudentWithLevelResponse>, ApiError> {
        debug!("fetching active students");

        fetch(self.factory.get("students/active").await).await
    }

    pub async fn get_student_progress(
        &self,
        student_id: i64,
    ) -> Result<StudentProgressByLevel, ApiError> {
        debug!("fetching progress of student {student_id}");

        let path = format!("student-progress/student/{student_id}");
        fetch(self.factory.get(&path).await).await
    }

    pub async fn create_student_progress(
        &self,
        request: &CreateStudentProgressRequest,
    ) -> Result<StudentProgress, ApiError> {
        debug!("creating progress of student {}", request.student_id);

        fetch(self.factory.post("student-progress").await.json(request)).await
    }

    pub async fn update_student_progress(
        &self,
        progress_id: i64,
        request: &UpdateStudentProgressRequest,
    ) -> Result<(), ApiError> {
        debug!("updating progress {progress_id}");

        let path = format!("student-progress/{progress_id}");
        execute(self.factory.put(&path).await.json(request)).await
    }
}

#[derive(Clone)]
pub struct StudentsRepository {
    api: StudentsApi,
}

impl StudentsRepository {
    pub fn new(api: StudentsApi) -> Self {
        Self { api }
    }

    pub async fn list_students(&self) -> Outcome<Vec<Student>> {
        self.api.list_students().await.into()
    }

    pub async fn get_active_students(&self) -> Outcome<Vec<StudentWithLevel>> {
        Outcome::from(self.api.get_active_students().await)
            .map(|items| items.into_iter().map(StudentWithLevel::from).collect())
    }

    pub async fn get_student_progress(
        &self,
        student_id: i64,
        student_name: &str,
    ) -> Outcome<StudentProgressDetail> {
        Outcome::from(self.api.get_student_progress(student_id).await).map(|progress| {
            StudentProgressDetail::new(student_id, student_name.to_string(), progress)
        })
    }

    pub async fn create_student_progress(
        &self,
        request: CreateStudentProgressRequest,
    ) -> Outcome<StudentProgress> {
        self.api.create_student_progress(&request).await.into()
    }

    pub async fn update_student_progress(
        &self,
        progress_id: i64,
        request: UpdateStudentProgressRequest,
    ) -> Outcome<()> {
        self.api.update_student_progress(progress_id, &request).await.into()
    }
}
