use std::{sync::Arc, time::Duration};

use log::{error, info};
use serde::Serialize;
use serde_json::json;

use crate::features::{
    attendance::{AttendanceApi, AttendanceRepository},
    auth::{models::Credentials, AuthApi, LoginRepository},
    home::{HomeApi, HomeRepository},
    students::{StudentsApi, StudentsRepository},
};

use super::{
    cli::Command,
    common::{cancellable, ApiError, CancellationToken, HttpClientFactory, Outcome},
    configuration::Configuration,
    session::{
        AuthenticationHandler, FileSystemStore, KeyValueStore, SessionManager, TokenManager,
    },
    telemetry::{LogTelemetrySink, TelemetrySink},
};


/// Everything a command needs, wired once per process.
#[derive(Clone)]
pub struct Services {
    pub tokens: TokenManager,
    pub session: SessionManager,
    pub auth_handler: AuthenticationHandler,
    pub home: HomeRepository,
    pub students: StudentsRepository,
    pub attendance: AttendanceRepository,
}

impl Services {
    pub fn new(
        api_url: &str,
        timeout: Duration,
        store: Arc<dyn KeyValueStore>,
        telemetry: Arc<dyn TelemetrySink>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let tokens = TokenManager::new(store);
        let factory = HttpClientFactory::new(api_url, timeout, tokens.clone())?;

        let login_repository = LoginRepository::new(AuthApi::new(factory.clone()));

        Ok(Self {
            session: SessionManager::new(login_repository, tokens.clone(), telemetry.clone()),
            auth_handler: AuthenticationHandler::new(tokens.clone(), telemetry),
            home: HomeRepository::new(HomeApi::new(factory.clone())),
            students: StudentsRepository::new(StudentsApi::new(factory.clone())),
            attendance: AttendanceRepository::new(AttendanceApi::new(factory)),
            tokens,
        })
    }
}

/// ### Assemble the services
/// Builds the token store in the data directory and every repository on top
/// of a single HTTP client bound to the configured environment.
/// ## Errors
/// * if the HTTP client cannot be built
pub fn assemble(conf: &Configuration) -> Result<Services, Box<dyn std::error::Error + Send + Sync>> {
    let api_url = conf.base_url();

    info!("using api url: {api_url}");

    Services::new(
        &api_url,
        conf.timeout(),
        Arc::new(FileSystemStore::new(conf.data_directory())),
        Arc::new(LogTelemetrySink::new()),
    )
}

/// ### Run a command
/// Executes `command` against the backend and renders its result as pretty JSON.
/// ## Errors
/// * the `ApiError` carrying the failure kind when the operation fails
/// * a serialization error if the result cannot be rendered
pub async fn run(
    services: &Services,
    command: Command,
    cancel: &CancellationToken,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    match command {
        Command::Login { username, password } => {
            let outcome = cancellable(
                cancel,
                services.session.login(Credentials::new(username, password)),
            )
            .await;
            // a 401 here is bad credentials, not an expired session
            present(outcome)
        }
        Command::Logout => {
            let outcome = services.session.logout().await;
            render(services, outcome.map(|_| json!({ "session": "anonymous" }))).await
        }
        Command::Status => {
            let state = services.session.state().await;
            render(services, Outcome::Success(json!({ "session": state }))).await
        }
        Command::Home => {
            let outcome = cancellable(cancel, services.home.get_home_data()).await;
            render(services, outcome).await
        }
        Command::Students { active: true } => {
            let outcome = cancellable(cancel, services.students.get_active_students()).await;
            render(services, outcome).await
        }
        Command::Students { active: false } => {
            let outcome = cancellable(cancel, services.students.list_students()).await;
            render(services, outcome).await
        }
        Command::Progress {
            student_id,
            student_name,
        } => {
            let outcome = cancellable(
                cancel,
                services
                    .students
                    .get_student_progress(student_id, &student_name),
            )
            .await;
            render(services, outcome).await
        }
        Command::Attendances { start, end } => {
            let outcome = cancellable(
                cancel,
                services.attendance.get_attendances_by_date_range(start, end),
            )
            .await;
            render(services, outcome).await
        }
        Command::Attendance { id } => {
            let outcome =
                cancellable(cancel, services.attendance.get_attendance_with_students(id)).await;
            render(services, outcome).await
        }
        Command::Classes { date } => {
            let outcome = cancellable(cancel, services.attendance.list_classes(date)).await;
            render(services, outcome).await
        }
        Command::CreateAttendance { date, notes } => {
            let outcome =
                cancellable(cancel, services.attendance.create_attendance(date, notes)).await;
            render(services, outcome).await
        }
        Command::AddStudents { id, student_ids } => {
            let count = student_ids.len();
            let outcome = cancellable(
                cancel,
                services.attendance.add_students_to_attendance(id, student_ids),
            )
            .await;
            render(
                services,
                outcome.map(|_| json!({ "attendanceId": id, "added": count })),
            )
            .await
        }
    }
}

async fn render<T: Serialize>(
    services: &Services,
    outcome: Outcome<T>,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    if services.auth_handler.handle(&outcome).await {
        info!("session expired, run login again");
    }

    present(outcome)
}

fn present<T: Serialize>(outcome: Outcome<T>) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    match outcome {
        Outcome::Success(value) => Ok(serde_json::to_string_pretty(&value)?),
        Outcome::Failure(kind) => {
            error!("command failed: {kind}");
            Err(Box::new(ApiError::new(kind, "command failed".to_string())))
        }
    }
}
