use chrono::NaiveDate;
use clap::{arg, command, Parser, Subcommand};

use super::environment::Environment;

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    #[arg(short, long)]
    pub configuration_file: Option<String>,
    #[arg(short, long)]
    pub verbosity: Option<log::LevelFilter>,
    /// overrides the environment of the configuration file
    #[arg(short, long, value_enum)]
    pub environment: Option<Environment>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// logs in and stores the session token
    Login { username: String, password: String },
    /// forgets the session token
    Logout,
    /// tells whether a session token is stored
    Status,
    /// shows the dashboard summary
    Home,
    /// lists students
    Students {
        /// only active students, with their level
        #[arg(long)]
        active: bool,
    },
    /// shows the requirement progress of a student
    Progress {
        student_id: i64,
        student_name: String,
    },
    /// lists attendances between two dates (YYYY-MM-DD)
    Attendances { start: NaiveDate, end: NaiveDate },
    /// shows an attendance and its students
    Attendance { id: i64 },
    /// lists the classes of a day (YYYY-MM-DD)
    Classes { date: NaiveDate },
    /// creates an attendance for a class date (YYYY-MM-DD)
    CreateAttendance {
        date: NaiveDate,
        #[arg(long)]
        notes: Option<String>,
    },
    /// adds students to an attendance
    AddStudents {
        id: i64,
        #[arg(required = true)]
        student_ids: Vec<i64>,
    },
}
