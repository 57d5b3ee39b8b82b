pub mod attendance;
pub mod auth;
pub mod domain;
pub mod home;
pub mod local_datetime;
pub mod students;
