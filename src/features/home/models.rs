use serde::{Deserialize, Serialize};

/// Dashboard shown after login.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HomeData {
    pub user_name: String,
    pub greeting: String,
    pub upcoming_class: Option<UpcomingClass>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingClass {
    pub name: String,
    pub time: String,
    pub registered_students: i32,
}
