//! Module with request and response bodies compatible with the scheduling server's REST API
use serde::{Deserialize, Serialize};

/// Body of `/login` and `/register`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimetableConfig {
    pub class_duration: u32,
    pub break_duration: u32,
    pub morning_start: String,
    pub afternoon_start: String,
    pub evening_start: Option<String>,
    pub periods_per_morning: i64,
    pub periods_per_afternoon: i64,
    pub periods_per_evening: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScheduleConfig {
    pub name: String,
    pub weekdays: Vec<Weekday>,
    pub timetable: TimetableConfig,
    pub allow_split_class: bool,
    pub allow_mixed_grade: bool,
    pub max_consecutive_same_subject: u32,
    pub min_subject_interval: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClassInfo {
    pub id: String,
    pub grade: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TeacherInfo {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClassroomInfo {
    pub id: String,
    pub name: String,
}

/// Body of `/create_schedule`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScheduleRequest {
    pub schedule_config: ScheduleConfig,
    pub classes: Vec<ClassInfo>,
    pub teachers: Vec<TeacherInfo>,
    pub classrooms: Vec<ClassroomInfo>,
}

/// The user the server reports back after a successful login.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserInfo {
    pub id: u64,
    pub username: String,
}

/// One lesson of a generated timetable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub class_id: String,
    pub class_name: String,
    pub subject: String,
    pub teacher_id: String,
    pub teacher_name: String,
    pub weekday: String,
    pub period: u32,
    pub time: String,
}

/// Raw `{success, message|errors}` envelope shared by every endpoint.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
    #[serde(default)]
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub schedule: Option<Vec<ScheduleEntry>>,
}

/// Envelope after decoding: either the server accepted the request or it
/// rejected it. `/login` and `/register` explain a rejection in `message`,
/// `/create_schedule` in `errors`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome {
    Accepted {
        message: Option<String>,
        user: Option<UserInfo>,
        schedule: Vec<ScheduleEntry>,
    },
    Rejected {
        message: Option<String>,
        errors: Option<Vec<String>>,
    },
}

impl From<ResponseEnvelope> for ApiOutcome {
    fn from(envelope: ResponseEnvelope) -> Self {
        if envelope.success {
            ApiOutcome::Accepted {
                message: envelope.message,
                user: envelope.user,
                schedule: envelope.schedule.unwrap_or_default(),
            }
        } else {
            ApiOutcome::Rejected {
                message: envelope.message,
                errors: envelope.errors,
            }
        }
    }
}
