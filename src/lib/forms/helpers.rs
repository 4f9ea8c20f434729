use std::error::Error;

use figment::{
    providers::{Env, Format, Json},
    Figment,
};
use log::{debug, info};

use crate::forms::models::{
    api_model::{
        ApiOutcome, ClassInfo, ClassroomInfo, Credentials, ResponseEnvelope, ScheduleConfig,
        ScheduleEntry, ScheduleRequest, TeacherInfo, TimetableConfig, Weekday,
    },
    Args, Config,
};

/* Texts shown to the user. The page has a single locale. */
pub const MISSING_CREDENTIALS: &str = "请输入用户名和密码。";
pub const PASSWORD_MISMATCH: &str = "两次密码输入不一致！";
pub const LOGIN_REJECTED: &str = "登录失败，请检查用户名或密码。";
pub const LOGIN_REQUEST_FAILED: &str = "登录请求失败，请检查网络连接。";
pub const REGISTER_REJECTED: &str = "注册失败，请检查用户名或密码。";
pub const REGISTER_REQUEST_FAILED: &str = "注册请求失败，请检查网络连接。";
pub const REGISTER_SUCCEEDED: &str = "注册成功！";
pub const SCHEDULE_SUCCEEDED: &str = "课表生成成功！";
pub const SCHEDULE_REJECTED_PREFIX: &str = "课表生成失败：";
pub const SCHEDULE_REQUEST_FAILED: &str = "课表生成失败，请稍后重试。";
pub const SUBMIT_IDLE_LABEL: &str = "生成课表";
pub const SUBMIT_WORKING_LABEL: &str = "正在生成课表...";
pub const DEFAULT_TIMETABLE_NAME: &str = "未命名课表";

/// Section shown right after a successful login.
pub const CREATE_TIMETABLE_SECTION: &str = "create-timetable";

pub const DEFAULT_PERIODS: i64 = 4;

pub fn get_config(args: &Args) -> Result<Config, Box<dyn Error>> {
    info!(
        "Reading config.json from {}",
        std::path::absolute(&args.config_json_path)?.display()
    );
    let config: Config = Figment::new()
        .merge(Json::file(&args.config_json_path))
        .merge(Env::prefixed("TIMETABLE_"))
        .extract()?;
    debug!("Using config {:?}", config);
    Ok(config)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/* login form: both fields are required */
pub fn validate_login(username: &str, password: &str) -> Result<Credentials, &'static str> {
    if is_blank(username) || is_blank(password) {
        return Err(MISSING_CREDENTIALS);
    }
    Ok(Credentials {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

/* registration form: presence first, then equality, confirmation is dropped afterwards */
pub fn validate_registration(
    username: &str,
    password: &str,
    confirm_password: &str,
) -> Result<Credentials, &'static str> {
    if is_blank(username) || is_blank(password) || is_blank(confirm_password) {
        return Err(MISSING_CREDENTIALS);
    }
    if password != confirm_password {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(Credentials {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

/// Maps the "class days" selector to the weekdays of the timetable.
/// Anything but "6" or "7" means a five day week.
pub fn weekdays_for(class_days: &str) -> Vec<Weekday> {
    let count = match class_days {
        "6" => 6,
        "7" => 7,
        _ => 5,
    };
    Weekday::ALL[..count].to_vec()
}

/// Reads the leading, optionally signed, decimal integer of a period count field.
/// Empty, non-numeric and zero values fall back to [`DEFAULT_PERIODS`].
pub fn parse_period_count(raw: Option<&str>) -> i64 {
    let value = raw.unwrap_or_default().trim_start();
    let (negative, unsigned) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    let count = unsigned
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit))
        });
    match count {
        0 => DEFAULT_PERIODS,
        count if negative => -count,
        count => count,
    }
}

pub fn timetable_name(raw: Option<&str>) -> String {
    match raw {
        Some(name) if !is_blank(name) => name.to_owned(),
        _ => DEFAULT_TIMETABLE_NAME.to_owned(),
    }
}

/* the server needs at least one class, teacher and classroom; the form does not collect them yet */
pub fn sample_classes() -> Vec<ClassInfo> {
    vec![ClassInfo {
        id: "Class001".to_owned(),
        grade: "1".to_owned(),
        name: "Class A".to_owned(),
    }]
}

pub fn sample_teachers() -> Vec<TeacherInfo> {
    vec![TeacherInfo {
        id: "Teacher001".to_owned(),
        name: "Mr. Smith".to_owned(),
    }]
}

pub fn sample_classrooms() -> Vec<ClassroomInfo> {
    vec![ClassroomInfo {
        id: "Room001".to_owned(),
        name: "Room 101".to_owned(),
    }]
}

pub fn build_schedule_request(
    name: Option<&str>,
    class_days: Option<&str>,
    morning_periods: Option<&str>,
    afternoon_periods: Option<&str>,
) -> ScheduleRequest {
    let timetable = TimetableConfig {
        class_duration: 45,
        break_duration: 10,
        morning_start: "08:00:00".to_owned(),
        afternoon_start: "14:00:00".to_owned(),
        evening_start: None,
        periods_per_morning: parse_period_count(morning_periods),
        periods_per_afternoon: parse_period_count(afternoon_periods),
        periods_per_evening: 0,
    };
    ScheduleRequest {
        schedule_config: ScheduleConfig {
            name: timetable_name(name),
            weekdays: weekdays_for(class_days.unwrap_or_default()),
            timetable,
            allow_split_class: false,
            allow_mixed_grade: false,
            max_consecutive_same_subject: 2,
            min_subject_interval: 1,
        },
        classes: sample_classes(),
        teachers: sample_teachers(),
        classrooms: sample_classrooms(),
    }
}

pub fn decode_envelope(body: &str) -> Result<ApiOutcome, serde_json::Error> {
    let envelope: ResponseEnvelope = serde_json::from_str(body)?;
    Ok(envelope.into())
}

/* error responses may still carry a readable reason in `message` */
pub fn server_message_from_body(body: &str) -> Option<String> {
    let envelope: ResponseEnvelope = serde_json::from_str(body).ok()?;
    envelope.message.filter(|message| !message.is_empty())
}

/// The server's own reason for a rejected login or registration, else `fallback`.
pub fn rejection_message<'a>(message: Option<&'a str>, fallback: &'a str) -> &'a str {
    message.filter(|message| !message.is_empty()).unwrap_or(fallback)
}

/// Alert text for a rejected timetable request.
/// A rejection without an `errors` list is not a readable answer and gets the
/// same text as a failed request.
pub fn format_schedule_rejection(errors: Option<&[String]>) -> String {
    match errors {
        Some(errors) => format!("{}{}", SCHEDULE_REJECTED_PREFIX, errors.join("\n")),
        None => SCHEDULE_REQUEST_FAILED.to_owned(),
    }
}

pub fn format_schedule_entry(entry: &ScheduleEntry) -> String {
    format!(
        "{} {} #{} ({}): {} - {}",
        entry.class_name, entry.weekday, entry.period, entry.time, entry.subject, entry.teacher_name
    )
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
