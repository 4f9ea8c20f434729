use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Deserialize;

pub mod api_model;

/// A model for describing ARGS of the tool.
/// Consists of:
/// 1. Path to config.json, that contains the API address and request timeout.
/// 2. The form that should be submitted (or the section to open).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, value_name = "FILE", default_value = "config.json")]
    pub config_json_path: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

/// One user interaction with the page.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Submit the login form
    Login {
        #[arg(long, default_value = "")]
        username: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Submit the registration form
    Register {
        #[arg(long, default_value = "")]
        username: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        confirm_password: String,
    },
    /// Submit the timetable creation form
    CreateSchedule {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "5")]
        class_days: String,
        #[arg(long, default_value = "")]
        morning_periods: String,
        #[arg(long, default_value = "")]
        afternoon_periods: String,
    },
    /// Click a navigation bar link
    Navigate {
        target: String,
    },
}

/// A model for describing configuration of the tool.
/// Consists of:
/// 1. Base URL of the scheduling API
/// 2. Upper bound for a single request, in seconds
/// 3. Route the browser is sent to after a successful registration
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_login_route")]
    pub login_route: String,
}

fn default_api_base_url() -> String {
    "http://192.168.43.34:5000".to_owned()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_login_route() -> String {
    "/login".to_owned()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            login_route: default_login_route(),
        }
    }
}
