//! Terminal rendition of the page, used by the binary.
use std::collections::BTreeMap;

use log::info;

use super::{
    helpers::{format_schedule_entry, CREATE_TIMETABLE_SECTION, SUBMIT_IDLE_LABEL},
    models::{api_model::ScheduleEntry, Command},
    ui_surface::{Field, Form, Region, UiSurface},
};

/// Content sections of the page, in navigation bar order.
pub const CONTENT_SECTIONS: [&str; 3] = [CREATE_TIMETABLE_SECTION, "view-timetable", "settings"];

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleUi {
    pub fields: BTreeMap<Field, String>,
    pub errors: BTreeMap<Form, String>,
    pub regions: BTreeMap<Region, bool>,
    pub sections: BTreeMap<String, bool>,
    pub alerts: Vec<String>,
    pub location: Option<String>,
    pub submit_enabled: bool,
    pub submit_label: String,
}

impl Default for ConsoleUi {
    fn default() -> Self {
        ConsoleUi {
            fields: BTreeMap::new(),
            errors: BTreeMap::new(),
            regions: BTreeMap::from([
                (Region::LoginContainer, true),
                (Region::Navbar, false),
                (Region::MainContentArea, false),
            ]),
            sections: CONTENT_SECTIONS
                .iter()
                .map(|id| (id.to_string(), false))
                .collect(),
            alerts: Vec::new(),
            location: None,
            submit_enabled: true,
            submit_label: SUBMIT_IDLE_LABEL.to_owned(),
        }
    }
}

impl ConsoleUi {
    /// Fills the form that `command` submits, the way a user would type it in.
    pub fn from_command(command: &Command) -> Self {
        let mut ui = ConsoleUi::default();
        let filled: Vec<(Field, &String)> = match command {
            Command::Login { username, password } => vec![
                (Field::LoginUsername, username),
                (Field::LoginPassword, password),
            ],
            Command::Register {
                username,
                password,
                confirm_password,
            } => vec![
                (Field::RegisterUsername, username),
                (Field::RegisterPassword, password),
                (Field::RegisterConfirmPassword, confirm_password),
            ],
            Command::CreateSchedule {
                name,
                class_days,
                morning_periods,
                afternoon_periods,
            } => vec![
                (Field::TimetableName, name),
                (Field::ClassDays, class_days),
                (Field::MorningPeriods, morning_periods),
                (Field::AfternoonPeriods, afternoon_periods),
            ],
            Command::Navigate { .. } => Vec::new(),
        };
        for (field, value) in filled {
            ui.fields.insert(field, value.to_owned());
        }
        ui
    }

    pub fn visible_sections(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|(_, visible)| **visible)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /* final picture of the page, printed after the command ran */
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        for (region, visible) in self.regions.iter() {
            lines.push(format!("{:?}: {}", region, if *visible { "shown" } else { "hidden" }));
        }
        lines.push(format!("Sections shown: {:?}", self.visible_sections()));
        for (form, text) in self.errors.iter().filter(|(_, text)| !text.is_empty()) {
            lines.push(format!("{:?} error: {}", form, text));
        }
        if let Some(location) = &self.location {
            lines.push(format!("Navigated to {}", location));
        }
        lines.join("\n")
    }
}

impl UiSurface for ConsoleUi {
    fn field_value(&self, field: Field) -> Option<String> {
        self.fields.get(&field).cloned()
    }

    fn set_error_text(&mut self, form: Form, text: &str) {
        if !text.is_empty() {
            info!("{:?} form says: {}", form, text);
        }
        self.errors.insert(form, text.to_owned());
    }

    fn set_region_visible(&mut self, region: Region, visible: bool) {
        self.regions.insert(region, visible);
    }

    fn content_sections(&self) -> Vec<String> {
        self.sections.keys().cloned().collect()
    }

    fn set_section_visible(&mut self, id: &str, visible: bool) {
        if let Some(shown) = self.sections.get_mut(id) {
            *shown = visible;
        }
    }

    fn alert(&mut self, message: &str) {
        println!("{}", message);
        self.alerts.push(message.to_owned());
    }

    fn redirect(&mut self, route: &str) {
        info!("Redirecting to {}", route);
        self.location = Some(route.to_owned());
    }

    fn set_submit_state(&mut self, enabled: bool, label: &str) {
        self.submit_enabled = enabled;
        self.submit_label = label.to_owned();
    }

    fn show_schedule(&mut self, entries: &[ScheduleEntry]) {
        for entry in entries.iter() {
            println!("{}", format_schedule_entry(entry));
        }
    }
}
