use super::models::api_model::ScheduleEntry;

/// Input fields the controller reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    LoginUsername,
    LoginPassword,
    RegisterUsername,
    RegisterPassword,
    RegisterConfirmPassword,
    TimetableName,
    ClassDays,
    MorningPeriods,
    AfternoonPeriods,
}

/// Forms that own an inline error line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Form {
    Login,
    Register,
}

/// Page regions toggled as a whole, outside of the content sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    LoginContainer,
    Navbar,
    MainContentArea,
}

/// A click that happened somewhere inside the navigation bar.
#[derive(Debug, Clone, PartialEq)]
pub struct NavClick {
    pub tag_name: String,
    pub data_target: Option<String>,
}

impl NavClick {
    pub fn link(target: &str) -> Self {
        NavClick {
            tag_name: "A".to_owned(),
            data_target: Some(target.to_owned()),
        }
    }

    /* only links that name a section navigate */
    pub fn target(&self) -> Option<&str> {
        if !self.tag_name.eq_ignore_ascii_case("a") {
            return None;
        }
        self.data_target.as_deref().filter(|target| !target.is_empty())
    }
}

/// Coarse state of what the page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Anonymous,
    AuthenticatedIdle,
    Viewing(String),
}

/// A trait, necessary for every entity that will display the forms.
/// The controller never reaches for a global document; it only sees this surface.
pub trait UiSurface {
    fn field_value(&self, field: Field) -> Option<String>;
    fn set_error_text(&mut self, form: Form, text: &str);
    fn set_region_visible(&mut self, region: Region, visible: bool);
    /// Ids of every element marked as a content section.
    fn content_sections(&self) -> Vec<String>;
    fn set_section_visible(&mut self, id: &str, visible: bool);
    /// Blocking acknowledgment.
    fn alert(&mut self, message: &str);
    /// Full page navigation.
    fn redirect(&mut self, route: &str);
    fn set_submit_state(&mut self, enabled: bool, label: &str);
    fn show_schedule(&mut self, entries: &[ScheduleEntry]);
}
