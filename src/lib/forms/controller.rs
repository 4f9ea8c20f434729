use log::{debug, error, info, warn};

use super::{
    api_client::ApiClient,
    helpers::{
        build_schedule_request, format_schedule_rejection, rejection_message, validate_login,
        validate_registration, CREATE_TIMETABLE_SECTION, LOGIN_REJECTED, LOGIN_REQUEST_FAILED,
        REGISTER_REJECTED, REGISTER_REQUEST_FAILED, REGISTER_SUCCEEDED, SCHEDULE_REQUEST_FAILED,
        SCHEDULE_SUCCEEDED, SUBMIT_IDLE_LABEL, SUBMIT_WORKING_LABEL,
    },
    models::api_model::ApiOutcome,
    ui_surface::{Field, Form, NavClick, Region, UiSurface, ViewState},
};

/// Mediates between the page, the user and the scheduling server.
/// Every failure is handled here; none of the handlers return an error.
pub struct FormController<A: ApiClient, U: UiSurface> {
    api: A,
    ui: U,
    login_route: String,
    state: ViewState,
}

impl<A: ApiClient, U: UiSurface> FormController<A, U> {
    pub fn new(api: A, ui: U, login_route: &str) -> Self {
        FormController {
            api,
            ui,
            login_route: login_route.to_owned(),
            state: ViewState::Anonymous,
        }
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn into_parts(self) -> (A, U) {
        (self.api, self.ui)
    }

    fn field(&self, field: Field) -> String {
        self.ui.field_value(field).unwrap_or_default()
    }

    pub async fn handle_login(&mut self) {
        self.ui.set_error_text(Form::Login, "");
        let credentials = match validate_login(
            &self.field(Field::LoginUsername),
            &self.field(Field::LoginPassword),
        ) {
            Ok(credentials) => credentials,
            Err(message) => {
                self.ui.set_error_text(Form::Login, message);
                return;
            }
        };

        match self.api.login(&credentials).await {
            Ok(ApiOutcome::Accepted { message, user, .. }) => {
                info!("Logged in: {}", message.unwrap_or_default());
                if let Some(user) = user {
                    debug!("Server knows us as {} (#{})", user.username, user.id);
                }
                self.ui.set_region_visible(Region::LoginContainer, false);
                self.ui.set_region_visible(Region::Navbar, true);
                self.ui.set_region_visible(Region::MainContentArea, true);
                self.state = ViewState::AuthenticatedIdle;
                self.navigate(CREATE_TIMETABLE_SECTION);
            }
            Ok(ApiOutcome::Rejected { message, .. }) => {
                let text = rejection_message(message.as_deref(), LOGIN_REJECTED);
                self.ui.set_error_text(Form::Login, text);
            }
            Err(err) => {
                error!("Login request failed: {}", err);
                let text = err.server_message().unwrap_or(LOGIN_REQUEST_FAILED);
                self.ui.set_error_text(Form::Login, text);
            }
        }
    }

    pub async fn handle_register(&mut self) {
        self.ui.set_error_text(Form::Register, "");
        let credentials = match validate_registration(
            &self.field(Field::RegisterUsername),
            &self.field(Field::RegisterPassword),
            &self.field(Field::RegisterConfirmPassword),
        ) {
            Ok(credentials) => credentials,
            Err(message) => {
                self.ui.set_error_text(Form::Register, message);
                return;
            }
        };

        match self.api.register(&credentials).await {
            Ok(ApiOutcome::Accepted { .. }) => {
                info!("Registered {}", credentials.username);
                self.ui.alert(REGISTER_SUCCEEDED);
                self.ui.redirect(&self.login_route);
            }
            Ok(ApiOutcome::Rejected { message, .. }) => {
                let text = rejection_message(message.as_deref(), REGISTER_REJECTED);
                self.ui.set_error_text(Form::Register, text);
            }
            Err(err) => {
                error!("Register request failed: {}", err);
                let text = err.server_message().unwrap_or(REGISTER_REQUEST_FAILED);
                self.ui.set_error_text(Form::Register, text);
            }
        }
    }

    pub async fn handle_schedule_create(&mut self) {
        let request = build_schedule_request(
            self.ui.field_value(Field::TimetableName).as_deref(),
            self.ui.field_value(Field::ClassDays).as_deref(),
            self.ui.field_value(Field::MorningPeriods).as_deref(),
            self.ui.field_value(Field::AfternoonPeriods).as_deref(),
        );
        debug!("Schedule request: {:?}", request);

        self.ui.set_submit_state(false, SUBMIT_WORKING_LABEL);
        let result = self.api.create_schedule(&request).await;

        /* no early returns below: the submit button is restored on every path */
        match result {
            Ok(ApiOutcome::Accepted { schedule, .. }) => {
                info!("Timetable generated with {} entries", schedule.len());
                self.ui.alert(SCHEDULE_SUCCEEDED);
                if !schedule.is_empty() {
                    self.ui.show_schedule(&schedule);
                }
            }
            Ok(ApiOutcome::Rejected { errors, .. }) => {
                if errors.is_none() {
                    error!("Schedule rejected without an errors list");
                }
                self.ui.alert(&format_schedule_rejection(errors.as_deref()));
            }
            Err(err) => {
                error!("Schedule request failed: {}", err);
                self.ui.alert(SCHEDULE_REQUEST_FAILED);
            }
        }
        self.ui.set_submit_state(true, SUBMIT_IDLE_LABEL);
    }

    /// Hides every content section and shows the one with `target_id`.
    /// An unknown id leaves all sections hidden.
    /// Before login the page stays `Anonymous` whatever section is shown.
    pub fn navigate(&mut self, target_id: &str) {
        let sections = self.ui.content_sections();
        for section in sections.iter() {
            self.ui.set_section_visible(section, false);
        }
        let found = sections.iter().any(|section| section == target_id);
        if found {
            self.ui.set_section_visible(target_id, true);
        } else {
            warn!("No content section with id {}", target_id);
        }
        if self.state != ViewState::Anonymous {
            self.state = if found {
                ViewState::Viewing(target_id.to_owned())
            } else {
                ViewState::AuthenticatedIdle
            };
        }
    }

    pub fn on_nav_bar_click(&mut self, click: &NavClick) {
        if let Some(target) = click.target() {
            let target = target.to_owned();
            self.navigate(&target);
        }
    }
}
