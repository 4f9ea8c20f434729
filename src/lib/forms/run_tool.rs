use log::info;

use super::{
    api_client::ApiClient,
    controller::FormController,
    models::Command,
    ui_surface::{NavClick, UiSurface},
};

/// Replays one user interaction against the controller.
pub async fn run<A: ApiClient, U: UiSurface>(
    controller: &mut FormController<A, U>,
    command: &Command,
) -> () {
    info!("Running {:?}", command);
    match command {
        Command::Login { .. } => controller.handle_login().await,
        Command::Register { .. } => controller.handle_register().await,
        Command::CreateSchedule { .. } => controller.handle_schedule_create().await,
        Command::Navigate { target } => controller.on_nav_bar_click(&NavClick::link(target)),
    }
    info!("Page is now {:?}", controller.view_state());
}
