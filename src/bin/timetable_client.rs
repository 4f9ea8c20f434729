use lib::forms::{
    api_client::HttpApi, console_ui::ConsoleUi, controller::FormController, helpers::get_config,
    models::Args, run_tool::run,
};

use clap::Parser;

#[tokio::main]
async fn main() {
    /* Setup logging */
    env_logger::builder()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .init();

    /* Get all the required resources */
    let args = Args::parse();
    let config = get_config(&args).unwrap();
    let api = HttpApi::from_config(&config).unwrap();
    let ui = ConsoleUi::from_command(&args.command);

    let mut controller = FormController::new(api, ui, &config.login_route);
    run(&mut controller, &args.command).await;

    println!("{}", controller.ui().summary());
}
