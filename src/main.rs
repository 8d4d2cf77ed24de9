use rollcall::config::Config;
use rollcall::startup;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    std_logger::Config::logfmt().init();

    let config = Config::get().expect("ERROR: Unable to get the Config.");
    let listener = TcpListener::bind(config.application.address())
        .await
        .expect("Failed to bind address.");

    if let Err(error) = startup::create_web_server(config, listener).await {
        log::error!("{error}");
        std::process::exit(1);
    }
}
