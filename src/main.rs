//! boostgram server entry point
//!
//! Port resolution order: `--port` argument, then the `PORT` environment
//! variable, then the config file, then 3000.

use boostgram::config::AppConfig;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

/// Get port override from the PORT environment variable
fn get_port_env() -> Option<u16> {
    std::env::var("PORT").ok().and_then(|p| p.parse().ok())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env);
    let _log_guard = boostgram::logging::init_logging(&app_config);

    tracing::info!("Starting boostgram API in {} mode", env);

    let port = get_port_override()
        .or_else(get_port_env)
        .unwrap_or(app_config.server.port);

    boostgram::gateway::run_server(&app_config.server.host, port).await
}
