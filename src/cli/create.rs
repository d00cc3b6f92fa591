use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{config, error, launcher, management::TokenProvider, spotify, success};

pub async fn create(name: String, songs: String, json: bool) {
    let api_url = config::spotify_apiurl();
    let mut tokens = TokenProvider::new();

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Building playlist '{}'...", name));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = spotify::playlist::build(&api_url, &mut tokens, &name, &songs).await;
    pb.finish_and_clear();

    match result {
        Ok(report) => {
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(out) => println!("{}", out),
                    Err(e) => error!("Failed to serialize report: {}", e),
                }
            } else {
                success!("{}", report.message);
            }

            launcher::open_spotify_client();
        }
        Err(e) => error!("{}", e),
    }
}
