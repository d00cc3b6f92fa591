use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{config, error, info, management::TokenProvider, spotify, types::PlaylistTableRow};

pub async fn playlists(json: bool) {
    let api_url = config::spotify_apiurl();
    let mut tokens = TokenProvider::new();

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = spotify::playlist::list_names(&api_url, &mut tokens).await;
    pb.finish_and_clear();

    match result {
        Ok(names) => {
            if json {
                match serde_json::to_string_pretty(&names) {
                    Ok(out) => println!("{}", out),
                    Err(e) => error!("Failed to serialize playlists: {}", e),
                }
                return;
            }

            if names.is_empty() {
                info!("No playlists found.");
                return;
            }

            let table_rows: Vec<PlaylistTableRow> = names
                .into_iter()
                .map(|name| PlaylistTableRow { name })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
        }
        Err(e) => error!("{}", e),
    }
}
