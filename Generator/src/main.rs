// main.rs

use std::io;

use tracing::{error, info, instrument, level_filters::LevelFilter};

const LOG_LEVEL: LevelFilter = LevelFilter::INFO;

#[instrument(skip_all)]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr, stdout only carries the manifest
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_writer(io::stderr)
        .with_max_level(LOG_LEVEL)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mpd = pcd_manifest::build();
    info!(
        "Generating manifest for {} adaptation sets",
        mpd.adaptation_sets().count()
    );

    // A render failure still produces the declaration with an empty body
    let body = match pcd_manifest::render(&mpd) {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to render manifest: {}", e);
            Vec::new()
        }
    };

    let stdout = io::stdout();
    pcd_manifest::emit(stdout.lock(), &body)?;
    Ok(())
}
