use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use client_core::{
    config::normalize_api_url, load_settings, ClientSettings, FestPostBackend, HttpBackend,
    ViewController,
};
use shared::domain::{AspectRatio, ImageId, Style};

mod render;

use render::{render_festivals, render_view};

#[derive(Parser, Debug)]
#[command(name = "festpost", about = "AI-powered festival images for your business")]
struct Cli {
    #[arg(long, global = true)]
    api_url: Option<String>,
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
    #[arg(long, global = true)]
    download_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the festivals the backend offers.
    Festivals,
    /// Show the most recent generations.
    History,
    /// Generate a festival image for a business.
    Generate {
        #[arg(long)]
        business_name: String,
        #[arg(long, default_value = "")]
        tagline: String,
        /// Defaults to the first festival the backend lists.
        #[arg(long)]
        festival: Option<String>,
        #[arg(long, default_value = "professional")]
        style: Style,
        #[arg(long, default_value = "1:1")]
        aspect_ratio: AspectRatio,
        #[arg(long)]
        download: bool,
    },
    /// Show one stored generation.
    Show {
        image_id: String,
        #[arg(long)]
        download: bool,
    },
    /// Save an image as `<name>.png` in the download directory.
    Download {
        #[arg(long)]
        url: String,
        #[arg(long)]
        name: Option<String>,
    },
    Health,
}

fn resolve_settings(cli: &Cli) -> Result<ClientSettings> {
    let mut settings = load_settings()?;
    if let Some(api_url) = &cli.api_url {
        settings.api_url = normalize_api_url(api_url)?;
    }
    if let Some(secs) = cli.timeout_secs {
        if secs == 0 {
            bail!("--timeout-secs must be at least 1");
        }
        settings.request_timeout_secs = secs;
    }
    if let Some(dir) = &cli.download_dir {
        settings.download_dir = dir.clone();
    }
    Ok(settings)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    let settings = resolve_settings(&cli)?;
    tracing::debug!(api_url = %settings.api_url, "resolved settings");

    let backend = Arc::new(HttpBackend::new(&settings)?);
    let controller = ViewController::new(backend.clone(), settings.download_dir.clone());

    match cli.command {
        Command::Festivals => {
            controller.load_festivals().await;
            let state = controller.snapshot().await;
            print!(
                "{}",
                render_festivals(&state.festivals, &state.request.festival)
            );
        }
        Command::History => {
            controller.refresh_history().await;
            print!("{}", render_view(&controller.view().await));
        }
        Command::Generate {
            business_name,
            tagline,
            festival,
            style,
            aspect_ratio,
            download,
        } => {
            controller.initialize().await;
            controller.set_business_name(business_name).await;
            controller.set_tagline(tagline).await;
            if let Some(festival) = festival {
                controller.select_festival(festival).await;
            }
            controller.set_style(style).await;
            controller.set_aspect_ratio(aspect_ratio).await;

            let outcome = controller.submit().await;
            print!("{}", render_view(&controller.view().await));
            if let Err(err) = outcome {
                bail!("generation failed: {err}");
            }
            if download {
                match controller.download_current().await {
                    Some(path) => println!("Saved {}", path.display()),
                    None => bail!("download failed"),
                }
            }
        }
        Command::Show { image_id, download } => {
            let entry = controller.open_image(&ImageId(image_id)).await?;
            print!("{}", render_view(&controller.view().await));
            if download {
                let name = format!("{}-{}", entry.business_name, entry.festival);
                match controller.download(&entry.url, Some(&name)).await {
                    Some(path) => println!("Saved {}", path.display()),
                    None => bail!("download failed"),
                }
            }
        }
        Command::Download { url, name } => {
            match controller.download(&url, name.as_deref()).await {
                Some(path) => println!("Saved {}", path.display()),
                None => bail!("download failed"),
            }
        }
        Command::Health => {
            let health = backend.health().await?;
            println!("{} is {}", settings.api_url, health.status);
        }
    }

    Ok(())
}
