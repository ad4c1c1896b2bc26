// SPDX-License-Identifier: MPL-2.0

use std::path::PathBuf;

use clap::Parser;
use eyre::WrapErr;
use tracing_subscriber::prelude::*;
use xbg_config::{Config, FitMode};
use xbg_lib::{Options, UserContext, Wallpaper};

/// xbg - set the desktop background on X11, whatever the window manager
#[derive(Parser, Debug)]
#[command(name = "xbg")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Image to use as the background.
    #[arg(required_unless_present = "list_modes")]
    image: Option<PathBuf>,

    /// How to fit the image: center, zoom, stretch, fit or tile (and their synonyms).
    #[arg(short, long)]
    mode: Option<String>,

    /// Print what is being done.
    #[arg(short, long)]
    verbose: bool,

    /// Rotate the image to match monitor orientation.
    #[arg(long)]
    rotate: bool,

    /// Program that paints the root window.
    #[arg(long, value_name = "PROGRAM")]
    setroot: Option<String>,

    /// Read defaults from this file instead of the XDG config file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// List the accepted fit mode names and exit.
    #[arg(long)]
    list_modes: bool,
}

impl Args {
    /// Command line flags take precedence over the config file.
    fn merge(&self, mut config: Config) -> Config {
        if let Some(mode) = &self.mode {
            config.mode = mode.clone();
        }
        if let Some(setroot) = &self.setroot {
            config.setroot = Some(setroot.clone());
        }
        config.verbose |= self.verbose;
        config.rotate |= self.rotate;
        config
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    if std::env::var("RUST_SPANTRACE").is_err() {
        unsafe {
            std::env::set_var("RUST_SPANTRACE", "0");
        }
    }

    init_logger();

    let args = Args::parse();

    if args.list_modes {
        for mode in FitMode::ALL {
            println!("{mode}: {}", mode.synonyms().join(", "));
        }
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .wrap_err("Failed to load configuration")?;
    let config = args.merge(config);

    let Some(image) = &args.image else {
        eyre::bail!("no image given");
    };

    let wallpaper = Wallpaper::from_config(UserContext::from_env(), &config);
    wallpaper
        .set(image, &Options::from(&config))
        .wrap_err_with(|| format!("Failed to set {} as the wallpaper", image.display()))?;

    Ok(())
}

fn init_logger() {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<tracing::Level>().ok())
        .unwrap_or(tracing::Level::WARN);

    let log_format = tracing_subscriber::fmt::format()
        .pretty()
        .without_time()
        .with_line_number(true)
        .with_file(true)
        .with_target(false)
        .with_thread_names(true);

    let log_filter = tracing_subscriber::fmt::Layer::default()
        .with_writer(std::io::stderr)
        .event_format(log_format)
        .with_filter(tracing_subscriber::filter::filter_fn(move |metadata| {
            metadata.level() == &tracing::Level::ERROR
                || (metadata.target().starts_with("xbg") && metadata.level() <= &log_level)
        }));

    tracing_subscriber::registry().with(log_filter).init();
}
