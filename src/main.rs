use art_slider::archive::archive_path;
use art_slider::{config, dates, gallery, output, page, transport};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "art-slider")]
#[command(about = "Daily artwork carousel built from a month archive")]
#[command(long_about = "\
Daily artwork carousel built from a month archive

Slides are built backward from the anchor date (today unless configured),
one per day, from the archive at /{namespace}/{MM}-slides.json:

  { \"total\": 2, \"posts\": { \"03-04\": \"<p>A</p>\", \"03-03\": \"<p>B</p>\" } }

The gallery lists them oldest first and opens on the anchor day.

Run 'art-slider gen-config' to generate a documented gallery.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Gallery config file
    #[arg(long, default_value = "gallery.toml", global = true)]
    config: PathBuf,

    /// Anchor date (YYYY-MM-DD), overrides the config
    #[arg(long, global = true)]
    anchor: Option<NaiveDate>,

    /// More log output (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the archive and write the gallery page
    Build {
        /// Output directory
        #[arg(long, default_value = "dist")]
        output: PathBuf,
    },
    /// Fetch the archive and list the assembled slides
    Slides,
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let out_dir = match cli.command {
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
            return Ok(());
        }
        Command::Build { output } => Some(output),
        Command::Slides => None,
    };

    let site_config = config::load_config(&cli.config)?;
    let anchor = dates::resolve_anchor(cli.anchor.or(site_config.anchor_date));
    let transport = transport::select_transport(&site_config.transport)?;

    match out_dir {
        Some(out_dir) => {
            let gallery =
                gallery::load_gallery(transport.as_ref(), &site_config.namespace, anchor).await;
            let markup =
                page::render_gallery_page(&site_config.title, &gallery, &site_config.image_widths);
            let page_path = page::write_gallery(&out_dir, &markup)?;
            let archive = archive_path(&site_config.namespace, &dates::month_key(anchor));
            output::print_build_output(transport.name(), &archive, &gallery.slides, &page_path);
        }
        None => {
            let set =
                gallery::load_slide_set(transport.as_ref(), &site_config.namespace, anchor).await;
            output::print_slide_set(&set, anchor);
        }
    }

    Ok(())
}
