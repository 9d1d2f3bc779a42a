//! nautilus-icons - resolve and render file manager icons
#![allow(clippy::uninlined_format_args)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use nautilus_icons::icons::zoom::ICON_SIZE_LARGEST;
use nautilus_icons::{Config, IconFactory, ZoomLevel};

/// Largest size `render` accepts.
const MAX_RENDER_SIZE: u32 = ICON_SIZE_LARGEST * 4;

fn main() -> Result<()> {
    // Initialize logging (RUST_LOG=debug for verbose output)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse CLI arguments
    match parse_args()? {
        Command::Render(render) => render_icon(&render),
        Command::Sizes => {
            print_sizes();
            Ok(())
        }
        Command::Config { write } => show_config(write),
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Version => {
            print_version();
            Ok(())
        }
    }
}

/// CLI commands
enum Command {
    Render(RenderArgs),
    Sizes,
    Config {
        write: bool,
    },
    Help,
    Version,
}

/// Arguments of `render`
struct RenderArgs {
    name: String,
    size: Option<u32>,
    theme: Option<String>,
    uri: Option<String>,
    symlink: bool,
    out: Option<PathBuf>,
}

fn parse_args() -> Result<Command> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() == 1 {
        return Ok(Command::Help);
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => Ok(Command::Help),
        "-v" | "--version" | "version" => Ok(Command::Version),
        "sizes" => Ok(Command::Sizes),
        "config" => Ok(Command::Config {
            write: args.iter().skip(2).any(|a| a == "--write" || a == "-w"),
        }),

        "render" => {
            let name = args
                .get(2)
                .filter(|a| !a.starts_with('-'))
                .ok_or_else(|| anyhow::anyhow!("Missing icon name"))?
                .clone();

            let mut render = RenderArgs {
                name,
                size: None,
                theme: None,
                uri: None,
                symlink: false,
                out: None,
            };

            let mut i = 3;
            while i < args.len() {
                let value = args.get(i + 1);
                match args[i].as_str() {
                    "--size" | "-s" => {
                        let value = value.ok_or_else(|| anyhow::anyhow!("--size needs a value"))?;
                        render.size = Some(parse_size(value)?);
                        i += 2;
                    }
                    "--theme" | "-t" => {
                        render.theme = value.cloned();
                        i += 2;
                    }
                    "--uri" | "-u" => {
                        render.uri = value.cloned();
                        i += 2;
                    }
                    "--out" | "-o" => {
                        render.out = value.map(PathBuf::from);
                        i += 2;
                    }
                    "--symlink" | "-l" => {
                        render.symlink = true;
                        i += 1;
                    }
                    other => {
                        return Err(anyhow::anyhow!(
                            "Unknown option: {other}\nRun 'nautilus-icons --help' for usage"
                        ));
                    }
                }
            }

            Ok(Command::Render(render))
        }

        other => Err(anyhow::anyhow!(
            "Unknown command: {other}\nRun 'nautilus-icons --help' for usage"
        )),
    }
}

/// Accept a pixel count or a zoom level name.
fn parse_size(value: &str) -> Result<u32> {
    if let Some(level) = ZoomLevel::all().iter().find(|level| level.name() == value) {
        return Ok(level.icon_size());
    }

    let size: u32 = value
        .parse()
        .with_context(|| format!("Invalid size: {value}"))?;
    anyhow::ensure!(size > 0, "Size must be at least 1 pixel");
    anyhow::ensure!(
        size <= MAX_RENDER_SIZE,
        "Size must be at most {MAX_RENDER_SIZE} pixels"
    );
    Ok(size)
}

fn print_help() {
    let config_path = Config::default_path()
        .map_or_else(|_| "Unknown".to_string(), |p| p.display().to_string());

    println!(
        r#"nautilus-icons {}
Resolve file manager icons and render them to PNG

USAGE:
    nautilus-icons [COMMAND]

COMMANDS:
    render <name> [OPTIONS]            Render one icon
      Options:
        -s, --size <px|level>          Pixel size or zoom level (default: standard)
        -t, --theme <theme>            Icon theme (default: from config)
        -u, --uri <uri>                Custom image URI (file://...)
        -l, --symlink                  Add the symbolic link emblem
        -o, --out <file>               Output PNG (default: <name>-<size>.png)
      Examples:
        nautilus-icons render i-directory
        nautilus-icons render i-regular --size large --symlink
        nautilus-icons render i-regular --uri file:///home/me/cover.png

    sizes                              List zoom levels and icon sizes
    config [--write]                   Show the effective configuration
      Options:
        -w, --write                    Save it to the config file

OPTIONS:
    -h, --help                         Show this help message
    -v, --version                      Show version information

CONFIG:
    {}
"#,
        nautilus_icons::VERSION,
        config_path
    );
}

fn print_version() {
    println!("nautilus-icons {}", nautilus_icons::VERSION);
}

fn print_sizes() {
    for level in ZoomLevel::all() {
        let marker = if *level == ZoomLevel::default() { " (default)" } else { "" };
        println!("{:<10} {:>4}px{}", level.name(), level.icon_size(), marker);
    }
}

fn show_config(write: bool) -> Result<()> {
    let path = Config::default_path()?;
    let config = Config::load_from(&path)?;

    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(&config).context("Failed to serialize config")?);

    if write {
        config.save()?;
        println!("✓ Saved to {}", path.display());
    }
    Ok(())
}

fn render_icon(args: &RenderArgs) -> Result<()> {
    let mut config = Config::load()?;
    if args.theme.is_some() {
        config.theme.clone_from(&args.theme);
    }

    let mut factory = IconFactory::new(&config);
    let size = args.size.unwrap_or_else(|| factory.default_size());

    let icon = factory.descriptor(args.uri.as_deref(), &args.name, args.symlink);
    let bitmap = factory.get_pixbuf(&icon, size);

    let out = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}-{}.png", args.name, size)));
    bitmap
        .save(&out)
        .with_context(|| format!("Failed to write {}", out.display()))?;

    println!(
        "✓ {} ({}x{}) → {}",
        args.name,
        bitmap.width(),
        bitmap.height(),
        out.display()
    );
    Ok(())
}
