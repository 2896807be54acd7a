//! Subcommand handlers.

use std::error::Error;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use super::args::{Args, Command, ConfigAction, DisplayArgs};
use crate::capture::{
    install_signal_handler, run_benchmark, run_on_worker, CancelToken, CaptureSession, StopReason,
};
use crate::config::{default_path, Config};
use crate::framebuffer::{list_devices, Framebuffer};
use crate::render::DisplayConfig;
use crate::terminal::{self, NoKeys, RawModeGuard, StdinKeys, TerminalSink};

pub type CommandResult = Result<(), Box<dyn Error>>;

/// Device and display settings after layering CLI over config over defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub device: PathBuf,
    pub display: DisplayConfig,
    pub frames: Option<u64>,
}

impl Settings {
    /// Resolve settings. `terminal_size` is consulted only for `--fit`.
    pub fn resolve(
        cli: &DisplayArgs,
        config: &Config,
        terminal_size: Option<(u16, u16)>,
    ) -> Self {
        let mut display = config.display_config();

        if let Some(width) = cli.width {
            display.output_width = width;
        }
        if let Some(height) = cli.height {
            display.output_height = height;
        }
        if cli.fit {
            match terminal_size {
                Some((cols, rows)) => {
                    let (w, h) = terminal::fit_grid(cols, rows);
                    display.output_width = w;
                    display.output_height = h;
                }
                None => log::warn!(
                    "Terminal size unavailable, using {}x{}",
                    display.output_width,
                    display.output_height
                ),
            }
        }
        if let Some(fps) = cli.fps {
            display.fps = fps;
        }
        if let Some(color) = cli.color {
            display.color_mode = color.into();
        }
        if let Some(charset) = cli.charset {
            display.charset_mode = charset.into();
        }
        if let Some(brightness) = cli.brightness {
            display.brightness = brightness;
        }
        if let Some(contrast) = cli.contrast {
            display.contrast = contrast;
        }
        if let Some(region) = cli.region {
            display.region = region;
        }

        Self {
            device: cli.device.clone().unwrap_or_else(|| config.device_path()),
            display,
            frames: cli.frames,
        }
    }
}

/// Run the command selected by `args`. Capture is the default.
pub fn execute(args: Args) -> CommandResult {
    let config_path = args.config.clone().unwrap_or_else(default_path);

    if let Some(Command::Config { action }) = &args.command {
        return handle_config_action(action, &args.display, &config_path);
    }

    // Listing needs no settings, so a broken config file must not block it
    if let Some(Command::List) = args.command {
        list();
        return Ok(());
    }

    let config = Config::load(Some(&config_path))?;
    let terminal_size = if args.display.fit { terminal::size() } else { None };
    let settings = Settings::resolve(&args.display, &config, terminal_size);

    match args.command {
        None | Some(Command::Capture) => capture(&settings, args.verbose),
        Some(Command::Benchmark { iterations }) => benchmark(&settings, iterations),
        Some(Command::Info) => info(&settings.device),
        Some(Command::List) | Some(Command::Config { .. }) => Ok(()),
    }
}

/// Capture the framebuffer into the terminal until stopped.
pub fn capture(settings: &Settings, verbose: bool) -> CommandResult {
    let cancel = CancelToken::new();
    if let Err(e) = install_signal_handler(&cancel) {
        log::warn!("Could not install signal handler: {}", e);
    }

    let session = CaptureSession::open(&settings.device, settings.display, cancel)?
        .with_frame_limit(settings.frames);

    let mut guard = RawModeGuard::enter()?;
    let report = if io::stdin().is_terminal() {
        run_on_worker(session, TerminalSink::stdout(), StdinKeys)
    } else {
        log::info!("stdin is not a terminal, quit keys disabled");
        run_on_worker(session, TerminalSink::stdout(), NoKeys)
    };
    guard.exit()?;

    let report = report?;
    match &report.reason {
        StopReason::QuitKey => log::info!("Stopped by user"),
        StopReason::Cancelled => log::info!("Stopped by signal"),
        StopReason::FrameLimit => log::info!("Frame limit reached"),
        StopReason::Failed(e) => log::error!("Capture failed: {}", e),
    }

    let stats = report.into_result()?;
    if verbose {
        println!("{}", stats);
    }
    Ok(())
}

/// Render frames from the device without drawing them and report throughput.
pub fn benchmark(settings: &Settings, iterations: u32) -> CommandResult {
    let framebuffer = Framebuffer::open(&settings.device)?;
    println!("{}", framebuffer.info());
    println!(
        "Rendering {} frames at {}x{} ({}, {})...",
        iterations,
        settings.display.output_width,
        settings.display.output_height,
        settings.display.color_mode.name(),
        settings.display.charset_mode.name()
    );

    let report = run_benchmark(&framebuffer, &settings.display, iterations)?;
    println!("{}", report);
    Ok(())
}

/// Print every probed framebuffer device.
pub fn list() {
    let devices = list_devices();
    if devices.iter().all(|d| d.info.is_err()) {
        println!("No framebuffer devices found.");
        println!();
        println!("Make sure fbdev is enabled and you can read /dev/fb*.");
        println!("Adding your user to the 'video' group usually grants access.");
        return;
    }

    println!("Framebuffer devices:");
    for device in devices {
        println!("  {}", device);
    }
    println!();
    println!("Use --device <path> to select a device.");
}

/// Open a single device, mapping included, and print its geometry.
pub fn info(device: &Path) -> CommandResult {
    let framebuffer = Framebuffer::open(device)?;
    println!("{}", framebuffer.info());
    println!("  Format: {}", framebuffer.format());
    println!("  Mapped: {} bytes", framebuffer.size());
    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(
    action: &ConfigAction,
    cli: &DisplayArgs,
    config_path: &Path,
) -> CommandResult {
    match action {
        ConfigAction::Show => {
            let config = Config::load(Some(config_path))?;
            let settings = Settings::resolve(cli, &config, None);
            let effective = Config::from_settings(&settings.device, &settings.display);

            println!("# Effective configuration");
            print!("{}", effective.to_toml()?);
            println!();
            if config_path.exists() {
                println!("# Config file: {} (exists)", config_path.display());
            } else {
                println!("# Config file: {} (not found)", config_path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            Config::write_default(config_path)?;
            println!("Created config file: {}", config_path.display());
            Ok(())
        }
    }
}
