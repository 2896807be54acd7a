//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{CharsetChoice, ColorChoice};
use crate::capture::DEFAULT_ITERATIONS;
use crate::render::Region;

/// Render a Linux framebuffer as ANSI text art
#[derive(Parser, Debug)]
#[command(name = "fbscope")]
#[command(version, about = "Render a live framebuffer as text art in the terminal", long_about = None)]
#[command(after_help = "EXAMPLES:
    fbscope                                   # Capture /dev/fb0 at 10 fps
    fbscope capture --color 256 --charset blocks
    fbscope capture --fit --region 0,0,640,480
    fbscope benchmark --iterations 500
    fbscope list

Press q, Q or Esc to stop a capture.")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub display: DisplayArgs,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Log progress and print statistics on exit
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Options shared by the capture and benchmark commands.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct DisplayArgs {
    /// Framebuffer device (default: /dev/fb0)
    #[arg(long, short, global = true)]
    pub device: Option<PathBuf>,

    /// Output width in characters
    #[arg(long, short = 'W', global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Output height in characters
    #[arg(long, short = 'H', global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Size the output to the current terminal
    #[arg(long, global = true, conflicts_with_all = ["width", "height"])]
    pub fit: bool,

    /// Frames per second (0 = as fast as possible)
    #[arg(long, short, global = true)]
    pub fps: Option<u32>,

    /// Color mode
    #[arg(long, global = true)]
    pub color: Option<ColorChoice>,

    /// Character set
    #[arg(long, short = 's', global = true)]
    pub charset: Option<CharsetChoice>,

    /// Brightness multiplier (0.5-2.0 recommended)
    #[arg(long, short = 'B', global = true, allow_negative_numbers = true)]
    pub brightness: Option<f32>,

    /// Contrast multiplier (0.5-2.0 recommended)
    #[arg(long, short = 'T', global = true, allow_negative_numbers = true)]
    pub contrast: Option<f32>,

    /// Source region X,Y,W,H (W/H of 0 means to the edge)
    #[arg(long, short, global = true)]
    pub region: Option<Region>,

    /// Stop after this many frames
    #[arg(long, global = true)]
    pub frames: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Capture and display the framebuffer (default)
    Capture,
    /// Measure render throughput without drawing
    Benchmark {
        /// Number of frames to render
        #[arg(long, short = 'n', default_value_t = DEFAULT_ITERATIONS)]
        iterations: u32,
    },
    /// List framebuffer devices
    List,
    /// Show geometry of the configured device
    Info,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show effective configuration
    Show,
    /// Create default config file
    Init,
}
