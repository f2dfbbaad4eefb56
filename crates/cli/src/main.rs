#![deny(unsafe_code)]
//! CLI binary for the ambient point-field background.
//!
//! Subcommands:
//! - `render` — run the simulation N ticks, capture one frame to PNG
//! - `defaults` — print the default field params and theme as JSON

mod error;

use ambient_core::Scene;
use ambient_field::driver::Driver;
use ambient_field::render::{render, Theme};
use ambient_field::{FieldParams, PointField};
use ambient_raster::Raster;
use clap::{Parser, Subcommand};
use error::CliError;
use std::path::PathBuf;
use std::process;

/// Nominal milliseconds per frame used to timestamp offline frames.
const FRAME_MS: u64 = 16;

#[derive(Parser)]
#[command(name = "ambient", about = "Ambient point-field frame capture")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the simulation for N ticks and write a PNG frame.
    Render {
        /// Viewport width in pixels.
        #[arg(short = 'W', long, default_value_t = 800)]
        width: usize,

        /// Viewport height in pixels.
        #[arg(short = 'H', long, default_value_t = 600)]
        height: usize,

        /// Number of simulation ticks before capture.
        #[arg(short, long, default_value_t = 600)]
        ticks: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Number of points in the field.
        #[arg(short, long, default_value_t = 12)]
        points: usize,

        /// Base opacity for every stroke and fill.
        #[arg(long, default_value_t = 0.3)]
        opacity: f64,

        /// Pointer position held for the whole run, as "X,Y".
        #[arg(long)]
        pointer: Option<String>,

        /// Scene file overriding the flags above.
        #[arg(long)]
        scene: Option<PathBuf>,

        /// Theme file (hex colors) overriding the default look.
        #[arg(long)]
        theme: Option<PathBuf>,

        /// Output file path.
        #[arg(short, long, default_value = "frame.png")]
        output: PathBuf,
    },
    /// Print the default field params and theme as JSON.
    Defaults,
}

/// Parses a pointer argument of the form "X,Y".
fn parse_pointer(arg: &str) -> Result<(f64, f64), CliError> {
    let (x, y) = arg
        .split_once(',')
        .ok_or_else(|| CliError::Input(format!("invalid --pointer '{arg}': expected X,Y")))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|e| CliError::Input(format!("invalid --pointer '{arg}': {e}")))
    };
    Ok((parse(x)?, parse(y)?))
}

fn load_scene(path: &PathBuf) -> Result<Scene, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read scene file {}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("invalid scene file {}: {e}", path.display())))
}

fn load_theme(path: &PathBuf) -> Result<Theme, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read theme file {}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("invalid theme file {}: {e}", path.display())))
}

#[allow(clippy::too_many_arguments)]
fn render_command(
    cli_json: bool,
    width: usize,
    height: usize,
    ticks: usize,
    seed: u64,
    points: usize,
    opacity: f64,
    pointer: Option<String>,
    scene_path: Option<PathBuf>,
    theme_path: Option<PathBuf>,
    output: PathBuf,
) -> Result<(), CliError> {
    let scene = match scene_path {
        Some(path) => load_scene(&path)?,
        None => {
            let mut scene = Scene::new(width as f64, height as f64, seed);
            scene.ticks = ticks;
            scene.pointer = match pointer {
                Some(arg) => Some(parse_pointer(&arg)?),
                None => None,
            };
            scene.params = serde_json::json!({
                "point_count": points,
                "opacity": opacity,
            });
            scene
        }
    };
    scene.validate()?;

    let theme = match theme_path {
        Some(path) => load_theme(&path)?,
        None => Theme::default(),
    };

    let field = PointField::from_json(scene.width, scene.height, scene.seed, &scene.params)?;
    let mut driver = Driver::new(field, theme);
    if let Some((x, y)) = scene.pointer {
        driver.pointer_moved(x, y, 0);
    }
    for i in 0..scene.ticks {
        driver.frame(i as u64 * FRAME_MS, None);
    }

    let mut raster = Raster::new(scene.width.round() as usize, scene.height.round() as usize)?;
    render(driver.field(), &theme, &mut raster);
    ambient_raster::snapshot::write_png(&raster, &output)?;

    if cli_json {
        let info = serde_json::json!({
            "width": scene.width,
            "height": scene.height,
            "ticks": scene.ticks,
            "seed": scene.seed,
            "pointer": scene.pointer,
            "params": scene.params,
            "output": output.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        eprintln!(
            "rendered {}x{} field ({} ticks, seed {}) -> {}",
            scene.width,
            scene.height,
            scene.ticks,
            scene.seed,
            output.display()
        );
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Defaults => {
            let info = serde_json::json!({
                "params": FieldParams::default().to_json(),
                "theme": Theme::default(),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Command::Render {
            width,
            height,
            ticks,
            seed,
            points,
            opacity,
            pointer,
            scene,
            theme,
            output,
        } => {
            render_command(
                cli.json, width, height, ticks, seed, points, opacity, pointer, scene, theme,
                output,
            )?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pointer_accepts_plain_coordinates() {
        assert_eq!(parse_pointer("400,300").unwrap(), (400.0, 300.0));
    }

    #[test]
    fn parse_pointer_accepts_whitespace_and_fractions() {
        assert_eq!(parse_pointer("12.5, 9.75").unwrap(), (12.5, 9.75));
    }

    #[test]
    fn parse_pointer_rejects_missing_comma() {
        let err = parse_pointer("400").unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn parse_pointer_rejects_non_numeric() {
        let err = parse_pointer("x,y").unwrap_err();
        assert_eq!(err.exit_code(), 12);
    }
}
