// contrib-canvas - command line renderer
// Reads a contributions JSON file and writes a heatmap or trend line PNG

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contrib_canvas::utils::config::{parse_scale, DEFAULT_FONT_FACE, DEFAULT_THEME};
use contrib_canvas::{render_heatmap, render_trend_line, ActivityDataset, RasterSurface, RenderOptions, ThemeTable};

/// Which chart to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ChartKind {
    /// One calendar block per year
    Heatmap,
    /// Yearly totals joined by a line
    #[value(alias = "trend")]
    Line,
}

/// Render a contributions JSON file to a PNG chart
#[derive(Debug, Parser)]
#[command(name = "contrib-canvas")]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(value_enum)]
    kind: ChartKind,

    /// Contributions JSON file
    input: PathBuf,

    /// PNG file to write
    output: PathBuf,

    /// Name shown in the footer
    #[arg(long, env = "CONTRIB_USERNAME", default_value = "unknown")]
    username: String,

    /// Built-in theme name
    #[arg(long, env = "CONTRIB_THEME")]
    theme: Option<String>,

    /// TTF/OTF font used for all text
    #[arg(long, env = "CONTRIB_FONT_PATH")]
    font: Option<PathBuf>,

    /// Extra footer line
    #[arg(long, env = "CONTRIB_FOOTER")]
    footer: Option<String>,

    /// Device pixel ratio
    #[arg(long, env = "CONTRIB_SCALE", default_value = "1", value_parser = parse_scale)]
    scale: f32,
}

impl Cli {
    fn run(self) -> Result<()> {
        let json = std::fs::read_to_string(&self.input)
            .with_context(|| format!("Failed to read {}", self.input.display()))?;
        let data = ActivityDataset::from_json(&json)
            .with_context(|| format!("Failed to parse {}", self.input.display()))?;

        let mut surface = RasterSurface::new();
        if let Some(path) = &self.font {
            surface
                .load_font(DEFAULT_FONT_FACE, path)
                .with_context(|| format!("Failed to load font {}", path.display()))?;
        }

        let themes = ThemeTable::builtin();
        let mut options = RenderOptions::new(&data, &self.username, themes).scale_factor(self.scale);
        if let Some(theme) = &self.theme {
            if !themes.contains(theme) {
                warn!(
                    "Unknown theme {:?}, using {} (available: {})",
                    theme,
                    DEFAULT_THEME,
                    themes.names().join(", ")
                );
            }
            options = options.theme_name(theme);
        }
        if let Some(footer) = &self.footer {
            options = options.footer_text(footer);
        }

        match self.kind {
            ChartKind::Heatmap => render_heatmap(&mut surface, &options)?,
            ChartKind::Line => render_trend_line(&mut surface, &options)?,
        }

        surface
            .save_png(&self.output)
            .with_context(|| format!("Failed to write {}", self.output.display()))?;
        info!("Wrote {:?} chart to {}", self.kind, self.output.display());

        Ok(())
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "contrib_canvas=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    Cli::parse().run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parse_heatmap() {
        let cli = Cli::try_parse_from(["contrib-canvas", "heatmap", "data.json", "out.png"]).unwrap();
        assert_eq!(cli.kind, ChartKind::Heatmap);
        assert_eq!(cli.input, PathBuf::from("data.json"));
        assert_eq!(cli.output, PathBuf::from("out.png"));
    }

    #[test]
    fn test_cli_trend_alias() {
        let cli = Cli::try_parse_from(["contrib-canvas", "trend", "a.json", "b.png"]).unwrap();
        assert_eq!(cli.kind, ChartKind::Line);
    }

    #[test]
    fn test_cli_options() {
        let cli = Cli::try_parse_from([
            "contrib-canvas",
            "line",
            "a.json",
            "b.png",
            "--username",
            "octocat",
            "--theme",
            "dracula",
            "--footer",
            "made with contrib-canvas",
            "--scale",
            "2",
        ])
        .unwrap();
        assert_eq!(cli.username, "octocat");
        assert_eq!(cli.theme.as_deref(), Some("dracula"));
        assert_eq!(cli.footer.as_deref(), Some("made with contrib-canvas"));
        assert_eq!(cli.scale, 2.0);
        assert!(cli.font.is_none());
    }

    #[test]
    fn test_cli_rejects_bad_input() {
        assert!(Cli::try_parse_from(["contrib-canvas", "pie", "a.json", "b.png"]).is_err());
        assert!(Cli::try_parse_from(["contrib-canvas", "heatmap", "a.json"]).is_err());
        assert!(Cli::try_parse_from([
            "contrib-canvas",
            "heatmap",
            "a.json",
            "b.png",
            "--scale",
            "-1"
        ])
        .is_err());
    }
}
