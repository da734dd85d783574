// Chart entry points
// Sizes the surface, paints the shared header/footer, then hands off to a renderer

pub mod grid;
pub mod heatmap;
pub mod trend_line;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::{ActivityDataset, Theme, ThemeTable};
use crate::surface::{Baseline, Surface, TextStyle};
use crate::utils::config::{CANVAS_MARGIN, DEFAULT_FONT_FACE};

/// Inputs shared by both charts
#[derive(Debug, Clone)]
pub struct RenderOptions<'a> {
    pub data: &'a ActivityDataset,
    pub username: &'a str,
    pub themes: &'a ThemeTable,
    pub theme_name: Option<&'a str>,
    pub font_face: Option<&'a str>,
    pub footer_text: Option<&'a str>,
    /// Device pixel ratio of the target display
    pub scale_factor: f32,
    /// Cutoff for the current year
    pub today: NaiveDate,
}

impl<'a> RenderOptions<'a> {
    pub fn new(data: &'a ActivityDataset, username: &'a str, themes: &'a ThemeTable) -> Self {
        Self {
            data,
            username,
            themes,
            theme_name: None,
            font_face: None,
            footer_text: None,
            scale_factor: 1.0,
            today: chrono::Local::now().date_naive(),
        }
    }

    pub fn theme_name(mut self, name: &'a str) -> Self {
        self.theme_name = Some(name);
        self
    }

    pub fn font_face(mut self, face: &'a str) -> Self {
        self.font_face = Some(face);
        self
    }

    pub fn footer_text(mut self, text: &'a str) -> Self {
        self.footer_text = Some(text);
        self
    }

    pub fn scale_factor(mut self, factor: f32) -> Self {
        self.scale_factor = factor;
        self
    }

    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub(crate) fn theme(&self) -> &'a Theme {
        self.themes.resolve(self.theme_name)
    }

    pub(crate) fn face(&self) -> &'a str {
        self.font_face.unwrap_or(DEFAULT_FONT_FACE)
    }

    fn effective_scale(&self) -> f32 {
        if self.scale_factor.is_finite() && self.scale_factor > 0.0 {
            self.scale_factor
        } else {
            warn!("Ignoring scale factor {}, using 1", self.scale_factor);
            1.0
        }
    }
}

/// Draw a contribution heatmap, one block per year, onto `surface`
pub fn render_heatmap<S: Surface + ?Sized>(surface: &mut S, options: &RenderOptions<'_>) -> Result<()> {
    let index = options.data.index()?;
    let (width, height) = heatmap::canvas_size(index.years().len());
    info!(
        "Rendering heatmap for @{} ({} years, {}x{})",
        options.username,
        index.years().len(),
        width,
        height
    );

    prepare_surface(surface, options, width, height);
    draw_metadata(surface, options, width, height);
    heatmap::draw_years(surface, options, &index);
    Ok(())
}

/// Draw the per-year totals line chart onto `surface`
pub fn render_trend_line<S: Surface + ?Sized>(surface: &mut S, options: &RenderOptions<'_>) -> Result<()> {
    let index = options.data.index()?;
    let (width, height) = trend_line::canvas_size();
    info!(
        "Rendering trend line for @{} ({} years)",
        options.username,
        index.years().len()
    );

    prepare_surface(surface, options, width, height);
    draw_metadata(surface, options, width, height);
    trend_line::draw(surface, options, &index);
    Ok(())
}

fn prepare_surface<S: Surface + ?Sized>(surface: &mut S, options: &RenderOptions<'_>, width: f32, height: f32) {
    let scale = options.effective_scale();
    surface.resize(
        (width * scale).round() as u32,
        (height * scale).round() as u32,
    );
    surface.set_scale(scale);
}

/// Background, footer, title and the rule under the title
fn draw_metadata<S: Surface + ?Sized>(surface: &mut S, options: &RenderOptions<'_>, width: f32, height: f32) {
    let theme = options.theme();
    let face = options.face();
    surface.fill_rect(0.0, 0.0, width, height, theme.background);

    if let Some(footer) = options.footer_text {
        let style = TextStyle::new(10.0, face).baseline(Baseline::Bottom);
        surface.fill_text(footer, CANVAS_MARGIN, height - 5.0, &style, theme.meta);
    }

    let title = format!("@{} on GitHub", options.username);
    surface.fill_text(&title, CANVAS_MARGIN, CANVAS_MARGIN, &TextStyle::new(20.0, face), theme.text);

    surface.stroke_line(
        (CANVAS_MARGIN, 55.0),
        (width - CANVAS_MARGIN, 55.0),
        theme.grades[0],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::theme::{hex, STANDARD};
    use crate::models::{Contribution, Year};
    use crate::surface::{DrawOp, RecordingSurface};

    fn sample() -> ActivityDataset {
        ActivityDataset {
            years: vec![Year::new("2021", 5, "2021-01-01", "2021-12-31")],
            contributions: vec![Contribution::new("2021-01-01", 5, 2)],
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_surface_sized_with_scale() {
        let data = sample();
        let options = RenderOptions::new(&data, "octocat", ThemeTable::builtin())
            .scale_factor(2.0)
            .today(today());
        let mut surface = RecordingSurface::new();
        render_heatmap(&mut surface, &options).unwrap();

        // 676 x (131 + 20 + 60 + 10)
        assert_eq!(surface.size(), Some((1352, 442)));
        assert_eq!(surface.ops()[1], DrawOp::Scale(2.0));
    }

    #[test]
    fn test_bad_scale_falls_back_to_one() {
        let data = sample();
        let options = RenderOptions::new(&data, "octocat", ThemeTable::builtin())
            .scale_factor(f32::NAN)
            .today(today());
        let mut surface = RecordingSurface::new();
        render_trend_line(&mut surface, &options).unwrap();
        assert_eq!(surface.size(), Some((676, 640)));
    }

    #[test]
    fn test_metadata() {
        let data = sample();
        let options = RenderOptions::new(&data, "octocat", ThemeTable::builtin())
            .footer_text("footer")
            .today(today());
        let mut surface = RecordingSurface::new();
        render_heatmap(&mut surface, &options).unwrap();

        let texts = surface.texts();
        assert_eq!(texts[0], "footer");
        assert_eq!(texts[1], "@octocat on GitHub");
        assert_eq!(
            surface.ops()[2],
            DrawOp::FillRect {
                x: 0.0,
                y: 0.0,
                width: 676.0,
                height: 221.0,
                color: STANDARD.background,
            }
        );
        assert_eq!(surface.lines()[0], ((20.0, 55.0), (656.0, 55.0), STANDARD.grades[0]));

        match &surface.ops()[3] {
            DrawOp::Text { y, style, color, .. } => {
                assert_eq!(*y, 216.0);
                assert_eq!(style.baseline, Baseline::Bottom);
                assert_eq!(style.font_face, DEFAULT_FONT_FACE);
                assert_eq!(*color, STANDARD.meta);
            }
            other => panic!("expected footer text, got {:?}", other),
        }
    }

    #[test]
    fn test_footer_omitted_when_absent() {
        let data = sample();
        let options = RenderOptions::new(&data, "octocat", ThemeTable::builtin()).today(today());
        let mut surface = RecordingSurface::new();
        render_heatmap(&mut surface, &options).unwrap();
        assert_eq!(surface.texts()[0], "@octocat on GitHub");
    }

    #[test]
    fn test_theme_and_font_options() {
        let data = sample();
        let options = RenderOptions::new(&data, "octocat", ThemeTable::builtin())
            .theme_name("githubDark")
            .font_face("Fira Code")
            .today(today());
        let mut surface = RecordingSurface::new();
        render_heatmap(&mut surface, &options).unwrap();

        assert!(surface.rects().contains(&(0.0, 0.0, hex(0x101217))));
        match &surface.ops()[3] {
            DrawOp::Text { style, .. } => assert_eq!(style.font_face, "Fira Code"),
            other => panic!("expected title text, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_dataset_draws_nothing() {
        let mut data = sample();
        data.contributions[0].date = "not-a-date".to_string();
        let options = RenderOptions::new(&data, "octocat", ThemeTable::builtin()).today(today());
        let mut surface = RecordingSurface::new();
        assert!(render_heatmap(&mut surface, &options).is_err());
        assert!(surface.ops().is_empty());
    }
}
