use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Chart series colours
// ---------------------------------------------------------------------------

/// Hue offset between consecutive series; the golden angle keeps neighbours apart.
const GOLDEN_ANGLE: f32 = 137.507_77;
const BASE_HUE: f32 = 215.0;

fn hsl_to_color32(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    let [r, g, b] = [rgb.red, rgb.green, rgb.blue].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    Color32::from_rgb(r, g, b)
}

/// Colour of the `index`-th series of a chart.
pub fn series_color(index: usize) -> Color32 {
    let hue = (BASE_HUE + index as f32 * GOLDEN_ANGLE) % 360.0;
    hsl_to_color32(hue, 0.70, 0.55)
}

/// Fixed colours of the trend chart.
#[derive(Debug, Clone, Copy)]
pub struct TrendColors {
    pub avg_salary: Color32,
    pub total_jobs: Color32,
}

impl Default for TrendColors {
    fn default() -> Self {
        Self {
            avg_salary: series_color(0),
            total_jobs: series_color(1),
        }
    }
}
