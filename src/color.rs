use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Rating badge colour
// ---------------------------------------------------------------------------

/// Ratings at or below this are drawn fully red.
pub const RATING_FLOOR: f64 = 2.0;
/// Ratings at or above this are drawn fully green.
pub const RATING_CEIL: f64 = 5.0;

fn hue_to_color32(hue: f32) -> Color32 {
    let hsl = Hsl::new(hue, 0.75, 0.45);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Map a rating onto a red → amber → green ramp.
pub fn rating_color(rating: f64) -> Color32 {
    if !rating.is_finite() {
        return Color32::GRAY;
    }
    let t = ((rating - RATING_FLOOR) / (RATING_CEIL - RATING_FLOOR)).clamp(0.0, 1.0);
    hue_to_color32((t * 120.0) as f32)
}
