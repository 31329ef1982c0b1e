//! Length unit conversions.
//!
//! The model stores every length in points. WordprocessingML stores page
//! dimensions and indents in twips (twentieths of a point), font sizes in
//! half-points, and line spacing in 240ths of a line.

/// Points per centimeter (72 pt per inch, 2.54 cm per inch).
const POINTS_PER_CM: f32 = 72.0 / 2.54;

/// Convert centimeters to points.
pub fn cm(value: f32) -> f32 {
    value * POINTS_PER_CM
}

/// Convert points to centimeters.
pub fn pt_to_cm(value: f32) -> f32 {
    value / POINTS_PER_CM
}

/// Convert points to twips, rounding to the nearest twip.
pub fn pt_to_twips(value: f32) -> i32 {
    (value * 20.0).round() as i32
}

/// Convert twips to points.
pub fn twips_to_pt(value: i32) -> f32 {
    value as f32 / 20.0
}

/// Convert a font size in points to half-points.
pub fn pt_to_half_points(value: f32) -> i32 {
    (value * 2.0).round() as i32
}

/// Convert half-points to a font size in points.
pub fn half_points_to_pt(value: i32) -> f32 {
    value as f32 / 2.0
}

/// Convert a line-spacing multiplier to 240ths of a line.
pub fn spacing_to_line_units(multiplier: f32) -> i32 {
    (multiplier * 240.0).round() as i32
}

/// Convert 240ths of a line to a line-spacing multiplier.
pub fn line_units_to_spacing(value: i32) -> f32 {
    value as f32 / 240.0
}
