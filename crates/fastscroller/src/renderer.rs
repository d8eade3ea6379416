//! Paint surface and paintable resources.
//!
//! The scroller does not rasterize anything itself. It positions opaque
//! [`Paintable`] resources (thumb and track for each axis) on a [`Canvas`]
//! supplied by the host during the overlay pass.

use serde::{Deserialize, Serialize};

use crate::layout::Bounds;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const RED: Color = Color {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Multiply the color's alpha by a paint alpha in `0..=255`.
    pub fn with_paint_alpha(&self, alpha: u8) -> Color {
        Color {
            a: self.a * f32::from(alpha) / 255.0,
            ..*self
        }
    }
}

/// Drawing surface for the overlay pass.
///
/// Coordinates are local to the current transform, which starts at the host
/// view's origin.
pub trait Canvas {
    /// Shift the origin.
    fn translate(&mut self, dx: f32, dy: f32);

    /// Scale around the origin; `scale(-1.0, 1.0)` mirrors horizontally.
    fn scale(&mut self, sx: f32, sy: f32);

    /// Fill a rectangle.
    fn fill_rect(&mut self, bounds: Bounds, color: Color);

    /// Stroke a one-pixel outline for layout debugging.
    fn stroke_debug_rect(&mut self, bounds: Bounds);
}

/// A resource the scroller can size, fade and draw (thumb or track).
pub trait Paintable {
    /// Natural thickness perpendicular to the track.
    fn intrinsic_thickness(&self) -> f32;

    /// Position the resource in the current canvas coordinates.
    fn set_bounds(&mut self, bounds: Bounds);

    fn bounds(&self) -> Bounds;

    /// Paint alpha in `0..=255`.
    fn set_alpha(&mut self, alpha: u8);

    fn alpha(&self) -> u8;

    /// Pressed visual state while a thumb is being dragged.
    fn set_pressed(&mut self, pressed: bool) {
        let _ = pressed;
    }

    fn draw(&self, canvas: &mut dyn Canvas);
}

/// The four resources a scroller paints.
pub struct ScrollbarResources {
    pub vertical_thumb: Box<dyn Paintable>,
    pub vertical_track: Box<dyn Paintable>,
    pub horizontal_thumb: Box<dyn Paintable>,
    pub horizontal_track: Box<dyn Paintable>,
}

impl ScrollbarResources {
    pub fn new(
        vertical_thumb: impl Paintable + 'static,
        vertical_track: impl Paintable + 'static,
        horizontal_thumb: impl Paintable + 'static,
        horizontal_track: impl Paintable + 'static,
    ) -> Self {
        Self {
            vertical_thumb: Box::new(vertical_thumb),
            vertical_track: Box::new(vertical_track),
            horizontal_thumb: Box::new(horizontal_thumb),
            horizontal_track: Box::new(horizontal_track),
        }
    }

    /// Solid-color resources, handy for headless hosts and tests.
    pub fn solid(thickness: f32, thumb: Color, track: Color) -> Self {
        Self::new(
            SolidPaintable::new(thumb, thickness),
            SolidPaintable::new(track, thickness),
            SolidPaintable::new(thumb, thickness),
            SolidPaintable::new(track, thickness),
        )
    }

    fn each_mut(&mut self) -> [&mut Box<dyn Paintable>; 4] {
        [
            &mut self.vertical_thumb,
            &mut self.vertical_track,
            &mut self.horizontal_thumb,
            &mut self.horizontal_track,
        ]
    }

    /// Apply the same paint alpha to all four resources.
    pub fn set_alpha(&mut self, alpha: u8) {
        for paintable in self.each_mut() {
            paintable.set_alpha(alpha);
        }
    }
}

impl std::fmt::Debug for ScrollbarResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollbarResources")
            .field("vertical_thumb", &self.vertical_thumb.bounds())
            .field("horizontal_thumb", &self.horizontal_thumb.bounds())
            .finish()
    }
}

/// Flat rectangle with an optional pressed color.
#[derive(Debug, Clone)]
pub struct SolidPaintable {
    color: Color,
    pressed_color: Color,
    thickness: f32,
    bounds: Bounds,
    alpha: u8,
    pressed: bool,
}

impl SolidPaintable {
    pub fn new(color: Color, thickness: f32) -> Self {
        Self {
            color,
            pressed_color: color,
            thickness,
            bounds: Bounds::default(),
            alpha: u8::MAX,
            pressed: false,
        }
    }

    /// Set the color used while pressed.
    pub fn pressed_color(mut self, color: Color) -> Self {
        self.pressed_color = color;
        self
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}

impl Paintable for SolidPaintable {
    fn intrinsic_thickness(&self) -> f32 {
        self.thickness
    }

    fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
    }

    fn alpha(&self) -> u8 {
        self.alpha
    }

    fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let color = if self.pressed {
            self.pressed_color
        } else {
            self.color
        };
        canvas.fill_rect(self.bounds, color.with_paint_alpha(self.alpha));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_alpha_scales_color_alpha() {
        let c = Color::new(0.2, 0.3, 0.4, 0.5).with_paint_alpha(255);
        assert!((c.a - 0.5).abs() < 0.0001);
        let c = Color::WHITE.with_paint_alpha(0);
        assert_eq!(c.a, 0.0);
    }

    #[test]
    fn test_resources_share_alpha() {
        let mut res = ScrollbarResources::solid(8.0, Color::WHITE, Color::RED);
        res.set_alpha(42);
        assert_eq!(res.vertical_thumb.alpha(), 42);
        assert_eq!(res.vertical_track.alpha(), 42);
        assert_eq!(res.horizontal_thumb.alpha(), 42);
        assert_eq!(res.horizontal_track.alpha(), 42);
    }
}
