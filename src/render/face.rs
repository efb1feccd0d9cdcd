/// Analog clock face renderer.
/// Draws hour markings, the hub and three hands onto a fixed 500x500 canvas
/// using tiny-skia. Stateless: the output depends only on the face config and
/// the time passed in.
use chrono::Timelike;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Point, Stroke, Transform};

use crate::config::{ClockFaceConfig, Rgba};
use crate::render::image::ClockImage;

pub const CANVAS_SIZE: u32 = 500;
pub const HUB_RADIUS: f32 = 15.0;
pub const MARKING_START: f32 = 170.0;
pub const MARKING_LENGTH: f32 = 50.0;
pub const HOUR_HAND_LENGTH: f32 = 150.0;
pub const MINUTE_HAND_LENGTH: f32 = 175.0;
pub const SECOND_HAND_LENGTH: f32 = 200.0;

/// An instant on the dial. Values are not range checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockReading {
    pub fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Self::new(time.hour(), time.minute(), time.second())
    }
}

/// Hand angles in degrees, clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandAngles {
    pub fn from_reading(reading: ClockReading) -> Self {
        let (h, m, s) = (
            reading.hour as f32,
            reading.minute as f32,
            reading.second as f32,
        );
        Self {
            hour: h * (360.0 / 12.0) + m * (360.0 / 12.0) / 60.0,
            minute: m * (360.0 / 60.0) + s * (360.0 / 60.0) / 60.0,
            second: s * (360.0 / 60.0),
        }
    }
}

/// Point at `radius` from `center` along `angle_deg` (clockwise from up).
pub fn point_at(center: Point, angle_deg: f32, radius: f32) -> Point {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    Point::from_xy(center.x + radius * sin, center.y - radius * cos)
}

/// A stroked line on the face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub width: u32,
    pub color: Rgba,
}

impl Segment {
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClockFaceRenderer {
    config: ClockFaceConfig,
}

impl ClockFaceRenderer {
    pub fn new(config: ClockFaceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClockFaceConfig {
        &self.config
    }

    pub fn center() -> Point {
        let c = CANVAS_SIZE as f32 / 2.0;
        Point::from_xy(c, c)
    }

    /// Hour, minute and second hand segments, in that order.
    pub fn hands(&self, reading: ClockReading) -> [Segment; 3] {
        let center = Self::center();
        let angles = HandAngles::from_reading(reading);
        let hand = |angle: f32, length: f32, width: u32, color: Rgba| Segment {
            from: center,
            to: point_at(center, angle, length),
            width,
            color,
        };

        [
            hand(
                angles.hour,
                HOUR_HAND_LENGTH,
                self.config.hour_hand_width,
                self.config.hour_hand_color,
            ),
            hand(
                angles.minute,
                MINUTE_HAND_LENGTH,
                self.config.minute_hand_width,
                self.config.minute_hand_color,
            ),
            hand(
                angles.second,
                SECOND_HAND_LENGTH,
                self.config.second_hand_width,
                self.config.second_hand_color,
            ),
        ]
    }

    /// The twelve hour ticks, starting at 12 o'clock and going clockwise.
    pub fn markings(&self) -> impl Iterator<Item = Segment> + '_ {
        let center = Self::center();
        (0..12).map(move |i| {
            let angle = i as f32 * (360.0 / 12.0);
            Segment {
                from: point_at(center, angle, MARKING_START),
                to: point_at(center, angle, MARKING_START + MARKING_LENGTH),
                width: self.config.markings_width,
                color: self.config.markings_color,
            }
        })
    }

    pub fn render(&self, hour: u32, minute: u32, second: u32) -> ClockImage {
        self.render_reading(ClockReading::new(hour, minute, second))
    }

    pub fn render_reading(&self, reading: ClockReading) -> ClockImage {
        // Constant non-zero size, allocation is the only way this can fail
        let mut canvas =
            Pixmap::new(CANVAS_SIZE, CANVAS_SIZE).expect("Failed to allocate clock canvas");
        canvas.fill(self.config.background_color.to_skia());

        for marking in self.markings() {
            draw_segment(&mut canvas, &marking);
        }

        draw_hub(&mut canvas, Self::center(), self.config.hub_color);

        for hand in self.hands(reading) {
            draw_segment(&mut canvas, &hand);
        }

        ClockImage::from_pixmap(canvas)
    }
}

fn paint_for(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = true;
    paint
}

fn draw_segment(canvas: &mut Pixmap, segment: &Segment) {
    // tiny-skia would turn width 0 into a hairline
    if segment.width == 0 {
        return;
    }

    let mut pb = PathBuilder::new();
    pb.move_to(segment.from.x, segment.from.y);
    pb.line_to(segment.to.x, segment.to.y);
    let Some(path) = pb.finish() else {
        return;
    };

    let stroke = Stroke {
        width: segment.width as f32,
        ..Stroke::default()
    };
    canvas.stroke_path(
        &path,
        &paint_for(segment.color),
        &stroke,
        Transform::identity(),
        None,
    );
}

fn draw_hub(canvas: &mut Pixmap, center: Point, color: Rgba) {
    if let Some(path) = PathBuilder::from_circle(center.x, center.y, HUB_RADIUS) {
        canvas.fill_path(
            &path,
            &paint_for(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}
