//! Layout rectangles and backend-neutral fill paths

use std::f64::consts::{FRAC_PI_2, PI};

use serde::Serialize;

/// Axis-aligned integer rectangle in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Largest corner radius that still fits this rectangle
    pub fn max_radius(&self) -> f64 {
        f64::from(self.width.min(self.height).max(0)) / 2.0
    }
}

/// Filled width of a status bar: `floor(width * clamp(value, 0, 1))`.
///
/// NaN counts as empty.
pub fn status_fill_width(width: i32, value: f64) -> i32 {
    let value = if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    };
    (f64::from(width.max(0)) * value).floor() as i32
}

// ─────────────────────────────────────────────────────────────────
// Paths
// ─────────────────────────────────────────────────────────────────

/// One path segment. `Arc` implies a straight line from the current point
/// to the arc's start point, as in cairo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    /// Clockwise arc (in screen space) from `start` to `end` radians
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start: f64,
        end: f64,
    },
    Close,
}

/// Corner radii in clockwise order starting at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadii {
    pub const fn uniform(radius: f64) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }
}

/// A closed fill outline
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Sharp rectangle
    pub fn rect(rect: Rect) -> Self {
        Self::rounded_rect_corners(rect, CornerRadii::default())
    }

    /// Rectangle with four equal quarter-circle corners.
    ///
    /// The radius is clamped into `[0, min(width, height) / 2]`.
    pub fn rounded_rect(rect: Rect, radius: f64) -> Self {
        Self::rounded_rect_corners(rect, CornerRadii::uniform(radius))
    }

    /// Rectangle with independently rounded corners, each clamped like
    /// [`Path::rounded_rect`]. Empty rectangles produce an empty path.
    pub fn rounded_rect_corners(rect: Rect, radii: CornerRadii) -> Self {
        if rect.is_empty() {
            return Self::default();
        }

        let max = rect.max_radius();
        let clamp = |r: f64| if r.is_nan() { 0.0 } else { r.clamp(0.0, max) };
        let tl = clamp(radii.top_left);
        let tr = clamp(radii.top_right);
        let br = clamp(radii.bottom_right);
        let bl = clamp(radii.bottom_left);

        let x = f64::from(rect.x);
        let y = f64::from(rect.y);
        let w = f64::from(rect.width);
        let h = f64::from(rect.height);

        let mut commands = Vec::with_capacity(9);
        let mut corner = |cx: f64, cy: f64, r: f64, start: f64, px: f64, py: f64| {
            if r > 0.0 {
                commands.push(PathCommand::Arc {
                    cx,
                    cy,
                    radius: r,
                    start,
                    end: start + FRAC_PI_2,
                });
            } else {
                commands.push(PathCommand::LineTo { x: px, y: py });
            }
        };

        // Same corner order as a cairo rounded rect: top-right, bottom-right,
        // bottom-left, top-left.
        corner(x + w - tr, y + tr, tr, -FRAC_PI_2, x + w, y);
        corner(x + w - br, y + h - br, br, 0.0, x + w, y + h);
        corner(x + bl, y + h - bl, bl, FRAC_PI_2, x, y + h);
        corner(x + tl, y + tl, tl, PI, x, y);

        // The first segment starts the sub-path.
        if let Some(first) = commands.first_mut() {
            if let PathCommand::LineTo { x, y } = *first {
                *first = PathCommand::MoveTo { x, y };
            }
        }
        commands.push(PathCommand::Close);

        Self { commands }
    }

    /// Axis-aligned bounds of every point the path touches
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut points = Vec::new();
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => points.push((x, y)),
                PathCommand::Arc {
                    cx,
                    cy,
                    radius,
                    start,
                    end,
                } => {
                    points.push((cx + radius * start.cos(), cy + radius * start.sin()));
                    points.push((cx + radius * end.cos(), cy + radius * end.sin()));
                }
                PathCommand::Close => {}
            }
        }
        let first = *points.first()?;
        Some(points.iter().fold(
            (first.0, first.1, first.0, first.1),
            |(x0, y0, x1, y1), &(x, y)| (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        ))
    }
}
