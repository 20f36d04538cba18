use crate::errors::{Error, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Endpoint parameterization of an elliptical arc, as given in path data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpec {
    pub start: Point,
    pub end: Point,
    pub rx: f32,
    pub ry: f32,
    /// x-axis rotation in degrees
    pub rotation: f32,
    pub large_arc: bool,
    pub sweep: bool,
}

/// Center parameterization of an arc: what a drawing primitive needs.
///
/// Angles are in degrees. `end_angle` is already adjusted so that the
/// signed span `end_angle - start_angle` runs in the sweep direction,
/// i.e. it may lie outside (-180, 180].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSolution {
    pub center: Point,
    pub start_angle: f32,
    pub end_angle: f32,
    pub radii: (f32, f32),
}

/// Reconstruct an arc's center and angles from its endpoint parameterization.
///
/// Uses the perpendicular-bisector construction: scaling one axis reduces
/// the ellipse to a circle of radius `ry`, whose two candidate centers sit
/// at distance `h` either side of the chord midpoint. The candidate whose
/// angular span matches the `large_arc`/`sweep` flags is selected.
///
/// Radii too small for the chord are scaled up to the minimum feasible
/// value, following the SVG correction rule, so valid input never fails.
/// Callers must handle the degenerate cases first: zero radii are a
/// straight line, and coincident endpoints draw nothing.
pub fn solve_arc(spec: &ArcSpec) -> Result<ArcSolution> {
    let (mut rx, mut ry) = (spec.rx.abs(), spec.ry.abs());
    let rot = spec.rotation.to_radians();

    // chord in the ellipse frame, with the start point at the origin
    let (wx, wy) = (spec.end.x - spec.start.x, spec.end.y - spec.start.y);
    let dx = wx * rot.cos() + wy * rot.sin();
    let dy = -wx * rot.sin() + wy * rot.cos();

    // Scaling x by ry/rx reduces the ellipse to a circle of radius ry.
    // Work in that frame: angles there are the parametric angles of the
    // ellipse, which is what the arc primitive takes.
    let (sx, sy) = (dx * ry / rx, dy);

    // Scale radii up to the minimum feasible value if required. Scaling
    // both radii leaves the circle-reduced chord unchanged, so the
    // minimal factor is exactly half-chord over ry.
    let half = (sx * sx + sy * sy).sqrt() / 2.0;
    if half > ry {
        let s = half / ry;
        rx *= s;
        ry *= s;
    }

    let candidates = arc_centers(sx, sy, ry)?;
    let assess = |c: (f32, f32)| {
        let start_angle = (-c.1).atan2(-c.0).to_degrees();
        let end_angle = (sy - c.1).atan2(sx - c.0).to_degrees();
        let mut span = end_angle - start_angle;
        if spec.sweep && span < 0.0 {
            span += 360.0;
        } else if !spec.sweep && span > 0.0 {
            span -= 360.0;
        }
        (c, start_angle, span)
    };
    let assessed = [assess(candidates.0), assess(candidates.1)];
    // Exactly one candidate matches both flags, except for a perfect
    // half-turn where the candidates coincide.
    let &(c, start_angle, span) = assessed
        .iter()
        .find(|(_, _, span)| (span.abs() > 180.0) == spec.large_arc)
        .unwrap_or(&assessed[0]);

    // un-scale the x axis, then back from the ellipse frame to
    // document coordinates
    let (cx, cy) = (c.0 * rx / ry, c.1);
    let center = Point::new(
        cx * rot.cos() - cy * rot.sin() + spec.start.x,
        cx * rot.sin() + cy * rot.cos() + spec.start.y,
    );
    Ok(ArcSolution {
        center,
        start_angle,
        end_angle: start_angle + span,
        radii: (rx, ry),
    })
}

/// Both candidate centers for a circle of radius `r` passing through the
/// origin and `(sx, sy)`. They sit either side of the chord midpoint at
/// distance `h` along its perpendicular bisector. Fails with
/// `ArcNotFeasible` when the chord is too long.
fn arc_centers(sx: f32, sy: f32, r: f32) -> Result<((f32, f32), (f32, f32))> {
    let chord = (sx * sx + sy * sy).sqrt();
    if chord == 0.0 {
        return Err(Error::Parse("zero-length arc chord".to_string()));
    }
    let h2 = r * r - (chord / 2.0).powi(2);
    if h2 < -(r * r) * 1e-6 {
        return Err(Error::ArcNotFeasible { radius: r, chord });
    }
    let h = h2.max(0.0).sqrt();
    let (mx, my) = (sx / 2.0, sy / 2.0);
    let (nx, ny) = (-sy / chord, sx / chord);
    Ok((
        (mx + h * nx, my + h * ny),
        (mx - h * nx, my - h * ny),
    ))
}

/// Derive the cubic Bézier control points equivalent to a quadratic
/// control point, by the standard 2/3 weighting rule.
pub fn quadratic_to_cubic(p0: Point, ctrl: Point, end: Point) -> (Point, Point) {
    let c1 = Point::new(
        p0.x + 2.0 / 3.0 * (ctrl.x - p0.x),
        p0.y + 2.0 / 3.0 * (ctrl.y - p0.y),
    );
    let c2 = Point::new(
        end.x + 2.0 / 3.0 * (ctrl.x - end.x),
        end.y + 2.0 / 3.0 * (ctrl.y - end.y),
    );
    (c1, c2)
}
