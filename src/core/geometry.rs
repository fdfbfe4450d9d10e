//! Kurven-Geometrie: Bézier-Auswertung, Bogenlänge, Abstände und Polygon-Tests.
//!
//! Reine Funktionen ohne Abhängigkeit auf Stores oder App-State.

use glam::Vec2;
use std::f32::consts::TAU;

/// Anzahl gleichmäßiger `t`-Schritte für Bogenlänge und Treffer-Tests gekrümmter Segmente.
///
/// Fest, damit wiederholte Längenberechnungen identische Werte liefern.
pub const CURVE_SAMPLES: usize = 20;

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// B'(t) = 2(1-t)·(P1-P0) + 2t·(P2-P1)
pub fn quadratic_bezier_derivative(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    2.0 * (1.0 - t) * (p1 - p0) + 2.0 * t * (p2 - p1)
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// B'(t) = 3(1-t)²·(P1-P0) + 6(1-t)t·(P2-P1) + 3t²·(P3-P2)
pub fn cubic_bezier_derivative(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    3.0 * inv * inv * (p1 - p0) + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

/// Impliziter Kontrollpunkt einer quadratischen Straße.
///
/// Sehnen-Mittelpunkt, senkrecht (Sehne um +90° gedreht) um die halbe Sehnenlänge versetzt.
pub fn implicit_quadratic_control(start: Vec2, end: Vec2) -> Vec2 {
    let chord = end - start;
    (start + end) * 0.5 + chord.perp() * 0.5
}

/// Teilt eine kubische Bézier-Kurve bei `t` (de Casteljau).
///
/// Gibt die Kontrollpolygone beider Hälften zurück.
pub fn split_cubic(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> ([Vec2; 4], [Vec2; 4]) {
    let p01 = p0.lerp(p1, t);
    let p12 = p1.lerp(p2, t);
    let p23 = p2.lerp(p3, t);
    let p012 = p01.lerp(p12, t);
    let p123 = p12.lerp(p23, t);
    let mid = p012.lerp(p123, t);
    ([p0, p01, p012, mid], [mid, p123, p23, p3])
}

/// Projiziert `p` auf die Strecke `a`–`b` (Parameter auf [0, 1] geklemmt).
///
/// Gibt den projizierten Punkt und den Parameter zurück.
pub fn project_onto_segment(p: Vec2, a: Vec2, b: Vec2) -> (Vec2, f32) {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < f32::EPSILON {
        return (a, 0.0);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (a + ab * t, t)
}

/// Exakter Abstand von `p` zur Strecke `a`–`b`.
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let (projected, _) = project_onto_segment(p, a, b);
    p.distance(projected)
}

/// Tastet eine parametrische Kurve mit `samples` gleich großen `t`-Schritten ab.
///
/// Liefert `samples + 1` Punkte inklusive Start und Ende.
pub fn sample_curve(eval: impl Fn(f32) -> Vec2, samples: usize) -> Vec<Vec2> {
    let samples = samples.max(1);
    (0..=samples)
        .map(|i| eval(i as f32 / samples as f32))
        .collect()
}

/// Länge einer Polyline.
pub fn polyline_length(points: &[Vec2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Minimaler Abstand von `p` zu einer offenen Polyline.
pub fn distance_to_polyline(p: Vec2, points: &[Vec2]) -> f32 {
    match points {
        [] => f32::INFINITY,
        [single] => p.distance(*single),
        _ => points
            .windows(2)
            .map(|w| distance_to_segment(p, w[0], w[1]))
            .fold(f32::INFINITY, f32::min),
    }
}

/// Kurvenparameter des zu `p` nächstgelegenen Punkts auf einer gleichmäßig abgetasteten Polyline.
///
/// Setzt voraus, dass `points` aus [`sample_curve`] stammt (gleiche `t`-Abstände).
pub fn closest_param_on_samples(p: Vec2, points: &[Vec2]) -> f32 {
    if points.len() < 2 {
        return 0.0;
    }
    let segments = (points.len() - 1) as f32;
    let mut best = (f32::INFINITY, 0.0f32);
    for (i, w) in points.windows(2).enumerate() {
        let (projected, local_t) = project_onto_segment(p, w[0], w[1]);
        let dist = p.distance_squared(projected);
        if dist < best.0 {
            best = (dist, (i as f32 + local_t) / segments);
        }
    }
    best.1
}

/// Punkt-in-Polygon-Test per Ray-Casting (Even-Odd-Regel).
///
/// `outline` ist implizit geschlossen (letzter Punkt → erster Punkt).
pub fn point_in_polygon(p: Vec2, outline: &[Vec2]) -> bool {
    if outline.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = outline.len() - 1;
    for i in 0..outline.len() {
        let a = outline[i];
        let b = outline[j];
        if (a.y > p.y) != (b.y > p.y) {
            let x_cross = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Flächeninhalt eines einfachen Polygons (Gauß'sche Trapezformel), immer positiv.
pub fn shoelace_area(points: &[Vec2]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }
    let n = points.len();
    let twice: f32 = (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice.abs() * 0.5
}

/// Beschreibung eines einzelnen Kurvensegments (Straße oder Polygon-Kante).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveSegment {
    /// Gerade Strecke
    Line { start: Vec2, end: Vec2 },
    /// Quadratische Bézier-Kurve
    Quadratic { start: Vec2, control: Vec2, end: Vec2 },
    /// Kubische Bézier-Kurve
    Cubic {
        start: Vec2,
        cp1: Vec2,
        cp2: Vec2,
        end: Vec2,
    },
    /// Vollkreis, beginnend beim Winkel `start_angle` (Radiant)
    Circle {
        center: Vec2,
        radius: f32,
        start_angle: f32,
    },
}

impl CurveSegment {
    /// Weltposition bei Parameter `t ∈ [0, 1]`.
    pub fn point_at(&self, t: f32) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            CurveSegment::Line { start, end } => start.lerp(end, t),
            CurveSegment::Quadratic {
                start,
                control,
                end,
            } => quadratic_bezier(start, control, end, t),
            CurveSegment::Cubic {
                start,
                cp1,
                cp2,
                end,
            } => cubic_bezier(start, cp1, cp2, end, t),
            CurveSegment::Circle {
                center,
                radius,
                start_angle,
            } => center + Vec2::from_angle(start_angle + TAU * t) * radius,
        }
    }

    /// Normierte Tangente bei `t`. Fällt bei entarteter Ableitung auf die Sehnenrichtung zurück.
    pub fn tangent_at(&self, t: f32) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        let derivative = match *self {
            CurveSegment::Line { start, end } => end - start,
            CurveSegment::Quadratic {
                start,
                control,
                end,
            } => quadratic_bezier_derivative(start, control, end, t),
            CurveSegment::Cubic {
                start,
                cp1,
                cp2,
                end,
            } => cubic_bezier_derivative(start, cp1, cp2, end, t),
            CurveSegment::Circle { start_angle, .. } => {
                Vec2::from_angle(start_angle + TAU * t).perp()
            }
        };
        if derivative.length_squared() > f32::EPSILON {
            return derivative.normalize();
        }
        match *self {
            CurveSegment::Line { start, end }
            | CurveSegment::Quadratic { start, end, .. }
            | CurveSegment::Cubic { start, end, .. } => (end - start).normalize_or_zero(),
            CurveSegment::Circle { .. } => Vec2::ZERO,
        }
    }

    /// `true` für alle Segmente außer der geraden Strecke.
    pub fn is_curved(&self) -> bool {
        !matches!(self, CurveSegment::Line { .. })
    }

    /// Abtastpunkte (`CURVE_SAMPLES + 1`) bzw. beide Endpunkte bei Geraden.
    pub fn sample_points(&self) -> Vec<Vec2> {
        match *self {
            CurveSegment::Line { start, end } => vec![start, end],
            _ => sample_curve(|t| self.point_at(t), CURVE_SAMPLES),
        }
    }

    /// Länge: exakt für Geraden, sonst Summe der Sehnen über `CURVE_SAMPLES` Schritte.
    pub fn length(&self) -> f32 {
        match *self {
            CurveSegment::Line { start, end } => start.distance(end),
            _ => polyline_length(&self.sample_points()),
        }
    }

    /// Abstand von `p` zum Segment (Geraden exakt, Kurven über die Abtast-Polyline).
    pub fn distance_to(&self, p: Vec2) -> f32 {
        match *self {
            CurveSegment::Line { start, end } => distance_to_segment(p, start, end),
            _ => distance_to_polyline(p, &self.sample_points()),
        }
    }

    /// Parameter des zu `p` nächstgelegenen Kurvenpunkts.
    pub fn closest_param(&self, p: Vec2) -> f32 {
        match *self {
            CurveSegment::Line { start, end } => project_onto_segment(p, start, end).1,
            _ => closest_param_on_samples(p, &self.sample_points()),
        }
    }
}
