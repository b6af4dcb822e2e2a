use std::collections::VecDeque;

use crate::config::TrailConfig;
use crate::foundation::core::Point;
use crate::render::display_list::DrawSurface;

/// Pointer-movement notification from the host.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointerEvent {
    pub position: Point,
    /// Host timestamp in milliseconds.
    pub timestamp_ms: u64,
}

/// One retained pointer position.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TrailPoint {
    pub position: Point,
    pub timestamp_ms: u64,
    /// Unique per trail, strictly increasing in arrival order.
    pub id: u64,
}

/// Render parameters of one trail point, derived from its recency rank.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TrailMarker {
    pub id: u64,
    pub position: Point,
    pub opacity: f64,
    pub scale: f64,
    /// 0 for the oldest retained point, 1 for the newest.
    pub recency: f64,
}

/// Bounded FIFO of recent pointer positions.
#[derive(Clone, Debug)]
pub struct PointerTrail {
    capacity: usize,
    points: VecDeque<TrailPoint>,
    next_id: u64,
    current: Option<Point>,
}

impl PointerTrail {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            points: VecDeque::with_capacity(capacity.saturating_add(1)),
            next_id: 0,
            current: None,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last reported pointer position, if any event arrived.
    pub fn current_position(&self) -> Option<Point> {
        self.current
    }

    /// Oldest first.
    pub fn points(&self) -> impl ExactSizeIterator<Item = &TrailPoint> {
        self.points.iter()
    }

    /// Record a pointer notification, evicting the oldest points above capacity.
    pub fn push(&mut self, event: PointerEvent) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.current = Some(event.position);
        self.points.push_back(TrailPoint {
            position: event.position,
            timestamp_ms: event.timestamp_ms,
            id,
        });
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
        id
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Markers in draw order (oldest first). Rank `i` of `n` gets `(i + 1) / n` of both the
    /// maximum opacity and the marker scale, so the newest point is drawn at full size.
    pub fn markers(&self, max_opacity: f64) -> Vec<TrailMarker> {
        let n = self.points.len();
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let rank = (i + 1) as f64 / n as f64;
                TrailMarker {
                    id: p.id,
                    position: p.position,
                    opacity: rank * max_opacity,
                    scale: rank,
                    recency: if n > 1 { i as f64 / (n - 1) as f64 } else { 1.0 },
                }
            })
            .collect()
    }

    /// Paint the fading comet tail as discs on top of `surface`.
    pub fn draw(&self, cfg: &TrailConfig, surface: &mut dyn DrawSurface) {
        for m in self.markers(cfg.max_opacity) {
            let tint = cfg.tail_color.lerp(cfg.head_color, m.recency);
            surface.fill_circle(
                m.position,
                cfg.marker_diameter * 0.5 * m.scale,
                tint.fade(m.opacity),
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/trail.rs"]
mod tests;
