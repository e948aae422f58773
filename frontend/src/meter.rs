//! Segmented level meter.
//!
//! Levels here are synthetic (volume scaled by a coefficient), not measured.

use egui::{Color32, CornerRadius, Rect, Sense, Ui, Vec2};

/// Number of segments in every meter.
pub const SEGMENT_COUNT: usize = 16;

/// Zone boundaries as a fraction of the segment stack.
const ZONE_WARN_START: f32 = 0.7;
const ZONE_HOT_START: f32 = 0.85;

const METER_WIDTH: f32 = 10.0;
const SEGMENT_GAP: f32 = 2.0;
/// Opacity multiplier for segments above the current level
const INACTIVE_OPACITY: f32 = 0.25;

/// Colour zone of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentZone {
    Normal,
    Warn,
    Hot,
}

impl SegmentZone {
    pub fn color(self) -> Color32 {
        match self {
            Self::Normal => Color32::from_rgb(0, 200, 0),
            Self::Warn => Color32::from_rgb(255, 165, 0),
            Self::Hot => Color32::from_rgb(230, 40, 40),
        }
    }
}

/// One rendered segment, bottom (index 0) up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub zone: SegmentZone,
    pub active: bool,
}

/// Zone of segment `index` out of `total`. Depends on position only.
pub fn segment_zone(index: usize, total: usize) -> SegmentZone {
    let position = index as f32 / total as f32;
    if position >= ZONE_HOT_START {
        SegmentZone::Hot
    } else if position >= ZONE_WARN_START {
        SegmentZone::Warn
    } else {
        SegmentZone::Normal
    }
}

/// Number of lit segments for a level in [0, 100]. Out-of-range levels are clamped.
pub fn active_segments(level: f32) -> usize {
    let clamped = if level.is_finite() {
        level.clamp(0.0, 100.0)
    } else {
        0.0
    };
    (clamped / 100.0 * SEGMENT_COUNT as f32).round() as usize
}

/// All segments for a level.
pub fn segments(level: f32) -> [Segment; SEGMENT_COUNT] {
    let active = active_segments(level);
    std::array::from_fn(|i| Segment {
        zone: segment_zone(i, SEGMENT_COUNT),
        active: i < active,
    })
}

/// Draw a vertical segmented meter filling `height`.
pub fn show(ui: &mut Ui, level: f32, height: f32) {
    let (rect, _response) = ui.allocate_exact_size(Vec2::new(METER_WIDTH, height), Sense::hover());
    let painter = ui.painter();

    let segment_height =
        (height - SEGMENT_GAP * (SEGMENT_COUNT as f32 - 1.0)) / SEGMENT_COUNT as f32;

    for (i, segment) in segments(level).iter().enumerate() {
        let bottom = rect.max.y - i as f32 * (segment_height + SEGMENT_GAP);
        let segment_rect = Rect::from_min_max(
            egui::pos2(rect.min.x, bottom - segment_height),
            egui::pos2(rect.max.x, bottom),
        );
        let color = if segment.active {
            segment.zone.color()
        } else {
            segment.zone.color().gamma_multiply(INACTIVE_OPACITY)
        };
        painter.rect_filled(segment_rect, CornerRadius::same(1), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_segments_rounds() {
        assert_eq!(active_segments(0.0), 0);
        assert_eq!(active_segments(100.0), 16);
        assert_eq!(active_segments(50.0), 8);
        // 75 * 0.85 = 63.75 -> 10.2 segments
        assert_eq!(active_segments(63.75), 10);
        // 3.125% is exactly half a segment and rounds up
        assert_eq!(active_segments(3.125), 1);
    }

    #[test]
    fn test_out_of_range_levels_clamp() {
        assert_eq!(active_segments(-40.0), 0);
        assert_eq!(active_segments(250.0), 16);
        assert_eq!(active_segments(f32::NAN), 0);
    }

    #[test]
    fn test_zone_depends_on_position_only() {
        assert_eq!(segment_zone(0, 16), SegmentZone::Normal);
        assert_eq!(segment_zone(11, 16), SegmentZone::Normal);
        assert_eq!(segment_zone(12, 16), SegmentZone::Warn);
        assert_eq!(segment_zone(13, 16), SegmentZone::Warn);
        assert_eq!(segment_zone(14, 16), SegmentZone::Hot);
        assert_eq!(segment_zone(15, 16), SegmentZone::Hot);

        for level in [0.0, 40.0, 100.0] {
            let segs = segments(level);
            assert_eq!(segs[14].zone, SegmentZone::Hot);
            assert_eq!(segs[3].zone, SegmentZone::Normal);
        }
    }

    #[test]
    fn test_segments_light_from_bottom() {
        let segs = segments(25.0);
        assert!(segs[..4].iter().all(|s| s.active));
        assert!(segs[4..].iter().all(|s| !s.active));
    }
}
