//! Time parsing and Day Map layout.
//!
//! Everything here works on a continuous fractional-hour axis. Times are
//! wall-clock offsets within one day, but an evening block may run past
//! 24:00 to encode next-day early morning, so there is no modulo-24
//! wraparound anywhere.

use crate::data::TimelineItem;
use crate::error::ExitError;

/// Synthetic width given to events with no end time, in hours.
pub const POINT_EVENT_HOURS: f64 = 0.25;

/// Below this lane width the bar renders with a fixed pixel minimum so it
/// stays visible and hoverable.
pub const MIN_LANE_WIDTH_PCT: f64 = 2.0;

/// Parse an "H:MM" wall-clock offset into fractional hours.
///
/// Hours may be one or more digits and are not capped at 23. A single
/// trailing `+` (the past-midnight marker used by upstream data) is
/// tolerated and stripped. Anything that is not two numeric fields around
/// exactly one `:` is a [`ExitError::TimeFormat`].
pub fn parse_time(input: &str) -> Result<f64, ExitError> {
    let err = || ExitError::TimeFormat {
        input: input.to_string(),
    };
    let bare = input.strip_suffix('+').unwrap_or(input);
    let Some((hours, minutes)) = bare.split_once(':') else {
        return Err(err());
    };
    if minutes.contains(':') {
        return Err(err());
    }
    let hours: u32 = hours.parse().map_err(|_| err())?;
    let minutes: u32 = minutes.parse().map_err(|_| err())?;
    Ok(f64::from(hours) + f64::from(minutes) / 60.0)
}

/// An item's resolved position on the time axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemSpan {
    pub start: f64,
    /// None for point events.
    pub end: Option<f64>,
}

impl ItemSpan {
    pub fn resolve(item: &TimelineItem) -> Result<Self, ExitError> {
        Ok(Self {
            start: parse_time(&item.time)?,
            end: item.time_end.as_deref().map(parse_time).transpose()?,
        })
    }

    /// End used for layout: the real end, or the point-event minimum.
    pub fn visual_end(&self) -> f64 {
        self.end.unwrap_or(self.start + POINT_EVENT_HOURS)
    }
}

/// The whole-hour range covered by the rendered axis.
///
/// Recomputed per render, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRange {
    pub start: i64,
    pub end: i64,
}

impl AxisRange {
    /// Derive the axis from a day's items, parsing their times.
    pub fn from_items(items: &[TimelineItem]) -> Result<Self, ExitError> {
        let spans = items
            .iter()
            .map(ItemSpan::resolve)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_spans(&spans))
    }

    /// Floor of the earliest start to ceil of the latest end.
    ///
    /// An empty day gets the full `[0, 23]` axis. The end is pushed out by
    /// an hour when floor and ceil coincide, so the span downstream layout
    /// divides by is never zero.
    pub fn from_spans(spans: &[ItemSpan]) -> Self {
        let Some(first) = spans.first() else {
            return Self { start: 0, end: 23 };
        };
        let mut min_start = first.start;
        let mut max_end = first.visual_end();
        for span in &spans[1..] {
            min_start = min_start.min(span.start);
            max_end = max_end.max(span.visual_end());
        }
        let start = min_start.floor() as i64;
        let mut end = max_end.ceil() as i64;
        if end <= start {
            end = start + 1;
        }
        Self { start, end }
    }

    /// Axis span in hours. Always positive.
    pub fn span(&self) -> f64 {
        (self.end - self.start) as f64
    }
}

/// Horizontal placement of one lane bar, in percent of the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanePosition {
    pub left_pct: f64,
    pub width_pct: f64,
}

pub fn lane_position(span: ItemSpan, axis: AxisRange) -> LanePosition {
    let axis_start = axis.start as f64;
    let axis_span = axis.span();
    LanePosition {
        left_pct: round2((span.start - axis_start) / axis_span * 100.0),
        width_pct: round2((span.visual_end() - span.start) / axis_span * 100.0),
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Coarse human label for a duration in hours.
///
/// Quarter-hour granularity above one hour, whole minutes below. The
/// precision loss is intentional.
pub fn format_duration(hours: f64) -> String {
    if hours >= 10.0 {
        return "all day".to_string();
    }
    if hours >= 1.0 {
        let whole = hours.floor() as i64;
        let quarter = ((hours - hours.floor()) * 60.0 / 15.0).round() as i64 * 15;
        return match quarter {
            0 => format!("~{whole}h"),
            60 => format!("~{}h", whole + 1),
            15 => format!("~{whole}.25h"),
            30 => format!("~{whole}.5h"),
            _ => format!("~{whole}.75h"),
        };
    }
    let minutes = (hours * 60.0).round() as i64;
    format!("~{minutes}min")
}
