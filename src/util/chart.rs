//! Line chart geometry for the personal dashboard.
//!
//! Points are spread evenly across the width and scaled between the series
//! minimum (bottom edge) and maximum (top edge). A flat series sits on the
//! bottom edge.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use crate::net::types::Campaign;

/// One plotted vertex in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// Vertices for `values` inside a `width` x `height` box.
///
/// A single value is drawn at `x = 0`.
#[allow(clippy::cast_precision_loss)]
pub fn polyline(values: &[f64], width: f64, height: f64) -> Vec<ChartPoint> {
    let Some((min, max)) = bounds(values) else {
        return Vec::new();
    };
    let span = if max - min == 0.0 { 1.0 } else { max - min };
    let step = if values.len() > 1 { width / (values.len() - 1) as f64 } else { 0.0 };
    values
        .iter()
        .enumerate()
        .map(|(i, value)| ChartPoint { x: i as f64 * step, y: height - (value - min) / span * height })
        .collect()
}

/// `points` attribute string for an SVG `<polyline>`.
pub fn points_attr(points: &[ChartPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn bounds(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(values.iter().fold((first, first), |(lo, hi), v| (lo.min(*v), hi.max(*v))))
}

/// Per-campaign series shown on a startup owner's dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampaignSeries {
    pub donations: Vec<f64>,
    pub views: Vec<f64>,
}

/// Raised amount and view count for each campaign, in list order.
#[allow(clippy::cast_precision_loss)]
pub fn campaign_series(campaigns: &[Campaign]) -> CampaignSeries {
    CampaignSeries {
        donations: campaigns.iter().map(|c| c.current_amount).collect(),
        views: campaigns.iter().map(|c| c.view_count as f64).collect(),
    }
}
