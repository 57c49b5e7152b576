use super::*;

fn campaign(id: i64, raised: f64, views: i64) -> Campaign {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "product_name": format!("Campaign {id}"),
        "product_type": "digital",
        "goal_amount": "1000.00",
        "current_amount": raised,
        "view_count": views
    }))
    .unwrap()
}

#[test]
fn polyline_empty_series_has_no_points() {
    assert!(polyline(&[], 600.0, 200.0).is_empty());
}

#[test]
fn polyline_single_point_sits_at_origin_x() {
    assert_eq!(polyline(&[5.0], 600.0, 200.0), vec![ChartPoint { x: 0.0, y: 200.0 }]);
}

#[test]
fn polyline_scales_between_min_and_max() {
    let points = polyline(&[0.0, 50.0, 100.0], 600.0, 200.0);
    assert_eq!(
        points,
        vec![
            ChartPoint { x: 0.0, y: 200.0 },
            ChartPoint { x: 300.0, y: 100.0 },
            ChartPoint { x: 600.0, y: 0.0 },
        ]
    );
}

#[test]
fn polyline_flat_series_stays_on_bottom_edge() {
    let points = polyline(&[7.0, 7.0], 100.0, 50.0);
    assert!(points.iter().all(|p| (p.y - 50.0).abs() < f64::EPSILON));
}

#[test]
fn points_attr_joins_pairs() {
    let attr = points_attr(&[ChartPoint { x: 0.0, y: 10.0 }, ChartPoint { x: 5.5, y: 0.0 }]);
    assert_eq!(attr, "0,10 5.5,0");
}

#[test]
fn campaign_series_follows_list_order() {
    let series = campaign_series(&[campaign(1, 120.0, 4), campaign(2, 0.0, 9)]);
    assert_eq!(series.donations, vec![120.0, 0.0]);
    assert_eq!(series.views, vec![4.0, 9.0]);
}
