use quickcheck_macros::quickcheck;
use signal_dashboard_wasm::domain::market_data::{CandlePoint, Timestamp};
use signal_dashboard_wasm::infrastructure::rendering::{LineChartGeometry, PriceDomain};
use signal_dashboard_wasm::infrastructure::rendering::line_chart::{Margins, label_indices};

const WIDTH: f64 = 760.0;
const HEIGHT: f64 = 380.0;

fn points(closes: &[f64]) -> Vec<CandlePoint> {
    closes
        .iter()
        .enumerate()
        .map(|(i, close)| CandlePoint::new(Timestamp::from_millis(i as f64 * 900_000.0), *close))
        .collect()
}

#[test]
fn domain_is_padded_by_five_percent() {
    let domain = PriceDomain::from_points(&points(&[100.0, 120.0, 110.0])).unwrap();
    assert!((domain.min - 99.0).abs() < 1e-9);
    assert!((domain.max - 121.0).abs() < 1e-9);
    assert_eq!(domain.format_price(110.0), "110.00");
}

#[test]
fn flat_series_gets_one_percent_band() {
    let domain = PriceDomain::from_points(&points(&[2.0, 2.0])).unwrap();
    assert!((domain.min - 1.98).abs() < 1e-9);
    assert!((domain.max - 2.02).abs() < 1e-9);
    assert_eq!(domain.format_price(2.0), "2.00000");

    let zero = PriceDomain::from_points(&points(&[0.0])).unwrap();
    assert_eq!((zero.min, zero.max), (-1.0, 1.0));
}

#[test]
fn empty_or_non_finite_series_has_no_domain() {
    assert!(PriceDomain::from_points(&[]).is_none());
    assert!(PriceDomain::from_points(&points(&[f64::NAN, f64::INFINITY])).is_none());
    assert!(LineChartGeometry::compute(&[], WIDTH, HEIGHT).is_none());
}

#[test]
fn ticks_run_from_max_to_min() {
    let domain = PriceDomain { min: 0.0, max: 100.0 };
    assert_eq!(domain.ticks(5), vec![100.0, 75.0, 50.0, 25.0, 0.0]);
    assert_eq!(domain.ticks(1), vec![50.0]);
    assert!(domain.ticks(0).is_empty());
}

#[test]
fn single_point_is_centered() {
    let geometry = LineChartGeometry::compute(&points(&[1.2345]), WIDTH, HEIGHT).unwrap();
    let margins = Margins::default();
    let (x, y) = geometry.vertices[0].unwrap();
    assert!((x - (margins.left + geometry.plot_width() / 2.0)).abs() < 1e-9);
    assert!((y - (margins.top + geometry.plot_height() / 2.0)).abs() < 1e-9);
}

#[test]
fn first_and_last_points_touch_plot_edges() {
    let geometry = LineChartGeometry::compute(&points(&[1.0, 3.0, 2.0]), WIDTH, HEIGHT).unwrap();
    let margins = Margins::default();
    let first = geometry.vertices[0].unwrap();
    let last = geometry.vertices[2].unwrap();
    assert!((first.0 - margins.left).abs() < 1e-9);
    assert!((last.0 - (WIDTH - margins.right)).abs() < 1e-9);
    // Higher price, smaller y.
    assert!(geometry.vertices[1].unwrap().1 < first.1);
}

#[test]
fn non_finite_close_leaves_a_gap() {
    let geometry = LineChartGeometry::compute(&points(&[1.0, f64::NAN, 2.0]), WIDTH, HEIGHT).unwrap();
    assert!(geometry.vertices[0].is_some());
    assert!(geometry.vertices[1].is_none());
    assert!(geometry.vertices[2].is_some());
}

#[test]
fn label_indices_are_bounded() {
    assert_eq!(label_indices(100, 6), vec![0, 17, 34, 51, 68, 85]);
    assert_eq!(label_indices(3, 6), vec![0, 1, 2]);
    assert!(label_indices(0, 6).is_empty());
}

#[quickcheck]
fn vertices_stay_inside_plot(closes: Vec<f64>) -> bool {
    // Keep prices in a realistic range so the padded span stays finite.
    let closes: Vec<f64> = closes.into_iter().map(|c| if c.is_finite() { c % 1e6 } else { c }).collect();
    let series = points(&closes);
    let Some(geometry) = LineChartGeometry::compute(&series, WIDTH, HEIGHT) else {
        return closes.iter().all(|c| !c.is_finite());
    };
    let margins = geometry.margins;
    geometry.vertices.iter().flatten().all(|(x, y)| {
        *x >= margins.left - 1e-6
            && *x <= WIDTH - margins.right + 1e-6
            && *y >= margins.top - 1e-6
            && *y <= HEIGHT - margins.bottom + 1e-6
    })
}
