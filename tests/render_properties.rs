//! Filter-and-Render Property Tests
//!
//! Exercises `render` against the sample dataset: predicate soundness and
//! completeness, inclusive bounds, idempotence and the empty-result case.

use std::path::PathBuf;

use wearwatch::charts::{render, render_one, ChartKind};
use wearwatch::dataset::Dataset;
use wearwatch::types::{Point, Reading, ReadingFilter};

fn sample() -> Dataset {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/predictive_maintenance_sample.csv");
    Dataset::load(&path).expect("Failed to load sample dataset")
}

/// Every combination of known categories with a handful of ranges.
fn filters(dataset: &Dataset) -> Vec<ReadingFilter> {
    let options = dataset.options();
    let ranges = [
        (options.tool_wear_min, options.tool_wear_max),
        (0, 20),
        (21, 50),
        (100, 220),
        (47, 47),
    ];
    let mut out = Vec::new();
    for product in &options.product_types {
        for failure in &options.failure_types {
            for (lo, hi) in ranges {
                out.push(ReadingFilter::new(product.clone(), failure.clone(), lo, hi));
            }
        }
    }
    out
}

fn satisfies_all(r: &Reading, f: &ReadingFilter) -> bool {
    r.product_type == f.product_type
        && r.failure_type == f.failure_type
        && f.tool_wear_min <= r.tool_wear
        && r.tool_wear <= f.tool_wear_max
}

#[test]
fn selected_rows_satisfy_predicate_and_none_are_missed() {
    let dataset = sample();
    for filter in filters(&dataset) {
        let selected = dataset.select(&filter);
        assert!(selected.iter().all(|r| satisfies_all(r, &filter)), "{filter:?}");

        let expected = dataset
            .readings()
            .iter()
            .filter(|r| satisfies_all(r, &filter))
            .count();
        assert_eq!(selected.len(), expected, "{filter:?}");
    }
}

#[test]
fn every_chart_has_one_point_per_selected_row() {
    let dataset = sample();
    for filter in filters(&dataset) {
        let rows = dataset.select(&filter);
        let charts = render(&dataset, &filter);
        for chart in charts.iter() {
            for series in &chart.series {
                assert_eq!(series.len(), rows.len(), "{} {filter:?}", chart.title);
                let xs: Vec<f64> = series.points.iter().map(|p| p.x).collect();
                let expected: Vec<f64> = rows.iter().map(|r| r.tool_wear_f64()).collect();
                assert_eq!(xs, expected);
            }
        }
    }
}

#[test]
fn render_is_idempotent() {
    let dataset = sample();
    let filter = ReadingFilter::new("L", "No Failure", 0, 253);
    assert_eq!(render(&dataset, &filter), render(&dataset, &filter));
}

#[test]
fn equal_bounds_select_exact_wear() {
    let dataset = sample();
    let charts = render(&dataset, &ReadingFilter::new("M", "No Failure", 47, 47));
    assert_eq!(
        charts.torque.series[0].points,
        vec![Point { x: 47.0, y: 45.6 }]
    );

    let none = render(&dataset, &ReadingFilter::new("M", "No Failure", 46, 46));
    assert!(none.iter().all(|c| c.point_count() == 0));
}

#[test]
fn dataset_bounds_are_inclusive() {
    let dataset = sample();
    let options = dataset.options();

    let low = render_one(
        &dataset,
        &ReadingFilter::new("M", "No Failure", options.tool_wear_min, options.tool_wear_min),
        ChartKind::Wear,
    );
    assert_eq!(low.series[0].points, vec![Point { x: 0.0, y: 0.0 }]);

    let high = render_one(
        &dataset,
        &ReadingFilter::new("L", "Overstrain Failure", options.tool_wear_max, options.tool_wear_max),
        ChartKind::Speed,
    );
    assert_eq!(high.series[0].points, vec![Point { x: 253.0, y: 1282.0 }]);
}

#[test]
fn no_match_yields_four_empty_charts() {
    let dataset = sample();
    let charts = render(&dataset, &ReadingFilter::new("H", "Power Failure", 0, 253));

    assert_eq!(charts.iter().count(), 4);
    for chart in charts.iter() {
        assert!(!chart.series.is_empty());
        assert_eq!(chart.point_count(), 0, "{}", chart.title);
    }
}

#[test]
fn chart_titles_do_not_depend_on_filter() {
    let dataset = sample();
    let a = render(&dataset, &ReadingFilter::new("M", "No Failure", 0, 253));
    let b = render(&dataset, &ReadingFilter::new("Q", "Nothing", 5, 1));
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.title, y.title);
        assert_eq!(x.x_label, y.x_label);
        assert_eq!(x.y_label, y.y_label);
    }
}
