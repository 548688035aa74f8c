//! Hand-rendered SVG charts
//!
//! All charts are static: they take their data by value and draw it
//! once. Geometry lives in [`geometry`] and is tested separately.

pub mod geometry;

use geometry::{
    nice_max, pie_angles, pie_slice_path, polar_point, polyline_points, radar_polygon,
    scale_linear,
};
use leptos::prelude::*;

/// One pie slice or legend entry.
#[derive(Clone, PartialEq)]
pub struct SliceDatum {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl SliceDatum {
    pub fn new(label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

/// One named line or bar series.
#[derive(Clone, PartialEq)]
pub struct SeriesDatum {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

impl SeriesDatum {
    pub fn new(name: impl Into<String>, color: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            values,
        }
    }
}

#[component]
pub fn ChartLegend(entries: Vec<(String, String)>) -> impl IntoView {
    view! {
        <div class="chart-legend">
            {entries
                .into_iter()
                .map(|(label, color)| {
                    view! {
                        <span class="chart-legend__item">
                            <span
                                class="chart-legend__swatch"
                                style=format!("background-color: {};", color)
                            ></span>
                            {label}
                        </span>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn PieChart(data: Vec<SliceDatum>) -> impl IntoView {
    let values: Vec<f64> = data.iter().map(|d| d.value).collect();
    let angles = pie_angles(&values);

    let slices = data
        .iter()
        .zip(angles)
        .map(|(datum, (start, end))| {
            let path = pie_slice_path(100.0, 100.0, 90.0, start, end);
            view! { <path d=path fill=datum.color.clone() stroke="#fff" stroke-width="1"/> }
        })
        .collect::<Vec<_>>();

    let legend: Vec<(String, String)> = data
        .iter()
        .map(|d| (format!("{} ({})", d.label, d.value), d.color.clone()))
        .collect();

    view! {
        <div class="chart chart--pie">
            <svg viewBox="0 0 200 200" role="img">{slices}</svg>
            <ChartLegend entries=legend/>
        </div>
    }
}

#[component]
pub fn BarChart(labels: Vec<String>, values: Vec<f64>, color: String) -> impl IntoView {
    let series = vec![SeriesDatum::new("", color, values)];
    view! { <GroupedBarChart labels=labels series=series show_legend=false/> }
}

#[component]
pub fn GroupedBarChart(
    labels: Vec<String>,
    series: Vec<SeriesDatum>,
    #[prop(optional, default = true)] show_legend: bool,
) -> impl IntoView {
    const W: f64 = 320.0;
    const H: f64 = 180.0;
    const PLOT_H: f64 = 150.0;

    let data_max = series
        .iter()
        .flat_map(|s| s.values.iter())
        .fold(0.0f64, |acc, v| acc.max(*v));
    let axis_max = nice_max(data_max);

    let group_count = labels.len().max(1);
    let group_width = W / group_count as f64;
    let bar_count = series.len().max(1);
    // Bars fill 70% of a group slot, gaps split the rest
    let bar_width = group_width * 0.7 / bar_count as f64;

    let grid = (1..=3)
        .map(|i| {
            let y = PLOT_H - PLOT_H * i as f64 / 3.0;
            view! { <line x1="0" y1=y x2=W y2=y stroke="#e5e5e5" stroke-width="0.5"/> }
        })
        .collect::<Vec<_>>();

    let bars = labels
        .iter()
        .enumerate()
        .flat_map(|(gi, _)| {
            let group_x = group_width * gi as f64 + group_width * 0.15;
            series
                .iter()
                .enumerate()
                .map(move |(si, s)| {
                    let value = s.values.get(gi).copied().unwrap_or(0.0);
                    let height = scale_linear(value, axis_max, PLOT_H);
                    let x = group_x + bar_width * si as f64;
                    let y = PLOT_H - height;
                    view! {
                        <rect
                            x=x
                            y=y
                            width=bar_width - 1.0
                            height=height
                            fill=s.color.clone()
                            rx="1"
                        />
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let tick_labels = labels
        .iter()
        .enumerate()
        .map(|(gi, label)| {
            let x = group_width * gi as f64 + group_width / 2.0;
            view! {
                <text x=x y=H - 8.0 text-anchor="middle" class="chart__tick">
                    {label.clone()}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let legend: Vec<(String, String)> = series
        .iter()
        .filter(|s| !s.name.is_empty())
        .map(|s| (s.name.clone(), s.color.clone()))
        .collect();
    let has_legend = show_legend && !legend.is_empty();

    view! {
        <div class="chart chart--bar">
            <svg viewBox=format!("0 0 {W} {H}") role="img">
                {grid}
                {bars}
                {tick_labels}
            </svg>
            <Show when=move || has_legend>
                <ChartLegend entries=legend.clone()/>
            </Show>
        </div>
    }
}

#[component]
pub fn LineChart(labels: Vec<String>, series: Vec<SeriesDatum>) -> impl IntoView {
    const W: f64 = 320.0;
    const H: f64 = 180.0;
    const PLOT_H: f64 = 150.0;

    let data_max = series
        .iter()
        .flat_map(|s| s.values.iter())
        .fold(0.0f64, |acc, v| acc.max(*v));
    let axis_max = nice_max(data_max);

    let grid = (1..=3)
        .map(|i| {
            let y = PLOT_H - PLOT_H * i as f64 / 3.0;
            view! { <line x1="0" y1=y x2=W y2=y stroke="#e5e5e5" stroke-width="0.5"/> }
        })
        .collect::<Vec<_>>();

    let lines = series
        .iter()
        .map(|s| {
            let points = polyline_points(&s.values, W, PLOT_H, axis_max);
            view! {
                <polyline
                    points=points
                    fill="none"
                    stroke=s.color.clone()
                    stroke-width="2"
                    stroke-linejoin="round"
                />
            }
        })
        .collect::<Vec<_>>();

    let step = if labels.len() > 1 {
        W / (labels.len() - 1) as f64
    } else {
        0.0
    };
    let tick_labels = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let anchor = if i == 0 {
                "start"
            } else if i == labels.len() - 1 {
                "end"
            } else {
                "middle"
            };
            view! {
                <text x=step * i as f64 y=H - 8.0 text-anchor=anchor class="chart__tick">
                    {label.clone()}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let legend: Vec<(String, String)> = series
        .iter()
        .map(|s| (s.name.clone(), s.color.clone()))
        .collect();

    view! {
        <div class="chart chart--line">
            <svg viewBox=format!("0 0 {W} {H}") role="img">
                {grid}
                {lines}
                {tick_labels}
            </svg>
            <ChartLegend entries=legend/>
        </div>
    }
}

#[component]
pub fn RadarChart(
    subjects: Vec<(String, f64)>,
    full_mark: f64,
    #[prop(optional, default = "#8b4513".to_string())] color: String,
) -> impl IntoView {
    const CX: f64 = 110.0;
    const CY: f64 = 100.0;
    const R: f64 = 70.0;

    let spoke_count = subjects.len().max(1);
    let angle_step = 360.0 / spoke_count as f64;

    // Concentric reference rings at 1/3, 2/3 and full radius
    let rings = (1..=3)
        .map(|i| {
            let radius = R * i as f64 / 3.0;
            let ring_values = vec![full_mark; spoke_count];
            let points = radar_polygon(&ring_values, full_mark, CX, CY, radius);
            view! { <polygon points=points fill="none" stroke="#e5e5e5" stroke-width="0.5"/> }
        })
        .collect::<Vec<_>>();

    let spokes = (0..spoke_count)
        .map(|i| {
            let (x, y) = polar_point(CX, CY, R, angle_step * i as f64);
            view! { <line x1=CX y1=CY x2=x y2=y stroke="#e5e5e5" stroke-width="0.5"/> }
        })
        .collect::<Vec<_>>();

    let values: Vec<f64> = subjects.iter().map(|(_, v)| *v).collect();
    let shape = radar_polygon(&values, full_mark, CX, CY, R);

    let labels = subjects
        .iter()
        .enumerate()
        .map(|(i, (subject, _))| {
            let (x, y) = polar_point(CX, CY, R + 14.0, angle_step * i as f64);
            view! {
                <text x=x y=y text-anchor="middle" class="chart__tick">
                    {subject.clone()}
                </text>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="chart chart--radar">
            <svg viewBox="0 0 220 200" role="img">
                {rings}
                {spokes}
                <polygon
                    points=shape
                    fill=format!("{}40", color)
                    stroke=color.clone()
                    stroke-width="2"
                />
                {labels}
            </svg>
        </div>
    }
}
