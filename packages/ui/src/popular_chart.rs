//! "Most Popular Workshops" chart, drawn as inline SVG.

use api::PopularWorkshop;
use dioxus::prelude::*;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 240.0;
const PAD: f64 = 24.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
}

impl ChartKind {
    pub fn toggled(self) -> Self {
        match self {
            ChartKind::Bar => ChartKind::Line,
            ChartKind::Line => ChartKind::Bar,
        }
    }

    /// Label of the button that switches away from this kind.
    pub fn toggle_label(self) -> &'static str {
        match self {
            ChartKind::Bar => "Switch to Line Chart",
            ChartKind::Line => "Switch to Bar Chart",
        }
    }
}

/// Plot coordinates: one `(x, y)` per workshop, scaled to the peak count.
fn points(workshops: &[PopularWorkshop], peak: u64) -> Vec<(f64, f64)> {
    let n = workshops.len().max(1) as f64;
    let step = (WIDTH - 2.0 * PAD) / n;
    let peak = peak.max(1) as f64;
    workshops
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let x = PAD + step * (i as f64 + 0.5);
            let y = HEIGHT - PAD - (HEIGHT - 2.0 * PAD) * (w.bookings as f64 / peak);
            (x, y)
        })
        .collect()
}

fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn PopularChart(workshops: Vec<PopularWorkshop>, peak: u64, kind: ChartKind) -> Element {
    let plotted = points(&workshops, peak);
    let step = (WIDTH - 2.0 * PAD) / workshops.len().max(1) as f64;
    let bar_width = step * 0.6;
    let baseline = HEIGHT - PAD;
    let axis_end = WIDTH - PAD;
    let view_box = format!("0 0 {WIDTH} {HEIGHT}");
    let line = polyline(&plotted);
    let marks: Vec<(String, String, f64, f64, f64)> = workshops
        .iter()
        .zip(plotted.iter())
        .map(|(w, (x, y))| {
            let tip = format!("{}: {}", w.title, w.bookings);
            (w.title.clone(), tip, *x, *y, baseline - y)
        })
        .collect();

    rsx! {
        svg {
            class: "w-full h-64",
            view_box,
            line { x1: "{PAD}", y1: "{baseline}", x2: "{axis_end}", y2: "{baseline}", stroke: "#d1d5db" }
            if kind == ChartKind::Line {
                polyline { points: "{line}", fill: "none", stroke: "#0d9488", stroke_width: "2" }
            }
            for (key, tip, x, y, height) in marks {
                if kind == ChartKind::Bar {
                    rect {
                        key: "{key}",
                        x: x - bar_width / 2.0,
                        y,
                        width: bar_width,
                        height,
                        fill: "#14b8a6",
                        title { "{tip}" }
                    }
                } else {
                    circle {
                        key: "{key}",
                        cx: x,
                        cy: y,
                        r: "4",
                        fill: "#0d9488",
                        title { "{tip}" }
                    }
                }
            }
        }
        div {
            class: "flex justify-around text-xs text-gray-500 mt-1",
            for w in workshops.iter() {
                span { key: "{w.title}", class: "truncate px-1", "{w.title}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workshop(title: &str, bookings: u64) -> PopularWorkshop {
        PopularWorkshop {
            title: title.to_string(),
            bookings,
        }
    }

    #[test]
    fn test_toggle_labels() {
        let kind = ChartKind::default();
        assert_eq!(kind.toggle_label(), "Switch to Line Chart");
        assert_eq!(kind.toggled().toggle_label(), "Switch to Bar Chart");
        assert_eq!(kind.toggled().toggled(), ChartKind::Bar);
    }

    #[test]
    fn test_peak_reaches_top() {
        let plotted = points(&[workshop("a", 5), workshop("b", 10), workshop("c", 0)], 10);
        assert_eq!(plotted[1].1, PAD);
        assert_eq!(plotted[2].1, HEIGHT - PAD);
        assert!(plotted[0].0 < plotted[1].0);
    }
}
