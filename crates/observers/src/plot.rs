//! Plot of a function together with the iterates of a solve.
//!
//! See [`FunctionPlot`] for usage.

use eframe::egui::{self, Color32};
use egui_plot::{Arrows, Legend, Line, Plot, PlotPoints, Points};
use rootline_core::Function;

/// Number of samples taken across the plotted window.
const SAMPLES: usize = 2000;

/// Configuration for rendering a [`FunctionPlot`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// plot.show(ShowConfig::new().title("Modified Newton").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling the curve and the iterates.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A sampled function curve with the iterates of a solve drawn on top.
///
/// The plot only consumes the iterate positions (for example
/// [`Solution::plot_points`]); it never influences the solve. Each iterate is
/// drawn as a marker on the x-axis, a marker on the curve, and a vertical
/// segment between them, with arrows along the axis from one iterate to the
/// next.
///
/// Points where the function fails or is not finite are left out of the
/// curve, which splits it into separate segments.
///
/// # Example
///
/// ```ignore
/// let solution = newton::modified::solve_unobserved(&f, &df, x0, &config)?;
/// FunctionPlot::new(&f, solution.plot_points())
///     .show(ShowConfig::new().title("Modified Newton").legend())?;
/// ```
///
/// [`Solution::plot_points`]: rootline_solvers::equation::newton::Solution::plot_points
pub struct FunctionPlot {
    segments: Vec<Vec<[f64; 2]>>,
    iterates: Vec<[f64; 2]>,
}

impl FunctionPlot {
    /// Samples `function` over a window that covers `iterates`.
    pub fn new<F: Function>(function: &F, iterates: impl IntoIterator<Item = f64>) -> Self {
        let xs: Vec<f64> = iterates.into_iter().collect();
        let (min, max) = window(&xs);

        let iterates = xs
            .iter()
            .filter_map(|&x| finite_value(function, x).map(|y| [x, y]))
            .collect();

        Self {
            segments: sample(function, min, max, SAMPLES),
            iterates,
        }
    }

    /// Returns the curve segments, each a run of finite samples.
    #[must_use]
    pub fn segments(&self) -> &[Vec<[f64; 2]>] {
        &self.segments
    }

    /// Returns the iterates as `[x, f(x)]`, skipping any that cannot be evaluated.
    #[must_use]
    pub fn iterates(&self) -> &[[f64; 2]] {
        &self.iterates
    }

    /// Opens a blocking egui window displaying the curve and iterates.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.unwrap_or_default();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    plot: self,
                    legend: config.legend,
                }))
            }),
        )
    }
}

/// Returns the x-range to sample for the given iterates.
///
/// The range spans the iterates padded by 20 % of `max(1, 1.5 * spread)` on
/// each side, or `[-10, 10]` when there are no finite iterates.
fn window(xs: &[f64]) -> (f64, f64) {
    let finite = xs.iter().copied().filter(|x| x.is_finite());
    let Some((lo, hi)) = finite.fold(None, |range, x| match range {
        None => Some((x, x)),
        Some((lo, hi)) => Some((f64::min(lo, x), f64::max(hi, x))),
    }) else {
        return (-10.0, 10.0);
    };

    let span = f64::max(1.0, (hi - lo) * 1.5);
    let (min, max) = (lo - span * 0.2, hi + span * 0.2);

    if (max - min).abs() < 1e-8 {
        (min - 1.0, max + 1.0)
    } else {
        (min, max)
    }
}

/// Samples `function` at `count` evenly spaced points in `[min, max]`.
fn sample<F: Function>(function: &F, min: f64, max: f64, count: usize) -> Vec<Vec<[f64; 2]>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for i in 0..count {
        #[allow(clippy::cast_precision_loss)]
        let x = min + (max - min) * i as f64 / (count.saturating_sub(1).max(1)) as f64;
        match finite_value(function, x) {
            Some(y) => current.push([x, y]),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => {}
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

fn finite_value<F: Function>(function: &F, x: f64) -> Option<f64> {
    function.call(x).ok().filter(|y| y.is_finite())
}

/// The egui [`eframe::App`] that renders a [`FunctionPlot`].
struct PlotApp {
    plot: FunctionPlot,
    legend: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("function_plot");
            if self.legend {
                plot = plot.legend(Legend::default());
            }

            let iterates = &self.plot.iterates;
            plot.show(ui, |plot_ui| {
                for segment in &self.plot.segments {
                    let points: PlotPoints = segment.iter().copied().collect();
                    plot_ui.line(Line::new(points).color(Color32::BLUE).name("f(x)"));
                }

                for &[x, y] in iterates {
                    let riser: PlotPoints = vec![[x, 0.0], [x, y]].into();
                    plot_ui.line(Line::new(riser).color(Color32::from_rgb(255, 69, 0)));
                }

                if iterates.len() > 1 {
                    let origins: PlotPoints = iterates[..iterates.len() - 1]
                        .iter()
                        .map(|p| [p[0], 0.0])
                        .collect();
                    let tips: PlotPoints = iterates.iter().skip(1).map(|p| [p[0], 0.0]).collect();
                    plot_ui.arrows(
                        Arrows::new(origins, tips)
                            .color(Color32::from_rgb(255, 69, 0))
                            .name("steps"),
                    );
                }

                let on_axis: PlotPoints = iterates.iter().map(|p| [p[0], 0.0]).collect();
                plot_ui.points(
                    Points::new(on_axis)
                        .radius(5.0)
                        .color(Color32::RED)
                        .name("x_n"),
                );

                let on_curve: PlotPoints = iterates.iter().copied().collect();
                plot_ui.points(
                    Points::new(on_curve)
                        .radius(5.0)
                        .color(Color32::DARK_BLUE)
                        .name("f(x_n)"),
                );
            });
        });
    }
}
