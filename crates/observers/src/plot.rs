//! Plotting observer for visualizing minimizer behavior.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use descent_core::Observer;
use descent_solvers::optimization::line_search;
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::contour::LevelCurve;

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Rosenbrock").legend().log_y())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    log_y: bool,
    markers: bool,
    equal_axes: bool,
    level_curves: Vec<LevelCurve>,
}

impl ShowConfig {
    /// Creates a new `ShowConfig`: no title, no legend, linear scale, lines only.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            log_y: false,
            markers: false,
            equal_axes: false,
            level_curves: Vec::new(),
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Enables a logarithmic y-axis (base 10).
    ///
    /// Non-positive y values are skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }

    /// Draws a marker at every recorded point in addition to the line.
    #[must_use]
    pub fn markers(mut self) -> Self {
        self.markers = true;
        self
    }

    /// Uses the same scale on both axes, which keeps paths in the plane undistorted.
    #[must_use]
    pub fn equal_axes(mut self) -> Self {
        self.equal_axes = true;
        self
    }

    /// Draws level curves, such as those from [`Contour::trace`], beneath the traces.
    ///
    /// The curves are unlabeled and never appear in the legend.
    ///
    /// [`Contour::trace`]: crate::contour::Contour::trace
    #[must_use]
    pub fn level_curves(mut self, curves: Vec<LevelCurve>) -> Self {
        self.level_curves = curves;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts plottable data from a solver event.
///
/// Implement this on an event type to pass [`PlotObserver`] directly as a
/// solver observer. Return `None` from [`x`][Plottable::x] to skip the event
/// entirely, or `None` in a trace slot to skip only that trace.
///
/// [`line_search::Event`] implements `Plottable<1>`, plotting the objective
/// against the iteration counter. [`Event::Converged`] is skipped because its
/// point was already recorded when it was accepted.
///
/// [`Event::Converged`]: line_search::Event::Converged
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

impl<const D: usize> Plottable<1> for line_search::Event<'_, D> {
    #[allow(clippy::cast_precision_loss)]
    fn x(&self) -> Option<f64> {
        match self {
            Self::Converged { .. } => None,
            Self::Started { record } | Self::Accepted { record, .. } => Some(record.iter as f64),
        }
    }

    fn traces(&self) -> [Option<f64>; 1] {
        [Some(self.record().value)]
    }
}

/// An observer that collects trace data during a run and displays it via egui.
///
/// The const generic `N` is the number of traces. Record data either by:
///
/// - **Direct path** — pass `&mut PlotObserver` as the observer when the event
///   type implements [`Plottable<N>`][Plottable].
/// - **Closure path** — wrap `&mut PlotObserver` in a closure and call
///   [`record`][PlotObserver::record], for example to put several runs or a
///   path in the plane on one plot.
///
/// Call [`show`][PlotObserver::show] with a [`ShowConfig`] to render the result.
///
/// # Example — direct path
///
/// ```ignore
/// let mut obs = PlotObserver::<1>::new(["f(x)"]);
/// line_search::minimize(&Rosenbrock, [-1.0, 2.0], &config, &mut obs)?;
/// obs.show(ShowConfig::new().title("Rosenbrock").log_y())?;
/// ```
///
/// # Example — closure path
///
/// ```ignore
/// let mut obs = PlotObserver::<1>::new(["path"]);
/// line_search::minimize(&Rosenbrock, [-1.0, 2.0], &config, |event: &line_search::Event<'_, 2>| {
///     let [x, y] = event.record().x;
///     obs.record(x, [Some(y)]);
///     None
/// })?;
/// obs.show(ShowConfig::new().markers().equal_axes())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// `None` in a slot skips that trace for this point.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (points, y) in self.data.iter_mut().zip(traces) {
            if let Some(y) = y {
                points.push([x, y]);
            }
        }
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.clone().unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| Ok(Box::new(PlotApp { traces, config }))),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the run completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    config: ShowConfig,
}

impl PlotApp {
    fn plot_points(&self, points: &[[f64; 2]]) -> PlotPoints {
        if self.config.log_y {
            points
                .iter()
                .filter(|p| p[1] > 0.0)
                .map(|p| [p[0], p[1].log10()])
                .collect()
        } else {
            points.iter().copied().collect()
        }
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("plot_observer");
            if self.config.legend {
                plot = plot.legend(Legend::default());
            }
            if self.config.log_y {
                plot = plot.y_axis_label("log₁₀");
            }
            if self.config.equal_axes {
                plot = plot.data_aspect(1.0);
            }
            plot.show(ui, |plot_ui| {
                for curve in &self.config.level_curves {
                    let points: PlotPoints = curve.points.iter().copied().collect();
                    plot_ui.line(Line::new(points).color(egui::Color32::GRAY).width(1.0));
                }
                for (name, points) in &self.traces {
                    plot_ui.line(Line::new(self.plot_points(points)).name(name));
                    if self.config.markers {
                        let markers = Points::new(self.plot_points(points)).name(name).radius(3.0);
                        plot_ui.points(markers);
                    }
                }
            });
        });
    }
}
