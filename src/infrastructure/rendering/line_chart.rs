use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::{
    errors::{ExternalServiceError, InfrastructureError, InfrastructureResult},
    logging::{LogComponent, get_logger},
    market_data::CandlePoint,
};
use crate::time_utils::format_hour_minute;

const GRID_COLOR: &str = "#1e293b";
const AXIS_COLOR: &str = "#64748b";
const LINE_COLOR: &str = "#3b82f6";
const BACKGROUND: &str = "#0f172a";
const AXIS_FONT: &str = "12px sans-serif";

pub const Y_TICKS: usize = 5;
pub const MAX_X_LABELS: usize = 6;

/// Space reserved around the plot for axis labels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self { left: 70.0, right: 20.0, top: 16.0, bottom: 32.0 }
    }
}

/// Visible close-price range, padded so the line never touches the edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceDomain {
    pub min: f64,
    pub max: f64,
}

impl PriceDomain {
    /// `None` when no point has a finite close.
    pub fn from_points(points: &[CandlePoint]) -> Option<Self> {
        let (min, max) = points
            .iter()
            .map(|p| p.close)
            .filter(|close| close.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, close| match acc {
                Some((lo, hi)) => Some((lo.min(close), hi.max(close))),
                None => Some((close, close)),
            })?;

        let span = max - min;
        let pad = if span > 0.0 {
            span * 0.05
        } else if min != 0.0 {
            min.abs() * 0.01
        } else {
            1.0
        };
        Some(Self { min: min - pad, max: max + pad })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Evenly spaced tick values from `max` down to `min`.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match count {
            0 => Vec::new(),
            1 => vec![(self.min + self.max) / 2.0],
            _ => {
                let step = self.span() / (count - 1) as f64;
                (0..count).map(|i| self.max - step * i as f64).collect()
            }
        }
    }

    /// Fixed decimals suited to the span: FX quotes need five, indices two.
    pub fn format_price(&self, value: f64) -> String {
        let span = self.span();
        let decimals = if span < 0.1 {
            5
        } else if span < 10.0 {
            3
        } else {
            2
        };
        format!("{:.*}", decimals, value)
    }
}

/// Canvas coordinates of a close-price line
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartGeometry {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub domain: PriceDomain,
    /// Parallel to the input; non-finite closes map to `None`
    pub vertices: Vec<Option<(f64, f64)>>,
}

impl LineChartGeometry {
    pub fn compute(points: &[CandlePoint], width: f64, height: f64) -> Option<Self> {
        Self::compute_with_margins(points, width, height, Margins::default())
    }

    pub fn compute_with_margins(points: &[CandlePoint], width: f64, height: f64, margins: Margins) -> Option<Self> {
        let domain = PriceDomain::from_points(points)?;
        let mut geometry = Self { width, height, margins, domain, vertices: Vec::with_capacity(points.len()) };

        let count = points.len();
        for (index, point) in points.iter().enumerate() {
            let vertex = point.close.is_finite().then(|| (geometry.x_for(index, count), geometry.y_for(point.close)));
            geometry.vertices.push(vertex);
        }
        Some(geometry)
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.margins.left - self.margins.right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.margins.top - self.margins.bottom).max(0.0)
    }

    /// Category axis: points are spaced by index, not by time.
    pub fn x_for(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.margins.left + self.plot_width() / 2.0;
        }
        self.margins.left + self.plot_width() * index as f64 / (count - 1) as f64
    }

    pub fn y_for(&self, price: f64) -> f64 {
        let ratio = (self.domain.max - price) / self.domain.span();
        self.margins.top + ratio.clamp(0.0, 1.0) * self.plot_height()
    }
}

/// Indices to label on the time axis, at most `max_labels`, first always included.
pub fn label_indices(count: usize, max_labels: usize) -> Vec<usize> {
    if count == 0 || max_labels == 0 {
        return Vec::new();
    }
    let step = count.div_ceil(max_labels).max(1);
    (0..count).step_by(step).collect()
}

/// Canvas 2D line chart of closing prices
pub struct LineChartRenderer {
    width: u32,
    height: u32,
}

impl LineChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn context(&self, canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
        canvas.set_width(self.width);
        canvas.set_height(self.height);

        canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2D context"))
    }

    /// Draws the grid, both axes and the close line. Nothing is drawn for an
    /// empty series; the modal shows its placeholder instead.
    pub fn render(&self, canvas: &HtmlCanvasElement, points: &[CandlePoint]) -> InfrastructureResult<()> {
        self.draw(canvas, points).map_err(|e| {
            let message = e.as_string().unwrap_or_else(|| format!("{:?}", e));
            InfrastructureError::External(ExternalServiceError::BrowserApiError(message))
        })
    }

    fn draw(&self, canvas: &HtmlCanvasElement, points: &[CandlePoint]) -> Result<(), JsValue> {
        let context = self.context(canvas)?;
        let (width, height) = (self.width as f64, self.height as f64);

        context.clear_rect(0.0, 0.0, width, height);
        context.set_fill_style_str(BACKGROUND);
        context.fill_rect(0.0, 0.0, width, height);

        let Some(geometry) = LineChartGeometry::compute(points, width, height) else {
            get_logger().warn(LogComponent::Infrastructure("LineChart"), "No finite closes to render");
            return Ok(());
        };

        self.render_grid(&context, &geometry)?;
        self.render_time_axis(&context, &geometry, points)?;
        self.render_line(&context, &geometry);

        get_logger().debug(
            LogComponent::Infrastructure("LineChart"),
            &format!("📈 Rendered {} points", points.len()),
        );
        Ok(())
    }

    fn render_grid(&self, context: &CanvasRenderingContext2d, geometry: &LineChartGeometry) -> Result<(), JsValue> {
        let dash = js_sys::Array::of2(&JsValue::from_f64(3.0), &JsValue::from_f64(3.0));
        context.set_line_dash(&dash)?;
        context.set_line_width(1.0);
        context.set_font(AXIS_FONT);

        let left = geometry.margins.left;
        let right = left + geometry.plot_width();
        for tick in geometry.domain.ticks(Y_TICKS) {
            let y = geometry.y_for(tick);

            context.set_stroke_style_str(GRID_COLOR);
            context.begin_path();
            context.move_to(left, y);
            context.line_to(right, y);
            context.stroke();

            context.set_fill_style_str(AXIS_COLOR);
            context.fill_text(&geometry.domain.format_price(tick), 6.0, y + 4.0)?;
        }

        context.set_line_dash(&js_sys::Array::new())?;
        Ok(())
    }

    fn render_time_axis(
        &self,
        context: &CanvasRenderingContext2d,
        geometry: &LineChartGeometry,
        points: &[CandlePoint],
    ) -> Result<(), JsValue> {
        context.set_fill_style_str(AXIS_COLOR);
        context.set_font(AXIS_FONT);

        let baseline = geometry.height - geometry.margins.bottom / 3.0;
        for index in label_indices(points.len(), MAX_X_LABELS) {
            let x = geometry.x_for(index, points.len());
            let label = format_hour_minute(&points[index].time);
            context.fill_text(&label, x - 16.0, baseline)?;
        }
        Ok(())
    }

    fn render_line(&self, context: &CanvasRenderingContext2d, geometry: &LineChartGeometry) {
        context.set_stroke_style_str(LINE_COLOR);
        context.set_line_width(2.0);
        context.begin_path();

        let mut pen_down = false;
        for vertex in &geometry.vertices {
            match vertex {
                Some((x, y)) if pen_down => context.line_to(*x, *y),
                Some((x, y)) => {
                    context.move_to(*x, *y);
                    pen_down = true;
                }
                None => pen_down = false,
            }
        }
        context.stroke();
    }
}
