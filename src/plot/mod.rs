use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::config::plot::Palette;
use crate::config::{ImageFormat, PlotParams};

pub mod recall;
pub mod style;
pub mod time;

use style::{AxisSpec, band_polygon, finite_points, likely_band};

#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("failed to render {}: {message}", path.display())]
    Render { path: PathBuf, message: String },
    #[error("{0} output needs the `ttf` feature (system fonts); use --format svg")]
    UnsupportedFormat(ImageFormat),
}

/// Adaptive best/worst bounds plus the abbreviated and full reference lines
/// over a shared x axis.
#[derive(Debug, Clone)]
pub struct BandChart {
    pub x_desc: String,
    pub y_desc: String,
    pub x: Vec<f64>,
    pub best: Vec<f64>,
    pub worst: Vec<f64>,
    pub abbr: Vec<f64>,
    pub full: Vec<f64>,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
}

pub fn render(
    chart: &BandChart,
    path: &Path,
    format: ImageFormat,
    params: &PlotParams,
    palette: &Palette,
) -> Result<(), PlotError> {
    let size = (params.width, params.height);
    let result = match format {
        ImageFormat::Svg => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw_band_chart(&root, chart, params, palette).map_err(|e| e.to_string())
        }
        ImageFormat::Png if !cfg!(feature = "ttf") => {
            return Err(PlotError::UnsupportedFormat(format));
        }
        ImageFormat::Png => {
            let root = BitMapBackend::new(path, size).into_drawing_area();
            draw_band_chart(&root, chart, params, palette).map_err(|e| e.to_string())
        }
    };
    result.map_err(|message| PlotError::Render {
        path: path.to_path_buf(),
        message,
    })
}

/// Delegates to `WithKeyPoints` but opts into default value formatting, which
/// plotters 0.3.7 does not provide for key-point f64 axes (`configure_mesh`
/// needs it; the actual labels come from the explicit label formatters).
struct MeshAxis(plotters::coord::combinators::WithKeyPoints<plotters::coord::types::RangedCoordf64>);

impl Ranged for MeshAxis {
    type ValueType = f64;
    type FormatOption = plotters::coord::ranged1d::DefaultFormatting;

    fn range(&self) -> std::ops::Range<f64> {
        self.0.range()
    }

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.0.map(value, limit)
    }

    fn key_points<Hint: plotters::coord::ranged1d::KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        self.0.key_points(hint)
    }

    fn axis_pixel_range(&self, limit: (i32, i32)) -> std::ops::Range<i32> {
        self.0.axis_pixel_range(limit)
    }
}

fn draw_band_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &BandChart,
    params: &PlotParams,
    palette: &Palette,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let xa = &chart.x_axis;
    let ya = &chart.y_axis;
    let mut ctx = ChartBuilder::on(root)
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(90)
        .build_cartesian_2d(
            MeshAxis(
                (xa.lo..xa.hi)
                    .with_key_points(xa.major_ticks())
                    .with_light_points(xa.minor_ticks()),
            ),
            MeshAxis(
                (ya.lo..ya.hi)
                    .with_key_points(ya.major_ticks())
                    .with_light_points(ya.minor_ticks()),
            ),
        )?;

    let x_fmt = |v: &f64| xa.label(*v);
    let y_fmt = |v: &f64| ya.label(*v);
    ctx.configure_mesh()
        .x_desc(chart.x_desc.as_str())
        .y_desc(chart.y_desc.as_str())
        .axis_desc_style(("sans-serif", params.label_size as f64))
        .label_style(("sans-serif", params.tick_size as f64))
        .bold_line_style(BLACK.mix(0.25))
        .light_line_style(BLACK.mix(0.08))
        .x_label_formatter(&x_fmt)
        .y_label_formatter(&y_fmt)
        .draw()?;

    let ai = palette.ai;
    let alpha = palette.ai_alpha;
    let width = params.linewidth;

    let (likely_lo, likely_hi) = likely_band(&chart.best, &chart.worst);
    let bands = [
        (band_polygon(&chart.x, &chart.best, &chart.worst), alpha),
        (band_polygon(&chart.x, &likely_lo, &likely_hi), (alpha * 2.0).min(1.0)),
    ];
    for (outline, a) in bands {
        if outline.len() < 3 {
            continue;
        }
        ctx.draw_series(std::iter::once(Polygon::new(outline, ai.mix(a).filled())))?;
    }
    for edge in [&likely_lo, &likely_hi] {
        ctx.draw_series(DashedLineSeries::new(
            finite_points(&chart.x, edge),
            4u32,
            4u32,
            ai.stroke_width(1),
        ))?;
    }

    let abbr = palette.abbr;
    ctx.draw_series(LineSeries::new(
        finite_points(&chart.x, &chart.abbr),
        abbr.stroke_width(width),
    ))?
    .label("Abbreviated")
    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], abbr.stroke_width(width)));

    let full = palette.full;
    ctx.draw_series(LineSeries::new(
        finite_points(&chart.x, &chart.full),
        full.stroke_width(width),
    ))?
    .label("Full")
    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], full.stroke_width(width)));

    ctx.draw_series(LineSeries::new(
        finite_points(&chart.x, &chart.best),
        ai.stroke_width(width),
    ))?
    .label("Adaptive")
    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], ai.stroke_width(width)));
    ctx.draw_series(LineSeries::new(
        finite_points(&chart.x, &chart.worst),
        ai.stroke_width(width),
    ))?;

    if let Some(marker) = ya.break_marker(xa.lo, xa.hi - xa.lo) {
        ctx.draw_series(std::iter::once(PathElement::new(
            marker,
            BLACK.stroke_width(1),
        )))?;
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::LowerLeft)
        .label_font(("sans-serif", params.legend_size as f64))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/plot/mod.rs"]
mod tests;
