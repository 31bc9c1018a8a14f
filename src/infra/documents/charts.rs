use chrono::NaiveDate;
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use std::io::Cursor;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::AppError;

// Text goes through plotters' ab_glyph backend with this embedded face, so
// rendering never depends on fonts installed on the host.
const CHART_FONT: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSans.ttf");
const FONT_FAMILY: &str = "sans-serif";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Bar: attendees per event.
    Attendance,
    /// Bar: feedback per sentiment label.
    Sentiment,
    /// Line: registrations per day.
    Registrations,
}

impl ChartKind {
    pub fn options(&self) -> ChartOptions {
        let (title, x_label, y_label) = match self {
            ChartKind::Attendance => ("Attendance by Event", "Event", "Attendees"),
            ChartKind::Sentiment => ("Feedback Sentiment", "Sentiment", "Feedback"),
            ChartKind::Registrations => ("Registrations per Day", "Date", "Registrations"),
        };
        ChartOptions {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            ..ChartOptions::default()
        }
    }
}

impl FromStr for ChartKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attendance" => Ok(ChartKind::Attendance),
            "sentiment" => Ok(ChartKind::Sentiment),
            "registrations" => Ok(ChartKind::Registrations),
            other => Err(AppError::NotFound(format!("Unknown chart '{}'", other))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            width: 800,
            height: 600,
        }
    }
}

const BAR_COLOR: RGBColor = RGBColor(2, 119, 189);
const LINE_COLOR: RGBColor = RGBColor(1, 87, 155);

fn ensure_font() -> Result<(), AppError> {
    static FONT_READY: OnceLock<bool> = OnceLock::new();
    let ready = *FONT_READY.get_or_init(|| {
        plotters::style::register_font(FONT_FAMILY, FontStyle::Normal, CHART_FONT).is_ok()
    });
    if ready {
        Ok(())
    } else {
        Err(AppError::InternalWithMsg("Embedded chart font could not be loaded".into()))
    }
}

/// One labelled bar per entry, in the order given.
pub fn render_bar_chart(bars: &[(String, usize)], options: &ChartOptions) -> Result<Vec<u8>, AppError> {
    ensure_font()?;
    let mut buffer = vec![0u8; (options.width * options.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (options.width, options.height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let slots = bars.len().max(1) as u32;
        let max_y = bars.iter().map(|(_, count)| *count).max().unwrap_or(0).max(1) as u32;
        let mut chart = ChartBuilder::on(&root)
            .caption(&options.title, (FONT_FAMILY, 30).into_font())
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d((0u32..slots).into_segmented(), 0u32..max_y + 1)
            .map_err(chart_error)?;

        let label_of = |value: &SegmentValue<u32>| match value {
            SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
                bars.get(*i as usize).map(|(label, _)| label.clone()).unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        };
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(bars.len().max(1))
            .x_label_formatter(&label_of)
            .x_desc(options.x_label.as_str())
            .y_desc(options.y_label.as_str())
            .draw()
            .map_err(chart_error)?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(BAR_COLOR.filled())
                    .margin(12)
                    .data(bars.iter().enumerate().map(|(i, (_, count))| (i as u32, *count as u32))),
            )
            .map_err(chart_error)?;
        root.present().map_err(chart_error)?;
    }
    encode_png(buffer, options)
}

pub fn render_line_chart(points: &[(NaiveDate, usize)], options: &ChartOptions) -> Result<Vec<u8>, AppError> {
    ensure_font()?;
    let mut buffer = vec![0u8; (options.width * options.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (options.width, options.height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        let last_x = points.len().saturating_sub(1).max(1) as u32;
        let max_y = points.iter().map(|(_, c)| *c).max().unwrap_or(0).max(1) as u32;
        let mut chart = ChartBuilder::on(&root)
            .caption(&options.title, (FONT_FAMILY, 30).into_font())
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(0u32..last_x, 0u32..max_y + 1)
            .map_err(chart_error)?;

        let dates: Vec<String> = points.iter().map(|(date, _)| date.format("%Y-%m-%d").to_string()).collect();
        let date_of = |i: &u32| dates.get(*i as usize).cloned().unwrap_or_default();
        chart
            .configure_mesh()
            .x_labels(points.len().max(2))
            .x_label_formatter(&date_of)
            .x_desc(options.x_label.as_str())
            .y_desc(options.y_label.as_str())
            .draw()
            .map_err(chart_error)?;

        let series: Vec<(u32, u32)> = points
            .iter()
            .enumerate()
            .map(|(i, (_, count))| (i as u32, *count as u32))
            .collect();

        chart
            .draw_series(LineSeries::new(series.iter().copied(), LINE_COLOR.stroke_width(3)))
            .map_err(chart_error)?;
        chart
            .draw_series(series.iter().map(|p| Circle::new(*p, 5, LINE_COLOR.filled())))
            .map_err(chart_error)?;
        root.present().map_err(chart_error)?;
    }
    encode_png(buffer, options)
}

fn encode_png(buffer: Vec<u8>, options: &ChartOptions) -> Result<Vec<u8>, AppError> {
    let img = RgbImage::from_raw(options.width, options.height, buffer)
        .ok_or_else(|| AppError::InternalWithMsg("Chart buffer has unexpected size".into()))?;
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| AppError::InternalWithMsg(format!("Chart PNG encoding failed: {}", e)))?;
    Ok(bytes)
}

fn chart_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::InternalWithMsg(format!("Chart rendering failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(png: &[u8]) -> RgbImage {
        image::load_from_memory(png).unwrap().to_rgb8()
    }

    fn has_dark_pixel_in_rows(img: &RgbImage, rows: std::ops::Range<u32>) -> bool {
        img.enumerate_pixels()
            .any(|(_, y, p)| rows.contains(&y) && p.0.iter().all(|c| *c < 100))
    }

    #[test]
    fn test_bar_chart_png() {
        let bars = vec![
            ("Tech Summit 2025".to_string(), 3),
            ("Data Conference".to_string(), 0),
            ("Pop-up Workshop".to_string(), 7),
        ];
        let png = render_bar_chart(&bars, &ChartKind::Attendance.options()).unwrap();
        let img = decode(&png);
        assert_eq!((img.width(), img.height()), (800, 600));
        assert_eq!(img.get_pixel(2, 2).0, [255, 255, 255]);
        assert!(img.pixels().any(|p| p.0 == [2, 119, 189]));
    }

    #[test]
    fn test_title_is_drawn() {
        let bars = vec![("Positive".to_string(), 2)];
        let titled = decode(&render_bar_chart(&bars, &ChartKind::Sentiment.options()).unwrap());
        assert!(has_dark_pixel_in_rows(&titled, 0..50));

        let untitled = decode(&render_bar_chart(&bars, &ChartOptions::default()).unwrap());
        assert!(!has_dark_pixel_in_rows(&untitled, 0..15));
    }

    #[test]
    fn test_line_chart_png() {
        let points = vec![
            (NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(), 2),
            (NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(), 5),
        ];
        let options = ChartOptions { width: 400, height: 300, ..ChartKind::Registrations.options() };
        let img = decode(&render_line_chart(&points, &options).unwrap());
        assert_eq!((img.width(), img.height()), (400, 300));
        assert!(img.pixels().any(|p| p.0 == [1, 87, 155]));
    }

    #[test]
    fn test_chart_kind_parsing() {
        assert_eq!("registrations".parse::<ChartKind>().unwrap(), ChartKind::Registrations);
        assert!(matches!("pie".parse::<ChartKind>(), Err(AppError::NotFound(_))));
        assert_eq!(ChartKind::Attendance.options().title, "Attendance by Event");
    }
}
