use approx::assert_relative_eq;
use report_layout::api::plot_rect;
use report_layout::core::{
    AxisKind, AxisSettings, AxisValueType, DataPoint, PlotData, PlotSettings, PlotType, Size,
    Thickness, mm_to_units, package_data,
};
use report_layout::core::TickStyle;
use report_layout::render::{Color, NullRenderer, Stroke, TextHAlign, TextVAlign};
use report_layout::{LayoutError, PlotEngine, PlotLayoutConfig, build_plot_frame};

fn bare_config() -> PlotLayoutConfig {
    PlotLayoutConfig::default()
        .with_margins(Thickness::new(40.0, 30.0, 20.0, 10.0))
        .with_background(None)
        .with_border(None)
}

fn content() -> Size {
    Size::new(440.0, 240.0)
}

fn single_line_settings() -> PlotSettings {
    let mut settings = PlotSettings::new();
    let x = settings.add_axis(AxisSettings::x()).expect("x axis");
    let y = settings
        .add_axis(AxisSettings::y().with_divisions(2, 5))
        .expect("y axis");
    let points = package_data(&[0.0, 10.0], &[0.0, 100.0]).expect("points");
    assert!(settings.add_data(PlotData::new(x, y, points)));
    settings
}

#[test]
fn plot_rect_is_content_minus_margins() {
    let rect = plot_rect(content(), &bare_config()).expect("plot rect");
    assert_eq!((rect.x, rect.y, rect.width, rect.height), (40.0, 30.0, 380.0, 200.0));
}

#[test]
fn line_series_maps_extrema_to_plot_corners() {
    let frame = build_plot_frame(&single_line_settings(), content(), &bare_config()).expect("frame");

    assert_eq!(frame.polylines.len(), 1);
    let points = &frame.polylines[0].points;
    assert_eq!(points.len(), 2);
    assert_relative_eq!(points[0].x, 40.0);
    assert_relative_eq!(points[0].y, 230.0);
    assert_relative_eq!(points[1].x, 420.0);
    assert_relative_eq!(points[1].y, 30.0);
}

#[test]
fn axes_emit_ticks_baselines_and_x_labels() {
    let frame = build_plot_frame(&single_line_settings(), content(), &bare_config()).expect("frame");

    // 101 X ticks + 11 Y ticks + two baselines.
    assert_eq!(frame.lines.len(), 114);
    // Data point numbers label the X majors; Y has no data point numbers.
    assert_eq!(frame.texts.len(), 11);

    let major_length = 2.0 * mm_to_units(0.5);
    let x_majors = frame
        .lines
        .iter()
        .filter(|line| line.x1 == line.x2)
        .filter(|line| ((line.y2 - line.y1) - major_length).abs() < 1e-9)
        .count();
    assert_eq!(x_majors, 11);

    let first = &frame.texts[0];
    assert_eq!(first.text, "0");
    assert_relative_eq!(first.x, 40.0);
    assert!(first.y > 230.0);
    assert_eq!(first.h_align, TextHAlign::Center);
    assert_eq!(first.v_align, TextVAlign::Top);
    assert_eq!(frame.texts[10].text, "2");
}

#[test]
fn zero_range_axis_is_an_error() {
    let mut settings = PlotSettings::new();
    let x = settings.add_axis(AxisSettings::x()).expect("x axis");
    let y = settings.add_axis(AxisSettings::y()).expect("y axis");
    let points = vec![DataPoint::new(1.0, 5.0), DataPoint::new(1.0, 6.0)];
    assert!(settings.add_data(PlotData::new(x, y, points)));

    let err = build_plot_frame(&settings, content(), &bare_config()).expect_err("flat x range");
    assert!(matches!(
        err,
        LayoutError::DegenerateAxisRange {
            kind: AxisKind::X,
            index: 0,
            ..
        }
    ));
}

#[test]
fn drawn_axis_without_data_is_an_error() {
    let mut settings = single_line_settings();
    settings.add_axis(AxisSettings::y()).expect("unused y axis");

    let err = build_plot_frame(&settings, content(), &bare_config()).expect_err("empty axis");
    assert!(matches!(
        err,
        LayoutError::DegenerateAxisRange {
            kind: AxisKind::Y,
            index: 2,
            ..
        }
    ));
}

#[test]
fn secondary_y_axis_sits_on_right_edge() {
    let mut settings = single_line_settings();
    let x = settings.first(AxisKind::X).expect("x axis");
    let right = settings
        .add_axis(
            AxisSettings::y()
                .with_divisions(4, 1)
                .with_value_type(AxisValueType::Raw)
                .with_precision(0),
        )
        .expect("right axis");
    let points = package_data(&[0.0, 10.0], &[100.0, 0.0]).expect("points");
    assert!(settings.add_data(PlotData::new(x, right, points).with_plot_type(PlotType::Dots)));

    let frame = build_plot_frame(&settings, content(), &bare_config()).expect("frame");
    assert_eq!(frame.markers.len(), 2);

    let right_ticks = frame
        .lines
        .iter()
        .filter(|line| line.y1 == line.y2)
        .filter(|line| ((line.x1 + line.x2) * 0.5 - 420.0).abs() < 1e-9)
        .count();
    assert_eq!(right_ticks, 5);

    let labels: Vec<&str> = frame
        .texts
        .iter()
        .filter(|text| text.x == 430.0)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(labels, vec!["100", "75", "50", "25", "0"]);
    let top_label = frame
        .texts
        .iter()
        .find(|text| text.text == "100")
        .expect("top label");
    assert_relative_eq!(top_label.y, 30.0);
    assert_eq!(top_label.v_align, TextVAlign::Middle);
}

#[test]
fn date_axis_labels_major_ticks_with_pattern() {
    let mut settings = PlotSettings::new();
    let x = settings
        .add_axis(
            AxisSettings::x()
                .with_divisions(2, 1)
                .with_value_type(AxisValueType::OaDate)
                .with_date_pattern("%Y-%m-%d"),
        )
        .expect("x axis");
    let y = settings.add_axis(AxisSettings::y()).expect("y axis");
    let points = package_data(&[45_000.0, 45_010.0], &[1.0, 2.0]).expect("points");
    assert!(settings.add_data(PlotData::new(x, y, points)));

    let frame = build_plot_frame(&settings, content(), &bare_config()).expect("frame");
    let labels: Vec<&str> = frame.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, vec!["2023-03-15", "2023-03-20", "2023-03-25"]);
}

#[test]
fn bar_series_grows_from_plot_bottom() {
    let mut settings = PlotSettings::new();
    let x = settings.add_axis(AxisSettings::x()).expect("x axis");
    let y = settings.add_axis(AxisSettings::y()).expect("y axis");
    let points = package_data(&[0.0, 1.0, 2.0], &[0.0, 50.0, 100.0]).expect("points");
    assert!(settings.add_data(
        PlotData::new(x, y, points)
            .with_plot_type(PlotType::Bar)
            .with_color(Color::GRAY)
    ));

    let frame = build_plot_frame(&settings, content(), &bare_config()).expect("frame");
    assert_eq!(frame.rects.len(), 3);

    let middle = frame.rects[1];
    // Centres are 190 apart; default bars take 80% of that.
    assert_relative_eq!(middle.width, 152.0);
    assert_relative_eq!(middle.x, 40.0 + 190.0 - 76.0);
    assert_relative_eq!(middle.y, 130.0);
    assert_relative_eq!(middle.y + middle.height, 230.0);
    assert_eq!(middle.fill, Some(Color::GRAY));

    let first = frame.rects[0];
    assert_relative_eq!(first.x, 40.0);
    assert_relative_eq!(first.width, 76.0);
}

#[test]
fn title_background_and_border_frame_the_plot() {
    let settings = single_line_settings().with_title("Chamber pressure");
    let config = PlotLayoutConfig::default()
        .with_margins(Thickness::new(40.0, 30.0, 20.0, 10.0))
        .with_title_top(12.0);

    let frame = build_plot_frame(&settings, content(), &config).expect("frame");

    let background = frame.rects.first().expect("background");
    assert_eq!(background.fill, Some(Color::WHITE));
    assert_eq!((background.width, background.height), (440.0, 240.0));

    let border = frame.rects.last().expect("border");
    assert!(border.fill.is_none());
    assert!(border.stroke.is_some());

    let title = frame.texts.last().expect("title");
    assert_eq!(title.text, "Chamber pressure");
    assert_eq!((title.x, title.y), (220.0, 12.0));
    assert_eq!(title.h_align, TextHAlign::Center);
    assert_eq!(title.v_align, TextVAlign::Top);
}

#[test]
fn engine_forwards_frames_to_renderer() {
    let mut engine = PlotEngine::new(NullRenderer::default(), bare_config()).expect("engine");
    let frame = engine
        .render(&single_line_settings(), content())
        .expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_line_count, 114);
    assert_eq!(renderer.last_text_count, 11);
    assert_eq!(renderer.last_primitive_count, frame.primitive_count());

    assert!(
        engine
            .set_config(bare_config().with_bar_width_ratio(1.5))
            .is_err()
    );
    assert_eq!(engine.config(), bare_config());
}

#[test]
fn invalid_content_size_is_rejected() {
    let err = build_plot_frame(&single_line_settings(), Size::new(0.0, 100.0), &bare_config())
        .expect_err("empty content");
    assert!(matches!(err, LayoutError::InvalidSize { .. }));
}

#[test]
fn settings_survive_json_contract_roundtrip() {
    let settings = single_line_settings().with_title("Flow");
    let json = settings.to_json_contract_v1_pretty().expect("serialize");
    let restored = PlotSettings::from_json_str(&json).expect("deserialize");
    assert_eq!(restored.to_json_contract_v1(), settings.to_json_contract_v1());
    assert_eq!(restored.series()[0].thickness, settings.series()[0].thickness);

    let original = build_plot_frame(&settings, content(), &bare_config()).expect("frame");
    let reloaded = build_plot_frame(&restored, content(), &bare_config()).expect("frame");
    assert_eq!(original, reloaded);
}

#[test]
fn reloaded_series_bind_to_reloaded_axes() {
    let settings = single_line_settings();
    let json = settings.to_json_contract_v1_pretty().expect("serialize");
    let restored = PlotSettings::from_json_str(&json).expect("deserialize");

    let x = restored.first(AxisKind::X).expect("x axis");
    assert!(restored.contains(restored.series()[0].x_axis));
    assert_eq!(restored.series()[0].x_axis, x);
    assert!(!settings.contains(x));
}

#[test]
fn non_finite_sample_rejects_the_layout() {
    let mut settings = PlotSettings::new();
    let x = settings.add_axis(AxisSettings::x()).expect("x axis");
    let y = settings.add_axis(AxisSettings::y()).expect("y axis");
    let points = vec![
        DataPoint::new(0.0, 1.0),
        DataPoint::new(1.0, f64::NAN),
        DataPoint::new(2.0, 3.0),
    ];
    assert!(settings.add_data(PlotData::new(x, y, points)));

    let y_info = settings.axis_info(y).expect("y info");
    assert_eq!((y_info.min(), y_info.max(), y_info.count()), (1.0, 3.0, 3));

    let err = build_plot_frame(&settings, content(), &bare_config()).expect_err("nan sample");
    assert!(matches!(err, LayoutError::InvalidData(_)));
}

#[test]
fn oversized_axis_divisions_fail_the_layout() {
    let mut settings = PlotSettings::new();
    let x = settings
        .add_axis(AxisSettings::x().with_divisions(70_000, 70_000))
        .expect("x axis");
    let y = settings.add_axis(AxisSettings::y()).expect("y axis");
    let points = package_data(&[0.0, 1.0], &[0.0, 1.0]).expect("points");
    assert!(settings.add_data(PlotData::new(x, y, points)));

    let err = build_plot_frame(&settings, content(), &bare_config()).expect_err("too many ticks");
    assert!(matches!(err, LayoutError::InvalidAxis { kind: AxisKind::X, .. }));
}

#[test]
fn axis_line_and_tick_styles_reach_the_frame() {
    let baseline = Stroke::new(Color::rgb8(0x20, 0x40, 0x80), 1.5);
    let major = TickStyle {
        stroke: Stroke::new(Color::BLACK, 0.75),
        half_length: 4.0,
    };
    let minor = TickStyle {
        stroke: Stroke::new(Color::GRAY, 0.25),
        half_length: 1.0,
    };

    let mut settings = PlotSettings::new();
    let x = settings
        .add_axis(
            AxisSettings::x()
                .with_divisions(1, 2)
                .with_line(baseline)
                .with_tick_styles(major, minor),
        )
        .expect("x axis");
    let y = settings.add_axis(AxisSettings::y()).expect("y axis");
    let points = package_data(&[0.0, 10.0], &[0.0, 100.0]).expect("points");
    assert!(settings.add_data(PlotData::new(x, y, points)));

    let frame = build_plot_frame(&settings, content(), &bare_config()).expect("frame");
    let with_stroke = |stroke: Stroke| frame.lines.iter().filter(|line| line.stroke == stroke).count();

    assert_eq!(with_stroke(baseline), 1);
    assert_eq!(with_stroke(major.stroke), 2);
    assert_eq!(with_stroke(minor.stroke), 1);
    let long_tick = frame
        .lines
        .iter()
        .find(|line| line.stroke == major.stroke)
        .expect("major tick");
    assert_relative_eq!(long_tick.y2 - long_tick.y1, 8.0);
}

#[test]
fn contract_with_unknown_schema_version_is_rejected() {
    let json = single_line_settings()
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replace("\"schema_version\": 1", "\"schema_version\": 7");
    assert!(PlotSettings::from_json_str(&json).is_err());
}
