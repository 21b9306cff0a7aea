use report_layout::api::{GridLineOptions, GridLineVisibility};
use report_layout::core::{GridLayout, Size};
use report_layout::render::{Color, NullRenderer, Stroke};
use report_layout::{PlotEngine, PlotLayoutConfig};

fn vertical_xs(frame: &report_layout::render::RenderFrame) -> Vec<f64> {
    frame
        .lines
        .iter()
        .filter(|line| line.x1 == line.x2)
        .map(|line| line.x1)
        .collect()
}

#[test]
fn default_options_draw_inner_lines_without_border() {
    let layout = GridLayout::new(
        Size::new(120.0, 60.0),
        vec![20.0, 40.0, 60.0],
        vec![30.0, 30.0],
    )
    .expect("layout");

    let mut engine = PlotEngine::new(NullRenderer::default(), PlotLayoutConfig::default())
        .expect("engine");
    let frame = engine
        .render_grid_lines(&layout, &GridLineOptions::default())
        .expect("grid lines");

    assert_eq!(vertical_xs(&frame), vec![20.0, 60.0]);
    let horizontal: Vec<f64> = frame
        .lines
        .iter()
        .filter(|line| line.y1 == line.y2)
        .map(|line| line.y1)
        .collect();
    assert_eq!(horizontal, vec![30.0]);
    assert!(frame.rects.is_empty());
    assert_eq!(engine.renderer().frames_rendered, 1);
    assert_eq!(engine.renderer().last_line_count, 3);
}

#[test]
fn vertical_header_gets_its_own_stroke() {
    let layout = GridLayout::equi_sized(Size::new(100.0, 50.0), 4, 2).expect("layout");
    let header = Stroke::new(Color::DARK_GRAY, 2.0);
    let options = GridLineOptions {
        visibility: GridLineVisibility {
            vertical_header: true,
            ..GridLineVisibility::BOTH
        },
        header: Some(header),
        ..GridLineOptions::default()
    };

    let frame = report_layout::api::build_grid_lines(&layout, &options).expect("grid lines");
    let verticals: Vec<_> = frame.lines.iter().filter(|line| line.x1 == line.x2).collect();
    assert_eq!(verticals.len(), 3);
    let header_lines: Vec<_> = verticals.iter().filter(|line| line.stroke == header).collect();
    assert_eq!(header_lines.len(), 1);
    assert_eq!(header_lines[0].x1, 25.0);
}

#[test]
fn border_follows_layout_size() {
    let layout = GridLayout::equi_sized(Size::new(80.0, 40.0), 1, 1).expect("layout");
    let options = GridLineOptions {
        visibility: GridLineVisibility::ALL,
        ..GridLineOptions::default()
    };

    let frame = report_layout::api::build_grid_lines(&layout, &options).expect("grid lines");
    assert!(frame.lines.is_empty());
    assert_eq!(frame.rects.len(), 1);
    let border = frame.rects[0];
    assert_eq!((border.x, border.y, border.width, border.height), (0.0, 0.0, 80.0, 40.0));
    assert!(border.fill.is_none());
}
