use report_layout::core::{
    AxisKind, AxisSettings, DataInfo, DataPoint, MAX_AXES, PlotData, PlotSettings, PlotType,
    package_data,
};

#[test]
fn merge_keeps_widest_extrema_and_longest_batch() {
    let mut info = DataInfo::default();
    info.merge(&[1.0, 5.0]);
    info.merge(&[3.0, 9.0]);

    assert_eq!(info.max(), 9.0);
    assert_eq!(info.min(), 1.0);
    assert_eq!(info.range(), 8.0);
    assert_eq!(info.count(), 2);
}

#[test]
fn third_axis_of_one_orientation_is_rejected() {
    let mut settings = PlotSettings::new();
    assert!(settings.add_axis(AxisSettings::x()).is_some());
    assert!(settings.add_axis(AxisSettings::x()).is_some());

    let before = settings.axes().to_vec();
    assert!(settings.add_axis(AxisSettings::x()).is_none());
    assert_eq!(settings.axes(), before.as_slice());

    assert!(settings.add_axis(AxisSettings::y()).is_some());
}

#[test]
fn fifth_axis_is_rejected() {
    let mut settings = PlotSettings::new();
    for axis in [
        AxisSettings::x(),
        AxisSettings::y(),
        AxisSettings::x(),
        AxisSettings::y(),
    ] {
        assert!(settings.add_axis(axis).is_some());
    }
    assert_eq!(settings.axes().len(), MAX_AXES);

    assert!(settings.add_axis(AxisSettings::x()).is_none());
    assert!(settings.add_axis(AxisSettings::y()).is_none());
    assert_eq!(settings.axes().len(), MAX_AXES);
}

#[test]
fn series_with_foreign_axis_is_rejected() {
    let mut other = PlotSettings::new();
    other.add_axis(AxisSettings::x()).expect("x");
    other.add_axis(AxisSettings::y()).expect("y");
    let foreign_x = other.add_axis(AxisSettings::x()).expect("second x");

    let mut settings = PlotSettings::new();
    let x = settings.add_axis(AxisSettings::x()).expect("x");
    let y = settings.add_axis(AxisSettings::y()).expect("y");

    let series = PlotData::new(foreign_x, y, vec![DataPoint::new(0.0, 1.0)]);
    assert!(!settings.add_data(series));
    assert!(settings.series().is_empty());
    assert!(settings.axis_info(foreign_x).is_none());
    assert!(!settings.axis_info(x).expect("x info").is_initialized());
}

#[test]
fn shared_axis_aggregates_across_series() {
    let mut settings = PlotSettings::new();
    let x = settings.add_axis(AxisSettings::x()).expect("x");
    let y_left = settings.add_axis(AxisSettings::y()).expect("y left");
    let y_right = settings.add_axis(AxisSettings::y()).expect("y right");

    let temperature = package_data(&[0.0, 1.0, 2.0, 3.0], &[20.5, 21.0, 22.5, 21.5]).expect("data");
    let pressure = package_data(&[0.5, 4.0], &[1012.0, 1009.0]).expect("data");
    assert!(settings.add_data(PlotData::new(x, y_left, temperature)));
    assert!(settings.add_data(PlotData::new(x, y_right, pressure).with_plot_type(PlotType::Dots)));

    let x_info = settings.axis_info(x).expect("x");
    assert_eq!((x_info.min(), x_info.max(), x_info.count()), (0.0, 4.0, 4));

    let right = settings.axis_info(y_right).expect("y right");
    assert_eq!((right.min(), right.max(), right.count()), (1009.0, 1012.0, 2));

    assert_eq!(settings.first(AxisKind::Y), Some(y_left));
    assert_eq!(settings.second(AxisKind::Y), Some(y_right));
    assert_eq!(settings.second(AxisKind::X), None);
}

#[test]
fn series_order_is_registration_order() {
    let mut settings = PlotSettings::new();
    let x = settings.add_axis(AxisSettings::x()).expect("x");
    let y = settings.add_axis(AxisSettings::y()).expect("y");

    for plot_type in [PlotType::Bar, PlotType::Line, PlotType::Dots] {
        assert!(settings.add_data(
            PlotData::new(x, y, vec![DataPoint::new(0.0, 0.0)]).with_plot_type(plot_type)
        ));
    }
    let types: Vec<PlotType> = settings
        .series()
        .iter()
        .map(|series| series.plot_type)
        .collect();
    assert_eq!(types, vec![PlotType::Bar, PlotType::Line, PlotType::Dots]);
}

#[test]
fn handles_from_another_settings_are_rejected_at_matching_indices() {
    let mut other = PlotSettings::new();
    let foreign_y = other.add_axis(AxisSettings::y()).expect("foreign y");
    let foreign_x = other.add_axis(AxisSettings::x()).expect("foreign x");

    let mut settings = PlotSettings::new();
    let x = settings.add_axis(AxisSettings::x()).expect("x");
    let y = settings.add_axis(AxisSettings::y()).expect("y");
    assert_eq!((foreign_y.index(), foreign_x.index()), (x.index(), y.index()));

    assert!(!settings.contains(foreign_x));
    assert!(settings.axis(foreign_x).is_none());
    assert!(settings.axis_info(foreign_y).is_none());

    let points = package_data(&[100.0, 200.0], &[1.0, 7.0]).expect("points");
    assert!(!settings.add_data(PlotData::new(foreign_x, foreign_y, points.clone())));
    assert!(!settings.add_data(PlotData::new(x, foreign_y, points.clone())));
    assert!(settings.series().is_empty());
    assert!(!settings.axis_info(x).expect("x info").is_initialized());

    let rebound_x = settings.bind(foreign_x).expect("index in range");
    assert_eq!(rebound_x, y);
    assert!(settings.add_data(PlotData::new(x, y, points)));
}

#[test]
fn clones_accept_handles_of_their_source() {
    let mut settings = PlotSettings::new();
    let x = settings.add_axis(AxisSettings::x()).expect("x");
    let y = settings.add_axis(AxisSettings::y()).expect("y");

    let mut copy = settings.clone();
    assert!(copy.add_data(PlotData::new(x, y, vec![DataPoint::new(0.0, 1.0)])));
    assert!(settings.series().is_empty());
}
