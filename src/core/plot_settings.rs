use std::sync::atomic::{AtomicU64, Ordering};

use smallvec::SmallVec;
use tracing::debug;

use crate::core::units::mm_to_units;
use crate::core::{AxisId, AxisKind, AxisSettings, DataInfo, PlotData};
use crate::render::FontSettings;

pub const MAX_AXES: usize = 4;
pub const MAX_AXES_PER_KIND: usize = 2;

// 0 is reserved for detached handles.
static NEXT_OWNER: AtomicU64 = AtomicU64::new(1);

/// Axes and series of one plot.
///
/// Append-only: axes are capped at [`MAX_AXES`] overall and
/// [`MAX_AXES_PER_KIND`] per orientation, and a series is only accepted when
/// both of its axis handles were issued by this instance. Clones share the
/// owner token of their source, so handles stay valid on a clone.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSettings {
    owner: u64,
    axes: SmallVec<[AxisSettings; MAX_AXES]>,
    series: Vec<PlotData>,
    pub title: String,
    pub title_font: FontSettings,
    pub axis_font: FontSettings,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            owner: NEXT_OWNER.fetch_add(1, Ordering::Relaxed),
            axes: SmallVec::new(),
            series: Vec::new(),
            title: String::new(),
            title_font: FontSettings::with_size(mm_to_units(4.0)),
            axis_font: FontSettings::with_size(mm_to_units(3.0)),
        }
    }
}

impl PlotSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Registers an axis. Returns `None` and leaves the settings untouched
    /// when the overall or per-orientation capacity is exhausted.
    pub fn add_axis(&mut self, axis: AxisSettings) -> Option<AxisId> {
        let same_kind = self.axes_of(axis.kind).count();
        if self.axes.len() >= MAX_AXES || same_kind >= MAX_AXES_PER_KIND {
            debug!(
                kind = ?axis.kind,
                total = self.axes.len(),
                same_kind,
                "rejected axis: capacity exhausted"
            );
            return None;
        }

        let id = AxisId::new(self.owner, self.axes.len());
        debug!(kind = ?axis.kind, index = id.index(), "registered axis");
        self.axes.push(axis);
        Some(id)
    }

    /// Registers a series. Returns `false` and leaves the settings untouched
    /// when either axis handle does not belong to these settings.
    pub fn add_data(&mut self, data: PlotData) -> bool {
        if !self.contains(data.x_axis) || !self.contains(data.y_axis) {
            debug!(
                x_axis = data.x_axis.index(),
                y_axis = data.y_axis.index(),
                axes = self.axes.len(),
                "rejected series: unknown axis"
            );
            return false;
        }

        debug!(
            plot_type = ?data.plot_type,
            samples = data.points.len(),
            x_axis = data.x_axis.index(),
            y_axis = data.y_axis.index(),
            "registered series"
        );
        self.series.push(data);
        true
    }

    #[must_use]
    pub fn contains(&self, id: AxisId) -> bool {
        id.owner() == self.owner && id.index() < self.axes.len()
    }

    /// Rebinds a detached or foreign handle to the axis at the same index
    /// of these settings. `None` when no axis is registered there.
    #[must_use]
    pub fn bind(&self, id: AxisId) -> Option<AxisId> {
        (id.index() < self.axes.len()).then(|| AxisId::new(self.owner, id.index()))
    }

    /// First registered axis of `kind`, in insertion order.
    #[must_use]
    pub fn first(&self, kind: AxisKind) -> Option<AxisId> {
        self.axes_of(kind).next()
    }

    /// Second registered axis of `kind`, in insertion order.
    #[must_use]
    pub fn second(&self, kind: AxisKind) -> Option<AxisId> {
        self.axes_of(kind).nth(1)
    }

    fn axes_of(&self, kind: AxisKind) -> impl Iterator<Item = AxisId> + '_ {
        self.axes
            .iter()
            .enumerate()
            .filter(move |(_, axis)| axis.kind == kind)
            .map(move |(index, _)| AxisId::new(self.owner, index))
    }

    #[must_use]
    pub fn axis(&self, id: AxisId) -> Option<&AxisSettings> {
        if !self.contains(id) {
            return None;
        }
        self.axes.get(id.index())
    }

    #[must_use]
    pub fn axes(&self) -> &[AxisSettings] {
        &self.axes
    }

    #[must_use]
    pub fn series(&self) -> &[PlotData] {
        &self.series
    }

    /// Range summary of one axis: every series registered against it,
    /// merged in registration order.
    #[must_use]
    pub fn axis_info(&self, id: AxisId) -> Option<DataInfo> {
        if !self.contains(id) {
            return None;
        }
        Some(
            self.series
                .iter()
                .fold(DataInfo::default(), |info, series| fold_series(info, series, id)),
        )
    }

    /// Range summaries for all axes, indexed like [`Self::axes`].
    ///
    /// One pass over the series; layout reads only this snapshot.
    #[must_use]
    pub fn axis_infos(&self) -> Vec<DataInfo> {
        let mut infos = vec![DataInfo::default(); self.axes.len()];
        for series in &self.series {
            for (index, info) in infos.iter_mut().enumerate() {
                *info = fold_series(*info, series, AxisId::new(self.owner, index));
            }
        }
        infos
    }
}

fn fold_series(info: DataInfo, series: &PlotData, id: AxisId) -> DataInfo {
    let mut info = info;
    if series.x_axis == id {
        info.merge(&series.x_values());
    }
    if series.y_axis == id {
        info.merge(&series.y_values());
    }
    info
}
