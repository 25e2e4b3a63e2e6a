//! Body layout construction.
//!
//! The chord is partitioned into streamwise sections at mesh-spacing
//! intervals, and each section carries a fixed count of surface markers
//! determined by the body thickness and the cross-flow spacing. The layout
//! is the indexing contract shared by shape and velocity generation: marker
//! ordering is stable, and both arrays must always be rebuilt together when
//! the external solver regrids.

use crate::kinematics::CHORD_LENGTH;

/// Grid cell sizes consumed from the external coupling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshSpacing {
    /// Streamwise cell size.
    pub dx: f64,
    /// Cross-flow cell size.
    pub dy: f64,
}

/// One streamwise cross-section of the body.
///
/// `offset` is stored as an exact multiple of the streamwise spacing, so
/// sections compare and order exactly. Markers split evenly between the
/// upper and lower surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    /// Streamwise offset from the head, in chord units.
    pub offset: f64,
    /// Total marker count for this cross-section (even).
    pub marker_count: usize,
}

impl Section {
    /// Markers on one side of the centerline.
    #[inline]
    pub fn half_count(&self) -> usize {
        self.marker_count / 2
    }
}

/// Ordered mapping from streamwise offset to per-section marker count.
///
/// Built once at initialization and read-only thereafter; adaptive
/// regridding (owned by the external solver) triggers a full rebuild.
///
/// # Example
///
/// ```
/// use ibkin_rs::{BodyLayout, MeshSpacing};
///
/// let spacing = MeshSpacing { dx: 0.05, dy: 0.02 };
/// let layout = BodyLayout::build(spacing, 0.08);
/// assert_eq!(layout.n_sections(), 20);
/// // 2 · max(2, ceil(0.08 / 0.02)) = 8 markers per section
/// assert_eq!(layout.sections()[0].marker_count, 8);
/// ```
#[derive(Clone, Debug)]
pub struct BodyLayout {
    sections: Vec<Section>,
    spacing: MeshSpacing,
    total_markers: usize,
}

impl BodyLayout {
    /// Build the layout from mesh spacing and thickness ratio.
    ///
    /// Sections: `ceil(chord / dx)`, offsets at exact multiples of `dx`.
    /// Markers per section: `2 · max(2, ceil(thickness·chord / dy))`,
    /// symmetric top/bottom.
    pub fn build(spacing: MeshSpacing, thickness_ratio: f64) -> Self {
        let n_sections = (CHORD_LENGTH / spacing.dx).ceil() as usize;
        let half = ((thickness_ratio * CHORD_LENGTH / spacing.dy).ceil() as usize).max(2);
        let marker_count = 2 * half;

        let sections = (0..n_sections)
            .map(|i| Section {
                offset: i as f64 * spacing.dx,
                marker_count,
            })
            .collect();

        Self {
            sections,
            spacing,
            total_markers: n_sections * marker_count,
        }
    }

    /// Ordered sections, head to tail.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of streamwise sections.
    pub fn n_sections(&self) -> usize {
        self.sections.len()
    }

    /// Total marker count, stable for the lifetime of the layout.
    pub fn total_markers(&self) -> usize {
        self.total_markers
    }

    /// The mesh spacing the layout was built from.
    pub fn spacing(&self) -> MeshSpacing {
        self.spacing
    }
}
