//! Per-timestep body state.

/// Rigid-body pose supplied by the external coupling each substep.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RigidPose {
    /// Center of mass.
    pub center_of_mass: [f64; 3],
    /// Incremented rotation angle about the reference axes.
    pub incremented_angle: [f64; 3],
    /// Tagged-point position.
    pub tagged_position: [f64; 3],
}

/// Mutable per-timestep record: current time, rigid pose, and the marker
/// arrays handed to the external IB coupling.
///
/// Created empty at construction, sized to the layout's marker count. The
/// velocity array is refreshed once per timestep before the shape array;
/// both persist until the next timestep overwrites them.
#[derive(Clone, Debug)]
pub struct BodyState {
    /// Simulation time of the last completed shape update.
    pub current_time: f64,
    /// Rigid pose at the last velocity update.
    pub pose: RigidPose,
    /// Per-marker positions, `[x, y]`, indexed by the layout contract.
    pub positions: Vec<[f64; 2]>,
    /// Per-marker deformation velocities, `[u, v]`, same indexing.
    pub velocities: Vec<[f64; 2]>,
}

impl BodyState {
    /// Create a zeroed state sized to `n_markers`.
    pub fn new(n_markers: usize) -> Self {
        Self {
            current_time: 0.0,
            pose: RigidPose::default(),
            positions: vec![[0.0; 2]; n_markers],
            velocities: vec![[0.0; 2]; n_markers],
        }
    }

    /// Resize both marker arrays together (layout rebuild).
    pub fn resize(&mut self, n_markers: usize) {
        self.positions.clear();
        self.positions.resize(n_markers, [0.0; 2]);
        self.velocities.clear();
        self.velocities.resize(n_markers, [0.0; 2]);
    }

    /// Marker count currently addressed by both arrays.
    pub fn n_markers(&self) -> usize {
        debug_assert_eq!(self.positions.len(), self.velocities.len());
        self.positions.len()
    }
}
