//! Shape/velocity generation for the undulating foil.
//!
//! [`UndulatingFoil`] is the object the external time-stepping loop drives:
//! once per substep it calls [`UndulatingFoil::set_kinematics_velocity`]
//! with the current time and rigid pose, then
//! [`UndulatingFoil::set_shape`], then reads the marker arrays back through
//! the accessors. All evaluation is synchronous call-and-return; the only
//! I/O on this path is the throttled validation-log write.

use thiserror::Error;

use crate::body::{BodyLayout, BodyState, MeshSpacing, RigidPose};
use crate::io::{Checkpoint, PerformanceSample, ValidationLogError, ValidationLogger};
use crate::kinematics::{
    CHORD_LENGTH, ComplianceReport, KinematicConfig, KinematicOptions, Kinematics, SwimmingMode,
};

/// Simulation-time interval between stdout parameter echoes.
const ECHO_INTERVAL: f64 = 2.0;

/// Error type for shape/velocity generation.
#[derive(Debug, Error)]
pub enum FoilError {
    /// `set_shape` was called at a time that does not match the most recent
    /// velocity refresh. The two arrays must represent the same instant;
    /// this is a caller-ordering defect.
    #[error("shape refresh at t = {shape_time} does not match velocity refresh at t = {velocity_time}")]
    TimeMismatch { shape_time: f64, velocity_time: f64 },

    /// `set_shape` was called before any velocity refresh.
    #[error("shape refresh at t = {0} before any velocity refresh")]
    ShapeBeforeVelocity(f64),

    /// Marker arrays disagree with the layout. Layout and arrays must be
    /// rebuilt together on a mesh change, never independently.
    #[error("marker arrays hold {actual} markers but the layout expects {expected}")]
    LayoutMismatch { expected: usize, actual: usize },

    /// Validation-log write failure
    #[error(transparent)]
    Log(#[from] ValidationLogError),
}

/// How the external coupling updates marker positions.
///
/// Some position-update policies integrate the velocity field directly and
/// never need explicit shape tracking; under those, [`UndulatingFoil::set_shape`]
/// is a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PositionUpdatePolicy {
    /// Positions come from velocity integration only; shape refresh is
    /// skipped.
    ConstraintVelocity,
    /// Positions are prescribed explicitly each timestep.
    #[default]
    ShapeTracking,
}

/// Prescribed-motion body handed to the immersed-boundary coupling.
///
/// Owns the kinematics evaluator, the body layout, the per-timestep state,
/// and the validation logger.
///
/// # Example
///
/// ```
/// use ibkin_rs::{KinematicOptions, MeshSpacing, RigidPose};
/// use ibkin_rs::swimmer::{PositionUpdatePolicy, UndulatingFoil};
///
/// let options = KinematicOptions {
///     write_validation_data: false,
///     designated_writer: false,
///     ..Default::default()
/// };
/// let spacing = MeshSpacing { dx: 0.02, dy: 0.01 };
/// let mut foil = UndulatingFoil::new(&options, spacing, PositionUpdatePolicy::ShapeTracking);
///
/// foil.set_kinematics_velocity(0.0, RigidPose::default()).unwrap();
/// foil.set_shape(0.0).unwrap();
/// assert_eq!(foil.shape().len(), foil.velocities().len());
/// ```
pub struct UndulatingFoil {
    kinematics: Kinematics,
    layout: BodyLayout,
    state: BodyState,
    policy: PositionUpdatePolicy,
    logger: ValidationLogger,
    performance: PerformanceSample,
    compliance: ComplianceReport,
    designated_writer: bool,
    /// Time of the most recent velocity refresh; `None` until the first.
    velocity_time: Option<f64>,
    /// Time of the most recent stdout parameter echo.
    last_echo_time: Option<f64>,
}

impl UndulatingFoil {
    /// Construct the foil from the configuration surface and the mesh
    /// spacing supplied by the external coupling.
    ///
    /// Compliance verification runs here: off-reference parameters are
    /// overridden with a warning on the designated writer, and the
    /// configuration banner is printed. Construction itself never fails;
    /// the one fatal configuration error (an unknown mode string) surfaces
    /// earlier, when [`KinematicOptions::with_mode_name`] parses it.
    pub fn new(
        options: &KinematicOptions,
        spacing: MeshSpacing,
        policy: PositionUpdatePolicy,
    ) -> Self {
        let (config, compliance) = KinematicConfig::from_options(options);
        compliance.emit(options.designated_writer);
        config.print_banner(options.designated_writer);

        let layout = BodyLayout::build(spacing, config.thickness_ratio);
        let state = BodyState::new(layout.total_markers());
        let logger = ValidationLogger::new(
            &options.log_path,
            options.log_interval,
            options.write_validation_data,
            options.designated_writer,
        );

        Self {
            kinematics: Kinematics::new(config),
            layout,
            state,
            policy,
            logger,
            performance: PerformanceSample::default(),
            compliance,
            designated_writer: options.designated_writer,
            velocity_time: None,
            last_echo_time: None,
        }
    }

    /// Refresh the per-marker deformation velocities at `time`.
    ///
    /// Each section's velocity is evaluated once and assigned to every
    /// marker of that cross-section; the streamwise component is always
    /// zero (motion is purely lateral along the undeformed chord). Also
    /// stores the rigid pose and triggers the throttled validation-log
    /// write.
    pub fn set_kinematics_velocity(
        &mut self,
        time: f64,
        pose: RigidPose,
    ) -> Result<(), FoilError> {
        self.check_layout()?;

        self.state.pose = pose;

        let mut idx = 0;
        for section in self.layout.sections() {
            let x = section.offset / CHORD_LENGTH;
            let v = self.kinematics.velocity(x, time);
            for marker in &mut self.state.velocities[idx..idx + section.marker_count] {
                *marker = [0.0, v];
            }
            idx += section.marker_count;
        }
        self.velocity_time = Some(time);

        self.logger.record(&self.kinematics, time, self.performance)?;
        self.echo_parameters(time);

        Ok(())
    }

    /// Refresh the per-marker positions at `time`.
    ///
    /// Under [`PositionUpdatePolicy::ConstraintVelocity`] this is a no-op.
    /// Otherwise `time` must equal the time of the most recent velocity
    /// refresh; the two arrays represent the same instant. Markers fan out
    /// symmetrically from the deformed centerline at cross-flow-spacing
    /// steps (a straight cross-section stack, not the exact NACA contour).
    pub fn set_shape(&mut self, time: f64) -> Result<(), FoilError> {
        if self.policy == PositionUpdatePolicy::ConstraintVelocity {
            return Ok(());
        }

        match self.velocity_time {
            None => return Err(FoilError::ShapeBeforeVelocity(time)),
            Some(velocity_time) if velocity_time != time => {
                return Err(FoilError::TimeMismatch {
                    shape_time: time,
                    velocity_time,
                });
            }
            Some(_) => {}
        }
        self.check_layout()?;

        let dy = self.layout.spacing().dy;
        let mut idx = 0;
        for section in self.layout.sections() {
            let x = section.offset / CHORD_LENGTH;
            let y_centerline = self.kinematics.displacement(x, time);
            let half = section.half_count();

            for j in 0..half {
                self.state.positions[idx] = [section.offset, y_centerline + j as f64 * dy];
                idx += 1;
            }
            for j in 0..half {
                self.state.positions[idx] = [section.offset, y_centerline - (j + 1) as f64 * dy];
                idx += 1;
            }
        }
        self.state.current_time = time;

        Ok(())
    }

    /// Record externally computed performance metrics for the next log row.
    pub fn set_performance(&mut self, swimming_speed: f64, thrust: f64, power: f64) {
        self.performance = PerformanceSample {
            swimming_speed,
            thrust,
            power,
        };
    }

    /// Rebuild the layout after an external regrid, resizing both marker
    /// arrays together. The next call must be a velocity refresh.
    pub fn rebuild_layout(&mut self, spacing: MeshSpacing) {
        self.layout = BodyLayout::build(spacing, self.kinematics.config().thickness_ratio);
        self.state.resize(self.layout.total_markers());
        self.velocity_time = None;
    }

    /// Snapshot the minimal restart state.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            time: self.state.current_time,
            pose: self.state.pose,
        }
    }

    /// Restore from a restart checkpoint. Subsequent evaluation reproduces
    /// an uninterrupted run exactly, because the kinematic laws are pure
    /// functions of absolute time.
    pub fn restore(&mut self, checkpoint: &Checkpoint) {
        self.state.current_time = checkpoint.time;
        self.state.pose = checkpoint.pose;
        self.velocity_time = None;
        self.last_echo_time = Some(checkpoint.time);
        self.logger.resume(checkpoint.time);
    }

    /// Per-marker deformation velocities, indexed by the layout contract.
    pub fn velocities(&self) -> &[[f64; 2]] {
        &self.state.velocities
    }

    /// Per-marker positions, indexed by the layout contract.
    pub fn shape(&self) -> &[[f64; 2]] {
        &self.state.positions
    }

    /// Configured swimming mode (diagnostic accessor).
    pub fn mode(&self) -> SwimmingMode {
        self.kinematics.config().mode
    }

    /// Configured wavelength λ* (diagnostic accessor).
    pub fn wavelength(&self) -> f64 {
        self.kinematics.config().wavelength
    }

    /// The kinematics evaluator.
    pub fn kinematics(&self) -> &Kinematics {
        &self.kinematics
    }

    /// The current body layout.
    pub fn layout(&self) -> &BodyLayout {
        &self.layout
    }

    /// The current per-timestep state.
    pub fn state(&self) -> &BodyState {
        &self.state
    }

    /// Compliance report produced at construction.
    pub fn compliance(&self) -> &ComplianceReport {
        &self.compliance
    }

    fn check_layout(&self) -> Result<(), FoilError> {
        let expected = self.layout.total_markers();
        let actual = self.state.n_markers();
        if expected != actual {
            return Err(FoilError::LayoutMismatch { expected, actual });
        }
        Ok(())
    }

    fn echo_parameters(&mut self, time: f64) {
        if !self.designated_writer {
            return;
        }
        let due = match self.last_echo_time {
            None => true,
            Some(last) => time - last >= ECHO_INTERVAL,
        };
        if !due {
            return;
        }
        let config = self.kinematics.config();
        println!(
            "kinematics check (t = {time}): mode = {}, A_max = {}, f = {}, St = {}, lambda = {}",
            config.mode, config.a_max, config.frequency, config.strouhal, config.wavelength
        );
        self.last_echo_time = Some(time);
    }
}
