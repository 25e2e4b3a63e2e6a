//! Append-only validation log.
//!
//! One row per logging interval, computed at the tail (`X = 1`) from the
//! configured kinematics. Swimming speed, thrust, and power are supplied by
//! the external coupling and recorded as-is; this logger does not compute
//! hydrodynamics. The throttle state (`last_write_time`) is an explicit
//! field, so the logger is testable and restart-safe. File writes happen
//! only on the designated writer process; every process computes identical
//! kinematics, so one writer suffices.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::kinematics::Kinematics;

/// Speed magnitude below which the diagnostic Strouhal number is reported
/// as zero instead of dividing.
const MIN_SPEED: f64 = 1e-10;

/// Error type for validation-log writes.
#[derive(Debug, Error)]
pub enum ValidationLogError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Externally supplied performance metrics for one log row.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PerformanceSample {
    /// Instantaneous swimming speed.
    pub swimming_speed: f64,
    /// Instantaneous thrust.
    pub thrust: f64,
    /// Instantaneous power.
    pub power: f64,
}

/// One validation-log row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidationRecord {
    pub time: f64,
    /// Tail displacement `Y(1, t)`.
    pub tail_amplitude: f64,
    /// Tail velocity `V(1, t)`.
    pub tail_velocity: f64,
    pub swimming_speed: f64,
    pub thrust: f64,
    pub power: f64,
    /// Diagnostic Strouhal number `2·f·A_max / speed`, clamped to 0 for
    /// near-zero speed.
    pub strouhal_computed: f64,
}

/// Diagnostic Strouhal number from the achieved swimming speed.
///
/// Guarded against division by near-zero speed: speeds below `1e-10` report
/// `0` rather than propagating infinity or NaN into the log.
pub fn computed_strouhal(frequency: f64, a_max: f64, speed: f64) -> f64 {
    if speed.abs() > MIN_SPEED {
        2.0 * frequency * a_max / speed
    } else {
        0.0
    }
}

/// Interval-throttled, append-only writer of [`ValidationRecord`] rows.
#[derive(Debug)]
pub struct ValidationLogger {
    path: PathBuf,
    interval: f64,
    enabled: bool,
    designated_writer: bool,
    last_write_time: Option<f64>,
    header_written: bool,
}

impl ValidationLogger {
    /// Create a logger. `interval` is in simulation-time units; records are
    /// produced at most once per interval. A logger with `enabled = false`
    /// or `designated_writer = false` never touches the filesystem.
    pub fn new(path: &Path, interval: f64, enabled: bool, designated_writer: bool) -> Self {
        Self {
            path: path.to_path_buf(),
            interval,
            enabled,
            designated_writer,
            last_write_time: None,
            header_written: false,
        }
    }

    /// Mark the log as already headed, so the next record appends instead
    /// of truncating. Called when resuming from a restart checkpoint.
    pub fn resume(&mut self, last_write_time: f64) {
        self.header_written = true;
        self.last_write_time = Some(last_write_time);
    }

    /// Whether a record is due at `time`.
    pub fn due(&self, time: f64) -> bool {
        if !self.enabled {
            return false;
        }
        match self.last_write_time {
            None => true,
            Some(last) => time - last >= self.interval,
        }
    }

    /// Record one row at `time` if the interval has elapsed.
    ///
    /// Tail amplitude/velocity come from the kinematics evaluator at
    /// `X = 1`; speed, thrust, and power come from `performance`. Returns
    /// the record that was produced, or `None` when throttled. Only the
    /// designated writer writes to the file; other processes still advance
    /// the throttle so their state stays in lockstep.
    pub fn record(
        &mut self,
        kinematics: &Kinematics,
        time: f64,
        performance: PerformanceSample,
    ) -> Result<Option<ValidationRecord>, ValidationLogError> {
        if !self.due(time) {
            return Ok(None);
        }

        let config = kinematics.config();
        let record = ValidationRecord {
            time,
            tail_amplitude: kinematics.displacement(1.0, time),
            tail_velocity: kinematics.velocity(1.0, time),
            swimming_speed: performance.swimming_speed,
            thrust: performance.thrust,
            power: performance.power,
            strouhal_computed: computed_strouhal(
                config.frequency,
                config.a_max,
                performance.swimming_speed,
            ),
        };

        if self.designated_writer {
            self.write(&record, kinematics)?;
        }
        self.last_write_time = Some(time);

        Ok(Some(record))
    }

    fn write(
        &mut self,
        record: &ValidationRecord,
        kinematics: &Kinematics,
    ) -> Result<(), ValidationLogError> {
        let config = kinematics.config();
        let mut file = if self.header_written {
            OpenOptions::new().append(true).open(&self.path)?
        } else {
            let mut file = File::create(&self.path)?;
            writeln!(file, "# Validation data for prescribed undulatory kinematics")?;
            writeln!(file, "# NACA profile: {}", config.naca_profile)?;
            writeln!(file, "# Thickness ratio: {}", config.thickness_ratio)?;
            writeln!(file, "# Swimming mode: {}", config.mode)?;
            writeln!(file, "# Wavelength: {}", config.wavelength)?;
            writeln!(
                file,
                "# Re = {}, St = {}, f = {}",
                config.reynolds, config.strouhal, config.frequency
            )?;
            writeln!(file, "#")?;
            writeln!(
                file,
                "# Columns: Time TailAmplitude TailVelocity Swimming_Speed Thrust Power Strouhal_Computed"
            )?;
            self.header_written = true;
            file
        };

        writeln!(
            file,
            "{:.8e} {:.8e} {:.8e} {:.8e} {:.8e} {:.8e} {:.8e}",
            record.time,
            record.tail_amplitude,
            record.tail_velocity,
            record.swimming_speed,
            record.thrust,
            record.power,
            record.strouhal_computed
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computed_strouhal_clamped_near_zero() {
        assert_eq!(computed_strouhal(2.0, 0.1, 0.0), 0.0);
        assert_eq!(computed_strouhal(2.0, 0.1, 1e-11), 0.0);
        let st = computed_strouhal(2.0, 0.1, 1.0);
        assert!((st - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_throttle_interval() {
        let logger = ValidationLogger::new(Path::new("unused.dat"), 0.05, true, false);
        assert!(logger.due(0.0));

        let mut logger = logger;
        logger.last_write_time = Some(0.0);
        assert!(!logger.due(0.04));
        assert!(logger.due(0.05));
    }

    #[test]
    fn test_disabled_logger_never_due() {
        let logger = ValidationLogger::new(Path::new("unused.dat"), 0.05, false, true);
        assert!(!logger.due(10.0));
    }
}
