//! Kinematic configuration and reference-compliance verification.
//!
//! The reference parameter set (amplitude, Reynolds number, the prescribed
//! Strouhal pair, mode wavelengths) is fixed by the validation protocol this
//! crate implements. Caller-supplied values that disagree are overridden and
//! the override is reported as a warning, never an error; the single fatal
//! configuration failure is an unrecognized mode identifier.

use std::f64::consts::PI;
use std::path::PathBuf;

use thiserror::Error;

use super::mode::SwimmingMode;

/// Reference maximum tail amplitude (chord units).
pub const REFERENCE_A_MAX: f64 = 0.1;
/// Reference Reynolds number.
pub const REFERENCE_REYNOLDS: f64 = 5000.0;
/// Lower prescribed Strouhal number.
pub const REFERENCE_ST_LOW: f64 = 0.4;
/// Upper prescribed Strouhal number.
pub const REFERENCE_ST_HIGH: f64 = 0.6;
/// Reference chord length (nondimensional scheme).
pub const CHORD_LENGTH: f64 = 1.0;
/// Reference inflow speed (nondimensional scheme).
pub const INFLOW_SPEED: f64 = 1.0;

/// Error type for kinematic configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unrecognized swimming-mode identifier. Fatal: no envelope or
    /// wavelength can be selected.
    #[error("unknown swimming mode '{0}': must be 'anguilliform' or 'carangiform'")]
    UnknownMode(String),
}

/// Recognized configuration options for one run.
///
/// This is the full configuration surface; everything else is derived.
/// Values that conflict with the reference constants are overridden during
/// construction (see [`KinematicConfig::from_options`]).
#[derive(Clone, Debug)]
pub struct KinematicOptions {
    /// Explicit swimming mode; when `None` the mode is derived from the
    /// thickness ratio.
    pub swimming_mode: Option<SwimmingMode>,
    /// Body thickness ratio h/c.
    pub thickness_ratio: f64,
    /// NACA profile label, carried through to the validation log header.
    pub naca_profile: String,
    /// Prescribed Strouhal number (expected 0.4 or 0.6, not enforced).
    pub strouhal: f64,
    /// Base amplitude (expected 0.1, overridden if not).
    pub base_amplitude: f64,
    /// Reynolds number (expected 5000, overridden if not).
    pub reynolds: f64,
    /// Shape-adaptation flag (forced off for this kinematics family).
    pub enable_adaptation: bool,
    /// Simulation-time interval between validation-log rows.
    pub log_interval: f64,
    /// Validation log path.
    pub log_path: PathBuf,
    /// Whether validation data is written at all.
    pub write_validation_data: bool,
    /// Whether this process is the designated diagnostic writer. In a
    /// multi-process deployment exactly one process should carry `true`.
    pub designated_writer: bool,
}

impl Default for KinematicOptions {
    fn default() -> Self {
        Self {
            swimming_mode: None,
            thickness_ratio: 0.08,
            naca_profile: "NACA0008".to_string(),
            strouhal: REFERENCE_ST_LOW,
            base_amplitude: REFERENCE_A_MAX,
            reynolds: REFERENCE_REYNOLDS,
            enable_adaptation: false,
            log_interval: 0.05,
            log_path: PathBuf::from("validation_foil.dat"),
            write_validation_data: true,
            designated_writer: true,
        }
    }
}

impl KinematicOptions {
    /// Set the swimming mode from a configuration-surface string.
    ///
    /// This is the one fatal configuration path: an identifier other than
    /// `"anguilliform"` or `"carangiform"` cannot select an envelope or a
    /// wavelength and is rejected before any simulation time is consumed.
    pub fn with_mode_name(mut self, name: &str) -> Result<Self, ConfigError> {
        self.swimming_mode = Some(name.parse()?);
        Ok(self)
    }
}

/// Outcome of compliance verification at construction.
///
/// `mismatches` holds one entry per caller value that was overridden to its
/// reference constant; `advisories` holds diagnostics that do not change the
/// configuration (off-reference Strouhal, out-of-range thickness).
#[derive(Clone, Debug, Default)]
pub struct ComplianceReport {
    /// One warning per overridden parameter.
    pub mismatches: Vec<String>,
    /// Diagnostics that leave the configuration unchanged.
    pub advisories: Vec<String>,
}

impl ComplianceReport {
    /// Whether the supplied options already complied with the reference set.
    pub fn is_compliant(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Print all warnings to stderr on the designated writer.
    pub fn emit(&self, designated_writer: bool) {
        if !designated_writer {
            return;
        }
        for w in self.mismatches.iter().chain(self.advisories.iter()) {
            eprintln!("{w}");
        }
    }
}

/// Frozen parameter set for one run.
///
/// Built once from [`KinematicOptions`]; immutable thereafter. Frequency and
/// angular rate are derived here, at configuration time, and never
/// recomputed per evaluation.
#[derive(Clone, Debug)]
pub struct KinematicConfig {
    /// Selected swimming mode.
    pub mode: SwimmingMode,
    /// Mode-specific nondimensional wavelength λ*.
    pub wavelength: f64,
    /// Body thickness ratio h/c.
    pub thickness_ratio: f64,
    /// NACA profile label (diagnostic only).
    pub naca_profile: String,
    /// Maximum tail amplitude (reference constant).
    pub a_max: f64,
    /// Reynolds number (reference constant).
    pub reynolds: f64,
    /// Prescribed Strouhal number.
    pub strouhal: f64,
    /// Oscillation frequency f = St / (2·A_max).
    pub frequency: f64,
    /// Angular rate ω = 2πf.
    pub omega: f64,
}

impl KinematicConfig {
    /// Build the frozen configuration, verifying compliance with the
    /// reference parameter set.
    ///
    /// Caller values for amplitude, Reynolds number, and the adaptation
    /// flag that disagree with the reference constants are overridden; each
    /// override adds one mismatch warning to the returned report. A
    /// Strouhal number outside {0.4, 0.6} and a thickness ratio outside the
    /// selected mode's documented range add advisories only. This never
    /// fails; unknown mode strings are rejected earlier, when parsing the
    /// option surface.
    pub fn from_options(options: &KinematicOptions) -> (Self, ComplianceReport) {
        let mut report = ComplianceReport::default();

        let mode = options
            .swimming_mode
            .unwrap_or_else(|| SwimmingMode::from_thickness_ratio(options.thickness_ratio));

        if (options.base_amplitude - REFERENCE_A_MAX).abs() > 1e-6 {
            report.mismatches.push(format!(
                "WARNING: base_amplitude = {} (reference requires {}); overriding to {}",
                options.base_amplitude, REFERENCE_A_MAX, REFERENCE_A_MAX
            ));
        }

        if (options.reynolds - REFERENCE_REYNOLDS).abs() > 1e-3 {
            report.mismatches.push(format!(
                "WARNING: Re = {} (reference uses {}); overriding to {}",
                options.reynolds, REFERENCE_REYNOLDS, REFERENCE_REYNOLDS
            ));
        }

        if options.enable_adaptation {
            report.mismatches.push(
                "WARNING: enable_adaptation = true; forced off for prescribed kinematics"
                    .to_string(),
            );
        }

        if (options.strouhal - REFERENCE_ST_LOW).abs() > 1e-6
            && (options.strouhal - REFERENCE_ST_HIGH).abs() > 1e-6
        {
            report.advisories.push(format!(
                "WARNING: prescribed_strouhal = {} (reference typically uses {} or {})",
                options.strouhal, REFERENCE_ST_LOW, REFERENCE_ST_HIGH
            ));
        }

        if let Some(advisory) = mode.thickness_advisory(options.thickness_ratio) {
            report.advisories.push(advisory);
        }

        // f = St / (2·A_max), i.e. f = 5·St at the reference amplitude
        let frequency = options.strouhal / (2.0 * REFERENCE_A_MAX);

        let config = Self {
            mode,
            wavelength: mode.wavelength(),
            thickness_ratio: options.thickness_ratio,
            naca_profile: options.naca_profile.clone(),
            a_max: REFERENCE_A_MAX,
            reynolds: REFERENCE_REYNOLDS,
            strouhal: options.strouhal,
            frequency,
            omega: 2.0 * PI * frequency,
        };

        (config, report)
    }

    /// Print the configuration banner to stdout on the designated writer.
    pub fn print_banner(&self, designated_writer: bool) {
        if !designated_writer {
            return;
        }
        println!("================================================");
        println!("  Prescribed Undulatory Kinematics ACTIVE");
        println!("================================================");
        println!("  NACA profile:    {}", self.naca_profile);
        println!("  Thickness h/c:   {}", self.thickness_ratio);
        println!("  Swimming mode:   {}", self.mode);
        println!("  Wavelength λ*:   {}", self.wavelength);
        println!("  A_max = {}, Re = {}", self.a_max, self.reynolds);
        println!(
            "  St = {}, f = {} (f = St / 2·A_max)",
            self.strouhal, self.frequency
        );
        println!("================================================");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_compliant() {
        let (config, report) = KinematicConfig::from_options(&KinematicOptions::default());
        assert!(report.is_compliant());
        assert!(report.advisories.is_empty());
        assert_eq!(config.mode, SwimmingMode::Anguilliform);
        assert_eq!(config.wavelength, 0.65);
    }

    #[test]
    fn test_amplitude_mismatch_overridden() {
        let options = KinematicOptions {
            base_amplitude: 0.125,
            ..Default::default()
        };
        let (config, report) = KinematicConfig::from_options(&options);
        assert_eq!(report.mismatches.len(), 1);
        assert_eq!(config.a_max, REFERENCE_A_MAX);
    }

    #[test]
    fn test_adaptation_forced_off() {
        let options = KinematicOptions {
            enable_adaptation: true,
            ..Default::default()
        };
        let (_, report) = KinematicConfig::from_options(&options);
        assert_eq!(report.mismatches.len(), 1);
    }

    #[test]
    fn test_frequency_derivation() {
        for (st, f_expected) in [(0.4, 2.0), (0.6, 3.0)] {
            let options = KinematicOptions {
                strouhal: st,
                ..Default::default()
            };
            let (config, _) = KinematicConfig::from_options(&options);
            assert!((config.frequency - f_expected).abs() < 1e-9);
            assert!((config.omega - 2.0 * PI * f_expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_off_reference_strouhal_is_advisory_only() {
        let options = KinematicOptions {
            strouhal: 0.5,
            ..Default::default()
        };
        let (config, report) = KinematicConfig::from_options(&options);
        assert!(report.is_compliant());
        assert_eq!(report.advisories.len(), 1);
        assert_eq!(config.strouhal, 0.5);
    }

    #[test]
    fn test_unknown_mode_name_is_fatal() {
        let result = KinematicOptions::default().with_mode_name("thunniform");
        assert!(matches!(result, Err(ConfigError::UnknownMode(_))));
    }

    #[test]
    fn test_explicit_mode_wins_over_thickness() {
        let options = KinematicOptions {
            swimming_mode: Some(SwimmingMode::Carangiform),
            thickness_ratio: 0.18,
            ..Default::default()
        };
        let (config, _) = KinematicConfig::from_options(&options);
        assert_eq!(config.mode, SwimmingMode::Carangiform);
        assert_eq!(config.wavelength, 1.0);
    }
}
