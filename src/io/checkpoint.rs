//! Restart checkpoints.
//!
//! A checkpoint is the minimal state needed to resume a run: current time
//! plus the rigid pose. Because the displacement/velocity laws are pure
//! functions of absolute time, restoring this snapshot and evaluating at a
//! later `t` reproduces the motion of an uninterrupted run exactly.
//!
//! The on-disk format is plain text: one comment line, then `key v...`
//! lines. Values use the shortest round-trip float representation, so a
//! save/load cycle is bit-exact.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use thiserror::Error;

use crate::body::RigidPose;

/// Error type for checkpoint save/load.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed line
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Required key absent from the file
    #[error("missing checkpoint field: {0}")]
    MissingField(&'static str),
}

/// Minimal persisted state: time plus rigid pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Checkpoint {
    /// Simulation time at the snapshot.
    pub time: f64,
    /// Rigid pose at the snapshot.
    pub pose: RigidPose,
}

impl Checkpoint {
    /// Write the checkpoint to `path`, replacing any previous snapshot.
    pub fn save(&self, path: &Path) -> Result<(), CheckpointError> {
        let mut file = File::create(path)?;
        writeln!(file, "# undulating foil restart checkpoint")?;
        writeln!(file, "time {}", self.time)?;
        write_triple(&mut file, "center_of_mass", &self.pose.center_of_mass)?;
        write_triple(&mut file, "incremented_angle", &self.pose.incremented_angle)?;
        write_triple(&mut file, "tagged_position", &self.pose.tagged_position)?;
        Ok(())
    }

    /// Read a checkpoint previously written by [`Checkpoint::save`].
    pub fn load(path: &Path) -> Result<Self, CheckpointError> {
        let reader = BufReader::new(File::open(path)?);

        let mut time = None;
        let mut center_of_mass = None;
        let mut incremented_angle = None;
        let mut tagged_position = None;

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line_no = i + 1;
            let mut parts = line.split_whitespace();
            let key = parts.next().unwrap_or("");
            let values: Vec<&str> = parts.collect();
            match key {
                "time" => time = Some(parse_scalar(&values, line_no)?),
                "center_of_mass" => center_of_mass = Some(parse_triple(&values, line_no)?),
                "incremented_angle" => incremented_angle = Some(parse_triple(&values, line_no)?),
                "tagged_position" => tagged_position = Some(parse_triple(&values, line_no)?),
                other => {
                    return Err(CheckpointError::Parse {
                        line: line_no,
                        message: format!("unknown key '{other}'"),
                    });
                }
            }
        }

        Ok(Self {
            time: time.ok_or(CheckpointError::MissingField("time"))?,
            pose: RigidPose {
                center_of_mass: center_of_mass
                    .ok_or(CheckpointError::MissingField("center_of_mass"))?,
                incremented_angle: incremented_angle
                    .ok_or(CheckpointError::MissingField("incremented_angle"))?,
                tagged_position: tagged_position
                    .ok_or(CheckpointError::MissingField("tagged_position"))?,
            },
        })
    }
}

fn write_triple(file: &mut File, key: &str, values: &[f64; 3]) -> std::io::Result<()> {
    writeln!(file, "{} {} {} {}", key, values[0], values[1], values[2])
}

fn parse_scalar(values: &[&str], line: usize) -> Result<f64, CheckpointError> {
    if values.len() != 1 {
        return Err(CheckpointError::Parse {
            line,
            message: format!("expected 1 value, got {}", values.len()),
        });
    }
    values[0].parse().map_err(|_| CheckpointError::Parse {
        line,
        message: format!("invalid float '{}'", values[0]),
    })
}

fn parse_triple(values: &[&str], line: usize) -> Result<[f64; 3], CheckpointError> {
    if values.len() != 3 {
        return Err(CheckpointError::Parse {
            line,
            message: format!("expected 3 values, got {}", values.len()),
        });
    }
    let mut out = [0.0; 3];
    for (slot, v) in out.iter_mut().zip(values) {
        *slot = v.parse().map_err(|_| CheckpointError::Parse {
            line,
            message: format!("invalid float '{v}'"),
        })?;
    }
    Ok(out)
}
