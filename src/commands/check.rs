use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use ico::IconDir;

use crate::error::IconError;
use crate::targets::{ALL_TARGETS, Format, IconTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Ok,
    Missing,
    Empty,
    /// File does not decode as its format
    Undecodable { reason: String },
    /// Decoded sizes differ from the target's
    WrongSize { expected: Vec<u32>, actual: Vec<u32> },
}

impl CheckResult {
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckResult::Ok)
    }
}

pub struct TargetCheck {
    pub file: &'static str,
    pub result: CheckResult,
}

/// Verify every target in `output_dir`.
/// I/O failures other than a missing file are returned as errors.
pub fn run(output_dir: &Path) -> Result<Vec<TargetCheck>, IconError> {
    ALL_TARGETS
        .iter()
        .map(|target| {
            check_target(output_dir, target).map(|result| TargetCheck {
                file: target.file,
                result,
            })
        })
        .collect()
}

fn check_target(output_dir: &Path, target: &IconTarget) -> Result<CheckResult, IconError> {
    let path = output_dir.join(target.file);
    let len = match fs::metadata(&path) {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(CheckResult::Missing),
        Err(source) => return Err(IconError::Read { path, source }),
    };
    if len == 0 {
        return Ok(CheckResult::Empty);
    }

    let (expected, actual) = match target.format {
        Format::Png => match image::image_dimensions(&path) {
            Ok((w, h)) => (vec![target.size, target.size], vec![w, h]),
            Err(e) => return Ok(CheckResult::Undecodable { reason: e.to_string() }),
        },
        Format::Ico { sizes } => {
            let file = File::open(&path).map_err(|source| IconError::Read {
                path: path.clone(),
                source,
            })?;
            match IconDir::read(BufReader::new(file)) {
                Ok(dir) => {
                    let mut actual = Vec::new();
                    for entry in dir.entries() {
                        if entry.width() != entry.height() {
                            return Ok(CheckResult::Undecodable {
                                reason: format!("non-square entry {}x{}", entry.width(), entry.height()),
                            });
                        }
                        actual.push(entry.width());
                    }
                    (sizes.to_vec(), actual)
                }
                Err(e) => return Ok(CheckResult::Undecodable { reason: e.to_string() }),
            }
        }
    };

    if expected == actual {
        Ok(CheckResult::Ok)
    } else {
        Ok(CheckResult::WrongSize { expected, actual })
    }
}
