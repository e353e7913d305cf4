//! Exportable solution reports and loaders.
//!
//! A solution file is a single JSON manifest listing every crossing of a path together with
//! the configuration it leads to. Loading rebuilds the moves from their crossings and replays
//! them, so a file that was edited by hand (or produced by another tool) is re-verified
//! instead of trusted.
//!
//! See `src/bin/solve.rs` for the user-facing exporter.

use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::core::config::Configuration;
use crate::rules::movegen::{apply_crossing, Crossing, Move};
use crate::search::path::{replay, ReplayError};

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum SolutionError {
    #[error("io error for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid solution json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported solution format_version {found} (expected {})", FORMAT_VERSION)]
    UnsupportedVersion { found: u32 },
    #[error("step {step}: the boat cannot make the crossing {crossing:?}")]
    ImpossibleCrossing { step: usize, crossing: Crossing },
    #[error("step {step} declares {declared}, but the crossing leads to {actual}")]
    WrongResult {
        step: usize,
        declared: Configuration,
        actual: Configuration,
    },
    #[error("manifest declares length {declared}, but lists {actual} moves")]
    LengthMismatch { declared: usize, actual: usize },
    #[error("path ends at {0}, not at the goal")]
    NotAtGoal(Configuration),
    #[error(transparent)]
    Replay(#[from] ReplayError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub label: String,
    pub crossing: Crossing,
    pub to: Configuration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionManifest {
    pub format_version: u32,
    pub created_unix_secs: u64,
    pub start: Configuration,
    pub goal: Configuration,
    pub length: usize,
    pub moves: Vec<MoveRecord>,
}

impl SolutionManifest {
    pub fn from_path(start: Configuration, path: &[Move]) -> Self {
        let created_unix_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        Self {
            format_version: FORMAT_VERSION,
            created_unix_secs,
            start,
            goal: Configuration::GOAL,
            length: path.len(),
            moves: path
                .iter()
                .map(|m| MoveRecord {
                    label: m.label.to_string(),
                    crossing: m.crossing(),
                    to: m.to,
                })
                .collect(),
        }
    }
}

/// A manifest plus the verified moves it describes.
#[derive(Debug, Clone)]
pub struct LoadedSolution {
    pub manifest: SolutionManifest,
    pub moves: Vec<Move>,
}

/// Write `path` (starting at `start`) as a JSON manifest to `out`.
pub fn export_solution(
    out: &Path,
    start: Configuration,
    path: &[Move],
) -> Result<SolutionManifest, SolutionError> {
    let manifest = SolutionManifest::from_path(start, path);

    let io_err = |source: std::io::Error| SolutionError::Io {
        path: out.display().to_string(),
        source,
    };

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let f = fs::File::create(out).map_err(io_err)?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, &manifest)?;
    w.write_all(b"\n").map_err(io_err)?;
    w.flush().map_err(io_err)?;

    info!(path = %out.display(), length = manifest.length, "exported solution");
    Ok(manifest)
}

pub fn load_solution(path: &Path) -> Result<LoadedSolution, SolutionError> {
    let f = fs::File::open(path).map_err(|source| SolutionError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let manifest: SolutionManifest = serde_json::from_reader(BufReader::new(f))?;
    let moves = verify_manifest(&manifest)?;
    Ok(LoadedSolution { manifest, moves })
}

/// Rebuild the moves of `manifest` and check them against the rules.
pub fn verify_manifest(manifest: &SolutionManifest) -> Result<Vec<Move>, SolutionError> {
    if manifest.format_version != FORMAT_VERSION {
        return Err(SolutionError::UnsupportedVersion {
            found: manifest.format_version,
        });
    }
    if manifest.length != manifest.moves.len() {
        return Err(SolutionError::LengthMismatch {
            declared: manifest.length,
            actual: manifest.moves.len(),
        });
    }

    let mut moves: Vec<Move> = Vec::with_capacity(manifest.moves.len());
    let mut current = manifest.start;
    for (step, rec) in manifest.moves.iter().enumerate() {
        let mv = apply_crossing(&current, rec.crossing).ok_or(SolutionError::ImpossibleCrossing {
            step,
            crossing: rec.crossing,
        })?;
        if mv.to != rec.to {
            return Err(SolutionError::WrongResult {
                step,
                declared: rec.to,
                actual: mv.to,
            });
        }
        current = mv.to;
        moves.push(mv);
    }

    let end = replay(manifest.start, &moves)?;
    if end != manifest.goal || !end.is_goal() {
        return Err(SolutionError::NotAtGoal(end));
    }
    Ok(moves)
}
