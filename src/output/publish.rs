//! Atomic publication and read-back of snapshot directories.
//!
//! Layout of a published snapshot:
//!
//! ```text
//! <output>/leaderboard.json
//! <output>/distribution.json
//! <output>/metadata.json
//! <output>/players/<id>.json
//! ```

use super::models::{DistributionBin, LeaderboardEntry, Metadata, PlayerDetail, Snapshot};
use crate::{
    cli::types::PlayerId,
    error::{PointsPlusError, Result},
};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

pub const LEADERBOARD_FILE: &str = "leaderboard.json";
pub const DISTRIBUTION_FILE: &str = "distribution.json";
pub const METADATA_FILE: &str = "metadata.json";
pub const PLAYERS_DIR: &str = "players";

/// What a publish wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub output_dir: PathBuf,
    pub player_files: usize,
    pub replaced_previous: bool,
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    write_string(path, &json)?;
    Ok(())
}

fn sibling(output_dir: &Path, suffix: &str) -> PathBuf {
    let name = output_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let parent = output_dir.parent().unwrap_or_else(|| Path::new("."));
    parent.join(format!(".{}.{}", name, suffix))
}

fn staging_dir(output_dir: &Path) -> PathBuf {
    sibling(output_dir, &format!("staging-{}", std::process::id()))
}

/// Where the published snapshot waits while the new one is swapped in.
/// The name is fixed so a later run can find it after a crash.
pub fn previous_dir(output_dir: &Path) -> PathBuf {
    sibling(output_dir, "previous")
}

/// Put back a snapshot stranded by a publish that died mid-swap.
fn restore_stranded_previous(output_dir: &Path) -> Result<()> {
    let previous = previous_dir(output_dir);
    if output_dir.exists() || !previous.exists() {
        return Ok(());
    }
    warn!(
        "Restoring previous snapshot from {} to {}",
        previous.display(),
        output_dir.display()
    );
    fs::rename(&previous, output_dir)?;
    Ok(())
}

fn write_all_artifacts(snapshot: &Snapshot, dir: &Path) -> Result<usize> {
    fs::create_dir_all(dir.join(PLAYERS_DIR))?;

    write_json(&dir.join(LEADERBOARD_FILE), &snapshot.leaderboard)?;
    for detail in &snapshot.players {
        let path = dir
            .join(PLAYERS_DIR)
            .join(format!("{}.json", detail.player.id));
        write_json(&path, detail)?;
    }
    write_json(&dir.join(DISTRIBUTION_FILE), &snapshot.distribution)?;
    write_json(&dir.join(METADATA_FILE), &snapshot.metadata)?;

    Ok(snapshot.players.len())
}

/// Publish `snapshot` to `output_dir`, all or nothing.
///
/// Artifacts are written to a staging sibling first and swapped in with
/// renames. If anything fails, the previously published directory is left
/// as it was.
pub fn publish_snapshot(snapshot: &Snapshot, output_dir: &Path) -> Result<PublishReport> {
    if let Some(parent) = output_dir.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    restore_stranded_previous(output_dir)?;

    let staging = staging_dir(output_dir);
    if staging.exists() {
        fs::remove_dir_all(&staging)?;
    }

    let player_files = match write_all_artifacts(snapshot, &staging) {
        Ok(n) => n,
        Err(e) => {
            let _ = fs::remove_dir_all(&staging);
            return Err(e);
        }
    };
    debug!("Staged snapshot at {}", staging.display());

    let replaced_previous = output_dir.exists();
    if replaced_previous {
        let previous = previous_dir(output_dir);
        if previous.exists() {
            fs::remove_dir_all(&previous)?;
        }
        if let Err(e) = fs::rename(output_dir, &previous) {
            let _ = fs::remove_dir_all(&staging);
            return Err(e.into());
        }
        if let Err(e) = fs::rename(&staging, output_dir) {
            // Put the old snapshot back before reporting failure.
            let _ = fs::rename(&previous, output_dir);
            let _ = fs::remove_dir_all(&staging);
            return Err(e.into());
        }
        if let Err(e) = fs::remove_dir_all(&previous) {
            warn!("Could not remove previous snapshot {}: {}", previous.display(), e);
        }
    } else {
        if let Err(e) = fs::rename(&staging, output_dir) {
            let _ = fs::remove_dir_all(&staging);
            return Err(e.into());
        }
    }

    info!(
        "Published {} player files to {}",
        player_files,
        output_dir.display()
    );

    Ok(PublishReport {
        output_dir: output_dir.to_path_buf(),
        player_files,
        replaced_previous,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn read_leaderboard(output_dir: &Path) -> Result<Vec<LeaderboardEntry>> {
    read_json(&output_dir.join(LEADERBOARD_FILE))
}

pub fn read_distribution(output_dir: &Path) -> Result<Vec<DistributionBin>> {
    read_json(&output_dir.join(DISTRIBUTION_FILE))
}

pub fn read_metadata(output_dir: &Path) -> Result<Metadata> {
    read_json(&output_dir.join(METADATA_FILE))
}

/// Read one player's detail file. A missing file is `PlayerNotFound`.
pub fn read_player(output_dir: &Path, player_id: PlayerId) -> Result<PlayerDetail> {
    let path = output_dir
        .join(PLAYERS_DIR)
        .join(format!("{}.json", player_id));
    match fs::read_to_string(&path) {
        Ok(contents) => Ok(serde_json::from_str(&contents)?),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(PointsPlusError::PlayerNotFound {
            id: player_id.to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}
