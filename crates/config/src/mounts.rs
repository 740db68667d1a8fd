//! Ephemeral disk and object storage mount lines

use crate::{memory::parse_memory, names};
use dsc_core::{Error, Mount, MountMode, Result};

const DELIMITER: char = ':';
const PATH_DELIMITER: char = '/';

fn wrong_format(input: &str, line: &str, reason: &str) -> Error {
    Error::input_format(input, format!("Line: '{line}' has wrong format. {reason}"))
}

fn parse_mode(input: &str, line: &str, raw: &str, default: MountMode) -> Result<MountMode> {
    if raw.is_empty() {
        return Ok(default);
    }
    MountMode::from_alias(raw).ok_or_else(|| {
        let possible = MountMode::aliases().collect::<Vec<_>>().join(", ");
        wrong_format(
            input,
            line,
            &format!("Invalid accessMode. Possible values: {possible}"),
        )
    })
}

/// `MOUNT_PATH:SIZE[:ACCESS_MODE]`, read-write unless stated
pub fn parse_ephemeral_mount(line: &str) -> Result<Mount> {
    let input = names::EPHEMERAL_MOUNTS;
    let mut parts = line.split(DELIMITER).map(str::trim);
    let mount_path = parts.next().unwrap_or_default();
    let size = parts.next().unwrap_or_default();
    let mode = parts.next().unwrap_or_default();

    if mount_path.is_empty() {
        return Err(wrong_format(input, line, "Empty mount path"));
    }
    if size.is_empty() {
        return Err(wrong_format(input, line, "Empty size"));
    }
    let mode = parse_mode(input, line, mode, MountMode::ReadWrite)?;
    let size = parse_memory(input, size)?;

    Ok(Mount::ephemeral(mount_path, mode, size))
}

/// `BUCKET[/PREFIX...]:MOUNT_PATH[:ACCESS_MODE]`, read-only unless stated
pub fn parse_storage_mount(line: &str) -> Result<Mount> {
    let input = names::STORAGE_MOUNTS;
    let mut parts = line.split(DELIMITER).map(str::trim);
    let s3_path = parts.next().unwrap_or_default();
    let mount_path = parts.next().unwrap_or_default();
    let mode = parts.next().unwrap_or_default();

    if s3_path.is_empty() {
        return Err(wrong_format(input, line, "Empty s3Path"));
    }
    let mut segments = s3_path.split(PATH_DELIMITER).map(str::trim);
    let bucket_id = segments.next().unwrap_or_default();
    let prefix = segments.collect::<Vec<_>>().join("/");

    if mount_path.is_empty() {
        return Err(wrong_format(input, line, "Empty mountPath"));
    }
    let mode = parse_mode(input, line, mode, MountMode::ReadOnly)?;

    Ok(Mount::object_storage(mount_path, mode, bucket_id, prefix))
}

/// All mounts of a revision, ephemeral disks first
pub fn parse_mounts<S: AsRef<str>>(ephemeral: &[S], storage: &[S]) -> Result<Vec<Mount>> {
    let ephemeral = ephemeral
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty())
        .map(parse_ephemeral_mount);
    let storage = storage
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty())
        .map(parse_storage_mount);

    ephemeral.chain(storage).collect()
}
