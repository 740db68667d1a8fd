//! Ephemeral disk and object storage mounts

use serde::{Deserialize, Serialize};
use std::fmt;

/// Access mode of a mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MountMode {
    ReadOnly,
    ReadWrite,
}

impl MountMode {
    /// Spellings accepted for read-only mounts
    pub const READ_ONLY_ALIASES: &'static [&'static str] =
        &["read-only", "ro", "readOnly", "read_only", "ReadOnly"];

    /// Spellings accepted for read-write mounts
    pub const READ_WRITE_ALIASES: &'static [&'static str] =
        &["read-write", "rw", "readWrite", "read_write", "ReadWrite"];

    /// Parse one of the accepted aliases
    #[must_use]
    pub fn from_alias(value: &str) -> Option<Self> {
        if Self::READ_ONLY_ALIASES.contains(&value) {
            Some(MountMode::ReadOnly)
        } else if Self::READ_WRITE_ALIASES.contains(&value) {
            Some(MountMode::ReadWrite)
        } else {
            None
        }
    }

    /// All accepted aliases, read-only first
    pub fn aliases() -> impl Iterator<Item = &'static str> {
        Self::READ_ONLY_ALIASES
            .iter()
            .chain(Self::READ_WRITE_ALIASES.iter())
            .copied()
    }
}

impl fmt::Display for MountMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountMode::ReadOnly => write!(f, "READ_ONLY"),
            MountMode::ReadWrite => write!(f, "READ_WRITE"),
        }
    }
}

/// What backs a mount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MountTarget {
    #[serde(rename_all = "camelCase")]
    EphemeralDiskSpec { size: u64 },
    #[serde(rename_all = "camelCase")]
    ObjectStorage { bucket_id: String, prefix: String },
}

/// A filesystem mount inside the container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mount {
    pub mount_point_path: String,
    pub mode: MountMode,
    #[serde(flatten)]
    pub target: MountTarget,
}

impl Mount {
    /// Ephemeral disk of `size` bytes
    pub fn ephemeral(mount_point_path: impl Into<String>, mode: MountMode, size: u64) -> Self {
        Self {
            mount_point_path: mount_point_path.into(),
            mode,
            target: MountTarget::EphemeralDiskSpec { size },
        }
    }

    /// Bucket (optionally narrowed to a prefix) mounted from object storage
    pub fn object_storage(
        mount_point_path: impl Into<String>,
        mode: MountMode,
        bucket_id: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            mount_point_path: mount_point_path.into(),
            mode,
            target: MountTarget::ObjectStorage {
                bucket_id: bucket_id.into(),
                prefix: prefix.into(),
            },
        }
    }
}
