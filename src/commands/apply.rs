use crate::errors::Result;
use crate::label::{
    LabelValue, RequestedLabelSet, TRANSMUTE_TRUE, XATTR_NAME_SMACK, XATTR_NAME_SMACKEXEC,
    XATTR_NAME_SMACKMMAP, XATTR_NAME_SMACKTRANSMUTE,
};
use crate::xattr;
use log::debug;
use std::path::{Path, PathBuf};

pub struct ApplyCommand {
    pub paths: Vec<PathBuf>,
    pub labels: RequestedLabelSet,
}

impl ApplyCommand {
    pub fn new(paths: Vec<PathBuf>, labels: RequestedLabelSet) -> Self {
        Self { paths, labels }
    }

    /// Writes one label attribute. A failure is reported and swallowed so
    /// the remaining attributes and paths are still attempted.
    fn set_label(path: &Path, name: &str, value: &[u8]) {
        debug!("setting {} on {}", name, path.display());
        if let Err(e) = xattr::lsetxattr(path, name, value) {
            eprintln!("{}: {}: {}", path.display(), name, e);
        }
    }

    fn set_if_requested(path: &Path, name: &str, label: &Option<LabelValue>) {
        // An explicitly empty label argument means "leave this attribute
        // alone", matching the behavior of an option never given.
        if let Some(label) = label {
            if !label.is_empty() {
                Self::set_label(path, name, label.as_bytes());
            }
        }
    }
}

impl super::Command for ApplyCommand {
    fn execute(&self) -> Result<()> {
        // Paths in command-line order; attributes in fixed order within
        // each path. Every write is attempted exactly once.
        for path in &self.paths {
            Self::set_if_requested(path, XATTR_NAME_SMACK, &self.labels.access);
            Self::set_if_requested(path, XATTR_NAME_SMACKEXEC, &self.labels.exec);
            Self::set_if_requested(path, XATTR_NAME_SMACKMMAP, &self.labels.mmap);
            if self.labels.transmute {
                Self::set_label(path, XATTR_NAME_SMACKTRANSMUTE, TRANSMUTE_TRUE);
            }
        }
        Ok(())
    }
}
