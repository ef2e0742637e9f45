use crate::errors::Result;
use crate::label::{
    ObservedLabelSet, XATTR_NAME_SMACK, XATTR_NAME_SMACKEXEC, XATTR_NAME_SMACKMMAP,
    XATTR_NAME_SMACKTRANSMUTE,
};
use crate::xattr;
use log::debug;
use std::path::{Path, PathBuf};

pub struct QueryCommand {
    pub paths: Vec<PathBuf>,
}

impl QueryCommand {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// Reads one attribute. An absent attribute, an empty value and a read
    /// failure all produce None so the report line simply omits the token.
    fn read_label(path: &Path, name: &str) -> Option<String> {
        match xattr::lgetxattr(path, name) {
            Ok(value) if !value.is_empty() => Some(String::from_utf8_lossy(&value).into_owned()),
            _ => None,
        }
    }

    fn observe(path: &Path) -> ObservedLabelSet {
        ObservedLabelSet {
            access: Self::read_label(path, XATTR_NAME_SMACK),
            execute: Self::read_label(path, XATTR_NAME_SMACKEXEC),
            mmap: Self::read_label(path, XATTR_NAME_SMACKMMAP),
            transmute: Self::read_label(path, XATTR_NAME_SMACKTRANSMUTE),
        }
    }
}

impl super::Command for QueryCommand {
    fn execute(&self) -> Result<()> {
        for path in &self.paths {
            debug!("querying labels on {}", path.display());
            let observed = Self::observe(path);
            println!("{}", observed.format_line(path));
        }
        Ok(())
    }
}
