use crate::errors::{ChsmackError, Result};
use std::path::Path;

/// Maximum length of a SMACK label in bytes, excluding any terminator.
pub const SMACK_LABEL_LEN: usize = 255;

pub const XATTR_NAME_SMACK: &str = "security.SMACK64";
pub const XATTR_NAME_SMACKEXEC: &str = "security.SMACK64EXEC";
pub const XATTR_NAME_SMACKMMAP: &str = "security.SMACK64MMAP";
pub const XATTR_NAME_SMACKTRANSMUTE: &str = "security.SMACK64TRANSMUTE";

/// Value stored in the transmute attribute when the flag is requested.
pub const TRANSMUTE_TRUE: &[u8] = b"TRUE";

/// A SMACK label supplied on the command line, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelValue(String);

impl LabelValue {
    /// Validates a raw option argument. Length is measured in bytes and a
    /// value of exactly SMACK_LABEL_LEN bytes is still accepted.
    pub fn new(option: &'static str, raw: String) -> Result<Self> {
        if raw.len() > SMACK_LABEL_LEN {
            return Err(ChsmackError::LabelTooLong {
                option,
                value: raw,
                limit: SMACK_LABEL_LEN,
            });
        }
        Ok(Self(raw))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// An empty label means "do not touch this attribute".
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The labels requested on the command line. Built once per invocation and
/// shared with each path by reference only.
#[derive(Debug)]
pub struct RequestedLabelSet {
    pub access: Option<LabelValue>,
    pub exec: Option<LabelValue>,
    pub mmap: Option<LabelValue>,
    pub transmute: bool,
}

impl RequestedLabelSet {
    /// Validates all supplied label values before any path is touched.
    pub fn from_options(
        access: Option<String>,
        exec: Option<String>,
        mmap: Option<String>,
        transmute: bool,
    ) -> Result<Self> {
        Ok(Self {
            access: access
                .map(|raw| LabelValue::new("access", raw))
                .transpose()?,
            exec: exec.map(|raw| LabelValue::new("exec", raw)).transpose()?,
            mmap: mmap.map(|raw| LabelValue::new("mmap", raw)).transpose()?,
            transmute,
        })
    }

    /// True when at least one option was supplied, selecting apply mode
    /// for the whole invocation.
    pub fn has_any(&self) -> bool {
        self.access.is_some() || self.exec.is_some() || self.mmap.is_some() || self.transmute
    }
}

/// Labels actually present on one path, read fresh for that path and
/// discarded after its report line is produced.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ObservedLabelSet {
    pub access: Option<String>,
    pub execute: Option<String>,
    pub mmap: Option<String>,
    pub transmute: Option<String>,
}

impl ObservedLabelSet {
    /// One report line: the path first, always, then a `key="value"` token
    /// per present label in the fixed order access, execute, mmap,
    /// transmute.
    pub fn format_line(&self, path: &Path) -> String {
        let mut line = path.display().to_string();
        let tokens = [
            ("access", &self.access),
            ("execute", &self.execute),
            ("mmap", &self.mmap),
            ("transmute", &self.transmute),
        ];
        for (key, value) in tokens {
            if let Some(value) = value {
                line.push_str(&format!(" {}=\"{}\"", key, value));
            }
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_label_at_limit_accepted() {
        let raw = "x".repeat(SMACK_LABEL_LEN);
        let label = LabelValue::new("access", raw.clone()).unwrap();
        assert_eq!(label.as_bytes(), raw.as_bytes());
    }

    #[test]
    fn test_label_over_limit_rejected() {
        let raw = "x".repeat(SMACK_LABEL_LEN + 1);
        let err = LabelValue::new("access", raw).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("access"));
        assert!(msg.contains("exceeds 255 characters"));
    }

    #[test]
    fn test_label_length_is_measured_in_bytes() {
        // 128 two-byte characters: 128 chars but 256 bytes.
        let raw = "é".repeat(128);
        assert!(LabelValue::new("mmap", raw).is_err());
    }

    #[test]
    fn test_empty_label_is_representable_but_empty() {
        let label = LabelValue::new("exec", String::new()).unwrap();
        assert!(label.is_empty());
    }

    #[test]
    fn test_mode_selection_from_options() {
        let query = RequestedLabelSet::from_options(None, None, None, false).unwrap();
        assert!(!query.has_any());

        let apply = RequestedLabelSet::from_options(Some("L".into()), None, None, false).unwrap();
        assert!(apply.has_any());

        let transmute_only = RequestedLabelSet::from_options(None, None, None, true).unwrap();
        assert!(transmute_only.has_any());
    }

    #[test]
    fn test_over_limit_option_fails_set_construction() {
        let long = "x".repeat(SMACK_LABEL_LEN + 1);
        let result = RequestedLabelSet::from_options(None, Some(long), None, false);
        assert!(matches!(
            result,
            Err(crate::errors::ChsmackError::LabelTooLong { option: "exec", .. })
        ));
    }

    #[test]
    fn test_format_line_without_labels_is_just_the_path() {
        let observed = ObservedLabelSet::default();
        let path = PathBuf::from("/tmp/f");
        assert_eq!(observed.format_line(&path), "/tmp/f");
    }

    #[test]
    fn test_format_line_token_order_is_fixed() {
        let observed = ObservedLabelSet {
            access: Some("System".to_string()),
            execute: Some("App".to_string()),
            mmap: Some("Map".to_string()),
            transmute: Some("TRUE".to_string()),
        };
        let path = PathBuf::from("/tmp/f");
        assert_eq!(
            observed.format_line(&path),
            "/tmp/f access=\"System\" execute=\"App\" mmap=\"Map\" transmute=\"TRUE\""
        );
    }

    #[test]
    fn test_format_line_skips_absent_labels() {
        let observed = ObservedLabelSet {
            mmap: Some("Map".to_string()),
            ..Default::default()
        };
        let path = PathBuf::from("/tmp/f");
        assert_eq!(observed.format_line(&path), "/tmp/f mmap=\"Map\"");
    }
}
