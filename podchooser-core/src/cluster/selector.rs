use crate::cluster::ReplicaGroup;
use std::collections::BTreeMap;
use std::fmt;

/// Label every pod of a replica group carries, set to the group name.
pub const APP_LABEL: &str = "app";

const MAX_LABEL_VALUE_LEN: usize = 63;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid label value '{value}': {reason}")]
pub struct SelectorError {
    pub value: String,
    pub reason: &'static str,
}

/// Equality-based label selector (`key=value,key2=value2`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelSelector {
    match_labels: BTreeMap<String, String>,
}

impl LabelSelector {
    /// Selector matching every pod of `group` (`app=<group name>`).
    pub fn for_group(group: &ReplicaGroup) -> Result<Self, SelectorError> {
        Self::default().with_label(APP_LABEL, &group.name)
    }

    pub fn with_label(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, SelectorError> {
        let value = value.into();
        validate_label_value(&value)?;
        self.match_labels.insert(key.into(), value);
        Ok(self)
    }

    pub fn matches(&self, labels: &BTreeMap<String, String>) -> bool {
        self.match_labels
            .iter()
            .all(|(k, v)| labels.get(k).is_some_and(|actual| actual == v))
    }

    pub fn is_empty(&self) -> bool {
        self.match_labels.is_empty()
    }
}

impl fmt::Display for LabelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.match_labels.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{k}={v}")?;
        }
        Ok(())
    }
}

/// Orchestrator label value rules: at most 63 characters, empty or
/// alphanumeric at both ends with `-`, `_` or `.` in between.
pub fn validate_label_value(value: &str) -> Result<(), SelectorError> {
    let invalid = |reason| {
        Err(SelectorError {
            value: value.to_string(),
            reason,
        })
    };

    if value.is_empty() {
        return Ok(());
    }

    if value.len() > MAX_LABEL_VALUE_LEN {
        return invalid("must be no more than 63 characters");
    }

    let bytes = value.as_bytes();
    let alnum_edges =
        bytes[0].is_ascii_alphanumeric() && bytes[bytes.len() - 1].is_ascii_alphanumeric();
    if !alnum_edges {
        return invalid("must begin and end with an alphanumeric character");
    }

    if !bytes
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
    {
        return invalid("may only contain alphanumerics, '-', '_' or '.'");
    }

    Ok(())
}
