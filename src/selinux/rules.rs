use std::fmt;

use crate::selinux::mycnf::OptionFile;

/// How a label is attached to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    /// Directory and everything below it.
    Directory,
    /// A single file path.
    File,
    /// A TCP port.
    Port,
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextKind::Directory => write!(f, "directory"),
            ContextKind::File => write!(f, "file"),
            ContextKind::Port => write!(f, "port"),
        }
    }
}

/// An option-file key that maps to an SELinux type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecognizedKey {
    /// Option-file section holding the key.
    pub section: &'static str,
    /// Option name.
    pub key: &'static str,
    /// Target kind of the option's value.
    pub kind: ContextKind,
    /// SELinux type applied to the target.
    pub label: &'static str,
}

const fn recognized(
    section: &'static str,
    key: &'static str,
    kind: ContextKind,
    label: &'static str,
) -> RecognizedKey {
    RecognizedKey {
        section,
        key,
        kind,
        label,
    }
}

/// Recognized keys in application order.
pub const RECOGNIZED_KEYS: [RecognizedKey; 8] = [
    recognized("mysqld", "datadir", ContextKind::Directory, "mysqld_db_t"),
    recognized("mysqld", "socket", ContextKind::File, "mysqld_var_run_t"),
    recognized("mysqld", "log-bin", ContextKind::Directory, "mysqld_db_t"),
    recognized("mysqld", "relay-log", ContextKind::Directory, "mysqld_db_t"),
    recognized("mysqld", "tmpdir", ContextKind::Directory, "mysqld_tmp_t"),
    recognized("mysqld_safe", "log-error", ContextKind::File, "mysqld_log_t"),
    recognized("mysqld_safe", "pid-file", ContextKind::File, "mysqld_var_run_t"),
    recognized("mysqld", "port", ContextKind::Port, "mysqld_port_t"),
];

/// A label to apply to a path or port, derived from one option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextRule {
    /// How the label is attached.
    pub kind: ContextKind,
    /// Filesystem path, or port number for [`ContextKind::Port`].
    pub target: String,
    /// SELinux type name.
    pub label: &'static str,
}

/// Derive one rule per recognized key present in `config`.
///
/// Keys without a value and unusable port numbers are skipped with a warning.
pub fn derive_rules(config: &OptionFile) -> Vec<ContextRule> {
    let mut rules = Vec::new();
    for key in &RECOGNIZED_KEYS {
        let Some(value) = config.get(key.section, key.key) else {
            continue;
        };
        let Some(value) = value else {
            tracing::warn!(
                section = key.section,
                key = key.key,
                kind = %key.kind,
                "option has no value; skipping"
            );
            continue;
        };
        if key.kind == ContextKind::Port && !is_valid_port(value) {
            tracing::warn!(
                section = key.section,
                key = key.key,
                value,
                "not a TCP port number; skipping"
            );
            continue;
        }
        tracing::debug!(
            section = key.section,
            key = key.key,
            kind = %key.kind,
            value,
            label = key.label,
            "recognized option"
        );
        rules.push(ContextRule {
            kind: key.kind,
            target: value.to_string(),
            label: key.label,
        });
    }
    tracing::debug!(rules = rules.len(), "derived context rules");
    rules
}

fn is_valid_port(value: &str) -> bool {
    value.parse::<u16>().is_ok_and(|port| port != 0)
}
