use std::fmt;

use crate::selinux::rules::{ContextKind, ContextRule};

/// Suffix matching a directory and everything below it.
pub const RECURSIVE_SUFFIX: &str = "(/.*)?";

/// A program invocation plus the shell-style line echoed for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    program: String,
    args: Vec<String>,
    line: String,
}

impl ShellCommand {
    fn new(program: &str, args: Vec<String>, line: String) -> Self {
        Self {
            program: program.to_string(),
            args,
            line,
        }
    }

    /// Executable name.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Argument vector passed to the program, without shell quoting.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

/// Escape periods so `semanage fcontext` matches them literally.
pub fn escape_periods(path: &str) -> String {
    path.replace('.', "\\.")
}

/// `semanage` command attaching the rule's label.
pub fn label_command(rule: &ContextRule) -> ShellCommand {
    match rule.kind {
        ContextKind::Directory | ContextKind::File => {
            let mut pattern = escape_periods(&rule.target);
            if rule.kind == ContextKind::Directory {
                pattern.push_str(RECURSIVE_SUFFIX);
            }
            let line = format!("semanage fcontext -a -t {} \"{pattern}\"", rule.label);
            let args = vec![
                "fcontext".to_string(),
                "-a".to_string(),
                "-t".to_string(),
                rule.label.to_string(),
                pattern,
            ];
            ShellCommand::new("semanage", args, line)
        }
        ContextKind::Port => {
            let line = format!("semanage port -a -t {} -p tcp {}", rule.label, rule.target);
            let args = vec![
                "port".to_string(),
                "-a".to_string(),
                "-t".to_string(),
                rule.label.to_string(),
                "-p".to_string(),
                "tcp".to_string(),
                rule.target.clone(),
            ];
            ShellCommand::new("semanage", args, line)
        }
    }
}

/// `restorecon -Rv <path>`.
pub fn relabel_command(path: &str) -> ShellCommand {
    let args = vec!["-Rv".to_string(), path.to_string()];
    ShellCommand::new("restorecon", args, format!("restorecon -Rv {path}"))
}

/// Label command followed, for filesystem rules, by the relabel command.
pub fn commands_for(rule: &ContextRule) -> Vec<ShellCommand> {
    let mut commands = vec![label_command(rule)];
    if rule.kind != ContextKind::Port {
        commands.push(relabel_command(&rule.target));
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(kind: ContextKind, target: &str, label: &'static str) -> ContextRule {
        ContextRule {
            kind,
            target: target.to_string(),
            label,
        }
    }

    #[test]
    fn directory_rule_gets_recursive_pattern_and_relabel() {
        let cmds = commands_for(&rule(ContextKind::Directory, "/var/lib/mysql", "mysqld_db_t"));
        let lines: Vec<_> = cmds.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "semanage fcontext -a -t mysqld_db_t \"/var/lib/mysql(/.*)?\"",
                "restorecon -Rv /var/lib/mysql",
            ]
        );
        assert_eq!(cmds[0].program(), "semanage");
        assert_eq!(cmds[0].args().last().map(String::as_str), Some("/var/lib/mysql(/.*)?"));
    }

    #[test]
    fn periods_are_escaped_before_the_recursive_suffix() {
        let cmd = label_command(&rule(ContextKind::Directory, "/var/lib/mysql.data", "mysqld_db_t"));
        assert_eq!(
            cmd.to_string(),
            r#"semanage fcontext -a -t mysqld_db_t "/var/lib/mysql\.data(/.*)?""#
        );
    }

    #[test]
    fn file_rule_has_no_recursive_suffix_and_relabels_unescaped_path() {
        let cmds = commands_for(&rule(ContextKind::File, "/run/mysqld/mysqld.sock", "mysqld_var_run_t"));
        assert_eq!(
            cmds[0].to_string(),
            r#"semanage fcontext -a -t mysqld_var_run_t "/run/mysqld/mysqld\.sock""#
        );
        assert_eq!(cmds[1].to_string(), "restorecon -Rv /run/mysqld/mysqld.sock");
        assert_eq!(cmds[1].args(), ["-Rv", "/run/mysqld/mysqld.sock"]);
    }

    #[test]
    fn port_rule_has_no_relabel_step() {
        let cmds = commands_for(&rule(ContextKind::Port, "3307", "mysqld_port_t"));
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].to_string(), "semanage port -a -t mysqld_port_t -p tcp 3307");
    }
}
