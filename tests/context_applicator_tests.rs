mod support;

use std::path::Path;

use mysql_helpers::selinux::applicator::{apply_rules, ApplyOptions};
use mysql_helpers::selinux::mycnf::OptionFile;
use mysql_helpers::selinux::rules::derive_rules;
use support::RecordingRunner;

fn rules_from(text: &str) -> Vec<mysql_helpers::selinux::rules::ContextRule> {
    let config = OptionFile::parse(text, Path::new("my.cnf")).expect("option file should parse");
    derive_rules(&config)
}

#[test]
fn datadir_issues_one_label_and_one_relabel() {
    let rules = rules_from("[mysqld]\ndatadir=/var/lib/mysql\n");
    let mut runner = RecordingRunner::succeeding();
    let mut out = Vec::new();

    let report = apply_rules(&rules, &mut runner, &ApplyOptions::default(), &mut out)
        .expect("writing to a Vec cannot fail");

    assert_eq!(
        runner.lines(),
        vec![
            "semanage fcontext -a -t mysqld_db_t \"/var/lib/mysql(/.*)?\"",
            "restorecon -Rv /var/lib/mysql",
        ]
    );
    assert_eq!(runner.commands[0].program(), "semanage");
    assert_eq!(
        runner.commands[0].args(),
        ["fcontext", "-a", "-t", "mysqld_db_t", "/var/lib/mysql(/.*)?"]
    );
    assert_eq!(report.executed, 2);
    assert!(out.is_empty());
}

#[test]
fn dry_run_never_reaches_the_runner() {
    let rules = rules_from("[mysqld]\ndatadir=/var/lib/mysql\nport=3306\n");
    let mut runner = RecordingRunner::succeeding();
    let mut out = Vec::new();
    let options = ApplyOptions {
        verbose: false,
        dry_run: true,
    };

    let report =
        apply_rules(&rules, &mut runner, &options, &mut out).expect("writing to a Vec cannot fail");

    assert!(runner.commands.is_empty());
    assert_eq!(report.issued, 3);
    assert_eq!(report.executed, 0);
    assert_eq!(String::from_utf8_lossy(&out).lines().count(), 4);
}

#[test]
fn failing_commands_do_not_stop_later_rules() {
    let rules = rules_from(
        "[mysqld]\ndatadir=/var/lib/mysql\nsocket=/var/lib/mysql/mysql.sock\n[mysqld_safe]\npid-file=/run/mysqld.pid\n",
    );
    let mut runner = RecordingRunner::failing_with(1);
    let mut out = Vec::new();

    let report = apply_rules(&rules, &mut runner, &ApplyOptions::default(), &mut out)
        .expect("writing to a Vec cannot fail");

    assert_eq!(runner.commands.len(), 6);
    assert_eq!(report.failed, 6);
    assert_eq!(
        runner.lines().last().map(String::as_str),
        Some("restorecon -Rv /run/mysqld.pid")
    );
}

#[test]
fn verbose_echoes_before_running() {
    let rules = rules_from("[mysqld]\nport=3306\n");
    let mut runner = RecordingRunner::succeeding();
    let mut out = Vec::new();
    let options = ApplyOptions {
        verbose: true,
        dry_run: false,
    };

    apply_rules(&rules, &mut runner, &options, &mut out).expect("writing to a Vec cannot fail");

    assert_eq!(
        String::from_utf8_lossy(&out),
        "semanage port -a -t mysqld_port_t -p tcp 3306\n"
    );
    assert_eq!(runner.commands.len(), 1);
}
