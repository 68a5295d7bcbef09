// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    plain = { "sched_switch,block_rq_issue", "sched_switch,block_rq_issue" },
    url = { "net://127.0.0.1", "net://127.0.0.1" },
    empty = { "", "''" },
    space = { "a b", "'a b'" },
    semicolon = { "x;rm -rf /", "'x;rm -rf /'" },
    subst = { "$(id)", "'$(id)'" },
    single_quote = { "it's", r"'it'\''s'" },
    glob = { "*", "'*'" },
)]
fn quote_cases(input: &str, expected: &str) {
    assert_eq!(quote(input), expected);
}

#[test]
fn display_is_unquoted_words() {
    let cmd = RemoteCommand::new("lttng").args(["create", "tv-cpu-1", "-U"]).arg("net://10.0.0.1");
    assert_eq!(cmd.to_string(), "lttng create tv-cpu-1 -U net://10.0.0.1");
    assert_eq!(cmd.program(), "lttng");
}

#[test]
fn to_shell_quotes_each_argument() {
    let cmd = RemoteCommand::new("lttng").arg("start").arg("sess; reboot");
    assert_eq!(cmd.to_shell(), "lttng start 'sess; reboot'");
}

#[test]
fn pattern_keeps_wildcards_unquoted() {
    let cmd = RemoteCommand::new("ls").pattern("/root/lttng-traces/h1/tv-cpu-1*/kernel");
    assert_eq!(cmd.to_shell(), "ls /root/lttng-traces/h1/tv-cpu-1*/kernel");

    let hostile = RemoteCommand::new("ls").pattern("/t/$(id)*/k k");
    assert_eq!(hostile.to_shell(), "ls '/t/$(id)'*'/k k'");
}

#[test]
fn literal_star_is_quoted() {
    let cmd = RemoteCommand::new("lttng").args(["enable-event", "-u", "app:*"]);
    assert_eq!(cmd.to_shell(), "lttng enable-event -u 'app:*'");
}
