// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parameterized remote commands.
//!
//! A command is a program plus an explicit argument list. Nothing is ever
//! interpolated into a shell string: when a transport has to hand the command
//! to a remote shell, every argument is quoted on its own. The one exception is
//! [`Arg::Pattern`], whose `*` wildcards stay unquoted so the remote side can
//! expand them; the text around each `*` is still quoted.

use std::fmt;

/// One argument of a [`RemoteCommand`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// Passed through verbatim
    Literal(String),
    /// Path pattern; `*` expands on the remote side
    Pattern(String),
}

impl Arg {
    pub fn as_str(&self) -> &str {
        match self {
            Arg::Literal(s) | Arg::Pattern(s) => s,
        }
    }

    fn to_shell(&self) -> String {
        match self {
            Arg::Literal(s) => quote(s),
            Arg::Pattern(s) => s
                .split('*')
                .map(|piece| if piece.is_empty() { String::new() } else { quote(piece) })
                .collect::<Vec<_>>()
                .join("*"),
        }
    }
}

/// A program and its arguments, run on a remote target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCommand {
    program: String,
    args: Vec<Arg>,
}

impl RemoteCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new() }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(Arg::Literal(arg.into()));
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(|a| Arg::Literal(a.into())));
        self
    }

    /// Append a path pattern whose `*` wildcards expand remotely.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.args.push(Arg::Pattern(pattern.into()));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Render for a POSIX shell on the remote side.
    pub fn to_shell(&self) -> String {
        std::iter::once(quote(&self.program))
            .chain(self.args.iter().map(Arg::to_shell))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for RemoteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.as_str())?;
        }
        Ok(())
    }
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | ':' | ',' | '@' | '%' | '+' | '=')
}

/// Single-quote `s` for a POSIX shell unless it is made only of safe characters.
pub fn quote(s: &str) -> String {
    if !s.is_empty() && s.chars().all(is_shell_safe) {
        return s.to_string();
    }
    format!("'{}'", s.replace('\'', r"'\''"))
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
