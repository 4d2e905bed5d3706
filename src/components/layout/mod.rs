//! Page chrome: every route renders inside the shared [`AppShell`].

mod app_shell;

pub(crate) use app_shell::AppShell;
