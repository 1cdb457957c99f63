pub(crate) mod args;
pub(crate) mod commands;
mod shell;
