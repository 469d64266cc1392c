//! External service clients.

/// Cloud record store client used by the `sync` command.
pub mod cloud;
