//! Shared service wrappers used across clients.

mod vault;

pub use vault::VaultService;
