use std::ffi::CStr;

use thiserror::Error;

use crate::vk;

#[derive(Debug, Error)]
pub enum Error {
    /// A strict load could not resolve every entry point of an enabled block.
    #[error("failed to load {block}, unresolved entry points: {}", join_names(.names))]
    MissingEntryPoints {
        block: &'static str,
        names: Vec<&'static CStr>,
    },
    /// The root `vkGetInstanceProcAddr` did not provide a global command.
    #[error("failed to resolve root entry point {}", .0.to_string_lossy())]
    MissingRootEntryPoint(&'static CStr),
    #[error("vulkan call failed: {0}")]
    Vk(#[from] vk::Result),
}

fn join_names(names: &[&CStr]) -> String {
    names
        .iter()
        .map(|name| name.to_string_lossy())
        .collect::<Vec<_>>()
        .join(", ")
}
