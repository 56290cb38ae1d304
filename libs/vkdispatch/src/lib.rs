//! Thin wrappers forwarding to Vulkan entry points resolved at runtime.
//!
//! An [`Entry`] wraps the root `vkGetInstanceProcAddr`. [`InstanceTable`] and
//! [`DeviceTable`] resolve one dispatch block per core version and extension,
//! and [`Instance`], [`Device`] and [`CommandBuffer`] pair a handle with its
//! table so every call forwards its arguments unchanged.

pub use vkdispatch_sys as vk;

mod command_buffer;
mod config;
mod device;
mod entry;
mod enumerate;
mod error;
mod instance;
mod table;

pub use command_buffer::CommandBuffer;
pub use config::{
    Config, DeviceConfig, DeviceExtension, Extension, InstanceConfig, InstanceExtension,
};
pub use device::Device;
pub use entry::Entry;
pub use enumerate::enumerate;
pub use error::Error;
pub use instance::Instance;
pub use table::{DeviceTable, InstanceTable, Resolver};
