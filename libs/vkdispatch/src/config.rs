use std::{ffi::CStr, os::raw::c_char};

use tracing::warn;

use crate::vk;

/// An extension with its own dispatch block.
pub trait Extension: Copy + Eq + 'static {
    const ALL: &'static [Self];

    fn name(self) -> &'static CStr;

    fn from_name(name: &CStr) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|extension| extension.name() == name)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum InstanceExtension {
    KhrSurface,
    ExtDebugUtils,
}

impl Extension for InstanceExtension {
    const ALL: &'static [Self] = &[Self::KhrSurface, Self::ExtDebugUtils];

    fn name(self) -> &'static CStr {
        match self {
            InstanceExtension::KhrSurface => c"VK_KHR_surface",
            InstanceExtension::ExtDebugUtils => c"VK_EXT_debug_utils",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DeviceExtension {
    KhrSwapchain,
}

impl Extension for DeviceExtension {
    const ALL: &'static [Self] = &[Self::KhrSwapchain];

    fn name(self) -> &'static CStr {
        match self {
            DeviceExtension::KhrSwapchain => c"VK_KHR_swapchain",
        }
    }
}

/// Selects which dispatch blocks a table load resolves.
///
/// Blocks for core versions above `api_version` and for extensions not listed
/// in `extensions` are left unloaded. With `strict` set, an enabled block
/// that the driver cannot fully resolve fails the load instead of keeping
/// aborting stubs for the missing entries.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Config<E: Extension> {
    pub api_version: u32,
    pub extensions: Vec<E>,
    pub strict: bool,
}

pub type InstanceConfig = Config<InstanceExtension>;
pub type DeviceConfig = Config<DeviceExtension>;

impl<E: Extension> Config<E> {
    pub fn new(api_version: u32) -> Self {
        Self {
            api_version,
            extensions: Vec::new(),
            strict: false,
        }
    }

    /// Builds a config from the extension names passed to the driver. Names
    /// without a dispatch block here are skipped.
    pub fn from_extension_names<'a, I>(api_version: u32, names: I) -> Self
    where
        I: IntoIterator<Item = &'a CStr>,
    {
        names
            .into_iter()
            .fold(Self::new(api_version), |config, name| {
                match E::from_name(name) {
                    Some(extension) => config.with_extension(extension),
                    None => {
                        warn!(
                            extension = %name.to_string_lossy(),
                            "no dispatch block for extension, ignoring"
                        );
                        config
                    }
                }
            })
    }

    pub fn with_extension(mut self, extension: E) -> Self {
        if !self.extensions.contains(&extension) {
            self.extensions.push(extension);
        }
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_enabled(&self, extension: E) -> bool {
        self.extensions.contains(&extension)
    }

    /// Pointers for `enabled_extension_names` in the create info. They point at
    /// static strings, so the vector may outlive the config.
    pub fn enabled_extension_names(&self) -> Vec<*const c_char> {
        self.extensions
            .iter()
            .map(|extension| extension.name().as_ptr())
            .collect()
    }
}

impl<E: Extension> Default for Config<E> {
    fn default() -> Self {
        Self::new(vk::VERSION_1_0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lenient_1_0() {
        let config = InstanceConfig::default();
        assert_eq!(config.api_version, vk::VERSION_1_0);
        assert!(config.extensions.is_empty());
        assert!(!config.strict);
    }

    #[test]
    fn builder_deduplicates_extensions() {
        let config = DeviceConfig::new(vk::VERSION_1_3)
            .with_extension(DeviceExtension::KhrSwapchain)
            .with_extension(DeviceExtension::KhrSwapchain)
            .strict(true);
        assert_eq!(config.extensions, [DeviceExtension::KhrSwapchain]);
        assert!(config.strict);
        assert!(config.is_enabled(DeviceExtension::KhrSwapchain));
    }

    #[test]
    fn extension_names_round_trip() {
        for &extension in InstanceExtension::ALL {
            assert_eq!(InstanceExtension::from_name(extension.name()), Some(extension));
        }
        assert_eq!(InstanceExtension::from_name(c"VK_KHR_xlib_surface"), None);
        // Instance extensions are not device extensions.
        assert_eq!(DeviceExtension::from_name(c"VK_EXT_debug_utils"), None);
    }

    #[test]
    fn from_extension_names_skips_unknown() {
        let config = InstanceConfig::from_extension_names(
            vk::VERSION_1_1,
            [c"VK_KHR_surface", c"VK_KHR_wayland_surface", c"VK_EXT_debug_utils"],
        );
        assert_eq!(
            config.extensions,
            [InstanceExtension::KhrSurface, InstanceExtension::ExtDebugUtils]
        );

        let names = config.enabled_extension_names();
        assert_eq!(names.len(), 2);
        let first = unsafe { CStr::from_ptr(names[0]) };
        assert_eq!(first, c"VK_KHR_surface");
    }
}
