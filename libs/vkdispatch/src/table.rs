use std::ffi::CStr;

use tracing::{debug, trace, warn};

use crate::{
    Entry, Error,
    config::{DeviceConfig, DeviceExtension, InstanceConfig, InstanceExtension},
    vk,
};

/// An explicit name lookup used instead of the default
/// `vkGetInstanceProcAddr`/`vkGetDeviceProcAddr` resolution.
pub type Resolver<'a> = &'a mut dyn FnMut(&CStr) -> Option<vk::FnVoidFunction>;

/// Loads one dispatch block after another through a single resolver, and
/// keeps track of the names it could not resolve.
struct BlockLoader<'a> {
    resolve: Resolver<'a>,
    resolved: usize,
    missing: Vec<(&'static str, Vec<&'static CStr>)>,
}

impl<'a> BlockLoader<'a> {
    fn new(resolve: Resolver<'a>) -> Self {
        Self {
            resolve,
            resolved: 0,
            missing: Vec::new(),
        }
    }

    /// Returns the block's `Default` (its unloaded table) without calling the
    /// resolver when the block is disabled.
    fn block<T, L>(
        &mut self,
        block: &'static str,
        enabled: bool,
        entry_points: &'static [&'static CStr],
        load: L,
    ) -> T
    where
        T: Default,
        L: FnOnce(&mut dyn FnMut(&CStr) -> Option<vk::FnVoidFunction>) -> T,
    {
        if !enabled {
            trace!(block, "block not enabled, skipping");
            return T::default();
        }

        let resolve = &mut *self.resolve;
        let mut missing = Vec::new();
        let table = load(&mut |name: &CStr| {
            let function = resolve(name);
            if function.is_none() {
                missing.extend(
                    entry_points
                        .iter()
                        .copied()
                        .find(|entry_point| *entry_point == name),
                );
            }
            function
        });

        for name in &missing {
            trace!(block, entry_point = %name.to_string_lossy(), "entry point not resolved");
        }
        self.resolved += entry_points.len() - missing.len();
        if !missing.is_empty() {
            self.missing.push((block, missing));
        }
        table
    }

    fn finish(mut self, kind: &'static str, api_version: u32, strict: bool) -> Result<(), Error> {
        let missing_count: usize = self.missing.iter().map(|(_, names)| names.len()).sum();
        debug!(
            kind,
            api_version = %format_version(api_version),
            resolved = self.resolved,
            missing = missing_count,
            "loaded dispatch table"
        );

        if strict && !self.missing.is_empty() {
            let (block, names) = self.missing.swap_remove(0);
            warn!(kind, block, missing = names.len(), "strict dispatch table load failed");
            return Err(Error::MissingEntryPoints { block, names });
        }

        Ok(())
    }
}

fn format_version(version: u32) -> String {
    format!(
        "{}.{}.{}",
        vk::api_version_major(version),
        vk::api_version_minor(version),
        vk::api_version_patch(version)
    )
}

/// Every instance-level block, loaded for one `VkInstance`.
pub struct InstanceTable {
    api_version: u32,
    extensions: Vec<InstanceExtension>,
    pub v1_0: vk::InstanceFnV1_0,
    pub v1_1: vk::InstanceFnV1_1,
    pub v1_3: vk::InstanceFnV1_3,
    pub khr_surface: vk::KhrSurfaceFn,
    pub ext_debug_utils: vk::ExtDebugUtilsInstanceFn,
}

impl InstanceTable {
    /// Resolves the instance blocks enabled by `config`.
    ///
    /// Names are looked up with `resolver` when given, otherwise through the
    /// entry's `vkGetInstanceProcAddr` for `instance`.
    ///
    /// # Safety
    ///
    /// `instance` must have been created with at least `config.api_version`
    /// and every extension in `config`, and `resolver` must return pointers
    /// matching the requested entry point.
    pub unsafe fn load(
        entry: &Entry,
        instance: vk::Instance,
        config: &InstanceConfig,
        resolver: Option<Resolver<'_>>,
    ) -> Result<Self, Error> {
        let mut default_resolver =
            |name: &CStr| unsafe { entry.get_instance_proc_addr(instance, name) };
        let resolve: Resolver = match resolver {
            Some(resolver) => resolver,
            None => &mut default_resolver,
        };
        let mut loader = BlockLoader::new(resolve);

        let api_version = vk::api_version_without_patch(config.api_version);
        let v1_0 = loader.block(
            "VERSION_1_0",
            true,
            vk::InstanceFnV1_0::ENTRY_POINTS,
            |resolve| unsafe { vk::InstanceFnV1_0::load(resolve) },
        );
        let v1_1 = loader.block(
            "VERSION_1_1",
            api_version >= vk::VERSION_1_1,
            vk::InstanceFnV1_1::ENTRY_POINTS,
            |resolve| unsafe { vk::InstanceFnV1_1::load(resolve) },
        );
        let v1_3 = loader.block(
            "VERSION_1_3",
            api_version >= vk::VERSION_1_3,
            vk::InstanceFnV1_3::ENTRY_POINTS,
            |resolve| unsafe { vk::InstanceFnV1_3::load(resolve) },
        );
        let khr_surface = loader.block(
            "VK_KHR_surface",
            config.is_enabled(InstanceExtension::KhrSurface),
            vk::KhrSurfaceFn::ENTRY_POINTS,
            |resolve| unsafe { vk::KhrSurfaceFn::load(resolve) },
        );
        let ext_debug_utils = loader.block(
            "VK_EXT_debug_utils",
            config.is_enabled(InstanceExtension::ExtDebugUtils),
            vk::ExtDebugUtilsInstanceFn::ENTRY_POINTS,
            |resolve| unsafe { vk::ExtDebugUtilsInstanceFn::load(resolve) },
        );
        loader.finish("instance", config.api_version, config.strict)?;

        Ok(Self {
            api_version: config.api_version,
            extensions: config.extensions.clone(),
            v1_0,
            v1_1,
            v1_3,
            khr_surface,
            ext_debug_utils,
        })
    }

    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    pub fn supports(&self, extension: InstanceExtension) -> bool {
        self.extensions.contains(&extension)
    }
}

/// Every device-level block, loaded for one `VkDevice`.
pub struct DeviceTable {
    api_version: u32,
    extensions: Vec<DeviceExtension>,
    debug_utils: bool,
    pub v1_0: vk::DeviceFnV1_0,
    pub v1_1: vk::DeviceFnV1_1,
    pub v1_2: vk::DeviceFnV1_2,
    pub v1_3: vk::DeviceFnV1_3,
    pub khr_swapchain: vk::KhrSwapchainFn,
    pub ext_debug_utils: vk::ExtDebugUtilsDeviceFn,
}

impl DeviceTable {
    /// Resolves the device blocks enabled by `config`.
    ///
    /// Names are looked up with `resolver` when given, otherwise through
    /// `vkGetDeviceProcAddr` from `instance_table`. The `VK_EXT_debug_utils`
    /// device commands are loaded when `instance_table` enabled that
    /// extension.
    ///
    /// # Safety
    ///
    /// `device` must have been created from an instance owning
    /// `instance_table`, with at least `config.api_version` and every
    /// extension in `config`. `resolver` must return pointers matching the
    /// requested entry point.
    pub unsafe fn load(
        instance_table: &InstanceTable,
        device: vk::Device,
        config: &DeviceConfig,
        resolver: Option<Resolver<'_>>,
    ) -> Result<Self, Error> {
        let get_device_proc_addr = instance_table.v1_0.get_device_proc_addr;
        let mut default_resolver = |name: &CStr| get_device_proc_addr(device, name.as_ptr());
        let resolve: Resolver = match resolver {
            Some(resolver) => resolver,
            None => &mut default_resolver,
        };
        let mut loader = BlockLoader::new(resolve);

        let api_version = vk::api_version_without_patch(config.api_version);
        let debug_utils = instance_table.supports(InstanceExtension::ExtDebugUtils);
        let v1_0 = loader.block(
            "VERSION_1_0",
            true,
            vk::DeviceFnV1_0::ENTRY_POINTS,
            |resolve| unsafe { vk::DeviceFnV1_0::load(resolve) },
        );
        let v1_1 = loader.block(
            "VERSION_1_1",
            api_version >= vk::VERSION_1_1,
            vk::DeviceFnV1_1::ENTRY_POINTS,
            |resolve| unsafe { vk::DeviceFnV1_1::load(resolve) },
        );
        let v1_2 = loader.block(
            "VERSION_1_2",
            api_version >= vk::VERSION_1_2,
            vk::DeviceFnV1_2::ENTRY_POINTS,
            |resolve| unsafe { vk::DeviceFnV1_2::load(resolve) },
        );
        let v1_3 = loader.block(
            "VERSION_1_3",
            api_version >= vk::VERSION_1_3,
            vk::DeviceFnV1_3::ENTRY_POINTS,
            |resolve| unsafe { vk::DeviceFnV1_3::load(resolve) },
        );
        let khr_swapchain = loader.block(
            "VK_KHR_swapchain",
            config.is_enabled(DeviceExtension::KhrSwapchain),
            vk::KhrSwapchainFn::ENTRY_POINTS,
            |resolve| unsafe { vk::KhrSwapchainFn::load(resolve) },
        );
        let ext_debug_utils = loader.block(
            "VK_EXT_debug_utils",
            debug_utils,
            vk::ExtDebugUtilsDeviceFn::ENTRY_POINTS,
            |resolve| unsafe { vk::ExtDebugUtilsDeviceFn::load(resolve) },
        );
        loader.finish("device", config.api_version, config.strict)?;

        Ok(Self {
            api_version: config.api_version,
            extensions: config.extensions.clone(),
            debug_utils,
            v1_0,
            v1_1,
            v1_2,
            v1_3,
            khr_swapchain,
            ext_debug_utils,
        })
    }

    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    pub fn supports(&self, extension: DeviceExtension) -> bool {
        self.extensions.contains(&extension)
    }

    /// Whether the `VK_EXT_debug_utils` object naming and label commands
    /// were loaded.
    pub fn has_debug_utils(&self) -> bool {
        self.debug_utils
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_blocks_never_resolve() {
        let mut requested = Vec::new();
        let mut resolve = |name: &CStr| -> Option<vk::FnVoidFunction> {
            requested.push(name.to_owned());
            None
        };
        let mut loader = BlockLoader::new(&mut resolve);
        let _: vk::DeviceFnV1_3 = loader.block(
            "VERSION_1_3",
            false,
            vk::DeviceFnV1_3::ENTRY_POINTS,
            |resolve| unsafe { vk::DeviceFnV1_3::load(resolve) },
        );
        assert!(loader.missing.is_empty());
        assert_eq!(loader.resolved, 0);
        drop(loader);
        assert!(requested.is_empty());
    }

    #[test]
    fn strict_finish_reports_first_missing_block() {
        let mut resolve = |_: &CStr| -> Option<vk::FnVoidFunction> { None };
        let mut loader = BlockLoader::new(&mut resolve);
        let _: vk::KhrSwapchainFn = loader.block(
            "VK_KHR_swapchain",
            true,
            vk::KhrSwapchainFn::ENTRY_POINTS,
            |resolve| unsafe { vk::KhrSwapchainFn::load(resolve) },
        );
        match loader.finish("device", vk::VERSION_1_0, true) {
            Err(Error::MissingEntryPoints { block, names }) => {
                assert_eq!(block, "VK_KHR_swapchain");
                assert_eq!(names, vk::KhrSwapchainFn::ENTRY_POINTS);
            }
            _ => panic!("expected a missing entry point error"),
        }
    }

    #[test]
    fn lenient_finish_accepts_misses() {
        let mut resolve = |_: &CStr| -> Option<vk::FnVoidFunction> { None };
        let mut loader = BlockLoader::new(&mut resolve);
        let _: vk::DeviceFnV1_2 = loader.block(
            "VERSION_1_2",
            true,
            vk::DeviceFnV1_2::ENTRY_POINTS,
            |resolve| unsafe { vk::DeviceFnV1_2::load(resolve) },
        );
        assert_eq!(loader.missing[0].1.len(), vk::DeviceFnV1_2::ENTRY_POINTS.len());
        assert!(loader.finish("device", vk::VERSION_1_2, false).is_ok());
    }

    #[test]
    fn version_formatting() {
        assert_eq!(format_version(vk::make_api_version(0, 1, 3, 268)), "1.3.268");
    }
}
