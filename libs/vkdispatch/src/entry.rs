use std::{
    ffi::{CStr, c_void},
    mem::transmute,
    os::raw::c_char,
};

use tracing::debug;

use crate::{Error, enumerate::enumerate, vk};

/// The root of dispatch: `vkGetInstanceProcAddr` plus the global commands it
/// resolves without an instance.
pub struct Entry {
    get_instance_proc_addr: vk::FnGetInstanceProcAddr,
    enumerate_instance_version: Option<vk::FnEnumerateInstanceVersion>,
    table: vk::EntryFnV1_0,
}

impl Entry {
    /// # Safety
    ///
    /// `get_instance_proc_addr` must be the loader's `vkGetInstanceProcAddr`.
    pub unsafe fn new(get_instance_proc_addr: vk::FnGetInstanceProcAddr) -> Result<Self, Error> {
        let resolve = |name: &CStr| get_instance_proc_addr(vk::Instance::null(), name.as_ptr());

        // VERSION_1_1, a 1.0 loader returns null here.
        let enumerate_instance_version =
            resolve(c"vkEnumerateInstanceVersion").map(|function| unsafe {
                transmute::<vk::FnVoidFunction, vk::FnEnumerateInstanceVersion>(function)
            });

        let mut missing = None;
        let table = unsafe {
            vk::EntryFnV1_0::load(|name| {
                let function = resolve(name);
                if function.is_none() && missing.is_none() {
                    missing = vk::EntryFnV1_0::ENTRY_POINTS
                        .iter()
                        .copied()
                        .find(|entry_point| *entry_point == name);
                }
                function
            })
        };
        if let Some(name) = missing {
            return Err(Error::MissingRootEntryPoint(name));
        }

        debug!(
            has_enumerate_instance_version = enumerate_instance_version.is_some(),
            "loaded global entry points"
        );

        Ok(Self {
            get_instance_proc_addr,
            enumerate_instance_version,
            table,
        })
    }

    /// Takes `vkGetInstanceProcAddr` as returned by a dynamic symbol lookup.
    ///
    /// # Safety
    ///
    /// `get_instance_proc_addr` must be null or point at the loader's
    /// `vkGetInstanceProcAddr`.
    pub unsafe fn from_raw(get_instance_proc_addr: *const c_void) -> Result<Self, Error> {
        if get_instance_proc_addr.is_null() {
            return Err(Error::MissingRootEntryPoint(c"vkGetInstanceProcAddr"));
        }
        unsafe {
            Self::new(transmute::<*const c_void, vk::FnGetInstanceProcAddr>(
                get_instance_proc_addr,
            ))
        }
    }

    pub fn table(&self) -> &vk::EntryFnV1_0 {
        &self.table
    }

    #[inline]
    pub unsafe fn get_instance_proc_addr(
        &self,
        instance: vk::Instance,
        name: &CStr,
    ) -> Option<vk::FnVoidFunction> {
        (self.get_instance_proc_addr)(instance, name.as_ptr())
    }

    /// Reports `VERSION_1_0` without calling the loader when it predates
    /// `vkEnumerateInstanceVersion`.
    #[inline]
    pub fn enumerate_instance_version(&self, api_version: &mut u32) -> vk::Result {
        if let Some(enumerate_instance_version) = self.enumerate_instance_version {
            enumerate_instance_version(api_version)
        } else {
            *api_version = vk::VERSION_1_0;
            vk::Result::SUCCESS
        }
    }

    #[inline]
    pub unsafe fn enumerate_instance_extension_properties(
        &self,
        layer_name: *const c_char,
        property_count: &mut u32,
        properties: *mut vk::ExtensionProperties,
    ) -> vk::Result {
        (self.table.enumerate_instance_extension_properties)(layer_name, property_count, properties)
    }

    #[inline]
    pub unsafe fn enumerate_instance_layer_properties(
        &self,
        property_count: &mut u32,
        properties: *mut vk::LayerProperties,
    ) -> vk::Result {
        (self.table.enumerate_instance_layer_properties)(property_count, properties)
    }

    /// Collects the instance extensions provided by the implementation, or by
    /// `layer_name` when given.
    pub fn instance_extension_properties(
        &self,
        layer_name: Option<&CStr>,
    ) -> Result<Vec<vk::ExtensionProperties>, vk::Result> {
        let layer_name = layer_name.map_or(std::ptr::null(), CStr::as_ptr);
        enumerate(|count, properties| unsafe {
            self.enumerate_instance_extension_properties(layer_name, count, properties)
        })
    }

    pub fn instance_layer_properties(&self) -> Result<Vec<vk::LayerProperties>, vk::Result> {
        enumerate(|count, properties| unsafe {
            self.enumerate_instance_layer_properties(count, properties)
        })
    }

    #[inline]
    pub unsafe fn create_instance(
        &self,
        create_info: &vk::InstanceCreateInfo,
        allocator: Option<&vk::AllocationCallbacks>,
        instance: &mut vk::Instance,
    ) -> vk::Result {
        (self.table.create_instance)(create_info, allocator, instance)
    }
}
