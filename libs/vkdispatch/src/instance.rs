use std::{ffi::CStr, os::raw::c_char};

use crate::{enumerate::enumerate, table::InstanceTable, vk};

/// A `VkInstance` bound to its dispatch table.
///
/// Calls taking an allocator come in two forms. The short form passes the
/// allocator given at construction, the `_with_allocator` form passes the
/// one supplied by the caller.
#[derive(Clone, Copy)]
pub struct Instance<'a> {
    handle: vk::Instance,
    table: &'a InstanceTable,
    allocator: Option<&'a vk::AllocationCallbacks>,
}

impl std::fmt::Debug for Instance<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instance")
            .field("handle", &self.handle)
            .field("allocator", &self.allocator.is_some())
            .finish_non_exhaustive()
    }
}

impl<'a> Instance<'a> {
    pub fn new(handle: vk::Instance, table: &'a InstanceTable) -> Self {
        Self::with_allocator(handle, table, None)
    }

    pub fn with_allocator(
        handle: vk::Instance,
        table: &'a InstanceTable,
        allocator: Option<&'a vk::AllocationCallbacks>,
    ) -> Self {
        Self {
            handle,
            table,
            allocator,
        }
    }

    pub fn handle(&self) -> vk::Instance {
        self.handle
    }

    pub fn table(&self) -> &'a InstanceTable {
        self.table
    }

    pub fn allocator(&self) -> Option<&'a vk::AllocationCallbacks> {
        self.allocator
    }

    #[inline]
    pub unsafe fn destroy_instance(&self) {
        unsafe { self.destroy_instance_with_allocator(self.allocator) }
    }

    #[inline]
    pub unsafe fn destroy_instance_with_allocator(
        &self,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_0.destroy_instance)(self.handle, allocator)
    }

    #[inline]
    pub unsafe fn enumerate_physical_devices(
        &self,
        physical_device_count: &mut u32,
        physical_devices: *mut vk::PhysicalDevice,
    ) -> vk::Result {
        (self.table.v1_0.enumerate_physical_devices)(
            self.handle,
            physical_device_count,
            physical_devices,
        )
    }

    pub unsafe fn physical_devices(&self) -> Result<Vec<vk::PhysicalDevice>, vk::Result> {
        enumerate(|count, physical_devices| unsafe {
            self.enumerate_physical_devices(count, physical_devices)
        })
    }

    #[inline]
    pub unsafe fn get_physical_device_features(
        &self,
        physical_device: vk::PhysicalDevice,
        features: *mut vk::PhysicalDeviceFeatures,
    ) {
        (self.table.v1_0.get_physical_device_features)(physical_device, features)
    }

    #[inline]
    pub unsafe fn get_physical_device_format_properties(
        &self,
        physical_device: vk::PhysicalDevice,
        format: vk::Format,
        format_properties: &mut vk::FormatProperties,
    ) {
        (self.table.v1_0.get_physical_device_format_properties)(
            physical_device,
            format,
            format_properties,
        )
    }

    #[inline]
    pub unsafe fn get_physical_device_image_format_properties(
        &self,
        physical_device: vk::PhysicalDevice,
        format: vk::Format,
        image_type: vk::ImageType,
        tiling: vk::ImageTiling,
        usage: vk::ImageUsageFlags,
        flags: vk::ImageCreateFlags,
        image_format_properties: &mut vk::ImageFormatProperties,
    ) -> vk::Result {
        (self.table.v1_0.get_physical_device_image_format_properties)(
            physical_device,
            format,
            image_type,
            tiling,
            usage,
            flags,
            image_format_properties,
        )
    }

    #[inline]
    pub unsafe fn get_physical_device_properties(
        &self,
        physical_device: vk::PhysicalDevice,
        properties: *mut vk::PhysicalDeviceProperties,
    ) {
        (self.table.v1_0.get_physical_device_properties)(physical_device, properties)
    }

    #[inline]
    pub unsafe fn get_physical_device_queue_family_properties(
        &self,
        physical_device: vk::PhysicalDevice,
        queue_family_property_count: &mut u32,
        queue_family_properties: *mut vk::QueueFamilyProperties,
    ) {
        (self.table.v1_0.get_physical_device_queue_family_properties)(
            physical_device,
            queue_family_property_count,
            queue_family_properties,
        )
    }

    #[inline]
    pub unsafe fn get_physical_device_memory_properties(
        &self,
        physical_device: vk::PhysicalDevice,
        memory_properties: *mut vk::PhysicalDeviceMemoryProperties,
    ) {
        (self.table.v1_0.get_physical_device_memory_properties)(physical_device, memory_properties)
    }

    #[inline]
    pub unsafe fn get_device_proc_addr(
        &self,
        device: vk::Device,
        name: &CStr,
    ) -> Option<vk::FnVoidFunction> {
        (self.table.v1_0.get_device_proc_addr)(device, name.as_ptr())
    }

    #[inline]
    pub unsafe fn create_device(
        &self,
        physical_device: vk::PhysicalDevice,
        create_info: &vk::DeviceCreateInfo,
        device: &mut vk::Device,
    ) -> vk::Result {
        unsafe {
            self.create_device_with_allocator(physical_device, create_info, self.allocator, device)
        }
    }

    #[inline]
    pub unsafe fn create_device_with_allocator(
        &self,
        physical_device: vk::PhysicalDevice,
        create_info: &vk::DeviceCreateInfo,
        allocator: Option<&vk::AllocationCallbacks>,
        device: &mut vk::Device,
    ) -> vk::Result {
        (self.table.v1_0.create_device)(physical_device, create_info, allocator, device)
    }

    #[inline]
    pub unsafe fn enumerate_device_extension_properties(
        &self,
        physical_device: vk::PhysicalDevice,
        layer_name: *const c_char,
        property_count: &mut u32,
        properties: *mut vk::ExtensionProperties,
    ) -> vk::Result {
        (self.table.v1_0.enumerate_device_extension_properties)(
            physical_device,
            layer_name,
            property_count,
            properties,
        )
    }

    #[inline]
    pub unsafe fn enumerate_device_layer_properties(
        &self,
        physical_device: vk::PhysicalDevice,
        property_count: &mut u32,
        properties: *mut vk::LayerProperties,
    ) -> vk::Result {
        (self.table.v1_0.enumerate_device_layer_properties)(
            physical_device,
            property_count,
            properties,
        )
    }

    pub unsafe fn device_extension_properties(
        &self,
        physical_device: vk::PhysicalDevice,
    ) -> Result<Vec<vk::ExtensionProperties>, vk::Result> {
        enumerate(|count, properties| unsafe {
            self.enumerate_device_extension_properties(
                physical_device,
                std::ptr::null(),
                count,
                properties,
            )
        })
    }

    #[inline]
    pub unsafe fn get_physical_device_sparse_image_format_properties(
        &self,
        physical_device: vk::PhysicalDevice,
        format: vk::Format,
        image_type: vk::ImageType,
        samples: vk::SampleCountFlags,
        usage: vk::ImageUsageFlags,
        tiling: vk::ImageTiling,
        property_count: &mut u32,
        properties: *mut vk::SparseImageFormatProperties,
    ) {
        (self.table.v1_0.get_physical_device_sparse_image_format_properties)(
            physical_device,
            format,
            image_type,
            samples,
            usage,
            tiling,
            property_count,
            properties,
        )
    }

    // VERSION_1_1

    #[inline]
    pub unsafe fn get_physical_device_features2(
        &self,
        physical_device: vk::PhysicalDevice,
        features: *mut vk::PhysicalDeviceFeatures2,
    ) {
        (self.table.v1_1.get_physical_device_features2)(physical_device, features)
    }

    #[inline]
    pub unsafe fn get_physical_device_properties2(
        &self,
        physical_device: vk::PhysicalDevice,
        properties: *mut vk::PhysicalDeviceProperties2,
    ) {
        (self.table.v1_1.get_physical_device_properties2)(physical_device, properties)
    }

    #[inline]
    pub unsafe fn enumerate_physical_device_groups(
        &self,
        physical_device_group_count: &mut u32,
        physical_device_group_properties: *mut vk::PhysicalDeviceGroupProperties,
    ) -> vk::Result {
        (self.table.v1_1.enumerate_physical_device_groups)(
            self.handle,
            physical_device_group_count,
            physical_device_group_properties,
        )
    }

    #[inline]
    pub unsafe fn get_physical_device_format_properties2(
        &self,
        physical_device: vk::PhysicalDevice,
        format: vk::Format,
        format_properties: &mut vk::FormatProperties2,
    ) {
        (self.table.v1_1.get_physical_device_format_properties2)(
            physical_device,
            format,
            format_properties,
        )
    }

    #[inline]
    pub unsafe fn get_physical_device_image_format_properties2(
        &self,
        physical_device: vk::PhysicalDevice,
        image_format_info: &vk::PhysicalDeviceImageFormatInfo2,
        image_format_properties: &mut vk::ImageFormatProperties2,
    ) -> vk::Result {
        (self.table.v1_1.get_physical_device_image_format_properties2)(
            physical_device,
            image_format_info,
            image_format_properties,
        )
    }

    #[inline]
    pub unsafe fn get_physical_device_queue_family_properties2(
        &self,
        physical_device: vk::PhysicalDevice,
        queue_family_property_count: &mut u32,
        queue_family_properties: *mut vk::QueueFamilyProperties2,
    ) {
        (self.table.v1_1.get_physical_device_queue_family_properties2)(
            physical_device,
            queue_family_property_count,
            queue_family_properties,
        )
    }

    #[inline]
    pub unsafe fn get_physical_device_memory_properties2(
        &self,
        physical_device: vk::PhysicalDevice,
        memory_properties: *mut vk::PhysicalDeviceMemoryProperties2,
    ) {
        (self.table.v1_1.get_physical_device_memory_properties2)(physical_device, memory_properties)
    }

    #[inline]
    pub unsafe fn get_physical_device_sparse_image_format_properties2(
        &self,
        physical_device: vk::PhysicalDevice,
        format_info: &vk::PhysicalDeviceSparseImageFormatInfo2,
        property_count: &mut u32,
        properties: *mut vk::SparseImageFormatProperties2,
    ) {
        (self.table.v1_1.get_physical_device_sparse_image_format_properties2)(
            physical_device,
            format_info,
            property_count,
            properties,
        )
    }

    #[inline]
    pub unsafe fn get_physical_device_external_buffer_properties(
        &self,
        physical_device: vk::PhysicalDevice,
        external_buffer_info: &vk::PhysicalDeviceExternalBufferInfo,
        external_buffer_properties: &mut vk::ExternalBufferProperties,
    ) {
        (self.table.v1_1.get_physical_device_external_buffer_properties)(
            physical_device,
            external_buffer_info,
            external_buffer_properties,
        )
    }

    #[inline]
    pub unsafe fn get_physical_device_external_fence_properties(
        &self,
        physical_device: vk::PhysicalDevice,
        external_fence_info: &vk::PhysicalDeviceExternalFenceInfo,
        external_fence_properties: &mut vk::ExternalFenceProperties,
    ) {
        (self.table.v1_1.get_physical_device_external_fence_properties)(
            physical_device,
            external_fence_info,
            external_fence_properties,
        )
    }

    #[inline]
    pub unsafe fn get_physical_device_external_semaphore_properties(
        &self,
        physical_device: vk::PhysicalDevice,
        external_semaphore_info: &vk::PhysicalDeviceExternalSemaphoreInfo,
        external_semaphore_properties: &mut vk::ExternalSemaphoreProperties,
    ) {
        (self.table.v1_1.get_physical_device_external_semaphore_properties)(
            physical_device,
            external_semaphore_info,
            external_semaphore_properties,
        )
    }

    // VERSION_1_3

    #[inline]
    pub unsafe fn get_physical_device_tool_properties(
        &self,
        physical_device: vk::PhysicalDevice,
        tool_count: &mut u32,
        tool_properties: *mut vk::PhysicalDeviceToolProperties,
    ) -> vk::Result {
        (self.table.v1_3.get_physical_device_tool_properties)(
            physical_device,
            tool_count,
            tool_properties,
        )
    }

    // VK_KHR_surface

    #[inline]
    pub unsafe fn destroy_surface_khr(&self, surface: vk::SurfaceKHR) {
        unsafe { self.destroy_surface_khr_with_allocator(surface, self.allocator) }
    }

    #[inline]
    pub unsafe fn destroy_surface_khr_with_allocator(
        &self,
        surface: vk::SurfaceKHR,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.khr_surface.destroy_surface_khr)(self.handle, surface, allocator)
    }

    #[inline]
    pub unsafe fn get_physical_device_surface_support_khr(
        &self,
        physical_device: vk::PhysicalDevice,
        queue_family_index: u32,
        surface: vk::SurfaceKHR,
        supported: &mut vk::Bool32,
    ) -> vk::Result {
        (self.table.khr_surface.get_physical_device_surface_support_khr)(
            physical_device,
            queue_family_index,
            surface,
            supported,
        )
    }

    #[inline]
    pub unsafe fn get_physical_device_surface_capabilities_khr(
        &self,
        physical_device: vk::PhysicalDevice,
        surface: vk::SurfaceKHR,
        surface_capabilities: &mut vk::SurfaceCapabilitiesKHR,
    ) -> vk::Result {
        (self.table.khr_surface.get_physical_device_surface_capabilities_khr)(
            physical_device,
            surface,
            surface_capabilities,
        )
    }

    #[inline]
    pub unsafe fn get_physical_device_surface_formats_khr(
        &self,
        physical_device: vk::PhysicalDevice,
        surface: vk::SurfaceKHR,
        surface_format_count: &mut u32,
        surface_formats: *mut vk::SurfaceFormatKHR,
    ) -> vk::Result {
        (self.table.khr_surface.get_physical_device_surface_formats_khr)(
            physical_device,
            surface,
            surface_format_count,
            surface_formats,
        )
    }

    #[inline]
    pub unsafe fn get_physical_device_surface_present_modes_khr(
        &self,
        physical_device: vk::PhysicalDevice,
        surface: vk::SurfaceKHR,
        present_mode_count: &mut u32,
        present_modes: *mut vk::PresentModeKHR,
    ) -> vk::Result {
        (self.table.khr_surface.get_physical_device_surface_present_modes_khr)(
            physical_device,
            surface,
            present_mode_count,
            present_modes,
        )
    }

    // VK_EXT_debug_utils

    #[inline]
    pub unsafe fn create_debug_utils_messenger_ext(
        &self,
        create_info: &vk::DebugUtilsMessengerCreateInfoEXT,
        messenger: &mut vk::DebugUtilsMessengerEXT,
    ) -> vk::Result {
        unsafe {
            self.create_debug_utils_messenger_ext_with_allocator(
                create_info,
                self.allocator,
                messenger,
            )
        }
    }

    #[inline]
    pub unsafe fn create_debug_utils_messenger_ext_with_allocator(
        &self,
        create_info: &vk::DebugUtilsMessengerCreateInfoEXT,
        allocator: Option<&vk::AllocationCallbacks>,
        messenger: &mut vk::DebugUtilsMessengerEXT,
    ) -> vk::Result {
        (self.table.ext_debug_utils.create_debug_utils_messenger_ext)(
            self.handle,
            create_info,
            allocator,
            messenger,
        )
    }

    #[inline]
    pub unsafe fn destroy_debug_utils_messenger_ext(&self, messenger: vk::DebugUtilsMessengerEXT) {
        unsafe { self.destroy_debug_utils_messenger_ext_with_allocator(messenger, self.allocator) }
    }

    #[inline]
    pub unsafe fn destroy_debug_utils_messenger_ext_with_allocator(
        &self,
        messenger: vk::DebugUtilsMessengerEXT,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.ext_debug_utils.destroy_debug_utils_messenger_ext)(
            self.handle,
            messenger,
            allocator,
        )
    }

    #[inline]
    pub unsafe fn submit_debug_utils_message_ext(
        &self,
        message_severity: vk::DebugUtilsMessageSeverityFlagsEXT,
        message_types: vk::DebugUtilsMessageTypeFlagsEXT,
        callback_data: &vk::DebugUtilsMessengerCallbackDataEXT,
    ) {
        (self.table.ext_debug_utils.submit_debug_utils_message_ext)(
            self.handle,
            message_severity,
            message_types,
            callback_data,
        )
    }
}
