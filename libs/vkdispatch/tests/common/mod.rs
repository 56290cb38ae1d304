//! A fake driver made of `extern "system"` functions. Each records the
//! arguments it receives in thread local storage so tests can check what
//! the wrappers forwarded.

#![allow(dead_code)]

use std::{
    cell::{Cell, RefCell},
    ffi::CStr,
    mem::transmute,
    os::raw::c_char,
};

use vkdispatch::{DeviceConfig, DeviceTable, Entry, InstanceConfig, InstanceTable, vk};

pub const INSTANCE: usize = 0x1000;
pub const DEVICE: usize = 0x2000;
pub const FENCE: u64 = 0xfe;
pub const SWAPCHAIN: u64 = 0x5c;
pub const PIPELINE: u64 = 0x91;
pub const RENDER_PASS: u64 = 0x7a;
pub const FRAMEBUFFER: u64 = 0xfb;
pub const INSTANCE_VERSION: u32 = vk::make_api_version(0, 1, 3, 275);
pub const PHYSICAL_DEVICES: [usize; 2] = [0x10, 0x11];
pub const SWAPCHAIN_IMAGES: [u64; 3] = [0x100, 0x101, 0x102];

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Call {
    pub name: &'static str,
    pub args: Vec<u64>,
}

thread_local! {
    static CALLS: RefCell<Vec<Call>> = const { RefCell::new(Vec::new()) };
    static LOOKUPS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    static HIDDEN: RefCell<Vec<&'static CStr>> = const { RefCell::new(Vec::new()) };
    static LEGACY_LOADER: Cell<bool> = const { Cell::new(false) };
}

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Drains the calls recorded on this thread.
pub fn take_calls() -> Vec<Call> {
    CALLS.with_borrow_mut(std::mem::take)
}

/// Drains the names looked up on this thread, as `"instance:vkName"` or
/// `"device:vkName"`.
pub fn take_lookups() -> Vec<String> {
    LOOKUPS.with_borrow_mut(std::mem::take)
}

/// Makes the fake driver answer null for `name`.
pub fn hide(name: &'static CStr) {
    HIDDEN.with_borrow_mut(|hidden| hidden.push(name));
}

/// Pretends to be a 1.0 loader without `vkEnumerateInstanceVersion`.
pub fn set_legacy_loader(legacy: bool) {
    LEGACY_LOADER.set(legacy);
}

pub fn entry() -> Entry {
    init_logging();
    let entry = unsafe { Entry::new(get_instance_proc_addr) }.unwrap();
    take_lookups();
    entry
}

pub fn instance_table(entry: &Entry, config: &InstanceConfig) -> InstanceTable {
    let table =
        unsafe { InstanceTable::load(entry, vk::Instance::from_raw(INSTANCE), config, None) }
            .unwrap();
    take_lookups();
    table
}

pub fn device_table(instance_table: &InstanceTable, config: &DeviceConfig) -> DeviceTable {
    let table = unsafe {
        DeviceTable::load(instance_table, vk::Device::from_raw(DEVICE), config, None)
    }
    .unwrap();
    take_lookups();
    table
}

pub fn address<T>(value: Option<&T>) -> u64 {
    value.map_or(0, |value| value as *const T as usize as u64)
}

fn pointer<T>(value: *const T) -> u64 {
    value as usize as u64
}

fn record(name: &'static str, args: &[u64]) {
    CALLS.with_borrow_mut(|calls| {
        calls.push(Call {
            name,
            args: args.to_vec(),
        })
    });
}

fn fill<T: Copy>(items: &[T], count: &mut u32, out: *mut T) -> vk::Result {
    if out.is_null() {
        *count = items.len() as u32;
        return vk::Result::SUCCESS;
    }
    let written = (*count as usize).min(items.len());
    unsafe { std::ptr::copy_nonoverlapping(items.as_ptr(), out, written) };
    *count = written as u32;
    if written < items.len() {
        vk::Result::INCOMPLETE
    } else {
        vk::Result::SUCCESS
    }
}

fn lookup(via: &str, name: &CStr) -> Option<vk::FnVoidFunction> {
    LOOKUPS.with_borrow_mut(|lookups| lookups.push(format!("{via}:{}", name.to_string_lossy())));

    if HIDDEN.with_borrow(|hidden| hidden.iter().any(|hidden| *hidden == name)) {
        return None;
    }

    let function = match name.to_bytes() {
        b"vkEnumerateInstanceVersion" if LEGACY_LOADER.get() => return None,
        b"vkEnumerateInstanceVersion" => enumerate_instance_version as *const (),
        b"vkCreateInstance" => create_instance as *const (),
        b"vkEnumerateInstanceExtensionProperties" => {
            enumerate_instance_extension_properties as *const ()
        }
        b"vkEnumerateInstanceLayerProperties" => enumerate_instance_layer_properties as *const (),
        b"vkDestroyInstance" => destroy_instance as *const (),
        b"vkEnumeratePhysicalDevices" => enumerate_physical_devices as *const (),
        b"vkGetPhysicalDeviceFeatures" => get_physical_device_features as *const (),
        b"vkGetPhysicalDeviceFormatProperties" => {
            get_physical_device_format_properties as *const ()
        }
        b"vkGetPhysicalDeviceImageFormatProperties" => {
            get_physical_device_image_format_properties as *const ()
        }
        b"vkGetPhysicalDeviceProperties" => get_physical_device_properties as *const (),
        b"vkGetPhysicalDeviceQueueFamilyProperties" => {
            get_physical_device_queue_family_properties as *const ()
        }
        b"vkGetPhysicalDeviceMemoryProperties" => {
            get_physical_device_memory_properties as *const ()
        }
        b"vkGetDeviceProcAddr" => get_device_proc_addr as *const (),
        b"vkEnumerateDeviceExtensionProperties" => {
            enumerate_device_extension_properties as *const ()
        }
        b"vkEnumerateDeviceLayerProperties" => enumerate_device_layer_properties as *const (),
        b"vkGetPhysicalDeviceSparseImageFormatProperties" => {
            get_physical_device_sparse_image_format_properties as *const ()
        }
        b"vkGetPhysicalDeviceToolProperties" => get_physical_device_tool_properties as *const (),
        b"vkCreateDevice" => create_device as *const (),
        b"vkDestroySurfaceKHR" => destroy_surface_khr as *const (),
        b"vkDestroyDevice" => destroy_device as *const (),
        b"vkCreateFence" => create_fence as *const (),
        b"vkDestroyFence" => destroy_fence as *const (),
        b"vkQueueSubmit" => queue_submit as *const (),
        b"vkQueueBindSparse" => queue_bind_sparse as *const (),
        b"vkDestroyDescriptorSetLayout" => destroy_descriptor_set_layout as *const (),
        b"vkCreateGraphicsPipelines" => create_graphics_pipelines as *const (),
        b"vkCreateRenderPass" => create_render_pass as *const (),
        b"vkDestroyRenderPass" => destroy_render_pass as *const (),
        b"vkCreateFramebuffer" => create_framebuffer as *const (),
        b"vkDestroyFramebuffer" => destroy_framebuffer as *const (),
        b"vkWaitForFences" => wait_for_fences as *const (),
        b"vkBeginCommandBuffer" => begin_command_buffer as *const (),
        b"vkCmdDraw" => cmd_draw as *const (),
        b"vkCmdSetViewport" => cmd_set_viewport as *const (),
        b"vkCmdBindDescriptorSets" => cmd_bind_descriptor_sets as *const (),
        b"vkCmdSetLineWidth" => cmd_set_line_width as *const (),
        b"vkCmdSetBlendConstants" => cmd_set_blend_constants as *const (),
        b"vkCmdBlitImage" => cmd_blit_image as *const (),
        b"vkCmdClearAttachments" => cmd_clear_attachments as *const (),
        b"vkCmdBeginRenderPass" => cmd_begin_render_pass as *const (),
        b"vkCmdNextSubpass" => cmd_next_subpass as *const (),
        b"vkCmdEndRenderPass" => cmd_end_render_pass as *const (),
        b"vkCmdBeginRenderPass2" => cmd_begin_render_pass2 as *const (),
        b"vkCmdSetCullMode" => cmd_set_cull_mode as *const (),
        b"vkCmdBindVertexBuffers2" => cmd_bind_vertex_buffers2 as *const (),
        b"vkCmdBlitImage2" => cmd_blit_image2 as *const (),
        b"vkCmdPipelineBarrier2" => cmd_pipeline_barrier2 as *const (),
        b"vkGetBufferDeviceAddress" => get_buffer_device_address as *const (),
        b"vkCreateSwapchainKHR" => create_swapchain_khr as *const (),
        b"vkGetSwapchainImagesKHR" => get_swapchain_images_khr as *const (),
        b"vkSetDebugUtilsObjectNameEXT" => set_debug_utils_object_name_ext as *const (),
        b"vkSetDebugUtilsObjectTagEXT" => set_debug_utils_object_tag_ext as *const (),
        b"vkQueueBeginDebugUtilsLabelEXT" => queue_begin_debug_utils_label_ext as *const (),
        b"vkQueueEndDebugUtilsLabelEXT" => queue_end_debug_utils_label_ext as *const (),
        b"vkQueueInsertDebugUtilsLabelEXT" => queue_insert_debug_utils_label_ext as *const (),
        b"vkCmdBeginDebugUtilsLabelEXT" => cmd_begin_debug_utils_label_ext as *const (),
        _ => return None,
    };

    Some(unsafe { transmute::<*const (), vk::FnVoidFunction>(function) })
}

pub extern "system" fn get_instance_proc_addr(
    _instance: vk::Instance,
    name: *const c_char,
) -> Option<vk::FnVoidFunction> {
    lookup("instance", unsafe { CStr::from_ptr(name) })
}

extern "system" fn get_device_proc_addr(
    _device: vk::Device,
    name: *const c_char,
) -> Option<vk::FnVoidFunction> {
    lookup("device", unsafe { CStr::from_ptr(name) })
}

extern "system" fn enumerate_instance_version(api_version: &mut u32) -> vk::Result {
    *api_version = INSTANCE_VERSION;
    vk::Result::SUCCESS
}

extern "system" fn create_instance(
    create_info: &vk::InstanceCreateInfo,
    allocator: Option<&vk::AllocationCallbacks>,
    instance: &mut vk::Instance,
) -> vk::Result {
    record(
        "vkCreateInstance",
        &[create_info.enabled_extension_count as u64, address(allocator)],
    );
    *instance = vk::Instance::from_raw(INSTANCE);
    vk::Result::SUCCESS
}

fn extension_properties(name: &CStr) -> vk::ExtensionProperties {
    let mut properties = vk::ExtensionProperties::default();
    for (dst, src) in properties
        .extension_name
        .iter_mut()
        .zip(name.to_bytes_with_nul())
    {
        *dst = *src as c_char;
    }
    properties.spec_version = 1;
    properties
}

extern "system" fn enumerate_instance_extension_properties(
    layer_name: *const c_char,
    property_count: &mut u32,
    properties: *mut vk::ExtensionProperties,
) -> vk::Result {
    record(
        "vkEnumerateInstanceExtensionProperties",
        &[pointer(layer_name)],
    );
    let available = [
        extension_properties(c"VK_KHR_surface"),
        extension_properties(c"VK_EXT_debug_utils"),
    ];
    fill(&available, property_count, properties)
}

extern "system" fn enumerate_instance_layer_properties(
    property_count: &mut u32,
    properties: *mut vk::LayerProperties,
) -> vk::Result {
    fill(&[], property_count, properties)
}

extern "system" fn destroy_instance(
    instance: vk::Instance,
    allocator: Option<&vk::AllocationCallbacks>,
) {
    record(
        "vkDestroyInstance",
        &[instance.as_raw() as u64, address(allocator)],
    );
}

extern "system" fn enumerate_physical_devices(
    _instance: vk::Instance,
    physical_device_count: &mut u32,
    physical_devices: *mut vk::PhysicalDevice,
) -> vk::Result {
    let available = PHYSICAL_DEVICES.map(vk::PhysicalDevice::from_raw);
    fill(&available, physical_device_count, physical_devices)
}

extern "system" fn get_physical_device_features(
    physical_device: vk::PhysicalDevice,
    features: *mut vk::PhysicalDeviceFeatures,
) {
    record(
        "vkGetPhysicalDeviceFeatures",
        &[physical_device.as_raw() as u64, pointer(features)],
    );
}

extern "system" fn get_physical_device_format_properties(
    physical_device: vk::PhysicalDevice,
    format: vk::Format,
    format_properties: &mut vk::FormatProperties,
) {
    record(
        "vkGetPhysicalDeviceFormatProperties",
        &[physical_device.as_raw() as u64, format.as_raw() as u64],
    );
    *format_properties = vk::FormatProperties::default();
}

extern "system" fn get_physical_device_image_format_properties(
    physical_device: vk::PhysicalDevice,
    format: vk::Format,
    image_type: vk::ImageType,
    tiling: vk::ImageTiling,
    usage: vk::ImageUsageFlags,
    flags: vk::ImageCreateFlags,
    image_format_properties: &mut vk::ImageFormatProperties,
) -> vk::Result {
    record(
        "vkGetPhysicalDeviceImageFormatProperties",
        &[
            physical_device.as_raw() as u64,
            format.as_raw() as u64,
            image_type.as_raw() as u64,
            tiling.as_raw() as u64,
            usage.as_raw() as u64,
            flags.as_raw() as u64,
        ],
    );
    if tiling == vk::ImageTiling::LINEAR {
        return vk::Result::ERROR_FORMAT_NOT_SUPPORTED;
    }
    *image_format_properties = vk::ImageFormatProperties {
        max_extent: vk::Extent3d {
            width: 16384,
            height: 16384,
            depth: 1,
        },
        max_mip_levels: 15,
        max_array_layers: 2048,
        sample_counts: vk::SampleCountFlags::SAMPLE_COUNT_1,
        max_resource_size: 1 << 31,
    };
    vk::Result::SUCCESS
}

extern "system" fn get_physical_device_sparse_image_format_properties(
    _physical_device: vk::PhysicalDevice,
    _format: vk::Format,
    _image_type: vk::ImageType,
    _samples: vk::SampleCountFlags,
    _usage: vk::ImageUsageFlags,
    _tiling: vk::ImageTiling,
    property_count: &mut u32,
    properties: *mut vk::SparseImageFormatProperties,
) {
    let available = [vk::SparseImageFormatProperties {
        aspect_mask: vk::ImageAspectFlags::COLOR,
        image_granularity: vk::Extent3d {
            width: 128,
            height: 128,
            depth: 1,
        },
        flags: vk::SparseImageFormatFlags::SINGLE_MIPTAIL,
    }];
    let _ = fill(&available, property_count, properties);
}

extern "system" fn get_physical_device_tool_properties(
    physical_device: vk::PhysicalDevice,
    tool_count: &mut u32,
    tool_properties: *mut vk::PhysicalDeviceToolProperties,
) -> vk::Result {
    record(
        "vkGetPhysicalDeviceToolProperties",
        &[physical_device.as_raw() as u64, pointer(tool_properties)],
    );
    let mut validation = vk::PhysicalDeviceToolProperties {
        purposes: vk::ToolPurposeFlags::VALIDATION,
        ..Default::default()
    };
    for (dst, src) in validation
        .name
        .iter_mut()
        .zip(c"validation".to_bytes_with_nul())
    {
        *dst = *src as c_char;
    }
    fill(&[validation], tool_count, tool_properties)
}

extern "system" fn get_physical_device_properties(
    physical_device: vk::PhysicalDevice,
    properties: *mut vk::PhysicalDeviceProperties,
) {
    record(
        "vkGetPhysicalDeviceProperties",
        &[physical_device.as_raw() as u64],
    );
    unsafe { (*properties).api_version = INSTANCE_VERSION };
}

extern "system" fn get_physical_device_queue_family_properties(
    _physical_device: vk::PhysicalDevice,
    queue_family_property_count: &mut u32,
    queue_family_properties: *mut vk::QueueFamilyProperties,
) {
    let available = [vk::QueueFamilyProperties::default(); 2];
    let _ = fill(&available, queue_family_property_count, queue_family_properties);
}

extern "system" fn get_physical_device_memory_properties(
    physical_device: vk::PhysicalDevice,
    memory_properties: *mut vk::PhysicalDeviceMemoryProperties,
) {
    record(
        "vkGetPhysicalDeviceMemoryProperties",
        &[physical_device.as_raw() as u64, pointer(memory_properties)],
    );
}

extern "system" fn enumerate_device_extension_properties(
    physical_device: vk::PhysicalDevice,
    layer_name: *const c_char,
    property_count: &mut u32,
    properties: *mut vk::ExtensionProperties,
) -> vk::Result {
    record(
        "vkEnumerateDeviceExtensionProperties",
        &[physical_device.as_raw() as u64, pointer(layer_name)],
    );
    fill(
        &[extension_properties(c"VK_KHR_swapchain")],
        property_count,
        properties,
    )
}

extern "system" fn enumerate_device_layer_properties(
    _physical_device: vk::PhysicalDevice,
    property_count: &mut u32,
    properties: *mut vk::LayerProperties,
) -> vk::Result {
    fill(&[], property_count, properties)
}

extern "system" fn create_device(
    physical_device: vk::PhysicalDevice,
    create_info: &vk::DeviceCreateInfo,
    allocator: Option<&vk::AllocationCallbacks>,
    device: &mut vk::Device,
) -> vk::Result {
    record(
        "vkCreateDevice",
        &[
            physical_device.as_raw() as u64,
            create_info.enabled_extension_count as u64,
            address(allocator),
        ],
    );
    *device = vk::Device::from_raw(DEVICE);
    vk::Result::SUCCESS
}

extern "system" fn destroy_surface_khr(
    instance: vk::Instance,
    surface: vk::SurfaceKHR,
    allocator: Option<&vk::AllocationCallbacks>,
) {
    record(
        "vkDestroySurfaceKHR",
        &[instance.as_raw() as u64, surface.as_raw(), address(allocator)],
    );
}

extern "system" fn destroy_device(device: vk::Device, allocator: Option<&vk::AllocationCallbacks>) {
    record(
        "vkDestroyDevice",
        &[device.as_raw() as u64, address(allocator)],
    );
}

extern "system" fn create_fence(
    device: vk::Device,
    create_info: &vk::FenceCreateInfo,
    allocator: Option<&vk::AllocationCallbacks>,
    fence: &mut vk::Fence,
) -> vk::Result {
    record(
        "vkCreateFence",
        &[
            device.as_raw() as u64,
            create_info.flags.as_raw() as u64,
            address(allocator),
        ],
    );
    *fence = vk::Fence::from_raw(FENCE);
    vk::Result::SUCCESS
}

extern "system" fn destroy_fence(
    device: vk::Device,
    fence: vk::Fence,
    allocator: Option<&vk::AllocationCallbacks>,
) {
    record(
        "vkDestroyFence",
        &[device.as_raw() as u64, fence.as_raw(), address(allocator)],
    );
}

extern "system" fn queue_submit(
    queue: vk::Queue,
    submit_count: u32,
    submits: *const vk::SubmitInfo,
    fence: vk::Fence,
) -> vk::Result {
    record(
        "vkQueueSubmit",
        &[
            queue.as_raw() as u64,
            submit_count as u64,
            pointer(submits),
            fence.as_raw(),
        ],
    );
    vk::Result::SUCCESS
}

extern "system" fn queue_bind_sparse(
    queue: vk::Queue,
    bind_info_count: u32,
    bind_info: *const vk::BindSparseInfo,
    fence: vk::Fence,
) -> vk::Result {
    record(
        "vkQueueBindSparse",
        &[
            queue.as_raw() as u64,
            bind_info_count as u64,
            pointer(bind_info),
            fence.as_raw(),
        ],
    );
    vk::Result::SUCCESS
}

extern "system" fn destroy_descriptor_set_layout(
    device: vk::Device,
    descriptor_set_layout: vk::DescriptorSetLayout,
    allocator: Option<&vk::AllocationCallbacks>,
) {
    record(
        "vkDestroyDescriptorSetLayout",
        &[
            device.as_raw() as u64,
            descriptor_set_layout.as_raw(),
            address(allocator),
        ],
    );
}

extern "system" fn create_graphics_pipelines(
    device: vk::Device,
    pipeline_cache: vk::PipelineCache,
    create_info_count: u32,
    create_infos: *const vk::GraphicsPipelineCreateInfo,
    allocator: Option<&vk::AllocationCallbacks>,
    pipelines: *mut vk::Pipeline,
) -> vk::Result {
    record(
        "vkCreateGraphicsPipelines",
        &[
            device.as_raw() as u64,
            pipeline_cache.as_raw(),
            create_info_count as u64,
            pointer(create_infos),
            address(allocator),
        ],
    );
    for i in 0..create_info_count as usize {
        unsafe { *pipelines.add(i) = vk::Pipeline::from_raw(PIPELINE + i as u64) };
    }
    vk::Result::SUCCESS
}

extern "system" fn create_render_pass(
    device: vk::Device,
    create_info: &vk::RenderPassCreateInfo,
    allocator: Option<&vk::AllocationCallbacks>,
    render_pass: &mut vk::RenderPass,
) -> vk::Result {
    record(
        "vkCreateRenderPass",
        &[
            device.as_raw() as u64,
            create_info.subpass_count as u64,
            address(allocator),
        ],
    );
    *render_pass = vk::RenderPass::from_raw(RENDER_PASS);
    vk::Result::SUCCESS
}

extern "system" fn destroy_render_pass(
    device: vk::Device,
    render_pass: vk::RenderPass,
    allocator: Option<&vk::AllocationCallbacks>,
) {
    record(
        "vkDestroyRenderPass",
        &[device.as_raw() as u64, render_pass.as_raw(), address(allocator)],
    );
}

extern "system" fn create_framebuffer(
    device: vk::Device,
    create_info: &vk::FramebufferCreateInfo,
    allocator: Option<&vk::AllocationCallbacks>,
    framebuffer: &mut vk::Framebuffer,
) -> vk::Result {
    record(
        "vkCreateFramebuffer",
        &[
            device.as_raw() as u64,
            create_info.render_pass.as_raw(),
            address(allocator),
        ],
    );
    *framebuffer = vk::Framebuffer::from_raw(FRAMEBUFFER);
    vk::Result::SUCCESS
}

extern "system" fn destroy_framebuffer(
    device: vk::Device,
    framebuffer: vk::Framebuffer,
    allocator: Option<&vk::AllocationCallbacks>,
) {
    record(
        "vkDestroyFramebuffer",
        &[device.as_raw() as u64, framebuffer.as_raw(), address(allocator)],
    );
}

extern "system" fn wait_for_fences(
    device: vk::Device,
    fence_count: u32,
    fences: *const vk::Fence,
    wait_all: vk::Bool32,
    timeout: u64,
) -> vk::Result {
    record(
        "vkWaitForFences",
        &[
            device.as_raw() as u64,
            fence_count as u64,
            pointer(fences),
            wait_all.as_bool() as u64,
            timeout,
        ],
    );
    vk::Result::TIMEOUT
}

extern "system" fn begin_command_buffer(
    command_buffer: vk::CommandBuffer,
    begin_info: &vk::CommandBufferBeginInfo,
) -> vk::Result {
    record(
        "vkBeginCommandBuffer",
        &[command_buffer.as_raw() as u64, begin_info.flags.as_raw() as u64],
    );
    vk::Result::SUCCESS
}

extern "system" fn cmd_draw(
    command_buffer: vk::CommandBuffer,
    vertex_count: u32,
    instance_count: u32,
    first_vertex: u32,
    first_instance: u32,
) {
    record(
        "vkCmdDraw",
        &[
            command_buffer.as_raw() as u64,
            vertex_count as u64,
            instance_count as u64,
            first_vertex as u64,
            first_instance as u64,
        ],
    );
}

extern "system" fn cmd_set_viewport(
    command_buffer: vk::CommandBuffer,
    first_viewport: u32,
    viewport_count: u32,
    viewports: *const vk::Viewport,
) {
    record(
        "vkCmdSetViewport",
        &[
            command_buffer.as_raw() as u64,
            first_viewport as u64,
            viewport_count as u64,
            pointer(viewports),
        ],
    );
}

extern "system" fn cmd_bind_descriptor_sets(
    command_buffer: vk::CommandBuffer,
    pipeline_bind_point: vk::PipelineBindPoint,
    layout: vk::PipelineLayout,
    first_set: u32,
    descriptor_set_count: u32,
    descriptor_sets: *const vk::DescriptorSet,
    dynamic_offset_count: u32,
    dynamic_offsets: *const u32,
) {
    record(
        "vkCmdBindDescriptorSets",
        &[
            command_buffer.as_raw() as u64,
            pipeline_bind_point.as_raw() as u64,
            layout.as_raw(),
            first_set as u64,
            descriptor_set_count as u64,
            pointer(descriptor_sets),
            dynamic_offset_count as u64,
            pointer(dynamic_offsets),
        ],
    );
}

extern "system" fn cmd_set_line_width(command_buffer: vk::CommandBuffer, line_width: f32) {
    record(
        "vkCmdSetLineWidth",
        &[command_buffer.as_raw() as u64, line_width.to_bits() as u64],
    );
}

extern "system" fn cmd_set_blend_constants(
    command_buffer: vk::CommandBuffer,
    blend_constants: &[f32; 4],
) {
    record(
        "vkCmdSetBlendConstants",
        &[
            command_buffer.as_raw() as u64,
            pointer(blend_constants),
            blend_constants[3].to_bits() as u64,
        ],
    );
}

extern "system" fn cmd_blit_image(
    command_buffer: vk::CommandBuffer,
    src_image: vk::Image,
    src_image_layout: vk::ImageLayout,
    dst_image: vk::Image,
    dst_image_layout: vk::ImageLayout,
    region_count: u32,
    regions: *const vk::ImageBlit,
    filter: vk::Filter,
) {
    record(
        "vkCmdBlitImage",
        &[
            command_buffer.as_raw() as u64,
            src_image.as_raw(),
            src_image_layout.as_raw() as u64,
            dst_image.as_raw(),
            dst_image_layout.as_raw() as u64,
            region_count as u64,
            pointer(regions),
            filter.as_raw() as u64,
        ],
    );
}

extern "system" fn cmd_clear_attachments(
    command_buffer: vk::CommandBuffer,
    attachment_count: u32,
    attachments: *const vk::ClearAttachment,
    rect_count: u32,
    rects: *const vk::ClearRect,
) {
    record(
        "vkCmdClearAttachments",
        &[
            command_buffer.as_raw() as u64,
            attachment_count as u64,
            pointer(attachments),
            rect_count as u64,
            pointer(rects),
        ],
    );
}

extern "system" fn cmd_begin_render_pass(
    command_buffer: vk::CommandBuffer,
    render_pass_begin: &vk::RenderPassBeginInfo,
    contents: vk::SubpassContents,
) {
    record(
        "vkCmdBeginRenderPass",
        &[
            command_buffer.as_raw() as u64,
            render_pass_begin.render_pass.as_raw(),
            render_pass_begin.framebuffer.as_raw(),
            contents.as_raw() as u64,
        ],
    );
}

extern "system" fn cmd_next_subpass(
    command_buffer: vk::CommandBuffer,
    contents: vk::SubpassContents,
) {
    record(
        "vkCmdNextSubpass",
        &[command_buffer.as_raw() as u64, contents.as_raw() as u64],
    );
}

extern "system" fn cmd_end_render_pass(command_buffer: vk::CommandBuffer) {
    record("vkCmdEndRenderPass", &[command_buffer.as_raw() as u64]);
}

extern "system" fn cmd_begin_render_pass2(
    command_buffer: vk::CommandBuffer,
    render_pass_begin: &vk::RenderPassBeginInfo,
    subpass_begin_info: &vk::SubpassBeginInfo,
) {
    record(
        "vkCmdBeginRenderPass2",
        &[
            command_buffer.as_raw() as u64,
            render_pass_begin.render_pass.as_raw(),
            subpass_begin_info.contents.as_raw() as u64,
        ],
    );
}

extern "system" fn cmd_set_cull_mode(
    command_buffer: vk::CommandBuffer,
    cull_mode: vk::CullModeFlags,
) {
    record(
        "vkCmdSetCullMode",
        &[command_buffer.as_raw() as u64, cull_mode.as_raw() as u64],
    );
}

extern "system" fn cmd_bind_vertex_buffers2(
    command_buffer: vk::CommandBuffer,
    first_binding: u32,
    binding_count: u32,
    buffers: *const vk::Buffer,
    offsets: *const vk::DeviceSize,
    sizes: *const vk::DeviceSize,
    strides: *const vk::DeviceSize,
) {
    record(
        "vkCmdBindVertexBuffers2",
        &[
            command_buffer.as_raw() as u64,
            first_binding as u64,
            binding_count as u64,
            pointer(buffers),
            pointer(offsets),
            pointer(sizes),
            pointer(strides),
        ],
    );
}

extern "system" fn cmd_blit_image2(
    command_buffer: vk::CommandBuffer,
    blit_image_info: &vk::BlitImageInfo2,
) {
    record(
        "vkCmdBlitImage2",
        &[
            command_buffer.as_raw() as u64,
            blit_image_info.region_count as u64,
            blit_image_info.filter.as_raw() as u64,
        ],
    );
}

extern "system" fn cmd_pipeline_barrier2(
    command_buffer: vk::CommandBuffer,
    dependency_info: &vk::DependencyInfo,
) {
    record(
        "vkCmdPipelineBarrier2",
        &[
            command_buffer.as_raw() as u64,
            dependency_info.image_memory_barrier_count as u64,
            pointer(dependency_info.image_memory_barriers),
        ],
    );
}

extern "system" fn get_buffer_device_address(
    _device: vk::Device,
    info: &vk::BufferDeviceAddressInfo,
) -> vk::DeviceAddress {
    0xb000_0000 + info.buffer.as_raw()
}

extern "system" fn create_swapchain_khr(
    device: vk::Device,
    create_info: &vk::SwapchainCreateInfoKHR,
    allocator: Option<&vk::AllocationCallbacks>,
    swapchain: &mut vk::SwapchainKHR,
) -> vk::Result {
    record(
        "vkCreateSwapchainKHR",
        &[
            device.as_raw() as u64,
            create_info.min_image_count as u64,
            address(allocator),
        ],
    );
    *swapchain = vk::SwapchainKHR::from_raw(SWAPCHAIN);
    vk::Result::SUCCESS
}

extern "system" fn get_swapchain_images_khr(
    _device: vk::Device,
    _swapchain: vk::SwapchainKHR,
    swapchain_image_count: &mut u32,
    swapchain_images: *mut vk::Image,
) -> vk::Result {
    let available = SWAPCHAIN_IMAGES.map(vk::Image::from_raw);
    fill(&available, swapchain_image_count, swapchain_images)
}

extern "system" fn set_debug_utils_object_name_ext(
    device: vk::Device,
    name_info: &vk::DebugUtilsObjectNameInfoEXT,
) -> vk::Result {
    record(
        "vkSetDebugUtilsObjectNameEXT",
        &[
            device.as_raw() as u64,
            name_info.object_type.as_raw() as u64,
            name_info.object_handle,
        ],
    );
    vk::Result::SUCCESS
}

extern "system" fn set_debug_utils_object_tag_ext(
    device: vk::Device,
    tag_info: &vk::DebugUtilsObjectTagInfoEXT,
) -> vk::Result {
    record(
        "vkSetDebugUtilsObjectTagEXT",
        &[
            device.as_raw() as u64,
            tag_info.object_handle,
            tag_info.tag_name,
            tag_info.tag_size as u64,
        ],
    );
    vk::Result::SUCCESS
}

extern "system" fn queue_begin_debug_utils_label_ext(
    queue: vk::Queue,
    label_info: &vk::DebugUtilsLabelEXT,
) {
    record(
        "vkQueueBeginDebugUtilsLabelEXT",
        &[queue.as_raw() as u64, pointer(label_info.label_name)],
    );
}

extern "system" fn queue_end_debug_utils_label_ext(queue: vk::Queue) {
    record("vkQueueEndDebugUtilsLabelEXT", &[queue.as_raw() as u64]);
}

extern "system" fn queue_insert_debug_utils_label_ext(
    queue: vk::Queue,
    label_info: &vk::DebugUtilsLabelEXT,
) {
    record(
        "vkQueueInsertDebugUtilsLabelEXT",
        &[queue.as_raw() as u64, pointer(label_info.label_name)],
    );
}

extern "system" fn cmd_begin_debug_utils_label_ext(
    command_buffer: vk::CommandBuffer,
    label_info: &vk::DebugUtilsLabelEXT,
) {
    record(
        "vkCmdBeginDebugUtilsLabelEXT",
        &[command_buffer.as_raw() as u64, pointer(label_info.label_name)],
    );
}
