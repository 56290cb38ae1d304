use std::{
    ffi::{CStr, c_void},
    mem::transmute,
    os::raw::c_char,
};

use super::*;

#[cold]
#[inline(never)]
fn entry_point_not_loaded(name: &CStr) -> ! {
    panic!("vulkan entry point not loaded: {}", name.to_string_lossy())
}

dispatch_table! {
    /// Global commands, resolved through `vkGetInstanceProcAddr` with a null
    /// instance.
    pub struct EntryFnV1_0 {
        create_instance = c"vkCreateInstance": fn(
            create_info: &InstanceCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            instance: &mut Instance,
        ) -> Result;
        enumerate_instance_extension_properties = c"vkEnumerateInstanceExtensionProperties": fn(
            layer_name: *const c_char,
            property_count: &mut u32,
            properties: *mut ExtensionProperties,
        ) -> Result;
        enumerate_instance_layer_properties = c"vkEnumerateInstanceLayerProperties": fn(
            property_count: &mut u32,
            properties: *mut LayerProperties,
        ) -> Result;
    }
}

dispatch_table! {
    pub struct InstanceFnV1_0 {
        destroy_instance = c"vkDestroyInstance": fn(
            instance: Instance,
            allocator: Option<&AllocationCallbacks>,
        );
        enumerate_physical_devices = c"vkEnumeratePhysicalDevices": fn(
            instance: Instance,
            physical_device_count: &mut u32,
            physical_devices: *mut PhysicalDevice,
        ) -> Result;
        get_physical_device_features = c"vkGetPhysicalDeviceFeatures": fn(
            physical_device: PhysicalDevice,
            features: *mut PhysicalDeviceFeatures,
        );
        get_physical_device_format_properties = c"vkGetPhysicalDeviceFormatProperties": fn(
            physical_device: PhysicalDevice,
            format: Format,
            format_properties: &mut FormatProperties,
        );
        get_physical_device_image_format_properties = c"vkGetPhysicalDeviceImageFormatProperties": fn(
            physical_device: PhysicalDevice,
            format: Format,
            image_type: ImageType,
            tiling: ImageTiling,
            usage: ImageUsageFlags,
            flags: ImageCreateFlags,
            image_format_properties: &mut ImageFormatProperties,
        ) -> Result;
        get_physical_device_properties = c"vkGetPhysicalDeviceProperties": fn(
            physical_device: PhysicalDevice,
            properties: *mut PhysicalDeviceProperties,
        );
        get_physical_device_queue_family_properties = c"vkGetPhysicalDeviceQueueFamilyProperties": fn(
            physical_device: PhysicalDevice,
            queue_family_property_count: &mut u32,
            queue_family_properties: *mut QueueFamilyProperties,
        );
        get_physical_device_memory_properties = c"vkGetPhysicalDeviceMemoryProperties": fn(
            physical_device: PhysicalDevice,
            memory_properties: *mut PhysicalDeviceMemoryProperties,
        );
        get_device_proc_addr = c"vkGetDeviceProcAddr": fn(
            device: Device,
            name: *const c_char,
        ) -> Option<FnVoidFunction>;
        create_device = c"vkCreateDevice": fn(
            physical_device: PhysicalDevice,
            create_info: &DeviceCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            device: &mut Device,
        ) -> Result;
        enumerate_device_extension_properties = c"vkEnumerateDeviceExtensionProperties": fn(
            physical_device: PhysicalDevice,
            layer_name: *const c_char,
            property_count: &mut u32,
            properties: *mut ExtensionProperties,
        ) -> Result;
        enumerate_device_layer_properties = c"vkEnumerateDeviceLayerProperties": fn(
            physical_device: PhysicalDevice,
            property_count: &mut u32,
            properties: *mut LayerProperties,
        ) -> Result;
        get_physical_device_sparse_image_format_properties = c"vkGetPhysicalDeviceSparseImageFormatProperties": fn(
            physical_device: PhysicalDevice,
            format: Format,
            image_type: ImageType,
            samples: SampleCountFlags,
            usage: ImageUsageFlags,
            tiling: ImageTiling,
            property_count: &mut u32,
            properties: *mut SparseImageFormatProperties,
        );
    }
}

dispatch_table! {
    pub struct InstanceFnV1_1 {
        enumerate_physical_device_groups = c"vkEnumeratePhysicalDeviceGroups": fn(
            instance: Instance,
            physical_device_group_count: &mut u32,
            physical_device_group_properties: *mut PhysicalDeviceGroupProperties,
        ) -> Result;
        get_physical_device_features2 = c"vkGetPhysicalDeviceFeatures2": fn(
            physical_device: PhysicalDevice,
            features: *mut PhysicalDeviceFeatures2,
        );
        get_physical_device_properties2 = c"vkGetPhysicalDeviceProperties2": fn(
            physical_device: PhysicalDevice,
            properties: *mut PhysicalDeviceProperties2,
        );
        get_physical_device_format_properties2 = c"vkGetPhysicalDeviceFormatProperties2": fn(
            physical_device: PhysicalDevice,
            format: Format,
            format_properties: &mut FormatProperties2,
        );
        get_physical_device_image_format_properties2 = c"vkGetPhysicalDeviceImageFormatProperties2": fn(
            physical_device: PhysicalDevice,
            image_format_info: &PhysicalDeviceImageFormatInfo2,
            image_format_properties: &mut ImageFormatProperties2,
        ) -> Result;
        get_physical_device_queue_family_properties2 = c"vkGetPhysicalDeviceQueueFamilyProperties2": fn(
            physical_device: PhysicalDevice,
            queue_family_property_count: &mut u32,
            queue_family_properties: *mut QueueFamilyProperties2,
        );
        get_physical_device_memory_properties2 = c"vkGetPhysicalDeviceMemoryProperties2": fn(
            physical_device: PhysicalDevice,
            memory_properties: *mut PhysicalDeviceMemoryProperties2,
        );
        get_physical_device_sparse_image_format_properties2 = c"vkGetPhysicalDeviceSparseImageFormatProperties2": fn(
            physical_device: PhysicalDevice,
            format_info: &PhysicalDeviceSparseImageFormatInfo2,
            property_count: &mut u32,
            properties: *mut SparseImageFormatProperties2,
        );
        get_physical_device_external_buffer_properties = c"vkGetPhysicalDeviceExternalBufferProperties": fn(
            physical_device: PhysicalDevice,
            external_buffer_info: &PhysicalDeviceExternalBufferInfo,
            external_buffer_properties: &mut ExternalBufferProperties,
        );
        get_physical_device_external_fence_properties = c"vkGetPhysicalDeviceExternalFenceProperties": fn(
            physical_device: PhysicalDevice,
            external_fence_info: &PhysicalDeviceExternalFenceInfo,
            external_fence_properties: &mut ExternalFenceProperties,
        );
        get_physical_device_external_semaphore_properties = c"vkGetPhysicalDeviceExternalSemaphoreProperties": fn(
            physical_device: PhysicalDevice,
            external_semaphore_info: &PhysicalDeviceExternalSemaphoreInfo,
            external_semaphore_properties: &mut ExternalSemaphoreProperties,
        );
    }
}

dispatch_table! {
    pub struct InstanceFnV1_3 {
        get_physical_device_tool_properties = c"vkGetPhysicalDeviceToolProperties": fn(
            physical_device: PhysicalDevice,
            tool_count: &mut u32,
            tool_properties: *mut PhysicalDeviceToolProperties,
        ) -> Result;
    }
}

dispatch_table! {
    /// `VK_KHR_surface`
    pub struct KhrSurfaceFn {
        destroy_surface_khr = c"vkDestroySurfaceKHR": fn(
            instance: Instance,
            surface: SurfaceKHR,
            allocator: Option<&AllocationCallbacks>,
        );
        get_physical_device_surface_support_khr = c"vkGetPhysicalDeviceSurfaceSupportKHR": fn(
            physical_device: PhysicalDevice,
            queue_family_index: u32,
            surface: SurfaceKHR,
            supported: &mut Bool32,
        ) -> Result;
        get_physical_device_surface_capabilities_khr = c"vkGetPhysicalDeviceSurfaceCapabilitiesKHR": fn(
            physical_device: PhysicalDevice,
            surface: SurfaceKHR,
            surface_capabilities: &mut SurfaceCapabilitiesKHR,
        ) -> Result;
        get_physical_device_surface_formats_khr = c"vkGetPhysicalDeviceSurfaceFormatsKHR": fn(
            physical_device: PhysicalDevice,
            surface: SurfaceKHR,
            surface_format_count: &mut u32,
            surface_formats: *mut SurfaceFormatKHR,
        ) -> Result;
        get_physical_device_surface_present_modes_khr = c"vkGetPhysicalDeviceSurfacePresentModesKHR": fn(
            physical_device: PhysicalDevice,
            surface: SurfaceKHR,
            present_mode_count: &mut u32,
            present_modes: *mut PresentModeKHR,
        ) -> Result;
    }
}

dispatch_table! {
    /// Instance level commands of `VK_EXT_debug_utils`.
    pub struct ExtDebugUtilsInstanceFn {
        create_debug_utils_messenger_ext = c"vkCreateDebugUtilsMessengerEXT": fn(
            instance: Instance,
            create_info: &DebugUtilsMessengerCreateInfoEXT,
            allocator: Option<&AllocationCallbacks>,
            messenger: &mut DebugUtilsMessengerEXT,
        ) -> Result;
        destroy_debug_utils_messenger_ext = c"vkDestroyDebugUtilsMessengerEXT": fn(
            instance: Instance,
            messenger: DebugUtilsMessengerEXT,
            allocator: Option<&AllocationCallbacks>,
        );
        submit_debug_utils_message_ext = c"vkSubmitDebugUtilsMessageEXT": fn(
            instance: Instance,
            message_severity: DebugUtilsMessageSeverityFlagsEXT,
            message_types: DebugUtilsMessageTypeFlagsEXT,
            callback_data: &DebugUtilsMessengerCallbackDataEXT,
        );
    }
}

dispatch_table! {
    pub struct DeviceFnV1_0 {
        destroy_device = c"vkDestroyDevice": fn(
            device: Device,
            allocator: Option<&AllocationCallbacks>,
        );
        get_device_queue = c"vkGetDeviceQueue": fn(
            device: Device,
            queue_family_index: u32,
            queue_index: u32,
            queue: &mut Queue,
        );
        queue_submit = c"vkQueueSubmit": fn(
            queue: Queue,
            submit_count: u32,
            submits: *const SubmitInfo,
            fence: Fence,
        ) -> Result;
        queue_wait_idle = c"vkQueueWaitIdle": fn(queue: Queue) -> Result;
        device_wait_idle = c"vkDeviceWaitIdle": fn(device: Device) -> Result;
        allocate_memory = c"vkAllocateMemory": fn(
            device: Device,
            allocate_info: &MemoryAllocateInfo,
            allocator: Option<&AllocationCallbacks>,
            memory: &mut DeviceMemory,
        ) -> Result;
        free_memory = c"vkFreeMemory": fn(
            device: Device,
            memory: DeviceMemory,
            allocator: Option<&AllocationCallbacks>,
        );
        map_memory = c"vkMapMemory": fn(
            device: Device,
            memory: DeviceMemory,
            offset: DeviceSize,
            size: DeviceSize,
            flags: MemoryMapFlags,
            data: &mut *mut c_void,
        ) -> Result;
        unmap_memory = c"vkUnmapMemory": fn(device: Device, memory: DeviceMemory);
        flush_mapped_memory_ranges = c"vkFlushMappedMemoryRanges": fn(
            device: Device,
            memory_range_count: u32,
            memory_ranges: *const MappedMemoryRange,
        ) -> Result;
        invalidate_mapped_memory_ranges = c"vkInvalidateMappedMemoryRanges": fn(
            device: Device,
            memory_range_count: u32,
            memory_ranges: *const MappedMemoryRange,
        ) -> Result;
        get_device_memory_commitment = c"vkGetDeviceMemoryCommitment": fn(
            device: Device,
            memory: DeviceMemory,
            committed_memory_in_bytes: &mut DeviceSize,
        );
        bind_buffer_memory = c"vkBindBufferMemory": fn(
            device: Device,
            buffer: Buffer,
            memory: DeviceMemory,
            memory_offset: DeviceSize,
        ) -> Result;
        bind_image_memory = c"vkBindImageMemory": fn(
            device: Device,
            image: Image,
            memory: DeviceMemory,
            memory_offset: DeviceSize,
        ) -> Result;
        get_buffer_memory_requirements = c"vkGetBufferMemoryRequirements": fn(
            device: Device,
            buffer: Buffer,
            memory_requirements: &mut MemoryRequirements,
        );
        get_image_memory_requirements = c"vkGetImageMemoryRequirements": fn(
            device: Device,
            image: Image,
            memory_requirements: &mut MemoryRequirements,
        );
        get_image_sparse_memory_requirements = c"vkGetImageSparseMemoryRequirements": fn(
            device: Device,
            image: Image,
            sparse_memory_requirement_count: &mut u32,
            sparse_memory_requirements: *mut SparseImageMemoryRequirements,
        );
        queue_bind_sparse = c"vkQueueBindSparse": fn(
            queue: Queue,
            bind_info_count: u32,
            bind_info: *const BindSparseInfo,
            fence: Fence,
        ) -> Result;
        create_fence = c"vkCreateFence": fn(
            device: Device,
            create_info: &FenceCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            fence: &mut Fence,
        ) -> Result;
        destroy_fence = c"vkDestroyFence": fn(
            device: Device,
            fence: Fence,
            allocator: Option<&AllocationCallbacks>,
        );
        reset_fences = c"vkResetFences": fn(
            device: Device,
            fence_count: u32,
            fences: *const Fence,
        ) -> Result;
        get_fence_status = c"vkGetFenceStatus": fn(device: Device, fence: Fence) -> Result;
        wait_for_fences = c"vkWaitForFences": fn(
            device: Device,
            fence_count: u32,
            fences: *const Fence,
            wait_all: Bool32,
            timeout: u64,
        ) -> Result;
        create_semaphore = c"vkCreateSemaphore": fn(
            device: Device,
            create_info: &SemaphoreCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            semaphore: &mut Semaphore,
        ) -> Result;
        destroy_semaphore = c"vkDestroySemaphore": fn(
            device: Device,
            semaphore: Semaphore,
            allocator: Option<&AllocationCallbacks>,
        );
        create_event = c"vkCreateEvent": fn(
            device: Device,
            create_info: &EventCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            event: &mut Event,
        ) -> Result;
        destroy_event = c"vkDestroyEvent": fn(
            device: Device,
            event: Event,
            allocator: Option<&AllocationCallbacks>,
        );
        get_event_status = c"vkGetEventStatus": fn(device: Device, event: Event) -> Result;
        set_event = c"vkSetEvent": fn(device: Device, event: Event) -> Result;
        reset_event = c"vkResetEvent": fn(device: Device, event: Event) -> Result;
        create_query_pool = c"vkCreateQueryPool": fn(
            device: Device,
            create_info: &QueryPoolCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            query_pool: &mut QueryPool,
        ) -> Result;
        destroy_query_pool = c"vkDestroyQueryPool": fn(
            device: Device,
            query_pool: QueryPool,
            allocator: Option<&AllocationCallbacks>,
        );
        get_query_pool_results = c"vkGetQueryPoolResults": fn(
            device: Device,
            query_pool: QueryPool,
            first_query: u32,
            query_count: u32,
            data_size: usize,
            data: *mut c_void,
            stride: DeviceSize,
            flags: QueryResultFlags,
        ) -> Result;
        create_buffer = c"vkCreateBuffer": fn(
            device: Device,
            create_info: &BufferCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            buffer: &mut Buffer,
        ) -> Result;
        destroy_buffer = c"vkDestroyBuffer": fn(
            device: Device,
            buffer: Buffer,
            allocator: Option<&AllocationCallbacks>,
        );
        create_buffer_view = c"vkCreateBufferView": fn(
            device: Device,
            create_info: &BufferViewCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            view: &mut BufferView,
        ) -> Result;
        destroy_buffer_view = c"vkDestroyBufferView": fn(
            device: Device,
            buffer_view: BufferView,
            allocator: Option<&AllocationCallbacks>,
        );
        create_image = c"vkCreateImage": fn(
            device: Device,
            create_info: &ImageCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            image: &mut Image,
        ) -> Result;
        destroy_image = c"vkDestroyImage": fn(
            device: Device,
            image: Image,
            allocator: Option<&AllocationCallbacks>,
        );
        get_image_subresource_layout = c"vkGetImageSubresourceLayout": fn(
            device: Device,
            image: Image,
            subresource: &ImageSubresource,
            layout: &mut SubresourceLayout,
        );
        create_image_view = c"vkCreateImageView": fn(
            device: Device,
            create_info: &ImageViewCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            view: &mut ImageView,
        ) -> Result;
        destroy_image_view = c"vkDestroyImageView": fn(
            device: Device,
            image_view: ImageView,
            allocator: Option<&AllocationCallbacks>,
        );
        create_shader_module = c"vkCreateShaderModule": fn(
            device: Device,
            create_info: &ShaderModuleCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            shader_module: &mut ShaderModule,
        ) -> Result;
        destroy_shader_module = c"vkDestroyShaderModule": fn(
            device: Device,
            shader_module: ShaderModule,
            allocator: Option<&AllocationCallbacks>,
        );
        create_pipeline_cache = c"vkCreatePipelineCache": fn(
            device: Device,
            create_info: &PipelineCacheCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            pipeline_cache: &mut PipelineCache,
        ) -> Result;
        destroy_pipeline_cache = c"vkDestroyPipelineCache": fn(
            device: Device,
            pipeline_cache: PipelineCache,
            allocator: Option<&AllocationCallbacks>,
        );
        get_pipeline_cache_data = c"vkGetPipelineCacheData": fn(
            device: Device,
            pipeline_cache: PipelineCache,
            data_size: &mut usize,
            data: *mut c_void,
        ) -> Result;
        merge_pipeline_caches = c"vkMergePipelineCaches": fn(
            device: Device,
            dst_cache: PipelineCache,
            src_cache_count: u32,
            src_caches: *const PipelineCache,
        ) -> Result;
        create_graphics_pipelines = c"vkCreateGraphicsPipelines": fn(
            device: Device,
            pipeline_cache: PipelineCache,
            create_info_count: u32,
            create_infos: *const GraphicsPipelineCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            pipelines: *mut Pipeline,
        ) -> Result;
        create_compute_pipelines = c"vkCreateComputePipelines": fn(
            device: Device,
            pipeline_cache: PipelineCache,
            create_info_count: u32,
            create_infos: *const ComputePipelineCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            pipelines: *mut Pipeline,
        ) -> Result;
        destroy_pipeline = c"vkDestroyPipeline": fn(
            device: Device,
            pipeline: Pipeline,
            allocator: Option<&AllocationCallbacks>,
        );
        create_pipeline_layout = c"vkCreatePipelineLayout": fn(
            device: Device,
            create_info: &PipelineLayoutCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            pipeline_layout: &mut PipelineLayout,
        ) -> Result;
        destroy_pipeline_layout = c"vkDestroyPipelineLayout": fn(
            device: Device,
            pipeline_layout: PipelineLayout,
            allocator: Option<&AllocationCallbacks>,
        );
        create_sampler = c"vkCreateSampler": fn(
            device: Device,
            create_info: &SamplerCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            sampler: &mut Sampler,
        ) -> Result;
        destroy_sampler = c"vkDestroySampler": fn(
            device: Device,
            sampler: Sampler,
            allocator: Option<&AllocationCallbacks>,
        );
        create_descriptor_set_layout = c"vkCreateDescriptorSetLayout": fn(
            device: Device,
            create_info: &DescriptorSetLayoutCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            set_layout: &mut DescriptorSetLayout,
        ) -> Result;
        destroy_descriptor_set_layout = c"vkDestroyDescriptorSetLayout": fn(
            device: Device,
            descriptor_set_layout: DescriptorSetLayout,
            allocator: Option<&AllocationCallbacks>,
        );
        create_descriptor_pool = c"vkCreateDescriptorPool": fn(
            device: Device,
            create_info: &DescriptorPoolCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            descriptor_pool: &mut DescriptorPool,
        ) -> Result;
        destroy_descriptor_pool = c"vkDestroyDescriptorPool": fn(
            device: Device,
            descriptor_pool: DescriptorPool,
            allocator: Option<&AllocationCallbacks>,
        );
        reset_descriptor_pool = c"vkResetDescriptorPool": fn(
            device: Device,
            descriptor_pool: DescriptorPool,
            flags: DescriptorPoolResetFlags,
        ) -> Result;
        allocate_descriptor_sets = c"vkAllocateDescriptorSets": fn(
            device: Device,
            allocate_info: &DescriptorSetAllocateInfo,
            descriptor_sets: *mut DescriptorSet,
        ) -> Result;
        free_descriptor_sets = c"vkFreeDescriptorSets": fn(
            device: Device,
            descriptor_pool: DescriptorPool,
            descriptor_set_count: u32,
            descriptor_sets: *const DescriptorSet,
        ) -> Result;
        update_descriptor_sets = c"vkUpdateDescriptorSets": fn(
            device: Device,
            descriptor_write_count: u32,
            descriptor_writes: *const WriteDescriptorSet,
            descriptor_copy_count: u32,
            descriptor_copies: *const CopyDescriptorSet,
        );
        create_framebuffer = c"vkCreateFramebuffer": fn(
            device: Device,
            create_info: &FramebufferCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            framebuffer: &mut Framebuffer,
        ) -> Result;
        destroy_framebuffer = c"vkDestroyFramebuffer": fn(
            device: Device,
            framebuffer: Framebuffer,
            allocator: Option<&AllocationCallbacks>,
        );
        create_render_pass = c"vkCreateRenderPass": fn(
            device: Device,
            create_info: &RenderPassCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            render_pass: &mut RenderPass,
        ) -> Result;
        destroy_render_pass = c"vkDestroyRenderPass": fn(
            device: Device,
            render_pass: RenderPass,
            allocator: Option<&AllocationCallbacks>,
        );
        get_render_area_granularity = c"vkGetRenderAreaGranularity": fn(
            device: Device,
            render_pass: RenderPass,
            granularity: &mut Extent2d,
        );
        create_command_pool = c"vkCreateCommandPool": fn(
            device: Device,
            create_info: &CommandPoolCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            command_pool: &mut CommandPool,
        ) -> Result;
        destroy_command_pool = c"vkDestroyCommandPool": fn(
            device: Device,
            command_pool: CommandPool,
            allocator: Option<&AllocationCallbacks>,
        );
        reset_command_pool = c"vkResetCommandPool": fn(
            device: Device,
            command_pool: CommandPool,
            flags: CommandPoolResetFlags,
        ) -> Result;
        allocate_command_buffers = c"vkAllocateCommandBuffers": fn(
            device: Device,
            allocate_info: &CommandBufferAllocateInfo,
            command_buffers: *mut CommandBuffer,
        ) -> Result;
        free_command_buffers = c"vkFreeCommandBuffers": fn(
            device: Device,
            command_pool: CommandPool,
            command_buffer_count: u32,
            command_buffers: *const CommandBuffer,
        );
        begin_command_buffer = c"vkBeginCommandBuffer": fn(
            command_buffer: CommandBuffer,
            begin_info: &CommandBufferBeginInfo,
        ) -> Result;
        end_command_buffer = c"vkEndCommandBuffer": fn(command_buffer: CommandBuffer) -> Result;
        reset_command_buffer = c"vkResetCommandBuffer": fn(
            command_buffer: CommandBuffer,
            flags: CommandBufferResetFlags,
        ) -> Result;
        cmd_bind_pipeline = c"vkCmdBindPipeline": fn(
            command_buffer: CommandBuffer,
            pipeline_bind_point: PipelineBindPoint,
            pipeline: Pipeline,
        );
        cmd_set_viewport = c"vkCmdSetViewport": fn(
            command_buffer: CommandBuffer,
            first_viewport: u32,
            viewport_count: u32,
            viewports: *const Viewport,
        );
        cmd_set_scissor = c"vkCmdSetScissor": fn(
            command_buffer: CommandBuffer,
            first_scissor: u32,
            scissor_count: u32,
            scissors: *const Rect2d,
        );
        cmd_set_line_width = c"vkCmdSetLineWidth": fn(
            command_buffer: CommandBuffer,
            line_width: f32,
        );
        cmd_set_depth_bias = c"vkCmdSetDepthBias": fn(
            command_buffer: CommandBuffer,
            depth_bias_constant_factor: f32,
            depth_bias_clamp: f32,
            depth_bias_slope_factor: f32,
        );
        cmd_set_blend_constants = c"vkCmdSetBlendConstants": fn(
            command_buffer: CommandBuffer,
            blend_constants: &[f32; 4],
        );
        cmd_set_depth_bounds = c"vkCmdSetDepthBounds": fn(
            command_buffer: CommandBuffer,
            min_depth_bounds: f32,
            max_depth_bounds: f32,
        );
        cmd_set_stencil_compare_mask = c"vkCmdSetStencilCompareMask": fn(
            command_buffer: CommandBuffer,
            face_mask: StencilFaceFlags,
            compare_mask: u32,
        );
        cmd_set_stencil_write_mask = c"vkCmdSetStencilWriteMask": fn(
            command_buffer: CommandBuffer,
            face_mask: StencilFaceFlags,
            write_mask: u32,
        );
        cmd_set_stencil_reference = c"vkCmdSetStencilReference": fn(
            command_buffer: CommandBuffer,
            face_mask: StencilFaceFlags,
            reference: u32,
        );
        cmd_bind_descriptor_sets = c"vkCmdBindDescriptorSets": fn(
            command_buffer: CommandBuffer,
            pipeline_bind_point: PipelineBindPoint,
            layout: PipelineLayout,
            first_set: u32,
            descriptor_set_count: u32,
            descriptor_sets: *const DescriptorSet,
            dynamic_offset_count: u32,
            dynamic_offsets: *const u32,
        );
        cmd_bind_index_buffer = c"vkCmdBindIndexBuffer": fn(
            command_buffer: CommandBuffer,
            buffer: Buffer,
            offset: DeviceSize,
            index_type: IndexType,
        );
        cmd_bind_vertex_buffers = c"vkCmdBindVertexBuffers": fn(
            command_buffer: CommandBuffer,
            first_binding: u32,
            binding_count: u32,
            buffers: *const Buffer,
            offsets: *const DeviceSize,
        );
        cmd_draw = c"vkCmdDraw": fn(
            command_buffer: CommandBuffer,
            vertex_count: u32,
            instance_count: u32,
            first_vertex: u32,
            first_instance: u32,
        );
        cmd_draw_indexed = c"vkCmdDrawIndexed": fn(
            command_buffer: CommandBuffer,
            index_count: u32,
            instance_count: u32,
            first_index: u32,
            vertex_offset: i32,
            first_instance: u32,
        );
        cmd_draw_indirect = c"vkCmdDrawIndirect": fn(
            command_buffer: CommandBuffer,
            buffer: Buffer,
            offset: DeviceSize,
            draw_count: u32,
            stride: u32,
        );
        cmd_draw_indexed_indirect = c"vkCmdDrawIndexedIndirect": fn(
            command_buffer: CommandBuffer,
            buffer: Buffer,
            offset: DeviceSize,
            draw_count: u32,
            stride: u32,
        );
        cmd_dispatch = c"vkCmdDispatch": fn(
            command_buffer: CommandBuffer,
            group_count_x: u32,
            group_count_y: u32,
            group_count_z: u32,
        );
        cmd_dispatch_indirect = c"vkCmdDispatchIndirect": fn(
            command_buffer: CommandBuffer,
            buffer: Buffer,
            offset: DeviceSize,
        );
        cmd_copy_buffer = c"vkCmdCopyBuffer": fn(
            command_buffer: CommandBuffer,
            src_buffer: Buffer,
            dst_buffer: Buffer,
            region_count: u32,
            regions: *const BufferCopy,
        );
        cmd_copy_image = c"vkCmdCopyImage": fn(
            command_buffer: CommandBuffer,
            src_image: Image,
            src_image_layout: ImageLayout,
            dst_image: Image,
            dst_image_layout: ImageLayout,
            region_count: u32,
            regions: *const ImageCopy,
        );
        cmd_blit_image = c"vkCmdBlitImage": fn(
            command_buffer: CommandBuffer,
            src_image: Image,
            src_image_layout: ImageLayout,
            dst_image: Image,
            dst_image_layout: ImageLayout,
            region_count: u32,
            regions: *const ImageBlit,
            filter: Filter,
        );
        cmd_copy_buffer_to_image = c"vkCmdCopyBufferToImage": fn(
            command_buffer: CommandBuffer,
            src_buffer: Buffer,
            dst_image: Image,
            dst_image_layout: ImageLayout,
            region_count: u32,
            regions: *const BufferImageCopy,
        );
        cmd_copy_image_to_buffer = c"vkCmdCopyImageToBuffer": fn(
            command_buffer: CommandBuffer,
            src_image: Image,
            src_image_layout: ImageLayout,
            dst_buffer: Buffer,
            region_count: u32,
            regions: *const BufferImageCopy,
        );
        cmd_update_buffer = c"vkCmdUpdateBuffer": fn(
            command_buffer: CommandBuffer,
            dst_buffer: Buffer,
            dst_offset: DeviceSize,
            data_size: DeviceSize,
            data: *const c_void,
        );
        cmd_fill_buffer = c"vkCmdFillBuffer": fn(
            command_buffer: CommandBuffer,
            dst_buffer: Buffer,
            dst_offset: DeviceSize,
            size: DeviceSize,
            data: u32,
        );
        cmd_clear_color_image = c"vkCmdClearColorImage": fn(
            command_buffer: CommandBuffer,
            image: Image,
            image_layout: ImageLayout,
            color: &ClearColorValue,
            range_count: u32,
            ranges: *const ImageSubresourceRange,
        );
        cmd_clear_depth_stencil_image = c"vkCmdClearDepthStencilImage": fn(
            command_buffer: CommandBuffer,
            image: Image,
            image_layout: ImageLayout,
            depth_stencil: &ClearDepthStencilValue,
            range_count: u32,
            ranges: *const ImageSubresourceRange,
        );
        cmd_clear_attachments = c"vkCmdClearAttachments": fn(
            command_buffer: CommandBuffer,
            attachment_count: u32,
            attachments: *const ClearAttachment,
            rect_count: u32,
            rects: *const ClearRect,
        );
        cmd_resolve_image = c"vkCmdResolveImage": fn(
            command_buffer: CommandBuffer,
            src_image: Image,
            src_image_layout: ImageLayout,
            dst_image: Image,
            dst_image_layout: ImageLayout,
            region_count: u32,
            regions: *const ImageResolve,
        );
        cmd_set_event = c"vkCmdSetEvent": fn(
            command_buffer: CommandBuffer,
            event: Event,
            stage_mask: PipelineStageFlags,
        );
        cmd_reset_event = c"vkCmdResetEvent": fn(
            command_buffer: CommandBuffer,
            event: Event,
            stage_mask: PipelineStageFlags,
        );
        cmd_wait_events = c"vkCmdWaitEvents": fn(
            command_buffer: CommandBuffer,
            event_count: u32,
            events: *const Event,
            src_stage_mask: PipelineStageFlags,
            dst_stage_mask: PipelineStageFlags,
            memory_barrier_count: u32,
            memory_barriers: *const MemoryBarrier,
            buffer_memory_barrier_count: u32,
            buffer_memory_barriers: *const BufferMemoryBarrier,
            image_memory_barrier_count: u32,
            image_memory_barriers: *const ImageMemoryBarrier,
        );
        cmd_pipeline_barrier = c"vkCmdPipelineBarrier": fn(
            command_buffer: CommandBuffer,
            src_stage_mask: PipelineStageFlags,
            dst_stage_mask: PipelineStageFlags,
            dependency_flags: DependencyFlags,
            memory_barrier_count: u32,
            memory_barriers: *const MemoryBarrier,
            buffer_memory_barrier_count: u32,
            buffer_memory_barriers: *const BufferMemoryBarrier,
            image_memory_barrier_count: u32,
            image_memory_barriers: *const ImageMemoryBarrier,
        );
        cmd_begin_query = c"vkCmdBeginQuery": fn(
            command_buffer: CommandBuffer,
            query_pool: QueryPool,
            query: u32,
            flags: QueryControlFlags,
        );
        cmd_end_query = c"vkCmdEndQuery": fn(
            command_buffer: CommandBuffer,
            query_pool: QueryPool,
            query: u32,
        );
        cmd_reset_query_pool = c"vkCmdResetQueryPool": fn(
            command_buffer: CommandBuffer,
            query_pool: QueryPool,
            first_query: u32,
            query_count: u32,
        );
        cmd_write_timestamp = c"vkCmdWriteTimestamp": fn(
            command_buffer: CommandBuffer,
            pipeline_stage: PipelineStageFlags,
            query_pool: QueryPool,
            query: u32,
        );
        cmd_copy_query_pool_results = c"vkCmdCopyQueryPoolResults": fn(
            command_buffer: CommandBuffer,
            query_pool: QueryPool,
            first_query: u32,
            query_count: u32,
            dst_buffer: Buffer,
            dst_offset: DeviceSize,
            stride: DeviceSize,
            flags: QueryResultFlags,
        );
        cmd_push_constants = c"vkCmdPushConstants": fn(
            command_buffer: CommandBuffer,
            layout: PipelineLayout,
            stage_flags: ShaderStageFlags,
            offset: u32,
            size: u32,
            values: *const c_void,
        );
        cmd_begin_render_pass = c"vkCmdBeginRenderPass": fn(
            command_buffer: CommandBuffer,
            render_pass_begin: &RenderPassBeginInfo,
            contents: SubpassContents,
        );
        cmd_next_subpass = c"vkCmdNextSubpass": fn(
            command_buffer: CommandBuffer,
            contents: SubpassContents,
        );
        cmd_end_render_pass = c"vkCmdEndRenderPass": fn(command_buffer: CommandBuffer);
        cmd_execute_commands = c"vkCmdExecuteCommands": fn(
            command_buffer: CommandBuffer,
            command_buffer_count: u32,
            command_buffers: *const CommandBuffer,
        );
    }
}

dispatch_table! {
    pub struct DeviceFnV1_1 {
        bind_buffer_memory2 = c"vkBindBufferMemory2": fn(
            device: Device,
            bind_info_count: u32,
            bind_infos: *const BindBufferMemoryInfo,
        ) -> Result;
        bind_image_memory2 = c"vkBindImageMemory2": fn(
            device: Device,
            bind_info_count: u32,
            bind_infos: *const BindImageMemoryInfo,
        ) -> Result;
        get_buffer_memory_requirements2 = c"vkGetBufferMemoryRequirements2": fn(
            device: Device,
            info: &BufferMemoryRequirementsInfo2,
            memory_requirements: &mut MemoryRequirements2,
        );
        get_image_memory_requirements2 = c"vkGetImageMemoryRequirements2": fn(
            device: Device,
            info: &ImageMemoryRequirementsInfo2,
            memory_requirements: &mut MemoryRequirements2,
        );
        trim_command_pool = c"vkTrimCommandPool": fn(
            device: Device,
            command_pool: CommandPool,
            flags: CommandPoolTrimFlags,
        );
        get_device_group_peer_memory_features = c"vkGetDeviceGroupPeerMemoryFeatures": fn(
            device: Device,
            heap_index: u32,
            local_device_index: u32,
            remote_device_index: u32,
            peer_memory_features: &mut PeerMemoryFeatureFlags,
        );
        cmd_set_device_mask = c"vkCmdSetDeviceMask": fn(
            command_buffer: CommandBuffer,
            device_mask: u32,
        );
        cmd_dispatch_base = c"vkCmdDispatchBase": fn(
            command_buffer: CommandBuffer,
            base_group_x: u32,
            base_group_y: u32,
            base_group_z: u32,
            group_count_x: u32,
            group_count_y: u32,
            group_count_z: u32,
        );
        get_image_sparse_memory_requirements2 = c"vkGetImageSparseMemoryRequirements2": fn(
            device: Device,
            info: &ImageSparseMemoryRequirementsInfo2,
            sparse_memory_requirement_count: &mut u32,
            sparse_memory_requirements: *mut SparseImageMemoryRequirements2,
        );
        get_device_queue2 = c"vkGetDeviceQueue2": fn(
            device: Device,
            queue_info: &DeviceQueueInfo2,
            queue: &mut Queue,
        );
        create_sampler_ycbcr_conversion = c"vkCreateSamplerYcbcrConversion": fn(
            device: Device,
            create_info: &SamplerYcbcrConversionCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            ycbcr_conversion: &mut SamplerYcbcrConversion,
        ) -> Result;
        destroy_sampler_ycbcr_conversion = c"vkDestroySamplerYcbcrConversion": fn(
            device: Device,
            ycbcr_conversion: SamplerYcbcrConversion,
            allocator: Option<&AllocationCallbacks>,
        );
        create_descriptor_update_template = c"vkCreateDescriptorUpdateTemplate": fn(
            device: Device,
            create_info: &DescriptorUpdateTemplateCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            descriptor_update_template: &mut DescriptorUpdateTemplate,
        ) -> Result;
        destroy_descriptor_update_template = c"vkDestroyDescriptorUpdateTemplate": fn(
            device: Device,
            descriptor_update_template: DescriptorUpdateTemplate,
            allocator: Option<&AllocationCallbacks>,
        );
        update_descriptor_set_with_template = c"vkUpdateDescriptorSetWithTemplate": fn(
            device: Device,
            descriptor_set: DescriptorSet,
            descriptor_update_template: DescriptorUpdateTemplate,
            data: *const c_void,
        );
        get_descriptor_set_layout_support = c"vkGetDescriptorSetLayoutSupport": fn(
            device: Device,
            create_info: &DescriptorSetLayoutCreateInfo,
            support: &mut DescriptorSetLayoutSupport,
        );
    }
}

dispatch_table! {
    pub struct DeviceFnV1_2 {
        get_buffer_device_address = c"vkGetBufferDeviceAddress": fn(
            device: Device,
            info: &BufferDeviceAddressInfo,
        ) -> DeviceAddress;
        get_semaphore_counter_value = c"vkGetSemaphoreCounterValue": fn(
            device: Device,
            semaphore: Semaphore,
            value: &mut u64,
        ) -> Result;
        wait_semaphores = c"vkWaitSemaphores": fn(
            device: Device,
            wait_info: &SemaphoreWaitInfo,
            timeout: u64,
        ) -> Result;
        signal_semaphore = c"vkSignalSemaphore": fn(
            device: Device,
            signal_info: &SemaphoreSignalInfo,
        ) -> Result;
        reset_query_pool = c"vkResetQueryPool": fn(
            device: Device,
            query_pool: QueryPool,
            first_query: u32,
            query_count: u32,
        );
        cmd_draw_indirect_count = c"vkCmdDrawIndirectCount": fn(
            command_buffer: CommandBuffer,
            buffer: Buffer,
            offset: DeviceSize,
            count_buffer: Buffer,
            count_buffer_offset: DeviceSize,
            max_draw_count: u32,
            stride: u32,
        );
        cmd_draw_indexed_indirect_count = c"vkCmdDrawIndexedIndirectCount": fn(
            command_buffer: CommandBuffer,
            buffer: Buffer,
            offset: DeviceSize,
            count_buffer: Buffer,
            count_buffer_offset: DeviceSize,
            max_draw_count: u32,
            stride: u32,
        );
        create_render_pass2 = c"vkCreateRenderPass2": fn(
            device: Device,
            create_info: &RenderPassCreateInfo2,
            allocator: Option<&AllocationCallbacks>,
            render_pass: &mut RenderPass,
        ) -> Result;
        cmd_begin_render_pass2 = c"vkCmdBeginRenderPass2": fn(
            command_buffer: CommandBuffer,
            render_pass_begin: &RenderPassBeginInfo,
            subpass_begin_info: &SubpassBeginInfo,
        );
        cmd_next_subpass2 = c"vkCmdNextSubpass2": fn(
            command_buffer: CommandBuffer,
            subpass_begin_info: &SubpassBeginInfo,
            subpass_end_info: &SubpassEndInfo,
        );
        cmd_end_render_pass2 = c"vkCmdEndRenderPass2": fn(
            command_buffer: CommandBuffer,
            subpass_end_info: &SubpassEndInfo,
        );
        get_buffer_opaque_capture_address = c"vkGetBufferOpaqueCaptureAddress": fn(
            device: Device,
            info: &BufferDeviceAddressInfo,
        ) -> u64;
        get_device_memory_opaque_capture_address = c"vkGetDeviceMemoryOpaqueCaptureAddress": fn(
            device: Device,
            info: &DeviceMemoryOpaqueCaptureAddressInfo,
        ) -> u64;
    }
}

dispatch_table! {
    /// Dynamic rendering, synchronization2, copy commands 2, private data
    /// and the extended dynamic state promoted to core in 1.3.
    pub struct DeviceFnV1_3 {
        cmd_pipeline_barrier2 = c"vkCmdPipelineBarrier2": fn(
            command_buffer: CommandBuffer,
            dependency_info: &DependencyInfo,
        );
        cmd_begin_rendering = c"vkCmdBeginRendering": fn(
            command_buffer: CommandBuffer,
            rendering_info: &RenderingInfo,
        );
        cmd_end_rendering = c"vkCmdEndRendering": fn(command_buffer: CommandBuffer);
        cmd_set_viewport_with_count = c"vkCmdSetViewportWithCount": fn(
            command_buffer: CommandBuffer,
            viewport_count: u32,
            viewports: *const Viewport,
        );
        cmd_set_scissor_with_count = c"vkCmdSetScissorWithCount": fn(
            command_buffer: CommandBuffer,
            scissor_count: u32,
            scissors: *const Rect2d,
        );
        queue_submit2 = c"vkQueueSubmit2": fn(
            queue: Queue,
            submit_count: u32,
            submits: *const SubmitInfo2,
            fence: Fence,
        ) -> Result;
        create_private_data_slot = c"vkCreatePrivateDataSlot": fn(
            device: Device,
            create_info: &PrivateDataSlotCreateInfo,
            allocator: Option<&AllocationCallbacks>,
            private_data_slot: &mut PrivateDataSlot,
        ) -> Result;
        destroy_private_data_slot = c"vkDestroyPrivateDataSlot": fn(
            device: Device,
            private_data_slot: PrivateDataSlot,
            allocator: Option<&AllocationCallbacks>,
        );
        set_private_data = c"vkSetPrivateData": fn(
            device: Device,
            object_type: ObjectType,
            object_handle: u64,
            private_data_slot: PrivateDataSlot,
            data: u64,
        ) -> Result;
        get_private_data = c"vkGetPrivateData": fn(
            device: Device,
            object_type: ObjectType,
            object_handle: u64,
            private_data_slot: PrivateDataSlot,
            data: &mut u64,
        );
        cmd_set_event2 = c"vkCmdSetEvent2": fn(
            command_buffer: CommandBuffer,
            event: Event,
            dependency_info: &DependencyInfo,
        );
        cmd_reset_event2 = c"vkCmdResetEvent2": fn(
            command_buffer: CommandBuffer,
            event: Event,
            stage_mask: PipelineStageFlags2,
        );
        cmd_wait_events2 = c"vkCmdWaitEvents2": fn(
            command_buffer: CommandBuffer,
            event_count: u32,
            events: *const Event,
            dependency_infos: *const DependencyInfo,
        );
        cmd_write_timestamp2 = c"vkCmdWriteTimestamp2": fn(
            command_buffer: CommandBuffer,
            stage: PipelineStageFlags2,
            query_pool: QueryPool,
            query: u32,
        );
        cmd_copy_buffer2 = c"vkCmdCopyBuffer2": fn(
            command_buffer: CommandBuffer,
            copy_buffer_info: &CopyBufferInfo2,
        );
        cmd_copy_image2 = c"vkCmdCopyImage2": fn(
            command_buffer: CommandBuffer,
            copy_image_info: &CopyImageInfo2,
        );
        cmd_copy_buffer_to_image2 = c"vkCmdCopyBufferToImage2": fn(
            command_buffer: CommandBuffer,
            copy_buffer_to_image_info: &CopyBufferToImageInfo2,
        );
        cmd_copy_image_to_buffer2 = c"vkCmdCopyImageToBuffer2": fn(
            command_buffer: CommandBuffer,
            copy_image_to_buffer_info: &CopyImageToBufferInfo2,
        );
        cmd_blit_image2 = c"vkCmdBlitImage2": fn(
            command_buffer: CommandBuffer,
            blit_image_info: &BlitImageInfo2,
        );
        cmd_resolve_image2 = c"vkCmdResolveImage2": fn(
            command_buffer: CommandBuffer,
            resolve_image_info: &ResolveImageInfo2,
        );
        cmd_set_cull_mode = c"vkCmdSetCullMode": fn(
            command_buffer: CommandBuffer,
            cull_mode: CullModeFlags,
        );
        cmd_set_front_face = c"vkCmdSetFrontFace": fn(
            command_buffer: CommandBuffer,
            front_face: FrontFace,
        );
        cmd_set_primitive_topology = c"vkCmdSetPrimitiveTopology": fn(
            command_buffer: CommandBuffer,
            primitive_topology: PrimitiveTopology,
        );
        cmd_bind_vertex_buffers2 = c"vkCmdBindVertexBuffers2": fn(
            command_buffer: CommandBuffer,
            first_binding: u32,
            binding_count: u32,
            buffers: *const Buffer,
            offsets: *const DeviceSize,
            sizes: *const DeviceSize,
            strides: *const DeviceSize,
        );
        cmd_set_depth_test_enable = c"vkCmdSetDepthTestEnable": fn(
            command_buffer: CommandBuffer,
            depth_test_enable: Bool32,
        );
        cmd_set_depth_write_enable = c"vkCmdSetDepthWriteEnable": fn(
            command_buffer: CommandBuffer,
            depth_write_enable: Bool32,
        );
        cmd_set_depth_compare_op = c"vkCmdSetDepthCompareOp": fn(
            command_buffer: CommandBuffer,
            depth_compare_op: CompareOp,
        );
        cmd_set_depth_bounds_test_enable = c"vkCmdSetDepthBoundsTestEnable": fn(
            command_buffer: CommandBuffer,
            depth_bounds_test_enable: Bool32,
        );
        cmd_set_stencil_test_enable = c"vkCmdSetStencilTestEnable": fn(
            command_buffer: CommandBuffer,
            stencil_test_enable: Bool32,
        );
        cmd_set_stencil_op = c"vkCmdSetStencilOp": fn(
            command_buffer: CommandBuffer,
            face_mask: StencilFaceFlags,
            fail_op: StencilOp,
            pass_op: StencilOp,
            depth_fail_op: StencilOp,
            compare_op: CompareOp,
        );
        cmd_set_rasterizer_discard_enable = c"vkCmdSetRasterizerDiscardEnable": fn(
            command_buffer: CommandBuffer,
            rasterizer_discard_enable: Bool32,
        );
        cmd_set_depth_bias_enable = c"vkCmdSetDepthBiasEnable": fn(
            command_buffer: CommandBuffer,
            depth_bias_enable: Bool32,
        );
        cmd_set_primitive_restart_enable = c"vkCmdSetPrimitiveRestartEnable": fn(
            command_buffer: CommandBuffer,
            primitive_restart_enable: Bool32,
        );
        get_device_buffer_memory_requirements = c"vkGetDeviceBufferMemoryRequirements": fn(
            device: Device,
            info: &DeviceBufferMemoryRequirements,
            memory_requirements: &mut MemoryRequirements2,
        );
        get_device_image_memory_requirements = c"vkGetDeviceImageMemoryRequirements": fn(
            device: Device,
            info: &DeviceImageMemoryRequirements,
            memory_requirements: &mut MemoryRequirements2,
        );
        get_device_image_sparse_memory_requirements = c"vkGetDeviceImageSparseMemoryRequirements": fn(
            device: Device,
            info: &DeviceImageMemoryRequirements,
            sparse_memory_requirement_count: &mut u32,
            sparse_memory_requirements: *mut SparseImageMemoryRequirements2,
        );
    }
}

dispatch_table! {
    /// `VK_KHR_swapchain`
    pub struct KhrSwapchainFn {
        create_swapchain_khr = c"vkCreateSwapchainKHR": fn(
            device: Device,
            create_info: &SwapchainCreateInfoKHR,
            allocator: Option<&AllocationCallbacks>,
            swapchain: &mut SwapchainKHR,
        ) -> Result;
        destroy_swapchain_khr = c"vkDestroySwapchainKHR": fn(
            device: Device,
            swapchain: SwapchainKHR,
            allocator: Option<&AllocationCallbacks>,
        );
        get_swapchain_images_khr = c"vkGetSwapchainImagesKHR": fn(
            device: Device,
            swapchain: SwapchainKHR,
            swapchain_image_count: &mut u32,
            swapchain_images: *mut Image,
        ) -> Result;
        acquire_next_image_khr = c"vkAcquireNextImageKHR": fn(
            device: Device,
            swapchain: SwapchainKHR,
            timeout: u64,
            semaphore: Semaphore,
            fence: Fence,
            image_index: &mut u32,
        ) -> Result;
        queue_present_khr = c"vkQueuePresentKHR": fn(
            queue: Queue,
            present_info: &PresentInfoKHR,
        ) -> Result;
    }
}

dispatch_table! {
    /// Device level commands of `VK_EXT_debug_utils`.
    pub struct ExtDebugUtilsDeviceFn {
        set_debug_utils_object_name_ext = c"vkSetDebugUtilsObjectNameEXT": fn(
            device: Device,
            name_info: &DebugUtilsObjectNameInfoEXT,
        ) -> Result;
        set_debug_utils_object_tag_ext = c"vkSetDebugUtilsObjectTagEXT": fn(
            device: Device,
            tag_info: &DebugUtilsObjectTagInfoEXT,
        ) -> Result;
        queue_begin_debug_utils_label_ext = c"vkQueueBeginDebugUtilsLabelEXT": fn(
            queue: Queue,
            label_info: &DebugUtilsLabelEXT,
        );
        queue_end_debug_utils_label_ext = c"vkQueueEndDebugUtilsLabelEXT": fn(queue: Queue);
        queue_insert_debug_utils_label_ext = c"vkQueueInsertDebugUtilsLabelEXT": fn(
            queue: Queue,
            label_info: &DebugUtilsLabelEXT,
        );
        cmd_begin_debug_utils_label_ext = c"vkCmdBeginDebugUtilsLabelEXT": fn(
            command_buffer: CommandBuffer,
            label_info: &DebugUtilsLabelEXT,
        );
        cmd_end_debug_utils_label_ext = c"vkCmdEndDebugUtilsLabelEXT": fn(
            command_buffer: CommandBuffer,
        );
        cmd_insert_debug_utils_label_ext = c"vkCmdInsertDebugUtilsLabelEXT": fn(
            command_buffer: CommandBuffer,
            label_info: &DebugUtilsLabelEXT,
        );
    }
}
