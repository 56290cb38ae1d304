vk_flags! {
    pub struct InstanceCreateFlags(u32) {}
}

vk_flags! {
    pub struct DeviceCreateFlags(u32) {}
}

vk_flags! {
    pub struct DeviceQueueCreateFlags(u32) {
        PROTECTED = 1 << 0,
    }
}

vk_flags! {
    pub struct QueueFlags(u32) {
        /// Queue supports graphics operations
        GRAPHICS = 1 << 0,
        /// Queue supports compute operations
        COMPUTE = 1 << 1,
        /// Queue supports transfer operations
        TRANSFER = 1 << 2,
        /// Queue supports sparse resource memory management operations
        SPARSE_BINDING = 1 << 3,
        PROTECTED = 1 << 4,
    }
}

vk_flags! {
    pub struct MemoryPropertyFlags(u32) {
        /// If otherwise stated, then allocate memory on device
        DEVICE_LOCAL = 1 << 0,
        /// Memory is mappable by host
        HOST_VISIBLE = 1 << 1,
        /// Memory will have i/o coherency. If not set, application may need to use vkFlushMappedMemoryRanges and vkInvalidateMappedMemoryRanges to flush/invalidate host cache
        HOST_COHERENT = 1 << 2,
        /// Memory will be cached by the host
        HOST_CACHED = 1 << 3,
        /// Memory may be allocated by the driver when it is required
        LAZILY_ALLOCATED = 1 << 4,
        PROTECTED = 1 << 5,
    }
}

vk_flags! {
    pub struct MemoryHeapFlags(u32) {
        /// If set, heap represents device memory
        DEVICE_LOCAL = 1 << 0,
        MULTI_INSTANCE = 1 << 1,
    }
}

vk_flags! {
    pub struct MemoryMapFlags(u32) {}
}

vk_flags! {
    pub struct FormatFeatureFlags(u32) {
        SAMPLED_IMAGE = 1 << 0,
        STORAGE_IMAGE = 1 << 1,
        STORAGE_IMAGE_ATOMIC = 1 << 2,
        UNIFORM_TEXEL_BUFFER = 1 << 3,
        STORAGE_TEXEL_BUFFER = 1 << 4,
        STORAGE_TEXEL_BUFFER_ATOMIC = 1 << 5,
        VERTEX_BUFFER = 1 << 6,
        COLOR_ATTACHMENT = 1 << 7,
        COLOR_ATTACHMENT_BLEND = 1 << 8,
        DEPTH_STENCIL_ATTACHMENT = 1 << 9,
        BLIT_SRC = 1 << 10,
        BLIT_DST = 1 << 11,
        SAMPLED_IMAGE_FILTER_LINEAR = 1 << 12,
        TRANSFER_SRC = 1 << 14,
        TRANSFER_DST = 1 << 15,
    }
}

vk_flags! {
    pub struct SampleCountFlags(u32) {
        SAMPLE_COUNT_1 = 1 << 0,
        SAMPLE_COUNT_2 = 1 << 1,
        SAMPLE_COUNT_4 = 1 << 2,
        SAMPLE_COUNT_8 = 1 << 3,
        SAMPLE_COUNT_16 = 1 << 4,
        SAMPLE_COUNT_32 = 1 << 5,
        SAMPLE_COUNT_64 = 1 << 6,
    }
}

vk_flags! {
    pub struct FenceCreateFlags(u32) {
        SIGNALED = 1 << 0,
    }
}

vk_flags! {
    pub struct SemaphoreCreateFlags(u32) {}
}

vk_flags! {
    pub struct SemaphoreWaitFlags(u32) {
        ANY = 1 << 0,
    }
}

vk_flags! {
    pub struct EventCreateFlags(u32) {
        DEVICE_ONLY = 1 << 0,
    }
}

vk_flags! {
    pub struct QueryPoolCreateFlags(u32) {}
}

vk_flags! {
    pub struct QueryResultFlags(u32) {
        /// Results of the queries are written to the destination buffer as 64-bit values
        TYPE_64 = 1 << 0,
        /// Results of the queries are waited on before proceeding with the result copy
        WAIT = 1 << 1,
        /// Besides the results of the query, the availability of the results is also written
        WITH_AVAILABILITY = 1 << 2,
        /// Copy the partial results of the query even if the final results are not available
        PARTIAL = 1 << 3,
    }
}

vk_flags! {
    pub struct QueryPipelineStatisticFlags(u32) {
        INPUT_ASSEMBLY_VERTICES = 1 << 0,
        INPUT_ASSEMBLY_PRIMITIVES = 1 << 1,
        VERTEX_SHADER_INVOCATIONS = 1 << 2,
        FRAGMENT_SHADER_INVOCATIONS = 1 << 7,
        COMPUTE_SHADER_INVOCATIONS = 1 << 10,
    }
}

vk_flags! {
    pub struct QueryControlFlags(u32) {
        /// Require precise results to be collected by the query
        PRECISE = 1 << 0,
    }
}

vk_flags! {
    pub struct BufferCreateFlags(u32) {
        /// Buffer should support sparse backing
        SPARSE_BINDING = 1 << 0,
        /// Buffer should support sparse backing with partial residency
        SPARSE_RESIDENCY = 1 << 1,
        /// Buffer should support constant data access to physical memory ranges mapped into multiple locations of sparse buffers
        SPARSE_ALIASED = 1 << 2,
        PROTECTED = 1 << 3,
        DEVICE_ADDRESS_CAPTURE_REPLAY = 1 << 4,
    }
}

vk_flags! {
    pub struct BufferUsageFlags(u32) {
        /// Can be used as a source of transfer operations
        TRANSFER_SRC = 1 << 0,
        /// Can be used as a destination of transfer operations
        TRANSFER_DST = 1 << 1,
        /// Can be used as TBO
        UNIFORM_TEXEL_BUFFER = 1 << 2,
        /// Can be used as IBO
        STORAGE_TEXEL_BUFFER = 1 << 3,
        /// Can be used as UBO
        UNIFORM_BUFFER = 1 << 4,
        /// Can be used as SSBO
        STORAGE_BUFFER = 1 << 5,
        /// Can be used as source of fixed-function index fetch (index buffer)
        INDEX_BUFFER = 1 << 6,
        /// Can be used as source of fixed-function vertex fetch (VBO)
        VERTEX_BUFFER = 1 << 7,
        /// Can be the source of indirect parameters (e.g. indirect buffer, parameter buffer)
        INDIRECT_BUFFER = 1 << 8,
        SHADER_DEVICE_ADDRESS = 1 << 17,
    }
}

vk_flags! {
    pub struct BufferViewCreateFlags(u32) {}
}

vk_flags! {
    pub struct ImageCreateFlags(u32) {
        /// Image should support sparse backing
        SPARSE_BINDING = 1 << 0,
        /// Image should support sparse backing with partial residency
        SPARSE_RESIDENCY = 1 << 1,
        /// Image should support constant data access to physical memory ranges mapped into multiple locations of sparse images
        SPARSE_ALIASED = 1 << 2,
        /// Allows image views to have different format than the base image
        MUTABLE_FORMAT = 1 << 3,
        /// Allows creating image views with cube type from the created image
        CUBE_COMPATIBLE = 1 << 4,
        ARRAY_2D_COMPATIBLE = 1 << 5,
    }
}

vk_flags! {
    pub struct ImageUsageFlags(u32) {
        /// Can be used as a source of transfer operations
        TRANSFER_SRC = 1 << 0,
        /// Can be used as a destination of transfer operations
        TRANSFER_DST = 1 << 1,
        /// Can be sampled from (SAMPLED_IMAGE and COMBINED_IMAGE_SAMPLER descriptor types)
        SAMPLED = 1 << 2,
        /// Can be used as storage image (STORAGE_IMAGE descriptor type)
        STORAGE = 1 << 3,
        /// Can be used as framebuffer color attachment
        COLOR_ATTACHMENT = 1 << 4,
        /// Can be used as framebuffer depth/stencil attachment
        DEPTH_STENCIL_ATTACHMENT = 1 << 5,
        /// Image data not needed outside of rendering
        TRANSIENT_ATTACHMENT = 1 << 6,
        /// Can be used as framebuffer input attachment
        INPUT_ATTACHMENT = 1 << 7,
    }
}

vk_flags! {
    pub struct ImageViewCreateFlags(u32) {}
}

vk_flags! {
    pub struct ImageAspectFlags(u32) {
        COLOR = 1 << 0,
        DEPTH = 1 << 1,
        STENCIL = 1 << 2,
        METADATA = 1 << 3,
        PLANE_0 = 1 << 4,
        PLANE_1 = 1 << 5,
        PLANE_2 = 1 << 6,
    }
}

vk_flags! {
    pub struct ShaderModuleCreateFlags(u32) {}
}

vk_flags! {
    pub struct PipelineCacheCreateFlags(u32) {
        EXTERNALLY_SYNCHRONIZED = 1 << 0,
    }
}

vk_flags! {
    pub struct PipelineCreateFlags(u32) {
        DISABLE_OPTIMIZATION = 1 << 0,
        ALLOW_DERIVATIVES = 1 << 1,
        DERIVATIVE = 1 << 2,
        DISPATCH_BASE = 1 << 4,
    }
}

vk_flags! {
    pub struct PipelineShaderStageCreateFlags(u32) {
        ALLOW_VARYING_SUBGROUP_SIZE = 1 << 0,
        REQUIRE_FULL_SUBGROUPS = 1 << 1,
    }
}

vk_flags! {
    pub struct ShaderStageFlags(u32) {
        VERTEX = 1 << 0,
        TESSELLATION_CONTROL = 1 << 1,
        TESSELLATION_EVALUATION = 1 << 2,
        GEOMETRY = 1 << 3,
        FRAGMENT = 1 << 4,
        COMPUTE = 1 << 5,
        ALL_GRAPHICS = 0x0000_001f,
        ALL = 0x7fff_ffff,
    }
}

vk_flags! {
    pub struct PipelineLayoutCreateFlags(u32) {}
}

vk_flags! {
    pub struct SamplerCreateFlags(u32) {}
}

vk_flags! {
    pub struct DescriptorSetLayoutCreateFlags(u32) {
        UPDATE_AFTER_BIND_POOL = 1 << 1,
    }
}

vk_flags! {
    pub struct DescriptorPoolCreateFlags(u32) {
        /// Descriptor sets may be freed individually
        FREE_DESCRIPTOR_SET = 1 << 0,
        UPDATE_AFTER_BIND = 1 << 1,
    }
}

vk_flags! {
    pub struct DescriptorPoolResetFlags(u32) {}
}

vk_flags! {
    pub struct CommandPoolCreateFlags(u32) {
        /// Command buffers have a short lifetime
        TRANSIENT = 1 << 0,
        /// Command buffers may release their memory individually
        RESET_COMMAND_BUFFER = 1 << 1,
        PROTECTED = 1 << 2,
    }
}

vk_flags! {
    pub struct CommandPoolResetFlags(u32) {
        /// Release resources owned by the pool
        RELEASE_RESOURCES = 1 << 0,
    }
}

vk_flags! {
    pub struct CommandPoolTrimFlags(u32) {}
}

vk_flags! {
    pub struct CommandBufferUsageFlags(u32) {
        ONE_TIME_SUBMIT = 1 << 0,
        RENDER_PASS_CONTINUE = 1 << 1,
        /// Command buffer may be submitted/executed more than once simultaneously
        SIMULTANEOUS_USE = 1 << 2,
    }
}

vk_flags! {
    pub struct CommandBufferResetFlags(u32) {
        /// Release resources owned by the buffer
        RELEASE_RESOURCES = 1 << 0,
    }
}

vk_flags! {
    pub struct PipelineStageFlags(u32) {
        /// Before subsequent commands are processed
        TOP_OF_PIPE = 1 << 0,
        /// Draw/DispatchIndirect command fetch
        DRAW_INDIRECT = 1 << 1,
        /// Vertex/index fetch
        VERTEX_INPUT = 1 << 2,
        /// Vertex shading
        VERTEX_SHADER = 1 << 3,
        /// Fragment shading
        FRAGMENT_SHADER = 1 << 7,
        /// Early fragment (depth and stencil) tests
        EARLY_FRAGMENT_TESTS = 1 << 8,
        /// Late fragment (depth and stencil) tests
        LATE_FRAGMENT_TESTS = 1 << 9,
        /// Color attachment writes
        COLOR_ATTACHMENT_OUTPUT = 1 << 10,
        /// Compute shading
        COMPUTE_SHADER = 1 << 11,
        /// Transfer/copy operations
        TRANSFER = 1 << 12,
        /// After previous commands have completed
        BOTTOM_OF_PIPE = 1 << 13,
        /// Indicates host (CPU) is a source/sink of the dependency
        HOST = 1 << 14,
        /// All stages of the graphics pipeline
        ALL_GRAPHICS = 1 << 15,
        /// All stages supported on the queue
        ALL_COMMANDS = 1 << 16,
    }
}

vk_flags! {
    pub struct AccessFlags(u32) {
        INDIRECT_COMMAND_READ = 1 << 0,
        INDEX_READ = 1 << 1,
        VERTEX_ATTRIBUTE_READ = 1 << 2,
        UNIFORM_READ = 1 << 3,
        INPUT_ATTACHMENT_READ = 1 << 4,
        SHADER_READ = 1 << 5,
        SHADER_WRITE = 1 << 6,
        COLOR_ATTACHMENT_READ = 1 << 7,
        COLOR_ATTACHMENT_WRITE = 1 << 8,
        DEPTH_STENCIL_ATTACHMENT_READ = 1 << 9,
        DEPTH_STENCIL_ATTACHMENT_WRITE = 1 << 10,
        TRANSFER_READ = 1 << 11,
        TRANSFER_WRITE = 1 << 12,
        HOST_READ = 1 << 13,
        HOST_WRITE = 1 << 14,
        MEMORY_READ = 1 << 15,
        MEMORY_WRITE = 1 << 16,
    }
}

vk_flags! {
    pub struct DependencyFlags(u32) {
        /// Dependency is per pixel region
        BY_REGION = 1 << 0,
        DEVICE_GROUP = 1 << 2,
        VIEW_LOCAL = 1 << 1,
    }
}

vk_flags! {
    pub struct StencilFaceFlags(u32) {
        /// Front face
        FRONT = 1 << 0,
        /// Back face
        BACK = 1 << 1,
        /// Front and back faces
        FRONT_AND_BACK = 0x0000_0003,
    }
}

vk_flags! {
    pub struct SparseImageFormatFlags(u32) {
        /// Image uses a single mip tail region for all array layers
        SINGLE_MIPTAIL = 1 << 0,
        /// Image requires mip level dimensions to be an integer multiple of the sparse image block dimensions for non-tail mip levels.
        ALIGNED_MIP_SIZE = 1 << 1,
        /// Image uses a non-standard sparse image block dimensions
        NONSTANDARD_BLOCK_SIZE = 1 << 2,
    }
}

vk_flags! {
    pub struct SparseMemoryBindFlags(u32) {
        /// Operation binds resource metadata to memory
        METADATA = 1 << 0,
    }
}

vk_flags! {
    pub struct PipelineVertexInputStateCreateFlags(u32) {}
}

vk_flags! {
    pub struct PipelineInputAssemblyStateCreateFlags(u32) {}
}

vk_flags! {
    pub struct PipelineTessellationStateCreateFlags(u32) {}
}

vk_flags! {
    pub struct PipelineViewportStateCreateFlags(u32) {}
}

vk_flags! {
    pub struct PipelineRasterizationStateCreateFlags(u32) {}
}

vk_flags! {
    pub struct PipelineMultisampleStateCreateFlags(u32) {}
}

vk_flags! {
    pub struct PipelineDepthStencilStateCreateFlags(u32) {}
}

vk_flags! {
    pub struct PipelineColorBlendStateCreateFlags(u32) {}
}

vk_flags! {
    pub struct PipelineDynamicStateCreateFlags(u32) {}
}

vk_flags! {
    pub struct CullModeFlags(u32) {
        NONE = 0,
        FRONT = 1 << 0,
        BACK = 1 << 1,
        FRONT_AND_BACK = 0x0000_0003,
    }
}

vk_flags! {
    pub struct ColorComponentFlags(u32) {
        R = 1 << 0,
        G = 1 << 1,
        B = 1 << 2,
        A = 1 << 3,
    }
}

vk_flags! {
    pub struct FramebufferCreateFlags(u32) {
        IMAGELESS = 1 << 0,
    }
}

vk_flags! {
    pub struct RenderPassCreateFlags(u32) {}
}

vk_flags! {
    pub struct AttachmentDescriptionFlags(u32) {
        /// The attachment may alias physical memory of another attachment in the same render pass
        MAY_ALIAS = 1 << 0,
    }
}

vk_flags! {
    pub struct SubpassDescriptionFlags(u32) {}
}

// VERSION_1_1

vk_flags! {
    pub struct PeerMemoryFeatureFlags(u32) {
        /// Can read with vkCmdCopy commands
        COPY_SRC = 1 << 0,
        /// Can write with vkCmdCopy commands
        COPY_DST = 1 << 1,
        /// Can read with any access type/command
        GENERIC_SRC = 1 << 2,
        /// Can write with and access type/command
        GENERIC_DST = 1 << 3,
    }
}

vk_flags! {
    pub struct ExternalMemoryHandleTypeFlags(u32) {
        OPAQUE_FD = 1 << 0,
        OPAQUE_WIN32 = 1 << 1,
        OPAQUE_WIN32_KMT = 1 << 2,
        D3D11_TEXTURE = 1 << 3,
        D3D11_TEXTURE_KMT = 1 << 4,
        D3D12_HEAP = 1 << 5,
        D3D12_RESOURCE = 1 << 6,
    }
}

vk_flags! {
    pub struct ExternalMemoryFeatureFlags(u32) {
        DEDICATED_ONLY = 1 << 0,
        EXPORTABLE = 1 << 1,
        IMPORTABLE = 1 << 2,
    }
}

vk_flags! {
    pub struct ExternalFenceHandleTypeFlags(u32) {
        OPAQUE_FD = 1 << 0,
        OPAQUE_WIN32 = 1 << 1,
        OPAQUE_WIN32_KMT = 1 << 2,
        SYNC_FD = 1 << 3,
    }
}

vk_flags! {
    pub struct ExternalFenceFeatureFlags(u32) {
        EXPORTABLE = 1 << 0,
        IMPORTABLE = 1 << 1,
    }
}

vk_flags! {
    pub struct ExternalSemaphoreHandleTypeFlags(u32) {
        OPAQUE_FD = 1 << 0,
        OPAQUE_WIN32 = 1 << 1,
        OPAQUE_WIN32_KMT = 1 << 2,
        D3D12_FENCE = 1 << 3,
        SYNC_FD = 1 << 4,
    }
}

vk_flags! {
    pub struct ExternalSemaphoreFeatureFlags(u32) {
        EXPORTABLE = 1 << 0,
        IMPORTABLE = 1 << 1,
    }
}

vk_flags! {
    pub struct DescriptorUpdateTemplateCreateFlags(u32) {}
}

// VERSION_1_3

vk_flags! {
    pub struct PipelineStageFlags2(u64) {
        NONE = 0,
        TOP_OF_PIPE = 1 << 0,
        DRAW_INDIRECT = 1 << 1,
        VERTEX_INPUT = 1 << 2,
        VERTEX_SHADER = 1 << 3,
        FRAGMENT_SHADER = 1 << 7,
        EARLY_FRAGMENT_TESTS = 1 << 8,
        LATE_FRAGMENT_TESTS = 1 << 9,
        COLOR_ATTACHMENT_OUTPUT = 1 << 10,
        COMPUTE_SHADER = 1 << 11,
        ALL_TRANSFER = 1 << 12,
        BOTTOM_OF_PIPE = 1 << 13,
        HOST = 1 << 14,
        ALL_GRAPHICS = 1 << 15,
        ALL_COMMANDS = 1 << 16,
        COPY = 1 << 32,
        RESOLVE = 1 << 33,
        BLIT = 1 << 34,
        CLEAR = 1 << 35,
        INDEX_INPUT = 1 << 36,
        VERTEX_ATTRIBUTE_INPUT = 1 << 37,
        PRE_RASTERIZATION_SHADERS = 1 << 38,
    }
}

vk_flags! {
    pub struct AccessFlags2(u64) {
        NONE = 0,
        INDIRECT_COMMAND_READ = 1 << 0,
        INDEX_READ = 1 << 1,
        VERTEX_ATTRIBUTE_READ = 1 << 2,
        UNIFORM_READ = 1 << 3,
        INPUT_ATTACHMENT_READ = 1 << 4,
        SHADER_READ = 1 << 5,
        SHADER_WRITE = 1 << 6,
        COLOR_ATTACHMENT_READ = 1 << 7,
        COLOR_ATTACHMENT_WRITE = 1 << 8,
        DEPTH_STENCIL_ATTACHMENT_READ = 1 << 9,
        DEPTH_STENCIL_ATTACHMENT_WRITE = 1 << 10,
        TRANSFER_READ = 1 << 11,
        TRANSFER_WRITE = 1 << 12,
        HOST_READ = 1 << 13,
        HOST_WRITE = 1 << 14,
        MEMORY_READ = 1 << 15,
        MEMORY_WRITE = 1 << 16,
        SHADER_SAMPLED_READ = 1 << 32,
        SHADER_STORAGE_READ = 1 << 33,
        SHADER_STORAGE_WRITE = 1 << 34,
    }
}

vk_flags! {
    pub struct SubmitFlags(u32) {
        PROTECTED = 1 << 0,
    }
}

vk_flags! {
    pub struct RenderingFlags(u32) {
        CONTENTS_SECONDARY_COMMAND_BUFFERS = 1 << 0,
        SUSPENDING = 1 << 1,
        RESUMING = 1 << 2,
    }
}

vk_flags! {
    pub struct ResolveModeFlags(u32) {
        NONE = 0,
        SAMPLE_ZERO = 1 << 0,
        AVERAGE = 1 << 1,
        MIN = 1 << 2,
        MAX = 1 << 3,
    }
}

vk_flags! {
    pub struct PrivateDataSlotCreateFlags(u32) {}
}

vk_flags! {
    pub struct ToolPurposeFlags(u32) {
        VALIDATION = 1 << 0,
        PROFILING = 1 << 1,
        TRACING = 1 << 2,
        ADDITIONAL_FEATURES = 1 << 3,
        MODIFYING_FEATURES = 1 << 4,
        DEBUG_REPORTING_EXT = 1 << 5,
        DEBUG_MARKERS_EXT = 1 << 6,
    }
}

// VK_KHR_surface

vk_flags! {
    pub struct SurfaceTransformFlagsKHR(u32) {
        IDENTITY = 1 << 0,
        ROTATE_90 = 1 << 1,
        ROTATE_180 = 1 << 2,
        ROTATE_270 = 1 << 3,
        HORIZONTAL_MIRROR = 1 << 4,
        HORIZONTAL_MIRROR_ROTATE_90 = 1 << 5,
        HORIZONTAL_MIRROR_ROTATE_180 = 1 << 6,
        HORIZONTAL_MIRROR_ROTATE_270 = 1 << 7,
        INHERIT = 1 << 8,
    }
}

vk_flags! {
    pub struct CompositeAlphaFlagsKHR(u32) {
        OPAQUE = 1 << 0,
        PRE_MULTIPLIED = 1 << 1,
        POST_MULTIPLIED = 1 << 2,
        INHERIT = 1 << 3,
    }
}

// VK_KHR_swapchain

vk_flags! {
    pub struct SwapchainCreateFlagsKHR(u32) {
        /// Allow images with VK_IMAGE_CREATE_SPLIT_INSTANCE_BIND_REGIONS
        SPLIT_INSTANCE_BIND_REGIONS = 1 << 0,
        /// Swapchain is protected
        PROTECTED = 1 << 1,
        MUTABLE_FORMAT = 1 << 2,
    }
}

// VK_EXT_debug_utils

vk_flags! {
    pub struct DebugUtilsMessengerCreateFlagsEXT(u32) {}
}

vk_flags! {
    pub struct DebugUtilsMessengerCallbackDataFlagsEXT(u32) {}
}

vk_flags! {
    pub struct DebugUtilsMessageSeverityFlagsEXT(u32) {
        VERBOSE = 1 << 0,
        INFO = 1 << 4,
        WARNING = 1 << 8,
        ERROR = 1 << 12,
    }
}

vk_flags! {
    pub struct DebugUtilsMessageTypeFlagsEXT(u32) {
        GENERAL = 1 << 0,
        VALIDATION = 1 << 1,
        PERFORMANCE = 1 << 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_set_operations() {
        let mut usage = BufferUsageFlags::TRANSFER_DST | BufferUsageFlags::STORAGE_BUFFER;
        assert!(usage.contains(BufferUsageFlags::TRANSFER_DST));
        assert!(!usage.contains(BufferUsageFlags::TRANSFER_DST | BufferUsageFlags::INDEX_BUFFER));
        assert!(usage.intersects(BufferUsageFlags::TRANSFER_DST | BufferUsageFlags::INDEX_BUFFER));
        usage &= BufferUsageFlags::STORAGE_BUFFER;
        assert_eq!(usage, BufferUsageFlags::STORAGE_BUFFER);
        usage |= BufferUsageFlags::SHADER_DEVICE_ADDRESS;
        assert_eq!(usage.as_raw(), (1 << 5) | (1 << 17));
        assert!(BufferUsageFlags::default().is_empty());
    }

    #[test]
    fn wide_flags_keep_high_bits() {
        let stages = PipelineStageFlags2::COPY | PipelineStageFlags2::COMPUTE_SHADER;
        assert_eq!(stages.as_raw(), (1 << 32) | (1 << 11));
        assert!(stages.contains(PipelineStageFlags2::NONE));
    }

    #[test]
    fn flags_debug_lists_names_then_unknown_bits() {
        assert_eq!(
            format!("{:?}", QueueFlags::GRAPHICS | QueueFlags::TRANSFER),
            "QueueFlags(GRAPHICS | TRANSFER)"
        );
        assert_eq!(
            format!("{:?}", FenceCreateFlags::from_raw(0b11)),
            "FenceCreateFlags(SIGNALED | 0x2)"
        );
        assert_eq!(format!("{:?}", DeviceCreateFlags::empty()), "DeviceCreateFlags(0x0)");
    }
}
