vk_enum! {
    #[must_use]
    pub struct Result {
        /// Command completed successfully
        SUCCESS = 0,
        /// A fence or query has not yet completed
        NOT_READY = 1,
        /// A wait operation has not completed in the specified time
        TIMEOUT = 2,
        /// An event is signaled
        EVENT_SET = 3,
        /// An event is unsignaled
        EVENT_RESET = 4,
        /// A return array was too small for the result
        INCOMPLETE = 5,
        /// A host memory allocation has failed
        ERROR_OUT_OF_HOST_MEMORY = -1,
        /// A device memory allocation has failed
        ERROR_OUT_OF_DEVICE_MEMORY = -2,
        /// Initialization of an object has failed
        ERROR_INITIALIZATION_FAILED = -3,
        /// The logical device has been lost.
        ERROR_DEVICE_LOST = -4,
        /// Mapping of a memory object has failed
        ERROR_MEMORY_MAP_FAILED = -5,
        /// Layer specified does not exist
        ERROR_LAYER_NOT_PRESENT = -6,
        /// Extension specified does not exist
        ERROR_EXTENSION_NOT_PRESENT = -7,
        /// Requested feature is not available on this device
        ERROR_FEATURE_NOT_PRESENT = -8,
        /// Unable to find a Vulkan driver
        ERROR_INCOMPATIBLE_DRIVER = -9,
        /// Too many objects of the type have already been created
        ERROR_TOO_MANY_OBJECTS = -10,
        /// Requested format is not supported on this device
        ERROR_FORMAT_NOT_SUPPORTED = -11,
        /// A requested pool allocation has failed due to fragmentation of the pool's memory
        ERROR_FRAGMENTED_POOL = -12,
        /// An unknown error has occurred, due to an implementation or application bug
        ERROR_UNKNOWN = -13,
        ERROR_OUT_OF_POOL_MEMORY = -1000069000,
        ERROR_INVALID_EXTERNAL_HANDLE = -1000072003,
        ERROR_FRAGMENTATION = -1000161000,
        ERROR_INVALID_OPAQUE_CAPTURE_ADDRESS = -1000257000,
        PIPELINE_COMPILE_REQUIRED = 1000297000,
        ERROR_SURFACE_LOST_KHR = -1000000000,
        ERROR_NATIVE_WINDOW_IN_USE_KHR = -1000000001,
        SUBOPTIMAL_KHR = 1000001003,
        ERROR_OUT_OF_DATE_KHR = -1000001004,
        ERROR_VALIDATION_FAILED_EXT = -1000011001,
    }
}

impl Result {
    #[inline]
    pub const fn is_success(self) -> bool {
        self.0 == Self::SUCCESS.0
    }

    /// Negative codes are errors, positive ones are non-fatal status codes.
    #[inline]
    pub const fn is_error(self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub fn result(self) -> std::result::Result<(), Self> {
        if self.is_success() { Ok(()) } else { Err(self) }
    }

    #[inline]
    pub fn result_with_success<T>(self, value: T) -> std::result::Result<T, Self> {
        self.result().map(|()| value)
    }
}

impl std::fmt::Display for Result {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

impl std::error::Error for Result {}

vk_enum! {
    pub struct StructureType {
        APPLICATION_INFO = 0,
        INSTANCE_CREATE_INFO = 1,
        DEVICE_QUEUE_CREATE_INFO = 2,
        DEVICE_CREATE_INFO = 3,
        SUBMIT_INFO = 4,
        MEMORY_ALLOCATE_INFO = 5,
        MAPPED_MEMORY_RANGE = 6,
        BIND_SPARSE_INFO = 7,
        FENCE_CREATE_INFO = 8,
        SEMAPHORE_CREATE_INFO = 9,
        EVENT_CREATE_INFO = 10,
        QUERY_POOL_CREATE_INFO = 11,
        BUFFER_CREATE_INFO = 12,
        BUFFER_VIEW_CREATE_INFO = 13,
        IMAGE_CREATE_INFO = 14,
        IMAGE_VIEW_CREATE_INFO = 15,
        SHADER_MODULE_CREATE_INFO = 16,
        PIPELINE_CACHE_CREATE_INFO = 17,
        PIPELINE_SHADER_STAGE_CREATE_INFO = 18,
        PIPELINE_VERTEX_INPUT_STATE_CREATE_INFO = 19,
        PIPELINE_INPUT_ASSEMBLY_STATE_CREATE_INFO = 20,
        PIPELINE_TESSELLATION_STATE_CREATE_INFO = 21,
        PIPELINE_VIEWPORT_STATE_CREATE_INFO = 22,
        PIPELINE_RASTERIZATION_STATE_CREATE_INFO = 23,
        PIPELINE_MULTISAMPLE_STATE_CREATE_INFO = 24,
        PIPELINE_DEPTH_STENCIL_STATE_CREATE_INFO = 25,
        PIPELINE_COLOR_BLEND_STATE_CREATE_INFO = 26,
        PIPELINE_DYNAMIC_STATE_CREATE_INFO = 27,
        GRAPHICS_PIPELINE_CREATE_INFO = 28,
        COMPUTE_PIPELINE_CREATE_INFO = 29,
        PIPELINE_LAYOUT_CREATE_INFO = 30,
        SAMPLER_CREATE_INFO = 31,
        DESCRIPTOR_SET_LAYOUT_CREATE_INFO = 32,
        DESCRIPTOR_POOL_CREATE_INFO = 33,
        DESCRIPTOR_SET_ALLOCATE_INFO = 34,
        WRITE_DESCRIPTOR_SET = 35,
        COPY_DESCRIPTOR_SET = 36,
        FRAMEBUFFER_CREATE_INFO = 37,
        RENDER_PASS_CREATE_INFO = 38,
        COMMAND_POOL_CREATE_INFO = 39,
        COMMAND_BUFFER_ALLOCATE_INFO = 40,
        COMMAND_BUFFER_INHERITANCE_INFO = 41,
        COMMAND_BUFFER_BEGIN_INFO = 42,
        RENDER_PASS_BEGIN_INFO = 43,
        BUFFER_MEMORY_BARRIER = 44,
        IMAGE_MEMORY_BARRIER = 45,
        MEMORY_BARRIER = 46,

        // VERSION_1_1
        PHYSICAL_DEVICE_FEATURES_2 = 1000059000,
        PHYSICAL_DEVICE_PROPERTIES_2 = 1000059001,
        FORMAT_PROPERTIES_2 = 1000059002,
        IMAGE_FORMAT_PROPERTIES_2 = 1000059003,
        PHYSICAL_DEVICE_IMAGE_FORMAT_INFO_2 = 1000059004,
        QUEUE_FAMILY_PROPERTIES_2 = 1000059005,
        PHYSICAL_DEVICE_MEMORY_PROPERTIES_2 = 1000059006,
        SPARSE_IMAGE_FORMAT_PROPERTIES_2 = 1000059007,
        PHYSICAL_DEVICE_SPARSE_IMAGE_FORMAT_INFO_2 = 1000059008,
        PHYSICAL_DEVICE_GROUP_PROPERTIES = 1000070000,
        PHYSICAL_DEVICE_EXTERNAL_BUFFER_INFO = 1000071002,
        EXTERNAL_BUFFER_PROPERTIES = 1000071003,
        PHYSICAL_DEVICE_EXTERNAL_SEMAPHORE_INFO = 1000076000,
        EXTERNAL_SEMAPHORE_PROPERTIES = 1000076001,
        DESCRIPTOR_UPDATE_TEMPLATE_CREATE_INFO = 1000085000,
        PHYSICAL_DEVICE_EXTERNAL_FENCE_INFO = 1000112000,
        EXTERNAL_FENCE_PROPERTIES = 1000112001,
        DEVICE_QUEUE_INFO_2 = 1000145003,
        BUFFER_MEMORY_REQUIREMENTS_INFO_2 = 1000146000,
        IMAGE_MEMORY_REQUIREMENTS_INFO_2 = 1000146001,
        IMAGE_SPARSE_MEMORY_REQUIREMENTS_INFO_2 = 1000146002,
        MEMORY_REQUIREMENTS_2 = 1000146003,
        SPARSE_IMAGE_MEMORY_REQUIREMENTS_2 = 1000146004,
        SAMPLER_YCBCR_CONVERSION_CREATE_INFO = 1000156000,
        BIND_BUFFER_MEMORY_INFO = 1000157000,
        BIND_IMAGE_MEMORY_INFO = 1000157001,
        DESCRIPTOR_SET_LAYOUT_SUPPORT = 1000168001,

        // VERSION_1_2
        ATTACHMENT_DESCRIPTION_2 = 1000109000,
        ATTACHMENT_REFERENCE_2 = 1000109001,
        SUBPASS_DESCRIPTION_2 = 1000109002,
        SUBPASS_DEPENDENCY_2 = 1000109003,
        RENDER_PASS_CREATE_INFO_2 = 1000109004,
        SUBPASS_BEGIN_INFO = 1000109005,
        SUBPASS_END_INFO = 1000109006,
        SEMAPHORE_TYPE_CREATE_INFO = 1000207002,
        SEMAPHORE_WAIT_INFO = 1000207004,
        SEMAPHORE_SIGNAL_INFO = 1000207005,
        BUFFER_DEVICE_ADDRESS_INFO = 1000244001,
        DEVICE_MEMORY_OPAQUE_CAPTURE_ADDRESS_INFO = 1000257004,

        // VERSION_1_3
        RENDERING_INFO = 1000044000,
        RENDERING_ATTACHMENT_INFO = 1000044001,
        PHYSICAL_DEVICE_TOOL_PROPERTIES = 1000245000,
        PRIVATE_DATA_SLOT_CREATE_INFO = 1000295001,
        MEMORY_BARRIER_2 = 1000314000,
        BUFFER_MEMORY_BARRIER_2 = 1000314001,
        IMAGE_MEMORY_BARRIER_2 = 1000314002,
        DEPENDENCY_INFO = 1000314003,
        SUBMIT_INFO_2 = 1000314004,
        SEMAPHORE_SUBMIT_INFO = 1000314005,
        COMMAND_BUFFER_SUBMIT_INFO = 1000314006,
        COPY_BUFFER_INFO_2 = 1000337000,
        COPY_IMAGE_INFO_2 = 1000337001,
        COPY_BUFFER_TO_IMAGE_INFO_2 = 1000337002,
        COPY_IMAGE_TO_BUFFER_INFO_2 = 1000337003,
        BLIT_IMAGE_INFO_2 = 1000337004,
        RESOLVE_IMAGE_INFO_2 = 1000337005,
        BUFFER_COPY_2 = 1000337006,
        IMAGE_COPY_2 = 1000337007,
        IMAGE_BLIT_2 = 1000337008,
        BUFFER_IMAGE_COPY_2 = 1000337009,
        IMAGE_RESOLVE_2 = 1000337010,
        DEVICE_BUFFER_MEMORY_REQUIREMENTS = 1000413002,
        DEVICE_IMAGE_MEMORY_REQUIREMENTS = 1000413003,

        // VK_KHR_swapchain
        SWAPCHAIN_CREATE_INFO_KHR = 1000001000,
        PRESENT_INFO_KHR = 1000001001,

        // VK_EXT_debug_utils
        DEBUG_UTILS_OBJECT_NAME_INFO_EXT = 1000128000,
        DEBUG_UTILS_OBJECT_TAG_INFO_EXT = 1000128001,
        DEBUG_UTILS_LABEL_EXT = 1000128002,
        DEBUG_UTILS_MESSENGER_CALLBACK_DATA_EXT = 1000128003,
        DEBUG_UTILS_MESSENGER_CREATE_INFO_EXT = 1000128004,
    }
}

vk_enum! {
    pub struct SystemAllocationScope {
        COMMAND = 0,
        OBJECT = 1,
        CACHE = 2,
        DEVICE = 3,
        INSTANCE = 4,
    }
}

vk_enum! {
    pub struct InternalAllocationType {
        EXECUTABLE = 0,
    }
}

vk_enum! {
    pub struct PhysicalDeviceType {
        OTHER = 0,
        INTEGRATED_GPU = 1,
        DISCRETE_GPU = 2,
        VIRTUAL_GPU = 3,
        CPU = 4,
    }
}

vk_enum! {
    pub struct Format {
        UNDEFINED = 0,
        R8_UNORM = 9,
        R8G8B8A8_UNORM = 37,
        R8G8B8A8_SRGB = 43,
        B8G8R8A8_UNORM = 44,
        B8G8R8A8_SRGB = 50,
        A2B10G10R10_UNORM_PACK32 = 64,
        R16G16B16A16_SFLOAT = 97,
        R32_UINT = 98,
        R32_SFLOAT = 100,
        R32G32_SFLOAT = 103,
        R32G32B32_SFLOAT = 106,
        R32G32B32A32_SFLOAT = 109,
        D16_UNORM = 124,
        D32_SFLOAT = 126,
        D24_UNORM_S8_UINT = 129,
        D32_SFLOAT_S8_UINT = 130,
        BC7_UNORM_BLOCK = 145,
        BC7_SRGB_BLOCK = 146,
    }
}

vk_enum! {
    pub struct ImageType {
        TYPE_1D = 0,
        TYPE_2D = 1,
        TYPE_3D = 2,
    }
}

vk_enum! {
    pub struct ImageTiling {
        OPTIMAL = 0,
        LINEAR = 1,
    }
}

vk_enum! {
    pub struct ImageViewType {
        TYPE_1D = 0,
        TYPE_2D = 1,
        TYPE_3D = 2,
        CUBE = 3,
        TYPE_1D_ARRAY = 4,
        TYPE_2D_ARRAY = 5,
        CUBE_ARRAY = 6,
    }
}

vk_enum! {
    pub struct ImageLayout {
        /// Implicit layout an image is when its contents are undefined due to various reasons (e.g. right after creation)
        UNDEFINED = 0,
        /// General layout when image can be used for any kind of access
        GENERAL = 1,
        COLOR_ATTACHMENT_OPTIMAL = 2,
        DEPTH_STENCIL_ATTACHMENT_OPTIMAL = 3,
        DEPTH_STENCIL_READ_ONLY_OPTIMAL = 4,
        SHADER_READ_ONLY_OPTIMAL = 5,
        TRANSFER_SRC_OPTIMAL = 6,
        TRANSFER_DST_OPTIMAL = 7,
        /// Initial layout used when the data is populated by the CPU
        PREINITIALIZED = 8,
        READ_ONLY_OPTIMAL = 1000314000,
        ATTACHMENT_OPTIMAL = 1000314001,
        PRESENT_SRC_KHR = 1000001002,
    }
}

vk_enum! {
    pub struct SharingMode {
        EXCLUSIVE = 0,
        CONCURRENT = 1,
    }
}

vk_enum! {
    pub struct ComponentSwizzle {
        IDENTITY = 0,
        ZERO = 1,
        ONE = 2,
        R = 3,
        G = 4,
        B = 5,
        A = 6,
    }
}

vk_enum! {
    pub struct IndexType {
        UINT16 = 0,
        UINT32 = 1,
    }
}

vk_enum! {
    pub struct PipelineBindPoint {
        GRAPHICS = 0,
        COMPUTE = 1,
    }
}

vk_enum! {
    pub struct CommandBufferLevel {
        PRIMARY = 0,
        SECONDARY = 1,
    }
}

vk_enum! {
    pub struct DescriptorType {
        SAMPLER = 0,
        COMBINED_IMAGE_SAMPLER = 1,
        SAMPLED_IMAGE = 2,
        STORAGE_IMAGE = 3,
        UNIFORM_TEXEL_BUFFER = 4,
        STORAGE_TEXEL_BUFFER = 5,
        UNIFORM_BUFFER = 6,
        STORAGE_BUFFER = 7,
        UNIFORM_BUFFER_DYNAMIC = 8,
        STORAGE_BUFFER_DYNAMIC = 9,
        INPUT_ATTACHMENT = 10,
    }
}

vk_enum! {
    pub struct Filter {
        NEAREST = 0,
        LINEAR = 1,
    }
}

vk_enum! {
    pub struct SamplerMipmapMode {
        /// Choose nearest mip level
        NEAREST = 0,
        /// Linear filter between mip levels
        LINEAR = 1,
    }
}

vk_enum! {
    pub struct SamplerAddressMode {
        REPEAT = 0,
        MIRRORED_REPEAT = 1,
        CLAMP_TO_EDGE = 2,
        CLAMP_TO_BORDER = 3,
        MIRROR_CLAMP_TO_EDGE = 4,
    }
}

vk_enum! {
    pub struct CompareOp {
        NEVER = 0,
        LESS = 1,
        EQUAL = 2,
        LESS_OR_EQUAL = 3,
        GREATER = 4,
        NOT_EQUAL = 5,
        GREATER_OR_EQUAL = 6,
        ALWAYS = 7,
    }
}

vk_enum! {
    pub struct BorderColor {
        FLOAT_TRANSPARENT_BLACK = 0,
        INT_TRANSPARENT_BLACK = 1,
        FLOAT_OPAQUE_BLACK = 2,
        INT_OPAQUE_BLACK = 3,
        FLOAT_OPAQUE_WHITE = 4,
        INT_OPAQUE_WHITE = 5,
    }
}

vk_enum! {
    pub struct QueryType {
        OCCLUSION = 0,
        /// Optional
        PIPELINE_STATISTICS = 1,
        TIMESTAMP = 2,
    }
}

vk_enum! {
    pub struct ObjectType {
        UNKNOWN = 0,
        INSTANCE = 1,
        PHYSICAL_DEVICE = 2,
        DEVICE = 3,
        QUEUE = 4,
        SEMAPHORE = 5,
        COMMAND_BUFFER = 6,
        FENCE = 7,
        DEVICE_MEMORY = 8,
        BUFFER = 9,
        IMAGE = 10,
        EVENT = 11,
        QUERY_POOL = 12,
        BUFFER_VIEW = 13,
        IMAGE_VIEW = 14,
        SHADER_MODULE = 15,
        PIPELINE_CACHE = 16,
        PIPELINE_LAYOUT = 17,
        RENDER_PASS = 18,
        PIPELINE = 19,
        DESCRIPTOR_SET_LAYOUT = 20,
        SAMPLER = 21,
        DESCRIPTOR_POOL = 22,
        DESCRIPTOR_SET = 23,
        FRAMEBUFFER = 24,
        COMMAND_POOL = 25,
        SAMPLER_YCBCR_CONVERSION = 1000156000,
        DESCRIPTOR_UPDATE_TEMPLATE = 1000085000,
        PRIVATE_DATA_SLOT = 1000295000,
        SURFACE_KHR = 1000000000,
        SWAPCHAIN_KHR = 1000001000,
        DEBUG_UTILS_MESSENGER_EXT = 1000128000,
    }
}

vk_enum! {
    pub struct AttachmentLoadOp {
        LOAD = 0,
        CLEAR = 1,
        DONT_CARE = 2,
    }
}

vk_enum! {
    pub struct AttachmentStoreOp {
        STORE = 0,
        DONT_CARE = 1,
        NONE = 1000301000,
    }
}

vk_enum! {
    pub struct VertexInputRate {
        VERTEX = 0,
        INSTANCE = 1,
    }
}

vk_enum! {
    pub struct PrimitiveTopology {
        POINT_LIST = 0,
        LINE_LIST = 1,
        LINE_STRIP = 2,
        TRIANGLE_LIST = 3,
        TRIANGLE_STRIP = 4,
        TRIANGLE_FAN = 5,
        LINE_LIST_WITH_ADJACENCY = 6,
        LINE_STRIP_WITH_ADJACENCY = 7,
        TRIANGLE_LIST_WITH_ADJACENCY = 8,
        TRIANGLE_STRIP_WITH_ADJACENCY = 9,
        PATCH_LIST = 10,
    }
}

vk_enum! {
    pub struct PolygonMode {
        FILL = 0,
        LINE = 1,
        POINT = 2,
    }
}

vk_enum! {
    pub struct FrontFace {
        COUNTER_CLOCKWISE = 0,
        CLOCKWISE = 1,
    }
}

vk_enum! {
    pub struct StencilOp {
        KEEP = 0,
        ZERO = 1,
        REPLACE = 2,
        INCREMENT_AND_CLAMP = 3,
        DECREMENT_AND_CLAMP = 4,
        INVERT = 5,
        INCREMENT_AND_WRAP = 6,
        DECREMENT_AND_WRAP = 7,
    }
}

vk_enum! {
    pub struct LogicOp {
        CLEAR = 0,
        AND = 1,
        AND_REVERSE = 2,
        COPY = 3,
        AND_INVERTED = 4,
        NO_OP = 5,
        XOR = 6,
        OR = 7,
        NOR = 8,
        EQUIVALENT = 9,
        INVERT = 10,
        OR_REVERSE = 11,
        COPY_INVERTED = 12,
        OR_INVERTED = 13,
        NAND = 14,
        SET = 15,
    }
}

vk_enum! {
    pub struct BlendFactor {
        ZERO = 0,
        ONE = 1,
        SRC_COLOR = 2,
        ONE_MINUS_SRC_COLOR = 3,
        DST_COLOR = 4,
        ONE_MINUS_DST_COLOR = 5,
        SRC_ALPHA = 6,
        ONE_MINUS_SRC_ALPHA = 7,
        DST_ALPHA = 8,
        ONE_MINUS_DST_ALPHA = 9,
        CONSTANT_COLOR = 10,
        ONE_MINUS_CONSTANT_COLOR = 11,
        CONSTANT_ALPHA = 12,
        ONE_MINUS_CONSTANT_ALPHA = 13,
        SRC_ALPHA_SATURATE = 14,
        SRC1_COLOR = 15,
        ONE_MINUS_SRC1_COLOR = 16,
        SRC1_ALPHA = 17,
        ONE_MINUS_SRC1_ALPHA = 18,
    }
}

vk_enum! {
    pub struct BlendOp {
        ADD = 0,
        SUBTRACT = 1,
        REVERSE_SUBTRACT = 2,
        MIN = 3,
        MAX = 4,
    }
}

vk_enum! {
    pub struct DynamicState {
        VIEWPORT = 0,
        SCISSOR = 1,
        LINE_WIDTH = 2,
        DEPTH_BIAS = 3,
        BLEND_CONSTANTS = 4,
        DEPTH_BOUNDS = 5,
        STENCIL_COMPARE_MASK = 6,
        STENCIL_WRITE_MASK = 7,
        STENCIL_REFERENCE = 8,
        CULL_MODE = 1000267000,
        FRONT_FACE = 1000267001,
        PRIMITIVE_TOPOLOGY = 1000267002,
        VIEWPORT_WITH_COUNT = 1000267003,
        SCISSOR_WITH_COUNT = 1000267004,
        VERTEX_INPUT_BINDING_STRIDE = 1000267005,
        DEPTH_TEST_ENABLE = 1000267006,
        DEPTH_WRITE_ENABLE = 1000267007,
        DEPTH_COMPARE_OP = 1000267008,
        DEPTH_BOUNDS_TEST_ENABLE = 1000267009,
        STENCIL_TEST_ENABLE = 1000267010,
        STENCIL_OP = 1000267011,
        RASTERIZER_DISCARD_ENABLE = 1000377001,
        DEPTH_BIAS_ENABLE = 1000377002,
        PRIMITIVE_RESTART_ENABLE = 1000377004,
    }
}

vk_enum! {
    pub struct SubpassContents {
        INLINE = 0,
        SECONDARY_COMMAND_BUFFERS = 1,
    }
}

// VERSION_1_1

vk_enum! {
    pub struct SamplerYcbcrModelConversion {
        RGB_IDENTITY = 0,
        /// just range expansion
        YCBCR_IDENTITY = 1,
        /// aka HD YUV
        YCBCR_709 = 2,
        /// aka SD YUV
        YCBCR_601 = 3,
        /// aka UHD YUV
        YCBCR_2020 = 4,
    }
}

vk_enum! {
    pub struct SamplerYcbcrRange {
        /// Luma 0..1 maps to 0..255, chroma -0.5..0.5 to 1..255 (clamped)
        ITU_FULL = 0,
        /// Luma 0..1 maps to 16..235, chroma -0.5..0.5 to 16..240
        ITU_NARROW = 1,
    }
}

vk_enum! {
    pub struct ChromaLocation {
        COSITED_EVEN = 0,
        MIDPOINT = 1,
    }
}

vk_enum! {
    pub struct DescriptorUpdateTemplateType {
        /// Create descriptor update template for descriptor set updates
        DESCRIPTOR_SET = 0,
        PUSH_DESCRIPTORS_KHR = 1,
    }
}

vk_enum! {
    pub struct PresentModeKHR {
        IMMEDIATE = 0,
        MAILBOX = 1,
        FIFO = 2,
        FIFO_RELAXED = 3,
    }
}

vk_enum! {
    pub struct SemaphoreType {
        BINARY = 0,
        TIMELINE = 1,
    }
}

vk_enum! {
    pub struct ColorSpaceKHR {
        SRGB_NONLINEAR = 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_classification() {
        assert!(Result::SUCCESS.is_success());
        assert!(Result::SUCCESS.result().is_ok());
        assert!(!Result::INCOMPLETE.is_error());
        assert_eq!(Result::INCOMPLETE.result(), Err(Result::INCOMPLETE));
        assert!(Result::ERROR_DEVICE_LOST.is_error());
        assert_eq!(Result::SUBOPTIMAL_KHR.result_with_success(7), Err(Result::SUBOPTIMAL_KHR));
        assert_eq!(Result::SUCCESS.result_with_success(7), Ok(7));
    }

    #[test]
    fn enum_debug_names_known_and_unknown_values() {
        assert_eq!(format!("{:?}", Result::ERROR_OUT_OF_DATE_KHR), "ERROR_OUT_OF_DATE_KHR");
        assert_eq!(format!("{}", Result::TIMEOUT), "TIMEOUT");
        assert_eq!(format!("{:?}", Format::from_raw(12345)), "Format(12345)");
        assert_eq!(ImageLayout::default(), ImageLayout::UNDEFINED);
    }
}
