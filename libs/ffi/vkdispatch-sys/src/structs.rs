use std::{
    ffi::{CStr, c_void},
    os::raw::c_char,
};

use super::*;

fn cstr_from_array(array: &[c_char]) -> Option<&CStr> {
    // SAFETY: `c_char` and `u8` have the same layout.
    let bytes = unsafe { std::slice::from_raw_parts(array.as_ptr().cast::<u8>(), array.len()) };
    CStr::from_bytes_until_nul(bytes).ok()
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct AllocationCallbacks {
    pub user_data: *mut c_void,
    pub allocation: Option<FnAllocationFunction>,
    pub reallocation: Option<FnReallocationFunction>,
    pub free: Option<FnFreeFunction>,
    pub internal_allocation: Option<FnInternalAllocationNotification>,
    pub internal_free: Option<FnInternalFreeNotification>,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ApplicationInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub application_name: *const c_char,
    pub application_version: u32,
    pub engine_name: *const c_char,
    pub engine_version: u32,
    pub api_version: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct InstanceCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: InstanceCreateFlags,
    pub application_info: *const ApplicationInfo,
    pub enabled_layer_count: u32,
    pub enabled_layer_names: *const *const c_char,
    pub enabled_extension_count: u32,
    pub enabled_extension_names: *const *const c_char,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ExtensionProperties {
    pub extension_name: [c_char; MAX_EXTENSION_NAME_SIZE],
    pub spec_version: u32,
}

impl ExtensionProperties {
    /// Returns `None` if the driver did not nul terminate the name.
    pub fn name(&self) -> Option<&CStr> {
        cstr_from_array(&self.extension_name)
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct LayerProperties {
    pub layer_name: [c_char; MAX_EXTENSION_NAME_SIZE],
    pub spec_version: u32,
    pub implementation_version: u32,
    pub description: [c_char; MAX_DESCRIPTION_SIZE],
}

impl LayerProperties {
    pub fn name(&self) -> Option<&CStr> {
        cstr_from_array(&self.layer_name)
    }

    pub fn description(&self) -> Option<&CStr> {
        cstr_from_array(&self.description)
    }
}

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Offset2d {
    pub x: i32,
    pub y: i32,
}

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Offset3d {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Extent2d {
    pub width: u32,
    pub height: u32,
}

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Extent3d {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Rect2d {
    pub offset: Offset2d,
    pub extent: Extent2d,
}

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PhysicalDeviceFeatures {
    pub robust_buffer_access: Bool32,
    pub full_draw_index_uint32: Bool32,
    pub image_cube_array: Bool32,
    pub independent_blend: Bool32,
    pub geometry_shader: Bool32,
    pub tessellation_shader: Bool32,
    pub sample_rate_shading: Bool32,
    pub dual_src_blend: Bool32,
    pub logic_op: Bool32,
    pub multi_draw_indirect: Bool32,
    pub draw_indirect_first_instance: Bool32,
    pub depth_clamp: Bool32,
    pub depth_bias_clamp: Bool32,
    pub fill_mode_non_solid: Bool32,
    pub depth_bounds: Bool32,
    pub wide_lines: Bool32,
    pub large_points: Bool32,
    pub alpha_to_one: Bool32,
    pub multi_viewport: Bool32,
    pub sampler_anisotropy: Bool32,
    pub texture_compression_etc2: Bool32,
    pub texture_compression_astc_ldr: Bool32,
    pub texture_compression_bc: Bool32,
    pub occlusion_query_precise: Bool32,
    pub pipeline_statistics_query: Bool32,
    pub vertex_pipeline_stores_and_atomics: Bool32,
    pub fragment_stores_and_atomics: Bool32,
    pub shader_tessellation_and_geometry_point_size: Bool32,
    pub shader_image_gather_extended: Bool32,
    pub shader_storage_image_extended_formats: Bool32,
    pub shader_storage_image_multisample: Bool32,
    pub shader_storage_image_read_without_format: Bool32,
    pub shader_storage_image_write_without_format: Bool32,
    pub shader_uniform_buffer_array_dynamic_indexing: Bool32,
    pub shader_sampled_image_array_dynamic_indexing: Bool32,
    pub shader_storage_buffer_array_dynamic_indexing: Bool32,
    pub shader_storage_image_array_dynamic_indexing: Bool32,
    pub shader_clip_distance: Bool32,
    pub shader_cull_distance: Bool32,
    pub shader_float64: Bool32,
    pub shader_int64: Bool32,
    pub shader_int16: Bool32,
    pub shader_resource_residency: Bool32,
    pub shader_resource_min_lod: Bool32,
    pub sparse_binding: Bool32,
    pub sparse_residency_buffer: Bool32,
    pub sparse_residency_image_2d: Bool32,
    pub sparse_residency_image_3d: Bool32,
    pub sparse_residency2_samples: Bool32,
    pub sparse_residency4_samples: Bool32,
    pub sparse_residency8_samples: Bool32,
    pub sparse_residency16_samples: Bool32,
    pub sparse_residency_aliased: Bool32,
    pub variable_multisample_rate: Bool32,
    pub inherited_queries: Bool32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PhysicalDeviceFeatures2 {
    pub _type: StructureType,
    pub _next: *mut c_void,
    pub features: PhysicalDeviceFeatures,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PhysicalDeviceLimits {
    /// max 1D image dimension
    pub max_image_dimension_1d: u32,
    /// max 2D image dimension
    pub max_image_dimension_2d: u32,
    /// max 3D image dimension
    pub max_image_dimension_3d: u32,
    /// max cubemap image dimension
    pub max_image_dimension_cube: u32,
    /// max layers for image arrays
    pub max_image_array_layers: u32,
    /// max texel buffer size (fstexels)
    pub max_texel_buffer_elements: u32,
    /// max uniform buffer range (bytes)
    pub max_uniform_buffer_range: u32,
    /// max storage buffer range (bytes)
    pub max_storage_buffer_range: u32,
    /// max size of the push constants pool (bytes)
    pub max_push_constants_size: u32,
    /// max number of device memory allocations supported
    pub max_memory_allocation_count: u32,
    /// max number of samplers that can be allocated on a device
    pub max_sampler_allocation_count: u32,
    /// Granularity (in bytes) at which buffers and images can be bound to adjacent memory for simultaneous usage
    pub buffer_image_granularity: DeviceSize,
    /// Total address space available for sparse allocations (bytes)
    pub sparse_address_space_size: DeviceSize,
    /// max number of descriptors sets that can be bound to a pipeline
    pub max_bound_descriptor_sets: u32,
    pub max_per_stage_descriptor_samplers: u32,
    pub max_per_stage_descriptor_uniform_buffers: u32,
    pub max_per_stage_descriptor_storage_buffers: u32,
    pub max_per_stage_descriptor_sampled_images: u32,
    pub max_per_stage_descriptor_storage_images: u32,
    pub max_per_stage_descriptor_input_attachments: u32,
    pub max_per_stage_resources: u32,
    pub max_descriptor_set_samplers: u32,
    pub max_descriptor_set_uniform_buffers: u32,
    pub max_descriptor_set_uniform_buffers_dynamic: u32,
    pub max_descriptor_set_storage_buffers: u32,
    pub max_descriptor_set_storage_buffers_dynamic: u32,
    pub max_descriptor_set_sampled_images: u32,
    pub max_descriptor_set_storage_images: u32,
    pub max_descriptor_set_input_attachments: u32,
    pub max_vertex_input_attributes: u32,
    pub max_vertex_input_bindings: u32,
    pub max_vertex_input_attribute_offset: u32,
    pub max_vertex_input_binding_stride: u32,
    pub max_vertex_output_components: u32,
    pub max_tessellation_generation_level: u32,
    pub max_tessellation_patch_size: u32,
    pub max_tessellation_control_per_vertex_input_components: u32,
    pub max_tessellation_control_per_vertex_output_components: u32,
    pub max_tessellation_control_per_patch_output_components: u32,
    pub max_tessellation_control_total_output_components: u32,
    pub max_tessellation_evaluation_input_components: u32,
    pub max_tessellation_evaluation_output_components: u32,
    pub max_geometry_shader_invocations: u32,
    pub max_geometry_input_components: u32,
    pub max_geometry_output_components: u32,
    pub max_geometry_output_vertices: u32,
    pub max_geometry_total_output_components: u32,
    pub max_fragment_input_components: u32,
    pub max_fragment_output_attachments: u32,
    pub max_fragment_dual_src_attachments: u32,
    pub max_fragment_combined_output_resources: u32,
    pub max_compute_shared_memory_size: u32,
    pub max_compute_work_group_count: [u32; 3],
    pub max_compute_work_group_invocations: u32,
    pub max_compute_work_group_size: [u32; 3],
    pub sub_pixel_precision_bits: u32,
    pub sub_texel_precision_bits: u32,
    pub mipmap_precision_bits: u32,
    pub max_draw_indexed_index_value: u32,
    pub max_draw_indirect_count: u32,
    pub max_sampler_lod_bias: f32,
    pub max_sampler_anisotropy: f32,
    pub max_viewports: u32,
    pub max_viewport_dimensions: [u32; 2],
    pub viewport_bounds_range: [f32; 2],
    pub viewport_sub_pixel_bits: u32,
    pub min_memory_map_alignment: usize,
    pub min_texel_buffer_offset_alignment: DeviceSize,
    pub min_uniform_buffer_offset_alignment: DeviceSize,
    pub min_storage_buffer_offset_alignment: DeviceSize,
    pub min_texel_offset: i32,
    pub max_texel_offset: u32,
    pub min_texel_gather_offset: i32,
    pub max_texel_gather_offset: u32,
    pub min_interpolation_offset: f32,
    pub max_interpolation_offset: f32,
    pub sub_pixel_interpolation_offset_bits: u32,
    pub max_framebuffer_width: u32,
    pub max_framebuffer_height: u32,
    pub max_framebuffer_layers: u32,
    pub framebuffer_color_sample_counts: SampleCountFlags,
    pub framebuffer_depth_sample_counts: SampleCountFlags,
    pub framebuffer_stencil_sample_counts: SampleCountFlags,
    pub framebuffer_no_attachments_sample_counts: SampleCountFlags,
    pub max_color_attachments: u32,
    pub sampled_image_color_sample_counts: SampleCountFlags,
    pub sampled_image_integer_sample_counts: SampleCountFlags,
    pub sampled_image_depth_sample_counts: SampleCountFlags,
    pub sampled_image_stencil_sample_counts: SampleCountFlags,
    pub storage_image_sample_counts: SampleCountFlags,
    pub max_sample_mask_words: u32,
    pub timestamp_compute_and_graphics: Bool32,
    pub timestamp_period: f32,
    pub max_clip_distances: u32,
    pub max_cull_distances: u32,
    pub max_combined_clip_and_cull_distances: u32,
    pub discrete_queue_priorities: u32,
    pub point_size_range: [f32; 2],
    pub line_width_range: [f32; 2],
    pub point_size_granularity: f32,
    pub line_width_granularity: f32,
    pub strict_lines: Bool32,
    pub standard_sample_locations: Bool32,
    pub optimal_buffer_copy_offset_alignment: DeviceSize,
    pub optimal_buffer_copy_row_pitch_alignment: DeviceSize,
    pub non_coherent_atom_size: DeviceSize,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PhysicalDeviceSparseProperties {
    pub residency_standard_2d_block_shape: Bool32,
    pub residency_standard_2d_multisample_block_shape: Bool32,
    pub residency_standard_3d_block_shape: Bool32,
    pub residency_aligned_mip_size: Bool32,
    pub residency_non_resident_strict: Bool32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PhysicalDeviceProperties {
    pub api_version: u32,
    pub driver_version: u32,
    pub vendor_id: u32,
    pub device_id: u32,
    pub device_type: PhysicalDeviceType,
    pub device_name: [c_char; MAX_PHYSICAL_DEVICE_NAME_SIZE],
    pub pipeline_cache_uuid: [u8; UUID_SIZE],
    pub limits: PhysicalDeviceLimits,
    pub sparse_properties: PhysicalDeviceSparseProperties,
}

impl PhysicalDeviceProperties {
    pub fn device_name(&self) -> Option<&CStr> {
        cstr_from_array(&self.device_name)
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PhysicalDeviceProperties2 {
    pub _type: StructureType,
    pub _next: *mut c_void,
    pub properties: PhysicalDeviceProperties,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct FormatProperties {
    pub linear_tiling_features: FormatFeatureFlags,
    pub optimal_tiling_features: FormatFeatureFlags,
    pub buffer_features: FormatFeatureFlags,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct QueueFamilyProperties {
    pub queue_flags: QueueFlags,
    pub queue_count: u32,
    pub timestamp_valid_bits: u32,
    pub min_image_transfer_granularity: Extent3d,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct MemoryType {
    pub property_flags: MemoryPropertyFlags,
    pub heap_index: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct MemoryHeap {
    pub size: DeviceSize,
    pub flags: MemoryHeapFlags,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PhysicalDeviceMemoryProperties {
    pub memory_type_count: u32,
    pub memory_types: [MemoryType; MAX_MEMORY_TYPES],
    pub memory_heap_count: u32,
    pub memory_heaps: [MemoryHeap; MAX_MEMORY_HEAPS],
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct DeviceQueueCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: DeviceQueueCreateFlags,
    pub queue_family_index: u32,
    pub queue_count: u32,
    pub queue_priorities: *const f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct DeviceCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: DeviceCreateFlags,
    pub queue_create_info_count: u32,
    pub queue_create_infos: *const DeviceQueueCreateInfo,
    pub enabled_layer_count: u32,
    pub enabled_layer_names: *const *const c_char,
    pub enabled_extension_count: u32,
    pub enabled_extension_names: *const *const c_char,
    pub enabled_features: *const PhysicalDeviceFeatures,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SubmitInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub wait_semaphore_count: u32,
    pub wait_semaphores: *const Semaphore,
    pub wait_dst_stage_mask: *const PipelineStageFlags,
    pub command_buffer_count: u32,
    pub command_buffers: *const CommandBuffer,
    pub signal_semaphore_count: u32,
    pub signal_semaphores: *const Semaphore,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct MemoryAllocateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub allocation_size: DeviceSize,
    pub memory_type_index: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct MappedMemoryRange {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub memory: DeviceMemory,
    pub offset: DeviceSize,
    pub size: DeviceSize,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct MemoryRequirements {
    pub size: DeviceSize,
    pub alignment: DeviceSize,
    pub memory_type_bits: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct FenceCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: FenceCreateFlags,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SemaphoreCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: SemaphoreCreateFlags,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SemaphoreTypeCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub semaphore_type: SemaphoreType,
    pub initial_value: u64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct EventCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: EventCreateFlags,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct QueryPoolCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: QueryPoolCreateFlags,
    pub query_type: QueryType,
    pub query_count: u32,
    pub pipeline_statistics: QueryPipelineStatisticFlags,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct BufferCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: BufferCreateFlags,
    pub size: DeviceSize,
    pub usage: BufferUsageFlags,
    pub sharing_mode: SharingMode,
    pub queue_family_index_count: u32,
    pub queue_family_indices: *const u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct BufferViewCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: BufferViewCreateFlags,
    pub buffer: Buffer,
    pub format: Format,
    pub offset: DeviceSize,
    pub range: DeviceSize,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ImageCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: ImageCreateFlags,
    pub image_type: ImageType,
    pub format: Format,
    pub extent: Extent3d,
    pub mip_levels: u32,
    pub array_layers: u32,
    pub samples: SampleCountFlags,
    pub tiling: ImageTiling,
    pub usage: ImageUsageFlags,
    pub sharing_mode: SharingMode,
    pub queue_family_index_count: u32,
    pub queue_family_indices: *const u32,
    pub initial_layout: ImageLayout,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct ImageSubresource {
    pub aspect_mask: ImageAspectFlags,
    pub mip_level: u32,
    pub array_layer: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct SubresourceLayout {
    pub offset: DeviceSize,
    pub size: DeviceSize,
    pub row_pitch: DeviceSize,
    pub array_pitch: DeviceSize,
    pub depth_pitch: DeviceSize,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct ComponentMapping {
    pub r: ComponentSwizzle,
    pub g: ComponentSwizzle,
    pub b: ComponentSwizzle,
    pub a: ComponentSwizzle,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct ImageSubresourceRange {
    pub aspect_mask: ImageAspectFlags,
    pub base_mip_level: u32,
    pub level_count: u32,
    pub base_array_layer: u32,
    pub layer_count: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct ImageSubresourceLayers {
    pub aspect_mask: ImageAspectFlags,
    pub mip_level: u32,
    pub base_array_layer: u32,
    pub layer_count: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ImageViewCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: ImageViewCreateFlags,
    pub image: Image,
    pub view_type: ImageViewType,
    pub format: Format,
    pub components: ComponentMapping,
    pub subresource_range: ImageSubresourceRange,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ShaderModuleCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: ShaderModuleCreateFlags,
    /// Size in bytes, not words.
    pub code_size: usize,
    pub code: *const u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PipelineCacheCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: PipelineCacheCreateFlags,
    pub initial_data_size: usize,
    pub initial_data: *const c_void,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct SpecializationMapEntry {
    pub constant_id: u32,
    pub offset: u32,
    pub size: usize,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SpecializationInfo {
    pub map_entry_count: u32,
    pub map_entries: *const SpecializationMapEntry,
    pub data_size: usize,
    pub data: *const c_void,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PipelineShaderStageCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: PipelineShaderStageCreateFlags,
    pub stage: ShaderStageFlags,
    pub module: ShaderModule,
    pub name: *const c_char,
    pub specialization_info: *const SpecializationInfo,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ComputePipelineCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: PipelineCreateFlags,
    pub stage: PipelineShaderStageCreateInfo,
    pub layout: PipelineLayout,
    pub base_pipeline_handle: Pipeline,
    pub base_pipeline_index: i32,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct PushConstantRange {
    pub stage_flags: ShaderStageFlags,
    pub offset: u32,
    pub size: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PipelineLayoutCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: PipelineLayoutCreateFlags,
    pub set_layout_count: u32,
    pub set_layouts: *const DescriptorSetLayout,
    pub push_constant_range_count: u32,
    pub push_constant_ranges: *const PushConstantRange,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SamplerCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: SamplerCreateFlags,
    pub mag_filter: Filter,
    pub min_filter: Filter,
    pub mipmap_mode: SamplerMipmapMode,
    pub address_mode_u: SamplerAddressMode,
    pub address_mode_v: SamplerAddressMode,
    pub address_mode_w: SamplerAddressMode,
    pub mip_lod_bias: f32,
    pub anisotropy_enable: Bool32,
    pub max_anisotropy: f32,
    pub compare_enable: Bool32,
    pub compare_op: CompareOp,
    pub min_lod: f32,
    pub max_lod: f32,
    pub border_color: BorderColor,
    pub unnormalized_coordinates: Bool32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct DescriptorSetLayoutBinding {
    pub binding: u32,
    pub descriptor_type: DescriptorType,
    pub descriptor_count: u32,
    pub stage_flags: ShaderStageFlags,
    pub immutable_samplers: *const Sampler,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct DescriptorSetLayoutCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: DescriptorSetLayoutCreateFlags,
    pub binding_count: u32,
    pub bindings: *const DescriptorSetLayoutBinding,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct DescriptorPoolSize {
    pub descriptor_type: DescriptorType,
    pub descriptor_count: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct DescriptorPoolCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: DescriptorPoolCreateFlags,
    pub max_sets: u32,
    pub pool_size_count: u32,
    pub pool_sizes: *const DescriptorPoolSize,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct DescriptorSetAllocateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub descriptor_pool: DescriptorPool,
    pub descriptor_set_count: u32,
    pub set_layouts: *const DescriptorSetLayout,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct DescriptorImageInfo {
    pub sampler: Sampler,
    pub image_view: ImageView,
    pub image_layout: ImageLayout,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct DescriptorBufferInfo {
    pub buffer: Buffer,
    pub offset: DeviceSize,
    pub range: DeviceSize,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct WriteDescriptorSet {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub dst_set: DescriptorSet,
    pub dst_binding: u32,
    pub dst_array_element: u32,
    pub descriptor_count: u32,
    pub descriptor_type: DescriptorType,
    pub image_info: *const DescriptorImageInfo,
    pub buffer_info: *const DescriptorBufferInfo,
    pub texel_buffer_view: *const BufferView,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CopyDescriptorSet {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub src_set: DescriptorSet,
    pub src_binding: u32,
    pub src_array_element: u32,
    pub dst_set: DescriptorSet,
    pub dst_binding: u32,
    pub dst_array_element: u32,
    pub descriptor_count: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CommandPoolCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: CommandPoolCreateFlags,
    pub queue_family_index: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CommandBufferAllocateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub command_pool: CommandPool,
    pub level: CommandBufferLevel,
    pub command_buffer_count: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CommandBufferInheritanceInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub render_pass: RenderPass,
    pub subpass: u32,
    pub framebuffer: Framebuffer,
    pub occlusion_query_enable: Bool32,
    pub query_flags: QueryControlFlags,
    pub pipeline_statistics: QueryPipelineStatisticFlags,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CommandBufferBeginInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: CommandBufferUsageFlags,
    pub inheritance_info: *const CommandBufferInheritanceInfo,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct BufferCopy {
    pub src_offset: DeviceSize,
    pub dst_offset: DeviceSize,
    pub size: DeviceSize,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct ImageCopy {
    pub src_subresource: ImageSubresourceLayers,
    pub src_offset: Offset3d,
    pub dst_subresource: ImageSubresourceLayers,
    pub dst_offset: Offset3d,
    pub extent: Extent3d,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct BufferImageCopy {
    pub buffer_offset: DeviceSize,
    /// Specified in texels
    pub buffer_row_length: u32,
    pub buffer_image_height: u32,
    pub image_subresource: ImageSubresourceLayers,
    /// Specified in pixels for both compressed and uncompressed images
    pub image_offset: Offset3d,
    /// Specified in pixels for both compressed and uncompressed images
    pub image_extent: Extent3d,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union ClearColorValue {
    pub float32: [f32; 4],
    pub int32: [i32; 4],
    pub uint32: [u32; 4],
}

impl std::fmt::Debug for ClearColorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // SAFETY: every variant is sixteen bytes of plain data.
        let bits = unsafe { self.uint32 };
        f.debug_tuple("ClearColorValue").field(&bits).finish()
    }
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct ClearDepthStencilValue {
    pub depth: f32,
    pub stencil: u32,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union ClearValue {
    pub color: ClearColorValue,
    pub depth_stencil: ClearDepthStencilValue,
}

impl std::fmt::Debug for ClearValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // SAFETY: the color variant covers the whole union.
        let color = unsafe { self.color };
        f.debug_tuple("ClearValue").field(&color).finish()
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct MemoryBarrier {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub src_access_mask: AccessFlags,
    pub dst_access_mask: AccessFlags,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct BufferMemoryBarrier {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub src_access_mask: AccessFlags,
    pub dst_access_mask: AccessFlags,
    pub src_queue_family_index: u32,
    pub dst_queue_family_index: u32,
    pub buffer: Buffer,
    pub offset: DeviceSize,
    pub size: DeviceSize,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ImageMemoryBarrier {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub src_access_mask: AccessFlags,
    pub dst_access_mask: AccessFlags,
    pub old_layout: ImageLayout,
    pub new_layout: ImageLayout,
    pub src_queue_family_index: u32,
    pub dst_queue_family_index: u32,
    pub image: Image,
    pub subresource_range: ImageSubresourceRange,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct ImageFormatProperties {
    /// max image dimensions for this resource type
    pub max_extent: Extent3d,
    /// max number of mipmap levels for this resource type
    pub max_mip_levels: u32,
    /// max array size for this resource type
    pub max_array_layers: u32,
    /// supported sample counts for this resource type
    pub sample_counts: SampleCountFlags,
    /// max size (in bytes) of this resource type
    pub max_resource_size: DeviceSize,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct SparseImageFormatProperties {
    pub aspect_mask: ImageAspectFlags,
    pub image_granularity: Extent3d,
    pub flags: SparseImageFormatFlags,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct SparseImageMemoryRequirements {
    pub format_properties: SparseImageFormatProperties,
    pub image_mip_tail_first_lod: u32,
    /// Specified in bytes, must be a multiple of sparse block size in bytes / alignment
    pub image_mip_tail_size: DeviceSize,
    /// Specified in bytes, must be a multiple of sparse block size in bytes / alignment
    pub image_mip_tail_offset: DeviceSize,
    /// Specified in bytes, must be a multiple of sparse block size in bytes / alignment
    pub image_mip_tail_stride: DeviceSize,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct SparseMemoryBind {
    /// Specified in bytes
    pub resource_offset: DeviceSize,
    /// Specified in bytes
    pub size: DeviceSize,
    pub memory: DeviceMemory,
    /// Specified in bytes
    pub memory_offset: DeviceSize,
    pub flags: SparseMemoryBindFlags,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct SparseImageMemoryBind {
    pub subresource: ImageSubresource,
    pub offset: Offset3d,
    pub extent: Extent3d,
    pub memory: DeviceMemory,
    /// Specified in bytes
    pub memory_offset: DeviceSize,
    pub flags: SparseMemoryBindFlags,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SparseBufferMemoryBindInfo {
    pub buffer: Buffer,
    pub bind_count: u32,
    pub binds: *const SparseMemoryBind,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SparseImageOpaqueMemoryBindInfo {
    pub image: Image,
    pub bind_count: u32,
    pub binds: *const SparseMemoryBind,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SparseImageMemoryBindInfo {
    pub image: Image,
    pub bind_count: u32,
    pub binds: *const SparseImageMemoryBind,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct BindSparseInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub wait_semaphore_count: u32,
    pub wait_semaphores: *const Semaphore,
    pub buffer_bind_count: u32,
    pub buffer_binds: *const SparseBufferMemoryBindInfo,
    pub image_opaque_bind_count: u32,
    pub image_opaque_binds: *const SparseImageOpaqueMemoryBindInfo,
    pub image_bind_count: u32,
    pub image_binds: *const SparseImageMemoryBindInfo,
    pub signal_semaphore_count: u32,
    pub signal_semaphores: *const Semaphore,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct VertexInputBindingDescription {
    /// Vertex buffer binding id
    pub binding: u32,
    /// Distance between vertices in bytes (0 = no advancement)
    pub stride: u32,
    /// The rate at which the vertex data is consumed
    pub input_rate: VertexInputRate,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct VertexInputAttributeDescription {
    /// location of the shader vertex attrib
    pub location: u32,
    /// Vertex buffer binding id
    pub binding: u32,
    /// format of source data
    pub format: Format,
    /// Offset of first element in bytes from base of vertex
    pub offset: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PipelineVertexInputStateCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: PipelineVertexInputStateCreateFlags,
    pub vertex_binding_description_count: u32,
    pub vertex_binding_descriptions: *const VertexInputBindingDescription,
    pub vertex_attribute_description_count: u32,
    pub vertex_attribute_descriptions: *const VertexInputAttributeDescription,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PipelineInputAssemblyStateCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: PipelineInputAssemblyStateCreateFlags,
    pub topology: PrimitiveTopology,
    pub primitive_restart_enable: Bool32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PipelineTessellationStateCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: PipelineTessellationStateCreateFlags,
    pub patch_control_points: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PipelineViewportStateCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: PipelineViewportStateCreateFlags,
    pub viewport_count: u32,
    pub viewports: *const Viewport,
    pub scissor_count: u32,
    pub scissors: *const Rect2d,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PipelineRasterizationStateCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: PipelineRasterizationStateCreateFlags,
    pub depth_clamp_enable: Bool32,
    pub rasterizer_discard_enable: Bool32,
    pub polygon_mode: PolygonMode,
    pub cull_mode: CullModeFlags,
    pub front_face: FrontFace,
    pub depth_bias_enable: Bool32,
    pub depth_bias_constant_factor: f32,
    pub depth_bias_clamp: f32,
    pub depth_bias_slope_factor: f32,
    pub line_width: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PipelineMultisampleStateCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: PipelineMultisampleStateCreateFlags,
    pub rasterization_samples: SampleCountFlags,
    pub sample_shading_enable: Bool32,
    pub min_sample_shading: f32,
    pub sample_mask: *const SampleMask,
    pub alpha_to_coverage_enable: Bool32,
    pub alpha_to_one_enable: Bool32,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct StencilOpState {
    pub fail_op: StencilOp,
    pub pass_op: StencilOp,
    pub depth_fail_op: StencilOp,
    pub compare_op: CompareOp,
    pub compare_mask: u32,
    pub write_mask: u32,
    pub reference: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PipelineDepthStencilStateCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: PipelineDepthStencilStateCreateFlags,
    pub depth_test_enable: Bool32,
    pub depth_write_enable: Bool32,
    pub depth_compare_op: CompareOp,
    /// optional (depth_bounds_test)
    pub depth_bounds_test_enable: Bool32,
    pub stencil_test_enable: Bool32,
    pub front: StencilOpState,
    pub back: StencilOpState,
    pub min_depth_bounds: f32,
    pub max_depth_bounds: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct PipelineColorBlendAttachmentState {
    pub blend_enable: Bool32,
    pub src_color_blend_factor: BlendFactor,
    pub dst_color_blend_factor: BlendFactor,
    pub color_blend_op: BlendOp,
    pub src_alpha_blend_factor: BlendFactor,
    pub dst_alpha_blend_factor: BlendFactor,
    pub alpha_blend_op: BlendOp,
    pub color_write_mask: ColorComponentFlags,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PipelineColorBlendStateCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: PipelineColorBlendStateCreateFlags,
    pub logic_op_enable: Bool32,
    pub logic_op: LogicOp,
    pub attachment_count: u32,
    pub attachments: *const PipelineColorBlendAttachmentState,
    pub blend_constants: [f32; 4],
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PipelineDynamicStateCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: PipelineDynamicStateCreateFlags,
    pub dynamic_state_count: u32,
    pub dynamic_states: *const DynamicState,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct GraphicsPipelineCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: PipelineCreateFlags,
    pub stage_count: u32,
    pub stages: *const PipelineShaderStageCreateInfo,
    pub vertex_input_state: *const PipelineVertexInputStateCreateInfo,
    pub input_assembly_state: *const PipelineInputAssemblyStateCreateInfo,
    pub tessellation_state: *const PipelineTessellationStateCreateInfo,
    pub viewport_state: *const PipelineViewportStateCreateInfo,
    pub rasterization_state: *const PipelineRasterizationStateCreateInfo,
    pub multisample_state: *const PipelineMultisampleStateCreateInfo,
    pub depth_stencil_state: *const PipelineDepthStencilStateCreateInfo,
    pub color_blend_state: *const PipelineColorBlendStateCreateInfo,
    pub dynamic_state: *const PipelineDynamicStateCreateInfo,
    /// Interface layout of the pipeline
    pub layout: PipelineLayout,
    pub render_pass: RenderPass,
    pub subpass: u32,
    /// If VK_PIPELINE_CREATE_DERIVATIVE_BIT is set and this value is nonzero, it specifies the handle of the base pipeline this is a derivative of
    pub base_pipeline_handle: Pipeline,
    /// If VK_PIPELINE_CREATE_DERIVATIVE_BIT is set and this value is not -1, it specifies an index into pCreateInfos of the base pipeline this is a derivative of
    pub base_pipeline_index: i32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct FramebufferCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: FramebufferCreateFlags,
    pub render_pass: RenderPass,
    pub attachment_count: u32,
    pub attachments: *const ImageView,
    pub width: u32,
    pub height: u32,
    pub layers: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct AttachmentDescription {
    pub flags: AttachmentDescriptionFlags,
    pub format: Format,
    pub samples: SampleCountFlags,
    /// Load operation for color or depth data
    pub load_op: AttachmentLoadOp,
    /// Store operation for color or depth data
    pub store_op: AttachmentStoreOp,
    /// Load operation for stencil data
    pub stencil_load_op: AttachmentLoadOp,
    /// Store operation for stencil data
    pub stencil_store_op: AttachmentStoreOp,
    pub initial_layout: ImageLayout,
    pub final_layout: ImageLayout,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct AttachmentReference {
    pub attachment: u32,
    pub layout: ImageLayout,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SubpassDescription {
    pub flags: SubpassDescriptionFlags,
    /// Must be VK_PIPELINE_BIND_POINT_GRAPHICS for now
    pub pipeline_bind_point: PipelineBindPoint,
    pub input_attachment_count: u32,
    pub input_attachments: *const AttachmentReference,
    pub color_attachment_count: u32,
    pub color_attachments: *const AttachmentReference,
    pub resolve_attachments: *const AttachmentReference,
    pub depth_stencil_attachment: *const AttachmentReference,
    pub preserve_attachment_count: u32,
    pub preserve_attachments: *const u32,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct SubpassDependency {
    pub src_subpass: u32,
    pub dst_subpass: u32,
    pub src_stage_mask: PipelineStageFlags,
    pub dst_stage_mask: PipelineStageFlags,
    /// Memory accesses from the source of the dependency to synchronize
    pub src_access_mask: AccessFlags,
    /// Memory accesses from the destination of the dependency to synchronize
    pub dst_access_mask: AccessFlags,
    pub dependency_flags: DependencyFlags,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RenderPassCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: RenderPassCreateFlags,
    pub attachment_count: u32,
    pub attachments: *const AttachmentDescription,
    pub subpass_count: u32,
    pub subpasses: *const SubpassDescription,
    pub dependency_count: u32,
    pub dependencies: *const SubpassDependency,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RenderPassBeginInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub render_pass: RenderPass,
    pub framebuffer: Framebuffer,
    pub render_area: Rect2d,
    pub clear_value_count: u32,
    pub clear_values: *const ClearValue,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct ImageBlit {
    pub src_subresource: ImageSubresourceLayers,
    /// Specified in pixels for both compressed and uncompressed images
    pub src_offsets: [Offset3d; 2],
    pub dst_subresource: ImageSubresourceLayers,
    /// Specified in pixels for both compressed and uncompressed images
    pub dst_offsets: [Offset3d; 2],
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct ImageResolve {
    pub src_subresource: ImageSubresourceLayers,
    pub src_offset: Offset3d,
    pub dst_subresource: ImageSubresourceLayers,
    pub dst_offset: Offset3d,
    pub extent: Extent3d,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct ClearAttachment {
    pub aspect_mask: ImageAspectFlags,
    pub color_attachment: u32,
    pub clear_value: ClearValue,
}

#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct ClearRect {
    pub rect: Rect2d,
    pub base_array_layer: u32,
    pub layer_count: u32,
}

// VERSION_1_1

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct BindBufferMemoryInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub buffer: Buffer,
    pub memory: DeviceMemory,
    pub memory_offset: DeviceSize,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct BindImageMemoryInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub image: Image,
    pub memory: DeviceMemory,
    pub memory_offset: DeviceSize,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct BufferMemoryRequirementsInfo2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub buffer: Buffer,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ImageMemoryRequirementsInfo2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub image: Image,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct MemoryRequirements2 {
    pub _type: StructureType,
    pub _next: *mut c_void,
    pub memory_requirements: MemoryRequirements,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PhysicalDeviceGroupProperties {
    pub _type: StructureType,
    pub _next: *mut c_void,
    pub physical_device_count: u32,
    pub physical_devices: [PhysicalDevice; MAX_DEVICE_GROUP_SIZE],
    pub subset_allocation: Bool32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct FormatProperties2 {
    pub _type: StructureType,
    pub _next: *mut c_void,
    pub format_properties: FormatProperties,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PhysicalDeviceImageFormatInfo2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub format: Format,
    pub image_type: ImageType,
    pub tiling: ImageTiling,
    pub usage: ImageUsageFlags,
    pub flags: ImageCreateFlags,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ImageFormatProperties2 {
    pub _type: StructureType,
    pub _next: *mut c_void,
    pub image_format_properties: ImageFormatProperties,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct QueueFamilyProperties2 {
    pub _type: StructureType,
    pub _next: *mut c_void,
    pub queue_family_properties: QueueFamilyProperties,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PhysicalDeviceMemoryProperties2 {
    pub _type: StructureType,
    pub _next: *mut c_void,
    pub memory_properties: PhysicalDeviceMemoryProperties,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PhysicalDeviceSparseImageFormatInfo2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub format: Format,
    pub image_type: ImageType,
    pub samples: SampleCountFlags,
    pub usage: ImageUsageFlags,
    pub tiling: ImageTiling,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SparseImageFormatProperties2 {
    pub _type: StructureType,
    pub _next: *mut c_void,
    pub properties: SparseImageFormatProperties,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct ExternalMemoryProperties {
    pub external_memory_features: ExternalMemoryFeatureFlags,
    pub export_from_imported_handle_types: ExternalMemoryHandleTypeFlags,
    pub compatible_handle_types: ExternalMemoryHandleTypeFlags,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PhysicalDeviceExternalBufferInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: BufferCreateFlags,
    pub usage: BufferUsageFlags,
    pub handle_type: ExternalMemoryHandleTypeFlags,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ExternalBufferProperties {
    pub _type: StructureType,
    pub _next: *mut c_void,
    pub external_memory_properties: ExternalMemoryProperties,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PhysicalDeviceExternalFenceInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub handle_type: ExternalFenceHandleTypeFlags,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ExternalFenceProperties {
    pub _type: StructureType,
    pub _next: *mut c_void,
    pub export_from_imported_handle_types: ExternalFenceHandleTypeFlags,
    pub compatible_handle_types: ExternalFenceHandleTypeFlags,
    pub external_fence_features: ExternalFenceFeatureFlags,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PhysicalDeviceExternalSemaphoreInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub handle_type: ExternalSemaphoreHandleTypeFlags,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ExternalSemaphoreProperties {
    pub _type: StructureType,
    pub _next: *mut c_void,
    pub export_from_imported_handle_types: ExternalSemaphoreHandleTypeFlags,
    pub compatible_handle_types: ExternalSemaphoreHandleTypeFlags,
    pub external_semaphore_features: ExternalSemaphoreFeatureFlags,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ImageSparseMemoryRequirementsInfo2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub image: Image,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SparseImageMemoryRequirements2 {
    pub _type: StructureType,
    pub _next: *mut c_void,
    pub memory_requirements: SparseImageMemoryRequirements,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct DeviceQueueInfo2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: DeviceQueueCreateFlags,
    pub queue_family_index: u32,
    pub queue_index: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SamplerYcbcrConversionCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub format: Format,
    pub ycbcr_model: SamplerYcbcrModelConversion,
    pub ycbcr_range: SamplerYcbcrRange,
    pub components: ComponentMapping,
    pub x_chroma_offset: ChromaLocation,
    pub y_chroma_offset: ChromaLocation,
    pub chroma_filter: Filter,
    pub force_explicit_reconstruction: Bool32,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct DescriptorUpdateTemplateEntry {
    /// Binding within the destination descriptor set to write
    pub dst_binding: u32,
    /// Array element within the destination binding to write
    pub dst_array_element: u32,
    /// Number of descriptors to write
    pub descriptor_count: u32,
    /// Descriptor type to write
    pub descriptor_type: DescriptorType,
    /// Offset into pData where the descriptors to update are stored
    pub offset: usize,
    /// Stride between two descriptors in pData when writing more than one descriptor
    pub stride: usize,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct DescriptorUpdateTemplateCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: DescriptorUpdateTemplateCreateFlags,
    /// Number of descriptor update entries to use for the update template
    pub descriptor_update_entry_count: u32,
    /// Descriptor update entries for the template
    pub descriptor_update_entries: *const DescriptorUpdateTemplateEntry,
    pub template_type: DescriptorUpdateTemplateType,
    pub descriptor_set_layout: DescriptorSetLayout,
    pub pipeline_bind_point: PipelineBindPoint,
    /// If used for push descriptors, this is the only allowed layout
    pub pipeline_layout: PipelineLayout,
    pub set: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct DescriptorSetLayoutSupport {
    pub _type: StructureType,
    pub _next: *mut c_void,
    pub supported: Bool32,
}

// VERSION_1_2

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SemaphoreWaitInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: SemaphoreWaitFlags,
    pub semaphore_count: u32,
    pub semaphores: *const Semaphore,
    pub values: *const u64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SemaphoreSignalInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub semaphore: Semaphore,
    pub value: u64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct BufferDeviceAddressInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub buffer: Buffer,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct AttachmentDescription2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: AttachmentDescriptionFlags,
    pub format: Format,
    pub samples: SampleCountFlags,
    pub load_op: AttachmentLoadOp,
    pub store_op: AttachmentStoreOp,
    pub stencil_load_op: AttachmentLoadOp,
    pub stencil_store_op: AttachmentStoreOp,
    pub initial_layout: ImageLayout,
    pub final_layout: ImageLayout,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct AttachmentReference2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub attachment: u32,
    pub layout: ImageLayout,
    pub aspect_mask: ImageAspectFlags,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SubpassDescription2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: SubpassDescriptionFlags,
    pub pipeline_bind_point: PipelineBindPoint,
    pub view_mask: u32,
    pub input_attachment_count: u32,
    pub input_attachments: *const AttachmentReference2,
    pub color_attachment_count: u32,
    pub color_attachments: *const AttachmentReference2,
    pub resolve_attachments: *const AttachmentReference2,
    pub depth_stencil_attachment: *const AttachmentReference2,
    pub preserve_attachment_count: u32,
    pub preserve_attachments: *const u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SubpassDependency2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub src_subpass: u32,
    pub dst_subpass: u32,
    pub src_stage_mask: PipelineStageFlags,
    pub dst_stage_mask: PipelineStageFlags,
    pub src_access_mask: AccessFlags,
    pub dst_access_mask: AccessFlags,
    pub dependency_flags: DependencyFlags,
    pub view_offset: i32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RenderPassCreateInfo2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: RenderPassCreateFlags,
    pub attachment_count: u32,
    pub attachments: *const AttachmentDescription2,
    pub subpass_count: u32,
    pub subpasses: *const SubpassDescription2,
    pub dependency_count: u32,
    pub dependencies: *const SubpassDependency2,
    pub correlated_view_mask_count: u32,
    pub correlated_view_masks: *const u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SubpassBeginInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub contents: SubpassContents,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SubpassEndInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct DeviceMemoryOpaqueCaptureAddressInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub memory: DeviceMemory,
}

// VERSION_1_3

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct MemoryBarrier2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub src_stage_mask: PipelineStageFlags2,
    pub src_access_mask: AccessFlags2,
    pub dst_stage_mask: PipelineStageFlags2,
    pub dst_access_mask: AccessFlags2,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct BufferMemoryBarrier2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub src_stage_mask: PipelineStageFlags2,
    pub src_access_mask: AccessFlags2,
    pub dst_stage_mask: PipelineStageFlags2,
    pub dst_access_mask: AccessFlags2,
    pub src_queue_family_index: u32,
    pub dst_queue_family_index: u32,
    pub buffer: Buffer,
    pub offset: DeviceSize,
    pub size: DeviceSize,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ImageMemoryBarrier2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub src_stage_mask: PipelineStageFlags2,
    pub src_access_mask: AccessFlags2,
    pub dst_stage_mask: PipelineStageFlags2,
    pub dst_access_mask: AccessFlags2,
    pub old_layout: ImageLayout,
    pub new_layout: ImageLayout,
    pub src_queue_family_index: u32,
    pub dst_queue_family_index: u32,
    pub image: Image,
    pub subresource_range: ImageSubresourceRange,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct DependencyInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub dependency_flags: DependencyFlags,
    pub memory_barrier_count: u32,
    pub memory_barriers: *const MemoryBarrier2,
    pub buffer_memory_barrier_count: u32,
    pub buffer_memory_barriers: *const BufferMemoryBarrier2,
    pub image_memory_barrier_count: u32,
    pub image_memory_barriers: *const ImageMemoryBarrier2,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SemaphoreSubmitInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub semaphore: Semaphore,
    pub value: u64,
    pub stage_mask: PipelineStageFlags2,
    pub device_index: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CommandBufferSubmitInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub command_buffer: CommandBuffer,
    pub device_mask: u32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SubmitInfo2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: SubmitFlags,
    pub wait_semaphore_info_count: u32,
    pub wait_semaphore_infos: *const SemaphoreSubmitInfo,
    pub command_buffer_info_count: u32,
    pub command_buffer_infos: *const CommandBufferSubmitInfo,
    pub signal_semaphore_info_count: u32,
    pub signal_semaphore_infos: *const SemaphoreSubmitInfo,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RenderingAttachmentInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub image_view: ImageView,
    pub image_layout: ImageLayout,
    pub resolve_mode: ResolveModeFlags,
    pub resolve_image_view: ImageView,
    pub resolve_image_layout: ImageLayout,
    pub load_op: AttachmentLoadOp,
    pub store_op: AttachmentStoreOp,
    pub clear_value: ClearValue,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RenderingInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: RenderingFlags,
    pub render_area: Rect2d,
    pub layer_count: u32,
    pub view_mask: u32,
    pub color_attachment_count: u32,
    pub color_attachments: *const RenderingAttachmentInfo,
    pub depth_attachment: *const RenderingAttachmentInfo,
    pub stencil_attachment: *const RenderingAttachmentInfo,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PhysicalDeviceToolProperties {
    pub _type: StructureType,
    pub _next: *mut c_void,
    pub name: [c_char; MAX_EXTENSION_NAME_SIZE],
    pub version: [c_char; MAX_EXTENSION_NAME_SIZE],
    pub purposes: ToolPurposeFlags,
    pub description: [c_char; MAX_DESCRIPTION_SIZE],
    pub layer: [c_char; MAX_EXTENSION_NAME_SIZE],
}

impl PhysicalDeviceToolProperties {
    pub fn name(&self) -> Option<&CStr> {
        cstr_from_array(&self.name)
    }

    pub fn version(&self) -> Option<&CStr> {
        cstr_from_array(&self.version)
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PrivateDataSlotCreateInfo {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: PrivateDataSlotCreateFlags,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct BufferCopy2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    /// Specified in bytes
    pub src_offset: DeviceSize,
    /// Specified in bytes
    pub dst_offset: DeviceSize,
    /// Specified in bytes
    pub size: DeviceSize,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CopyBufferInfo2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub src_buffer: Buffer,
    pub dst_buffer: Buffer,
    pub region_count: u32,
    pub regions: *const BufferCopy2,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ImageCopy2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub src_subresource: ImageSubresourceLayers,
    /// Specified in pixels for both compressed and uncompressed images
    pub src_offset: Offset3d,
    pub dst_subresource: ImageSubresourceLayers,
    /// Specified in pixels for both compressed and uncompressed images
    pub dst_offset: Offset3d,
    /// Specified in pixels for both compressed and uncompressed images
    pub extent: Extent3d,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CopyImageInfo2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub src_image: Image,
    pub src_image_layout: ImageLayout,
    pub dst_image: Image,
    pub dst_image_layout: ImageLayout,
    pub region_count: u32,
    pub regions: *const ImageCopy2,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct BufferImageCopy2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    /// Specified in bytes
    pub buffer_offset: DeviceSize,
    /// Specified in texels
    pub buffer_row_length: u32,
    pub buffer_image_height: u32,
    pub image_subresource: ImageSubresourceLayers,
    /// Specified in pixels for both compressed and uncompressed images
    pub image_offset: Offset3d,
    /// Specified in pixels for both compressed and uncompressed images
    pub image_extent: Extent3d,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CopyBufferToImageInfo2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub src_buffer: Buffer,
    pub dst_image: Image,
    pub dst_image_layout: ImageLayout,
    pub region_count: u32,
    pub regions: *const BufferImageCopy2,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CopyImageToBufferInfo2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub src_image: Image,
    pub src_image_layout: ImageLayout,
    pub dst_buffer: Buffer,
    pub region_count: u32,
    pub regions: *const BufferImageCopy2,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ImageBlit2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub src_subresource: ImageSubresourceLayers,
    /// Specified in pixels for both compressed and uncompressed images
    pub src_offsets: [Offset3d; 2],
    pub dst_subresource: ImageSubresourceLayers,
    /// Specified in pixels for both compressed and uncompressed images
    pub dst_offsets: [Offset3d; 2],
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct BlitImageInfo2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub src_image: Image,
    pub src_image_layout: ImageLayout,
    pub dst_image: Image,
    pub dst_image_layout: ImageLayout,
    pub region_count: u32,
    pub regions: *const ImageBlit2,
    pub filter: Filter,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ImageResolve2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub src_subresource: ImageSubresourceLayers,
    pub src_offset: Offset3d,
    pub dst_subresource: ImageSubresourceLayers,
    pub dst_offset: Offset3d,
    pub extent: Extent3d,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ResolveImageInfo2 {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub src_image: Image,
    pub src_image_layout: ImageLayout,
    pub dst_image: Image,
    pub dst_image_layout: ImageLayout,
    pub region_count: u32,
    pub regions: *const ImageResolve2,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct DeviceBufferMemoryRequirements {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub create_info: *const BufferCreateInfo,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct DeviceImageMemoryRequirements {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub create_info: *const ImageCreateInfo,
    pub plane_aspect: ImageAspectFlags,
}

// VK_KHR_surface

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SurfaceCapabilitiesKHR {
    /// Supported minimum number of images for the surface
    pub min_image_count: u32,
    /// Supported maximum number of images for the surface, 0 for unlimited
    pub max_image_count: u32,
    /// Current image width and height for the surface, (0, 0) if undefined
    pub current_extent: Extent2d,
    /// Supported minimum image width and height for the surface
    pub min_image_extent: Extent2d,
    /// Supported maximum image width and height for the surface
    pub max_image_extent: Extent2d,
    /// Supported maximum number of image layers for the surface
    pub max_image_array_layers: u32,
    /// 1 or more bits representing the transforms supported
    pub supported_transforms: SurfaceTransformFlagsKHR,
    /// The surface's current transform relative to the device's natural orientation
    pub current_transform: SurfaceTransformFlagsKHR,
    /// 1 or more bits representing the alpha compositing modes supported
    pub supported_composite_alpha: CompositeAlphaFlagsKHR,
    /// Supported image usage flags for the surface
    pub supported_usage_flags: ImageUsageFlags,
}

#[repr(C)]
#[derive(Clone, Copy, Default, Debug)]
pub struct SurfaceFormatKHR {
    pub format: Format,
    pub color_space: ColorSpaceKHR,
}

// VK_KHR_swapchain

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct SwapchainCreateInfoKHR {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: SwapchainCreateFlagsKHR,
    /// The swapchain's target surface
    pub surface: SurfaceKHR,
    /// Minimum number of presentation images the application needs
    pub min_image_count: u32,
    /// Format of the presentation images
    pub image_format: Format,
    /// Colorspace of the presentation images
    pub image_color_space: ColorSpaceKHR,
    /// Dimensions of the presentation images
    pub image_extent: Extent2d,
    /// Determines the number of views for multiview/stereo presentation
    pub image_array_layers: u32,
    /// Bits indicating how the presentation images will be used
    pub image_usage: ImageUsageFlags,
    /// Sharing mode used for the presentation images
    pub image_sharing_mode: SharingMode,
    /// Number of queue families having access to the images in case of concurrent sharing mode
    pub queue_family_index_count: u32,
    /// Array of queue family indices having access to the images in case of concurrent sharing mode
    pub queue_family_indices: *const u32,
    /// The transform, relative to the device's natural orientation, applied to the image content prior to presentation
    pub pre_transform: SurfaceTransformFlagsKHR,
    /// The alpha blending mode used when compositing this surface with other surfaces in the window system
    pub composite_alpha: CompositeAlphaFlagsKHR,
    /// Which presentation mode to use for presents on this swap chain
    pub present_mode: PresentModeKHR,
    /// Specifies whether presentable images may be affected by window clip regions
    pub clipped: Bool32,
    /// Existing swap chain to replace, if any
    pub old_swapchain: SwapchainKHR,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PresentInfoKHR {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub wait_semaphore_count: u32,
    pub wait_semaphores: *const Semaphore,
    pub swapchain_count: u32,
    pub swapchains: *const SwapchainKHR,
    pub image_indices: *const u32,
    pub results: *mut Result,
}

// VK_EXT_debug_utils

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct DebugUtilsLabelEXT {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub label_name: *const c_char,
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct DebugUtilsObjectNameInfoEXT {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub object_type: ObjectType,
    pub object_handle: u64,
    pub object_name: *const c_char,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct DebugUtilsObjectTagInfoEXT {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub object_type: ObjectType,
    pub object_handle: u64,
    pub tag_name: u64,
    pub tag_size: usize,
    pub tag: *const c_void,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct DebugUtilsMessengerCallbackDataEXT {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: DebugUtilsMessengerCallbackDataFlagsEXT,
    pub message_id_name: *const c_char,
    pub message_id_number: i32,
    pub message: *const c_char,
    pub queue_label_count: u32,
    pub queue_labels: *const DebugUtilsLabelEXT,
    pub cmd_buf_label_count: u32,
    pub cmd_buf_labels: *const DebugUtilsLabelEXT,
    pub object_count: u32,
    pub objects: *const DebugUtilsObjectNameInfoEXT,
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct DebugUtilsMessengerCreateInfoEXT {
    pub _type: StructureType,
    pub _next: *const c_void,
    pub flags: DebugUtilsMessengerCreateFlagsEXT,
    pub message_severity: DebugUtilsMessageSeverityFlagsEXT,
    pub message_type: DebugUtilsMessageTypeFlagsEXT,
    pub user_callback: Option<FnDebugUtilsMessengerCallbackEXT>,
    pub user_data: *mut c_void,
}

impl_default! {
    AllocationCallbacks,
    ApplicationInfo => APPLICATION_INFO,
    InstanceCreateInfo => INSTANCE_CREATE_INFO,
    ExtensionProperties,
    LayerProperties,
    PhysicalDeviceFeatures,
    PhysicalDeviceFeatures2 => PHYSICAL_DEVICE_FEATURES_2,
    PhysicalDeviceLimits,
    PhysicalDeviceSparseProperties,
    PhysicalDeviceProperties,
    PhysicalDeviceProperties2 => PHYSICAL_DEVICE_PROPERTIES_2,
    FormatProperties,
    QueueFamilyProperties,
    MemoryType,
    MemoryHeap,
    PhysicalDeviceMemoryProperties,
    DeviceQueueCreateInfo => DEVICE_QUEUE_CREATE_INFO,
    DeviceCreateInfo => DEVICE_CREATE_INFO,
    SubmitInfo => SUBMIT_INFO,
    MemoryAllocateInfo => MEMORY_ALLOCATE_INFO,
    MappedMemoryRange => MAPPED_MEMORY_RANGE,
    MemoryRequirements,
    SparseBufferMemoryBindInfo,
    SparseImageOpaqueMemoryBindInfo,
    SparseImageMemoryBindInfo,
    BindSparseInfo => BIND_SPARSE_INFO,
    FenceCreateInfo => FENCE_CREATE_INFO,
    SemaphoreCreateInfo => SEMAPHORE_CREATE_INFO,
    SemaphoreTypeCreateInfo => SEMAPHORE_TYPE_CREATE_INFO,
    EventCreateInfo => EVENT_CREATE_INFO,
    QueryPoolCreateInfo => QUERY_POOL_CREATE_INFO,
    BufferCreateInfo => BUFFER_CREATE_INFO,
    BufferViewCreateInfo => BUFFER_VIEW_CREATE_INFO,
    ImageCreateInfo => IMAGE_CREATE_INFO,
    ImageViewCreateInfo => IMAGE_VIEW_CREATE_INFO,
    ShaderModuleCreateInfo => SHADER_MODULE_CREATE_INFO,
    PipelineCacheCreateInfo => PIPELINE_CACHE_CREATE_INFO,
    SpecializationInfo,
    PipelineShaderStageCreateInfo => PIPELINE_SHADER_STAGE_CREATE_INFO,
    ComputePipelineCreateInfo => COMPUTE_PIPELINE_CREATE_INFO,
    PipelineVertexInputStateCreateInfo => PIPELINE_VERTEX_INPUT_STATE_CREATE_INFO,
    PipelineInputAssemblyStateCreateInfo => PIPELINE_INPUT_ASSEMBLY_STATE_CREATE_INFO,
    PipelineTessellationStateCreateInfo => PIPELINE_TESSELLATION_STATE_CREATE_INFO,
    PipelineViewportStateCreateInfo => PIPELINE_VIEWPORT_STATE_CREATE_INFO,
    PipelineRasterizationStateCreateInfo => PIPELINE_RASTERIZATION_STATE_CREATE_INFO,
    PipelineMultisampleStateCreateInfo => PIPELINE_MULTISAMPLE_STATE_CREATE_INFO,
    PipelineDepthStencilStateCreateInfo => PIPELINE_DEPTH_STENCIL_STATE_CREATE_INFO,
    PipelineColorBlendStateCreateInfo => PIPELINE_COLOR_BLEND_STATE_CREATE_INFO,
    PipelineDynamicStateCreateInfo => PIPELINE_DYNAMIC_STATE_CREATE_INFO,
    GraphicsPipelineCreateInfo => GRAPHICS_PIPELINE_CREATE_INFO,
    PipelineLayoutCreateInfo => PIPELINE_LAYOUT_CREATE_INFO,
    SamplerCreateInfo => SAMPLER_CREATE_INFO,
    DescriptorSetLayoutBinding,
    DescriptorSetLayoutCreateInfo => DESCRIPTOR_SET_LAYOUT_CREATE_INFO,
    DescriptorPoolCreateInfo => DESCRIPTOR_POOL_CREATE_INFO,
    DescriptorSetAllocateInfo => DESCRIPTOR_SET_ALLOCATE_INFO,
    WriteDescriptorSet => WRITE_DESCRIPTOR_SET,
    CopyDescriptorSet => COPY_DESCRIPTOR_SET,
    FramebufferCreateInfo => FRAMEBUFFER_CREATE_INFO,
    SubpassDescription,
    RenderPassCreateInfo => RENDER_PASS_CREATE_INFO,
    RenderPassBeginInfo => RENDER_PASS_BEGIN_INFO,
    CommandPoolCreateInfo => COMMAND_POOL_CREATE_INFO,
    CommandBufferAllocateInfo => COMMAND_BUFFER_ALLOCATE_INFO,
    CommandBufferInheritanceInfo => COMMAND_BUFFER_INHERITANCE_INFO,
    CommandBufferBeginInfo => COMMAND_BUFFER_BEGIN_INFO,
    ClearColorValue,
    ClearValue,
    MemoryBarrier => MEMORY_BARRIER,
    BufferMemoryBarrier => BUFFER_MEMORY_BARRIER,
    ImageMemoryBarrier => IMAGE_MEMORY_BARRIER,
    BindBufferMemoryInfo => BIND_BUFFER_MEMORY_INFO,
    BindImageMemoryInfo => BIND_IMAGE_MEMORY_INFO,
    BufferMemoryRequirementsInfo2 => BUFFER_MEMORY_REQUIREMENTS_INFO_2,
    ImageMemoryRequirementsInfo2 => IMAGE_MEMORY_REQUIREMENTS_INFO_2,
    MemoryRequirements2 => MEMORY_REQUIREMENTS_2,
    PhysicalDeviceGroupProperties => PHYSICAL_DEVICE_GROUP_PROPERTIES,
    FormatProperties2 => FORMAT_PROPERTIES_2,
    PhysicalDeviceImageFormatInfo2 => PHYSICAL_DEVICE_IMAGE_FORMAT_INFO_2,
    ImageFormatProperties2 => IMAGE_FORMAT_PROPERTIES_2,
    QueueFamilyProperties2 => QUEUE_FAMILY_PROPERTIES_2,
    PhysicalDeviceMemoryProperties2 => PHYSICAL_DEVICE_MEMORY_PROPERTIES_2,
    PhysicalDeviceSparseImageFormatInfo2 => PHYSICAL_DEVICE_SPARSE_IMAGE_FORMAT_INFO_2,
    SparseImageFormatProperties2 => SPARSE_IMAGE_FORMAT_PROPERTIES_2,
    PhysicalDeviceExternalBufferInfo => PHYSICAL_DEVICE_EXTERNAL_BUFFER_INFO,
    ExternalBufferProperties => EXTERNAL_BUFFER_PROPERTIES,
    PhysicalDeviceExternalFenceInfo => PHYSICAL_DEVICE_EXTERNAL_FENCE_INFO,
    ExternalFenceProperties => EXTERNAL_FENCE_PROPERTIES,
    PhysicalDeviceExternalSemaphoreInfo => PHYSICAL_DEVICE_EXTERNAL_SEMAPHORE_INFO,
    ExternalSemaphoreProperties => EXTERNAL_SEMAPHORE_PROPERTIES,
    ImageSparseMemoryRequirementsInfo2 => IMAGE_SPARSE_MEMORY_REQUIREMENTS_INFO_2,
    SparseImageMemoryRequirements2 => SPARSE_IMAGE_MEMORY_REQUIREMENTS_2,
    DeviceQueueInfo2 => DEVICE_QUEUE_INFO_2,
    SamplerYcbcrConversionCreateInfo => SAMPLER_YCBCR_CONVERSION_CREATE_INFO,
    DescriptorUpdateTemplateCreateInfo => DESCRIPTOR_UPDATE_TEMPLATE_CREATE_INFO,
    DescriptorSetLayoutSupport => DESCRIPTOR_SET_LAYOUT_SUPPORT,
    SemaphoreWaitInfo => SEMAPHORE_WAIT_INFO,
    SemaphoreSignalInfo => SEMAPHORE_SIGNAL_INFO,
    BufferDeviceAddressInfo => BUFFER_DEVICE_ADDRESS_INFO,
    AttachmentDescription2 => ATTACHMENT_DESCRIPTION_2,
    AttachmentReference2 => ATTACHMENT_REFERENCE_2,
    SubpassDescription2 => SUBPASS_DESCRIPTION_2,
    SubpassDependency2 => SUBPASS_DEPENDENCY_2,
    RenderPassCreateInfo2 => RENDER_PASS_CREATE_INFO_2,
    SubpassBeginInfo => SUBPASS_BEGIN_INFO,
    SubpassEndInfo => SUBPASS_END_INFO,
    DeviceMemoryOpaqueCaptureAddressInfo => DEVICE_MEMORY_OPAQUE_CAPTURE_ADDRESS_INFO,
    MemoryBarrier2 => MEMORY_BARRIER_2,
    BufferMemoryBarrier2 => BUFFER_MEMORY_BARRIER_2,
    ImageMemoryBarrier2 => IMAGE_MEMORY_BARRIER_2,
    DependencyInfo => DEPENDENCY_INFO,
    SemaphoreSubmitInfo => SEMAPHORE_SUBMIT_INFO,
    CommandBufferSubmitInfo => COMMAND_BUFFER_SUBMIT_INFO,
    SubmitInfo2 => SUBMIT_INFO_2,
    RenderingAttachmentInfo => RENDERING_ATTACHMENT_INFO,
    RenderingInfo => RENDERING_INFO,
    PhysicalDeviceToolProperties => PHYSICAL_DEVICE_TOOL_PROPERTIES,
    PrivateDataSlotCreateInfo => PRIVATE_DATA_SLOT_CREATE_INFO,
    BufferCopy2 => BUFFER_COPY_2,
    CopyBufferInfo2 => COPY_BUFFER_INFO_2,
    ImageCopy2 => IMAGE_COPY_2,
    CopyImageInfo2 => COPY_IMAGE_INFO_2,
    BufferImageCopy2 => BUFFER_IMAGE_COPY_2,
    CopyBufferToImageInfo2 => COPY_BUFFER_TO_IMAGE_INFO_2,
    CopyImageToBufferInfo2 => COPY_IMAGE_TO_BUFFER_INFO_2,
    ImageBlit2 => IMAGE_BLIT_2,
    BlitImageInfo2 => BLIT_IMAGE_INFO_2,
    ImageResolve2 => IMAGE_RESOLVE_2,
    ResolveImageInfo2 => RESOLVE_IMAGE_INFO_2,
    DeviceBufferMemoryRequirements => DEVICE_BUFFER_MEMORY_REQUIREMENTS,
    DeviceImageMemoryRequirements => DEVICE_IMAGE_MEMORY_REQUIREMENTS,
    SurfaceCapabilitiesKHR,
    SwapchainCreateInfoKHR => SWAPCHAIN_CREATE_INFO_KHR,
    PresentInfoKHR => PRESENT_INFO_KHR,
    DebugUtilsLabelEXT => DEBUG_UTILS_LABEL_EXT,
    DebugUtilsObjectNameInfoEXT => DEBUG_UTILS_OBJECT_NAME_INFO_EXT,
    DebugUtilsObjectTagInfoEXT => DEBUG_UTILS_OBJECT_TAG_INFO_EXT,
    DebugUtilsMessengerCallbackDataEXT => DEBUG_UTILS_MESSENGER_CALLBACK_DATA_EXT,
    DebugUtilsMessengerCreateInfoEXT => DEBUG_UTILS_MESSENGER_CREATE_INFO_EXT,
}
