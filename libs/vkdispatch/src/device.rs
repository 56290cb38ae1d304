use std::ffi::c_void;

use crate::{command_buffer::CommandBuffer, enumerate::enumerate, table::DeviceTable, vk};

/// A `VkDevice` bound to its dispatch table.
///
/// Mirrors [`crate::Instance`]: calls taking an allocator have a short form
/// using the allocator stored at construction and a `_with_allocator` form.
#[derive(Clone, Copy)]
pub struct Device<'a> {
    handle: vk::Device,
    table: &'a DeviceTable,
    allocator: Option<&'a vk::AllocationCallbacks>,
}

impl std::fmt::Debug for Device<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Device")
            .field("handle", &self.handle)
            .field("allocator", &self.allocator.is_some())
            .finish_non_exhaustive()
    }
}

impl<'a> Device<'a> {
    pub fn new(handle: vk::Device, table: &'a DeviceTable) -> Self {
        Self::with_allocator(handle, table, None)
    }

    pub fn with_allocator(
        handle: vk::Device,
        table: &'a DeviceTable,
        allocator: Option<&'a vk::AllocationCallbacks>,
    ) -> Self {
        Self {
            handle,
            table,
            allocator,
        }
    }

    pub fn handle(&self) -> vk::Device {
        self.handle
    }

    pub fn table(&self) -> &'a DeviceTable {
        self.table
    }

    pub fn allocator(&self) -> Option<&'a vk::AllocationCallbacks> {
        self.allocator
    }

    /// Binds a command buffer allocated from this device to the same table.
    pub fn command_buffer(&self, handle: vk::CommandBuffer) -> CommandBuffer<'a> {
        CommandBuffer::new(handle, self.table)
    }

    #[inline]
    pub unsafe fn destroy_device(&self) {
        unsafe { self.destroy_device_with_allocator(self.allocator) }
    }

    #[inline]
    pub unsafe fn destroy_device_with_allocator(
        &self,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_0.destroy_device)(self.handle, allocator)
    }

    #[inline]
    pub unsafe fn get_device_queue(
        &self,
        queue_family_index: u32,
        queue_index: u32,
        queue: &mut vk::Queue,
    ) {
        (self.table.v1_0.get_device_queue)(self.handle, queue_family_index, queue_index, queue)
    }

    #[inline]
    pub unsafe fn queue_submit(
        &self,
        queue: vk::Queue,
        submits: &[vk::SubmitInfo],
        fence: vk::Fence,
    ) -> vk::Result {
        (self.table.v1_0.queue_submit)(queue, submits.len() as u32, submits.as_ptr(), fence)
    }

    #[inline]
    pub unsafe fn queue_wait_idle(&self, queue: vk::Queue) -> vk::Result {
        (self.table.v1_0.queue_wait_idle)(queue)
    }

    #[inline]
    pub unsafe fn device_wait_idle(&self) -> vk::Result {
        (self.table.v1_0.device_wait_idle)(self.handle)
    }

    #[inline]
    pub unsafe fn allocate_memory(
        &self,
        allocate_info: &vk::MemoryAllocateInfo,
        memory: &mut vk::DeviceMemory,
    ) -> vk::Result {
        unsafe { self.allocate_memory_with_allocator(allocate_info, self.allocator, memory) }
    }

    #[inline]
    pub unsafe fn allocate_memory_with_allocator(
        &self,
        allocate_info: &vk::MemoryAllocateInfo,
        allocator: Option<&vk::AllocationCallbacks>,
        memory: &mut vk::DeviceMemory,
    ) -> vk::Result {
        (self.table.v1_0.allocate_memory)(self.handle, allocate_info, allocator, memory)
    }

    #[inline]
    pub unsafe fn free_memory(&self, memory: vk::DeviceMemory) {
        unsafe { self.free_memory_with_allocator(memory, self.allocator) }
    }

    #[inline]
    pub unsafe fn free_memory_with_allocator(
        &self,
        memory: vk::DeviceMemory,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_0.free_memory)(self.handle, memory, allocator)
    }

    #[inline]
    pub unsafe fn map_memory(
        &self,
        memory: vk::DeviceMemory,
        offset: vk::DeviceSize,
        size: vk::DeviceSize,
        flags: vk::MemoryMapFlags,
        data: &mut *mut c_void,
    ) -> vk::Result {
        (self.table.v1_0.map_memory)(self.handle, memory, offset, size, flags, data)
    }

    #[inline]
    pub unsafe fn unmap_memory(&self, memory: vk::DeviceMemory) {
        (self.table.v1_0.unmap_memory)(self.handle, memory)
    }

    #[inline]
    pub unsafe fn flush_mapped_memory_ranges(
        &self,
        memory_ranges: &[vk::MappedMemoryRange],
    ) -> vk::Result {
        (self.table.v1_0.flush_mapped_memory_ranges)(
            self.handle,
            memory_ranges.len() as u32,
            memory_ranges.as_ptr(),
        )
    }

    #[inline]
    pub unsafe fn invalidate_mapped_memory_ranges(
        &self,
        memory_ranges: &[vk::MappedMemoryRange],
    ) -> vk::Result {
        (self.table.v1_0.invalidate_mapped_memory_ranges)(
            self.handle,
            memory_ranges.len() as u32,
            memory_ranges.as_ptr(),
        )
    }

    #[inline]
    pub unsafe fn get_device_memory_commitment(
        &self,
        memory: vk::DeviceMemory,
        committed_memory_in_bytes: &mut vk::DeviceSize,
    ) {
        (self.table.v1_0.get_device_memory_commitment)(
            self.handle,
            memory,
            committed_memory_in_bytes,
        )
    }

    #[inline]
    pub unsafe fn bind_buffer_memory(
        &self,
        buffer: vk::Buffer,
        memory: vk::DeviceMemory,
        memory_offset: vk::DeviceSize,
    ) -> vk::Result {
        (self.table.v1_0.bind_buffer_memory)(self.handle, buffer, memory, memory_offset)
    }

    #[inline]
    pub unsafe fn bind_image_memory(
        &self,
        image: vk::Image,
        memory: vk::DeviceMemory,
        memory_offset: vk::DeviceSize,
    ) -> vk::Result {
        (self.table.v1_0.bind_image_memory)(self.handle, image, memory, memory_offset)
    }

    #[inline]
    pub unsafe fn get_buffer_memory_requirements(
        &self,
        buffer: vk::Buffer,
        memory_requirements: &mut vk::MemoryRequirements,
    ) {
        (self.table.v1_0.get_buffer_memory_requirements)(self.handle, buffer, memory_requirements)
    }

    #[inline]
    pub unsafe fn get_image_memory_requirements(
        &self,
        image: vk::Image,
        memory_requirements: &mut vk::MemoryRequirements,
    ) {
        (self.table.v1_0.get_image_memory_requirements)(self.handle, image, memory_requirements)
    }

    #[inline]
    pub unsafe fn get_image_sparse_memory_requirements(
        &self,
        image: vk::Image,
        sparse_memory_requirement_count: &mut u32,
        sparse_memory_requirements: *mut vk::SparseImageMemoryRequirements,
    ) {
        (self.table.v1_0.get_image_sparse_memory_requirements)(
            self.handle,
            image,
            sparse_memory_requirement_count,
            sparse_memory_requirements,
        )
    }

    #[inline]
    pub unsafe fn queue_bind_sparse(
        &self,
        queue: vk::Queue,
        bind_info: &[vk::BindSparseInfo],
        fence: vk::Fence,
    ) -> vk::Result {
        (self.table.v1_0.queue_bind_sparse)(
            queue,
            bind_info.len() as u32,
            bind_info.as_ptr(),
            fence,
        )
    }

    #[inline]
    pub unsafe fn create_fence(
        &self,
        create_info: &vk::FenceCreateInfo,
        fence: &mut vk::Fence,
    ) -> vk::Result {
        unsafe { self.create_fence_with_allocator(create_info, self.allocator, fence) }
    }

    #[inline]
    pub unsafe fn create_fence_with_allocator(
        &self,
        create_info: &vk::FenceCreateInfo,
        allocator: Option<&vk::AllocationCallbacks>,
        fence: &mut vk::Fence,
    ) -> vk::Result {
        (self.table.v1_0.create_fence)(self.handle, create_info, allocator, fence)
    }

    #[inline]
    pub unsafe fn destroy_fence(&self, fence: vk::Fence) {
        unsafe { self.destroy_fence_with_allocator(fence, self.allocator) }
    }

    #[inline]
    pub unsafe fn destroy_fence_with_allocator(
        &self,
        fence: vk::Fence,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_0.destroy_fence)(self.handle, fence, allocator)
    }

    #[inline]
    pub unsafe fn create_semaphore(
        &self,
        create_info: &vk::SemaphoreCreateInfo,
        semaphore: &mut vk::Semaphore,
    ) -> vk::Result {
        unsafe { self.create_semaphore_with_allocator(create_info, self.allocator, semaphore) }
    }

    #[inline]
    pub unsafe fn create_semaphore_with_allocator(
        &self,
        create_info: &vk::SemaphoreCreateInfo,
        allocator: Option<&vk::AllocationCallbacks>,
        semaphore: &mut vk::Semaphore,
    ) -> vk::Result {
        (self.table.v1_0.create_semaphore)(self.handle, create_info, allocator, semaphore)
    }

    #[inline]
    pub unsafe fn destroy_semaphore(&self, semaphore: vk::Semaphore) {
        unsafe { self.destroy_semaphore_with_allocator(semaphore, self.allocator) }
    }

    #[inline]
    pub unsafe fn destroy_semaphore_with_allocator(
        &self,
        semaphore: vk::Semaphore,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_0.destroy_semaphore)(self.handle, semaphore, allocator)
    }

    #[inline]
    pub unsafe fn create_event(
        &self,
        create_info: &vk::EventCreateInfo,
        event: &mut vk::Event,
    ) -> vk::Result {
        unsafe { self.create_event_with_allocator(create_info, self.allocator, event) }
    }

    #[inline]
    pub unsafe fn create_event_with_allocator(
        &self,
        create_info: &vk::EventCreateInfo,
        allocator: Option<&vk::AllocationCallbacks>,
        event: &mut vk::Event,
    ) -> vk::Result {
        (self.table.v1_0.create_event)(self.handle, create_info, allocator, event)
    }

    #[inline]
    pub unsafe fn destroy_event(&self, event: vk::Event) {
        unsafe { self.destroy_event_with_allocator(event, self.allocator) }
    }

    #[inline]
    pub unsafe fn destroy_event_with_allocator(
        &self,
        event: vk::Event,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_0.destroy_event)(self.handle, event, allocator)
    }

    #[inline]
    pub unsafe fn create_query_pool(
        &self,
        create_info: &vk::QueryPoolCreateInfo,
        query_pool: &mut vk::QueryPool,
    ) -> vk::Result {
        unsafe { self.create_query_pool_with_allocator(create_info, self.allocator, query_pool) }
    }

    #[inline]
    pub unsafe fn create_query_pool_with_allocator(
        &self,
        create_info: &vk::QueryPoolCreateInfo,
        allocator: Option<&vk::AllocationCallbacks>,
        query_pool: &mut vk::QueryPool,
    ) -> vk::Result {
        (self.table.v1_0.create_query_pool)(self.handle, create_info, allocator, query_pool)
    }

    #[inline]
    pub unsafe fn destroy_query_pool(&self, query_pool: vk::QueryPool) {
        unsafe { self.destroy_query_pool_with_allocator(query_pool, self.allocator) }
    }

    #[inline]
    pub unsafe fn destroy_query_pool_with_allocator(
        &self,
        query_pool: vk::QueryPool,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_0.destroy_query_pool)(self.handle, query_pool, allocator)
    }

    #[inline]
    pub unsafe fn create_buffer(
        &self,
        create_info: &vk::BufferCreateInfo,
        buffer: &mut vk::Buffer,
    ) -> vk::Result {
        unsafe { self.create_buffer_with_allocator(create_info, self.allocator, buffer) }
    }

    #[inline]
    pub unsafe fn create_buffer_with_allocator(
        &self,
        create_info: &vk::BufferCreateInfo,
        allocator: Option<&vk::AllocationCallbacks>,
        buffer: &mut vk::Buffer,
    ) -> vk::Result {
        (self.table.v1_0.create_buffer)(self.handle, create_info, allocator, buffer)
    }

    #[inline]
    pub unsafe fn destroy_buffer(&self, buffer: vk::Buffer) {
        unsafe { self.destroy_buffer_with_allocator(buffer, self.allocator) }
    }

    #[inline]
    pub unsafe fn destroy_buffer_with_allocator(
        &self,
        buffer: vk::Buffer,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_0.destroy_buffer)(self.handle, buffer, allocator)
    }

    #[inline]
    pub unsafe fn create_buffer_view(
        &self,
        create_info: &vk::BufferViewCreateInfo,
        buffer_view: &mut vk::BufferView,
    ) -> vk::Result {
        unsafe { self.create_buffer_view_with_allocator(create_info, self.allocator, buffer_view) }
    }

    #[inline]
    pub unsafe fn create_buffer_view_with_allocator(
        &self,
        create_info: &vk::BufferViewCreateInfo,
        allocator: Option<&vk::AllocationCallbacks>,
        buffer_view: &mut vk::BufferView,
    ) -> vk::Result {
        (self.table.v1_0.create_buffer_view)(self.handle, create_info, allocator, buffer_view)
    }

    #[inline]
    pub unsafe fn destroy_buffer_view(&self, buffer_view: vk::BufferView) {
        unsafe { self.destroy_buffer_view_with_allocator(buffer_view, self.allocator) }
    }

    #[inline]
    pub unsafe fn destroy_buffer_view_with_allocator(
        &self,
        buffer_view: vk::BufferView,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_0.destroy_buffer_view)(self.handle, buffer_view, allocator)
    }

    #[inline]
    pub unsafe fn create_image(
        &self,
        create_info: &vk::ImageCreateInfo,
        image: &mut vk::Image,
    ) -> vk::Result {
        unsafe { self.create_image_with_allocator(create_info, self.allocator, image) }
    }

    #[inline]
    pub unsafe fn create_image_with_allocator(
        &self,
        create_info: &vk::ImageCreateInfo,
        allocator: Option<&vk::AllocationCallbacks>,
        image: &mut vk::Image,
    ) -> vk::Result {
        (self.table.v1_0.create_image)(self.handle, create_info, allocator, image)
    }

    #[inline]
    pub unsafe fn destroy_image(&self, image: vk::Image) {
        unsafe { self.destroy_image_with_allocator(image, self.allocator) }
    }

    #[inline]
    pub unsafe fn destroy_image_with_allocator(
        &self,
        image: vk::Image,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_0.destroy_image)(self.handle, image, allocator)
    }

    #[inline]
    pub unsafe fn create_image_view(
        &self,
        create_info: &vk::ImageViewCreateInfo,
        image_view: &mut vk::ImageView,
    ) -> vk::Result {
        unsafe { self.create_image_view_with_allocator(create_info, self.allocator, image_view) }
    }

    #[inline]
    pub unsafe fn create_image_view_with_allocator(
        &self,
        create_info: &vk::ImageViewCreateInfo,
        allocator: Option<&vk::AllocationCallbacks>,
        image_view: &mut vk::ImageView,
    ) -> vk::Result {
        (self.table.v1_0.create_image_view)(self.handle, create_info, allocator, image_view)
    }

    #[inline]
    pub unsafe fn destroy_image_view(&self, image_view: vk::ImageView) {
        unsafe { self.destroy_image_view_with_allocator(image_view, self.allocator) }
    }

    #[inline]
    pub unsafe fn destroy_image_view_with_allocator(
        &self,
        image_view: vk::ImageView,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_0.destroy_image_view)(self.handle, image_view, allocator)
    }

    #[inline]
    pub unsafe fn create_shader_module(
        &self,
        create_info: &vk::ShaderModuleCreateInfo,
        shader_module: &mut vk::ShaderModule,
    ) -> vk::Result {
        unsafe {
            self.create_shader_module_with_allocator(create_info, self.allocator, shader_module)
        }
    }

    #[inline]
    pub unsafe fn create_shader_module_with_allocator(
        &self,
        create_info: &vk::ShaderModuleCreateInfo,
        allocator: Option<&vk::AllocationCallbacks>,
        shader_module: &mut vk::ShaderModule,
    ) -> vk::Result {
        (self.table.v1_0.create_shader_module)(self.handle, create_info, allocator, shader_module)
    }

    #[inline]
    pub unsafe fn destroy_shader_module(&self, shader_module: vk::ShaderModule) {
        unsafe { self.destroy_shader_module_with_allocator(shader_module, self.allocator) }
    }

    #[inline]
    pub unsafe fn destroy_shader_module_with_allocator(
        &self,
        shader_module: vk::ShaderModule,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_0.destroy_shader_module)(self.handle, shader_module, allocator)
    }

    #[inline]
    pub unsafe fn create_pipeline_cache(
        &self,
        create_info: &vk::PipelineCacheCreateInfo,
        pipeline_cache: &mut vk::PipelineCache,
    ) -> vk::Result {
        unsafe {
            self.create_pipeline_cache_with_allocator(create_info, self.allocator, pipeline_cache)
        }
    }

    #[inline]
    pub unsafe fn create_pipeline_cache_with_allocator(
        &self,
        create_info: &vk::PipelineCacheCreateInfo,
        allocator: Option<&vk::AllocationCallbacks>,
        pipeline_cache: &mut vk::PipelineCache,
    ) -> vk::Result {
        (self.table.v1_0.create_pipeline_cache)(self.handle, create_info, allocator, pipeline_cache)
    }

    #[inline]
    pub unsafe fn destroy_pipeline_cache(&self, pipeline_cache: vk::PipelineCache) {
        unsafe { self.destroy_pipeline_cache_with_allocator(pipeline_cache, self.allocator) }
    }

    #[inline]
    pub unsafe fn destroy_pipeline_cache_with_allocator(
        &self,
        pipeline_cache: vk::PipelineCache,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_0.destroy_pipeline_cache)(self.handle, pipeline_cache, allocator)
    }

    #[inline]
    pub unsafe fn create_pipeline_layout(
        &self,
        create_info: &vk::PipelineLayoutCreateInfo,
        pipeline_layout: &mut vk::PipelineLayout,
    ) -> vk::Result {
        unsafe {
            self.create_pipeline_layout_with_allocator(create_info, self.allocator, pipeline_layout)
        }
    }

    #[inline]
    pub unsafe fn create_pipeline_layout_with_allocator(
        &self,
        create_info: &vk::PipelineLayoutCreateInfo,
        allocator: Option<&vk::AllocationCallbacks>,
        pipeline_layout: &mut vk::PipelineLayout,
    ) -> vk::Result {
        (self.table.v1_0.create_pipeline_layout)(
            self.handle,
            create_info,
            allocator,
            pipeline_layout,
        )
    }

    #[inline]
    pub unsafe fn destroy_pipeline_layout(&self, pipeline_layout: vk::PipelineLayout) {
        unsafe { self.destroy_pipeline_layout_with_allocator(pipeline_layout, self.allocator) }
    }

    #[inline]
    pub unsafe fn destroy_pipeline_layout_with_allocator(
        &self,
        pipeline_layout: vk::PipelineLayout,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_0.destroy_pipeline_layout)(self.handle, pipeline_layout, allocator)
    }

    #[inline]
    pub unsafe fn create_sampler(
        &self,
        create_info: &vk::SamplerCreateInfo,
        sampler: &mut vk::Sampler,
    ) -> vk::Result {
        unsafe { self.create_sampler_with_allocator(create_info, self.allocator, sampler) }
    }

    #[inline]
    pub unsafe fn create_sampler_with_allocator(
        &self,
        create_info: &vk::SamplerCreateInfo,
        allocator: Option<&vk::AllocationCallbacks>,
        sampler: &mut vk::Sampler,
    ) -> vk::Result {
        (self.table.v1_0.create_sampler)(self.handle, create_info, allocator, sampler)
    }

    #[inline]
    pub unsafe fn destroy_sampler(&self, sampler: vk::Sampler) {
        unsafe { self.destroy_sampler_with_allocator(sampler, self.allocator) }
    }

    #[inline]
    pub unsafe fn destroy_sampler_with_allocator(
        &self,
        sampler: vk::Sampler,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_0.destroy_sampler)(self.handle, sampler, allocator)
    }

    #[inline]
    pub unsafe fn create_descriptor_set_layout(
        &self,
        create_info: &vk::DescriptorSetLayoutCreateInfo,
        descriptor_set_layout: &mut vk::DescriptorSetLayout,
    ) -> vk::Result {
        unsafe {
            self.create_descriptor_set_layout_with_allocator(
                create_info,
                self.allocator,
                descriptor_set_layout,
            )
        }
    }

    #[inline]
    pub unsafe fn create_descriptor_set_layout_with_allocator(
        &self,
        create_info: &vk::DescriptorSetLayoutCreateInfo,
        allocator: Option<&vk::AllocationCallbacks>,
        descriptor_set_layout: &mut vk::DescriptorSetLayout,
    ) -> vk::Result {
        (self.table.v1_0.create_descriptor_set_layout)(
            self.handle,
            create_info,
            allocator,
            descriptor_set_layout,
        )
    }

    #[inline]
    pub unsafe fn destroy_descriptor_set_layout(
        &self,
        descriptor_set_layout: vk::DescriptorSetLayout,
    ) {
        unsafe {
            self.destroy_descriptor_set_layout_with_allocator(descriptor_set_layout, self.allocator)
        }
    }

    #[inline]
    pub unsafe fn destroy_descriptor_set_layout_with_allocator(
        &self,
        descriptor_set_layout: vk::DescriptorSetLayout,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_0.destroy_descriptor_set_layout)(
            self.handle,
            descriptor_set_layout,
            allocator,
        )
    }

    #[inline]
    pub unsafe fn create_descriptor_pool(
        &self,
        create_info: &vk::DescriptorPoolCreateInfo,
        descriptor_pool: &mut vk::DescriptorPool,
    ) -> vk::Result {
        unsafe {
            self.create_descriptor_pool_with_allocator(create_info, self.allocator, descriptor_pool)
        }
    }

    #[inline]
    pub unsafe fn create_descriptor_pool_with_allocator(
        &self,
        create_info: &vk::DescriptorPoolCreateInfo,
        allocator: Option<&vk::AllocationCallbacks>,
        descriptor_pool: &mut vk::DescriptorPool,
    ) -> vk::Result {
        (self.table.v1_0.create_descriptor_pool)(
            self.handle,
            create_info,
            allocator,
            descriptor_pool,
        )
    }

    #[inline]
    pub unsafe fn destroy_descriptor_pool(&self, descriptor_pool: vk::DescriptorPool) {
        unsafe { self.destroy_descriptor_pool_with_allocator(descriptor_pool, self.allocator) }
    }

    #[inline]
    pub unsafe fn destroy_descriptor_pool_with_allocator(
        &self,
        descriptor_pool: vk::DescriptorPool,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_0.destroy_descriptor_pool)(self.handle, descriptor_pool, allocator)
    }

    #[inline]
    pub unsafe fn create_framebuffer(
        &self,
        create_info: &vk::FramebufferCreateInfo,
        framebuffer: &mut vk::Framebuffer,
    ) -> vk::Result {
        unsafe { self.create_framebuffer_with_allocator(create_info, self.allocator, framebuffer) }
    }

    #[inline]
    pub unsafe fn create_framebuffer_with_allocator(
        &self,
        create_info: &vk::FramebufferCreateInfo,
        allocator: Option<&vk::AllocationCallbacks>,
        framebuffer: &mut vk::Framebuffer,
    ) -> vk::Result {
        (self.table.v1_0.create_framebuffer)(self.handle, create_info, allocator, framebuffer)
    }

    #[inline]
    pub unsafe fn destroy_framebuffer(&self, framebuffer: vk::Framebuffer) {
        unsafe { self.destroy_framebuffer_with_allocator(framebuffer, self.allocator) }
    }

    #[inline]
    pub unsafe fn destroy_framebuffer_with_allocator(
        &self,
        framebuffer: vk::Framebuffer,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_0.destroy_framebuffer)(self.handle, framebuffer, allocator)
    }

    #[inline]
    pub unsafe fn create_render_pass(
        &self,
        create_info: &vk::RenderPassCreateInfo,
        render_pass: &mut vk::RenderPass,
    ) -> vk::Result {
        unsafe { self.create_render_pass_with_allocator(create_info, self.allocator, render_pass) }
    }

    #[inline]
    pub unsafe fn create_render_pass_with_allocator(
        &self,
        create_info: &vk::RenderPassCreateInfo,
        allocator: Option<&vk::AllocationCallbacks>,
        render_pass: &mut vk::RenderPass,
    ) -> vk::Result {
        (self.table.v1_0.create_render_pass)(self.handle, create_info, allocator, render_pass)
    }

    #[inline]
    pub unsafe fn destroy_render_pass(&self, render_pass: vk::RenderPass) {
        unsafe { self.destroy_render_pass_with_allocator(render_pass, self.allocator) }
    }

    #[inline]
    pub unsafe fn destroy_render_pass_with_allocator(
        &self,
        render_pass: vk::RenderPass,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_0.destroy_render_pass)(self.handle, render_pass, allocator)
    }

    #[inline]
    pub unsafe fn get_render_area_granularity(
        &self,
        render_pass: vk::RenderPass,
        granularity: &mut vk::Extent2d,
    ) {
        (self.table.v1_0.get_render_area_granularity)(self.handle, render_pass, granularity)
    }

    #[inline]
    pub unsafe fn create_command_pool(
        &self,
        create_info: &vk::CommandPoolCreateInfo,
        command_pool: &mut vk::CommandPool,
    ) -> vk::Result {
        unsafe {
            self.create_command_pool_with_allocator(create_info, self.allocator, command_pool)
        }
    }

    #[inline]
    pub unsafe fn create_command_pool_with_allocator(
        &self,
        create_info: &vk::CommandPoolCreateInfo,
        allocator: Option<&vk::AllocationCallbacks>,
        command_pool: &mut vk::CommandPool,
    ) -> vk::Result {
        (self.table.v1_0.create_command_pool)(self.handle, create_info, allocator, command_pool)
    }

    #[inline]
    pub unsafe fn destroy_command_pool(&self, command_pool: vk::CommandPool) {
        unsafe { self.destroy_command_pool_with_allocator(command_pool, self.allocator) }
    }

    #[inline]
    pub unsafe fn destroy_command_pool_with_allocator(
        &self,
        command_pool: vk::CommandPool,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_0.destroy_command_pool)(self.handle, command_pool, allocator)
    }

    #[inline]
    pub unsafe fn reset_fences(&self, fences: &[vk::Fence]) -> vk::Result {
        (self.table.v1_0.reset_fences)(self.handle, fences.len() as u32, fences.as_ptr())
    }

    #[inline]
    pub unsafe fn get_fence_status(&self, fence: vk::Fence) -> vk::Result {
        (self.table.v1_0.get_fence_status)(self.handle, fence)
    }

    #[inline]
    pub unsafe fn wait_for_fences(
        &self,
        fences: &[vk::Fence],
        wait_all: vk::Bool32,
        timeout: u64,
    ) -> vk::Result {
        (self.table.v1_0.wait_for_fences)(
            self.handle,
            fences.len() as u32,
            fences.as_ptr(),
            wait_all,
            timeout,
        )
    }

    #[inline]
    pub unsafe fn get_event_status(&self, event: vk::Event) -> vk::Result {
        (self.table.v1_0.get_event_status)(self.handle, event)
    }

    #[inline]
    pub unsafe fn set_event(&self, event: vk::Event) -> vk::Result {
        (self.table.v1_0.set_event)(self.handle, event)
    }

    #[inline]
    pub unsafe fn reset_event(&self, event: vk::Event) -> vk::Result {
        (self.table.v1_0.reset_event)(self.handle, event)
    }

    #[inline]
    pub unsafe fn get_query_pool_results(
        &self,
        query_pool: vk::QueryPool,
        first_query: u32,
        query_count: u32,
        data_size: usize,
        data: *mut c_void,
        stride: vk::DeviceSize,
        flags: vk::QueryResultFlags,
    ) -> vk::Result {
        (self.table.v1_0.get_query_pool_results)(
            self.handle,
            query_pool,
            first_query,
            query_count,
            data_size,
            data,
            stride,
            flags,
        )
    }

    #[inline]
    pub unsafe fn get_image_subresource_layout(
        &self,
        image: vk::Image,
        subresource: &vk::ImageSubresource,
        layout: &mut vk::SubresourceLayout,
    ) {
        (self.table.v1_0.get_image_subresource_layout)(self.handle, image, subresource, layout)
    }

    #[inline]
    pub unsafe fn get_pipeline_cache_data(
        &self,
        pipeline_cache: vk::PipelineCache,
        data_size: &mut usize,
        data: *mut c_void,
    ) -> vk::Result {
        (self.table.v1_0.get_pipeline_cache_data)(self.handle, pipeline_cache, data_size, data)
    }

    /// Reads the whole pipeline cache blob.
    pub unsafe fn pipeline_cache_data(
        &self,
        pipeline_cache: vk::PipelineCache,
    ) -> Result<Vec<u8>, vk::Result> {
        enumerate(|count, data: *mut u8| {
            let mut data_size = *count as usize;
            let result = unsafe {
                self.get_pipeline_cache_data(pipeline_cache, &mut data_size, data.cast())
            };
            *count = data_size as u32;
            result
        })
    }

    #[inline]
    pub unsafe fn merge_pipeline_caches(
        &self,
        dst_cache: vk::PipelineCache,
        src_caches: &[vk::PipelineCache],
    ) -> vk::Result {
        (self.table.v1_0.merge_pipeline_caches)(
            self.handle,
            dst_cache,
            src_caches.len() as u32,
            src_caches.as_ptr(),
        )
    }

    /// `pipelines` must hold one element per create info.
    #[inline]
    pub unsafe fn create_graphics_pipelines(
        &self,
        pipeline_cache: vk::PipelineCache,
        create_infos: &[vk::GraphicsPipelineCreateInfo],
        pipelines: &mut [vk::Pipeline],
    ) -> vk::Result {
        unsafe {
            self.create_graphics_pipelines_with_allocator(
                pipeline_cache,
                create_infos,
                self.allocator,
                pipelines,
            )
        }
    }

    #[inline]
    pub unsafe fn create_graphics_pipelines_with_allocator(
        &self,
        pipeline_cache: vk::PipelineCache,
        create_infos: &[vk::GraphicsPipelineCreateInfo],
        allocator: Option<&vk::AllocationCallbacks>,
        pipelines: &mut [vk::Pipeline],
    ) -> vk::Result {
        debug_assert_eq!(create_infos.len(), pipelines.len());
        (self.table.v1_0.create_graphics_pipelines)(
            self.handle,
            pipeline_cache,
            create_infos.len() as u32,
            create_infos.as_ptr(),
            allocator,
            pipelines.as_mut_ptr(),
        )
    }

    /// `pipelines` must hold one element per create info.
    #[inline]
    pub unsafe fn create_compute_pipelines(
        &self,
        pipeline_cache: vk::PipelineCache,
        create_infos: &[vk::ComputePipelineCreateInfo],
        pipelines: &mut [vk::Pipeline],
    ) -> vk::Result {
        unsafe {
            self.create_compute_pipelines_with_allocator(
                pipeline_cache,
                create_infos,
                self.allocator,
                pipelines,
            )
        }
    }

    #[inline]
    pub unsafe fn create_compute_pipelines_with_allocator(
        &self,
        pipeline_cache: vk::PipelineCache,
        create_infos: &[vk::ComputePipelineCreateInfo],
        allocator: Option<&vk::AllocationCallbacks>,
        pipelines: &mut [vk::Pipeline],
    ) -> vk::Result {
        debug_assert_eq!(create_infos.len(), pipelines.len());
        (self.table.v1_0.create_compute_pipelines)(
            self.handle,
            pipeline_cache,
            create_infos.len() as u32,
            create_infos.as_ptr(),
            allocator,
            pipelines.as_mut_ptr(),
        )
    }

    #[inline]
    pub unsafe fn destroy_pipeline(&self, pipeline: vk::Pipeline) {
        unsafe { self.destroy_pipeline_with_allocator(pipeline, self.allocator) }
    }

    #[inline]
    pub unsafe fn destroy_pipeline_with_allocator(
        &self,
        pipeline: vk::Pipeline,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_0.destroy_pipeline)(self.handle, pipeline, allocator)
    }

    #[inline]
    pub unsafe fn reset_descriptor_pool(
        &self,
        descriptor_pool: vk::DescriptorPool,
        flags: vk::DescriptorPoolResetFlags,
    ) -> vk::Result {
        (self.table.v1_0.reset_descriptor_pool)(self.handle, descriptor_pool, flags)
    }

    #[inline]
    pub unsafe fn allocate_descriptor_sets(
        &self,
        allocate_info: &vk::DescriptorSetAllocateInfo,
        descriptor_sets: *mut vk::DescriptorSet,
    ) -> vk::Result {
        (self.table.v1_0.allocate_descriptor_sets)(self.handle, allocate_info, descriptor_sets)
    }

    #[inline]
    pub unsafe fn free_descriptor_sets(
        &self,
        descriptor_pool: vk::DescriptorPool,
        descriptor_sets: &[vk::DescriptorSet],
    ) -> vk::Result {
        (self.table.v1_0.free_descriptor_sets)(
            self.handle,
            descriptor_pool,
            descriptor_sets.len() as u32,
            descriptor_sets.as_ptr(),
        )
    }

    #[inline]
    pub unsafe fn update_descriptor_sets(
        &self,
        descriptor_writes: &[vk::WriteDescriptorSet],
        descriptor_copies: &[vk::CopyDescriptorSet],
    ) {
        (self.table.v1_0.update_descriptor_sets)(
            self.handle,
            descriptor_writes.len() as u32,
            descriptor_writes.as_ptr(),
            descriptor_copies.len() as u32,
            descriptor_copies.as_ptr(),
        )
    }

    #[inline]
    pub unsafe fn reset_command_pool(
        &self,
        command_pool: vk::CommandPool,
        flags: vk::CommandPoolResetFlags,
    ) -> vk::Result {
        (self.table.v1_0.reset_command_pool)(self.handle, command_pool, flags)
    }

    #[inline]
    pub unsafe fn allocate_command_buffers(
        &self,
        allocate_info: &vk::CommandBufferAllocateInfo,
        command_buffers: *mut vk::CommandBuffer,
    ) -> vk::Result {
        (self.table.v1_0.allocate_command_buffers)(self.handle, allocate_info, command_buffers)
    }

    #[inline]
    pub unsafe fn free_command_buffers(
        &self,
        command_pool: vk::CommandPool,
        command_buffers: &[vk::CommandBuffer],
    ) {
        (self.table.v1_0.free_command_buffers)(
            self.handle,
            command_pool,
            command_buffers.len() as u32,
            command_buffers.as_ptr(),
        )
    }

    // VERSION_1_1

    #[inline]
    pub unsafe fn bind_buffer_memory2(
        &self,
        bind_infos: &[vk::BindBufferMemoryInfo],
    ) -> vk::Result {
        (self.table.v1_1.bind_buffer_memory2)(
            self.handle,
            bind_infos.len() as u32,
            bind_infos.as_ptr(),
        )
    }

    #[inline]
    pub unsafe fn bind_image_memory2(&self, bind_infos: &[vk::BindImageMemoryInfo]) -> vk::Result {
        (self.table.v1_1.bind_image_memory2)(
            self.handle,
            bind_infos.len() as u32,
            bind_infos.as_ptr(),
        )
    }

    #[inline]
    pub unsafe fn get_buffer_memory_requirements2(
        &self,
        info: &vk::BufferMemoryRequirementsInfo2,
        memory_requirements: &mut vk::MemoryRequirements2,
    ) {
        (self.table.v1_1.get_buffer_memory_requirements2)(self.handle, info, memory_requirements)
    }

    #[inline]
    pub unsafe fn get_image_memory_requirements2(
        &self,
        info: &vk::ImageMemoryRequirementsInfo2,
        memory_requirements: &mut vk::MemoryRequirements2,
    ) {
        (self.table.v1_1.get_image_memory_requirements2)(self.handle, info, memory_requirements)
    }

    #[inline]
    pub unsafe fn trim_command_pool(
        &self,
        command_pool: vk::CommandPool,
        flags: vk::CommandPoolTrimFlags,
    ) {
        (self.table.v1_1.trim_command_pool)(self.handle, command_pool, flags)
    }

    #[inline]
    pub unsafe fn get_device_group_peer_memory_features(
        &self,
        heap_index: u32,
        local_device_index: u32,
        remote_device_index: u32,
        peer_memory_features: &mut vk::PeerMemoryFeatureFlags,
    ) {
        (self.table.v1_1.get_device_group_peer_memory_features)(
            self.handle,
            heap_index,
            local_device_index,
            remote_device_index,
            peer_memory_features,
        )
    }

    #[inline]
    pub unsafe fn get_image_sparse_memory_requirements2(
        &self,
        info: &vk::ImageSparseMemoryRequirementsInfo2,
        sparse_memory_requirement_count: &mut u32,
        sparse_memory_requirements: *mut vk::SparseImageMemoryRequirements2,
    ) {
        (self.table.v1_1.get_image_sparse_memory_requirements2)(
            self.handle,
            info,
            sparse_memory_requirement_count,
            sparse_memory_requirements,
        )
    }

    #[inline]
    pub unsafe fn get_device_queue2(
        &self,
        queue_info: &vk::DeviceQueueInfo2,
        queue: &mut vk::Queue,
    ) {
        (self.table.v1_1.get_device_queue2)(self.handle, queue_info, queue)
    }

    #[inline]
    pub unsafe fn create_sampler_ycbcr_conversion(
        &self,
        create_info: &vk::SamplerYcbcrConversionCreateInfo,
        sampler_ycbcr_conversion: &mut vk::SamplerYcbcrConversion,
    ) -> vk::Result {
        unsafe {
            self.create_sampler_ycbcr_conversion_with_allocator(
                create_info,
                self.allocator,
                sampler_ycbcr_conversion,
            )
        }
    }

    #[inline]
    pub unsafe fn create_sampler_ycbcr_conversion_with_allocator(
        &self,
        create_info: &vk::SamplerYcbcrConversionCreateInfo,
        allocator: Option<&vk::AllocationCallbacks>,
        sampler_ycbcr_conversion: &mut vk::SamplerYcbcrConversion,
    ) -> vk::Result {
        (self.table.v1_1.create_sampler_ycbcr_conversion)(
            self.handle,
            create_info,
            allocator,
            sampler_ycbcr_conversion,
        )
    }

    #[inline]
    pub unsafe fn destroy_sampler_ycbcr_conversion(
        &self,
        sampler_ycbcr_conversion: vk::SamplerYcbcrConversion,
    ) {
        unsafe {
            self.destroy_sampler_ycbcr_conversion_with_allocator(
                sampler_ycbcr_conversion,
                self.allocator,
            )
        }
    }

    #[inline]
    pub unsafe fn destroy_sampler_ycbcr_conversion_with_allocator(
        &self,
        sampler_ycbcr_conversion: vk::SamplerYcbcrConversion,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_1.destroy_sampler_ycbcr_conversion)(
            self.handle,
            sampler_ycbcr_conversion,
            allocator,
        )
    }

    #[inline]
    pub unsafe fn create_descriptor_update_template(
        &self,
        create_info: &vk::DescriptorUpdateTemplateCreateInfo,
        descriptor_update_template: &mut vk::DescriptorUpdateTemplate,
    ) -> vk::Result {
        unsafe {
            self.create_descriptor_update_template_with_allocator(
                create_info,
                self.allocator,
                descriptor_update_template,
            )
        }
    }

    #[inline]
    pub unsafe fn create_descriptor_update_template_with_allocator(
        &self,
        create_info: &vk::DescriptorUpdateTemplateCreateInfo,
        allocator: Option<&vk::AllocationCallbacks>,
        descriptor_update_template: &mut vk::DescriptorUpdateTemplate,
    ) -> vk::Result {
        (self.table.v1_1.create_descriptor_update_template)(
            self.handle,
            create_info,
            allocator,
            descriptor_update_template,
        )
    }

    #[inline]
    pub unsafe fn destroy_descriptor_update_template(
        &self,
        descriptor_update_template: vk::DescriptorUpdateTemplate,
    ) {
        unsafe {
            self.destroy_descriptor_update_template_with_allocator(
                descriptor_update_template,
                self.allocator,
            )
        }
    }

    #[inline]
    pub unsafe fn destroy_descriptor_update_template_with_allocator(
        &self,
        descriptor_update_template: vk::DescriptorUpdateTemplate,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_1.destroy_descriptor_update_template)(
            self.handle,
            descriptor_update_template,
            allocator,
        )
    }

    #[inline]
    pub unsafe fn update_descriptor_set_with_template(
        &self,
        descriptor_set: vk::DescriptorSet,
        descriptor_update_template: vk::DescriptorUpdateTemplate,
        data: *const c_void,
    ) {
        (self.table.v1_1.update_descriptor_set_with_template)(
            self.handle,
            descriptor_set,
            descriptor_update_template,
            data,
        )
    }

    #[inline]
    pub unsafe fn get_descriptor_set_layout_support(
        &self,
        create_info: &vk::DescriptorSetLayoutCreateInfo,
        support: &mut vk::DescriptorSetLayoutSupport,
    ) {
        (self.table.v1_1.get_descriptor_set_layout_support)(self.handle, create_info, support)
    }

    // VERSION_1_2

    #[inline]
    pub unsafe fn get_buffer_device_address(
        &self,
        info: &vk::BufferDeviceAddressInfo,
    ) -> vk::DeviceAddress {
        (self.table.v1_2.get_buffer_device_address)(self.handle, info)
    }

    #[inline]
    pub unsafe fn get_semaphore_counter_value(
        &self,
        semaphore: vk::Semaphore,
        value: &mut u64,
    ) -> vk::Result {
        (self.table.v1_2.get_semaphore_counter_value)(self.handle, semaphore, value)
    }

    #[inline]
    pub unsafe fn wait_semaphores(
        &self,
        wait_info: &vk::SemaphoreWaitInfo,
        timeout: u64,
    ) -> vk::Result {
        (self.table.v1_2.wait_semaphores)(self.handle, wait_info, timeout)
    }

    #[inline]
    pub unsafe fn signal_semaphore(&self, signal_info: &vk::SemaphoreSignalInfo) -> vk::Result {
        (self.table.v1_2.signal_semaphore)(self.handle, signal_info)
    }

    #[inline]
    pub unsafe fn reset_query_pool(
        &self,
        query_pool: vk::QueryPool,
        first_query: u32,
        query_count: u32,
    ) {
        (self.table.v1_2.reset_query_pool)(self.handle, query_pool, first_query, query_count)
    }

    #[inline]
    pub unsafe fn create_render_pass2(
        &self,
        create_info: &vk::RenderPassCreateInfo2,
        render_pass: &mut vk::RenderPass,
    ) -> vk::Result {
        unsafe {
            self.create_render_pass2_with_allocator(create_info, self.allocator, render_pass)
        }
    }

    #[inline]
    pub unsafe fn create_render_pass2_with_allocator(
        &self,
        create_info: &vk::RenderPassCreateInfo2,
        allocator: Option<&vk::AllocationCallbacks>,
        render_pass: &mut vk::RenderPass,
    ) -> vk::Result {
        (self.table.v1_2.create_render_pass2)(self.handle, create_info, allocator, render_pass)
    }

    #[inline]
    pub unsafe fn get_buffer_opaque_capture_address(
        &self,
        info: &vk::BufferDeviceAddressInfo,
    ) -> u64 {
        (self.table.v1_2.get_buffer_opaque_capture_address)(self.handle, info)
    }

    #[inline]
    pub unsafe fn get_device_memory_opaque_capture_address(
        &self,
        info: &vk::DeviceMemoryOpaqueCaptureAddressInfo,
    ) -> u64 {
        (self.table.v1_2.get_device_memory_opaque_capture_address)(self.handle, info)
    }

    // VERSION_1_3

    #[inline]
    pub unsafe fn queue_submit2(
        &self,
        queue: vk::Queue,
        submits: &[vk::SubmitInfo2],
        fence: vk::Fence,
    ) -> vk::Result {
        (self.table.v1_3.queue_submit2)(queue, submits.len() as u32, submits.as_ptr(), fence)
    }

    #[inline]
    pub unsafe fn create_private_data_slot(
        &self,
        create_info: &vk::PrivateDataSlotCreateInfo,
        private_data_slot: &mut vk::PrivateDataSlot,
    ) -> vk::Result {
        unsafe {
            self.create_private_data_slot_with_allocator(
                create_info,
                self.allocator,
                private_data_slot,
            )
        }
    }

    #[inline]
    pub unsafe fn create_private_data_slot_with_allocator(
        &self,
        create_info: &vk::PrivateDataSlotCreateInfo,
        allocator: Option<&vk::AllocationCallbacks>,
        private_data_slot: &mut vk::PrivateDataSlot,
    ) -> vk::Result {
        (self.table.v1_3.create_private_data_slot)(
            self.handle,
            create_info,
            allocator,
            private_data_slot,
        )
    }

    #[inline]
    pub unsafe fn destroy_private_data_slot(&self, private_data_slot: vk::PrivateDataSlot) {
        unsafe { self.destroy_private_data_slot_with_allocator(private_data_slot, self.allocator) }
    }

    #[inline]
    pub unsafe fn destroy_private_data_slot_with_allocator(
        &self,
        private_data_slot: vk::PrivateDataSlot,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.v1_3.destroy_private_data_slot)(self.handle, private_data_slot, allocator)
    }

    #[inline]
    pub unsafe fn set_private_data(
        &self,
        object_type: vk::ObjectType,
        object_handle: u64,
        private_data_slot: vk::PrivateDataSlot,
        data: u64,
    ) -> vk::Result {
        (self.table.v1_3.set_private_data)(
            self.handle,
            object_type,
            object_handle,
            private_data_slot,
            data,
        )
    }

    #[inline]
    pub unsafe fn get_private_data(
        &self,
        object_type: vk::ObjectType,
        object_handle: u64,
        private_data_slot: vk::PrivateDataSlot,
        data: &mut u64,
    ) {
        (self.table.v1_3.get_private_data)(
            self.handle,
            object_type,
            object_handle,
            private_data_slot,
            data,
        )
    }

    #[inline]
    pub unsafe fn get_device_buffer_memory_requirements(
        &self,
        info: &vk::DeviceBufferMemoryRequirements,
        memory_requirements: &mut vk::MemoryRequirements2,
    ) {
        (self.table.v1_3.get_device_buffer_memory_requirements)(
            self.handle,
            info,
            memory_requirements,
        )
    }

    #[inline]
    pub unsafe fn get_device_image_memory_requirements(
        &self,
        info: &vk::DeviceImageMemoryRequirements,
        memory_requirements: &mut vk::MemoryRequirements2,
    ) {
        (self.table.v1_3.get_device_image_memory_requirements)(
            self.handle,
            info,
            memory_requirements,
        )
    }

    #[inline]
    pub unsafe fn get_device_image_sparse_memory_requirements(
        &self,
        info: &vk::DeviceImageMemoryRequirements,
        sparse_memory_requirement_count: &mut u32,
        sparse_memory_requirements: *mut vk::SparseImageMemoryRequirements2,
    ) {
        (self.table.v1_3.get_device_image_sparse_memory_requirements)(
            self.handle,
            info,
            sparse_memory_requirement_count,
            sparse_memory_requirements,
        )
    }

    // VK_KHR_swapchain

    #[inline]
    pub unsafe fn create_swapchain_khr(
        &self,
        create_info: &vk::SwapchainCreateInfoKHR,
        swapchain: &mut vk::SwapchainKHR,
    ) -> vk::Result {
        unsafe { self.create_swapchain_khr_with_allocator(create_info, self.allocator, swapchain) }
    }

    #[inline]
    pub unsafe fn create_swapchain_khr_with_allocator(
        &self,
        create_info: &vk::SwapchainCreateInfoKHR,
        allocator: Option<&vk::AllocationCallbacks>,
        swapchain: &mut vk::SwapchainKHR,
    ) -> vk::Result {
        (self.table.khr_swapchain.create_swapchain_khr)(
            self.handle,
            create_info,
            allocator,
            swapchain,
        )
    }

    #[inline]
    pub unsafe fn destroy_swapchain_khr(&self, swapchain: vk::SwapchainKHR) {
        unsafe { self.destroy_swapchain_khr_with_allocator(swapchain, self.allocator) }
    }

    #[inline]
    pub unsafe fn destroy_swapchain_khr_with_allocator(
        &self,
        swapchain: vk::SwapchainKHR,
        allocator: Option<&vk::AllocationCallbacks>,
    ) {
        (self.table.khr_swapchain.destroy_swapchain_khr)(self.handle, swapchain, allocator)
    }

    #[inline]
    pub unsafe fn get_swapchain_images_khr(
        &self,
        swapchain: vk::SwapchainKHR,
        swapchain_image_count: &mut u32,
        swapchain_images: *mut vk::Image,
    ) -> vk::Result {
        (self.table.khr_swapchain.get_swapchain_images_khr)(
            self.handle,
            swapchain,
            swapchain_image_count,
            swapchain_images,
        )
    }

    pub unsafe fn swapchain_images_khr(
        &self,
        swapchain: vk::SwapchainKHR,
    ) -> Result<Vec<vk::Image>, vk::Result> {
        enumerate(|count, images| unsafe {
            self.get_swapchain_images_khr(swapchain, count, images)
        })
    }

    #[inline]
    pub unsafe fn acquire_next_image_khr(
        &self,
        swapchain: vk::SwapchainKHR,
        timeout: u64,
        semaphore: vk::Semaphore,
        fence: vk::Fence,
        image_index: &mut u32,
    ) -> vk::Result {
        (self.table.khr_swapchain.acquire_next_image_khr)(
            self.handle,
            swapchain,
            timeout,
            semaphore,
            fence,
            image_index,
        )
    }

    #[inline]
    pub unsafe fn queue_present_khr(
        &self,
        queue: vk::Queue,
        present_info: &vk::PresentInfoKHR,
    ) -> vk::Result {
        (self.table.khr_swapchain.queue_present_khr)(queue, present_info)
    }

    // VK_EXT_debug_utils

    #[inline]
    pub unsafe fn set_debug_utils_object_name_ext(
        &self,
        name_info: &vk::DebugUtilsObjectNameInfoEXT,
    ) -> vk::Result {
        (self.table.ext_debug_utils.set_debug_utils_object_name_ext)(self.handle, name_info)
    }

    #[inline]
    pub unsafe fn set_debug_utils_object_tag_ext(
        &self,
        tag_info: &vk::DebugUtilsObjectTagInfoEXT,
    ) -> vk::Result {
        (self.table.ext_debug_utils.set_debug_utils_object_tag_ext)(self.handle, tag_info)
    }

    #[inline]
    pub unsafe fn queue_begin_debug_utils_label_ext(
        &self,
        queue: vk::Queue,
        label_info: &vk::DebugUtilsLabelEXT,
    ) {
        (self.table.ext_debug_utils.queue_begin_debug_utils_label_ext)(queue, label_info)
    }

    #[inline]
    pub unsafe fn queue_end_debug_utils_label_ext(&self, queue: vk::Queue) {
        (self.table.ext_debug_utils.queue_end_debug_utils_label_ext)(queue)
    }

    #[inline]
    pub unsafe fn queue_insert_debug_utils_label_ext(
        &self,
        queue: vk::Queue,
        label_info: &vk::DebugUtilsLabelEXT,
    ) {
        (self.table.ext_debug_utils.queue_insert_debug_utils_label_ext)(queue, label_info)
    }
}
