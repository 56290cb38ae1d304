use std::ffi::c_void;

use crate::{table::DeviceTable, vk};

/// A `VkCommandBuffer` bound to the dispatch table of the device it was
/// allocated from. Recording commands take no allocator.
#[derive(Clone, Copy)]
pub struct CommandBuffer<'a> {
    handle: vk::CommandBuffer,
    table: &'a DeviceTable,
}

impl std::fmt::Debug for CommandBuffer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CommandBuffer").field(&self.handle).finish()
    }
}

impl<'a> CommandBuffer<'a> {
    pub fn new(handle: vk::CommandBuffer, table: &'a DeviceTable) -> Self {
        Self { handle, table }
    }

    pub fn handle(&self) -> vk::CommandBuffer {
        self.handle
    }

    pub fn table(&self) -> &'a DeviceTable {
        self.table
    }

    #[inline]
    pub unsafe fn begin(&self, begin_info: &vk::CommandBufferBeginInfo) -> vk::Result {
        (self.table.v1_0.begin_command_buffer)(self.handle, begin_info)
    }

    #[inline]
    pub unsafe fn end(&self) -> vk::Result {
        (self.table.v1_0.end_command_buffer)(self.handle)
    }

    #[inline]
    pub unsafe fn reset(&self, flags: vk::CommandBufferResetFlags) -> vk::Result {
        (self.table.v1_0.reset_command_buffer)(self.handle, flags)
    }

    #[inline]
    pub unsafe fn cmd_bind_pipeline(
        &self,
        pipeline_bind_point: vk::PipelineBindPoint,
        pipeline: vk::Pipeline,
    ) {
        (self.table.v1_0.cmd_bind_pipeline)(self.handle, pipeline_bind_point, pipeline)
    }

    #[inline]
    pub unsafe fn cmd_set_viewport(&self, first_viewport: u32, viewports: &[vk::Viewport]) {
        (self.table.v1_0.cmd_set_viewport)(
            self.handle,
            first_viewport,
            viewports.len() as u32,
            viewports.as_ptr(),
        )
    }

    #[inline]
    pub unsafe fn cmd_set_scissor(&self, first_scissor: u32, scissors: &[vk::Rect2d]) {
        (self.table.v1_0.cmd_set_scissor)(
            self.handle,
            first_scissor,
            scissors.len() as u32,
            scissors.as_ptr(),
        )
    }

    #[inline]
    pub unsafe fn cmd_set_line_width(&self, line_width: f32) {
        (self.table.v1_0.cmd_set_line_width)(self.handle, line_width)
    }

    #[inline]
    pub unsafe fn cmd_set_depth_bias(
        &self,
        depth_bias_constant_factor: f32,
        depth_bias_clamp: f32,
        depth_bias_slope_factor: f32,
    ) {
        (self.table.v1_0.cmd_set_depth_bias)(
            self.handle,
            depth_bias_constant_factor,
            depth_bias_clamp,
            depth_bias_slope_factor,
        )
    }

    #[inline]
    pub unsafe fn cmd_set_blend_constants(&self, blend_constants: &[f32; 4]) {
        (self.table.v1_0.cmd_set_blend_constants)(self.handle, blend_constants)
    }

    #[inline]
    pub unsafe fn cmd_set_depth_bounds(&self, min_depth_bounds: f32, max_depth_bounds: f32) {
        (self.table.v1_0.cmd_set_depth_bounds)(self.handle, min_depth_bounds, max_depth_bounds)
    }

    #[inline]
    pub unsafe fn cmd_set_stencil_compare_mask(
        &self,
        face_mask: vk::StencilFaceFlags,
        compare_mask: u32,
    ) {
        (self.table.v1_0.cmd_set_stencil_compare_mask)(self.handle, face_mask, compare_mask)
    }

    #[inline]
    pub unsafe fn cmd_set_stencil_write_mask(
        &self,
        face_mask: vk::StencilFaceFlags,
        write_mask: u32,
    ) {
        (self.table.v1_0.cmd_set_stencil_write_mask)(self.handle, face_mask, write_mask)
    }

    #[inline]
    pub unsafe fn cmd_set_stencil_reference(
        &self,
        face_mask: vk::StencilFaceFlags,
        reference: u32,
    ) {
        (self.table.v1_0.cmd_set_stencil_reference)(self.handle, face_mask, reference)
    }

    #[inline]
    pub unsafe fn cmd_bind_descriptor_sets(
        &self,
        pipeline_bind_point: vk::PipelineBindPoint,
        layout: vk::PipelineLayout,
        first_set: u32,
        descriptor_sets: &[vk::DescriptorSet],
        dynamic_offsets: &[u32],
    ) {
        (self.table.v1_0.cmd_bind_descriptor_sets)(
            self.handle,
            pipeline_bind_point,
            layout,
            first_set,
            descriptor_sets.len() as u32,
            descriptor_sets.as_ptr(),
            dynamic_offsets.len() as u32,
            dynamic_offsets.as_ptr(),
        )
    }

    #[inline]
    pub unsafe fn cmd_bind_index_buffer(
        &self,
        buffer: vk::Buffer,
        offset: vk::DeviceSize,
        index_type: vk::IndexType,
    ) {
        (self.table.v1_0.cmd_bind_index_buffer)(self.handle, buffer, offset, index_type)
    }

    /// `buffers` and `offsets` must have the same length.
    #[inline]
    pub unsafe fn cmd_bind_vertex_buffers(
        &self,
        first_binding: u32,
        buffers: &[vk::Buffer],
        offsets: &[vk::DeviceSize],
    ) {
        debug_assert_eq!(buffers.len(), offsets.len());
        (self.table.v1_0.cmd_bind_vertex_buffers)(
            self.handle,
            first_binding,
            buffers.len() as u32,
            buffers.as_ptr(),
            offsets.as_ptr(),
        )
    }

    #[inline]
    pub unsafe fn cmd_draw(
        &self,
        vertex_count: u32,
        instance_count: u32,
        first_vertex: u32,
        first_instance: u32,
    ) {
        (self.table.v1_0.cmd_draw)(
            self.handle,
            vertex_count,
            instance_count,
            first_vertex,
            first_instance,
        )
    }

    #[inline]
    pub unsafe fn cmd_draw_indexed(
        &self,
        index_count: u32,
        instance_count: u32,
        first_index: u32,
        vertex_offset: i32,
        first_instance: u32,
    ) {
        (self.table.v1_0.cmd_draw_indexed)(
            self.handle,
            index_count,
            instance_count,
            first_index,
            vertex_offset,
            first_instance,
        )
    }

    #[inline]
    pub unsafe fn cmd_draw_indirect(
        &self,
        buffer: vk::Buffer,
        offset: vk::DeviceSize,
        draw_count: u32,
        stride: u32,
    ) {
        (self.table.v1_0.cmd_draw_indirect)(self.handle, buffer, offset, draw_count, stride)
    }

    #[inline]
    pub unsafe fn cmd_draw_indexed_indirect(
        &self,
        buffer: vk::Buffer,
        offset: vk::DeviceSize,
        draw_count: u32,
        stride: u32,
    ) {
        (self.table.v1_0.cmd_draw_indexed_indirect)(self.handle, buffer, offset, draw_count, stride)
    }

    #[inline]
    pub unsafe fn cmd_dispatch(&self, group_count_x: u32, group_count_y: u32, group_count_z: u32) {
        (self.table.v1_0.cmd_dispatch)(self.handle, group_count_x, group_count_y, group_count_z)
    }

    #[inline]
    pub unsafe fn cmd_dispatch_indirect(&self, buffer: vk::Buffer, offset: vk::DeviceSize) {
        (self.table.v1_0.cmd_dispatch_indirect)(self.handle, buffer, offset)
    }

    #[inline]
    pub unsafe fn cmd_copy_buffer(
        &self,
        src_buffer: vk::Buffer,
        dst_buffer: vk::Buffer,
        regions: &[vk::BufferCopy],
    ) {
        (self.table.v1_0.cmd_copy_buffer)(
            self.handle,
            src_buffer,
            dst_buffer,
            regions.len() as u32,
            regions.as_ptr(),
        )
    }

    #[inline]
    pub unsafe fn cmd_copy_image(
        &self,
        src_image: vk::Image,
        src_image_layout: vk::ImageLayout,
        dst_image: vk::Image,
        dst_image_layout: vk::ImageLayout,
        regions: &[vk::ImageCopy],
    ) {
        (self.table.v1_0.cmd_copy_image)(
            self.handle,
            src_image,
            src_image_layout,
            dst_image,
            dst_image_layout,
            regions.len() as u32,
            regions.as_ptr(),
        )
    }

    #[inline]
    pub unsafe fn cmd_blit_image(
        &self,
        src_image: vk::Image,
        src_image_layout: vk::ImageLayout,
        dst_image: vk::Image,
        dst_image_layout: vk::ImageLayout,
        regions: &[vk::ImageBlit],
        filter: vk::Filter,
    ) {
        (self.table.v1_0.cmd_blit_image)(
            self.handle,
            src_image,
            src_image_layout,
            dst_image,
            dst_image_layout,
            regions.len() as u32,
            regions.as_ptr(),
            filter,
        )
    }

    #[inline]
    pub unsafe fn cmd_copy_buffer_to_image(
        &self,
        src_buffer: vk::Buffer,
        dst_image: vk::Image,
        dst_image_layout: vk::ImageLayout,
        regions: &[vk::BufferImageCopy],
    ) {
        (self.table.v1_0.cmd_copy_buffer_to_image)(
            self.handle,
            src_buffer,
            dst_image,
            dst_image_layout,
            regions.len() as u32,
            regions.as_ptr(),
        )
    }

    #[inline]
    pub unsafe fn cmd_copy_image_to_buffer(
        &self,
        src_image: vk::Image,
        src_image_layout: vk::ImageLayout,
        dst_buffer: vk::Buffer,
        regions: &[vk::BufferImageCopy],
    ) {
        (self.table.v1_0.cmd_copy_image_to_buffer)(
            self.handle,
            src_image,
            src_image_layout,
            dst_buffer,
            regions.len() as u32,
            regions.as_ptr(),
        )
    }

    /// `data` is limited to 65536 bytes and must be a multiple of four.
    #[inline]
    pub unsafe fn cmd_update_buffer(
        &self,
        dst_buffer: vk::Buffer,
        dst_offset: vk::DeviceSize,
        data: &[u8],
    ) {
        (self.table.v1_0.cmd_update_buffer)(
            self.handle,
            dst_buffer,
            dst_offset,
            data.len() as vk::DeviceSize,
            data.as_ptr().cast::<c_void>(),
        )
    }

    #[inline]
    pub unsafe fn cmd_fill_buffer(
        &self,
        dst_buffer: vk::Buffer,
        dst_offset: vk::DeviceSize,
        size: vk::DeviceSize,
        data: u32,
    ) {
        (self.table.v1_0.cmd_fill_buffer)(self.handle, dst_buffer, dst_offset, size, data)
    }

    #[inline]
    pub unsafe fn cmd_clear_color_image(
        &self,
        image: vk::Image,
        image_layout: vk::ImageLayout,
        color: &vk::ClearColorValue,
        ranges: &[vk::ImageSubresourceRange],
    ) {
        (self.table.v1_0.cmd_clear_color_image)(
            self.handle,
            image,
            image_layout,
            color,
            ranges.len() as u32,
            ranges.as_ptr(),
        )
    }

    #[inline]
    pub unsafe fn cmd_clear_depth_stencil_image(
        &self,
        image: vk::Image,
        image_layout: vk::ImageLayout,
        depth_stencil: &vk::ClearDepthStencilValue,
        ranges: &[vk::ImageSubresourceRange],
    ) {
        (self.table.v1_0.cmd_clear_depth_stencil_image)(
            self.handle,
            image,
            image_layout,
            depth_stencil,
            ranges.len() as u32,
            ranges.as_ptr(),
        )
    }

    #[inline]
    pub unsafe fn cmd_clear_attachments(
        &self,
        attachments: &[vk::ClearAttachment],
        rects: &[vk::ClearRect],
    ) {
        (self.table.v1_0.cmd_clear_attachments)(
            self.handle,
            attachments.len() as u32,
            attachments.as_ptr(),
            rects.len() as u32,
            rects.as_ptr(),
        )
    }

    #[inline]
    pub unsafe fn cmd_resolve_image(
        &self,
        src_image: vk::Image,
        src_image_layout: vk::ImageLayout,
        dst_image: vk::Image,
        dst_image_layout: vk::ImageLayout,
        regions: &[vk::ImageResolve],
    ) {
        (self.table.v1_0.cmd_resolve_image)(
            self.handle,
            src_image,
            src_image_layout,
            dst_image,
            dst_image_layout,
            regions.len() as u32,
            regions.as_ptr(),
        )
    }

    #[inline]
    pub unsafe fn cmd_set_event(&self, event: vk::Event, stage_mask: vk::PipelineStageFlags) {
        (self.table.v1_0.cmd_set_event)(self.handle, event, stage_mask)
    }

    #[inline]
    pub unsafe fn cmd_reset_event(&self, event: vk::Event, stage_mask: vk::PipelineStageFlags) {
        (self.table.v1_0.cmd_reset_event)(self.handle, event, stage_mask)
    }

    #[inline]
    pub unsafe fn cmd_wait_events(
        &self,
        events: &[vk::Event],
        src_stage_mask: vk::PipelineStageFlags,
        dst_stage_mask: vk::PipelineStageFlags,
        memory_barriers: &[vk::MemoryBarrier],
        buffer_memory_barriers: &[vk::BufferMemoryBarrier],
        image_memory_barriers: &[vk::ImageMemoryBarrier],
    ) {
        (self.table.v1_0.cmd_wait_events)(
            self.handle,
            events.len() as u32,
            events.as_ptr(),
            src_stage_mask,
            dst_stage_mask,
            memory_barriers.len() as u32,
            memory_barriers.as_ptr(),
            buffer_memory_barriers.len() as u32,
            buffer_memory_barriers.as_ptr(),
            image_memory_barriers.len() as u32,
            image_memory_barriers.as_ptr(),
        )
    }

    #[inline]
    pub unsafe fn cmd_pipeline_barrier(
        &self,
        src_stage_mask: vk::PipelineStageFlags,
        dst_stage_mask: vk::PipelineStageFlags,
        dependency_flags: vk::DependencyFlags,
        memory_barriers: &[vk::MemoryBarrier],
        buffer_memory_barriers: &[vk::BufferMemoryBarrier],
        image_memory_barriers: &[vk::ImageMemoryBarrier],
    ) {
        (self.table.v1_0.cmd_pipeline_barrier)(
            self.handle,
            src_stage_mask,
            dst_stage_mask,
            dependency_flags,
            memory_barriers.len() as u32,
            memory_barriers.as_ptr(),
            buffer_memory_barriers.len() as u32,
            buffer_memory_barriers.as_ptr(),
            image_memory_barriers.len() as u32,
            image_memory_barriers.as_ptr(),
        )
    }

    #[inline]
    pub unsafe fn cmd_begin_query(
        &self,
        query_pool: vk::QueryPool,
        query: u32,
        flags: vk::QueryControlFlags,
    ) {
        (self.table.v1_0.cmd_begin_query)(self.handle, query_pool, query, flags)
    }

    #[inline]
    pub unsafe fn cmd_end_query(&self, query_pool: vk::QueryPool, query: u32) {
        (self.table.v1_0.cmd_end_query)(self.handle, query_pool, query)
    }

    #[inline]
    pub unsafe fn cmd_reset_query_pool(
        &self,
        query_pool: vk::QueryPool,
        first_query: u32,
        query_count: u32,
    ) {
        (self.table.v1_0.cmd_reset_query_pool)(self.handle, query_pool, first_query, query_count)
    }

    #[inline]
    pub unsafe fn cmd_write_timestamp(
        &self,
        pipeline_stage: vk::PipelineStageFlags,
        query_pool: vk::QueryPool,
        query: u32,
    ) {
        (self.table.v1_0.cmd_write_timestamp)(self.handle, pipeline_stage, query_pool, query)
    }

    #[inline]
    pub unsafe fn cmd_copy_query_pool_results(
        &self,
        query_pool: vk::QueryPool,
        first_query: u32,
        query_count: u32,
        dst_buffer: vk::Buffer,
        dst_offset: vk::DeviceSize,
        stride: vk::DeviceSize,
        flags: vk::QueryResultFlags,
    ) {
        (self.table.v1_0.cmd_copy_query_pool_results)(
            self.handle,
            query_pool,
            first_query,
            query_count,
            dst_buffer,
            dst_offset,
            stride,
            flags,
        )
    }

    #[inline]
    pub unsafe fn cmd_push_constants(
        &self,
        layout: vk::PipelineLayout,
        stage_flags: vk::ShaderStageFlags,
        offset: u32,
        values: &[u8],
    ) {
        (self.table.v1_0.cmd_push_constants)(
            self.handle,
            layout,
            stage_flags,
            offset,
            values.len() as u32,
            values.as_ptr().cast::<c_void>(),
        )
    }

    #[inline]
    pub unsafe fn cmd_begin_render_pass(
        &self,
        render_pass_begin: &vk::RenderPassBeginInfo,
        contents: vk::SubpassContents,
    ) {
        (self.table.v1_0.cmd_begin_render_pass)(self.handle, render_pass_begin, contents)
    }

    #[inline]
    pub unsafe fn cmd_next_subpass(&self, contents: vk::SubpassContents) {
        (self.table.v1_0.cmd_next_subpass)(self.handle, contents)
    }

    #[inline]
    pub unsafe fn cmd_end_render_pass(&self) {
        (self.table.v1_0.cmd_end_render_pass)(self.handle)
    }

    #[inline]
    pub unsafe fn cmd_execute_commands(&self, command_buffers: &[vk::CommandBuffer]) {
        (self.table.v1_0.cmd_execute_commands)(
            self.handle,
            command_buffers.len() as u32,
            command_buffers.as_ptr(),
        )
    }

    // VERSION_1_1

    #[inline]
    pub unsafe fn cmd_set_device_mask(&self, device_mask: u32) {
        (self.table.v1_1.cmd_set_device_mask)(self.handle, device_mask)
    }

    #[inline]
    pub unsafe fn cmd_dispatch_base(
        &self,
        base_group_x: u32,
        base_group_y: u32,
        base_group_z: u32,
        group_count_x: u32,
        group_count_y: u32,
        group_count_z: u32,
    ) {
        (self.table.v1_1.cmd_dispatch_base)(
            self.handle,
            base_group_x,
            base_group_y,
            base_group_z,
            group_count_x,
            group_count_y,
            group_count_z,
        )
    }

    // VERSION_1_2

    #[inline]
    pub unsafe fn cmd_draw_indirect_count(
        &self,
        buffer: vk::Buffer,
        offset: vk::DeviceSize,
        count_buffer: vk::Buffer,
        count_buffer_offset: vk::DeviceSize,
        max_draw_count: u32,
        stride: u32,
    ) {
        (self.table.v1_2.cmd_draw_indirect_count)(
            self.handle,
            buffer,
            offset,
            count_buffer,
            count_buffer_offset,
            max_draw_count,
            stride,
        )
    }

    #[inline]
    pub unsafe fn cmd_draw_indexed_indirect_count(
        &self,
        buffer: vk::Buffer,
        offset: vk::DeviceSize,
        count_buffer: vk::Buffer,
        count_buffer_offset: vk::DeviceSize,
        max_draw_count: u32,
        stride: u32,
    ) {
        (self.table.v1_2.cmd_draw_indexed_indirect_count)(
            self.handle,
            buffer,
            offset,
            count_buffer,
            count_buffer_offset,
            max_draw_count,
            stride,
        )
    }

    #[inline]
    pub unsafe fn cmd_begin_render_pass2(
        &self,
        render_pass_begin: &vk::RenderPassBeginInfo,
        subpass_begin_info: &vk::SubpassBeginInfo,
    ) {
        (self.table.v1_2.cmd_begin_render_pass2)(self.handle, render_pass_begin, subpass_begin_info)
    }

    #[inline]
    pub unsafe fn cmd_next_subpass2(
        &self,
        subpass_begin_info: &vk::SubpassBeginInfo,
        subpass_end_info: &vk::SubpassEndInfo,
    ) {
        (self.table.v1_2.cmd_next_subpass2)(self.handle, subpass_begin_info, subpass_end_info)
    }

    #[inline]
    pub unsafe fn cmd_end_render_pass2(&self, subpass_end_info: &vk::SubpassEndInfo) {
        (self.table.v1_2.cmd_end_render_pass2)(self.handle, subpass_end_info)
    }

    // VERSION_1_3

    #[inline]
    pub unsafe fn cmd_pipeline_barrier2(&self, dependency_info: &vk::DependencyInfo) {
        (self.table.v1_3.cmd_pipeline_barrier2)(self.handle, dependency_info)
    }

    #[inline]
    pub unsafe fn cmd_begin_rendering(&self, rendering_info: &vk::RenderingInfo) {
        (self.table.v1_3.cmd_begin_rendering)(self.handle, rendering_info)
    }

    #[inline]
    pub unsafe fn cmd_end_rendering(&self) {
        (self.table.v1_3.cmd_end_rendering)(self.handle)
    }

    #[inline]
    pub unsafe fn cmd_set_viewport_with_count(&self, viewports: &[vk::Viewport]) {
        (self.table.v1_3.cmd_set_viewport_with_count)(
            self.handle,
            viewports.len() as u32,
            viewports.as_ptr(),
        )
    }

    #[inline]
    pub unsafe fn cmd_set_scissor_with_count(&self, scissors: &[vk::Rect2d]) {
        (self.table.v1_3.cmd_set_scissor_with_count)(
            self.handle,
            scissors.len() as u32,
            scissors.as_ptr(),
        )
    }

    #[inline]
    pub unsafe fn cmd_set_event2(&self, event: vk::Event, dependency_info: &vk::DependencyInfo) {
        (self.table.v1_3.cmd_set_event2)(self.handle, event, dependency_info)
    }

    #[inline]
    pub unsafe fn cmd_reset_event2(&self, event: vk::Event, stage_mask: vk::PipelineStageFlags2) {
        (self.table.v1_3.cmd_reset_event2)(self.handle, event, stage_mask)
    }

    /// `events` and `dependency_infos` must have the same length.
    #[inline]
    pub unsafe fn cmd_wait_events2(
        &self,
        events: &[vk::Event],
        dependency_infos: &[vk::DependencyInfo],
    ) {
        debug_assert_eq!(events.len(), dependency_infos.len());
        (self.table.v1_3.cmd_wait_events2)(
            self.handle,
            events.len() as u32,
            events.as_ptr(),
            dependency_infos.as_ptr(),
        )
    }

    #[inline]
    pub unsafe fn cmd_write_timestamp2(
        &self,
        stage: vk::PipelineStageFlags2,
        query_pool: vk::QueryPool,
        query: u32,
    ) {
        (self.table.v1_3.cmd_write_timestamp2)(self.handle, stage, query_pool, query)
    }

    #[inline]
    pub unsafe fn cmd_copy_buffer2(&self, copy_buffer_info: &vk::CopyBufferInfo2) {
        (self.table.v1_3.cmd_copy_buffer2)(self.handle, copy_buffer_info)
    }

    #[inline]
    pub unsafe fn cmd_copy_image2(&self, copy_image_info: &vk::CopyImageInfo2) {
        (self.table.v1_3.cmd_copy_image2)(self.handle, copy_image_info)
    }

    #[inline]
    pub unsafe fn cmd_copy_buffer_to_image2(
        &self,
        copy_buffer_to_image_info: &vk::CopyBufferToImageInfo2,
    ) {
        (self.table.v1_3.cmd_copy_buffer_to_image2)(self.handle, copy_buffer_to_image_info)
    }

    #[inline]
    pub unsafe fn cmd_copy_image_to_buffer2(
        &self,
        copy_image_to_buffer_info: &vk::CopyImageToBufferInfo2,
    ) {
        (self.table.v1_3.cmd_copy_image_to_buffer2)(self.handle, copy_image_to_buffer_info)
    }

    #[inline]
    pub unsafe fn cmd_blit_image2(&self, blit_image_info: &vk::BlitImageInfo2) {
        (self.table.v1_3.cmd_blit_image2)(self.handle, blit_image_info)
    }

    #[inline]
    pub unsafe fn cmd_resolve_image2(&self, resolve_image_info: &vk::ResolveImageInfo2) {
        (self.table.v1_3.cmd_resolve_image2)(self.handle, resolve_image_info)
    }

    #[inline]
    pub unsafe fn cmd_set_cull_mode(&self, cull_mode: vk::CullModeFlags) {
        (self.table.v1_3.cmd_set_cull_mode)(self.handle, cull_mode)
    }

    #[inline]
    pub unsafe fn cmd_set_front_face(&self, front_face: vk::FrontFace) {
        (self.table.v1_3.cmd_set_front_face)(self.handle, front_face)
    }

    #[inline]
    pub unsafe fn cmd_set_primitive_topology(&self, primitive_topology: vk::PrimitiveTopology) {
        (self.table.v1_3.cmd_set_primitive_topology)(self.handle, primitive_topology)
    }

    /// `sizes` and `strides` are passed as null when `None`, otherwise they
    /// must have the same length as `buffers` and `offsets`.
    #[inline]
    pub unsafe fn cmd_bind_vertex_buffers2(
        &self,
        first_binding: u32,
        buffers: &[vk::Buffer],
        offsets: &[vk::DeviceSize],
        sizes: Option<&[vk::DeviceSize]>,
        strides: Option<&[vk::DeviceSize]>,
    ) {
        debug_assert_eq!(buffers.len(), offsets.len());
        debug_assert!(sizes.is_none_or(|sizes| sizes.len() == buffers.len()));
        debug_assert!(strides.is_none_or(|strides| strides.len() == buffers.len()));
        (self.table.v1_3.cmd_bind_vertex_buffers2)(
            self.handle,
            first_binding,
            buffers.len() as u32,
            buffers.as_ptr(),
            offsets.as_ptr(),
            sizes.map_or(std::ptr::null(), <[_]>::as_ptr),
            strides.map_or(std::ptr::null(), <[_]>::as_ptr),
        )
    }

    #[inline]
    pub unsafe fn cmd_set_depth_test_enable(&self, depth_test_enable: vk::Bool32) {
        (self.table.v1_3.cmd_set_depth_test_enable)(self.handle, depth_test_enable)
    }

    #[inline]
    pub unsafe fn cmd_set_depth_write_enable(&self, depth_write_enable: vk::Bool32) {
        (self.table.v1_3.cmd_set_depth_write_enable)(self.handle, depth_write_enable)
    }

    #[inline]
    pub unsafe fn cmd_set_depth_compare_op(&self, depth_compare_op: vk::CompareOp) {
        (self.table.v1_3.cmd_set_depth_compare_op)(self.handle, depth_compare_op)
    }

    #[inline]
    pub unsafe fn cmd_set_depth_bounds_test_enable(&self, depth_bounds_test_enable: vk::Bool32) {
        (self.table.v1_3.cmd_set_depth_bounds_test_enable)(self.handle, depth_bounds_test_enable)
    }

    #[inline]
    pub unsafe fn cmd_set_stencil_test_enable(&self, stencil_test_enable: vk::Bool32) {
        (self.table.v1_3.cmd_set_stencil_test_enable)(self.handle, stencil_test_enable)
    }

    #[inline]
    pub unsafe fn cmd_set_stencil_op(
        &self,
        face_mask: vk::StencilFaceFlags,
        fail_op: vk::StencilOp,
        pass_op: vk::StencilOp,
        depth_fail_op: vk::StencilOp,
        compare_op: vk::CompareOp,
    ) {
        (self.table.v1_3.cmd_set_stencil_op)(
            self.handle,
            face_mask,
            fail_op,
            pass_op,
            depth_fail_op,
            compare_op,
        )
    }

    #[inline]
    pub unsafe fn cmd_set_rasterizer_discard_enable(&self, rasterizer_discard_enable: vk::Bool32) {
        (self.table.v1_3.cmd_set_rasterizer_discard_enable)(self.handle, rasterizer_discard_enable)
    }

    #[inline]
    pub unsafe fn cmd_set_depth_bias_enable(&self, depth_bias_enable: vk::Bool32) {
        (self.table.v1_3.cmd_set_depth_bias_enable)(self.handle, depth_bias_enable)
    }

    #[inline]
    pub unsafe fn cmd_set_primitive_restart_enable(&self, primitive_restart_enable: vk::Bool32) {
        (self.table.v1_3.cmd_set_primitive_restart_enable)(self.handle, primitive_restart_enable)
    }

    // VK_EXT_debug_utils

    #[inline]
    pub unsafe fn cmd_begin_debug_utils_label_ext(&self, label_info: &vk::DebugUtilsLabelEXT) {
        (self.table.ext_debug_utils.cmd_begin_debug_utils_label_ext)(self.handle, label_info)
    }

    #[inline]
    pub unsafe fn cmd_end_debug_utils_label_ext(&self) {
        (self.table.ext_debug_utils.cmd_end_debug_utils_label_ext)(self.handle)
    }

    #[inline]
    pub unsafe fn cmd_insert_debug_utils_label_ext(&self, label_info: &vk::DebugUtilsLabelEXT) {
        (self.table.ext_debug_utils.cmd_insert_debug_utils_label_ext)(self.handle, label_info)
    }
}
