mod common;

use vkdispatch::{
    CommandBuffer, Device, DeviceConfig, DeviceExtension, Instance, InstanceConfig,
    InstanceExtension, vk,
};

use common::{
    Call, DEVICE, FENCE, FRAMEBUFFER, INSTANCE, PHYSICAL_DEVICES, PIPELINE, RENDER_PASS, SWAPCHAIN,
    SWAPCHAIN_IMAGES, address,
};

fn call(name: &'static str, args: &[u64]) -> Call {
    Call {
        name,
        args: args.to_vec(),
    }
}

#[test]
fn instance_elided_allocator_uses_stored_one() {
    let entry = common::entry();
    let config = InstanceConfig::new(vk::VERSION_1_0).with_extension(InstanceExtension::KhrSurface);
    let table = common::instance_table(&entry, &config);
    let allocator = vk::AllocationCallbacks::default();
    let override_allocator = vk::AllocationCallbacks::default();

    let instance =
        Instance::with_allocator(vk::Instance::from_raw(INSTANCE), &table, Some(&allocator));
    let surface = vk::SurfaceKHR::from_raw(0x5f);
    unsafe {
        instance.destroy_surface_khr(surface);
        instance.destroy_surface_khr_with_allocator(surface, Some(&override_allocator));
        instance.destroy_surface_khr_with_allocator(surface, None);
        instance.destroy_instance();
    }

    let instance_raw = INSTANCE as u64;
    assert_eq!(
        common::take_calls(),
        [
            call("vkDestroySurfaceKHR", &[instance_raw, 0x5f, address(Some(&allocator))]),
            call(
                "vkDestroySurfaceKHR",
                &[instance_raw, 0x5f, address(Some(&override_allocator))]
            ),
            call("vkDestroySurfaceKHR", &[instance_raw, 0x5f, 0]),
            call("vkDestroyInstance", &[instance_raw, address(Some(&allocator))]),
        ]
    );
}

#[test]
fn instance_without_allocator_passes_none() {
    let entry = common::entry();
    let table = common::instance_table(&entry, &InstanceConfig::default());
    let instance = Instance::new(vk::Instance::from_raw(INSTANCE), &table);
    assert!(instance.allocator().is_none());

    unsafe { instance.destroy_instance() };
    assert_eq!(
        common::take_calls(),
        [call("vkDestroyInstance", &[INSTANCE as u64, 0])]
    );
}

#[test]
fn instance_queries_physical_devices() {
    let entry = common::entry();
    let table = common::instance_table(&entry, &InstanceConfig::default());
    let instance = Instance::new(vk::Instance::from_raw(INSTANCE), &table);

    let physical_devices = unsafe { instance.physical_devices() }.unwrap();
    assert_eq!(physical_devices, PHYSICAL_DEVICES.map(vk::PhysicalDevice::from_raw));

    let physical_device = physical_devices[1];
    let mut properties = vk::PhysicalDeviceProperties::default();
    unsafe { instance.get_physical_device_properties(physical_device, &mut properties) };
    assert_eq!(properties.api_version, common::INSTANCE_VERSION);

    let mut count = 0;
    unsafe {
        instance.get_physical_device_queue_family_properties(
            physical_device,
            &mut count,
            std::ptr::null_mut(),
        )
    };
    assert_eq!(count, 2);

    let extensions = unsafe { instance.device_extension_properties(physical_device) }.unwrap();
    assert_eq!(extensions.len(), 1);
    assert_eq!(extensions[0].name(), Some(c"VK_KHR_swapchain"));
}

#[test]
fn instance_create_device_forwards_arguments() {
    let entry = common::entry();
    let table = common::instance_table(&entry, &InstanceConfig::default());
    let allocator = vk::AllocationCallbacks::default();
    let instance =
        Instance::with_allocator(vk::Instance::from_raw(INSTANCE), &table, Some(&allocator));

    let names = DeviceConfig::new(vk::VERSION_1_0)
        .with_extension(DeviceExtension::KhrSwapchain)
        .enabled_extension_names();
    let create_info = vk::DeviceCreateInfo {
        enabled_extension_count: names.len() as u32,
        enabled_extension_names: names.as_ptr(),
        ..Default::default()
    };
    let physical_device = vk::PhysicalDevice::from_raw(PHYSICAL_DEVICES[0]);

    let mut device = vk::Device::null();
    let result = unsafe { instance.create_device(physical_device, &create_info, &mut device) };
    assert_eq!(result, vk::Result::SUCCESS);
    assert_eq!(device, vk::Device::from_raw(DEVICE));
    assert_eq!(
        common::take_calls(),
        [call(
            "vkCreateDevice",
            &[PHYSICAL_DEVICES[0] as u64, 1, address(Some(&allocator))]
        )]
    );

    let resolved = unsafe { instance.get_device_proc_addr(device, c"vkCmdDraw") };
    assert!(resolved.is_some());
}

#[test]
fn device_create_and_destroy_forward_allocator() {
    let entry = common::entry();
    let instance_table = common::instance_table(&entry, &InstanceConfig::default());
    let table = common::device_table(&instance_table, &DeviceConfig::default());
    let allocator = vk::AllocationCallbacks::default();
    let device = Device::with_allocator(vk::Device::from_raw(DEVICE), &table, Some(&allocator));

    let create_info = vk::FenceCreateInfo {
        flags: vk::FenceCreateFlags::SIGNALED,
        ..Default::default()
    };
    let mut fence = vk::Fence::null();
    unsafe {
        assert_eq!(device.create_fence(&create_info, &mut fence), vk::Result::SUCCESS);
        device.destroy_fence_with_allocator(fence, None);
        device.destroy_fence(fence);
        device.destroy_device();
    }
    assert_eq!(fence, vk::Fence::from_raw(FENCE));

    let device_raw = DEVICE as u64;
    let stored = address(Some(&allocator));
    assert_eq!(
        common::take_calls(),
        [
            call("vkCreateFence", &[device_raw, 1, stored]),
            call("vkDestroyFence", &[device_raw, FENCE, 0]),
            call("vkDestroyFence", &[device_raw, FENCE, stored]),
            call("vkDestroyDevice", &[device_raw, stored]),
        ]
    );
}

#[test]
fn instance_queries_image_format_support() {
    let entry = common::entry();
    let table = common::instance_table(&entry, &InstanceConfig::new(vk::VERSION_1_3));
    let instance = Instance::new(vk::Instance::from_raw(INSTANCE), &table);
    let physical_device = vk::PhysicalDevice::from_raw(PHYSICAL_DEVICES[0]);

    let mut properties = vk::ImageFormatProperties::default();
    let (optimal, linear) = unsafe {
        (
            instance.get_physical_device_image_format_properties(
                physical_device,
                vk::Format::R8G8B8A8_UNORM,
                vk::ImageType::TYPE_2D,
                vk::ImageTiling::OPTIMAL,
                vk::ImageUsageFlags::SAMPLED,
                vk::ImageCreateFlags::default(),
                &mut properties,
            ),
            instance.get_physical_device_image_format_properties(
                physical_device,
                vk::Format::R8G8B8A8_UNORM,
                vk::ImageType::TYPE_2D,
                vk::ImageTiling::LINEAR,
                vk::ImageUsageFlags::SAMPLED,
                vk::ImageCreateFlags::default(),
                &mut vk::ImageFormatProperties::default(),
            ),
        )
    };
    assert_eq!(optimal, vk::Result::SUCCESS);
    assert_eq!(properties.max_mip_levels, 15);
    assert_eq!(properties.max_extent.width, 16384);
    // Error codes pass through untouched.
    assert_eq!(linear, vk::Result::ERROR_FORMAT_NOT_SUPPORTED);

    let calls = common::take_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[0],
        call(
            "vkGetPhysicalDeviceImageFormatProperties",
            &[
                PHYSICAL_DEVICES[0] as u64,
                vk::Format::R8G8B8A8_UNORM.as_raw() as u64,
                vk::ImageType::TYPE_2D.as_raw() as u64,
                vk::ImageTiling::OPTIMAL.as_raw() as u64,
                vk::ImageUsageFlags::SAMPLED.as_raw() as u64,
                0,
            ]
        )
    );

    let mut count = 0;
    let mut sparse = [vk::SparseImageFormatProperties::default(); 2];
    unsafe {
        instance.get_physical_device_sparse_image_format_properties(
            physical_device,
            vk::Format::R8G8B8A8_UNORM,
            vk::ImageType::TYPE_2D,
            vk::SampleCountFlags::SAMPLE_COUNT_1,
            vk::ImageUsageFlags::SAMPLED,
            vk::ImageTiling::OPTIMAL,
            &mut count,
            std::ptr::null_mut(),
        );
        assert_eq!(count, 1);
        instance.get_physical_device_sparse_image_format_properties(
            physical_device,
            vk::Format::R8G8B8A8_UNORM,
            vk::ImageType::TYPE_2D,
            vk::SampleCountFlags::SAMPLE_COUNT_1,
            vk::ImageUsageFlags::SAMPLED,
            vk::ImageTiling::OPTIMAL,
            &mut count,
            sparse.as_mut_ptr(),
        );
    }
    assert_eq!(sparse[0].image_granularity.width, 128);
    assert_eq!(sparse[0].flags, vk::SparseImageFormatFlags::SINGLE_MIPTAIL);

    let mut tool_count = 1;
    let mut tools = [vk::PhysicalDeviceToolProperties::default()];
    let result = unsafe {
        instance.get_physical_device_tool_properties(
            physical_device,
            &mut tool_count,
            tools.as_mut_ptr(),
        )
    };
    assert_eq!(result, vk::Result::SUCCESS);
    assert_eq!(tools[0].name(), Some(c"validation"));
    assert_eq!(tools[0].purposes, vk::ToolPurposeFlags::VALIDATION);
    assert_eq!(
        common::take_calls(),
        [call(
            "vkGetPhysicalDeviceToolProperties",
            &[PHYSICAL_DEVICES[0] as u64, tools.as_ptr() as usize as u64]
        )]
    );
}

#[test]
fn device_graphics_objects_forward_allocator() {
    let entry = common::entry();
    let instance_table = common::instance_table(&entry, &InstanceConfig::default());
    let table = common::device_table(&instance_table, &DeviceConfig::default());
    let allocator = vk::AllocationCallbacks::default();
    let override_allocator = vk::AllocationCallbacks::default();
    let device = Device::with_allocator(vk::Device::from_raw(DEVICE), &table, Some(&allocator));

    let subpasses = [vk::SubpassDescription::default()];
    let render_pass_info = vk::RenderPassCreateInfo {
        subpass_count: subpasses.len() as u32,
        subpasses: subpasses.as_ptr(),
        ..Default::default()
    };
    let mut render_pass = vk::RenderPass::null();
    let mut framebuffer = vk::Framebuffer::null();
    let create_infos = [vk::GraphicsPipelineCreateInfo::default(); 2];
    let mut pipelines = [vk::Pipeline::null(); 2];
    let pipeline_cache = vk::PipelineCache::from_raw(0xcc);
    let layout = vk::DescriptorSetLayout::from_raw(0xd5);

    unsafe {
        assert_eq!(
            device.create_render_pass(&render_pass_info, &mut render_pass),
            vk::Result::SUCCESS
        );
        let framebuffer_info = vk::FramebufferCreateInfo {
            render_pass,
            width: 64,
            height: 64,
            layers: 1,
            ..Default::default()
        };
        assert_eq!(
            device.create_framebuffer_with_allocator(
                &framebuffer_info,
                Some(&override_allocator),
                &mut framebuffer,
            ),
            vk::Result::SUCCESS
        );
        assert_eq!(
            device.create_graphics_pipelines(pipeline_cache, &create_infos, &mut pipelines),
            vk::Result::SUCCESS
        );
        device.destroy_framebuffer(framebuffer);
        device.destroy_render_pass_with_allocator(render_pass, None);
        device.destroy_descriptor_set_layout(layout);
        device.destroy_descriptor_set_layout_with_allocator(layout, Some(&override_allocator));
    }
    assert_eq!(render_pass, vk::RenderPass::from_raw(RENDER_PASS));
    assert_eq!(framebuffer, vk::Framebuffer::from_raw(FRAMEBUFFER));
    assert_eq!(
        pipelines,
        [vk::Pipeline::from_raw(PIPELINE), vk::Pipeline::from_raw(PIPELINE + 1)]
    );

    let device_raw = DEVICE as u64;
    let stored = address(Some(&allocator));
    let overridden = address(Some(&override_allocator));
    assert_eq!(
        common::take_calls(),
        [
            call("vkCreateRenderPass", &[device_raw, 1, stored]),
            call("vkCreateFramebuffer", &[device_raw, RENDER_PASS, overridden]),
            call(
                "vkCreateGraphicsPipelines",
                &[
                    device_raw,
                    0xcc,
                    2,
                    create_infos.as_ptr() as usize as u64,
                    stored
                ]
            ),
            call("vkDestroyFramebuffer", &[device_raw, FRAMEBUFFER, stored]),
            call("vkDestroyRenderPass", &[device_raw, RENDER_PASS, 0]),
            call("vkDestroyDescriptorSetLayout", &[device_raw, 0xd5, stored]),
            call("vkDestroyDescriptorSetLayout", &[device_raw, 0xd5, overridden]),
        ]
    );
}

#[test]
fn device_forwards_queue_labels_and_object_tags() {
    let entry = common::entry();
    let instance_config =
        InstanceConfig::new(vk::VERSION_1_0).with_extension(InstanceExtension::ExtDebugUtils);
    let instance_table = common::instance_table(&entry, &instance_config);
    let table = common::device_table(&instance_table, &DeviceConfig::default());
    let device = Device::new(vk::Device::from_raw(DEVICE), &table);

    let queue = vk::Queue::from_raw(0x9);
    let label = vk::DebugUtilsLabelEXT {
        label_name: c"upload".as_ptr(),
        ..Default::default()
    };
    let marker = vk::DebugUtilsLabelEXT {
        label_name: c"frame boundary".as_ptr(),
        ..Default::default()
    };
    let tag = [0xde_u8, 0xad];
    let tag_info = vk::DebugUtilsObjectTagInfoEXT {
        object_type: vk::ObjectType::IMAGE,
        object_handle: 0x1e,
        tag_name: 0x7a6,
        tag_size: tag.len(),
        tag: tag.as_ptr().cast(),
        ..Default::default()
    };
    let binds = [vk::BindSparseInfo::default()];

    unsafe {
        device.queue_begin_debug_utils_label_ext(queue, &label);
        assert_eq!(
            device.queue_bind_sparse(queue, &binds, vk::Fence::from_raw(FENCE)),
            vk::Result::SUCCESS
        );
        device.queue_insert_debug_utils_label_ext(queue, &marker);
        device.queue_end_debug_utils_label_ext(queue);
        assert_eq!(device.set_debug_utils_object_tag_ext(&tag_info), vk::Result::SUCCESS);
    }

    assert_eq!(
        common::take_calls(),
        [
            call(
                "vkQueueBeginDebugUtilsLabelEXT",
                &[0x9, label.label_name as usize as u64]
            ),
            call(
                "vkQueueBindSparse",
                &[0x9, 1, binds.as_ptr() as usize as u64, FENCE]
            ),
            call(
                "vkQueueInsertDebugUtilsLabelEXT",
                &[0x9, marker.label_name as usize as u64]
            ),
            call("vkQueueEndDebugUtilsLabelEXT", &[0x9]),
            call("vkSetDebugUtilsObjectTagEXT", &[DEVICE as u64, 0x1e, 0x7a6, 2]),
        ]
    );
}

#[test]
fn device_forwards_slices_and_results() {
    let entry = common::entry();
    let instance_table = common::instance_table(&entry, &InstanceConfig::default());
    let table = common::device_table(&instance_table, &DeviceConfig::default());
    let device = Device::new(vk::Device::from_raw(DEVICE), &table);

    let queue = vk::Queue::from_raw(0x9);
    let submits = [vk::SubmitInfo::default(), vk::SubmitInfo::default()];
    let fences = [vk::Fence::from_raw(FENCE)];
    let (submit_result, wait_result) = unsafe {
        (
            device.queue_submit(queue, &submits, fences[0]),
            device.wait_for_fences(&fences, vk::Bool32::TRUE, 1_000),
        )
    };
    assert_eq!(submit_result, vk::Result::SUCCESS);
    // Non-success codes come back untouched.
    assert_eq!(wait_result, vk::Result::TIMEOUT);

    assert_eq!(
        common::take_calls(),
        [
            call(
                "vkQueueSubmit",
                &[0x9, 2, submits.as_ptr() as usize as u64, FENCE]
            ),
            call(
                "vkWaitForFences",
                &[DEVICE as u64, 1, fences.as_ptr() as usize as u64, 1, 1_000]
            ),
        ]
    );
}

#[test]
fn device_forwards_versioned_and_extension_commands() {
    let entry = common::entry();
    let instance_config =
        InstanceConfig::new(vk::VERSION_1_3).with_extension(InstanceExtension::ExtDebugUtils);
    let instance_table = common::instance_table(&entry, &instance_config);
    let config = DeviceConfig::new(vk::VERSION_1_3).with_extension(DeviceExtension::KhrSwapchain);
    let table = common::device_table(&instance_table, &config);
    let device = Device::new(vk::Device::from_raw(DEVICE), &table);

    let info = vk::BufferDeviceAddressInfo {
        buffer: vk::Buffer::from_raw(0x42),
        ..Default::default()
    };
    assert_eq!(unsafe { device.get_buffer_device_address(&info) }, 0xb000_0042);

    let create_info = vk::SwapchainCreateInfoKHR {
        min_image_count: 3,
        ..Default::default()
    };
    let mut swapchain = vk::SwapchainKHR::null();
    let images = unsafe {
        assert_eq!(
            device.create_swapchain_khr(&create_info, &mut swapchain),
            vk::Result::SUCCESS
        );
        device.swapchain_images_khr(swapchain)
    }
    .unwrap();
    assert_eq!(swapchain, vk::SwapchainKHR::from_raw(SWAPCHAIN));
    assert_eq!(images, SWAPCHAIN_IMAGES.map(vk::Image::from_raw));

    let name_info = vk::DebugUtilsObjectNameInfoEXT {
        object_type: vk::ObjectType::BUFFER,
        object_handle: 0x42,
        object_name: c"staging".as_ptr(),
        ..Default::default()
    };
    assert_eq!(
        unsafe { device.set_debug_utils_object_name_ext(&name_info) },
        vk::Result::SUCCESS
    );

    assert_eq!(
        common::take_calls(),
        [
            call("vkCreateSwapchainKHR", &[DEVICE as u64, 3, 0]),
            call(
                "vkSetDebugUtilsObjectNameEXT",
                &[DEVICE as u64, vk::ObjectType::BUFFER.as_raw() as u64, 0x42]
            ),
        ]
    );
}

#[test]
fn command_buffer_forwards_recording_commands() {
    let entry = common::entry();
    let instance_config =
        InstanceConfig::new(vk::VERSION_1_3).with_extension(InstanceExtension::ExtDebugUtils);
    let instance_table = common::instance_table(&entry, &instance_config);
    let table = common::device_table(&instance_table, &DeviceConfig::new(vk::VERSION_1_3));
    let device = Device::new(vk::Device::from_raw(DEVICE), &table);

    let command_buffer = device.command_buffer(vk::CommandBuffer::from_raw(0xcb));
    assert!(std::ptr::eq(command_buffer.table(), device.table()));

    let begin_info = vk::CommandBufferBeginInfo {
        flags: vk::CommandBufferUsageFlags::ONE_TIME_SUBMIT,
        ..Default::default()
    };
    let viewports = [vk::Viewport::default(); 2];
    let descriptor_sets = [vk::DescriptorSet::from_raw(0xd1), vk::DescriptorSet::from_raw(0xd2)];
    let dynamic_offsets = [256u32];
    let image_barriers = [vk::ImageMemoryBarrier2::default()];
    let dependency_info = vk::DependencyInfo {
        image_memory_barrier_count: image_barriers.len() as u32,
        image_memory_barriers: image_barriers.as_ptr(),
        ..Default::default()
    };
    let label = vk::DebugUtilsLabelEXT {
        label_name: c"shadow pass".as_ptr(),
        ..Default::default()
    };

    unsafe {
        assert_eq!(command_buffer.begin(&begin_info), vk::Result::SUCCESS);
        command_buffer.cmd_begin_debug_utils_label_ext(&label);
        command_buffer.cmd_set_viewport(1, &viewports);
        command_buffer.cmd_bind_descriptor_sets(
            vk::PipelineBindPoint::COMPUTE,
            vk::PipelineLayout::from_raw(0x1a),
            2,
            &descriptor_sets,
            &dynamic_offsets,
        );
        command_buffer.cmd_pipeline_barrier2(&dependency_info);
        command_buffer.cmd_draw(3, 1, 0, 7);
    }

    assert_eq!(
        common::take_calls(),
        [
            call("vkBeginCommandBuffer", &[0xcb, 1]),
            call(
                "vkCmdBeginDebugUtilsLabelEXT",
                &[0xcb, label.label_name as usize as u64]
            ),
            call(
                "vkCmdSetViewport",
                &[0xcb, 1, 2, viewports.as_ptr() as usize as u64]
            ),
            call(
                "vkCmdBindDescriptorSets",
                &[
                    0xcb,
                    vk::PipelineBindPoint::COMPUTE.as_raw() as u64,
                    0x1a,
                    2,
                    2,
                    descriptor_sets.as_ptr() as usize as u64,
                    1,
                    dynamic_offsets.as_ptr() as usize as u64,
                ]
            ),
            call(
                "vkCmdPipelineBarrier2",
                &[0xcb, 1, image_barriers.as_ptr() as usize as u64]
            ),
            call("vkCmdDraw", &[0xcb, 3, 1, 0, 7]),
        ]
    );
}

#[test]
fn command_buffer_forwards_render_pass_commands() {
    let entry = common::entry();
    let instance_table = common::instance_table(&entry, &InstanceConfig::new(vk::VERSION_1_3));
    let table = common::device_table(&instance_table, &DeviceConfig::new(vk::VERSION_1_3));
    let command_buffer = CommandBuffer::new(vk::CommandBuffer::from_raw(0xcb), &table);

    let begin_info = vk::RenderPassBeginInfo {
        render_pass: vk::RenderPass::from_raw(RENDER_PASS),
        framebuffer: vk::Framebuffer::from_raw(FRAMEBUFFER),
        ..Default::default()
    };
    let subpass_begin_info = vk::SubpassBeginInfo {
        contents: vk::SubpassContents::SECONDARY_COMMAND_BUFFERS,
        ..Default::default()
    };
    let blend_constants = [0.0, 0.25, 0.5, 1.0];
    let blits = [vk::ImageBlit::default(); 3];
    let attachments = [vk::ClearAttachment::default()];
    let rects = [vk::ClearRect::default(); 2];
    let blit_regions = [vk::ImageBlit2::default()];
    let blit_info = vk::BlitImageInfo2 {
        region_count: blit_regions.len() as u32,
        regions: blit_regions.as_ptr(),
        filter: vk::Filter::LINEAR,
        ..Default::default()
    };
    let buffers = [vk::Buffer::from_raw(0xb1), vk::Buffer::from_raw(0xb2)];
    let offsets: [vk::DeviceSize; 2] = [0, 64];
    let strides: [vk::DeviceSize; 2] = [16, 32];

    unsafe {
        command_buffer.cmd_begin_render_pass(&begin_info, vk::SubpassContents::INLINE);
        command_buffer.cmd_set_line_width(1.5);
        command_buffer.cmd_set_blend_constants(&blend_constants);
        command_buffer.cmd_clear_attachments(&attachments, &rects);
        command_buffer.cmd_next_subpass(vk::SubpassContents::SECONDARY_COMMAND_BUFFERS);
        command_buffer.cmd_end_render_pass();
        command_buffer.cmd_blit_image(
            vk::Image::from_raw(0x51),
            vk::ImageLayout::TRANSFER_SRC_OPTIMAL,
            vk::Image::from_raw(0xd7),
            vk::ImageLayout::TRANSFER_DST_OPTIMAL,
            &blits,
            vk::Filter::NEAREST,
        );
        command_buffer.cmd_begin_render_pass2(&begin_info, &subpass_begin_info);
        command_buffer.cmd_set_cull_mode(vk::CullModeFlags::BACK);
        command_buffer.cmd_bind_vertex_buffers2(1, &buffers, &offsets, None, Some(&strides[..]));
        command_buffer.cmd_blit_image2(&blit_info);
    }

    assert_eq!(
        common::take_calls(),
        [
            call(
                "vkCmdBeginRenderPass",
                &[0xcb, RENDER_PASS, FRAMEBUFFER, vk::SubpassContents::INLINE.as_raw() as u64]
            ),
            call("vkCmdSetLineWidth", &[0xcb, 1.5f32.to_bits() as u64]),
            call(
                "vkCmdSetBlendConstants",
                &[
                    0xcb,
                    blend_constants.as_ptr() as usize as u64,
                    1.0f32.to_bits() as u64
                ]
            ),
            call(
                "vkCmdClearAttachments",
                &[
                    0xcb,
                    1,
                    attachments.as_ptr() as usize as u64,
                    2,
                    rects.as_ptr() as usize as u64
                ]
            ),
            call(
                "vkCmdNextSubpass",
                &[0xcb, vk::SubpassContents::SECONDARY_COMMAND_BUFFERS.as_raw() as u64]
            ),
            call("vkCmdEndRenderPass", &[0xcb]),
            call(
                "vkCmdBlitImage",
                &[
                    0xcb,
                    0x51,
                    vk::ImageLayout::TRANSFER_SRC_OPTIMAL.as_raw() as u64,
                    0xd7,
                    vk::ImageLayout::TRANSFER_DST_OPTIMAL.as_raw() as u64,
                    3,
                    blits.as_ptr() as usize as u64,
                    vk::Filter::NEAREST.as_raw() as u64,
                ]
            ),
            call(
                "vkCmdBeginRenderPass2",
                &[
                    0xcb,
                    RENDER_PASS,
                    vk::SubpassContents::SECONDARY_COMMAND_BUFFERS.as_raw() as u64
                ]
            ),
            call(
                "vkCmdSetCullMode",
                &[0xcb, vk::CullModeFlags::BACK.as_raw() as u64]
            ),
            call(
                "vkCmdBindVertexBuffers2",
                &[
                    0xcb,
                    1,
                    2,
                    buffers.as_ptr() as usize as u64,
                    offsets.as_ptr() as usize as u64,
                    0,
                    strides.as_ptr() as usize as u64,
                ]
            ),
            call("vkCmdBlitImage2", &[0xcb, 1, vk::Filter::LINEAR.as_raw() as u64]),
        ]
    );
}

#[test]
fn command_buffer_is_copy() {
    let entry = common::entry();
    let instance_table = common::instance_table(&entry, &InstanceConfig::default());
    let table = common::device_table(&instance_table, &DeviceConfig::default());
    let command_buffer = CommandBuffer::new(vk::CommandBuffer::from_raw(0xcb), &table);

    let copy = command_buffer;
    unsafe {
        command_buffer.cmd_draw(1, 1, 0, 0);
        copy.cmd_draw(2, 1, 0, 0);
    }
    let calls = common::take_calls();
    assert_eq!(calls[0].args[1], 1);
    assert_eq!(calls[1].args[1], 2);
    assert_eq!(copy.handle(), command_buffer.handle());
}
