// Dispatchable handles are pointers to driver objects.
vk_handle! {
    Instance: usize,
    PhysicalDevice: usize,
    Device: usize,
    Queue: usize,
    CommandBuffer: usize,
}

// Non-dispatchable handles are 64 bits on every platform.
vk_handle! {
    DeviceMemory: u64,
    CommandPool: u64,
    Buffer: u64,
    BufferView: u64,
    Image: u64,
    ImageView: u64,
    ShaderModule: u64,
    Pipeline: u64,
    PipelineLayout: u64,
    PipelineCache: u64,
    Sampler: u64,
    DescriptorSet: u64,
    DescriptorSetLayout: u64,
    DescriptorPool: u64,
    Fence: u64,
    Semaphore: u64,
    Event: u64,
    QueryPool: u64,
    Framebuffer: u64,
    RenderPass: u64,
    SamplerYcbcrConversion: u64,
    DescriptorUpdateTemplate: u64,
    PrivateDataSlot: u64,
    SurfaceKHR: u64,
    SwapchainKHR: u64,
    DebugUtilsMessengerEXT: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn handle_sizes() {
        assert_eq!(size_of::<Device>(), size_of::<*const ()>());
        assert_eq!(size_of::<CommandBuffer>(), size_of::<*const ()>());
        assert_eq!(size_of::<Buffer>(), 8);
        assert_eq!(size_of::<SwapchainKHR>(), 8);
    }

    #[test]
    fn null_handles() {
        assert!(Instance::null().is_null());
        assert!(Fence::default().is_null());
        assert!(!Buffer::from_raw(0x1000).is_null());
        assert_eq!(Buffer::from_raw(0x1000).as_raw(), 0x1000);
        assert_eq!(format!("{:?}", Image::from_raw(0xff)), "Image(0xff)");
    }
}
