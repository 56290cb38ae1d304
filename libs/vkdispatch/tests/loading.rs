mod common;

use std::ffi::CStr;

use vkdispatch::{
    DeviceConfig, DeviceExtension, DeviceTable, Entry, Error, InstanceConfig, InstanceExtension,
    InstanceTable, Resolver, vk,
};

use common::{DEVICE, INSTANCE, INSTANCE_VERSION};

fn requested(lookups: &[String], via: &str) -> Vec<String> {
    let prefix = format!("{via}:");
    lookups
        .iter()
        .filter_map(|lookup| lookup.strip_prefix(&prefix))
        .map(str::to_owned)
        .collect()
}

fn names(entry_points: &[&CStr]) -> Vec<String> {
    entry_points
        .iter()
        .map(|name| name.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn entry_resolves_global_commands() {
    common::init_logging();
    let entry = unsafe { Entry::new(common::get_instance_proc_addr) }.unwrap();

    let lookups = requested(&common::take_lookups(), "instance");
    assert_eq!(lookups[0], "vkEnumerateInstanceVersion");
    assert_eq!(lookups[1..].to_vec(), names(vk::EntryFnV1_0::ENTRY_POINTS));

    let mut api_version = 0;
    assert_eq!(entry.enumerate_instance_version(&mut api_version), vk::Result::SUCCESS);
    assert_eq!(api_version, INSTANCE_VERSION);
}

#[test]
fn legacy_loader_reports_version_1_0() {
    common::set_legacy_loader(true);
    let entry = common::entry();

    let mut api_version = 0;
    assert_eq!(entry.enumerate_instance_version(&mut api_version), vk::Result::SUCCESS);
    assert_eq!(api_version, vk::VERSION_1_0);
}

#[test]
fn entry_without_create_instance_fails() {
    common::hide(c"vkCreateInstance");
    let result = unsafe { Entry::new(common::get_instance_proc_addr) };
    assert!(matches!(
        result,
        Err(Error::MissingRootEntryPoint(name)) if name == c"vkCreateInstance"
    ));
}

#[test]
fn null_root_entry_point_is_an_error() {
    let result = unsafe { Entry::from_raw(std::ptr::null()) };
    match result {
        Err(error @ Error::MissingRootEntryPoint(_)) => assert_eq!(
            error.to_string(),
            "failed to resolve root entry point vkGetInstanceProcAddr"
        ),
        _ => panic!("expected a missing root entry point"),
    }
}

#[test]
fn entry_enumerates_instance_extensions() {
    let entry = common::entry();

    let extensions = entry.instance_extension_properties(None).unwrap();
    let extension_names = extensions
        .iter()
        .map(|properties| properties.name().unwrap().to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    assert_eq!(extension_names, ["VK_KHR_surface", "VK_EXT_debug_utils"]);

    // One call for the count and one for the data.
    let calls = common::take_calls();
    assert_eq!(calls.len(), 2);
    assert!(calls.iter().all(|call| call.args == [0]));

    assert!(entry.instance_layer_properties().unwrap().is_empty());
}

#[test]
fn entry_create_instance_forwards_allocator() {
    let entry = common::entry();
    let allocator = vk::AllocationCallbacks::default();
    let names = InstanceConfig::new(vk::VERSION_1_1)
        .with_extension(InstanceExtension::KhrSurface)
        .enabled_extension_names();
    let create_info = vk::InstanceCreateInfo {
        enabled_extension_count: names.len() as u32,
        enabled_extension_names: names.as_ptr(),
        ..Default::default()
    };

    let mut instance = vk::Instance::null();
    let result = unsafe { entry.create_instance(&create_info, Some(&allocator), &mut instance) };
    assert_eq!(result, vk::Result::SUCCESS);
    assert_eq!(instance, vk::Instance::from_raw(INSTANCE));

    let calls = common::take_calls();
    assert_eq!(calls[0].name, "vkCreateInstance");
    assert_eq!(calls[0].args, [1, common::address(Some(&allocator))]);
}

#[test]
fn instance_table_skips_disabled_blocks() {
    let entry = common::entry();
    let config = InstanceConfig::new(vk::VERSION_1_0);
    let table = unsafe {
        InstanceTable::load(&entry, vk::Instance::from_raw(INSTANCE), &config, None)
    }
    .unwrap();

    let lookups = requested(&common::take_lookups(), "instance");
    assert_eq!(lookups, names(vk::InstanceFnV1_0::ENTRY_POINTS));
    assert_eq!(table.api_version(), vk::VERSION_1_0);
    assert!(!table.supports(InstanceExtension::KhrSurface));
}

#[test]
fn instance_table_loads_enabled_extensions() {
    let entry = common::entry();
    let config = InstanceConfig::new(vk::VERSION_1_1)
        .with_extension(InstanceExtension::KhrSurface)
        .with_extension(InstanceExtension::ExtDebugUtils);
    let table = unsafe {
        InstanceTable::load(&entry, vk::Instance::from_raw(INSTANCE), &config, None)
    }
    .unwrap();

    let lookups = requested(&common::take_lookups(), "instance");
    let expected = [
        vk::InstanceFnV1_0::ENTRY_POINTS,
        vk::InstanceFnV1_1::ENTRY_POINTS,
        vk::KhrSurfaceFn::ENTRY_POINTS,
        vk::ExtDebugUtilsInstanceFn::ENTRY_POINTS,
    ]
    .concat();
    assert_eq!(lookups, names(&expected));
    assert!(table.supports(InstanceExtension::KhrSurface));
    assert!(table.supports(InstanceExtension::ExtDebugUtils));
}

#[test]
fn strict_instance_load_reports_missing_block() {
    let entry = common::entry();
    let config = InstanceConfig::new(vk::VERSION_1_1).strict(true);
    let result =
        unsafe { InstanceTable::load(&entry, vk::Instance::from_raw(INSTANCE), &config, None) };

    match result {
        Err(Error::MissingEntryPoints { block, names }) => {
            assert_eq!(block, "VERSION_1_1");
            assert_eq!(names, vk::InstanceFnV1_1::ENTRY_POINTS);
        }
        _ => panic!("expected VERSION_1_1 to be reported"),
    }
}

#[test]
fn lenient_instance_load_keeps_stubs() {
    let entry = common::entry();
    common::hide(c"vkGetPhysicalDeviceFeatures");
    let config = InstanceConfig::new(vk::VERSION_1_1);
    let table = unsafe {
        InstanceTable::load(&entry, vk::Instance::from_raw(INSTANCE), &config, None)
    }
    .unwrap();

    let unloaded = vk::InstanceFnV1_0::UNLOADED;
    assert_eq!(
        table.v1_0.get_physical_device_features as usize,
        unloaded.get_physical_device_features as usize
    );
    assert_ne!(
        table.v1_0.destroy_instance as usize,
        unloaded.destroy_instance as usize
    );
    // Nothing in the 1.1 block is mocked, so all of it keeps the stubs.
    assert_eq!(
        table.v1_1.get_physical_device_properties2 as usize,
        vk::InstanceFnV1_1::UNLOADED.get_physical_device_properties2 as usize
    );
}

#[test]
fn instance_table_gates_version_1_3_block() {
    let entry = common::entry();
    let config = InstanceConfig::new(vk::VERSION_1_3);
    let table = unsafe {
        InstanceTable::load(&entry, vk::Instance::from_raw(INSTANCE), &config, None)
    }
    .unwrap();

    let lookups = requested(&common::take_lookups(), "instance");
    assert!(lookups.iter().any(|name| name == "vkGetPhysicalDeviceToolProperties"));
    assert_ne!(
        table.v1_3.get_physical_device_tool_properties as usize,
        vk::InstanceFnV1_3::UNLOADED.get_physical_device_tool_properties as usize
    );
}

#[test]
fn explicit_resolver_replaces_default_lookup() {
    let entry = common::entry();
    let mut seen = Vec::new();
    let mut resolve = |name: &CStr| {
        seen.push(name.to_string_lossy().into_owned());
        unsafe { entry.get_instance_proc_addr(vk::Instance::from_raw(INSTANCE), name) }
    };
    let resolver: Resolver = &mut resolve;
    let config = InstanceConfig::new(vk::VERSION_1_0);
    let table = unsafe {
        InstanceTable::load(&entry, vk::Instance::from_raw(INSTANCE), &config, Some(resolver))
    }
    .unwrap();

    assert_eq!(seen, names(vk::InstanceFnV1_0::ENTRY_POINTS));
    // The default path would have looked the names up a second time.
    assert_eq!(common::take_lookups().len(), seen.len());
    assert_eq!(table.api_version(), vk::VERSION_1_0);
}

#[test]
fn device_table_resolves_through_get_device_proc_addr() {
    let entry = common::entry();
    let instance_table = common::instance_table(&entry, &InstanceConfig::new(vk::VERSION_1_3));
    let config = DeviceConfig::new(vk::VERSION_1_3).with_extension(DeviceExtension::KhrSwapchain);
    let table = unsafe {
        DeviceTable::load(&instance_table, vk::Device::from_raw(DEVICE), &config, None)
    }
    .unwrap();

    let lookups = common::take_lookups();
    assert!(requested(&lookups, "instance").is_empty());
    let expected = [
        vk::DeviceFnV1_0::ENTRY_POINTS,
        vk::DeviceFnV1_1::ENTRY_POINTS,
        vk::DeviceFnV1_2::ENTRY_POINTS,
        vk::DeviceFnV1_3::ENTRY_POINTS,
        vk::KhrSwapchainFn::ENTRY_POINTS,
    ]
    .concat();
    assert_eq!(requested(&lookups, "device"), names(&expected));
    assert!(table.supports(DeviceExtension::KhrSwapchain));
    assert!(!table.has_debug_utils());
}

#[test]
fn device_debug_utils_follow_the_instance() {
    let entry = common::entry();
    let instance_config =
        InstanceConfig::new(vk::VERSION_1_0).with_extension(InstanceExtension::ExtDebugUtils);
    let instance_table = common::instance_table(&entry, &instance_config);
    let config = DeviceConfig::new(vk::VERSION_1_0);
    let table = unsafe {
        DeviceTable::load(&instance_table, vk::Device::from_raw(DEVICE), &config, None)
    }
    .unwrap();
    assert!(table.has_debug_utils());

    let lookups = requested(&common::take_lookups(), "device");
    assert!(lookups.iter().any(|name| name == "vkSetDebugUtilsObjectNameEXT"));
    assert!(!lookups.iter().any(|name| name == "vkCmdPipelineBarrier2"));
}

#[test]
fn strict_device_load_names_unresolved_entry_points() {
    let entry = common::entry();
    let instance_table = common::instance_table(&entry, &InstanceConfig::new(vk::VERSION_1_0));
    let config = DeviceConfig::new(vk::VERSION_1_0)
        .with_extension(DeviceExtension::KhrSwapchain)
        .strict(true);
    let result =
        unsafe { DeviceTable::load(&instance_table, vk::Device::from_raw(DEVICE), &config, None) };

    // The 1.0 block is only partly mocked, so it is the first block reported.
    match result {
        Err(Error::MissingEntryPoints { block, names }) => {
            assert_eq!(block, "VERSION_1_0");
            assert!(names.contains(&c"vkQueueWaitIdle"));
            assert!(!names.contains(&c"vkQueueSubmit"));
        }
        _ => panic!("expected VERSION_1_0 to be reported"),
    }
}
