use std::{ffi::c_void, os::raw::c_char};

use super::*;

pub type FnVoidFunction = extern "system" fn();

pub type FnGetInstanceProcAddr =
    extern "system" fn(instance: Instance, name: *const c_char) -> Option<FnVoidFunction>;

pub type FnGetDeviceProcAddr =
    extern "system" fn(device: Device, name: *const c_char) -> Option<FnVoidFunction>;

pub type FnEnumerateInstanceVersion = extern "system" fn(api_version: &mut u32) -> Result;

pub type FnAllocationFunction = extern "system" fn(
    user_data: *mut c_void,
    size: usize,
    alignment: usize,
    allocation_scope: SystemAllocationScope,
) -> *mut c_void;

pub type FnReallocationFunction = extern "system" fn(
    user_data: *mut c_void,
    original: *mut c_void,
    size: usize,
    alignment: usize,
    allocation_scope: SystemAllocationScope,
) -> *mut c_void;

pub type FnFreeFunction = extern "system" fn(user_data: *mut c_void, memory: *mut c_void);

pub type FnInternalAllocationNotification = extern "system" fn(
    user_data: *mut c_void,
    size: usize,
    allocation_type: InternalAllocationType,
    allocation_scope: SystemAllocationScope,
);

pub type FnInternalFreeNotification = extern "system" fn(
    user_data: *mut c_void,
    size: usize,
    allocation_type: InternalAllocationType,
    allocation_scope: SystemAllocationScope,
);

pub type FnDebugUtilsMessengerCallbackEXT = extern "system" fn(
    message_severity: DebugUtilsMessageSeverityFlagsEXT,
    message_types: DebugUtilsMessageTypeFlagsEXT,
    callback_data: &DebugUtilsMessengerCallbackDataEXT,
    user_data: *mut c_void,
) -> Bool32;
