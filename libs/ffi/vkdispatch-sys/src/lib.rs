#![allow(clippy::missing_safety_doc)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::upper_case_acronyms)]

#[macro_use]
mod macros;

mod enums;
mod flags;
mod functions;
mod handles;
mod structs;
mod tables;

pub use enums::*;
pub use flags::*;
pub use functions::*;
pub use handles::*;
pub use structs::*;
pub use tables::*;

pub const fn make_api_version(variant: u32, major: u32, minor: u32, patch: u32) -> u32 {
    (variant << 29) | (major << 22) | (minor << 12) | patch
}

pub const fn api_version_variant(version: u32) -> u32 {
    version >> 29
}

pub const fn api_version_major(version: u32) -> u32 {
    (version >> 22) & 0x7f
}

pub const fn api_version_minor(version: u32) -> u32 {
    (version >> 12) & 0x3ff
}

pub const fn api_version_patch(version: u32) -> u32 {
    version & 0xfff
}

/// Strips the patch component so versions can be compared against the
/// `VERSION_*` block constants.
pub const fn api_version_without_patch(version: u32) -> u32 {
    version & !0xfff
}

pub const VERSION_1_0: u32 = make_api_version(0, 1, 0, 0);
pub const VERSION_1_1: u32 = make_api_version(0, 1, 1, 0);
pub const VERSION_1_2: u32 = make_api_version(0, 1, 2, 0);
pub const VERSION_1_3: u32 = make_api_version(0, 1, 3, 0);

pub const MAX_PHYSICAL_DEVICE_NAME_SIZE: usize = 256;
pub const UUID_SIZE: usize = 16;
pub const MAX_EXTENSION_NAME_SIZE: usize = 256;
pub const MAX_DESCRIPTION_SIZE: usize = 256;
pub const MAX_MEMORY_TYPES: usize = 32;
pub const MAX_MEMORY_HEAPS: usize = 16;
pub const MAX_DEVICE_GROUP_SIZE: usize = 32;
pub const LOD_CLAMP_NONE: f32 = 1000.0;
pub const REMAINING_MIP_LEVELS: u32 = !0u32;
pub const REMAINING_ARRAY_LAYERS: u32 = !0u32;
pub const WHOLE_SIZE: u64 = !0u64;
pub const ATTACHMENT_UNUSED: u32 = !0u32;
pub const QUEUE_FAMILY_IGNORED: u32 = !0u32;
pub const SUBPASS_EXTERNAL: u32 = !0u32;

pub type SampleMask = u32;
pub type DeviceSize = u64;
pub type DeviceAddress = u64;

#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bool32(u32);

impl Bool32 {
    pub const FALSE: Self = Self(0);
    pub const TRUE: Self = Self(1);

    #[inline]
    pub const fn as_bool(self) -> bool {
        self.0 != 0
    }
}

impl From<bool> for Bool32 {
    #[inline]
    fn from(value: bool) -> Self {
        if value { Self::TRUE } else { Self::FALSE }
    }
}

impl From<Bool32> for bool {
    #[inline]
    fn from(value: Bool32) -> Self {
        value.as_bool()
    }
}

impl std::fmt::Debug for Bool32 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_bool().fmt(f)
    }
}
