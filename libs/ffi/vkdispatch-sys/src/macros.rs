macro_rules! vk_handle {
    ($($name:ident: $repr:ty,)*) => {
        $(
            #[repr(transparent)]
            #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
            pub struct $name($repr);

            impl $name {
                #[inline(always)]
                pub const fn null() -> Self {
                    Self(0)
                }

                #[inline(always)]
                pub const fn is_null(self) -> bool {
                    self.0 == 0
                }

                #[inline(always)]
                pub const fn from_raw(raw: $repr) -> Self {
                    Self(raw)
                }

                #[inline(always)]
                pub const fn as_raw(self) -> $repr {
                    self.0
                }
            }

            impl std::fmt::Debug for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, concat!(stringify!($name), "({:#x})"), self.0)
                }
            }
        )*
    };
}

macro_rules! vk_enum {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident = $value:expr,)*
        }
    ) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name(i32);

        impl $name {
            $($(#[$variant_meta])* pub const $variant: Self = Self($value);)*

            #[inline(always)]
            pub const fn from_raw(raw: i32) -> Self {
                Self(raw)
            }

            #[inline(always)]
            pub const fn as_raw(self) -> i32 {
                self.0
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let name = match *self {
                    $(Self::$variant => Some(stringify!($variant)),)*
                    #[allow(unreachable_patterns)]
                    _ => None,
                };
                match name {
                    Some(name) => f.write_str(name),
                    None => write!(f, concat!(stringify!($name), "({})"), self.0),
                }
            }
        }
    };
}

macro_rules! vk_flags {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($repr:ty) {
            $($(#[$flag_meta:meta])* $flag:ident = $value:expr,)*
        }
    ) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name($repr);

        impl $name {
            $($(#[$flag_meta])* pub const $flag: Self = Self($value);)*

            #[inline(always)]
            pub const fn empty() -> Self {
                Self(0)
            }

            #[inline(always)]
            pub const fn from_raw(raw: $repr) -> Self {
                Self(raw)
            }

            #[inline(always)]
            pub const fn as_raw(self) -> $repr {
                self.0
            }

            #[inline(always)]
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            #[inline(always)]
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            #[inline(always)]
            pub const fn intersects(self, other: Self) -> bool {
                self.0 & other.0 != 0
            }
        }

        impl std::ops::BitOr for $name {
            type Output = Self;

            #[inline(always)]
            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl std::ops::BitOrAssign for $name {
            #[inline(always)]
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0
            }
        }

        impl std::ops::BitAnd for $name {
            type Output = Self;

            #[inline(always)]
            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl std::ops::BitAndAssign for $name {
            #[inline(always)]
            fn bitand_assign(&mut self, rhs: Self) {
                self.0 &= rhs.0
            }
        }

        impl std::fmt::Debug for $name {
            #[allow(unused_mut)]
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut remaining = self.0;
                let mut first = true;
                f.write_str(concat!(stringify!($name), "("))?;
                $(
                    let bits: $repr = $value;
                    if bits != 0 && remaining & bits == bits {
                        if !first {
                            f.write_str(" | ")?;
                        }
                        f.write_str(stringify!($flag))?;
                        remaining &= !bits;
                        first = false;
                    }
                )*
                if remaining != 0 || first {
                    if !first {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{remaining:#x}")?;
                }
                f.write_str(")")
            }
        }
    };
}

/// Zero-initializing `Default` for `#[repr(C)]` structs, storing the structure
/// type for the ones that carry a `_type` header.
macro_rules! impl_default {
    ($($name:ident $(=> $structure_type:ident)?,)*) => {
        $(
            impl Default for $name {
                fn default() -> Self {
                    // SAFETY: every field of these structs is valid when zeroed.
                    #[allow(unused_mut)]
                    let mut x = unsafe { std::mem::MaybeUninit::<Self>::zeroed().assume_init() };
                    $(x._type = StructureType::$structure_type;)?
                    x
                }
            }
        )*
    };
}

/// Declares one dispatch table: a flat struct holding a function pointer per
/// entry point of an API version or extension block.
macro_rules! dispatch_table {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident = $symbol:literal: fn($($arg:ident: $arg_ty:ty),* $(,)?) $(-> $ret:ty)?;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: extern "system" fn($($arg_ty),*) $(-> $ret)?,
            )*
        }

        impl $name {
            /// Native entry point names, in field order.
            pub const ENTRY_POINTS: &'static [&'static CStr] = &[$($symbol,)*];

            /// A table where every entry aborts with its name when called.
            pub const UNLOADED: Self = Self {
                $(
                    $field: {
                        #[allow(unused_variables)]
                        extern "system" fn not_loaded($($arg: $arg_ty),*) $(-> $ret)? {
                            entry_point_not_loaded($symbol)
                        }
                        not_loaded
                    },
                )*
            };

            /// Populates the table by resolving every name in
            /// [`Self::ENTRY_POINTS`] exactly once, in order. Names the resolver
            /// cannot find keep the [`Self::UNLOADED`] stub.
            ///
            /// # Safety
            ///
            /// Every pointer returned by `resolve` must have the signature of the
            /// entry point it was requested for.
            pub unsafe fn load<F>(mut resolve: F) -> Self
            where
                F: FnMut(&CStr) -> Option<FnVoidFunction>,
            {
                Self {
                    $(
                        $field: match resolve($symbol) {
                            Some(function) => unsafe {
                                transmute::<FnVoidFunction, extern "system" fn($($arg_ty),*) $(-> $ret)?>(
                                    function,
                                )
                            },
                            None => Self::UNLOADED.$field,
                        },
                    )*
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::UNLOADED
            }
        }
    };
}
