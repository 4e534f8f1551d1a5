//! Helper macros


/// Count the number of token trees
// mutliple version to limit recusion
#[macro_export]
macro_rules! count_tt {
    ($_a:tt $_b:tt $_c:tt $_d:tt $_e:tt
     $_f:tt $_g:tt $_h:tt $_i:tt $_j:tt
     $_k:tt $_l:tt $_m:tt $_n:tt $_o:tt
     $_p:tt $_q:tt $_r:tt $_s:tt $_t:tt
     $($rest:tt)*) => {
        20usize + $crate::count_tt!($($rest)*)
    };
    ($_a:tt $_b:tt $_c:tt $_d:tt $_e:tt
     $_f:tt $_g:tt $_h:tt $_i:tt $_j:tt
     $($rest:tt)*) => {
        10usize + $crate::count_tt!($($rest)*)
    };
    ($_a:tt $_b:tt $_c:tt $_d:tt $_e:tt
     $($rest:tt)*) => {
        5usize + $crate::count_tt!($($rest)*)
    };
    ($_first:tt $($rest:tt)*) => {
        1usize + $crate::count_tt!($($rest)*)
    };
    () => {
        0usize
    };
}

/// Declare a fieldless enum with explicit indices and a long and short name per variant.
///
/// The enum gets implementations of [`EnumCountT`](crate::EnumCountT), [`EnumFromIndexT`](crate::EnumFromIndexT),
/// [`EnumFromNameT`](crate::EnumFromNameT) (accepting either name) and [`EnumNameT`](crate::EnumNameT).
///
/// ```
/// onca_base::indexed_enum!{
///     #[derive(Clone, Copy, PartialEq, Eq, Debug)]
///     pub enum Side: u8 {
///         Left  = 0 => "Left", "L";
///         Right = 1 => "Right", "R";
///     }
/// }
///
/// use onca_base::EnumFromNameT;
/// assert_eq!(Side::parse("R"), Some(Side::Right));
/// ```
///
/// `COUNT` is the number of variants, so indices are expected to be contiguous when it is used as a bound.
#[macro_export]
macro_rules! indexed_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ident {
            $(
                $(#[$var_meta:meta])*
                $variant:ident = $idx:literal => $long:literal, $short:literal
            );* $(;)?
        }
    ) => {
        $(#[$meta])*
        #[repr($repr)]
        $vis enum $name {
            $(
                $(#[$var_meta])*
                $variant = $idx,
            )*
        }

        impl $name {
            /// Get the index of the variant.
            pub const fn index(self) -> usize {
                self as usize
            }
        }

        impl $crate::EnumCountT for $name {
            const COUNT: usize = $crate::count_tt!($($variant)*);
        }

        impl $crate::EnumFromIndexT for $name {
            fn from_idx(idx: usize) -> Option<Self> {
                match idx {
                    $($idx => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        impl $crate::EnumFromNameT for $name {
            #[allow(unreachable_patterns)]
            fn parse(s: &str) -> Option<Self> {
                match s {
                    $($long | $short => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        impl $crate::EnumNameT for $name {
            fn long_name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $long,)*
                }
            }

            fn short_name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $short,)*
                }
            }
        }
    };
}

/// Get the name of the surrounding function
#[macro_export]
macro_rules! func_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            core::any::type_name::<T>()
        }
        let name = type_name_of(f);
        match name.strip_suffix("::f") {
            Some(stripped) => stripped,
            None => name,
        }
    }};
}
