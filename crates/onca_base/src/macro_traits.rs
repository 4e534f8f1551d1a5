//! Contains traits implemented by the onca enum macros


/// Trait to get the number of elements in an enum
pub trait EnumCountT {
    /// Count or number of element in an enum
    const COUNT : usize;
}

/// Trait to get an enum from a given index
pub trait EnumFromIndexT: Sized {
    /// Try to convert an index to an enum
    fn from_idx(idx: usize) -> Option<Self>;

    /// Try to convert an index to an enum, if it couldn't convert it, return a default value
    fn from_idx_or(idx: usize, default: Self) -> Self {
        Self::from_idx(idx).unwrap_or(default)
    }
}

/// Trait to parse an enum from one of its names.
pub trait EnumFromNameT: Sized {
    /// Try to parse the enum from a string slice.
    fn parse(s: &str) -> Option<Self>;
}

/// Trait to get the names an enum variant is known by.
pub trait EnumNameT {
    /// Full name of the variant.
    fn long_name(&self) -> &'static str;

    /// Abbreviated name of the variant.
    fn short_name(&self) -> &'static str;
}
