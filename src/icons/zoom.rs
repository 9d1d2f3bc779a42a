//! Zoom levels and their nominal icon sizes.

/// Nominal size at the smallest zoom level.
pub const ICON_SIZE_SMALLEST: u32 = 12;
/// Nominal size one step up from the smallest.
pub const ICON_SIZE_SMALLER: u32 = 24;
/// Nominal size one step down from standard.
pub const ICON_SIZE_SMALL: u32 = 36;
/// The standard icon size; icons are decoded at this size and scaled from it.
pub const ICON_SIZE_STANDARD: u32 = 48;
/// Nominal size one step up from standard.
pub const ICON_SIZE_LARGE: u32 = 72;
/// Nominal size one step down from the largest.
pub const ICON_SIZE_LARGER: u32 = 96;
/// Nominal size at the largest zoom level.
pub const ICON_SIZE_LARGEST: u32 = 192;

/// View zoom level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum ZoomLevel {
    Smallest,
    Smaller,
    Small,
    #[default]
    Standard,
    Large,
    Larger,
    Largest,
}

impl ZoomLevel {
    /// All zoom levels, smallest first.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Smallest,
            Self::Smaller,
            Self::Small,
            Self::Standard,
            Self::Large,
            Self::Larger,
            Self::Largest,
        ]
    }

    /// Zoom level for a numeric index (0 = smallest).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Numeric index of this level (0 = smallest).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Icon size in pixels for this level.
    pub const fn icon_size(self) -> u32 {
        match self {
            Self::Smallest => ICON_SIZE_SMALLEST,
            Self::Smaller => ICON_SIZE_SMALLER,
            Self::Small => ICON_SIZE_SMALL,
            Self::Standard => ICON_SIZE_STANDARD,
            Self::Large => ICON_SIZE_LARGE,
            Self::Larger => ICON_SIZE_LARGER,
            Self::Largest => ICON_SIZE_LARGEST,
        }
    }

    /// One level larger, saturating at the largest.
    pub fn zoom_in(self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(Self::Largest)
    }

    /// One level smaller, saturating at the smallest.
    pub fn zoom_out(self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(Self::Smallest)
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Smallest => "smallest",
            Self::Smaller => "smaller",
            Self::Small => "small",
            Self::Standard => "standard",
            Self::Large => "large",
            Self::Larger => "larger",
            Self::Largest => "largest",
        }
    }
}

impl std::fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
