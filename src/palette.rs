//! The fixed 10-color palette and the paint tools.

/// A paint color. The palette is fixed for the lifetime of the process:
/// every variant has exactly one RGB triple and one display name.
///
/// The discriminants match the palette order used by the direct-selection
/// keys ('1' selects [`Color::Black`], '0' selects [`Color::Brown`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Color {
    #[default]
    White = 0,
    Black,
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
    Brown,
}

/// All palette entries, in cycling order.
pub const PALETTE: [Color; Color::COUNT] = [
    Color::White,
    Color::Black,
    Color::Red,
    Color::Orange,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
    Color::Brown,
];

impl Color {
    /// Number of palette entries.
    pub const COUNT: usize = 10;

    /// The RGB triple this color renders and exports as.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            Color::White => [255, 255, 255],
            Color::Black => [0, 0, 0],
            Color::Red => [255, 0, 0],
            Color::Orange => [255, 165, 0],
            Color::Yellow => [255, 255, 0],
            Color::Green => [0, 255, 0],
            Color::Cyan => [0, 255, 255],
            Color::Blue => [0, 0, 255],
            Color::Magenta => [255, 0, 255],
            Color::Brown => [150, 75, 0],
        }
    }

    /// Display name, as shown in the status line.
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
            Color::Red => "Red",
            Color::Orange => "Orange",
            Color::Yellow => "Yellow",
            Color::Green => "Green",
            Color::Cyan => "Cyan",
            Color::Blue => "Blue",
            Color::Magenta => "Magenta",
            Color::Brown => "Brown",
        }
    }

    /// Returns the palette entry at `index`, if it is in range.
    pub fn from_index(index: usize) -> Option<Self> {
        PALETTE.get(index).copied()
    }

    fn index(self) -> usize {
        self as usize
    }

    /// The next color in the palette, wrapping from the last entry to the
    /// first.
    pub fn next(self) -> Self {
        PALETTE[(self.index() + 1) % Self::COUNT]
    }

    /// The previous color in the palette. Stepping back from the first entry
    /// wraps to the last one; spelled out rather than done with modular
    /// arithmetic so the wrap target stays tied to the palette length.
    pub fn prev(self) -> Self {
        match self.index() {
            0 => PALETTE[Self::COUNT - 1],
            i => PALETTE[i - 1],
        }
    }
}

/// A paint tool. Governs what applying the tool does to the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tool {
    /// Paints the single cell under the cursor.
    #[default]
    Pencil,
    /// Fills the entire canvas. There is no notion of color-connected
    /// regions; the bucket always floods everything.
    Bucket,
}

impl Tool {
    /// The other tool; cycling alternates between the two.
    pub fn next(self) -> Self {
        match self {
            Tool::Pencil => Tool::Bucket,
            Tool::Bucket => Tool::Pencil,
        }
    }

    /// Display name, as shown in the status line.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Pencil => "Pencil",
            Tool::Bucket => "Bucket",
        }
    }
}
