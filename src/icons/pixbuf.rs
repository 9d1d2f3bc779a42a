//! Bitmap primitives: scaling, emblem compositing and the built-in images.

use std::rc::Rc;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// A decoded bitmap shared between the cache and its callers.
///
/// The cache holds one handle per entry and never hands the same allocation
/// to two entries, so a strong count of one means nobody else is using it.
pub type Pixbuf = Rc<RgbaImage>;

/// Edge length of the built-in fallback icon.
pub const FALLBACK_ICON_SIZE: u32 = 48;

/// Edge length of the built-in symbolic link emblem.
pub const SYMLINK_EMBLEM_SIZE: u32 = 16;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const OUTLINE: Rgba<u8> = Rgba([46, 52, 54, 255]);
const PAPER: Rgba<u8> = Rgba([250, 250, 248, 255]);
const FOLD: Rgba<u8> = Rgba([211, 215, 207, 255]);
const LINK: Rgba<u8> = Rgba([32, 74, 135, 255]);

/// Scale `image` by `size / default_size` on both axes.
///
/// Integer arithmetic like the rest of the size math; a dimension never
/// drops below one pixel.
pub fn scale_to_size(image: &RgbaImage, size: u32, default_size: u32) -> RgbaImage {
    let width = scale_dimension(image.width(), size, default_size);
    let height = scale_dimension(image.height(), size, default_size);
    imageops::resize(image, width, height, FilterType::Triangle)
}

fn scale_dimension(dimension: u32, size: u32, default_size: u32) -> u32 {
    let scaled = u64::from(dimension) * u64::from(size) / u64::from(default_size.max(1));
    u32::try_from(scaled).unwrap_or(u32::MAX).max(1)
}

/// Alpha-blend `emblem` onto the lower-left corner of `base`.
pub fn composite_lower_left(base: &mut RgbaImage, emblem: &RgbaImage) {
    let y = i64::from(base.height()) - i64::from(emblem.height());
    imageops::overlay(base, emblem, 0, y);
}

/// The generic "unknown file" page used when no icon file can be loaded.
pub fn fallback_icon() -> RgbaImage {
    const LEFT: u32 = 8;
    const RIGHT: u32 = 39;
    const TOP: u32 = 4;
    const BOTTOM: u32 = 43;
    const CORNER: u32 = 10;
    const CORNER_X: u32 = RIGHT - CORNER;

    RgbaImage::from_fn(FALLBACK_ICON_SIZE, FALLBACK_ICON_SIZE, |x, y| {
        if !(LEFT..=RIGHT).contains(&x) || !(TOP..=BOTTOM).contains(&y) {
            return TRANSPARENT;
        }

        let down = y - TOP;
        if x > CORNER_X {
            let across = x - CORNER_X;
            if across > down {
                return TRANSPARENT;
            }
            if across == down {
                return OUTLINE;
            }
            if down < CORNER {
                return FOLD;
            }
        }

        if x == LEFT || x == RIGHT || y == TOP || y == BOTTOM {
            OUTLINE
        } else {
            PAPER
        }
    })
}

/// The fallback page at `size` pixels, scaled from its native size if needed.
pub fn fallback_icon_at(size: u32) -> RgbaImage {
    let image = fallback_icon();
    if size == FALLBACK_ICON_SIZE {
        image
    } else {
        scale_to_size(&image, size, FALLBACK_ICON_SIZE)
    }
}

/// The built-in link arrow badge, used when the search path has none.
pub fn symlink_emblem() -> RgbaImage {
    const LAST: u32 = SYMLINK_EMBLEM_SIZE - 1;

    RgbaImage::from_fn(SYMLINK_EMBLEM_SIZE, SYMLINK_EMBLEM_SIZE, |x, y| {
        if x == 0 || y == 0 || x == LAST || y == LAST {
            return OUTLINE;
        }
        // Shaft from the lower-left towards the upper-right.
        let on_shaft = (3..=12).contains(&x) && (LAST..=LAST + 1).contains(&(x + y));
        // Arrow head along the top and right edges of the tip.
        let on_head = (y == 3 && (8..=12).contains(&x)) || (x == 12 && (3..=7).contains(&y));
        if on_shaft || on_head { LINK } else { PAPER }
    })
}
