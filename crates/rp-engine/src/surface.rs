//! The rendering seam.
//!
//! The engine never draws anything itself; it issues cell-granular paint
//! primitives to a [`RenderSurface`].  All positions are top-left pixels of
//! a cell (see [`GridCell::to_pixel`][rp_core::GridCell::to_pixel]); `size`
//! is the replay's fixed cell side length.

use rp_core::{DisplayColor, PixelPoint, TicketId};

/// Cell-granular drawing primitives.
///
/// | Call              | Visual                                            |
/// |-------------------|---------------------------------------------------|
/// | `paint_ghost`     | Low-opacity footprint cell, painted once at route start |
/// | `paint_cell`      | Solid fill in a ticket's color                    |
/// | `paint_marker`    | Customer marker icon ahead of the current position |
/// | `paint_pick`      | Item-pick highlight                               |
/// | `clear_pick`      | Remove a previously painted pick highlight        |
/// | `paint_collision` | Simultaneous-occupancy icon                       |
/// | `clear_cell`      | Restore the empty floor                           |
pub trait RenderSurface {
    fn paint_ghost(&mut self, pixel: PixelPoint, size: u32, color: DisplayColor);

    fn paint_cell(&mut self, pixel: PixelPoint, size: u32, color: DisplayColor);

    fn paint_marker(&mut self, pixel: PixelPoint, size: u32, ticket: TicketId);

    fn paint_pick(&mut self, pixel: PixelPoint, size: u32);

    fn clear_pick(&mut self, pixel: PixelPoint, size: u32);

    fn paint_collision(&mut self, pixel: PixelPoint, size: u32);

    fn clear_cell(&mut self, pixel: PixelPoint, size: u32);
}

/// Surface that draws nothing.  Use for headless or batch replays.
#[derive(Default, Clone, Copy, Debug)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn paint_ghost(&mut self, _pixel: PixelPoint, _size: u32, _color: DisplayColor) {}
    fn paint_cell(&mut self, _pixel: PixelPoint, _size: u32, _color: DisplayColor) {}
    fn paint_marker(&mut self, _pixel: PixelPoint, _size: u32, _ticket: TicketId) {}
    fn paint_pick(&mut self, _pixel: PixelPoint, _size: u32) {}
    fn clear_pick(&mut self, _pixel: PixelPoint, _size: u32) {}
    fn paint_collision(&mut self, _pixel: PixelPoint, _size: u32) {}
    fn clear_cell(&mut self, _pixel: PixelPoint, _size: u32) {}
}
