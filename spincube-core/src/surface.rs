/// The external drawing surface consumed by the frame driver.
///
/// Hosts (terminal, canvas) implement this; the core only ever clears,
/// draws lines, and brackets a frame's draws so host-side state changes do
/// not leak between frames. Coordinates are logical pixels with y pointing
/// down. Out-of-bounds coordinates are passed through unchanged; clipping,
/// if any, is the surface's business.
pub trait Surface {
    /// Current width in logical pixels. Consulted once at startup; the core
    /// does not handle resizes.
    fn width(&self) -> f32;

    /// Current height in logical pixels.
    fn height(&self) -> f32;

    /// Blank the whole surface.
    fn clear(&mut self);

    /// Draw a straight segment between two points.
    fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32);

    /// Called before the first draw of a frame (canvas `save`).
    fn begin_frame(&mut self) {}

    /// Called after the last draw of a frame, even when the frame failed
    /// mid-way (canvas `restore`).
    fn end_frame(&mut self) {}
}
