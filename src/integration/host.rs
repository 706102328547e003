//! Capabilities the overlay needs from the video player.

/// Player state as toggled by the play/pause controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Loaded but not advancing
    #[default]
    Paused,
    /// Emitting time-change events
    Playing,
}

/// The video element, as seen by the renderer.
///
/// Dimensions are the *rendered* size of the video on screen, not its
/// source resolution, so overlay coordinates line up with what the viewer
/// sees under any scaling.
pub trait PlaybackHost {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Rendered width in device pixels.
    fn rendered_width(&self) -> f32;

    /// Rendered height in device pixels.
    fn rendered_height(&self) -> f32;
}

/// Play/pause triggers. These only affect future time-change events and
/// never draw.
pub trait PlaybackControl {
    fn play(&mut self);

    fn pause(&mut self);
}
