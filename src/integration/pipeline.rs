//! OverlayPipeline for combining an annotation source with the renderer.

use std::fmt::Display;
use std::sync::Arc;

use log::{error, info};

use crate::annotation::AnnotationIndex;
use crate::integration::host::{PlaybackControl, PlaybackHost, PlaybackState};
use crate::integration::source::AnnotationSource;
use crate::integration::state::ViewState;
use crate::integration::upload::VideoResult;
use crate::overlay::{DrawSurface, OverlayConfig, OverlayRenderer, Rect};

/// A viewer session that bundles an annotation source with an overlay
/// renderer.
///
/// Loading a new video discards the previous annotations and clears the
/// surface; time updates draw only while a video is loaded.
pub struct OverlayPipeline<A: AnnotationSource, S: DrawSurface> {
    source: A,
    renderer: OverlayRenderer<S>,
    config: OverlayConfig,
    state: ViewState,
    playback: PlaybackState,
}

impl<A: AnnotationSource, S: DrawSurface> OverlayPipeline<A, S> {
    /// Create a new pipeline with the given source, surface and config.
    pub fn new(source: A, surface: S, config: OverlayConfig) -> Self {
        let renderer =
            OverlayRenderer::with_style(AnnotationIndex::default(), surface, config.stroke);
        Self {
            source,
            renderer,
            config,
            state: ViewState::default(),
            playback: PlaybackState::default(),
        }
    }

    /// Create a new pipeline with the default configuration.
    pub fn with_default_config(source: A, surface: S) -> Self {
        Self::new(source, surface, OverlayConfig::default())
    }

    /// Upload through the source and, on success, switch to the new video.
    ///
    /// A failure is logged and leaves the previously loaded video in place.
    pub fn upload(&mut self) -> Result<Arc<VideoResult>, A::Error>
    where
        A::Error: Display,
    {
        self.upload_observed(|_| {})
    }

    /// Like [`upload`](Self::upload), handing every intermediate snapshot to
    /// `observe`: first the loading state, then the final one.
    pub fn upload_observed<F>(&mut self, mut observe: F) -> Result<Arc<VideoResult>, A::Error>
    where
        A::Error: Display,
        F: FnMut(&ViewState),
    {
        self.state = self.state.begin_upload();
        observe(&self.state);

        let outcome = self.finish_upload();
        observe(&self.state);
        outcome
    }

    fn finish_upload(&mut self) -> Result<Arc<VideoResult>, A::Error>
    where
        A::Error: Display,
    {
        match self.source.upload() {
            Ok(video) => {
                let video = Arc::new(video);
                let index = video.build_index(self.config.index);
                info!(
                    "Loaded {} with {} faces ({} boxes)",
                    video.media_url(),
                    index.face_count(),
                    index.len()
                );
                self.renderer.replace_index(index);
                self.playback = PlaybackState::Paused;
                self.state = self.state.loaded(Arc::clone(&video));
                Ok(video)
            }
            Err(err) => {
                error!("Upload failed: {err}");
                self.state = self.state.failed();
                Err(err)
            }
        }
    }

    /// Handle a time-change event from the player.
    pub fn on_time_update<H: PlaybackHost + ?Sized>(&mut self, host: &H) -> Vec<Rect> {
        if self.state.video().is_none() {
            return Vec::new();
        }
        self.renderer.on_playback_event(host)
    }

    pub fn play<C: PlaybackControl + ?Sized>(&mut self, control: &mut C) {
        control.play();
        self.playback = PlaybackState::Playing;
    }

    pub fn pause<C: PlaybackControl + ?Sized>(&mut self, control: &mut C) {
        control.pause();
        self.playback = PlaybackState::Paused;
    }

    /// Current view snapshot.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn renderer(&self) -> &OverlayRenderer<S> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut OverlayRenderer<S> {
        &mut self.renderer
    }

    pub fn source_mut(&mut self) -> &mut A {
        &mut self.source
    }
}
