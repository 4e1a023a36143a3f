//! Sound cues.
//!
//! Audio is just another event listener. A headless build simply doesn't
//! subscribe one; a broken backend returns an error the bus logs and drops.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::events::{EngineEvent, EventListener, ListenerError};

/// Which sound to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    Flip,
    Match,
    Mismatch,
    Win,
}

impl SoundCue {
    /// Cue for an engine event.
    #[must_use]
    pub fn for_event(event: &EngineEvent) -> Self {
        match event {
            EngineEvent::Revealed(_) => SoundCue::Flip,
            EngineEvent::Matched(_) => SoundCue::Match,
            EngineEvent::MismatchResolved(_) => SoundCue::Mismatch,
            EngineEvent::Won => SoundCue::Win,
        }
    }
}

/// Something that can play a cue (a Web Audio bridge, a native mixer, a
/// test recorder).
pub trait AudioSink: Send {
    fn play(&mut self, cue: SoundCue) -> Result<(), ListenerError>;
}

/// Shared mute switch.
///
/// The settings menu flips it; the audio listener reads it.
#[derive(Clone, Debug)]
pub struct SoundSwitch(Arc<AtomicBool>);

impl SoundSwitch {
    pub fn new(enabled: bool) -> Self {
        Self(Arc::new(AtomicBool::new(enabled)))
    }

    pub fn set(&self, enabled: bool) {
        self.0.store(enabled, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for SoundSwitch {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Plays a cue for every engine event while sound is on.
pub struct AudioCues<S> {
    sink: S,
    switch: SoundSwitch,
}

impl<S: AudioSink> AudioCues<S> {
    pub fn new(sink: S, switch: SoundSwitch) -> Self {
        Self { sink, switch }
    }
}

impl<S: AudioSink> EventListener for AudioCues<S> {
    fn on_event(&mut self, event: &EngineEvent) -> Result<(), ListenerError> {
        if !self.switch.is_enabled() {
            return Ok(());
        }
        self.sink.play(SoundCue::for_event(event))
    }

    fn name(&self) -> &str {
        "audio"
    }
}
