//! Playback controller over a pair of media elements.
//!
//! The controller drives one audio element and an optional paired video
//! element through `Idle -> Loading -> Playing <-> Paused -> Ended`. It
//! derives the progress display from the audio element and keeps the video
//! in step on seek (one-shot assignment, no drift correction).
//!
//! A controller instance is one player-open session for one track. The
//! first successful play of the session yields [`PlayEvent::FirstPlay`]; the
//! caller reports that as a stream. Later plays yield [`PlayEvent::Resumed`].

use serde::Serialize;

/// Native media element operations the controller needs.
///
/// `duration` returns `NaN` while the duration is unknown, mirroring HTML
/// media elements.
pub trait MediaElement {
    /// Point the element at a new source and reset its position.
    fn load(&mut self, source: &str);
    /// Start playback. Fails when the platform rejects it (autoplay policy).
    fn play(&mut self) -> Result<(), PlaybackError>;
    fn pause(&mut self);
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    fn duration(&self) -> f64;
    /// Native volume in `[0, 1]`.
    fn set_volume(&mut self, volume: f64);
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    #[error("Playback rejected: {0}")]
    Rejected(String),

    #[error("No track loaded")]
    NoSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    Idle,
    Loading,
    Playing,
    Paused,
    Ended,
}

/// Outcome of a successful play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayEvent {
    /// First successful play of this session; count one stream.
    FirstPlay,
    Resumed,
}

/// Progress display derived on every time update.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// `current_time / duration * 100`, `0.0` while the duration is unknown.
    pub percent: f64,
    pub current_time: String,
    pub duration: String,
}

pub struct PlaybackController<A: MediaElement, V: MediaElement> {
    audio: A,
    video: Option<V>,
    state: PlaybackState,
    source: Option<String>,
    volume_percent: f64,
    stream_counted: bool,
}

impl<A: MediaElement, V: MediaElement> PlaybackController<A, V> {
    pub fn new(audio: A, video: Option<V>) -> Self {
        Self {
            audio,
            video,
            state: PlaybackState::Idle,
            source: None,
            volume_percent: 100.0,
            stream_counted: false,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn volume_percent(&self) -> f64 {
        self.volume_percent
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn video(&self) -> Option<&V> {
        self.video.as_ref()
    }

    /// Load `audio_url` and try to autoplay it.
    ///
    /// Starts a new session for the new track. When autoplay is rejected the
    /// controller stays `Paused` and the error is returned; there is no retry.
    pub fn select_track(&mut self, audio_url: &str) -> Result<PlayEvent, PlaybackError> {
        self.state = PlaybackState::Loading;
        self.stream_counted = false;
        self.audio.load(audio_url);
        self.source = Some(audio_url.to_string());
        self.play()
    }

    /// Play both elements.
    pub fn play(&mut self) -> Result<PlayEvent, PlaybackError> {
        if self.source.is_none() {
            return Err(PlaybackError::NoSource);
        }

        if self.state == PlaybackState::Ended {
            self.set_position(0.0);
        }

        let result = self.audio.play().and_then(|()| match self.video.as_mut() {
            Some(video) => video.play(),
            None => Ok(()),
        });

        if let Err(e) = result {
            self.audio.pause();
            if let Some(video) = self.video.as_mut() {
                video.pause();
            }
            self.state = PlaybackState::Paused;
            return Err(e);
        }

        self.state = PlaybackState::Playing;
        if self.stream_counted {
            Ok(PlayEvent::Resumed)
        } else {
            self.stream_counted = true;
            Ok(PlayEvent::FirstPlay)
        }
    }

    pub fn pause(&mut self) {
        if self.state != PlaybackState::Playing {
            return;
        }
        self.audio.pause();
        if let Some(video) = self.video.as_mut() {
            video.pause();
        }
        self.state = PlaybackState::Paused;
    }

    /// Flip between playing and paused. Returns the play event when playback
    /// started, `None` when it paused.
    pub fn toggle_play_pause(&mut self) -> Result<Option<PlayEvent>, PlaybackError> {
        if self.state == PlaybackState::Playing {
            self.pause();
            Ok(None)
        } else {
            self.play().map(Some)
        }
    }

    /// Seek to `fraction` of the duration on both elements.
    ///
    /// Returns the applied time, or `None` while the duration is unknown.
    pub fn seek(&mut self, fraction: f64) -> Option<f64> {
        let duration = self.audio.duration();
        if !duration.is_finite() || duration <= 0.0 || fraction.is_nan() {
            return None;
        }

        let time = (fraction.clamp(0.0, 1.0) * duration).clamp(0.0, duration);
        self.set_position(time);
        if self.state == PlaybackState::Ended && time < duration {
            self.state = PlaybackState::Paused;
        }
        Some(time)
    }

    /// Set the volume from a `0..=100` slider value. Returns the native volume.
    pub fn set_volume(&mut self, percent: f64) -> f64 {
        let percent = if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 100.0) };
        self.volume_percent = percent;
        let volume = percent / 100.0;
        self.audio.set_volume(volume);
        volume
    }

    /// Recompute the progress display; called on every native time update.
    pub fn on_time_update(&self) -> Progress {
        let current = self.audio.current_time();
        let duration = self.audio.duration();
        let percent = current / duration * 100.0;

        Progress {
            percent: if percent.is_finite() { percent } else { 0.0 },
            current_time: format_time(current),
            duration: format_time(duration),
        }
    }

    /// The audio element reached its end.
    pub fn on_ended(&mut self) {
        if self.state == PlaybackState::Playing {
            if let Some(video) = self.video.as_mut() {
                video.pause();
            }
            self.state = PlaybackState::Ended;
        }
    }

    fn set_position(&mut self, seconds: f64) {
        self.audio.set_current_time(seconds);
        if let Some(video) = self.video.as_mut() {
            video.set_current_time(seconds);
        }
    }
}

/// Format seconds as `m:ss`. Unknown (non-finite) times render as `0:00`.
///
/// ```
/// use tunebox_core::playback::format_time;
/// assert_eq!(format_time(355.4), "5:55");
/// assert_eq!(format_time(f64::NAN), "0:00");
/// ```
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}
