//=========================================================================
// Music
//=========================================================================
//
// Playlist, pause and volume state for background music.
//
// Architecture:
//   Music (playlist + state) ──► Playback (trait) ──► TimedPlayback
//
// The controller forwards every input event to `Music::handle_event`;
// a `TrackEnded` notification advances the playlist cyclically. The
// controller raises that notification when `poll_track_end` reports the
// backend finished the current track.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use lofty::prelude::*;
use lofty::probe::Probe;
use log::{debug, error, info};

//=== Internal Dependencies ===============================================

use crate::core::event::InputEvent;

//=== Constants ===========================================================

/// Track name → file name, in playlist order.
pub const MUSIC_MANIFEST: &[(&str, &str)] = &[
    ("Calm Cosmos", "calm_cosmos.mp3"),
    ("Deep Space", "deep_space.mp3"),
];

/// Volume change applied by `volume_up` / `volume_down`.
pub const VOLUME_STEP: f32 = 0.1;

//=== Track ===============================================================

/// A playlist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub path: PathBuf,
}

//=== Playback Trait ======================================================

/// Audio output backend.
///
/// Backends report end-of-track through `finished`; they never touch the
/// playlist themselves.
pub trait Playback: Send {
    fn play(&mut self, track: &Track);
    fn stop(&mut self);
    fn pause(&mut self);
    fn resume(&mut self);
    fn set_volume(&mut self, volume: f32);

    /// Returns true once when the current track has ended.
    fn finished(&mut self) -> bool;
}

//=== TimedPlayback =======================================================

/// Silent backend that tracks playback time against each file's duration.
///
/// Durations are read from the file tags with `lofty`. Tracks whose
/// duration cannot be read never finish.
#[derive(Debug, Default)]
pub struct TimedPlayback {
    length: Option<Duration>,
    started: Option<Instant>,
    played: Duration,
}

impl TimedPlayback {
    pub fn new() -> Self {
        Self::default()
    }

    fn probe_duration(path: &Path) -> Option<Duration> {
        match Probe::open(path).and_then(|probe| probe.read()) {
            Ok(file) => Some(file.properties().duration()),
            Err(e) => {
                debug!(target: "music", "Could not read duration of {}: {}", path.display(), e);
                None
            }
        }
    }

    fn elapsed(&self) -> Duration {
        self.played + self.started.map(|start| start.elapsed()).unwrap_or_default()
    }
}

impl Playback for TimedPlayback {
    fn play(&mut self, track: &Track) {
        self.length = Self::probe_duration(&track.path);
        self.played = Duration::ZERO;
        self.started = Some(Instant::now());
    }

    fn stop(&mut self) {
        self.length = None;
        self.started = None;
        self.played = Duration::ZERO;
    }

    fn pause(&mut self) {
        if let Some(start) = self.started.take() {
            self.played += start.elapsed();
        }
    }

    fn resume(&mut self) {
        if self.length.is_some() && self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    fn set_volume(&mut self, _volume: f32) {}

    fn finished(&mut self) -> bool {
        let Some(length) = self.length else {
            return false;
        };
        if self.started.is_none() || self.elapsed() < length {
            return false;
        }
        self.stop();
        true
    }
}

//=== Music ===============================================================

/// Background music subsystem.
pub struct Music {
    dir: PathBuf,
    playlist: Vec<Track>,
    current: usize,
    playing: bool,
    paused: bool,
    volume: f32,
    debug: bool,
    backend: Box<dyn Playback>,
}

impl Music {
    //--- Construction -----------------------------------------------------

    /// Creates an empty music subsystem reading files from `dir`.
    pub fn new(dir: impl Into<PathBuf>, backend: Box<dyn Playback>) -> Self {
        Self {
            dir: dir.into(),
            playlist: Vec::new(),
            current: 0,
            playing: false,
            paused: false,
            volume: 1.0,
            debug: false,
            backend,
        }
    }

    /// Creates a subsystem using the silent [`TimedPlayback`] backend.
    pub fn with_timed_playback(dir: impl Into<PathBuf>) -> Self {
        Self::new(dir, Box::new(TimedPlayback::new()))
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Loads every manifest entry into the playlist.
    pub fn init(&mut self) {
        for (name, _) in MUSIC_MANIFEST {
            self.load_music(name);
        }
        info!(target: "music", "Initialized with {} tracks.", self.playlist.len());
    }

    /// Appends the manifest entry `name` to the playlist.
    ///
    /// Unknown names are logged and ignored; returns whether a track was
    /// added.
    pub fn load_music(&mut self, name: &str) -> bool {
        let Some((_, file)) = MUSIC_MANIFEST.iter().find(|(entry, _)| *entry == name) else {
            error!(target: "music", "Music {} not found.", name);
            return false;
        };

        let path = self.dir.join(file);
        info!(target: "music", "{} loaded ({}).", name, path.display());
        self.playlist.push(Track {
            name: name.to_string(),
            path,
        });
        true
    }

    //--- Playback Control -------------------------------------------------

    /// Starts the playlist from the first track.
    pub fn play(&mut self) {
        if self.playlist.is_empty() {
            error!(target: "music", "Playlist is empty.");
            return;
        }
        self.current = 0;
        self.paused = false;
        self.play_current_track();
    }

    pub fn stop(&mut self) {
        if self.playing {
            info!(target: "music", "Stopping music.");
        }
        self.backend.stop();
        self.playing = false;
    }

    /// Pauses or resumes playback. Returns the new paused state.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        if self.paused {
            self.backend.pause();
        } else {
            self.backend.resume();
        }
        info!(target: "music", "Music {}.", if self.paused { "paused" } else { "resumed" });
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    //--- Volume -----------------------------------------------------------

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Sets the volume, clamped to `[0, 1]`.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        self.backend.set_volume(self.volume);
        debug!(target: "music", "Volume set to {:.1}", self.volume);
    }

    pub fn volume_up(&mut self) {
        self.set_volume(self.volume + VOLUME_STEP);
    }

    pub fn volume_down(&mut self) {
        self.set_volume(self.volume - VOLUME_STEP);
    }

    //--- Playlist ---------------------------------------------------------

    pub fn playlist(&self) -> &[Track] {
        &self.playlist
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.playlist.get(self.current)
    }

    //--- Event Handling ---------------------------------------------------

    /// Asks the backend whether the current track ended.
    pub fn poll_track_end(&mut self) -> bool {
        self.playing && self.backend.finished()
    }

    /// Advances to the next track on `TrackEnded`; ignores everything else.
    pub fn handle_event(&mut self, event: &InputEvent) {
        if !matches!(event, InputEvent::TrackEnded) || self.playlist.is_empty() {
            return;
        }

        self.current = (self.current + 1) % self.playlist.len();
        if self.debug {
            debug!(target: "music", "Next track: {}", self.playlist[self.current].name);
        }
        self.play_current_track();
    }

    //--- Internal Helpers -------------------------------------------------

    fn play_current_track(&mut self) {
        let Some(track) = self.playlist.get(self.current) else {
            return;
        };
        info!(target: "music", "Playing {} ({}).", track.name, track.path.display());
        self.backend.play(track);
        if self.paused {
            self.backend.pause();
        }
        self.playing = true;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
