//=========================================================================
// Controller
//=========================================================================
//
// Top-level owner of every scene and shared store; drives the main loop on
// the core thread.
//
// Architecture:
//   Controller
//     ├─ config: GameConfig
//     ├─ scenes: SceneManager
//     ├─ resources: Resources   (localizations, music, images, language)
//     └─ commands: CommandQueue
//
// Tick:
//   1. Poll music for end-of-track (→ TrackEnded)
//   2. Dispatch events to music and the active scene
//   3. Update + draw the active scene
//   4. Apply queued commands
//
// Run loop:
//   collect_frame() → tick() → Frame → platform → sleep to the FPS cap
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Sender, TrySendError};
use log::{debug, error, info, warn};

//=== Internal Dependencies ===============================================

use super::platform_bridge::{EventCollector, Frame, TickControl};
use super::scene::{Scene, SceneContext, SceneId, SceneManager};
use super::{Command, CommandQueue, InputEvent};
use crate::config::GameConfig;
use crate::error::{GameError, SceneError};
use crate::render::{Canvas, CursorIcon, Framebuffer};
use crate::resources::Resources;

//=== Controller ==========================================================

pub struct Controller {
    config: GameConfig,
    scenes: SceneManager,
    resources: Resources,
    commands: CommandQueue,
    running: bool,
}

impl Controller {
    //--- Construction -----------------------------------------------------

    pub fn new(config: GameConfig, resources: Resources) -> Self {
        Self {
            config,
            scenes: SceneManager::new(),
            resources,
            commands: CommandQueue::new(),
            running: true,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers the full scene set. Called once, before `start`.
    ///
    /// # Errors
    ///
    /// [`SceneError::NoScenes`] for an empty set, or
    /// [`SceneError::DuplicateScene`] if two scenes share an id.
    pub fn populate(&mut self, scenes: Vec<Box<dyn Scene>>) -> Result<(), SceneError> {
        if scenes.is_empty() {
            return Err(SceneError::NoScenes);
        }
        for scene in scenes {
            self.add_scene(scene)?;
        }
        info!(target: "scene", "Registered {} scenes", self.scenes.len());
        Ok(())
    }

    pub fn add_scene(&mut self, scene: Box<dyn Scene>) -> Result<(), SceneError> {
        self.scenes.register(scene)
    }

    /// Checks the scene wiring: the initial scene and every declared
    /// transition target must be registered.
    pub fn validate(&self) -> Result<(), SceneError> {
        self.scenes.validate()?;
        if !self.scenes.contains(&self.config.initial_scene) {
            return Err(SceneError::UnknownScene(self.config.initial_scene.clone()));
        }
        Ok(())
    }

    //--- Accessors --------------------------------------------------------

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    pub fn active_scene(&self) -> Option<SceneId> {
        self.scenes.active_id()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    //--- Lifecycle --------------------------------------------------------

    /// Enters the configured initial scene and starts the music.
    pub fn start(&mut self) -> Result<(), GameError> {
        let initial = self.config.initial_scene.clone();
        self.change_scene(&initial)?;
        self.resources.music.play();
        Ok(())
    }

    /// Switches the active scene. See [`SceneManager::change_scene`].
    pub fn change_scene(&mut self, target: &str) -> Result<(), GameError> {
        let ctx = SceneContext::new(&self.resources, &self.config);
        self.scenes.change_scene(target, &ctx)
    }

    /// Exits the active scene and stops the music.
    pub fn shutdown(&mut self) {
        let ctx = SceneContext::new(&self.resources, &self.config);
        self.scenes.shutdown(&ctx);
        self.resources.music.stop();
        self.running = false;
        info!("Controller shut down");
    }

    //--- Tick -------------------------------------------------------------

    /// Runs one frame: dispatch, update and draw, then apply commands.
    pub fn tick(
        &mut self,
        events: &[InputEvent],
        canvas: &mut dyn Canvas,
        dt: f32,
    ) -> Result<TickControl, GameError> {
        let track_ended = self.resources.music.poll_track_end();
        let pending = events
            .iter()
            .copied()
            .chain(track_ended.then_some(InputEvent::TrackEnded));

        let Some(scene) = self.scenes.active_mut() else {
            return Err(SceneError::NoScenes.into());
        };

        for event in pending {
            if event == InputEvent::Quit {
                info!("Quit requested");
                self.running = false;
            }
            self.resources.music.handle_event(&event);
            scene.handle_event(&event, &mut self.commands);
        }

        let ctx = SceneContext::new(&self.resources, &self.config);
        scene.update(&ctx, canvas, dt, &mut self.commands);

        self.apply_commands(canvas)?;

        Ok(if self.running {
            TickControl::Continue
        } else {
            TickControl::Exit
        })
    }

    /// Applies the commands queued during this tick, in order.
    fn apply_commands(&mut self, canvas: &mut dyn Canvas) -> Result<(), GameError> {
        for command in self.commands.take() {
            debug!("Applying {:?}", command);
            match command {
                Command::None => {}
                Command::Connect => warn!("Connect reached the controller; no scene consumed it"),
                Command::ChangeScene(target) => {
                    self.change_scene(target)?;
                    canvas.set_cursor(CursorIcon::Default);
                }
                Command::Quit => {
                    info!("Quit requested");
                    self.running = false;
                }
                Command::ToggleMusic => {
                    self.resources.music.toggle_pause();
                }
                Command::VolumeUp => self.resources.music.volume_up(),
                Command::VolumeDown => self.resources.music.volume_down(),
                Command::SetLanguage(language) => {
                    if !self.resources.set_language(&language) {
                        continue;
                    }
                    if let Some(active) = self.scenes.active_id() {
                        self.change_scene(active)?;
                    }
                }
            }
        }
        Ok(())
    }

    //--- Main Loop --------------------------------------------------------

    /// Runs the fixed-rate loop until quit, window close, or a fatal error.
    ///
    /// Each tick collects platform input, runs [`Controller::tick`] against
    /// a software framebuffer and hands the result to the platform. Fatal
    /// errors shut the controller down and are returned; other errors are
    /// logged and the loop continues.
    pub(crate) fn run(
        mut self,
        mut collector: EventCollector,
        frames: Sender<Frame>,
    ) -> Result<(), GameError> {
        let frame_duration = Duration::from_secs_f64(1.0 / f64::from(self.config.fps));
        let (width, height) = self.config.size();
        let mut framebuffer = Framebuffer::new(width, height);

        if let Err(e) = self.start() {
            self.shutdown();
            return Err(e);
        }
        info!("Core loop started ({} FPS)", self.config.fps);

        let mut last_tick = Instant::now();
        while self.running {
            let frame_start = Instant::now();
            let dt = frame_start.duration_since(last_tick).as_secs_f32();
            last_tick = frame_start;

            //--- Step 1: Gather platform events ----------------------------
            let control = collector.collect_frame();
            let events = collector.take_events();

            //--- Step 2: Tick ----------------------------------------------
            match self.tick(&events, &mut framebuffer, dt) {
                Ok(TickControl::Continue) => {}
                Ok(TickControl::Exit) => break,
                Err(e) if e.is_fatal() => {
                    error!("Fatal error: {}", e);
                    self.shutdown();
                    return Err(e);
                }
                Err(e) => warn!("Recovered from error: {}", e),
            }

            if control == TickControl::Exit {
                info!("Window closed");
                break;
            }

            //--- Step 3: Present -------------------------------------------
            match frames.try_send(framebuffer.snapshot()) {
                Ok(()) => {}
                Err(TrySendError::Full(frame)) => framebuffer.requeue_cursor(frame.cursor),
                Err(TrySendError::Disconnected(_)) => {
                    info!("Platform disconnected");
                    break;
                }
            }

            //--- Step 4: Maintain pacing -----------------------------------
            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                thread::sleep(frame_duration - elapsed);
            }
        }

        self.shutdown();
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
