//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level window and input) with the game's core thread.
//
// Architecture:
// ```text
//  Main Thread:                     Core Thread:
//  ┌──────────────────────────┐    ┌──────────────────────┐
//  │  Winit Event Loop        │    │  Controller          │
//  │   ↓                      │    │   ├─ EventCollector  │
//  │  InputProcessor          │    │   ├─ Active Scene    │
//  │   └─ Tracks cursor       │    │   └─ Framebuffer     │
//  │   ↓                      │    │                      │
//  │  InputBuffer             │    └──────────────────────┘
//  │   ↓ (RedrawRequested)    │          ↑          │
//  │  PlatformEvent ──────────┼──────────┘          │
//  │                          │                     │
//  │  softbuffer Surface ◄────┼──── Frame ──────────┘
//  └──────────────────────────┘
// ```
//
// RedrawRequested is the frame boundary: buffered input is flushed to the
// core and the most recent frame the core produced is presented. Stale
// frames are skipped. When the core thread exits, the frame channel
// disconnects and the event loop stops.
//
// Winit requires the main thread on macOS/iOS, so this runs on the thread
// that called `Game::run()`.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use std::num::NonZeroU32;
use std::rc::Rc;

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{Frame, PlatformEvent};
use crate::error::GameError;
use crate::render::CursorIcon;
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

type WindowSurface = softbuffer::Surface<Rc<Window>, Rc<Window>>;

//=== Platform ============================================================

/// Window owner, input aggregator and frame presenter.
///
/// This type is not `Send`; it stays on the main thread and talks to the
/// core exclusively through the two channels.
pub(crate) struct Platform {
    title: String,
    size: (u32, u32),

    /// OS window (None until `resumed()` runs).
    window: Option<Rc<Window>>,
    surface: Option<WindowSurface>,

    buffer: InputBuffer,
    input_processor: InputProcessor,

    event_sender: Sender<PlatformEvent>,
    frames: Receiver<Frame>,

    /// Fatal error that stopped the event loop, reported by `run()`.
    failure: Option<String>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Does not create the window yet; that happens lazily in `resumed()`.
    pub(crate) fn new(
        title: impl Into<String>,
        size: (u32, u32),
        event_sender: Sender<PlatformEvent>,
        frames: Receiver<Frame>,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            title: title.into(),
            size,
            window: None,
            surface: None,
            buffer: InputBuffer::new(),
            input_processor: InputProcessor::new(),
            event_sender,
            frames,
            failure: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the Winit event loop until the window closes or the core exits.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Platform`] if the event loop cannot be created
    /// or the window/surface setup fails.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub(crate) fn run(mut self) -> Result<(), GameError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new()
            .map_err(|e| GameError::Platform(format!("event loop creation failed: {e}")))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| GameError::Platform(format!("event loop error: {e}")))?;

        match self.failure.take() {
            Some(message) => Err(GameError::Platform(message)),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Flushes buffered input to the core thread.
    ///
    /// A disconnected channel means the core already stopped; the events
    /// are dropped and the window stays closable.
    fn flush_input_buffer(&mut self) {
        if let Some((discrete, continuous)) = self.buffer.drain() {
            let discrete_count = discrete.len();
            let continuous_count = continuous.len();

            trace!(
                target: "platform::input",
                "Flushing {} discrete + {} continuous events",
                discrete_count,
                continuous_count
            );

            if self.event_sender.send(PlatformEvent::Inputs { discrete, continuous }).is_err() {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} events",
                    discrete_count + continuous_count
                );
            }
        }
    }

    /// Newest pending frame, skipping older ones.
    ///
    /// `Err` means the core thread is gone and nothing is left to present.
    fn latest_frame(&self) -> Result<Option<Frame>, TryRecvError> {
        let mut latest = None;
        loop {
            match self.frames.try_recv() {
                Ok(frame) => latest = Some(frame),
                Err(TryRecvError::Empty) => return Ok(latest),
                Err(TryRecvError::Disconnected) => {
                    return match latest {
                        Some(frame) => Ok(Some(frame)),
                        None => Err(TryRecvError::Disconnected),
                    };
                }
            }
        }
    }

    /// Copies a frame to the window surface and applies its cursor request.
    fn present(&mut self, frame: &Frame) -> Result<(), softbuffer::SoftBufferError> {
        if let (Some(window), Some(cursor)) = (&self.window, frame.cursor) {
            window.set_cursor(match cursor {
                CursorIcon::Default => winit::window::CursorIcon::Default,
                CursorIcon::Pointer => winit::window::CursorIcon::Pointer,
            });
        }

        let (Some(width), Some(height)) = (NonZeroU32::new(frame.width), NonZeroU32::new(frame.height)) else {
            return Ok(());
        };
        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };

        surface.resize(width, height)?;
        let mut buffer = surface.buffer_mut()?;
        let len = buffer.len().min(frame.pixels.len());
        buffer[..len].copy_from_slice(&frame.pixels[..len]);
        buffer.present()
    }

    /// Records a fatal error, tells the core to stop and exits the loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, message: String) {
        error!(target: "platform", "{}", message);
        self.failure = Some(message);
        let _ = self.event_sender.send(PlatformEvent::WindowClosed);
        event_loop.exit();
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<(Rc<Window>, WindowSurface), String> {
        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(PhysicalSize::new(self.size.0, self.size.1))
            .with_resizable(false);

        let window = Rc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| format!("window creation failed: {e}"))?,
        );
        let context = softbuffer::Context::new(window.clone())
            .map_err(|e| format!("surface context creation failed: {e}"))?;
        let surface = softbuffer::Surface::new(&context, window.clone())
            .map_err(|e| format!("surface creation failed: {e}"))?;

        Ok((window, surface))
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_deref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window and its pixel surface on first activation.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (resume)");
            return;
        }

        match self.create_window(event_loop) {
            Ok((window, surface)) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
                self.surface = Some(surface);
            }
            Err(message) => self.fail(event_loop, message),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self.input_processor.process_mouse_move(position.x, position.y);
                self.buffer.push_continuous(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push_discrete(event);
                } else {
                    trace!(target: "platform::input", "Unmapped key ignored");
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(*button, *state);
                self.buffer.push_discrete(event);
            }

            WindowEvent::RedrawRequested => {
                self.flush_input_buffer();

                match self.latest_frame() {
                    Ok(Some(frame)) => {
                        if let Err(e) = self.present(&frame) {
                            self.fail(event_loop, format!("frame presentation failed: {e}"));
                            return;
                        }
                    }
                    Ok(None) => {}
                    Err(_) => {
                        info!(target: "platform", "Core thread finished, closing window");
                        event_loop.exit();
                        return;
                    }
                }

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::{InputEvent, KeyCode};
    use crossbeam_channel::{bounded, unbounded};

    fn platform() -> (Platform, Receiver<PlatformEvent>, Sender<Frame>) {
        let (event_tx, event_rx) = unbounded();
        let (frame_tx, frame_rx) = bounded(4);
        (Platform::new("Test", (8, 8), event_tx, frame_rx), event_rx, frame_tx)
    }

    fn frame(marker: u32) -> Frame {
        Frame { width: 1, height: 1, pixels: vec![marker], cursor: None }
    }

    //=====================================================================
    // Input Flushing
    //=====================================================================

    #[test]
    fn platform_creation() {
        let (platform, _rx, _tx) = platform();
        assert!(platform.window().is_none(), "Window should be created lazily");
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (mut platform, rx, _tx) = platform();
        platform.flush_input_buffer();
        assert!(rx.try_recv().is_err(), "No events should be sent for empty buffer");
    }

    #[test]
    fn flush_sends_buffered_events() {
        let (mut platform, rx, _tx) = platform();
        platform.buffer.push_discrete(InputEvent::KeyDown { key: KeyCode::Space });
        platform.buffer.push_continuous(InputEvent::PointerMoved { x: 3, y: 4 });

        platform.flush_input_buffer();

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs { discrete, continuous }) => {
                assert_eq!(discrete, vec![InputEvent::KeyDown { key: KeyCode::Space }]);
                assert_eq!(continuous, vec![InputEvent::PointerMoved { x: 3, y: 4 }]);
            }
            other => panic!("Expected Inputs event, got {:?}", other),
        }
    }

    #[test]
    fn flush_handles_disconnected_channel() {
        let (mut platform, rx, _tx) = platform();
        platform.buffer.push_discrete(InputEvent::KeyDown { key: KeyCode::Space });
        drop(rx);

        platform.flush_input_buffer();
        assert!(platform.buffer.is_empty());
    }

    #[test]
    fn multiple_flushes_clear_buffer() {
        let (mut platform, rx, _tx) = platform();
        platform.buffer.push_discrete(InputEvent::KeyDown { key: KeyCode::KeyA });

        platform.flush_input_buffer();
        platform.flush_input_buffer();

        assert!(rx.try_recv().is_ok(), "First flush should send");
        assert!(rx.try_recv().is_err(), "Second flush should not send");
    }

    //=====================================================================
    // Frame Intake
    //=====================================================================

    #[test]
    fn latest_frame_skips_stale_frames() {
        let (platform, _rx, tx) = platform();
        tx.send(frame(1)).unwrap();
        tx.send(frame(2)).unwrap();

        let latest = platform.latest_frame().unwrap().unwrap();
        assert_eq!(latest.pixels, vec![2]);
        assert!(platform.latest_frame().unwrap().is_none());
    }

    #[test]
    fn latest_frame_reports_finished_core() {
        let (platform, _rx, tx) = platform();
        tx.send(frame(7)).unwrap();
        drop(tx);

        assert_eq!(platform.latest_frame().unwrap().unwrap().pixels, vec![7]);
        assert!(platform.latest_frame().is_err());
    }

    #[test]
    fn present_without_surface_is_noop() {
        let (mut platform, _rx, _tx) = platform();
        let mut f = frame(0);
        f.cursor = Some(CursorIcon::Pointer);
        assert!(platform.present(&f).is_ok());
    }
}
