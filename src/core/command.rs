//=========================================================================
// Commands
//=========================================================================
//
// Tagged actions produced by widgets and scenes.
//
// Widgets never call into the controller. A button carries a `Command`,
// returns it when clicked, and the scene queues it here. The controller
// drains the queue at the end of each tick and applies every command
// through the owning subsystem's own methods.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::scene::SceneId;

//=== Command =============================================================

/// An action requested by the UI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    /// Does nothing. The default action for buttons built without one.
    #[default]
    None,

    /// Switch the active scene. Unknown ids are a wiring bug and fail loudly.
    ChangeScene(SceneId),

    /// Stop the main loop.
    Quit,

    /// Pause or resume the music.
    ToggleMusic,

    /// Raise the music volume by one step.
    VolumeUp,

    /// Lower the music volume by one step.
    VolumeDown,

    /// Switch the UI language and rebuild the active scene.
    SetLanguage(String),

    /// Start a connection attempt.
    ///
    /// Scene-local: the scene owning the client consumes it from its own
    /// widgets before anything reaches the shared queue. The controller
    /// ignores a stray one.
    Connect,
}

impl Command {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

//=== Command Queue =======================================================

/// Queue for commands raised during a tick.
///
/// Scenes push commands here while handling events and updating. The
/// controller takes the whole queue at the tick boundary.
#[derive(Debug, Default)]
pub struct CommandQueue {
    queue: Vec<Command>,
}

impl CommandQueue {
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a command. `Command::None` is dropped.
    pub fn push(&mut self, command: Command) {
        if !command.is_none() {
            self.queue.push(command);
        }
    }

    /// Returns an iterator over the queued commands.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn clear(&mut self) {
        self.queue.clear()
    }

    /// Takes all commands from the queue, leaving it empty.
    pub fn take(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.queue)
    }
}

impl Extend<Command> for CommandQueue {
    fn extend<I: IntoIterator<Item = Command>>(&mut self, iter: I) {
        for command in iter {
            self.push(command);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_command_is_none() {
        assert_eq!(Command::default(), Command::None);
        assert!(Command::default().is_none());
    }

    #[test]
    fn push_drops_none() {
        let mut queue = CommandQueue::new();
        queue.push(Command::None);
        queue.push(Command::Quit);

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.iter().next(), Some(&Command::Quit));
    }

    #[test]
    fn take_preserves_order_and_empties() {
        let mut queue = CommandQueue::new();
        queue.push(Command::ChangeScene("a"));
        queue.push(Command::VolumeUp);

        let taken = queue.take();

        assert_eq!(taken, vec![Command::ChangeScene("a"), Command::VolumeUp]);
        assert!(queue.is_empty());
    }

    #[test]
    fn extend_filters_none() {
        let mut queue = CommandQueue::new();
        queue.extend([Command::None, Command::ToggleMusic, Command::None]);
        assert_eq!(queue.take(), vec![Command::ToggleMusic]);
    }
}
