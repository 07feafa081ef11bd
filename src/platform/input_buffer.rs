//=========================================================================
// Input Buffer
//
// Collects translated input events between two frame boundaries and
// splits them into two categories: discrete and continuous.
//
// - Discrete events (keys, button presses) are kept in arrival order.
//   Identical consecutive events are dropped to prevent flooding.
// - Continuous events (pointer moves) are coalesced: only the latest
//   cursor position survives the frame.
//
// The buffer is drained on every `RedrawRequested` and reused.
//=========================================================================

//=== Internal Modules ====================================================
use crate::core::event::InputEvent;

//=== InputBuffer Struct ==================================================
pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    pointer: Option<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 64;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            pointer: None,
        }
    }

    //--- Continuous Event Handling ---------------------------------------
    //
    // The latest pointer move replaces any previous one.
    //
    pub(crate) fn push_continuous(&mut self, event: InputEvent) {
        self.pointer = Some(event);
    }

    //--- Discrete Event Handling -----------------------------------------
    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns (discrete, continuous) and clears the buffer, or `None` when
    // nothing was buffered so empty batches never cross the channel.
    //
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }

        let capacity = self.discrete.capacity();
        let discrete = std::mem::replace(&mut self.discrete, Vec::with_capacity(capacity));
        let continuous = self.pointer.take().into_iter().collect();
        Some((discrete, continuous))
    }

    //--- Utilities --------------------------------------------------------
    pub(crate) fn len(&self) -> usize {
        self.discrete.len() + usize::from(self.pointer.is_some())
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.pointer.is_none()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::{KeyCode, MouseButton};

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    fn pointer(x: i32, y: i32) -> InputEvent {
        InputEvent::PointerMoved { x, y }
    }

    #[test]
    fn test_discrete_deduplication() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(key_down(KeyCode::KeyA));
        buffer.push_discrete(key_down(KeyCode::KeyA));
        buffer.push_discrete(key_down(KeyCode::KeyB));
        assert_eq!(buffer.len(), 2, "Duplicates should be ignored");
    }

    #[test]
    fn test_discrete_order_is_kept() {
        let mut buffer = InputBuffer::new();
        let down = InputEvent::PointerDown { button: MouseButton::Left, x: 1, y: 1 };
        let up = InputEvent::PointerUp { button: MouseButton::Left, x: 1, y: 1 };
        buffer.push_discrete(down);
        buffer.push_discrete(up);
        buffer.push_discrete(down);

        let (discrete, _) = buffer.drain().unwrap();
        assert_eq!(discrete, vec![down, up, down]);
    }

    #[test]
    fn test_continuous_overwrite() {
        let mut buffer = InputBuffer::new();
        buffer.push_continuous(pointer(10, 10));
        buffer.push_continuous(pointer(20, 30));

        let (discrete, continuous) = buffer.drain().unwrap();
        assert!(discrete.is_empty());
        assert_eq!(continuous, vec![pointer(20, 30)]);
    }

    #[test]
    fn test_drain_clears_buffer() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(key_down(KeyCode::KeyA));
        buffer.push_continuous(pointer(5, 5));

        let (discrete, continuous) = buffer.drain().unwrap();
        assert_eq!(discrete.len() + continuous.len(), 2);
        assert!(buffer.is_empty());
        assert!(buffer.drain().is_none());
    }

    #[test]
    fn test_empty_buffer_drains_nothing() {
        assert!(InputBuffer::new().drain().is_none());
    }
}
