//=========================================================================
// Scene Manager
//=========================================================================
//
// Owns every scene and tracks which one is active.
//
// Scenes are registered once before the loop starts and never removed.
// Exactly one scene is active after `start`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{Scene, SceneContext, SceneId};
use crate::error::{GameError, SceneError};

//=== Scene Manager =======================================================

#[derive(Default)]
pub struct SceneManager {
    scenes: HashMap<SceneId, Box<dyn Scene>>,
    active: Option<SceneId>,
}

impl SceneManager {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self::default()
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene under its own id.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DuplicateScene`] if the id is taken.
    pub fn register(&mut self, scene: Box<dyn Scene>) -> Result<(), SceneError> {
        let id = scene.id();
        if self.scenes.contains_key(id) {
            return Err(SceneError::DuplicateScene(id.to_string()));
        }
        debug!(target: "scene", "Registered scene {}", id);
        self.scenes.insert(id, scene);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.scenes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<SceneId> {
        let mut ids: Vec<SceneId> = self.scenes.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Checks that every declared transition target is registered.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.scenes.is_empty() {
            return Err(SceneError::NoScenes);
        }

        for id in self.ids() {
            let Some(scene) = self.scenes.get(id) else {
                continue;
            };
            if let Some(target) = scene.targets().into_iter().find(|t| !self.contains(t)) {
                return Err(SceneError::UnknownTarget {
                    scene: id.to_string(),
                    target: target.to_string(),
                });
            }
        }
        Ok(())
    }

    //--- Active Scene -----------------------------------------------------

    pub fn active_id(&self) -> Option<SceneId> {
        self.active
    }

    pub fn active_mut(&mut self) -> Option<&mut dyn Scene> {
        let id = self.active?;
        self.scenes.get_mut(id).map(|scene| scene.as_mut() as &mut dyn Scene)
    }

    pub fn get(&self, id: &str) -> Option<&dyn Scene> {
        self.scenes.get(id).map(|scene| scene.as_ref() as &dyn Scene)
    }

    //--- Transitions ------------------------------------------------------

    /// Makes `target` the active scene.
    ///
    /// Calls `on_exit` on the current scene (if any), switches the active
    /// id, then calls `on_enter` on `target`. Re-entering the active scene
    /// is allowed and rebuilds it.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownScene`] before touching any state if
    /// `target` is not registered. Errors from `on_enter` are passed through.
    pub fn change_scene(&mut self, target: &str, ctx: &SceneContext<'_>) -> Result<(), GameError> {
        let Some((&id, _)) = self.scenes.get_key_value(target) else {
            return Err(SceneError::UnknownScene(target.to_string()).into());
        };

        if let Some(previous) = self.active {
            if let Some(scene) = self.scenes.get_mut(previous) {
                scene.on_exit(ctx);
            }
            info!(target: "scene", "Scene change: {} -> {}", previous, id);
        } else {
            info!(target: "scene", "Starting with scene {}", id);
        }

        self.active = Some(id);
        match self.scenes.get_mut(id) {
            Some(scene) => scene.on_enter(ctx),
            None => Ok(()),
        }
    }

    /// Exits the active scene, leaving none active.
    pub fn shutdown(&mut self, ctx: &SceneContext<'_>) {
        if let Some(id) = self.active.take() {
            if let Some(scene) = self.scenes.get_mut(id) {
                scene.on_exit(ctx);
            }
            debug!(target: "scene", "Exited scene {} on shutdown", id);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::{CommandQueue, InputEvent};
    use crate::render::Canvas;
    use crate::resources::testing::resources;
    use std::sync::{Arc, Mutex};

    pub(crate) type Journal = Arc<Mutex<Vec<String>>>;

    /// Scene that records its lifecycle calls.
    pub(crate) struct Probe {
        pub id: SceneId,
        pub targets: Vec<SceneId>,
        pub journal: Journal,
    }

    impl Probe {
        pub(crate) fn new(id: SceneId, journal: &Journal) -> Self {
            Self {
                id,
                targets: Vec::new(),
                journal: Arc::clone(journal),
            }
        }

        fn record(&self, call: &str) {
            self.journal.lock().unwrap().push(format!("{}.{}", self.id, call));
        }
    }

    impl Scene for Probe {
        fn id(&self) -> SceneId {
            self.id
        }

        fn on_enter(&mut self, _ctx: &SceneContext<'_>) -> Result<(), GameError> {
            self.record("on_enter");
            Ok(())
        }

        fn on_exit(&mut self, _ctx: &SceneContext<'_>) {
            self.record("on_exit");
        }

        fn handle_event(&mut self, _event: &InputEvent, _commands: &mut CommandQueue) {
            self.record("handle_event");
        }

        fn update(
            &mut self,
            _ctx: &SceneContext<'_>,
            _canvas: &mut dyn Canvas,
            _dt: f32,
            _commands: &mut CommandQueue,
        ) {
            self.record("update");
        }

        fn targets(&self) -> Vec<SceneId> {
            self.targets.clone()
        }
    }

    fn manager(ids: &[SceneId], journal: &Journal) -> SceneManager {
        let mut manager = SceneManager::new();
        for id in ids {
            manager.register(Box::new(Probe::new(*id, journal))).unwrap();
        }
        manager
    }

    fn entries(journal: &Journal) -> Vec<String> {
        journal.lock().unwrap().clone()
    }

    //=== Registration ====================================================

    #[test]
    fn duplicate_registration_fails() {
        let journal = Journal::default();
        let mut manager = manager(&["a"], &journal);

        let err = manager.register(Box::new(Probe::new("a", &journal))).unwrap_err();
        assert_eq!(err, SceneError::DuplicateScene("a".to_string()));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn validate_requires_scenes_and_known_targets() {
        let journal = Journal::default();
        assert_eq!(SceneManager::new().validate(), Err(SceneError::NoScenes));

        let mut manager = manager(&["b"], &journal);
        let mut a = Probe::new("a", &journal);
        a.targets = vec!["b", "missing"];
        manager.register(Box::new(a)).unwrap();

        assert_eq!(
            manager.validate(),
            Err(SceneError::UnknownTarget {
                scene: "a".to_string(),
                target: "missing".to_string()
            })
        );
    }

    //=== Transitions =====================================================

    #[test]
    fn change_scene_exits_old_then_enters_new() {
        let journal = Journal::default();
        let mut manager = manager(&["a", "b"], &journal);
        let resources = resources();
        let config = GameConfig::default();
        let ctx = SceneContext::new(&resources, &config);

        manager.change_scene("a", &ctx).unwrap();
        manager.change_scene("b", &ctx).unwrap();

        assert_eq!(manager.active_id(), Some("b"));
        assert_eq!(entries(&journal), vec!["a.on_enter", "a.on_exit", "b.on_enter"]);
    }

    #[test]
    fn unknown_scene_fails_without_side_effects() {
        let journal = Journal::default();
        let mut manager = manager(&["a", "b"], &journal);
        let resources = resources();
        let config = GameConfig::default();
        let ctx = SceneContext::new(&resources, &config);

        manager.change_scene("a", &ctx).unwrap();
        manager.change_scene("b", &ctx).unwrap();
        journal.lock().unwrap().clear();

        let err = manager.change_scene("c", &ctx).unwrap_err();

        assert!(matches!(err, GameError::Scene(SceneError::UnknownScene(id)) if id == "c"));
        assert_eq!(manager.active_id(), Some("b"));
        assert!(entries(&journal).is_empty());
    }

    #[test]
    fn reentering_active_scene_rebuilds_it() {
        let journal = Journal::default();
        let mut manager = manager(&["a"], &journal);
        let resources = resources();
        let config = GameConfig::default();
        let ctx = SceneContext::new(&resources, &config);

        manager.change_scene("a", &ctx).unwrap();
        manager.change_scene("a", &ctx).unwrap();

        assert_eq!(entries(&journal), vec!["a.on_enter", "a.on_exit", "a.on_enter"]);
    }

    #[test]
    fn shutdown_exits_active_scene() {
        let journal = Journal::default();
        let mut manager = manager(&["a"], &journal);
        let resources = resources();
        let config = GameConfig::default();
        let ctx = SceneContext::new(&resources, &config);

        manager.change_scene("a", &ctx).unwrap();
        manager.shutdown(&ctx);

        assert_eq!(manager.active_id(), None);
        assert_eq!(entries(&journal), vec!["a.on_enter", "a.on_exit"]);
    }
}
