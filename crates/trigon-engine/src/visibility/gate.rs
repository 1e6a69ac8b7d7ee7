/// Tracks whether the window is currently visible on screen.
///
/// Any on-screen overlap counts as visible. A freshly created window starts
/// visible; the platform's first occlusion event corrects the state if
/// needed (not every platform delivers a synthetic "not occluded" event
/// after creation).
#[derive(Debug, Clone)]
pub struct VisibilityGate {
    visible: bool,
    frames_rendered: u64,
    frames_skipped: u64,
}

impl VisibilityGate {
    pub fn new() -> Self {
        Self {
            visible: true,
            frames_rendered: 0,
            frames_skipped: 0,
        }
    }

    /// Records an observation from the platform.
    pub fn observe(&mut self, visible: bool) {
        if self.visible != visible {
            log::debug!(
                "window became {}",
                if visible { "visible" } else { "occluded" }
            );
        }
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Consulted once per frame-loop tick. Returns whether this frame should
    /// record and submit draw commands, updating the counters either way.
    pub fn should_render(&mut self) -> bool {
        if self.visible {
            self.frames_rendered += 1;
            true
        } else {
            self.frames_skipped += 1;
            false
        }
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn frames_skipped(&self) -> u64 {
        self.frames_skipped
    }
}

impl Default for VisibilityGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_visible() {
        let mut gate = VisibilityGate::new();
        assert!(gate.is_visible());
        assert!(gate.should_render());
    }

    #[test]
    fn hidden_window_renders_nothing() {
        let mut gate = VisibilityGate::new();
        gate.observe(false);

        for _ in 0..10 {
            assert!(!gate.should_render());
        }

        assert_eq!(gate.frames_rendered(), 0);
        assert_eq!(gate.frames_skipped(), 10);
    }

    #[test]
    fn first_frame_after_reappearing_renders() {
        let mut gate = VisibilityGate::new();
        gate.observe(false);
        assert!(!gate.should_render());

        gate.observe(true);
        assert!(gate.should_render());
        assert_eq!(gate.frames_rendered(), 1);
        assert_eq!(gate.frames_skipped(), 1);
    }

    #[test]
    fn repeated_observations_are_idempotent() {
        let mut gate = VisibilityGate::new();
        gate.observe(true);
        gate.observe(true);
        assert!(gate.is_visible());

        gate.observe(false);
        gate.observe(false);
        assert!(!gate.is_visible());
    }
}
