//! Intro/tutorial sequence
//!
//! A linear walk through the intro panels, driven by discrete advance/back
//! commands. Transitions live in two lookup tables so the asymmetric
//! coverage is plain data: the forward table is total, the backward table
//! only carries two edges. Going back from Reading or Playing does nothing.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TutorialState {
    Default,
    Controls,
    Animation,
    Crafting,
    Reading,
    Playing,
}

/// Which intro panels are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelVisibility {
    pub controls: bool,
    pub animation: bool,
    pub hud: bool,
    pub lab: bool,
    pub notebook: bool,
}

impl PanelVisibility {
    const fn only_controls() -> Self {
        Self {
            controls: true,
            animation: false,
            hud: false,
            lab: false,
            notebook: false,
        }
    }

    const fn only_animation() -> Self {
        Self {
            controls: false,
            animation: true,
            hud: false,
            lab: false,
            notebook: false,
        }
    }

    const fn only_hud() -> Self {
        Self {
            controls: false,
            animation: false,
            hud: true,
            lab: false,
            notebook: false,
        }
    }

    const fn only_lab() -> Self {
        Self {
            controls: false,
            animation: false,
            hud: false,
            lab: true,
            notebook: false,
        }
    }

    const fn only_notebook() -> Self {
        Self {
            controls: false,
            animation: false,
            hud: false,
            lab: false,
            notebook: true,
        }
    }
}

/// One edge of the tutorial graph plus its side effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChange {
    pub from: TutorialState,
    pub to: TutorialState,
    pub panels: PanelVisibility,
    pub camera_zoom: bool,
}

const fn change(
    from: TutorialState,
    to: TutorialState,
    panels: PanelVisibility,
    camera_zoom: bool,
) -> StateChange {
    StateChange {
        from,
        to,
        panels,
        camera_zoom,
    }
}

use self::TutorialState as S;

/// Total: every state has an outgoing edge; Playing loops on itself.
const FORWARD: &[StateChange] = &[
    change(S::Default, S::Controls, PanelVisibility::only_controls(), false),
    change(S::Controls, S::Animation, PanelVisibility::only_animation(), false),
    change(S::Animation, S::Crafting, PanelVisibility::only_lab(), false),
    change(S::Crafting, S::Reading, PanelVisibility::only_notebook(), false),
    change(S::Reading, S::Playing, PanelVisibility::only_hud(), true),
    change(S::Playing, S::Playing, PanelVisibility::only_hud(), true),
];

/// Deliberately partial: Reading and Playing have no backward edge.
const BACKWARD: &[StateChange] = &[
    change(S::Animation, S::Controls, PanelVisibility::only_controls(), false),
    change(S::Crafting, S::Animation, PanelVisibility::only_animation(), false),
];

pub struct TutorialManager {
    state: TutorialState,
    panels: PanelVisibility,
}

impl TutorialManager {
    /// A fresh manager has already taken the first forward step, so play
    /// starts on the controls panel.
    pub fn new() -> Self {
        let mut manager = Self {
            state: S::Default,
            panels: PanelVisibility::default(),
        };
        manager.advance();
        manager
    }

    pub fn state(&self) -> TutorialState {
        self.state
    }

    pub fn panels(&self) -> PanelVisibility {
        self.panels
    }

    /// Whether the intro flow is finished and normal play has begun
    pub fn is_playing(&self) -> bool {
        self.state == S::Playing
    }

    pub fn advance(&mut self) -> Option<&'static StateChange> {
        self.apply(FORWARD)
    }

    pub fn back(&mut self) -> Option<&'static StateChange> {
        self.apply(BACKWARD)
    }

    fn apply(&mut self, table: &'static [StateChange]) -> Option<&'static StateChange> {
        let entry = table.iter().find(|t| t.from == self.state)?;
        log::debug!("Tutorial: {:?} -> {:?}", entry.from, entry.to);
        self.state = entry.to;
        self.panels = entry.panels;
        Some(entry)
    }
}

impl Default for TutorialManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::TutorialState::{Animation, Controls, Playing, Reading};
    use super::*;

    #[test]
    fn test_starts_on_controls_panel() {
        let manager = TutorialManager::new();
        assert_eq!(manager.state(), Controls);
        assert_eq!(manager.panels(), PanelVisibility::only_controls());
    }

    #[test]
    fn test_four_advances_reach_playing() {
        let mut manager = TutorialManager::new();
        for _ in 0..4 {
            assert!(manager.advance().is_some());
        }
        assert_eq!(manager.state(), Playing);
        assert!(manager.is_playing());
        assert_eq!(manager.panels(), PanelVisibility::only_hud());
    }

    #[test]
    fn test_playing_absorbs_further_advances() {
        let mut manager = TutorialManager::new();
        for _ in 0..4 {
            manager.advance();
        }

        let entry = manager.advance().unwrap();
        assert_eq!(entry.to, Playing);
        assert!(entry.camera_zoom);
        assert_eq!(manager.state(), Playing);
    }

    #[test]
    fn test_zoom_flag_only_set_entering_playing() {
        let mut manager = TutorialManager::new();
        for _ in 0..3 {
            assert!(!manager.advance().unwrap().camera_zoom);
        }
        assert!(manager.advance().unwrap().camera_zoom);
    }

    #[test]
    fn test_backward_edges() {
        let mut manager = TutorialManager::new();
        manager.advance(); // Animation

        let entry = manager.back().unwrap();
        assert_eq!(entry.to, Controls);
        assert_eq!(manager.panels(), PanelVisibility::only_controls());

        manager.advance(); // Animation
        manager.advance(); // Crafting
        let entry = manager.back().unwrap();
        assert_eq!(entry.to, Animation);
    }

    #[test]
    fn test_back_past_crafting_is_a_no_op() {
        let mut manager = TutorialManager::new();
        for _ in 0..3 {
            manager.advance();
        }
        assert_eq!(manager.state(), Reading);
        assert!(manager.back().is_none());
        assert_eq!(manager.state(), Reading);

        manager.advance();
        assert_eq!(manager.state(), Playing);
        assert!(manager.back().is_none());
        assert_eq!(manager.state(), Playing);
        assert_eq!(manager.panels(), PanelVisibility::only_hud());
    }

    #[test]
    fn test_back_from_controls_is_a_no_op() {
        let mut manager = TutorialManager::new();
        assert!(manager.back().is_none());
        assert_eq!(manager.state(), Controls);
    }
}
