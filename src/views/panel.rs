// src/views/panel.rs

/// The mutually exclusive UI views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Login,
    Quiz,
    Result,
    Leaderboard,
    Admin,
}

impl Panel {
    pub const ALL: [Panel; 5] = [
        Panel::Login,
        Panel::Quiz,
        Panel::Result,
        Panel::Leaderboard,
        Panel::Admin,
    ];

    /// Element id of the panel in the rendered page.
    pub fn id(self) -> &'static str {
        match self {
            Panel::Login => "login",
            Panel::Quiz => "quiz",
            Panel::Result => "result",
            Panel::Leaderboard => "leaderboard",
            Panel::Admin => "adminPanel",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Panel::Login => "Student Login",
            Panel::Quiz => "Quiz",
            Panel::Result => "Result",
            Panel::Leaderboard => "Leaderboard",
            Panel::Admin => "Admin Records",
        }
    }
}

/// Holds the single visible panel. Showing a panel hides every other one.
#[derive(Debug, Default)]
pub struct PanelRouter {
    current: Panel,
}

impl PanelRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, panel: Panel) {
        if self.current != panel {
            tracing::debug!("Panel {} -> {}", self.current.id(), panel.id());
        }
        self.current = panel;
    }

    pub fn current(&self) -> Panel {
        self.current
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.current == panel
    }
}
