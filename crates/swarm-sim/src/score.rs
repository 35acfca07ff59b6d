//! Display statistics tracked by the engine across a session.

/// Running score state surfaced through the HUD view.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreState {
    pub score: u32,
    pub enemies_killed: u32,
    pub total_damage_taken: f64,
}
