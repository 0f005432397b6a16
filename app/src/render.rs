//! Plain-text rendering of the battle view.
use std::fmt::Write;

use pokeduel_battle::{BattleView, CreaturePanel, Phase};

/// Render a view as terminal text
pub fn render(view: &BattleView) -> String {
    let mut out = String::new();

    match view.panels() {
        None => {
            let _ = writeln!(out, "{}", view.log_text());
        }
        Some((a, b)) => {
            write_panel(&mut out, a);
            write_panel(&mut out, b);

            let _ = writeln!(out, "Battle Log");
            if view.phase() == Phase::Fetching {
                let _ = writeln!(out, "  ...");
            }
            let _ = writeln!(out, "  {}", view.log_text());
        }
    }

    out
}

fn write_panel(out: &mut String, panel: &CreaturePanel) {
    match &panel.badge {
        Some(badge) => {
            let _ = writeln!(out, "{}  [{}]", panel.name, badge);
        }
        None => {
            let _ = writeln!(out, "{}", panel.name);
        }
    }

    if let Some(sprite) = &panel.sprite {
        let _ = writeln!(out, "  {}", sprite);
    }
}
