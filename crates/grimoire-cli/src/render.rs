//! Text rendering of events, the status HUD and help.

use std::io::{self, Write};

use console::{style, Style};
use grimoire_core::catalog;
use grimoire_core::event::{Combatant, Event, ExplorationKind};
use grimoire_core::resolver::xp_to_next;
use grimoire_core::State;

const HUD_WIDTH: usize = 64;
const BAR_WIDTH: usize = 30;
const SP_PIPS: usize = 12;

fn enemy_name(id: &str) -> &str {
    catalog::enemy(id).map_or(id, |enemy| enemy.name)
}

// =============================================================================
// Events
// =============================================================================

/// Writes one line describing `event`.
pub fn event<W: Write>(out: &mut W, event: &Event) -> io::Result<()> {
    match event {
        Event::EncounterStarted { enemy_id } => {
            writeln!(out, "{} appears!", style(enemy_name(enemy_id)).red().bold())
        }
        Event::DamageDealt {
            source,
            target,
            amount,
            hp_left,
        } => match (source, target) {
            (Combatant::Player, Combatant::Enemy(id)) => writeln!(
                out,
                "You hit the {} for {} ({hp_left} HP left).",
                enemy_name(id),
                style(amount).bold()
            ),
            (Combatant::Enemy(id), _) => writeln!(
                out,
                "The {} hits you for {} ({hp_left} HP left).",
                enemy_name(id),
                style(amount).red()
            ),
            _ => Ok(()),
        },
        Event::EnemyDefeated { enemy_id, xp, gold } => writeln!(
            out,
            "{} defeated! +{xp} XP, +{gold} gold.",
            style(enemy_name(enemy_id)).green().bold()
        ),
        Event::PlayerDefeated => writeln!(out, "{}", style("You were defeated.").red().bold()),
        Event::XpGained { amount } => writeln!(out, "Gained {amount} XP."),
        Event::LevelUp {
            new_level,
            new_max_hp,
        } => writeln!(
            out,
            "{} Level {new_level}. Max HP {new_max_hp}.",
            style("Level up!").yellow().bold()
        ),
        Event::ItemAdded { item_id, count } => writeln!(
            out,
            "Obtained {} x{count}.",
            style(catalog::display_name(item_id)).cyan()
        ),
        Event::ItemRemoved { item_id, count } => writeln!(
            out,
            "Used {} x{count}.",
            style(catalog::display_name(item_id)).cyan()
        ),
        Event::GoldGained { amount } => {
            writeln!(out, "Gained {} gold.", style(amount).yellow())
        }
        Event::SpSpent { amount } => writeln!(out, "Spent {amount} SP."),
        Event::HpRestored { amount } => {
            writeln!(out, "Recovered {} HP.", style(amount).green())
        }
        Event::ExplorationResult { kind } => {
            let line = match kind {
                ExplorationKind::Treasure => "You uncovered a treasure cache!",
                ExplorationKind::Item => "You found something on the ground.",
                ExplorationKind::Gold => "You found a few coins.",
                ExplorationKind::Nothing => "You found nothing of note.",
            };
            writeln!(out, "{line}")
        }
        _ => Ok(()),
    }
}

// =============================================================================
// HUD
// =============================================================================

fn bar(current: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (u64::from(current.min(max)) * width as u64 / u64::from(max)) as usize
    };
    format!("[{}{}]", "█".repeat(filled), " ".repeat(width - filled))
}

fn pad(line: &str, width: usize) -> String {
    format!("{line:<width$}")
}

fn hp_style(hp: u32, max_hp: u32) -> Style {
    let scaled = u64::from(hp) * 100;
    let max = u64::from(max_hp.max(1));
    if scaled < max * 40 {
        Style::new().red()
    } else if scaled < max * 75 {
        Style::new().yellow()
    } else {
        Style::new().green()
    }
}

/// Writes the boxed status display.
pub fn hud<W: Write>(out: &mut W, state: &State) -> io::Result<()> {
    let player = &state.player;
    let frame = Style::new().cyan();
    let rule = format!("+{}+", "-".repeat(HUD_WIDTH - 2));
    let inner = HUD_WIDTH - 1;

    writeln!(out, "{}", frame.apply_to(&rule))?;

    let location = &state.meta.location;
    let title = format!(" {} ({}) - Lv {} ", player.name, player.class, player.level);
    let title_width = (HUD_WIDTH - 2).saturating_sub(location.chars().count());
    writeln!(
        out,
        "{}{}",
        frame.clone().bold().apply_to(format!("|{}", pad(&title, title_width))),
        frame.apply_to(format!("{location}|"))
    )?;

    let hp = format!(
        "| HP {} ♥ {}/{}",
        bar(player.hp, player.max_hp, BAR_WIDTH),
        player.hp,
        player.max_hp
    );
    writeln!(
        out,
        "{}",
        hp_style(player.hp, player.max_hp).apply_to(format!("{}|", pad(&hp, inner)))
    )?;

    let pips = (player.sp as usize).min(SP_PIPS);
    let sp = format!(
        "| SP [{}{}] ⚡ {}",
        "●".repeat(pips),
        " ".repeat(SP_PIPS - pips),
        player.sp
    );
    writeln!(out, "{}", style(format!("{}|", pad(&sp, inner))).magenta().bold())?;

    let need = xp_to_next(player.level);
    let xp = format!("| XP {} {}/{need}", bar(player.xp, need, BAR_WIDTH), player.xp);
    writeln!(out, "{}", style(format!("{}|", pad(&xp, inner))).blue().bold())?;

    let resources = format!(
        "| Gold: {} | Commands: {}",
        player.gold, state.meta.command_count
    );
    writeln!(out, "{}", frame.clone().bold().apply_to(format!("{}|", pad(&resources, inner))))?;

    writeln!(out, "{}", frame.clone().bold().apply_to("| Inventory:"))?;
    if player.inventory.is_empty() {
        writeln!(out, "{}", style("|  (empty)").dim())?;
    } else {
        inventory(out, state)?;
    }

    writeln!(out, "{}", frame.apply_to(&rule))
}

/// Two-column inventory listing, most plentiful first.
fn inventory<W: Write>(out: &mut W, state: &State) -> io::Result<()> {
    let mut stacks: Vec<(&str, u32)> = state.player.inventory.iter().collect();
    stacks.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let column = (HUD_WIDTH - 6) / 2;
    for pair in stacks.chunks(2) {
        let cell = |(id, count): (&str, u32)| format!("  - {} x{count}", catalog::display_name(id));
        let left = cell(pair[0]);
        let right = pair.get(1).copied().map(cell).unwrap_or_default();
        let line = format!("{}  {}", pad(&left, column), pad(&right, column));
        writeln!(out, "{}", style(format!("|{}|", pad(&line, HUD_WIDTH - 2))).dim())?;
    }
    Ok(())
}

// =============================================================================
// Help
// =============================================================================

const COMMANDS: [(&str, &str); 9] = [
    ("status", "Show HUD"),
    ("explore", "Explore for events, loot and enemies"),
    ("hunt [extra_sp]", "Hunt enemies; stake extra SP for tougher foes and bigger rewards"),
    ("rest [sp]", "Convert SP into HP (25 HP per SP)"),
    ("use <item_id>", "Use an item"),
    ("save", "Save game"),
    ("reset", "Start a new game"),
    ("help", "Show this list"),
    ("exit / quit", "Save and exit"),
];

/// Writes the command list.
pub fn help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", style("Commands:").bold().cyan())?;
    for (usage, summary) in COMMANDS {
        writeln!(out, "{} {}", style(usage).bold().green(), style(summary).dim())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(write: F) -> String {
        console::set_colors_enabled(false);
        let mut out = Vec::new();
        write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    mod event_tests {
        use super::*;

        #[test]
        fn combat_lines_use_display_names() {
            let text = plain(|out| {
                event(out, &Event::EncounterStarted { enemy_id: "orc".into() })?;
                event(
                    out,
                    &Event::DamageDealt {
                        source: Combatant::Player,
                        target: Combatant::enemy("orc"),
                        amount: 3,
                        hp_left: 22,
                    },
                )?;
                event(
                    out,
                    &Event::DamageDealt {
                        source: Combatant::enemy("orc"),
                        target: Combatant::Player,
                        amount: 7,
                        hp_left: 93,
                    },
                )
            });
            assert_eq!(
                text,
                "Orc appears!\nYou hit the Orc for 3 (22 HP left).\nThe Orc hits you for 7 (93 HP left).\n"
            );
        }

        #[test]
        fn item_lines_use_catalog_names() {
            let text = plain(|out| event(out, &Event::item_added("healing_potion")));
            assert_eq!(text, "Obtained Healing Potion x1.\n");
        }

        #[test]
        fn every_exploration_kind_has_a_line() {
            for kind in [
                ExplorationKind::Treasure,
                ExplorationKind::Item,
                ExplorationKind::Gold,
                ExplorationKind::Nothing,
            ] {
                let text = plain(|out| event(out, &Event::ExplorationResult { kind }));
                assert!(text.ends_with('\n') && text.len() > 1);
            }
        }
    }

    mod hud_tests {
        use super::*;

        #[test]
        fn bars_scale_and_clamp() {
            assert_eq!(bar(50, 100, 10), format!("[{}{}]", "█".repeat(5), " ".repeat(5)));
            assert_eq!(bar(0, 0, 4), "[    ]");
            assert_eq!(bar(9, 3, 2), "[██]");
        }

        #[test]
        fn hud_shows_core_stats() {
            let text = plain(|out| hud(out, &State::default()));
            assert!(text.contains("Traveller (Adventurer) - Lv 1"));
            assert!(text.contains("Starting Village|"));
            assert!(text.contains("100/100"));
            assert!(text.contains("Gold: 50 | Commands: 0"));
            assert!(text.contains("0/100"));
        }

        #[test]
        fn inventory_sorted_by_count_then_id() {
            let mut state = State::default();
            state.player.inventory.add("meat", 3);
            let text = plain(|out| hud(out, &state));

            let meat = text.find("Meat x3").unwrap();
            let dagger = text.find("Rusty Dagger x1").unwrap();
            let torch = text.find("Torch x1").unwrap();
            assert!(meat < dagger && dagger < torch);
        }

        #[test]
        fn empty_inventory_placeholder() {
            let mut state = State::default();
            state.player.inventory = grimoire_core::Inventory::new();
            assert!(plain(|out| hud(out, &state)).contains("(empty)"));
        }
    }

    #[test]
    fn help_lists_reset() {
        assert!(plain(help).contains("reset Start a new game"));
    }
}
