//! Tilefall entry point
//!
//! A headless stand-in for the real view: it owns the frame cadence,
//! scripts a short input sequence, and projects each snapshot as ASCII.
//! Camera math and event translation would live at this layer too; the
//! simulation only ever sees grid-relative commands.

use tilefall::sim::{self, Command, GameState, TileKind};
use tilefall::tuning::Tuning;

fn glyph(kind: TileKind) -> char {
    match kind {
        TileKind::Empty => '.',
        TileKind::Grass => '"',
        TileKind::Dirt => '#',
        TileKind::Leaves => '%',
    }
}

/// Project the state the way a renderer would: grid snapshot, player
/// position, hotbar with selection.
fn render(state: &GameState) {
    let player_row = state.player.y.round() as i32;
    for y in 0..state.grid.height() {
        let mut line = String::with_capacity(state.grid.width() as usize);
        for x in 0..state.grid.width() {
            if x == state.player.x && y == player_row {
                line.push('@');
            } else {
                // Cells are in bounds by construction; fall back to the wall
                // glyph anyway.
                line.push(state.grid.get(x, y).map_or('#', glyph));
            }
        }
        println!("{line}");
    }

    let hotbar: Vec<String> = state
        .inventory
        .slots()
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let marker = if i == state.inventory.selected_index() {
                '*'
            } else {
                ' '
            };
            format!("[{marker}{} x{}]", slot.kind.as_str(), slot.count)
        })
        .collect();
    println!("{}  tick {}", hotbar.join(" "), state.time_ticks);
    println!();
}

fn settle(state: &mut GameState) {
    for _ in 0..120 {
        sim::tick(state);
    }
}

fn main() {
    env_logger::init();

    let mut state = Tuning::wooded().new_session();
    settle(&mut state);
    println!("-- spawn --");
    render(&state);

    // Walk to the nearest tree and mine the trunk.
    let script = [
        Command::MoveRight,
        Command::MoveRight,
        Command::Interact { x: 33, y: 10 },
        Command::Interact { x: 33, y: 9 },
        Command::Jump,
    ];
    for command in script {
        let outcome = sim::apply(&mut state, command);
        log::info!("{command:?} -> {outcome:?}");
        sim::tick(&mut state);
    }
    settle(&mut state);
    println!("-- after mining a trunk --");
    render(&state);

    // Put one tile back from the hotbar.
    sim::apply(&mut state, Command::SelectSlot(1));
    sim::apply(&mut state, Command::Interact { x: 33, y: 10 });
    settle(&mut state);
    println!("-- after placing dirt --");
    render(&state);
}
