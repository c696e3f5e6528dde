use clap::Parser;
use pocket_battle::battle::calculators::{compute_catch_chance, describe_catch_chance};
use pocket_battle::{
    BattleEngine, BattlePhase, BattleState, Combatant, PlayerAction, RandomSource, Roster,
    SeededRng,
};
use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;

/// Auto-plays a wild encounter battle and prints the battle log.
#[derive(Parser)]
#[command(name = "pocket-battle")]
#[command(about = "Turn-based wild encounter battle demo")]
struct Cli {
    /// RON roster file; the built-in roster is used when omitted
    #[arg(long)]
    roster: Option<PathBuf>,
    /// RNG seed for a reproducible battle
    #[arg(long)]
    seed: Option<u64>,
    /// Maximum number of player turns
    #[arg(long, default_value_t = 30)]
    turns: u32,
    /// Wait out each deferred task's presentation delay
    #[arg(long)]
    pace: bool,
    /// Print the final battle state as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let roster = match &cli.roster {
        Some(path) => match Roster::load(path) {
            Ok(roster) => roster,
            Err(e) => {
                eprintln!("Error loading roster {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Roster::builtin(),
    };

    let rng = SeededRng::new(cli.seed);
    let seed = rng.seed();
    let mut policy_rng = SeededRng::new(Some(seed.wrapping_add(1)));
    let mut engine = match BattleEngine::new(&roster, Box::new(rng)) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error starting battle: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("=== Wild Battle (seed {}) ===", seed);
    println!(
        "Go, {}! A wild {} appeared!",
        engine.state().player.name,
        engine.state().opponent.name
    );
    print_status(engine.state());

    for turn in 1..=cli.turns {
        if engine.state().is_player_defeated() {
            break;
        }
        println!("--- Turn {} ---", turn);

        let action = choose_action(engine.state(), &mut policy_rng);
        if let Err(e) = engine.submit(action) {
            log::warn!("Auto-player action rejected: {}", e);
        }
        print_events(&mut engine);

        while let Some(task) = engine.next_task() {
            if cli.pace {
                thread::sleep(task.presentation_delay());
            }
            engine.advance();
            print_events(&mut engine);
        }
        print_status(engine.state());
    }

    let record = &engine.state().record;
    println!();
    if engine.state().is_player_defeated() {
        println!("The battle is over. You blacked out!");
    } else {
        println!("Battle ended after {} turn(s).", cli.turns);
    }
    println!(
        "Encounters: {}  Defeated: {}  Caught: {}",
        record.encounters,
        record.opponents_defeated,
        if record.opponents_caught.is_empty() {
            "none".to_string()
        } else {
            record.opponents_caught.join(", ")
        }
    );

    if cli.json {
        match serde_json::to_string_pretty(&engine.snapshot()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing battle state: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

/// Heal when low, throw a ball at a weakened opponent, otherwise attack.
fn choose_action(state: &BattleState, rng: &mut SeededRng) -> PlayerAction {
    if state.player.hp_fraction() < 0.3 {
        if let Some((item_id, _)) = state.inventory.usable_items().next() {
            return PlayerAction::use_item(item_id);
        }
    }
    if state.opponent.hp_fraction() < 0.4 {
        let chance = compute_catch_chance(&state.opponent);
        println!("  Catch chance: {}", describe_catch_chance(chance));
        return PlayerAction::AttemptCatch;
    }
    let move_index = rng.pick_index(state.player.moves().len(), "auto-player move");
    PlayerAction::attack(move_index)
}

fn print_events(engine: &mut BattleEngine) {
    for event in engine.drain_events() {
        if let Some(text) = event.format() {
            println!("  {}", text);
        }
    }
}

fn print_status(state: &BattleState) {
    println!("  {}", hp_line(&state.player));
    if state.phase != BattlePhase::PlayerDefeated {
        println!("  {}", hp_line(&state.opponent));
    }
}

fn hp_line(combatant: &Combatant) -> String {
    let fraction = combatant.hp_fraction();
    // ANSI colours for the three HP bands
    let colour = if fraction > 0.5 {
        "\x1b[32m"
    } else if fraction >= 0.2 {
        "\x1b[33m"
    } else {
        "\x1b[31m"
    };
    format!(
        "{:<12} {}{:>3}/{:<3}\x1b[0m",
        combatant.name,
        colour,
        combatant.current_hp(),
        combatant.max_hp()
    )
}
