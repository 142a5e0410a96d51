//! Hot-seat duel driver.
//!
//! Runs one battle locally with a canned offline data source, standing in
//! for the chat transport: it prints the renderable view after every
//! transition and reads move choices from stdin.

use pokemon_duel::{
    BaseStats, BattleView, Challenger, CombatantProfile, CombatantSource, CreatureId, PlayerId,
    ProviderError, RewardLedger, SessionRegistry,
};
use std::future::Future;
use std::io::{self, BufRead, Write};

/// Offline stand-in for the external creature-data API.
struct LocalDex;

impl CombatantSource for LocalDex {
    fn fetch_combatant_profile(
        &self,
        creature: CreatureId,
    ) -> impl Future<Output = Result<CombatantProfile, ProviderError>> + Send {
        let profile = match creature.0 {
            3 => Some(profile(80, 82, 83, "grass", "overgrow")),
            6 => Some(profile(78, 84, 78, "fire", "blaze")),
            9 => Some(profile(79, 83, 100, "water", "torrent")),
            130 => Some(profile(95, 125, 79, "water", "intimidate")),
            184 => Some(profile(100, 50, 80, "water", "huge-power")),
            _ => None,
        };
        let result =
            profile.ok_or_else(|| ProviderError::Unavailable(format!("unknown creature {}", creature)));
        async move { result }
    }
}

fn profile(hp: u32, attack: u32, defense: u32, ty: &str, ability: &str) -> CombatantProfile {
    CombatantProfile {
        stats: BaseStats {
            hp,
            attack,
            defense,
        },
        primary_type: ty.to_string(),
        primary_ability: ability.to_string(),
    }
}

/// Prints payouts instead of writing to a database.
struct ConsoleLedger;

impl RewardLedger for ConsoleLedger {
    fn credit_currency(
        &self,
        player: PlayerId,
        amount: u32,
    ) -> impl Future<Output = Result<(), ProviderError>> + Send {
        println!("[ledger] credited {} coins to player {}", amount, player);
        async move { Ok(()) }
    }
}

fn render(view: &BattleView) {
    println!();
    for side in &view.sides {
        let ability = side
            .ability
            .map(|a| format!(" | Abil: {}", a))
            .unwrap_or_default();
        println!(
            "{}'s {}  [{}] {}/{} HP{}",
            side.player_name, side.creature_name, side.hp_bar, side.current_hp, side.max_hp, ability
        );
    }
    println!("--- Battle Log ---");
    for line in &view.log_tail {
        println!("  {}", line);
    }
    println!("{}", view.footer);
    if let Some(turn) = &view.turn {
        for (index, name) in turn.moves.iter().enumerate() {
            print!("  [{}] {}", index + 1, name);
        }
        println!("  [s] surrender  [j] json");
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let registry = SessionRegistry::new(LocalDex, ConsoleLedger);

    let red = Challenger {
        player: PlayerId(1),
        player_name: "Red".to_string(),
        creature: CreatureId(6),
        creature_name: "Charizard".to_string(),
        bot: false,
    };
    let blue = Challenger {
        player: PlayerId(2),
        player_name: "Blue".to_string(),
        creature: CreatureId(9),
        creature_name: "Blastoise".to_string(),
        bot: false,
    };

    let id = match registry.create(red, blue).await {
        Ok(id) => id,
        Err(err) => {
            println!("Could not start the battle: {}", err);
            return;
        }
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let view = match registry.view(id) {
            Ok(view) => view,
            Err(err) => {
                println!("{}", err);
                return;
            }
        };
        render(&view);
        let Some(turn) = view.turn else {
            // Finished; the final view has already been rendered.
            return;
        };

        print!("{}> ", turn.player_name);
        io::stdout().flush().ok();
        let Some(Ok(line)) = lines.next() else {
            return;
        };

        let result = match line.trim() {
            "q" => return,
            "s" => registry.surrender(id, turn.player).await,
            "j" => {
                // Raw view dump, as a chat transport would serialize it.
                match registry.view(id).map(|v| serde_json::to_string_pretty(&v)) {
                    Ok(Ok(json)) => println!("{}", json),
                    Ok(Err(err)) => println!("{}", err),
                    Err(err) => println!("{}", err),
                }
                continue;
            }
            choice => match choice.parse::<usize>() {
                Ok(slot) if (1..=4).contains(&slot) => {
                    registry.submit_move(id, turn.player, slot - 1).await
                }
                _ => {
                    println!("Pick a move (1-4), 's' to surrender, 'q' to quit.");
                    continue;
                }
            },
        };

        match result {
            Ok(view) if view.winner.is_some() => {
                render(&view);
                return;
            }
            Ok(_) => {}
            Err(err) => println!("{}", err),
        }
    }
}
