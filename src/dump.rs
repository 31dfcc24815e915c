use std::{fs, path::PathBuf, sync::Arc, time::Duration};

use anyhow::{ensure, Context};
use chesseract::{config::Config, utils::debug_dump, Match, Registry};
use log::{debug, info};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use structopt::StructOpt;

/// Plays random legal moves under a rule set and dumps the resulting match.
#[derive(StructOpt)]
#[structopt(name = "chesseract-dump")]
struct DumpOptions {
    /// JSON config file, missing file means defaults
    #[structopt(short, long, default_value = "~/.chesseract.json")]
    config: PathBuf,
    #[structopt(short, long)]
    rule_set: Option<String>,
    #[structopt(short, long)]
    plies: Option<usize>,
    #[structopt(short, long)]
    seed: Option<u64>,
    /// write the match as JSON and check that it reads back
    #[structopt(short, long)]
    output: Option<PathBuf>,
    /// store the effective settings in the config file
    #[structopt(long)]
    save_config: bool,
}

impl DumpOptions {
    fn settings(&self) -> anyhow::Result<Config> {
        let mut config = Config::load(&self.config)?;
        if let Some(rule_set) = &self.rule_set {
            config.rule_set = rule_set.clone();
        }
        if let Some(plies) = self.plies {
            config.plies = plies;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }

    fn run(&self) -> anyhow::Result<()> {
        let config = self.settings()?;
        if self.save_config {
            config.save(&self.config)?;
        }

        let registry = Arc::new(Registry::with_defaults());
        let rule_set = registry
            .get(&config.rule_set)
            .with_context(|| format!("known rule sets: {}", registry.names().join(", ")))?;
        let mut game = Match::new(rule_set);
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut elapsed = Duration::ZERO;
        for ply in 0..config.plies {
            elapsed += Duration::from_millis(config.delay_ms);
            let moves = game.rule_set.legal_moves(&game.board, elapsed);
            let Some(_move) = moves.choose(&mut rng).cloned() else {
                info!("No legal moves for {} after {} plies", game.current_player(), ply);
                break;
            };
            debug!("Ply {}: {}", ply + 1, _move);
            game.apply(_move).context("random move was rejected")?;
        }

        let stdout = std::io::stdout();
        debug_dump(&game, &mut stdout.lock())?;

        if let Some(path) = &self.output {
            let json = game.to_json_pretty()?;
            fs::write(path, &json).with_context(|| format!("failed to write {}", path.display()))?;
            let reread = Match::from_json(&json, &registry)?;
            ensure!(
                reread.board == game.board && reread.moves == game.moves,
                "match read back from {} differs",
                path.display()
            );
            info!("Wrote {} moves to {}", game.moves.len(), path.display());
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    DumpOptions::from_args().run()
}
