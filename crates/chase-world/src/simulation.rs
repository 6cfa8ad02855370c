//! Round driver: sheep move, then the wolf moves, until the herd is gone
//! or the round limit is hit.

use crate::sheep::Sheep;
use crate::wolf::{Hunt, Wolf};
use chase_core::{Error, Position, Result, RoundRecord, SimulationConfig, SurvivorCount};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationState {
    Running,
    AllPreyDead,
    RoundLimitReached,
}

impl SimulationState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SimulationState::Running)
    }
}

/// Everything observable about a single round
#[derive(Debug, Clone, PartialEq)]
pub struct RoundReport {
    pub record: RoundRecord,
    /// Living sheep when the round began
    pub alive_at_start: usize,
    /// Wolf position before its move
    pub wolf_start: Position,
    pub hunt: Hunt,
    /// Living sheep when the round ended
    pub alive: usize,
    /// Driver state after the round
    pub state: SimulationState,
}

pub struct Simulation {
    config: SimulationConfig,
    herd: Vec<Sheep>,
    wolf: Wolf,
    rng: ChaCha8Rng,
    seed: u64,
    round: u32,
    state: SimulationState,
    rounds: Vec<RoundRecord>,
    survivors: Vec<SurvivorCount>,
}

impl Simulation {
    /// Validate `config`, spawn the herd at random and put the wolf at the origin.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let herd = (0..config.sheep_number)
            .map(|index| Sheep::spawn(index, config.position_limit, config.sheep_step, &mut rng))
            .collect();
        let wolf = Wolf::at_origin(config.wolf_step);

        info!(seed, sheep = config.sheep_number, "Herd is ready for the game!");

        Ok(Self::assemble(config, herd, wolf, rng, seed))
    }

    /// Build a driver around a prepared herd and wolf.
    ///
    /// The herd must hold `config.sheep_number` living sheep whose indices
    /// match their slots.
    pub fn from_parts(config: SimulationConfig, herd: Vec<Sheep>, wolf: Wolf) -> Result<Self> {
        config.validate()?;

        if herd.len() != config.sheep_number {
            return Err(Error::InvalidConfiguration(format!(
                "herd has {} sheep, expected {}",
                herd.len(),
                config.sheep_number
            )));
        }
        if let Some((slot, sheep)) = herd
            .iter()
            .enumerate()
            .find(|(slot, sheep)| sheep.index() != *slot || !sheep.is_alive())
        {
            return Err(Error::InvalidConfiguration(format!(
                "sheep in slot {} has index {} and alive={}",
                slot,
                sheep.index(),
                sheep.is_alive()
            )));
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        let rng = ChaCha8Rng::seed_from_u64(seed);

        Ok(Self::assemble(config, herd, wolf, rng, seed))
    }

    fn assemble(
        config: SimulationConfig,
        herd: Vec<Sheep>,
        wolf: Wolf,
        rng: ChaCha8Rng,
        seed: u64,
    ) -> Self {
        Self {
            config,
            herd,
            wolf,
            rng,
            seed,
            round: 0,
            state: SimulationState::Running,
            rounds: Vec::new(),
            survivors: Vec::new(),
        }
    }

    pub fn herd(&self) -> &[Sheep] {
        &self.herd
    }

    pub fn wolf(&self) -> &Wolf {
        &self.wolf
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of rounds played so far
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn alive_count(&self) -> usize {
        self.herd.iter().filter(|s| s.is_alive()).count()
    }

    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    pub fn survivors(&self) -> &[SurvivorCount] {
        &self.survivors
    }

    /// Play the simulation to the end
    pub fn run(&mut self) -> Result<SimulationResult> {
        self.run_with(|_| Ok(()))
    }

    /// Play the simulation to the end, handing every round to `on_round`
    /// once it is recorded. An error from `on_round` stops the run.
    #[instrument(skip(self, on_round), fields(max_rounds = self.config.max_rounds, seed = self.seed))]
    pub fn run_with<F>(&mut self, mut on_round: F) -> Result<SimulationResult>
    where
        F: FnMut(&RoundReport) -> Result<()>,
    {
        info!("Starting simulation for at most {} rounds", self.config.max_rounds);

        while !self.state.is_terminal() {
            let report = self.step()?;
            on_round(&report)?;
        }

        match self.state {
            SimulationState::AllPreyDead => {
                info!(round = self.round, "No more alive sheep! Simulation terminated!")
            }
            _ => info!(
                alive = self.alive_count(),
                "Simulation terminated after max rounds - {} rounds!",
                self.config.max_rounds
            ),
        }

        Ok(self.result())
    }

    /// Play one round: every living sheep wanders, then the wolf hunts.
    pub fn step(&mut self) -> Result<RoundReport> {
        if self.state.is_terminal() {
            return Err(Error::InvalidState(format!(
                "simulation already finished with {:?}",
                self.state
            )));
        }

        self.round += 1;
        let round = self.round;
        let alive_at_start = self.alive_count();
        info!(round, alive = alive_at_start, "Round started!");

        for sheep in self.herd.iter_mut().filter(|s| s.is_alive()) {
            sheep.wander(&mut self.rng);
        }
        debug!(round, "All alive sheep have moved");

        let wolf_start = self.wolf.position();
        let hunt = {
            let mut live_herd: Vec<&mut Sheep> =
                self.herd.iter_mut().filter(|s| s.is_alive()).collect();
            self.wolf.hunt(&mut live_herd)?
        };

        let record = RoundRecord {
            round_number: round,
            wolf_position: self.wolf.position(),
            sheep_positions: self
                .herd
                .iter()
                .map(|s| s.is_alive().then(|| s.position()))
                .collect(),
        };

        let alive = self.alive_count();
        self.rounds.push(record.clone());
        self.survivors.push(SurvivorCount {
            round_number: round,
            alive,
        });
        info!(round, alive, "Round finished");

        if alive == 0 {
            self.state = SimulationState::AllPreyDead;
        } else if round >= self.config.max_rounds {
            self.state = SimulationState::RoundLimitReached;
        }

        Ok(RoundReport {
            record,
            alive_at_start,
            wolf_start,
            hunt,
            alive,
            state: self.state,
        })
    }

    /// Histories gathered so far
    pub fn result(&self) -> SimulationResult {
        SimulationResult {
            rounds: self.rounds.clone(),
            survivors: self.survivors.clone(),
            termination: self.state,
            seed: self.seed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub rounds: Vec<RoundRecord>,
    pub survivors: Vec<SurvivorCount>,
    pub termination: SimulationState,
    pub seed: u64,
}
