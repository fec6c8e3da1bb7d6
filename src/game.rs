use anyhow::{Context, Result};
use log::{debug, error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::clock::Clock;
use crate::config::GameConfig;
use crate::food::{Food, PlacementError};
use crate::input::{InputSource, Intent};
use crate::render::{Drawable, Renderer, BOARD_BACKGROUND_COLOR};
use crate::snake::Snake;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Quit,
}

/// Drives one snake and one piece of food through the fixed tick sequence.
pub struct Game<R, I, C> {
    snake: Snake,
    food: Food,
    rng: StdRng,
    speed: u32,
    renderer: R,
    input: I,
    clock: C,
}

impl<R: Renderer, I: InputSource, C: Clock> Game<R, I, C> {
    pub fn new(config: &GameConfig, renderer: R, input: I, clock: C) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let food = Food::new(config.grid, &mut rng).context("Failed to place the first food")?;

        Ok(Game {
            snake: Snake::new(config.grid),
            food,
            rng,
            speed: config.speed,
            renderer,
            input,
            clock,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        info!("Starting round, speed {} ticks/s", self.speed);
        while self.tick()? == Tick::Continue {}
        info!("Quit with snake length {}", self.snake.length());
        Ok(())
    }

    /// One full step: wait, draw, move, turn, read input, eat, collide.
    pub fn tick(&mut self) -> Result<Tick> {
        self.clock.tick(self.speed);

        self.food.draw(&mut self.renderer);
        self.snake.draw(&mut self.renderer);
        self.renderer.present().context("Failed to present frame")?;

        self.snake.advance();
        self.snake.apply_heading();

        let intents = self.input.poll().context("Failed to read input")?;
        for intent in intents {
            match intent.direction() {
                Some(direction) => {
                    self.snake.set_pending_heading(direction);
                }
                None => return Ok(Tick::Quit),
            }
        }

        if self.snake.head() == self.food.position() {
            self.snake.grow();
            debug!(
                "Ate food at {:?}, length now {}",
                self.food.position(),
                self.snake.length()
            );
            match self.food.randomize(self.snake.body(), &mut self.rng) {
                Ok(pos) => debug!("Food placed at {:?}", pos),
                Err(PlacementError::BoardFull { .. }) => {
                    info!("Board filled at length {}", self.snake.length());
                    self.restart_round();
                    return Ok(Tick::Continue);
                }
            }
        }

        if self.snake.check_self_collision() {
            info!("Collision at {:?}, length {}", self.snake.head(), self.snake.length());
            self.renderer.clear(BOARD_BACKGROUND_COLOR);
            self.snake.reset();
        }

        Ok(Tick::Continue)
    }

    fn restart_round(&mut self) {
        self.renderer.clear(BOARD_BACKGROUND_COLOR);
        self.snake.reset();
        // A lone snake on a board of at least two cells always leaves room
        if let Err(e) = self.food.randomize(self.snake.body(), &mut self.rng) {
            error!("Could not place food after restart: {}", e);
        }
    }
}
