//! Terminal pathfinding visualizer model.
//!
//! [`Visualizer`] owns a [`SearchContext`], applies host [`Input`]s and
//! advances the engine a fixed number of steps per tick: search steps while
//! a run is active, then reconstruction steps once the end was reached.

use std::time::Duration;

use gridwalk_core::GridConfig;
use gridwalk_crossterm::Input;
use gridwalk_paths::{RunState, SearchContext, SearchError};

/// Host pacing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualizerConfig {
    /// Engine steps performed per tick.
    pub steps_per_tick: usize,
    /// Delay between ticks.
    pub tick: Duration,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            steps_per_tick: 4,
            tick: Duration::from_millis(16),
        }
    }
}

pub struct Visualizer {
    ctx: SearchContext,
    config: VisualizerConfig,
    quit: bool,
}

impl Visualizer {
    pub fn new(grid: GridConfig, config: VisualizerConfig) -> Result<Self, SearchError> {
        Ok(Self {
            ctx: SearchContext::new(grid)?,
            config,
            quit: false,
        })
    }

    #[inline]
    pub fn context(&self) -> &SearchContext {
        &self.ctx
    }

    #[inline]
    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Whether a quit was requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.quit
    }

    /// Apply one host action.
    ///
    /// Wall toggles are ignored while a run is active.
    pub fn apply(&mut self, input: Input) -> Result<(), SearchError> {
        match input {
            Input::Launch(strategy) => self.ctx.launch(strategy),
            Input::Reset => self.ctx.reset(),
            Input::ToggleWall(p) => {
                if self.ctx.state().is_running() {
                    log::debug!("visualizer: ignoring wall toggle at {p} during a run");
                } else if self.ctx.grid().contains(p) {
                    self.ctx.toggle_wall(p)?;
                }
            }
            Input::Quit => self.quit = true,
        }
        Ok(())
    }

    /// Advance the engine by up to `steps_per_tick` steps.
    pub fn tick(&mut self) -> Result<(), SearchError> {
        for _ in 0..self.config.steps_per_tick {
            match self.ctx.state() {
                RunState::Idle | RunState::Exhausted => break,
                RunState::Running(_) => {
                    self.ctx.step()?;
                }
                RunState::PathFound => {
                    if self.ctx.reconstruct_step().done {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Status line for the current run.
    pub fn status(&self) -> String {
        let state = self.ctx.state();
        let by = self
            .ctx
            .strategy()
            .map_or_else(String::new, |s| format!(" by {s}"));
        match state {
            RunState::Idle => "idle".to_string(),
            RunState::Running(_) => format!(
                "{state}: {} steps, {} pending",
                self.ctx.steps(),
                self.ctx.frontier_len()
            ),
            RunState::PathFound => {
                let progress = self.ctx.path_progress();
                format!(
                    "{state}{by} after {} steps, length {}",
                    self.ctx.steps(),
                    progress.length
                )
            }
            RunState::Exhausted => {
                format!("{state}{by} after {} steps, no path", self.ctx.steps())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridwalk_core::Point;
    use gridwalk_paths::Strategy;

    fn small(steps_per_tick: usize) -> Visualizer {
        Visualizer::new(
            GridConfig::open(5, 5, Point::new(0, 0), Point::new(4, 4)),
            VisualizerConfig {
                steps_per_tick,
                ..VisualizerConfig::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn idle_tick_does_nothing() {
        let mut v = small(3);
        v.tick().unwrap();
        assert_eq!(v.context().state(), RunState::Idle);
        assert_eq!(v.status(), "idle");
    }

    #[test]
    fn ticks_step_then_reconstruct() {
        let mut v = small(2);
        v.apply(Input::Launch(Strategy::Bfs)).unwrap();
        v.tick().unwrap();
        assert_eq!(v.context().steps(), 2);
        assert_eq!(v.context().state(), RunState::Running(Strategy::Bfs));

        for _ in 0..100 {
            v.tick().unwrap();
        }
        assert_eq!(v.context().state(), RunState::PathFound);
        assert_eq!(v.context().path_progress().length, 8);
        assert!(v.context().path_progress().done);
        assert!(v.status().starts_with("path found by breadth-first after"));
        assert!(v.status().ends_with("length 8"));
    }

    #[test]
    fn walls_only_toggle_between_runs() {
        let mut v = small(1);
        v.apply(Input::ToggleWall(Point::new(2, 2))).unwrap();
        assert!(v.context().cell(Point::new(2, 2)).unwrap().is_wall);

        v.apply(Input::Launch(Strategy::Dfs)).unwrap();
        v.apply(Input::ToggleWall(Point::new(3, 3))).unwrap();
        assert!(!v.context().cell(Point::new(3, 3)).unwrap().is_wall);

        // Clicks outside the grid are dropped.
        v.apply(Input::Reset).unwrap();
        assert!(v.apply(Input::ToggleWall(Point::new(30, 1))).is_ok());
        assert!(v.apply(Input::ToggleWall(Point::new(0, 0))).is_err());
    }

    #[test]
    fn exhausted_run_stops_ticking() {
        let walls = (0..5).map(|y| Point::new(2, y));
        let mut v = Visualizer::new(
            GridConfig::open(5, 5, Point::new(0, 0), Point::new(4, 4)).with_walls(walls),
            VisualizerConfig::default(),
        )
        .unwrap();
        v.apply(Input::Launch(Strategy::AStar)).unwrap();
        for _ in 0..50 {
            v.tick().unwrap();
        }
        assert_eq!(v.context().state(), RunState::Exhausted);
        assert_eq!(v.context().grid().count_fn(|c| c.part_of_path), 0);
        assert!(v.status().ends_with("no path"));
    }

    #[test]
    fn quit_is_sticky() {
        let mut v = small(1);
        assert!(!v.is_done());
        v.apply(Input::Quit).unwrap();
        assert!(v.is_done());
    }
}
