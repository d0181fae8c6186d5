//! [`SearchContext`]: grid, frontier and run state of one search session.
//!
//! The context never loops to completion: every [`step`](SearchContext::step)
//! performs exactly one expansion so the host can render the frontier in
//! between. Strategy-specific duplicate handling:
//!
//! | Strategy | Frontier | Marked visited | Re-push policy |
//! |---|---|---|---|
//! | BFS | [`FifoQueue`] | when pushed | never (pushed cells are visited) |
//! | DFS | [`LifoStack`] | when popped | always; parent is last writer |
//! | Best-first | [`ScanSet`] | when popped | skipped if the cell is pending |
//! | A* | [`ScoreTree`] | when popped | skipped if its score is pending |

use gridwalk_core::{Cell, Grid, GridConfig, GridError, Point};

use crate::error::SearchError;
use crate::frontier::{Frontier, ScoredFrontier};
use crate::heuristic::Heuristic;
use crate::queue::FifoQueue;
use crate::reconstruct::{PathProgress, Reconstructor};
use crate::scanset::ScanSet;
use crate::scoretree::ScoreTree;
use crate::stack::LifoStack;
use crate::strategy::{RunState, Strategy};

// ---------------------------------------------------------------------------
// Per-run frontier
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
enum Run {
    Bfs(FifoQueue),
    Dfs(LifoStack),
    BestFirst(ScanSet),
    AStar(ScoreTree),
}

impl Run {
    fn new(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Bfs => Self::Bfs(FifoQueue::new()),
            Strategy::Dfs => Self::Dfs(LifoStack::new()),
            Strategy::BestFirst => Self::BestFirst(ScanSet::new()),
            Strategy::AStar => Self::AStar(ScoreTree::new()),
        }
    }

    fn frontier(&self) -> &dyn Frontier {
        match self {
            Self::Bfs(q) => q,
            Self::Dfs(s) => s,
            Self::BestFirst(s) => s,
            Self::AStar(t) => t,
        }
    }

    fn frontier_mut(&mut self) -> &mut dyn Frontier {
        match self {
            Self::Bfs(q) => q,
            Self::Dfs(s) => s,
            Self::BestFirst(s) => s,
            Self::AStar(t) => t,
        }
    }
}

/// Result of a single pop.
enum Expansion {
    /// Nothing left to pop.
    Empty,
    /// The end cell was popped.
    Goal,
    /// A cell was expanded.
    Expanded(Point),
    /// An already-visited copy was popped and discarded.
    Duplicate(Point),
}

// ---------------------------------------------------------------------------
// SearchContext
// ---------------------------------------------------------------------------

/// Owner of the grid, the active run and the path reconstructor.
///
/// Search fields written by a run (`visited`, `parent`, `score`,
/// `part_of_path`) persist across launches and are only cleared by
/// [`reset`](Self::reset) or [`configure_grid`](Self::configure_grid).
#[derive(Clone, Debug)]
pub struct SearchContext {
    config: GridConfig,
    grid: Grid,
    heuristic: Heuristic,
    state: RunState,
    run: Option<Run>,
    reconstructor: Reconstructor,
    steps: usize,
    // scratch buffer for neighbor queries
    nbuf: Vec<Point>,
}

impl SearchContext {
    /// Build a context from a layout.
    pub fn new(config: GridConfig) -> Result<Self, SearchError> {
        let grid = Grid::build(&config)?;
        Ok(Self {
            heuristic: Heuristic::for_config(&config),
            reconstructor: Reconstructor::new(grid.end()),
            config,
            grid,
            state: RunState::Idle,
            run: None,
            steps: 0,
            nbuf: Vec::with_capacity(4),
        })
    }

    /// Replace the layout, keeping the configured pixel cell size.
    ///
    /// On error the current grid and run are left untouched.
    pub fn configure_grid(
        &mut self,
        cols: i32,
        rows: i32,
        walls: impl IntoIterator<Item = Point>,
        start: Point,
        end: Point,
    ) -> Result<(), SearchError> {
        let config = GridConfig::open(cols, rows, start, end)
            .with_walls(walls)
            .with_cell_size(self.config.cell_width, self.config.cell_height);
        *self = Self::new(config)?;
        Ok(())
    }

    /// Drop the active run and clear every search field. Walls, including
    /// toggled ones, are kept.
    pub fn reset(&mut self) {
        self.grid.clear_search();
        self.state = RunState::Idle;
        self.run = None;
        self.steps = 0;
        self.reconstructor = Reconstructor::new(self.grid.end());
        log::debug!("search: reset");
    }

    /// Start a run seeded with the start cell, replacing any previous run.
    ///
    /// Search fields left by an earlier run are not cleared.
    pub fn launch(&mut self, strategy: Strategy) {
        let start = self.grid.start();
        let score = self.grid.at(start).map_or(0.0, |c| c.score);
        let mut run = Run::new(strategy);
        run.frontier_mut().push(start, score);
        self.run = Some(run);
        self.state = RunState::Running(strategy);
        self.steps = 0;
        log::debug!("search: launched {strategy} from {start}");
    }

    /// Advance the active run by one expansion.
    ///
    /// Returns the state after the step. Once the run is terminal, further
    /// calls return the same state without touching the grid.
    pub fn step(&mut self) -> Result<RunState, SearchError> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }
        let Some(run) = self.run.as_mut() else {
            return Err(SearchError::EngineNotRunning);
        };
        let h = self.heuristic;
        let grid = &mut self.grid;
        let nbuf = &mut self.nbuf;
        let expansion = match run {
            Run::Bfs(q) => expand_bfs(grid, q, nbuf)?,
            Run::Dfs(s) => expand_dfs(grid, s, nbuf)?,
            Run::BestFirst(s) => expand_scored(grid, s, nbuf, |n, _| h.estimate(n))?,
            Run::AStar(t) => expand_scored(grid, t, nbuf, |n, parent| h.estimate(n) + parent)?,
        };
        match expansion {
            Expansion::Empty => {
                self.state = RunState::Exhausted;
                log::debug!("search: frontier exhausted after {} steps", self.steps);
            }
            Expansion::Goal => {
                self.steps += 1;
                self.state = RunState::PathFound;
                log::debug!("search: reached {} after {} steps", self.grid.end(), self.steps);
            }
            Expansion::Expanded(p) => {
                self.steps += 1;
                log::trace!("search: expanded {p}");
            }
            Expansion::Duplicate(p) => {
                self.steps += 1;
                log::trace!("search: skipped visited {p}");
            }
        }
        Ok(self.state)
    }

    /// Mark the next cell of the end-to-start parent chain.
    pub fn reconstruct_step(&mut self) -> PathProgress {
        self.reconstructor.step(&mut self.grid)
    }

    /// Flip the wall flag at `p`, returning the new value.
    ///
    /// Toggled walls survive [`reset`](Self::reset). Toggling during a run
    /// is allowed but leaves the run's bookkeeping inconsistent; hosts
    /// should only do it while no run is active.
    pub fn toggle_wall(&mut self, p: Point) -> Result<bool, SearchError> {
        let wall = !self.grid.cell_mut(p)?.is_wall;
        self.grid.set_wall(p, wall)?;
        if wall {
            self.config.walls.push(p);
        } else {
            self.config.walls.retain(|&w| w != p);
        }
        if self.state.is_running() {
            log::warn!("search: wall at {p} toggled during an active run");
        }
        Ok(wall)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.grid.at(p)
    }

    /// Current layout, including toggled walls.
    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    #[inline]
    pub fn heuristic(&self) -> &Heuristic {
        &self.heuristic
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Strategy of the last launch, if any since the last reset.
    pub fn strategy(&self) -> Option<Strategy> {
        self.run.as_ref().map(|r| match r {
            Run::Bfs(_) => Strategy::Bfs,
            Run::Dfs(_) => Strategy::Dfs,
            Run::BestFirst(_) => Strategy::BestFirst,
            Run::AStar(_) => Strategy::AStar,
        })
    }

    /// Pops performed by the current run.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn frontier_len(&self) -> usize {
        self.run.as_ref().map_or(0, |r| r.frontier().len())
    }

    /// Coordinates currently pending in the frontier.
    pub fn frontier_points(&self) -> Vec<Point> {
        self.run
            .as_ref()
            .map_or_else(Vec::new, |r| r.frontier().points())
    }

    #[inline]
    pub fn path_progress(&self) -> PathProgress {
        self.reconstructor.progress()
    }
}

// ---------------------------------------------------------------------------
// Expansion rules
// ---------------------------------------------------------------------------

fn expand_bfs(
    grid: &mut Grid,
    queue: &mut FifoQueue,
    nbuf: &mut Vec<Point>,
) -> Result<Expansion, GridError> {
    let Some(current) = queue.pop_next() else {
        return Ok(Expansion::Empty);
    };
    grid.cell_mut(current)?.visited = true;
    if current == grid.end() {
        return Ok(Expansion::Goal);
    }
    grid.neighbors(current, nbuf);
    for &n in nbuf.iter() {
        let cell = grid.cell_mut(n)?;
        cell.visited = true;
        cell.parent = Some(current);
        queue.push(n, cell.score);
    }
    Ok(Expansion::Expanded(current))
}

fn expand_dfs(
    grid: &mut Grid,
    stack: &mut LifoStack,
    nbuf: &mut Vec<Point>,
) -> Result<Expansion, GridError> {
    let Some(current) = stack.pop_next() else {
        return Ok(Expansion::Empty);
    };
    if current == grid.end() {
        grid.cell_mut(current)?.visited = true;
        return Ok(Expansion::Goal);
    }
    let cell = grid.cell_mut(current)?;
    if cell.visited {
        return Ok(Expansion::Duplicate(current));
    }
    cell.visited = true;
    grid.neighbors(current, nbuf);
    for &n in nbuf.iter() {
        let cell = grid.cell_mut(n)?;
        cell.parent = Some(current);
        stack.push(n, cell.score);
    }
    Ok(Expansion::Expanded(current))
}

/// Shared rule of best-first and A*: a neighbour already matched by the
/// frontier's `contains` is left alone, otherwise it gets a parent and a
/// fresh score from `score(neighbour, current_score)`.
fn expand_scored<F: ScoredFrontier>(
    grid: &mut Grid,
    frontier: &mut F,
    nbuf: &mut Vec<Point>,
    score: impl Fn(Point, f64) -> f64,
) -> Result<Expansion, GridError> {
    let Some(current) = frontier.pop_next() else {
        return Ok(Expansion::Empty);
    };
    let current_score = {
        let cell = grid.cell_mut(current)?;
        cell.visited = true;
        cell.score
    };
    if current == grid.end() {
        return Ok(Expansion::Goal);
    }
    grid.neighbors(current, nbuf);
    for &n in nbuf.iter() {
        let cell = grid.cell_mut(n)?;
        if frontier.contains(n, cell.score) {
            continue;
        }
        cell.parent = Some(current);
        cell.score = score(n, current_score);
        frontier.push(n, cell.score);
    }
    Ok(Expansion::Expanded(current))
}
