use std::fmt;

/// Search strategy driving a run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Breadth-first search over a FIFO queue.
    Bfs,
    /// Depth-first search over a LIFO stack.
    Dfs,
    /// Greedy best-first search ranked by the heuristic alone.
    BestFirst,
    /// A* ranked by the heuristic plus the parent's running score.
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [Self::Bfs, Self::Dfs, Self::BestFirst, Self::AStar];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "breadth-first",
            Self::Dfs => "depth-first",
            Self::BestFirst => "best-first",
            Self::AStar => "A*",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle of a search run.
///
/// `Idle -> Running -> {PathFound | Exhausted}`. The two terminal states are
/// sticky until the next launch or reset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunState {
    #[default]
    Idle,
    Running(Strategy),
    /// The end cell was popped from the frontier.
    PathFound,
    /// The frontier emptied without reaching the end cell.
    Exhausted,
}

impl RunState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::PathFound | Self::Exhausted)
    }

    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running(_))
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Running(s) => write!(f, "running {s}"),
            Self::PathFound => f.write_str("path found"),
            Self::Exhausted => f.write_str("exhausted"),
        }
    }
}
