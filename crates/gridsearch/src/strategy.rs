use std::fmt;
use std::str::FromStr;

use crate::error::ParseStrategyError;

/// Which search strategy a [`Pathfinder`](crate::Pathfinder) runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    #[cfg_attr(feature = "serde", serde(rename = "bfs"))]
    BreadthFirst,
    #[cfg_attr(feature = "serde", serde(rename = "dfs"))]
    DepthFirst,
    #[cfg_attr(feature = "serde", serde(rename = "ids"))]
    IterativeDeepening,
    #[cfg_attr(feature = "serde", serde(rename = "ucs"))]
    UniformCost,
    #[cfg_attr(feature = "serde", serde(rename = "greedy_bfs", alias = "greedy"))]
    GreedyBestFirst,
    #[cfg_attr(feature = "serde", serde(rename = "a*", alias = "astar"))]
    AStar,
    #[cfg_attr(feature = "serde", serde(rename = "random"))]
    RandomWalk,
}

impl Strategy {
    /// Every strategy, uninformed first.
    pub const ALL: [Strategy; 7] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::IterativeDeepening,
        Strategy::UniformCost,
        Strategy::GreedyBestFirst,
        Strategy::AStar,
        Strategy::RandomWalk,
    ];

    /// Canonical short name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::DepthFirst => "dfs",
            Strategy::IterativeDeepening => "ids",
            Strategy::UniformCost => "ucs",
            Strategy::GreedyBestFirst => "greedy_bfs",
            Strategy::AStar => "a*",
            Strategy::RandomWalk => "random",
        }
    }

    /// Whether every route found is a shortest one. Iterative deepening only
    /// finds routes shorter than its depth cap.
    pub const fn is_optimal(self) -> bool {
        matches!(
            self,
            Strategy::BreadthFirst
                | Strategy::IterativeDeepening
                | Strategy::UniformCost
                | Strategy::AStar
        )
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let strategy = match s.to_ascii_lowercase().as_str() {
            "bfs" => Strategy::BreadthFirst,
            "dfs" => Strategy::DepthFirst,
            "ids" => Strategy::IterativeDeepening,
            "ucs" => Strategy::UniformCost,
            "greedy_bfs" | "greedy" => Strategy::GreedyBestFirst,
            "a*" | "astar" => Strategy::AStar,
            "random" => Strategy::RandomWalk,
            _ => return Err(ParseStrategyError(s.to_string())),
        };
        Ok(strategy)
    }
}
