//! Command-line interface.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::solver::PlacementOrder;

/// Generates school timetables from a JSON model.
#[derive(Debug, Clone, Parser)]
#[command(name = "timetabler")]
#[command(about = "Generates school timetables from a JSON model")]
pub struct Cli {
    /// Path to the JSON model (rooms, teachers, subjects, groups, slots).
    pub model: PathBuf,

    /// Directory the result bundle is written under, in a per-model
    /// subdirectory named after the model file.
    #[arg(long, default_value = "solutions")]
    pub output_dir: PathBuf,

    /// Order in which requirements are seated.
    #[arg(long, value_enum, default_value_t = OrderArg::Enrollment)]
    pub order: OrderArg,

    /// Enable verbose output.
    #[arg(long)]
    pub verbose: bool,
}

/// CLI surface of [`PlacementOrder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// Group declaration order.
    Enrollment,
    /// Largest group first.
    LargestGroup,
}

impl From<OrderArg> for PlacementOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Enrollment => PlacementOrder::Enrollment,
            OrderArg::LargestGroup => PlacementOrder::LargestGroupFirst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["timetabler", "model.json"]);
        assert_eq!(cli.model, PathBuf::from("model.json"));
        assert_eq!(cli.output_dir, PathBuf::from("solutions"));
        assert_eq!(cli.order, OrderArg::Enrollment);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "timetabler",
            "one.json",
            "--output-dir",
            "out",
            "--order",
            "largest-group",
            "--verbose",
        ]);
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(PlacementOrder::from(cli.order), PlacementOrder::LargestGroupFirst);
        assert!(cli.verbose);
    }

    #[test]
    fn test_model_is_required() {
        assert!(Cli::try_parse_from(["timetabler"]).is_err());
    }
}
