use std::path::PathBuf;

use clap::Parser;
use quadris_engine::{Board, EngineError, FixedSequence, GameConfig, PieceSeed, Variant};

use crate::{controller::PieceOrder, logging, play};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct CommandArgs {
    /// Board width in cells
    #[clap(long, default_value_t = Board::STANDARD_WIDTH)]
    width: i32,
    /// Board height in cells
    #[clap(long, default_value_t = Board::STANDARD_HEIGHT)]
    height: i32,
    /// Seed for the random piece order (32 hex digits)
    #[clap(long, conflicts_with = "sequence")]
    seed: Option<PieceSeed>,
    /// Repeat a fixed piece order instead of random pieces, e.g. `IOTSZJL`
    #[clap(long, value_parser = parse_sequence)]
    sequence: Option<FixedSequence>,
    /// Game ticks per second
    #[clap(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..=1000))]
    fps: u64,
    /// File receiving the log output (filter with `RUST_LOG`)
    #[clap(long, default_value = "quadris.log")]
    log_file: PathBuf,
}

impl CommandArgs {
    fn config(&self) -> GameConfig {
        GameConfig::new(self.width, self.height)
    }

    fn piece_order(&self) -> PieceOrder {
        match &self.sequence {
            Some(sequence) => PieceOrder::Fixed(sequence.clone()),
            None => PieceOrder::Random { seed: self.seed },
        }
    }
}

fn parse_sequence(s: &str) -> Result<FixedSequence, EngineError> {
    let variants = s
        .chars()
        .map(|c| c.to_string().parse::<Variant>())
        .collect::<Result<Vec<_>, _>>()?;
    FixedSequence::new(variants).ok_or_else(|| EngineError::InvalidType {
        value: s.to_owned(),
    })
}

pub(crate) fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    logging::init(&args.log_file)?;
    play::run(args.config(), args.piece_order(), args.fps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CommandArgs::try_parse_from(["quadris"]).unwrap();
        assert_eq!(args.config(), GameConfig::default());
        assert_eq!(args.fps, 60);
        assert!(matches!(args.piece_order(), PieceOrder::Random { seed: None }));
    }

    #[test]
    fn test_board_size_and_seed() {
        let args = CommandArgs::try_parse_from([
            "quadris",
            "--width",
            "12",
            "--height",
            "24",
            "--seed",
            "000102030405060708090a0b0c0d0e0f",
        ])
        .unwrap();
        assert_eq!(args.config(), GameConfig::new(12, 24));
        let PieceOrder::Random { seed: Some(seed) } = args.piece_order() else {
            panic!("expected a seeded random order");
        };
        assert_eq!(seed.to_string(), "000102030405060708090a0b0c0d0e0f");
    }

    #[test]
    fn test_sequence() {
        let args = CommandArgs::try_parse_from(["quadris", "--sequence", "iOt"]).unwrap();
        let PieceOrder::Fixed(sequence) = args.piece_order() else {
            panic!("expected a fixed order");
        };
        assert_eq!(sequence.variants(), [Variant::I, Variant::O, Variant::T]);
    }

    #[test]
    fn test_rejected_arguments() {
        let seed = "000102030405060708090a0b0c0d0e0f";
        for argv in [
            &["quadris", "--sequence", "IOX"][..],
            &["quadris", "--sequence", ""][..],
            &["quadris", "--seed", "xyz"][..],
            &["quadris", "--fps", "0"][..],
            &["quadris", "--sequence", "I", "--seed", seed][..],
        ] {
            assert!(
                CommandArgs::try_parse_from(argv.iter().copied()).is_err(),
                "{argv:?}"
            );
        }
    }

    #[test]
    fn test_parse_sequence_error() {
        assert_eq!(
            parse_sequence("TSQ").unwrap_err(),
            EngineError::InvalidType {
                value: "Q".to_owned()
            }
        );
    }
}
