use clap::{ArgAction, Parser, Subcommand};

use crate::check::{CheckArgs, run_check};
use crate::error::Result;
use crate::hues::{ListHuesArgs, run_list_hues};
use crate::logging;
use crate::preset::{BuildArgs, run_build};
use crate::remap::{RemapArgs, run_remap};
use crate::util::OutputMode;

#[derive(Debug, Parser)]
#[command(
    name = "tonebridge",
    about = "Build utility-framework color presets from design-system palettes",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Remap every ramp and write the framework preset.
    Build(BuildArgs),

    /// Print one remapped ramp as JSON.
    Remap(RemapArgs),

    /// Check that every remapped ramp darkens from 50 to 950.
    Check(CheckArgs),

    /// Print the ramps and single colors found in the source palette.
    #[command(name = "list-hues")]
    ListHues(ListHuesArgs),
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, OutputMode::detect());
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Build(args) => run_build(args),
        Commands::Remap(args) => run_remap(args),
        Commands::Check(args) => run_check(args),
        Commands::ListHues(args) => run_list_hues(args),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use tempfile::tempdir;
    use tonebridge_palette::{MissingStepPolicy, PaletteError, PresetFormat};

    use super::{Cli, Commands, run};
    use crate::error::ToneError;
    use crate::hues::ListHuesArgs;
    use crate::inputs::InputArgs;
    use crate::preset::BuildArgs;
    use crate::remap::RemapArgs;

    #[test]
    fn list_hues_command_dispatches_successfully() {
        let result = run(Cli {
            verbose: 0,
            command: Commands::ListHues(ListHuesArgs::default()),
        });
        assert!(result.is_ok());
    }

    #[test]
    fn remap_command_dispatches_unknown_hue_error() {
        let result = run(Cli {
            verbose: 0,
            command: Commands::Remap(RemapArgs {
                hue: "not-a-real-hue".to_string(),
                ..RemapArgs::default()
            }),
        });

        match result.expect_err("unknown hue should fail") {
            ToneError::Palette(PaletteError::UnknownHue { hue }) => {
                assert_eq!(hue, "not-a-real-hue");
            }
            other => panic!("expected UnknownHue, got {other}"),
        }
    }

    #[test]
    fn build_command_dispatches_missing_path_error() {
        let result = run(Cli {
            verbose: 0,
            command: Commands::Build(BuildArgs {
                inputs: InputArgs {
                    source: Some(PathBuf::from("/tmp/tonebridge/does-not-exist.json")),
                    ..InputArgs::default()
                },
                ..BuildArgs::default()
            }),
        });

        match result.expect_err("missing source should fail") {
            ToneError::MissingPath { path } => {
                assert_eq!(path, PathBuf::from("/tmp/tonebridge/does-not-exist.json"));
            }
            other => panic!("expected MissingPath, got {other}"),
        }
    }

    #[test]
    fn build_command_writes_output_file() {
        let temp = tempdir().expect("tempdir");
        let output = temp.path().join("out/preset.cjs");
        run(Cli {
            verbose: 0,
            command: Commands::Build(BuildArgs {
                format: Some(PresetFormat::Cjs),
                output: Some(output.clone()),
                ..BuildArgs::default()
            }),
        })
        .expect("build");

        let written = std::fs::read_to_string(&output).expect("read preset");
        assert!(written.contains("module.exports = {"));
    }

    #[test]
    fn flags_parse_into_args() {
        let cli = Cli::try_parse_from([
            "tonebridge",
            "-vv",
            "build",
            "--missing-step",
            "propagate",
            "--format",
            "esm",
            "--no-merge",
            "--output",
            "preset.mjs",
        ])
        .expect("parse");

        assert_eq!(cli.verbose, 2);
        let Commands::Build(args) = cli.command else {
            panic!("expected build command");
        };
        assert_eq!(args.policy.missing_step, Some(MissingStepPolicy::Propagate));
        assert_eq!(args.format, Some(PresetFormat::Esm));
        assert!(args.no_merge);
        assert_eq!(args.output, Some(PathBuf::from("preset.mjs")));
    }

    #[test]
    fn list_hues_does_not_take_a_policy() {
        let parsed =
            Cli::try_parse_from(["tonebridge", "list-hues", "--missing-step", "propagate"]);
        assert!(parsed.is_err());
        assert!(Cli::try_parse_from(["tonebridge", "remap", "blue", "--missing-step", "reject"]).is_ok());
    }

    #[test]
    fn unknown_policy_is_a_usage_error() {
        let parsed = Cli::try_parse_from(["tonebridge", "check", "--missing-step", "ignore"]);
        assert!(parsed.is_err());
    }
}
