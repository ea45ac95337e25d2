use std::path::PathBuf;

use eyre::{Context, Result};
use npuzzle_core::InputFormat;
use npuzzle_core::inspect::{Diagnostic, inspect};
use npuzzle_prefs::Preferences;
use npuzzle_replay::AdvanceMode;
use serde::Serialize;

/// Sliding puzzle solution viewer
///
/// If no subcommand is specified, then the viewer window is opened.
#[derive(Debug, clap::Parser)]
#[command(version, args_conflicts_with_subcommands = true)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Option<Subcommand>,

    #[command(flatten)]
    pub view: ViewArgs,
}

/// Options for the viewer window. Each overrides the preferences file.
#[derive(clap::Args, Debug, Default)]
pub(crate) struct ViewArgs {
    /// Solution file to replay.
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
    /// Format of the solution file (`grouped` or `flat`).
    #[arg(short, long)]
    pub format: Option<InputFormat>,
    /// Directory containing `0.png` (background) and one image per tile.
    #[arg(long, value_name = "DIR")]
    pub images: Option<PathBuf>,
    /// When to move on to the next state (`timed` or `interactive`).
    #[arg(short, long)]
    pub advance: Option<AdvanceMode>,
    /// Seconds that each state is shown in timed mode.
    #[arg(long, value_name = "SECS")]
    pub step_duration: Option<f32>,
    /// Seconds to wait after the last state of each puzzle in timed mode.
    #[arg(long, value_name = "SECS")]
    pub pause_duration: Option<f32>,
    /// Additional preferences file, applied over the user preferences.
    #[arg(long, value_name = "FILE")]
    pub prefs: Option<PathBuf>,
}

impl ViewArgs {
    /// Loads preferences and applies the command-line overrides.
    pub fn load_prefs(&self) -> Preferences {
        let mut prefs = Preferences::load(self.prefs.as_deref());
        if let Some(input) = &self.input {
            prefs.input_file = input.clone();
        }
        if let Some(format) = self.format {
            prefs.input_format = format;
        }
        if let Some(images) = &self.images {
            prefs.images_dir = images.clone();
        }
        if let Some(advance) = self.advance {
            prefs.advance = advance;
        }
        if let Some(secs) = self.step_duration {
            prefs.step_duration = secs;
        }
        if let Some(secs) = self.pause_duration {
            prefs.pause_duration = secs;
        }
        prefs.validated()
    }
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Load and inspect a solution file and print a summary as JSON.
    Check {
        /// Solution file to check. Defaults to the configured input file.
        file: Option<PathBuf>,
        /// Format of the solution file (`grouped` or `flat`).
        #[arg(short, long)]
        format: Option<InputFormat>,
    },
    /// Print the effective preferences as YAML.
    Prefs {
        /// Additional preferences file, applied over the user preferences.
        #[arg(long, value_name = "FILE")]
        prefs: Option<PathBuf>,
    },
}

#[derive(Serialize, Debug)]
struct CheckReport {
    file: PathBuf,
    format: InputFormat,
    sequences: Vec<SequenceSummary>,
    warnings: Vec<npuzzle_core::Warning>,
}

#[derive(Serialize, Debug)]
struct SequenceSummary {
    order: usize,
    states: usize,
    diagnostics: Vec<Diagnostic>,
}

pub(crate) fn exec(subcommand: Subcommand) -> Result<()> {
    match subcommand {
        Subcommand::Check { file, format } => {
            let prefs = Preferences::load(None);
            let file = file.unwrap_or(prefs.input_file);
            let format = format.unwrap_or(prefs.input_format);

            let (sequences, warnings) =
                npuzzle_core::load_file(&file, format).wrap_err("error loading solution file")?;
            let sequences = sequences
                .iter()
                .map(|sequence| SequenceSummary {
                    order: sequence.order(),
                    states: sequence.len(),
                    diagnostics: inspect(sequence),
                })
                .collect();

            write_json_output(&CheckReport {
                file,
                format,
                sequences,
                warnings,
            })
        }

        Subcommand::Prefs { prefs } => {
            match npuzzle_prefs::paths::prefs_file() {
                Ok(path) => eprintln!("User preferences file: {}", path.display()),
                Err(e) => eprintln!("User preferences file: {e}"),
            }
            let prefs = Preferences::load(prefs.as_deref());
            let yaml = serde_norway::to_string(&prefs).wrap_err("error serializing preferences")?;
            print!("{yaml}");
            Ok(())
        }
    }
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_view_args() {
        let args = Args::try_parse_from([
            "npuzzle-visual",
            "--input",
            "solution.txt",
            "--format",
            "flat",
            "--advance",
            "interactive",
            "--step-duration",
            "0.1",
        ])
        .unwrap();
        assert!(args.subcommand.is_none());
        assert_eq!(args.view.input, Some(PathBuf::from("solution.txt")));
        assert_eq!(args.view.format, Some(InputFormat::Flat));
        assert_eq!(args.view.advance, Some(AdvanceMode::Interactive));
        assert_eq!(args.view.step_duration, Some(0.1));
        assert_eq!(args.view.pause_duration, None);
    }

    #[test]
    fn test_parse_check() {
        let args = Args::try_parse_from(["npuzzle-visual", "check", "a.txt", "-f", "grouped"]).unwrap();
        let Some(Subcommand::Check { file, format }) = args.subcommand else {
            panic!("expected check subcommand");
        };
        assert_eq!(file, Some(PathBuf::from("a.txt")));
        assert_eq!(format, Some(InputFormat::Grouped));
    }

    #[test]
    fn test_reject_unknown_format() {
        assert!(Args::try_parse_from(["npuzzle-visual", "--format", "csv"]).is_err());
    }

    #[test]
    fn test_overrides_apply_over_prefs() {
        let dir = tempfile::tempdir().unwrap();
        let prefs_path = dir.path().join("prefs.yaml");
        std::fs::write(&prefs_path, "advance: interactive\nstep_duration: 1.0\n").unwrap();

        let args = ViewArgs {
            images: Some(dir.path().join("tiles")),
            step_duration: Some(0.5),
            prefs: Some(prefs_path),
            ..ViewArgs::default()
        };
        let prefs = args.load_prefs();
        assert_eq!(prefs.advance, AdvanceMode::Interactive);
        assert_eq!(prefs.step_duration, 0.5);
        assert_eq!(prefs.images_dir, dir.path().join("tiles"));
    }
}
