use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a vocabulary set from a list of YouTube video IDs
    Run {
        /// Video list file named <target>_<subtitle>.txt, one video ID per line
        #[arg(short, long, default_value = "data_in/apc_ar.txt")]
        input: PathBuf,

        /// Stop after this many videos
        #[arg(short, long)]
        max_videos: Option<usize>,

        /// Root directory for generated sets
        #[arg(short, long)]
        output_root: Option<PathBuf>,
    },

    /// Write the default configuration to a file
    InitConfig {
        /// Destination file
        #[arg(short, long, default_value = "config.toml")]
        output: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_defaults() {
        let args = Args::try_parse_from(["subvocab", "run"]).unwrap();
        match args.command {
            Commands::Run { input, max_videos, output_root } => {
                assert_eq!(input, PathBuf::from("data_in/apc_ar.txt"));
                assert_eq!(max_videos, None);
                assert_eq!(output_root, None);
            }
            _ => panic!("expected run command"),
        }
    }

    #[test]
    fn test_run_overrides() {
        let args = Args::try_parse_from([
            "subvocab", "-v", "run", "--input", "lists/es_en.txt", "--max-videos", "2", "--output-root", "out",
        ])
        .unwrap();
        assert!(args.verbose);
        match args.command {
            Commands::Run { input, max_videos, output_root } => {
                assert_eq!(input, PathBuf::from("lists/es_en.txt"));
                assert_eq!(max_videos, Some(2));
                assert_eq!(output_root, Some(PathBuf::from("out")));
            }
            _ => panic!("expected run command"),
        }
    }
}
