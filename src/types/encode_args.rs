use anyhow::{Result, anyhow};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Stitches PNG and JPEG files found under directories into an animated GIF",
    override_usage = "gifweave [OPTIONS] <IN>... <OUT>"
)]
pub struct EncodeArgs {
    /// The delay between frames (in 100ths of a second)
    #[arg(short, long, default_value_t = 25)]
    pub delay: u16,

    /// Input directories followed by the output GIF path
    #[arg(value_name = "PATHS", required = true, num_args = 2..)]
    pub paths: Vec<PathBuf>,
}

impl EncodeArgs {
    /// Splits the positionals into input roots and the output path.
    pub fn split_paths(&self) -> Result<(&[PathBuf], &Path)> {
        match self.paths.split_last() {
            Some((output, inputs)) if !inputs.is_empty() => Ok((inputs, output.as_path())),
            _ => Err(anyhow!("Expected at least one input path and an output path")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_positional_is_output() {
        let args = EncodeArgs::try_parse_from(["gifweave", "a", "b", "out.gif"]).unwrap();
        let (inputs, output) = args.split_paths().unwrap();
        assert_eq!(inputs, [PathBuf::from("a"), PathBuf::from("b")]);
        assert_eq!(output, Path::new("out.gif"));
        assert_eq!(args.delay, 25);
    }

    #[test]
    fn delay_accepts_equals_form() {
        let args = EncodeArgs::try_parse_from(["gifweave", "-d=10", "in", "out.gif"]).unwrap();
        assert_eq!(args.delay, 10);
        let args = EncodeArgs::try_parse_from(["gifweave", "--delay", "7", "in", "out.gif"]).unwrap();
        assert_eq!(args.delay, 7);
    }

    #[test]
    fn rejects_missing_output() {
        assert!(EncodeArgs::try_parse_from(["gifweave", "in"]).is_err());
        assert!(EncodeArgs::try_parse_from(["gifweave"]).is_err());
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(EncodeArgs::try_parse_from(["gifweave", "-x", "in", "out.gif"]).is_err());
    }

    #[test]
    fn rejects_non_numeric_delay() {
        assert!(EncodeArgs::try_parse_from(["gifweave", "-d", "fast", "in", "out.gif"]).is_err());
    }
}
