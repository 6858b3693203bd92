use std::path::PathBuf;

use clap::Parser;

use crate::commands::inject;
use crate::CliResult;

/// Combine a PNG or JPEG image and a PDF document into one polyglot file.
///
/// Run without arguments for interactive mode.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Image file (JPG or PNG), used readonly.
    #[arg(
        short = 'i',
        long = "image",
        value_name = "image file",
        alias = "png",
        alias = "jpg",
        required = true
    )]
    pub image: PathBuf,

    /// PDF document appended behind the image data, used readonly.
    #[arg(short = 'p', long = "pdf", value_name = "pdf file", required = true)]
    pub pdf: PathBuf,

    /// Path for the output file. A bare file name is placed into `polyglot_results/`.
    #[arg(short = 'o', long = "output", value_name = "output file")]
    pub output: Option<PathBuf>,
}

impl CliArgs {
    pub fn run(self) -> CliResult<()> {
        inject::run(&self.image, &self.pdf, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_legacy_image_flags() {
        let args = CliArgs::try_parse_from(["polyglot", "--png", "a.png", "--pdf", "b.pdf"]).unwrap();
        assert_eq!(args.image, PathBuf::from("a.png"));
        assert_eq!(args.output, None);

        let args = CliArgs::try_parse_from([
            "polyglot", "--jpg", "a.jpg", "--pdf", "b.pdf", "-o", "out.jpg",
        ])
        .unwrap();
        assert_eq!(args.image, PathBuf::from("a.jpg"));
        assert_eq!(args.output, Some(PathBuf::from("out.jpg")));
    }

    #[test]
    fn should_require_both_inputs() {
        assert!(CliArgs::try_parse_from(["polyglot", "--image", "a.png"]).is_err());
        assert!(CliArgs::try_parse_from(["polyglot", "--pdf", "b.pdf"]).is_err());
    }
}
