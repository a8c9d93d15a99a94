use std::path::{Path, PathBuf};

use bitgrid::Layout;
use clap::{ArgGroup, Parser};

use super::convert::Direction;

/// Convert files to binary pixel images and vice versa.
#[derive(Debug, Parser)]
#[clap(name = "binpix", version)]
#[clap(group(
    ArgGroup::new("input")
        .required(true)
        .args(&["file", "folder", "image", "imagef"])
))]
pub struct Options {
    /// Path to the file to convert to an image
    #[clap(long, value_name = "PATH", conflicts_with = "decode")]
    pub file: Option<PathBuf>,
    /// Path to the folder containing files to convert to images
    #[clap(long, value_name = "DIR", conflicts_with = "decode")]
    pub folder: Option<PathBuf>,
    /// Path to the image to convert to a file
    #[clap(long, value_name = "PATH", requires = "decode")]
    pub image: Option<PathBuf>,
    /// Path to the folder containing images to convert to files
    #[clap(long, value_name = "DIR", requires = "decode")]
    pub imagef: Option<PathBuf>,
    /// Path to the output directory, created if missing
    #[clap(long, short, value_name = "DIR")]
    pub output: PathBuf,
    /// Decode image(s) to file(s)
    #[clap(long)]
    pub decode: bool,
    /// Arrangement of the bits in the image. Valid choices are:
    ///
    /// "raw" (data bits only) and "framed" (byte count in front of the data,
    /// keeps trailing zero bytes). Images must be decoded with the layout they
    /// were written with.
    #[clap(default_value_t, long, short = 'L', value_name = "LAYOUT")]
    pub layout: Layout,
}

/// The input selected on the command line
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    /// A single file or image
    Single(&'a Path),
    /// A folder of files or images
    Folder(&'a Path),
}

impl Options {
    /// Whether to encode or decode
    pub fn direction(&self) -> Direction {
        if self.decode {
            Direction::Decode
        } else {
            Direction::Encode
        }
    }

    /// The input to convert
    ///
    /// The required `input` group admits exactly one selector, and the
    /// `decode` rules tie it to the direction, so parsed options always have
    /// one input.
    pub fn input(&self) -> Input<'_> {
        let (single, folder) = match self.direction() {
            Direction::Encode => (&self.file, &self.folder),
            Direction::Decode => (&self.image, &self.imagef),
        };
        match (single, folder) {
            (Some(path), _) => Input::Single(path),
            (None, Some(dir)) => Input::Folder(dir),
            (None, None) => unreachable!("clap enforces one input selector"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use bitgrid::Layout;
    use clap::{error::ErrorKind, Parser};

    use super::{Input, Options};
    use crate::cli::convert::Direction;

    #[test]
    fn test_encode_file() {
        let opt = Options::try_parse_from(["binpix", "--file", "a.bin", "-o", "out"]).unwrap();
        assert_eq!(opt.direction(), Direction::Encode);
        assert_eq!(opt.layout, Layout::Raw);
        assert_eq!(opt.input(), Input::Single(Path::new("a.bin")));
        assert_eq!(opt.output, Path::new("out"));
    }

    #[test]
    fn test_decode_folder() {
        let opt = Options::try_parse_from([
            "binpix", "--decode", "--imagef", "imgs", "--output", "out", "--layout", "framed",
        ])
        .unwrap();
        assert_eq!(opt.direction(), Direction::Decode);
        assert_eq!(opt.layout, Layout::Framed);
        assert_eq!(opt.input(), Input::Folder(Path::new("imgs")));
    }

    #[test]
    fn test_every_selector() {
        let cases = [
            (&["--file", "a"][..], Input::Single(Path::new("a"))),
            (&["--folder", "a"][..], Input::Folder(Path::new("a"))),
            (&["--decode", "--image", "a"][..], Input::Single(Path::new("a"))),
            (&["--decode", "--imagef", "a"][..], Input::Folder(Path::new("a"))),
        ];
        for (args, input) in cases {
            let argv = ["binpix", "-o", "out"].iter().chain(args);
            let opt = Options::try_parse_from(argv).unwrap();
            assert_eq!(opt.input(), input, "{:?}", args);
        }
    }

    #[test]
    fn test_layout_option() {
        let opt = Options::try_parse_from(["binpix", "--file", "a", "-o", "out", "-L", "raw"])
            .unwrap();
        assert_eq!(opt.layout, Layout::Raw);

        let err = Options::try_parse_from(["binpix", "--file", "a", "-o", "out", "-L", "png"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("Use one of `raw` or `framed`"));
    }

    #[test]
    fn test_missing_input() {
        let err = Options::try_parse_from(["binpix", "--output", "out"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_missing_output() {
        let err = Options::try_parse_from(["binpix", "--file", "a.bin"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_exclusive_inputs() {
        let err =
            Options::try_parse_from(["binpix", "--file", "a", "--folder", "b", "-o", "out"])
                .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_mode_mismatch() {
        assert!(Options::try_parse_from(["binpix", "--image", "a.png", "-o", "out"]).is_err());
        assert!(
            Options::try_parse_from(["binpix", "--decode", "--file", "a", "-o", "out"]).is_err()
        );
    }
}
