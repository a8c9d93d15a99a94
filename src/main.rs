//! # binpix
//!
//! Convert files to monochrome pixel images and back.

use binpix::cli::{self, opt::Options};
use color_eyre::eyre;

fn main() -> eyre::Result<()> {
    let opt: Options = cli::init()?;
    cli::run(&opt)
}
