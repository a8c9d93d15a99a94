use std::path::Path;

use color_eyre::eyre::{self, WrapErr};
use env_logger::Env;
use log::{info, LevelFilter};

pub mod batch;
pub mod convert;
pub mod opt;

use batch::BatchError;
use opt::{Input, Options};

/// Set up CLI
pub fn init<T: clap::Parser>() -> color_eyre::Result<T> {
    color_eyre::install()?;
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp(None)
        .parse_env(Env::new().filter("BINPIX_LOG"))
        .init();
    let args = T::parse();
    Ok(args)
}

fn prepare_output(out: &Path) -> eyre::Result<()> {
    if !out.is_dir() {
        std::fs::create_dir_all(out).wrap_err_with(|| {
            format!("Failed to create output folder `{}`", out.display())
        })?;
        info!("Created output folder '{}'", out.display());
    }
    Ok(())
}

/// Run the conversion selected by `opt`
pub fn run(opt: &Options) -> eyre::Result<()> {
    let direction = opt.direction();
    let layout = opt.layout;
    prepare_output(&opt.output)?;

    let folder = match opt.input() {
        Input::Single(path) => {
            direction.convert(path, &opt.output, layout)?;
            return Ok(());
        }
        Input::Folder(folder) => folder,
    };
    let summary = batch::convert_folder(direction, folder, &opt.output, layout)?;
    info!(
        "Converted {} of {} files in '{}'",
        summary.converted,
        summary.total(),
        folder.display()
    );
    if summary.failed.is_empty() {
        Ok(())
    } else {
        Err(BatchError::from(summary).into())
    }
}
