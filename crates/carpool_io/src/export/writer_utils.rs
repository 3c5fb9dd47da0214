use std::fs::File;
use std::path::Path;

use crate::error::Result;

pub(crate) fn create_output_file(path: impl AsRef<Path>) -> Result<File> {
    Ok(File::create(path)?)
}
