use std::path::{Path, PathBuf};

pub struct Config {
    coverage_file: PathBuf,
    output_file: Option<PathBuf>,
}

impl Config {
    pub fn new(coverage_file: PathBuf, output_file: Option<PathBuf>) -> Self {
        Self {
            coverage_file,
            output_file,
        }
    }

    pub fn coverage_file(&self) -> &Path {
        &self.coverage_file
    }

    pub fn output_file(&self) -> Option<&Path> {
        self.output_file.as_deref()
    }
}
