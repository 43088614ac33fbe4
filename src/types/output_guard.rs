use std::{fs, path::PathBuf};

/// Removes the output file on drop unless the write was committed.
pub struct OutputGuard {
    path: PathBuf,
    committed: bool,
}

impl OutputGuard {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            committed: false,
        }
    }

    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for OutputGuard {
    fn drop(&mut self) {
        if !self.committed && self.path.exists() {
            log::warn!("Removing incomplete output {:?}", self.path);
            let _ = fs::remove_file(&self.path);
        }
    }
}
