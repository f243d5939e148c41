// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides scratch directories and template/variable file builders

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn template_file(&self, name: &str, content: &str) -> PathBuf {
        self.write_file(&format!("{}.tmpl", name), content)
    }

    pub fn json_file(&self, name: &str, content: &str) -> PathBuf {
        self.write_file(&format!("{}.json", name), content)
    }

    pub fn yaml_file(&self, name: &str, content: &str) -> PathBuf {
        self.write_file(&format!("{}.yaml", name), content)
    }

    pub fn output_file(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(format!("{}.out", name))
    }

    fn write_file(&self, file_name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(file_name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }
}
