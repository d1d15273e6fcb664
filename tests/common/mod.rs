#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use scss_color_vars::{extract_variables, substitute_colors};

/// Extract from `scss`, substitute into `input`, and compare.
pub fn assert_substitutes(scss: &str, input: &str, expected: &str) {
    let table = extract_variables(scss);
    let output = substitute_colors(input, &table);
    assert_eq!(
        output, expected,
        "substitution mismatch\n--- variables ---\n{scss}\n--- input ---\n{input}"
    );
}

/// Temporary workspace with a `.vscode` directory.
pub struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join(".vscode")).expect("create .vscode");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` at `relative`, creating parent directories.
    pub fn file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(&path, content).expect("write file");
        path
    }

    pub fn settings(&self, json: &str) -> PathBuf {
        self.file(".vscode/settings.json", json)
    }
}
