//! Shared testing utilities for sarabun CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Path to the isolated working directory.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `sarabun` binary.
    ///
    /// Mock mode is switched in so no test ever reaches the real API.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("sarabun").expect("Failed to locate sarabun binary");
        cmd.current_dir(self.work_dir()).env("SARABUN_MOCK", "1").env_remove("GEMINI_API_KEY");
        cmd
    }

    /// Write a request file into the working directory and return its path.
    pub fn write_request(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, content).expect("Failed to write request file");
        path
    }

    /// A complete single-item disposal request.
    pub fn disposal_request(&self) -> PathBuf {
        self.write_request(
            "request.toml",
            r#"
requester_name = "สมชาย ใจดี"
department = "แผนก IT Support"
position = "เจ้าหน้าที่ปฏิบัติการ"
request_type = "disposal"
reason = "ทรัพย์สินชำรุดเสียหาย ไม่สามารถซ่อมแซมได้"

[[items]]
asset_type = "คอมพิวเตอร์และอุปกรณ์"
main_asset_id = "110002345"
sub_asset_id = "0001"
asset_name = "Dell Latitude 7420"
"#,
        )
    }
}
