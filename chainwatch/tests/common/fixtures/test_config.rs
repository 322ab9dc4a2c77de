//! Test configuration builder for writing config directories

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Builder for a config directory with main.toml and chain files
pub struct TestConfigBuilder {
    temp_dir: TempDir,
    main_toml: String,
    chain_files: Vec<(String, String)>,
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            temp_dir,
            main_toml: String::new(),
            chain_files: Vec::new(),
        }
    }

    pub fn with_main(mut self, main_toml: &str) -> Self {
        self.main_toml = main_toml.to_string();
        self
    }

    pub fn with_chain_file(mut self, name: &str, contents: &str) -> Self {
        self.chain_files
            .push((format!("{}.toml", name), contents.to_string()));
        self
    }

    pub fn build(self) -> TestConfig {
        let config_dir = self.temp_dir.path().join("config");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        fs::write(config_dir.join("main.toml"), &self.main_toml)
            .expect("Failed to write main.toml");
        for (filename, contents) in &self.chain_files {
            fs::write(config_dir.join(filename), contents).expect("Failed to write chain config");
        }

        TestConfig {
            _temp_dir: self.temp_dir,
            config_dir,
        }
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Written config directory; removed when dropped
pub struct TestConfig {
    _temp_dir: TempDir,
    pub config_dir: PathBuf,
}

impl TestConfig {
    pub fn dir_string(&self) -> String {
        self.config_dir.display().to_string()
    }
}
