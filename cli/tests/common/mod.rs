#![allow(dead_code)]
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

pub fn clirk_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_clirk"));
    cmd.env_remove("LOGGING_LEVEL");
    cmd
}

/// Writes a collection document to a per-process temp file and returns its path.
pub fn write_collection(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "clirk_it_{}_{name}.json",
        std::process::id()
    ));
    fs::write(&path, content).expect("Failed to write collection fixture");
    path
}

/// A collection whose requests all point at `base_url`, mirroring a typical auth API export.
pub fn auth_collection(base_url: &str) -> String {
    serde_json::json!({
        "info": { "name": "Auth API", "schema": "https://schema.getpostman.com/json/collection/v2.1.0/collection.json" },
        "variable": [
            { "key": "HOST", "value": base_url },
            { "key": "USER", "value": "collection-user" }
        ],
        "item": [
            {
                "name": "Health",
                "request": { "method": "GET", "url": "{{HOST}}/health" }
            },
            {
                "name": "Auth",
                "item": [
                    {
                        "name": "Login",
                        "request": {
                            "method": "POST",
                            "header": [ { "key": "Content-Type", "value": "application/json" } ],
                            "url": { "raw": "{{HOST}}/login" },
                            "body": { "mode": "raw", "raw": "{\"user\":\"{{USER}}\"}" }
                        }
                    },
                    {
                        "name": "Me",
                        "request": {
                            "method": "GET",
                            "header": [ { "key": "Authorization", "value": "Bearer {{TOKEN}}" } ],
                            "url": "{{HOST}}/me"
                        }
                    },
                    {
                        "name": "Probe",
                        "request": {
                            "method": "GET",
                            "url": "{{HOST}}/probe",
                            "body": { "mode": "raw", "raw": "ignored {{USER}}" }
                        }
                    }
                ]
            }
        ]
    })
    .to_string()
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn parse_json(stdout: &str) -> Result<Value, String> {
    serde_json::from_str(stdout).map_err(|e| format!("Failed to parse JSON output: {e}\n{stdout}"))
}
