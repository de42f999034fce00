//! Test utilities for code generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{fs, path::Path, process::Command};

use eyre::Result;

/// Error from compile checking.
#[derive(Debug)]
pub struct CompileError {
    pub message: String,
    pub output: String,
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n\nOutput:\n{}", self.message, self.output)
    }
}

impl std::error::Error for CompileError {}

/// Trait for verifying generated code compiles.
pub trait CompileChecker {
    /// Check that the code in the given directory compiles.
    fn check(&self, dir: &Path) -> Result<(), CompileError>;
}

/// C# compile checker using the .NET SDK.
///
/// The directory must contain a project file; see [`write_console_project`].
pub struct DotnetChecker;

impl DotnetChecker {
    /// Build and run the project, returning its standard output.
    pub fn run(&self, dir: &Path) -> Result<String, CompileError> {
        let stdout = dotnet(dir, &["run", "--nologo"])?;
        Ok(stdout)
    }
}

impl CompileChecker for DotnetChecker {
    fn check(&self, dir: &Path) -> Result<(), CompileError> {
        dotnet(dir, &["build", "--nologo"]).map(|_| ())
    }
}

fn dotnet(dir: &Path, args: &[&str]) -> Result<String, CompileError> {
    let output = Command::new("dotnet")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| CompileError {
            message: format!("Failed to run dotnet {}: {}", args.join(" "), e),
            output: String::new(),
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    if output.status.success() {
        Ok(stdout)
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(CompileError {
            message: format!("dotnet {} failed", args.join(" ")),
            output: format!("stderr:\n{}\n\nstdout:\n{}", stderr, stdout),
        })
    }
}

/// Write a minimal console project (`Check.csproj` + `Program.cs`) into `dir`.
pub fn write_console_project(dir: &Path, program: &str) -> Result<()> {
    fs::write(
        dir.join("Check.csproj"),
        r#"<Project Sdk="Microsoft.NET.Sdk">
  <PropertyGroup>
    <OutputType>Exe</OutputType>
    <TargetFramework>net8.0</TargetFramework>
    <Nullable>enable</Nullable>
    <ImplicitUsings>enable</ImplicitUsings>
  </PropertyGroup>
</Project>
"#,
    )?;
    fs::write(dir.join("Program.cs"), program)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_project_written() {
        let dir = tempfile::TempDir::new().unwrap();
        write_console_project(dir.path(), "return 0;").unwrap();
        assert!(dir.path().join("Check.csproj").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("Program.cs")).unwrap(),
            "return 0;"
        );
    }
}
