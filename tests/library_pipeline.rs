// tests/library_pipeline.rs

mod common;

use common::create_file;
use slncat::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_stages_compose_like_run() -> anyhow::Result<()> {
    let root = tempdir()?;
    create_file(root.path(), "Shop.sln", "")?;
    create_file(root.path(), "Shop.Core/Shop.Core.csproj", "")?;
    create_file(root.path(), "Shop.Core/Cart.cs", "class Cart {}\n")?;
    create_file(root.path(), "Shop.Core/Migrations/Init.cs", "class Init {}\n")?;
    create_file(root.path(), "Shop.Core.Tests/Shop.Core.Tests.csproj", "")?;

    let token = CancellationToken::new();
    let projects = discover_projects(root.path(), &token)?;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "Shop.Core");

    let settings = Settings::new(root.path());
    let candidates: Vec<_> = [
        root.path().join("Shop.Core/Cart.cs"),
        root.path().join("Shop.Core/Migrations/Init.cs"),
    ]
    .into();
    let batch = select_files(&projects[0], "cs", &candidates, &settings);
    assert_eq!(batch.files.len(), 1);
    assert_eq!(batch.output_file_name(), "Shop.Core.cs.txt");

    let processed = process_file(&batch.files[0])?;
    assert_eq!(processed.content, "class Cart {}\n");
    assert_eq!(processed.tokens, 5);

    assert_eq!(solution_base_name(root.path())?, "Shop");
    Ok(())
}

#[test]
fn test_run_with_config_builder() -> anyhow::Result<()> {
    let root = tempdir()?;
    let out = tempdir()?;
    create_file(root.path(), "Api/Api.csproj", "")?;
    create_file(root.path(), "Api/Program.cs", "var app = 1;\n")?;
    create_file(root.path(), "Api/Skip/Hidden.cs", "class Hidden {}\n")?;

    let mut settings = Settings::new(root.path());
    settings.ignore_patterns = vec!["API/skip".to_string()];
    let config = ConfigBuilder::new()
        .settings(settings)
        .output_dir(out.path())
        .build()?;

    let mut progress = Vec::new();
    let report = run(&config, &CancellationToken::new(), &mut progress)?;

    // "var app = 1;\n" is 13 chars -> 4.
    assert_eq!(report.total_tokens, 4);
    assert_eq!(report.batches.len(), 1);
    assert_eq!(report.batches[0].files, 1);
    let dump = fs::read_to_string(out.path().join("Api.cs.txt"))?;
    assert!(!dump.contains("Hidden"));
    Ok(())
}

#[test]
fn test_run_without_projects() -> anyhow::Result<()> {
    let root = tempdir()?;
    let out = tempdir()?;
    create_file(root.path(), "scripts/tool.cs", "class Tool {}\n")?;

    let config = ConfigBuilder::new()
        .settings(Settings::new(root.path()))
        .output_dir(out.path())
        .dry_run(true)
        .build()?;
    let mut progress = Vec::new();
    let report = run(&config, &CancellationToken::new(), &mut progress)?;

    assert_eq!(report.total_tokens, 0);
    assert_eq!(
        report.sentinel_path,
        out.path().join("Solution.0_Tokens.txt")
    );
    assert_eq!(
        String::from_utf8(progress)?,
        "Would create token count file: Solution.0_Tokens.txt\n"
    );
    Ok(())
}

#[test]
fn test_load_settings_from_file() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("appsettings.json");
    fs::write(
        &path,
        r#"{ "SolutionFolder": "C:/src/Shop", "IgnoreFolders": ["Shop.Web/wwwroot"] }"#,
    )?;

    let settings = load_settings(&path)?;
    assert_eq!(settings.root_path.to_str(), Some("C:/src/Shop"));
    assert_eq!(settings.ignore_patterns, vec!["Shop.Web/wwwroot".to_string()]);
    Ok(())
}
