use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_verb-sitemap"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("run CLI")
}

#[test]
fn cli_writes_single_sitemap() {
    let dir = tempfile::tempdir().expect("tempdir");
    let verbs = dir.path().join("verbs.tsv");
    std::fs::write(&verbs, "жазу\t0\nбару керек\t1\n").expect("write verbs");

    let output = run(&[
        "--host",
        "https://example.com",
        "--verbs",
        verbs.to_str().unwrap(),
        "--lastmod",
        "2024-03-15",
        "-o",
        dir.path().to_str().unwrap(),
        "--quiet",
    ]);
    assert!(
        output.status.success(),
        "cli exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    let xml = std::fs::read_to_string(dir.path().join("sitemap.xml")).expect("sitemap written");
    assert_eq!(xml.matches("<url>").count(), 4);
    assert!(xml.contains("<lastmod>2024-03-15</lastmod>"));
    assert!(xml.contains(
        "<loc>https://example.com/?verb=%D0%B1%D0%B0%D1%80%D1%83+%D0%BA%D0%B5%D1%80%D0%B5%D0%BA&amp;exception=true</loc>"
    ));
    assert!(xml.contains(r#"hreflang="kk" href="https://example.com/kk/?verb=%D0%B6%D0%B0%D0%B7%D1%83""#));
}

#[test]
fn cli_reports_json_summary_with_index() {
    let dir = tempfile::tempdir().expect("tempdir");
    let dict = dir.path().join("dict.jsonl");
    std::fs::write(
        &dict,
        concat!(
            r#"{"ru": ["писать"], "forms": [{"form": "жазу"}, {"form": "жазды"}, {"form": "жазады"}]}"#,
            "\n"
        ),
    )
    .expect("write dictionary");

    let output = run(&[
        "--host",
        "https://example.com/",
        "--dictionary",
        dict.to_str().unwrap(),
        "--batch-size",
        "2",
        "--lastmod",
        "2024-03-15",
        "-o",
        dir.path().to_str().unwrap(),
        "--json",
    ]);
    assert!(
        output.status.success(),
        "cli exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("json summary on stdout");
    assert_eq!(
        summary["sitemaps"],
        serde_json::json!(["sitemap0.xml", "sitemap1.xml", "sitemap2.xml"])
    );
    assert_eq!(summary["index"], "sitemap_index.xml");
    assert_eq!(summary["dictionary_urls"], 3);
    assert!(dir.path().join("sitemap_index.xml").exists());
}

#[test]
fn cli_fails_on_malformed_verb_row() {
    let dir = tempfile::tempdir().expect("tempdir");
    let verbs = dir.path().join("verbs.tsv");
    std::fs::write(&verbs, "жазу\t0\nкелу\tyes\n").expect("write verbs");

    let output = run(&[
        "--host",
        "https://example.com",
        "--verbs",
        verbs.to_str().unwrap(),
        "-o",
        dir.path().to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("malformed verb row"));
    assert!(!dir.path().join("sitemap.xml").exists());
}
