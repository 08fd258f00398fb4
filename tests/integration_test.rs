use std::fs;
use std::io::Cursor;

use anyhow::Result;
use clap::Parser;
use tempfile::TempDir;
use zyda_cz::cli::commit::CommitCommand;
use zyda_cz::cli::Commands;
use zyda_cz::grammar::{
    compose, match_message, Answers, Match, Prefix, RawAnswers, TypeTag, ZydaConvention,
};
use zyda_cz::Cli;

/// Answers file written to a temporary directory.
struct AnswersFixture {
    _temp_dir: TempDir,
    path: std::path::PathBuf,
}

impl AnswersFixture {
    fn new(yaml: &str) -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().join("answers.yaml");
        fs::write(&path, yaml)?;
        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }
}

#[test]
fn interactive_flow_produces_composed_message() -> Result<()> {
    let cmd = CommitCommand { output: None };
    let mut reader = Cursor::new(
        b"b\npayment gateway\nretry on timeout.\nretries were\nmissing\n.\nn\nCloses #321\n".to_vec(),
    );
    let mut prompts = Vec::new();

    let message = cmd.run(true, &mut reader, &mut prompts)?;

    assert_eq!(
        message,
        "Bug/payment-gateway: retry on timeout\n\nretries were missing\n\nCloses #321"
    );
    let prompts = String::from_utf8(prompts)?;
    assert!(prompts.contains("Select the type of change you are committing"));
    assert!(prompts.contains("Is this a BREAKING CHANGE?"));
    Ok(())
}

#[test]
fn answers_file_matches_builder_output() -> Result<()> {
    let fixture = AnswersFixture::new(
        "prefix: Feature\nscope: user auth\nsubject: add login\nis_breaking_change: true\nfooter: see #42\n",
    )?;

    let from_file = RawAnswers::load_from_file(&fixture.path)?.into_answers()?;
    let from_builder = Answers::builder(Prefix::Feature)
        .scope("user auth")
        .subject("add login")
        .breaking(true)
        .footer("see #42")
        .build()?;

    assert_eq!(from_file, from_builder);
    assert_eq!(
        compose(&from_file),
        "Feature/user-auth: add login\n\nBREAKING CHANGE: see #42"
    );
    Ok(())
}

#[test]
fn composed_messages_are_not_recognised() -> Result<()> {
    // The composer and the recognition grammar use different vocabularies;
    // matching a composed message never recovers its subject.
    let cz = ZydaConvention::new();
    let answers = Answers::builder(Prefix::Fix)
        .scope("auth")
        .subject("handle null token")
        .build()?;

    let message = cz.message(&answers);
    assert_eq!(message, "Fix/auth: handle null token");
    assert_eq!(cz.process_commit(&message), Match::NotMatched);
    assert_eq!(cz.process_commit(&message).description_or_empty(), "");
    Ok(())
}

#[test]
fn conventional_messages_are_recognised() {
    let result = match_message("feat(auth)!: add login\n\nBREAKING CHANGE: tokens rotate");
    match result {
        Match::Matched {
            tag,
            scope,
            breaking,
            description,
        } => {
            assert_eq!(tag, TypeTag::Feat);
            assert_eq!(scope.as_deref(), Some("auth"));
            assert!(breaking);
            assert_eq!(description, "add login\n\nBREAKING CHANGE: tokens rotate");
        }
        Match::NotMatched => panic!("expected a match"),
    }
}

#[test]
fn cli_parses_every_command() {
    let cases: &[&[&str]] = &[
        &["zyda-cz", "commit"],
        &["zyda-cz", "commit", "--output", "msg.txt"],
        &["zyda-cz", "compose", "--prefix", "Fix", "--subject", "x"],
        &["zyda-cz", "check", "feat: add"],
        &["zyda-cz", "check", "--file", "msg.txt", "--first-line"],
        &["zyda-cz", "schema", "--pattern"],
        &["zyda-cz", "example"],
        &["zyda-cz", "info", "--file", "info.txt"],
        &["zyda-cz", "questions", "--format", "json"],
        &["zyda-cz", "help-all"],
    ];

    for args in cases {
        assert!(Cli::try_parse_from(*args).is_ok(), "failed to parse {args:?}");
    }
}

#[test]
fn check_command_exit_codes() -> Result<()> {
    let cli = Cli::try_parse_from(["zyda-cz", "check", "--quiet", "release: 2.0.0"])?;
    assert!(matches!(cli.command, Commands::Check(_)));
    assert_eq!(cli.execute()?, 0);

    let cli = Cli::try_parse_from(["zyda-cz", "check", "--quiet", "Release: 2.0.0"])?;
    assert_eq!(cli.execute()?, 1);
    Ok(())
}

#[test]
fn compose_command_rejects_blank_subject() -> Result<()> {
    let cli = Cli::try_parse_from(["zyda-cz", "compose", "--prefix", "Fix", "--subject", "  "])?;
    let err = cli.execute().unwrap_err();
    assert_eq!(err.root_cause().to_string(), "Subject is required.");
    Ok(())
}
