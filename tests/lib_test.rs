//! Library integration tests.

use envelope::EnvelopeError;

#[test]
fn error_types_are_public() {
    let err = EnvelopeError::EnvironmentNotFound {
        name: "test".into(),
        probed: "/tmp/env/test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> envelope::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use envelope::cli::{Cli, Commands};

    // Actually test parsing with parse_from
    let cli = Cli::parse_from(["envelope", "get", "development", "--json"]);
    assert!(cli.command.is_some());

    if let Some(Commands::Get(args)) = cli.command {
        assert_eq!(args.name, "development");
        assert!(args.json);
    } else {
        panic!("Expected Get command");
    }
}
