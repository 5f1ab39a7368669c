use clap::Parser;
use kira_compound_usage::cli::{Cli, Commands};

const INPUTS: [&str; 8] = [
    "--compounds",
    "compounds.txt",
    "--annotations",
    "matrix.tsv",
    "--metadata",
    "metadata.tsv",
    "--reference",
    "ref",
];

#[test]
fn run_defaults_to_presence_mode() {
    let mut argv = vec!["kira-compound-usage", "run", "--out", "out"];
    argv.extend(INPUTS);
    let cli = Cli::parse_from(argv);
    match cli.command {
        Commands::Run(args) => {
            assert!(!args.count);
            assert!(!args.json);
            assert_eq!(args.inputs.reference.to_str(), Some("ref"));
        }
        _ => panic!("expected run command"),
    }
}

#[test]
fn run_count_flag_is_accepted() {
    let mut argv = vec!["kira-compound-usage", "run", "--out", "out", "--count", "--json"];
    argv.extend(INPUTS);
    let cli = Cli::parse_from(argv);
    match cli.command {
        Commands::Run(args) => {
            assert!(args.count);
            assert!(args.json);
        }
        _ => panic!("expected run command"),
    }
}

#[test]
fn run_requires_out() {
    let mut argv = vec!["kira-compound-usage", "run"];
    argv.extend(INPUTS);
    assert!(Cli::try_parse_from(argv).is_err());
}
