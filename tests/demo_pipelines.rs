use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use pipedag::errors::PipedagError;
use pipedag::{ValidationResult, Validator};
use tempfile::NamedTempFile;

type TestResult = Result<(), Box<dyn Error>>;

fn check_demo(name: &str) -> Result<ValidationResult, Box<dyn Error>> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name);
    let body = serde_json::from_str(&fs::read_to_string(path)?)?;
    Ok(Validator::default().validate_json(body))
}

#[test]
fn chain_demo_is_a_dag() -> TestResult {
    let r = check_demo("chain.json")?;
    assert_eq!((r.num_nodes, r.num_edges, r.is_dag), (3, 2, true));
    Ok(())
}

#[test]
fn fan_in_demo_is_a_dag() -> TestResult {
    let r = check_demo("fan-in.json")?;
    assert_eq!((r.num_nodes, r.num_edges, r.is_dag), (5, 5, true));
    Ok(())
}

#[test]
fn feedback_loop_demo_is_not_a_dag() -> TestResult {
    let r = check_demo("feedback-loop.json")?;
    assert_eq!((r.num_nodes, r.num_edges, r.is_dag), (4, 4, false));
    Ok(())
}

#[test]
fn dangling_edge_demo_is_not_a_dag() -> TestResult {
    let r = check_demo("dangling-edge.json")?;
    assert_eq!((r.num_nodes, r.num_edges, r.is_dag), (2, 2, false));
    Ok(())
}

#[test]
fn check_file_validates_demo() -> TestResult {
    let cfg = pipedag::config::resolve(None)?;
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/chain.json");
    let r = pipedag::check_file(&cfg, &path)?;
    assert_eq!((r.num_nodes, r.num_edges, r.is_dag), (3, 2, true));
    Ok(())
}

#[test]
fn check_file_reports_non_json_as_json_error() -> TestResult {
    let mut file = NamedTempFile::new()?;
    write!(file, "nodes: [a, b]")?;

    let cfg = pipedag::config::resolve(None)?;
    match pipedag::check_file(&cfg, file.path()) {
        Err(PipedagError::JsonError(_)) => Ok(()),
        other => panic!("Expected JsonError, got: {:?}", other),
    }
}

#[test]
fn check_file_reports_missing_file_as_io_error() -> TestResult {
    let cfg = pipedag::config::resolve(None)?;
    let missing = PathBuf::from("demos/does-not-exist.json");
    assert!(matches!(
        pipedag::check_file(&cfg, &missing),
        Err(PipedagError::IoError(_))
    ));
    Ok(())
}
