use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use bpmn_cacao::prelude::*;

/// Convert BPMN 2.0 process diagrams into CACAO security playbooks
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// BPMN XML files to convert
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory the generated playbooks are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// CACAO spec version to emit (1.1 or 2.0)
    #[arg(long, default_value = "1.1")]
    cacao_spec: SpecVersion,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if !cli.output_dir.is_dir() {
        error!("{} is not a directory", cli.output_dir.display());
        return ExitCode::FAILURE;
    }

    // A failing input aborts that document only; the batch keeps going.
    let converter = Converter::new(cli.cacao_spec);
    let mut failures = 0usize;
    for input in &cli.inputs {
        if let Err(err) = convert_file(&converter, input, &cli.output_dir) {
            error!("{}: {}", input.display(), err);
            failures += 1;
        }
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn convert_file(
    converter: &Converter,
    input: &Path,
    output_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("processing {}", input.display());

    let xml = fs::read_to_string(input)?;
    let definitions = read_bpmn(&xml)?;
    let playbook = converter.convert(&definitions)?;

    let file_name = input
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("playbook");
    let output_path = output_dir.join(format!("{}.cacao.json", file_name));
    fs::write(&output_path, to_pretty_json(&playbook)?)?;

    info!("wrote {}", output_path.display());
    Ok(())
}

/// Serializes with four-space indentation.
fn to_pretty_json(playbook: &Playbook) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    serde::Serialize::serialize(playbook, &mut serializer)?;
    Ok(String::from_utf8(buf).expect("serde_json emits valid UTF-8"))
}
