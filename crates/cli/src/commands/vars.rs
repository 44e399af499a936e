//! Vars command: list every recognised variable and its resolution policy.

use anyhow::Result;
use twin_config::catalog::{self, Requirement, VarKind};

use crate::formatters::{self, OutputFormat};

pub fn run(output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => println!("{}", formatters::to_json(&catalog::VARIABLES)?),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = catalog::VARIABLES
                .iter()
                .map(|spec| {
                    vec![
                        spec.name.to_string(),
                        kind_label(spec.kind).to_string(),
                        policy_label(spec.display_requirement()),
                    ]
                })
                .collect();
            print!("{}", formatters::table(&["NAME", "TYPE", "POLICY"], &rows));
        }
    }
    Ok(())
}

fn kind_label(kind: VarKind) -> &'static str {
    match kind {
        VarKind::String => "string",
        VarKind::Secret => "secret",
        VarKind::Bool => "bool",
        VarKind::Path => "path",
    }
}

fn policy_label(requirement: Requirement) -> String {
    match requirement {
        Requirement::Required => "required".to_string(),
        Requirement::AllowEmpty => "required, may be empty".to_string(),
        Requirement::Default(value) => format!("default: {value}"),
        Requirement::DefaultsTo(other) => format!("default: value of {other}"),
    }
}
