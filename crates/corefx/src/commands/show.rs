//! `corefx show`: the loaded configuration.

use corefx_config::{Bootstrap, Configuration};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output::{self, FieldRow};

pub fn handle(bootstrap: &Bootstrap, global: &GlobalOpts) -> Result<(), CliError> {
    let configuration = super::load(bootstrap, global)?.configuration;
    let out = output::render(global.output, &configuration, detail_rows, plain_lines)?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn detail_rows(cfg: &Configuration) -> Vec<FieldRow> {
    let models: Vec<_> = cfg
        .node_type_configs
        .iter()
        .map(|n| n.model.as_str())
        .collect();
    vec![
        FieldRow::new("xmlPath", cfg.xml_path.display().to_string()),
        FieldRow::new("mobilityPath", cfg.mobility_path.display().to_string()),
        FieldRow::new("iconPath", cfg.icon_path.display().to_string()),
        FieldRow::new("coreRest", cfg.core_rest.as_deref().unwrap_or("-")),
        FieldRow::new("nodeTypes", models.join(", ")),
    ]
}

fn plain_lines(cfg: &Configuration) -> Vec<String> {
    vec![
        format!("xmlPath={}", cfg.xml_path.display()),
        format!("mobilityPath={}", cfg.mobility_path.display()),
        format!("iconPath={}", cfg.icon_path.display()),
        format!("coreRest={}", cfg.core_rest.as_deref().unwrap_or_default()),
    ]
}
