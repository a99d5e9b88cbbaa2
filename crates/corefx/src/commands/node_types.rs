//! `corefx node-types`: install the configured node types and list them.

use tabled::Tabled;

use corefx_config::{Bootstrap, NodeType, NodeTypeRegistry};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct NodeTypeRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Model")]
    model: String,
    #[tabled(rename = "Display")]
    display: String,
    #[tabled(rename = "Services")]
    services: String,
    #[tabled(rename = "Icon")]
    icon: String,
}

impl From<&NodeType> for NodeTypeRow {
    fn from(t: &NodeType) -> Self {
        Self {
            category: t.category.to_string(),
            model: t.model.clone(),
            display: t.display.clone(),
            services: t.services.join(", "),
            icon: t.icon.clone(),
        }
    }
}

pub fn handle(bootstrap: &Bootstrap, global: &GlobalOpts) -> Result<(), CliError> {
    let mut registry = NodeTypeRegistry::new();
    super::load(bootstrap, global)?.install(&mut registry);

    let types: Vec<&NodeType> = registry.iter().collect();
    let out = output::render(
        global.output,
        &types,
        |types| types.iter().map(|t| NodeTypeRow::from(*t)).collect(),
        |types| types.iter().map(|t| t.model.clone()).collect(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
