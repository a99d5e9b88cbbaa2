//! `corefx paths`: where everything lives, without creating anything.

use serde::Serialize;

use corefx_config::{HomeLayout, HomeState};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output::{self, FieldRow};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PathsView {
    home: String,
    config_file: String,
    xml_dir: String,
    mobility_dir: String,
    icon_dir: String,
    state: String,
}

impl PathsView {
    fn new(layout: &HomeLayout) -> Self {
        let show = |p: &std::path::Path| p.display().to_string();
        Self {
            home: show(layout.home()),
            config_file: show(layout.config_file()),
            xml_dir: show(layout.xml_dir()),
            mobility_dir: show(layout.mobility_dir()),
            icon_dir: show(layout.icon_dir()),
            state: format!("{:?}", HomeState::observe(layout)),
        }
    }
}

pub fn handle(layout: &HomeLayout, global: &GlobalOpts) -> Result<(), CliError> {
    let view = PathsView::new(layout);
    let out = output::render(
        global.output,
        &view,
        |v| {
            vec![
                FieldRow::new("home", v.home.clone()),
                FieldRow::new("config", v.config_file.clone()),
                FieldRow::new("xml", v.xml_dir.clone()),
                FieldRow::new("mobility", v.mobility_dir.clone()),
                FieldRow::new("icons", v.icon_dir.clone()),
                FieldRow::new("state", v.state.clone()),
            ]
        },
        |v| {
            vec![
                v.home.clone(),
                v.config_file.clone(),
                v.xml_dir.clone(),
                v.mobility_dir.clone(),
                v.icon_dir.clone(),
            ]
        },
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
