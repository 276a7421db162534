//! Output generation for the commodore CLI application

use serde::Serialize;
use std::path::Path;
use tinytemplate::TinyTemplate;
use tracing::debug;

use commodore::language::CommandTree;

static SUMMARY: &'static str = r#"{filename}: command '{root}' with {count} node{{ if plural }}s{{ endif }}, {depth} level{{ if deep }}s{{ endif }} deep
{{ for path in paths }}    {path}
{{ endfor }}"#;

#[derive(Serialize)]
struct Context {
    filename: String,
    root: String,
    count: usize,
    plural: bool,
    depth: usize,
    deep: bool,
    paths: Vec<String>,
}

/// Describe a successfully read tree: its root, its size, and every usage
/// path it accepts.
pub fn summary(filename: &Path, tree: &CommandTree) -> Result<String, tinytemplate::error::Error> {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("summary", SUMMARY)?;

    let context = Context {
        filename: filename
            .to_string_lossy()
            .to_string(),
        root: tree
            .root()
            .name()
            .to_string(),
        count: tree.count(),
        plural: tree.count() != 1,
        depth: tree.depth(),
        deep: tree.depth() != 1,
        paths: tree.paths(),
    };

    debug!("Rendering summary of {} paths", context.paths.len());

    tt.render("summary", &context)
}
