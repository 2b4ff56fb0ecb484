//! Go source rendering.
//!
//! Produces the lookup table `apiMap`, the `ApiNode` tree literal `api`, and
//! optionally one argument struct per endpoint.

use super::{TreeRenderer, escape_go_string, render};
use crate::compile::CompiledApi;
use crate::config::CompileOptions;
use crate::model::{LeafRecord, ParamDescriptor};
use crate::naming::{map_param_type, to_pascal_case};
use std::collections::HashSet;
use tracing::warn;

const INDENT: &str = "    ";

/// Renders the `ApiNode` tree literal.
///
/// A node at depth `d` starts two indent units deeper than its parent: one
/// for the parent's `Children` field, one for the list element.
#[derive(Debug, Default)]
pub struct GoRenderer {
    out: String,
}

impl GoRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_output(self) -> String {
        self.out
    }

    fn open(&mut self, label: &str, depth: usize) -> String {
        let pre = node_indent(depth);
        if depth == 0 {
            self.out.push_str("var api = &ApiNode{\n");
        } else {
            self.out.push_str(&format!("{pre}{{\n"));
        }
        self.out.push_str(&format!(
            "{pre}{INDENT}Label: \"{}\",\n",
            escape_go_string(label)
        ));
        pre
    }

    fn close(&mut self, pre: &str, depth: usize) {
        if depth == 0 {
            self.out.push_str("}\n");
        } else {
            self.out.push_str(&format!("{pre}}},\n"));
        }
    }
}

impl TreeRenderer for GoRenderer {
    fn enter_branch(&mut self, label: &str, depth: usize) {
        let pre = self.open(label, depth);
        self.out
            .push_str(&format!("{pre}{INDENT}Children: []*ApiNode{{\n"));
    }

    fn leaf(&mut self, label: &str, record: &LeafRecord, depth: usize) {
        let pre = self.open(label, depth);
        self.out.push_str(&format!(
            "{pre}{INDENT}Url: \"{}\",\n",
            escape_go_string(&record.url)
        ));
        self.out
            .push_str(&format!("{pre}{INDENT}Args: map[string]Arg{{\n"));
        for param in unique_params(&record.params) {
            let name = escape_go_string(&param.name);
            self.out.push_str(&format!(
                "{pre}{INDENT}{INDENT}\"{name}\": {{\"{name}\", \"{}\", \"{}\", \"{}\"}},\n",
                escape_go_string(&param.ty),
                escape_go_string(&param.desc),
                escape_go_string(param.defa.as_deref().unwrap_or_default()),
            ));
        }
        self.out.push_str(&format!("{pre}{INDENT}}},\n"));
        self.close(&pre, depth);
    }

    fn exit_branch(&mut self, _label: &str, depth: usize) {
        let pre = node_indent(depth);
        self.out.push_str(&format!("{pre}{INDENT}}},\n"));
        self.close(&pre, depth);
    }
}

fn node_indent(depth: usize) -> String {
    INDENT.repeat(depth * 2)
}

/// Render the complete Go source file.
pub fn render_go(api: &CompiledApi, options: &CompileOptions) -> String {
    let mut code = String::new();

    code.push_str(&format!(
        "// Code generated by {}. DO NOT EDIT.\n\n",
        options.generator
    ));
    code.push_str(&format!("package {}\n\n", options.package));

    code.push_str("var apiMap = map[string]string{\n");
    for (short_path, identifier) in api.lookup.iter() {
        code.push_str(&format!(
            "{INDENT}\"{}\": \"{}\",\n",
            escape_go_string(short_path),
            escape_go_string(identifier)
        ));
    }
    code.push_str("}\n\n");

    let mut renderer = GoRenderer::new();
    render(&api.trie, &mut renderer);
    code.push_str(&renderer.into_output());

    if options.emit_arg_structs {
        let mut declared: HashSet<&str> = HashSet::new();
        for record in api.endpoints() {
            if record.opid.is_empty() {
                warn!(url = %record.url, "no identifier, skipping argument struct");
                continue;
            }
            if !declared.insert(record.opid.as_str()) {
                warn!(identifier = %record.opid, url = %record.url, "argument struct already declared");
                continue;
            }
            code.push('\n');
            code.push_str(&arg_struct(record));
        }
    }

    code
}

/// Argument struct for one endpoint, one tagged field per parameter plus `Path`.
fn arg_struct(record: &LeafRecord) -> String {
    let mut code = format!("type {} struct {{\n", record.opid);

    for param in unique_params(&record.params) {
        let mut help = struct_tag_value(&param.desc);
        if let Some(defa) = &param.defa {
            help.push_str(&format!(" Default: {}", struct_tag_value(defa)));
        }
        code.push_str(&format!(
            "{INDENT}{} {} `arg:\"\" name:\"{}\" optional:\"\" help:\"{help}\"`\n",
            to_pascal_case(&param.name),
            map_param_type(&param.ty),
            struct_tag_value(&param.name),
        ));
    }

    code.push_str(&format!(
        "{INDENT}Path string `arg:\"\" optional:\"\" name:\"path\" default:\"{}\"`\n",
        struct_tag_value(&record.url)
    ));
    code.push_str("}\n");
    code
}

/// Parameters with a repeated name collapse to their last occurrence.
fn unique_params(params: &[ParamDescriptor]) -> impl Iterator<Item = &ParamDescriptor> {
    params
        .iter()
        .enumerate()
        .filter(|(i, param)| !params[i + 1..].iter().any(|later| later.name == param.name))
        .map(|(_, param)| param)
}

/// Struct tags live in a raw string, so backticks cannot appear at all.
fn struct_tag_value(s: &str) -> String {
    escape_go_string(&s.replace('`', "'"))
}
