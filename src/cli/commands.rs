//! CLI command implementations.

use std::io::{self, Read, Write};
use std::path::Path;

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

use super::script::{parse_script, Command};

/// The sample session: two cities joined by a plane route.
pub const DEMO_SCRIPT: &str = "\
add-node Auckland
add-node Christchurch
add-edge Auckland Christchurch Plane
print
has-edge Auckland Christchurch Plane
";

/// What a query command produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    /// Result of `has-edge`.
    Flag(bool),
    /// Result of `edges-of-type`.
    Pairs(String),
    /// Result of `print`; newline-terminated lines.
    Rendering(String),
}

/// The outcome of running a script.
#[derive(Debug)]
pub struct ScriptRun {
    /// The graph after the last command.
    pub graph: Graph,
    /// Query outputs in script order.
    pub outputs: Vec<Output>,
    /// Commands the graph rejected, with their line numbers.
    pub rejected: Vec<(usize, GraphError)>,
}

impl ScriptRun {
    /// Write query outputs as plain text.
    pub fn write_text<W: Write>(&self, out: &mut W) -> GraphResult<()> {
        for output in &self.outputs {
            match output {
                Output::Flag(flag) => writeln!(out, "{}", flag)?,
                Output::Pairs(pairs) => writeln!(out, "{}", pairs)?,
                Output::Rendering(text) => write!(out, "{}", text)?,
            }
        }
        Ok(())
    }

    /// Query outputs plus the final graph as pretty JSON.
    pub fn to_json(&self) -> GraphResult<String> {
        let value = serde_json::json!({
            "results": self.outputs,
            "graph": self.graph.snapshot(),
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

/// Apply one command to the graph.
///
/// Mutations return `Ok(None)`; queries return their output. Invalid graph
/// input comes back as `Err` with the graph unchanged.
pub fn execute(graph: &mut Graph, command: &Command) -> GraphResult<Option<Output>> {
    let output = match command {
        Command::AddNode(name) => {
            graph.add_node(name)?;
            None
        }
        Command::RemoveNode(name) => {
            graph.remove_node(name);
            None
        }
        Command::AddEdge { from, to, kind } => {
            graph.add_edge(from, to, kind)?;
            None
        }
        Command::RemoveEdge { from, to, kind } => {
            graph.remove_edge(from, to, kind);
            None
        }
        Command::HasEdge { from, to, kind } => Some(Output::Flag(graph.has_edge(from, to, kind))),
        Command::EdgesOfType(kind) => Some(Output::Pairs(graph.edges_of_type(kind))),
        Command::Print => Some(Output::Rendering(graph.to_string())),
    };
    Ok(output)
}

/// Parse and run a script against a fresh graph.
///
/// Parse errors abort before anything runs. Rejected graph input is
/// collected and the run continues.
pub fn run_script(source: &str) -> GraphResult<ScriptRun> {
    let commands = parse_script(source)?;

    let mut run = ScriptRun {
        graph: Graph::new(),
        outputs: Vec::new(),
        rejected: Vec::new(),
    };
    for (line, command) in &commands {
        match execute(&mut run.graph, command) {
            Ok(Some(output)) => run.outputs.push(output),
            Ok(None) => {}
            Err(e) => run.rejected.push((*line, e)),
        }
    }
    Ok(run)
}

/// Run a script file, or stdin when `path` is `-`.
pub fn cmd_run(path: &Path, json: bool, verbose: bool) -> GraphResult<()> {
    let source = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    report(&run_script(&source)?, json, verbose)
}

/// Run the built-in sample session.
pub fn cmd_demo(json: bool, verbose: bool) -> GraphResult<()> {
    report(&run_script(DEMO_SCRIPT)?, json, verbose)
}

fn report(run: &ScriptRun, json: bool, verbose: bool) -> GraphResult<()> {
    for (line, err) in &run.rejected {
        eprintln!("line {}: {}", line, err);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        writeln!(out, "{}", run.to_json()?)?;
    } else {
        run.write_text(&mut out)?;
    }
    out.flush()?;

    if verbose {
        eprintln!(
            "{} nodes, {} edges, {} rejected",
            run.graph.node_count(),
            run.graph.edge_count(),
            run.rejected.len()
        );
    }
    Ok(())
}
