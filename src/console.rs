//! Interactive route finder
//!
//! Reads answers line by line, so a session can be driven from a terminal or
//! a piped transcript. End of input ends the session.

use std::io::{BufRead, Write};

use campusnav_core::{Algorithm, CampusGraph, find_path};
use tracing::debug;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::routing::{format_route, write_floor_plans};

pub struct Console<'a, R, W> {
    graph: &'a CampusGraph,
    config: &'a AppConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(graph: &'a CampusGraph, config: &'a AppConfig, input: R, output: W) -> Self {
        Self {
            graph,
            config,
            input,
            output,
        }
    }

    /// Runs searches until the user declines another one or input ends
    pub fn run(&mut self) -> Result<(), AppError> {
        writeln!(
            self.output,
            "Campus route finder: {} nodes, {} corridors",
            self.graph.node_count(),
            self.graph.edge_count()
        )?;

        while self.search()? {}

        writeln!(self.output, "Goodbye.")?;
        self.output.flush()?;
        Ok(())
    }

    /// One search round; `false` ends the session
    fn search(&mut self) -> Result<bool, AppError> {
        let Some(start) = self.prompt("Start point (e.g. 12 or SPORT): ")? else {
            return Ok(false);
        };
        let Some(end) = self.prompt("End point (e.g. LIB): ")? else {
            return Ok(false);
        };

        if !self.graph.node_exists(&start) || !self.graph.node_exists(&end) {
            writeln!(
                self.output,
                "Node not found in the building. Check the names and try again."
            )?;
            return self.confirm("Try again? (yes/no): ");
        }

        let default = self.config.default_algorithm;
        let question = format!("Algorithm [dijkstra/astar] (Enter = {default}): ");
        let Some(name) = self.prompt(&question)? else {
            return Ok(false);
        };
        let algorithm = Algorithm::parse_or(&name, default);

        let route = match find_path(self.graph, &start, &end, algorithm) {
            Ok(route) => route,
            Err(e) if e.is_query_error() => {
                writeln!(self.output, "Search failed: {e}")?;
                return self.confirm("Try again? (yes/no): ");
            }
            Err(e) => return Err(e.into()),
        };
        writeln!(self.output, "{}", format_route(self.graph, &route))?;

        if self.confirm("Show floor plans? (yes/no): ")? {
            let written = write_floor_plans(
                self.graph,
                Some(&route),
                &self.config.render_dir,
                self.config.draw_weights,
                None,
            )?;
            writeln!(self.output, "Saved floor plans:")?;
            for path in written {
                writeln!(self.output, "  {}", path.display())?;
            }
        }

        self.confirm("New search? (yes/no): ")
    }

    /// Prints `text` and reads a trimmed line, `None` at end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            debug!("Console input closed");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn confirm(&mut self, text: &str) -> Result<bool, AppError> {
        Ok(self.prompt(text)?.is_some_and(|answer| is_yes(&answer)))
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use campusnav_core::{LoaderConfig, build_graph, sample_campus};

    fn campus() -> CampusGraph {
        build_graph(&sample_campus(), &LoaderConfig::strict()).unwrap()
    }

    fn session(graph: &CampusGraph, config: &AppConfig, input: &str) -> String {
        let mut output = Vec::new();
        Console::new(graph, config, Cursor::new(input), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_single_search() {
        let graph = campus();
        let transcript = session(&graph, &AppConfig::default(), "SPORT\nLIB\n\nno\nno\n");

        assert!(transcript.starts_with("Campus route finder: 57 nodes"));
        assert!(transcript.contains("(Enter = dijkstra)"));
        assert!(transcript.contains("Route: Gym -> Assembly -> Lobby -> SL1 -> SL2 -> Library"));
        assert!(transcript.contains("Length: 20.00"));
        assert!(transcript.ends_with("Goodbye.\n"));
    }

    #[test]
    fn test_unknown_node_then_retry() {
        let graph = campus();
        let transcript = session(
            &graph,
            &AppConfig::default(),
            "SPORT\nROOF\nyes\n1\n2\nastar\nno\nno\n",
        );

        assert!(transcript.contains("Node not found in the building"));
        assert!(transcript.contains("Route: 1 -> 2"));
        assert!(transcript.contains("Length: 2.00"));
        assert!(transcript.contains("Algorithm: A*"));
    }

    #[test]
    fn test_unknown_algorithm_uses_default() {
        let graph = campus();
        let config = AppConfig {
            default_algorithm: Algorithm::AStar,
            ..AppConfig::default()
        };
        let transcript = session(&graph, &config, "1\n3\nbfs\nno\nno\n");

        assert!(transcript.contains("Algorithm: A*"));
        assert!(transcript.contains("Length: 4.00"));
    }

    #[test]
    fn test_floor_plans_saved() {
        let graph = campus();
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            render_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        };
        let transcript = session(&graph, &config, "LIB\n19\n\ny\nno\n");

        assert!(transcript.contains("Saved floor plans:"));
        assert!(dir.path().join("floor-2.svg").is_file());
        assert!(dir.path().join("all-floors.svg").is_file());
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let graph = campus();
        for input in ["", "SPORT\n", "SPORT\nLIB\n", "SPORT\nLIB\n\n"] {
            let transcript = session(&graph, &AppConfig::default(), input);
            assert!(transcript.ends_with("Goodbye.\n"), "input {input:?}");
        }
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("yes"));
        assert!(is_yes("Y"));
        assert!(!is_yes("no"));
        assert!(!is_yes(""));
    }
}
