mod output;

use leavitt::PathAlgebra;
use crate::output::Printer;

fn main() {
    let printer = Printer::new();
    printer.header("Weighted Leavitt Path Algebra");

    let mut algebra = PathAlgebra::new();

    // Add edges and vertices
    algebra.add_edge("v1", "v2", 2.5);
    algebra.add_edge("v2", "v3", 1.5);
    algebra.add_vertex("v1", 0.0);

    match algebra.propagate_all() {
        Ok(report) => {
            printer.success(&format!(
                "Propagated {} vertices ({} changed) in {:?}",
                report.vertices_visited,
                report.changed_vertices.len(),
                report.time_taken
            ));
        }
        Err(e) => {
            printer.error(&format!("Propagation failed: {}", e));
            std::process::exit(1);
        }
    }

    printer.subheader("Path weights");
    let mut names = algebra.vertex_names();
    names.sort();
    for name in &names {
        match algebra.weight(name) {
            Ok(weight) => printer.print_key_value(name, &format!("{:.2}", weight), 2),
            Err(e) => printer.error(&format!("{}", e)),
        }
    }

    match algebra.multiply("v1", "v2") {
        Ok(product) => printer.info(&format!("v1 * v2 = {}", product)),
        Err(e) => printer.error(&format!("Multiplication failed: {}", e)),
    }

    printer.subheader("Graphviz");
    println!("{}", algebra.to_dot());

    printer.subheader("Snapshot");
    match serde_json::to_string_pretty(&algebra.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => printer.error(&format!("Snapshot serialization failed: {}", e)),
    }
}
