//! Two cities, one plane route.

use kind_graph::*;

fn main() -> GraphResult<()> {
    let mut graph = Graph::new();

    graph.add_node("Auckland")?;
    graph.add_node("Christchurch")?;

    graph.add_edge("Auckland", "Christchurch", "Plane")?;

    println!("Graph:");
    graph.print()?;

    println!(
        "Has Edge: {}",
        graph.has_edge("Auckland", "Christchurch", "Plane")
    );
    println!("Plane routes: {}", graph.edges_of_type("Plane"));

    Ok(())
}
