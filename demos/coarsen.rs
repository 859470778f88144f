//! A miniature coarsening walkthrough: build a grid graph, color it,
//! split it into clusters, and report the exact cluster centers.
//!
//! Run with `cargo run --example coarsen`.

use amgraph::clustering::lloyd_cluster_exact;
use amgraph::coloring::vertex_coloring_mis;
use amgraph::csr::Csr;
use amgraph::mis::mis_serial;
use amgraph::traversal::connected_components;

fn main() {
    const ROWS: usize = 6;
    const COLS: usize = 8;
    let n = ROWS * COLS;

    let mut edges = Vec::new();
    for r in 0..ROWS {
        for c in 0..COLS {
            let v = r * COLS + c;
            if c + 1 < COLS {
                edges.push((v, v + 1, 1.0));
            }
            if r + 1 < ROWS {
                edges.push((v, v + COLS, 1.0));
            }
        }
    }
    let matrix: Csr<i32, f64> = Csr::from_edges(n, &edges).expect("valid edge list");
    let g = matrix.view();
    println!("{}x{} grid: {} vertices, {} stored edges", ROWS, COLS, n, g.num_edges());

    let mut components = vec![0i32; n];
    let k = connected_components(&g, &mut components).expect("component labeling");
    println!("connected components: {}", k);

    // Coarse/fine splitting: the selected vertices of a greedy MIS.
    let mut split = vec![0i32; n];
    let coarse = mis_serial(&g, 0, 1, 2, &mut split).expect("mis");
    println!("greedy MIS keeps {} of {} vertices as coarse points", coarse, n);

    let mut colors = vec![0i32; n];
    let num_colors = vertex_coloring_mis(&g, &mut colors).expect("coloring");
    println!("mis-peel coloring uses {} colors", num_colors);

    // Aggregate the grid into four clusters around spread-out seeds.
    let mut d = vec![0.0f64; n];
    let mut cm = vec![0i32; n];
    let mut centers = vec![0i32, (COLS - 1) as i32, ((ROWS - 1) * COLS) as i32, (n - 1) as i32];
    for pass in 1..=3 {
        lloyd_cluster_exact(&g, matrix.weights(), &mut d, &mut cm, &mut centers)
            .expect("lloyd pass");
        let sizes: Vec<usize> = (0..centers.len())
            .map(|a| cm.iter().filter(|&&x| x == a as i32).count())
            .collect();
        println!("lloyd pass {}: centers {:?}, cluster sizes {:?}", pass, centers, sizes);
    }

    println!("final aggregation:");
    for r in 0..ROWS {
        let row: Vec<String> = (0..COLS).map(|c| cm[r * COLS + c].to_string()).collect();
        println!("  {}", row.join(" "));
    }
}
