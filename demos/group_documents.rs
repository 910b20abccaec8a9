use sheaf::{Clusterer, Document, Linkage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Minimal end-to-end: documents -> TF-IDF vectors -> dendrogram ->
    // balanced partition. Two obvious topics plus one same-site pair.
    let docs = vec![
        Document {
            url: Some("https://blog.rust-lang.org/edition".into()),
            ..Document::new("tab-1", "rust edition guide borrow checker async")
        },
        Document {
            url: Some("https://blog.rust-lang.org/cargo".into()),
            ..Document::new("tab-2", "cargo workspace features build profiles")
        },
        Document::new("tab-3", "sourdough starter hydration baking schedule"),
        Document::new("tab-4", "bread proofing temperature crumb structure baking"),
        Document::new("tab-5", "orbital mechanics hohmann transfer delta v"),
    ];

    let grouping = Clusterer::new(2)
        .with_linkage(Linkage::Complete)
        .cluster(&docs)?;

    println!("levels:");
    for (i, level) in grouping.dendrogram.levels().iter().enumerate() {
        match level.merge {
            Some(m) => println!("  {i}: merged at {:.4} -> {:?}", m.distance, level.clusters),
            None => println!("  {i}: initial {:?}", level.clusters),
        }
    }

    println!("balanced partition (level {}):", grouping.chosen_level);
    for group in grouping.partition() {
        println!("  {group:?}");
    }

    Ok(())
}
