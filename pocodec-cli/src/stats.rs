use pocodec::Catalog;
use serde_json::json;

pub fn print_stats(catalog: &Catalog, json_output: bool) {
    let stats = catalog.stats();

    if json_output {
        let body = json!({
            "language": catalog.header.language(),
            "total": stats.total,
            "translated": stats.translated,
            "untranslated": stats.untranslated,
            "fuzzy": stats.fuzzy,
            "plural": stats.plural,
            "completion_percent": stats.completion(),
        });
        match serde_json::to_string_pretty(&body) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Error serializing stats: {}", e),
        }
        return;
    }

    println!("=== Stats ===");
    if let Some(lang) = catalog.header.language() {
        println!("Language: {}", lang);
    }
    println!("Total: {}", stats.total);
    println!("  Translated: {}", stats.translated);
    println!("  Untranslated: {}", stats.untranslated);
    println!("  Fuzzy: {}", stats.fuzzy);
    println!("  Plural: {}", stats.plural);
    println!("Completion: {:.2}%", stats.completion());
}
