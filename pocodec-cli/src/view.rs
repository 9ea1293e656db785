use pocodec::{Catalog, CommentKind, Entry};

const TRUNCATE_AT: usize = 60;

fn display_value(value: &str, full: bool) -> String {
    if full || value.chars().count() <= TRUNCATE_AT {
        value.to_string()
    } else {
        let truncated: String = value.chars().take(TRUNCATE_AT).collect();
        format!("{}...", truncated)
    }
}

fn print_entry(index: usize, entry: &Entry, full: bool) {
    println!("\n  Entry {}: {}", index, display_value(&entry.msgid, full));
    if !entry.msgctxt.is_empty() {
        println!("    Context: {}", entry.msgctxt);
    }
    if !entry.msgid_plural.is_empty() {
        println!("    Plural ID: {}", display_value(&entry.msgid_plural, full));
    }
    if entry.msgstr_plural.is_empty() {
        println!("    Value: {}", display_value(&entry.msgstr, full));
    } else {
        for (slot, value) in entry.msgstr_plural.iter().enumerate() {
            println!("    Value[{}]: {}", slot, display_value(value, full));
        }
    }
    let flags = entry.flags();
    if !flags.is_empty() {
        println!("    Flags: {}", flags.join(", "));
    }
    for reference in entry.comments_of(CommentKind::Reference) {
        println!("    Reference: {}", reference.payload);
    }
}

/// Print the header metadata and every message of a catalog.
pub fn print_view(catalog: &Catalog, full: bool) {
    println!("=== Header ===");
    let mut keys: Vec<_> = catalog.header.metadata.keys().collect();
    keys.sort();
    for key in keys {
        println!("{}: {}", key, catalog.header.metadata[key]);
    }

    let messages: Vec<_> = catalog.entries.iter().filter(|e| e.is_message()).collect();
    println!("\n=== Entries ({}) ===", messages.len());
    for (i, entry) in messages.iter().enumerate() {
        print_entry(i + 1, entry, full);
    }
}
