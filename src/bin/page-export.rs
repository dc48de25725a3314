use pagewright::custom::CustomStore;
use pagewright::document::Document;
use pagewright::{export_html, import_json, BuilderError, EditorConfig};
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: page-export <page.json> [output.html]");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  page-export page.json              # HTML to stdout");
        eprintln!("  page-export page.json index.html   # HTML to file");
        process::exit(1);
    }

    let input = &args[1];
    let output = args.get(2);

    let html = match export_file(input) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("✗ {} has errors:", input);
            print_error(&e);
            process::exit(1);
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, &html) {
                eprintln!("✗ Failed to write {}: {}", path, e);
                process::exit(1);
            }
            println!("✓ {} exported to {}", input, path);
        }
        None => {
            println!("{}", html);
        }
    }
}

fn export_file(path: &str) -> Result<String, BuilderError> {
    let content = fs::read_to_string(path)
        .map_err(|e| BuilderError::InvalidPage(format!("Failed to read file: {}", e)))?;

    let envelope = import_json(&content)?;
    let document = Document::from_components(envelope.components);
    let custom = CustomStore::from_components(envelope.custom_components);
    let config = EditorConfig::default();

    Ok(export_html(
        &document,
        &custom,
        &envelope.metadata.title,
        &config,
    ))
}

fn print_error(error: &BuilderError) {
    match error {
        BuilderError::UnknownComponentType { type_tag } => {
            eprintln!("  Unknown component type '{}'", type_tag);
        }
        BuilderError::UnknownInstance { id } => {
            eprintln!("  Unknown component instance '{}'", id);
        }
        BuilderError::InvalidCustomComponent { reason } => {
            eprintln!("  Invalid custom component:");
            eprintln!("    {}", reason);
        }
        BuilderError::InvalidPage(msg) => {
            eprintln!("  Invalid page:");
            eprintln!("    {}", msg);
        }
        BuilderError::Serialization(msg) => {
            eprintln!("  Serialization error:");
            eprintln!("    {}", msg);
        }
        e => {
            eprintln!("  {}", e);
        }
    }
}
