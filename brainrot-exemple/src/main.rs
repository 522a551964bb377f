use std::env;

use brainrot_core::{Corpus, RotOptions, Rottifier};
use log::info;

/// Corpus used when no path is given on the command line.
const DEFAULT_CORPUS: &str = "./data/rotten_data.json";

/// Parses the optional JSON options argument.
fn parse_options(arg: Option<&str>) -> Result<Option<RotOptions>, serde_json::Error> {
    arg.map(|json| serde_json::from_str(json)).transpose()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG=debug to see how many phrases get spliced
    env_logger::init();

    // Usage: brainrot-exemple [corpus.json] ['{"rotLevel": 8, "includeSlang": ["GenZ"]}']
    let corpus_path = env::args().nth(1).unwrap_or_else(|| DEFAULT_CORPUS.to_owned());
    let user_options = parse_options(env::args().nth(2).as_deref())?;

    // Load the corpus once; a missing or broken file falls back to the
    // embedded corpus (a warning is logged)
    let corpus = Corpus::load_or_default(&corpus_path);
    info!("Corpus ready with {} entries", corpus.len());

    // Strict loading is also available when the fallback is not wanted
    match Corpus::load("./data/missing.json") {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Strict load failed as expected: {e}"),
    }

    let rottifier = Rottifier::new(&corpus);

    // No text: a random phrase built from GenZ and Millennial slang
    println!("Random phrase: {}", rottifier.transform(None, None));

    // Options can be built in code...
    let options = RotOptions::new()
        .with_rot_level(8)
        .with_slang("GenZ")
        .with_slang("Millennial")
        .with_symbols(true);
    println!("Random phrase (GenZ + Millennial + symbols): {}", rottifier.transform(None, Some(&options)));

    // Rot level 15 is clamped to 10, 0 means "default" (5)
    let options = RotOptions::new()
        .with_rot_level(15)
        .with_dread(true)
        .with_internet_noise(true);
    for i in 0..5 {
        println!(
            "Rottified {}: {}",
            i + 1,
            rottifier.transform(Some("I have a meeting at nine tomorrow morning"), Some(&options))
        );
    }

    // Options given on the command line, as JSON
    if let Some(options) = &user_options {
        println!("With your options: {}", rottifier.transform(None, Some(options)));
        println!(
            "With your options: {}",
            rottifier.transform(Some("I have a meeting at nine tomorrow morning"), Some(options))
        );
    }

    // Without any flag the text is only perturbed letter by letter
    println!("Perturbed only: {}", rottifier.transform(Some("Hello world"), None));

    Ok(())
}
