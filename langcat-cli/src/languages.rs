use langcat::available_languages;
use serde_json::json;

/// Print the supported languages with their plural form counts.
pub fn print_languages(json_output: bool) {
    let languages = available_languages();

    if json_output {
        let body: Vec<_> = languages
            .iter()
            .map(|d| {
                json!({
                    "id": d.id,
                    "name": d.name,
                    "rule": d.rule,
                    "forms": d.form_count(),
                })
            })
            .collect();
        match serde_json::to_string_pretty(&body) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Error serializing to JSON: {}", e),
        }
        return;
    }

    println!("=== Languages ===");
    for d in languages {
        println!("{:<18} {:<24} forms: {}", d.id, d.name, d.form_count());
    }
}
