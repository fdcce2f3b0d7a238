use langcat::{DirectoryProvider, Registry, RegistryOptions, Report, validate_registry};
use serde::Serialize;
use serde_json::json;

/// Outcome of checking a translation directory.
#[derive(Debug, Serialize)]
pub struct CheckOutcome {
    pub reference: String,
    pub languages: usize,
    /// `(language, error)` for every language that failed to load.
    pub load_failures: Vec<(String, String)>,
    pub report: Report,
}

impl CheckOutcome {
    pub fn is_clean(&self) -> bool {
        self.load_failures.is_empty() && self.report.is_empty()
    }
}

/// Load every supported language from `dir` and validate the result.
///
/// Load failures are collected per language instead of aborting, so one
/// broken file does not hide problems elsewhere.
pub fn run_check(dir: &str, options: RegistryOptions) -> Result<CheckOutcome, String> {
    tracing::debug!(dir, reference = %options.reference_language, "checking translation directory");
    let reference = options.reference_language.clone();
    let registry = Registry::with_options(DirectoryProvider::new(dir), options);

    let load_failures: Vec<(String, String)> = registry
        .load_all()
        .into_iter()
        .filter_map(|(language, outcome)| outcome.err().map(|e| (language.to_string(), e.to_string())))
        .collect();

    let report = if load_failures.is_empty() {
        validate_registry(&registry).map_err(|e| e.to_string())?
    } else {
        Report::new()
    };

    Ok(CheckOutcome {
        reference,
        languages: registry.available_languages().len(),
        load_failures,
        report,
    })
}

/// Print a check outcome as text or JSON.
pub fn print_check(outcome: &CheckOutcome, json_output: bool) {
    if json_output {
        let body = json!({
            "reference": outcome.reference,
            "languages": outcome.languages,
            "load_failures": outcome
                .load_failures
                .iter()
                .map(|(language, error)| json!({"language": language, "error": error}))
                .collect::<Vec<_>>(),
            "issues": outcome.report.issues(),
        });
        match serde_json::to_string_pretty(&body) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Error serializing to JSON: {}", e),
        }
        return;
    }

    println!("=== Check ===");
    println!("Reference: {}", outcome.reference);
    println!("Languages: {}", outcome.languages);

    if !outcome.load_failures.is_empty() {
        println!("Load failures: {}", outcome.load_failures.len());
        for (language, error) in &outcome.load_failures {
            println!("  lang='{}': {}", language, error);
        }
        return;
    }

    println!("Issues: {}", outcome.report.len());
    for issue in outcome.report.issues() {
        println!("  {}", issue);
    }
}
