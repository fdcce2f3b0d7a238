use std::fmt::Display;

use langcat::{DirectoryProvider, RegistryOptions, Translator, select_form};

/// Print one resolved message.
pub fn print_translation(
    dir: &str,
    options: RegistryOptions,
    lang: &str,
    key: &str,
    count: Option<u64>,
    args: &[String],
) {
    let translator = Translator::with_options(DirectoryProvider::new(dir), options);
    let args: Vec<&dyn Display> = args.iter().map(|a| a as &dyn Display).collect();

    let message = match count {
        Some(count) => translator.translate_plural_with(lang, key, count, &args),
        None => translator.translate_with(lang, key, &args),
    };
    println!("{}", message);
}

/// Print the plural form index each count selects in `lang`.
pub fn print_plural_forms(lang: &str, counts: &[u64]) -> Result<(), String> {
    for &count in counts {
        let index = select_form(lang, count).map_err(|e| e.to_string())?;
        println!("{} -> {}", count, index);
    }
    Ok(())
}
