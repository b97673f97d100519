use std::env;
use std::fs;
use std::path::Path;
use std::process;

use smo_descriptors::error::ErrorFormatter;
use smo_descriptors::{
    build_service_object, Config, DescriptorError, ErrorCollection, ServiceObjectDefinition,
};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut config = Config::default();
    let mut input_file = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--strict" => config.strict_names = true,
            "--compact" => config.pretty = false,
            "--site-url" => config.site_url_on_every_method = true,
            "--debug" => smo_descriptors::debug::enable_debug(),
            other if input_file.is_none() && !other.starts_with("--") => {
                input_file = Some(other.to_string())
            }
            _ => usage_and_exit(&args[0]),
        }
    }

    let Some(input_file) = input_file else {
        usage_and_exit(&args[0]);
    };

    let source = match fs::read_to_string(&input_file) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("Error reading file '{}': {}", input_file, err);
            process::exit(1);
        }
    };

    let definition = match ServiceObjectDefinition::from_json(&source) {
        Ok(definition) => definition,
        Err(err) => fail(&err, &source, &input_file),
    };

    let service_object = match build_service_object(&definition, &config) {
        Ok((service_object, warnings)) => {
            print_warnings(&warnings);
            service_object
        }
        Err(errors) => {
            print_warnings(&errors);
            for error in errors.errors() {
                let formatter = ErrorFormatter::new(error, &source).with_filename(&input_file);
                eprintln!("{}\n", formatter.format());
            }
            eprintln!(
                "\n{} error(s), {} warning(s)",
                errors.error_count(),
                errors.warning_count()
            );
            process::exit(1);
        }
    };

    let json = if config.pretty {
        serde_json::to_string_pretty(&service_object)
    } else {
        serde_json::to_string(&service_object)
    };
    let json = match json {
        Ok(json) => json,
        Err(err) => fail(&DescriptorError::from(err), &source, &input_file),
    };

    let output_file = output_path(&input_file);
    match fs::write(&output_file, json) {
        Ok(_) => println!(
            "Successfully built '{}' from '{}' into '{}'",
            service_object.name, input_file, output_file
        ),
        Err(err) => {
            eprintln!("Error writing output file '{}': {}", output_file, err);
            process::exit(1);
        }
    }
}

fn output_path(input_file: &str) -> String {
    let path = Path::new(input_file);
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| input_file.to_string());
    path.with_file_name(format!("{}.descriptor.json", stem))
        .to_string_lossy()
        .into_owned()
}

fn print_warnings(diagnostics: &ErrorCollection) {
    if diagnostics.has_warnings() {
        eprintln!("{}", warning_report(diagnostics));
    }
}

fn warning_report(diagnostics: &ErrorCollection) -> String {
    diagnostics
        .warnings()
        .iter()
        .map(|warning| format!("warning: {}\n", warning))
        .collect()
}

fn fail(error: &DescriptorError, source: &str, input_file: &str) -> ! {
    eprintln!(
        "{}",
        ErrorFormatter::new(error, source)
            .with_filename(input_file)
            .format()
    );
    process::exit(1);
}

fn usage_and_exit(program: &str) -> ! {
    eprintln!(
        "Usage: {} [--strict] [--compact] [--site-url] [--debug] <definition.json>",
        program
    );
    process::exit(1);
}
